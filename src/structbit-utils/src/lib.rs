//! Shared code for the structbit project.

#![deny(rust_2018_idioms, rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub use tracing;

pub mod mem;
