use structbit_buf::{BitBuffer, Error};

#[test]
fn empty_construction() {
    let buf = BitBuffer::new();

    assert_eq!(buf.len(), 0);
    assert!(buf.is_empty());
    assert_eq!(buf.bit_offset(), 0);
    assert!(buf.as_bytes().is_empty());
}

#[test]
fn from_bytes_spans_full_capacity() {
    let buf = BitBuffer::from_bytes(vec![0; 6]);

    assert_eq!(buf.len(), 48);
    assert_eq!(buf.bit_offset(), 0);

    let buf = BitBuffer::from(vec![0xFF]);
    assert_eq!(buf.len(), 8);
}

#[test]
fn with_window_validates_bounds() {
    assert!(BitBuffer::with_window(vec![0; 2], 4, 12).is_ok());
    assert_eq!(
        BitBuffer::with_window(vec![0; 2], 8, 9).unwrap_err(),
        Error::OutOfRange {
            index: 16,
            capacity: 16,
        },
    );
}

#[test]
fn parse_round_trips() {
    for s in [
        "1010",
        "10101",
        "1010101010101010",
        "10101010101010101",
        "10101010101010101010101010101010",
        "101010101010101010101010101010101",
        "1010101010101010101010101010101010101010101010101010101010101010",
        "10101010101010101010101010101010101010101010101010101010101010101",
    ] {
        assert_eq!(BitBuffer::parse(s).unwrap().to_string(), s);
    }
}

#[test]
fn parse_storage_layout() -> anyhow::Result<()> {
    // The last eight characters form the first storage byte.
    let buf = BitBuffer::parse("10101010")?;
    assert_eq!(buf.as_bytes(), [0xAA]);

    let buf = BitBuffer::parse("100000000")?;
    assert_eq!(buf.as_bytes(), [0x00, 0x01]);
    assert_eq!(buf.len(), 9);
    assert_eq!(buf.bit_offset(), 0);

    Ok(())
}

#[test]
fn parse_empty_string() {
    let buf = BitBuffer::parse("").unwrap();

    assert_eq!(buf.len(), 0);
    assert!(buf.as_bytes().is_empty());
    assert_eq!(buf.to_string(), "");
}

#[test]
fn parse_rejects_foreign_characters() {
    assert_eq!(
        BitBuffer::parse("10102").unwrap_err(),
        Error::InvalidInput {
            character: '2',
            position: 4,
        },
    );
    assert!(BitBuffer::parse("yes").is_err());
}

#[test]
fn from_str_matches_parse() -> anyhow::Result<()> {
    let parsed = BitBuffer::parse("100101110")?;
    let from_str: BitBuffer = "100101110".parse()?;

    assert_eq!(parsed.as_bytes(), from_str.as_bytes());
    assert_eq!(parsed.len(), from_str.len());

    Ok(())
}

#[test]
fn raw_bit_reads() {
    let buf = BitBuffer::from_bytes(vec![0b1010_1010]);
    for index in 0..8 {
        assert_eq!(buf.bit(index).unwrap(), index % 2 == 1);
    }

    assert_eq!(
        buf.bit(8).unwrap_err(),
        Error::OutOfRange {
            index: 8,
            capacity: 8,
        },
    );
}

#[test]
fn raw_bit_writes() {
    let mut buf = BitBuffer::from_bytes(vec![0]);

    buf.set_bit(0).unwrap();
    assert_eq!(buf.as_bytes(), [1]);
    buf.set_bit(2).unwrap();
    assert_eq!(buf.as_bytes(), [5]);
    buf.set_bit(4).unwrap();
    assert_eq!(buf.as_bytes(), [21]);
    buf.set_bit(6).unwrap();
    assert_eq!(buf.as_bytes(), [85]);

    assert!(buf.set_bit(8).is_err());
}

#[test]
fn raw_writes_are_window_visible() {
    let mut buf = BitBuffer::parse("10101010").unwrap();
    assert_eq!(buf.to_string(), "10101010");

    // Raw bit 0 is the least significant storage bit, i.e. the
    // last character of the rendered window.
    buf.set_bit(0).unwrap();
    assert_eq!(buf.to_string(), "10101011");
}

#[test]
fn packed_reads() {
    let buf = BitBuffer::from_bytes(vec![0xCD, 0xAB]);

    assert_eq!(buf.bits::<u8>(0, 4).unwrap(), 0xD);
    assert_eq!(buf.bits::<u8>(4, 4).unwrap(), 0xC);
    assert_eq!(buf.bits::<u16>(0, 16).unwrap(), 0xABCD);
    assert_eq!(buf.bits::<u16>(4, 8).unwrap(), 0xBC);
}

#[test]
fn packed_read_clamps_to_length() {
    let buf = BitBuffer::from_bytes(vec![0xCD, 0xAB]);

    // 64 requested bits clamp to the 16 bits of the window.
    assert_eq!(buf.bits::<u32>(0, 64).unwrap(), 0xABCD);
}

#[test]
fn packed_read_bounds() {
    let buf = BitBuffer::from_bytes(vec![0xCD, 0xAB]);

    // The clamped width must still fit the target type.
    assert_eq!(
        buf.bits::<u8>(0, 12).unwrap_err(),
        Error::OutOfRange {
            index: 11,
            capacity: 8,
        },
    );

    // And the range must stay within the storage.
    assert_eq!(
        buf.bits::<u16>(8, 16).unwrap_err(),
        Error::OutOfRange {
            index: 23,
            capacity: 16,
        },
    );
}

#[test]
fn packed_writes() {
    let mut buf = BitBuffer::from_bytes(vec![0; 2]);

    buf.set_bits(0xAB_u8, 4, 8).unwrap();
    assert_eq!(buf.as_bytes(), [0xB0, 0x0A]);

    // Neighboring bits keep their contents.
    buf.set_bits(0xF_u8, 0, 4).unwrap();
    assert_eq!(buf.as_bytes(), [0xBF, 0x0A]);
}

#[test]
fn packed_write_zero_extends() {
    let mut buf = BitBuffer::from_bytes(vec![0xFF; 2]);

    // Source bits past the value type's width are zero.
    buf.set_bits(0x5_u8, 0, 12).unwrap();
    assert_eq!(buf.as_bytes(), [0x05, 0xF0]);
}

#[test]
fn packed_write_fails_atomically() {
    let mut buf = BitBuffer::from_bytes(vec![0; 2]);

    assert!(buf.set_bits(0xFF_u8, 12, 8).is_err());
    assert_eq!(buf.as_bytes(), [0, 0]);
}

#[test]
fn display_renders_the_window() {
    let buf = BitBuffer::with_window(vec![0xF0, 0x0F], 4, 8).unwrap();
    assert_eq!(buf.to_string(), "11111111");

    let buf = BitBuffer::from_bytes(vec![0; 6]);
    assert_eq!(buf.to_string(), "0".repeat(48));
}

#[test]
fn storage_conversions() {
    let buf = BitBuffer::parse("100000000").unwrap();

    assert_eq!(buf.as_bytes(), [0x00, 0x01]);
    assert_eq!(buf.to_bytes(), vec![0x00, 0x01]);
    assert_eq!(buf.into_bytes(), vec![0x00, 0x01]);
}
