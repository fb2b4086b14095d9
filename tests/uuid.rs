use bleadv::btuuid::{
    bluetooth_uuid_from_u16, bluetooth_uuid_from_u32, expand_uuid, format_uuid, reversed, BLUETOOTH_BASE_UUID,
};
use bleadv::error::ErrorKind;

#[test]
fn sixteen_byte_uuids_are_dash_grouped() {
    let bytes: Vec<u8> = (0..16).collect();
    let uuid = format_uuid(&bytes).unwrap();
    assert_eq!(uuid.len(), 36);
    assert_eq!(uuid, "00010203-0405-0607-0809-0a0b0c0d0e0f");
    for i in [8, 13, 18, 23] {
        assert_eq!(uuid.as_bytes()[i], b'-');
    }
}

#[test]
fn short_uuids_have_no_dashes() {
    assert_eq!(format_uuid(&[0x18, 0x0d]).unwrap(), "180d");
    assert_eq!(format_uuid(&[0x12, 0x34, 0x56, 0x78]).unwrap(), "12345678");
}

#[test]
fn formatting_is_lowercase() {
    assert_eq!(format_uuid(&[0xab, 0xcd]).unwrap(), "abcd");
    assert_eq!(format_uuid(&[0xde, 0xad, 0xbe, 0xef]).unwrap(), "deadbeef");
}

#[test]
fn zero_bytes_keep_their_width() {
    assert_eq!(format_uuid(&[0x00, 0x4c]).unwrap(), "004c");
}

#[test]
fn other_lengths_fail_with_invalid_length() {
    for len in [0, 1, 3, 5, 15, 17] {
        let err = format_uuid(&vec![0u8; len]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidLength);
    }
}

#[test]
fn reversal_is_an_involution() {
    let cases: [&[u8]; 4] = [&[], &[0x01], &[0x01, 0x02, 0x03], &[0xff; 16]];
    for bytes in cases {
        assert_eq!(reversed(&reversed(bytes)), bytes);
    }
}

#[test]
fn reversing_empty_input_is_a_no_op() {
    assert!(reversed(&[]).is_empty());
}

#[test]
fn reversal_flips_byte_order() {
    assert_eq!(reversed(&[0x4c, 0x00]), [0x00, 0x4c]);
}

#[test]
fn short_uuid_strings_expand_onto_the_base_uuid() {
    let uuid = expand_uuid("180d").unwrap();
    assert_eq!(uuid, bluetooth_uuid_from_u16(0x180d));
    assert_eq!(uuid.as_u128() & ((1 << 96) - 1), BLUETOOTH_BASE_UUID);

    assert_eq!(expand_uuid("12345678").unwrap(), bluetooth_uuid_from_u32(0x12345678));
}

#[test]
fn full_uuid_strings_parse_directly() {
    let uuid = expand_uuid("6e400001-b5a3-f393-e0a9-e50e24dcca9e").unwrap();
    assert_eq!(uuid.to_string(), "6e400001-b5a3-f393-e0a9-e50e24dcca9e");
}

#[test]
fn non_canonical_strings_do_not_expand() {
    assert_eq!(expand_uuid(""), None);
    assert_eq!(expand_uuid("180"), None);
    assert_eq!(expand_uuid("zzzz"), None);
}
