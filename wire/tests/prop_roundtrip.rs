use proptest::prelude::*;
use wire::{WireReader, WireWriter, MAX_STRING_BYTES};

#[derive(Clone, Debug)]
enum Op {
    Bit(bool),
    Byte(u8),
    Word(u16),
    Dword(u32),
    // Stored as the bit pattern so NaN payloads and subnormals are covered.
    Float(u32),
    Bytes(Vec<u8>),
    Text(String),
}

fn op_bits(op: &Op) -> usize {
    match op {
        Op::Bit(_) => 1,
        Op::Byte(_) => 8,
        Op::Word(_) => 16,
        Op::Dword(_) | Op::Float(_) => 32,
        Op::Bytes(data) => data.len() * 8,
        Op::Text(text) => 32 + text.len() * 8,
    }
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        any::<bool>().prop_map(Op::Bit),
        any::<u8>().prop_map(Op::Byte),
        any::<u16>().prop_map(Op::Word),
        any::<u32>().prop_map(Op::Dword),
        any::<u32>().prop_map(Op::Float),
        prop::collection::vec(any::<u8>(), 0..16).prop_map(Op::Bytes),
        ".{0,12}".prop_map(Op::Text),
    ]
}

proptest! {
    #[test]
    fn prop_roundtrip_ops(ops in prop::collection::vec(op_strategy(), 1..48)) {
        let total_bits: usize = ops.iter().map(op_bits).sum();
        let mut writer = WireWriter::new(total_bits.div_ceil(8));

        for op in &ops {
            match op {
                Op::Bit(value) => writer.write_bit(*value).unwrap(),
                Op::Byte(value) => writer.write_byte(*value).unwrap(),
                Op::Word(value) => writer.write_word(*value).unwrap(),
                Op::Dword(value) => writer.write_dword(*value).unwrap(),
                Op::Float(bits) => writer.write_float(f32::from_bits(*bits)).unwrap(),
                Op::Bytes(data) => writer.write_bytes(data).unwrap(),
                Op::Text(text) => writer.write_string(text).unwrap(),
            }
        }
        prop_assert_eq!(writer.used_bits(), total_bits);

        let bytes = writer.copy_used();
        let mut reader = WireReader::from_slice(&bytes);

        for op in &ops {
            match op {
                Op::Bit(value) => prop_assert_eq!(reader.read_bit().unwrap(), *value),
                Op::Byte(value) => prop_assert_eq!(reader.read_byte().unwrap(), *value),
                Op::Word(value) => prop_assert_eq!(reader.read_word().unwrap(), *value),
                Op::Dword(value) => prop_assert_eq!(reader.read_dword().unwrap(), *value),
                Op::Float(bits) => {
                    prop_assert_eq!(reader.read_float().unwrap().to_bits(), *bits);
                }
                Op::Bytes(data) => prop_assert_eq!(&reader.read_bytes(data.len()).unwrap(), data),
                Op::Text(text) => {
                    prop_assert_eq!(&reader.read_string(MAX_STRING_BYTES).unwrap(), text);
                }
            }
        }
        prop_assert_eq!(reader.used_bits(), total_bits);
    }

    #[test]
    fn prop_failed_reads_keep_cursor(data in prop::collection::vec(any::<u8>(), 0..8)) {
        // Whatever the buffer holds, a read that does not fit fails without
        // moving the cursor.
        let mut reader = WireReader::from_slice(&data);
        let _ = reader.read_bit();
        let used = reader.used_bits();
        if reader.bits_remaining() < 64 {
            prop_assert!(reader.read_dwords(2).is_err());
            prop_assert_eq!(reader.used_bits(), used);
        }
    }
}
