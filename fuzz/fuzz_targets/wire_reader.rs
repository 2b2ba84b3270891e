#![no_main]

use libfuzzer_sys::fuzz_target;
use wire::WireReader;

fuzz_target!(|data: &[u8]| {
    let mut reader = WireReader::from_slice(data);
    let mut idx = 0usize;

    // Use input bytes to drive a bounded sequence of operations.
    while idx < data.len() && idx < 1024 {
        let op = data[idx] % 8;
        idx += 1;

        match op {
            0 => {
                let _ = reader.read_bit();
            }
            1 => {
                let _ = reader.read_byte();
            }
            2 => {
                let _ = reader.read_word();
            }
            3 => {
                let _ = reader.read_dword();
            }
            4 => {
                let _ = reader.read_float();
            }
            5 => {
                let count = usize::from(data[idx.saturating_sub(1)] % 32);
                let _ = reader.read_bytes(count);
            }
            6 => {
                let count = usize::from(data[idx.saturating_sub(1)] % 8);
                let _ = reader.read_dwords(count);
            }
            _ => {
                let _ = reader.read_string(wire::MAX_STRING_BYTES);
            }
        }
    }
});
