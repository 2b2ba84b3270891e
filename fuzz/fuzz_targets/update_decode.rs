#![no_main]

use codec::{decode_update_bytes, CodecLimits};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Must never panic or allocate past the limits, whatever the input.
    let _ = decode_update_bytes(data, &CodecLimits::default());
});
