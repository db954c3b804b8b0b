#![no_main]

use libfuzzer_sys::fuzz_target;

use ctacc_core::range::LengthRange;

fuzz_target!(|data: &[u8]| {
    if data.len() < 8 {
        return;
    }
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&data[..8]);
    let value = f64::from_le_bytes(bytes);

    let range = LengthRange::default();
    match range.clamp(value) {
        Ok(length) => {
            assert!(length >= range.min && length <= range.max, "{value} -> {length}");
            assert_eq!(range.clamp(length).ok(), Some(length));
        }
        Err(_) => assert!(!value.is_finite() || value < 0.0),
    }
});
