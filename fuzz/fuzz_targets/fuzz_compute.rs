#![no_main]

use libfuzzer_sys::fuzz_target;

use ctacc_core::calculator::compute;
use ctacc_core::catalog::{Role, ScannerSpec};

fn f64_at(data: &[u8], offset: usize) -> f64 {
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&data[offset..offset + 8]);
    f64::from_le_bytes(bytes)
}

fuzz_target!(|data: &[u8]| {
    // 8 bytes of length, then 16 bytes (a, b) per entry
    if data.len() < 24 {
        return;
    }
    let length = f64_at(data, 0);
    let catalog: Vec<ScannerSpec> = data[8..]
        .chunks_exact(16)
        .take(32)
        .enumerate()
        .map(|(i, chunk)| {
            let role = if i == 0 { Role::Reference } else { Role::Competitor };
            ScannerSpec::new(format!("s{i}"), "m", f64_at(chunk, 0), f64_at(chunk, 8), role)
        })
        .collect();

    let Ok(results) = compute(&catalog, length) else {
        return;
    };
    assert_eq!(results.len(), catalog.len());
    for pair in results.windows(2) {
        // NaN totals are ordered by total_cmp as well
        assert!(pair[0].total_error.total_cmp(&pair[1].total_error).is_le());
    }
});
