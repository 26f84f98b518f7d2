#![no_main]

use libfuzzer_sys::fuzz_target;

use intcalc_core::{calculate, CalcError};

fuzz_target!(|data: &[u8]| {
    if data.len() < 32 {
        return;
    }
    let read = |i: usize| {
        let mut buf = [0u8; 8];
        buf.copy_from_slice(&data[i * 8..i * 8 + 8]);
        f64::from_le_bytes(buf)
    };
    let (p, r, t, n) = (read(0), read(1), read(2), read(3));

    match calculate(p, r, t, n) {
        Ok(result) => {
            assert!(result.total.is_finite());
            assert!(result.total >= result.principal);
        }
        Err(CalcError::InvalidPrincipal) => assert!(!(p.is_finite() && p > 0.0)),
        Err(_) => {}
    }
});
