#![no_main]

use libfuzzer_sys::fuzz_target;

use intcalc_core::calculate_str;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    // Split into up to four fields on '|'
    let mut fields = text.splitn(4, '|');
    let principal = fields.next().unwrap_or("");
    let rate = fields.next().unwrap_or("");
    let time = fields.next().unwrap_or("");
    let compound = fields.next().unwrap_or("");

    // Should not panic; valid results never lose money
    if let Ok(result) = calculate_str(principal, rate, time, compound) {
        assert!(result.total >= result.principal);
        assert!(result.interest >= 0.0);
    }
});
