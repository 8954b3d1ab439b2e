#![no_main]

use libfuzzer_sys::fuzz_target;

use fibseq_core::snapshot::parse_snapshot;
use fibseq_core::Terms;

fuzz_target!(|data: &[u8]| {
    let Ok(raw) = std::str::from_utf8(data) else {
        return;
    };
    // Cap the size so reconstruction stays fast
    if raw.len() > 4096 {
        return;
    }

    // Should not panic; any accepted snapshot must reconstruct to a summing pair
    if let Ok(current) = parse_snapshot(raw) {
        let mut terms = Terms::from_current(current);
        assert_eq!(terms.next, &terms.current + &terms.previous);
        assert!(terms.current >= terms.previous);
        terms.advance();
        assert_eq!(terms.next, &terms.current + &terms.previous);
    }
});
