#![no_main]

use libfuzzer_sys::fuzz_target;
use testrun_rs::discovery::glob_to_regex;

fuzz_target!(|data: &[u8]| {
    let pattern = String::from_utf8_lossy(data);

    // Escaping must keep every glob compilable
    let regex = match glob_to_regex(&pattern) {
        Ok(regex) => regex,
        // Oversized patterns may exceed the regex size limit
        Err(_) => return,
    };

    // A glob without wildcards only matches itself
    if !pattern.contains('*') && !pattern.contains('?') {
        assert!(regex.is_match(&pattern), "literal glob does not match itself");
    }
});
