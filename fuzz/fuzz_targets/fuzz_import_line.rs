#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(line) = std::str::from_utf8(data) {
        // Import extraction treats every line as untrusted manifest input
        // and must not panic on any of it.
        let _ = cinch::parse_import(line);
    }
});
