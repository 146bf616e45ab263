#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(css) = std::str::from_utf8(data) {
        // The minifier is pure text substitution and must never panic,
        // whatever the input looks like.
        let out = cinch::minify(css);

        // Minifying the result again must also be panic-free.
        let _ = cinch::minify(&out);
    }
});
