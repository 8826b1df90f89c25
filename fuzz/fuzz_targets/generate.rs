#![no_main]

use faxc::CppCodegen;
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    // Invalid UTF-8 can never be a JSON document
    if let Ok(s) = std::str::from_utf8(data) {
        // Decode + generate must fail cleanly, never panic
        let _ = CppCodegen::new().generate_from_json(s);
    }
});
