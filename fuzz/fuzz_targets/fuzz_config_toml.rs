#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(content) = std::str::from_utf8(data) {
        // Config parsing and style resolution must never panic
        if let Ok(mut config) = toml::from_str::<piemenu::Config>(content) {
            let _ = config.sanitize("fuzz");
            let _ = piemenu::Style::resolve(&config);
        }
    }
});
