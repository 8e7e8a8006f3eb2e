#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Formatted output keeps exactly the normalized digits.
        if let Ok(formatted) = brdoc::format_cnpj(s) {
            let digits = brdoc::normalize(s, brdoc::CNPJ_LEN).unwrap();
            assert_eq!(brdoc::strip_punctuation(&formatted), digits);
        }
        let _ = brdoc::format_cpf(s);
        let _ = brdoc::format_pis(s);
    }
});
