#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    if let Ok(s) = std::str::from_utf8(data) {
        // Must not panic, and validate must agree with check.
        assert_eq!(brdoc::validate_cpf(s), brdoc::check_cpf(s).is_ok());
        assert_eq!(brdoc::validate_cnpj(s), brdoc::check_cnpj(s).is_ok());
        assert_eq!(brdoc::validate_pis(s), brdoc::check_pis(s).is_ok());
    }
});
