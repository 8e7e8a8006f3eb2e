use brdoc::DocumentError;
use brdoc::cpf::*;
use tracing_subscriber::EnvFilter;

fn main() {
    // Rejections are emitted as trace events; run with RUST_LOG=brdoc=trace to see them.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .try_init();

    let inputs = [
        "",
        "   ",
        "123.456.789-012",
        "000.000.000-00",
        "111.444.777-05",
        "111.444.777-34",
        "111.444.777-35",
    ];

    for input in inputs {
        match check_cpf(input) {
            Ok(cpf) => println!("{input:?}: valid CPF {cpf}"),
            Err(DocumentError::EmptyInput) => println!("{input:?}: nothing to validate"),
            Err(DocumentError::TooLong { max, found }) => {
                println!("{input:?}: {found} digits, a CPF has {max}")
            }
            Err(DocumentError::RepeatedDigits) => println!("{input:?}: placeholder number"),
            Err(DocumentError::CheckDigitMismatch {
                position,
                expected,
                found,
            }) => println!(
                "{input:?}: digit {} should be {expected}, got {found}",
                position + 1
            ),
            Err(e) => println!("{input:?}: {e}"),
        }
    }

    // format only fails on malformed input
    match format_cpf("111.444.777-350") {
        Ok(s) => println!("formatted: {s}"),
        Err(e) if e.is_malformed() => println!("malformed: {e}"),
        Err(e) => println!("other: {e}"),
    }
}
