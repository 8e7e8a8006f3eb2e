use brdoc::*;

fn main() {
    // CPF
    println!("=== CPF ===\n");

    let cpfs = [
        "111.444.777-35",
        "11144477735",
        "111.111.111-11", // repeated digits
        "111.444.777-34", // wrong check digit
        "191",            // zero-padded to 000.000.001-91
        "",
    ];

    for input in &cpfs {
        match format_cpf(input) {
            Ok(formatted) => println!("  {input:?} => {formatted} valid={}", validate_cpf(input)),
            Err(e) => println!("  {input:?} => cannot format: {e}"),
        }
    }

    // CNPJ
    println!("\n=== CNPJ ===\n");

    let cnpjs = [
        "11.222.333/0001-81",
        "33000167000101",
        "11222333000182",  // wrong check digit
        "112223330001810", // too long
    ];

    for input in &cnpjs {
        match check_cnpj(input) {
            Ok(cnpj) => println!(
                "  {input} => {cnpj} (root {}, branch {})",
                cnpj.root(),
                cnpj.branch()
            ),
            Err(e) => println!("  {input} => INVALID: {e}"),
        }
    }

    // PIS/PASEP
    println!("\n=== PIS/PASEP ===\n");

    let base = "1205627500";
    if let Ok(d) = pis_check_digit(base) {
        println!("  check digit for {base}: {d}");
    }

    for input in ["120.5627.500-9", "12056275004", "00000000000"] {
        println!("  {input} => valid={}", validate_pis(input));
    }

    // Selecting the document type at runtime
    println!("\n=== By kind ===\n");

    for (kind, input) in [("cpf", "52998224725"), ("cnpj", "191"), ("pasep", "17033259504")] {
        match kind.parse::<DocumentKind>() {
            Ok(kind) => println!("  {kind}: {input} => {:?}", kind.format(input)),
            Err(e) => println!("  {e}"),
        }
    }
}
