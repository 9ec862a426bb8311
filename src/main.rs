use std::env;
use log::warn;
use galois::{ FieldElement, axioms, roots, is_prime };

fn main() {
    // configure logging; verbosity is controlled by RUST_LOG
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    let result = match args.get(1).map(|s| s.as_str()) {
        None | Some("field") => run_field(args.get(2..).unwrap_or(&[])),
        Some("roots")        => run_roots(),
        Some(other)          => Err(format!("unknown command '{}'; expected 'field' or 'roots'", other)),
    };

    if let Err(err) = result {
        eprintln!("{}", err);
        std::process::exit(1);
    }
}

// FINITE FIELD DEMO
// ================================================================================================

/// Usage: field [p] [a] [b]; defaults to p = 5, a = 2, b = 3.
fn run_field(args: &[String]) -> Result<(), String> {
    let p: u64 = parse_arg(args, 0, "p", 5)?;
    let a: i64 = parse_arg(args, 1, "a", 2)?;
    let b: i64 = parse_arg(args, 2, "b", 3)?;

    if !is_prime(p) {
        warn!("{} is not prime; field axioms are not expected to hold", p);
    }

    let a = FieldElement::new(p, a).map_err(|err| err.to_string())?;
    let b = FieldElement::new(p, b).map_err(|err| err.to_string())?;

    println!("a = {}", a);
    println!("b = {}", b);
    println!("a + b = {}", a.add(b).map_err(|err| err.to_string())?);
    println!("a * b = {}", a.mul(b).map_err(|err| err.to_string())?);
    println!("b - a = {}", b.sub(a).map_err(|err| err.to_string())?);
    match b.div(a) {
        Ok(q) => println!("b / a = {}", q),
        Err(err) => println!("b / a failed: {}", err),
    }

    println!("\n--- Field Property Checks for GF({}) ---", p);
    println!("Distributivity: {}", axioms::check_distributivity(p));
    println!("Addition forms a group: {}", axioms::check_addition_group(p));
    println!("Multiplication (without 0) forms a group: {}", axioms::check_multiplication_group(p));
    return Ok(());
}

// POLYNOMIAL ROOTS DEMO
// ================================================================================================

fn run_roots() -> Result<(), String> {
    for &(a, b, c) in [(1.0, -5.0, 6.0), (1.0, 4.0, 3.0), (1.0, 1.0, 1.0)].iter() {
        let [r1, r2] = roots::solve_quadratic(a, b, c);
        println!("roots of {}x^2 + {}x + {}: {}, {}", a, b, c, r1, r2);
    }

    for &(a, b, c, d) in [(1.0, -6.0, 11.0, -6.0), (1.0, 0.0, 0.0, 1.0)].iter() {
        let [r1, r2, r3] = roots::solve_cubic(a, b, c, d).map_err(|err| err.to_string())?;
        println!("roots of {}x^3 + {}x^2 + {}x + {}: {}, {}, {}", a, b, c, d, r1, r2, r3);
    }

    let polynomials: [&[f64]; 2] = [
        &[-24.0, 26.0, -9.0, 1.0],
        &[720.0, -1764.0, 1624.0, -735.0, 175.0, -21.0, 1.0],
    ];
    for coefficients in polynomials.iter() {
        let roots = roots::solve_polynomial(coefficients).map_err(|err| err.to_string())?;
        let roots: Vec<String> = roots.iter().map(|r| r.to_string()).collect();
        println!("roots of {:?}: [{}]", coefficients, roots.join(", "));
    }
    return Ok(());
}

// HELPER FUNCTIONS
// ================================================================================================

fn parse_arg<T: std::str::FromStr>(args: &[String], index: usize, name: &str, default: T)
    -> Result<T, String>
{
    match args.get(index) {
        None => Ok(default),
        Some(value) => value.parse::<T>()
            .map_err(|_| format!("invalid value '{}' for argument {}", value, name)),
    }
}
