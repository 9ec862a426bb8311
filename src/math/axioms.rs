use std::fmt;
use log::{ debug, warn };
use crate::errors::AlgebraError;
use super::FieldElement;

// TYPES AND INTERFACES
// ================================================================================================

/// The first counterexample found by an exhaustive axiom check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AxiomViolation {
    /// Elements of the field could not be constructed or combined.
    InvalidField(AlgebraError),
    Closure(FieldElement, FieldElement),
    Associativity(FieldElement, FieldElement, FieldElement),
    Commutativity(FieldElement, FieldElement),
    Identity(FieldElement),
    Inverse(FieldElement),
    Distributivity(FieldElement, FieldElement, FieldElement),
}

impl From<AlgebraError> for AxiomViolation {
    fn from(err: AlgebraError) -> AxiomViolation {
        return AxiomViolation::InvalidField(err);
    }
}

impl fmt::Display for AxiomViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AxiomViolation::InvalidField(err) => write!(f, "Fails construction: {}", err),
            AxiomViolation::Closure(a, b) => write!(f, "Fails closure at a={}, b={}", a, b),
            AxiomViolation::Associativity(a, b, c) => {
                write!(f, "Fails associativity at a={}, b={}, c={}", a, b, c)
            },
            AxiomViolation::Commutativity(a, b) => {
                write!(f, "Fails commutativity at a={}, b={}", a, b)
            },
            AxiomViolation::Identity(a) => write!(f, "Fails identity at a={}", a),
            AxiomViolation::Inverse(a) => write!(f, "Fails inverse at a={}", a),
            AxiomViolation::Distributivity(a, b, c) => {
                write!(f, "Fails distributivity: a={}, b={}, c={}", a.residue(), b.residue(), c.residue())
            },
        }
    }
}

type BinaryOp = fn(FieldElement, FieldElement) -> Result<FieldElement, AlgebraError>;

// AXIOM CHECKS
// ================================================================================================

/// Returns true if the elements {0, ..., p-1} form a group under addition modulo `p`. The
/// first violated axiom is printed to stdout.
pub fn check_addition_group(p: u64) -> bool {
    return report("addition group", p, verify_addition_group(p));
}

/// Returns true if the elements {1, ..., p-1} form a group under multiplication modulo `p`.
/// The first violated axiom is printed to stdout.
pub fn check_multiplication_group(p: u64) -> bool {
    return report("multiplication group", p, verify_multiplication_group(p));
}

/// Returns true if multiplication distributes over addition for all elements modulo `p`. The
/// first counterexample is printed to stdout.
pub fn check_distributivity(p: u64) -> bool {
    return report("distributivity", p, verify_distributivity(p));
}

/// Runs all three checks in order; stops at the first failing one.
pub fn check_field(p: u64) -> bool {
    return check_addition_group(p)
        && check_multiplication_group(p)
        && check_distributivity(p);
}

// VERIFIERS
// ================================================================================================

/// Exhaustively verifies closure, associativity, commutativity, identity and inverses of
/// addition over all `p` residues.
pub fn verify_addition_group(p: u64) -> Result<(), AxiomViolation> {
    let elements = FieldElement::all(p, 0)?;
    let zero = FieldElement::zero(p)?;
    return verify_group(&elements, zero, FieldElement::add, false);
}

/// Same as [verify_addition_group] but over the `p - 1` nonzero residues with multiplication.
/// Closure also fails when a product is zero, which can only happen for a composite `p`.
pub fn verify_multiplication_group(p: u64) -> Result<(), AxiomViolation> {
    let elements = FieldElement::all(p, 1)?;
    let one = FieldElement::one(p)?;
    return verify_group(&elements, one, FieldElement::mul, true);
}

/// Exhaustively verifies a*(b+c) == a*b + a*c over all triples of residues.
pub fn verify_distributivity(p: u64) -> Result<(), AxiomViolation> {
    let elements = FieldElement::all(p, 0)?;
    for &a in elements.iter() {
        for &b in elements.iter() {
            for &c in elements.iter() {
                let lhs = a.mul(b.add(c)?)?;
                let rhs = a.mul(b)?.add(a.mul(c)?)?;
                if lhs != rhs {
                    return Err(AxiomViolation::Distributivity(a, b, c));
                }
            }
        }
    }
    return Ok(());
}

// HELPER FUNCTIONS
// ================================================================================================

fn verify_group(elements: &[FieldElement], identity: FieldElement, op: BinaryOp, nonzero: bool)
    -> Result<(), AxiomViolation>
{
    // closure
    for &a in elements {
        for &b in elements {
            let r = op(a, b)?;
            if (nonzero && r.is_zero()) || !elements.contains(&r) {
                return Err(AxiomViolation::Closure(a, b));
            }
        }
    }

    // associativity
    for &a in elements {
        for &b in elements {
            for &c in elements {
                if op(a, op(b, c)?)? != op(op(a, b)?, c)? {
                    return Err(AxiomViolation::Associativity(a, b, c));
                }
            }
        }
    }

    // commutativity
    for &a in elements {
        for &b in elements {
            if op(a, b)? != op(b, a)? {
                return Err(AxiomViolation::Commutativity(a, b));
            }
        }
    }

    // identity
    for &a in elements {
        if op(a, identity)? != a || op(identity, a)? != a {
            return Err(AxiomViolation::Identity(a));
        }
    }

    // inverses
    for &a in elements {
        let mut found = false;
        for &b in elements {
            if op(a, b)? == identity {
                found = true;
                break;
            }
        }
        if !found {
            return Err(AxiomViolation::Inverse(a));
        }
    }

    return Ok(());
}

fn report(name: &str, p: u64, result: Result<(), AxiomViolation>) -> bool {
    match result {
        Ok(()) => {
            debug!("{} check passed for p = {}", name, p);
            return true;
        },
        Err(violation) => {
            println!("{}", violation);
            warn!("{} check failed for p = {}: {}", name, p, violation);
            return false;
        }
    }
}
