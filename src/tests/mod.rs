use rand::prelude::*;
use crate::{ AlgebraError, FieldElement, axioms, is_prime };

#[test]
fn gf5_arithmetic() {
    let a = gf(5, 2);
    let b = gf(5, 3);

    assert_eq!(gf(5, 0), a.add(b).unwrap());
    assert_eq!(gf(5, 1), a.mul(b).unwrap());
    assert_eq!(gf(5, 1), b.sub(a).unwrap());

    // 3 / 2 = 3 * 2^-1 = 3 * 3 = 4
    let q = b.div(a).unwrap();
    assert_eq!(gf(5, 4), q);
    assert_eq!(b, q.mul(a).unwrap());
}

#[test]
fn gf5_field_checks() {
    assert!(axioms::check_distributivity(5));
    assert!(axioms::check_addition_group(5));
    assert!(axioms::check_multiplication_group(5));
}

#[test]
fn errors() {
    assert_eq!(Err(AlgebraError::InvalidModulus(1)), FieldElement::new(1, 0));
    assert_eq!(Err(AlgebraError::DivisionByZero), gf(5, 3).div(gf(5, 0)));
    assert_eq!(Err(AlgebraError::IncompatibleField(5, 7)), gf(5, 1).add(gf(7, 1)));
}

#[test]
fn inverses_in_prime_fields() {
    let mut rng = thread_rng();
    for p in (2..200u64).filter(|&p| is_prime(p)) {
        let zero = gf(p, 0);
        let one = gf(p, 1);
        for _ in 0..20 {
            let a = gf(p, rng.gen_range(-1000, 1000));
            assert_eq!(zero, a.add(a.neg()).unwrap());
            if !a.is_zero() {
                assert_eq!(one, a.mul(a.inv().unwrap()).unwrap());
            }
        }
    }
}

#[test]
fn distributivity_random_values() {
    // 2^61 - 1
    let p = 2305843009213693951u64;
    for _ in 0..100 {
        let a = FieldElement::rand(p).unwrap();
        let b = FieldElement::rand(p).unwrap();
        let c = FieldElement::rand(p).unwrap();
        let lhs = a.mul(b.add(c).unwrap()).unwrap();
        let rhs = a.mul(b).unwrap().add(a.mul(c).unwrap()).unwrap();
        assert_eq!(lhs, rhs);
    }
}

#[test]
fn composite_moduli_are_detected() {
    for p in (4..20u64).filter(|&p| !is_prime(p)) {
        assert!(axioms::check_addition_group(p));
        assert!(axioms::check_distributivity(p));
        assert!(!axioms::check_multiplication_group(p), "{} passed the multiplication check", p);
    }
}

fn gf(p: u64, v: i64) -> FieldElement {
    FieldElement::new(p, v).unwrap()
}
