use std::convert::TryFrom;
use std::fmt;
use rand::prelude::*;
use rand::distributions::{ Distribution, Uniform };
use serde::{ Serialize, Deserialize };
use crate::errors::AlgebraError;

// TYPES AND INTERFACES
// ================================================================================================

/// An element of the integers modulo `modulus`. When the modulus is prime, this is an element
/// of the finite field GF(p).
///
/// The residue is always kept in canonical form `0 <= residue < modulus`. Elements are
/// immutable; every arithmetic operation returns a new element.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawFieldElement")]
pub struct FieldElement {
    modulus : u64,
    residue : u64,
}

#[derive(Deserialize)]
struct RawFieldElement {
    modulus : u64,
    residue : u64,
}

// FIELD ELEMENT IMPLEMENTATION
// ================================================================================================
impl FieldElement {

    // CONSTRUCTORS
    // --------------------------------------------------------------------------------------------

    /// Returns `value mod modulus` as an element of the field defined by `modulus`; negative
    /// values are mapped to their non-negative representative.
    pub fn new(modulus: u64, value: i64) -> Result<FieldElement, AlgebraError> {
        validate_modulus(modulus)?;
        let residue = (value as i128).rem_euclid(modulus as i128) as u64;
        return Ok(FieldElement { modulus, residue });
    }

    /// Returns `value mod modulus` for an unsigned value.
    pub fn from_u64(modulus: u64, value: u64) -> Result<FieldElement, AlgebraError> {
        validate_modulus(modulus)?;
        return Ok(FieldElement { modulus, residue: value % modulus });
    }

    pub fn zero(modulus: u64) -> Result<FieldElement, AlgebraError> {
        return FieldElement::new(modulus, 0);
    }

    pub fn one(modulus: u64) -> Result<FieldElement, AlgebraError> {
        return FieldElement::new(modulus, 1);
    }

    /// Returns an element with a residue drawn uniformly from `[0, modulus)`.
    pub fn rand(modulus: u64) -> Result<FieldElement, AlgebraError> {
        validate_modulus(modulus)?;
        let range = Uniform::from(0..modulus);
        let mut g = thread_rng();
        return Ok(FieldElement { modulus, residue: range.sample(&mut g) });
    }

    /// Returns all elements of the field in residue order, starting at residue `start`.
    pub fn all(modulus: u64, start: u64) -> Result<Vec<FieldElement>, AlgebraError> {
        validate_modulus(modulus)?;
        return Ok((start..modulus).map(|residue| FieldElement { modulus, residue }).collect());
    }

    // PUBLIC ACCESSORS
    // --------------------------------------------------------------------------------------------

    pub fn modulus(&self) -> u64 {
        return self.modulus;
    }

    pub fn residue(&self) -> u64 {
        return self.residue;
    }

    pub fn is_zero(&self) -> bool {
        return self.residue == 0;
    }

    // BASIC ARITHMETIC
    // --------------------------------------------------------------------------------------------

    /// Computes (self + rhs) % m.
    pub fn add(self, rhs: FieldElement) -> Result<FieldElement, AlgebraError> {
        let m = self.check_same_field(&rhs)?;
        let z = (self.residue as u128 + rhs.residue as u128) % m;
        return Ok(self.with_residue(z));
    }

    /// Computes (self - rhs) % m.
    pub fn sub(self, rhs: FieldElement) -> Result<FieldElement, AlgebraError> {
        self.check_same_field(&rhs)?;
        let z = if self.residue < rhs.residue {
            self.modulus - rhs.residue + self.residue
        }
        else {
            self.residue - rhs.residue
        };
        return Ok(FieldElement { modulus: self.modulus, residue: z });
    }

    /// Computes (self * rhs) % m.
    pub fn mul(self, rhs: FieldElement) -> Result<FieldElement, AlgebraError> {
        let m = self.check_same_field(&rhs)?;
        let z = (self.residue as u128 * rhs.residue as u128) % m;
        return Ok(self.with_residue(z));
    }

    /// Computes y such that rhs * y = self.
    pub fn div(self, rhs: FieldElement) -> Result<FieldElement, AlgebraError> {
        self.check_same_field(&rhs)?;
        let rhs = rhs.inv()?;
        return self.mul(rhs);
    }

    /// Computes (0 - self) % m.
    pub fn neg(self) -> FieldElement {
        if self.residue == 0 { return self; }
        return FieldElement { modulus: self.modulus, residue: self.modulus - self.residue };
    }

    /// Computes y such that (self * y) % m = 1 using the extended Euclidean algorithm.
    pub fn inv(self) -> Result<FieldElement, AlgebraError> {
        if self.residue == 0 {
            return Err(AlgebraError::DivisionByZero);
        }

        let m = self.modulus as i128;
        let (mut r0, mut r1) = (m, self.residue as i128);
        let (mut t0, mut t1) = (0i128, 1i128);

        while r1 != 0 {
            let q = r0 / r1;

            let r2 = r0 - q * r1;
            r0 = r1;
            r1 = r2;

            let t2 = t0 - q * t1;
            t0 = t1;
            t1 = t2;
        }

        // r0 is gcd(residue, modulus); an inverse exists only when they are coprime
        if r0 != 1 {
            return Err(AlgebraError::NotInvertible(self.residue, self.modulus));
        }

        return Ok(FieldElement { modulus: self.modulus, residue: t0.rem_euclid(m) as u64 });
    }

    /// Computes (self^p) % m by repeated squaring.
    pub fn exp(self, p: u64) -> FieldElement {
        let m = self.modulus as u128;
        let mut r = 1 % m;
        let mut b = self.residue as u128;
        let mut p = p;

        while p > 0 {
            if p & 1 == 1 {
                r = (r * b) % m;
            }
            p = p >> 1;
            b = (b * b) % m;
        }

        return self.with_residue(r);
    }

    // HELPER METHODS
    // --------------------------------------------------------------------------------------------

    fn check_same_field(&self, other: &FieldElement) -> Result<u128, AlgebraError> {
        if self.modulus != other.modulus {
            return Err(AlgebraError::IncompatibleField(self.modulus, other.modulus));
        }
        return Ok(self.modulus as u128);
    }

    /// `residue` must already be reduced modulo `self.modulus`.
    fn with_residue(&self, residue: u128) -> FieldElement {
        debug_assert!(residue < self.modulus as u128, "residue is not reduced");
        return FieldElement { modulus: self.modulus, residue: residue as u64 };
    }
}

fn validate_modulus(modulus: u64) -> Result<(), AlgebraError> {
    if modulus <= 1 {
        return Err(AlgebraError::InvalidModulus(modulus));
    }
    return Ok(());
}

// COMMON TRAIT IMPLEMENTATIONS
// ================================================================================================

impl fmt::Display for FieldElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "GF({}, {})", self.modulus, self.residue)
    }
}

impl TryFrom<RawFieldElement> for FieldElement {
    type Error = String;

    fn try_from(raw: RawFieldElement) -> Result<FieldElement, String> {
        validate_modulus(raw.modulus).map_err(|err| err.to_string())?;
        if raw.residue >= raw.modulus {
            return Err(format!("residue {} is not reduced modulo {}", raw.residue, raw.modulus));
        }
        return Ok(FieldElement { modulus: raw.modulus, residue: raw.residue });
    }
}
