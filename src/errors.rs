// TYPES AND INTERFACES
// ================================================================================================

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum AlgebraError {
    /// Field modulus must be greater than 1.
    InvalidModulus(u64),
    /// Operands belong to fields with different moduli.
    IncompatibleField(u64, u64),
    DivisionByZero,
    /// Value has no inverse because it shares a factor with the modulus; (value, modulus).
    NotInvertible(u64, u64),
    /// Leading coefficient of a cubic is zero.
    InvalidCoefficient,
    /// Eigenvalue iteration did not converge.
    NoConvergence,
}

// ALGEBRA ERROR IMPLEMENTATION
// ================================================================================================
impl AlgebraError {

    pub fn message(&self) -> String {
        match self {
            AlgebraError::InvalidModulus(m) => {
                format!("modulus must be greater than 1, but was {}", m)
            },
            AlgebraError::IncompatibleField(m1, m2) => {
                format!("elements must be from the same finite field, but moduli were {} and {}", m1, m2)
            },
            AlgebraError::DivisionByZero => {
                format!("cannot divide by zero in a field")
            },
            AlgebraError::NotInvertible(x, m) => {
                format!("{} has no multiplicative inverse modulo {}", x, m)
            },
            AlgebraError::InvalidCoefficient => {
                format!("leading coefficient cannot be zero for a cubic equation")
            },
            AlgebraError::NoConvergence => {
                format!("eigenvalue iteration did not converge")
            },
        }
    }
}

// COMMON TRAIT IMPLEMENTATIONS
// ================================================================================================

impl std::fmt::Debug for AlgebraError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "algebra error: {}", self.message())
    }
}

impl std::fmt::Display for AlgebraError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "algebra error: {}", self.message())
    }
}

impl std::error::Error for AlgebraError { }

// TESTS
// ================================================================================================
#[cfg(test)]
mod tests {

    use super::AlgebraError;

    #[test]
    fn display() {
        let err = AlgebraError::InvalidModulus(1);
        assert_eq!("algebra error: modulus must be greater than 1, but was 1", format!("{}", err));

        let err = AlgebraError::IncompatibleField(5, 7);
        assert_eq!(
            "algebra error: elements must be from the same finite field, but moduli were 5 and 7",
            format!("{}", err));

        let err = AlgebraError::DivisionByZero;
        assert_eq!("algebra error: cannot divide by zero in a field", format!("{:?}", err));
    }
}
