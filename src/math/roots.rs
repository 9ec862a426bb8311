use log::debug;
use num_complex::Complex64;
use crate::errors::AlgebraError;
use super::Matrix;

// CONSTANTS
// ================================================================================================

/// Highest-degree coefficients smaller than this are treated as zero.
pub const TRIM_TOLERANCE: f64 = 1e-14;

// QUADRATIC
// ================================================================================================

/// Returns both roots of a*x^2 + b*x + c using the principal complex square root of the
/// discriminant. For a = 0 the result is not finite.
pub fn solve_quadratic(a: f64, b: f64, c: f64) -> [Complex64; 2] {
    let d = Complex64::new(b * b - 4.0 * a * c, 0.0).sqrt();
    let r1 = (d - b) / (2.0 * a);
    let r2 = (-d - b) / (2.0 * a);
    return [r1, r2];
}

// CUBIC
// ================================================================================================

/// Returns the three roots of a*x^3 + b*x^2 + c*x + d using Cardano's method.
///
/// The cubic is first reduced to the depressed form t^3 + p*t + q by substituting
/// x = t - b/3a; the roots of the depressed cubic are then C + D, w*C + w^2*D and w^2*C + w*D,
/// where w is a primitive cube root of unity, C is the principal cube root of -q/2 +/- sqrt(delta)
/// and C * D = -p/3.
pub fn solve_cubic(a: f64, b: f64, c: f64, d: f64) -> Result<[Complex64; 3], AlgebraError> {
    if a == 0.0 {
        return Err(AlgebraError::InvalidCoefficient);
    }

    let p = (3.0 * a * c - b * b) / (3.0 * a * a);
    let q = (2.0 * b * b * b - 9.0 * a * b * c + 27.0 * a * a * d) / (27.0 * a * a * a);
    let delta = (q / 2.0).powi(2) + (p / 3.0).powi(3);
    let sqrt_delta = Complex64::new(delta, 0.0).sqrt();

    // take the branch with the larger magnitude to avoid cancellation
    let u1 = sqrt_delta - q / 2.0;
    let u2 = -sqrt_delta - q / 2.0;
    let u = if u1.norm() >= u2.norm() { u1 } else { u2 };

    // D is tied to C through C * D = -p/3 rather than taken as an independent principal cube
    // root; two independent principal roots give wrong roots for e.g. x^3 + x + 1
    let cc = cbrt(u);
    let dd = if cc == Complex64::new(0.0, 0.0) { cc } else { -p / (3.0 * cc) };

    let w1 = Complex64::new(-0.5, 3f64.sqrt() / 2.0);
    let w2 = w1.conj();

    let shift = b / (3.0 * a);
    let x1 = cc + dd - shift;
    let x2 = w1 * cc + w2 * dd - shift;
    let x3 = w2 * cc + w1 * dd - shift;

    return Ok([x1, x2, x3]);
}

// ARBITRARY DEGREE
// ================================================================================================

/// Returns all roots of the polynomial c[0] + c[1]*x + ... + c[n]*x^n as the eigenvalues of
/// its companion matrix. Leading coefficients which are (numerically) zero are ignored, so the
/// number of returned roots is the degree of the trimmed polynomial.
pub fn solve_polynomial(coefficients: &[f64]) -> Result<Vec<Complex64>, AlgebraError> {
    let mut c = coefficients.to_vec();
    while c.len() > 1 && c[c.len() - 1].abs() < TRIM_TOLERANCE {
        c.pop();
    }

    if c.len() <= 1 {
        return Ok(Vec::new());
    }
    let n = c.len() - 1;
    if n == 1 {
        return Ok(vec![Complex64::new(-c[0] / c[1], 0.0)]);
    }

    // make the polynomial monic
    let lead = c[n];
    let c: Vec<f64> = c.iter().map(|&ci| ci / lead).collect();

    // ones on the sub-diagonal, negated low-order coefficients in the last column
    let mut companion = Matrix::zeros(n);
    for i in 1..n {
        companion.set(i, i - 1, 1.0);
    }
    for i in 0..n {
        companion.set(i, n - 1, -c[i]);
    }
    debug!("built {}x{} companion matrix", n, n);

    return companion.eigenvalues();
}

// HELPER FUNCTIONS
// ================================================================================================

/// Principal cube root of `z`.
fn cbrt(z: Complex64) -> Complex64 {
    if z == Complex64::new(0.0, 0.0) {
        return z;
    }
    return (z.ln() / 3.0).exp();
}
