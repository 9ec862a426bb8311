use log::trace;
use num_complex::Complex64;
use crate::errors::AlgebraError;

// CONSTANTS
// ================================================================================================

/// Maximum number of QR iterations spent on a single eigenvalue.
const MAX_ITERATIONS: usize = 30;

const RADIX: f64 = 2.0;

// TYPES AND INTERFACES
// ================================================================================================

/// A dense square matrix of real numbers stored in row-major order.
#[derive(Clone, Debug, PartialEq)]
pub struct Matrix {
    n       : usize,
    values  : Vec<f64>,
}

// MATRIX IMPLEMENTATION
// ================================================================================================
impl Matrix {

    // CONSTRUCTORS
    // --------------------------------------------------------------------------------------------

    pub fn zeros(n: usize) -> Matrix {
        return Matrix { n, values: vec![0.0; n * n] };
    }

    #[cfg(test)]
    pub(crate) fn from_rows(rows: &[Vec<f64>]) -> Matrix {
        let n = rows.len();
        let mut values = Vec::with_capacity(n * n);
        for row in rows.iter() {
            assert!(row.len() == n, "matrix must be square");
            values.extend_from_slice(row);
        }
        return Matrix { n, values };
    }

    // PUBLIC ACCESSORS
    // --------------------------------------------------------------------------------------------

    #[cfg(test)]
    pub(crate) fn size(&self) -> usize {
        return self.n;
    }

    pub fn get(&self, row: usize, col: usize) -> f64 {
        return self.values[row * self.n + col];
    }

    pub fn set(&mut self, row: usize, col: usize, value: f64) {
        self.values[row * self.n + col] = value;
    }

    // EIGENVALUES
    // --------------------------------------------------------------------------------------------

    /// Computes all eigenvalues of the matrix. The matrix is balanced, reduced to upper
    /// Hessenberg form, and then the Francis double-shift QR algorithm is applied to the
    /// Hessenberg matrix. Complex eigenvalues come out in conjugate pairs.
    pub fn eigenvalues(&self) -> Result<Vec<Complex64>, AlgebraError> {
        let n = self.n;
        if n == 0 { return Ok(Vec::new()); }

        // working copy with 1-based indexing; row and column 0 are unused
        let mut a = vec![vec![0.0f64; n + 1]; n + 1];
        for i in 0..n {
            for j in 0..n {
                a[i + 1][j + 1] = self.get(i, j);
            }
        }

        balance(&mut a, n);
        reduce_to_hessenberg(&mut a, n);
        let (wr, wi) = hessenberg_qr(&mut a, n)?;

        return Ok((1..=n).map(|i| Complex64::new(wr[i], wi[i])).collect());
    }
}

// HELPER FUNCTIONS
// ================================================================================================

/// Scales rows and columns by powers of 2 so that their norms become comparable; this does not
/// change the eigenvalues but makes them less sensitive to rounding.
fn balance(a: &mut [Vec<f64>], n: usize) {
    let sqrdx = RADIX * RADIX;
    let mut done = false;
    while !done {
        done = true;
        for i in 1..=n {
            let mut r = 0.0f64;
            let mut c = 0.0f64;
            for j in 1..=n {
                if j != i {
                    c += a[j][i].abs();
                    r += a[i][j].abs();
                }
            }
            if c == 0.0 || r == 0.0 { continue; }

            let mut g = r / RADIX;
            let mut f = 1.0f64;
            let s = c + r;
            while c < g {
                f *= RADIX;
                c *= sqrdx;
            }
            g = r * RADIX;
            while c > g {
                f /= RADIX;
                c /= sqrdx;
            }
            if (c + r) / f < 0.95 * s {
                done = false;
                g = 1.0 / f;
                for j in 1..=n { a[i][j] *= g; }
                for j in 1..=n { a[j][i] *= f; }
            }
        }
    }
}

/// Reduces `a` to upper Hessenberg form by Gaussian elimination with pivoting; entries below
/// the sub-diagonal are zeroed.
fn reduce_to_hessenberg(a: &mut [Vec<f64>], n: usize) {
    for m in 2..n {
        // find the pivot in column m - 1
        let mut x = 0.0f64;
        let mut i = m;
        for j in m..=n {
            if a[j][m - 1].abs() > x.abs() {
                x = a[j][m - 1];
                i = j;
            }
        }

        // interchange rows and columns
        if i != m {
            for j in (m - 1)..=n {
                let t = a[i][j];
                a[i][j] = a[m][j];
                a[m][j] = t;
            }
            for j in 1..=n {
                let t = a[j][i];
                a[j][i] = a[j][m];
                a[j][m] = t;
            }
        }

        // eliminate
        if x != 0.0 {
            for i in (m + 1)..=n {
                let mut y = a[i][m - 1];
                if y != 0.0 {
                    y /= x;
                    a[i][m - 1] = y;
                    for j in m..=n { a[i][j] -= y * a[m][j]; }
                    for j in 1..=n { a[j][m] += y * a[j][i]; }
                }
            }
        }
    }

    // multipliers left below the sub-diagonal are not part of the Hessenberg matrix
    for i in 3..=n {
        for j in 1..(i - 1) {
            a[i][j] = 0.0;
        }
    }
}

/// Finds all eigenvalues of the upper Hessenberg matrix `a`; returns (real parts, imaginary
/// parts), both 1-indexed. `a` is destroyed.
fn hessenberg_qr(a: &mut [Vec<f64>], n: usize) -> Result<(Vec<f64>, Vec<f64>), AlgebraError> {
    let mut wr = vec![0.0f64; n + 1];
    let mut wi = vec![0.0f64; n + 1];

    let mut anorm = 0.0f64;
    for i in 1..=n {
        for j in std::cmp::max(i - 1, 1)..=n {
            anorm += a[i][j].abs();
        }
    }

    let mut nn = n;
    let mut t = 0.0f64;
    while nn >= 1 {
        let mut its = 0;
        loop {
            // look for a single small sub-diagonal element
            let mut l = nn;
            while l >= 2 {
                let mut s = a[l - 1][l - 1].abs() + a[l][l].abs();
                if s == 0.0 { s = anorm; }
                if a[l][l - 1].abs() + s == s {
                    a[l][l - 1] = 0.0;
                    break;
                }
                l -= 1;
            }

            let mut x = a[nn][nn];
            if l == nn {
                // one root found
                wr[nn] = x + t;
                wi[nn] = 0.0;
                trace!("eigenvalue {} converged after {} iterations", nn, its);
                nn -= 1;
            }
            else {
                let mut y = a[nn - 1][nn - 1];
                let mut w = a[nn][nn - 1] * a[nn - 1][nn];
                if l == nn - 1 {
                    // two roots found
                    let p = 0.5 * (y - x);
                    let q = p * p + w;
                    let mut z = q.abs().sqrt();
                    x += t;
                    if q >= 0.0 {
                        // real pair
                        z = p + z.copysign(p);
                        wr[nn - 1] = x + z;
                        wr[nn] = x + z;
                        if z != 0.0 { wr[nn] = x - w / z; }
                        wi[nn - 1] = 0.0;
                        wi[nn] = 0.0;
                    }
                    else {
                        // complex pair
                        wr[nn - 1] = x + p;
                        wr[nn] = x + p;
                        wi[nn - 1] = -z;
                        wi[nn] = z;
                    }
                    trace!("eigenvalues {} and {} converged after {} iterations", nn - 1, nn, its);
                    nn -= 2;
                }
                else {
                    if its == MAX_ITERATIONS {
                        return Err(AlgebraError::NoConvergence);
                    }

                    // exceptional shift
                    if its == 10 || its == 20 {
                        t += x;
                        for i in 1..=nn { a[i][i] -= x; }
                        let s = a[nn][nn - 1].abs() + a[nn - 1][nn - 2].abs();
                        x = 0.75 * s;
                        y = x;
                        w = -0.4375 * s * s;
                    }
                    its += 1;

                    // form shift and look for 2 consecutive small sub-diagonal elements
                    let mut m = nn - 2;
                    let (mut p, mut q, mut r);
                    loop {
                        let z = a[m][m];
                        r = x - z;
                        let s = y - z;
                        p = (r * s - w) / a[m + 1][m] + a[m][m + 1];
                        q = a[m + 1][m + 1] - z - r - s;
                        r = a[m + 2][m + 1];
                        let s = p.abs() + q.abs() + r.abs();
                        p /= s;
                        q /= s;
                        r /= s;
                        if m == l { break; }
                        let u = a[m][m - 1].abs() * (q.abs() + r.abs());
                        let v = p.abs() * (a[m - 1][m - 1].abs() + z.abs() + a[m + 1][m + 1].abs());
                        if u + v == v { break; }
                        m -= 1;
                    }

                    for i in (m + 2)..=nn {
                        a[i][i - 2] = 0.0;
                        if i != m + 2 { a[i][i - 3] = 0.0; }
                    }

                    // double QR step on rows l to nn and columns m to nn
                    for k in m..nn {
                        if k != m {
                            p = a[k][k - 1];
                            q = a[k + 1][k - 1];
                            r = 0.0;
                            if k != nn - 1 { r = a[k + 2][k - 1]; }
                            x = p.abs() + q.abs() + r.abs();
                            if x != 0.0 {
                                p /= x;
                                q /= x;
                                r /= x;
                            }
                        }

                        let s = (p * p + q * q + r * r).sqrt().copysign(p);
                        if s == 0.0 { continue; }

                        if k == m {
                            if l != m { a[k][k - 1] = -a[k][k - 1]; }
                        }
                        else {
                            a[k][k - 1] = -s * x;
                        }
                        p += s;
                        x = p / s;
                        y = q / s;
                        let z = r / s;
                        q /= p;
                        r /= p;

                        // row modification
                        for j in k..=nn {
                            p = a[k][j] + q * a[k + 1][j];
                            if k != nn - 1 {
                                p += r * a[k + 2][j];
                                a[k + 2][j] -= p * z;
                            }
                            a[k + 1][j] -= p * y;
                            a[k][j] -= p * x;
                        }

                        // column modification
                        let mmin = if nn < k + 3 { nn } else { k + 3 };
                        for i in l..=mmin {
                            p = x * a[i][k] + y * a[i][k + 1];
                            if k != nn - 1 {
                                p += z * a[i][k + 2];
                                a[i][k + 2] -= p * r;
                            }
                            a[i][k + 1] -= p * q;
                            a[i][k] -= p;
                        }
                    }
                }
            }

            if l + 1 >= nn { break; }
        }
    }

    return Ok((wr, wi));
}

// TESTS
// ================================================================================================
#[cfg(test)]
mod tests {

    use num_complex::Complex64;
    use super::Matrix;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn empty_and_scalar() {
        assert!(Matrix::zeros(0).eigenvalues().unwrap().is_empty());

        let m = Matrix::from_rows(&[vec![7.5]]);
        assert_eq!(vec![Complex64::new(7.5, 0.0)], m.eigenvalues().unwrap());
    }

    #[test]
    fn diagonal() {
        let m = Matrix::from_rows(&[
            vec![1.0, 0.0, 0.0],
            vec![0.0, -2.0, 0.0],
            vec![0.0, 0.0, 3.0],
        ]);
        let values = sorted(m.eigenvalues().unwrap());
        assert_close(&[c(-2.0, 0.0), c(1.0, 0.0), c(3.0, 0.0)], &values);
    }

    #[test]
    fn symmetric() {
        // eigenvalues of [[2, 1], [1, 2]] are 1 and 3
        let m = Matrix::from_rows(&[vec![2.0, 1.0], vec![1.0, 2.0]]);
        let values = sorted(m.eigenvalues().unwrap());
        assert_close(&[c(1.0, 0.0), c(3.0, 0.0)], &values);
    }

    #[test]
    fn rotation() {
        // a 90 degree rotation has eigenvalues i and -i
        let m = Matrix::from_rows(&[vec![0.0, -1.0], vec![1.0, 0.0]]);
        let values = sorted(m.eigenvalues().unwrap());
        assert_close(&[c(0.0, -1.0), c(0.0, 1.0)], &values);
    }

    #[test]
    fn dense() {
        // symmetric, so all eigenvalues are real
        let m = Matrix::from_rows(&[
            vec![ 4.0, 1.0, -2.0,  2.0],
            vec![ 1.0, 2.0,  0.0,  1.0],
            vec![-2.0, 0.0,  3.0, -2.0],
            vec![ 2.0, 1.0, -2.0, -1.0],
        ]);
        let values = m.eigenvalues().unwrap();
        assert_eq!(4, values.len());
        for v in values.iter() {
            assert!(v.im.abs() < EPSILON);
        }

        // sum of eigenvalues equals the trace
        let sum: Complex64 = values.iter().sum();
        assert!((sum - c(8.0, 0.0)).norm() < EPSILON);

        // product of eigenvalues equals the determinant
        let product = values.iter().fold(c(1.0, 0.0), |acc, v| acc * v);
        assert!((product - c(determinant(&m), 0.0)).norm() < 1e-6);
    }

    #[test]
    fn accessors() {
        let mut m = Matrix::zeros(2);
        m.set(0, 1, 5.0);
        assert_eq!(2, m.size());
        assert_eq!(5.0, m.get(0, 1));
        assert_eq!(0.0, m.get(1, 0));
    }

    // controller methods
    fn c(re: f64, im: f64) -> Complex64 {
        Complex64::new(re, im)
    }

    fn sorted(mut values: Vec<Complex64>) -> Vec<Complex64> {
        // real parts closer than the tolerance are treated as equal
        values.sort_by(|a, b| {
            if (a.re - b.re).abs() < 1e-6 {
                a.im.partial_cmp(&b.im).unwrap()
            }
            else {
                a.re.partial_cmp(&b.re).unwrap()
            }
        });
        values
    }

    fn assert_close(expected: &[Complex64], actual: &[Complex64]) {
        assert_eq!(expected.len(), actual.len());
        for (e, a) in expected.iter().zip(actual.iter()) {
            assert!((e - a).norm() < EPSILON, "expected {}, got {}", e, a);
        }
    }

    /// Laplace expansion; fine for small matrices.
    fn determinant(m: &Matrix) -> f64 {
        let n = m.size();
        if n == 1 { return m.get(0, 0); }
        let mut det = 0.0;
        for col in 0..n {
            let rows: Vec<Vec<f64>> = (1..n)
                .map(|i| (0..n).filter(|&j| j != col).map(|j| m.get(i, j)).collect())
                .collect();
            let sign = if col % 2 == 0 { 1.0 } else { -1.0 };
            det += sign * m.get(0, col) * determinant(&Matrix::from_rows(&rows));
        }
        det
    }
}
