/// Checks if `n` is a prime number using trial division up to sqrt(n).
///
/// Suitable for validating small moduli; not meant for large inputs.
pub fn is_prime(n: u64) -> bool {
    if n < 2 { return false; }
    if n < 4 { return true; }
    if n % 2 == 0 { return false; }

    let mut i = 3u64;
    while i <= n / i {
        if n % i == 0 {
            return false;
        }
        i += 2;
    }
    return true;
}
