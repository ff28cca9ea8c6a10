//! Prime selection for table growth.

/// Trial division by odd numbers up to `sqrt(n)`.
pub fn is_prime(n: usize) -> bool {
    if n < 2 {
        return false;
    }
    if n % 2 == 0 {
        return n == 2;
    }
    let mut i = 3usize;
    while i.checked_mul(i).map_or(false, |sq| sq <= n) {
        if n % i == 0 {
            return false;
        }
        i += 2;
    }
    true
}

/// Smallest odd prime `>= n`, or `None` if none fits in `usize`.
///
/// Even inputs are bumped to the next odd number first, so
/// `next_prime(2 * c)` is always strictly greater than `2 * c`.
pub fn next_prime(n: usize) -> Option<usize> {
    let mut n = if n % 2 == 0 { n.checked_add(1)? } else { n };
    if n < 3 {
        n = 3;
    }
    while !is_prime(n) {
        n = n.checked_add(2)?;
    }
    Some(n)
}

/// Bucket count after a load-factor growth: the smallest prime strictly
/// greater than twice `capacity`.
pub fn grown_capacity(capacity: usize) -> Option<usize> {
    next_prime(capacity.checked_mul(2)?)
}
