//! The three tracked terms of the sequence and their rolling update.

use std::fmt;

use num_bigint::BigUint;
use num_traits::{One, Zero};

/// Three consecutive-looking terms of the Fibonacci sequence.
///
/// Terms are arbitrary precision, so advancing never overflows. A value built
/// by [`Terms::seed`] and moved only by [`Terms::advance`] always satisfies
/// `next == current + previous` and `current >= previous`.
///
/// # Example
/// ```
/// use fibseq_core::terms::Terms;
///
/// let mut terms = Terms::seed();
/// let fibs: Vec<String> = (0..7).map(|_| terms.advance().to_string()).collect();
/// assert_eq!(fibs, ["1", "1", "2", "3", "5", "8", "13"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Terms {
    pub previous: BigUint,
    pub current: BigUint,
    pub next: BigUint,
}

impl Terms {
    /// Build terms from explicit values. No consistency check is performed.
    #[must_use]
    pub fn new(previous: BigUint, current: BigUint, next: BigUint) -> Self {
        Self {
            previous,
            current,
            next,
        }
    }

    /// The canonical starting point `(0, 0, 1)`.
    #[must_use]
    pub fn seed() -> Self {
        Self::new(BigUint::zero(), BigUint::zero(), BigUint::one())
    }

    /// Rebuild the surrounding terms from a lone `current` value.
    ///
    /// `previous` is `current / φ` rounded to the nearest integer and `next`
    /// is `current + previous`. The result is exact when `current` is a true
    /// Fibonacci term (from F(2) upward); any other value yields a pair that
    /// is not part of the real sequence.
    #[must_use]
    pub fn from_current(current: BigUint) -> Self {
        let previous = predecessor(&current);
        let next = &current + &previous;
        Self::new(previous, current, next)
    }

    /// Shift forward by one term and return the new `current`.
    pub fn advance(&mut self) -> BigUint {
        let next = &self.current + &self.next;
        let current = std::mem::replace(&mut self.next, next);
        self.previous = std::mem::replace(&mut self.current, current);
        self.current.clone()
    }

    /// Whether the sequence invariant holds for these terms.
    #[must_use]
    pub fn is_consistent(&self) -> bool {
        self.next == &self.current + &self.previous && self.current >= self.previous
    }
}

impl Default for Terms {
    fn default() -> Self {
        Self::seed()
    }
}

impl fmt::Display for Terms {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {}, {})", self.previous, self.current, self.next)
    }
}

/// `round(c / φ)` evaluated in integers.
///
/// `c / φ = (c·√5 − c) / 2`. With `t = ⌊√(5c²)⌋`, `c·√5` is irrational for any
/// `c > 0`, and rounding `(c·√5 − c) / 2` to nearest reduces to
/// `⌊(t + 1 − c) / 2⌋`. `t >= 2c` so the subtraction cannot underflow.
fn predecessor(current: &BigUint) -> BigUint {
    let t = (current * current * 5u32).sqrt();
    (t + 1u32 - current) >> 1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn terms(p: u64, c: u64, n: u64) -> Terms {
        Terms::new(BigUint::from(p), BigUint::from(c), BigUint::from(n))
    }

    #[test]
    fn seed_values() {
        assert_eq!(Terms::seed(), terms(0, 0, 1));
        assert!(Terms::seed().is_consistent());
    }

    #[test]
    fn advance_from_seed() {
        let mut t = Terms::seed();
        assert_eq!(t.advance(), BigUint::from(1u32));
        assert_eq!(t, terms(0, 1, 1));
        assert_eq!(t.advance(), BigUint::from(1u32));
        assert_eq!(t, terms(1, 1, 2));
        assert_eq!(t.advance(), BigUint::from(2u32));
        assert_eq!(t, terms(1, 2, 3));
    }

    #[test]
    fn advance_shifts_terms() {
        let mut t = terms(3, 5, 8);
        assert_eq!(t.advance(), BigUint::from(8u32));
        assert_eq!(t, terms(5, 8, 13));
    }

    #[test]
    fn from_current_five() {
        assert_eq!(Terms::from_current(BigUint::from(5u32)), terms(3, 5, 8));
    }

    #[test]
    fn from_current_small_values() {
        assert_eq!(Terms::from_current(BigUint::zero()), terms(0, 0, 0));
        assert_eq!(Terms::from_current(BigUint::one()), terms(1, 1, 2));
        assert_eq!(Terms::from_current(BigUint::from(2u32)), terms(1, 2, 3));
        assert_eq!(Terms::from_current(BigUint::from(144u32)), terms(89, 144, 233));
    }

    #[test]
    fn from_current_non_fibonacci_rounds_to_nearest() {
        // 4 / φ ≈ 2.47, 6 / φ ≈ 3.71, 100 / φ ≈ 61.8
        assert_eq!(Terms::from_current(BigUint::from(4u32)), terms(2, 4, 6));
        assert_eq!(Terms::from_current(BigUint::from(6u32)), terms(4, 6, 10));
        assert_eq!(Terms::from_current(BigUint::from(100u32)), terms(62, 100, 162));
    }

    #[test]
    fn from_current_beyond_f64_precision() {
        // F(100) and F(99); far past where a float division would be exact.
        let f99: BigUint = "218922995834555169026".parse().unwrap();
        let f100: BigUint = "354224848179261915075".parse().unwrap();
        let f101: BigUint = "573147844013817084101".parse().unwrap();
        assert_eq!(Terms::from_current(f100.clone()), Terms::new(f99, f100, f101));
    }

    #[test]
    fn consistency_check() {
        assert!(terms(3, 5, 8).is_consistent());
        assert!(!terms(3, 5, 9).is_consistent());
        assert!(!terms(5, 3, 8).is_consistent());
    }

    #[test]
    fn display() {
        assert_eq!(terms(3, 5, 8).to_string(), "(3, 5, 8)");
    }
}
