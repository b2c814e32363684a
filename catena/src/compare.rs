//! Structural comparison of records, position by position.
//!
//! Each position is compared with its own (possibly heterogeneous) `PartialEq`/`PartialOrd`,
//! left to right, stopping at the first position which decides the result. The recursion bottoms
//! out at [`End`], where the base cases are fixed as follows (`x` is any non-empty record):
//!
//! | operation | `(x, End)` | `(End, x)` | `(End, End)` |
//! | :-------- | :--------: | :--------: | :----------: |
//! | `eq`      | `false`    | `false`    | `true`       |
//! | `ne`      | `true`     | `true`     | `false`      |
//! | `lt`      | `false`    | `true`     | `false`      |
//! | `gt`      | `true`     | `false`    | `false`      |
//! | `le`      | `false`    | `true`     | `true`       |
//! | `ge`      | `true`     | `false`    | `true`       |
//!
//! These cases are asymmetric on purpose and must not be "corrected": downstream code depends on
//! exactly this table.

use std::cmp::Ordering;

use crate::chain::{End, Link};

/// Pointwise equality between two records.
///
/// `chain_ne` is computed on its own, position by position, rather than as the negation of
/// `chain_eq`.
pub trait ChainEq<Rhs = Self> {
    /// `true` iff every position compares equal and both records end at the same step.
    fn chain_eq(&self, rhs: &Rhs) -> bool;

    /// `true` iff some position compares unequal or the records end at different steps.
    fn chain_ne(&self, rhs: &Rhs) -> bool;
}

impl ChainEq<End> for End {
    fn chain_eq(&self, _: &End) -> bool {
        true
    }

    fn chain_ne(&self, _: &End) -> bool {
        false
    }
}

impl<H, T> ChainEq<End> for Link<H, T> {
    fn chain_eq(&self, _: &End) -> bool {
        false
    }

    fn chain_ne(&self, _: &End) -> bool {
        true
    }
}

impl<H, T> ChainEq<Link<H, T>> for End {
    fn chain_eq(&self, _: &Link<H, T>) -> bool {
        false
    }

    fn chain_ne(&self, _: &Link<H, T>) -> bool {
        true
    }
}

impl<H, T, RH, RT> ChainEq<Link<RH, RT>> for Link<H, T>
where
    H: PartialEq<RH>,
    T: ChainEq<RT>,
{
    fn chain_eq(&self, rhs: &Link<RH, RT>) -> bool {
        self.head == rhs.head && self.tail.chain_eq(&rhs.tail)
    }

    fn chain_ne(&self, rhs: &Link<RH, RT>) -> bool {
        self.head != rhs.head || self.tail.chain_ne(&rhs.tail)
    }
}

/// Lexicographic ordering between two records, position `0` most significant.
///
/// A position only defers to the next one when neither side is strictly ordered before the other,
/// so values which are incomparable at some position are treated as tied there.
pub trait ChainOrd<Rhs = Self> {
    /// Lexicographic `<`.
    fn chain_lt(&self, rhs: &Rhs) -> bool;

    /// Lexicographic `>`.
    fn chain_gt(&self, rhs: &Rhs) -> bool;

    /// Lexicographic `<=`.
    fn chain_le(&self, rhs: &Rhs) -> bool;

    /// Lexicographic `>=`.
    fn chain_ge(&self, rhs: &Rhs) -> bool;
}

impl ChainOrd<End> for End {
    fn chain_lt(&self, _: &End) -> bool {
        false
    }

    fn chain_gt(&self, _: &End) -> bool {
        false
    }

    fn chain_le(&self, _: &End) -> bool {
        true
    }

    fn chain_ge(&self, _: &End) -> bool {
        true
    }
}

impl<H, T> ChainOrd<End> for Link<H, T> {
    fn chain_lt(&self, _: &End) -> bool {
        false
    }

    fn chain_gt(&self, _: &End) -> bool {
        true
    }

    fn chain_le(&self, _: &End) -> bool {
        false
    }

    fn chain_ge(&self, _: &End) -> bool {
        true
    }
}

impl<H, T> ChainOrd<Link<H, T>> for End {
    fn chain_lt(&self, _: &Link<H, T>) -> bool {
        true
    }

    fn chain_gt(&self, _: &Link<H, T>) -> bool {
        false
    }

    fn chain_le(&self, _: &Link<H, T>) -> bool {
        true
    }

    fn chain_ge(&self, _: &Link<H, T>) -> bool {
        false
    }
}

impl<H, T, RH, RT> ChainOrd<Link<RH, RT>> for Link<H, T>
where
    H: PartialOrd<RH>,
    RH: PartialOrd<H>,
    T: ChainOrd<RT>,
{
    fn chain_lt(&self, rhs: &Link<RH, RT>) -> bool {
        self.head < rhs.head || !(rhs.head < self.head) && self.tail.chain_lt(&rhs.tail)
    }

    fn chain_gt(&self, rhs: &Link<RH, RT>) -> bool {
        self.head > rhs.head || !(rhs.head > self.head) && self.tail.chain_gt(&rhs.tail)
    }

    fn chain_le(&self, rhs: &Link<RH, RT>) -> bool {
        self.head <= rhs.head && (!(rhs.head <= self.head) || self.tail.chain_le(&rhs.tail))
    }

    fn chain_ge(&self, rhs: &Link<RH, RT>) -> bool {
        self.head >= rhs.head && (!(rhs.head >= self.head) || self.tail.chain_ge(&rhs.tail))
    }
}

/// Fold the four lexicographic predicates into a single `partial_cmp` answer.
pub(crate) fn partial_cmp<L, R>(lhs: &L, rhs: &R) -> Option<Ordering>
where
    L: ChainEq<R> + ChainOrd<R>,
{
    if lhs.chain_lt(rhs) {
        Some(Ordering::Less)
    } else if lhs.chain_gt(rhs) {
        Some(Ordering::Greater)
    } else if lhs.chain_eq(rhs) {
        Some(Ordering::Equal)
    } else {
        None
    }
}

impl<H, T, RH, RT> PartialEq<Link<RH, RT>> for Link<H, T>
where
    Link<H, T>: ChainEq<Link<RH, RT>>,
{
    fn eq(&self, rhs: &Link<RH, RT>) -> bool {
        self.chain_eq(rhs)
    }

    #[allow(clippy::partialeq_ne_impl)]
    fn ne(&self, rhs: &Link<RH, RT>) -> bool {
        self.chain_ne(rhs)
    }
}

impl<H, T, RH, RT> PartialOrd<Link<RH, RT>> for Link<H, T>
where
    Link<H, T>: ChainEq<Link<RH, RT>> + ChainOrd<Link<RH, RT>>,
{
    fn partial_cmp(&self, rhs: &Link<RH, RT>) -> Option<Ordering> {
        partial_cmp(self, rhs)
    }

    fn lt(&self, rhs: &Link<RH, RT>) -> bool {
        self.chain_lt(rhs)
    }

    fn gt(&self, rhs: &Link<RH, RT>) -> bool {
        self.chain_gt(rhs)
    }

    fn le(&self, rhs: &Link<RH, RT>) -> bool {
        self.chain_le(rhs)
    }

    fn ge(&self, rhs: &Link<RH, RT>) -> bool {
        self.chain_ge(rhs)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Chain;

    fn pair(a: i32, b: i32) -> Chain![i32, i32] {
        Link::new(a, Link::new(b, End))
    }

    fn one(a: i32) -> Chain![i32] {
        Link::new(a, End)
    }

    #[test]
    fn terminator_base_cases() {
        let x = one(1);

        assert!(!x.chain_lt(&End));
        assert!(End.chain_lt(&x));
        assert!(!End.chain_lt(&End));

        assert!(x.chain_gt(&End));
        assert!(!End.chain_gt(&x));
        assert!(!End.chain_gt(&End));

        assert!(!x.chain_le(&End));
        assert!(End.chain_le(&x));
        assert!(ChainOrd::chain_le(&End, &End));

        assert!(x.chain_ge(&End));
        assert!(!End.chain_ge(&x));
        assert!(ChainOrd::chain_ge(&End, &End));

        assert!(!x.chain_eq(&End));
        assert!(!End.chain_eq(&x));
        assert!(ChainEq::chain_eq(&End, &End));
        assert!(x.chain_ne(&End));
        assert!(!ChainEq::chain_ne(&End, &End));
    }

    #[test]
    fn lexicographic_order() {
        assert!(pair(1, 2) < pair(1, 3));
        assert!(!(pair(2, 1) < pair(1, 9)));
        assert!(pair(2, 1) > pair(1, 9));
        assert!(pair(1, 2) <= pair(1, 2));
        assert!(pair(1, 2) >= pair(1, 2));
        assert!(!(pair(1, 2) < pair(1, 2)));
        assert_eq!(pair(1, 2).partial_cmp(&pair(1, 2)), Some(Ordering::Equal));
        assert_eq!(pair(0, 5).partial_cmp(&pair(1, 0)), Some(Ordering::Less));
    }

    #[test]
    fn heterogeneous_positions() {
        let text: Chain![String, i32] = Link::new("a".to_string(), one(1));
        let slice: Chain![&str, i32] = Link::new("a", one(1));
        assert!(text == slice);
        assert!(!(text != slice));
    }

    #[test]
    fn incomparable_positions_tie() {
        let nan = Link::new(f64::NAN, one(1));
        let other = Link::new(f64::NAN, one(2));
        // Neither NaN orders before the other, so the second position decides.
        assert!(nan.chain_lt(&other));
        assert!(nan != other);
        assert!(!nan.chain_eq(&other));
    }

    #[test]
    fn longer_record_is_never_less() {
        let long = pair(1, 2);
        let short = one(1);
        assert!(!long.chain_lt(&short));
        assert!(long.chain_gt(&short));
        assert!(short.chain_lt(&long));
        assert!(!short.chain_eq(&long));
    }
}
