//! Binary operators over a single type.
//!
//! Binary operators are not chained. They are combined only by selecting
//! one of their two operands through a derived key, see [`max_by_key`] and
//! [`min_by_key`].

use std::cmp::Ordering;
use std::marker::PhantomData;

/// A function from two `T` values to a `T`.
///
/// Every `Fn(T, T) -> T` closure and function item is a `Transform2<T>`.
///
/// # Examples
///
/// ```rust
/// use funcops::function::Transform2;
///
/// let calculate = |a: f64, b: f64| (a + b) * (a - b);
/// assert_eq!(calculate.combine(5.0, 3.0), 16.0);
/// ```
pub trait Transform2<T> {
    /// Combines `left` and `right` into a new value.
    fn combine(&self, left: T, right: T) -> T;
}

impl<T, F> Transform2<T> for F
where
    F: Fn(T, T) -> T,
{
    #[inline]
    fn combine(&self, left: T, right: T) -> T {
        self(left, right)
    }
}

/// Keeps the operand with the greater key. Built by [`max_by_key`].
#[derive(Debug, Clone, Copy)]
pub struct MaxBy<K, O> {
    key: K,
    ordering: PhantomData<fn() -> O>,
}

/// Keeps the operand with the smaller key. Built by [`min_by_key`].
#[derive(Debug, Clone, Copy)]
pub struct MinBy<K, O> {
    key: K,
    ordering: PhantomData<fn() -> O>,
}

impl<T, K, O> Transform2<T> for MaxBy<K, O>
where
    K: Fn(&T) -> O,
    O: Ord,
{
    fn combine(&self, left: T, right: T) -> T {
        match (self.key)(&left).cmp(&(self.key)(&right)) {
            Ordering::Less => right,
            Ordering::Equal | Ordering::Greater => left,
        }
    }
}

impl<T, K, O> Transform2<T> for MinBy<K, O>
where
    K: Fn(&T) -> O,
    O: Ord,
{
    fn combine(&self, left: T, right: T) -> T {
        match (self.key)(&left).cmp(&(self.key)(&right)) {
            Ordering::Greater => right,
            Ordering::Equal | Ordering::Less => left,
        }
    }
}

/// Returns an operator keeping whichever operand has the greater `key`.
///
/// On a tie the left operand is kept.
///
/// # Examples
///
/// ```rust
/// use funcops::function::{Transform2, max_by_key};
///
/// let longer = max_by_key(|s: &&str| s.len());
/// assert_eq!(longer.combine("114514", "1919810"), "1919810");
/// assert_eq!(longer.combine("ab", "cd"), "ab");
/// ```
pub const fn max_by_key<K, O>(key: K) -> MaxBy<K, O> {
    MaxBy {
        key,
        ordering: PhantomData,
    }
}

/// Returns an operator keeping whichever operand has the smaller `key`.
///
/// On a tie the left operand is kept.
pub const fn min_by_key<K, O>(key: K) -> MinBy<K, O> {
    MinBy {
        key,
        ordering: PhantomData,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_by_key_keeps_smaller() {
        let closest_to_zero = min_by_key(|n: &i32| n.abs());
        assert_eq!(closest_to_zero.combine(-7, 3), 3);
        assert_eq!(closest_to_zero.combine(2, -2), 2);
    }

    #[test]
    fn test_max_by_key_keeps_greater() {
        let larger_magnitude = max_by_key(|n: &i32| n.abs());
        assert_eq!(larger_magnitude.combine(-7, 3), -7);
        assert_eq!(larger_magnitude.combine(-2, 2), -2);
    }

    #[test]
    fn test_selectors_are_copy() {
        let shortest = min_by_key(|s: &&str| s.len());
        let copied = shortest;
        assert_eq!(shortest.combine("abc", "de"), "de");
        assert_eq!(copied.combine("x", "yz"), "x");

        let longest = max_by_key(|n: &u8| *n);
        let reused = [longest, longest];
        assert_eq!(reused[0].combine(1, 9), 9);
        assert_eq!(reused[1].combine(9, 1), 9);
    }

    #[test]
    fn test_plain_function_is_operator() {
        fn sum(left: i32, right: i32) -> i32 {
            left + right
        }
        assert_eq!(sum.combine(2, 3), 5);
    }
}
