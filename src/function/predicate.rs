//! Predicates and their logical combinators.
//!
//! [`and`] and [`or`] short-circuit exactly like `&&` and `||`: the right
//! operand is evaluated only when the left one does not already decide the
//! result.
//!
//! # Laws
//!
//! For all predicates `p`, `q` and inputs `x`:
//!
//! ```text
//! and(p, q).test(x) == p.test(x) && q.test(x)
//! or(p, q).test(x)  == p.test(x) || q.test(x)
//! not(not(p)).test(x) == p.test(x)
//! ```

/// A test over a borrowed `T`.
///
/// Every `Fn(&T) -> bool` closure and function item is a `Predicate<T>`.
/// `T` may be unsized, so `Predicate<str>` and `Predicate<[i32]>` work.
///
/// # Examples
///
/// ```rust
/// use funcops::function::Predicate;
///
/// let is_blank = |text: &str| text.trim().is_empty();
/// let has_content = is_blank.negate();
///
/// assert!(has_content.test("value"));
/// assert!(!has_content.test("   "));
/// ```
pub trait Predicate<T: ?Sized> {
    /// Evaluates the predicate against `value`.
    fn test(&self, value: &T) -> bool;

    /// Method form of [`and`].
    fn and<Q>(self, other: Q) -> And<Self, Q>
    where
        Self: Sized,
        Q: Predicate<T>,
    {
        And::new(self, other)
    }

    /// Method form of [`or`].
    fn or<Q>(self, other: Q) -> Or<Self, Q>
    where
        Self: Sized,
        Q: Predicate<T>,
    {
        Or::new(self, other)
    }

    /// Method form of [`not`].
    fn negate(self) -> Not<Self>
    where
        Self: Sized,
    {
        Not::new(self)
    }
}

impl<T, F> Predicate<T> for F
where
    T: ?Sized,
    F: Fn(&T) -> bool,
{
    #[inline]
    fn test(&self, value: &T) -> bool {
        self(value)
    }
}

/// Short-circuiting conjunction. See [`and`].
#[derive(Debug, Clone, Copy)]
pub struct And<P, Q> {
    left: P,
    right: Q,
}

impl<P, Q> And<P, Q> {
    /// Creates `left && right`.
    pub const fn new(left: P, right: Q) -> Self {
        Self { left, right }
    }
}

impl<T, P, Q> Predicate<T> for And<P, Q>
where
    T: ?Sized,
    P: Predicate<T>,
    Q: Predicate<T>,
{
    #[inline]
    fn test(&self, value: &T) -> bool {
        self.left.test(value) && self.right.test(value)
    }
}

/// Short-circuiting disjunction. See [`or`].
#[derive(Debug, Clone, Copy)]
pub struct Or<P, Q> {
    left: P,
    right: Q,
}

impl<P, Q> Or<P, Q> {
    /// Creates `left || right`.
    pub const fn new(left: P, right: Q) -> Self {
        Self { left, right }
    }
}

impl<T, P, Q> Predicate<T> for Or<P, Q>
where
    T: ?Sized,
    P: Predicate<T>,
    Q: Predicate<T>,
{
    #[inline]
    fn test(&self, value: &T) -> bool {
        self.left.test(value) || self.right.test(value)
    }
}

/// Logical negation. See [`not`].
#[derive(Debug, Clone, Copy)]
pub struct Not<P> {
    inner: P,
}

impl<P> Not<P> {
    /// Creates `!inner`.
    pub const fn new(inner: P) -> Self {
        Self { inner }
    }
}

impl<T, P> Predicate<T> for Not<P>
where
    T: ?Sized,
    P: Predicate<T>,
{
    #[inline]
    fn test(&self, value: &T) -> bool {
        !self.inner.test(value)
    }
}

/// Combines two predicates with short-circuiting `&&`.
///
/// `right` is evaluated only if `left` holds.
///
/// # Examples
///
/// ```rust
/// use funcops::function::{Predicate, and};
///
/// let small_even = and(|n: &i32| *n < 10, |n: &i32| n % 2 == 0);
/// assert!(small_even.test(&4));
/// assert!(!small_even.test(&12));
/// assert!(!small_even.test(&3));
/// ```
pub const fn and<T, P, Q>(left: P, right: Q) -> And<P, Q>
where
    T: ?Sized,
    P: Predicate<T>,
    Q: Predicate<T>,
{
    And::new(left, right)
}

/// Combines two predicates with short-circuiting `||`.
///
/// `right` is evaluated only if `left` does not hold.
///
/// # Examples
///
/// ```rust
/// use funcops::function::{Predicate, or};
///
/// let extreme = or(|n: &i32| *n < -100, |n: &i32| *n > 100);
/// assert!(extreme.test(&500));
/// assert!(!extreme.test(&0));
/// ```
pub const fn or<T, P, Q>(left: P, right: Q) -> Or<P, Q>
where
    T: ?Sized,
    P: Predicate<T>,
    Q: Predicate<T>,
{
    Or::new(left, right)
}

/// Negates a predicate.
pub const fn not<T, P>(inner: P) -> Not<P>
where
    T: ?Sized,
    P: Predicate<T>,
{
    Not::new(inner)
}
