//! Consumers: functions run for their side effect.
//!
//! Consumers are the only fallible abstraction. A chain built with
//! [`then`] runs its steps left to right and stops at the first failure,
//! reporting the failing step's position as
//! [`ConsumeError::Step`](crate::error::ConsumeError::Step). Steps that
//! already ran are not undone.

use crate::error::ConsumeError;

/// An action taking a borrowed `T`.
///
/// Every `Fn(&T) -> Result<(), ConsumeError>` closure and function item is
/// a `Consumer<T>`. `T` may be unsized.
///
/// # Examples
///
/// ```rust
/// use std::cell::RefCell;
///
/// use funcops::error::ConsumeError;
/// use funcops::function::Consumer;
///
/// let seen = RefCell::new(Vec::new());
/// let record = |value: &str| -> Result<(), ConsumeError> {
///     seen.borrow_mut().push(value.to_string());
///     Ok(())
/// };
///
/// record.accept("hello").unwrap();
/// assert_eq!(*seen.borrow(), vec!["hello".to_string()]);
/// ```
pub trait Consumer<T: ?Sized> {
    /// Consumes `value`.
    ///
    /// # Errors
    ///
    /// Returns whatever failure the side effect produced.
    fn accept(&self, value: &T) -> Result<(), ConsumeError>;

    /// Number of leaf consumers this consumer is made of.
    fn steps(&self) -> usize {
        1
    }

    /// Consumes `value` as the step at position `offset` of an enclosing
    /// chain, tagging any failure with its position.
    ///
    /// # Errors
    ///
    /// Returns [`ConsumeError::Step`] wrapping the failure.
    fn accept_at(&self, value: &T, offset: usize) -> Result<(), ConsumeError> {
        self.accept(value).map_err(|error| ConsumeError::Step {
            step: offset,
            source: Box::new(error),
        })
    }

    /// Method form of [`then`].
    fn then<C>(self, next: C) -> Then<Self, C>
    where
        Self: Sized,
        C: Consumer<T>,
    {
        Then::new(self, next)
    }
}

impl<T, F> Consumer<T> for F
where
    T: ?Sized,
    F: Fn(&T) -> Result<(), ConsumeError>,
{
    #[inline]
    fn accept(&self, value: &T) -> Result<(), ConsumeError> {
        self(value)
    }
}

/// Two consumers run in order on the same value. Built by [`then`].
#[derive(Debug, Clone, Copy)]
pub struct Then<A, B> {
    first: A,
    second: B,
}

impl<A, B> Then<A, B> {
    /// Creates a chain running `first`, then `second`.
    pub const fn new(first: A, second: B) -> Self {
        Self { first, second }
    }
}

impl<T, A, B> Consumer<T> for Then<A, B>
where
    T: ?Sized,
    A: Consumer<T>,
    B: Consumer<T>,
{
    fn accept(&self, value: &T) -> Result<(), ConsumeError> {
        Consumer::<T>::accept_at(self, value, 0).inspect_err(|error| {
            tracing::warn!(
                step = ?error.failed_step(),
                steps = Consumer::<T>::steps(self),
                "consumer chain aborted"
            );
        })
    }

    fn steps(&self) -> usize {
        self.first.steps() + self.second.steps()
    }

    fn accept_at(&self, value: &T, offset: usize) -> Result<(), ConsumeError> {
        self.first.accept_at(value, offset)?;
        self.second.accept_at(value, offset + self.first.steps())
    }
}

/// Runs `first` and then `second` on the same value.
///
/// If `first` fails, `second` is not invoked.
///
/// # Examples
///
/// ```rust
/// use std::cell::RefCell;
///
/// use funcops::error::ConsumeError;
/// use funcops::function::{Consumer, then};
///
/// let log = RefCell::new(Vec::new());
/// let first = |value: &str| -> Result<(), ConsumeError> {
///     log.borrow_mut().push(format!("first:{value}"));
///     Ok(())
/// };
/// let second = |value: &str| -> Result<(), ConsumeError> {
///     log.borrow_mut().push(format!("second:{value}"));
///     Ok(())
/// };
///
/// then(first, second).accept("hello").unwrap();
/// assert_eq!(*log.borrow(), vec!["first:hello", "second:hello"]);
/// ```
pub const fn then<T, A, B>(first: A, second: B) -> Then<A, B>
where
    T: ?Sized,
    A: Consumer<T>,
    B: Consumer<T>,
{
    Then::new(first, second)
}
