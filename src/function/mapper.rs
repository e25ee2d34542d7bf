//! Mappers and unary transforms.
//!
//! A [`Mapper<T>`] turns a `T` into its `Output`. A [`Transform1<T>`] is the
//! special case where the output type is `T` again, so every composition
//! operator on mappers is also available on unary transforms.
//!
//! # Laws
//!
//! - **Associativity**: `map_then(map_then(f, g), h) == map_then(f, map_then(g, h))`
//! - **Identity**: `map_then(identity, f) == f == map_then(f, identity)`

/// A function from `T` to [`Mapper::Output`].
///
/// Every `Fn(T) -> R` closure and function item is a `Mapper<T>` with
/// `Output = R`.
///
/// # Examples
///
/// ```rust
/// use funcops::function::Mapper;
///
/// fn length(text: String) -> usize { text.len() }
///
/// assert_eq!(length.map(String::from("four")), 4);
/// ```
pub trait Mapper<T> {
    /// The type produced by the mapper.
    type Output;

    /// Applies the mapper to `input`.
    fn map(&self, input: T) -> Self::Output;

    /// Returns a mapper that applies `self` and then `next` to the result.
    ///
    /// Method form of [`map_then`].
    fn and_then<G>(self, next: G) -> MapThen<Self, G>
    where
        Self: Sized,
        G: Mapper<Self::Output>,
    {
        MapThen::new(self, next)
    }
}

impl<T, R, F> Mapper<T> for F
where
    F: Fn(T) -> R,
{
    type Output = R;

    #[inline]
    fn map(&self, input: T) -> R {
        self(input)
    }
}

/// A function from `T` to `T`.
///
/// Implemented for every mapper whose output is its input type; it adds no
/// methods of its own.
pub trait Transform1<T>: Mapper<T, Output = T> {}

impl<T, M> Transform1<T> for M where M: Mapper<T, Output = T> {}

/// Returns the value unchanged.
///
/// The unit of [`map_then`] and [`compose_unary`].
///
/// # Examples
///
/// ```rust
/// use funcops::function::{Mapper, identity, map_then};
///
/// let to_text = |n: i32| n.to_string();
/// assert_eq!(map_then(identity, to_text).map(7), "7");
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Sequential composition of two mappers, built by [`map_then`] or
/// [`compose_unary`].
#[derive(Debug, Clone, Copy)]
pub struct MapThen<F, G> {
    first: F,
    second: G,
}

impl<F, G> MapThen<F, G> {
    /// Creates the composition `second(first(input))`.
    pub const fn new(first: F, second: G) -> Self {
        Self { first, second }
    }
}

impl<T, F, G> Mapper<T> for MapThen<F, G>
where
    F: Mapper<T>,
    G: Mapper<F::Output>,
{
    type Output = G::Output;

    #[inline]
    fn map(&self, input: T) -> Self::Output {
        self.second.map(self.first.map(input))
    }
}

/// Applies `first`, then `second` to its result.
///
/// # Examples
///
/// ```rust
/// use funcops::function::{Mapper, map_then};
///
/// let describe = map_then(|n: u8| u32::from(n) * 2, |n: u32| format!("<{n}>"));
/// assert_eq!(describe.map(21), "<42>");
/// ```
pub const fn map_then<T, F, G>(first: F, second: G) -> MapThen<F, G>
where
    F: Mapper<T>,
    G: Mapper<F::Output>,
{
    MapThen::new(first, second)
}

/// Composes two unary transforms over the same type: `first`, then `second`.
///
/// # Examples
///
/// ```rust
/// use funcops::function::{Mapper, compose_unary};
///
/// let shout = compose_unary(|s: String| s.replace('_', " "), |s: String| s.to_uppercase());
/// assert_eq!(shout.map("hello_world".to_string()), "HELLO WORLD");
/// ```
pub const fn compose_unary<T, F, G>(first: F, second: G) -> MapThen<F, G>
where
    F: Transform1<T>,
    G: Transform1<T>,
{
    MapThen::new(first, second)
}

/// Composes two fallible unary transforms.
///
/// `second` runs only when `first` succeeds. The first error is returned
/// unchanged.
///
/// # Examples
///
/// ```rust
/// use funcops::function::try_compose_unary;
///
/// let halve = |n: i32| if n % 2 == 0 { Ok(n / 2) } else { Err(format!("{n} is odd")) };
/// let quarter = try_compose_unary(halve, halve);
///
/// assert_eq!(quarter(12), Ok(3));
/// assert_eq!(quarter(6), Err("3 is odd".to_string()));
/// ```
pub fn try_compose_unary<T, E, F, G>(first: F, second: G) -> impl Fn(T) -> Result<T, E>
where
    F: Fn(T) -> Result<T, E>,
    G: Fn(T) -> Result<T, E>,
{
    move |input| first(input).and_then(&second)
}
