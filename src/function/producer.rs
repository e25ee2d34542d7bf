//! Producers: functions of no arguments.

use super::mapper::Mapper;

/// A source of values.
///
/// Every `Fn() -> T` closure and function item is a `Producer` with
/// `Output = T`. A producer may read external state such as the clock.
///
/// # Examples
///
/// ```rust
/// use funcops::function::Producer;
///
/// let answer = || 42;
/// assert_eq!(answer.produce(), 42);
/// assert_eq!(answer.then_map(|n: i32| n * 2).produce(), 84);
/// ```
pub trait Producer {
    /// The type of the produced values.
    type Output;

    /// Produces a value.
    fn produce(&self) -> Self::Output;

    /// Method form of [`produce_then`].
    fn then_map<M>(self, mapper: M) -> ProduceThen<Self, M>
    where
        Self: Sized,
        M: Mapper<Self::Output>,
    {
        ProduceThen::new(self, mapper)
    }
}

impl<T, F> Producer for F
where
    F: Fn() -> T,
{
    type Output = T;

    #[inline]
    fn produce(&self) -> T {
        self()
    }
}

/// A producer followed by a mapper. Built by [`produce_then`].
#[derive(Debug, Clone, Copy)]
pub struct ProduceThen<P, M> {
    producer: P,
    mapper: M,
}

impl<P, M> ProduceThen<P, M> {
    /// Creates `mapper(producer())`.
    pub const fn new(producer: P, mapper: M) -> Self {
        Self { producer, mapper }
    }
}

impl<P, M> Producer for ProduceThen<P, M>
where
    P: Producer,
    M: Mapper<P::Output>,
{
    type Output = M::Output;

    #[inline]
    fn produce(&self) -> Self::Output {
        self.mapper.map(self.producer.produce())
    }
}

/// Produces a value with `producer` and passes it through `mapper`.
pub const fn produce_then<P, M>(producer: P, mapper: M) -> ProduceThen<P, M>
where
    P: Producer,
    M: Mapper<P::Output>,
{
    ProduceThen::new(producer, mapper)
}
