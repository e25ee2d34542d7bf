//! Predicates over slices.

use std::ops::Rem;

/// Returns `true` if every element is even.
///
/// An empty slice is vacuously all-even. Works for every primitive integer,
/// signed or unsigned.
///
/// # Examples
///
/// ```rust
/// use funcops::instances::collections::all_even;
///
/// assert!(all_even(&[2, 4, 6]));
/// assert!(!all_even(&[2, 3, 4]));
/// assert!(all_even::<i32>(&[]));
/// ```
pub fn all_even<T>(values: &[T]) -> bool
where
    T: Copy + PartialEq + Default + Rem<Output = T> + TryFrom<u8>,
{
    let Ok(two) = T::try_from(2_u8) else {
        return values.is_empty();
    };
    let zero = T::default();
    values.iter().all(|&value| value % two == zero)
}

/// Returns `true` if the slice has at least one element.
pub const fn non_empty<T>(values: &[T]) -> bool {
    !values.is_empty()
}
