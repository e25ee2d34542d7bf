//! Numeric mappers and operators.

use std::fmt::LowerHex;
use std::ops::Add;

use crate::function::{MapThen, Mapper, map_then};

/// Formats a value as lower-case hexadecimal without a prefix.
///
/// Signed values are printed as their two's-complement bit pattern.
///
/// # Examples
///
/// ```rust
/// use funcops::instances::numeric::to_hex;
///
/// assert_eq!(to_hex(255), "ff");
/// assert_eq!(to_hex(-1_i32), "ffffffff");
/// ```
pub fn to_hex<T: LowerHex>(value: T) -> String {
    format!("{value:x}")
}

/// Prepends `0x` to a hexadecimal string.
pub fn with_hex_prefix(digits: String) -> String {
    format!("0x{digits}")
}

/// The mapper [`to_hex`] followed by [`with_hex_prefix`].
pub fn prefixed_hex<T: LowerHex>() -> MapThen<fn(T) -> String, fn(String) -> String> {
    map_then(
        to_hex::<T> as fn(T) -> String,
        with_hex_prefix as fn(String) -> String,
    )
}

/// Formats a value as `0x`-prefixed lower-case hexadecimal.
///
/// # Examples
///
/// ```rust
/// use funcops::instances::numeric::to_prefixed_hex;
///
/// assert_eq!(to_prefixed_hex(255), "0xff");
/// assert_eq!(to_prefixed_hex(0), "0x0");
/// ```
pub fn to_prefixed_hex<T: LowerHex>(value: T) -> String {
    prefixed_hex().map(value)
}

/// Adds two values.
pub fn sum<T: Add<Output = T>>(left: T, right: T) -> T {
    left + right
}
