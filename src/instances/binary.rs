//! Binary operator instances.

use crate::function::{MaxBy, max_by_key};

/// Keeps the longer of two strings, the left one on a tie.
///
/// # Examples
///
/// ```rust
/// use funcops::function::Transform2;
/// use funcops::instances::binary::longer_string;
///
/// let longer = longer_string();
/// assert_eq!(longer.combine("114514".to_string(), "1919810".to_string()), "1919810");
/// ```
pub fn longer_string() -> MaxBy<fn(&String) -> usize, usize> {
    max_by_key(String::len as fn(&String) -> usize)
}
