//! String transforms.
//!
//! The unary ones take and return an owned `String`, so they are
//! [`Transform1<String>`](crate::function::Transform1) and compose with
//! [`compose_unary`](crate::function::compose_unary). [`concat`] is a
//! [`Transform2<String>`](crate::function::Transform2).

/// Replaces every underscore with a space.
///
/// # Examples
///
/// ```rust
/// use funcops::instances::strings::remove_underscores;
///
/// assert_eq!(
///     remove_underscores("Welcome_To_Functional_Programming!".to_string()),
///     "Welcome To Functional Programming!"
/// );
/// ```
pub fn remove_underscores(text: String) -> String {
    text.replace('_', " ")
}

/// Keeps the first word and lower-cases the first character of every
/// following space-separated word.
///
/// # Examples
///
/// ```rust
/// use funcops::instances::strings::lowercase_word_initials;
///
/// assert_eq!(
///     lowercase_word_initials("Welcome To Functional Programming!".to_string()),
///     "Welcome to functional programming!"
/// );
/// ```
pub fn lowercase_word_initials(text: String) -> String {
    let mut words = text.split(' ');
    let mut result = String::with_capacity(text.len());

    if let Some(first) = words.next() {
        result.push_str(first);
    }
    for word in words {
        result.push(' ');
        let mut characters = word.chars();
        if let Some(initial) = characters.next() {
            result.extend(initial.to_lowercase());
            result.push_str(characters.as_str());
        }
    }
    result
}

/// Lower-cases the whole string.
pub fn to_lowercase(text: String) -> String {
    text.to_lowercase()
}

/// Upper-cases the whole string.
pub fn to_uppercase(text: String) -> String {
    text.to_uppercase()
}

/// Appends `right` to `left`.
///
/// # Examples
///
/// ```rust
/// use funcops::function::Transform2;
/// use funcops::instances::strings::concat;
///
/// assert_eq!(
///     concat.combine("My name is: ".to_string(), "Jesse.".to_string()),
///     "My name is: Jesse."
/// );
/// ```
pub fn concat(mut left: String, right: String) -> String {
    left.push_str(&right);
    left
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::function::Transform2;

    #[test]
    fn test_lowercase_word_initials_keeps_spacing() {
        assert_eq!(lowercase_word_initials("A  B".to_string()), "A  b");
        assert_eq!(lowercase_word_initials(String::new()), "");
    }

    #[test]
    fn test_lowercase_word_initials_handles_non_ascii() {
        assert_eq!(
            lowercase_word_initials("Hello Ünïcode".to_string()),
            "Hello ünïcode"
        );
    }

    #[test]
    fn test_case_transforms() {
        assert_eq!(to_lowercase("MiXeD".to_string()), "mixed");
        assert_eq!(to_uppercase("MiXeD".to_string()), "MIXED");
    }

    #[test]
    fn test_concat_keeps_operand_order() {
        assert_eq!(concat.combine("foo".to_string(), "bar".to_string()), "foobar");
        assert_eq!(concat.combine(String::new(), "bar".to_string()), "bar");
        assert_eq!(concat.combine("foo".to_string(), String::new()), "foo");
    }
}
