//! # funcops
//!
//! Composable higher-order-function abstractions for Rust.
//!
//! ## Overview
//!
//! - **Abstractions**: `Mapper`, `Transform1`, `Transform2`, `Predicate`,
//!   `Producer`, `Consumer`, each implemented for the matching closures
//! - **Combinators**: `compose_unary`, `map_then`, `and`, `or`, `not`,
//!   `then`, `produce_then`, `max_by_key`, `min_by_key`
//! - **Instances**: string, numeric, collection, clock and sink instances
//! - **Merge**: folding values into a caller-owned map with a binary operator
//!
//! ## Feature Flags
//!
//! - `instances`: canonical instances and the demo binary (enabled by default)
//!
//! ## Example
//!
//! ```rust
//! use funcops::prelude::*;
//!
//! let shout = compose_unary(|s: String| s.replace('_', " "), |s: String| s.to_uppercase());
//! assert_eq!(shout.map("say_hello".to_string()), "SAY HELLO");
//!
//! let small_even = and(|n: &i32| *n < 10, |n: &i32| n % 2 == 0);
//! assert!(small_even.test(&4));
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports the abstractions, their combinators and the error type.
///
/// # Usage
///
/// ```rust
/// use funcops::prelude::*;
/// ```
pub mod prelude {
    pub use crate::error::ConsumeError;
    pub use crate::function::*;
    pub use crate::merge::merge;
}

pub mod config;
pub mod error;
pub mod function;
pub mod merge;

#[cfg(feature = "instances")]
pub mod instances;
