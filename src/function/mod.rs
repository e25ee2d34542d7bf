//! Capability abstractions over closures and their combinators.
//!
//! Each abstraction is a trait with a single required method and a blanket
//! implementation for the matching closure shape, so plain closures and
//! function items can be used wherever an abstraction is expected.
//!
//! # Overview
//!
//! | Trait | Method | Closure shape | Composition |
//! |---|---|---|---|
//! | [`Mapper<T>`] | `map` | `Fn(T) -> R` | [`map_then`] |
//! | [`Transform1<T>`] | `map` | `Fn(T) -> T` | [`compose_unary`], [`try_compose_unary`] |
//! | [`Transform2<T>`] | `combine` | `Fn(T, T) -> T` | [`max_by_key`], [`min_by_key`] |
//! | [`Predicate<T>`] | `test` | `Fn(&T) -> bool` | [`and`], [`or`], [`not`] |
//! | [`Producer`] | `produce` | `Fn() -> T` | [`produce_then`] |
//! | [`Consumer<T>`] | `accept` | `Fn(&T) -> Result<(), ConsumeError>` | [`then`] |
//!
//! [`ConsumeError`]: crate::error::ConsumeError
//!
//! # Examples
//!
//! ## Sequential composition
//!
//! ```
//! use funcops::function::{Mapper, map_then};
//!
//! let to_hex = |n: u32| format!("{n:x}");
//! let with_prefix = |s: String| format!("0x{s}");
//!
//! assert_eq!(map_then(to_hex, with_prefix).map(255), "0xff");
//! ```
//!
//! ## Short-circuiting predicates
//!
//! ```
//! use funcops::function::{Predicate, and};
//!
//! let non_empty = |values: &[i32]| !values.is_empty();
//! let all_even = |values: &[i32]| values.iter().all(|n| n % 2 == 0);
//!
//! let check = and(non_empty, all_even);
//! assert!(check.test(&[2, 4, 6][..]));
//! assert!(!check.test(&[][..]));
//! ```
//!
//! # Laws
//!
//! - **Associativity**: `compose_unary(compose_unary(f, g), h) == compose_unary(f, compose_unary(g, h))`
//! - **Conjunction**: `and(p, q).test(x) == p.test(x) && q.test(x)`
//! - **Disjunction**: `or(p, q).test(x) == p.test(x) || q.test(x)`
//! - **Chain order**: `then(c1, c2)` runs `c1` to completion before `c2` starts

mod binary;
mod consumer;
mod mapper;
mod predicate;
mod producer;

pub use binary::{MaxBy, MinBy, Transform2, max_by_key, min_by_key};
pub use consumer::{Consumer, Then, then};
pub use mapper::{
    MapThen, Mapper, Transform1, compose_unary, identity, map_then, try_compose_unary,
};
pub use predicate::{And, Not, Or, Predicate, and, not, or};
pub use producer::{ProduceThen, Producer, produce_then};
