//! Ready-made instances of the [`function`](crate::function) abstractions.
//!
//! | Module | Instances | Abstraction |
//! |---|---|---|
//! | [`strings`] | underscore removal, word-initial lower-casing, case changes | `Transform1<String>` |
//! | [`numeric`] | hex formatting, `0x` prefixing, sum | `Mapper`, `Transform2` |
//! | [`binary`] | longer of two strings | `Transform2<String>` |
//! | [`collections`] | all-even, non-empty | `Predicate<[T]>` |
//! | [`time`] | current local timestamp, ISO formatting | `Producer`, `Mapper` |
//! | [`sinks`] | prefixed line writer, file appender | `Consumer` |

pub mod binary;
pub mod collections;
pub mod numeric;
pub mod sinks;
pub mod strings;
pub mod time;
