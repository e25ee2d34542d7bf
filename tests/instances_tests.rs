//! Tests for the canonical instances and how they compose.

#![cfg(feature = "instances")]

use std::cell::RefCell;
use std::collections::HashMap;
use std::fs;

use funcops::error::ConsumeError;
use funcops::function::{Consumer, Mapper, Predicate, Transform2, and, compose_unary, then};
use funcops::instances::binary::longer_string;
use funcops::instances::collections::{all_even, non_empty};
use funcops::instances::numeric::{prefixed_hex, sum, to_prefixed_hex};
use funcops::instances::sinks::{FileAppender, PrefixedLine};
use funcops::instances::strings::{
    concat, lowercase_word_initials, remove_underscores, to_lowercase, to_uppercase,
};
use funcops::merge::merge;
use rstest::rstest;

// =============================================================================
// Mappers and transforms
// =============================================================================

#[rstest]
#[case(255, "0xff")]
#[case(0, "0x0")]
#[case(16, "0x10")]
#[case(425, "0x1a9")]
fn test_prefixed_hex(#[case] input: i32, #[case] expected: &str) {
    assert_eq!(to_prefixed_hex(input), expected);
    assert_eq!(prefixed_hex::<i32>().map(input), expected);
}

#[rstest]
fn test_prefixed_hex_of_negative_is_twos_complement() {
    assert_eq!(to_prefixed_hex(-1_i32), "0xffffffff");
}

#[rstest]
fn test_string_transform_pipeline() {
    let transform = compose_unary(remove_underscores, lowercase_word_initials);

    assert_eq!(
        transform.map("Welcome_To_Functional_Programming!".to_string()),
        "Welcome to functional programming!"
    );
}

#[rstest]
fn test_string_transform_order_matters() {
    let underscores_first = compose_unary(remove_underscores, lowercase_word_initials);
    let initials_first = compose_unary(lowercase_word_initials, remove_underscores);

    let input = "Hello_World Again".to_string();
    assert_eq!(underscores_first.map(input.clone()), "Hello world again");
    assert_eq!(initials_first.map(input), "Hello World again");
}

#[rstest]
fn test_string_transform_three_steps() {
    let transform = compose_unary(compose_unary(remove_underscores, lowercase_word_initials), to_uppercase);
    assert_eq!(transform.map("a_b".to_string()), "A B");
}

#[rstest]
fn test_lowercase_then_concat() {
    let greeting = concat.combine("My name is: ".to_string(), to_lowercase.map("JESSE".to_string()));
    assert_eq!(greeting, "My name is: jesse");
}

#[rstest]
#[case("114514", "1919810", "1919810")]
#[case("long one", "short", "long one")]
#[case("same", "size", "same")]
fn test_longer_string(#[case] left: &str, #[case] right: &str, #[case] expected: &str) {
    assert_eq!(longer_string().combine(left.to_string(), right.to_string()), expected);
}

// =============================================================================
// Predicates
// =============================================================================

#[rstest]
#[case(&[2, 4, 6], true)]
#[case(&[2, 3, 4], false)]
#[case(&[], true)]
fn test_all_even(#[case] values: &[i32], #[case] expected: bool) {
    assert_eq!(all_even(values), expected);
}

#[rstest]
#[case(&[2, 4, 6], true)]
#[case(&[], false)]
#[case(&[1, 2, 3, 6, 245, 425, 45, 44, 98], false)]
fn test_non_empty_and_all_even(#[case] values: &[i32], #[case] expected: bool) {
    let check = and(non_empty::<i32>, all_even::<i32>);
    assert_eq!(check.test(values), expected);
}

// =============================================================================
// Consumers
// =============================================================================

#[rstest]
fn test_file_appender_appends_without_truncating() {
    let directory = tempfile::tempdir().unwrap();
    let path = directory.path().join("info.log");
    let appender = FileAppender::new(&path);

    appender.accept("a\n").unwrap();
    appender.accept("b\n").unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "a\nb\n");
}

#[rstest]
fn test_file_appender_keeps_existing_content() {
    let directory = tempfile::tempdir().unwrap();
    let path = directory.path().join("existing.log");
    fs::write(&path, "first\n").unwrap();

    FileAppender::new(&path).accept("second\n").unwrap();

    assert_eq!(fs::read_to_string(&path).unwrap(), "first\nsecond\n");
}

#[rstest]
fn test_file_then_log_chain() {
    let directory = tempfile::tempdir().unwrap();
    let path = directory.path().join("chain.log");
    let log = PrefixedLine::new("LOG: ", Vec::<u8>::new());
    let file_seen_by_log = RefCell::new(Vec::<String>::new());

    {
        let log_after_file = |value: &str| -> Result<(), ConsumeError> {
            file_seen_by_log
                .borrow_mut()
                .push(fs::read_to_string(&path).unwrap_or_default());
            log.accept(value)
        };
        let chain = then(FileAppender::new(&path), log_after_file);

        chain.accept("Today is: now\n").unwrap();
        chain.accept("Tomorrow\n").unwrap();
    }

    assert_eq!(fs::read_to_string(&path).unwrap(), "Today is: now\nTomorrow\n");
    assert_eq!(
        file_seen_by_log.into_inner(),
        vec!["Today is: now\n".to_string(), "Today is: now\nTomorrow\n".to_string()]
    );
    assert_eq!(
        String::from_utf8(log.into_inner()).unwrap(),
        "LOG: Today is: now\n\nLOG: Tomorrow\n\n"
    );
}

#[rstest]
fn test_failed_append_stops_chain() {
    let directory = tempfile::tempdir().unwrap();
    let logged = std::cell::Cell::new(false);
    let log = |_: &str| -> Result<(), ConsumeError> {
        logged.set(true);
        Ok(())
    };

    let chain = then(FileAppender::new(directory.path()), log);
    let error = chain.accept("lost\n").unwrap_err();

    assert_eq!(error.failed_step(), Some(0));
    assert!(matches!(error.into_step_source(), ConsumeError::Append { .. }));
    assert!(!logged.get());
}

// =============================================================================
// Merge
// =============================================================================

#[rstest]
fn test_merge_counts_keys() {
    let mut counts: HashMap<String, i32> = ["Jesse", "Mike", "Lisa", "Bob"]
        .into_iter()
        .map(|name| (name.to_string(), 1))
        .collect();

    for key in ["Mike", "Mike", "Alice"] {
        merge(&mut counts, key.to_string(), 1, &sum::<i32>);
    }

    assert_eq!(counts["Mike"], 3);
    assert_eq!(counts["Alice"], 1);
    assert_eq!(counts["Bob"], 1);
    assert_eq!(counts.len(), 5);
}

#[rstest]
fn test_merge_with_longer_string() {
    let mut names: HashMap<u8, String> = HashMap::new();
    let longer = longer_string();

    merge(&mut names, 1, "ab".to_string(), &longer);
    merge(&mut names, 1, "abcd".to_string(), &longer);
    merge(&mut names, 1, "xyz".to_string(), &longer);

    assert_eq!(names[&1], "abcd");
}
