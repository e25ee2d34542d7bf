//! Demonstration entry point.
//!
//! Runs one demonstration per abstraction, in order, printing what each
//! one does and what it returns.

use std::collections::HashMap;

use anyhow::Context;
use funcops::config::DemoConfig;
use funcops::function::{
    Consumer, Mapper, Predicate, Producer, Transform2, and, compose_unary, not, produce_then, then,
};
use funcops::instances::binary::longer_string;
use funcops::instances::collections::{all_even, non_empty};
use funcops::instances::numeric::{prefixed_hex, sum};
use funcops::instances::sinks::{FileAppender, PrefixedLine};
use funcops::instances::strings::{concat, lowercase_word_initials, remove_underscores, to_lowercase};
use funcops::instances::time::{current_timestamp, format_iso_local};
use funcops::merge::merge;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

const NUMBER_LIST: [i32; 9] = [1, 2, 3, 6, 245, 425, 45, 44, 98];
const SAMPLE_TEXT: &str = "Welcome_To_Functional_Programming!";
const MERGE_KEYS: [&str; 4] = ["Mike", "Jesse", "Mike", "Alice"];
const BASIC_NUMBERS: [i32; 7] = [1, 1, 2, 3, 4, 5, 6];

fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info,funcops=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = match DemoConfig::from_env() {
        Ok(config) => config,
        Err(error) => {
            tracing::warn!("Failed to load configuration from environment: {error}");
            tracing::info!("Using default configuration");
            DemoConfig::default()
        }
    };
    tracing::info!(log_file = %config.log_file.display(), "Starting demonstrations");

    demonstrate_basics().context("basic demonstration failed")?;
    demonstrate_unary();
    demonstrate_binary();
    demonstrate_predicate();
    demonstrate_mapper();
    demonstrate_producer();
    demonstrate_consumer(&config).context("consumer demonstration failed")?;
    demonstrate_calculate();
    demonstrate_merge();

    tracing::info!("Demonstrations finished");
    Ok(())
}

fn demonstrate_basics() -> Result<(), funcops::error::ConsumeError> {
    println!("Transform1: lower-case");
    println!("Old String: JESSE");
    println!("New String: {}\n", to_lowercase.map("JESSE".to_string()));

    let (left, right) = ("My name is: ".to_string(), "Jesse.".to_string());
    println!("Transform2: concatenate");
    println!("Old String: 1: {left}, 2: {right}");
    println!("New String: {}\n", concat.combine(left, right));

    let values = [1, 2, 3, 4, 5];
    println!("Predicate: is empty");
    println!("{values:?} -> {}\n", not(non_empty::<i32>).test(&values[..]));

    println!("Producer: current local timestamp");
    println!("{}\n", format_iso_local(current_timestamp.produce()));

    println!("Consumer: print a line");
    PrefixedLine::stdout("").accept(format_iso_local(current_timestamp()).as_str())?;
    println!();

    println!("Mapper: list of integers to list of strings");
    let to_strings = |values: &[i32]| values.iter().map(i32::to_string).collect::<Vec<_>>();
    println!("{}\n", to_strings.map(&BASIC_NUMBERS[..]).join(" "));
    Ok(())
}

fn demonstrate_unary() {
    println!("Transform1: remove underscores, then lower-case word initials");
    let transform = compose_unary(remove_underscores, lowercase_word_initials);
    println!("Old String: {SAMPLE_TEXT}");
    println!("New String: {}\n", transform.map(SAMPLE_TEXT.to_string()));
}

fn demonstrate_binary() {
    let (left, right) = ("114514".to_string(), "1919810".to_string());
    println!("Transform2: keep the longer string");
    println!("Old String: 1: {left}, 2: {right}");
    println!("New String: {}\n", longer_string().combine(left, right));
}

fn demonstrate_predicate() {
    println!("Predicate: non-empty and all even");
    let check = and(non_empty::<i32>, all_even::<i32>);
    println!("{NUMBER_LIST:?} -> {}\n", check.test(&NUMBER_LIST[..]));
}

fn demonstrate_mapper() {
    println!("Mapper: integer to 0x-prefixed hexadecimal");
    let to_hex = prefixed_hex::<i32>();
    let formatted: Vec<String> = NUMBER_LIST.iter().map(|&n| to_hex.map(n)).collect();
    println!("{}\n", formatted.join(" "));
}

fn demonstrate_producer() {
    println!("Producer: current local timestamp");
    let now = produce_then(current_timestamp, format_iso_local);
    println!("{}\n", now.produce());
}

fn demonstrate_consumer(config: &DemoConfig) -> Result<(), funcops::error::ConsumeError> {
    println!("Consumer: append to {}, then log", config.log_file.display());
    let record = then(
        FileAppender::new(&config.log_file),
        PrefixedLine::stdout(config.log_prefix.as_str()),
    );
    let line = format!("Today is: {}\n", format_iso_local(current_timestamp()));
    record.accept(line.as_str())?;
    println!();
    Ok(())
}

fn demonstrate_calculate() {
    println!("Transform2: ((a + b) * (a - b)) / 114 + 514 - 810");
    let calculate = |a: f64, b: f64| ((a + b) * (a - b)) / 114.0 + 514.0 - 810.0;
    println!("Result = {}\n", calculate.combine(1_919_810.0, 114_514.0));
}

fn demonstrate_merge() {
    println!("Merge: count keys with a summing operator");
    let mut counts: HashMap<String, i32> = ["Jesse", "Mike", "Lisa", "Bob"]
        .into_iter()
        .map(|name| (name.to_string(), 1))
        .collect();

    for key in MERGE_KEYS {
        let count = merge(&mut counts, key.to_string(), 1, &sum::<i32>);
        println!("{key} -> {count}");
    }

    let mut entries: Vec<_> = counts.into_iter().collect();
    entries.sort();
    for (key, value) in entries {
        println!("[{key}, {value}]");
    }
    println!();
}
