//! `geourl <geo string>...` — translate coordinate strings into map URLs.

use crate::cli::output::{self, Styled};
use crate::{extract, urls};
use anyhow::Result;
use serde::Serialize;

/// JSON report for one matched input.
#[derive(Serialize)]
struct MatchReport<'a> {
    input: &'a str,
    latitude: String,
    longitude: String,
    confidence: u32,
    pattern: &'static str,
    urls: Vec<String>,
}

impl<'a> MatchReport<'a> {
    fn new(input: &'a str, coordinate: &extract::coordinate::Coordinate) -> Self {
        Self {
            input,
            latitude: coordinate.latitude(),
            longitude: coordinate.longitude(),
            confidence: coordinate.confidence(),
            pattern: coordinate.pattern_name(),
            urls: urls::render(coordinate),
        }
    }
}

/// Process each input string independently. Returns false if any input
/// produced no match.
pub fn run(inputs: &[String], all: bool) -> Result<bool> {
    let s = Styled::new();
    let mut all_matched = true;

    for input in inputs {
        let matched = if all {
            run_all(&s, input)?
        } else {
            run_best(&s, input)?
        };
        all_matched &= matched;
    }

    Ok(all_matched)
}

/// Print the rendered URLs for the best match of one input.
fn run_best(s: &Styled, input: &str) -> Result<bool> {
    match extract::find(input) {
        Some(coordinate) => {
            if output::is_json() {
                output::print_json(&serde_json::to_value(MatchReport::new(input, &coordinate))?);
            } else {
                for url in urls::render(&coordinate) {
                    println!("{url}");
                }
            }
            Ok(true)
        }
        None => {
            no_match(s, input);
            Ok(false)
        }
    }
}

/// Print every positive-confidence candidate for one input.
fn run_all(s: &Styled, input: &str) -> Result<bool> {
    let ranked = extract::find_all(input);
    if ranked.is_empty() {
        no_match(s, input);
        return Ok(false);
    }

    if output::is_json() {
        let reports: Vec<MatchReport> = ranked
            .iter()
            .map(|coordinate| MatchReport::new(input, coordinate))
            .collect();
        output::print_json(&serde_json::to_value(reports)?);
    } else {
        for coordinate in &ranked {
            println!(
                "{coordinate}  {}",
                s.dim(&format!(
                    "confidence={} pattern={}",
                    coordinate.confidence(),
                    coordinate.pattern_name()
                ))
            );
        }
    }

    Ok(true)
}

fn no_match(s: &Styled, input: &str) {
    if output::is_json() {
        output::print_json(&serde_json::json!({
            "input": input,
            "error": "no_match",
        }));
    } else {
        eprintln!("  {} no coordinate found in {input:?}", s.fail_sym());
    }
}
