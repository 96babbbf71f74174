//! Coordinate extraction engine: tokenizer, pattern catalog, matcher,
//! confidence scoring, and result selection.
//!
//! Data flow: raw string → [`tokenizer::tokenize`] → token sequence →
//! [`matcher::attempt`] per (pattern, offset) → coordinate candidates →
//! [`selector`] ranks by confidence and picks the winner. Extraction is
//! a pure function of the input, the fixed catalog, and the global
//! precision setting; concurrent calls on different inputs share nothing
//! mutable.

pub mod coordinate;
pub mod matcher;
pub mod patterns;
pub mod selector;
pub mod tokenizer;

use coordinate::Coordinate;
use tracing::{debug, info};

/// Collect every candidate coordinate in `input`, in discovery order.
///
/// Deliberately exhaustive: every pattern whose trigger matches the raw
/// input is attempted at every token offset, because overlapping
/// candidates must be compared by confidence afterwards.
fn candidates(input: &str) -> Vec<Coordinate> {
    let tokens = tokenizer::tokenize(input);
    let mut found = Vec::new();

    for pattern in patterns::catalog() {
        if !pattern.trigger_matches(input) {
            continue;
        }
        for offset in 0..tokens.len() {
            let Some(state) = matcher::attempt(pattern, &tokens, offset) else {
                continue;
            };
            if let Some(candidate) = Coordinate::build(pattern, state) {
                debug!(
                    "candidate {} at offset {} via {} (confidence {})",
                    candidate,
                    offset,
                    pattern.name,
                    candidate.confidence()
                );
                found.push(candidate);
            }
        }
    }

    found
}

/// Extract the single best coordinate from `input`, if any.
pub fn find(input: &str) -> Option<Coordinate> {
    let best = selector::best_match(candidates(input));
    if let Some(ref coordinate) = best {
        info!(
            "matched {} via {} (confidence {})",
            coordinate,
            coordinate.pattern_name(),
            coordinate.confidence()
        );
    }
    best
}

/// Every positive-confidence candidate in `input`, highest confidence
/// first. For diagnostic and verbose output.
pub fn find_all(input: &str) -> Vec<Coordinate> {
    selector::matches(candidates(input))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_compass_outranks_decimal_distractors() {
        let coordinate =
            find("-37.5123, 0, 37 29 49N, 122 14 25E, -12.671, 41.014").expect("matches");
        assert_eq!(coordinate.latitude(), "37.4969444");
        assert_eq!(coordinate.longitude(), "122.240277");
    }

    #[test]
    fn test_reversed_pair_for_strava_urls() {
        let coordinate =
            find("http://labs.strava.com/heatmap/#15/-122.30854/37.50493/gray/both")
                .expect("matches");
        assert_eq!(coordinate.latitude(), "37.50493");
        assert_eq!(coordinate.longitude(), "-122.30854");
    }

    #[test]
    fn test_trailing_zoom_noise_is_ignored() {
        let coordinate = find("37.6188888, -122.375 z=3.0000").expect("matches");
        assert_eq!(coordinate.to_string(), "37.6188888,-122.375");
    }

    #[test]
    fn test_empty_input_finds_nothing() {
        assert!(find("").is_none());
        assert!(find("no numbers here").is_none());
        assert!(find_all("").is_empty());
    }

    #[test]
    fn test_map_url_with_zoom_suffix() {
        let coordinate =
            find("https://www.google.com/maps/@45.876349,9.655686,10z").expect("matches");
        assert_eq!(coordinate.to_string(), "45.876349,9.655686");
    }
}
