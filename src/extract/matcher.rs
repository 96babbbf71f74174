//! Walk a pattern's validator steps over a contiguous token run.

use crate::extract::patterns::PatternDefinition;
use crate::extract::tokenizer::{Direction, Token};
use rust_decimal::Decimal;

/// Partial fields accumulated while a single pattern attempt runs.
///
/// A fresh state is allocated per (pattern, start offset) attempt and
/// discarded on failure; pattern definitions themselves stay immutable
/// and shared across all attempts and inputs.
#[derive(Debug, Default)]
pub struct MatchState {
    pub lat_h: Option<Decimal>,
    pub lat_m: Option<Decimal>,
    pub lat_s: Option<Decimal>,
    pub lon_h: Option<Decimal>,
    pub lon_m: Option<Decimal>,
    pub lon_s: Option<Decimal>,
    pub lat_dec: Option<Decimal>,
    pub lon_dec: Option<Decimal>,
    /// Fraction digits of the latitude/longitude literals, for the
    /// decimal-family confidence score.
    pub lat_dec_digits: usize,
    pub lon_dec_digits: usize,
    pub ns: Option<Direction>,
    pub ew: Option<Direction>,
}

/// Attempt `pattern` against `tokens` starting at `offset`.
///
/// Each validator step consumes exactly one token; the run must be
/// contiguous, with no skipping and no backtracking. Any step failure,
/// including running out of tokens, aborts the attempt with `None`.
/// Rejection here is expected high-frequency control flow, not an error.
pub fn attempt(pattern: &PatternDefinition, tokens: &[Token], offset: usize) -> Option<MatchState> {
    let mut state = MatchState::default();

    for (index, step) in pattern.steps.iter().enumerate() {
        let token = tokens.get(offset + index)?;
        step.apply(token, &mut state).ok()?;
    }

    Some(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::patterns::catalog;
    use crate::extract::tokenizer::tokenize;

    fn pattern(name: &str) -> &'static PatternDefinition {
        catalog()
            .iter()
            .find(|p| p.name == name)
            .expect("pattern exists")
    }

    #[test]
    fn test_compass_suffix_match() {
        let tokens = tokenize("37 37 8 N 122 22 30 W");
        let state =
            attempt(pattern("compass-suffix-seconds"), &tokens, 0).expect("should match");
        assert_eq!(state.lat_h, Some(Decimal::from(37)));
        assert_eq!(state.lat_s, Some(Decimal::from(8)));
        assert_eq!(state.ns, Some(Direction::North));
        assert_eq!(state.ew, Some(Direction::West));
    }

    #[test]
    fn test_match_at_nonzero_offset() {
        let tokens = tokenize("99 188 37 37 8 N 122 22 30 W");
        let p = pattern("compass-suffix-seconds");
        assert!(attempt(p, &tokens, 0).is_none());
        assert!(attempt(p, &tokens, 2).is_some());
    }

    #[test]
    fn test_running_out_of_tokens_aborts() {
        let tokens = tokenize("37 37 8 N 122 22");
        assert!(attempt(pattern("compass-suffix-seconds"), &tokens, 0).is_none());
    }

    #[test]
    fn test_fractional_hour_degree_rejects() {
        let tokens = tokenize("37.000 37 8 N 122 22 30 W");
        assert!(attempt(pattern("compass-suffix-seconds"), &tokens, 0).is_none());
    }

    #[test]
    fn test_decimal_minutes_decompose() {
        let tokens = tokenize("N 37 37.1333 W 122 22.5");
        let state = attempt(pattern("compass-prefix-decimal-minutes"), &tokens, 0)
            .expect("should match");
        assert_eq!(state.lat_m, Some(Decimal::from(37)));
        assert_eq!(state.lat_s.unwrap().to_string(), "7.9980");
        assert_eq!(state.lon_m, Some(Decimal::from(22)));
        assert_eq!(state.lon_s.unwrap().to_string(), "30.0");
    }
}
