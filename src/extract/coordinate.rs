//! Coordinate construction and confidence scoring.

use crate::decimal;
use crate::extract::matcher::MatchState;
use crate::extract::patterns::{PatternDefinition, PatternFamily};
use crate::extract::tokenizer::Direction;
use rust_decimal::Decimal;
use std::fmt;

/// Confidence assigned to every compass-family match. Direction letters
/// make false positives on stray numbers essentially impossible, so this
/// must stay above anything the decimal digit-product formula can
/// realistically reach.
pub const COMPASS_CONFIDENCE: u32 = 1000;

/// A validated coordinate candidate: signed decimal degrees, a
/// comparison confidence, and the pattern that produced it. Immutable
/// once built; latitude is within [-90, 90] and longitude within
/// [-180, 180] by construction (the validators enforce the ranges, the
/// builder never re-checks).
#[derive(Debug, Clone, Copy)]
pub struct Coordinate {
    latitude: Decimal,
    longitude: Decimal,
    confidence: u32,
    pattern: &'static PatternDefinition,
}

impl Coordinate {
    /// Convert a completed match into a coordinate. Returns `None` when
    /// the state is missing fields for the pattern's family, which a
    /// completed attempt never produces.
    pub(crate) fn build(pattern: &'static PatternDefinition, state: MatchState) -> Option<Self> {
        match pattern.family {
            PatternFamily::Compass => Self::from_compass(pattern, state),
            PatternFamily::Degrees => Self::from_degrees(pattern, state),
        }
    }

    fn from_compass(pattern: &'static PatternDefinition, state: MatchState) -> Option<Self> {
        let latitude = axis_degrees(
            state.lat_h?,
            state.lat_m?,
            state.lat_s?,
            state.ns? == Direction::South,
        );
        let longitude = axis_degrees(
            state.lon_h?,
            state.lon_m?,
            state.lon_s?,
            state.ew? == Direction::West,
        );

        Some(Self {
            latitude,
            longitude,
            confidence: COMPASS_CONFIDENCE,
            pattern,
        })
    }

    fn from_degrees(pattern: &'static PatternDefinition, state: MatchState) -> Option<Self> {
        let mut latitude = state.lat_dec?;
        let mut longitude = state.lon_dec?;

        // A direction word overrides the sign outright: forcing the
        // absolute value negative means a redundant leading '-' combined
        // with 'S' stays negative instead of cancelling out.
        if state.ns == Some(Direction::South) {
            latitude = -latitude.abs();
        }
        if state.ew == Some(Direction::West) {
            longitude = -longitude.abs();
        }

        // Precision on both axes makes an intentional coordinate far more
        // likely than a stray zoom level or ID; the product keeps a
        // mismatched pair (one precise, one not) from scoring highly.
        let confidence = (state.lat_dec_digits * state.lon_dec_digits) as u32;

        Some(Self {
            latitude,
            longitude,
            confidence,
            pattern,
        })
    }

    /// Signed decimal latitude, rendered with the digits it was computed
    /// (or written) with.
    pub fn latitude(&self) -> String {
        self.latitude.to_string()
    }

    /// Signed decimal longitude.
    pub fn longitude(&self) -> String {
        self.longitude.to_string()
    }

    /// Comparison score; always positive for surfaced coordinates.
    pub fn confidence(&self) -> u32 {
        self.confidence
    }

    /// Name of the pattern that produced this coordinate.
    pub fn pattern_name(&self) -> &'static str {
        self.pattern.name
    }
}

impl fmt::Display for Coordinate {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{},{}", self.latitude, self.longitude)
    }
}

/// `hours + minutes/60 + seconds/60/60`, context-rounded after every
/// operation, negated for the southern/western hemisphere.
fn axis_degrees(hours: Decimal, minutes: Decimal, seconds: Decimal, negate: bool) -> Decimal {
    let sixty = Decimal::from(60);
    let mut value = decimal::add(hours, decimal::div(minutes, sixty));
    value = decimal::add(value, decimal::div(decimal::div(seconds, sixty), sixty));
    if negate {
        -value
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract::matcher::attempt;
    use crate::extract::patterns::catalog;
    use crate::extract::tokenizer::tokenize;

    fn build(pattern_name: &str, input: &str) -> Option<Coordinate> {
        let pattern = catalog()
            .iter()
            .find(|p| p.name == pattern_name)
            .expect("pattern exists");
        let state = attempt(pattern, &tokenize(input), 0)?;
        Coordinate::build(pattern, state)
    }

    #[test]
    fn test_compass_arithmetic() {
        let coordinate = build("compass-suffix-seconds", "37 37 8 N 122 22 30 W").unwrap();
        assert_eq!(coordinate.latitude(), "37.6188889");
        assert_eq!(coordinate.longitude(), "-122.375000");
        assert_eq!(coordinate.confidence(), COMPASS_CONFIDENCE);
    }

    #[test]
    fn test_compass_southern_hemisphere() {
        let coordinate = build("compass-prefix-seconds", "S 30 34 15 E 104 3 38").unwrap();
        assert!(coordinate.latitude().starts_with('-'));
        assert!(!coordinate.longitude().starts_with('-'));
    }

    #[test]
    fn test_degrees_pass_literals_through() {
        let coordinate = build("decimal-pair", "49.440603,11.004759").unwrap();
        assert_eq!(coordinate.latitude(), "49.440603");
        assert_eq!(coordinate.longitude(), "11.004759");
        assert_eq!(coordinate.confidence(), 36);
        assert_eq!(coordinate.to_string(), "49.440603,11.004759");
    }

    #[test]
    fn test_degrees_confidence_is_zero_without_fraction_digits() {
        let coordinate = build("decimal-pair", "37, -122.375").unwrap();
        assert_eq!(coordinate.confidence(), 0);
    }

    #[test]
    fn test_direction_word_forces_sign() {
        let coordinate = build("decimal-pair-directed", "S 37.5123 W 122.14").unwrap();
        assert_eq!(coordinate.latitude(), "-37.5123");
        assert_eq!(coordinate.longitude(), "-122.14");
    }

    #[test]
    fn test_redundant_minus_with_south_stays_negative() {
        let coordinate = build("decimal-pair-directed", "S -37.5123 E 122.14").unwrap();
        assert_eq!(coordinate.latitude(), "-37.5123");
        assert_eq!(coordinate.longitude(), "122.14");
    }

    #[test]
    fn test_decimal_minutes_arithmetic() {
        // 37°37.1333′ = 37° 37′ 7.998″
        let coordinate =
            build("compass-prefix-decimal-minutes", "N 37 37.1333 W 122 22.5").unwrap();
        assert_eq!(coordinate.latitude(), "37.6188884");
        assert_eq!(coordinate.longitude(), "-122.375000");
    }
}
