//! Pattern catalog: named grammars of validator steps with URL triggers.
//!
//! Each pattern pairs a trigger regex (tested against the whole raw
//! input, so host-specific grammars only activate when their domain
//! appears) with an ordered list of validator steps, one per required
//! token. The catalog is fixed and ordered; order only matters for
//! stable tie-breaking, precedence comes from confidence.

use crate::decimal;
use crate::extract::matcher::MatchState;
use crate::extract::tokenizer::{Direction, Token};
use regex::Regex;
use rust_decimal::Decimal;
use std::sync::OnceLock;
use thiserror::Error;

/// Why a validator step rejected its token. Rejections abort a single
/// pattern attempt; they never abort the overall search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StepFailure {
    #[error("expected a number token")]
    NotANumber,
    #[error("expected a direction word")]
    NotADirection,
    #[error("direction word is for the wrong axis")]
    WrongAxis,
    #[error("literal must not contain a decimal point")]
    NotAnInteger,
    #[error("value out of range")]
    OutOfRange,
}

/// One required token position in a pattern.
///
/// A closed enumeration instead of name-based dispatch: each step is a
/// pure check that either records derived values into the match state or
/// rejects the token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidatorStep {
    NorthSouth,
    EastWest,
    LatHours,
    LatMinutes,
    LatSeconds,
    LatMinutesDecimal,
    LonHours,
    LonMinutes,
    LonSeconds,
    LonMinutesDecimal,
    LatDecimal,
    LonDecimal,
}

impl ValidatorStep {
    /// Validate `token` and record derived values into `state`.
    pub fn apply(self, token: &Token, state: &mut MatchState) -> Result<(), StepFailure> {
        match self {
            ValidatorStep::NorthSouth => {
                let direction = direction(token)?;
                if !direction.is_north_south() {
                    return Err(StepFailure::WrongAxis);
                }
                state.ns = Some(direction);
            }
            ValidatorStep::EastWest => {
                let direction = direction(token)?;
                if !direction.is_east_west() {
                    return Err(StepFailure::WrongAxis);
                }
                state.ew = Some(direction);
            }
            ValidatorStep::LatHours => {
                state.lat_h = Some(integer_in_range(token, 0, 90)?);
            }
            ValidatorStep::LonHours => {
                state.lon_h = Some(integer_in_range(token, 0, 180)?);
            }
            ValidatorStep::LatMinutes => {
                state.lat_m = Some(integer_in_range(token, 0, 60)?);
            }
            ValidatorStep::LonMinutes => {
                state.lon_m = Some(integer_in_range(token, 0, 60)?);
            }
            ValidatorStep::LatSeconds => {
                state.lat_s = Some(number_in_range(token, 0, 60)?);
            }
            ValidatorStep::LonSeconds => {
                state.lon_s = Some(number_in_range(token, 0, 60)?);
            }
            ValidatorStep::LatMinutesDecimal => {
                let (minutes, seconds) = split_decimal_minutes(token)?;
                state.lat_m = Some(minutes);
                state.lat_s = Some(seconds);
            }
            ValidatorStep::LonMinutesDecimal => {
                let (minutes, seconds) = split_decimal_minutes(token)?;
                state.lon_m = Some(minutes);
                state.lon_s = Some(seconds);
            }
            ValidatorStep::LatDecimal => {
                let value = number(token)?;
                if value < Decimal::from(-90) || value >= Decimal::from(90) {
                    return Err(StepFailure::OutOfRange);
                }
                state.lat_dec = Some(value);
                state.lat_dec_digits = token.fraction_digits();
            }
            ValidatorStep::LonDecimal => {
                // Exclusive at both ends; exactly ±180 is rejected, same
                // convention as latitude rejecting +90.
                let value = number(token)?;
                if value <= Decimal::from(-180) || value >= Decimal::from(180) {
                    return Err(StepFailure::OutOfRange);
                }
                state.lon_dec = Some(value);
                state.lon_dec_digits = token.fraction_digits();
            }
        }
        Ok(())
    }
}

fn direction(token: &Token) -> Result<Direction, StepFailure> {
    match token {
        Token::Direction(direction) => Ok(*direction),
        Token::Number { .. } => Err(StepFailure::NotADirection),
    }
}

fn number(token: &Token) -> Result<Decimal, StepFailure> {
    match token {
        Token::Number { value, .. } => Ok(*value),
        Token::Direction(_) => Err(StepFailure::NotANumber),
    }
}

/// A value in `[low, high)`, decimal point allowed.
fn number_in_range(token: &Token, low: i32, high: i32) -> Result<Decimal, StepFailure> {
    let value = number(token)?;
    if value < Decimal::from(low) || value >= Decimal::from(high) {
        return Err(StepFailure::OutOfRange);
    }
    Ok(value)
}

/// A value in `[low, high)` whose literal looked like an integer. A
/// fractional hour or minute field is a hard rejection for the attempt,
/// not a confidence penalty.
fn integer_in_range(token: &Token, low: i32, high: i32) -> Result<Decimal, StepFailure> {
    if token.has_decimal_point() {
        return Err(StepFailure::NotAnInteger);
    }
    number_in_range(token, low, high)
}

/// Decompose fractional minutes into whole minutes (truncated toward
/// zero) and derived seconds (fractional remainder × 60).
fn split_decimal_minutes(token: &Token) -> Result<(Decimal, Decimal), StepFailure> {
    let value = number_in_range(token, 0, 60)?;
    let minutes = value.trunc();
    let seconds = decimal::mul(value - minutes, Decimal::from(60));
    Ok((minutes, seconds))
}

/// How accumulated state becomes a coordinate, and how it is scored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PatternFamily {
    /// Degrees/minutes/seconds with hemisphere letters.
    Compass,
    /// Signed decimal degrees.
    Degrees,
}

/// An immutable grammar: URL trigger, family, ordered validator steps.
#[derive(Debug)]
pub struct PatternDefinition {
    pub name: &'static str,
    trigger: Regex,
    pub family: PatternFamily,
    pub steps: &'static [ValidatorStep],
}

impl PatternDefinition {
    /// Whether this pattern applies to the raw input at all. Tested
    /// against the original, unmodified string, not the tokens.
    pub fn trigger_matches(&self, input: &str) -> bool {
        self.trigger.is_match(input)
    }
}

fn define(
    name: &'static str,
    trigger: &str,
    family: PatternFamily,
    steps: &'static [ValidatorStep],
) -> PatternDefinition {
    PatternDefinition {
        name,
        trigger: Regex::new(trigger).expect("trigger regex is valid"),
        family,
        steps,
    }
}

/// The fixed, ordered pattern catalog, built once and shared.
pub fn catalog() -> &'static [PatternDefinition] {
    static CATALOG: OnceLock<Vec<PatternDefinition>> = OnceLock::new();
    CATALOG.get_or_init(|| {
        use PatternFamily::{Compass, Degrees};
        use ValidatorStep::*;

        vec![
            // Strava heatmap URLs carry longitude first.
            define(
                "strava-reversed",
                r"labs\.strava\.com",
                Degrees,
                &[LonDecimal, LatDecimal],
            ),
            define(
                "compass-prefix-seconds",
                ".",
                Compass,
                &[
                    NorthSouth, LatHours, LatMinutes, LatSeconds, EastWest, LonHours, LonMinutes,
                    LonSeconds,
                ],
            ),
            define(
                "compass-suffix-seconds",
                ".",
                Compass,
                &[
                    LatHours, LatMinutes, LatSeconds, NorthSouth, LonHours, LonMinutes, LonSeconds,
                    EastWest,
                ],
            ),
            define(
                "compass-prefix-decimal-minutes",
                ".",
                Compass,
                &[NorthSouth, LatHours, LatMinutesDecimal, EastWest, LonHours, LonMinutesDecimal],
            ),
            define(
                "compass-suffix-decimal-minutes",
                ".",
                Compass,
                &[LatHours, LatMinutesDecimal, NorthSouth, LonHours, LonMinutesDecimal, EastWest],
            ),
            define("decimal-pair", ".", Degrees, &[LatDecimal, LonDecimal]),
            // Uncommon notation where a direction word sets the sign of
            // an otherwise positive decimal degree.
            define(
                "decimal-pair-directed",
                ".",
                Degrees,
                &[NorthSouth, LatDecimal, EastWest, LonDecimal],
            ),
        ]
    })
}
