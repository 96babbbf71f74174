//! Lexical scan of raw input into coordinate tokens.

use regex::Regex;
use rust_decimal::Decimal;
use std::str::FromStr;
use std::sync::OnceLock;

/// A lexical unit extracted from input text: a signed number or a
/// recognized compass direction word. Everything else in the input is a
/// transparent separator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// A signed decimal number, keeping the exact source text. The
    /// literal decides later whether the value "looks like an integer"
    /// and how many fraction digits it carries, independent of numeric
    /// equality (`37.0` is not integer-looking, `37` is).
    Number { value: Decimal, literal: String },
    /// A direction word, normalized to a single hemisphere.
    Direction(Direction),
}

impl Token {
    /// True if the source literal contained a decimal point.
    pub fn has_decimal_point(&self) -> bool {
        matches!(self, Token::Number { literal, .. } if literal.contains('.'))
    }

    /// Digits after the decimal point in the source literal, 0 if none.
    pub fn fraction_digits(&self) -> usize {
        match self {
            Token::Number { literal, .. } => literal
                .find('.')
                .map(|dot| literal.len() - dot - 1)
                .unwrap_or(0),
            Token::Direction(_) => 0,
        }
    }
}

/// Compass hemisphere normalized from a recognized direction word.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    North,
    South,
    East,
    West,
}

impl Direction {
    /// Recognize a letter run as a direction word, case-insensitively.
    /// Localized variants can be added here without touching the scan.
    fn from_word(word: &str) -> Option<Self> {
        match word.to_ascii_lowercase().as_str() {
            "n" | "north" => Some(Self::North),
            "s" | "south" => Some(Self::South),
            "e" | "east" => Some(Self::East),
            "w" | "west" => Some(Self::West),
            _ => None,
        }
    }

    /// True for the latitude axis (N/S).
    pub fn is_north_south(self) -> bool {
        matches!(self, Self::North | Self::South)
    }

    /// True for the longitude axis (E/W).
    pub fn is_east_west(self) -> bool {
        matches!(self, Self::East | Self::West)
    }
}

fn scan_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"([a-zA-Z]+)|(-?[0-9]+\.?[0-9]*)").expect("scan regex is valid")
    })
}

/// Scan `input` left to right into tokens.
///
/// A single regex-alternation pass recognizes maximal letter runs and
/// maximal signed-number runs; anything else (punctuation, degree and
/// minute marks, symbols) separates tokens without producing one. Letter
/// runs that are not recognized direction words are dropped, which lets
/// prose like "deg", "latitude" or "and" sit between meaningful tokens.
/// `37N` still splits into a number and a direction: the scan is
/// alternation-based, not whitespace-based.
pub fn tokenize(input: &str) -> Vec<Token> {
    let mut tokens = Vec::new();

    for caps in scan_regex().captures_iter(input) {
        if let Some(word) = caps.get(1) {
            if let Some(direction) = Direction::from_word(word.as_str()) {
                tokens.push(Token::Direction(direction));
            }
        } else if let Some(number) = caps.get(2) {
            let literal = number.as_str();
            // A trailing bare point ("37.") still parses as 37; the
            // literal keeps the point for the integer-looking check.
            let digits = literal.strip_suffix('.').unwrap_or(literal);
            if let Ok(value) = Decimal::from_str(digits) {
                tokens.push(Token::Number {
                    value,
                    literal: literal.to_string(),
                });
            }
        }
    }

    tokens
}
