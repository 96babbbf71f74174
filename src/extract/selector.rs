//! Rank candidate coordinates and pick the best match.

use crate::extract::coordinate::Coordinate;

/// Order candidates by confidence, highest first, dropping
/// zero-confidence entries. The sort is stable, so equal-confidence
/// candidates keep their discovery order (catalog order, then start
/// offset) — deterministic, but deliberately not canonical.
pub fn matches(mut candidates: Vec<Coordinate>) -> Vec<Coordinate> {
    candidates.retain(|candidate| candidate.confidence() > 0);
    candidates.sort_by(|a, b| b.confidence().cmp(&a.confidence()));
    candidates
}

/// The single best candidate, or `None` when nothing usable matched.
/// "No match" is the absence of a coordinate, never a zero-confidence one.
pub fn best_match(candidates: Vec<Coordinate>) -> Option<Coordinate> {
    matches(candidates).into_iter().next()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::extract;

    #[test]
    fn test_highest_confidence_first() {
        let ranked = extract::find_all("1.2345 2.3456 3.5 4.5");
        assert!(ranked.len() >= 2);
        for pair in ranked.windows(2) {
            assert!(pair[0].confidence() >= pair[1].confidence());
        }
        assert_eq!(ranked[0].to_string(), "1.2345,2.3456");
    }

    #[test]
    fn test_zero_confidence_is_discarded() {
        // Integer pairs parse but score 0 on both axes.
        assert!(extract::find_all("37 122").is_empty());
        assert!(extract::find("37 122").is_none());
    }

    #[test]
    fn test_equal_confidence_ties_are_deterministic() {
        let input = "1.25 2.25 3.25 4.25";
        let first = extract::find(input).expect("matches");
        for _ in 0..10 {
            let again = extract::find(input).expect("matches");
            assert_eq!(again.to_string(), first.to_string());
        }
    }

    #[test]
    fn test_empty_candidates() {
        assert!(best_match(Vec::new()).is_none());
        assert!(matches(Vec::new()).is_empty());
    }
}
