use once_cell::sync::Lazy;
use regex::Regex;

use crate::models::TargetSpec;

static RANGE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(\d+(?:\.\d+)?)\s*[-–]\s*(\d+(?:\.\d+)?)").expect("range target pattern is valid")
});

static BOUND: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?:<=|>=|<|>|=|≤|≥|~)?\s*(\d+(?:\.\d+)?)").expect("bound target pattern is valid")
});

/// Read a dashboard target such as `"82-85 kg"`, `"≤13%"` or `"<80"`.
///
/// Returns `None` when the text carries no number.
pub fn parse_target(text: &str) -> Option<TargetSpec> {
    let trimmed = text.trim();

    if let Some(captures) = RANGE.captures(trimmed) {
        let a: f64 = captures[1].parse().ok()?;
        let b: f64 = captures[2].parse().ok()?;
        return Some(TargetSpec {
            lower: a.min(b),
            upper: a.max(b),
            text: trimmed.to_string(),
        });
    }

    let captures = BOUND.captures(trimmed)?;
    let value: f64 = captures[1].parse().ok()?;
    Some(TargetSpec {
        lower: value,
        upper: value,
        text: trimmed.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_target() {
        let target = parse_target("82-85 kg").unwrap();
        assert_eq!(target.lower, 82.0);
        assert_eq!(target.upper, 85.0);
        assert!(target.is_range());
        assert_eq!(target.progress_value(), 85.0);
        assert_eq!(target.display_value(), 83.5);
        assert_eq!(target.text, "82-85 kg");
    }

    #[test]
    fn test_reversed_range_is_normalised() {
        let target = parse_target("85 - 82").unwrap();
        assert_eq!((target.lower, target.upper), (82.0, 85.0));
    }

    #[test]
    fn test_single_bound_targets() {
        assert_eq!(parse_target("<80").unwrap().progress_value(), 80.0);
        assert_eq!(parse_target("≤13%").unwrap().progress_value(), 13.0);
        assert_eq!(parse_target(">= 40 kg").unwrap().progress_value(), 40.0);
        assert_eq!(parse_target("12.5").unwrap().display_value(), 12.5);
    }

    #[test]
    fn test_text_without_number() {
        assert!(parse_target("").is_none());
        assert!(parse_target("lean").is_none());
    }
}
