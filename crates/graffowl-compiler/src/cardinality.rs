//! Cardinality labels: `[n]`, `[n..]` and `[..n]`.

use std::str::FromStr;

use graffowl_core::ontology::CardinalityKind;
use thiserror::Error;

/// A label that is not a cardinality.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Invalid cardinality label `{0}`")]
pub struct InvalidCardinality(pub String);

/// A parsed cardinality label.
///
/// `[n]` is an exact cardinality, `[n..]` a minimum and `[..n]` a maximum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cardinality {
    pub kind: CardinalityKind,
    pub count: u32,
}

impl FromStr for Cardinality {
    type Err = InvalidCardinality;

    fn from_str(label: &str) -> Result<Self, Self::Err> {
        let bare = label.replace(['[', ']'], " ");
        let bare = bare.trim();
        let kind = if bare.starts_with("..") {
            CardinalityKind::Max
        } else if bare.ends_with("..") {
            CardinalityKind::Min
        } else {
            CardinalityKind::Exact
        };

        let digits = label.replace(['[', ']', '.'], " ");
        let count = digits
            .trim()
            .parse()
            .map_err(|_| InvalidCardinality(label.to_string()))?;
        Ok(Self { kind, count })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(label: &str) -> Result<Cardinality, InvalidCardinality> {
        label.parse()
    }

    #[test]
    fn test_exact() {
        assert_eq!(
            parse("[3]"),
            Ok(Cardinality {
                kind: CardinalityKind::Exact,
                count: 3
            })
        );
    }

    #[test]
    fn test_min_and_max() {
        assert_eq!(parse("[1..]").map(|c| (c.kind, c.count)), Ok((CardinalityKind::Min, 1)));
        assert_eq!(parse("[..4]").map(|c| (c.kind, c.count)), Ok((CardinalityKind::Max, 4)));
        assert_eq!(parse("[ 2 .. ]").map(|c| (c.kind, c.count)), Ok((CardinalityKind::Min, 2)));
    }

    #[test]
    fn test_ranges_are_rejected() {
        assert_eq!(parse("[1..3]"), Err(InvalidCardinality("[1..3]".to_string())));
    }

    #[test]
    fn test_non_numeric() {
        assert!(parse("[many]").is_err());
        assert!(parse("[]").is_err());
        assert!(parse("[-1]").is_err());
    }
}
