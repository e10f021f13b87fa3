//! The rule-atom text language.
//!
//! A rule shape holds one atom per line, written `predicate(arg, ...)`.
//! Arguments are variables (`?x`), names (`Fido`, `ex:Fido`), integers
//! (`42`) or quoted strings with an optional datatype (`"3.5"^^xsd:decimal`).
//!
//! This module only reads the text. Turning predicates and names into
//! ontology IRIs happens in the compiler, which knows the namespaces and the
//! ontology's signature.

use thiserror::Error;

/// Syntax errors in rule text.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RuleSyntaxError {
    #[error("Rule atom must include an open paren: {0}")]
    MissingOpenParen(String),

    #[error("Rule atom must include a close paren: {0}")]
    MissingCloseParen(String),

    #[error("No closing quotes in string: {0}")]
    UnclosedString(String),

    #[error("invalid arg: {0}")]
    InvalidArgument(String),
}

/// One argument as written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawArgument<'a> {
    /// `?name`, without the question mark.
    Variable(&'a str),
    /// An individual name, resolved like shape text.
    Name(&'a str),
    Integer(u64),
    /// A quoted string and its `^^datatype` suffix, if any.
    Text {
        value: &'a str,
        datatype: Option<&'a str>,
    },
}

impl RawArgument<'_> {
    /// Returns `true` for arguments that may stand for an individual.
    pub fn is_individual(&self) -> bool {
        matches!(self, Self::Variable(_) | Self::Name(_))
    }

    /// Returns `true` for arguments that may stand for a data value.
    pub fn is_data(&self) -> bool {
        matches!(self, Self::Variable(_) | Self::Integer(_) | Self::Text { .. })
    }
}

/// What a predicate refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Predicate<'a> {
    SameAs,
    DifferentFrom,
    /// A `swrlb:` built-in.
    BuiltIn(&'a str),
    /// A class, property or datatype named in the ontology.
    Named(&'a str),
}

/// One atom as written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawAtom<'a> {
    pub predicate: &'a str,
    pub arguments: Vec<RawArgument<'a>>,
}

impl<'a> RawAtom<'a> {
    pub fn predicate_kind(&self) -> Predicate<'a> {
        match self.predicate {
            "SameAs" => Predicate::SameAs,
            "DifferentFrom" => Predicate::DifferentFrom,
            p if p.starts_with("swrlb:") => Predicate::BuiltIn(p),
            p => Predicate::Named(p),
        }
    }
}

/// Parses every non-blank line of `text` as an atom.
pub fn parse_atoms(text: &str) -> Result<Vec<RawAtom<'_>>, RuleSyntaxError> {
    text.split('\n')
        .filter(|line| !line.trim().is_empty())
        .map(parse_atom)
        .collect()
}

/// Parses a single `predicate(arg, ...)` atom.
pub fn parse_atom(line: &str) -> Result<RawAtom<'_>, RuleSyntaxError> {
    let (predicate, rest) = line
        .split_once('(')
        .filter(|(_, rest)| !rest.contains('(') && !rest.trim().is_empty())
        .ok_or_else(|| RuleSyntaxError::MissingOpenParen(line.to_string()))?;

    let arguments = rest
        .trim()
        .strip_suffix(')')
        .ok_or_else(|| RuleSyntaxError::MissingCloseParen(line.to_string()))?;

    let arguments = arguments
        .split(',')
        .map(|argument| parse_argument(argument.trim()))
        .collect::<Result<_, _>>()?;

    Ok(RawAtom {
        predicate: predicate.trim(),
        arguments,
    })
}

fn parse_argument(argument: &str) -> Result<RawArgument<'_>, RuleSyntaxError> {
    let invalid = || RuleSyntaxError::InvalidArgument(argument.to_string());
    let first = argument.chars().next().ok_or_else(invalid)?;

    if let Some(name) = argument.strip_prefix('?') {
        Ok(RawArgument::Variable(name))
    } else if first.is_alphabetic() || first == '_' || first == '$' {
        Ok(RawArgument::Name(argument))
    } else if first.is_ascii_digit() {
        argument.parse().map(RawArgument::Integer).map_err(|_| invalid())
    } else if first == '"' {
        parse_text(argument)
    } else {
        Err(invalid())
    }
}

fn parse_text(argument: &str) -> Result<RawArgument<'_>, RuleSyntaxError> {
    let closing = argument.rfind('"').unwrap_or(0);
    if closing == 0 {
        return Err(RuleSyntaxError::UnclosedString(argument.to_string()));
    }
    let datatype = argument
        .rfind("^^")
        .filter(|carets| *carets > closing)
        .map(|carets| argument[carets + 2..].trim());
    Ok(RawArgument::Text {
        value: &argument[1..closing],
        datatype,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_class_atom() {
        let atom = parse_atom("Dog(?x)").unwrap();
        assert_eq!(atom.predicate, "Dog");
        assert_eq!(atom.arguments, vec![RawArgument::Variable("x")]);
        assert_eq!(atom.predicate_kind(), Predicate::Named("Dog"));
    }

    #[test]
    fn test_mixed_arguments() {
        let atom = parse_atom(" hasAge ( Fido, 3, \"three\", \"3\"^^xsd:int )").unwrap();
        assert_eq!(atom.predicate, "hasAge");
        assert_eq!(
            atom.arguments,
            vec![
                RawArgument::Name("Fido"),
                RawArgument::Integer(3),
                RawArgument::Text {
                    value: "three",
                    datatype: None
                },
                RawArgument::Text {
                    value: "3",
                    datatype: Some("xsd:int")
                },
            ]
        );
    }

    #[test]
    fn test_predicate_kinds() {
        assert_eq!(parse_atom("SameAs(?x, ?y)").unwrap().predicate_kind(), Predicate::SameAs);
        assert_eq!(
            parse_atom("DifferentFrom(?x, ?y)").unwrap().predicate_kind(),
            Predicate::DifferentFrom
        );
        assert_eq!(
            parse_atom("swrlb:greaterThan(?a, 18)").unwrap().predicate_kind(),
            Predicate::BuiltIn("swrlb:greaterThan")
        );
    }

    #[test]
    fn test_missing_parens() {
        assert_eq!(
            parse_atom("Dog ?x"),
            Err(RuleSyntaxError::MissingOpenParen("Dog ?x".to_string()))
        );
        assert!(matches!(parse_atom("Dog("), Err(RuleSyntaxError::MissingOpenParen(_))));
        assert!(matches!(parse_atom("Dog((?x)"), Err(RuleSyntaxError::MissingOpenParen(_))));
        assert_eq!(
            parse_atom("Dog(?x"),
            Err(RuleSyntaxError::MissingCloseParen("Dog(?x".to_string()))
        );
    }

    #[test]
    fn test_bad_arguments() {
        assert_eq!(
            parse_atom("Dog(#x)"),
            Err(RuleSyntaxError::InvalidArgument("#x".to_string()))
        );
        assert_eq!(parse_atom("Dog()"), Err(RuleSyntaxError::InvalidArgument(String::new())));
        assert!(matches!(parse_atom("age(?x, 3y)"), Err(RuleSyntaxError::InvalidArgument(_))));
        assert_eq!(
            parse_atom("name(?x, \"Rex)"),
            Err(RuleSyntaxError::UnclosedString("\"Rex".to_string()))
        );
    }

    #[test]
    fn test_carets_inside_string_are_not_a_datatype() {
        let atom = parse_atom("label(?x, \"a^^b\")").unwrap();
        assert_eq!(
            atom.arguments[1],
            RawArgument::Text {
                value: "a^^b",
                datatype: None
            }
        );
    }

    #[test]
    fn test_parse_atoms_skips_blank_lines() {
        let atoms = parse_atoms("Dog(?x)\n\nhasOwner(?x, ?y)\n").unwrap();
        assert_eq!(atoms.len(), 2);
        assert_eq!(atoms[1].predicate, "hasOwner");
    }

    #[test]
    fn test_argument_kinds() {
        assert!(RawArgument::Variable("x").is_individual());
        assert!(RawArgument::Variable("x").is_data());
        assert!(RawArgument::Name("Fido").is_individual());
        assert!(!RawArgument::Name("Fido").is_data());
        assert!(!RawArgument::Integer(1).is_individual());
    }
}
