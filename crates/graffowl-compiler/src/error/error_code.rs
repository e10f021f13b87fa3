//! Error codes for compile diagnostics.
//!
//! Codes are grouped by what went wrong:
//! - `E1xx` - Diagram structure (graphic kinds, connections, tables, labels)
//! - `E2xx` - Resolution (notes, URIs, expression kinds, namespaces)
//! - `E3xx` - Text micro-languages (cardinality labels, rule atoms)
//! - `E4xx` - Imports

use std::fmt;

/// Codes categorizing compile errors and warnings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // =========================================================================
    // Structure Errors (E1xx)
    // =========================================================================
    /// Wrong graphic kind.
    ///
    /// A tag needs a particular kind of graphic, such as a shape, a line or
    /// a table, and found another.
    E100,

    /// Wrong number of connections.
    ///
    /// A graphic has too few or too many incoming or outgoing connectors for
    /// its tag.
    E101,

    /// Missing connection end.
    ///
    /// A connector that must join two graphics has no head or no tail.
    E102,

    /// Malformed table.
    ///
    /// A literal or annotation table does not have the required rows or
    /// columns.
    E103,

    /// Missing or ambiguous line label.
    ///
    /// A line that must carry a label (a property, a facet or a cardinality)
    /// has none, or has more than one that qualifies.
    E104,

    // =========================================================================
    // Resolution Errors (E2xx)
    // =========================================================================
    /// Missing graphic note.
    ///
    /// A graphic was reached through a connector but carries no tag.
    E200,

    /// Unrecognized graphic note.
    ///
    /// A graphic's note names no known tag.
    E201,

    /// Unresolvable URI.
    ///
    /// A shape's text is blank or uses a prefix no namespace shape declared.
    E202,

    /// Wrong expression kind.
    ///
    /// A graphic denotes a different kind of expression than its position
    /// requires, for example a data property where an object property is
    /// expected.
    E203,

    /// Unknown facet.
    ///
    /// A datatype restriction names a facet outside the XSD facet set.
    E204,

    /// Blank namespace.
    ///
    /// A namespace shape has no text.
    E205,

    // =========================================================================
    // Micro-language Errors (E3xx)
    // =========================================================================
    /// Invalid cardinality label.
    ///
    /// A cardinality label such as `[2]`, `[1..]` or `[..3]` could not be
    /// read.
    E300,

    /// Malformed rule atom.
    ///
    /// A rule line is not of the form `predicate(arg, ...)` or one of its
    /// arguments cannot be read.
    E301,

    /// Mismatched rule atom arguments.
    ///
    /// A rule atom has the wrong number of arguments for its predicate, or
    /// an argument of the wrong kind.
    E302,

    // =========================================================================
    // Import Errors (E4xx)
    // =========================================================================
    /// Unsupported import.
    ///
    /// An import target does not name a diagram file.
    E400,

    /// Import cycle.
    ///
    /// A diagram imports itself, directly or through other diagrams.
    E401,

    /// Import failed.
    ///
    /// An imported diagram could not be loaded or compiled.
    E402,
}

impl ErrorCode {
    /// Returns the error code as a string (e.g., "E100").
    pub fn as_str(&self) -> &'static str {
        match self {
            // Structure
            Self::E100 => "E100",
            Self::E101 => "E101",
            Self::E102 => "E102",
            Self::E103 => "E103",
            Self::E104 => "E104",
            // Resolution
            Self::E200 => "E200",
            Self::E201 => "E201",
            Self::E202 => "E202",
            Self::E203 => "E203",
            Self::E204 => "E204",
            Self::E205 => "E205",
            // Micro-languages
            Self::E300 => "E300",
            Self::E301 => "E301",
            Self::E302 => "E302",
            // Imports
            Self::E400 => "E400",
            Self::E401 => "E401",
            Self::E402 => "E402",
        }
    }

    /// A short summary of the code's meaning.
    pub fn description(&self) -> &'static str {
        match self {
            // Structure
            Self::E100 => "wrong graphic kind",
            Self::E101 => "wrong number of connections",
            Self::E102 => "missing connection end",
            Self::E103 => "malformed table",
            Self::E104 => "missing or ambiguous line label",
            // Resolution
            Self::E200 => "missing graphic note",
            Self::E201 => "unrecognized graphic note",
            Self::E202 => "unresolvable URI",
            Self::E203 => "wrong expression kind",
            Self::E204 => "unknown facet",
            Self::E205 => "blank namespace",
            // Micro-languages
            Self::E300 => "invalid cardinality label",
            Self::E301 => "malformed rule atom",
            Self::E302 => "mismatched rule atom arguments",
            // Imports
            Self::E400 => "unsupported import",
            Self::E401 => "import cycle",
            Self::E402 => "import failed",
        }
    }
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
