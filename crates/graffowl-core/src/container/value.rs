//! Generic property-list values.

use indexmap::IndexMap;

/// An ordered dictionary of property-list values.
pub type Dict = IndexMap<String, PlistValue>;

/// A decoded property-list value.
///
/// Both the XML and JSON encodings decode into this one shape. Dictionaries
/// keep the key order of the source document.
#[derive(Debug, Clone, PartialEq)]
pub enum PlistValue {
    Dict(Dict),
    Array(Vec<PlistValue>),
    String(String),
    Integer(i64),
    Real(f64),
    Bool(bool),
    /// ISO 8601 date text, kept verbatim.
    Date(String),
    /// Base64 payload text, kept verbatim.
    Data(String),
}

impl PlistValue {
    pub fn as_dict(&self) -> Option<&Dict> {
        match self {
            PlistValue::Dict(dict) => Some(dict),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&[PlistValue]> {
        match self {
            PlistValue::Array(items) => Some(items),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            PlistValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the value as an integer.
    ///
    /// Reals with no fractional part are accepted, since some writers emit
    /// ids as `<real>`.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            PlistValue::Integer(i) => Some(*i),
            PlistValue::Real(r) if r.fract() == 0.0 => Some(*r as i64),
            _ => None,
        }
    }

    pub fn as_f64(&self) -> Option<f64> {
        match self {
            PlistValue::Integer(i) => Some(*i as f64),
            PlistValue::Real(r) => Some(*r),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            PlistValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Renders a scalar as text. Containers yield `None`.
    pub fn to_text(&self) -> Option<String> {
        match self {
            PlistValue::String(s) | PlistValue::Date(s) | PlistValue::Data(s) => Some(s.clone()),
            PlistValue::Integer(i) => Some(i.to_string()),
            PlistValue::Real(r) => Some(r.to_string()),
            PlistValue::Bool(b) => Some(if *b { "YES" } else { "NO" }.to_string()),
            PlistValue::Dict(_) | PlistValue::Array(_) => None,
        }
    }

    /// Looks up a key when this value is a dictionary.
    pub fn get(&self, key: &str) -> Option<&PlistValue> {
        self.as_dict().and_then(|dict| dict.get(key))
    }

    /// Follows a chain of dictionary keys.
    ///
    /// ```
    /// # use graffowl_core::container::PlistValue;
    /// # use indexmap::IndexMap;
    /// let mut stroke = IndexMap::new();
    /// stroke.insert("Pattern".to_string(), PlistValue::Integer(1));
    /// let mut style = IndexMap::new();
    /// style.insert("stroke".to_string(), PlistValue::Dict(stroke));
    /// let value = PlistValue::Dict(IndexMap::from([("Style".to_string(), PlistValue::Dict(style))]));
    ///
    /// assert_eq!(value.path(&["Style", "stroke", "Pattern"]).and_then(PlistValue::as_i64), Some(1));
    /// ```
    pub fn path(&self, keys: &[&str]) -> Option<&PlistValue> {
        keys.iter().try_fold(self, |value, key| value.get(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integer_accepts_whole_reals() {
        assert_eq!(PlistValue::Real(4.0).as_i64(), Some(4));
        assert_eq!(PlistValue::Real(4.5).as_i64(), None);
        assert_eq!(PlistValue::Integer(7).as_f64(), Some(7.0));
    }

    #[test]
    fn test_to_text() {
        assert_eq!(PlistValue::Bool(true).to_text().as_deref(), Some("YES"));
        assert_eq!(PlistValue::Integer(3).to_text().as_deref(), Some("3"));
        assert_eq!(PlistValue::Array(vec![]).to_text(), None);
    }

    #[test]
    fn test_path_missing_key() {
        let value = PlistValue::Dict(Dict::new());
        assert!(value.path(&["Style", "stroke"]).is_none());
    }
}
