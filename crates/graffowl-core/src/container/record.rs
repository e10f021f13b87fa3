//! Typed accessors over a single graphic record.

use indexmap::IndexMap;

use crate::{
    container::{ContainerError, PlistValue, rtf, value::Dict},
    geometry::{Bounds, Point, Size},
};

/// The graphic classes a record may declare in its `Class` key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GraphicClass {
    Group,
    TableGroup,
    LineGraphic,
    ShapedGraphic,
}

impl GraphicClass {
    /// Maps a `Class` value to a graphic class, or `None` when the class is
    /// not one of the four supported kinds.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "Group" => Some(Self::Group),
            "TableGroup" => Some(Self::TableGroup),
            "LineGraphic" => Some(Self::LineGraphic),
            "ShapedGraphic" => Some(Self::ShapedGraphic),
            _ => None,
        }
    }
}

/// A borrowed view of one graphic record dictionary.
///
/// Accessors fall back to the defaults the container format implies when a
/// key is absent: id references default to `0` (no reference), the stroke
/// pattern to `0` (solid), text to empty.
#[derive(Debug, Clone, Copy)]
pub struct GraphicRecord<'a> {
    dict: &'a Dict,
}

impl<'a> GraphicRecord<'a> {
    pub fn new(dict: &'a Dict) -> Self {
        Self { dict }
    }

    /// Wraps a value that must be a dictionary.
    pub(crate) fn from_value(value: &'a PlistValue, path: &str) -> Result<Self, ContainerError> {
        value
            .as_dict()
            .map(Self::new)
            .ok_or_else(|| ContainerError::malformed(path, "a graphic dictionary"))
    }

    fn value(&self, key: &str) -> Option<&'a PlistValue> {
        self.dict.get(key)
    }

    fn path(&self, keys: &[&str]) -> Option<&'a PlistValue> {
        let (first, rest) = keys.split_first()?;
        rest.iter()
            .try_fold(self.dict.get(*first)?, |value, key| value.get(key))
    }

    /// The raw `Class` value.
    pub fn class_name(&self) -> Result<&'a str, ContainerError> {
        self.value("Class")
            .and_then(PlistValue::as_str)
            .ok_or(ContainerError::MissingKey {
                key: "Class",
                context: "graphic record",
            })
    }

    /// The document-local id of this record.
    pub fn id(&self) -> Result<i64, ContainerError> {
        self.value("ID")
            .and_then(PlistValue::as_i64)
            .ok_or(ContainerError::MissingKey {
                key: "ID",
                context: "graphic record",
            })
    }

    /// The bounds rectangle, parsed from `{{x, y}, {w, h}}`.
    ///
    /// Records without bounds (lines, groups) yield empty bounds at the
    /// origin.
    pub fn bounds(&self) -> Result<Bounds, ContainerError> {
        match self.value("Bounds").and_then(PlistValue::as_str) {
            Some(text) => parse_bounds(text),
            None => Ok(Bounds::default()),
        }
    }

    /// The stroke pattern, `0` meaning a solid stroke.
    pub fn stroke_pattern(&self) -> i64 {
        self.path(&["Style", "stroke", "Pattern"])
            .and_then(PlistValue::as_i64)
            .unwrap_or(0)
    }

    pub fn head_arrow(&self) -> Option<&'a str> {
        self.path(&["Style", "stroke", "HeadArrow"])
            .and_then(PlistValue::as_str)
    }

    pub fn tail_arrow(&self) -> Option<&'a str> {
        self.path(&["Style", "stroke", "TailArrow"])
            .and_then(PlistValue::as_str)
    }

    /// The notes as plain text with one trailing newline removed.
    pub fn notes(&self) -> Option<String> {
        let raw = self.value("Notes").and_then(PlistValue::as_str)?;
        let mut notes = rtf::plain_text(raw);
        if notes.ends_with('\n') {
            notes.pop();
        }
        Some(notes)
    }

    /// The raw text content, possibly RTF.
    pub fn rich_text(&self) -> Option<&'a str> {
        self.path(&["Text", "Text"]).and_then(PlistValue::as_str)
    }

    /// The text content as plain text.
    pub fn text(&self) -> Option<String> {
        self.rich_text().map(rtf::plain_text)
    }

    /// Id of the graphic at the head end, `0` if none.
    pub fn head_id(&self) -> i64 {
        self.path(&["Head", "ID"])
            .and_then(PlistValue::as_i64)
            .unwrap_or(0)
    }

    /// Id of the graphic at the tail end, `0` if none.
    pub fn tail_id(&self) -> i64 {
        self.path(&["Tail", "ID"])
            .and_then(PlistValue::as_i64)
            .unwrap_or(0)
    }

    /// Id of the line this record labels, `0` if it is not a line label.
    pub fn label_line_id(&self) -> i64 {
        self.path(&["Line", "ID"])
            .and_then(PlistValue::as_i64)
            .unwrap_or(0)
    }

    /// Position of this label along its line, from `0.0` (tail) to `1.0` (head).
    pub fn label_position(&self) -> f64 {
        self.path(&["Line", "Position"])
            .and_then(PlistValue::as_f64)
            .unwrap_or(0.0)
    }

    /// User-defined key/value properties, values rendered as text.
    pub fn user_properties(&self) -> IndexMap<String, String> {
        user_info(self.value("UserInfo"))
    }

    pub fn layer_index(&self) -> Option<usize> {
        self.value("Layer")
            .and_then(PlistValue::as_i64)
            .and_then(|index| usize::try_from(index).ok())
    }

    pub fn is_subgraph(&self) -> bool {
        self.value("isSubgraph")
            .and_then(PlistValue::as_bool)
            .unwrap_or(false)
    }

    /// The shape name, e.g. `Rectangle` or `Circle`.
    pub fn shape(&self) -> Option<&'a str> {
        self.value("Shape").and_then(PlistValue::as_str)
    }

    /// Child records of a group or table.
    pub fn children(&self) -> Result<Vec<GraphicRecord<'a>>, ContainerError> {
        let Some(value) = self.value("Graphics") else {
            return Ok(Vec::new());
        };
        let items = value
            .as_array()
            .ok_or_else(|| ContainerError::malformed("Graphics", "an array"))?;

        items
            .iter()
            .enumerate()
            .map(|(index, item)| GraphicRecord::from_value(item, &format!("Graphics[{index}]")))
            .collect()
    }

    /// Line waypoints, parsed from `{x, y}` strings.
    pub fn points(&self) -> Result<Vec<Point>, ContainerError> {
        let Some(items) = self.value("Points").and_then(PlistValue::as_array) else {
            return Ok(Vec::new());
        };

        items
            .iter()
            .map(|item| {
                item.as_str()
                    .ok_or_else(|| ContainerError::malformed("Points", "a point string"))
                    .and_then(parse_point)
            })
            .collect()
    }

    /// Children of a table record arranged in rows.
    ///
    /// Cells are grouped into rows by the y coordinate of their bounds and
    /// ordered within a row by x.
    pub fn table_rows(&self) -> Result<Vec<Vec<GraphicRecord<'a>>>, ContainerError> {
        let mut cells = self
            .children()?
            .into_iter()
            .map(|cell| cell.bounds().map(|bounds| (bounds, cell)))
            .collect::<Result<Vec<_>, _>>()?;

        cells.sort_by(|(a, _), (b, _)| {
            a.min_y()
                .total_cmp(&b.min_y())
                .then(a.min_x().total_cmp(&b.min_x()))
        });

        let mut rows: Vec<(f64, Vec<GraphicRecord<'a>>)> = Vec::new();
        for (bounds, cell) in cells {
            match rows.last_mut() {
                Some((y, row)) if *y == bounds.min_y() => row.push(cell),
                _ => rows.push((bounds.min_y(), vec![cell])),
            }
        }

        Ok(rows.into_iter().map(|(_, row)| row).collect())
    }
}

/// Renders a `UserInfo` dictionary as string pairs.
pub(crate) fn user_info(value: Option<&PlistValue>) -> IndexMap<String, String> {
    value
        .and_then(PlistValue::as_dict)
        .map(|dict| {
            dict.iter()
                .filter_map(|(key, value)| value.to_text().map(|text| (key.clone(), text)))
                .collect()
        })
        .unwrap_or_default()
}

/// Parses a bounds string of the form `{{x, y}, {w, h}}`.
///
/// # Errors
///
/// Returns [`ContainerError::InvalidGeometry`] when the text does not hold
/// exactly four numbers.
pub fn parse_bounds(text: &str) -> Result<Bounds, ContainerError> {
    match parse_numbers(text).as_deref() {
        Some([x, y, w, h]) => Ok(Bounds::new(Point::new(*x, *y), Size::new(*w, *h))),
        _ => Err(ContainerError::InvalidGeometry(text.to_string())),
    }
}

/// Parses a point string of the form `{x, y}`.
pub fn parse_point(text: &str) -> Result<Point, ContainerError> {
    match parse_numbers(text).as_deref() {
        Some([x, y]) => Ok(Point::new(*x, *y)),
        _ => Err(ContainerError::InvalidGeometry(text.to_string())),
    }
}

fn parse_numbers(text: &str) -> Option<Vec<f64>> {
    text.split(|c: char| c == '{' || c == '}' || c == ',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| part.parse().ok())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::container::json::parse_json;

    fn record_value(json: &str) -> PlistValue {
        parse_json(json.as_bytes()).unwrap()
    }

    #[test]
    fn test_parse_bounds() {
        let bounds = parse_bounds("{{10, 20.5}, {30, 40}}").unwrap();
        assert_eq!(bounds.min_x(), 10.0);
        assert_eq!(bounds.min_y(), 20.5);
        assert_eq!(bounds.max_x(), 40.0);
        assert_eq!(bounds.max_y(), 60.5);

        assert!(parse_bounds("{{10, 20}}").is_err());
        assert!(parse_bounds("{{a, b}, {c, d}}").is_err());
    }

    #[test]
    fn test_parse_point() {
        assert_eq!(parse_point("{1.5, -2}").unwrap(), Point::new(1.5, -2.0));
    }

    #[test]
    fn test_connector_accessors() {
        let value = record_value(
            r#"{
                "Class": "LineGraphic", "ID": 7,
                "Head": {"ID": 3}, "Tail": {"ID": 2},
                "Style": {"stroke": {"Pattern": 1, "HeadArrow": "FilledArrow"}},
                "Notes": "subclass-of\n",
                "Points": ["{0, 0}", "{10, 5}"]
            }"#,
        );
        let record = GraphicRecord::from_value(&value, "test").unwrap();

        assert_eq!(record.class_name().unwrap(), "LineGraphic");
        assert_eq!(record.id().unwrap(), 7);
        assert_eq!(record.head_id(), 3);
        assert_eq!(record.tail_id(), 2);
        assert_eq!(record.stroke_pattern(), 1);
        assert_eq!(record.head_arrow(), Some("FilledArrow"));
        assert_eq!(record.tail_arrow(), None);
        assert_eq!(record.notes().as_deref(), Some("subclass-of"));
        assert_eq!(record.points().unwrap().len(), 2);
        assert!(record.bounds().unwrap().is_empty());
    }

    #[test]
    fn test_label_accessors() {
        let value = record_value(
            r#"{"Class": "ShapedGraphic", "ID": 9, "Bounds": "{{0, 0}, {10, 10}}",
                "Line": {"ID": 7, "Position": 0.25},
                "Text": {"Text": "[2..]"},
                "UserInfo": {"owner": "me", "rank": 3}}"#,
        );
        let record = GraphicRecord::from_value(&value, "test").unwrap();

        assert_eq!(record.label_line_id(), 7);
        assert_eq!(record.label_position(), 0.25);
        assert_eq!(record.text().as_deref(), Some("[2..]"));
        let props = record.user_properties();
        assert_eq!(props.get("owner").map(String::as_str), Some("me"));
        assert_eq!(props.get("rank").map(String::as_str), Some("3"));
    }

    #[test]
    fn test_table_rows_sorted_by_position() {
        let value = record_value(
            r#"{"Class": "TableGroup", "ID": 1, "Graphics": [
                {"Class": "ShapedGraphic", "ID": 4, "Bounds": "{{50, 20}, {50, 20}}"},
                {"Class": "ShapedGraphic", "ID": 2, "Bounds": "{{50, 0}, {50, 20}}"},
                {"Class": "ShapedGraphic", "ID": 3, "Bounds": "{{0, 20}, {50, 20}}"},
                {"Class": "ShapedGraphic", "ID": 5, "Bounds": "{{0, 0}, {50, 20}}"}
            ]}"#,
        );
        let record = GraphicRecord::from_value(&value, "test").unwrap();
        let rows = record.table_rows().unwrap();

        let ids: Vec<Vec<i64>> = rows
            .iter()
            .map(|row| row.iter().map(|cell| cell.id().unwrap()).collect())
            .collect();
        assert_eq!(ids, vec![vec![5, 2], vec![3, 4]]);
    }

    #[test]
    fn test_missing_id() {
        let value = record_value(r#"{"Class": "ShapedGraphic"}"#);
        let record = GraphicRecord::from_value(&value, "test").unwrap();
        assert!(matches!(
            record.id(),
            Err(ContainerError::MissingKey { key: "ID", .. })
        ));
    }

    #[test]
    fn test_graphic_class_names() {
        assert_eq!(GraphicClass::from_name("TableGroup"), Some(GraphicClass::TableGroup));
        assert_eq!(GraphicClass::from_name("SvgGraphic"), None);
    }
}
