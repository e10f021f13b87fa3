//! Diagram documents and their sheets.

use std::{
    fs,
    io::Read,
    path::{Path, PathBuf},
};

use flate2::read::GzDecoder;
use indexmap::IndexMap;
use log::{debug, info};

use crate::container::{
    ContainerError, GraphicRecord, PlistValue,
    json::parse_json,
    record::user_info,
    xml::parse_xml,
};

/// Name of the property list inside a directory-style document.
const PACKAGE_DATA_FILE: &str = "data.plist";

const GZIP_MAGIC: [u8; 2] = [0x1f, 0x8b];

/// A decoded diagram document.
///
/// The document owns the decoded property-list tree; sheets and graphic
/// records are borrowed views into it.
#[derive(Debug, Clone)]
pub struct DiagramDocument {
    path: PathBuf,
    root: PlistValue,
}

impl DiagramDocument {
    /// Loads a document from a file or a directory-style package.
    ///
    /// Gzip-compressed files are detected by their magic bytes. JSON is
    /// chosen when the first non-whitespace byte is `{`, XML otherwise.
    ///
    /// # Errors
    ///
    /// Returns [`ContainerError`] when the file cannot be read or decoded.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ContainerError> {
        let path = path.as_ref();
        info!(path = path.display().to_string(); "Loading diagram document");

        let data_path = if path.is_dir() {
            path.join(PACKAGE_DATA_FILE)
        } else {
            path.to_path_buf()
        };
        let bytes = fs::read(&data_path).map_err(|err| ContainerError::io(&data_path, err))?;

        let root = decode(&bytes).map_err(|err| match err {
            ContainerError::Io { source, .. } => ContainerError::io(&data_path, source),
            other => other,
        })?;

        Ok(Self::from_value(path, root))
    }

    /// Builds a document from an already decoded property-list tree.
    pub fn from_value(path: impl Into<PathBuf>, root: PlistValue) -> Self {
        Self {
            path: path.into(),
            root,
        }
    }

    /// Path the document was loaded from.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The document's file name, used to derive a default namespace.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default()
    }

    pub fn root(&self) -> &PlistValue {
        &self.root
    }

    /// The sheets of the document.
    ///
    /// A document without a `Sheets` array is a single-sheet document whose
    /// top-level dictionary is the sheet.
    pub fn sheets(&self) -> Result<Vec<SheetRecord<'_>>, ContainerError> {
        match self.root.get("Sheets") {
            Some(PlistValue::Array(items)) => items
                .iter()
                .enumerate()
                .map(|(index, item)| {
                    if item.as_dict().is_some() {
                        Ok(SheetRecord { value: item })
                    } else {
                        Err(ContainerError::malformed(format!("Sheets[{index}]"), "a dictionary"))
                    }
                })
                .collect(),
            Some(_) => Err(ContainerError::malformed("Sheets", "an array")),
            None if self.root.as_dict().is_some() => Ok(vec![SheetRecord { value: &self.root }]),
            None => Err(ContainerError::malformed("document", "a dictionary")),
        }
    }
}

/// Decodes raw document bytes, inflating gzip input first.
pub fn decode(bytes: &[u8]) -> Result<PlistValue, ContainerError> {
    if bytes.starts_with(&GZIP_MAGIC) {
        debug!("Document is gzip-compressed");
        let mut inflated = Vec::new();
        GzDecoder::new(bytes)
            .read_to_end(&mut inflated)
            .map_err(|err| ContainerError::io("<gzip stream>", err))?;
        return decode_plain(&inflated);
    }
    decode_plain(bytes)
}

fn decode_plain(bytes: &[u8]) -> Result<PlistValue, ContainerError> {
    let first = bytes.iter().find(|b| !b.is_ascii_whitespace());
    if first == Some(&b'{') {
        debug!("Decoding JSON document");
        parse_json(bytes)
    } else {
        debug!("Decoding XML property list");
        parse_xml(bytes)
    }
}

/// A layer declared by a sheet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayerRecord {
    pub name: String,
    pub visible: bool,
}

/// A borrowed view of one sheet dictionary.
#[derive(Debug, Clone, Copy)]
pub struct SheetRecord<'a> {
    value: &'a PlistValue,
}

impl<'a> SheetRecord<'a> {
    /// The sheet title, empty when absent.
    pub fn title(&self) -> &'a str {
        self.value
            .get("SheetTitle")
            .and_then(PlistValue::as_str)
            .unwrap_or("")
    }

    pub fn layers(&self) -> Vec<LayerRecord> {
        self.value
            .get("Layers")
            .and_then(PlistValue::as_array)
            .unwrap_or_default()
            .iter()
            .map(|layer| LayerRecord {
                name: layer
                    .get("Name")
                    .and_then(PlistValue::as_str)
                    .unwrap_or("")
                    .to_string(),
                visible: layer
                    .get("View")
                    .and_then(PlistValue::to_text)
                    .is_none_or(|view| view == "YES"),
            })
            .collect()
    }

    /// The top-level graphic records of the sheet.
    pub fn graphics(&self) -> Result<Vec<GraphicRecord<'a>>, ContainerError> {
        let Some(value) = self.value.get("GraphicsList") else {
            return Ok(Vec::new());
        };
        let items = value
            .as_array()
            .ok_or_else(|| ContainerError::malformed("GraphicsList", "an array"))?;

        items
            .iter()
            .enumerate()
            .map(|(index, item)| {
                GraphicRecord::from_value(item, &format!("GraphicsList[{index}]"))
            })
            .collect()
    }

    /// Notes attached to the sheet background.
    pub fn background_notes(&self) -> Option<String> {
        self.value
            .path(&["BackgroundGraphic", "Notes"])
            .and_then(PlistValue::as_str)
            .map(|notes| {
                let mut notes = crate::container::rtf::plain_text(notes);
                if notes.ends_with('\n') {
                    notes.pop();
                }
                notes
            })
    }

    /// User properties attached to the sheet background.
    pub fn background_user_info(&self) -> IndexMap<String, String> {
        user_info(self.value.path(&["BackgroundGraphic", "UserInfo"]))
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use flate2::{Compression, write::GzEncoder};

    use super::*;

    const SINGLE_SHEET: &str = r#"{
        "SheetTitle": "Classes",
        "Layers": [{"Name": "Layer 1", "View": "YES"}, {"Name": "Hidden", "View": "NO"}],
        "BackgroundGraphic": {"Notes": "page note\n", "UserInfo": {"k": "v"}},
        "GraphicsList": [{"Class": "ShapedGraphic", "ID": 1}]
    }"#;

    #[test]
    fn test_single_sheet_document() {
        let doc = DiagramDocument::from_value("x.json", decode(SINGLE_SHEET.as_bytes()).unwrap());
        let sheets = doc.sheets().unwrap();
        assert_eq!(sheets.len(), 1);

        let sheet = sheets[0];
        assert_eq!(sheet.title(), "Classes");
        assert_eq!(
            sheet.layers(),
            vec![
                LayerRecord { name: "Layer 1".into(), visible: true },
                LayerRecord { name: "Hidden".into(), visible: false },
            ]
        );
        assert_eq!(sheet.graphics().unwrap().len(), 1);
        assert_eq!(sheet.background_notes().as_deref(), Some("page note"));
        assert_eq!(sheet.background_user_info().get("k").map(String::as_str), Some("v"));
    }

    #[test]
    fn test_multi_sheet_document() {
        let json = r#"{"Sheets": [{"SheetTitle": "A"}, {"SheetTitle": "B"}]}"#;
        let doc = DiagramDocument::from_value("x.json", decode(json.as_bytes()).unwrap());
        let titles: Vec<_> = doc.sheets().unwrap().iter().map(|s| s.title()).collect();
        assert_eq!(titles, vec!["A", "B"]);
    }

    #[test]
    fn test_gzip_detection() {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder.write_all(SINGLE_SHEET.as_bytes()).unwrap();
        let compressed = encoder.finish().unwrap();

        let value = decode(&compressed).unwrap();
        assert_eq!(value.get("SheetTitle").and_then(PlistValue::as_str), Some("Classes"));
    }

    #[test]
    fn test_load_package_directory() {
        let dir = tempfile::tempdir().unwrap();
        let package = dir.path().join("model.graffle");
        fs::create_dir(&package).unwrap();
        fs::write(
            package.join(PACKAGE_DATA_FILE),
            "<plist><dict><key>SheetTitle</key><string>Pkg</string></dict></plist>",
        )
        .unwrap();

        let doc = DiagramDocument::load(&package).unwrap();
        assert_eq!(doc.file_name(), "model.graffle");
        assert_eq!(doc.sheets().unwrap()[0].title(), "Pkg");
    }

    #[test]
    fn test_load_missing_file() {
        let err = DiagramDocument::load("/nonexistent/diagram.graffle").unwrap_err();
        assert!(matches!(err, ContainerError::Io { .. }));
    }
}
