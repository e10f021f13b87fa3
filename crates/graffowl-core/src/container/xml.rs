//! XML property-list decoding.
//!
//! Reads the `<plist>` document format written by diagram editors into a
//! [`PlistValue`] tree. Whitespace between elements is ignored; text inside
//! `<string>` and `<key>` elements is preserved exactly.

use std::str::FromStr;

use log::trace;
use quick_xml::{Reader, events::Event};

use crate::container::{ContainerError, PlistValue, value::Dict};

/// Decodes an XML property list.
///
/// # Errors
///
/// Returns [`ContainerError::Xml`] for ill-formed XML and
/// [`ContainerError::Malformed`] for XML that is not a property list.
pub fn parse_xml(bytes: &[u8]) -> Result<PlistValue, ContainerError> {
    XmlPlistParser::new(bytes).parse_document()
}

/// The start of a value element: its tag name and whether it was `<tag/>`.
struct ElementStart {
    name: String,
    empty: bool,
}

struct XmlPlistParser<'a> {
    reader: Reader<&'a [u8]>,
    buf: Vec<u8>,
}

impl<'a> XmlPlistParser<'a> {
    fn new(bytes: &'a [u8]) -> Self {
        Self {
            reader: Reader::from_reader(bytes),
            buf: Vec::new(),
        }
    }

    fn next_event(&mut self) -> Result<Event<'static>, ContainerError> {
        self.buf.clear();
        let event = self.reader.read_event_into(&mut self.buf)?;
        Ok(event.into_owned())
    }

    /// Returns the next element start or end, skipping prolog, comments and
    /// inter-element whitespace. `None` means an end tag was reached.
    fn next_element(&mut self, path: &str) -> Result<Option<ElementStart>, ContainerError> {
        loop {
            match self.next_event()? {
                Event::Start(e) => {
                    return Ok(Some(ElementStart {
                        name: String::from_utf8_lossy(e.name().as_ref()).into_owned(),
                        empty: false,
                    }));
                }
                Event::Empty(e) => {
                    return Ok(Some(ElementStart {
                        name: String::from_utf8_lossy(e.name().as_ref()).into_owned(),
                        empty: true,
                    }));
                }
                Event::End(_) => return Ok(None),
                Event::Text(text) => {
                    let text = text.unescape()?;
                    if !text.trim().is_empty() {
                        return Err(ContainerError::malformed(path, "an element"));
                    }
                }
                Event::Eof => return Err(ContainerError::malformed(path, "more input")),
                Event::Decl(_)
                | Event::DocType(_)
                | Event::Comment(_)
                | Event::PI(_)
                | Event::CData(_) => {}
            }
        }
    }

    fn parse_document(&mut self) -> Result<PlistValue, ContainerError> {
        let root = self
            .next_element("document")?
            .ok_or_else(|| ContainerError::malformed("document", "a root element"))?;

        if root.name != "plist" {
            return self.parse_value(root, "document");
        }
        if root.empty {
            return Err(ContainerError::malformed("plist", "a value"));
        }

        let start = self
            .next_element("plist")?
            .ok_or_else(|| ContainerError::malformed("plist", "a value"))?;
        let value = self.parse_value(start, "plist")?;
        trace!("Decoded XML property list");
        Ok(value)
    }

    fn parse_value(&mut self, start: ElementStart, path: &str) -> Result<PlistValue, ContainerError> {
        match start.name.as_str() {
            "dict" => self.parse_dict(start.empty, path).map(PlistValue::Dict),
            "array" => {
                let mut items = Vec::new();
                if !start.empty {
                    while let Some(item) = self.next_element(path)? {
                        let item_path = format!("{path}[{}]", items.len());
                        items.push(self.parse_value(item, &item_path)?);
                    }
                }
                Ok(PlistValue::Array(items))
            }
            "string" => Ok(PlistValue::String(self.read_text(start.empty)?)),
            "date" => Ok(PlistValue::Date(self.read_text(start.empty)?)),
            "data" => Ok(PlistValue::Data(self.read_text(start.empty)?)),
            "integer" => parse_number(&self.read_text(start.empty)?, path, "an integer")
                .map(PlistValue::Integer),
            "real" => {
                parse_number(&self.read_text(start.empty)?, path, "a real").map(PlistValue::Real)
            }
            "true" | "false" => {
                if !start.empty {
                    self.read_text(false)?;
                }
                Ok(PlistValue::Bool(start.name == "true"))
            }
            _ => Err(ContainerError::malformed(path, "a property-list value element")),
        }
    }

    fn parse_dict(&mut self, empty: bool, path: &str) -> Result<Dict, ContainerError> {
        let mut dict = Dict::new();
        if empty {
            return Ok(dict);
        }

        while let Some(key_start) = self.next_element(path)? {
            if key_start.name != "key" {
                return Err(ContainerError::malformed(path, "a <key> element"));
            }
            let key = self.read_text(key_start.empty)?;
            let entry_path = format!("{path}/{key}");

            let value_start = self
                .next_element(&entry_path)?
                .ok_or_else(|| ContainerError::malformed(entry_path.clone(), "a value"))?;
            let value = self.parse_value(value_start, &entry_path)?;
            dict.insert(key, value);
        }

        Ok(dict)
    }

    /// Collects the character content of the current element up to its end tag.
    fn read_text(&mut self, empty: bool) -> Result<String, ContainerError> {
        let mut text = String::new();
        if empty {
            return Ok(text);
        }

        loop {
            match self.next_event()? {
                Event::Text(e) => text.push_str(&e.unescape()?),
                Event::CData(e) => text.push_str(&String::from_utf8_lossy(&e.into_inner())),
                Event::End(_) => return Ok(text),
                Event::Comment(_) | Event::PI(_) => {}
                Event::Eof => return Err(ContainerError::malformed("text", "a closing tag")),
                Event::Start(_) | Event::Empty(_) | Event::Decl(_) | Event::DocType(_) => {
                    return Err(ContainerError::malformed("text", "character data"));
                }
            }
        }
    }
}

fn parse_number<T: FromStr>(text: &str, path: &str, expected: &'static str) -> Result<T, ContainerError> {
    text.trim()
        .parse()
        .map_err(|_| ContainerError::malformed(path, expected))
}
