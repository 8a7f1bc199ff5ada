use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result, bail};
use serde::Serialize;
use serde_json::{
    Map, Value,
    ser::{PrettyFormatter, Serializer},
};

use super::indent::Indent;

/// Serialize a document the way locale files are stored on disk.
///
/// Keys keep their insertion order, non-ASCII text is written as-is and the
/// output always ends with exactly one newline.
pub fn render(data: &Map<String, Value>, indent: Indent) -> Result<String> {
    let unit = indent.unit();
    let mut buf = Vec::new();
    let mut serializer = Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(&unit));
    data.serialize(&mut serializer)
        .context("Failed to serialize JSON")?;

    let mut content = String::from_utf8(buf).context("Serialized JSON is not valid UTF-8")?;
    content.push('\n');
    Ok(content)
}

/// An in-memory locale JSON document that remembers the text it was read from.
///
/// Edits go through [`JsonEditor::data_mut`]; [`JsonEditor::save`] re-renders with
/// the file's own indentation and only touches the disk when the text changed.
pub struct JsonEditor {
    file_path: PathBuf,
    original: String,
    indent: Indent,
    data: Map<String, Value>,
}

impl JsonEditor {
    /// Open a JSON file for editing. The top-level value must be an object.
    pub fn open(path: &Path) -> Result<Self> {
        let original = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;
        let value: Value = serde_json::from_str(&original)
            .with_context(|| format!("Failed to parse JSON: {}", path.display()))?;
        let data = match value {
            Value::Object(map) => map,
            _ => bail!("Root of JSON file must be an object: {}", path.display()),
        };

        Ok(Self {
            file_path: path.to_path_buf(),
            indent: Indent::detect(&original),
            original,
            data,
        })
    }

    /// Open a JSON file, or return `None` when there is no such file.
    pub fn open_if_exists(path: &Path) -> Result<Option<Self>> {
        if !path.is_file() {
            return Ok(None);
        }
        Self::open(path).map(Some)
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    pub fn data(&self) -> &Map<String, Value> {
        &self.data
    }

    pub fn data_mut(&mut self) -> &mut Map<String, Value> {
        &mut self.data
    }

    /// Render the current document with the detected indentation.
    pub fn render(&self) -> Result<String> {
        render(&self.data, self.indent)
    }

    /// Whether saving would change the file's bytes.
    pub fn is_changed(&self) -> Result<bool> {
        Ok(self.render()? != self.original)
    }

    /// Write the document back if its rendering differs from the file.
    ///
    /// Returns `true` when the file was rewritten.
    pub fn save(&mut self) -> Result<bool> {
        let content = self.render()?;
        if content == self.original {
            return Ok(false);
        }

        fs::write(&self.file_path, &content)
            .with_context(|| format!("Failed to write file: {}", self.file_path.display()))?;
        self.original = content;

        Ok(true)
    }
}
