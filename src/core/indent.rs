//! Indentation detection for locale JSON files.
//!
//! Locale files in the webview bundle are either tab-indented or use two
//! spaces. Rewriting a file keeps whichever style it already had.

/// Indentation unit used when re-serializing a JSON document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Indent {
    Tab,
    Spaces(usize),
}

impl Indent {
    /// Detect the indentation unit of raw JSON text.
    ///
    /// Any newline immediately followed by a tab selects [`Indent::Tab`];
    /// everything else (including single-line JSON) gets two spaces.
    ///
    /// # Examples
    ///
    /// ```
    /// use locale_patch::core::Indent;
    ///
    /// assert_eq!(Indent::detect("{\n\t\"a\": 1\n}"), Indent::Tab);
    /// assert_eq!(Indent::detect("{\n  \"a\": 1\n}"), Indent::Spaces(2));
    /// assert_eq!(Indent::detect("{}"), Indent::Spaces(2));
    /// ```
    pub fn detect(text: &str) -> Self {
        if text.contains("\n\t") {
            Indent::Tab
        } else {
            Indent::Spaces(2)
        }
    }

    /// The bytes written once per nesting level.
    pub fn unit(&self) -> Vec<u8> {
        match self {
            Indent::Tab => b"\t".to_vec(),
            Indent::Spaces(n) => vec![b' '; *n],
        }
    }
}
