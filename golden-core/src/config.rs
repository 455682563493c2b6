use std::fs;
use std::path::Path;
use std::slice;

use serde::Serialize;
use thiserror::Error;

/// Errors that can occur while reading a device configuration file.
#[derive(Debug, Error)]
pub enum ConfigReadError {
    /// Failed to read input file.
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    /// Input bytes were not valid UTF-8.
    #[error("config file is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
}

/// Normalized configuration lines in original file order.
///
/// Every line is trimmed and non-empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct ConfigLines {
    lines: Vec<String>,
}

impl ConfigLines {
    /// Number of normalized lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.lines
    }

    pub fn iter(&self) -> slice::Iter<'_, String> {
        self.lines.iter()
    }
}

impl<'a> IntoIterator for &'a ConfigLines {
    type Item = &'a String;
    type IntoIter = slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}

/// Trim every raw line and drop the ones left empty.
pub fn normalize<I, S>(raw_lines: I) -> ConfigLines
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let lines = raw_lines
        .into_iter()
        .filter_map(|raw| {
            let line = raw.as_ref().trim();
            (!line.is_empty()).then(|| line.to_string())
        })
        .collect();
    ConfigLines { lines }
}

/// Split a whole configuration text into lines and normalize them.
pub fn normalize_text(text: &str) -> ConfigLines {
    normalize(text.lines())
}

/// Read a configuration file and normalize its lines.
pub fn read_config_file(path: &Path) -> Result<ConfigLines, ConfigReadError> {
    let bytes = fs::read(path)?;
    let text = String::from_utf8(bytes)?;
    Ok(normalize_text(&text))
}
