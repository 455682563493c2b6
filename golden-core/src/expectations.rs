use std::fs;
use std::path::Path;

use serde::Serialize;
use thiserror::Error;

/// A named group of expectation templates.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Section {
    pub name: String,
    pub expectations: Vec<String>,
}

/// The golden standard: sections in declared order, names unique.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Expectations {
    sections: Vec<Section>,
}

impl Expectations {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a section, or replace the expectations of an existing one in place.
    pub fn insert(&mut self, name: impl Into<String>, expectations: Vec<String>) {
        let name = name.into();
        match self.sections.iter_mut().find(|s| s.name == name) {
            Some(existing) => existing.expectations = expectations,
            None => self.sections.push(Section { name, expectations }),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.name == name)
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn len(&self) -> usize {
        self.sections.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// Total number of expectation templates across all sections.
    pub fn expectation_count(&self) -> usize {
        self.sections.iter().map(|s| s.expectations.len()).sum()
    }
}

impl<N, L, S> FromIterator<(N, L)> for Expectations
where
    N: Into<String>,
    L: IntoIterator<Item = S>,
    S: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (N, L)>>(iter: T) -> Self {
        let mut out = Expectations::new();
        for (name, lines) in iter {
            out.insert(name, lines.into_iter().map(Into::into).collect());
        }
        out
    }
}

/// Serialized form of a golden-standard template file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplateFormat {
    Yaml,
    Toml,
}

impl TemplateFormat {
    /// Pick a format from the file extension; anything but `.toml` is YAML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => TemplateFormat::Toml,
            _ => TemplateFormat::Yaml,
        }
    }
}

#[derive(Debug, Error)]
pub enum ExpectationError {
    #[error("failed to read golden standard {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("failed to parse golden standard {path} as YAML: {source}")]
    Yaml {
        path: String,
        source: serde_yaml::Error,
    },
    #[error("failed to parse golden standard {path} as TOML: {source}")]
    Toml {
        path: String,
        source: toml::de::Error,
    },
    /// The document is not a mapping of section name to a list of strings.
    #[error("malformed expectation mapping: {0}")]
    Malformed(String),
}

/// Read and shape-check a golden-standard file.
pub fn load_expectations(
    path: &Path,
    format: TemplateFormat,
) -> Result<Expectations, ExpectationError> {
    let raw = fs::read_to_string(path).map_err(|source| ExpectationError::Io {
        path: path.display().to_string(),
        source,
    })?;
    match format {
        TemplateFormat::Yaml => parse_yaml(&raw, path.display().to_string()),
        TemplateFormat::Toml => parse_toml(&raw, path.display().to_string()),
    }
}

/// Parse a YAML golden standard.
pub fn parse_yaml(raw: &str, path: String) -> Result<Expectations, ExpectationError> {
    let value: serde_yaml::Value =
        serde_yaml::from_str(raw).map_err(|source| ExpectationError::Yaml { path, source })?;
    expectations_from_yaml(&value)
}

/// Parse a TOML golden standard (top-level keys are sections).
pub fn parse_toml(raw: &str, path: String) -> Result<Expectations, ExpectationError> {
    let table: toml::Table =
        toml::from_str(raw).map_err(|source| ExpectationError::Toml { path, source })?;

    let mut out = Expectations::new();
    for (name, value) in &table {
        let items = match value {
            toml::Value::Array(items) => items,
            other => {
                return Err(malformed(format!(
                    "section '{name}' must be a list of strings, found {}",
                    other.type_str()
                )))
            }
        };
        let lines = items
            .iter()
            .enumerate()
            .map(|(idx, item)| match item {
                toml::Value::String(line) => Ok(line.clone()),
                other => Err(malformed(format!(
                    "section '{name}' item {} must be a string, found {}",
                    idx + 1,
                    other.type_str()
                ))),
            })
            .collect::<Result<Vec<_>, _>>()?;
        out.insert(name.clone(), lines);
    }
    Ok(out)
}

/// Shape-check an already-parsed YAML document.
///
/// An empty document or a section with no value yields no expectations.
pub fn expectations_from_yaml(value: &serde_yaml::Value) -> Result<Expectations, ExpectationError> {
    use serde_yaml::Value;

    let mapping = match value {
        Value::Mapping(mapping) => mapping,
        Value::Null => return Ok(Expectations::new()),
        other => {
            return Err(malformed(format!(
                "top level must be a mapping, found {}",
                yaml_kind(other)
            )))
        }
    };

    let mut out = Expectations::new();
    for (key, section) in mapping {
        let name = match key {
            Value::String(name) => name.clone(),
            other => {
                return Err(malformed(format!(
                    "section names must be strings, found {}",
                    yaml_kind(other)
                )))
            }
        };
        let lines = match section {
            Value::Null => Vec::new(),
            Value::Sequence(items) => items
                .iter()
                .enumerate()
                .map(|(idx, item)| match item {
                    Value::String(line) => Ok(line.clone()),
                    other => Err(malformed(format!(
                        "section '{name}' item {} must be a string, found {}",
                        idx + 1,
                        yaml_kind(other)
                    ))),
                })
                .collect::<Result<Vec<_>, _>>()?,
            other => {
                return Err(malformed(format!(
                    "section '{name}' must be a list of strings, found {}",
                    yaml_kind(other)
                )))
            }
        };
        out.insert(name, lines);
    }
    Ok(out)
}

fn malformed(reason: String) -> ExpectationError {
    ExpectationError::Malformed(reason)
}

fn yaml_kind(value: &serde_yaml::Value) -> &'static str {
    use serde_yaml::Value;

    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Sequence(_) => "sequence",
        Value::Mapping(_) => "mapping",
        Value::Tagged(_) => "tagged value",
    }
}
