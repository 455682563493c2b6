use crate::config::ConfigLines;

/// Read-only lookup over normalized configuration lines.
#[derive(Debug, Clone, Copy)]
pub struct LineIndex<'a> {
    lines: &'a [String],
}

impl<'a> LineIndex<'a> {
    /// Build an index over already-normalized lines.
    pub fn new(lines: &'a [String]) -> Self {
        Self { lines }
    }

    /// Return every line that begins with `prefix`.
    ///
    /// The match is anchored at the start of the line and `prefix` is always
    /// compared literally.
    pub fn find_prefixed(&self, prefix: &str) -> Vec<&'a str> {
        self.lines
            .iter()
            .map(String::as_str)
            .filter(|line| line.starts_with(prefix))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl<'a> From<&'a ConfigLines> for LineIndex<'a> {
    fn from(lines: &'a ConfigLines) -> Self {
        Self::new(lines.as_slice())
    }
}
