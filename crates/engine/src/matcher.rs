use crate::error::{EngineError, Result};

/// Substring after the final `.` of `name`, or `None` when there is no `.`.
///
/// Unlike [`std::path::Path::extension`], a leading dot counts: `".obj"` has
/// the extension `"obj"`.
pub fn extension_of(name: &str) -> Option<&str> {
    name.rsplit_once('.').map(|(_, ext)| ext)
}

/// Exact, case-sensitive extension predicate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExtensionMatcher {
    ext: String,
}

impl ExtensionMatcher {
    /// # Errors
    /// Returns [`EngineError::InvalidExtension`] for an empty extension or one
    /// containing `.` or a path separator.
    pub fn new(ext: &str) -> Result<Self> {
        let trimmed = ext.strip_prefix('.').unwrap_or(ext);
        if trimmed.is_empty() || trimmed.contains(['.', '/', '\\']) {
            return Err(EngineError::InvalidExtension(ext.to_string()));
        }
        Ok(Self {
            ext: trimmed.to_string(),
        })
    }

    pub fn extension(&self) -> &str {
        &self.ext
    }

    pub fn matches(&self, name: &str) -> bool {
        extension_of(name) == Some(self.ext.as_str())
    }
}
