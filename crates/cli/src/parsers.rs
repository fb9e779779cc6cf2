use objlist_engine::matcher::ExtensionMatcher;

/// Validate `--ext` at parse time so clap reports bad values as usage errors.
///
/// A single leading dot is accepted and dropped.
pub fn parse_extension(s: &str) -> Result<String, String> {
    ExtensionMatcher::new(s)
        .map(|m| m.extension().to_string())
        .map_err(|e| e.to_string())
}
