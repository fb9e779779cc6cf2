use crate::options::{OutputTarget, ScanMode};
use derive_builder::Builder;
use std::path::PathBuf;

/// File the model manifest is written to when no explicit output is given.
pub const MODEL_MANIFEST_NAME: &str = "modelList.json";

#[derive(Debug, Clone, Default, Builder)]
#[builder(setter(into))]
pub struct Config {
    #[builder(default)]
    pub root: Option<PathBuf>,
    #[builder(default)]
    pub extension: Option<String>,
    #[builder(default)]
    pub mode: ScanMode,
    #[builder(default)]
    pub unsorted: bool,
    #[builder(default)]
    pub pretty: bool,
    #[builder(default)]
    pub output_path: Option<PathBuf>,
}

impl Config {
    pub fn resolved_root(&self) -> PathBuf {
        self.root
            .clone()
            .unwrap_or_else(|| self.mode.default_root().to_path_buf())
    }

    pub fn resolved_extension(&self) -> &str {
        self.extension
            .as_deref()
            .unwrap_or_else(|| self.mode.default_extension())
    }

    /// Models mode writes its manifest next to the models unless told otherwise.
    pub fn resolved_output(&self) -> OutputTarget {
        match (&self.output_path, self.mode) {
            (Some(path), _) => OutputTarget::File(path.clone()),
            (None, ScanMode::Files) => OutputTarget::Stdout,
            (None, ScanMode::Models) => {
                OutputTarget::File(self.resolved_root().join(MODEL_MANIFEST_NAME))
            }
        }
    }

    /// Manifests are always indented; plain listings only on request.
    pub fn pretty_output(&self) -> bool {
        self.pretty || matches!(self.mode, ScanMode::Models)
    }
}
