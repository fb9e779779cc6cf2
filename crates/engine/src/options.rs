use serde::{Deserialize, Serialize};
use std::path::Path;

/// What a run enumerates.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ScanMode {
    /// Entries of the root whose extension matches
    #[default]
    Files,
    /// Subdirectories `D` of the root that contain `D/D.<ext>`
    Models,
}

impl ScanMode {
    pub fn default_root(self) -> &'static Path {
        match self {
            Self::Files => Path::new("OBJs/"),
            Self::Models => Path::new("FBXs"),
        }
    }

    pub fn default_extension(self) -> &'static str {
        match self {
            Self::Files => "obj",
            Self::Models => "fbx",
        }
    }

    /// Word used in the summary line printed after writing a file.
    pub fn noun(self) -> &'static str {
        match self {
            Self::Files => "file",
            Self::Models => "model",
        }
    }
}

/// Where the serialized listing goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OutputTarget {
    Stdout,
    File(std::path::PathBuf),
}
