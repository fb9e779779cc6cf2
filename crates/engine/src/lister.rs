use crate::config::Config;
use crate::error::Result;
use crate::filesystem::{DirEntryInfo, DirectorySource};
use crate::listing::Listing;
use crate::matcher::ExtensionMatcher;
use log::{debug, warn};
use std::path::Path;

/// List the entries of the configured root whose extension matches.
///
/// Names come back in byte-wise ascending order, the way `scandir` returns
/// them, unless `config.unsorted` asks for the raw listing order. Every entry
/// kind is eligible; only the name is inspected.
///
/// # Errors
/// Returns an error if the extension is invalid or the root cannot be read.
pub fn list_matching(source: &dyn DirectorySource, config: &Config) -> Result<Listing> {
    let matcher = ExtensionMatcher::new(config.resolved_extension())?;
    let root = config.resolved_root();

    let mut listing: Listing = source
        .entries(&root)?
        .into_iter()
        .filter_map(|entry| utf8_name(&root, entry))
        .filter(|name| matcher.matches(name))
        .collect();

    if !config.unsorted {
        listing.sort();
    }

    debug!(
        "{} entries with extension '{}' in '{}'",
        listing.len(),
        matcher.extension(),
        root.display()
    );
    Ok(listing)
}

/// Names must survive the trip into JSON unchanged, so non-UTF-8 ones are dropped.
pub(crate) fn utf8_name(root: &Path, entry: DirEntryInfo) -> Option<String> {
    match entry.name.into_string() {
        Ok(name) => Some(name),
        Err(raw) => {
            warn!(
                "skipping non UTF-8 entry {:?} in '{}'",
                raw,
                root.display()
            );
            None
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::config::ConfigBuilder;
    use crate::error::EngineError;
    use std::collections::{BTreeSet, HashMap};
    use std::path::PathBuf;

    /// In-memory directory tree keyed by directory path.
    #[derive(Debug, Default)]
    pub(crate) struct FakeSource {
        pub dirs: HashMap<PathBuf, Vec<DirEntryInfo>>,
        pub files: BTreeSet<PathBuf>,
    }

    impl FakeSource {
        pub fn with_dir(mut self, dir: &str, entries: &[(&str, bool)]) -> Self {
            self.dirs.insert(
                PathBuf::from(dir),
                entries
                    .iter()
                    .map(|(name, is_dir)| DirEntryInfo::new(*name, *is_dir))
                    .collect(),
            );
            self
        }

        pub fn with_file(mut self, path: &str) -> Self {
            self.files.insert(PathBuf::from(path));
            self
        }
    }

    impl DirectorySource for FakeSource {
        fn entries(&self, dir: &Path) -> Result<Vec<DirEntryInfo>> {
            self.dirs
                .get(dir)
                .cloned()
                .ok_or_else(|| EngineError::DirectoryUnreadable {
                    path: dir.to_path_buf(),
                    source: std::io::ErrorKind::NotFound.into(),
                })
        }

        fn is_file(&self, path: &Path) -> bool {
            self.files.contains(path)
        }
    }

    fn config_for(root: &str) -> Config {
        ConfigBuilder::default()
            .root(Some(PathBuf::from(root)))
            .build()
            .unwrap()
    }

    #[test]
    fn keeps_only_obj_entries_sorted_by_default() {
        let source = FakeSource::default().with_dir(
            "d",
            &[("c.obj", false), ("b.txt", false), ("a.obj", false)],
        );
        let listing = list_matching(&source, &config_for("d")).unwrap();
        assert_eq!(listing.names(), ["a.obj", "c.obj"]);
    }

    #[test]
    fn unsorted_keeps_listing_order() {
        let source = FakeSource::default().with_dir(
            "d",
            &[("k.obj", false), ("a.obj", false), ("z.txt", false), ("b.obj", false)],
        );
        let mut config = config_for("d");
        config.unsorted = true;
        let listing = list_matching(&source, &config).unwrap();
        assert_eq!(listing.names(), ["k.obj", "a.obj", "b.obj"]);
    }

    #[test]
    fn uppercase_extension_is_excluded() {
        let source = FakeSource::default().with_dir("d", &[("model.OBJ", false), ("m.obj", false)]);
        let listing = list_matching(&source, &config_for("d")).unwrap();
        assert_eq!(listing.names(), ["m.obj"]);
    }

    #[test]
    fn dot_entries_fall_out_of_the_filter() {
        let source = FakeSource::default().with_dir("d", &[(".", true), ("..", true), ("x.obj", false)]);
        let listing = list_matching(&source, &config_for("d")).unwrap();
        assert_eq!(listing.names(), ["x.obj"]);
    }

    #[test]
    fn directories_with_matching_names_are_listed() {
        let source = FakeSource::default().with_dir("d", &[("bundle.obj", true)]);
        let listing = list_matching(&source, &config_for("d")).unwrap();
        assert_eq!(listing.names(), ["bundle.obj"]);
    }

    #[test]
    fn sorting_is_bytewise_like_scandir() {
        let source = FakeSource::default()
            .with_dir("d", &[("b.obj", false), ("B.obj", false), ("a.obj", false)]);
        let listing = list_matching(&source, &config_for("d")).unwrap();
        assert_eq!(listing.names(), ["B.obj", "a.obj", "b.obj"]);
    }

    #[test]
    fn custom_extension() {
        let source = FakeSource::default().with_dir("d", &[("a.obj", false), ("b.stl", false)]);
        let mut config = config_for("d");
        config.extension = Some("stl".to_string());
        let listing = list_matching(&source, &config).unwrap();
        assert_eq!(listing.names(), ["b.stl"]);
    }

    #[test]
    fn unreadable_root_is_an_error() {
        let source = FakeSource::default();
        let err = list_matching(&source, &config_for("missing")).unwrap_err();
        assert!(matches!(err, EngineError::DirectoryUnreadable { .. }));
    }

    #[test]
    fn invalid_extension_is_rejected_before_listing() {
        let source = FakeSource::default();
        let mut config = config_for("missing");
        config.extension = Some(String::new());
        let err = list_matching(&source, &config).unwrap_err();
        assert!(matches!(err, EngineError::InvalidExtension(_)));
    }

    #[cfg(unix)]
    #[test]
    fn non_utf8_names_are_skipped() {
        use std::ffi::OsString;
        use std::os::unix::ffi::OsStringExt;

        let mut source = FakeSource::default().with_dir("d", &[("ok.obj", false)]);
        source
            .dirs
            .get_mut(Path::new("d"))
            .unwrap()
            .push(DirEntryInfo::new(OsString::from_vec(b"bad\xff.obj".to_vec()), false));

        let listing = list_matching(&source, &config_for("d")).unwrap();
        assert_eq!(listing.names(), ["ok.obj"]);
    }
}
