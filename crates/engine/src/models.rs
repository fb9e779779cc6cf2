use crate::config::Config;
use crate::error::Result;
use crate::filesystem::DirectorySource;
use crate::lister::utf8_name;
use crate::listing::Listing;
use crate::matcher::ExtensionMatcher;
use log::debug;

/// Names of the model folders under the configured root.
///
/// A subdirectory `D` counts as a model when `D/D.<ext>` is a regular file.
/// Plain files at the root are ignored.
///
/// # Errors
/// Returns an error if the extension is invalid or the root cannot be read.
pub fn list_models(source: &dyn DirectorySource, config: &Config) -> Result<Listing> {
    let matcher = ExtensionMatcher::new(config.resolved_extension())?;
    let root = config.resolved_root();

    let mut listing: Listing = source
        .entries(&root)?
        .into_iter()
        .filter(|entry| entry.is_dir)
        .filter_map(|entry| utf8_name(&root, entry))
        .filter(|folder| {
            let model = root
                .join(folder)
                .join(format!("{folder}.{}", matcher.extension()));
            let found = source.is_file(&model);
            if !found {
                debug!("no model file at '{}'", model.display());
            }
            found
        })
        .collect();

    if !config.unsorted {
        listing.sort();
    }

    Ok(listing)
}
