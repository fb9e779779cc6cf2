// crates/cli/src/presentation.rs
use crate::config::Config;
use crate::error::{AppError, Result};
use log::debug;
use objlist_engine::listing::Listing;
use objlist_engine::options::OutputTarget;
use std::io::Write;
use std::path::Path;

/// Serialize `listing` and send it where `config` says.
///
/// Stdout gets the bare JSON with no trailing newline. A file gets the JSON
/// plus a newline, and a one-line summary is printed afterwards.
///
/// # Errors
/// Returns an error if serialization or the write fails.
pub fn emit(listing: &Listing, config: &Config) -> Result<()> {
    let json = listing.to_json(config.pretty_output())?;

    match config.resolved_output() {
        OutputTarget::Stdout => {
            let stdout = std::io::stdout();
            let mut out = stdout.lock();
            write_json(&mut out, &json)?;
        }
        OutputTarget::File(path) => {
            write_file(&path, &json)?;
            let stdout = std::io::stdout();
            write_summary(&mut stdout.lock(), listing, config)?;
        }
    }
    Ok(())
}

pub fn write_json<W: Write>(out: &mut W, json: &str) -> Result<()> {
    out.write_all(json.as_bytes())?;
    out.flush()?;
    Ok(())
}

pub fn write_summary<W: Write>(out: &mut W, listing: &Listing, config: &Config) -> Result<()> {
    writeln!(out, "{}", summary_line(listing, config))?;
    out.flush()?;
    Ok(())
}

fn write_file(path: &Path, json: &str) -> Result<()> {
    let wrap = |source: std::io::Error| AppError::Write {
        path: path.to_path_buf(),
        source,
    };
    let mut file = std::fs::File::create(path).map_err(wrap)?;
    file.write_all(json.as_bytes()).map_err(wrap)?;
    file.write_all(b"\n").map_err(wrap)?;
    debug!("wrote {} bytes to '{}'", json.len() + 1, path.display());
    Ok(())
}

pub fn summary_line(listing: &Listing, config: &Config) -> String {
    format!(
        "Generated {} list with {} entries.",
        config.mode.noun(),
        listing.len()
    )
}
