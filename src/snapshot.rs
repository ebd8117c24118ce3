use crate::error::{Error, Result};
use crate::records::PageRecord;
use std::fs;
use std::path::Path;

/// Read the page array written by the harvester
pub fn load<P: AsRef<Path>>(path: P) -> Result<Vec<PageRecord>> {
    let path = path.as_ref();
    let contents = fs::read_to_string(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let pages: Vec<PageRecord> = serde_json::from_str(&contents)?;
    ::log::debug!("Loaded {} pages from {}", pages.len(), path.display());
    Ok(pages)
}

/// Write the whole page array at once, pretty-printed
pub fn write<P: AsRef<Path>>(path: P, pages: &[PageRecord]) -> Result<()> {
    let path = path.as_ref();
    let json = serde_json::to_string_pretty(pages)?;
    fs::write(path, json).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })?;
    ::log::info!("Wrote {} pages to {}", pages.len(), path.display());
    Ok(())
}
