//! Reading warehouse extracts from disk into a [`Dataset`].

use crate::DataFiles;
use cov_db::Dataset;
use flate2::read::GzDecoder;
use std::io::Read;
use std::path::Path;

/// Read an extract as text, decompressing it if the name ends in `.gz`.
pub fn read_extract(path: impl AsRef<Path>) -> anyhow::Result<String> {
    let path = path.as_ref();
    let file = std::fs::File::open(path)
        .map_err(|e| anyhow::anyhow!("cannot open {}: {}", path.display(), e))?;

    let mut text = String::new();
    if path.extension().is_some_and(|ext| ext == "gz") {
        GzDecoder::new(file).read_to_string(&mut text)?;
    } else {
        std::io::BufReader::new(file).read_to_string(&mut text)?;
    }
    Ok(text)
}

fn read_optional(path: Option<&str>) -> anyhow::Result<String> {
    match path {
        Some(p) => read_extract(p),
        None => Ok(String::new()),
    }
}

/// Read the given extracts and load them through [`cov_db::load_dataset`].
pub fn load(files: &DataFiles) -> anyhow::Result<Dataset> {
    let state_csv = read_extract(&files.state_csv)?;
    let county_csv = read_optional(files.county_csv.as_deref())?;
    let demography_csv = read_optional(files.demography_csv.as_deref())?;
    cov_db::load_dataset(&state_csv, &county_csv, &demography_csv)
}
