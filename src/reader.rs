use fbe::Result;

use std::{fs::File, path::PathBuf};

use csv::{Reader, ReaderBuilder, Trim};

/// Builds a whitespace-trimming reader over the entries file
pub fn build_csv_reader(filepath: PathBuf) -> Result<Reader<File>> {
    let reader = ReaderBuilder::new().trim(Trim::All).from_path(filepath)?;

    Ok(reader)
}
