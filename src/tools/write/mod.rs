//! Write Tools
//!
//! One CSV artifact per category, with a fixed header and column order.

mod utils;

use utils::*;

use crate::error::{QrawlError, Result};
use crate::tools::extract::RecipeRecord;
use std::fs::{self, File};
use std::path::{Path, PathBuf};
use tracing::info;

/// Separator used to pack ingredient and step lists into one cell.
pub const LIST_DELIMITER: &str = ", ";

/// Dataset header, in column order.
pub const COLUMNS: [&str; 16] = [
    "Recipe title",
    "Subheading",
    "Image (link)",
    "Recipe-detail serves",
    "Recipe-detail time",
    "Recipe-detail",
    "Calories",
    "Fat",
    "Saturates",
    "Sugars",
    "Salt",
    "Protein",
    "Carbs",
    "Fibre",
    "Ingred-list",
    "RecipeSteps",
];

/// Artifact file name for a category: its last non-empty path segment plus `.csv`.
///
/// `https://site/recipes/apple-recipes/` → `apple-recipes.csv`
pub fn dataset_file_name(category_url: &str) -> Result<String> {
    let url = url::Url::parse(category_url)?;
    let segment = url
        .path_segments()
        .and_then(|segments| segments.filter(|s| !s.is_empty()).last())
        .ok_or_else(|| QrawlError::InvalidUrl(format!("{category_url} has no path segment")))?;
    Ok(format!("{segment}.csv"))
}

/// Write `records` to `path`, replacing any previous file.
///
/// An empty slice is rejected; callers skip empty batches.
pub fn write_dataset(records: &[RecipeRecord], path: &Path) -> Result<()> {
    if records.is_empty() {
        return Err(QrawlError::EmptyDataset(path.to_path_buf()));
    }

    let file = File::create(path).map_err(|e| QrawlError::write_error(path, e))?;
    let mut writer = csv::Writer::from_writer(file);

    writer.write_record(COLUMNS)?;
    for record in records {
        writer.write_record(record_to_row(record))?;
    }
    writer.flush().map_err(|e| QrawlError::write_error(path, e))?;
    Ok(())
}

/// Flush one category's batch into `out_dir` and return the artifact path.
pub fn write_category(
    records: &[RecipeRecord],
    out_dir: &Path,
    category_url: &str,
) -> Result<PathBuf> {
    fs::create_dir_all(out_dir).map_err(|e| QrawlError::write_error(out_dir, e))?;
    let path = out_dir.join(dataset_file_name(category_url)?);
    write_dataset(records, &path)?;
    info!(category = category_url, path = %path.display(), rows = records.len(), "data saved");
    Ok(path)
}

/// Read an artifact back into records. List cells are split on [`LIST_DELIMITER`];
/// the `url` field is not stored and comes back empty.
pub fn read_dataset(path: &Path) -> Result<Vec<RecipeRecord>> {
    let mut reader = csv::Reader::from_path(path)?;

    let headers = reader.headers()?.clone();
    if !headers.iter().eq(COLUMNS) {
        return Err(QrawlError::Config(format!(
            "{} does not have the dataset header",
            path.display()
        )));
    }

    reader
        .records()
        .map(|row| -> Result<RecipeRecord> { Ok(row_to_record(&row?)) })
        .collect()
}
