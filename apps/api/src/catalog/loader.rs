//! CSV loading for the catalog. Any failure here is fatal: no partial catalog is built.

use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};

use csv::StringRecord;
use thiserror::Error;
use tracing::info;

use super::{Catalog, CourseRow};

const COL_NAME: &str = "Course Name";
const COL_DESCRIPTION: &str = "Description";
const COL_SKILLS: &str = "Skills";
const COL_DIFFICULTY: &str = "Difficulty Level";
const COL_RATING: &str = "Course Rating";
const COL_URL: &str = "Course URL";

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to open catalog '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed catalog CSV: {0}")]
    Csv(#[from] csv::Error),

    #[error("Catalog is missing required column '{0}'")]
    MissingColumn(String),
}

/// Column positions resolved from the header row.
struct Columns {
    name: usize,
    rating: usize,
    description: Option<usize>,
    skills: Option<usize>,
    difficulty: Option<usize>,
    url: Option<usize>,
}

impl Columns {
    fn resolve(headers: &StringRecord) -> Result<Self, CatalogError> {
        let find = |label: &str| headers.iter().position(|h| h.trim() == label);
        let require =
            |label: &str| find(label).ok_or_else(|| CatalogError::MissingColumn(label.to_string()));

        Ok(Self {
            name: require(COL_NAME)?,
            rating: require(COL_RATING)?,
            description: find(COL_DESCRIPTION),
            skills: find(COL_SKILLS),
            difficulty: find(COL_DIFFICULTY),
            url: find(COL_URL),
        })
    }

    fn row(&self, record: &StringRecord) -> CourseRow {
        let field = |idx: Option<usize>| {
            idx.and_then(|i| record.get(i))
                .unwrap_or_default()
                .to_string()
        };
        CourseRow {
            name: field(Some(self.name)),
            description: field(self.description),
            skills: field(self.skills),
            difficulty_level: field(self.difficulty),
            rating: field(Some(self.rating)),
            url: self.url.and_then(|i| record.get(i)).map(str::to_string),
        }
    }
}

/// Loads and normalizes the catalog from a CSV file on disk.
pub fn load_catalog(path: impl AsRef<Path>) -> Result<Catalog, CatalogError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let catalog = load_catalog_from_reader(file)?;
    info!("Loaded {} courses from {}", catalog.len(), path.display());
    Ok(catalog)
}

/// Loads and normalizes the catalog from any CSV source.
pub fn load_catalog_from_reader<R: Read>(reader: R) -> Result<Catalog, CatalogError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(reader);

    let columns = Columns::resolve(csv_reader.headers()?)?;

    let rows = csv_reader
        .records()
        .map(|record| record.map(|r| columns.row(&r)))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Catalog::from_rows(rows))
}
