use crate::venue::Venue;
use csv::ReaderBuilder;
use encoding_rs::Encoding;
use serde_json::Value;
use std::path::Path;
use thiserror::Error;

pub const DEFAULT_ENCODING: &str = "windows-1251";

#[derive(Error, Debug)]
pub enum LoadError {
    #[error("cannot read file")]
    Io(#[from] std::io::Error),

    #[error("unknown text encoding: {0}")]
    UnknownEncoding(String),

    #[error("file is not valid {0} text")]
    Decode(&'static str),

    #[error("malformed JSON")]
    Json(#[from] serde_json::Error),

    #[error("malformed CSV")]
    Csv(#[from] csv::Error),

    #[error("record #{index}: {reason}")]
    InvalidRecord { index: usize, reason: String },

    #[error("dataset contains no venues")]
    Empty,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Format {
    Json,
    Csv,
}

impl Format {
    /// `.csv` files are read as CSV, anything else as JSON.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("csv") => Format::Csv,
            _ => Format::Json,
        }
    }
}

/// Reads venue datasets written in a fixed text encoding.
#[derive(Copy, Clone, Debug)]
pub struct DatasetLoader {
    encoding: &'static Encoding,
}

impl DatasetLoader {
    pub fn new(encoding: &'static Encoding) -> Self {
        Self { encoding }
    }

    /// Looks the encoding up by its WHATWG label, e.g. `windows-1251` or `utf-8`.
    pub fn from_label(label: &str) -> Result<Self, LoadError> {
        Encoding::for_label(label.trim().as_bytes())
            .map(Self::new)
            .ok_or_else(|| LoadError::UnknownEncoding(label.to_string()))
    }

    pub fn encoding_name(&self) -> &'static str {
        self.encoding.name()
    }

    pub fn load<P: AsRef<Path>>(&self, path: P) -> Result<Vec<Venue>, LoadError> {
        let path = path.as_ref();
        let bytes = std::fs::read(path)?;
        tracing::debug!(
            "read {} bytes from {} ({})",
            bytes.len(),
            path.display(),
            self.encoding.name()
        );
        let venues = self.parse(&bytes, Format::from_path(path))?;
        tracing::info!("loaded {} venues from {}", venues.len(), path.display());
        Ok(venues)
    }

    pub fn parse(&self, bytes: &[u8], format: Format) -> Result<Vec<Venue>, LoadError> {
        // A BOM wins over the configured encoding.
        let (text, used, had_errors) = self.encoding.decode(bytes);
        if had_errors {
            return Err(LoadError::Decode(used.name()));
        }
        let venues = match format {
            Format::Json => parse_json(&text)?,
            Format::Csv => parse_csv(&text)?,
        };
        if venues.is_empty() {
            return Err(LoadError::Empty);
        }
        Ok(venues)
    }
}

impl Default for DatasetLoader {
    fn default() -> Self {
        Self::new(encoding_rs::WINDOWS_1251)
    }
}

fn parse_json(text: &str) -> Result<Vec<Venue>, LoadError> {
    let records: Vec<Value> = serde_json::from_str(text)?;
    records
        .into_iter()
        .enumerate()
        .map(|(index, record)| {
            // Some open-data exports nest the columns under "Cells".
            let record = match record {
                Value::Object(mut fields) if fields.get("Cells").is_some_and(Value::is_object) => {
                    fields.remove("Cells").unwrap_or(Value::Null)
                }
                other => other,
            };
            serde_json::from_value(record).map_err(|e| LoadError::InvalidRecord {
                index,
                reason: e.to_string(),
            })
        })
        .collect()
}

fn parse_csv(text: &str) -> Result<Vec<Venue>, LoadError> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(text.as_bytes());
    rdr.headers()?;

    rdr.deserialize::<Venue>()
        .enumerate()
        .map(|(index, result)| {
            result.map_err(|e| LoadError::InvalidRecord {
                index,
                reason: e.to_string(),
            })
        })
        .collect()
}
