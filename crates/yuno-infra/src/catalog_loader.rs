//! Catalog descriptor loaders for TOML, JSON and CSV fleet files

use std::fs;
use std::path::Path;

use serde::Deserialize;
use tracing::info;
use yuno_domain::model::{CardDescriptor, RawValue};
use yuno_types::{CatalogError, Error, Result};

/// Supported catalog file formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogFormat {
    Toml,
    Json,
    Csv,
}

impl CatalogFormat {
    /// Detect the format from a file extension
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .and_then(|e| e.to_str())
            .map(str::to_lowercase)
            .unwrap_or_default();
        match ext.as_str() {
            "toml" => Ok(CatalogFormat::Toml),
            "json" => Ok(CatalogFormat::Json),
            "csv" => Ok(CatalogFormat::Csv),
            _ => Err(CatalogError::UnsupportedFormat(path.display().to_string()).into()),
        }
    }
}

/// Container for parsing fleet.toml
#[derive(Debug, Deserialize)]
struct FleetFile {
    #[serde(default)]
    vehicles: Vec<CardDescriptor>,
}

/// Read and parse a catalog file
pub fn load_from_file(path: &Path) -> Result<Vec<CardDescriptor>> {
    let format = CatalogFormat::from_path(path)?;
    let content = fs::read_to_string(path).map_err(|e| CatalogError::Read {
        path: path.display().to_string(),
        reason: e.to_string(),
    })?;
    let cards = load_from_str(&content, format)?;
    info!(path = %path.display(), cards = cards.len(), "catalog file loaded");
    Ok(cards)
}

pub fn load_from_str(content: &str, format: CatalogFormat) -> Result<Vec<CardDescriptor>> {
    match format {
        CatalogFormat::Toml => parse_toml(content),
        CatalogFormat::Json => parse_json(content),
        CatalogFormat::Csv => parse_csv(content),
    }
}

fn parse_toml(content: &str) -> Result<Vec<CardDescriptor>> {
    let file: FleetFile = toml::from_str(content).map_err(|e| {
        Error::Catalog(CatalogError::Parse(format!(
            "Failed to parse fleet TOML: {}",
            e
        )))
    })?;
    Ok(file.vehicles)
}

/// Accepts a bare array or `{"vehicles": [...]}`
fn parse_json(content: &str) -> Result<Vec<CardDescriptor>> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum JsonFleet {
        List(Vec<CardDescriptor>),
        Wrapped(FleetFile),
    }

    let parsed: JsonFleet = serde_json::from_str(content).map_err(|e| {
        Error::Catalog(CatalogError::Parse(format!(
            "Failed to parse fleet JSON: {}",
            e
        )))
    })?;
    Ok(match parsed {
        JsonFleet::List(cards) => cards,
        JsonFleet::Wrapped(file) => file.vehicles,
    })
}

/// Header row required; columns may appear in any order.
///
/// id,type,available,day,week,name,subtitle,description
fn parse_csv(content: &str) -> Result<Vec<CardDescriptor>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    let headers = reader.headers().map_err(csv_error)?.clone();
    let columns = CsvColumns::from_headers(&headers)?;

    let mut cards = Vec::new();
    for result in reader.records() {
        let record = result.map_err(csv_error)?;
        if record.iter().all(str::is_empty) {
            continue;
        }
        cards.push(columns.parse_record(&record));
    }
    Ok(cards)
}

fn csv_error(e: csv::Error) -> Error {
    Error::Catalog(CatalogError::Parse(format!(
        "Failed to parse fleet CSV: {}",
        e
    )))
}

struct CsvColumns {
    id: usize,
    vehicle_type: Option<usize>,
    available: Option<usize>,
    day: Option<usize>,
    week: Option<usize>,
    name: Option<usize>,
    subtitle: Option<usize>,
    description: Option<usize>,
}

impl CsvColumns {
    fn from_headers(headers: &csv::StringRecord) -> Result<Self> {
        let find = |name: &str| headers.iter().position(|h| h.eq_ignore_ascii_case(name));
        let id = find("id").ok_or_else(|| {
            CatalogError::Parse("Missing required column: id".to_string())
        })?;
        Ok(Self {
            id,
            vehicle_type: find("type"),
            available: find("available"),
            day: find("day"),
            week: find("week"),
            name: find("name"),
            subtitle: find("subtitle"),
            description: find("description"),
        })
    }

    fn parse_record(&self, record: &csv::StringRecord) -> CardDescriptor {
        let field = |col: Option<usize>| {
            col.and_then(|i| record.get(i))
                .filter(|s| !s.is_empty())
                .map(str::to_string)
        };
        CardDescriptor {
            id: field(Some(self.id)),
            vehicle_type: field(self.vehicle_type),
            available: field(self.available).map(RawValue::Text),
            day: field(self.day).map(RawValue::Text),
            week: field(self.week).map(RawValue::Text),
            name: field(self.name),
            subtitle: field(self.subtitle),
            description: field(self.description),
        }
    }
}
