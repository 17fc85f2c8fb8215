//! Configuration models and loaders for fin and flight-condition catalogs.

use std::fs::File;
use std::path::Path;

use serde::Deserialize;
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Fin geometry as written in catalog files (millimetres and degrees).
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct FinConfig {
    pub name: String,
    pub root_chord_mm: f64,
    pub tip_chord_mm: f64,
    pub span_mm: f64,
    pub tube_radius_mm: f64,
    #[serde(default)]
    pub mid_chord_sweep_deg: f64,
    #[serde(default)]
    pub sonic_speed_m_s: Option<f64>,
    #[serde(default)]
    pub description: Option<String>,
}

/// Named flight condition used for load evaluations.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct FlightConditionConfig {
    pub name: String,
    pub airspeed_m_s: f64,
    #[serde(default)]
    pub gust_speed_m_s: Option<f64>,
    #[serde(default)]
    pub air_density_kg_m3: Option<f64>,
}

/// Errors that can occur while loading configuration files.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
}

/// Load fin definitions from a YAML file, a TOML file, or a directory of catalog files.
pub fn load_fins<P: AsRef<Path>>(path: P) -> Result<Vec<FinConfig>, ConfigError> {
    load_records(path)
}

/// Load named flight conditions from a YAML file, a TOML file, or a directory of catalog files.
pub fn load_flight_conditions<P: AsRef<Path>>(
    path: P,
) -> Result<Vec<FlightConditionConfig>, ConfigError> {
    load_records(path)
}

/// Catalog file syntax, chosen by extension. TOML files hold a single record,
/// YAML files hold a list of records.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CatalogFormat {
    Toml,
    Yaml,
}

impl CatalogFormat {
    fn of(path: &Path) -> Option<Self> {
        match path.extension()?.to_str()? {
            "toml" => Some(Self::Toml),
            "yaml" | "yml" => Some(Self::Yaml),
            _ => None,
        }
    }
}

fn load_records<T, P>(path: P) -> Result<Vec<T>, ConfigError>
where
    T: DeserializeOwned,
    P: AsRef<Path>,
{
    let path = path.as_ref();
    if path.is_dir() {
        return read_dir_records(path);
    }
    // Extensionless paths are treated as YAML lists.
    parse_file(path, CatalogFormat::of(path).unwrap_or(CatalogFormat::Yaml))
}

/// Read every TOML or YAML file in `dir`, in file-name order, so catalog
/// entries can be numbered (`01_reference.toml`, `02_swept.toml`, ...).
fn read_dir_records<T: DeserializeOwned>(dir: &Path) -> Result<Vec<T>, ConfigError> {
    let mut files = Vec::new();
    for entry in std::fs::read_dir(dir)? {
        let path = entry?.path();
        if let Some(format) = CatalogFormat::of(&path) {
            files.push((path, format));
        }
    }
    files.sort_by(|a, b| a.0.cmp(&b.0));

    let mut records = Vec::new();
    for (path, format) in files {
        records.extend(parse_file(&path, format)?);
    }
    Ok(records)
}

fn parse_file<T: DeserializeOwned>(
    path: &Path,
    format: CatalogFormat,
) -> Result<Vec<T>, ConfigError> {
    match format {
        CatalogFormat::Toml => {
            let contents = std::fs::read_to_string(path)?;
            Ok(vec![toml::from_str(&contents)?])
        }
        CatalogFormat::Yaml => Ok(serde_yaml::from_reader(File::open(path)?)?),
    }
}
