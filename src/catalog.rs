//! Conversion from catalog records to runtime model values.

use fin_aero::{FinConfiguration, FinError, FinModel, FlightCondition};
use fin_config::{FinConfig, FlightConditionConfig};
use fin_core::units::{degrees, kilograms_per_cubic_metre, metres_per_second, millimetres};
use thiserror::Error;

/// Errors surfaced when selecting or converting catalog entries.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("'{0}' not found in catalog")]
    NotFound(String),
    #[error("catalog is empty")]
    EmptyCatalog,
    #[error("catalog entry '{name}' is invalid: {source}")]
    Invalid {
        name: String,
        #[source]
        source: FinError,
    },
}

/// Convert a `FinConfig` into a validated fin model.
pub fn from_config(config: &FinConfig) -> Result<FinModel, CatalogError> {
    let invalid = |source: FinError| CatalogError::Invalid {
        name: config.name.clone(),
        source,
    };

    let mut fin = FinConfiguration::new(
        millimetres(config.root_chord_mm),
        millimetres(config.tip_chord_mm),
        millimetres(config.span_mm),
        millimetres(config.tube_radius_mm),
        degrees(config.mid_chord_sweep_deg),
    )
    .map_err(invalid)?;

    if let Some(sonic) = config.sonic_speed_m_s {
        fin = fin
            .with_sonic_speed(metres_per_second(sonic))
            .map_err(invalid)?;
    }

    Ok(FinModel::new(fin))
}

/// Convert a named flight condition, filling unspecified gust and density with defaults.
pub fn condition_from_config(config: &FlightConditionConfig) -> FlightCondition {
    let mut condition = FlightCondition::new(metres_per_second(config.airspeed_m_s));
    if let Some(gust) = config.gust_speed_m_s {
        condition = condition.with_gust(metres_per_second(gust));
    }
    if let Some(rho) = config.air_density_kg_m3 {
        condition = condition.with_density(kilograms_per_cubic_metre(rho));
    }
    condition
}

/// Select a fin by optional name (case-insensitive), defaulting to the first entry.
pub fn select<'a>(
    configs: &'a [FinConfig],
    requested: Option<&str>,
) -> Result<&'a FinConfig, CatalogError> {
    if configs.is_empty() {
        return Err(CatalogError::EmptyCatalog);
    }

    match requested {
        Some(name) => find_named(configs, name, |cfg| cfg.name.as_str()),
        None => Ok(&configs[0]),
    }
}

/// Select a named flight condition (case-insensitive).
pub fn select_condition<'a>(
    conditions: &'a [FlightConditionConfig],
    name: &str,
) -> Result<&'a FlightConditionConfig, CatalogError> {
    find_named(conditions, name, |cfg| cfg.name.as_str())
}

fn find_named<'a, T>(
    entries: &'a [T],
    name: &str,
    name_of: impl Fn(&T) -> &str,
) -> Result<&'a T, CatalogError> {
    let wanted = name.to_lowercase();
    entries
        .iter()
        .find(|entry| name_of(*entry).to_lowercase() == wanted)
        .ok_or_else(|| CatalogError::NotFound(name.to_string()))
}

/// Select a fin and convert it in one step.
pub fn select_model(
    configs: &[FinConfig],
    requested: Option<&str>,
) -> Result<(String, FinModel), CatalogError> {
    let chosen = select(configs, requested)?;
    Ok((chosen.name.clone(), from_config(chosen)?))
}
