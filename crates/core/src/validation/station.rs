//! Station name rules.

use crate::error::CoreError;
use crate::lookup::ScheduleLookup;
use crate::types::DbId;

use super::bounded_text;

/// Minimum station name length, in characters.
pub const STATION_NAME_MIN_LEN: u64 = 3;

/// A station record that has passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewStation {
    name: String,
    city: Option<String>,
}

impl NewStation {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn city(&self) -> Option<&str> {
        self.city.as_deref()
    }
}

/// Validate the shape of a proposed station name.
pub fn validate_station_name(name: Option<&str>) -> Result<String, CoreError> {
    bounded_text(
        name,
        STATION_NAME_MIN_LEN,
        None,
        "No station name provided",
        "Station name must be at least 3 characters long",
    )
}

/// Reject a name another station already uses.
pub fn ensure_station_name_unique(taken: bool) -> Result<(), CoreError> {
    if taken {
        return Err(CoreError::invalid("Station name must be unique"));
    }
    Ok(())
}

/// Validate a whole station record.
///
/// `city` is stored as given. Pass the row id as `exclude_id` when
/// re-validating an existing station.
pub async fn check_station<L: ScheduleLookup>(
    lookup: &L,
    name: Option<&str>,
    city: Option<&str>,
    exclude_id: Option<DbId>,
) -> Result<NewStation, L::Error> {
    let name = validate_station_name(name)?;
    ensure_station_name_unique(lookup.station_name_taken(&name, exclude_id).await?)?;
    Ok(NewStation {
        name,
        city: city.map(str::to_owned),
    })
}
