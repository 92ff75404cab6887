//! Platform number rules.
//!
//! Platform numbers are unique across the whole network, not per station.
//! A second station cannot reuse a number the first one already has.

use serde_json::Value;
use validator::ValidateRange;

use crate::error::CoreError;
use crate::lookup::ScheduleLookup;
use crate::types::DbId;

/// Lowest valid platform number.
pub const PLATFORM_NUM_MIN: i64 = 1;

/// Highest valid platform number.
pub const PLATFORM_NUM_MAX: i64 = 20;

const MISSING: &str = "No platform number provided";
const NOT_INTEGER: &str = "Platform number must be an integer";
const OUT_OF_RANGE: &str = "Platform number must be in the range 1-20";

/// A platform record that has passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPlatform {
    platform_num: i32,
    station_id: Option<DbId>,
}

impl NewPlatform {
    pub fn platform_num(&self) -> i32 {
        self.platform_num
    }

    pub fn station_id(&self) -> Option<DbId> {
        self.station_id
    }
}

/// Validate an already-typed platform number.
///
/// Zero counts as "not provided".
pub fn validate_platform_number(platform_num: i64) -> Result<i32, CoreError> {
    if platform_num == 0 {
        return Err(CoreError::invalid(MISSING));
    }
    if !platform_num.validate_range(Some(PLATFORM_NUM_MIN), Some(PLATFORM_NUM_MAX), None, None) {
        return Err(CoreError::invalid(OUT_OF_RANGE));
    }
    i32::try_from(platform_num).map_err(|_| CoreError::invalid(OUT_OF_RANGE))
}

/// Validate a raw JSON platform number.
///
/// Any falsy value (absent, `null`, `false`, `0`, `0.0`, `""`, `[]`, `{}`)
/// is "not provided". Anything else that is not an integral JSON number is
/// the wrong type.
pub fn validate_platform_num(value: Option<&Value>) -> Result<i32, CoreError> {
    let value = match value {
        Some(v) if !is_blank(v) => v,
        _ => return Err(CoreError::invalid(MISSING)),
    };
    let number = match value {
        Value::Number(n) if n.is_i64() || n.is_u64() => n.as_i64().unwrap_or(i64::MAX),
        _ => return Err(CoreError::invalid(NOT_INTEGER)),
    };
    validate_platform_number(number)
}

fn is_blank(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        Value::Object(fields) => fields.is_empty(),
    }
}

/// Reject a number any other platform already uses.
pub fn ensure_platform_num_unique(taken: bool) -> Result<(), CoreError> {
    if taken {
        return Err(CoreError::invalid(
            "Platform number must be unique to each station",
        ));
    }
    Ok(())
}

/// Validate a whole platform record. `station_id` is accepted as given.
pub async fn check_platform<L: ScheduleLookup>(
    lookup: &L,
    platform_num: Option<&Value>,
    station_id: Option<DbId>,
    exclude_id: Option<DbId>,
) -> Result<NewPlatform, L::Error> {
    let platform_num = validate_platform_num(platform_num)?;
    ensure_platform_num_unique(lookup.platform_num_taken(platform_num, exclude_id).await?)?;
    Ok(NewPlatform {
        platform_num,
        station_id,
    })
}
