//! Field and record validation for the schedule entities.
//!
//! Every rule comes in two layers:
//! - a pure `validate_*` / `ensure_*` function over the proposed value,
//!   lookup answers and sibling fields;
//! - an async `check_*` function that asks a [`ScheduleLookup`] the
//!   questions the rule needs and returns a validated `New*` record.
//!
//! Repositories only accept the validated records, so nothing reaches
//! storage without passing through this module.
//!
//! [`ScheduleLookup`]: crate::lookup::ScheduleLookup

pub mod assignment;
pub mod platform;
pub mod station;
pub mod train;

use validator::ValidateLength;

use crate::error::CoreError;

/// Treat `None` and `""` as "not provided", mirroring a falsy check.
pub(crate) fn provided(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// Require a non-empty string whose character count lies in `[min, max]`.
///
/// `missing` and `bad_length` are the messages for the two failure kinds.
pub(crate) fn bounded_text(
    value: Option<&str>,
    min: u64,
    max: Option<u64>,
    missing: &str,
    bad_length: &str,
) -> Result<String, CoreError> {
    let value = provided(value)
        .map(str::to_owned)
        .ok_or_else(|| CoreError::invalid(missing))?;
    if !value.validate_length(Some(min), max, None) {
        return Err(CoreError::invalid(bad_length));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    #[test]
    fn bounded_text_counts_characters_not_bytes() {
        // Three characters, six bytes.
        assert!(bounded_text(Some("äöü"), 3, Some(3), "missing", "length").is_ok());
    }

    #[test]
    fn bounded_text_distinguishes_missing_from_short() {
        assert_matches!(
            bounded_text(Some(""), 3, None, "missing", "length"),
            Err(CoreError::Validation(msg)) if msg == "missing"
        );
        assert_matches!(
            bounded_text(None, 3, None, "missing", "length"),
            Err(CoreError::Validation(msg)) if msg == "missing"
        );
        assert_matches!(
            bounded_text(Some("ab"), 3, None, "missing", "length"),
            Err(CoreError::Validation(msg)) if msg == "length"
        );
    }
}
