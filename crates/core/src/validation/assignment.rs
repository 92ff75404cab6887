//! Assignment rules: the dwell window and platform exclusivity.
//!
//! Arrival and departure are checked together by [`validate_dwell_window`]
//! once both are known, so the order in which a client supplies them does
//! not matter. The per-field hooks [`validate_arrival_assignment`] and
//! [`validate_departure_assignment`] keep the older field-at-a-time
//! contract for callers that still set one attribute at a time.
//!
//! A platform can hold at most one assignment, ever. Vacancy is not
//! time-windowed: two assignments with disjoint windows still conflict.

use chrono::Duration;

use crate::error::CoreError;
use crate::lookup::ScheduleLookup;
use crate::types::{DbId, Timestamp};

/// Longest a train may stay at a platform.
pub const MAX_DWELL_SECS: i64 = 20 * 60;

const NO_ARRIVAL: &str = "No arrival time provided";
const NO_DEPARTURE: &str = "No departure time provided";
const ARRIVAL_AFTER_DEPARTURE: &str = "Arrival time must be before departure time";
const DWELL_TOO_LONG: &str = "Train must not stay at platform for more than 20 minutes";

/// An assignment record that has passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAssignment {
    arrival_time: Timestamp,
    departure_time: Timestamp,
    train_id: Option<DbId>,
    platform_id: DbId,
}

impl NewAssignment {
    pub fn arrival_time(&self) -> Timestamp {
        self.arrival_time
    }

    pub fn departure_time(&self) -> Timestamp {
        self.departure_time
    }

    pub fn train_id(&self) -> Option<DbId> {
        self.train_id
    }

    pub fn platform_id(&self) -> DbId {
        self.platform_id
    }
}

fn ensure_ordered(arrival: Timestamp, departure: Timestamp) -> Result<(), CoreError> {
    if arrival >= departure {
        return Err(CoreError::invalid(ARRIVAL_AFTER_DEPARTURE));
    }
    Ok(())
}

fn ensure_dwell_within_limit(arrival: Timestamp, departure: Timestamp) -> Result<(), CoreError> {
    if departure - arrival > Duration::seconds(MAX_DWELL_SECS) {
        return Err(CoreError::invalid(DWELL_TOO_LONG));
    }
    Ok(())
}

/// Validate arrival and departure as one invariant over the record.
///
/// Arrival must be strictly before departure and the dwell may not exceed
/// [`MAX_DWELL_SECS`].
pub fn validate_dwell_window(
    arrival: Option<Timestamp>,
    departure: Option<Timestamp>,
) -> Result<(Timestamp, Timestamp), CoreError> {
    let arrival = arrival.ok_or_else(|| CoreError::invalid(NO_ARRIVAL))?;
    let departure = departure.ok_or_else(|| CoreError::invalid(NO_DEPARTURE))?;
    ensure_ordered(arrival, departure)?;
    ensure_dwell_within_limit(arrival, departure)?;
    Ok((arrival, departure))
}

/// Field hook for assigning `arrival_time` to a record whose departure may
/// or may not be set yet. Fails unless the departure is already known.
pub fn validate_arrival_assignment(
    arrival: Option<Timestamp>,
    current_departure: Option<Timestamp>,
) -> Result<Timestamp, CoreError> {
    let arrival = arrival.ok_or_else(|| CoreError::invalid(NO_ARRIVAL))?;
    let departure = current_departure.ok_or_else(|| CoreError::invalid(NO_DEPARTURE))?;
    ensure_ordered(arrival, departure)?;
    Ok(arrival)
}

/// Field hook for assigning `departure_time`. Fails unless the arrival is
/// already known. Only the dwell limit is checked here, not the ordering.
pub fn validate_departure_assignment(
    departure: Option<Timestamp>,
    current_arrival: Option<Timestamp>,
) -> Result<Timestamp, CoreError> {
    let departure = departure.ok_or_else(|| CoreError::invalid(NO_DEPARTURE))?;
    let arrival = current_arrival.ok_or_else(|| CoreError::invalid(NO_ARRIVAL))?;
    ensure_dwell_within_limit(arrival, departure)?;
    Ok(departure)
}

/// Require a platform id. Zero counts as "not provided".
pub fn validate_platform_id(platform_id: Option<DbId>) -> Result<DbId, CoreError> {
    platform_id
        .filter(|id| *id != 0)
        .ok_or_else(|| CoreError::invalid("No platform id provided"))
}

pub fn ensure_platform_exists(exists: bool) -> Result<(), CoreError> {
    if !exists {
        return Err(CoreError::invalid("Platform id must be valid"));
    }
    Ok(())
}

pub fn ensure_platform_vacant(occupied: bool) -> Result<(), CoreError> {
    if occupied {
        return Err(CoreError::invalid("Platform must be vacant"));
    }
    Ok(())
}

/// Validate a whole assignment record: the dwell window first, then the
/// platform reference. `train_id` is accepted as given.
pub async fn check_assignment<L: ScheduleLookup>(
    lookup: &L,
    arrival_time: Option<Timestamp>,
    departure_time: Option<Timestamp>,
    train_id: Option<DbId>,
    platform_id: Option<DbId>,
    exclude_id: Option<DbId>,
) -> Result<NewAssignment, L::Error> {
    let (arrival_time, departure_time) = validate_dwell_window(arrival_time, departure_time)?;
    let platform_id = validate_platform_id(platform_id)?;
    ensure_platform_exists(lookup.platform_exists(platform_id).await?)?;
    ensure_platform_vacant(lookup.platform_occupied(platform_id, exclude_id).await?)?;
    Ok(NewAssignment {
        arrival_time,
        departure_time,
        train_id,
        platform_id,
    })
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use chrono::{TimeZone, Utc};

    use super::*;
    use crate::lookup::memory::MemoryLookup;

    fn at(hour: u32, minute: u32) -> Timestamp {
        Utc.with_ymd_and_hms(2026, 3, 1, hour, minute, 0).unwrap()
    }

    fn with_platforms(ids: &[DbId]) -> MemoryLookup {
        MemoryLookup {
            platforms: ids.iter().map(|id| (*id, *id as i32)).collect(),
            ..Default::default()
        }
    }

    #[test]
    fn fifteen_minute_dwell_accepted() {
        assert_eq!(
            validate_dwell_window(Some(at(10, 0)), Some(at(10, 15))).unwrap(),
            (at(10, 0), at(10, 15))
        );
    }

    #[test]
    fn exactly_twenty_minutes_accepted() {
        assert!(validate_dwell_window(Some(at(10, 0)), Some(at(10, 20))).is_ok());
    }

    #[test]
    fn twenty_five_minute_dwell_rejected() {
        assert_matches!(
            validate_dwell_window(Some(at(10, 0)), Some(at(10, 25))),
            Err(CoreError::Validation(msg)) if msg == DWELL_TOO_LONG
        );
    }

    #[test]
    fn one_second_over_limit_rejected() {
        let departure = at(10, 20) + Duration::seconds(1);
        assert_matches!(
            validate_dwell_window(Some(at(10, 0)), Some(departure)),
            Err(CoreError::Validation(msg)) if msg == DWELL_TOO_LONG
        );
    }

    #[test]
    fn arrival_after_departure_rejected() {
        assert_matches!(
            validate_dwell_window(Some(at(10, 30)), Some(at(10, 15))),
            Err(CoreError::Validation(msg)) if msg == ARRIVAL_AFTER_DEPARTURE
        );
    }

    #[test]
    fn equal_times_rejected() {
        assert_matches!(
            validate_dwell_window(Some(at(10, 0)), Some(at(10, 0))),
            Err(CoreError::Validation(msg)) if msg == ARRIVAL_AFTER_DEPARTURE
        );
    }

    #[test]
    fn missing_times_rejected() {
        assert_matches!(
            validate_dwell_window(None, Some(at(10, 0))),
            Err(CoreError::Validation(msg)) if msg == NO_ARRIVAL
        );
        assert_matches!(
            validate_dwell_window(Some(at(10, 0)), None),
            Err(CoreError::Validation(msg)) if msg == NO_DEPARTURE
        );
    }

    #[test]
    fn arrival_hook_requires_departure_first() {
        assert_matches!(
            validate_arrival_assignment(Some(at(10, 0)), None),
            Err(CoreError::Validation(msg)) if msg == NO_DEPARTURE
        );
        assert_eq!(
            validate_arrival_assignment(Some(at(10, 0)), Some(at(10, 15))).unwrap(),
            at(10, 0)
        );
        assert_matches!(
            validate_arrival_assignment(Some(at(10, 30)), Some(at(10, 15))),
            Err(CoreError::Validation(msg)) if msg == ARRIVAL_AFTER_DEPARTURE
        );
    }

    #[test]
    fn departure_hook_requires_arrival_first() {
        assert_matches!(
            validate_departure_assignment(Some(at(10, 15)), None),
            Err(CoreError::Validation(msg)) if msg == NO_ARRIVAL
        );
        assert_matches!(
            validate_departure_assignment(Some(at(10, 25)), Some(at(10, 0))),
            Err(CoreError::Validation(msg)) if msg == DWELL_TOO_LONG
        );
    }

    #[test]
    fn departure_hook_does_not_check_ordering() {
        // Departure before arrival passes the departure hook; only the
        // arrival hook and the whole-record check catch it.
        assert!(validate_departure_assignment(Some(at(10, 15)), Some(at(10, 30))).is_ok());
    }

    #[test]
    fn platform_id_required() {
        assert_matches!(
            validate_platform_id(None),
            Err(CoreError::Validation(msg)) if msg == "No platform id provided"
        );
        assert_matches!(validate_platform_id(Some(0)), Err(CoreError::Validation(_)));
        assert_eq!(validate_platform_id(Some(5)).unwrap(), 5);
    }

    #[tokio::test]
    async fn unknown_platform_rejected() {
        let lookup = with_platforms(&[1]);
        let err = check_assignment(&lookup, Some(at(10, 0)), Some(at(10, 15)), None, Some(2), None)
            .await
            .unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) if msg == "Platform id must be valid");
    }

    #[tokio::test]
    async fn second_assignment_on_platform_rejected_even_without_overlap() {
        let mut lookup = with_platforms(&[5]);
        let first = check_assignment(&lookup, Some(at(10, 0)), Some(at(10, 15)), Some(1), Some(5), None)
            .await
            .unwrap();
        assert_eq!(first.platform_id(), 5);
        lookup.assignments.push((1, 5));

        let err = check_assignment(&lookup, Some(at(14, 0)), Some(at(14, 10)), Some(2), Some(5), None)
            .await
            .unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) if msg == "Platform must be vacant");
    }

    #[tokio::test]
    async fn assignment_keeps_its_own_platform_on_update() {
        let lookup = MemoryLookup {
            platforms: vec![(5, 5)],
            assignments: vec![(1, 5)],
            ..Default::default()
        };
        let updated = check_assignment(
            &lookup,
            Some(at(11, 0)),
            Some(at(11, 5)),
            None,
            Some(5),
            Some(1),
        )
        .await
        .unwrap();
        assert_eq!(updated.arrival_time(), at(11, 0));
        assert_eq!(updated.departure_time(), at(11, 5));
        assert_eq!(updated.train_id(), None);
    }

    #[tokio::test]
    async fn window_checked_before_platform() {
        let lookup = MemoryLookup::default();
        let err = check_assignment(&lookup, Some(at(10, 30)), Some(at(10, 15)), None, None, None)
            .await
            .unwrap_err();
        assert_matches!(err, CoreError::Validation(msg) if msg == ARRIVAL_AFTER_DEPARTURE);
    }
}
