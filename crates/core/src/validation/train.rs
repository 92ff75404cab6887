//! Train rules. Each field is checked on its own; there are no cross-field
//! constraints (origin may equal destination).

use crate::error::CoreError;
use crate::service_type::ServiceType;

use super::{bounded_text, provided};

pub const ENDPOINT_MIN_LEN: u64 = 3;
pub const ENDPOINT_MAX_LEN: u64 = 24;

/// A train record that has passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTrain {
    train_num: Option<String>,
    service_type: ServiceType,
    origin: String,
    destination: String,
}

impl NewTrain {
    pub fn train_num(&self) -> Option<&str> {
        self.train_num.as_deref()
    }

    pub fn service_type(&self) -> ServiceType {
        self.service_type
    }

    pub fn origin(&self) -> &str {
        &self.origin
    }

    pub fn destination(&self) -> &str {
        &self.destination
    }
}

pub fn validate_origin(origin: Option<&str>) -> Result<String, CoreError> {
    bounded_text(
        origin,
        ENDPOINT_MIN_LEN,
        Some(ENDPOINT_MAX_LEN),
        "No origin provided",
        "Origin must be between 3 and 24 characters long",
    )
}

pub fn validate_destination(destination: Option<&str>) -> Result<String, CoreError> {
    bounded_text(
        destination,
        ENDPOINT_MIN_LEN,
        Some(ENDPOINT_MAX_LEN),
        "No destination provided",
        "Destination must be between 3 and 24 characters long",
    )
}

/// Only the exact strings `express` and `local` are accepted.
pub fn validate_service_type(service_type: Option<&str>) -> Result<ServiceType, CoreError> {
    let value = provided(service_type).ok_or_else(|| CoreError::invalid("No service type provided"))?;
    ServiceType::parse(value)
        .ok_or_else(|| CoreError::invalid("Service type must be either 'express' or 'local'"))
}

/// Validate a whole train record: origin, destination, then service type.
///
/// Trains have no lookup-backed rules, so this is synchronous.
pub fn check_train(
    train_num: Option<&str>,
    service_type: Option<&str>,
    origin: Option<&str>,
    destination: Option<&str>,
) -> Result<NewTrain, CoreError> {
    let origin = validate_origin(origin)?;
    let destination = validate_destination(destination)?;
    let service_type = validate_service_type(service_type)?;
    Ok(NewTrain {
        train_num: train_num.map(str::to_owned),
        service_type,
        origin,
        destination,
    })
}
