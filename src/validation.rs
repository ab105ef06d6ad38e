use crate::error::ApiError;
use crate::models::{BookingRequest, CreateClassRequest};

/// Request bodies whose fields must all hold a non-zero value.
///
/// Implementors list `(field name, field is zero)` pairs in declaration
/// order; `validate_required` reports the first offending field.
pub trait RequiredFields {
    fn required_fields(&self) -> Vec<(&'static str, bool)>;
}

impl RequiredFields for CreateClassRequest {
    fn required_fields(&self) -> Vec<(&'static str, bool)> {
        vec![
            ("class_name", self.class_name.is_empty()),
            ("start_date", self.start_date.is_empty()),
            ("end_date", self.end_date.is_empty()),
            // A capacity of 0 is indistinguishable from a missing field.
            ("capacity", self.capacity == 0),
        ]
    }
}

impl RequiredFields for BookingRequest {
    fn required_fields(&self) -> Vec<(&'static str, bool)> {
        vec![
            ("name", self.name.is_empty()),
            ("date", self.date.is_empty()),
        ]
    }
}

pub fn validate_required<T: RequiredFields>(request: &T) -> Result<(), ApiError> {
    match request
        .required_fields()
        .into_iter()
        .find(|(_, is_zero)| *is_zero)
    {
        Some((field, _)) => Err(ApiError::BadRequest(format!(
            "Missing or invalid value for field: {field}"
        ))),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn class_request() -> CreateClassRequest {
        CreateClassRequest {
            class_name: "Pilates".to_string(),
            start_date: "2024-12-01".to_string(),
            end_date: "2024-12-20".to_string(),
            capacity: 10,
        }
    }

    fn message(err: ApiError) -> String {
        match err {
            ApiError::BadRequest(msg) => msg,
            other => panic!("expected BadRequest, got {other:?}"),
        }
    }

    #[test]
    fn test_complete_requests_pass() {
        assert!(validate_required(&class_request()).is_ok());
        assert!(
            validate_required(&BookingRequest {
                name: "Meher".to_string(),
                date: "2024-12-05".to_string(),
            })
            .is_ok()
        );
    }

    #[test]
    fn test_first_empty_field_in_declaration_order() {
        let req = CreateClassRequest {
            class_name: String::new(),
            start_date: String::new(),
            ..class_request()
        };
        let err = validate_required(&req).unwrap_err();
        assert_eq!(
            message(err),
            "Missing or invalid value for field: class_name"
        );
    }

    #[test]
    fn test_zero_capacity_reads_as_missing() {
        let req = CreateClassRequest {
            capacity: 0,
            ..class_request()
        };
        let err = validate_required(&req).unwrap_err();
        assert_eq!(message(err), "Missing or invalid value for field: capacity");
    }

    #[test]
    fn test_booking_fields() {
        let err = validate_required(&BookingRequest {
            name: "Meher".to_string(),
            date: String::new(),
        })
        .unwrap_err();
        assert_eq!(message(err), "Missing or invalid value for field: date");
    }
}
