//! Validation Utilities

use validator::ValidationErrors;

use super::error::{AppError, FieldError};

/// Convert validation errors to AppError
pub fn validation_error(errors: ValidationErrors) -> AppError {
    let field_errors: Vec<FieldError> = errors
        .field_errors()
        .iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| FieldError {
                field: field.to_string(),
                message: e.message.clone().map(|m| m.to_string()).unwrap_or_default(),
            })
        })
        .collect();

    let message = field_errors
        .first()
        .map(|e| format!("{}: {}", e.field, e.message))
        .unwrap_or_else(|| "Validation failed".into());

    AppError::Validation(message)
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[derive(Validate)]
    struct Probe {
        #[validate(length(min = 7, max = 8, message = "License plate must be 7-8 characters"))]
        license_plate: String,
    }

    #[test]
    fn test_first_field_error_becomes_message() {
        let probe = Probe {
            license_plate: "ABC".into(),
        };
        let err = validation_error(probe.validate().unwrap_err());
        match err {
            AppError::Validation(msg) => {
                assert_eq!(msg, "license_plate: License plate must be 7-8 characters");
            }
            other => panic!("expected validation error, got {:?}", other),
        }
    }
}
