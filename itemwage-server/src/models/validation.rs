//! Validation error types
//!
//! Each error renders as one entry of the 422 `detail` array:
//! `{"loc": [...], "msg": "...", "type": "..."}`.

use std::fmt;

use serde::Serialize;

/// Where in the request the offending value lives
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    Body,
    Path,
}

impl Location {
    fn as_str(self) -> &'static str {
        match self {
            Self::Body => "body",
            Self::Path => "path",
        }
    }
}

/// Validation error for request shapes and domain models
#[derive(Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// Request body is absent entirely
    MissingBody,

    /// Body is not parseable JSON
    InvalidJson { reason: String },

    /// Body is JSON but not an object
    NotAnObject,

    /// Required field is absent
    Missing { field: &'static str },

    /// Field is present with a value of the wrong JSON type
    NotAnInteger { loc: Location, field: &'static str },
    NotAString { field: &'static str },

    /// String field exceeds maximum length
    TooLong { field: &'static str, max: usize },

    /// Integer must be strictly greater than `bound`
    NotGreaterThan { field: &'static str, bound: i64 },
}

/// One entry of the `detail` array
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    pub loc: Vec<&'static str>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: &'static str,
}

impl ValidationError {
    /// Machine-readable error type
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MissingBody | Self::Missing { .. } => "missing",
            Self::InvalidJson { .. } => "json_invalid",
            Self::NotAnObject => "model_type",
            Self::NotAnInteger {
                loc: Location::Path,
                ..
            } => "int_parsing",
            Self::NotAnInteger { .. } => "int_type",
            Self::NotAString { .. } => "string_type",
            Self::TooLong { .. } => "string_too_long",
            Self::NotGreaterThan { .. } => "greater_than",
        }
    }

    fn loc(&self) -> Vec<&'static str> {
        match self {
            Self::MissingBody | Self::InvalidJson { .. } | Self::NotAnObject => vec!["body"],
            Self::NotAnInteger { loc, field } => vec![loc.as_str(), *field],
            Self::Missing { field }
            | Self::NotAString { field }
            | Self::TooLong { field, .. }
            | Self::NotGreaterThan { field, .. } => vec!["body", *field],
        }
    }

    pub fn to_field_error(&self) -> FieldError {
        FieldError {
            loc: self.loc(),
            msg: self.to_string(),
            kind: self.kind(),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingBody => write!(f, "Field required"),
            Self::InvalidJson { reason } => write!(f, "JSON decode error: {}", reason),
            Self::NotAnObject => write!(f, "Input should be a valid dictionary"),
            Self::Missing { .. } => write!(f, "Field required"),
            Self::NotAnInteger {
                loc: Location::Path,
                ..
            } => write!(f, "Input should be a valid integer, unable to parse string as an integer"),
            Self::NotAnInteger { .. } => write!(f, "Input should be a valid integer"),
            Self::NotAString { .. } => write!(f, "Input should be a valid string"),
            Self::TooLong { max, .. } => {
                write!(f, "String should have at most {} characters", max)
            }
            Self::NotGreaterThan { bound, .. } => {
                write!(f, "Input should be greater than {}", bound)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// All validation failures for one request
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ValidationErrors(pub Vec<ValidationError>);

impl ValidationErrors {
    pub fn details(&self) -> Vec<FieldError> {
        self.0.iter().map(ValidationError::to_field_error).collect()
    }
}

impl From<ValidationError> for ValidationErrors {
    fn from(e: ValidationError) -> Self {
        Self(vec![e])
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = self.0.iter().map(ToString::to_string).collect();
        write!(f, "{}", messages.join("; "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_display() {
        let err = ValidationError::TooLong {
            field: "name",
            max: 30,
        };
        assert_eq!(err.to_string(), "String should have at most 30 characters");
    }

    #[test]
    fn missing_field_detail() {
        let detail = ValidationError::Missing {
            field: "years_of_experience",
        }
        .to_field_error();

        assert_eq!(detail.loc, vec!["body", "years_of_experience"]);
        assert_eq!(detail.kind, "missing");
    }

    #[test]
    fn path_integer_uses_int_parsing() {
        let err = ValidationError::NotAnInteger {
            loc: Location::Path,
            field: "item_id",
        };
        let detail = err.to_field_error();
        assert_eq!(detail.loc, vec!["path", "item_id"]);
        assert_eq!(detail.kind, "int_parsing");
    }

    #[test]
    fn detail_serializes_type_key() {
        let detail = ValidationError::NotAString { field: "name" }.to_field_error();
        let json = serde_json::to_value(detail).unwrap();
        assert_eq!(json["type"], "string_type");
        assert_eq!(json["loc"], serde_json::json!(["body", "name"]));
    }
}
