//! Field-by-field reading of JSON request bodies
//!
//! Every failure is recorded rather than returned early, so a single 422
//! response lists all problems with the body. A derived `Json<T>` stops
//! at the first serde error and carries no field location, which the
//! `detail` array needs.

use serde_json::{Map, Value};

use super::validation::{Location, ValidationError, ValidationErrors};

/// A JSON object being mapped onto a request type
pub struct BodyFields {
    map: Map<String, Value>,
    errors: Vec<ValidationError>,
}

impl BodyFields {
    /// Start reading a body. Anything other than a JSON object is rejected.
    pub fn new(body: Value) -> Result<Self, ValidationErrors> {
        match body {
            Value::Object(map) => Ok(Self {
                map,
                errors: Vec::new(),
            }),
            _ => Err(ValidationError::NotAnObject.into()),
        }
    }

    /// Required integer. Floats, strings, booleans and null are rejected.
    pub fn required_int(&mut self, field: &'static str) -> Option<i64> {
        match self.map.get(field) {
            None => {
                self.errors.push(ValidationError::Missing { field });
                None
            }
            Some(value) => {
                let int = value.as_i64();
                if int.is_none() {
                    self.errors.push(ValidationError::NotAnInteger {
                        loc: Location::Body,
                        field,
                    });
                }
                int
            }
        }
    }

    /// Required string. Null is a type error, not an absent value.
    pub fn required_str(&mut self, field: &'static str) -> Option<String> {
        match self.map.get(field) {
            None => {
                self.errors.push(ValidationError::Missing { field });
                None
            }
            Some(Value::Null) => {
                self.errors.push(ValidationError::NotAString { field });
                None
            }
            Some(_) => self.optional_str(field),
        }
    }

    /// Optional string; absent and null both read as `None`.
    pub fn optional_str(&mut self, field: &'static str) -> Option<String> {
        match self.map.get(field) {
            None | Some(Value::Null) => None,
            Some(Value::String(s)) => Some(s.clone()),
            Some(_) => {
                self.errors.push(ValidationError::NotAString { field });
                None
            }
        }
    }

    /// Drop `value` and record an error if it is longer than `max` characters.
    pub fn limit_len(
        &mut self,
        field: &'static str,
        value: Option<String>,
        max: usize,
    ) -> Option<String> {
        match value {
            Some(s) if s.chars().count() > max => {
                self.errors.push(ValidationError::TooLong { field, max });
                None
            }
            other => other,
        }
    }

    /// Record a check made by the caller on an already-read value.
    pub fn reject(&mut self, error: ValidationError) {
        self.errors.push(error);
    }

    /// Finish reading and hand back `value` if nothing failed.
    ///
    /// Callers pass `None` only when a reader above returned `None`, which
    /// always records an error.
    pub fn finish<T>(self, value: Option<T>) -> Result<T, ValidationErrors> {
        match value {
            Some(value) if self.errors.is_empty() => Ok(value),
            _ => Err(ValidationErrors(self.errors)),
        }
    }
}
