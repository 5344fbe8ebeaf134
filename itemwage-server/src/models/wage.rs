//! Wage request shape

use itemwage_core::ExperiencePolicy;
use serde_json::Value;

use super::fields::BodyFields;
use super::{ValidationError, ValidationErrors};

const YEARS_FIELD: &str = "years_of_experience";

/// Validated wage query
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WageQuery {
    pub years_of_experience: i64,
}

impl WageQuery {
    /// Map a `/predict_wage` body, applying the experience policy.
    pub fn from_json(body: Value, policy: ExperiencePolicy) -> Result<Self, ValidationErrors> {
        let mut fields = BodyFields::new(body)?;
        let years = fields.required_int(YEARS_FIELD);

        let years = match years {
            Some(y) if !policy.accepts(y) => {
                fields.reject(ValidationError::NotGreaterThan {
                    field: YEARS_FIELD,
                    bound: 0,
                });
                None
            }
            other => other,
        };

        fields.finish(years.map(|years_of_experience| Self {
            years_of_experience,
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn clamp_accepts_negative() {
        let query =
            WageQuery::from_json(json!({ "years_of_experience": -2 }), ExperiencePolicy::Clamp)
                .unwrap();
        assert_eq!(query.years_of_experience, -2);
    }

    #[test]
    fn reject_refuses_non_positive() {
        for years in [0, -2] {
            let err = WageQuery::from_json(
                json!({ "years_of_experience": years }),
                ExperiencePolicy::Reject,
            )
            .unwrap_err();
            assert_eq!(err.details()[0].kind, "greater_than");
        }
    }

    #[test]
    fn empty_body_names_missing_field() {
        let err = WageQuery::from_json(json!({}), ExperiencePolicy::Clamp).unwrap_err();
        let detail = &err.details()[0];
        assert_eq!(detail.kind, "missing");
        assert_eq!(detail.loc, vec!["body", "years_of_experience"]);
    }
}
