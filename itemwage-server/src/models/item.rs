//! Item request shapes
//!
//! Mapped by hand from the JSON body: create needs a name, update takes
//! whatever subset of fields was supplied.

use serde_json::Value;

use super::fields::BodyFields;
use super::ValidationErrors;

/// Maximum length for item names, matching the `items.name` column
pub const MAX_ITEM_NAME_LEN: usize = 30;

/// Validated create request
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewItem {
    pub name: String,
    pub description: Option<String>,
}

/// Validated partial update.
///
/// `None` means "leave as is"; there is no way to clear a field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemPatch {
    pub name: Option<String>,
    pub description: Option<String>,
}

impl NewItem {
    /// Map a create body.
    ///
    /// # Rules
    /// - `name` required, string, at most 30 characters
    /// - `description` optional string or null
    pub fn from_json(body: Value) -> Result<Self, ValidationErrors> {
        let mut fields = BodyFields::new(body)?;
        let name = fields.required_str("name");
        let name = fields.limit_len("name", name, MAX_ITEM_NAME_LEN);
        let description = fields.optional_str("description");

        fields.finish(name.map(|name| Self { name, description }))
    }
}

impl ItemPatch {
    /// Map an update body. Absent and null fields are both left untouched.
    pub fn from_json(body: Value) -> Result<Self, ValidationErrors> {
        let mut fields = BodyFields::new(body)?;
        let name = fields.optional_str("name");
        let name = fields.limit_len("name", name, MAX_ITEM_NAME_LEN);
        let description = fields.optional_str("description");

        fields.finish(Some(Self { name, description }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ValidationError;
    use serde_json::json;

    #[test]
    fn create_with_name_only() {
        let item = NewItem::from_json(json!({ "name": "A" })).unwrap();
        assert_eq!(item.name, "A");
        assert_eq!(item.description, None);
    }

    #[test]
    fn create_requires_name() {
        let err = NewItem::from_json(json!({ "description": "no name" })).unwrap_err();
        assert_eq!(err.0, vec![ValidationError::Missing { field: "name" }]);
    }

    #[test]
    fn create_rejects_long_name() {
        let err = NewItem::from_json(json!({ "name": "x".repeat(31) })).unwrap_err();
        assert!(matches!(err.0[0], ValidationError::TooLong { max: 30, .. }));
    }

    #[test]
    fn patch_partial_fields() {
        let patch = ItemPatch::from_json(json!({ "description": "x" })).unwrap();
        assert_eq!(patch.name, None);
        assert_eq!(patch.description.as_deref(), Some("x"));

        let patch = ItemPatch::from_json(json!({ "name": null, "description": null })).unwrap();
        assert_eq!(patch, ItemPatch::default());
    }

    #[test]
    fn patch_rejects_wrong_types() {
        let err = ItemPatch::from_json(json!({ "name": 12 })).unwrap_err();
        assert_eq!(err.0, vec![ValidationError::NotAString { field: "name" }]);
    }
}
