//! Request models with validation at construction
//!
//! All user input is validated when creating these types.
//! Invalid input returns ValidationErrors, not panic.

pub mod fields;
pub mod item;
pub mod validation;
pub mod wage;

pub use fields::BodyFields;
pub use item::{ItemPatch, NewItem, MAX_ITEM_NAME_LEN};
pub use validation::{FieldError, Location, ValidationError, ValidationErrors};
pub use wage::WageQuery;
