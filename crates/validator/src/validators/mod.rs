//! Built-in validators
//!
//! Single-item validators over `serde_json::Value`. Each one guards its
//! type assumption first (string check, number check) and only then runs
//! the semantic check, so no input shape can cause a failure beyond a
//! returned error.
//!
//! # Categories
//!
//! - **Format**: [`DateString`], [`Email`], [`ObjectId`], [`SimplePhone`]
//! - **Scalar**: [`NotEmptyText`], [`PositiveId`]
//! - **Allow-list**: [`OneOf`], [`FieldsString`]

pub mod allowed;
pub mod date;
pub mod email;
pub mod fields;
pub mod id;
pub mod object_id;
pub mod phone;
pub mod text;

pub use allowed::{OneOf, one_of};
pub use date::{DateString, date_string};
pub use email::{Email, email};
pub use fields::{FieldsString, fields_string};
pub use id::{PositiveId, positive_id};
pub use object_id::{ObjectId, object_id};
pub use phone::{SimplePhone, simple_phone};
pub use text::{NotEmptyText, not_empty_text};
