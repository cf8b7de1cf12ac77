//! Content records consumed by the worker and the JSON-LD shapes it emits.
//!
//! Records mirror the content system's projection (camelCase keys, `_id`
//! and `_ref` references). Schema types are typed schema.org subsets.

mod records;
mod requests;
mod schema;

pub use records::*;
pub use requests::*;
pub use schema::*;
