//! Common types.
pub mod record_id;
pub mod role;

pub use record_id::RecordId;
pub use role::Role;
