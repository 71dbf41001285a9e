pub mod message;
pub mod to_key;

// Re-exports
pub use message::{Message, MessageType};
pub use to_key::ToKey;
