//! Message displayed to the user.
use uuid::Uuid;

/// Message types.
#[derive(Clone, PartialEq, Debug)]
pub enum MessageType {
    /// Informational message.
    Info,

    /// Success message.
    Success,

    /// Something the user should pay attention to.
    Warning,

    /// Error message.
    Error,
}

/// A Message.
#[derive(Clone, PartialEq, Debug)]
pub struct Message {
    id: Uuid,

    /// Message to display.
    pub message: String,

    /// Type of message.
    pub kind: MessageType,

    details: Option<String>,
}

impl Message {
    pub fn new(message: impl Into<String>, kind: MessageType) -> Self {
        Self {
            id: Uuid::new_v4(),
            message: message.into(),
            kind,
            details: None,
        }
    }

    /// Create a `Message` with a `kind` of [`MessageType::Info`].
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, MessageType::Info)
    }

    /// Create a `Message` with a `kind` of [`MessageType::Success`].
    pub fn success(message: impl Into<String>) -> Self {
        Self::new(message, MessageType::Success)
    }

    /// Create a `Message` with a `kind` of [`MessageType::Warning`].
    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(message, MessageType::Warning)
    }

    /// Create a `Message` with a `kind` of [`MessageType::Error`].
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, MessageType::Error)
    }

    pub fn id(&self) -> &Uuid {
        &self.id
    }

    pub fn details(&self) -> Option<&str> {
        self.details.as_deref()
    }

    pub fn set_details(&mut self, details: impl Into<String>) {
        self.details = Some(details.into());
    }

    /// Builder style [`Self::set_details`].
    pub fn with_details(mut self, details: impl Into<String>) -> Self {
        self.set_details(details);
        self
    }
}

#[cfg(test)]
#[path = "./message_test.rs"]
mod message_test;
