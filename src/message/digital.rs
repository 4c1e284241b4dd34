//! Digital transport capability.

/// Transport description reported by email messages.
pub const EMAIL_SERVER: &str = "Sent via Email Server";

/// A message type with a defined electronic transport.
pub trait Digital {
    /// Describe how the message travels.
    fn communication_method(&self) -> &'static str;
}
