//! Participant identity
//!
//! Chat membership is keyed by display name, which users can share. The
//! mediator tells handles apart by `UserId` when it leaves the sender out of
//! a delivery.

use uuid::Uuid;

/// Identity of one `User` handle, fixed at construction
///
/// Random UUID v4, so two handles created with the same name still compare
/// unequal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UserId(pub Uuid);

impl UserId {
    /// Create a new random user ID
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for UserId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
