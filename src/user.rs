//! Chat participants
//!
//! A `User` is the handle application code holds: it forwards everything to
//! its mediator. A `Member` is the part the mediator keeps in its membership
//! map and delivers messages to.

use std::fmt;

use crate::event::Event;
use crate::output::Output;
use crate::room::Mediator;
use crate::types::UserId;

/// Membership entry held by a mediator
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Member {
    /// Identity used for sender exclusion
    pub id: UserId,
    /// Display name, also the membership key
    pub name: String,
}

impl Member {
    /// Create a member with a fresh identity
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: UserId::new(),
            name: name.into(),
        }
    }

    /// Inbound callback invoked by the mediator
    pub fn receive(&self, out: &mut dyn Output, message: &str, from: &str) {
        out.emit(Event::Received {
            to: self.name.clone(),
            from: from.to_string(),
            content: message.to_string(),
        });
    }
}

/// Named participant bound to one mediator for its lifetime
pub struct User<'m> {
    member: Member,
    chat: &'m dyn Mediator,
}

impl<'m> User<'m> {
    pub fn new(name: impl Into<String>, chat: &'m dyn Mediator) -> Self {
        Self {
            member: Member::new(name),
            chat,
        }
    }

    pub fn name(&self) -> &str {
        &self.member.name
    }

    pub fn id(&self) -> UserId {
        self.member.id
    }

    /// The handle the mediator stores for this user
    pub fn member(&self) -> &Member {
        &self.member
    }

    pub fn join(&self) {
        self.chat.join(&self.member);
    }

    pub fn leave(&self) {
        self.chat.leave(&self.member);
    }

    pub fn send(&self, message: &str) {
        self.chat.send(message, &self.member);
    }

    pub fn send_private(&self, message: &str, to: &str) {
        self.chat.send_private(message, &self.member, to);
    }
}

impl fmt::Debug for User<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("User")
            .field("id", &self.member.id)
            .field("name", &self.member.name)
            .finish_non_exhaustive()
    }
}
