//! Chat room mediator
//!
//! Users never address each other directly. Every join, leave and message
//! goes through a `Mediator`, which owns the membership map and delivers to
//! the members it holds.

use std::cell::RefCell;

use indexmap::IndexMap;
use tracing::{debug, info};

use crate::event::Event;
use crate::output::Output;
use crate::user::Member;

/// Sender name used for membership notices
pub const SYSTEM_SENDER: &str = "System";

/// Routing contract between users and a chat
pub trait Mediator {
    /// Deliver to every current member except the sender
    fn send(&self, message: &str, sender: &Member);
    /// Deliver to one named member, if present
    fn send_private(&self, message: &str, sender: &Member, receiver: &str);
    fn join(&self, member: &Member);
    fn leave(&self, member: &Member);
}

/// Chat room with broadcast and private messages
///
/// Members are keyed by name and kept in join order. A second join under an
/// existing name replaces the earlier member in place.
///
/// Only `send` checks that the sender is a member. `leave` and `send_private`
/// act for any handle.
pub struct ChatRoom {
    /// Active members: name -> member
    members: RefCell<IndexMap<String, Member>>,
    out: RefCell<Box<dyn Output>>,
}

impl ChatRoom {
    /// Create an empty room delivering to the given sink
    pub fn new(out: Box<dyn Output>) -> Self {
        Self {
            members: RefCell::new(IndexMap::new()),
            out: RefCell::new(out),
        }
    }

    /// Check if a name is currently a member
    pub fn contains(&self, name: &str) -> bool {
        self.members.borrow().contains_key(name)
    }

    /// Current member names in join order
    pub fn member_names(&self) -> Vec<String> {
        self.members.borrow().keys().cloned().collect()
    }

    /// Number of active members
    pub fn len(&self) -> usize {
        self.members.borrow().len()
    }

    /// Check if the room has no members
    pub fn is_empty(&self) -> bool {
        self.members.borrow().is_empty()
    }

    /// Helper: deliver to everyone but `sender`, from `from`
    fn deliver_to_others(&self, message: &str, sender: &Member, from: &str) -> usize {
        let members = self.members.borrow();
        let mut out = self.out.borrow_mut();
        let mut delivered = 0;

        for member in members.values().filter(|m| m.id != sender.id) {
            member.receive(&mut **out, message, from);
            delivered += 1;
        }

        delivered
    }

    /// Helper: system notice to everyone but `subject`
    fn broadcast(&self, message: &str, subject: &Member) {
        self.deliver_to_others(message, subject, SYSTEM_SENDER);
    }
}

impl Mediator for ChatRoom {
    fn join(&self, member: &Member) {
        self.members
            .borrow_mut()
            .insert(member.name.clone(), member.clone());

        info!("{} ({}) joined the chat", member.name, member.id);
        self.broadcast(&format!("{} joined the chat", member.name), member);
        debug!("Total members: {}", self.len());
    }

    fn leave(&self, member: &Member) {
        let removed = self.members.borrow_mut().shift_remove(&member.name);

        if removed.is_none() {
            debug!("{} left but was not a member", member.name);
            return;
        }

        info!("{} ({}) left the chat", member.name, member.id);
        self.broadcast(&format!("{} left the chat", member.name), member);
        debug!("Total members: {}", self.len());
    }

    fn send(&self, message: &str, sender: &Member) {
        if !self.contains(&sender.name) {
            debug!("Rejected message from non-member {}", sender.name);
            self.out.borrow_mut().emit(Event::NotInChat {
                name: sender.name.clone(),
            });
            return;
        }

        let delivered = self.deliver_to_others(message, sender, &sender.name);
        debug!("Message from {} delivered to {} members", sender.name, delivered);
    }

    fn send_private(&self, message: &str, sender: &Member, receiver: &str) {
        let members = self.members.borrow();

        let Some(recipient) = members.get(receiver) else {
            debug!("Private message from {} to unknown {} dropped", sender.name, receiver);
            return;
        };

        let content = format!("(private) {}", message);
        recipient.receive(&mut **self.out.borrow_mut(), &content, &sender.name);
    }
}
