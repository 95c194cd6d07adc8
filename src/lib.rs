//! Design Pattern Demonstrations
//!
//! A learning-oriented library showing three classic patterns with trivial
//! domain objects whose only work is emitting a line of output.
//!
//! # Patterns
//! - Command with undo: devices, commands and an `Invoker` with LIFO history
//! - Template Method: `Beverage::prepare` with per-drink hooks
//! - Mediator: a `ChatRoom` routing joins, leaves and messages between users
//!
//! # Architecture
//! Components emit typed `Event`s into an injected `Output` and read answers
//! from an injected `Input`:
//! - the binary wires them to stdout/stdin via `Console` and `Stdin`
//! - tests use `Transcript` and `ScriptedInput`
//! - everything is single-threaded and synchronous
//!
//! # Example
//! ```
//! use pattern_demos::{ChatRoom, Transcript, User};
//!
//! let transcript = Transcript::new();
//! let room = ChatRoom::new(Box::new(transcript.clone()));
//! let alice = User::new("Alice", &room);
//! let bob = User::new("Bob", &room);
//!
//! alice.join();
//! bob.join();
//! bob.send("hi");
//!
//! assert_eq!(
//!     transcript.lines(),
//!     vec![
//!         "Alice received from System: Bob joined the chat",
//!         "Alice received from Bob: hi",
//!     ]
//! );
//! ```

pub mod beverage;
pub mod command;
pub mod config;
pub mod demo;
pub mod device;
pub mod error;
pub mod event;
pub mod output;
pub mod room;
pub mod types;
pub mod user;

// Re-export main types for convenience
pub use beverage::{is_affirmative, Beverage, Coffee, HotChocolate, Tea};
pub use command::{Command, DeviceCommand, DoorCommand, Invoker, LightCommand, TempCommand, TvCommand};
pub use config::{Config, OutputFormat, Scenario};
pub use device::{Device, Door, Light, Thermostat, Tv};
pub use error::AppError;
pub use event::{DeviceAction, Event, PrepStep};
pub use output::{Console, Input, Output, ScriptedInput, Stdin, Transcript};
pub use room::{ChatRoom, Mediator};
pub use types::UserId;
pub use user::{Member, User};
