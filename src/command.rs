//! Command pattern with undo
//!
//! A command binds a device and a direction. The `Invoker` runs commands and
//! keeps a LIFO history so the most recent one can be undone.

use tracing::debug;

use crate::device::{Device, Door, Light, Thermostat, Tv};
use crate::event::Event;
use crate::output::Output;

/// An action that can be performed and reverted
pub trait Command {
    /// Perform the configured action
    fn execute(&self, out: &mut dyn Output);
    /// Perform the inverse of `execute`
    fn undo(&self, out: &mut dyn Output);
}

/// Command bound to a single device
///
/// With `forward == true`, execute activates the device and undo deactivates
/// it. With `forward == false` the two are swapped.
#[derive(Debug, Clone, Copy)]
pub struct DeviceCommand<'d, D> {
    device: &'d D,
    forward: bool,
}

impl<'d, D: Device> DeviceCommand<'d, D> {
    pub fn new(device: &'d D, forward: bool) -> Self {
        Self { device, forward }
    }
}

impl<D: Device> Command for DeviceCommand<'_, D> {
    fn execute(&self, out: &mut dyn Output) {
        if self.forward {
            self.device.activate(out);
        } else {
            self.device.deactivate(out);
        }
    }

    fn undo(&self, out: &mut dyn Output) {
        if self.forward {
            self.device.deactivate(out);
        } else {
            self.device.activate(out);
        }
    }
}

pub type LightCommand<'d> = DeviceCommand<'d, Light>;
pub type DoorCommand<'d> = DeviceCommand<'d, Door>;
pub type TempCommand<'d> = DeviceCommand<'d, Thermostat>;
pub type TvCommand<'d> = DeviceCommand<'d, Tv>;

/// Runs commands and remembers them for undo
pub struct Invoker<'d> {
    /// Executed, not-yet-undone commands; last is most recent
    history: Vec<Box<dyn Command + 'd>>,
    out: Box<dyn Output>,
}

impl<'d> Invoker<'d> {
    /// Create an invoker with an empty history
    pub fn new(out: Box<dyn Output>) -> Self {
        Self {
            history: Vec::new(),
            out,
        }
    }

    /// Execute a command, then make it undoable
    pub fn run<C>(&mut self, command: C)
    where
        C: Command + 'd,
    {
        command.execute(self.out.as_mut());
        self.history.push(Box::new(command));
        debug!("Command executed, history depth {}", self.history.len());
    }

    /// Undo the most recent command
    ///
    /// With an empty history this only emits a notice.
    pub fn undo(&mut self) {
        match self.history.pop() {
            Some(command) => {
                command.undo(self.out.as_mut());
                debug!("Command undone, history depth {}", self.history.len());
            }
            None => {
                debug!("Undo requested with empty history");
                self.out.emit(Event::NothingToUndo);
            }
        }
    }

    /// Number of commands that can still be undone
    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Check if there is anything to undo
    pub fn can_undo(&self) -> bool {
        !self.history.is_empty()
    }
}
