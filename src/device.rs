//! Device stubs
//!
//! Each device has two mutually-inverse actions. Devices track no state;
//! an action's only effect is the event it emits.

use crate::event::{DeviceAction, Event};
use crate::output::Output;

/// A device with a pair of inverse actions
///
/// `activate` is the "positive" direction (on, open, increase) and
/// `deactivate` its inverse.
pub trait Device {
    fn activate(&self, out: &mut dyn Output);
    fn deactivate(&self, out: &mut dyn Output);
}

fn emit(out: &mut dyn Output, action: DeviceAction) {
    out.emit(Event::Device { action });
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Light;

impl Light {
    pub fn on(&self, out: &mut dyn Output) {
        emit(out, DeviceAction::LightOn);
    }

    pub fn off(&self, out: &mut dyn Output) {
        emit(out, DeviceAction::LightOff);
    }
}

impl Device for Light {
    fn activate(&self, out: &mut dyn Output) {
        self.on(out);
    }

    fn deactivate(&self, out: &mut dyn Output) {
        self.off(out);
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Door;

impl Door {
    pub fn open(&self, out: &mut dyn Output) {
        emit(out, DeviceAction::DoorOpened);
    }

    pub fn close(&self, out: &mut dyn Output) {
        emit(out, DeviceAction::DoorClosed);
    }
}

impl Device for Door {
    fn activate(&self, out: &mut dyn Output) {
        self.open(out);
    }

    fn deactivate(&self, out: &mut dyn Output) {
        self.close(out);
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Thermostat;

impl Thermostat {
    pub fn increase(&self, out: &mut dyn Output) {
        emit(out, DeviceAction::TemperatureIncreased);
    }

    pub fn decrease(&self, out: &mut dyn Output) {
        emit(out, DeviceAction::TemperatureDecreased);
    }
}

impl Device for Thermostat {
    fn activate(&self, out: &mut dyn Output) {
        self.increase(out);
    }

    fn deactivate(&self, out: &mut dyn Output) {
        self.decrease(out);
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Tv;

impl Tv {
    pub fn on(&self, out: &mut dyn Output) {
        emit(out, DeviceAction::TvOn);
    }

    pub fn off(&self, out: &mut dyn Output) {
        emit(out, DeviceAction::TvOff);
    }
}

impl Device for Tv {
    fn activate(&self, out: &mut dyn Output) {
        self.on(out);
    }

    fn deactivate(&self, out: &mut dyn Output) {
        self.off(out);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::output::Transcript;

    #[test]
    fn test_device_actions_text() {
        let transcript = Transcript::new();
        let mut out = transcript.clone();

        Light.on(&mut out);
        Door.close(&mut out);
        Thermostat.increase(&mut out);
        Tv.off(&mut out);

        assert_eq!(
            transcript.lines(),
            vec![
                "Light turned on",
                "Door closed",
                "Temperature increased",
                "TV turned off",
            ]
        );
    }

    #[test]
    fn test_activate_deactivate_are_inverse() {
        let transcript = Transcript::new();
        let mut out = transcript.clone();

        Door.activate(&mut out);
        Door.deactivate(&mut out);

        assert_eq!(transcript.lines(), vec!["Door opened", "Door closed"]);
    }
}
