//! Observable event definitions
//!
//! Every user-visible effect of the demos is an `Event`. The `Display` impl
//! renders the exact console line; Serde's tagged enum gives the JSON form.

use std::fmt;

use serde::Serialize;

/// A single observable effect
///
/// Uses tagged enum with snake_case naming for JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Event {
    /// A device performed one of its actions
    Device { action: DeviceAction },
    /// Undo was requested with an empty history
    NothingToUndo,
    /// One step of a beverage preparation
    Preparation {
        beverage: &'static str,
        step: PrepStep,
        text: &'static str,
    },
    /// Coffee is asking whether to add condiments
    CondimentPrompt,
    /// A chat member received a message
    Received {
        to: String,
        from: String,
        content: String,
    },
    /// A non-member tried to send to the room
    NotInChat { name: String },
}

/// Device actions, one per direction per device
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceAction {
    LightOn,
    LightOff,
    DoorOpened,
    DoorClosed,
    TemperatureIncreased,
    TemperatureDecreased,
    TvOn,
    TvOff,
}

impl DeviceAction {
    /// Console text for this action
    pub fn describe(self) -> &'static str {
        match self {
            DeviceAction::LightOn => "Light turned on",
            DeviceAction::LightOff => "Light turned off",
            DeviceAction::DoorOpened => "Door opened",
            DeviceAction::DoorClosed => "Door closed",
            DeviceAction::TemperatureIncreased => "Temperature increased",
            DeviceAction::TemperatureDecreased => "Temperature decreased",
            DeviceAction::TvOn => "TV turned on",
            DeviceAction::TvOff => "TV turned off",
        }
    }
}

/// Steps of the beverage template, in the order they run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum PrepStep {
    BoilWater,
    Brew,
    Pour,
    AddCondiments,
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Event::Device { action } => f.write_str(action.describe()),
            Event::NothingToUndo => f.write_str("No commands to undo"),
            Event::Preparation { text, .. } => f.write_str(text),
            Event::CondimentPrompt => f.write_str("Add condiments? (y/n): "),
            Event::Received { to, from, content } => {
                write!(f, "{} received from {}: {}", to, from, content)
            }
            Event::NotInChat { name } => write!(f, "{} is not in the chat", name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_received_display() {
        let event = Event::Received {
            to: "Nika".to_string(),
            from: "Niusha".to_string(),
            content: "(private) Hey Nika".to_string(),
        };
        assert_eq!(event.to_string(), "Nika received from Niusha: (private) Hey Nika");
    }

    #[test]
    fn test_not_in_chat_display() {
        let event = Event::NotInChat {
            name: "Danel".to_string(),
        };
        assert_eq!(event.to_string(), "Danel is not in the chat");
    }

    #[test]
    fn test_device_display() {
        let event = Event::Device {
            action: DeviceAction::TemperatureDecreased,
        };
        assert_eq!(event.to_string(), "Temperature decreased");
        assert_eq!(Event::NothingToUndo.to_string(), "No commands to undo");
    }

    #[test]
    fn test_device_event_serialize() {
        let event = Event::Device {
            action: DeviceAction::TvOn,
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"type\":\"device\""));
        assert!(json.contains("\"action\":\"tv_on\""));
    }

    #[test]
    fn test_preparation_event_serialize() {
        let event = Event::Preparation {
            beverage: "Tea",
            step: PrepStep::AddCondiments,
            text: "Adding lemon",
        };
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"type\":\"preparation\""));
        assert!(json.contains("\"step\":\"add_condiments\""));
        assert!(json.contains("\"text\":\"Adding lemon\""));
    }

    #[test]
    fn test_unit_event_serialize() {
        let json = serde_json::to_string(&Event::NothingToUndo).unwrap();
        assert_eq!(json, r#"{"type":"nothing_to_undo"}"#);
    }
}
