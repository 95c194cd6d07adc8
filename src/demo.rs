//! Demo driver
//!
//! Fixed scripts exercising each pattern once, in the order the binary runs
//! them.

use tracing::info;

use crate::beverage::{Beverage, Coffee, HotChocolate, Tea};
use crate::command::{DoorCommand, Invoker, LightCommand, TempCommand, TvCommand};
use crate::config::Scenario;
use crate::device::{Door, Light, Thermostat, Tv};
use crate::output::{Input, Output};
use crate::room::ChatRoom;
use crate::user::User;

/// Switch every device on, then undo the last two
pub fn run_commands(out: Box<dyn Output>) {
    info!("Running command demo");

    let light = Light;
    let door = Door;
    let temp = Thermostat;
    let tv = Tv;
    let mut invoker = Invoker::new(out);

    invoker.run(LightCommand::new(&light, true));
    invoker.run(DoorCommand::new(&door, true));
    invoker.run(TempCommand::new(&temp, true));
    invoker.run(TvCommand::new(&tv, true));

    invoker.undo();
    invoker.undo();
}

/// Prepare one of each beverage
pub fn run_beverages(out: &mut dyn Output, input: &mut dyn Input) {
    info!("Running beverage demo");

    let beverages: [&dyn Beverage; 3] = [&Tea, &Coffee, &HotChocolate];
    for beverage in beverages {
        beverage.prepare(out, input);
    }
}

/// Three users join, talk, and one leaves
pub fn run_chat(out: Box<dyn Output>) {
    info!("Running chat demo");

    let room = ChatRoom::new(out);
    let nika = User::new("Nika", &room);
    let niusha = User::new("Niusha", &room);
    let danel = User::new("Danel", &room);

    nika.join();
    niusha.join();
    danel.join();

    nika.send("Hi everyone!");
    niusha.send_private("Hey Nika", "Nika");
    danel.leave();
    danel.send("Still here?");
}

/// Run the selected scenario
///
/// `sink` builds a fresh output for each demo that runs.
pub fn run<F>(scenario: Scenario, mut sink: F, input: &mut dyn Input)
where
    F: FnMut() -> Box<dyn Output>,
{
    if matches!(scenario, Scenario::All | Scenario::Command) {
        run_commands(sink());
    }
    if matches!(scenario, Scenario::All | Scenario::Template) {
        run_beverages(sink().as_mut(), input);
    }
    if matches!(scenario, Scenario::All | Scenario::Mediator) {
        run_chat(sink());
    }
}
