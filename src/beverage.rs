//! Template Method: beverage preparation
//!
//! `Beverage::prepare` fixes the order of steps. Each beverage supplies the
//! brew and condiment steps, and may override whether condiments are wanted.

use tracing::debug;

use crate::event::{Event, PrepStep};
use crate::output::{Input, Output};

/// A drink prepared by the fixed boil, brew, pour, condiments sequence
pub trait Beverage {
    /// Display name used in events and logs
    fn name(&self) -> &'static str;

    fn brew(&self, out: &mut dyn Output);

    fn add_condiments(&self, out: &mut dyn Output);

    /// Whether the condiment step runs. Defaults to always.
    fn wants_condiments(&self, _out: &mut dyn Output, _input: &mut dyn Input) -> bool {
        true
    }

    /// Run the full preparation
    fn prepare(&self, out: &mut dyn Output, input: &mut dyn Input) {
        debug!("Preparing {}", self.name());

        emit_step(out, self.name(), PrepStep::BoilWater, "Boiling water");
        self.brew(out);
        emit_step(out, self.name(), PrepStep::Pour, "Pouring into cup");

        if self.wants_condiments(out, input) {
            self.add_condiments(out);
        } else {
            debug!("{} served without condiments", self.name());
        }
    }
}

/// Emit a single preparation step
pub fn emit_step(out: &mut dyn Output, beverage: &'static str, step: PrepStep, text: &'static str) {
    out.emit(Event::Preparation {
        beverage,
        step,
        text,
    });
}

/// Interpret a prompt answer. Only `y`, ignoring case and surrounding
/// whitespace, is affirmative.
pub fn is_affirmative(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("y")
}

#[derive(Debug, Default, Clone, Copy)]
pub struct Tea;

impl Beverage for Tea {
    fn name(&self) -> &'static str {
        "Tea"
    }

    fn brew(&self, out: &mut dyn Output) {
        emit_step(out, self.name(), PrepStep::Brew, "Steeping tea");
    }

    fn add_condiments(&self, out: &mut dyn Output) {
        emit_step(out, self.name(), PrepStep::AddCondiments, "Adding lemon");
    }
}

/// Coffee asks before adding condiments
#[derive(Debug, Default, Clone, Copy)]
pub struct Coffee;

impl Beverage for Coffee {
    fn name(&self) -> &'static str {
        "Coffee"
    }

    fn brew(&self, out: &mut dyn Output) {
        emit_step(out, self.name(), PrepStep::Brew, "Brewing coffee");
    }

    fn add_condiments(&self, out: &mut dyn Output) {
        emit_step(out, self.name(), PrepStep::AddCondiments, "Adding sugar and milk");
    }

    fn wants_condiments(&self, out: &mut dyn Output, input: &mut dyn Input) -> bool {
        out.emit(Event::CondimentPrompt);
        input
            .read_line()
            .map(|answer| is_affirmative(&answer))
            .unwrap_or(false)
    }
}

#[derive(Debug, Default, Clone, Copy)]
pub struct HotChocolate;

impl Beverage for HotChocolate {
    fn name(&self) -> &'static str {
        "Hot chocolate"
    }

    fn brew(&self, out: &mut dyn Output) {
        emit_step(out, self.name(), PrepStep::Brew, "Mixing cocoa");
    }

    fn add_condiments(&self, out: &mut dyn Output) {
        emit_step(out, self.name(), PrepStep::AddCondiments, "Adding marshmallows");
    }
}
