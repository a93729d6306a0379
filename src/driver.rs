//! Host-loop driver.
//!
//! Owns the step cadence and maps discrete input events (GUI buttons,
//! controller triggers, gamepad edges) onto lattice calls. The lattice itself
//! never looks at time.

use crate::config::{DriverConfig, RuleConfig, Settings};
use crate::error::Result;
use crate::fade::FadeBuffer;
use crate::state::{CellChange, Lattice};

/// A discrete event raised by the input layer.
#[derive(Clone, Debug, PartialEq)]
pub enum Command {
    Randomize(Option<String>),
    Clear,
    /// Manual single step. Ignored while automatic stepping is enabled.
    Step,
    /// Single step regardless of automatic stepping.
    ForceStep,
    ToggleCell(i16, i16, i16),
    PlaceCell(i16, i16, i16),
    RemoveCell(i16, i16, i16),
    SetEnabled(bool),
    ToggleEnabled,
    ToggleWrap,
    SetRule(RuleConfig),
}

/// What a command did, for the caller to log or display.
#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    Seeded(String),
    Stepped(Vec<CellChange>),
    /// New cell state, or `None` when the coordinate missed the lattice.
    Edited(Option<bool>),
    Cleared,
    Enabled(bool),
    Wrap(bool),
    RuleChanged,
    Ignored,
}

pub struct Driver {
    pub lattice: Lattice,
    pub fade: FadeBuffer,
    pub config: DriverConfig,
    last_update_ms: f64,
}

impl Driver {
    pub fn new(lattice: Lattice, config: DriverConfig) -> Self {
        let fade = FadeBuffer::new(&lattice);
        Driver {
            lattice,
            fade,
            config,
            last_update_ms: 0.0,
        }
    }

    /// Build the lattice from settings and apply the initial seed, if any.
    pub fn from_settings(settings: &Settings) -> Result<Self> {
        let lattice = Lattice::with_config(&settings.lattice, settings.rule)?;
        let mut driver = Driver::new(lattice, settings.driver);
        if let Some(seed) = settings.lattice.initial_seed.as_deref() {
            driver.apply(Command::Randomize(Some(seed.to_string())))?;
        }
        Ok(driver)
    }

    pub fn last_update_ms(&self) -> f64 {
        self.last_update_ms
    }

    /// Called once per frame with the host's clock.
    ///
    /// Steps when enabled and more than `step_delay_ms` has passed since the
    /// last automatic step, then decays the fade buffer either way.
    pub fn tick(&mut self, time_ms: f64) -> Result<Option<Vec<CellChange>>> {
        let mut stepped = None;
        if self.config.enabled && time_ms - self.last_update_ms > self.config.step_delay_ms {
            let changes = self.step_once()?;
            self.last_update_ms = time_ms;
            stepped = Some(changes);
        }
        self.fade.decay(&self.lattice);
        Ok(stepped)
    }

    pub fn apply(&mut self, command: Command) -> Result<Outcome> {
        let outcome = match command {
            Command::Randomize(seed) => {
                let (seed, changes) = self.lattice.randomize(seed.as_deref())?;
                self.fade.sync_after_fill(&self.lattice, &changes);
                Outcome::Seeded(seed)
            }
            Command::Clear => {
                self.lattice.clear();
                self.fade.sync(&self.lattice);
                Outcome::Cleared
            }
            Command::Step if self.config.enabled => Outcome::Ignored,
            Command::Step | Command::ForceStep => Outcome::Stepped(self.step_once()?),
            Command::ToggleCell(x, y, z) => {
                let state = self.lattice.toggle_cell(x, y, z);
                if let Some(alive) = state {
                    self.fade.set(x, y, z, alive);
                }
                Outcome::Edited(state)
            }
            Command::PlaceCell(x, y, z) => self.edit(x, y, z, true),
            Command::RemoveCell(x, y, z) => self.edit(x, y, z, false),
            Command::SetEnabled(enabled) => {
                self.config.enabled = enabled;
                Outcome::Enabled(enabled)
            }
            Command::ToggleEnabled => {
                self.config.enabled = !self.config.enabled;
                Outcome::Enabled(self.config.enabled)
            }
            Command::ToggleWrap => {
                self.lattice.rule.wrap = !self.lattice.rule.wrap;
                Outcome::Wrap(self.lattice.rule.wrap)
            }
            Command::SetRule(rule) => {
                self.lattice.rule = rule;
                Outcome::RuleChanged
            }
        };
        log::debug!("command outcome: {:?}", outcome);
        Ok(outcome)
    }

    fn step_once(&mut self) -> Result<Vec<CellChange>> {
        let changes = self.lattice.step()?;
        self.fade.apply_changes(&changes);
        Ok(changes)
    }

    fn edit(&mut self, x: i16, y: i16, z: i16, alive: bool) -> Outcome {
        if !self.lattice.in_bounds(x, y, z) {
            return Outcome::Edited(None);
        }
        self.lattice.set_cell(x, y, z, alive);
        self.fade.set(x, y, z, alive);
        Outcome::Edited(Some(alive))
    }
}
