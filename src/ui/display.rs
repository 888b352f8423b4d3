//! View model for the dashboard
//!
//! Everything the terminal draws is computed here first, so layout code
//! only places widgets.

use crate::actions::catalog::Action;
use crate::core::config::SimulationConfig;
use crate::core::types::Tick;
use crate::entity::plant::{PlantState, Stat};
use crate::render::colors::{self, Color};
use crate::render::PlantVisual;
use crate::simulation::Session;
use crate::ui::state::LogEntry;

/// One stat gauge
#[derive(Debug, Clone, PartialEq)]
pub struct StatBar {
    pub stat: Stat,
    pub value: f32,
    /// 0.0 to 1.0
    pub ratio: f64,
    /// Numeric label, e.g. "70%"
    pub text: String,
    pub color: Color,
}

impl StatBar {
    pub fn new(stat: Stat, value: f32) -> Self {
        Self {
            stat,
            value,
            ratio: (value as f64 / 100.0).clamp(0.0, 1.0),
            text: format!("{:.0}%", value),
            color: colors::warning_tint(colors::stat_color(stat), value),
        }
    }

    pub fn label(&self) -> &'static str {
        self.stat.label()
    }
}

/// Everything shown on screen for one frame
#[derive(Debug, Clone)]
pub struct Dashboard {
    pub bars: Vec<StatBar>,
    pub stage: String,
    pub status: String,
    pub visual: PlantVisual,
    pub log: Vec<LogEntry>,
    pub tick: Tick,
    pub alive: bool,
    pub controls: Vec<(char, &'static str)>,
}

impl Dashboard {
    pub fn from_session(session: &Session) -> Self {
        let plant = session.plant();
        let config = session.config();

        Self {
            bars: Stat::ALL
                .iter()
                .map(|&stat| StatBar::new(stat, plant.get(stat)))
                .collect(),
            stage: plant.stage().label().to_string(),
            status: status_text(plant, config),
            visual: PlantVisual::from_state(plant, config),
            log: session.log().iter().cloned().collect(),
            tick: session.current_tick(),
            alive: plant.alive,
            controls: Action::ALL.iter().map(|a| (a.hotkey(), a.label())).collect(),
        }
    }
}

/// One-line summary of how the plant is doing, most urgent problem first
pub fn status_text(plant: &PlantState, config: &SimulationConfig) -> String {
    let message = if !plant.alive {
        "The plant has withered. Restart to try again."
    } else if plant.pests {
        "Pests are attacking! Prune to get rid of them."
    } else if plant.water() < config.water_band.low {
        "Thirsty. The soil is dry."
    } else if plant.water() > config.water_band.high {
        "Waterlogged. Let the soil dry out."
    } else if plant.nutrients() < config.nutrient_band.low {
        "Hungry. It could use fertilizer."
    } else if plant.health() < config.weak_health_threshold {
        "Weak, but recovering."
    } else {
        "Thriving."
    };
    message.to_string()
}
