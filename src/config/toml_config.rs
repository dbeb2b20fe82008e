use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::config::SimConfig;
use crate::utils::error::Result;

/// Partial configuration loaded from a TOML file. Every table and field is
/// optional; whatever is present overrides the defaults.
///
/// ```toml
/// [building]
/// total_floors = 10
/// cars = 4
///
/// [timing]
/// travel_ms = 1000
/// boarding_ms = 1000
///
/// [simulation]
/// ticks = 50
/// seed = 42
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    pub building: Option<BuildingConfig>,
    pub timing: Option<TimingConfig>,
    pub simulation: Option<SimulationConfig>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BuildingConfig {
    pub total_floors: Option<u32>,
    pub cars: Option<usize>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TimingConfig {
    pub travel_ms: Option<u64>,
    pub boarding_ms: Option<u64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SimulationConfig {
    pub ticks: Option<u64>,
    pub seed: Option<u64>,
}

impl TomlConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Overlay every present field onto `config`.
    pub fn apply_to(&self, config: &mut SimConfig) {
        if let Some(building) = &self.building {
            if let Some(total_floors) = building.total_floors {
                config.total_floors = total_floors;
            }
            if let Some(cars) = building.cars {
                config.cars = cars;
            }
        }
        if let Some(timing) = &self.timing {
            if let Some(travel_ms) = timing.travel_ms {
                config.travel_ms = travel_ms;
            }
            if let Some(boarding_ms) = timing.boarding_ms {
                config.boarding_ms = boarding_ms;
            }
        }
        if let Some(simulation) = &self.simulation {
            if let Some(ticks) = simulation.ticks {
                config.ticks = ticks;
            }
            if simulation.seed.is_some() {
                config.seed = simulation.seed;
            }
        }
    }
}
