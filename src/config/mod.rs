pub mod toml_config;

use serde::{Deserialize, Serialize};

use crate::domain::model::StepDelays;
use crate::utils::error::Result;
use crate::utils::validation::{validate_positive_number, Validate};

pub const DEFAULT_TOTAL_FLOORS: u32 = 10;
pub const DEFAULT_CARS: usize = 4;
pub const DEFAULT_TRAVEL_MS: u64 = 1000;
pub const DEFAULT_BOARDING_MS: u64 = 1000;

/// Fully resolved simulation settings: defaults, overlaid by an optional TOML
/// file, overlaid by command-line flags.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimConfig {
    pub total_floors: u32,
    pub cars: usize,
    pub travel_ms: u64,
    pub boarding_ms: u64,
    /// Number of driver iterations; 0 runs until interrupted.
    pub ticks: u64,
    pub seed: Option<u64>,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            total_floors: DEFAULT_TOTAL_FLOORS,
            cars: DEFAULT_CARS,
            travel_ms: DEFAULT_TRAVEL_MS,
            boarding_ms: DEFAULT_BOARDING_MS,
            ticks: 0,
            seed: None,
        }
    }
}

impl SimConfig {
    pub fn delays(&self) -> StepDelays {
        StepDelays::from_millis(self.travel_ms, self.boarding_ms)
    }
}

impl Validate for SimConfig {
    fn validate(&self) -> Result<()> {
        validate_positive_number("total_floors", u64::from(self.total_floors), 1)?;
        validate_positive_number("cars", self.cars as u64, 1)?;
        Ok(())
    }
}

#[cfg(feature = "cli")]
pub use cli::CliConfig;

#[cfg(feature = "cli")]
mod cli {
    use clap::Parser;

    use super::toml_config::TomlConfig;
    use super::SimConfig;
    use crate::utils::error::Result;
    use crate::utils::validation::Validate;

    #[derive(Debug, Clone, Parser)]
    #[command(name = "elevator-sim")]
    #[command(about = "Multi-car elevator dispatch simulator")]
    pub struct CliConfig {
        /// Path to a TOML configuration file
        #[arg(short, long)]
        pub config: Option<String>,

        /// Total floors in the building
        #[arg(long)]
        pub floors: Option<u32>,

        /// Number of elevator cars
        #[arg(long)]
        pub cars: Option<usize>,

        /// Driver iterations to run (0 = run until interrupted)
        #[arg(long)]
        pub ticks: Option<u64>,

        /// Milliseconds per inter-floor movement
        #[arg(long)]
        pub travel_ms: Option<u64>,

        /// Milliseconds per boarding stop
        #[arg(long)]
        pub boarding_ms: Option<u64>,

        /// RNG seed for a reproducible request stream
        #[arg(long)]
        pub seed: Option<u64>,

        /// Enable verbose output
        #[arg(short, long)]
        pub verbose: bool,
    }

    impl SimConfig {
        /// Resolve the effective configuration: defaults, then the optional
        /// TOML file, then command-line overrides. Validates the result.
        pub fn from_cli(cli: &CliConfig) -> Result<Self> {
            let mut config = SimConfig::default();

            if let Some(path) = &cli.config {
                TomlConfig::from_file(path)?.apply_to(&mut config);
            }

            // 命令列參數覆蓋檔案設定
            if let Some(floors) = cli.floors {
                config.total_floors = floors;
            }
            if let Some(cars) = cli.cars {
                config.cars = cars;
            }
            if let Some(ticks) = cli.ticks {
                config.ticks = ticks;
            }
            if let Some(travel_ms) = cli.travel_ms {
                config.travel_ms = travel_ms;
            }
            if let Some(boarding_ms) = cli.boarding_ms {
                config.boarding_ms = boarding_ms;
            }
            if let Some(seed) = cli.seed {
                config.seed = Some(seed);
            }

            config.validate()?;
            Ok(config)
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert!(SimConfig::default().validate().is_ok());
    }

    #[test]
    fn delays_come_from_configured_milliseconds() {
        let config = SimConfig {
            travel_ms: 250,
            boarding_ms: 0,
            ..SimConfig::default()
        };

        let delays = config.delays();
        assert_eq!(delays.travel.as_millis(), 250);
        assert_eq!(delays.boarding.as_millis(), 0);
    }
}
