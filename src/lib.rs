pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;
pub use crate::config::SimConfig;

pub use crate::adapters::logger::{NullLogger, TracingLogger};
pub use crate::core::{controller::ElevatorController, dispatcher::Dispatcher};
pub use crate::domain::model::{Building, Car, CarState, Direction, StepDelays};
pub use crate::domain::ports::{ElevatorService, Logger};
pub use crate::utils::error::{ElevatorError, Result};
