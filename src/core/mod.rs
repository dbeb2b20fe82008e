pub mod controller;
pub mod dispatcher;

pub use crate::domain::model::{Building, Car, CarState, Direction, StepDelays};
pub use crate::domain::ports::{ElevatorService, Logger};
pub use crate::utils::error::Result;
