use std::fmt::Write;

use async_trait::async_trait;
use futures::future::join_all;

use crate::domain::model::{Building, CarState, Direction, StepDelays};
use crate::domain::ports::ElevatorService;
use crate::utils::error::{ElevatorError, Result};

/// Owns the building's cars, assigns incoming requests to the best-suited
/// car and drives all cars forward one step at a time.
pub struct Dispatcher {
    building: Building,
    delays: StepDelays,
}

impl Dispatcher {
    pub fn new(building: Building, delays: StepDelays) -> Self {
        Self { building, delays }
    }

    pub fn building(&self) -> &Building {
        &self.building
    }

    pub fn building_mut(&mut self) -> &mut Building {
        &mut self.building
    }
}

#[async_trait]
impl ElevatorService for Dispatcher {
    /// Select the best car for a request and queue the stop on it.
    ///
    /// Candidates are ranked first by whether their current direction already
    /// carries them towards the requested floor, then by distance. The stable
    /// minimum resolves ties to the lowest car ordinal.
    async fn call_elevator(&mut self, floor: u32, _direction: Direction) -> Result<()> {
        let total_floors = self.building.total_floors();
        if floor < Building::GROUND_FLOOR || floor > total_floors {
            return Err(ElevatorError::FloorOutOfRange {
                floor,
                total_floors,
            });
        }

        let best = self.building.cars_mut().iter_mut().min_by_key(|car| {
            let distance = car.current_floor().abs_diff(floor);
            let moving_towards = match car.direction() {
                Direction::Up => floor > car.current_floor(),
                Direction::Down => floor < car.current_floor(),
            };
            (!moving_towards, distance)
        });

        match best {
            Some(car) => {
                tracing::debug!("floor {} assigned to {}", floor, car.label());
                car.add_stop(floor);
                Ok(())
            }
            None => Err(ElevatorError::NoElevatorAvailable),
        }
    }

    /// One tick: every car advances one step, all of them concurrently. The
    /// call returns only once the whole fleet has finished, so the simulated
    /// travel and boarding pauses overlap across cars instead of adding up.
    async fn move_elevators(&mut self) -> Result<()> {
        let highest_floor = self.building.total_floors();
        let delays = self.delays;

        join_all(
            self.building
                .cars_mut()
                .iter_mut()
                .map(|car| car.move_to_next_floor(highest_floor, delays)),
        )
        .await;

        Ok(())
    }

    async fn status(&self) -> String {
        let mut report = String::new();
        for car in self.building.cars() {
            match car.state() {
                CarState::Idle => {
                    let _ = writeln!(
                        report,
                        "{} is on floor {} - Idle",
                        car.label(),
                        car.current_floor()
                    );
                }
                CarState::Moving => {
                    let _ = writeln!(
                        report,
                        "{} is on floor {} - Moving - {}",
                        car.label(),
                        car.current_floor(),
                        car.direction()
                    );
                }
            }
        }
        report
    }
}
