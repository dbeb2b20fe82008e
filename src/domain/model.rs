use std::collections::BTreeSet;
use std::fmt;
use std::time::Duration;

use tokio::time::sleep;
use uuid::Uuid;

/// Direction of travel. Persists while a car is idle, so an idle car still
/// "faces" the way it last moved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Up => write!(f, "Up"),
            Direction::Down => write!(f, "Down"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CarState {
    Idle,
    Moving,
}

impl fmt::Display for CarState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CarState::Idle => write!(f, "Idle"),
            CarState::Moving => write!(f, "Moving"),
        }
    }
}

/// Simulated pauses inside a single movement step. Injected rather than
/// hardcoded so tests can run at zero wall time.
#[derive(Debug, Clone, Copy)]
pub struct StepDelays {
    /// Pause for one inter-floor movement.
    pub travel: Duration,
    /// Pause for passengers entering/leaving at a serviced stop.
    pub boarding: Duration,
}

impl StepDelays {
    pub fn from_millis(travel_ms: u64, boarding_ms: u64) -> Self {
        Self {
            travel: Duration::from_millis(travel_ms),
            boarding: Duration::from_millis(boarding_ms),
        }
    }

    pub fn zero() -> Self {
        Self::from_millis(0, 0)
    }
}

/// A single elevator car: position, direction, motion state and the set of
/// floors it still has to visit.
#[derive(Debug, Clone)]
pub struct Car {
    id: Uuid,
    label: String,
    current_floor: u32,
    direction: Direction,
    state: CarState,
    stops: BTreeSet<u32>,
}

impl Car {
    pub fn new(floor: u32, direction: Direction, state: CarState, label: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4(),
            label: label.into(),
            current_floor: floor,
            direction,
            state,
            stops: BTreeSet::new(),
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn current_floor(&self) -> u32 {
        self.current_floor
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn state(&self) -> CarState {
        self.state
    }

    /// Pending stop floors, ascending and duplicate-free.
    pub fn stops(&self) -> &BTreeSet<u32> {
        &self.stops
    }

    /// Queue a stop. Adding a floor that is already queued is a no-op.
    pub fn add_stop(&mut self, floor: u32) {
        self.stops.insert(floor);
    }

    /// Overwrite position, direction and state. Used for scenario setup; the
    /// stop set is left untouched.
    pub fn reposition(&mut self, floor: u32, direction: Direction, state: CarState) {
        self.current_floor = floor;
        self.direction = direction;
        self.state = state;
    }

    /// Advance this car by one step towards its next stop.
    ///
    /// The next target is always the lowest queued floor, regardless of the
    /// current direction of travel. That is intentionally not a directional
    /// SCAN: the rest of the system (and its expected outputs) assume this
    /// exact policy.
    ///
    /// One call moves the car by at most one floor and services at most one
    /// stop. Reaching the building's highest floor flips the direction to
    /// Down, even when the target is elsewhere.
    pub async fn move_to_next_floor(&mut self, highest_floor: u32, delays: StepDelays) {
        let Some(target) = self.stops.first().copied() else {
            self.state = CarState::Idle;
            return;
        };

        self.state = CarState::Moving;

        if self.current_floor < target {
            self.current_floor += 1;
            self.direction = Direction::Up;
            sleep(delays.travel).await;
            if self.current_floor == highest_floor {
                self.direction = Direction::Down;
            }
        } else if self.current_floor > target {
            self.current_floor -= 1;
            self.direction = Direction::Down;
            sleep(delays.travel).await;
        }

        if self.current_floor == target {
            self.stops.remove(&target);
            sleep(delays.boarding).await;
            self.state = if self.stops.is_empty() {
                CarState::Idle
            } else {
                CarState::Moving
            };
        }
    }
}

/// Building configuration: a fixed floor count and a fixed fleet of cars.
/// Cars are labeled `car 1..car N` in creation order.
#[derive(Debug, Clone)]
pub struct Building {
    total_floors: u32,
    cars: Vec<Car>,
}

impl Building {
    pub const GROUND_FLOOR: u32 = 1;
    pub const CAR_IDENTIFIER: &'static str = "car";

    pub fn new(total_floors: u32, number_of_cars: usize) -> Self {
        let cars = (1..=number_of_cars)
            .map(|i| {
                Car::new(
                    Self::GROUND_FLOOR,
                    Direction::Up,
                    CarState::Idle,
                    format!("{} {}", Self::CAR_IDENTIFIER, i),
                )
            })
            .collect();
        Self { total_floors, cars }
    }

    pub fn total_floors(&self) -> u32 {
        self.total_floors
    }

    pub fn cars(&self) -> &[Car] {
        &self.cars
    }

    pub fn cars_mut(&mut self) -> &mut [Car] {
        &mut self.cars
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_stop_is_idempotent_and_sorted() {
        let mut car = Car::new(1, Direction::Up, CarState::Idle, "car 1");
        car.add_stop(5);
        car.add_stop(3);
        car.add_stop(3);
        car.add_stop(8);

        let stops: Vec<u32> = car.stops().iter().copied().collect();
        assert_eq!(stops, vec![3, 5, 8]);
    }

    #[test]
    fn move_with_no_stops_stays_put_and_idle() {
        let mut car = Car::new(1, Direction::Up, CarState::Idle, "car 1");

        tokio_test::block_on(car.move_to_next_floor(10, StepDelays::zero()));

        assert_eq!(car.current_floor(), 1);
        assert_eq!(car.direction(), Direction::Up);
        assert_eq!(car.state(), CarState::Idle);
    }

    #[test]
    fn move_to_adjacent_stop_arrives_and_goes_idle() {
        let mut car = Car::new(1, Direction::Up, CarState::Idle, "car 1");
        car.add_stop(2);

        tokio_test::block_on(car.move_to_next_floor(10, StepDelays::zero()));

        assert_eq!(car.current_floor(), 2);
        assert_eq!(car.direction(), Direction::Up);
        assert_eq!(car.state(), CarState::Idle);
        assert!(car.stops().is_empty());
    }

    #[test]
    fn stop_at_current_floor_is_serviced_without_moving() {
        let mut car = Car::new(1, Direction::Up, CarState::Idle, "car 1");
        car.reposition(5, Direction::Up, CarState::Idle);
        car.add_stop(5);

        tokio_test::block_on(car.move_to_next_floor(10, StepDelays::zero()));

        assert_eq!(car.current_floor(), 5);
        assert!(car.stops().is_empty());
        assert_eq!(car.state(), CarState::Idle);
    }

    #[test]
    fn remaining_stops_keep_car_moving() {
        let mut car = Car::new(1, Direction::Up, CarState::Idle, "car 1");
        car.add_stop(2);
        car.add_stop(4);

        tokio_test::block_on(car.move_to_next_floor(10, StepDelays::zero()));

        assert_eq!(car.current_floor(), 2);
        assert!(!car.stops().contains(&2));
        assert_eq!(car.state(), CarState::Moving);
    }

    #[test]
    fn reaching_highest_floor_reverses_direction() {
        let mut car = Car::new(1, Direction::Up, CarState::Idle, "car 1");
        car.reposition(2, Direction::Up, CarState::Moving);
        car.add_stop(3);

        tokio_test::block_on(car.move_to_next_floor(3, StepDelays::zero()));

        assert_eq!(car.current_floor(), 3);
        assert_eq!(car.direction(), Direction::Down);
        assert_eq!(car.state(), CarState::Idle);
    }

    #[test]
    fn target_is_always_lowest_queued_floor() {
        // Car at floor 5 with stops both below and above heads down first.
        let mut car = Car::new(1, Direction::Up, CarState::Idle, "car 1");
        car.reposition(5, Direction::Up, CarState::Idle);
        car.add_stop(8);
        car.add_stop(3);

        tokio_test::block_on(car.move_to_next_floor(10, StepDelays::zero()));

        assert_eq!(car.current_floor(), 4);
        assert_eq!(car.direction(), Direction::Down);
    }

    #[test]
    fn building_creates_labeled_cars_at_ground_floor() {
        let building = Building::new(10, 4);

        assert_eq!(building.total_floors(), 10);
        assert_eq!(building.cars().len(), 4);
        for (i, car) in building.cars().iter().enumerate() {
            assert_eq!(car.label(), format!("car {}", i + 1));
            assert_eq!(car.current_floor(), Building::GROUND_FLOOR);
            assert_eq!(car.direction(), Direction::Up);
            assert_eq!(car.state(), CarState::Idle);
            assert!(car.stops().is_empty());
        }
    }

    #[test]
    fn cars_get_distinct_ids() {
        let building = Building::new(10, 2);
        assert_ne!(building.cars()[0].id(), building.cars()[1].id());
    }
}
