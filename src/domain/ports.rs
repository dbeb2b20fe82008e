use crate::domain::model::Direction;
use crate::utils::error::Result;
use async_trait::async_trait;

/// Dispatch operations exposed to the driving collaborator (CLI loop, test
/// harness, any front end).
///
/// Callers must not invoke the `&mut self` operations concurrently on the
/// same instance; one logical driver issues request / move / status in
/// sequence.
#[async_trait]
pub trait ElevatorService: Send + Sync {
    /// Call an elevator to `floor` with the requested travel direction.
    async fn call_elevator(&mut self, floor: u32, direction: Direction) -> Result<()>;

    /// Advance every car by one step. Returns once all cars have completed
    /// their step.
    async fn move_elevators(&mut self) -> Result<()>;

    /// Multi-line status report, one line per car in ordinal order.
    async fn status(&self) -> String;
}

/// Leveled logging capability. The core never depends on logging succeeding,
/// so the operations are infallible from the caller's view.
#[async_trait]
pub trait Logger: Send + Sync {
    async fn info(&self, message: &str);
    async fn error(&self, message: &str);
    async fn debug(&self, message: &str);
}
