use crate::domain::model::Direction;
use crate::domain::ports::{ElevatorService, Logger};
use crate::utils::error::Result;

/// Thin orchestration front over an [`ElevatorService`]: forwards each
/// operation, logs its outcome through the injected [`Logger`] and propagates
/// errors unchanged to the caller.
pub struct ElevatorController<S: ElevatorService, L: Logger> {
    service: S,
    logger: L,
}

impl<S: ElevatorService, L: Logger> ElevatorController<S, L> {
    pub fn new(service: S, logger: L) -> Self {
        Self { service, logger }
    }

    pub fn service(&self) -> &S {
        &self.service
    }

    pub fn service_mut(&mut self) -> &mut S {
        &mut self.service
    }

    pub async fn request_elevator(&mut self, floor: u32, direction: Direction) -> Result<()> {
        match self.service.call_elevator(floor, direction).await {
            Ok(()) => {
                self.logger
                    .info(&format!("{} request on floor {} received", direction, floor))
                    .await;
                Ok(())
            }
            Err(e) => {
                self.logger
                    .error(&format!("Error in requesting elevator: {}", e))
                    .await;
                Err(e)
            }
        }
    }

    pub async fn move_elevators(&mut self) -> Result<()> {
        if let Err(e) = self.service.move_elevators().await {
            self.logger
                .error(&format!("Error while elevators are moving: {}", e))
                .await;
            return Err(e);
        }
        Ok(())
    }

    pub async fn display_status(&self) {
        let status = self.service.status().await;
        self.logger.info(&status).await;
    }
}
