// Landing Service - application facade over the command actor
use crate::common::{ApplicationError, ApplicationResult, EventStore};
use crate::domains::landing::{LandingCommandActor, LandingEvent, LandingOutcome, Platform, Rocket};
use crate::domains::logger::DynLogger;

pub struct LandingService {
    command_actor: LandingCommandActor,
    logger: DynLogger,
}

impl LandingService {
    pub fn new(command_actor: LandingCommandActor, logger: DynLogger) -> Self {
        Self {
            command_actor,
            logger,
        }
    }

    pub async fn check_for_landing(
        &self,
        rocket: &Rocket,
        x: i32,
        y: i32,
    ) -> ApplicationResult<LandingOutcome> {
        let outcome = self
            .command_actor
            .check_for_landing(rocket.id, x, y)
            .await
            .map_err(ApplicationError::EventStore)?;

        let msg = format!("rocket {} at {},{}: {}", rocket.id, x, y, outcome);
        if outcome.is_ok() {
            self.logger.info(&msg);
        } else {
            self.logger.warn(&msg);
        }
        Ok(outcome)
    }

    pub fn command_actor(&self) -> &LandingCommandActor {
        &self.command_actor
    }

    /// Rebuild a platform from the events stored for `platform_id`.
    pub async fn replay_platform(
        event_store: &(dyn EventStore + Send + Sync),
        platform_id: &str,
    ) -> ApplicationResult<Platform> {
        let envelopes = event_store
            .load_events(platform_id, 0)
            .await
            .map_err(ApplicationError::EventStore)?;

        let events = envelopes
            .iter()
            .map(|envelope| envelope.decode::<LandingEvent>())
            .collect::<Result<Vec<_>, _>>()
            .map_err(crate::common::DomainError::from)?;

        Ok(Platform::load_from_history(events)?)
    }
}
