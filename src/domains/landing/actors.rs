use super::coordinates::Coordinates;
use super::events::LandingEvent;
use super::outcome::LandingOutcome;
use super::platform::Platform;
use super::projections::PlatformOccupancyProjection;
use super::rocket::RocketId;
use crate::common::{AggregateRoot, DomainEvent, EventEnvelope, EventMetadata, EventStore};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::{mpsc, Mutex, RwLock};

/// Serialises landing checks against one platform and publishes the events they
/// produce.
///
/// The platform sits behind a single mutex, so release, clash test and
/// commit-or-rollback of one check never interleave with another caller.
#[derive(Clone)]
pub struct LandingCommandActor {
    platform: Arc<Mutex<Platform>>,
    event_sender: mpsc::Sender<LandingEvent>,
}

impl LandingCommandActor {
    pub fn new(platform: Platform, event_sender: mpsc::Sender<LandingEvent>) -> Self {
        Self {
            platform: Arc::new(Mutex::new(platform)),
            event_sender,
        }
    }

    pub async fn check_for_landing(
        &self,
        rocket_id: RocketId,
        x: i32,
        y: i32,
    ) -> Result<LandingOutcome, String> {
        let mut platform = self.platform.lock().await;
        let before = platform.clone();
        let outcome = platform.check_for_landing(rocket_id, x, y);
        // Still under the lock so events leave in commit order.
        if let Err(e) = Self::publish(&mut platform, &self.event_sender).await {
            *platform = before;
            return Err(e);
        }
        Ok(outcome)
    }

    /// Send any events recorded but not yet published (e.g. `PlatformCreated`).
    /// On failure the events stay pending.
    pub async fn publish_pending(&self) -> Result<(), String> {
        let mut platform = self.platform.lock().await;
        Self::publish(&mut platform, &self.event_sender).await
    }

    pub async fn platform_id(&self) -> String {
        self.platform.lock().await.id.clone()
    }

    pub async fn held_position(&self, rocket_id: &RocketId) -> Option<Coordinates> {
        self.platform.lock().await.held_position(rocket_id)
    }

    /// A copy of the platform as of now.
    pub async fn snapshot(&self) -> Platform {
        self.platform.lock().await.clone()
    }

    async fn publish(
        platform: &mut Platform,
        event_sender: &mpsc::Sender<LandingEvent>,
    ) -> Result<(), String> {
        let events = platform.uncommitted_events();
        if events.is_empty() {
            return Ok(());
        }

        // All slots or none, so a closed channel never drops half a batch.
        let permits = event_sender
            .reserve_many(events.len())
            .await
            .map_err(|e| format!("Failed to send event: {}", e))?;
        for (permit, event) in permits.zip(events.iter().cloned()) {
            permit.send(event);
        }

        platform.mark_events_as_committed();
        Ok(())
    }
}

/// Stores landing events and keeps the occupancy projection current.
pub struct LandingEventActor {
    event_store: Arc<dyn EventStore + Send + Sync>,
    projection: Arc<RwLock<PlatformOccupancyProjection>>,
    event_receiver: mpsc::Receiver<LandingEvent>,
    stored_versions: HashMap<String, u64>,
}

impl LandingEventActor {
    pub fn new(
        event_store: Arc<dyn EventStore + Send + Sync>,
        event_receiver: mpsc::Receiver<LandingEvent>,
    ) -> Self {
        Self {
            event_store,
            projection: Arc::new(RwLock::new(PlatformOccupancyProjection::new())),
            event_receiver,
            stored_versions: HashMap::new(),
        }
    }

    /// Shared handle on the projection; stays valid after `run` consumes the actor.
    pub fn projection(&self) -> Arc<RwLock<PlatformOccupancyProjection>> {
        self.projection.clone()
    }

    /// Drain events until every sender is dropped.
    pub async fn run(mut self) {
        while let Some(event) = self.event_receiver.recv().await {
            if let Err(e) = self.handle_event(event).await {
                tracing::error!("Failed to handle landing event: {}", e);
            }
        }
    }

    async fn handle_event(&mut self, event: LandingEvent) -> Result<(), String> {
        let metadata = EventMetadata::from_source("LandingEventActor");
        let envelope = EventEnvelope::new(&event, "Platform", metadata)
            .map_err(|e| format!("Failed to create event envelope: {}", e))?;

        let aggregate_id = event.aggregate_id().to_string();
        let version = self.stored_versions.get(&aggregate_id).copied().unwrap_or(0);
        self.event_store
            .append_events(&aggregate_id, version, vec![envelope])
            .await?;
        self.stored_versions.insert(aggregate_id, version + 1);

        self.projection.write().await.apply_event(&event);

        tracing::debug!("Handled landing event: {}", event.event_type());
        Ok(())
    }
}
