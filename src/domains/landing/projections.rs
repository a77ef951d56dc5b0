use super::boundaries::Boundaries;
use super::coordinates::Coordinates;
use super::events::LandingEvent;
use super::rocket::RocketId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlatformOverview {
    pub platform_id: String,
    pub platform_bounds: Boundaries,
    pub rocket_positions: HashMap<RocketId, Coordinates>,
    pub landings: u64,
    pub last_updated: DateTime<Utc>,
}

/// Read model of who holds which cell, per platform.
#[derive(Debug, Default)]
pub struct PlatformOccupancyProjection {
    pub platforms: HashMap<String, PlatformOverview>,
}

impl PlatformOccupancyProjection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn apply_event(&mut self, event: &LandingEvent) {
        match event {
            LandingEvent::PlatformCreated {
                platform_id,
                platform_bounds,
                timestamp,
                ..
            } => {
                self.platforms.insert(
                    platform_id.clone(),
                    PlatformOverview {
                        platform_id: platform_id.clone(),
                        platform_bounds: *platform_bounds,
                        rocket_positions: HashMap::new(),
                        landings: 0,
                        last_updated: *timestamp,
                    },
                );
            }
            LandingEvent::RocketLanded {
                platform_id,
                rocket_id,
                position,
                timestamp,
                ..
            } => {
                if let Some(overview) = self.platforms.get_mut(platform_id) {
                    overview.rocket_positions.insert(*rocket_id, *position);
                    overview.landings += 1;
                    overview.last_updated = *timestamp;
                }
            }
        }
    }

    pub fn overview(&self, platform_id: &str) -> Option<&PlatformOverview> {
        self.platforms.get(platform_id)
    }

    pub fn position_of(&self, platform_id: &str, rocket_id: &RocketId) -> Option<Coordinates> {
        self.platforms
            .get(platform_id)?
            .rocket_positions
            .get(rocket_id)
            .copied()
    }
}
