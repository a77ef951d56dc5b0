use super::boundaries::Boundaries;
use super::coordinates::Coordinates;
use super::rocket::RocketId;
use crate::common::DomainEvent;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum LandingEvent {
    PlatformCreated {
        platform_id: String,
        platform_bounds: Boundaries,
        landing_area_bounds: Boundaries,
        timestamp: DateTime<Utc>,
    },
    /// A rocket committed to `position`, giving up `previous_position` if it held one.
    RocketLanded {
        platform_id: String,
        rocket_id: RocketId,
        position: Coordinates,
        previous_position: Option<Coordinates>,
        timestamp: DateTime<Utc>,
    },
}

impl DomainEvent for LandingEvent {
    fn event_type(&self) -> &'static str {
        match self {
            LandingEvent::PlatformCreated { .. } => "PlatformCreated",
            LandingEvent::RocketLanded { .. } => "RocketLanded",
        }
    }

    fn aggregate_id(&self) -> &str {
        match self {
            LandingEvent::PlatformCreated { platform_id, .. } => platform_id,
            LandingEvent::RocketLanded { platform_id, .. } => platform_id,
        }
    }

    fn event_version(&self) -> u64 {
        1
    }

    fn occurred_at(&self) -> DateTime<Utc> {
        match self {
            LandingEvent::PlatformCreated { timestamp, .. } => *timestamp,
            LandingEvent::RocketLanded { timestamp, .. } => *timestamp,
        }
    }
}
