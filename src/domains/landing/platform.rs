use super::boundaries::Boundaries;
use super::coordinates::Coordinates;
use super::events::LandingEvent;
use super::outcome::LandingOutcome;
use super::rocket::RocketId;
use crate::common::{AggregateRoot, DomainError, DomainResult};
use crate::config::Config;
use chrono::Utc;
use std::collections::HashMap;
use tracing::{debug, info, warn};
use uuid::Uuid;

pub const DEFAULT_PLATFORM_WIDTH: i32 = 10;
pub const DEFAULT_PLATFORM_LENGTH: i32 = 10;
pub const DEFAULT_LANDING_AREA_WIDTH: i32 = 100;
pub const DEFAULT_LANDING_AREA_LENGTH: i32 = 100;

/// The reservation engine for one landing platform.
///
/// A rocket holding a cell reserves the cell and its eight neighbours (clipped to
/// the platform). `reserved_cells` keeps, per cell, how many held footprints cover
/// it; a cell missing from the map is free. Counts are never stored as zero.
#[derive(Debug, Clone)]
pub struct Platform {
    pub id: String,
    platform_bounds: Boundaries,
    landing_area_bounds: Boundaries,
    held_positions: HashMap<RocketId, Coordinates>,
    reserved_cells: HashMap<Coordinates, u32>,
    pub version: u64,
    uncommitted_events: Vec<LandingEvent>,
}

/// A footprint taken off the reservation map, kept so it can be put back as is.
#[derive(Debug)]
struct ReleasedFootprint {
    position: Coordinates,
    cells: Vec<Coordinates>,
}

impl Platform {
    pub fn new(
        pos_x: i32,
        pos_y: i32,
        width: i32,
        length: i32,
        landing_area_width: i32,
        landing_area_length: i32,
    ) -> DomainResult<Self> {
        check_dimensions("Platform", width.into(), length.into())?;
        check_dimensions(
            "Landing area",
            landing_area_width.into(),
            landing_area_length.into(),
        )?;

        let platform_bounds = Boundaries::new(pos_x, pos_y, width, length);
        let landing_area_bounds = Boundaries::new(0, 0, landing_area_width, landing_area_length);

        let mut platform = Self::validated(
            Uuid::new_v4().to_string(),
            platform_bounds,
            landing_area_bounds,
        )?;

        let event = LandingEvent::PlatformCreated {
            platform_id: platform.id.clone(),
            platform_bounds,
            landing_area_bounds,
            timestamp: Utc::now(),
        };
        platform.record(event);

        info!(
            platform_id = %platform.id,
            platform = %platform_bounds,
            landing_area = %landing_area_bounds,
            "Platform created"
        );
        Ok(platform)
    }

    /// A 10x10 platform at `(pos_x, pos_y)` inside a 100x100 landing area.
    pub fn with_defaults(pos_x: i32, pos_y: i32) -> DomainResult<Self> {
        Self::new(
            pos_x,
            pos_y,
            DEFAULT_PLATFORM_WIDTH,
            DEFAULT_PLATFORM_LENGTH,
            DEFAULT_LANDING_AREA_WIDTH,
            DEFAULT_LANDING_AREA_LENGTH,
        )
    }

    pub fn from_config(config: &Config) -> DomainResult<Self> {
        Self::new(
            config.platform.pos_x,
            config.platform.pos_y,
            config.platform.width,
            config.platform.length,
            config.landing_area.width,
            config.landing_area.length,
        )
    }

    /// Rebuild a platform from its event history. The first event must be
    /// `PlatformCreated`; the result has no uncommitted events.
    pub fn load_from_history<I>(events: I) -> DomainResult<Self>
    where
        I: IntoIterator<Item = LandingEvent>,
    {
        let mut events = events.into_iter();

        let mut platform = match events.next() {
            Some(LandingEvent::PlatformCreated {
                platform_id,
                platform_bounds,
                landing_area_bounds,
                ..
            }) => {
                check_bounds("Platform", &platform_bounds)?;
                check_bounds("Landing area", &landing_area_bounds)?;
                Self::validated(platform_id, platform_bounds, landing_area_bounds)?
            }
            Some(other) => {
                return Err(DomainError::InvalidHistory {
                    reason: format!("expected PlatformCreated first, got {:?}", other),
                })
            }
            None => {
                return Err(DomainError::InvalidHistory {
                    reason: "history is empty".to_string(),
                })
            }
        };
        platform.version = 1;

        for event in events {
            platform.apply(&event)?;
        }
        Ok(platform)
    }

    fn validated(
        id: String,
        platform_bounds: Boundaries,
        landing_area_bounds: Boundaries,
    ) -> DomainResult<Self> {
        if !landing_area_bounds.encloses(&platform_bounds) {
            return Err(DomainError::OutOfLandingArea {
                platform: platform_bounds,
                landing_area: landing_area_bounds,
            });
        }

        Ok(Self {
            id,
            platform_bounds,
            landing_area_bounds,
            held_positions: HashMap::new(),
            reserved_cells: HashMap::new(),
            version: 0,
            uncommitted_events: Vec::new(),
        })
    }

    pub fn platform_bounds(&self) -> &Boundaries {
        &self.platform_bounds
    }

    pub fn landing_area_bounds(&self) -> &Boundaries {
        &self.landing_area_bounds
    }

    pub fn held_position(&self, rocket_id: &RocketId) -> Option<Coordinates> {
        self.held_positions.get(rocket_id).copied()
    }

    pub fn held_positions(&self) -> &HashMap<RocketId, Coordinates> {
        &self.held_positions
    }

    /// Number of held footprints covering `cell`; zero means free.
    pub fn reservation_count(&self, cell: Coordinates) -> u32 {
        self.reserved_cells.get(&cell).copied().unwrap_or(0)
    }

    pub fn reserved_cells(&self) -> &HashMap<Coordinates, u32> {
        &self.reserved_cells
    }

    /// Decide whether `rocket_id` may land on `(x, y)`.
    ///
    /// On `OkForLanding` the rocket's previous footprint (if any) is replaced by the
    /// new one. On `OutOfPlatform` or `Clash` the platform is left exactly as it was.
    pub fn check_for_landing(&mut self, rocket_id: RocketId, x: i32, y: i32) -> LandingOutcome {
        let position = Coordinates::new(x, y);

        if !self.platform_bounds.contains(position) {
            debug!(%rocket_id, x, y, "Position is out of platform");
            return LandingOutcome::OutOfPlatform;
        }

        if self.held_positions.get(&rocket_id) == Some(&position) {
            debug!(%rocket_id, x, y, "Rocket already holds this position");
            return LandingOutcome::OkForLanding;
        }

        // Own footprint must be gone before the clash test.
        let released = self.release_footprint(&rocket_id);

        if self.reserved_cells.contains_key(&position) {
            if let Some(released) = released {
                self.restore_footprint(rocket_id, released);
            }
            warn!(%rocket_id, x, y, "Position clashes with another rocket");
            return LandingOutcome::Clash;
        }

        self.reserve_footprint(rocket_id, position);

        let event = LandingEvent::RocketLanded {
            platform_id: self.id.clone(),
            rocket_id,
            position,
            previous_position: released.map(|r| r.position),
            timestamp: Utc::now(),
        };
        self.record(event);

        info!(%rocket_id, x, y, "Position reserved for landing");
        LandingOutcome::OkForLanding
    }

    fn footprint_on_platform(&self, position: Coordinates) -> impl Iterator<Item = Coordinates> + '_ {
        position
            .footprint()
            .into_iter()
            .filter(move |cell| self.platform_bounds.contains(*cell))
    }

    fn release_footprint(&mut self, rocket_id: &RocketId) -> Option<ReleasedFootprint> {
        let position = self.held_positions.remove(rocket_id)?;

        let cells: Vec<Coordinates> = self.footprint_on_platform(position).collect();
        let mut released = Vec::with_capacity(cells.len());
        for cell in cells {
            if let Some(count) = self.reserved_cells.get_mut(&cell) {
                *count -= 1;
                if *count == 0 {
                    self.reserved_cells.remove(&cell);
                }
                released.push(cell);
            }
        }

        Some(ReleasedFootprint {
            position,
            cells: released,
        })
    }

    fn restore_footprint(&mut self, rocket_id: RocketId, released: ReleasedFootprint) {
        for cell in released.cells {
            *self.reserved_cells.entry(cell).or_insert(0) += 1;
        }
        self.held_positions.insert(rocket_id, released.position);
    }

    fn reserve_footprint(&mut self, rocket_id: RocketId, position: Coordinates) {
        let cells: Vec<Coordinates> = self.footprint_on_platform(position).collect();
        for cell in cells {
            *self.reserved_cells.entry(cell).or_insert(0) += 1;
        }
        self.held_positions.insert(rocket_id, position);
    }

    fn record(&mut self, event: LandingEvent) {
        self.version += 1;
        self.add_event(event);
    }
}

fn check_dimensions(what: &'static str, width: i64, length: i64) -> DomainResult<()> {
    if width < 1 || length < 1 {
        return Err(DomainError::InvalidDimension {
            what,
            width,
            length,
        });
    }
    Ok(())
}

/// Dimensions recorded in history are the clamped edges, not the requested sizes.
fn check_bounds(what: &'static str, bounds: &Boundaries) -> DomainResult<()> {
    check_dimensions(what, bounds.width(), bounds.length())
}

impl AggregateRoot for Platform {
    type Event = LandingEvent;

    fn aggregate_id(&self) -> &str {
        &self.id
    }

    fn version(&self) -> u64 {
        self.version
    }

    fn apply(&mut self, event: &Self::Event) -> DomainResult<()> {
        match event {
            LandingEvent::PlatformCreated { .. } => {
                return Err(DomainError::InvalidHistory {
                    reason: format!("platform {} was already created", self.id),
                });
            }
            LandingEvent::RocketLanded {
                rocket_id,
                position,
                ..
            } => {
                if !self.platform_bounds.contains(*position) {
                    return Err(DomainError::InvalidHistory {
                        reason: format!("landing at {} is out of platform", position),
                    });
                }
                self.release_footprint(rocket_id);
                self.reserve_footprint(*rocket_id, *position);
            }
        }
        self.version += 1;
        Ok(())
    }

    fn uncommitted_events(&self) -> &[Self::Event] {
        &self.uncommitted_events
    }

    fn mark_events_as_committed(&mut self) {
        self.uncommitted_events.clear();
    }

    fn add_event(&mut self, event: Self::Event) {
        self.uncommitted_events.push(event);
    }
}
