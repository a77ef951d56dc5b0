use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Opaque identity of a rocket. Stable for the rocket's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RocketId(Uuid);

impl RocketId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    pub fn as_uuid(&self) -> &Uuid {
        &self.0
    }
}

impl Default for RocketId {
    fn default() -> Self {
        Self::new()
    }
}

impl From<Uuid> for RocketId {
    fn from(id: Uuid) -> Self {
        Self(id)
    }
}

impl fmt::Display for RocketId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rocket {
    pub id: RocketId,
}

impl Rocket {
    pub fn new() -> Self {
        Self { id: RocketId::new() }
    }
}

impl Default for Rocket {
    fn default() -> Self {
        Self::new()
    }
}
