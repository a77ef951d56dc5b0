use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Result of a landing check. Rejections are ordinary values, not errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LandingOutcome {
    OkForLanding,
    OutOfPlatform,
    Clash,
}

impl LandingOutcome {
    /// Wire token for the outcome.
    pub const fn token(self) -> &'static str {
        match self {
            LandingOutcome::OkForLanding => "OKFORLANDING",
            LandingOutcome::OutOfPlatform => "OUTOFPLATFORM",
            LandingOutcome::Clash => "CLASH",
        }
    }

    pub const fn is_ok(self) -> bool {
        matches!(self, LandingOutcome::OkForLanding)
    }
}

impl fmt::Display for LandingOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            LandingOutcome::OkForLanding => "ok for landing",
            LandingOutcome::OutOfPlatform => "out of platform",
            LandingOutcome::Clash => "clash",
        };
        f.write_str(text)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown landing outcome: {0}")]
pub struct UnknownOutcome(pub String);

impl FromStr for LandingOutcome {
    type Err = UnknownOutcome;

    /// Case-insensitive; spaces and underscores are ignored.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '_')
            .map(|c| c.to_ascii_uppercase())
            .collect();

        [
            LandingOutcome::OkForLanding,
            LandingOutcome::OutOfPlatform,
            LandingOutcome::Clash,
        ]
        .into_iter()
        .find(|o| o.token() == normalized)
        .ok_or_else(|| UnknownOutcome(s.to_string()))
    }
}
