pub mod actors;
pub mod boundaries;
pub mod coordinates;
pub mod events;
pub mod outcome;
pub mod platform;
pub mod projections;
pub mod rocket;

pub use actors::*;
pub use boundaries::*;
pub use coordinates::*;
pub use events::*;
pub use outcome::*;
pub use platform::*;
pub use projections::*;
pub use rocket::*;
