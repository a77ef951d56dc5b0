pub mod landing;
pub mod logger;

pub use landing::*;
pub use logger::*;
