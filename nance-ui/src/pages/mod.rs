//! Pages
//!
//! Top-level page components for each route.

pub mod landing;
pub mod settings;
pub mod spaces;

pub use landing::Landing;
pub use settings::Settings;
pub use spaces::Spaces;
