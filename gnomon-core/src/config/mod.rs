//! Configuration types
//!
//! Display, theme, face, language and gesture settings for one clock. The widget
//! runtime reads them from TOML through the `serde` feature.

pub mod face;
pub mod theme;
pub mod types;

pub use face::*;
pub use theme::*;
pub use types::*;
