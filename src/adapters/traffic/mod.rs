//! Traffic provider adapters.
//!
//! - `GoogleMapsTrafficProvider` - Geocoding, Places and Distance Matrix APIs
//! - `DisabledTrafficProvider` - Always unavailable

mod disabled;
mod google_maps;

pub use disabled::DisabledTrafficProvider;
pub use google_maps::{GoogleMapsConfig, GoogleMapsTrafficProvider};
