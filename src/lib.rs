//! Geourl — extract a geographic coordinate from free-form text and
//! re-render it as equivalent map-service URLs.
//!
//! Accepts compass notation (`30°34′15″N 104°3′38″E`), decimal degree
//! pairs (`49.440603,11.004759`), and map-service URLs
//! (`https://www.google.com/maps/@45.876349,9.655686,10z`). When an
//! input is ambiguous or carries numeric distractors (zoom levels, place
//! IDs), confidence scoring picks the single most plausible coordinate.
//!
//! ```
//! let coordinate = geourl::find("37° 37′ 8″ N, 122° 22′ 30″ W").unwrap();
//! assert_eq!(coordinate.latitude(), "37.6188889");
//! assert_eq!(coordinate.longitude(), "-122.375000");
//! ```

pub mod cli;
pub mod decimal;
pub mod extract;
pub mod urls;

pub use extract::coordinate::Coordinate;
pub use extract::{find, find_all};
