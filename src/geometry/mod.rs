//! Bar/space widths of a code string.

pub mod config;
pub mod layout;
pub mod segment;

pub use config::{
    clamp_ratio, default_ratio, set_default_ratio, GeometryConfig, Insets, Target,
    DEFAULT_NARROW_WIDTH, DEFAULT_RATIO, MAX_RATIO, MIN_RATIO,
};
pub use layout::{compute_geometry, Layout};
pub use segment::{Segment, Segments};
