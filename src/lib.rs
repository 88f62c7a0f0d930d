pub mod config;
pub mod detection;
pub mod error;
pub mod models;
pub mod render;

pub use config::{DetectionConfig, MARGIN_PENALTY};
pub use detection::preprocessing::ResizeSpec;
pub use detection::{DetectionStages, FrameDetector};
pub use error::DetectError;
pub use models::{BoundingBox, Contour, Point, Polygon};
