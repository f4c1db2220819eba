//! Atrium application: the session that owns the gallery, the frame loop
//! that drives it, and the scripted tour the binary runs.

pub mod error;
pub mod frame_loop;
pub mod platform;
pub mod render;
pub mod session;
pub mod tour;

pub use error::AppError;
pub use frame_loop::FrameLoop;
pub use platform::{PlatformDirs, PlatformError};
pub use render::{FrameSink, FrameView, TracingSink};
pub use session::Session;
pub use tour::{Tour, TourReport, TourStep};
