//! Once-per-display-refresh loop.
//!
//! There is no fixed timestep: every call runs exactly one session frame and
//! hands it to the sink. Door and statue tweens read the frame time, while the
//! sky advances by a fixed step per frame.

use std::time::{Duration, Instant};

use atrium_player::CameraMover;
use tracing::warn;

use crate::render::FrameSink;
use crate::session::Session;

/// Gaps between frames longer than this are reported.
pub const MAX_FRAME_GAP: Duration = Duration::from_millis(250);

pub struct FrameLoop {
    started: Instant,
    last_frame: Option<Duration>,
    frame_count: u64,
}

impl FrameLoop {
    /// Creates a new `FrameLoop` starting from the current instant.
    pub fn new() -> Self {
        Self {
            started: Instant::now(),
            last_frame: None,
            frame_count: 0,
        }
    }

    /// Monotonic time since the loop was created.
    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// Runs one frame stamped with the wall clock. Returns the stamp used.
    pub fn tick<M: CameraMover>(
        &mut self,
        session: &mut Session<M>,
        sink: &mut impl FrameSink,
    ) -> Duration {
        let now = self.elapsed();
        self.tick_at(now, session, sink);
        now
    }

    /// Runs one frame at an explicit time since loop start.
    pub fn tick_at<M: CameraMover>(
        &mut self,
        now: Duration,
        session: &mut Session<M>,
        sink: &mut impl FrameSink,
    ) {
        if let Some(last) = self.last_frame {
            let gap = now.saturating_sub(last);
            if gap > MAX_FRAME_GAP {
                warn!(
                    "Frame gap {:.1}ms exceeds {:.1}ms",
                    gap.as_secs_f64() * 1000.0,
                    MAX_FRAME_GAP.as_secs_f64() * 1000.0
                );
            }
        }
        self.last_frame = Some(now);

        let view = session.frame(now);
        sink.submit(&view);
        self.frame_count += 1;
    }

    /// Returns the total number of frames run.
    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}

impl Default for FrameLoop {
    fn default() -> Self {
        Self::new()
    }
}
