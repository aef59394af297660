//! Frame-production driver: walks a [`FrameSchedule`] and writes each
//! produced frame as a numbered PNG.
//!
//! Muxing the sequence into a video container is left to external tools
//! (e.g. `ffmpeg -framerate 30 -i frame_%05d.png`).

use std::fs;
use std::path::Path;

use flowart_core::error::EngineError;
use flowart_core::schedule::FrameSchedule;
use flowart_core::Engine;
use log::{debug, info};

use crate::snapshot::{frame_file_name, write_png};

/// Log a progress line every this many frames.
const PROGRESS_INTERVAL: usize = 30;

/// Renders every scheduled frame into `dir`, creating it if needed.
///
/// Returns the number of frames written.
pub fn render_sequence(
    engine: &mut dyn Engine,
    schedule: &FrameSchedule,
    dir: &Path,
) -> Result<usize, EngineError> {
    fs::create_dir_all(dir)?;
    let total = schedule.frame_count();
    info!(
        "rendering {total} frames ({}x{} @ {} fps) into {}",
        engine.width(),
        engine.height(),
        schedule.fps(),
        dir.display()
    );

    for (index, t) in schedule.times().enumerate() {
        let frame = engine.produce_frame(t);
        write_png(&frame, &dir.join(frame_file_name(index)))?;
        if (index + 1) % PROGRESS_INTERVAL == 0 {
            debug!("wrote {}/{total} frames (t={t:.3}s)", index + 1);
        }
    }

    info!("wrote {total} frames to {}", dir.display());
    Ok(total)
}

/// Drives the engine through every scheduled frame up to and including
/// time `at`, then writes only the last one to `path`.
///
/// Trail state depends on every earlier frame, so the earlier frames are
/// produced and discarded rather than skipped. A time past the end of the
/// schedule renders the final frame. Returns the index of the written frame.
pub fn render_still(
    engine: &mut dyn Engine,
    schedule: &FrameSchedule,
    at: f64,
    path: &Path,
) -> Result<usize, EngineError> {
    let last = schedule
        .times()
        .take_while(|&t| t <= at)
        .count()
        .saturating_sub(1);

    let mut frame = engine.produce_frame(schedule.time_at(0));
    for index in 1..=last {
        frame = engine.produce_frame(schedule.time_at(index));
    }
    write_png(&frame, path)?;
    debug!("wrote frame {last} (t={:.3}s) to {}", schedule.time_at(last), path.display());
    Ok(last)
}
