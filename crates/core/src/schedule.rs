//! Mapping from output frame index to animation time.
//!
//! The engine itself never sees fps or duration; the driver walks a
//! [`FrameSchedule`] and hands each `t` to `Engine::produce_frame`.

use crate::error::EngineError;

/// Uniform sampling of `[0, duration)` at `1 / fps` spacing.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameSchedule {
    fps: f64,
    duration: f64,
}

impl FrameSchedule {
    /// Returns `EngineError::InvalidTiming` unless both values are finite and positive.
    pub fn new(fps: f64, duration: f64) -> Result<Self, EngineError> {
        let valid = |v: f64| v.is_finite() && v > 0.0;
        if !valid(fps) || !valid(duration) {
            return Err(EngineError::InvalidTiming { fps, duration });
        }
        Ok(Self { fps, duration })
    }

    pub fn fps(&self) -> f64 {
        self.fps
    }

    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Number of frames in the clip: `fps * duration` truncated, never less
    /// than one. A trailing partial frame interval is dropped.
    pub fn frame_count(&self) -> usize {
        ((self.fps * self.duration) as usize).max(1)
    }

    /// Time in seconds of frame `index`.
    pub fn time_at(&self, index: usize) -> f64 {
        index as f64 / self.fps
    }

    /// All frame times in increasing order.
    pub fn times(&self) -> impl ExactSizeIterator<Item = f64> + '_ {
        (0..self.frame_count()).map(move |i| self.time_at(i))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ten_seconds_at_thirty_fps_is_three_hundred_frames() {
        let s = FrameSchedule::new(30.0, 10.0).unwrap();
        assert_eq!(s.frame_count(), 300);
        assert_eq!(s.times().len(), 300);
    }

    #[test]
    fn times_start_at_zero_and_are_evenly_spaced() {
        let s = FrameSchedule::new(4.0, 1.0).unwrap();
        let times: Vec<f64> = s.times().collect();
        assert_eq!(times, vec![0.0, 0.25, 0.5, 0.75]);
    }

    #[test]
    fn times_are_strictly_increasing() {
        let s = FrameSchedule::new(60.0, 3.3).unwrap();
        let times: Vec<f64> = s.times().collect();
        assert!(times.windows(2).all(|w| w[0] < w[1]));
        assert!(times.last().is_some_and(|&t| t < 3.3 + 1.0 / 60.0));
    }

    #[test]
    fn very_short_clip_still_has_one_frame() {
        let s = FrameSchedule::new(30.0, 0.001).unwrap();
        assert_eq!(s.frame_count(), 1);
    }

    #[test]
    fn partial_trailing_interval_is_dropped() {
        // 30 fps for 50 ms spans 1.5 frame intervals.
        let s = FrameSchedule::new(30.0, 0.05).unwrap();
        assert_eq!(s.frame_count(), 1);
        let s = FrameSchedule::new(10.0, 0.39).unwrap();
        assert_eq!(s.frame_count(), 3);
    }

    #[test]
    fn non_positive_or_non_finite_timing_is_rejected() {
        for (fps, duration) in [(0.0, 1.0), (30.0, 0.0), (-1.0, 1.0), (f64::NAN, 1.0), (30.0, f64::INFINITY)] {
            assert!(
                matches!(FrameSchedule::new(fps, duration), Err(EngineError::InvalidTiming { .. })),
                "({fps}, {duration}) should be rejected"
            );
        }
    }
}
