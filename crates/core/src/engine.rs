//! The core `Engine` trait that every animation engine implements.
//!
//! The trait is object-safe so the frame-production driver can hold any
//! engine as `dyn Engine`.

use crate::frame::Frame;
use serde_json::Value;

/// A stateful animation engine that yields one RGB [`Frame`] per call.
///
/// Unlike a pure image generator, an engine carries simulation state from
/// one call to the next, so callers must drive it with non-decreasing `t`
/// values, one frame at a time.
pub trait Engine {
    /// Advance the simulation to time `t` (seconds) and render a frame.
    ///
    /// Construction has already validated all configuration, so producing a
    /// frame never fails.
    fn produce_frame(&mut self, t: f64) -> Frame;

    /// Frame width in pixels.
    fn width(&self) -> usize;

    /// Frame height in pixels.
    fn height(&self) -> usize;

    /// Current parameter values as a JSON object.
    fn params(&self) -> Value;

    /// Schema describing all available parameters, their types, ranges, and defaults.
    fn param_schema(&self) -> Value;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::frame::Rgb;
    use serde_json::json;

    /// Paints one pixel per call, moving right, to exercise the trait surface.
    struct MockEngine {
        calls: usize,
        last_t: f64,
    }

    impl MockEngine {
        fn new() -> Self {
            Self {
                calls: 0,
                last_t: 0.0,
            }
        }
    }

    impl Engine for MockEngine {
        fn produce_frame(&mut self, t: f64) -> Frame {
            let mut frame = Frame::new(4, 4).unwrap();
            frame.set_pixel(self.calls % 4, 0, Rgb::new(255, 255, 255));
            self.calls += 1;
            self.last_t = t;
            frame
        }

        fn width(&self) -> usize {
            4
        }

        fn height(&self) -> usize {
            4
        }

        fn params(&self) -> Value {
            json!({"calls": self.calls})
        }

        fn param_schema(&self) -> Value {
            json!({
                "calls": {
                    "type": "integer",
                    "default": 0,
                    "description": "Number of frames produced"
                }
            })
        }
    }

    #[test]
    fn engine_trait_is_object_safe() {
        let engine: Box<dyn Engine> = Box::new(MockEngine::new());
        assert_eq!(engine.width(), 4);
        assert_eq!(engine.height(), 4);
    }

    #[test]
    fn produce_frame_advances_state() {
        let mut engine = MockEngine::new();
        engine.produce_frame(0.0);
        let frame = engine.produce_frame(0.5);
        assert_eq!(engine.calls, 2);
        assert!((engine.last_t - 0.5).abs() < f64::EPSILON);
        assert_eq!(frame.pixel(1, 0), Some(Rgb::new(255, 255, 255)));
    }

    #[test]
    fn dyn_engine_mut_reference_works() {
        let mut engine = MockEngine::new();
        let engine_ref: &mut dyn Engine = &mut engine;
        engine_ref.produce_frame(0.0);
        assert_eq!(engine_ref.params()["calls"], 1);
        assert_eq!(engine_ref.param_schema()["calls"]["type"], "integer");
    }
}
