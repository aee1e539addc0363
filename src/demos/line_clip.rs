//! Cohen-Sutherland line clipping demo
//!
//! A batch of random segments is drawn in red, the clip window as a white
//! outline, and every surviving clipped sub-segment in green on top.

use super::{to_screen, Demo};
use crate::clip::{clip_segment, ClipRect, Point, Segment};
use crate::config::Config;
use crate::display::PixelBuffer;
use crate::util::Rng;

const WINDOW_COLOR: (u8, u8, u8) = (255, 255, 255);
const ORIGINAL_COLOR: (u8, u8, u8) = (255, 0, 0);
const CLIPPED_COLOR: (u8, u8, u8) = (0, 255, 0);

/// The line clipping visualization
pub struct LineClip {
    segments: Vec<Segment>,
    window: ClipRect,
    segment_count: usize,
    rng: Rng,
}

impl LineClip {
    pub fn new(config: &Config) -> Self {
        let mut demo = Self {
            segments: Vec::with_capacity(config.segment_count),
            window: config.clip_window,
            segment_count: config.segment_count,
            rng: Rng::new(config.seed),
        };
        demo.regenerate();
        demo
    }

    /// Throw away the current batch and roll fresh segments
    pub fn regenerate(&mut self) {
        self.segments.clear();
        for _ in 0..self.segment_count {
            let x1 = self.rng.range_f32(-1.0, 1.0);
            let y1 = self.rng.range_f32(-1.0, 1.0);
            let x2 = self.rng.range_f32(-1.0, 1.0);
            let y2 = self.rng.range_f32(-1.0, 1.0);
            self.segments.push(Segment::new(x1, y1, x2, y2));
        }
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }
}

impl Demo for LineClip {
    fn update(&mut self, _dt: f32) {
        // Static scene; R regenerates via reset()
    }

    fn render(&self, buffer: &mut PixelBuffer) {
        buffer.clear(0, 0, 0);
        let w = buffer.width();
        let h = buffer.height();

        // Clip window outline
        let (wx1, wy1) = to_screen(Point::new(self.window.xmin, self.window.ymax), w, h);
        let (wx2, wy2) = to_screen(Point::new(self.window.xmax, self.window.ymin), w, h);
        let (r, g, b) = WINDOW_COLOR;
        buffer.draw_rect(wx1, wy1, wx2, wy2, r, g, b);

        // Original segments
        let (r, g, b) = ORIGINAL_COLOR;
        for seg in &self.segments {
            let (x1, y1) = to_screen(seg.p1, w, h);
            let (x2, y2) = to_screen(seg.p2, w, h);
            buffer.line(x1, y1, x2, y2, r, g, b);
        }

        // Clipped sub-segments on top. Clipping works on a stack-local copy;
        // the stored originals are never mutated.
        let (r, g, b) = CLIPPED_COLOR;
        for seg in &self.segments {
            let mut clipped = *seg;
            if clip_segment(&mut clipped, &self.window) {
                let (x1, y1) = to_screen(clipped.p1, w, h);
                let (x2, y2) = to_screen(clipped.p2, w, h);
                buffer.line(x1, y1, x2, y2, r, g, b);
            }
        }
    }

    fn reset(&mut self) {
        self.regenerate();
    }

    fn name(&self) -> &str {
        "Line Clipping"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clip::region_code;

    fn demo() -> LineClip {
        LineClip::new(&Config::default())
    }

    #[test]
    fn test_populates_configured_segment_count() {
        let config = Config {
            segment_count: 25,
            ..Config::default()
        };
        let demo = LineClip::new(&config);
        assert_eq!(demo.segments().len(), 25);
    }

    #[test]
    fn test_segments_within_normalized_range() {
        let demo = demo();
        for seg in demo.segments() {
            for p in [seg.p1, seg.p2] {
                assert!(p.x >= -1.0 && p.x < 1.0);
                assert!(p.y >= -1.0 && p.y < 1.0);
            }
        }
    }

    #[test]
    fn test_reset_rolls_new_segments() {
        let mut demo = demo();
        let before = demo.segments().to_vec();
        demo.reset();
        assert_eq!(demo.segments().len(), before.len());
        assert_ne!(demo.segments(), &before[..]);
    }

    #[test]
    fn test_same_seed_same_batch() {
        let a = demo();
        let b = demo();
        assert_eq!(a.segments(), b.segments());
    }

    #[test]
    fn test_render_does_not_mutate_segments() {
        let demo = demo();
        let before = demo.segments().to_vec();
        let mut buffer = PixelBuffer::with_size(64, 48);
        demo.render(&mut buffer);
        assert_eq!(demo.segments(), &before[..]);
    }

    #[test]
    fn test_accepted_clips_lie_within_window() {
        let demo = demo();
        let rect = ClipRect::new(-0.5, -0.5, 0.5, 0.5);
        for seg in demo.segments() {
            let mut clipped = *seg;
            if clip_segment(&mut clipped, &rect) {
                assert!(region_code(clipped.p1, &rect).is_inside());
                assert!(region_code(clipped.p2, &rect).is_inside());
            }
        }
    }
}
