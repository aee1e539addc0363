mod bouncing_ball;
mod line_clip;

pub use bouncing_ball::BouncingBall;
pub use line_clip::LineClip;

use crate::clip::Point;
use crate::display::PixelBuffer;

/// Trait for the runtime-selectable demos
pub trait Demo {
    /// Advance animation state by dt seconds
    fn update(&mut self, dt: f32);

    /// Render the demo to the pixel buffer
    fn render(&self, buffer: &mut PixelBuffer);

    /// Restore the demo to a freshly constructed state
    fn reset(&mut self) {}

    /// Demo name for the window title
    fn name(&self) -> &str;
}

/// Map a point in normalized [-1, 1] space to pixel coordinates.
/// Normalized y points up; pixel y points down.
pub(crate) fn to_screen(p: Point, width: u32, height: u32) -> (i32, i32) {
    let px = (p.x + 1.0) * 0.5 * width.saturating_sub(1) as f32;
    let py = (1.0 - p.y) * 0.5 * height.saturating_sub(1) as f32;
    (px.round() as i32, py.round() as i32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_screen_corners() {
        assert_eq!(to_screen(Point::new(-1.0, 1.0), 800, 600), (0, 0));
        assert_eq!(to_screen(Point::new(1.0, -1.0), 800, 600), (799, 599));
        assert_eq!(to_screen(Point::new(0.0, 0.0), 801, 601), (400, 300));
    }
}
