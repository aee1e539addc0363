//! Bouncing ball demo
//!
//! A red filled circle moving with constant velocity in normalized space,
//! reflecting off the window edges.

use super::{to_screen, Demo};
use crate::clip::Point;
use crate::config::Config;
use crate::display::PixelBuffer;

const BALL_COLOR: (u8, u8, u8) = (255, 0, 0);

/// The bouncing ball animation
pub struct BouncingBall {
    x: f32,
    y: f32,
    vx: f32,
    vy: f32,
    radius: f32,
    start_vx: f32,
    start_vy: f32,
}

impl BouncingBall {
    pub fn new(config: &Config) -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            vx: config.ball_speed_x,
            vy: config.ball_speed_y,
            radius: config.ball_radius,
            start_vx: config.ball_speed_x,
            start_vy: config.ball_speed_y,
        }
    }

    pub fn position(&self) -> (f32, f32) {
        (self.x, self.y)
    }

    pub fn velocity(&self) -> (f32, f32) {
        (self.vx, self.vy)
    }
}

impl Demo for BouncingBall {
    fn update(&mut self, dt: f32) {
        let new_x = self.x + self.vx * dt;
        let new_y = self.y + self.vy * dt;

        // Clamp to the wall and flip the sign directionally so the ball
        // can never stick outside the boundary
        if new_x + self.radius >= 1.0 {
            self.x = 1.0 - self.radius;
            self.vx = -self.vx.abs();
        } else if new_x - self.radius <= -1.0 {
            self.x = -1.0 + self.radius;
            self.vx = self.vx.abs();
        } else {
            self.x = new_x;
        }

        if new_y + self.radius >= 1.0 {
            self.y = 1.0 - self.radius;
            self.vy = -self.vy.abs();
        } else if new_y - self.radius <= -1.0 {
            self.y = -1.0 + self.radius;
            self.vy = self.vy.abs();
        } else {
            self.y = new_y;
        }
    }

    fn render(&self, buffer: &mut PixelBuffer) {
        buffer.clear(0, 0, 0);
        let w = buffer.width();
        let h = buffer.height();

        let (cx, cy) = to_screen(Point::new(self.x, self.y), w, h);
        // Normalized radius maps through half the smaller dimension so the
        // ball stays circular at any aspect ratio
        let radius_px = (self.radius * w.min(h) as f32 * 0.5).round() as i32;
        let (r, g, b) = BALL_COLOR;
        buffer.fill_circle(cx, cy, radius_px, r, g, b);
    }

    fn reset(&mut self) {
        self.x = 0.0;
        self.y = 0.0;
        self.vx = self.start_vx;
        self.vy = self.start_vy;
    }

    fn name(&self) -> &str {
        "Bouncing Ball"
    }
}
