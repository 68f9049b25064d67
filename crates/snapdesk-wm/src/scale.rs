//! Conversion between manager space (scaled) and window space (unscaled).
//!
//! The manager surface is rendered with a scale vector applied; pointer
//! coordinates arrive in that scaled space while window records are kept
//! unscaled. Every comparison that mixes the two goes through here.

use snapdesk_common::{Rect, Size, Vec2};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScaleTransform {
    scale: Vec2,
}

impl ScaleTransform {
    /// Build a transform. Non-positive or non-finite components fall back
    /// to 1.0 so the inverse stays defined.
    pub fn new(scale: Vec2) -> Self {
        let sanitize = |v: f64| if v.is_finite() && v > 0.0 { v } else { 1.0 };
        let sanitized = Vec2::new(sanitize(scale.x), sanitize(scale.y));
        if sanitized != scale {
            tracing::warn!(?scale, "invalid scale vector, using {:?}", sanitized);
        }
        Self { scale: sanitized }
    }

    pub fn identity() -> Self {
        Self {
            scale: Vec2::new(1.0, 1.0),
        }
    }

    pub fn vector(&self) -> Vec2 {
        self.scale
    }

    pub fn scale_x(&self, v: f64) -> f64 {
        v * self.scale.x
    }

    pub fn scale_y(&self, v: f64) -> f64 {
        v * self.scale.y
    }

    pub fn revert_scale_x(&self, v: f64) -> f64 {
        v / self.scale.x
    }

    pub fn revert_scale_y(&self, v: f64) -> f64 {
        v / self.scale.y
    }

    pub fn scale_point(&self, p: Vec2) -> Vec2 {
        Vec2::new(self.scale_x(p.x), self.scale_y(p.y))
    }

    pub fn revert_point(&self, p: Vec2) -> Vec2 {
        Vec2::new(self.revert_scale_x(p.x), self.revert_scale_y(p.y))
    }

    pub fn revert_size(&self, s: Size) -> Size {
        Size::new(self.revert_scale_x(s.width), self.revert_scale_y(s.height))
    }

    pub fn scale_rect(&self, r: Rect) -> Rect {
        Rect {
            x: self.scale_x(r.x),
            y: self.scale_y(r.y),
            width: self.scale_x(r.width),
            height: self.scale_y(r.height),
        }
    }
}

impl Default for ScaleTransform {
    fn default() -> Self {
        Self::identity()
    }
}
