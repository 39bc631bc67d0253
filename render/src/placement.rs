//! Where the QR code sits on the card.

use crate::shape::RoundedRect;

pub const MIN_SCALE: f32 = 0.5;
pub const MAX_SCALE: f32 = 2.5;
/// Unscaled QR side as a fraction of the canvas' short side.
pub const BASE_SIZE_RATIO: f32 = 0.28;
/// Gap between the QR image and the edge of its white card.
pub const CARD_INSET: f32 = 10.0;

/// QR centre as a fraction of the canvas plus a relative scale.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub x: f32,
    pub y: f32,
    pub scale: f32,
}

impl Default for Placement {
    fn default() -> Self {
        Self {
            x: 0.75,
            y: 0.70,
            scale: 1.0,
        }
    }
}

/// Pixel geometry of the QR code and its card for one canvas size.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct QrRect {
    pub left: i64,
    pub top: i64,
    /// Side length; may be fractional.
    pub size: f32,
}

impl QrRect {
    /// The translucent white card drawn behind the code.
    pub fn card(&self) -> RoundedRect {
        let radius = (self.size * 0.08).floor();
        RoundedRect {
            x: self.left as f32 - CARD_INSET,
            y: self.top as f32 - CARD_INSET,
            width: self.size + 2.0 * CARD_INSET,
            height: self.size + 2.0 * CARD_INSET,
            radius: radius + 8.0,
        }
    }

    /// Side length in whole pixels for resampling.
    pub fn pixel_size(&self) -> u32 {
        self.size.round().max(1.0) as u32
    }

    pub fn contains(&self, px: f32, py: f32) -> bool {
        let (left, top) = (self.left as f32, self.top as f32);
        px >= left && py >= top && px < left + self.size && py < top + self.size
    }
}

impl Placement {
    /// A placement with every field clamped to its valid range.
    pub fn new(x: f32, y: f32, scale: f32) -> Self {
        Self { x, y, scale }.clamped()
    }

    pub fn clamped(self) -> Self {
        Self {
            x: clamp01(self.x),
            y: clamp01(self.y),
            scale: clamp_scale(self.scale),
        }
    }

    /// Move by a canvas-pixel delta.
    pub fn moved_by(self, dx: f32, dy: f32, canvas: CanvasSize) -> Self {
        Self {
            x: clamp01(self.x + dx / canvas.width),
            y: clamp01(self.y + dy / canvas.height),
            ..self
        }
    }

    pub fn with_scale(self, scale: f32) -> Self {
        Self {
            scale: clamp_scale(scale),
            ..self
        }
    }

    pub fn qr_rect(&self, width: u32, height: u32) -> QrRect {
        let base = width.min(height) as f32 * BASE_SIZE_RATIO;
        let size = base * self.scale;
        let cx = (self.x * width as f32).floor();
        let cy = (self.y * height as f32).floor();
        QrRect {
            left: (cx - size / 2.0).floor() as i64,
            top: (cy - size / 2.0).floor() as i64,
            size,
        }
    }
}

/// Canvas dimensions in pixels, as floats for gesture math.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CanvasSize {
    pub width: f32,
    pub height: f32,
}

impl CanvasSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width: width.max(1) as f32,
            height: height.max(1) as f32,
        }
    }
}

pub fn clamp01(v: f32) -> f32 {
    if v.is_nan() { 0.0 } else { v.clamp(0.0, 1.0) }
}

pub fn clamp_scale(v: f32) -> f32 {
    if v.is_nan() { 1.0 } else { v.clamp(MIN_SCALE, MAX_SCALE) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_geometry() {
        let rect = Placement::default().qr_rect(1000, 2000);
        // base = 280, centre = (750, 1400)
        assert_eq!(rect.size, 280.0);
        assert_eq!(rect.left, 610);
        assert_eq!(rect.top, 1260);
    }

    #[test]
    fn test_card_geometry() {
        let card = Placement::default().qr_rect(1000, 2000).card();
        assert_eq!(card.x, 600.0);
        assert_eq!(card.y, 1250.0);
        assert_eq!(card.width, 300.0);
        // floor(280 * 0.08) + 8
        assert_eq!(card.radius, 30.0);
    }

    #[test]
    fn test_new_clamps() {
        let p = Placement::new(-0.5, 1.5, 9.0);
        assert_eq!(p, Placement { x: 0.0, y: 1.0, scale: MAX_SCALE });
        assert_eq!(Placement::new(0.5, 0.5, 0.1).scale, MIN_SCALE);
    }

    #[test]
    fn test_nan_is_sanitized() {
        let p = Placement::new(f32::NAN, 0.5, f32::NAN);
        assert_eq!(p.x, 0.0);
        assert_eq!(p.scale, 1.0);
    }

    #[test]
    fn test_moved_by() {
        let canvas = CanvasSize::new(1000, 500);
        let p = Placement::new(0.5, 0.5, 1.0).moved_by(100.0, -50.0, canvas);
        assert!((p.x - 0.6).abs() < 1e-6);
        assert!((p.y - 0.4).abs() < 1e-6);
    }

    #[test]
    fn test_contains() {
        let rect = QrRect {
            left: 10,
            top: 10,
            size: 20.0,
        };
        assert!(rect.contains(10.0, 29.9));
        assert!(!rect.contains(30.0, 15.0));
    }
}
