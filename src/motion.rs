//! CSS transforms for pointer-driven hover effects.

/// Bounding box as reported by `getBoundingClientRect`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn center(&self) -> (f64, f64) {
        (self.left + self.width / 2.0, self.top + self.height / 2.0)
    }
}

/// Pulls the element toward the pointer: offset from centre over `strength`,
/// then a fixed `scale`.
pub fn magnetic_transform(rect: Rect, pointer: (f64, f64), strength: f64, scale: f64) -> String {
    let (cx, cy) = rect.center();
    let dx = (pointer.0 - cx) / strength;
    let dy = (pointer.1 - cy) / strength;
    format!("translate({dx}px, {dy}px) scale({scale})")
}

/// 3D tilt for gallery cards. The pointer is normalised to `[-0.5, 0.5]` on
/// both axes; a degenerate rect yields no tilt.
pub fn tilt_transform(rect: Rect, pointer: (f64, f64), degrees: f64, lift_px: f64) -> String {
    let x = normalise(pointer.0 - rect.left, rect.width);
    let y = normalise(pointer.1 - rect.top, rect.height);
    let rx = -y * degrees;
    let ry = x * degrees;
    format!("rotateX({rx}deg) rotateY({ry}deg) translateY(-{lift_px}px)")
}

fn normalise(offset: f64, extent: f64) -> f64 {
    if extent > 0.0 {
        offset / extent - 0.5
    } else {
        0.0
    }
}
