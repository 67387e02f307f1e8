/// Eases a rendered point toward the last pointer position, one frame at a time.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Follower {
    smoothing: f64,
    pointer: (f64, f64),
    rendered: (f64, f64),
}

impl Follower {
    pub fn new(smoothing: f64) -> Self {
        Self {
            smoothing,
            pointer: (0.0, 0.0),
            rendered: (0.0, 0.0),
        }
    }

    pub fn pointer_moved(&mut self, x: f64, y: f64) {
        self.pointer = (x, y);
    }

    /// Advances one frame and returns the new rendered position.
    pub fn tick(&mut self) -> (f64, f64) {
        let (px, py) = self.pointer;
        let (rx, ry) = self.rendered;
        self.rendered = (
            rx + (px - rx) * self.smoothing,
            ry + (py - ry) * self.smoothing,
        );
        self.rendered
    }

    pub fn pointer(&self) -> (f64, f64) {
        self.pointer
    }

    pub fn rendered(&self) -> (f64, f64) {
        self.rendered
    }
}
