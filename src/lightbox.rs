//! Lightbox navigation state.
//!
//! The viewer is either closed or showing one index of a fixed-size gallery.
//! Navigation wraps in both directions; every operation on a closed viewer is
//! a no-op.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Lightbox {
    len: usize,
    current: Option<usize>,
}

impl Lightbox {
    pub fn new(len: usize) -> Self {
        Self { len, current: None }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn current(&self) -> Option<usize> {
        self.current
    }

    pub fn is_open(&self) -> bool {
        self.current.is_some()
    }

    /// Opens at `index`. Out-of-range indices leave the state untouched.
    pub fn open(&mut self, index: usize) -> Option<usize> {
        if index >= self.len {
            return None;
        }
        self.current = Some(index);
        self.current
    }

    /// Moves by `delta`, wrapping around the ends.
    pub fn step(&mut self, delta: isize) -> Option<usize> {
        let index = self.current?;
        let len = self.len as isize;
        let next = (index as isize + delta).rem_euclid(len) as usize;
        self.current = Some(next);
        self.current
    }

    /// Returns whether the viewer was open.
    pub fn close(&mut self) -> bool {
        self.current.take().is_some()
    }

    /// 1-based "i / N" label for the counter.
    pub fn counter_label(&self) -> Option<String> {
        self.current
            .map(|index| format!("{} / {}", index + 1, self.len))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Nav {
    Previous,
    Next,
    Close,
}

impl Nav {
    /// `keydown` key names the open viewer reacts to.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Escape" => Some(Nav::Close),
            "ArrowLeft" => Some(Nav::Previous),
            "ArrowRight" => Some(Nav::Next),
            _ => None,
        }
    }

    /// Horizontal swipe from `start_x` to `end_x`. Dragging right goes back,
    /// dragging left goes forward; short drags are ignored.
    pub fn from_swipe(start_x: f64, end_x: f64, threshold: f64) -> Option<Self> {
        let dx = end_x - start_x;
        if dx.abs() <= threshold {
            None
        } else if dx > 0.0 {
            Some(Nav::Previous)
        } else {
            Some(Nav::Next)
        }
    }

    pub fn delta(self) -> Option<isize> {
        match self {
            Nav::Previous => Some(-1),
            Nav::Next => Some(1),
            Nav::Close => None,
        }
    }
}
