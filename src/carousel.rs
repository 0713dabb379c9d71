//! Index arithmetic and gesture decisions for the testimonial slider.

/// Minimum horizontal drag, in pixels, before a release counts as a swipe.
pub const DRAG_THRESHOLD: f64 = 50.0;

/// Direction a gesture or key resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Prev,
    Next,
}

/// Swipe decision for a completed drag. Sub-threshold drags are no-ops;
/// dragging left (start right of end) advances, dragging right goes back.
pub fn drag_outcome(start_x: f64, end_x: f64) -> Option<Direction> {
    let diff = start_x - end_x;
    if diff.abs() <= DRAG_THRESHOLD {
        None
    } else if diff > 0.0 {
        Some(Direction::Next)
    } else {
        Some(Direction::Prev)
    }
}

/// Current position in a fixed slide sequence.
///
/// The index is always in `[0, len)`; `next`/`prev` wrap modulo the slide
/// count rather than clamping.
#[derive(Debug, Clone)]
pub struct CarouselModel {
    index: usize,
    len: usize,
}

impl CarouselModel {
    pub fn new(len: usize) -> Self {
        Self { index: 0, len }
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Jumps to `index`, clamped into range.
    pub fn go_to(&mut self, index: usize) -> usize {
        self.index = index.min(self.len.saturating_sub(1));
        self.index
    }

    pub fn next(&mut self) -> usize {
        if self.len > 0 {
            self.index = (self.index + 1) % self.len;
        }
        self.index
    }

    pub fn prev(&mut self) -> usize {
        if self.len > 0 {
            self.index = (self.index + self.len - 1) % self.len;
        }
        self.index
    }

    pub fn step(&mut self, dir: Direction) -> usize {
        match dir {
            Direction::Next => self.next(),
            Direction::Prev => self.prev(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn next_wraps_from_last_to_first() {
        let mut c = CarouselModel::new(3);
        assert_eq!(c.next(), 1);
        assert_eq!(c.next(), 2);
        assert_eq!(c.next(), 0);
    }

    #[test]
    fn prev_wraps_from_first_to_last() {
        let mut c = CarouselModel::new(4);
        assert_eq!(c.prev(), 3);
        assert_eq!(c.prev(), 2);
    }

    #[test]
    fn go_to_clamps_out_of_range() {
        let mut c = CarouselModel::new(3);
        assert_eq!(c.go_to(2), 2);
        assert_eq!(c.go_to(99), 2);
    }

    #[test]
    fn index_stays_in_range_under_arbitrary_navigation() {
        let mut c = CarouselModel::new(5);
        for i in 0..100 {
            match i % 3 {
                0 => c.next(),
                1 => c.prev(),
                _ => c.go_to(i % 7),
            };
            assert!(c.index() < 5);
        }
    }

    #[test]
    fn drag_threshold_is_exclusive() {
        assert_eq!(drag_outcome(100.0, 60.0), None);
        assert_eq!(drag_outcome(100.0, 50.0), None);
        assert_eq!(drag_outcome(100.0, 49.0), Some(Direction::Next));
        assert_eq!(drag_outcome(49.0, 100.0), Some(Direction::Prev));
    }

    #[test]
    fn empty_model_never_panics() {
        let mut c = CarouselModel::new(0);
        assert_eq!(c.next(), 0);
        assert_eq!(c.prev(), 0);
        assert_eq!(c.go_to(3), 0);
    }
}
