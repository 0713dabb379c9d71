//! Page-wide mutable state shared across modules.
//!
//! One instance lives for the whole page session (the wasm side holds it in
//! an `Rc<RefCell<_>>`). There is no change notification: consumers are
//! re-triggered by the same browser event that caused the mutation, and the
//! single-threaded event loop keeps unsynchronized access sound.

/// Viewport width above which the layout counts as desktop.
pub const DESKTOP_MIN_WIDTH: f64 = 1024.0;

#[derive(Debug, Clone)]
pub struct SharedState {
    pub is_loaded: bool,
    pub age_verified: bool,
    pub scroll_y: f64,
    pub scroll_progress: f64,
    pub mouse_x: f64,
    pub mouse_y: f64,
    pub cursor_x: f64,
    pub cursor_y: f64,
    pub follower_x: f64,
    pub follower_y: f64,
    pub active_tab: String,
    pub slider_index: usize,
    pub total_slides: usize,
    pub counters_animated: bool,
    pub mobile_menu_open: bool,
    pub is_desktop: bool,
}

impl SharedState {
    /// Every field defined before first read; `viewport_width` seeds the
    /// desktop flag.
    pub fn new(viewport_width: f64) -> Self {
        Self {
            is_loaded: false,
            age_verified: false,
            scroll_y: 0.0,
            scroll_progress: 0.0,
            mouse_x: 0.0,
            mouse_y: 0.0,
            cursor_x: 0.0,
            cursor_y: 0.0,
            follower_x: 0.0,
            follower_y: 0.0,
            active_tab: "bio".to_owned(),
            slider_index: 0,
            total_slides: 0,
            counters_animated: false,
            mobile_menu_open: false,
            is_desktop: viewport_width > DESKTOP_MIN_WIDTH,
        }
    }

    pub fn set_viewport_width(&mut self, width: f64) {
        self.is_desktop = width > DESKTOP_MIN_WIDTH;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_defined() {
        let s = SharedState::new(1280.0);
        assert!(!s.is_loaded);
        assert!(!s.age_verified);
        assert_eq!(s.active_tab, "bio");
        assert_eq!(s.slider_index, 0);
        assert!(s.is_desktop);
    }

    #[test]
    fn viewport_width_drives_the_desktop_flag() {
        let mut s = SharedState::new(800.0);
        assert!(!s.is_desktop);
        s.set_viewport_width(1025.0);
        assert!(s.is_desktop);
        s.set_viewport_width(1024.0);
        assert!(!s.is_desktop);
    }
}
