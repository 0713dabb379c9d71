//! Pure decisions behind the scroll-reactive group.
//!
//! The DOM layer feeds these with the latest scroll position and section
//! rectangles; everything here is plain geometry so the thresholds and the
//! active-link rule can be exercised on the host.

use crate::util::clamp;

/// Scroll depth past which the navbar takes its condensed "scrolled" state.
pub const NAVBAR_THRESHOLD: f64 = 60.0;
/// Scroll depth past which the back-to-top control becomes visible.
pub const BACK_TO_TOP_THRESHOLD: f64 = 400.0;
/// Parallax stops updating past this multiple of the viewport height.
pub const PARALLAX_CUTOFF: f64 = 1.5;

#[inline]
pub fn navbar_scrolled(scroll_y: f64) -> bool {
    scroll_y > NAVBAR_THRESHOLD
}

#[inline]
pub fn back_to_top_visible(scroll_y: f64) -> bool {
    scroll_y > BACK_TO_TOP_THRESHOLD
}

/// Page scroll progress in percent, clamped to [0, 100]. A non-positive
/// scrollable range (page shorter than the viewport) reads as 0.
pub fn scroll_progress(scroll_top: f64, scroll_height: f64, viewport_h: f64) -> f64 {
    let range = scroll_height - viewport_h;
    if range <= 0.0 {
        return 0.0;
    }
    clamp(scroll_top / range * 100.0, 0.0, 100.0)
}

/// A tracked section's bounding box relative to the viewport.
#[derive(Debug, Clone, Copy)]
pub struct SectionRect {
    pub top: f64,
    pub bottom: f64,
}

/// Index of the active navigation section: the last section in document
/// order whose top has crossed the upper half of the viewport while its
/// bottom is still on screen.
pub fn active_section(sections: &[SectionRect], viewport_h: f64) -> Option<usize> {
    let mut active = None;
    for (i, rect) in sections.iter().enumerate() {
        if rect.top < viewport_h * 0.5 && rect.bottom > 0.0 {
            active = Some(i);
        }
    }
    active
}

/// Vertical parallax translation for an element with the given speed
/// coefficient, or `None` once the hero has scrolled out of relevance (the
/// element keeps whatever transform it last had).
pub fn parallax_offset(scroll_y: f64, speed: f64, viewport_h: f64) -> Option<f64> {
    if scroll_y > viewport_h * PARALLAX_CUTOFF {
        None
    } else {
        Some(scroll_y * speed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn navbar_threshold_is_exclusive() {
        assert!(!navbar_scrolled(60.0));
        assert!(navbar_scrolled(60.5));
        assert!(!navbar_scrolled(0.0));
    }

    #[test]
    fn back_to_top_hides_again_below_threshold() {
        assert!(back_to_top_visible(500.0));
        assert!(!back_to_top_visible(100.0));
        assert!(!back_to_top_visible(400.0));
    }

    #[test]
    fn progress_is_clamped() {
        assert_eq!(scroll_progress(500.0, 2000.0, 1000.0), 50.0);
        assert_eq!(scroll_progress(2000.0, 2000.0, 1000.0), 100.0);
        assert_eq!(scroll_progress(-10.0, 2000.0, 1000.0), 0.0);
    }

    #[test]
    fn progress_degenerate_range_reads_zero() {
        assert_eq!(scroll_progress(100.0, 800.0, 1000.0), 0.0);
        assert_eq!(scroll_progress(100.0, 1000.0, 1000.0), 0.0);
    }

    #[test]
    fn last_qualifying_section_wins() {
        let sections = [
            SectionRect {
                top: -500.0,
                bottom: 200.0,
            },
            SectionRect {
                top: 200.0,
                bottom: 900.0,
            },
            SectionRect {
                top: 900.0,
                bottom: 1600.0,
            },
        ];
        // Both of the first two qualify at vh=1000; the later one is active.
        assert_eq!(active_section(&sections, 1000.0), Some(1));
    }

    #[test]
    fn no_section_active_above_the_page() {
        let sections = [SectionRect {
            top: 600.0,
            bottom: 1400.0,
        }];
        assert_eq!(active_section(&sections, 1000.0), None);
        // Fully scrolled past: bottom above the viewport.
        let gone = [SectionRect {
            top: -900.0,
            bottom: -100.0,
        }];
        assert_eq!(active_section(&gone, 1000.0), None);
    }

    #[test]
    fn parallax_cuts_off_past_one_and_a_half_viewports() {
        assert_eq!(parallax_offset(300.0, 0.3, 1000.0), Some(90.0));
        assert_eq!(parallax_offset(1500.0, 0.3, 1000.0), Some(450.0));
        assert_eq!(parallax_offset(1501.0, 0.3, 1000.0), None);
    }
}
