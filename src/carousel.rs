//! Auto-scrolling project row.
//!
//! The row renders its items twice back to back. Scrolling by exactly the
//! width of one copy lands on identical pixels, so wrapping the offset back
//! to zero at that point has no visible jump.

/// Offset for a given amount of unpaused running time.
///
/// Returns `None` when there is nothing to scroll (or no usable cycle), in
/// which case the caller keeps its current offset.
pub fn scroll_offset(elapsed_ms: f64, cycle_ms: f64, max_scroll: f64) -> Option<f64> {
    if max_scroll.is_nan() || max_scroll <= 0.0 || cycle_ms.is_nan() || cycle_ms <= 0.0 {
        return None;
    }
    if !elapsed_ms.is_finite() {
        return None;
    }
    let progress = elapsed_ms.rem_euclid(cycle_ms) / cycle_ms;
    let offset = progress * max_scroll;
    // rem_euclid can round up to `cycle_ms` itself
    if offset >= max_scroll {
        Some(0.0)
    } else {
        Some(offset)
    }
}

/// Distance the duplicated track can travel before it repeats.
///
/// `track_width` is the scroll width of the doubled list. One copy is half
/// of it; when the viewport is wider than the spare room the distance is
/// clamped to what can actually scroll, down to zero for very short lists.
pub fn max_scroll(track_width: f64, viewport_width: f64) -> f64 {
    let single = track_width / 2.0;
    let reachable = track_width - viewport_width;
    single.min(reachable).max(0.0)
}

/// Whether wrapping at [`max_scroll`] lands on the same pixels.
///
/// False when the viewport is wider than one copy: the distance is clamped
/// to the reachable range and the wrap back to zero shows different cards.
pub fn wraps_seamlessly(track_width: f64, viewport_width: f64) -> bool {
    viewport_width <= track_width / 2.0
}

/// The rendered sequence: every item twice, keyed by rendered position.
pub fn loop_items<T: Clone>(items: &[T]) -> Vec<(usize, T)> {
    items.iter().chain(items.iter()).cloned().enumerate().collect()
}

/// Running clock and current offset of one carousel.
///
/// Time is whatever monotonic millisecond clock the caller ticks it with
/// (the animation-frame timestamp in the browser). Paused time is
/// subtracted from the elapsed total so resuming continues from the offset
/// that was frozen.
#[derive(Debug, Clone)]
pub struct AutoScroll {
    cycle_ms: f64,
    origin: Option<f64>,
    paused_total: f64,
    paused_since: Option<f64>,
    hovered: bool,
    focused: bool,
    offset: f64,
}

impl AutoScroll {
    pub fn new(cycle_ms: f64) -> Self {
        Self {
            cycle_ms,
            origin: None,
            paused_total: 0.0,
            paused_since: None,
            hovered: false,
            focused: false,
            offset: 0.0,
        }
    }

    pub fn offset(&self) -> f64 {
        self.offset
    }

    pub fn is_paused(&self) -> bool {
        self.paused_since.is_some()
    }

    /// Running time with paused stretches removed.
    pub fn elapsed(&self, now: f64) -> f64 {
        let Some(origin) = self.origin else {
            return 0.0;
        };
        let paused_now = self.paused_since.map_or(0.0, |since| now - since);
        (now - origin - self.paused_total - paused_now).max(0.0)
    }

    /// Advances to `now` and returns the offset to render.
    pub fn tick(&mut self, now: f64, max_scroll: f64) -> f64 {
        self.origin.get_or_insert(now);
        if self.is_paused() {
            return self.offset;
        }
        match scroll_offset(self.elapsed(now), self.cycle_ms, max_scroll) {
            Some(offset) => self.offset = offset,
            None if max_scroll <= 0.0 => self.offset = 0.0,
            None => {}
        }
        self.offset
    }

    /// Pointer entered or left the carousel. Returns whether the running
    /// state changed.
    pub fn set_hovered(&mut self, hovered: bool, now: f64) -> bool {
        self.hovered = hovered;
        self.sync_pause(now)
    }

    /// Keyboard focus entered or left the carousel. Returns whether the
    /// running state changed.
    pub fn set_focused(&mut self, focused: bool, now: f64) -> bool {
        self.focused = focused;
        self.sync_pause(now)
    }

    fn sync_pause(&mut self, now: f64) -> bool {
        self.origin.get_or_insert(now);
        let should_pause = self.hovered || self.focused;
        match (should_pause, self.paused_since) {
            (true, None) => {
                self.paused_since = Some(now);
                true
            }
            (false, Some(since)) => {
                self.paused_total += (now - since).max(0.0);
                self.paused_since = None;
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-9;

    #[test]
    fn test_offset_formula() {
        let cycle = 40_000.0;
        let max = 1200.0;
        let mut t = 0.0;
        while t < 200_000.0 {
            let offset = scroll_offset(t, cycle, max).unwrap();
            let expected = (t % cycle) / cycle * max;
            assert!((offset - expected).abs() < EPS, "t={t}");
            assert!((0.0..max).contains(&offset), "t={t} offset={offset}");
            t += 333.3;
        }
    }

    #[test]
    fn test_offset_wraps_at_cycle() {
        assert_eq!(scroll_offset(0.0, 1000.0, 500.0), Some(0.0));
        assert_eq!(scroll_offset(500.0, 1000.0, 500.0), Some(250.0));
        assert_eq!(scroll_offset(1000.0, 1000.0, 500.0), Some(0.0));
        assert_eq!(scroll_offset(2250.0, 1000.0, 500.0), Some(125.0));
    }

    #[test]
    fn test_zero_max_scroll_is_skipped() {
        assert_eq!(scroll_offset(1234.0, 1000.0, 0.0), None);
        assert_eq!(scroll_offset(1234.0, 0.0, 100.0), None);
        assert_eq!(scroll_offset(f64::NAN, 1000.0, 100.0), None);

        let mut scroll = AutoScroll::new(1000.0);
        for now in [0.0, 16.0, 500.0, 10_000.0] {
            assert_eq!(scroll.tick(now, 0.0), 0.0);
        }
    }

    #[test]
    fn test_max_scroll_geometry() {
        // two copies of 1000px in a 400px viewport: one copy is reachable
        assert_eq!(max_scroll(2000.0, 400.0), 1000.0);
        // viewport wider than the spare room
        assert_eq!(max_scroll(600.0, 400.0), 200.0);
        // a single short item never scrolls
        assert_eq!(max_scroll(300.0, 400.0), 0.0);
    }

    #[test]
    fn test_wide_viewport_clamps_and_loses_seam() {
        // four 320px cards, doubled, on a 1920px screen
        let track = 8.0 * 320.0;
        assert_eq!(max_scroll(track, 1920.0), 640.0);
        assert!(max_scroll(track, 1920.0) < track / 2.0);
        assert!(!wraps_seamlessly(track, 1920.0));

        // the same cards on a laptop wrap exactly one copy
        assert_eq!(max_scroll(track, 1280.0), 1280.0);
        assert!(wraps_seamlessly(track, 1280.0));
        assert!(wraps_seamlessly(track, 400.0));
    }

    #[test]
    fn test_loop_items_duplicates_once() {
        let looped = loop_items(&["a", "b", "c"]);
        assert_eq!(
            looped,
            vec![(0, "a"), (1, "b"), (2, "c"), (3, "a"), (4, "b"), (5, "c")]
        );
        assert_eq!(loop_items(&["only"]).len(), 2);
        assert!(loop_items::<u8>(&[]).is_empty());
    }

    #[test]
    fn test_clock_starts_at_first_tick() {
        let mut scroll = AutoScroll::new(1000.0);
        assert_eq!(scroll.tick(5000.0, 100.0), 0.0);
        assert!((scroll.tick(5500.0, 100.0) - 50.0).abs() < EPS);
    }

    #[test]
    fn test_resume_has_no_jump() {
        let mut scroll = AutoScroll::new(10_000.0);
        let max = 800.0;
        scroll.tick(0.0, max);
        let at_pause = scroll.tick(2_500.0, max);

        assert!(scroll.set_hovered(true, 2_500.0));
        assert!(scroll.is_paused());
        // frames keep arriving while hovered
        assert_eq!(scroll.tick(4_000.0, max), at_pause);
        assert_eq!(scroll.tick(9_000.0, max), at_pause);

        assert!(scroll.set_hovered(false, 9_000.0));
        let at_resume = scroll.tick(9_000.0, max);
        assert!((at_resume - at_pause).abs() < EPS);

        // and continues at the same speed afterwards
        let later = scroll.tick(10_000.0, max);
        assert!((later - (at_pause + 80.0)).abs() < EPS);
    }

    #[test]
    fn test_hover_and_focus_overlap() {
        let mut scroll = AutoScroll::new(1000.0);
        scroll.tick(0.0, 100.0);
        assert!(scroll.set_hovered(true, 100.0));
        assert!(!scroll.set_focused(true, 200.0));
        // pointer leaves but focus is still inside
        assert!(!scroll.set_hovered(false, 300.0));
        assert!(scroll.is_paused());
        assert!(scroll.set_focused(false, 600.0));
        assert!(!scroll.is_paused());
        assert!((scroll.elapsed(600.0) - 100.0).abs() < EPS);
    }

    #[test]
    fn test_repeated_pause_edges_are_ignored() {
        let mut scroll = AutoScroll::new(1000.0);
        scroll.tick(0.0, 100.0);
        assert!(scroll.set_focused(true, 100.0));
        assert!(!scroll.set_focused(true, 150.0));
        assert!(scroll.set_focused(false, 200.0));
        assert!(!scroll.set_focused(false, 250.0));
        assert!((scroll.elapsed(300.0) - 200.0).abs() < EPS);
    }
}
