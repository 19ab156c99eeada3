//! Looping, centred carousel state.
//!
//! Slides are positioned individually by their wrap-aware distance from
//! the active slide, so looping needs no cloned slides.

/// Carousel layout options.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CarouselLayout {
    pub slides_per_view: f64,
    pub space_between: f64,
}

impl CarouselLayout {
    /// Width of one slide for a container `viewport` pixels wide.
    pub fn slide_width(&self, viewport: f64) -> f64 {
        let per_view = self.slides_per_view.max(1.0);
        ((viewport - (per_view - 1.0) * self.space_between) / per_view).max(0.0)
    }

    /// Left edge of a slide `offset` positions from the centred one.
    pub fn slide_x(&self, offset: i32, viewport: f64) -> f64 {
        let width = self.slide_width(viewport);
        let centred = (viewport - width) / 2.0;
        centred + f64::from(offset) * (width + self.space_between)
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    active: usize,
}

impl Carousel {
    pub fn new(len: usize) -> Self {
        Self { len, active: 0 }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Index of the active slide in the original list.
    pub fn active(&self) -> usize {
        self.active
    }

    pub fn is_active(&self, index: usize) -> bool {
        self.len > 0 && index == self.active
    }

    pub fn next(&mut self) {
        if self.len > 0 {
            self.active = (self.active + 1) % self.len;
        }
    }

    pub fn prev(&mut self) {
        if self.len > 0 {
            self.active = (self.active + self.len - 1) % self.len;
        }
    }

    /// Jump to a slide; out-of-range indices are ignored.
    pub fn go_to(&mut self, index: usize) {
        if index < self.len {
            self.active = index;
        }
    }

    /// Signed distance of `index` from the active slide, taking the short
    /// way around the loop. Ties go forward.
    pub fn relative_offset(&self, index: usize) -> i32 {
        if self.len == 0 {
            return 0;
        }
        let len = self.len as i64;
        let mut d = (index as i64 - self.active as i64).rem_euclid(len);
        if d > len / 2 {
            d -= len;
        }
        d as i32
    }
}

/// Autoplay deadline.
///
/// Every slide change, automatic or manual, pushes the next advance a full
/// interval out, so a click just before the deadline never gets followed
/// by an immediate automatic step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Autoplay {
    interval_ms: f64,
    next_at_ms: f64,
}

impl Autoplay {
    pub fn new(interval_ms: f64, now_ms: f64) -> Self {
        Self {
            interval_ms,
            next_at_ms: now_ms + interval_ms,
        }
    }

    /// Re-arm after a manual slide change.
    pub fn restart(&mut self, now_ms: f64) {
        self.next_at_ms = now_ms + self.interval_ms;
    }

    /// Whether the carousel should advance at `now_ms`. Re-arms when it does.
    pub fn tick(&mut self, now_ms: f64) -> bool {
        if now_ms < self.next_at_ms {
            return false;
        }
        self.restart(now_ms);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_prev_loop() {
        let mut c = Carousel::new(4);
        c.prev();
        assert_eq!(c.active(), 3);
        c.next();
        c.next();
        assert_eq!(c.active(), 1);
    }

    #[test]
    fn test_go_to_ignores_out_of_range() {
        let mut c = Carousel::new(3);
        c.go_to(2);
        assert!(c.is_active(2));
        c.go_to(7);
        assert_eq!(c.active(), 2);
    }

    #[test]
    fn test_empty_carousel_is_inert() {
        let mut c = Carousel::new(0);
        c.next();
        c.prev();
        assert_eq!(c.active(), 0);
        assert!(!c.is_active(0));
        assert_eq!(c.relative_offset(3), 0);
    }

    #[test]
    fn test_relative_offset_wraps_short_way() {
        let mut c = Carousel::new(4);
        assert_eq!(
            (0..4).map(|i| c.relative_offset(i)).collect::<Vec<_>>(),
            [0, 1, 2, -1]
        );
        c.go_to(3);
        assert_eq!(
            (0..4).map(|i| c.relative_offset(i)).collect::<Vec<_>>(),
            [1, 2, -1, 0]
        );
    }

    #[test]
    fn test_layout_geometry() {
        let layout = CarouselLayout {
            slides_per_view: 1.5,
            space_between: 30.0,
        };
        // (1230 - 0.5 * 30) / 1.5 = 810
        assert_eq!(layout.slide_width(1230.0), 810.0);
        assert_eq!(layout.slide_x(0, 1230.0), 210.0);
        assert_eq!(layout.slide_x(1, 1230.0), 210.0 + 840.0);
        assert_eq!(layout.slide_x(-1, 1230.0), 210.0 - 840.0);
    }

    #[test]
    fn test_autoplay_advances_every_interval() {
        let mut autoplay = Autoplay::new(5000.0, 0.0);
        assert!(!autoplay.tick(4999.0));
        assert!(autoplay.tick(5000.0));
        assert!(!autoplay.tick(9999.0));
        assert!(autoplay.tick(10_000.0));
    }

    #[test]
    fn test_manual_change_restarts_autoplay() {
        let mut autoplay = Autoplay::new(5000.0, 0.0);
        // Dot clicked at 4.9s: the next automatic step waits a full interval.
        autoplay.restart(4900.0);
        assert!(!autoplay.tick(5000.0));
        assert!(!autoplay.tick(9899.0));
        assert!(autoplay.tick(9900.0));
    }

    #[test]
    fn test_len_and_active() {
        let mut c = Carousel::new(4);
        assert!(!c.is_empty());
        assert!(Carousel::new(0).is_empty());
        c.go_to(2);
        assert_eq!((c.len(), c.active()), (4, 2));
    }
}
