//! Scroll-driven animation math.
//!
//! Pinned sections are a tall wrapper with a `position: sticky` stage
//! inside. The wrapper's viewport-relative top tells us how far the
//! visitor has scrolled through the pinned distance; everything here maps
//! that into transforms.

use super::easing::{Ease, lerp};

/// Progress through a pinned section, in `[0, 1]`.
///
/// `top` is the wrapper's `getBoundingClientRect().top`; the stage stays
/// pinned for `distance` pixels of scrolling.
pub fn pin_progress(top: f64, distance: f64) -> f64 {
    if distance <= 0.0 {
        return if top <= 0.0 { 1.0 } else { 0.0 };
    }
    (-top / distance).clamp(0.0, 1.0)
}

/// Horizontal track offset in percent of one panel width.
pub fn track_offset_percent(progress: f64, panels: usize) -> f64 {
    let span = panels.saturating_sub(1) as f64;
    -100.0 * span * progress.clamp(0.0, 1.0)
}

/// Visual state of one card in the peeling capability stack.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StackCard {
    /// Resting offset for cards behind the first (px, both axes).
    pub offset_px: f64,
    pub y_percent: f64,
    pub rotation_deg: f64,
    pub opacity: f64,
    pub scale: f64,
    pub brightness: f64,
    pub z_index: usize,
}

/// Peel end state for every card but the last.
const PEEL_Y_PERCENT: f64 = -120.0;
const PEEL_ROTATION_DEG: f64 = -5.0;
const PEEL_SCALE: f64 = 0.9;

/// State of card `index` of `count` at stack progress `progress`.
///
/// Each card except the last peels away over one unit of a timeline that
/// is `count - 1` units long, one after another.
pub fn stack_card(
    index: usize,
    count: usize,
    progress: f64,
    offset_step: f64,
    scale_step: f64,
) -> StackCard {
    let depth = index as f64;
    let base_scale = 1.0 - depth * scale_step;
    let peelable = index + 1 < count;
    let local = if peelable {
        let time = progress.clamp(0.0, 1.0) * (count - 1) as f64;
        (time - depth).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let k = Ease::Power2InOut.apply(local);

    StackCard {
        offset_px: depth * offset_step,
        y_percent: PEEL_Y_PERCENT * k,
        rotation_deg: PEEL_ROTATION_DEG * k,
        opacity: 1.0 - k,
        scale: lerp(base_scale, PEEL_SCALE, k),
        brightness: if index == 0 { 1.0 } else { 0.95 },
        z_index: count - index,
    }
}

impl StackCard {
    /// Inline style for the card element.
    pub fn style(&self) -> String {
        format!(
            "z-index: {}; transform: translate({:.2}px, {:.2}px) translateY({:.3}%) rotate({:.3}deg) scale({:.4}); opacity: {:.4}; filter: brightness({});",
            self.z_index,
            self.offset_px,
            self.offset_px,
            self.y_percent,
            self.rotation_deg,
            self.scale,
            self.opacity,
            self.brightness,
        )
    }
}

/// Parallax offset for an element travelling through the viewport.
///
/// Starts when the element's top meets the viewport bottom and ends when
/// its bottom leaves the viewport top.
pub fn parallax_percent(top: f64, height: f64, viewport_height: f64, travel: f64) -> f64 {
    let span = viewport_height + height;
    if span <= 0.0 {
        return 0.0;
    }
    let progress = ((viewport_height - top) / span).clamp(0.0, 1.0);
    travel * progress
}

/// Whether a reveal group should be shown.
///
/// Plays once the element's top crosses `start_fraction` of the viewport and
/// reverses when scrolled back above that line.
pub fn revealed(top: f64, viewport_height: f64, start_fraction: f64) -> bool {
    top < viewport_height * start_fraction
}

/// Move `current` toward `target` for a frame of `dt_secs`.
///
/// `lag_secs` is how long a scrubbed animation takes to catch up with the
/// scrollbar; zero or less snaps.
pub fn scrub_step(current: f64, target: f64, dt_secs: f64, lag_secs: f64) -> f64 {
    if lag_secs <= 0.0 {
        return target;
    }
    let k = 1.0 - (-dt_secs.max(0.0) * 4.0 / lag_secs).exp();
    let next = lerp(current, target, k);
    if (next - target).abs() < 1e-4 { target } else { next }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_pin_progress() {
        assert_eq!(pin_progress(200.0, 1000.0), 0.0);
        assert_eq!(pin_progress(0.0, 1000.0), 0.0);
        assert_eq!(pin_progress(-250.0, 1000.0), 0.25);
        assert_eq!(pin_progress(-5000.0, 1000.0), 1.0);
        assert_eq!(pin_progress(-1.0, 0.0), 1.0);
    }

    #[test]
    fn test_track_offset() {
        assert_eq!(track_offset_percent(0.0, 4), 0.0);
        assert_eq!(track_offset_percent(1.0, 4), -300.0);
        assert_eq!(track_offset_percent(0.5, 3), -100.0);
        assert_eq!(track_offset_percent(1.0, 1), 0.0);
        assert_eq!(track_offset_percent(1.0, 0), 0.0);
    }

    #[test]
    fn test_stack_initial_state() {
        let first = stack_card(0, 4, 0.0, 15.0, 0.05);
        assert_eq!(first.offset_px, 0.0);
        assert_eq!(first.scale, 1.0);
        assert_eq!(first.opacity, 1.0);
        assert_eq!(first.z_index, 4);
        assert_eq!(first.brightness, 1.0);

        let third = stack_card(2, 4, 0.0, 15.0, 0.05);
        assert_eq!(third.offset_px, 30.0);
        assert!(close(third.scale, 0.9));
        assert_eq!(third.z_index, 2);
        assert_eq!(third.brightness, 0.95);
    }

    #[test]
    fn test_stack_peels_in_sequence() {
        // 4 cards -> 3 timeline units; progress 1/3 finishes card 0 only.
        let p = 1.0 / 3.0;
        let c0 = stack_card(0, 4, p, 15.0, 0.05);
        let c1 = stack_card(1, 4, p, 15.0, 0.05);
        assert!(close(c0.y_percent, -120.0));
        assert!(close(c0.opacity, 0.0));
        assert!(close(c0.rotation_deg, -5.0));
        assert!(close(c1.y_percent, 0.0));
        assert!(close(c1.opacity, 1.0));
    }

    #[test]
    fn test_last_card_never_peels() {
        let last = stack_card(3, 4, 1.0, 15.0, 0.05);
        assert_eq!(last.opacity, 1.0);
        assert_eq!(last.y_percent, 0.0);
        assert_eq!(last.z_index, 1);
    }

    #[test]
    fn test_stack_halfway_through_card() {
        // Halfway through card 1's unit: power2.inOut(0.5) = 0.5
        let p = 1.5 / 3.0;
        let c1 = stack_card(1, 4, p, 15.0, 0.05);
        assert!(close(c1.opacity, 0.5));
        assert!(close(c1.y_percent, -60.0));
        assert!(close(c1.scale, (0.95 + 0.9) / 2.0));
    }

    #[test]
    fn test_parallax_range() {
        // viewport 800, element 400 tall
        assert_eq!(parallax_percent(800.0, 400.0, 800.0, -15.0), 0.0);
        assert_eq!(parallax_percent(-400.0, 400.0, 800.0, -15.0), -15.0);
        assert!(close(parallax_percent(200.0, 400.0, 800.0, -15.0), -7.5));
        assert_eq!(parallax_percent(2000.0, 400.0, 800.0, -15.0), 0.0);
    }

    #[test]
    fn test_reveal_plays_and_reverses() {
        assert!(!revealed(700.0, 800.0, 0.8));
        assert!(revealed(639.0, 800.0, 0.8));
        assert!(revealed(-2000.0, 800.0, 0.8));
        // scrolling back up past the line reverses
        assert!(!revealed(641.0, 800.0, 0.8));
    }

    #[test]
    fn test_scrub_step_converges() {
        let mut value = 0.0;
        for _ in 0..180 {
            value = scrub_step(value, 1.0, 1.0 / 60.0, 1.0);
        }
        assert_eq!(value, 1.0);
        let one_frame = scrub_step(0.0, 1.0, 1.0 / 60.0, 1.0);
        assert!(one_frame > 0.0 && one_frame < 0.1);
        assert_eq!(scrub_step(0.3, 0.8, 0.016, 0.0), 0.8);
    }
}
