//! Sequenced intro animations.
//!
//! A [`Timeline`] places staggered tracks one after another, optionally
//! overlapping the previous end (GSAP's `"-=0.6"` position). Components
//! turn each element's start time into a CSS `animation-delay`.

use super::easing::Ease;

/// Where a track starts relative to what is already on the timeline.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Position {
    /// At the current end of the timeline.
    End,
    /// This many seconds before the current end.
    Overlap(f64),
    /// At an absolute time in seconds.
    At(f64),
}

/// A group of elements sharing one tween, staggered by index.
#[derive(Clone, Debug, PartialEq)]
pub struct Track {
    pub name: &'static str,
    pub start: f64,
    pub duration: f64,
    pub stagger: f64,
    pub count: usize,
    pub ease: Ease,
}

impl Track {
    /// Time the last staggered element finishes.
    pub fn end(&self) -> f64 {
        let last = self.count.saturating_sub(1) as f64;
        self.start + last * self.stagger + self.duration
    }

    /// Start time of element `index`, or `None` past the end of the group.
    pub fn delay(&self, index: usize) -> Option<f64> {
        (index < self.count).then(|| self.start + index as f64 * self.stagger)
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct Timeline {
    tracks: Vec<Track>,
}

impl Timeline {
    pub fn new() -> Self {
        Self::default()
    }

    /// Total length in seconds.
    pub fn duration(&self) -> f64 {
        self.tracks.iter().map(Track::end).fold(0.0, f64::max)
    }

    /// Append a staggered track.
    pub fn add(
        mut self,
        name: &'static str,
        count: usize,
        duration: f64,
        stagger: f64,
        ease: Ease,
        position: Position,
    ) -> Self {
        let end = self.duration();
        let start = match position {
            Position::End => end,
            Position::Overlap(secs) => (end - secs).max(0.0),
            Position::At(secs) => secs.max(0.0),
        };
        self.tracks.push(Track {
            name,
            start,
            duration,
            stagger,
            count,
            ease,
        });
        self
    }

    pub fn track(&self, name: &str) -> Option<&Track> {
        self.tracks.iter().find(|t| t.name == name)
    }

    /// CSS `animation` shorthand values for element `index` of `track`.
    ///
    /// Returns an empty string for unknown tracks so the element renders in
    /// its final state.
    pub fn css_timing(&self, track: &str, index: usize) -> String {
        self.track(track)
            .and_then(|t| {
                t.delay(index).map(|delay| {
                    format!(
                        "animation-duration: {:.3}s; animation-delay: {:.3}s; animation-timing-function: {};",
                        t.duration,
                        delay,
                        t.ease.css().unwrap_or("ease-out"),
                    )
                })
            })
            .unwrap_or_default()
    }
}

/// Intro used by the product and service detail pages.
///
/// Text fades up, cards follow 0.6s before the text finishes, and the hero
/// image scales in 0.8s before the cards finish.
pub fn detail_intro(text_blocks: usize, cards: usize) -> Timeline {
    Timeline::new()
        .add("text", text_blocks, 1.0, 0.1, Ease::Power3Out, Position::End)
        .add("card", cards, 0.8, 0.1, Ease::Power2Out, Position::Overlap(0.6))
        .add("image", 1, 1.2, 0.0, Ease::ExpoOut, Position::Overlap(0.8))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_detail_intro_positions() {
        // text: 5 blocks, 1s each, 0.1s stagger -> ends at 1.4
        let tl = detail_intro(5, 3);
        let text = tl.track("text").unwrap();
        assert!(close(text.start, 0.0));
        assert!(close(text.end(), 1.4));

        // cards start 0.6s before 1.4 and end at 0.8 + 0.2 + 0.8
        let card = tl.track("card").unwrap();
        assert!(close(card.start, 0.8));
        assert!(close(card.end(), 1.8));

        let image = tl.track("image").unwrap();
        assert!(close(image.start, 1.0));
        assert!(close(tl.duration(), 2.2));
    }

    #[test]
    fn test_delays_stagger_by_index() {
        let tl = detail_intro(3, 0);
        let text = tl.track("text").unwrap();
        assert_eq!(text.delay(0), Some(0.0));
        assert!(close(text.delay(2).unwrap(), 0.2));
        assert_eq!(text.delay(3), None);
    }

    #[test]
    fn test_overlap_never_starts_before_zero() {
        let tl = Timeline::new().add("a", 1, 0.2, 0.0, Ease::Linear, Position::Overlap(5.0));
        assert!(close(tl.track("a").unwrap().start, 0.0));
    }

    #[test]
    fn test_empty_track_keeps_timeline_end() {
        let tl = Timeline::new()
            .add("a", 1, 1.0, 0.0, Ease::Linear, Position::End)
            .add("b", 0, 1.0, 0.1, Ease::Linear, Position::At(0.0));
        assert!(close(tl.duration(), 1.0));
    }

    #[test]
    fn test_css_timing() {
        let tl = detail_intro(2, 1);
        assert_eq!(
            tl.css_timing("text", 1),
            "animation-duration: 1.000s; animation-delay: 0.100s; animation-timing-function: cubic-bezier(0.215, 0.61, 0.355, 1);"
        );
        assert_eq!(tl.css_timing("missing", 0), "");
        assert_eq!(tl.css_timing("image", 1), "");
    }
}
