//! Motion primitives: easing curves, tweens, timelines and scroll math.
//!
//! Everything here is pure so it can be unit tested off the browser;
//! components bind the results to inline styles.

mod easing;
pub mod scroll;
mod timeline;
mod tween;

pub use easing::{ELASTIC_SPRING, Ease};
pub use timeline::{Position, Timeline, detail_intro};
pub use tween::{Point, Tween};
