//! Flip animation controller.
//!
//! After every move the flipped disks are shown turning over for a fixed
//! number of frames. `FlipAnimator` owns that batch exclusively; starting a
//! new animation releases the previous one.

pub mod flip;

pub use flip::{FlipAnimator, DEFAULT_FRAMES};
