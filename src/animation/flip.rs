//! Flip animation state.

use serde::Serialize;

use crate::core::{Cell, FlipSet, Side};

/// Default animation length in frames.
pub const DEFAULT_FRAMES: u32 = 16;

/// The disks flipped by one move, plus the frames left to show them.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
struct FlipBatch {
    /// Side that made the move; its colour is the post-move colour.
    mover: Side,
    /// Flipped cells, in engine order.
    cells: FlipSet,
    /// Frames left, counting down from the animation length to 0.
    countdown: u32,
}

/// Owns at most one flip batch and its frame countdown.
///
/// ## Behavior
///
/// - `start()`: replaces any previous batch and rewinds to the full length
/// - `step()`: one frame forward; no-op when nothing is animating
/// - `is_finished()`: countdown reached 0
/// - `reset()`: releases the batch
///
/// The countdown runs from `T` down to 0. The first half (`countdown > T/2`)
/// shows the pre-move colour, the second half the post-move colour, while
/// `scale()` squashes the disk to nothing at the midpoint and back.
///
/// Serializes for inspection only. The frame count is checked in `new`, so
/// there is no way to build one from a document.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct FlipAnimator {
    total_frames: u32,
    batch: Option<FlipBatch>,
}

impl Default for FlipAnimator {
    fn default() -> Self {
        Self::new(DEFAULT_FRAMES)
    }
}

impl FlipAnimator {
    /// Create an idle animator with `total_frames` frames per flip.
    pub fn new(total_frames: u32) -> Self {
        assert!(
            total_frames > 0 && total_frames % 2 == 0,
            "Animation length must be even and positive"
        );
        Self {
            total_frames,
            batch: None,
        }
    }

    /// Start animating `cells`, flipped by a move of `mover`.
    ///
    /// Any batch still held is dropped first.
    pub fn start(&mut self, mover: Side, cells: FlipSet) {
        self.batch = Some(FlipBatch {
            mover,
            cells,
            countdown: self.total_frames,
        });
    }

    /// Release the batch and return to idle.
    pub fn reset(&mut self) {
        self.batch = None;
    }

    /// Advance one frame.
    pub fn step(&mut self) {
        if let Some(batch) = self.batch.as_mut() {
            batch.countdown = batch.countdown.saturating_sub(1);
        }
    }

    /// Frames per flip.
    #[must_use]
    pub fn total_frames(&self) -> u32 {
        self.total_frames
    }

    /// Frames left (0 when idle).
    #[must_use]
    pub fn countdown(&self) -> u32 {
        self.batch.as_ref().map_or(0, |b| b.countdown)
    }

    /// True while frames remain to be shown.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.countdown() > 0
    }

    /// True once the countdown has reached 0.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.countdown() == 0
    }

    /// True while the pre-move colour should be shown.
    #[must_use]
    pub fn is_first_half(&self) -> bool {
        self.countdown() > self.total_frames / 2
    }

    /// Vertical scale of a flipping disk, in `[0, 1]`.
    #[must_use]
    pub fn scale(&self) -> f64 {
        let half = f64::from(self.total_frames / 2);
        (f64::from(self.countdown()) - half).abs() / half
    }

    /// Cells being flipped (empty when idle).
    #[must_use]
    pub fn cells(&self) -> &[Cell] {
        self.batch
            .as_ref()
            .map(|b| b.cells.as_slice())
            .unwrap_or(&[])
    }

    /// Side that made the animated move.
    #[must_use]
    pub fn mover(&self) -> Option<Side> {
        self.batch.as_ref().map(|b| b.mover)
    }

    /// Colour the flipping disks had before the move.
    #[must_use]
    pub fn pre_move_color(&self) -> Option<Side> {
        self.mover().map(Side::opponent)
    }

    /// Colour the flipping disks have after the move.
    #[must_use]
    pub fn post_move_color(&self) -> Option<Side> {
        self.mover()
    }

    /// Colour to draw the flipping disks with on the current frame.
    #[must_use]
    pub fn display_color(&self) -> Option<Side> {
        if self.is_first_half() {
            self.pre_move_color()
        } else {
            self.post_move_color()
        }
    }
}
