//! Read-only helpers for renderers.
//!
//! Turns the animator's state into per-disk geometry: where each flipping
//! disk sits, how squashed it is and which colour it shows this frame.
//! Nothing here mutates the machine.

pub mod sprite;

pub use sprite::{cell_center, flip_sprites, sprites_for, FlipSprite};
