//! Flip sprite geometry.

use serde::{Deserialize, Serialize};

use crate::animation::FlipAnimator;
use crate::core::{Cell, Side};
use crate::input::InputMapper;
use crate::machine::{GamePhase, GameStateMachine};
use crate::rules::MoveEngine;

/// Below this vertical scale a flipping disk is edge-on and not drawn.
const MIN_VISIBLE_SCALE: f64 = 1e-5;

/// One flipping disk, ready to draw as an ellipse.
///
/// The renderer first clears the cell's disk (a circle of `radius_x` plus a
/// pixel in the board colour), then fills the ellipse in `color` if
/// `visible`. The clear happens on every animating frame, including the
/// edge-on midpoint where nothing is filled.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct FlipSprite {
    pub cell: Cell,
    /// Centre in device pixels.
    pub center: (f64, f64),
    /// Horizontal radius; the full disk radius.
    pub radius_x: f64,
    /// Vertical radius; the disk radius times the animation scale.
    pub radius_y: f64,
    /// Colour for this frame.
    pub color: Side,
    /// False when the disk is edge-on; only the clear is drawn.
    pub visible: bool,
}

/// Build the sprites for the animator's current frame.
///
/// Returns nothing when idle.
pub fn sprites_for(
    animator: &FlipAnimator,
    mapper: &InputMapper,
    disk_radius_ratio: f64,
) -> Vec<FlipSprite> {
    let Some(color) = animator.display_color() else {
        return Vec::new();
    };
    let scale = animator.scale();
    let visible = scale >= MIN_VISIBLE_SCALE;

    let radius = mapper.cell_size() * disk_radius_ratio;
    animator
        .cells()
        .iter()
        .map(|&cell| FlipSprite {
            cell,
            center: mapper.cell_center(cell),
            radius_x: radius,
            radius_y: radius * scale,
            color,
            visible,
        })
        .collect()
}

/// Sprites for the machine's current frame (empty unless animating).
pub fn flip_sprites<E: MoveEngine>(machine: &GameStateMachine<E>) -> Vec<FlipSprite> {
    if machine.current_phase() != GamePhase::Animating {
        return Vec::new();
    }
    sprites_for(
        machine.animator(),
        machine.mapper(),
        machine.config().disk_radius_ratio,
    )
}

/// Centre of `cell` for static disks, in device pixels.
pub fn cell_center<E: MoveEngine>(machine: &GameStateMachine<E>, cell: Cell) -> (f64, f64) {
    machine.mapper().cell_center(cell)
}
