//! Placement of new components on the canvas.

use log::trace;

use crate::types::Position;

/// Find a spot near `base` that no existing component occupies.
///
/// A spot is taken when some position in `occupied` lies within `grid` of it
/// on both axes. The search walks outwards along a spiral: attempt `k` moves
/// `k * grid` away from `base`, turned by `k / 2` radians. After `attempts`
/// tries the last candidate is returned even if it is taken.
pub fn find_free_position(base: Position, occupied: &[Position], grid: f64, attempts: usize) -> Position {
    let is_taken = |p: &Position| occupied.iter().any(|o| o.is_near(p, grid));

    let mut candidate = base;
    let mut radius = 0.0;
    let mut attempt = 0;
    while is_taken(&candidate) && attempt < attempts {
        attempt += 1;
        radius += grid;
        let angle = attempt as f64 * 0.5;
        candidate = Position::new(base.x + radius * angle.cos(), base.y + radius * angle.sin());
        trace!("placement attempt {} at {}", attempt, candidate);
    }
    candidate
}
