use crate::grid::Position;

/// Fewer segments than this cannot fold back onto the head.
pub const MIN_LOOP_LENGTH: usize = 4;

/// Head-first body; true when the head shares a cell with any later segment.
pub fn has_self_collision(body: &[Position]) -> bool {
    match body.split_first() {
        Some((head, rest)) if body.len() >= MIN_LOOP_LENGTH => rest.contains(head),
        _ => false,
    }
}
