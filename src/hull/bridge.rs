//! Initial bridge between two neighbouring sub-hulls.

use super::predicates::is_right_turn;
use super::vertex::{Boundary, VertexId};
use num_traits::Float;

/// Walks from the innermost pair of vertices to the edge that supports both
/// sub-hulls from below in the xy projection.
///
/// `left` starts at the rightmost vertex of the left sub-hull and `right` at
/// the leftmost vertex of the right sub-hull. The right endpoint advances
/// along `next` while that makes a right turn; otherwise the left endpoint
/// retreats along `prev` while that makes one. Both threads are convex, so
/// the walk is linear and stops at the unique common tangent.
pub(crate) fn find_bridge<F: Float>(
    boundary: &Boundary<F>,
    mut left: VertexId,
    mut right: VertexId,
) -> (VertexId, VertexId) {
    loop {
        if is_right_turn(boundary, Some(left), Some(right), boundary.next(right)) {
            // `is_right_turn` only succeeds when every handle is set.
            if let Some(next) = boundary.next(right) {
                right = next;
            }
        } else if is_right_turn(boundary, boundary.prev(left), Some(left), Some(right)) {
            if let Some(prev) = boundary.prev(left) {
                left = prev;
            }
        } else {
            return (left, right);
        }
    }
}
