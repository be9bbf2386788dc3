//! Orientation predicates over the boundary thread.
//!
//! The kinetic merge never sweeps anything. Each structural change is keyed
//! by a closed-form *turn time*: the value of the sweep parameter at which a
//! triple of consecutive boundary vertices switches between a left turn and a
//! right turn.

use super::vertex::{Boundary, VertexId};
use num_traits::Float;

/// Signed turn of `a -> b -> c` projected onto the xy plane.
///
/// Negative for a clockwise (right) turn.
#[inline]
fn turn_xy<F: Float>(boundary: &Boundary<F>, a: VertexId, b: VertexId, c: VertexId) -> F {
    let (a, b, c) = (boundary.point(a), boundary.point(b), boundary.point(c));
    (b.xy() - a.xy()).cross(c.xy() - b.xy())
}

/// Signed turn of `a -> b -> c` projected onto the xz plane.
#[inline]
fn turn_xz<F: Float>(boundary: &Boundary<F>, a: VertexId, b: VertexId, c: VertexId) -> F {
    let (a, b, c) = (boundary.point(a), boundary.point(b), boundary.point(c));
    (b.xz() - a.xz()).cross(c.xz() - b.xz())
}

/// Returns `true` if `a -> b -> c` turns right in the xy projection.
///
/// Any unset handle counts as "not a right turn", which stops the bridge walk
/// at the end of a thread.
#[inline]
pub(crate) fn is_right_turn<F: Float>(
    boundary: &Boundary<F>,
    a: Option<VertexId>,
    b: Option<VertexId>,
    c: Option<VertexId>,
) -> bool {
    match (a, b, c) {
        (Some(a), Some(b), Some(c)) => turn_xy(boundary, a, b, c) < F::zero(),
        _ => false,
    }
}

/// Time at which the triple `a -> b -> c` flips orientation.
///
/// Returns `+inf` ("never") when any handle is unset or when the xy turn is
/// within `eps` of zero, so a vanishing determinant is never divided by.
#[inline]
pub(crate) fn turn_time<F: Float>(
    boundary: &Boundary<F>,
    a: Option<VertexId>,
    b: Option<VertexId>,
    c: Option<VertexId>,
    eps: F,
) -> F {
    let (Some(a), Some(b), Some(c)) = (a, b, c) else {
        return F::infinity();
    };

    let xy = turn_xy(boundary, a, b, c);
    if xy.abs() <= eps {
        return F::infinity();
    }

    turn_xz(boundary, a, b, c) / xy
}
