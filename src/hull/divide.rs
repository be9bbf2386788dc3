//! Divide-and-conquer driver for the lower hull.

use super::merge::merge;
use super::vertex::{Boundary, VertexId};
use crate::primitives::Point3;
use num_traits::Float;
use std::cmp::Ordering;
use std::ops::Range;

/// Orders points by ascending x; (nearly) equal x falls back to descending z.
pub(crate) fn split_order<F: Float>(a: &Point3<F>, b: &Point3<F>, eps: F) -> Ordering {
    if (a.x - b.x).abs() <= eps {
        b.z.partial_cmp(&a.z).unwrap_or(Ordering::Equal)
    } else {
        a.x.partial_cmp(&b.x).unwrap_or(Ordering::Equal)
    }
}

/// Builds the lower hull movie of every vertex in `boundary`.
///
/// The arena must already be in [`split_order`]. On return the boundary
/// thread holds the lower hull at `t = -inf` and the returned list is the
/// movie that the face extractor replays.
pub(crate) fn lower_hull_movie<F: Float>(boundary: &mut Boundary<F>, eps: F) -> Vec<VertexId> {
    if boundary.len() == 0 {
        return Vec::new();
    }
    build(boundary, 0..boundary.len(), eps)
}

fn build<F: Float>(boundary: &mut Boundary<F>, range: Range<usize>, eps: F) -> Vec<VertexId> {
    if range.len() == 1 {
        // A lone vertex; its handles stay unset until a merge threads it.
        return vec![range.start];
    }

    let mid = range.start + range.len() / 2;
    let left = build(boundary, range.start..mid, eps);
    let right = build(boundary, mid..range.end, eps);

    merge(boundary, &left, &right, mid - 1, mid, eps)
}
