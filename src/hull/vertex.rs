//! Boundary vertices and the arena that owns them.
//!
//! Every vertex carries two mutable neighbour handles, `prev` and `next`.
//! Together they thread the vertices of a (partial) lower hull into the
//! *boundary thread*: the cyclic sequence the merge step keeps rewriting.
//! Handles are plain indices into [`Boundary`], so relinking never has to
//! worry about dangling references. `None` plays the role of the NIL vertex:
//! an unset handle that every predicate treats as "no such neighbour".

use crate::primitives::Point3;
use num_traits::Float;

/// Index of a vertex inside a [`Boundary`] arena.
pub(crate) type VertexId = usize;

/// A hull vertex: immutable coordinates, caller identity, mutable links.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Vertex<F> {
    pub point: Point3<F>,
    pub id: i64,
    pub prev: Option<VertexId>,
    pub next: Option<VertexId>,
}

/// What [`Boundary::toggle`] did to a vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Toggle {
    /// The vertex was linked between its neighbours and has been spliced out.
    Removed,
    /// The vertex was not linked and has been spliced back in.
    Inserted,
}

/// Arena of vertices for a single hull construction.
///
/// Vertices are stored in split-axis order; the arena index doubles as the
/// position in that order.
#[derive(Debug, Clone)]
pub(crate) struct Boundary<F> {
    vertices: Vec<Vertex<F>>,
}

impl<F: Float> Boundary<F> {
    /// Builds an arena with every neighbour handle unset.
    pub fn new<I>(points: I) -> Self
    where
        I: IntoIterator<Item = (Point3<F>, i64)>,
    {
        let vertices = points
            .into_iter()
            .map(|(point, id)| Vertex {
                point,
                id,
                prev: None,
                next: None,
            })
            .collect();
        Self { vertices }
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    #[inline]
    pub fn point(&self, v: VertexId) -> Point3<F> {
        self.vertices[v].point
    }

    /// Position along the split axis.
    #[inline]
    pub fn x(&self, v: VertexId) -> F {
        self.vertices[v].point.x
    }

    #[inline]
    pub fn id(&self, v: VertexId) -> i64 {
        self.vertices[v].id
    }

    #[inline]
    pub fn prev(&self, v: VertexId) -> Option<VertexId> {
        self.vertices[v].prev
    }

    #[inline]
    pub fn next(&self, v: VertexId) -> Option<VertexId> {
        self.vertices[v].next
    }

    /// Makes `b` the successor of `a` (and `a` the predecessor of `b`).
    #[inline]
    pub fn link(&mut self, a: VertexId, b: VertexId) {
        self.vertices[a].next = Some(b);
        self.vertices[b].prev = Some(a);
    }

    /// Splices `v` out of the boundary thread if its neighbours currently point
    /// at it, otherwise splices it back in between them.
    ///
    /// The vertex keeps its own `prev`/`next` either way, which is what lets a
    /// recorded event be undone or replayed later. Unset neighbours are
    /// skipped.
    pub fn toggle(&mut self, v: VertexId) -> Toggle {
        let Vertex { prev, next, .. } = self.vertices[v];

        let linked = match (prev, next) {
            (Some(p), _) => self.vertices[p].next == Some(v),
            (None, Some(n)) => self.vertices[n].prev == Some(v),
            (None, None) => false,
        };

        let (after_prev, before_next, outcome) = if linked {
            (next, prev, Toggle::Removed)
        } else {
            (Some(v), Some(v), Toggle::Inserted)
        };

        if let Some(p) = prev {
            self.vertices[p].next = after_prev;
        }
        if let Some(n) = next {
            self.vertices[n].prev = before_next;
        }

        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain(n: usize) -> Boundary<f64> {
        let mut boundary = Boundary::new(
            (0..n).map(|i| (Point3::new(i as f64, 0.0, 0.0), i as i64)),
        );
        for i in 0..n - 1 {
            boundary.link(i, i + 1);
        }
        boundary
    }

    #[test]
    fn test_new_leaves_handles_unset() {
        let boundary = Boundary::new(vec![(Point3::new(1.0_f64, 2.0, 3.0), 7)]);
        assert_eq!(boundary.len(), 1);
        assert_eq!(boundary.id(0), 7);
        assert_eq!(boundary.x(0), 1.0);
        assert_eq!(boundary.prev(0), None);
        assert_eq!(boundary.next(0), None);
    }

    #[test]
    fn test_link() {
        let boundary = chain(3);
        assert_eq!(boundary.next(0), Some(1));
        assert_eq!(boundary.prev(1), Some(0));
        assert_eq!(boundary.next(1), Some(2));
        assert_eq!(boundary.prev(2), Some(1));
    }

    #[test]
    fn test_toggle_removes_then_reinserts() {
        let mut boundary = chain(3);

        assert_eq!(boundary.toggle(1), Toggle::Removed);
        assert_eq!(boundary.next(0), Some(2));
        assert_eq!(boundary.prev(2), Some(0));
        // The removed vertex still remembers where it was.
        assert_eq!(boundary.prev(1), Some(0));
        assert_eq!(boundary.next(1), Some(2));

        assert_eq!(boundary.toggle(1), Toggle::Inserted);
        assert_eq!(boundary.next(0), Some(1));
        assert_eq!(boundary.prev(2), Some(1));
    }

    #[test]
    fn test_toggle_end_of_thread() {
        let mut boundary = chain(2);

        // Vertex 1 has no successor; removal only touches its predecessor.
        assert_eq!(boundary.toggle(1), Toggle::Removed);
        assert_eq!(boundary.next(0), None);

        assert_eq!(boundary.toggle(1), Toggle::Inserted);
        assert_eq!(boundary.next(0), Some(1));
    }

    #[test]
    fn test_toggle_isolated_vertex() {
        let mut boundary = Boundary::new(vec![(Point3::new(0.0_f64, 0.0, 0.0), 0)]);
        assert_eq!(boundary.toggle(0), Toggle::Inserted);
        assert_eq!(boundary.prev(0), None);
        assert_eq!(boundary.next(0), None);
    }
}
