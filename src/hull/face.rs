//! Triangular hull faces and their extraction from a finished movie.

use super::vertex::{Boundary, Toggle, VertexId};
use num_traits::Float;
use std::fmt;

/// A triangular face given by the identities of its vertices.
///
/// Read in order `a -> b -> c`, the vertices wind counter-clockwise when seen
/// from outside the hull, so `(b - a) x (c - a)` is the outward normal.
/// Faces produced by this crate are canonical: `a` is the smallest identity.
/// The derived ordering is lexicographic over `(a, b, c)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Face {
    /// First vertex identity
    pub a: i64,
    /// Second vertex identity
    pub b: i64,
    /// Third vertex identity
    pub c: i64,
}

impl Face {
    /// Creates a face from vertex identities, exactly as given.
    #[inline]
    pub fn new(a: i64, b: i64, c: i64) -> Self {
        Self { a, b, c }
    }

    /// Rotates the vertices so the smallest identity comes first.
    ///
    /// The cyclic order, and therefore the orientation, is preserved.
    pub fn canonical(self) -> Self {
        let Self { a, b, c } = self;
        if b < a && b < c {
            Self::new(b, c, a)
        } else if c < a && c < b {
            Self::new(c, a, b)
        } else {
            self
        }
    }

    /// Returns the same triangle with the opposite orientation, canonicalized.
    #[inline]
    pub fn reversed(self) -> Self {
        Self::new(self.a, self.c, self.b).canonical()
    }

    /// Returns the vertex identities in order.
    #[inline]
    pub fn vertices(&self) -> [i64; 3] {
        [self.a, self.b, self.c]
    }

    /// Returns the three directed edges of this face.
    #[inline]
    pub fn edges(&self) -> [(i64, i64); 3] {
        [(self.a, self.b), (self.b, self.c), (self.c, self.a)]
    }

    /// Checks if the face contains a specific vertex identity.
    #[inline]
    pub fn contains_vertex(&self, id: i64) -> bool {
        self.a == id || self.b == id || self.c == id
    }
}

/// Renders the face in the `3 a b c` polygon-record form.
impl fmt::Display for Face {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "3 {} {} {}", self.a, self.b, self.c)
    }
}

/// Replays a lower hull movie and emits one face per event.
///
/// The boundary thread must be at `t = -inf`, as left by the driver. Each
/// vertex is toggled in turn; with its own handles untouched, `prev` and
/// `next` are the two other corners of the face it spans. A vertex leaving
/// the thread is emitted as `(v, prev, next)` and one joining it as
/// `(prev, v, next)`, which keeps every face pointing down and out.
pub(crate) fn extract_faces<F: Float>(boundary: &mut Boundary<F>, movie: &[VertexId]) -> Vec<Face> {
    let mut faces = Vec::with_capacity(movie.len());

    for &v in movie {
        let toggle = boundary.toggle(v);
        let (Some(prev), Some(next)) = (boundary.prev(v), boundary.next(v)) else {
            continue;
        };

        let (p, v, n) = (boundary.id(prev), boundary.id(v), boundary.id(next));
        let face = match toggle {
            Toggle::Removed => Face::new(v, p, n),
            Toggle::Inserted => Face::new(p, v, n),
        };
        faces.push(face.canonical());
    }

    faces
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hull::divide::lower_hull_movie;
    use crate::primitives::Point3;

    #[test]
    fn test_canonical_rotates_smallest_first() {
        assert_eq!(Face::new(3, 1, 2).canonical(), Face::new(1, 2, 3));
        assert_eq!(Face::new(2, 3, 1).canonical(), Face::new(1, 2, 3));
        assert_eq!(Face::new(1, 3, 2).canonical(), Face::new(1, 3, 2));
    }

    #[test]
    fn test_canonical_with_negative_identities() {
        assert_eq!(Face::new(4, -1, 2).canonical(), Face::new(-1, 2, 4));
    }

    #[test]
    fn test_reversed() {
        assert_eq!(Face::new(1, 2, 3).reversed(), Face::new(1, 3, 2));
        assert_eq!(Face::new(1, 2, 3).reversed().reversed(), Face::new(1, 2, 3));
    }

    #[test]
    fn test_face_edges() {
        let face = Face::new(0, 1, 2);
        let edges = face.edges();
        assert_eq!(edges[0], (0, 1));
        assert_eq!(edges[1], (1, 2));
        assert_eq!(edges[2], (2, 0));
    }

    #[test]
    fn test_contains_vertex() {
        let face = Face::new(0, 1, 2);
        assert!(face.contains_vertex(0));
        assert!(face.contains_vertex(2));
        assert!(!face.contains_vertex(3));
    }

    #[test]
    fn test_display() {
        assert_eq!(Face::new(0, 4, 2).to_string(), "3 0 4 2");
    }

    #[test]
    fn test_ordering_is_lexicographic() {
        let mut faces = vec![Face::new(1, 2, 3), Face::new(0, 3, 2), Face::new(0, 1, 3)];
        faces.sort();
        assert_eq!(
            faces,
            vec![Face::new(0, 1, 3), Face::new(0, 3, 2), Face::new(1, 2, 3)]
        );
    }

    #[test]
    fn test_extract_single_lower_face() {
        let mut boundary = Boundary::new(vec![
            (Point3::new(0.0_f64, 0.0, 0.0), 0),
            (Point3::new(1.0, 1.0, 0.2), 1),
            (Point3::new(2.0, 0.0, 0.1), 2),
        ]);
        let movie = lower_hull_movie(&mut boundary, f64::EPSILON);
        let faces = extract_faces(&mut boundary, &movie);

        // (1 - 0) x (2 - 0) = (0.1, 0.3, -2): the normal points down.
        assert_eq!(faces, vec![Face::new(0, 1, 2)]);
    }

    #[test]
    fn test_extract_skips_unthreaded_vertex() {
        let mut boundary = Boundary::new(vec![(Point3::new(0.0_f64, 0.0, 0.0), 0)]);
        let movie = lower_hull_movie(&mut boundary, f64::EPSILON);
        assert!(extract_faces(&mut boundary, &movie).is_empty());
    }
}
