//! Combinatorial and geometric checks for a computed hull.
//!
//! Useful for testing, and for catching inputs that violate general position.

use super::face::Face;
use crate::primitives::Point3;
use num_traits::Float;
use std::collections::{HashMap, HashSet};

/// Validation report for a set of hull faces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HullReport {
    /// Number of distinct vertex identities used by the faces.
    pub num_vertices: usize,
    /// Number of undirected edges.
    pub num_edges: usize,
    /// Number of faces.
    pub num_faces: usize,
    /// Euler characteristic V - E + F.
    pub euler_characteristic: i64,
    /// Directed edges whose reverse does not appear exactly once.
    pub unmatched_edges: usize,
    /// Faces with a repeated vertex or zero area.
    pub degenerate_faces: usize,
    /// Face vertices that do not index into the point set.
    pub unknown_vertices: usize,
    /// (face, point) pairs where the point lies outside the face's plane.
    pub convexity_violations: usize,
}

impl HullReport {
    /// Returns `true` if the faces form a closed, consistently oriented
    /// surface of genus zero.
    pub fn is_closed(&self) -> bool {
        self.num_faces > 0
            && self.euler_characteristic == 2
            && self.unmatched_edges == 0
            && self.degenerate_faces == 0
            && self.unknown_vertices == 0
    }

    /// Returns `true` if no input point lies outside any face.
    pub fn is_convex(&self) -> bool {
        self.convexity_violations == 0
    }

    /// Returns `true` if the surface is closed and convex.
    pub fn is_valid(&self) -> bool {
        self.is_closed() && self.is_convex()
    }

    /// Formats a summary of any issues found.
    pub fn summary(&self) -> String {
        if self.is_valid() {
            return "Valid".to_string();
        }

        let mut issues = Vec::new();
        if self.num_faces == 0 {
            issues.push("no faces".to_string());
        }
        if self.euler_characteristic != 2 {
            issues.push(format!("Euler={} (expected 2)", self.euler_characteristic));
        }
        if self.unmatched_edges > 0 {
            issues.push(format!("{} unmatched edges", self.unmatched_edges));
        }
        if self.degenerate_faces > 0 {
            issues.push(format!("{} degenerate faces", self.degenerate_faces));
        }
        if self.unknown_vertices > 0 {
            issues.push(format!("{} unknown vertices", self.unknown_vertices));
        }
        if self.convexity_violations > 0 {
            issues.push(format!("{} convexity violations", self.convexity_violations));
        }
        issues.join(", ")
    }
}

/// Checks `faces` against the points they were built from.
///
/// Face identities are taken as indices into `points`. A point counts as a
/// convexity violation when its distance above a face's plane, along the
/// outward unit normal, exceeds `tolerance`.
///
/// # Example
///
/// ```
/// use kinetic_hull::hull::{convex_hull_3d, validate};
/// use kinetic_hull::Point3;
///
/// let points: Vec<Point3<f64>> = vec![
///     Point3::new(0.0, 0.0, 0.0),
///     Point3::new(1.0, 0.2, 0.1),
///     Point3::new(0.3, 1.1, 0.2),
///     Point3::new(0.4, 0.3, 1.3),
/// ];
///
/// let faces = convex_hull_3d(&points);
/// let report = validate(&points, &faces, 1e-9);
/// assert!(report.is_valid(), "{}", report.summary());
/// ```
pub fn validate<F: Float>(points: &[Point3<F>], faces: &[Face], tolerance: F) -> HullReport {
    let lookup = |id: i64| usize::try_from(id).ok().and_then(|i| points.get(i));

    let mut vertices = HashSet::new();
    let mut directed: HashMap<(i64, i64), usize> = HashMap::new();
    let mut degenerate_faces = 0;
    let mut unknown_vertices = 0;
    let mut convexity_violations = 0;

    for face in faces {
        vertices.extend(face.vertices());
        for edge in face.edges() {
            *directed.entry(edge).or_insert(0) += 1;
        }

        let corners = face.vertices().map(lookup);
        unknown_vertices += corners.iter().filter(|c| c.is_none()).count();
        let [Some(a), Some(b), Some(c)] = corners else {
            continue;
        };

        let normal = (*b - *a).cross(*c - *a);
        let length = normal.magnitude();
        if face.a == face.b || face.b == face.c || face.c == face.a || length <= F::zero() {
            degenerate_faces += 1;
            continue;
        }

        convexity_violations += points
            .iter()
            .enumerate()
            .filter(|&(i, _)| !face.contains_vertex(i as i64))
            .filter(|&(_, p)| (*p - *a).dot(normal) / length > tolerance)
            .count();
    }

    let unmatched_edges = directed
        .iter()
        .filter(|&(&(u, v), &count)| count != 1 || directed.get(&(v, u)) != Some(&1))
        .count();

    let undirected: HashSet<(i64, i64)> = directed
        .keys()
        .map(|&(u, v)| (u.min(v), u.max(v)))
        .collect();

    let num_vertices = vertices.len();
    let num_edges = undirected.len();
    let num_faces = faces.len();

    HullReport {
        num_vertices,
        num_edges,
        num_faces,
        euler_characteristic: num_vertices as i64 - num_edges as i64 + num_faces as i64,
        unmatched_edges,
        degenerate_faces,
        unknown_vertices,
        convexity_violations,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tetrahedron() -> Vec<Point3<f64>> {
        vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(1.0, 0.0, 0.0),
            Point3::new(0.0, 1.0, 0.0),
            Point3::new(0.0, 0.0, 1.0),
        ]
    }

    fn tetrahedron_faces() -> Vec<Face> {
        vec![
            Face::new(0, 1, 3),
            Face::new(0, 2, 1),
            Face::new(0, 3, 2),
            Face::new(1, 2, 3),
        ]
    }

    #[test]
    fn test_valid_tetrahedron() {
        let report = validate(&tetrahedron(), &tetrahedron_faces(), 1e-12);
        assert_eq!(report.num_vertices, 4);
        assert_eq!(report.num_edges, 6);
        assert_eq!(report.num_faces, 4);
        assert_eq!(report.euler_characteristic, 2);
        assert!(report.is_valid());
        assert_eq!(report.summary(), "Valid");
    }

    #[test]
    fn test_inward_faces_violate_convexity() {
        let flipped: Vec<Face> = tetrahedron_faces().into_iter().map(Face::reversed).collect();
        let report = validate(&tetrahedron(), &flipped, 1e-12);
        assert!(report.is_closed());
        assert_eq!(report.convexity_violations, 4);
    }

    #[test]
    fn test_missing_face_is_open() {
        let faces = &tetrahedron_faces()[..3];
        let report = validate(&tetrahedron(), faces, 1e-12);
        assert!(!report.is_closed());
        assert_eq!(report.unmatched_edges, 3);
        assert_eq!(report.euler_characteristic, 1);
    }

    #[test]
    fn test_point_outside_hull() {
        let mut points = tetrahedron();
        points.push(Point3::new(1.0, 1.0, 1.0));
        let report = validate(&points, &tetrahedron_faces(), 1e-12);
        assert!(report.is_closed());
        assert!(!report.is_convex());
        assert_eq!(report.convexity_violations, 1);
    }

    #[test]
    fn test_unknown_and_degenerate_vertices() {
        let faces = vec![Face::new(-1, 0, 1), Face::new(0, 1, 1)];
        let report = validate(&tetrahedron(), &faces, 1e-12);
        assert_eq!(report.unknown_vertices, 1);
        assert_eq!(report.degenerate_faces, 1);
        assert!(report.summary().contains("unknown"));
    }

    #[test]
    fn test_empty_faces() {
        let report = validate(&tetrahedron(), &[], 1e-12);
        assert!(!report.is_closed());
        assert!(report.summary().contains("no faces"));
    }
}
