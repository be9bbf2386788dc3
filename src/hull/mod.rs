//! Three-dimensional convex hulls by divide and conquer.
//!
//! The lower hull is built with a kinetic merge: each half of the x-sorted
//! input is reduced to a *movie* of a 2D hull evolving over time, the two
//! movies are merged in one linear pass over their events, and the final
//! movie is replayed to read off one face per event. The upper hull is the
//! lower hull of the input reflected through `z = 0`, and the full hull is
//! the union of both.
//!
//! The construction runs in `O(n log n)` time and `O(n)` space. Inputs must
//! be in general position; see [`HullConfig::perturbed`] for inputs that are
//! not.
//!
//! # Example
//!
//! ```
//! use kinetic_hull::hull::convex_hull_3d;
//! use kinetic_hull::Point3;
//!
//! let points: Vec<Point3<f64>> = vec![
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 0.2, 0.1),
//!     Point3::new(0.3, 1.1, 0.2),
//!     Point3::new(0.4, 0.3, 1.3),
//!     Point3::new(0.5, 0.4, 0.45), // Interior point
//! ];
//!
//! let faces = convex_hull_3d(&points);
//!
//! // A tetrahedron; the interior point is not on any face
//! assert_eq!(faces.len(), 4);
//! assert!(faces.iter().all(|f| !f.contains_vertex(4)));
//! ```

mod bridge;
mod config;
mod divide;
mod face;
mod merge;
mod predicates;
mod validate;
mod vertex;

pub use config::{HullConfig, DEFAULT_JITTER, DEFAULT_ROTATION};
pub use face::Face;
pub use validate::{validate, HullReport};

use crate::primitives::Point3;
use divide::{lower_hull_movie, split_order};
use face::extract_faces;
use num_traits::Float;
use vertex::Boundary;

/// A point together with the identity reported in output faces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LabeledPoint<F> {
    /// Coordinates
    pub point: Point3<F>,
    /// Caller-assigned identity
    pub id: i64,
}

impl<F> LabeledPoint<F> {
    /// Creates a labeled point.
    #[inline]
    pub fn new(point: Point3<F>, id: i64) -> Self {
        Self { point, id }
    }
}

/// Labels `points` with their positions `0..n`.
pub fn label_points<F: Copy>(points: &[Point3<F>]) -> Vec<LabeledPoint<F>> {
    points
        .iter()
        .enumerate()
        .map(|(i, &point)| LabeledPoint::new(point, i as i64))
        .collect()
}

/// Computes the lower hull: faces whose outward normal points to `-z`.
///
/// Faces are canonical and sorted.
///
/// # Example
///
/// ```
/// use kinetic_hull::hull::{lower_hull, label_points, Face, HullConfig};
/// use kinetic_hull::Point3;
///
/// let points = label_points(&[
///     Point3::new(0.0_f64, 0.0, 0.0),
///     Point3::new(1.0, 1.0, 0.2),
///     Point3::new(2.0, 0.0, 0.1),
/// ]);
///
/// let faces = lower_hull(&points, &HullConfig::default());
/// assert_eq!(faces, vec![Face::new(0, 1, 2)]);
/// ```
pub fn lower_hull<F: Float>(points: &[LabeledPoint<F>], config: &HullConfig<F>) -> Vec<Face> {
    let sorted = prepare(points, config);
    let mut faces = lower_faces(sorted, config.epsilon);
    faces.sort();

    tracing::debug!(points = points.len(), faces = faces.len(), "built lower hull");
    faces
}

/// Computes the upper hull: faces whose outward normal points to `+z`.
///
/// Faces are canonical and sorted.
pub fn upper_hull<F: Float>(points: &[LabeledPoint<F>], config: &HullConfig<F>) -> Vec<Face> {
    let sorted = prepare(points, config);
    let mut faces = upper_faces(sorted, config.epsilon);
    faces.sort();

    tracing::debug!(points = points.len(), faces = faces.len(), "built upper hull");
    faces
}

/// Computes every face of the convex hull: the lower hull followed by the
/// upper hull, merged into one sorted list.
pub fn hull<F: Float>(points: &[LabeledPoint<F>], config: &HullConfig<F>) -> Vec<Face> {
    let sorted = prepare(points, config);
    let mut faces = lower_faces(sorted.clone(), config.epsilon);
    let lower = faces.len();
    faces.extend(upper_faces(sorted, config.epsilon));
    faces.sort();

    tracing::debug!(
        points = points.len(),
        lower,
        upper = faces.len() - lower,
        "built convex hull"
    );
    faces
}

/// Computes the convex hull of `points`, using input positions as identities.
///
/// Uses the default [`HullConfig`], so the input must be in general position.
pub fn convex_hull_3d<F: Float>(points: &[Point3<F>]) -> Vec<Face> {
    convex_hull_3d_with(points, &HullConfig::default())
}

/// Computes the convex hull of `points` with explicit settings, using input
/// positions as identities.
///
/// # Example
///
/// ```
/// use kinetic_hull::hull::{convex_hull_3d_with, HullConfig};
/// use kinetic_hull::Point3;
///
/// // Unit cube: every face is a coplanar quad
/// let mut cube = Vec::new();
/// for x in [0.0_f64, 1.0] {
///     for y in [0.0, 1.0] {
///         for z in [0.0, 1.0] {
///             cube.push(Point3::new(x, y, z));
///         }
///     }
/// }
///
/// let faces = convex_hull_3d_with(&cube, &HullConfig::perturbed());
/// assert_eq!(faces.len(), 12);
/// ```
pub fn convex_hull_3d_with<F: Float>(points: &[Point3<F>], config: &HullConfig<F>) -> Vec<Face> {
    hull(&label_points(points), config)
}

/// Applies the configured perturbation and sorts into split-axis order.
fn prepare<F: Float>(points: &[LabeledPoint<F>], config: &HullConfig<F>) -> Vec<(Point3<F>, i64)> {
    let coords: Vec<Point3<F>> = points.iter().map(|p| p.point).collect();
    let coords = if config.perturbs() {
        config.perturb(&coords)
    } else {
        coords
    };

    let mut sorted: Vec<(Point3<F>, i64)> = coords
        .into_iter()
        .zip(points.iter().map(|p| p.id))
        .collect();
    sorted.sort_by(|a, b| split_order(&a.0, &b.0, config.epsilon));
    sorted
}

fn lower_faces<F: Float>(sorted: Vec<(Point3<F>, i64)>, eps: F) -> Vec<Face> {
    let mut boundary = Boundary::new(sorted);
    let movie = lower_hull_movie(&mut boundary, eps);
    extract_faces(&mut boundary, &movie)
}

fn upper_faces<F: Float>(sorted: Vec<(Point3<F>, i64)>, eps: F) -> Vec<Face> {
    let reflected = sorted.into_iter().map(|(p, id)| (p.reflect_z(), id));
    let mut boundary = Boundary::new(reflected);
    let movie = lower_hull_movie(&mut boundary, eps);

    // Reflection mirrors orientation; flip back so normals point up and out.
    extract_faces(&mut boundary, &movie)
        .into_iter()
        .map(Face::reversed)
        .collect()
}
