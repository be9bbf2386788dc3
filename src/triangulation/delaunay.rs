//! Delaunay triangulation by lifting onto a paraboloid.
//!
//! Lifting each site `(x, y)` to `(x, y, x² + y²)` turns the empty
//! circumcircle test into a plane test: a site lies inside the circumcircle
//! of a triangle exactly when its lifted image lies below the plane through
//! the triangle's lifted corners. The Delaunay triangulation is therefore
//! the lower convex hull of the lifted sites, projected back to the plane.
//!
//! # Complexity
//!
//! - Time: O(n log n)
//! - Space: O(n)
//!
//! # Example
//!
//! ```
//! use kinetic_hull::triangulation::delaunay_triangulation;
//! use kinetic_hull::Point2;
//!
//! let points: Vec<Point2<f64>> = vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(1.0, 0.05),
//!     Point2::new(0.45, 1.0),
//!     Point2::new(0.5, 0.3),
//! ];
//!
//! let triangles = delaunay_triangulation(&points);
//!
//! // The interior site splits the outer triangle in three
//! assert_eq!(triangles.len(), 3);
//! for tri in &triangles {
//!     assert!(tri.contains_vertex(3));
//! }
//! ```

use crate::hull::{lower_hull, HullConfig, LabeledPoint};
use crate::primitives::Point2;
use num_traits::Float;

/// A triangle represented by indices into a site array.
///
/// Vertices are stored in counter-clockwise order, smallest index first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Triangle {
    /// First vertex index
    pub a: usize,
    /// Second vertex index
    pub b: usize,
    /// Third vertex index
    pub c: usize,
}

impl Triangle {
    /// Creates a new triangle from vertex indices.
    #[inline]
    pub fn new(a: usize, b: usize, c: usize) -> Self {
        Self { a, b, c }
    }

    /// Returns the three edges of this triangle as pairs of indices.
    #[inline]
    pub fn edges(&self) -> [(usize, usize); 3] {
        [(self.a, self.b), (self.b, self.c), (self.c, self.a)]
    }

    /// Checks if the triangle contains a specific vertex index.
    #[inline]
    pub fn contains_vertex(&self, v: usize) -> bool {
        self.a == v || self.b == v || self.c == v
    }
}

/// Tests if `p` lies strictly inside the circumcircle of the counter-clockwise
/// triangle `a, b, c`.
///
/// Evaluated on the paraboloid: `p` is inside exactly when its lifted image
/// is below the plane through the lifted corners.
///
/// # Example
///
/// ```
/// use kinetic_hull::triangulation::in_circumcircle;
/// use kinetic_hull::Point2;
///
/// let a = Point2::new(0.0_f64, 0.0);
/// let b = Point2::new(1.0, 0.0);
/// let c = Point2::new(0.5, 0.866);
///
/// assert!(in_circumcircle(Point2::new(0.5, 0.29), a, b, c));
/// assert!(!in_circumcircle(Point2::new(10.0, 10.0), a, b, c));
/// ```
pub fn in_circumcircle<F: Float>(p: Point2<F>, a: Point2<F>, b: Point2<F>, c: Point2<F>) -> bool {
    let (p, a, b, c) = (p.lift(), a.lift(), b.lift(), c.lift());
    let normal = (b - a).cross(c - a);
    (p - a).dot(normal) < F::zero()
}

/// Computes the Delaunay triangulation of `sites`.
///
/// Returns an empty vector if fewer than 3 sites are provided. The sites must
/// be in general position: distinct x coordinates, no three collinear and no
/// four cocircular. Use [`delaunay_triangulation_with`] with a jitter for
/// inputs that are not.
///
/// # Example
///
/// ```
/// use kinetic_hull::triangulation::{delaunay_triangulation, Triangle};
/// use kinetic_hull::Point2;
///
/// let points: Vec<Point2<f64>> = vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(1.0, 0.0),
///     Point2::new(0.5, 1.0),
/// ];
///
/// assert_eq!(delaunay_triangulation(&points), vec![Triangle::new(0, 1, 2)]);
/// ```
pub fn delaunay_triangulation<F: Float>(sites: &[Point2<F>]) -> Vec<Triangle> {
    delaunay_triangulation_with(sites, &HullConfig::default())
}

/// Computes the Delaunay triangulation of `sites` with explicit settings.
///
/// `config.epsilon` and `config.jitter` are honoured. `config.rotation` is
/// ignored, since tilting the lifted sites would tilt the direction that
/// defines the lower hull.
///
/// # Example
///
/// ```
/// use kinetic_hull::hull::HullConfig;
/// use kinetic_hull::triangulation::delaunay_triangulation_with;
/// use kinetic_hull::Point2;
///
/// // Square with center point: four cocircular corners
/// let points: Vec<Point2<f64>> = vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(1.0, 0.0),
///     Point2::new(1.0, 1.0),
///     Point2::new(0.0, 1.0),
///     Point2::new(0.5, 0.5),
/// ];
///
/// let config = HullConfig::default().with_jitter(1e-8);
/// assert_eq!(delaunay_triangulation_with(&points, &config).len(), 4);
/// ```
pub fn delaunay_triangulation_with<F: Float>(
    sites: &[Point2<F>],
    config: &HullConfig<F>,
) -> Vec<Triangle> {
    if sites.len() < 3 {
        return Vec::new();
    }

    let lifted: Vec<LabeledPoint<F>> = sites
        .iter()
        .enumerate()
        .map(|(i, site)| LabeledPoint::new(site.lift(), i as i64))
        .collect();

    let config = HullConfig {
        rotation: None,
        ..*config
    };

    // Lower faces wind clockwise seen from above; reverse them.
    let mut triangles: Vec<Triangle> = lower_hull(&lifted, &config)
        .into_iter()
        .map(|face| {
            let [a, b, c] = face.reversed().vertices().map(|id| id as usize);
            Triangle::new(a, b, c)
        })
        .collect();
    triangles.sort();
    triangles
}
