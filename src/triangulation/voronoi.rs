//! Bounded Voronoi cell statistics.
//!
//! A Voronoi cell is bounded exactly when its site is strictly inside the
//! convex hull of all sites, and then it has one side per Delaunay triangle
//! around the site. Both facts are read off a single lower hull of the
//! lifted sites, extended by two sentinel sites far outside the input. A
//! triangle that touches a sentinel marks every one of its sites as having
//! an unbounded cell.
//!
//! # Example
//!
//! ```
//! use kinetic_hull::triangulation::mean_voronoi_sides;
//! use kinetic_hull::Point2;
//!
//! // One site surrounded by a triangle of three
//! let sites: Vec<Point2<f64>> = vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(4.0, 0.1),
//!     Point2::new(1.9, 3.5),
//!     Point2::new(2.1, 1.2),
//! ];
//!
//! assert_eq!(mean_voronoi_sides(&sites), 3.0);
//! ```

use crate::hull::{lower_hull, Face, HullConfig, LabeledPoint};
use crate::primitives::{Point2, Point3};
use num_traits::Float;
use std::collections::HashSet;

/// Distance of the sentinel sites from the origin along each axis.
pub const SENTINEL_FAR: f64 = 1e10;

/// Offset that keeps the two sentinels off a common line with the origin.
pub const SENTINEL_SKEW: f64 = 100.0;

/// Identities of the two sentinel sites.
pub const SENTINEL_IDS: [i64; 2] = [-1, -2];

/// A bounded Voronoi cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VoronoiCell {
    /// Index of the site this cell belongs to.
    pub site: usize,
    /// Number of cell sides (and vertices).
    pub sides: usize,
}

/// Lifted sentinel sites, already on the paraboloid.
fn sentinels<F: Float>() -> [LabeledPoint<F>; 2] {
    let far = F::from(SENTINEL_FAR).unwrap();
    let skew = F::from(SENTINEL_SKEW).unwrap();
    let z = far * far + far * far;

    [
        LabeledPoint::new(Point3::new(far, -far + skew, z), SENTINEL_IDS[0]),
        LabeledPoint::new(Point3::new(-far, far - skew, z), SENTINEL_IDS[1]),
    ]
}

/// Lower hull faces of the lifted sites plus sentinels, and the set of
/// identities whose cells are unbounded.
fn classify<F: Float>(sites: &[Point2<F>]) -> (Vec<Face>, HashSet<i64>, usize) {
    let mut lifted: Vec<LabeledPoint<F>> = sites
        .iter()
        .enumerate()
        .map(|(i, site)| LabeledPoint::new(site.lift(), i as i64))
        .collect();
    lifted.extend(sentinels());

    let faces = lower_hull(&lifted, &HullConfig::default());

    let unbounded: HashSet<i64> = faces
        .iter()
        .filter(|face| face.vertices().iter().any(|&id| id < 0))
        .flat_map(|face| face.vertices())
        .collect();

    (faces, unbounded, lifted.len())
}

/// Returns every bounded Voronoi cell of `sites`, ordered by site index.
///
/// # Example
///
/// ```
/// use kinetic_hull::triangulation::{bounded_cells, VoronoiCell};
/// use kinetic_hull::Point2;
///
/// let sites: Vec<Point2<f64>> = vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(4.0, 0.1),
///     Point2::new(1.9, 3.5),
///     Point2::new(2.1, 1.2),
/// ];
///
/// assert_eq!(bounded_cells(&sites), vec![VoronoiCell { site: 3, sides: 3 }]);
/// ```
pub fn bounded_cells<F: Float>(sites: &[Point2<F>]) -> Vec<VoronoiCell> {
    let (faces, unbounded, _) = classify(sites);
    if faces.is_empty() {
        return Vec::new();
    }

    let mut sides = vec![0usize; sites.len()];
    for id in faces.iter().flat_map(|face| face.vertices()) {
        if let Ok(site) = usize::try_from(id) {
            sides[site] += 1;
        }
    }

    sides
        .into_iter()
        .enumerate()
        .filter(|&(site, _)| !unbounded.contains(&(site as i64)))
        .map(|(site, sides)| VoronoiCell { site, sides })
        .collect()
}

/// Computes the mean number of sides over all bounded Voronoi cells.
///
/// Returns zero when no cell is bounded (fewer than four sites, or every
/// site on the convex hull). Sites must be in general position.
///
/// # Example
///
/// ```
/// use kinetic_hull::triangulation::mean_voronoi_sides;
/// use kinetic_hull::Point2;
///
/// // Four sites in convex position: every cell is unbounded
/// let square: Vec<Point2<f64>> = vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(1.0, 0.01),
///     Point2::new(1.02, 1.0),
///     Point2::new(0.03, 1.05),
/// ];
///
/// assert_eq!(mean_voronoi_sides(&square), 0.0);
/// ```
pub fn mean_voronoi_sides<F: Float>(sites: &[Point2<F>]) -> F {
    let (faces, unbounded, total) = classify(sites);
    if faces.is_empty() {
        return F::zero();
    }

    let incidences = faces
        .iter()
        .flat_map(|face| face.vertices())
        .filter(|id| !unbounded.contains(id))
        .count();
    let bounded = total - unbounded.len();

    tracing::debug!(
        sites = sites.len(),
        faces = faces.len(),
        bounded,
        incidences,
        "classified voronoi cells"
    );

    if bounded == 0 {
        return F::zero();
    }
    F::from(incidences).unwrap() / F::from(bounded).unwrap()
}
