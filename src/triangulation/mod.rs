//! Planar triangulations and Voronoi statistics derived from the 3D hull.
//!
//! Both are computed from the lower convex hull of sites lifted onto the
//! paraboloid `z = x² + y²`.

mod delaunay;
mod voronoi;

pub use delaunay::{delaunay_triangulation, delaunay_triangulation_with, in_circumcircle, Triangle};
pub use voronoi::{
    bounded_cells, mean_voronoi_sides, VoronoiCell, SENTINEL_FAR, SENTINEL_IDS, SENTINEL_SKEW,
};
