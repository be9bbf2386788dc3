//! kinetic-hull - Divide-and-conquer 3D convex hulls
//!
//! Computes the convex hull of a 3D point set in O(n log n) with a kinetic
//! merge, and reuses the lower hull of sites lifted onto a paraboloid for
//! Delaunay triangulations and bounded Voronoi cell statistics.
//!
//! # Example
//!
//! ```
//! use kinetic_hull::{convex_hull_3d, Point3};
//!
//! let points: Vec<Point3<f64>> = vec![
//!     Point3::new(0.0, 0.0, 0.0),
//!     Point3::new(1.0, 0.2, 0.1),
//!     Point3::new(0.3, 1.1, 0.2),
//!     Point3::new(0.4, 0.3, 1.3),
//! ];
//!
//! for face in convex_hull_3d(&points) {
//!     println!("{face}");
//! }
//! ```

pub mod error;
pub mod hull;
pub mod io;
pub mod primitives;
pub mod triangulation;

pub use error::HullError;
pub use hull::{convex_hull_3d, convex_hull_3d_with, Face, HullConfig, LabeledPoint};
pub use primitives::{Point2, Point3, Vec2, Vec3};
pub use triangulation::{delaunay_triangulation, mean_voronoi_sides, Triangle};
