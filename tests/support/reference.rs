#![allow(dead_code)]

//! Slow reference implementations used to cross-check the fast ones.

use kinetic_hull::{Face, Point2, Point3, Triangle};

/// Every triple whose plane has all other points strictly on one side.
///
/// O(n⁴); only meant for small inputs in general position.
pub fn brute_force_hull(points: &[Point3<f64>]) -> Vec<Face> {
    let n = points.len();
    let mut faces = Vec::new();

    for i in 0..n {
        for j in i + 1..n {
            for k in j + 1..n {
                let (a, b, c) = (points[i], points[j], points[k]);
                let normal = (b - a).cross(c - a);

                let sides: Vec<f64> = (0..n)
                    .filter(|&m| m != i && m != j && m != k)
                    .map(|m| (points[m] - a).dot(normal))
                    .collect();

                if sides.iter().all(|&d| d < 0.0) {
                    faces.push(Face::new(i as i64, j as i64, k as i64).canonical());
                } else if sides.iter().all(|&d| d > 0.0) {
                    faces.push(Face::new(i as i64, k as i64, j as i64).canonical());
                }
            }
        }
    }

    faces.sort();
    faces
}

fn orient(a: Point2<f64>, b: Point2<f64>, c: Point2<f64>) -> f64 {
    (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x)
}

/// Classic 3x3 in-circle determinant; positive inside a CCW triangle.
fn incircle(p: Point2<f64>, a: Point2<f64>, b: Point2<f64>, c: Point2<f64>) -> f64 {
    let (ax, ay) = (a.x - p.x, a.y - p.y);
    let (bx, by) = (b.x - p.x, b.y - p.y);
    let (cx, cy) = (c.x - p.x, c.y - p.y);
    let (aa, bb, cc) = (ax * ax + ay * ay, bx * bx + by * by, cx * cx + cy * cy);
    ax * (by * cc - cy * bb) - ay * (bx * cc - cx * bb) + aa * (bx * cy - cx * by)
}

/// Every triangle with an empty circumcircle, counter-clockwise and sorted.
pub fn brute_force_delaunay(sites: &[Point2<f64>]) -> Vec<Triangle> {
    let n = sites.len();
    let mut triangles = Vec::new();

    for i in 0..n {
        for j in i + 1..n {
            for k in j + 1..n {
                let (a, b, c) = if orient(sites[i], sites[j], sites[k]) > 0.0 {
                    (i, j, k)
                } else {
                    (i, k, j)
                };
                if orient(sites[a], sites[b], sites[c]) == 0.0 {
                    continue;
                }

                let empty = (0..n)
                    .filter(|&m| m != i && m != j && m != k)
                    .all(|m| incircle(sites[m], sites[a], sites[b], sites[c]) < 0.0);
                if empty {
                    triangles.push(Triangle::new(a, b, c));
                }
            }
        }
    }

    triangles.sort();
    triangles
}

/// Returns `true` if `site` lies on the convex hull of `sites`.
pub fn on_convex_hull(sites: &[Point2<f64>], site: usize) -> bool {
    if sites.len() < 3 {
        return true;
    }
    (0..sites.len()).filter(|&j| j != site).any(|j| {
        (0..sites.len())
            .filter(|&k| k != site && k != j)
            .all(|k| orient(sites[site], sites[j], sites[k]) >= 0.0)
    })
}

/// Bounded cells as `(site, sides)` pairs: interior sites and their number of
/// incident Delaunay triangles.
pub fn brute_force_bounded_cells(sites: &[Point2<f64>]) -> Vec<(usize, usize)> {
    let triangles = brute_force_delaunay(sites);
    (0..sites.len())
        .filter(|&i| !on_convex_hull(sites, i))
        .map(|i| (i, triangles.iter().filter(|t| t.contains_vertex(i)).count()))
        .collect()
}
