#![allow(dead_code)]

use kinetic_hull::{Point2, Point3};
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::collections::HashSet;
use std::f64::consts::PI;

/// Generate points uniformly distributed in the cube `[-1, 1]³`.
pub fn random_cube_points(n: usize, seed: u64) -> Vec<Point3<f64>> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            Point3::new(
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
                rng.gen_range(-1.0..1.0),
            )
        })
        .collect()
}

/// Generate random points on the unit sphere; every one is a hull vertex.
pub fn random_sphere_points(n: usize, seed: u64) -> Vec<Point3<f64>> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            let z: f64 = rng.gen_range(-1.0..1.0);
            let theta: f64 = rng.gen_range(0.0..2.0 * PI);
            let r = (1.0 - z * z).sqrt();
            Point3::new(r * theta.cos(), r * theta.sin(), z)
        })
        .collect()
}

/// Generate up to `n` distinct integer points in `[-extent, extent]³`.
///
/// Lattice points are full of collinear triples and coplanar quadruples.
pub fn random_grid_points(n: usize, extent: i32, seed: u64) -> Vec<Point3<f64>> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let mut seen = HashSet::new();
    let mut out = Vec::with_capacity(n);
    for _ in 0..n {
        let key = (
            rng.gen_range(-extent..=extent),
            rng.gen_range(-extent..=extent),
            rng.gen_range(-extent..=extent),
        );
        if seen.insert(key) {
            out.push(Point3::new(key.0 as f64, key.1 as f64, key.2 as f64));
        }
    }
    out
}

/// Generate random planar sites in `[lo, hi)²`.
pub fn random_sites(n: usize, lo: f64, hi: f64, seed: u64) -> Vec<Point2<f64>> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n)
        .map(|_| Point2::new(rng.gen_range(lo..hi), rng.gen_range(lo..hi)))
        .collect()
}

/// Corners of the unit cube.
pub fn unit_cube() -> Vec<Point3<f64>> {
    let mut out = Vec::with_capacity(8);
    for x in [0.0, 1.0] {
        for y in [0.0, 1.0] {
            for z in [0.0, 1.0] {
                out.push(Point3::new(x, y, z));
            }
        }
    }
    out
}
