//! Seeding nucleons and shaped inclusions onto a grid.
//!
//! Every sampling operation threads an explicit [`Rng`], and the value
//! and center generators take the same generator as an argument, so a
//! seeded run reproduces cell for cell.

use crate::grid::{Coord, Grid};
use rand::Rng;

/// Up to 100 position draws per seed point before it is dropped.
const SEED_ATTEMPTS: usize = 100;

/// Scatters up to `count` seed points over unoccupied cells.
///
/// Each point draws positions within the nominal extent until it finds
/// an unoccupied one, then stores a value from `value`. A point that
/// exhausts its draws on a crowded grid is dropped silently, so fewer
/// than `count` cells may appear; the call never fails on saturation.
pub fn seed_points<V, R, F>(grid: &mut Grid<V>, count: usize, rng: &mut R, mut value: F)
where
    V: Clone,
    R: Rng + ?Sized,
    F: FnMut(&mut R) -> V,
{
    for _ in 0..count {
        for _ in 0..SEED_ATTEMPTS {
            let (x, y) = grid.random_position(rng);
            if !grid.is_occupied(x, y) {
                let seed = value(rng);
                grid.set(x, y, seed);
                break;
            }
        }
    }
}

/// Stamps `count` filled squares of side `size`, anchored at positions
/// drawn from `at`.
///
/// Stamps overwrite whatever they cover and may run past the nominal
/// extent; those cells are stored all the same.
pub fn seed_squares<V, R, F>(
    grid: &mut Grid<V>,
    count: usize,
    size: i32,
    value: V,
    rng: &mut R,
    mut at: F,
) where
    V: Clone,
    R: Rng + ?Sized,
    F: FnMut(&mut R) -> Coord,
{
    for _ in 0..count {
        let (x0, y0) = at(rng);
        for x in x0..x0 + size {
            for y in y0..y0 + size {
                grid.set(x, y, value.clone());
            }
        }
    }
}

/// Stamps `count` filled circles of diameter `size` around centers
/// drawn from `center`.
///
/// A cell belongs to the circle when its squared distance to the center
/// is within the squared radius. Like squares, circles overwrite and
/// may leak past the extent.
pub fn seed_circles<V, R, F>(
    grid: &mut Grid<V>,
    count: usize,
    size: i32,
    value: V,
    rng: &mut R,
    mut center: F,
) where
    V: Clone,
    R: Rng + ?Sized,
    F: FnMut(&mut R) -> Coord,
{
    let radius = size as f64 / 2.0;
    let r2 = radius * radius;
    for _ in 0..count {
        let (x0, y0) = center(rng);
        let x_lo = (x0 as f64 - radius).floor() as i32;
        let x_hi = (x0 as f64 + radius).ceil() as i32;
        let y_lo = (y0 as f64 - radius).floor() as i32;
        let y_hi = (y0 as f64 + radius).ceil() as i32;
        for x in x_lo..x_hi {
            for y in y_lo..y_hi {
                let dx = (x - x0) as f64;
                let dy = (y - y0) as f64;
                if dx * dx + dy * dy <= r2 {
                    grid.set(x, y, value.clone());
                }
            }
        }
    }
}
