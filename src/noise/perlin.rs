// src/noise/perlin.rs

use crate::noise::{PermutationTable, TABLE_SIZE};
use crate::utils::util::{lerp, smoothstep};
use crate::utils::Vector2D;

/// Axis and diagonal directions, picked by the low three bits of a corner hash.
pub const GRADIENTS: [Vector2D; 8] = [
    Vector2D::new(1.0, 0.0),
    Vector2D::new(-1.0, 0.0),
    Vector2D::new(0.0, 1.0),
    Vector2D::new(0.0, -1.0),
    Vector2D::new(1.0, 1.0),
    Vector2D::new(1.0, -1.0),
    Vector2D::new(-1.0, 1.0),
    Vector2D::new(-1.0, -1.0),
];

const MASK: i64 = TABLE_SIZE as i64 - 1;

#[inline]
fn corner_dot(table: &PermutationTable, cx: usize, cy: usize, dx: f64, dy: f64) -> f64 {
    let gradient = &GRADIENTS[(table.hash(cx, cy) & 7) as usize];
    gradient.dot(&Vector2D::new(dx, dy))
}

/// Sample 2-D gradient noise at `(x, y)`. The result lies in `[-1, 1]` and is
/// exactly zero on integer lattice points.
pub fn gradient_noise(table: &PermutationTable, x: f64, y: f64) -> f64 {
    let x0 = x.floor();
    let y0 = y.floor();
    let xf = x - x0;
    let yf = y - y0;

    // Lattice cell reduced into the table; +1 stays within the doubled half.
    let xi = (x0 as i64 & MASK) as usize;
    let yi = (y0 as i64 & MASK) as usize;

    let d00 = corner_dot(table, xi, yi, xf, yf);
    let d10 = corner_dot(table, xi + 1, yi, xf - 1.0, yf);
    let d01 = corner_dot(table, xi, yi + 1, xf, yf - 1.0);
    let d11 = corner_dot(table, xi + 1, yi + 1, xf - 1.0, yf - 1.0);

    let u = smoothstep(xf);
    let v = smoothstep(yf);

    let bottom = lerp(u, d00, d10);
    let top = lerp(u, d01, d11);
    lerp(v, bottom, top).clamp(-1.0, 1.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::util::to_unit_range;
    use assert_approx_eq::assert_approx_eq;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn table(seed: u64) -> PermutationTable {
        PermutationTable::from_rng(&mut StdRng::seed_from_u64(seed))
    }

    #[test]
    fn test_noise_range_over_many_periods() {
        let table = table(3);
        let mut rng = StdRng::seed_from_u64(11);
        let mut saw_positive = false;
        let mut saw_negative = false;

        for _ in 0..10_000 {
            let x = rng.random_range(-600.0..600.0);
            let y = rng.random_range(-600.0..600.0);
            let value = gradient_noise(&table, x, y);
            assert!((-1.0..=1.0).contains(&value), "{} at ({}, {})", value, x, y);
            let unit = to_unit_range(value);
            assert!((0.0..=1.0).contains(&unit));
            saw_positive |= value > 0.1;
            saw_negative |= value < -0.1;
        }

        assert!(saw_positive && saw_negative);
    }

    #[test]
    fn test_zero_on_lattice_points() {
        let table = table(8);
        for (x, y) in [(0.0, 0.0), (3.0, 7.0), (-12.0, 255.0), (256.0, 512.0)] {
            assert_approx_eq!(gradient_noise(&table, x, y), 0.0);
        }
    }

    #[test]
    fn test_noise_is_continuous() {
        let table = table(21);
        let mut x = 0.0;
        while x < 20.0 {
            let a = gradient_noise(&table, x, 4.37);
            let b = gradient_noise(&table, x + 0.001, 4.37);
            assert!((a - b).abs() < 0.01, "jump at x = {}", x);
            x += 0.05;
        }
    }

    #[test]
    fn test_noise_wraps_with_table_period() {
        let table = table(4);
        let a = gradient_noise(&table, 1.3, 2.7);
        let b = gradient_noise(&table, 1.3 + TABLE_SIZE as f64, 2.7 - TABLE_SIZE as f64);
        assert_approx_eq!(a, b);
    }

    #[test]
    fn test_noise_is_deterministic_for_a_table() {
        let a = table(17);
        let b = table(17);
        for i in 0..100 {
            let (x, y) = (i as f64 * 0.37, i as f64 * 0.11);
            assert_eq!(gradient_noise(&a, x, y), gradient_noise(&b, x, y));
        }
    }
}
