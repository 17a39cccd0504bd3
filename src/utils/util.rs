//! # Utility Module
//!
//! Small numeric helpers shared by the noise field and the generator stages.
//!
//! ## Example Function: `smoothstep`
//!
//! The `smoothstep` function is the quintic ease `t³(6t² − 15t + 10)`. Its first
//! and second derivatives vanish at 0 and 1, which is what keeps interpolated
//! noise free of grid-aligned seams.

/// Linear interpolation from `a` (at `t = 0`) to `b` (at `t = 1`).
pub fn lerp(t: f64, a: f64, b: f64) -> f64 {
    a + t * (b - a)
}

/// Quintic ease curve on `[0, 1]`.
///
/// ```
/// use mine_gen::utils::util::smoothstep;
///
/// assert_eq!(smoothstep(0.0), 0.0);
/// assert_eq!(smoothstep(0.5), 0.5);
/// assert_eq!(smoothstep(1.0), 1.0);
/// ```
pub fn smoothstep(t: f64) -> f64 {
    t * t * t * (t * (t * 6.0 - 15.0) + 10.0)
}

/// Maps a value from `[-1, 1]` onto `[0, 1]`.
pub fn to_unit_range(value: f64) -> f64 {
    (value + 1.0) * 0.5
}
