use num_traits::Float;

pub fn norm_squared(v: &[f64; 3]) -> f64 {
    v[0] * v[0] + v[1] * v[1] + v[2] * v[2]
}

/// Fold `x` into the half-open interval `[-length/2, length/2)`.
///
/// This is the periodic primitive behind both the boundary wrap of atom
/// coordinates and the minimum-image displacement between two atoms. Values
/// several periods away are folded as well.
///
/// ```rust
/// use ljmd::utils::wrap_centered;
///
/// assert_eq!(wrap_centered(0.25, 2.0), 0.25);
/// assert_eq!(wrap_centered(1.25, 2.0), -0.75);
/// assert_eq!(wrap_centered(-1.25, 2.0), 0.75);
/// assert_eq!(wrap_centered(-1.0, 2.0), -1.0);
/// assert_eq!(wrap_centered(1.0, 2.0), -1.0);
/// ```
pub fn wrap_centered<F: Float>(x: F, length: F) -> F {
    let half = length / (F::one() + F::one());
    if x >= -half && x < half {
        return x;
    }
    let wrapped = x - length * ((x + half) / length).floor();
    // Rounding can land exactly on the open end
    if wrapped >= half {
        wrapped - length
    } else if wrapped < -half {
        wrapped + length
    } else {
        wrapped
    }
}
