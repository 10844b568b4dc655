use crate::core::data::complex::Complex;

/// Squared modulus past which an orbit is known to diverge.
pub const ESCAPE_RADIUS_SQUARED: f64 = 4.0;

/// Runs `z ← z² + add` from `z0` and returns the smoothed escape time.
///
/// An orbit that escapes after the update at (zero-based) iteration `n`
/// yields `n + 1 − log2(log2 |z|)`. An orbit still bounded after
/// `max_iterations` steps yields exactly `max_iterations`, which callers treat
/// as "inside the set".
#[must_use]
pub fn smoothed_escape_time(z0: Complex, add: Complex, max_iterations: u32) -> f64 {
    let mut z = z0;

    for n in 0..max_iterations {
        z = z.square_add(add);

        if z.magnitude_squared() > ESCAPE_RADIUS_SQUARED {
            // |z| > 2 here, so both logarithms are defined
            return f64::from(n) + 1.0 - z.magnitude().log2().log2();
        }
    }

    f64::from(max_iterations)
}
