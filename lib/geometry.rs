//! Distance primitives shared by the neighbor search and the hopping model.
//!
//! Everything here is a pure function of its arguments; minimum-image
//! correction returns a fresh displacement and never touches the canonical
//! position store. Squared distances are used throughout so the square root
//! is deferred until an amplitude value is actually needed.

use crate::lattice::Boundary;

/// Squared Euclidean distance between two positions.
pub fn distance2(xi: [f64; 3], xj: [f64; 3]) -> f64 {
    let dx: f64 = xj[0] - xi[0];
    let dy: f64 = xj[1] - xi[1];
    let dz: f64 = xj[2] - xi[2];
    dx * dx + dy * dy + dz * dz
}

/// Displacement `xj - xi` under the minimum-image convention for a periodic
/// box of dimensions `len_x` x `len_y` (periodic in x and y only).
///
/// An axis whose absolute displacement exceeds half the box length is folded
/// by one box length toward the nearer image.
pub fn min_image_delta(
    xi: [f64; 3],
    xj: [f64; 3],
    len_x: f64,
    len_y: f64,
) -> [f64; 3]
{
    let mut dx: f64 = xj[0] - xi[0];
    let mut dy: f64 = xj[1] - xi[1];
    let dz: f64 = xj[2] - xi[2];
    if dx.abs() > len_x / 2.0 { dx -= len_x * dx.signum(); }
    if dy.abs() > len_y / 2.0 { dy -= len_y * dy.signum(); }
    [dx, dy, dz]
}

/// Squared separation of two sites under the given boundary conditions.
///
/// This is the single distance routine behind both the neighbor search and
/// the hopping amplitude, so their cutoff tests cannot diverge.
pub fn separation2(boundary: &Boundary, xi: [f64; 3], xj: [f64; 3]) -> f64 {
    match boundary {
        Boundary::Open => distance2(xi, xj),
        Boundary::Periodic { len_x, len_y } => {
            let d = min_image_delta(xi, xj, *len_x, *len_y);
            d[0] * d[0] + d[1] * d[1] + d[2] * d[2]
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS: f64 = 1e-12;

    #[test]
    fn distance2_is_squared_norm() {
        let xi = [0.0, 0.0, 0.0];
        let xj = [1.0, 2.0, 2.0];
        assert!((distance2(xi, xj) - 9.0).abs() < EPS);
    }

    #[test]
    fn min_image_folds_only_past_half_box() {
        // within half the box: untouched
        let d = min_image_delta([0.0; 3], [2.0, 0.0, 0.0], 10.0, 10.0);
        assert!((d[0] - 2.0).abs() < EPS);

        // past half the box: folded to the nearer image
        let d = min_image_delta([0.0; 3], [9.0, 0.0, 0.0], 10.0, 10.0);
        assert!((d[0] - (-1.0)).abs() < EPS);

        // negative displacement folds the other way
        let d = min_image_delta([9.0, 0.0, 0.0], [0.0; 3], 10.0, 10.0);
        assert!((d[0] - 1.0).abs() < EPS);
    }

    #[test]
    fn z_axis_is_never_folded() {
        let d = min_image_delta([0.0; 3], [0.0, 0.0, 9.0], 10.0, 10.0);
        assert!((d[2] - 9.0).abs() < EPS);
    }

    #[test]
    fn separation2_matches_boundary() {
        let xi = [0.5, 0.5, 0.0];
        let xj = [9.5, 0.5, 0.0];
        let open = separation2(&Boundary::Open, xi, xj);
        assert!((open - 81.0).abs() < EPS);
        let pbc
            = separation2(
                &Boundary::Periodic { len_x: 10.0, len_y: 10.0 }, xi, xj);
        assert!((pbc - 1.0).abs() < EPS);
    }

    #[test]
    fn separation_leaves_inputs_untouched() {
        let xi = [0.0, 0.0, 0.0];
        let xj = [9.0, 9.0, 0.0];
        let _ = separation2(
            &Boundary::Periodic { len_x: 10.0, len_y: 10.0 }, xi, xj);
        assert_eq!(xj, [9.0, 9.0, 0.0]);
    }
}
