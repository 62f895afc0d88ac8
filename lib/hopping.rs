//! Hopping amplitudes between coupled sites.
//!
//! Only shell 0 carries a hopping rule: Harrison's rule, t · (d_cc / r)³,
//! with r the minimum-image-corrected inter-site distance. The cutoff test
//! here runs through the same [`separation2`][crate::geometry::separation2]
//! routine as the neighbor search, so a pair accepted by the search can
//! never fail the amplitude's cutoff re-check.

use crate::{
    geometry::separation2,
    lattice::{ Boundary, Lattice },
};

/// Shell-0 hopping amplitude model.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct HoppingModel {
    d_cc: f64,
    r_cut2: f64,
    t: f64,
    boundary: Boundary,
}

impl HoppingModel {
    /// Build the model from a lattice's shell-0 parameters and boundary.
    pub fn shell0(lattice: &Lattice) -> Self {
        let sh = lattice.shell(0);
        Self {
            d_cc: sh.d_cc,
            r_cut2: sh.r_cut * sh.r_cut,
            t: sh.t,
            boundary: *lattice.boundary(),
        }
    }

    /// Amplitude between two positions, or `None` if their separation fails
    /// the shell-0 cutoff.
    pub fn amplitude(&self, xi: [f64; 3], xj: [f64; 3]) -> Option<f64> {
        let r2 = separation2(&self.boundary, xi, xj);
        (r2 < self.r_cut2)
            .then(|| self.t * (self.d_cc / r2.sqrt()).powi(3))
    }
}
