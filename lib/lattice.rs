//! Site positions, onsite energies, shell parameters, and boundary
//! conditions for a tight-binding lattice.
//!
//! A [`Lattice`] is the complete input to Hamiltonian construction. The
//! validating constructor is the only way to build one, and the data are
//! immutable afterward; in particular the position store is never mutated
//! by any later computation.

use crate::error::{ TbError, TbResult };

/// Parameters of one neighbor shell (distance band).
#[derive(Clone, Debug, PartialEq)]
pub struct ShellParams {
    /// Human-readable label, e.g. `"1nn"`.
    pub label: String,
    /// Reference bond length entering Harrison's rule.
    pub d_cc: f64,
    /// Cutoff radius of the shell.
    pub r_cut: f64,
    /// Hopping coefficient at the reference bond length.
    pub t: f64,
}

impl ShellParams {
    pub fn new(label: &str, d_cc: f64, r_cut: f64, t: f64) -> Self {
        Self { label: label.to_string(), d_cc, r_cut, t }
    }
}

/// Boundary conditions of the simulation cell.
///
/// Periodic boxes wrap in x and y only; the z axis is always open.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum Boundary {
    Open,
    Periodic { len_x: f64, len_y: f64 },
}

/// An immutable collection of sites plus the shell and boundary
/// configuration needed to couple them.
#[derive(Clone, Debug, PartialEq)]
pub struct Lattice {
    positions: Vec<[f64; 3]>,
    onsite: Vec<f64>,
    shells: Vec<ShellParams>,
    boundary: Boundary,
}

impl Lattice {
    /// Validate and assemble a lattice.
    ///
    /// Fails if the shell list is empty, the position and onsite-energy
    /// lists disagree in length, shell cutoffs are not non-decreasing, any
    /// shell has non-positive geometry, or a periodic box has non-positive
    /// dimensions.
    pub fn new(
        positions: Vec<[f64; 3]>,
        onsite: Vec<f64>,
        shells: Vec<ShellParams>,
        boundary: Boundary,
    ) -> TbResult<Self>
    {
        if shells.is_empty() {
            return Err(TbError::EmptyShells);
        }
        if positions.len() != onsite.len() {
            return Err(TbError::SiteCountMismatch {
                sites: positions.len(),
                energies: onsite.len(),
            });
        }
        for (s, shell) in shells.iter().enumerate() {
            if shell.d_cc <= 0.0 || shell.r_cut <= 0.0 {
                return Err(TbError::DegenerateShell {
                    shell: s,
                    d_cc: shell.d_cc,
                    r_cut: shell.r_cut,
                });
            }
            if s > 0 && shell.r_cut < shells[s - 1].r_cut {
                return Err(TbError::UnorderedCutoffs { shell: s });
            }
        }
        if let Boundary::Periodic { len_x, len_y } = boundary {
            if len_x <= 0.0 || len_y <= 0.0 {
                return Err(TbError::InvalidBox { len_x, len_y });
            }
        }
        Ok(Self { positions, onsite, shells, boundary })
    }

    /// Number of sites.
    pub fn len(&self) -> usize { self.positions.len() }

    pub fn is_empty(&self) -> bool { self.positions.is_empty() }

    /// Position of site `i`.
    pub fn position(&self, i: usize) -> [f64; 3] { self.positions[i] }

    /// All site positions, in index order.
    pub fn positions(&self) -> &[[f64; 3]] { &self.positions }

    /// Onsite energy of site `i`.
    pub fn onsite(&self, i: usize) -> f64 { self.onsite[i] }

    /// Parameters of shell `s`.
    pub fn shell(&self, s: usize) -> &ShellParams { &self.shells[s] }

    /// All shell parameters, in shell order.
    pub fn shells(&self) -> &[ShellParams] { &self.shells }

    /// Number of configured shells.
    pub fn shell_count(&self) -> usize { self.shells.len() }

    /// Boundary conditions.
    pub fn boundary(&self) -> &Boundary { &self.boundary }

    /// Convenience constructor: a 1D chain of `n` sites along x with
    /// uniform spacing and onsite energy.
    pub fn chain(
        n: usize,
        spacing: f64,
        onsite: f64,
        shells: Vec<ShellParams>,
        boundary: Boundary,
    ) -> TbResult<Self>
    {
        let positions: Vec<[f64; 3]>
            = (0..n).map(|i| [i as f64 * spacing, 0.0, 0.0]).collect();
        Self::new(positions, vec![onsite; n], shells, boundary)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shell0() -> ShellParams { ShellParams::new("1nn", 1.42, 1.6, -2.7) }

    #[test]
    fn accepts_valid_configuration() {
        let lat = Lattice::new(
            vec![[0.0; 3], [1.0, 0.0, 0.0]],
            vec![0.0, 0.5],
            vec![shell0()],
            Boundary::Open,
        ).unwrap();
        assert_eq!(lat.len(), 2);
        assert_eq!(lat.shell_count(), 1);
        assert!((lat.onsite(1) - 0.5).abs() < 1e-15);
    }

    #[test]
    fn rejects_empty_shells() {
        let res = Lattice::new(
            vec![[0.0; 3]], vec![0.0], vec![], Boundary::Open);
        assert!(matches!(res, Err(TbError::EmptyShells)));
    }

    #[test]
    fn rejects_count_mismatch() {
        let res = Lattice::new(
            vec![[0.0; 3], [1.0, 0.0, 0.0]],
            vec![0.0],
            vec![shell0()],
            Boundary::Open,
        );
        assert!(matches!(
            res,
            Err(TbError::SiteCountMismatch { sites: 2, energies: 1 }),
        ));
    }

    #[test]
    fn rejects_unordered_cutoffs() {
        let res = Lattice::new(
            vec![[0.0; 3]],
            vec![0.0],
            vec![
                ShellParams::new("1nn", 1.42, 1.6, -2.7),
                ShellParams::new("2nn", 2.46, 1.0, -0.3),
            ],
            Boundary::Open,
        );
        assert!(matches!(res, Err(TbError::UnorderedCutoffs { shell: 1 })));
    }

    #[test]
    fn rejects_bad_box() {
        let res = Lattice::new(
            vec![[0.0; 3]],
            vec![0.0],
            vec![shell0()],
            Boundary::Periodic { len_x: 10.0, len_y: 0.0 },
        );
        assert!(matches!(res, Err(TbError::InvalidBox { .. })));
    }

    #[test]
    fn rejects_degenerate_shell_geometry() {
        let res = Lattice::new(
            vec![[0.0; 3]],
            vec![0.0],
            vec![ShellParams::new("1nn", 0.0, 1.6, -2.7)],
            Boundary::Open,
        );
        assert!(matches!(res, Err(TbError::DegenerateShell { shell: 0, .. })));
    }

    #[test]
    fn chain_positions_are_evenly_spaced() {
        let lat
            = Lattice::chain(4, 1.5, 0.0, vec![shell0()], Boundary::Open)
            .unwrap();
        assert_eq!(lat.len(), 4);
        assert!((lat.position(3)[0] - 4.5).abs() < 1e-15);
        assert!((lat.position(2)[1]).abs() < 1e-15);
    }
}
