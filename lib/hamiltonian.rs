//! Dense tight-binding Hamiltonian assembly and eigen-decomposition.
//!
//! The matrix is real: onsite energies on the diagonal, shell-0 hopping
//! amplitudes off the diagonal. Symmetry of H[i, j] and H[j, i] follows
//! from the neighbor table's symmetric double-write combined with the
//! amplitude being symmetric in its position arguments; no explicit
//! symmetrization pass is performed.

use std::time::Instant;
use ndarray as nd;
use ndarray_linalg::Eig;
use num_complex::Complex64 as C64;
use tracing::{ debug, info_span, warn };
use crate::{
    error::{ TbError, TbResult },
    hopping::HoppingModel,
    lattice::Lattice,
    monitor::{ Monitor, Stage },
    neighbor::{ NeighborFinder, NeighborMode, NeighborTable },
};

/// Hamiltonian builder for a single-orbital tight-binding lattice.
#[derive(Copy, Clone, Debug)]
pub struct HBuilderTightBinding<'a> {
    lattice: &'a Lattice,
    mode: NeighborMode,
}

impl<'a> HBuilderTightBinding<'a> {
    /// Create a new `HBuilderTightBinding` using multi-shell neighbor
    /// gating.
    pub fn new(lattice: &'a Lattice) -> Self {
        Self { lattice, mode: NeighborMode::Shells }
    }

    /// Set the neighbor-search gating mode.
    pub fn with_mode(self, mode: NeighborMode) -> Self {
        Self { mode, ..self }
    }

    /// Get a reference to the lattice.
    pub fn lattice(&self) -> &Lattice { self.lattice }

    /// Run the neighbor search and assemble the Hamiltonian.
    ///
    /// Both stages report progress and wall-clock timing through the
    /// monitor; timing is observability only.
    pub fn gen(&self, monitor: &dyn Monitor) -> TbResult<nd::Array2<f64>> {
        let table
            = NeighborFinder::new(self.lattice)
            .with_mode(self.mode)
            .find(monitor)?;
        self.gen_with_table(&table, monitor)
    }

    /// Assemble the Hamiltonian from an existing neighbor table.
    pub fn gen_with_table(
        &self,
        table: &NeighborTable,
        monitor: &dyn Monitor,
    ) -> TbResult<nd::Array2<f64>>
    {
        let n = self.lattice.len();
        let _span = info_span!("assemble_hamiltonian", sites = n).entered();
        let t0 = Instant::now();

        let model = HoppingModel::shell0(self.lattice);
        let mut H: nd::Array2<f64> = nd::Array2::zeros((n, n));
        let mut dropped: usize = 0;
        for i in 0..n {
            if monitor.cancelled() { return Err(TbError::Cancelled); }
            monitor.progress(Stage::Assembly, i as f64 / n as f64);
            H[[i, i]] = self.lattice.onsite(i);
            let xi = self.lattice.position(i);
            for &j in table.shell0(i) {
                match model.amplitude(xi, self.lattice.position(j)) {
                    Some(tij) => { H[[i, j]] = tij; },
                    // unreachable while both cutoff tests share one
                    // distance routine, but a lost coupling must never
                    // pass silently
                    None => { dropped += 1; },
                }
            }
        }
        monitor.progress(Stage::Assembly, 1.0);
        if dropped > 0 {
            warn!(
                dropped,
                "recorded neighbor pairs failed the hopping cutoff \
                re-check; couplings lost",
            );
        }

        let elapsed = t0.elapsed();
        debug!(elapsed_s = elapsed.as_secs_f64(), "assembly finished");
        monitor.stage_done(Stage::Assembly, elapsed);
        Ok(H)
    }

    /// Assemble and diagonalize the Hamiltonian with a general (not
    /// symmetry-exploiting) eigensolver.
    ///
    /// No ordering or normalization of the eigenpairs is guaranteed beyond
    /// what LAPACK provides.
    pub fn diagonalize(&self, monitor: &dyn Monitor)
        -> TbResult<(nd::Array1<C64>, nd::Array2<C64>)>
    {
        solve(&self.gen(monitor)?)
    }
}

/// Eigen-decompose a dense real matrix with a general solver.
pub fn solve(H: &nd::Array2<f64>)
    -> TbResult<(nd::Array1<C64>, nd::Array2<C64>)>
{
    let (evals, evecs) = H.eig()?;
    Ok((evals, evecs))
}
