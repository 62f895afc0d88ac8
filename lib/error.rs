//! Error types for lattice configuration, geometry, and diagonalization.

use thiserror::Error;

/// All failure modes of Hamiltonian construction and solution.
#[derive(Debug, Error)]
pub enum TbError {
    /// The shell-parameter list is empty.
    #[error("lattice configuration: shell parameter list is empty")]
    EmptyShells,

    /// The position and onsite-energy lists have different lengths.
    #[error(
        "lattice configuration: {sites} site position(s) \
        but {energies} onsite energy value(s)"
    )]
    SiteCountMismatch { sites: usize, energies: usize },

    /// Periodic boundaries were requested with a non-positive box length.
    #[error("lattice configuration: periodic box lengths must be positive \
        (got {len_x} x {len_y})")]
    InvalidBox { len_x: f64, len_y: f64 },

    /// Shell cutoff radii must be non-decreasing with shell index.
    #[error("lattice configuration: cutoff of shell {shell} is smaller \
        than that of the previous shell")]
    UnorderedCutoffs { shell: usize },

    /// Shell 0 has a non-positive reference bond length or cutoff.
    #[error("lattice configuration: shell {shell} has non-positive \
        geometry (d_cc = {d_cc}, r_cut = {r_cut})")]
    DegenerateShell { shell: usize, d_cc: f64, r_cut: f64 },

    /// Two sites sit at exactly the same position.
    #[error("degenerate geometry: sites {i} and {j} are coincident")]
    CoincidentSites { i: usize, j: usize },

    /// The monitor requested cancellation.
    #[error("computation cancelled by monitor")]
    Cancelled,

    /// The eigensolver failed to converge.
    #[error("eigen-decomposition failed")]
    Linalg(#[from] ndarray_linalg::error::LinalgError),
}

pub type TbResult<T> = Result<T, TbError>;
