//! Geometric neighbor discovery with multi-shell cutoff gating and periodic
//! minimum-image correction.
//!
//! Pairs are enumerated naively in ascending index order, O(N²); each
//! accepted pair is written into both sites' lists in the same pass, so the
//! neighbor relation is symmetric by construction. A pair at squared
//! separation d² is assigned to the first shell whose squared cutoff
//! exceeds d², i.e. shells are true distance bands and the result does not
//! depend on enumeration order.

use std::time::Instant;
use tracing::{ debug, info_span };
use crate::{
    error::{ TbError, TbResult },
    geometry::separation2,
    lattice::Lattice,
    monitor::{ Monitor, Stage },
};

/// Gating mode for the neighbor search.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum NeighborMode {
    /// Every pair within shell 0's cutoff is a neighbor; the shell concept
    /// collapses to a single bucket. Used when only adjacency matters.
    Flat,
    /// One bucket per configured shell, gated by the shell's distance band.
    #[default]
    Shells,
}

/// Per-site neighbor indices, one ordered bucket per shell.
///
/// Read-only once the search that produced it returns.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NeighborTable {
    lists: Vec<Vec<Vec<usize>>>,
    shell_count: usize,
}

impl NeighborTable {
    /// Number of sites.
    pub fn site_count(&self) -> usize { self.lists.len() }

    /// Number of shell buckets per site.
    pub fn shell_count(&self) -> usize { self.shell_count }

    /// Neighbor indices of site `i` in shell `s`, in ascending index order.
    pub fn neighbors(&self, i: usize, s: usize) -> &[usize] {
        &self.lists[i][s]
    }

    /// Shell-0 neighbors of site `i`.
    pub fn shell0(&self, i: usize) -> &[usize] { &self.lists[i][0] }

    /// Total number of neighbors of site `i` over all shells.
    pub fn coordination(&self, i: usize) -> usize {
        self.lists[i].iter().map(|bucket| bucket.len()).sum()
    }
}

/// Pairwise neighbor search over a [`Lattice`].
#[derive(Copy, Clone, Debug)]
pub struct NeighborFinder<'a> {
    lattice: &'a Lattice,
    mode: NeighborMode,
}

impl<'a> NeighborFinder<'a> {
    /// Create a new `NeighborFinder` in [`NeighborMode::Shells`].
    pub fn new(lattice: &'a Lattice) -> Self {
        Self { lattice, mode: NeighborMode::Shells }
    }

    /// Set the gating mode.
    pub fn with_mode(self, mode: NeighborMode) -> Self {
        Self { mode, ..self }
    }

    /// Run the search.
    ///
    /// Progress is reported once per site with a final call at exactly 1;
    /// the monitor's cancellation flag is polled once per site.
    pub fn find(&self, monitor: &dyn Monitor) -> TbResult<NeighborTable> {
        let n = self.lattice.len();
        let _span
            = info_span!("neighbor_search", sites = n, mode = ?self.mode)
            .entered();
        let t0 = Instant::now();

        // squared cutoffs, one per bucket; non-empty by Lattice validation
        let cut2: Vec<f64> = match self.mode {
            NeighborMode::Flat => {
                let rc = self.lattice.shell(0).r_cut;
                vec![rc * rc]
            },
            NeighborMode::Shells => {
                self.lattice.shells().iter()
                    .map(|sh| sh.r_cut * sh.r_cut)
                    .collect()
            },
        };
        let buckets = cut2.len();
        let rmax2: f64 = cut2[buckets - 1];

        let mut lists: Vec<Vec<Vec<usize>>>
            = vec![vec![Vec::new(); buckets]; n];
        for i in 0..n {
            if monitor.cancelled() { return Err(TbError::Cancelled); }
            monitor.progress(Stage::NeighborSearch, i as f64 / n as f64);
            let xi = self.lattice.position(i);
            for j in (i + 1)..n {
                let d2
                    = separation2(
                        self.lattice.boundary(), xi, self.lattice.position(j));
                if d2 == 0.0 {
                    return Err(TbError::CoincidentSites { i, j });
                }
                if d2 >= rmax2 { continue; }
                // first shell whose band admits this separation
                let s = cut2.partition_point(|&c2| d2 >= c2);
                lists[i][s].push(j);
                lists[j][s].push(i);
            }
        }
        monitor.progress(Stage::NeighborSearch, 1.0);

        let elapsed = t0.elapsed();
        debug!(elapsed_s = elapsed.as_secs_f64(), "neighbor search finished");
        monitor.stage_done(Stage::NeighborSearch, elapsed);
        Ok(NeighborTable { lists, shell_count: buckets })
    }
}
