#![allow(dead_code, non_snake_case, non_upper_case_globals)]

pub mod error;
pub mod monitor;
pub mod geometry;
pub mod lattice;
pub mod neighbor;
pub mod hopping;
pub mod hamiltonian;

pub use error::{ TbError, TbResult };
pub use lattice::{ Boundary, Lattice, ShellParams };
pub use monitor::{ ConsoleMonitor, Monitor, NoMonitor, Stage };
pub use neighbor::{ NeighborFinder, NeighborMode, NeighborTable };
pub use hamiltonian::HBuilderTightBinding;
