//! vqeviz results: the data side of the VQE dashboard.
//!
//! A result file is a JSON object written by an upstream VQE run:
//!
//! ```json
//! {
//!   "ground_state_energy": -1.137283,
//!   "iterations": 100,
//!   "energy_convergence": [0.6, 0.41, -0.12, -1.137283]
//! }
//! ```
//!
//! Every key is optional. Missing keys fall back to `0.0`, `100` and a linear
//! ramp from `0.6` to `-0.886786` with `iterations` points respectively. This
//! crate does no quantum computation; it reads, defaults, and derives.
//!
//! # Example
//!
//! ```rust,no_run
//! use vqeviz_results::{load_results, running_average};
//!
//! let loaded = load_results("quantum_results.json")?;
//! let avg = running_average(&loaded.document.energy_convergence);
//! assert_eq!(avg.len(), loaded.document.energy_convergence.len());
//! # Ok::<(), vqeviz_results::LoadError>(())
//! ```

pub mod document;
pub mod error;
pub mod loader;
pub mod series;

pub use document::{
    DEFAULT_GROUND_STATE_ENERGY, DEFAULT_ITERATIONS, MAX_SYNTHETIC_ITERATIONS, ResultDocument,
    SYNTHETIC_END_ENERGY, SYNTHETIC_START_ENERGY,
};
pub use error::{LoadError, LoadResult};
pub use loader::{DEFAULT_RESULTS_PATH, LoadedResults, load_results};
pub use series::{Histogram, linspace, round_to, running_average};
