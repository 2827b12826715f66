//! The result document and its per-field defaults.

use std::path::Path;

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::{LoadError, LoadResult};
use crate::series::linspace;

/// Energy reported when `ground_state_energy` is absent.
pub const DEFAULT_GROUND_STATE_ENERGY: f64 = 0.0;
/// Iteration count assumed when `iterations` is absent.
pub const DEFAULT_ITERATIONS: u64 = 100;
/// First value of the synthesized convergence ramp.
pub const SYNTHETIC_START_ENERGY: f64 = 0.6;
/// Last value of the synthesized convergence ramp.
pub const SYNTHETIC_END_ENERGY: f64 = -0.886786;
/// Longest convergence ramp that will be synthesized. A larger declared
/// `iterations` without a stored sequence is rejected as malformed.
pub const MAX_SYNTHETIC_ITERATIONS: u64 = 1_000_000;

/// A resolved VQE result: every field present, defaults applied.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ResultDocument {
    /// Ground-state energy in Hartree.
    pub ground_state_energy: f64,
    /// Declared optimizer iteration count.
    pub iterations: u64,
    /// Energy per iteration. Not reconciled with `iterations`.
    pub energy_convergence: Vec<f64>,
    /// Whether `energy_convergence` was synthesized.
    #[serde(skip)]
    pub synthetic_convergence: bool,
}

impl ResultDocument {
    /// Resolve a parsed JSON value into a document.
    ///
    /// `iterations` is resolved before `energy_convergence` because the
    /// synthetic ramp's length depends on it. `path` is only used for error
    /// reporting.
    pub fn from_value(value: &Value, path: &Path) -> LoadResult<Self> {
        let object = value.as_object().ok_or_else(|| {
            LoadError::malformed(path, format!("expected a JSON object, found {}", kind_of(value)))
        })?;

        let ground_state_energy = match object.get("ground_state_energy") {
            None => DEFAULT_GROUND_STATE_ENERGY,
            Some(v) => v.as_f64().ok_or_else(|| {
                LoadError::malformed(
                    path,
                    format!("`ground_state_energy` must be a number, found {}", kind_of(v)),
                )
            })?,
        };

        let iterations = match object.get("iterations") {
            None => DEFAULT_ITERATIONS,
            Some(v) => v.as_u64().ok_or_else(|| {
                LoadError::malformed(
                    path,
                    format!("`iterations` must be a non-negative integer, found {v}"),
                )
            })?,
        };

        let (energy_convergence, synthetic_convergence) =
            match energy_sequence(object, path)? {
                Some(values) => (values, false),
                None => (synthetic_ramp(iterations, path)?, true),
            };

        Ok(Self {
            ground_state_energy,
            iterations,
            energy_convergence,
            synthetic_convergence,
        })
    }

    /// Last energy of the convergence sequence, if any.
    pub fn final_energy(&self) -> Option<f64> {
        self.energy_convergence.last().copied()
    }

    /// Whether the sequence length disagrees with the declared iteration count.
    pub fn length_mismatch(&self) -> bool {
        self.energy_convergence.len() as u64 != self.iterations
    }
}

fn synthetic_ramp(iterations: u64, path: &Path) -> LoadResult<Vec<f64>> {
    let len = usize::try_from(iterations)
        .ok()
        .filter(|_| iterations <= MAX_SYNTHETIC_ITERATIONS)
        .ok_or_else(|| {
            LoadError::malformed(
                path,
                format!(
                    "`iterations` too large to synthesize `energy_convergence` \
                     ({iterations} > {MAX_SYNTHETIC_ITERATIONS})"
                ),
            )
        })?;
    Ok(linspace(SYNTHETIC_START_ENERGY, SYNTHETIC_END_ENERGY, len))
}

fn energy_sequence(object: &Map<String, Value>, path: &Path) -> LoadResult<Option<Vec<f64>>> {
    let Some(value) = object.get("energy_convergence") else {
        return Ok(None);
    };
    let items = value.as_array().ok_or_else(|| {
        LoadError::malformed(
            path,
            format!("`energy_convergence` must be an array, found {}", kind_of(value)),
        )
    })?;
    items
        .iter()
        .enumerate()
        .map(|(i, item)| {
            item.as_f64().ok_or_else(|| {
                LoadError::malformed(
                    path,
                    format!("`energy_convergence[{i}]` must be a number, found {}", kind_of(item)),
                )
            })
        })
        .collect::<LoadResult<Vec<f64>>>()
        .map(Some)
}

fn kind_of(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
