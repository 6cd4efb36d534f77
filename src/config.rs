//! The tunables that parameterize a single `solve` call, grouped into one value type with
//! a small multi-constructor style — an explicit settings struct, not a generic config file.

/// Bounds and feature flags for one [`crate::model::search::solve`] call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SolveConfig {
    /// Search stops once this many states have been marked expanded.
    pub max_expansions: u32,
    /// How often, in expansions, the father's-rule updater runs. Ignored when
    /// `enable_update` is false.
    pub batch_size: u32,
    /// When false, the engine runs plain A* with a fixed Manhattan-distance heuristic.
    pub enable_update: bool,
}

impl SolveConfig {
    pub fn new(max_expansions: u32, batch_size: u32, enable_update: bool) -> Self {
        Self {
            max_expansions,
            batch_size: batch_size.max(1),
            enable_update,
        }
    }

    /// Plain A*, no heuristic tightening, with a generous expansion budget.
    pub fn plain_astar(max_expansions: u32) -> Self {
        Self::new(max_expansions, 1, false)
    }

    /// Father's rule enabled, updating every `batch_size` expansions.
    pub fn with_update(max_expansions: u32, batch_size: u32) -> Self {
        Self::new(max_expansions, batch_size, true)
    }
}

impl Default for SolveConfig {
    /// 10,000 expansions, batch size 100, update rule on — a reasonable default for an
    /// interactive single call.
    fn default() -> Self {
        Self::new(10_000, 100, true)
    }
}
