use quark_core::{MergeRules, SelectionStrategy, MERGE_DISTANCE};

/// Board behaviour switches, read from `data-*` attributes on the simulation area.
#[derive(Clone, Debug, PartialEq)]
pub struct BoardConfig {
    pub rules: MergeRules,
    pub strategy: SelectionStrategy,
    pub merge_distance: f32,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            rules: MergeRules::default(),
            strategy: SelectionStrategy::default(),
            merge_distance: MERGE_DISTANCE,
        }
    }
}

impl BoardConfig {
    /// Builds a config from raw attribute values; malformed values fall back to defaults.
    pub fn from_attributes(
        population_limit: Option<&str>,
        selection: Option<&str>,
        merge_distance: Option<&str>,
    ) -> Self {
        let mut cfg = Self::default();
        if let Some(raw) = population_limit {
            match raw.trim().parse::<usize>() {
                Ok(limit) => cfg.rules = cfg.rules.with_population_limit(limit),
                Err(_) => log::warn!("[config] ignoring data-population-limit={:?}", raw),
            }
        }
        if let Some(raw) = selection {
            match SelectionStrategy::from_name(raw.trim()) {
                Some(s) => cfg.strategy = s,
                None => log::warn!("[config] ignoring data-selection={:?}", raw),
            }
        }
        if let Some(raw) = merge_distance {
            match raw.trim().parse::<f32>() {
                Ok(d) if d.is_finite() && d > 0.0 => cfg.merge_distance = d,
                _ => log::warn!("[config] ignoring data-merge-distance={:?}", raw),
            }
        }
        cfg
    }
}
