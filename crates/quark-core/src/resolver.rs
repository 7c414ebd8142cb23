use crate::composition::{CanonicalKey, Composition};
use crate::constants::{DEFAULT_POPULATION_LIMIT, MAX_CONSTITUENTS};
use crate::error::MergeError;
use crate::label::Flavor;
use crate::registry::Registry;

pub const UNKNOWN: &str = "unknown";
pub const UNKNOWN_MESON: &str = "unknown meson";
pub const UNKNOWN_BARYON: &str = "unknown baryon";

/// Limits applied before two compositions are combined.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MergeRules {
    // never above MAX_CONSTITUENTS
    max_constituents: usize,
    /// When set, two lone quarks may not merge once this many
    /// multi-constituent entities exist.
    pub population_limit: Option<usize>,
}

impl Default for MergeRules {
    fn default() -> Self {
        Self {
            max_constituents: MAX_CONSTITUENTS,
            population_limit: None,
        }
    }
}

impl MergeRules {
    /// Rules with a tighter size cap; values above `MAX_CONSTITUENTS` are clamped.
    pub fn with_max_constituents(mut self, max: usize) -> Self {
        self.max_constituents = max.min(MAX_CONSTITUENTS);
        self
    }

    pub fn max_constituents(&self) -> usize {
        self.max_constituents
    }

    pub fn with_population_limit(mut self, limit: usize) -> Self {
        self.population_limit = Some(limit);
        self
    }

    /// Default rules plus the population cap at its usual value.
    pub fn capped() -> Self {
        Self::default().with_population_limit(DEFAULT_POPULATION_LIMIT)
    }
}

/// What a composition resolves to for display.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Classification {
    pub display_name: &'static str,
    pub style_tag: Option<&'static str>,
}

impl Classification {
    pub fn is_known(&self) -> bool {
        self.style_tag.is_some()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MergeOutcome {
    pub composition: Composition,
    pub display_name: &'static str,
    pub style_tag: Option<&'static str>,
}

impl MergeOutcome {
    /// Caption for the merged element, e.g. `"π+ : Up+Anti-Down"`.
    pub fn label_text(&self) -> String {
        format!("{} : {}", self.display_name, self.composition)
    }
}

fn meson_name(quark: Flavor, antiquark: Flavor) -> &'static str {
    match (quark, antiquark) {
        (Flavor::Up, Flavor::Down) => "π+",
        (Flavor::Down, Flavor::Up) => "π-",
        (Flavor::Up, Flavor::Up) | (Flavor::Down, Flavor::Down) => "π0",
        (Flavor::Charm, Flavor::Charm) => "J/ψ",
        (Flavor::Strange, Flavor::Strange) => "φ",
        _ => UNKNOWN_MESON,
    }
}

fn baryon_name(key: &CanonicalKey) -> &'static str {
    match key.as_str() {
        "Down+Up+Up" => "Proton",
        "Down+Down+Up" => "Neutron",
        "Up+Up+Up" => "Delta++",
        "Down+Down+Down" => "Delta-",
        "Down+Strange+Up" => "Lambda",
        _ => UNKNOWN_BARYON,
    }
}

/// Names a composition: quark + antiquark pairs are mesons, three quarks a
/// baryon, anything else is unknown. The style tag comes from the registry.
pub fn classify(registry: &Registry, composition: &Composition) -> Classification {
    let key = composition.canonical_key();
    let labels = composition.labels();
    let antis = composition.antiquark_count();

    let display_name = match (labels.len(), antis) {
        (2, 1) => {
            let (quark, antiquark) = if labels[0].is_anti() {
                (labels[1], labels[0])
            } else {
                (labels[0], labels[1])
            };
            meson_name(quark.flavor, antiquark.flavor)
        }
        (3, 0) => baryon_name(&key),
        _ => UNKNOWN,
    };

    let style_tag = match display_name {
        UNKNOWN | UNKNOWN_MESON | UNKNOWN_BARYON => None,
        _ => registry.lookup(&key).map(|p| p.style),
    };

    Classification {
        display_name,
        style_tag,
    }
}

/// Decides whether `a` and `b` may combine and classifies the result.
///
/// `multi_count` is the number of multi-constituent entities currently on the
/// board; it only matters when the population rule is enabled.
pub fn try_merge(
    registry: &Registry,
    rules: &MergeRules,
    a: &Composition,
    b: &Composition,
    multi_count: usize,
) -> Result<MergeOutcome, MergeError> {
    let total = a.len() + b.len();
    if total > rules.max_constituents {
        log::info!("[merge] rejected: {} constituents > {}", total, rules.max_constituents);
        return Err(MergeError::TooManyConstituents {
            total,
            max: rules.max_constituents,
        });
    }

    if let Some(limit) = rules.population_limit {
        if a.is_single() && b.is_single() && multi_count >= limit {
            log::info!("[merge] rejected: {} groups already on board", multi_count);
            return Err(MergeError::PopulationLimitReached { limit });
        }
    }

    let composition = a.concat(b).map_err(|_| MergeError::TooManyConstituents {
        total,
        max: rules.max_constituents,
    })?;
    let class = classify(registry, &composition);
    log::debug!(
        "[merge] {} + {} -> {} ({})",
        a,
        b,
        class.display_name,
        composition.canonical_key()
    );
    Ok(MergeOutcome {
        composition,
        display_name: class.display_name,
        style_tag: class.style_tag,
    })
}
