//! Static table of recognised particles, keyed by canonical composition.
//!
//! The table is built once and never mutated; a failed lookup just means the
//! composition is not a particle we know about.

use crate::composition::CanonicalKey;
use fnv::FnvHashMap;

/// One known particle: its canonical key, display name and CSS class.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct KnownParticle {
    pub key: &'static str,
    pub name: &'static str,
    pub style: &'static str,
}

const fn entry(key: &'static str, name: &'static str, style: &'static str) -> KnownParticle {
    KnownParticle { key, name, style }
}

pub const KNOWN_PARTICLES: &[KnownParticle] = &[
    // Mesons
    entry("Anti-Down+Down", "π0", "pi-zero"),
    entry("Anti-Down+Up", "π+", "pi-plus"),
    entry("Anti-Up+Down", "π-", "pi-minus"),
    entry("Anti-Up+Up", "π0", "pi-zero"),
    entry("Anti-Charm+Charm", "J/ψ", "jpsi"),
    entry("Anti-Strange+Strange", "φ", "phi"),
    // Baryons
    entry("Down+Down+Down", "Delta-", "delta-minus"),
    entry("Down+Down+Up", "Neutron", "neutron"),
    entry("Down+Strange+Up", "Lambda", "lambda"),
    entry("Down+Up+Up", "Proton", "proton"),
    entry("Up+Up+Up", "Delta++", "delta-plus-plus"),
];

pub struct Registry {
    entries: &'static [KnownParticle],
    index: FnvHashMap<&'static str, usize>,
}

impl Registry {
    pub fn new(entries: &'static [KnownParticle]) -> Self {
        let index = entries
            .iter()
            .enumerate()
            .map(|(i, e)| (e.key, i))
            .collect::<FnvHashMap<_, _>>();
        Self { entries, index }
    }

    /// Registry over the built-in meson and baryon table.
    pub fn builtin() -> Self {
        Self::new(KNOWN_PARTICLES)
    }

    pub fn lookup(&self, key: &CanonicalKey) -> Option<&KnownParticle> {
        self.index
            .get(key.as_str())
            .and_then(|&i| self.entries.get(i))
    }

    /// Entries in declaration order.
    pub fn entries(&self) -> impl Iterator<Item = &KnownParticle> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::builtin()
    }
}
