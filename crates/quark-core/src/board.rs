//! Entities currently on the board.
//!
//! The board is the session-side arena: it issues ids, remembers each
//! entity's composition, and applies merges atomically. Positions stay with
//! the frontend, which hands centres to [`crate::proximity::find_partner`].

use crate::composition::Composition;
use crate::error::MergeError;
use crate::label::Label;
use crate::registry::Registry;
use crate::resolver::{classify, try_merge, Classification, MergeOutcome, MergeRules};
use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EntityId(u32);

impl EntityId {
    pub fn raw(self) -> u32 {
        self.0
    }

    pub fn from_raw(raw: u32) -> Self {
        Self(raw)
    }
}

impl fmt::Display for EntityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[derive(Clone, Debug)]
pub struct Entity {
    pub id: EntityId,
    pub composition: Composition,
    pub class: Classification,
}

impl Entity {
    pub fn is_multi(&self) -> bool {
        !self.composition.is_single()
    }
}

pub struct Board {
    registry: Registry,
    rules: MergeRules,
    // insertion order drives first-match partner selection
    entities: Vec<Entity>,
    next_id: u32,
}

impl Board {
    pub fn new(registry: Registry, rules: MergeRules) -> Self {
        Self {
            registry,
            rules,
            entities: Vec::new(),
            next_id: 1,
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn rules(&self) -> &MergeRules {
        &self.rules
    }

    pub fn set_rules(&mut self, rules: MergeRules) {
        self.rules = rules;
    }

    fn issue_id(&mut self) -> EntityId {
        let id = EntityId(self.next_id);
        self.next_id = self.next_id.wrapping_add(1);
        id
    }

    fn insert(&mut self, composition: Composition) -> EntityId {
        let id = self.issue_id();
        let class = classify(&self.registry, &composition);
        self.entities.push(Entity {
            id,
            composition,
            class,
        });
        id
    }

    /// Places a fresh single-constituent entity.
    pub fn spawn_constituent(&mut self, label: Label) -> EntityId {
        let id = self.insert(Composition::single(label));
        log::debug!("[board] spawn {} {}", label, id);
        id
    }

    pub fn get(&self, id: EntityId) -> Option<&Entity> {
        self.entities.iter().find(|e| e.id == id)
    }

    pub fn composition(&self, id: EntityId) -> Option<&Composition> {
        self.get(id).map(|e| &e.composition)
    }

    pub fn contains(&self, id: EntityId) -> bool {
        self.get(id).is_some()
    }

    /// Ids in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.entities.iter().map(|e| e.id)
    }

    pub fn entities(&self) -> &[Entity] {
        &self.entities
    }

    pub fn len(&self) -> usize {
        self.entities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entities.is_empty()
    }

    /// Entities made of more than one constituent.
    pub fn multi_constituent_count(&self) -> usize {
        self.entities.iter().filter(|e| e.is_multi()).count()
    }

    /// Merges `a` into `b`. On success both inputs are removed and the merged
    /// entity is appended; on error the board is unchanged.
    pub fn merge(&mut self, a: EntityId, b: EntityId) -> Result<(EntityId, MergeOutcome), MergeError> {
        if a == b {
            return Err(MergeError::SameEntity);
        }
        let comp_a = self.composition(a).ok_or(MergeError::UnknownEntity(a))?;
        let comp_b = self.composition(b).ok_or(MergeError::UnknownEntity(b))?;
        let outcome = try_merge(
            &self.registry,
            &self.rules,
            comp_a,
            comp_b,
            self.multi_constituent_count(),
        )?;

        self.entities.retain(|e| e.id != a && e.id != b);
        let id = self.insert(outcome.composition.clone());
        log::info!("[board] {} + {} -> {} {}", a, b, id, outcome.label_text());
        Ok((id, outcome))
    }

    /// Drops a single entity, returning it if present.
    pub fn remove(&mut self, id: EntityId) -> Option<Entity> {
        let pos = self.entities.iter().position(|e| e.id == id)?;
        Some(self.entities.remove(pos))
    }

    /// Discards every entity. Ids keep increasing across clears.
    pub fn clear_all(&mut self) {
        log::info!("[board] clear {} entities", self.entities.len());
        self.entities.clear();
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new(Registry::builtin(), MergeRules::default())
    }
}
