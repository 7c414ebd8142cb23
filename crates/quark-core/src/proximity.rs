use crate::board::EntityId;
use glam::Vec2;

/// How a merge partner is chosen among entities inside the threshold.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SelectionStrategy {
    /// First entity in scan order closer than the threshold.
    #[default]
    FirstWithinThreshold,
    /// Closest entity closer than the threshold; ties keep scan order.
    NearestWithinThreshold,
}

impl SelectionStrategy {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "first" => Some(Self::FirstWithinThreshold),
            "nearest" => Some(Self::NearestWithinThreshold),
            _ => None,
        }
    }
}

/// Scans `candidates` once for a partner of the just-released entity.
///
/// The released entity itself is skipped if present. A candidate qualifies
/// when its centre lies strictly closer than `threshold`.
pub fn find_partner<I>(
    released: EntityId,
    released_center: Vec2,
    candidates: I,
    threshold: f32,
    strategy: SelectionStrategy,
) -> Option<EntityId>
where
    I: IntoIterator<Item = (EntityId, Vec2)>,
{
    let mut best = None::<(EntityId, f32)>;
    for (id, center) in candidates {
        if id == released {
            continue;
        }
        let dist = released_center.distance(center);
        if dist >= threshold {
            continue;
        }
        match strategy {
            SelectionStrategy::FirstWithinThreshold => return Some(id),
            SelectionStrategy::NearestWithinThreshold => match best {
                Some((_, bd)) if dist >= bd => {}
                _ => best = Some((id, dist)),
            },
        }
    }
    best.map(|(id, _)| id)
}

/// Centre at which a merged particle is placed.
#[inline]
pub fn midpoint(a: Vec2, b: Vec2) -> Vec2 {
    (a + b) * 0.5
}
