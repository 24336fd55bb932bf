use rustc_hash::FxHashMap;

use crate::model::types::{CenterId, ClassId, Demand};
use crate::units::Secs;

/// The parameter table: per-(center, class) visit counts and service times.
/// Pairs without an entry place no demand on the center.
#[derive(Debug, Clone, Default)]
pub struct DemandTable {
    entries: FxHashMap<(CenterId, ClassId), Demand>,
}

impl DemandTable {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// The last write for a pair wins.
    pub(crate) fn insert(&mut self, center: CenterId, class: ClassId, demand: Demand) {
        self.entries.insert((center, class), demand);
    }

    pub fn get(&self, center: CenterId, class: ClassId) -> Option<Demand> {
        self.entries.get(&(center, class)).copied()
    }

    /// Total demand D = V×S for a pair, zero if the pair is unset.
    pub fn demand(&self, center: CenterId, class: ClassId) -> Secs {
        self.get(center, class)
            .map(|d| d.total())
            .unwrap_or(Secs::ZERO)
    }

    /// Visit count for a pair, zero if the pair is unset.
    pub fn visits(&self, center: CenterId, class: ClassId) -> f64 {
        self.get(center, class).map(|d| d.visits).unwrap_or(0.0)
    }
}
