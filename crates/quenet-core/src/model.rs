pub mod demand;
pub mod types;

use rustc_hash::FxHashMap;

pub use demand::DemandTable;
pub use types::*;

use crate::solution::Solution;
use crate::solve::{self, Algorithm, SolveError};
use crate::units::Secs;

/// A validated model: named service centers and workload classes with a
/// populated parameter table. Produced by [`Spec::validate`](crate::Spec::validate).
/// Models are write-once; all accessors are reads, and [`Model::solve`] takes
/// `&self`, so a validated model is safe for concurrent readers.
#[derive(Debug, Clone)]
pub struct Model {
    title: String,
    centers: Vec<Center>,
    classes: Vec<WorkloadClass>,
    center_ids: FxHashMap<String, CenterId>,
    class_ids: FxHashMap<String, ClassId>,
    demands: DemandTable,
}

impl Model {
    pub(crate) fn new(
        title: String,
        centers: Vec<Center>,
        classes: Vec<WorkloadClass>,
        center_ids: FxHashMap<String, CenterId>,
        class_ids: FxHashMap<String, ClassId>,
        demands: DemandTable,
    ) -> Self {
        Self {
            title,
            centers,
            classes,
            center_ids,
            class_ids,
            demands,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Centers in registration order.
    pub fn centers(&self) -> impl Iterator<Item = &Center> {
        self.centers.iter()
    }

    /// Classes in registration order.
    pub fn classes(&self) -> impl Iterator<Item = &WorkloadClass> {
        self.classes.iter()
    }

    pub fn nr_centers(&self) -> usize {
        self.centers.len()
    }

    pub fn nr_classes(&self) -> usize {
        self.classes.len()
    }

    /// The center registered under `id`. IDs are only handed out by this model,
    /// so the lookup cannot miss.
    pub fn center(&self, id: CenterId) -> &Center {
        &self.centers[id.inner()]
    }

    pub fn class(&self, id: ClassId) -> &WorkloadClass {
        &self.classes[id.inner()]
    }

    pub fn center_id(&self, name: &str) -> Option<CenterId> {
        self.center_ids.get(name).copied()
    }

    pub fn class_id(&self, name: &str) -> Option<ClassId> {
        self.class_ids.get(name).copied()
    }

    /// Total demand D = V×S for a pair, zero if unset.
    pub fn demand(&self, center: CenterId, class: ClassId) -> Secs {
        self.demands.demand(center, class)
    }

    /// Visit count for a pair, zero if unset.
    pub fn visits(&self, center: CenterId, class: ClassId) -> f64 {
        self.demands.visits(center, class)
    }

    pub fn demands(&self) -> &DemandTable {
        &self.demands
    }

    /// Solve the model. Solving is a pure function of the model: repeated
    /// calls recompute from scratch and return identical metrics.
    pub fn solve(&self, algorithm: Algorithm) -> Result<Solution, SolveError> {
        solve::solve_model(self, algorithm)
    }
}
