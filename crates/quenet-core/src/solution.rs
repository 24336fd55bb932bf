//! Solved metrics: the product of a solve, queryable per center, per class,
//! and in aggregate.

use ordered_float::OrderedFloat;

use crate::model::{Center, CenterId, ClassId, WorkloadClass};
use crate::report::Report;
use crate::solve::Algorithm;
use crate::units::{PerSec, Secs};

/// Metrics for one (center, class) pair. All zero when the class never
/// visits the center.
#[derive(Debug, Default, Clone, Copy, PartialEq, serde::Serialize)]
pub struct Metrics {
    /// Utilization U = X×D.
    pub utilization: f64,
    /// Mean queue length Q = X×W.
    pub queue_length: f64,
    /// Residence time per completion.
    pub residence: Secs,
    /// Throughput.
    pub throughput: PerSec,
}

/// Per-center aggregates over all classes.
#[derive(Debug, Default, Clone, Copy, PartialEq, serde::Serialize)]
pub struct CenterTotals {
    pub utilization: f64,
    pub queue_length: f64,
}

/// Per-class aggregates over all centers.
#[derive(Debug, Default, Clone, Copy, PartialEq, serde::Serialize)]
pub struct ClassTotals {
    /// Response time R: the sum of residence times over visited centers.
    pub response_time: Secs,
    pub throughput: PerSec,
}

/// The product of a solve: registration-ordered metrics for every center and
/// class, with aggregates. A `Solution` is read-only; solving again recomputes
/// everything from scratch.
#[derive(Debug, Clone)]
pub struct Solution {
    title: String,
    algorithm: Algorithm,
    centers: Vec<Center>,
    classes: Vec<WorkloadClass>,
    // Indexed [center][class].
    metrics: Vec<Vec<Metrics>>,
    center_totals: Vec<CenterTotals>,
    class_totals: Vec<ClassTotals>,
}

impl Solution {
    #[allow(clippy::too_many_arguments)]
    pub(crate) fn new(
        title: String,
        algorithm: Algorithm,
        centers: Vec<Center>,
        classes: Vec<WorkloadClass>,
        metrics: Vec<Vec<Metrics>>,
        center_totals: Vec<CenterTotals>,
        class_totals: Vec<ClassTotals>,
    ) -> Self {
        Self {
            title,
            algorithm,
            centers,
            classes,
            metrics,
            center_totals,
            class_totals,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn algorithm(&self) -> Algorithm {
        self.algorithm
    }

    /// Centers in registration order.
    pub fn centers(&self) -> impl Iterator<Item = &Center> {
        self.centers.iter()
    }

    /// Classes in registration order.
    pub fn classes(&self) -> impl Iterator<Item = &WorkloadClass> {
        self.classes.iter()
    }

    pub fn center(&self, id: CenterId) -> &Center {
        &self.centers[id.inner()]
    }

    pub fn class(&self, id: ClassId) -> &WorkloadClass {
        &self.classes[id.inner()]
    }

    pub fn metrics(&self, center: CenterId, class: ClassId) -> Metrics {
        self.metrics[center.inner()][class.inner()]
    }

    pub fn center_totals(&self, center: CenterId) -> CenterTotals {
        self.center_totals[center.inner()]
    }

    pub fn class_totals(&self, class: ClassId) -> ClassTotals {
        self.class_totals[class.inner()]
    }

    /// Total throughput over all classes.
    pub fn system_throughput(&self) -> PerSec {
        self.class_totals.iter().map(|t| t.throughput).sum()
    }

    /// The center with the highest aggregate utilization. Ties go to the
    /// earliest-registered center.
    pub fn bottleneck(&self) -> Option<CenterId> {
        self.center_totals
            .iter()
            .enumerate()
            .rev()
            // max_by_key keeps the last maximum; reversed, that is the
            // earliest-registered center.
            .max_by_key(|&(_, t)| OrderedFloat(t.utilization))
            .map(|(k, _)| CenterId::new(k))
    }

    pub fn report(&self) -> Report {
        Report::new(self)
    }
}
