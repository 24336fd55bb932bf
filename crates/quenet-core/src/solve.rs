//! Closed-form solution of validated models. Open chains are solved directly
//! from the operational laws; closed chains go through mean value analysis,
//! seeing the server capacity left over by open work.

mod bounds;
mod mva;

use crate::model::{CenterId, ClassId, ClassKind, Model};
use crate::solution::{CenterTotals, ClassTotals, Metrics, Solution};
use crate::spec::{Spec, SpecError};
use crate::units::{PerSec, Secs};

/// Solution algorithms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Algorithm {
    /// Product-form open chains and exact multiclass MVA for closed chains.
    Exact,
    /// The canonical approximation: Bard-Schweitzer iterative MVA.
    Canonical,
    /// Asymptotic bounds.
    Bounds,
}

impl Algorithm {
    pub fn label(&self) -> &'static str {
        match self {
            Algorithm::Exact => "exact",
            Algorithm::Canonical => "canonical (approximate MVA)",
            Algorithm::Bounds => "asymptotic bounds",
        }
    }
}

/// The core `quenet` routine. This validates a specification and solves it for
/// per-center and per-class metrics.
pub fn solve(spec: Spec, algorithm: Algorithm) -> Result<Solution, Error> {
    let model = spec.validate()?;
    let solution = model.solve(algorithm)?;
    Ok(solution)
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    InvalidSpec(#[from] SpecError),

    #[error(transparent)]
    Solve(#[from] SolveError),
}

/// Solution failure.
#[derive(Debug, thiserror::Error)]
pub enum SolveError {
    /// A queueing center is saturated; no finite solution exists. The model
    /// must be fixed by lowering rates or demands.
    #[error("center {center} is overloaded (utilization {utilization})")]
    Overload { center: String, utilization: f64 },
}

pub(crate) fn solve_model(model: &Model, algorithm: Algorithm) -> Result<Solution, SolveError> {
    let nr_centers = model.nr_centers();
    let nr_classes = model.nr_classes();
    let queueing = model
        .centers()
        .map(|c| c.discipline.is_queueing())
        .collect::<Vec<_>>();
    // Total demand D = V×S per (class, center).
    let demand = (0..nr_classes)
        .map(|c| {
            (0..nr_centers)
                .map(|k| model.demand(CenterId::new(k), ClassId::new(c)).into_f64())
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();

    // Open chains: the arrival rate passes through every visited center
    // unchanged (forced flow), so utilizations are fixed before any queueing
    // analysis.
    let mut open_util = vec![0.0; nr_centers];
    for (c, class) in model.classes().enumerate() {
        if let ClassKind::Open { arrival_rate } = class.kind {
            for k in 0..nr_centers {
                open_util[k] += arrival_rate.into_f64() * demand[c][k];
            }
        }
    }
    // CORRECTNESS: A queueing center with aggregate utilization >= 1 is
    // saturated. Overload is a property of the aggregate demands, so it is
    // checked here rather than at entry time.
    for (k, center) in model.centers().enumerate() {
        if queueing[k] && open_util[k] >= 1.0 {
            return Err(SolveError::Overload {
                center: center.name.clone(),
                utilization: open_util[k],
            });
        }
    }

    // Closed chains run on demands inflated by the open utilization: a closed
    // customer only gets the server capacity the open work leaves behind.
    let mut closed_ids = Vec::new();
    let mut populations = Vec::new();
    for (c, class) in model.classes().enumerate() {
        if let ClassKind::Closed { population } = class.kind {
            closed_ids.push(c);
            populations.push(population);
        }
    }
    let inflated = closed_ids
        .iter()
        .map(|&c| {
            (0..nr_centers)
                .map(|k| {
                    if queueing[k] {
                        demand[c][k] / (1.0 - open_util[k])
                    } else {
                        demand[c][k]
                    }
                })
                .collect::<Vec<_>>()
        })
        .collect::<Vec<_>>();
    let closed = if closed_ids.is_empty() {
        mva::ClosedSolution::empty()
    } else {
        match algorithm {
            Algorithm::Exact => mva::exact(&populations, &inflated, &queueing),
            Algorithm::Canonical => mva::schweitzer(&populations, &inflated, &queueing),
            Algorithm::Bounds => bounds::closed(&populations, &inflated, &queueing),
        }
    };
    // Total closed queue seen by an open arrival at each center.
    let closed_queue = (0..nr_centers)
        .map(|k| closed.queue.iter().map(|q| q[k]).sum::<f64>())
        .collect::<Vec<_>>();

    // Per-pair metrics. Pairs with no demand stay zero: the class never
    // visits the center.
    let mut metrics = vec![vec![Metrics::default(); nr_classes]; nr_centers];
    let mut class_throughput = vec![PerSec::ZERO; nr_classes];
    for (c, class) in model.classes().enumerate() {
        if let ClassKind::Open { arrival_rate } = class.kind {
            class_throughput[c] = arrival_rate;
            for k in 0..nr_centers {
                let d = demand[c][k];
                if d == 0.0 {
                    continue;
                }
                let residence = if !queueing[k] || algorithm == Algorithm::Bounds {
                    // Delay centers never queue; under bounds the queueing
                    // centers report the no-contention optimum.
                    d
                } else {
                    d * (1.0 + closed_queue[k]) / (1.0 - open_util[k])
                };
                metrics[k][c] = Metrics {
                    utilization: arrival_rate.into_f64() * d,
                    queue_length: arrival_rate.into_f64() * residence,
                    residence: Secs::new(residence),
                    throughput: arrival_rate,
                };
            }
        }
    }
    for (i, &c) in closed_ids.iter().enumerate() {
        let x = closed.throughput[i];
        class_throughput[c] = PerSec::new(x);
        for k in 0..nr_centers {
            // Utilization uses the actual demand; residence comes from the
            // inflated demands and already includes contention with open work.
            let d = demand[c][k];
            if d == 0.0 {
                continue;
            }
            let w = closed.residence[i][k];
            metrics[k][c] = Metrics {
                utilization: x * d,
                queue_length: x * w,
                residence: Secs::new(w),
                throughput: PerSec::new(x),
            };
        }
    }

    let center_totals = (0..nr_centers)
        .map(|k| CenterTotals {
            utilization: metrics[k].iter().map(|m| m.utilization).sum(),
            queue_length: metrics[k].iter().map(|m| m.queue_length).sum(),
        })
        .collect::<Vec<_>>();
    let class_totals = (0..nr_classes)
        .map(|c| ClassTotals {
            response_time: (0..nr_centers).map(|k| metrics[k][c].residence).sum(),
            throughput: class_throughput[c],
        })
        .collect::<Vec<_>>();

    Ok(Solution::new(
        model.title().to_owned(),
        algorithm,
        model.centers().cloned().collect(),
        model.classes().cloned().collect(),
        metrics,
        center_totals,
        class_totals,
    ))
}
