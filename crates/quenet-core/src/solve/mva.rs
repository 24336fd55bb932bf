//! Mean value analysis for closed chains. Inputs are per-chain total demands
//! (already inflated by open utilization) indexed `[chain][center]`; a chain
//! with no demand anywhere has no finite cycle and simply stays idle.

use log::debug;
use rustc_hash::FxHashMap;

/// Per-chain solution: residence per completion, chain throughput, and mean
/// queue length, indexed `[chain][center]`.
#[derive(Debug)]
pub(crate) struct ClosedSolution {
    pub(crate) residence: Vec<Vec<f64>>,
    pub(crate) throughput: Vec<f64>,
    pub(crate) queue: Vec<Vec<f64>>,
}

impl ClosedSolution {
    pub(crate) fn empty() -> Self {
        Self {
            residence: Vec::new(),
            throughput: Vec::new(),
            queue: Vec::new(),
        }
    }

    fn from_residence(residence: Vec<Vec<f64>>, throughput: Vec<f64>) -> Self {
        let queue = residence
            .iter()
            .zip(&throughput)
            .map(|(w, &x)| w.iter().map(|&w| x * w).collect())
            .collect();
        Self {
            residence,
            throughput,
            queue,
        }
    }
}

/// Exact multiclass MVA: recurse over every population vector n <= N. The
/// recursion for n reads Q(n - e_c), which mixed-radix counting order
/// guarantees to have been computed already.
pub(crate) fn exact(populations: &[u32], demands: &[Vec<f64>], queueing: &[bool]) -> ClosedSolution {
    let nr_chains = populations.len();
    let nr_centers = queueing.len();
    let nr_vectors: u64 = populations.iter().map(|&n| u64::from(n) + 1).product();
    debug!("exact MVA over {nr_vectors} population vectors");

    let mut queues: FxHashMap<Vec<u32>, Vec<f64>> = FxHashMap::default();
    queues.insert(vec![0; nr_chains], vec![0.0; nr_centers]);
    let mut residence = vec![vec![0.0; nr_centers]; nr_chains];
    let mut throughput = vec![0.0; nr_chains];
    let mut n = vec![0u32; nr_chains];
    while increment(&mut n, populations) {
        let mut w_n = vec![vec![0.0; nr_centers]; nr_chains];
        let mut x_n = vec![0.0; nr_chains];
        let mut q_n = vec![0.0; nr_centers];
        for c in 0..nr_chains {
            if n[c] == 0 {
                continue;
            }
            let mut prev = n.clone();
            prev[c] -= 1;
            let q_prev = &queues[&prev];
            for k in 0..nr_centers {
                let d = demands[c][k];
                w_n[c][k] = if queueing[k] { d * (1.0 + q_prev[k]) } else { d };
            }
            let cycle = w_n[c].iter().sum::<f64>();
            x_n[c] = if cycle > 0.0 { f64::from(n[c]) / cycle } else { 0.0 };
            for k in 0..nr_centers {
                q_n[k] += x_n[c] * w_n[c][k];
            }
        }
        let full = n.iter().zip(populations).all(|(a, b)| a == b);
        if full {
            residence = w_n;
            throughput = x_n;
        }
        queues.insert(n.clone(), q_n);
    }
    ClosedSolution::from_residence(residence, throughput)
}

/// Mixed-radix increment towards `max`; returns false after the last vector.
fn increment(n: &mut [u32], max: &[u32]) -> bool {
    for i in (0..n.len()).rev() {
        if n[i] < max[i] {
            n[i] += 1;
            for digit in &mut n[i + 1..] {
                *digit = 0;
            }
            return true;
        }
    }
    false
}

const TOLERANCE: f64 = 1e-8;
const MAX_ITERATIONS: usize = 10_000;

/// Bard-Schweitzer approximate MVA. The queue an arriving chain-c customer
/// sees is estimated from the full-population queue lengths, then iterated to
/// a fixed point.
pub(crate) fn schweitzer(
    populations: &[u32],
    demands: &[Vec<f64>],
    queueing: &[bool],
) -> ClosedSolution {
    let nr_chains = populations.len();
    let nr_centers = queueing.len();
    let mut queue = populations
        .iter()
        .map(|&n| vec![f64::from(n) / nr_centers as f64; nr_centers])
        .collect::<Vec<_>>();
    let mut residence = vec![vec![0.0; nr_centers]; nr_chains];
    let mut throughput = vec![0.0; nr_chains];
    for iteration in 0..MAX_ITERATIONS {
        let totals = (0..nr_centers)
            .map(|k| queue.iter().map(|q| q[k]).sum::<f64>())
            .collect::<Vec<_>>();
        let mut delta: f64 = 0.0;
        for c in 0..nr_chains {
            let population = f64::from(populations[c]);
            for k in 0..nr_centers {
                let d = demands[c][k];
                residence[c][k] = if queueing[k] {
                    // An arriving customer sees everyone else's queue plus
                    // (n_c - 1)/n_c of its own chain's.
                    d * (1.0 + totals[k] - queue[c][k] / population)
                } else {
                    d
                };
            }
            let cycle = residence[c].iter().sum::<f64>();
            throughput[c] = if cycle > 0.0 { population / cycle } else { 0.0 };
            for k in 0..nr_centers {
                let next = throughput[c] * residence[c][k];
                delta = delta.max((next - queue[c][k]).abs());
                queue[c][k] = next;
            }
        }
        if delta < TOLERANCE {
            debug!("Schweitzer MVA converged after {} iterations", iteration + 1);
            break;
        }
    }
    ClosedSolution {
        residence,
        throughput,
        queue,
    }
}
