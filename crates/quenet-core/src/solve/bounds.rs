//! Asymptotic bounds for closed chains. Each chain is bounded independently:
//! throughput saturates at the bottleneck center, response time at the
//! population cycling over its own demand.

use super::mva::ClosedSolution;

pub(crate) fn closed(
    populations: &[u32],
    demands: &[Vec<f64>],
    queueing: &[bool],
) -> ClosedSolution {
    let nr_centers = queueing.len();
    let mut residence = Vec::with_capacity(populations.len());
    let mut throughput = Vec::with_capacity(populations.len());
    let mut queue = Vec::with_capacity(populations.len());
    for (i, &population) in populations.iter().enumerate() {
        let d = &demands[i];
        let total = d.iter().sum::<f64>();
        if total == 0.0 {
            residence.push(vec![0.0; nr_centers]);
            throughput.push(0.0);
            queue.push(vec![0.0; nr_centers]);
            continue;
        }
        let n = f64::from(population);
        // The bottleneck is the queueing center with the largest demand.
        // Ties go to the earliest-registered center.
        let mut bottleneck: Option<usize> = None;
        for (k, &dk) in d.iter().enumerate() {
            if queueing[k] && dk > 0.0 && bottleneck.map_or(true, |b| dk > d[b]) {
                bottleneck = Some(k);
            }
        }
        let mut w = d.clone();
        let x = match bottleneck {
            Some(b) => {
                let x = (n / total).min(1.0 / d[b]);
                // Queueing in excess of the bare demands accumulates at the
                // bottleneck, keeping X*R = N.
                let excess = (n * d[b] - total).max(0.0);
                w[b] += excess;
                x
            }
            // All-delay chains never queue: the whole population cycles in
            // parallel.
            None => n / total,
        };
        queue.push(w.iter().map(|&w| x * w).collect());
        residence.push(w);
        throughput.push(x);
    }
    ClosedSolution {
        residence,
        throughput,
        queue,
    }
}
