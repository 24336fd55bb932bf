use crate::model::{Center, DemandEntry, WorkloadClass};
use crate::spec::Spec;
use crate::units::{PerSec, Secs};

/// The single-channel model: one FCFS center carrying one open message stream.
pub(crate) fn channel_spec(arrival_rate: f64, visits: f64, service_time: f64) -> Spec {
    Spec::builder()
        .title("one channel")
        .centers(vec![Center::fcfs("channel")])
        .classes(vec![WorkloadClass::open(
            "messages",
            PerSec::new(arrival_rate),
        )])
        .demands(vec![DemandEntry::per_visit(
            "channel",
            "messages",
            visits,
            Secs::new(service_time),
        )])
        .build()
}

/// A mixed model: an open query stream over cpu and disk, plus a closed batch
/// class cycling through cpu, disk, and a delay center. The open class never
/// visits the terminals.
pub(crate) fn mixed_spec() -> Spec {
    Spec::builder()
        .title("mixed")
        .centers(vec![
            Center::fcfs("cpu"),
            Center::fcfs("disk"),
            Center::delay("terminals"),
        ])
        .classes(vec![
            WorkloadClass::open("queries", PerSec::new(0.4)),
            WorkloadClass::closed("batch", 3),
        ])
        .demands(vec![
            DemandEntry::per_visit("cpu", "queries", 2.0, Secs::new(0.25)),
            DemandEntry::total("disk", "queries", Secs::new(1.0)),
            DemandEntry::total("cpu", "batch", Secs::new(0.3)),
            DemandEntry::total("disk", "batch", Secs::new(0.2)),
            DemandEntry::total("terminals", "batch", Secs::new(1.0)),
        ])
        .build()
}

/// `nr_centers` identical FCFS centers visited by one closed class.
pub(crate) fn balanced_closed_spec(nr_centers: usize, population: u32, demand: f64) -> Spec {
    let centers = (0..nr_centers)
        .map(|k| Center::fcfs(format!("center-{k}")))
        .collect::<Vec<_>>();
    let demands = (0..nr_centers)
        .map(|k| DemandEntry::total(format!("center-{k}"), "batch", Secs::new(demand)))
        .collect::<Vec<_>>();
    Spec::builder()
        .title("balanced")
        .centers(centers)
        .classes(vec![WorkloadClass::closed("batch", population)])
        .demands(demands)
        .build()
}
