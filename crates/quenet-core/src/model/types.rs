use crate::units::{PerSec, Secs};

identifier!(CenterId, usize);

identifier!(ClassId, usize);

/// A service center.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Center {
    pub name: String,
    pub discipline: Discipline,
}

impl Center {
    pub fn new(name: impl Into<String>, discipline: Discipline) -> Self {
        Self {
            name: name.into(),
            discipline,
        }
    }

    /// A queueing center served first-come-first-served.
    pub fn fcfs(name: impl Into<String>) -> Self {
        Self::new(name, Discipline::Fcfs)
    }

    /// A delay (infinite-server) center.
    pub fn delay(name: impl Into<String>) -> Self {
        Self::new(name, Discipline::Is)
    }
}

/// Scheduling disciplines. `Fcfs`, `LcfsPr`, and `Ps` share mean-value behavior
/// in separable networks; `Is` is the pure delay discipline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum Discipline {
    Fcfs,
    LcfsPr,
    Ps,
    Is,
}

impl Discipline {
    /// Whether customers at this discipline contend for a single server.
    pub fn is_queueing(self) -> bool {
        !matches!(self, Discipline::Is)
    }
}

/// A workload class.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct WorkloadClass {
    pub name: String,
    pub kind: ClassKind,
}

impl WorkloadClass {
    /// An open class: unbounded population driven by an external arrival rate.
    pub fn open(name: impl Into<String>, arrival_rate: PerSec) -> Self {
        Self {
            name: name.into(),
            kind: ClassKind::Open { arrival_rate },
        }
    }

    /// A closed class: a fixed population circulating with no external
    /// arrivals or departures.
    pub fn closed(name: impl Into<String>, population: u32) -> Self {
        Self {
            name: name.into(),
            kind: ClassKind::Closed { population },
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize, serde::Deserialize)]
pub enum ClassKind {
    Open { arrival_rate: PerSec },
    Closed { population: u32 },
}

/// One parameter-table entry: how much work a class places on a center.
/// Entries for the same (center, class) pair overwrite each other; the last
/// write wins.
#[derive(Debug, Clone, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct DemandEntry {
    pub center: String,
    pub class: String,
    pub visits: f64,
    pub service_time: Secs,
}

impl DemandEntry {
    /// Visit count and per-visit service time.
    pub fn per_visit(
        center: impl Into<String>,
        class: impl Into<String>,
        visits: f64,
        service_time: Secs,
    ) -> Self {
        Self {
            center: center.into(),
            class: class.into(),
            visits,
            service_time,
        }
    }

    /// Total service demand, stored as a single visit.
    pub fn total(center: impl Into<String>, class: impl Into<String>, demand: Secs) -> Self {
        Self {
            center: center.into(),
            class: class.into(),
            visits: 1.0,
            service_time: demand,
        }
    }
}

/// Validated per-pair parameters.
#[derive(Debug, Clone, Copy, PartialEq, derive_new::new)]
pub struct Demand {
    pub visits: f64,
    pub service_time: Secs,
}

impl Demand {
    /// Total demand D = V×S.
    pub fn total(&self) -> Secs {
        self.service_time * self.visits
    }
}
