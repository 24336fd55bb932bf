//! This module defines model specifications ([`Spec`]), which consist of service
//! centers, workload classes, and demand entries. `quenet` validates a
//! specification into a [`Model`](crate::model::Model), which can be solved for
//! per-center and per-class performance metrics.

use rustc_hash::FxHashMap;

use crate::model::{
    demand::DemandTable,
    types::{Center, CenterId, ClassId, ClassKind, Demand, DemandEntry, WorkloadClass},
    Model,
};

/// A model specification.
#[derive(Debug, typed_builder::TypedBuilder)]
pub struct Spec {
    /// Model title, echoed in the report header.
    #[builder(setter(into))]
    pub title: String,
    /// Service centers, in registration order.
    pub centers: Vec<Center>,
    /// Workload classes, in registration order.
    pub classes: Vec<WorkloadClass>,
    /// Parameter-table entries. Later entries overwrite earlier ones for the
    /// same (center, class) pair.
    #[builder(default)]
    pub demands: Vec<DemandEntry>,
}

impl Spec {
    /// Validate a specification, producing a [`Model`].
    ///
    /// Correctness properties:
    ///
    /// - Every center and class name must be unique.
    /// - Every demand entry must reference a registered center and class.
    /// - Visit counts and service times must be non-negative.
    /// - Open arrival rates must be positive and finite; closed populations
    ///   must be non-empty.
    pub fn validate(self) -> Result<Model, SpecError> {
        let mut center_ids = FxHashMap::default();
        for (i, center) in self.centers.iter().enumerate() {
            // CORRECTNESS: Every center name must be unique.
            if center_ids
                .insert(center.name.clone(), CenterId::new(i))
                .is_some()
            {
                return Err(SpecError::DuplicateCenter(center.name.clone()));
            }
        }
        let mut class_ids = FxHashMap::default();
        for (i, class) in self.classes.iter().enumerate() {
            // CORRECTNESS: Every class name must be unique.
            if class_ids
                .insert(class.name.clone(), ClassId::new(i))
                .is_some()
            {
                return Err(SpecError::DuplicateClass(class.name.clone()));
            }
            match class.kind {
                // CORRECTNESS: Open arrival rates must be positive and finite.
                ClassKind::Open { arrival_rate } => {
                    let rate = arrival_rate.into_f64();
                    if !rate.is_finite() || rate <= 0.0 {
                        return Err(SpecError::NonPositiveRate {
                            class: class.name.clone(),
                            rate,
                        });
                    }
                }
                // CORRECTNESS: Closed populations must be non-empty.
                ClassKind::Closed { population } => {
                    if population == 0 {
                        return Err(SpecError::EmptyPopulation {
                            class: class.name.clone(),
                        });
                    }
                }
            }
        }
        let mut demands = DemandTable::new();
        for entry in &self.demands {
            // CORRECTNESS: Every demand entry must reference a registered
            // center and class.
            let center = *center_ids
                .get(&entry.center)
                .ok_or_else(|| SpecError::UnknownCenter(entry.center.clone()))?;
            let class = *class_ids
                .get(&entry.class)
                .ok_or_else(|| SpecError::UnknownClass(entry.class.clone()))?;
            // CORRECTNESS: Visit counts and service times must be non-negative.
            // The negated comparisons also reject NaN.
            if !(entry.visits >= 0.0) {
                return Err(SpecError::NegativeVisits {
                    center: entry.center.clone(),
                    class: entry.class.clone(),
                    visits: entry.visits,
                });
            }
            if !(entry.service_time.into_f64() >= 0.0) {
                return Err(SpecError::NegativeService {
                    center: entry.center.clone(),
                    class: entry.class.clone(),
                    service: entry.service_time.into_f64(),
                });
            }
            demands.insert(center, class, Demand::new(entry.visits, entry.service_time));
        }
        Ok(Model::new(
            self.title,
            self.centers,
            self.classes,
            center_ids,
            class_ids,
            demands,
        ))
    }
}

/// Model specification error.
#[derive(Debug, thiserror::Error)]
pub enum SpecError {
    /// A center name was registered twice.
    #[error("duplicate center {0}")]
    DuplicateCenter(String),

    /// A class name was registered twice.
    #[error("duplicate class {0}")]
    DuplicateClass(String),

    /// A demand entry references an unregistered center.
    #[error("unknown center {0}")]
    UnknownCenter(String),

    /// A demand entry references an unregistered class.
    #[error("unknown class {0}")]
    UnknownClass(String),

    /// A demand entry carries a negative visit count.
    #[error("negative visit count {visits} for ({center}, {class})")]
    NegativeVisits {
        center: String,
        class: String,
        visits: f64,
    },

    /// A demand entry carries a negative service time.
    #[error("negative service time {service} for ({center}, {class})")]
    NegativeService {
        center: String,
        class: String,
        service: f64,
    },

    /// An open class must have a positive, finite arrival rate.
    #[error("class {class} has a non-positive arrival rate ({rate})")]
    NonPositiveRate { class: String, rate: f64 },

    /// A closed class must have at least one customer.
    #[error("closed class {class} has an empty population")]
    EmptyPopulation { class: String },
}

#[cfg(test)]
mod tests {
    use crate::testing;
    use crate::units::{PerSec, Secs};

    use super::*;

    #[test]
    fn valid_spec_succeeds() {
        assert!(testing::channel_spec(0.7, 1.0, 0.01).validate().is_ok());
    }

    #[test]
    fn duplicate_center_fails() {
        let spec = Spec::builder()
            .title("dup")
            .centers(vec![Center::fcfs("cpu"), Center::fcfs("cpu")])
            .classes(vec![WorkloadClass::open("reqs", PerSec::new(1.0))])
            .build();
        assert!(matches!(
            spec.validate(),
            Err(SpecError::DuplicateCenter(..))
        ));
    }

    #[test]
    fn duplicate_class_fails() {
        let spec = Spec::builder()
            .title("dup")
            .centers(vec![Center::fcfs("cpu")])
            .classes(vec![
                WorkloadClass::open("reqs", PerSec::new(1.0)),
                WorkloadClass::closed("reqs", 4),
            ])
            .build();
        assert!(matches!(spec.validate(), Err(SpecError::DuplicateClass(..))));
    }

    #[test]
    fn unknown_center_fails() {
        let mut spec = testing::channel_spec(0.7, 1.0, 0.01);
        spec.demands
            .push(DemandEntry::total("nowhere", "messages", Secs::new(0.1)));
        assert!(matches!(spec.validate(), Err(SpecError::UnknownCenter(..))));
    }

    #[test]
    fn unknown_class_fails() {
        let mut spec = testing::channel_spec(0.7, 1.0, 0.01);
        spec.demands
            .push(DemandEntry::total("channel", "nobody", Secs::new(0.1)));
        assert!(matches!(spec.validate(), Err(SpecError::UnknownClass(..))));
    }

    #[test]
    fn negative_visits_fails() {
        let spec = testing::channel_spec(0.7, -1.0, 0.01);
        assert!(matches!(
            spec.validate(),
            Err(SpecError::NegativeVisits { .. })
        ));
    }

    #[test]
    fn negative_service_fails() {
        let spec = testing::channel_spec(0.7, 1.0, -0.01);
        assert!(matches!(
            spec.validate(),
            Err(SpecError::NegativeService { .. })
        ));
    }

    #[test]
    fn non_positive_rate_fails() {
        let spec = testing::channel_spec(0.0, 1.0, 0.01);
        assert!(matches!(
            spec.validate(),
            Err(SpecError::NonPositiveRate { .. })
        ));
    }

    #[test]
    fn empty_population_fails() {
        let spec = Spec::builder()
            .title("empty")
            .centers(vec![Center::fcfs("cpu")])
            .classes(vec![WorkloadClass::closed("batch", 0)])
            .build();
        assert!(matches!(
            spec.validate(),
            Err(SpecError::EmptyPopulation { .. })
        ));
    }

    #[test]
    fn per_visit_demand_round_trips() {
        let model = testing::channel_spec(0.7, 2.0, 0.01).validate().unwrap();
        let center = model.center_id("channel").unwrap();
        let class = model.class_id("messages").unwrap();
        assert_eq!(model.visits(center, class), 2.0);
        assert!((model.demand(center, class).into_f64() - 0.02).abs() < 1e-12);
    }

    #[test]
    fn total_demand_round_trips() {
        let spec = Spec::builder()
            .title("total")
            .centers(vec![Center::fcfs("cpu")])
            .classes(vec![WorkloadClass::open("reqs", PerSec::new(1.0))])
            .demands(vec![DemandEntry::total("cpu", "reqs", Secs::new(0.125))])
            .build();
        let model = spec.validate().unwrap();
        let center = model.center_id("cpu").unwrap();
        let class = model.class_id("reqs").unwrap();
        assert_eq!(model.demand(center, class), Secs::new(0.125));
        assert_eq!(model.visits(center, class), 1.0);
    }

    #[test]
    fn later_entries_overwrite_earlier_ones() {
        let spec = Spec::builder()
            .title("rewrite")
            .centers(vec![Center::fcfs("cpu")])
            .classes(vec![WorkloadClass::open("reqs", PerSec::new(1.0))])
            .demands(vec![
                DemandEntry::per_visit("cpu", "reqs", 4.0, Secs::new(0.5)),
                DemandEntry::total("cpu", "reqs", Secs::new(0.125)),
            ])
            .build();
        let model = spec.validate().unwrap();
        let center = model.center_id("cpu").unwrap();
        let class = model.class_id("reqs").unwrap();
        assert_eq!(model.demand(center, class), Secs::new(0.125));
    }
}
