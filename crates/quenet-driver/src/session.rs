//! A call-sequence facade over the model builder: define centers and classes,
//! set demands, solve, report — the way interactive queueing tools drive a
//! model. Errors fail fast at the offending call; overload is the exception,
//! since it depends on the aggregate demands and so surfaces from `solve`.

use quenet_core::{
    model::{Center, DemandEntry, Discipline, WorkloadClass},
    report::Report,
    solution::Solution,
    solve::Algorithm,
    units::{PerSec, Secs},
};

#[derive(Debug)]
pub struct Session {
    title: String,
    centers: Vec<Center>,
    classes: Vec<WorkloadClass>,
    demands: Vec<DemandEntry>,
    solution: Option<Solution>,
}

impl Session {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            centers: Vec::new(),
            classes: Vec::new(),
            demands: Vec::new(),
            solution: None,
        }
    }

    /// Register a service center.
    pub fn define_center(
        &mut self,
        name: impl Into<String>,
        discipline: Discipline,
    ) -> Result<(), SessionError> {
        let name = name.into();
        if self.centers.iter().any(|c| c.name == name) {
            return Err(SessionError::DuplicateCenter(name));
        }
        self.centers.push(Center::new(name, discipline));
        self.solution = None;
        Ok(())
    }

    /// Register an open workload class with an external arrival rate.
    pub fn define_open(
        &mut self,
        name: impl Into<String>,
        arrival_rate: PerSec,
    ) -> Result<(), SessionError> {
        self.define_class(WorkloadClass::open(name, arrival_rate))
    }

    /// Register a closed workload class with a fixed population.
    pub fn define_closed(
        &mut self,
        name: impl Into<String>,
        population: u32,
    ) -> Result<(), SessionError> {
        self.define_class(WorkloadClass::closed(name, population))
    }

    fn define_class(&mut self, class: WorkloadClass) -> Result<(), SessionError> {
        if self.classes.iter().any(|c| c.name == class.name) {
            return Err(SessionError::DuplicateClass(class.name));
        }
        self.classes.push(class);
        self.solution = None;
        Ok(())
    }

    /// Set the visit count and per-visit service time for a pair. The last
    /// write for a pair wins.
    pub fn set_visits(
        &mut self,
        center: &str,
        class: &str,
        visits: f64,
        service_time: Secs,
    ) -> Result<(), SessionError> {
        self.check_entry(center, class, visits, service_time)?;
        self.demands
            .push(DemandEntry::per_visit(center, class, visits, service_time));
        self.solution = None;
        Ok(())
    }

    /// Set the total demand for a pair. The last write for a pair wins.
    pub fn set_demand(
        &mut self,
        center: &str,
        class: &str,
        demand: Secs,
    ) -> Result<(), SessionError> {
        self.check_entry(center, class, 1.0, demand)?;
        self.demands.push(DemandEntry::total(center, class, demand));
        self.solution = None;
        Ok(())
    }

    fn check_entry(
        &self,
        center: &str,
        class: &str,
        visits: f64,
        service_time: Secs,
    ) -> Result<(), SessionError> {
        if !self.centers.iter().any(|c| c.name == center) {
            return Err(SessionError::UnknownCenter(center.to_owned()));
        }
        if !self.classes.iter().any(|c| c.name == class) {
            return Err(SessionError::UnknownClass(class.to_owned()));
        }
        // The negated comparisons also reject NaN.
        if !(visits >= 0.0) {
            return Err(SessionError::NegativeVisits(visits));
        }
        if !(service_time.into_f64() >= 0.0) {
            return Err(SessionError::NegativeService(service_time.into_f64()));
        }
        Ok(())
    }

    /// Solve the model as currently defined. Re-solving an unchanged session
    /// recomputes from scratch and yields identical metrics.
    pub fn solve(&mut self, algorithm: Algorithm) -> Result<&Solution, SessionError> {
        // A failed solve leaves no solution behind; no partial report.
        self.solution = None;
        let spec = quenet_core::Spec::builder()
            .title(self.title.clone())
            .centers(self.centers.clone())
            .classes(self.classes.clone())
            .demands(self.demands.clone())
            .build();
        let solution = quenet_core::solve(spec, algorithm)?;
        Ok(self.solution.insert(solution))
    }

    /// The report for the last successful solve.
    pub fn report(&self) -> Result<Report, SessionError> {
        self.solution
            .as_ref()
            .map(|s| s.report())
            .ok_or(SessionError::NotSolved)
    }

    pub fn solution(&self) -> Option<&Solution> {
        self.solution.as_ref()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    #[error("duplicate center {0}")]
    DuplicateCenter(String),

    #[error("duplicate class {0}")]
    DuplicateClass(String),

    #[error("unknown center {0}")]
    UnknownCenter(String),

    #[error("unknown class {0}")]
    UnknownClass(String),

    #[error("negative visit count {0}")]
    NegativeVisits(f64),

    #[error("negative service time {0}")]
    NegativeService(f64),

    #[error("the model has not been solved")]
    NotSolved,

    #[error(transparent)]
    Core(#[from] quenet_core::solve::Error),
}
