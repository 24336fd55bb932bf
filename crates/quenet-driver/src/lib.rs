//! File-driven front end for `quenet`: deserialize a model specification from
//! JSON or Dhall, solve it, and hand back the [`Solution`].

mod session;

use std::path::{Path, PathBuf};

pub use quenet_core::solution::Solution;
pub use session::{Session, SessionError};

use quenet_core::{
    model::{Center, DemandEntry, WorkloadClass},
    solve::Algorithm,
    units::Secs,
};

pub fn run_from_file(spec: impl AsRef<Path>) -> Result<Solution, Error> {
    let path = spec.as_ref();
    let contents = std::fs::read_to_string(path)?;
    let spec: Spec = match path.extension().and_then(|ext| ext.to_str()) {
        Some("json") => serde_json::from_str(&contents)?,
        Some("dhall") => serde_dhall::from_str(&contents).parse()?,
        _ => return Err(Error::UnknownFileType(path.into())),
    };
    run(spec)
}

pub fn run(spec: Spec) -> Result<Solution, Error> {
    let demands = spec.demands.into_iter().map(DemandEntry::from).collect();
    let core = quenet_core::Spec::builder()
        .title(spec.title)
        .centers(spec.centers)
        .classes(spec.classes)
        .demands(demands)
        .build();
    let solution = quenet_core::solve(core, spec.algorithm)?;
    Ok(solution)
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unknown file type: {0}")]
    UnknownFileType(PathBuf),

    #[error("Dhall error")]
    Dhall(#[from] serde_dhall::Error),

    #[error("JSON error")]
    Json(#[from] serde_json::Error),

    #[error("IO error")]
    Io(#[from] std::io::Error),

    #[error("failed to solve model")]
    Solve(#[from] quenet_core::solve::Error),
}

#[derive(Debug, serde::Serialize, serde::Deserialize)]
pub struct Spec {
    pub title: String,
    pub centers: Vec<Center>,
    pub classes: Vec<WorkloadClass>,
    pub demands: Vec<DemandForm>,
    pub algorithm: Algorithm,
}

/// The two on-file demand forms: a visit count with a per-visit service time,
/// or a total demand. Both populate the same parameter table.
#[derive(Debug, serde::Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum DemandForm {
    PerVisit {
        center: String,
        class: String,
        visits: f64,
        service_time: Secs,
    },
    Total {
        center: String,
        class: String,
        demand: Secs,
    },
}

impl From<DemandForm> for DemandEntry {
    fn from(form: DemandForm) -> Self {
        match form {
            DemandForm::PerVisit {
                center,
                class,
                visits,
                service_time,
            } => DemandEntry::per_visit(center, class, visits, service_time),
            DemandForm::Total {
                center,
                class,
                demand,
            } => DemandEntry::total(center, class, demand),
        }
    }
}
