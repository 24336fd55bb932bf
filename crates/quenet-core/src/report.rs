//! Rendering of a [`Solution`] as a formatted report: a per-(center, class)
//! metrics table, per-center and per-class totals, and a model-wide summary.
//! Rows follow registration order, so the output is deterministic.

use std::fmt;

use itertools::Itertools;

use crate::model::{CenterId, ClassId};
use crate::solution::Solution;

#[derive(Debug)]
pub struct Report {
    lines: Vec<String>,
}

impl Report {
    pub(crate) fn new(solution: &Solution) -> Self {
        let mut lines = Vec::new();
        lines.push(format!("*** Report: {} ***", solution.title()));
        lines.push(format!("Algorithm: {}", solution.algorithm().label()));

        lines.push(String::new());
        lines.push(format!(
            "{:<16}  {:<12} {:>8} {:>8} {:>8} {:>8}",
            "Center", "Class", "Util", "Qlen", "Resid", "Xput"
        ));
        for (k, center) in solution.centers().enumerate() {
            for (c, class) in solution.classes().enumerate() {
                let m = solution.metrics(CenterId::new(k), ClassId::new(c));
                lines.push(format!(
                    "{:<16}  {:<12} {:>8.4} {:>8.4} {:>8.4} {:>8.4}",
                    center.name,
                    class.name,
                    m.utilization,
                    m.queue_length,
                    m.residence.into_f64(),
                    m.throughput.into_f64(),
                ));
            }
        }

        lines.push(String::new());
        lines.push(format!(
            "{:<16}  {:>10} {:>10}",
            "Center", "Total util", "Total qlen"
        ));
        for (k, center) in solution.centers().enumerate() {
            let totals = solution.center_totals(CenterId::new(k));
            lines.push(format!(
                "{:<16}  {:>10.4} {:>10.4}",
                center.name, totals.utilization, totals.queue_length,
            ));
        }

        lines.push(String::new());
        lines.push(format!("{:<16}  {:>9} {:>8}", "Class", "Resp time", "Xput"));
        for (c, class) in solution.classes().enumerate() {
            let totals = solution.class_totals(ClassId::new(c));
            lines.push(format!(
                "{:<16}  {:>9.4} {:>8.4}",
                class.name,
                totals.response_time.into_f64(),
                totals.throughput.into_f64(),
            ));
        }

        lines.push(String::new());
        match solution.bottleneck() {
            Some(k) => {
                let totals = solution.center_totals(k);
                lines.push(format!(
                    "Bottleneck: {} (utilization {:.4})",
                    solution.center(k).name,
                    totals.utilization,
                ));
            }
            None => lines.push("Bottleneck: none".to_string()),
        }
        lines.push(format!(
            "System throughput: {:.4}/s",
            solution.system_throughput().into_f64()
        ));
        Self { lines }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.lines.iter().join("\n"))
    }
}

#[cfg(test)]
mod tests {
    use crate::model::{Center, DemandEntry, WorkloadClass};
    use crate::solve::Algorithm;
    use crate::spec::Spec;
    use crate::units::{PerSec, Secs};

    #[test]
    fn report_layout_is_stable() {
        // rho = 0.5, so every reported figure is exactly representable.
        let spec = Spec::builder()
            .title("one channel")
            .centers(vec![Center::fcfs("channel")])
            .classes(vec![WorkloadClass::open("messages", PerSec::new(0.25))])
            .demands(vec![DemandEntry::total("channel", "messages", Secs::new(2.0))])
            .build();
        let solution = crate::solve(spec, Algorithm::Exact).unwrap();
        insta::assert_snapshot!(solution.report().to_string(), @r###"
        *** Report: one channel ***
        Algorithm: exact

        Center            Class            Util     Qlen    Resid     Xput
        channel           messages       0.5000   1.0000   4.0000   0.2500

        Center            Total util Total qlen
        channel               0.5000     1.0000

        Class             Resp time     Xput
        messages             4.0000   0.2500

        Bottleneck: channel (utilization 0.5000)
        System throughput: 0.2500/s
        "###);
    }

    #[test]
    fn rows_follow_registration_order() {
        let spec = Spec::builder()
            .title("ordered")
            .centers(vec![
                Center::fcfs("zeta"),
                Center::fcfs("alpha"),
            ])
            .classes(vec![WorkloadClass::open("reqs", PerSec::new(0.1))])
            .demands(vec![
                DemandEntry::total("zeta", "reqs", Secs::new(0.5)),
                DemandEntry::total("alpha", "reqs", Secs::new(0.25)),
            ])
            .build();
        let report = crate::solve(spec, Algorithm::Exact).unwrap().report().to_string();
        let zeta = report.find("zeta").unwrap();
        let alpha = report.find("alpha").unwrap();
        assert!(zeta < alpha, "registration order must win over name order");
    }
}
