use clap::Parser;
use quenet_core::{
    model::{Center, DemandEntry, WorkloadClass},
    solve::{solve, Algorithm},
    spec::Spec,
    units::{PerSec, Secs},
};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Message arrival rate (per second)
    #[arg(short, long, default_value_t = 50.0)]
    arrival_rate: f64,

    /// Service time per visit (seconds)
    #[arg(short, long, default_value_t = 0.01)]
    service_time: f64,

    /// Visits to the channel per message
    #[arg(short, long, default_value_t = 1.0 / 0.7)]
    visits: f64,

    /// Solution algorithm
    #[arg(long, value_enum, default_value_t = AlgorithmArg::Canonical)]
    algorithm: AlgorithmArg,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum AlgorithmArg {
    Exact,
    Canonical,
    Bounds,
}

impl From<AlgorithmArg> for Algorithm {
    fn from(arg: AlgorithmArg) -> Self {
        match arg {
            AlgorithmArg::Exact => Algorithm::Exact,
            AlgorithmArg::Canonical => Algorithm::Canonical,
            AlgorithmArg::Bounds => Algorithm::Bounds,
        }
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let args = Args::parse();
    let load = args.arrival_rate * args.visits * args.service_time;
    anyhow::ensure!(
        load < 1.0,
        "offered load must be below 1.0 for a finite solution, got {load}"
    );

    let spec = Spec::builder()
        .title("message channel")
        .centers(vec![Center::fcfs("channel")])
        .classes(vec![WorkloadClass::open(
            "messages",
            PerSec::new(args.arrival_rate),
        )])
        .demands(vec![DemandEntry::per_visit(
            "channel",
            "messages",
            args.visits,
            Secs::new(args.service_time),
        )])
        .build();
    let solution = solve(spec, args.algorithm.into())?;
    println!("{}", solution.report());
    Ok(())
}
