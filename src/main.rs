use std::{path::PathBuf, process::exit};

use itertools::Itertools;
use rand::SeedableRng;
use rand_pcg::Pcg64Mcg;

use eulertrace::{
    algo::{Eulerian, Eulerize},
    gens::NumNodesGen,
    io,
    prelude::*,
    sampler::{EulerianSampler, GraphModel},
    trace::CircuitTrace,
};

const USAGE: &str = "\
Usage: eulertrace <model> <nodes> [options]

Samples random graphs of the given model until one is Eulerian, extracts an
Eulerian circuit and renders it as a DOT digraph.

Models:
  dense          G(n, 0.9) random graphs
  small-world    ring lattices with n - 1 neighbors, rewired with probability 0.9

Options:
  --seed <u64>          seed for the random number generator
  --max-attempts <n>    cap regenerations; eulerize the last candidate instead
  --dot <path>          write the DOT output to a file instead of stdout";

struct Args {
    model: GraphModel,
    nodes: NumNodes,
    seed: Option<u64>,
    max_attempts: Option<u32>,
    dot: Option<PathBuf>,
}

impl Args {
    fn parse() -> Result<Self, String> {
        let mut args = std::env::args().skip(1);

        let model = match args.next().as_deref() {
            Some("dense") => GraphModel::DenseRandom,
            Some("small-world") => GraphModel::SmallWorld,
            Some(other) => return Err(format!("Unknown model: {other}")),
            None => return Err("Missing model".to_string()),
        };

        let nodes = args
            .next()
            .ok_or_else(|| "Missing number of nodes".to_string())?
            .parse::<NumNodes>()
            .map_err(|e| format!("Invalid number of nodes: {e}"))?;
        if nodes == 0 {
            return Err("The graph must have at least one node".to_string());
        }

        let mut parsed = Self {
            model,
            nodes,
            seed: None,
            max_attempts: None,
            dot: None,
        };

        while let Some(flag) = args.next() {
            let value = args.next().ok_or(format!("Missing value for {flag}"))?;
            match flag.as_str() {
                "--seed" => {
                    parsed.seed =
                        Some(value.parse().map_err(|e| format!("Invalid seed: {e}"))?);
                }
                "--max-attempts" => {
                    parsed.max_attempts = Some(
                        value
                            .parse()
                            .map_err(|e| format!("Invalid attempt cap: {e}"))?,
                    );
                }
                "--dot" => parsed.dot = Some(PathBuf::from(value)),
                _ => return Err(format!("Unknown option: {flag}")),
            }
        }

        Ok(parsed)
    }
}

fn main() {
    let args = match Args::parse() {
        Ok(args) => args,
        Err(msg) => {
            eprintln!("{msg}\n\n{USAGE}");
            exit(1);
        }
    };

    let rng = &mut Pcg64Mcg::seed_from_u64(args.seed.unwrap_or_else(rand::random));

    let mut sampler = EulerianSampler::new(args.model).nodes(args.nodes);
    if let Some(cap) = args.max_attempts {
        sampler = sampler.max_attempts(cap);
    }

    let sampled = match sampler.sample(rng) {
        Ok(sampled) => sampled,
        Err(_) => {
            // Only reachable with a capped sampler whose last candidate
            // cannot be eulerized
            println!("Is Eulerian?: False");
            return;
        }
    };

    let circuit = match sampled.graph.eulerian_circuit() {
        Ok(circuit) => circuit,
        Err(e) => {
            eprintln!("Sampler returned a graph without a circuit: {e}");
            exit(1);
        }
    };
    let trace = CircuitTrace::from_circuit(sampled.graph.number_of_nodes(), &circuit);

    println!(
        "[{}]",
        trace
            .sorted_labels()
            .map(|(Edge(u, v), i)| format!("(({u}, {v}), {i})"))
            .join(", ")
    );

    let rendered = match &args.dot {
        Some(path) => io::write_trace_file(&trace, path),
        None => io::write_trace(&trace, std::io::stdout().lock()),
    };
    if let Err(e) = rendered {
        eprintln!("Failed to write DOT output: {e}");
        exit(1);
    }

    println!(
        "Is Eulerian?: {}",
        if trace.graph().is_eulerian() {
            "True"
        } else {
            "False"
        }
    );
}
