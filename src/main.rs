//! Oligosim - Entry point
//!
//! Chemical reaction network simulator for branched oligomer growth.
//!
//! CLI Usage:
//!   cargo run                          # Simulate with default parameters
//!   cargo run -- --list-reactions      # Print the reaction set and exit
//!   cargo run -- -n 12 -t 50.0 --csv   # Custom size bound, span, CSV export

use std::collections::HashMap;
use std::time::Instant;

use anyhow::Result;
use oligosim::{
    chemistry::build_reaction_records,
    config::Parameters,
    export::{export_solution_json, export_table_csv},
    network::{IntegratorConfig, ReactionNetwork},
};

/// Parsed CLI options
struct CliArgs {
    /// Print the generated reaction set instead of solving
    list_reactions: bool,
    /// Override for the maximum chain size
    max_chain_size: Option<u32>,
    /// Override for the end of the time span
    t_end: Option<f64>,
    /// Override for the number of output time points
    samples: Option<usize>,
    /// Parameter directory instead of the default locations
    params_dir: Option<String>,
    /// Write the solved table as CSV
    csv: bool,
    /// Write the solved table as JSON
    json: bool,
}

/// Parse CLI arguments
fn parse_args() -> CliArgs {
    let args: Vec<String> = std::env::args().collect();
    let mut parsed = CliArgs {
        list_reactions: false,
        max_chain_size: None,
        t_end: None,
        samples: None,
        params_dir: None,
        csv: false,
        json: false,
    };

    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--list-reactions" | "-l" => parsed.list_reactions = true,
            "-n" | "--max-size" => {
                i += 1;
                if i < args.len() {
                    parsed.max_chain_size = args[i].parse().ok();
                }
            }
            "-t" | "--t-end" => {
                i += 1;
                if i < args.len() {
                    parsed.t_end = args[i].parse().ok();
                }
            }
            "-s" | "--samples" => {
                i += 1;
                if i < args.len() {
                    parsed.samples = args[i].parse().ok();
                }
            }
            "-p" | "--params" => {
                i += 1;
                if i < args.len() {
                    parsed.params_dir = Some(args[i].clone());
                }
            }
            "--csv" => parsed.csv = true,
            "--json" => parsed.json = true,
            "--help" | "-h" => {
                println!("Oligosim");
                println!();
                println!("Usage: oligosim [OPTIONS]");
                println!();
                println!("Options:");
                println!("  --list-reactions, -l  Print the reaction set and exit");
                println!("  -n, --max-size N      Maximum chain size (even, default: 10)");
                println!("  -t, --t-end T         End of the time span (default: 100.0)");
                println!("  -s, --samples N       Number of output time points (default: 201)");
                println!("  -p, --params DIR      Load parameter JSON files from DIR");
                println!("  --csv                 Export the solved table as CSV");
                println!("  --json                Export the solved table as JSON");
                println!("  --help, -h            Show this help");
                std::process::exit(0);
            }
            _ => {}
        }
        i += 1;
    }

    parsed
}

fn main() -> Result<()> {
    env_logger::init();

    let args = parse_args();

    log::info!("Oligosim starting...");

    // Load parameters, then apply CLI overrides
    let mut params = match &args.params_dir {
        Some(dir) => Parameters::load_from_dir(dir),
        None => Parameters::load_or_default(),
    };
    if let Some(n) = args.max_chain_size {
        params.kinetics.max_chain_size = n;
    }
    if let Some(t_end) = args.t_end {
        params.simulation.t_end = t_end;
    }
    if let Some(samples) = args.samples {
        params.simulation.n_time_points = samples;
    }
    log::info!(
        "Parameters: max chain size {}, t_end {}",
        params.kinetics.max_chain_size,
        params.simulation.t_end
    );

    // Assemble the symbolic reaction set
    let records = build_reaction_records(&params.kinetics);
    println!("Generated {} reactions for N = {}", records.len(), params.kinetics.max_chain_size);

    if args.list_reactions {
        for record in &records {
            match record.backward {
                Some(kb) => println!("{}    kf={}  kb={}", record.equation, record.forward, kb),
                None => println!("{}    kf={}", record.equation, record.forward),
            }
        }
        return Ok(());
    }

    // Build the network and solve over the configured time grid
    let network = ReactionNetwork::from_records(&records)?
        .with_fixed_concentrations(params.simulation.fixed_species.iter().cloned())
        .with_integrator_config(IntegratorConfig {
            dt: params.simulation.integrator_dt,
            min_concentration: params.simulation.min_concentration,
        });
    println!("Network species: {}", network.species_count());

    let initial: HashMap<String, f64> = params.simulation.initial_concentrations.clone();
    let time_grid = params.simulation.time_grid();

    let start_time = Instant::now();
    let table = network.solve(&initial, &time_grid)?;
    let elapsed = start_time.elapsed();

    println!("\n=== Results ===");
    println!("Elapsed time: {:.2?}", elapsed);
    println!(
        "Solved {} time points over [0, {}]",
        table.len(),
        params.simulation.t_end
    );
    println!("\nFinal concentrations (t = {}):", params.simulation.t_end);
    let last = table.len() - 1;
    for (species, value) in table.species().iter().zip(table.row(last)) {
        println!("  {:<20} {:.6e}", species, value);
    }

    if args.csv {
        let path = export_table_csv(&table)?;
        println!("\nCSV written: {}", path.display());
    }
    if args.json {
        let path = export_solution_json(&table)?;
        println!("JSON written: {}", path.display());
    }

    Ok(())
}
