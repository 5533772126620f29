use clap::{Parser, Subcommand};
use osc_app::{
    AppError, AppResult, FrameSchedule, RunResponse, SeriesVariable, extract_series,
    load_scenario, run_file, save_scenario, validate_scenario,
};
use osc_project::Scenario;
use std::path::{Path, PathBuf};

#[derive(Parser)]
#[command(name = "osc-cli")]
#[command(about = "Damped harmonic oscillator simulator", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate scenario file syntax and values
    Validate {
        /// Path to the scenario YAML or JSON file
        scenario_path: PathBuf,
    },
    /// Solve a scenario and print a summary
    Run {
        /// Path to the scenario YAML or JSON file
        scenario_path: PathBuf,
        /// Print the trajectory as a table
        #[arg(long)]
        table: bool,
        /// Print every N-th sample in the table
        #[arg(long, default_value_t = 1)]
        every: usize,
    },
    /// Export one variable of a solved scenario as CSV
    Series {
        /// Path to the scenario YAML or JSON file
        scenario_path: PathBuf,
        /// Variable name (position, velocity, energy)
        variable: String,
        /// Output CSV file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
    /// Show the animation frame schedule for a scenario
    Frames {
        /// Path to the scenario YAML or JSON file
        scenario_path: PathBuf,
    },
    /// Print the default scenario, or write it to a file
    Defaults {
        /// Output file (.yaml, .yml or .json)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

fn main() -> AppResult<()> {
    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Validate { scenario_path } => cmd_validate(&scenario_path),
        Commands::Run {
            scenario_path,
            table,
            every,
        } => cmd_run(&scenario_path, table, every),
        Commands::Series {
            scenario_path,
            variable,
            output,
        } => cmd_series(&scenario_path, &variable, output.as_deref()),
        Commands::Frames { scenario_path } => cmd_frames(&scenario_path),
        Commands::Defaults { output } => cmd_defaults(output.as_deref()),
    }
}

fn cmd_validate(scenario_path: &Path) -> AppResult<()> {
    println!("Validating scenario: {}", scenario_path.display());
    let scenario = load_scenario(scenario_path)?;
    validate_scenario(&scenario)?;
    println!("✓ Scenario is valid");
    Ok(())
}

fn cmd_run(scenario_path: &Path, table: bool, every: usize) -> AppResult<()> {
    if every == 0 {
        return Err(AppError::InvalidInput("--every must be at least 1".to_string()));
    }

    let (scenario, response) = run_file(scenario_path)?;
    println!("✓ Solved '{}': {}", scenario.name, &response.run_id[..12]);

    print_summary(&response);

    if table {
        println!("\n{:>10} {:>14} {:>14}", "t (s)", "x (m)", "v (m/s)");
        for (t, state) in response.trajectory.iter().step_by(every) {
            println!(
                "{:>10.4} {:>14.6} {:>14.6}",
                t, state.position, state.velocity
            );
        }
    }

    Ok(())
}

fn print_summary(response: &RunResponse) {
    let summary = &response.summary;
    let p = &response.params;

    println!("\nParameters:");
    println!("  m = {} kg, k = {} N/m, c = {} N·s/m", p.mass, p.stiffness, p.damping);
    println!("  x0 = {} m, v0 = {} m/s", p.x0, p.v0);
    println!("  Damping convention: {:?}", p.convention);

    println!("\nRun Summary:");
    println!("  Samples: {}", summary.sample_count);
    println!(
        "  Time range: {:.3} - {:.3} s",
        summary.time_range.0, summary.time_range.1
    );
    println!("  ω = {:.4} rad/s", summary.natural_frequency_rad_s);
    println!(
        "  ζ = {:.4} ({})",
        summary.damping_ratio,
        summary.regime.label()
    );
    println!("  Peak |x|: {:.6} m", summary.peak_abs_position_m);
    println!(
        "  Energy: {:.6} J -> {:.6} J",
        summary.initial_energy_j, summary.final_energy_j
    );
    println!(
        "  Final state: x = {:.6} m, v = {:.6} m/s",
        summary.final_state.position, summary.final_state.velocity
    );
    println!("  Solve time: {:.3} ms", response.elapsed_s * 1000.0);
    println!("  Digest: {}", response.digest);
}

fn cmd_series(scenario_path: &Path, variable: &str, output: Option<&Path>) -> AppResult<()> {
    let variable: SeriesVariable = variable.parse()?;
    let (_scenario, response) = run_file(scenario_path)?;
    let series = extract_series(&response.params, &response.trajectory, variable);

    let mut csv = format!("time_s,{}_{}\n", variable.name(), csv_unit(variable));
    for (t, val) in &series {
        csv.push_str(&format!("{},{}\n", t, val));
    }

    if let Some(path) = output {
        std::fs::write(path, csv)?;
        println!(
            "✓ Exported {} {} samples to {}",
            series.len(),
            variable.name(),
            path.display()
        );
    } else {
        print!("{}", csv);
    }

    Ok(())
}

fn csv_unit(variable: SeriesVariable) -> &'static str {
    match variable {
        SeriesVariable::Position => "m",
        SeriesVariable::Velocity => "m_per_s",
        SeriesVariable::Energy => "j",
    }
}

fn cmd_frames(scenario_path: &Path) -> AppResult<()> {
    let (scenario, response) = run_file(scenario_path)?;
    let schedule = FrameSchedule::new(&response.trajectory, scenario.animation.playback_speed)?;

    println!("Frame schedule for '{}':", scenario.name);
    println!("  Frames: {}", schedule.frame_count());
    println!("  Interval: {:.3} ms", schedule.interval_ms());
    println!("  Playback speed: {}x", schedule.playback_speed());
    println!("  Duration: {:.3} s", schedule.duration_s());
    Ok(())
}

fn cmd_defaults(output: Option<&Path>) -> AppResult<()> {
    let scenario = Scenario::default();
    if let Some(path) = output {
        if path.exists() {
            return Err(AppError::InvalidInput(format!(
                "{} already exists",
                path.display()
            )));
        }
        save_scenario(path, &scenario)?;
        println!("✓ Wrote default scenario to {}", path.display());
    } else {
        let yaml = serde_yaml::to_string(&scenario)
            .map_err(|e| AppError::Scenario(e.to_string()))?;
        print!("{}", yaml);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn series_writes_csv_file() {
        let dir = std::env::temp_dir();
        let scenario_path = dir.join("osc_cli_series_scenario.yaml");
        let csv_path = dir.join("osc_cli_series_position.csv");
        save_scenario(&scenario_path, &Scenario::default()).unwrap();

        cmd_series(&scenario_path, "position", Some(&csv_path)).unwrap();

        let csv = std::fs::read_to_string(&csv_path).unwrap();
        let mut lines = csv.lines();
        assert_eq!(lines.next(), Some("time_s,position_m"));
        assert_eq!(lines.next(), Some("0,5"));
        assert_eq!(csv.lines().count(), 101);
    }

    #[test]
    fn series_rejects_unknown_variable() {
        let scenario_path = std::env::temp_dir().join("osc_cli_series_unknown.yaml");
        save_scenario(&scenario_path, &Scenario::default()).unwrap();
        assert!(cmd_series(&scenario_path, "pressure", None).is_err());
    }
}
