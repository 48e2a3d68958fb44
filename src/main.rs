use solsim::{ScenarioConfig, Scenario, AU, DAY};
use solsim::{run_2d, step};

use clap::Parser;
use anyhow::{Context, Result};
use log::info;

use std::fs::File;
use std::io::BufReader;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(about = "Fixed-step solar system simulation")]
struct Args {
    /// Scenario YAML, looked up under scenarios/ unless the path exists. Built-in solar system if omitted
    #[arg(short, long)]
    file_name: Option<String>,

    /// Run without a window and log a summary at the end
    #[arg(long)]
    headless: bool,

    /// Number of ticks for a headless run (one tick = one simulated day by default)
    #[arg(long, default_value_t = 365)]
    steps: u64,
}

// load here to keep main clean
fn load_scenario_from_yaml(file_name: &str) -> Result<ScenarioConfig> {
    let mut config_path = PathBuf::from(file_name);
    if !config_path.exists() {
        config_path = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(file_name);
    }

    let file = File::open(&config_path)
        .with_context(|| format!("failed to open scenario {}", config_path.display()))?;
    let reader = BufReader::new(file);
    let scenario_cfg: ScenarioConfig = serde_yaml::from_reader(reader)
        .with_context(|| format!("failed to parse scenario {}", config_path.display()))?;

    Ok(scenario_cfg)
}

fn run_headless(mut scenario: Scenario, steps: u64) -> Result<()> {
    for _ in 0..steps {
        step(&mut scenario)?;
    }

    let sys = &scenario.system;
    info!("{} steps, {:.1} simulated days", sys.steps, sys.t / DAY);
    for b in &sys.bodies {
        info!(
            "{:>8}: x = ({:+.4}, {:+.4}) AU, |v| = {:.1} m/s, distance to anchor = {:.2} km",
            b.name,
            b.x.x / AU,
            b.x.y / AU,
            b.v.norm(),
            b.distance_to_anchor / 1000.0
        );
    }
    info!(
        "total energy = {:.6e} J, center of mass velocity = {:.3e} m/s",
        sys.kinetic_energy() + sys.potential_energy(scenario.parameters.G),
        sys.center_of_mass_velocity().norm()
    );
    Ok(())
}

fn main() -> Result<()> {
    let args = Args::parse();

    // the viewer installs its own logger through bevy's LogPlugin
    if args.headless {
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();
    }

    let scenario_cfg = match &args.file_name {
        Some(file_name) => load_scenario_from_yaml(file_name)?,
        None => ScenarioConfig::default(),
    };
    let scenario = Scenario::build_scenario(scenario_cfg)?;

    if args.headless {
        return run_headless(scenario, args.steps);
    }

    let exit = run_2d(scenario);
    if exit.is_error() {
        anyhow::bail!("viewer exited with an error");
    }

    Ok(())
}
