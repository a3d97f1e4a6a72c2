use wellsim::{ScenarioConfig, Scenario, Termination};
use wellsim::bench_integrators;

use clap::{Parser, ValueEnum};
use anyhow::{Context, Result};

use std::path::PathBuf;

#[derive(ValueEnum, Clone, Copy, Debug)]
enum Preset {
    Gaussian,
    Membrane,
    Orbital,
}

#[derive(Parser, Debug)]
#[command(about = "Simulate a ball rolling on a gravity well")]
struct Args {
    /// Scenario file; relative names are looked up in `scenarios/`
    #[arg(short, default_value = "membrane.yaml")]
    file_name: String,

    /// Use a built-in scenario instead of a file
    #[arg(long, value_enum)]
    preset: Option<Preset>,

    /// Print the whole trajectory as JSON
    #[arg(long)]
    json: bool,

    /// Time the integrators on every preset and exit
    #[arg(long)]
    bench: bool,
}

// load here to keep main clean
fn load_scenario(args: &Args) -> Result<ScenarioConfig> {
    if let Some(preset) = args.preset {
        return Ok(match preset {
            Preset::Gaussian => ScenarioConfig::gaussian_well(),
            Preset::Membrane => ScenarioConfig::membrane(),
            Preset::Orbital => ScenarioConfig::orbital(),
        });
    }

    let given = PathBuf::from(&args.file_name);
    let config_path = if given.exists() {
        given
    } else {
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("scenarios").join(&args.file_name)
    };

    let cfg = ScenarioConfig::from_path(&config_path)
        .with_context(|| format!("failed to load scenario {}", config_path.display()))?;
    Ok(cfg)
}

fn main() -> Result<()> {
    env_logger::init();
    let args = Args::parse();

    if args.bench {
        bench_integrators();
        return Ok(());
    }

    let scenario_cfg = load_scenario(&args)?;
    let scenario = Scenario::build_scenario(&scenario_cfg)?;
    let result = scenario.run();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    let end = result.final_state;
    let outcome = match result.termination {
        Termination::Collided => "collided with the central body",
        Termination::Escaped => "escaped past the boundary",
        Termination::BudgetExhausted => "ran out of steps",
    };
    println!(
        "{} after {}/{} steps: x = ({:.5}, {:.5}), v = ({:.5}, {:.5}), r = {:.5}",
        outcome,
        result.steps_run,
        scenario.parameters.steps,
        end.x.x,
        end.x.y,
        end.v.x,
        end.v.y,
        end.radius()
    );

    Ok(())
}
