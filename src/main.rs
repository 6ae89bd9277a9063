use clap::Parser;
use projectile_simulation::*;

#[derive(Parser)]
#[command(name = "projectile")]
#[command(about = "Throws balls of different masses with and without air drag", long_about = None)]
struct Cli {
    /// Projectile mass in grams (repeat for several throws)
    #[arg(short = 'm', long = "mass", default_values_t = MASS_MENU_GRAMS.to_vec())]
    masses: Vec<f64>,

    /// Enable air drag
    #[arg(short = 'd', long)]
    drag: bool,

    /// Throw every mass both with and without drag
    #[arg(long, conflicts_with = "drag")]
    compare: bool,

    /// Integration time step (s)
    #[arg(long, default_value_t = TIME_STEP)]
    dt: f64,

    /// Stop integrating after this many seconds
    #[arg(long, default_value_t = MAX_SIMULATION_TIME)]
    max_time: f64,

    /// Integrate until ground contact with no time limit
    #[arg(long, conflicts_with = "max_time")]
    no_time_limit: bool,

    /// Samples advanced per playback frame
    #[arg(long, default_value_t = PLAYBACK_STRIDE)]
    stride: usize,

    /// JSON file overriding the physical constants
    #[arg(long)]
    constants: Option<std::path::PathBuf>,

    /// Print the trajectory history as JSON instead of the text report
    #[arg(long)]
    json: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    let constants = match &cli.constants {
        Some(path) => SimulationConstants::from_json_file(path)?,
        None => SimulationConstants::default(),
    };

    let max_time = if cli.no_time_limit {
        None
    } else {
        Some(cli.max_time)
    };
    let drag_states: &[bool] = if cli.compare {
        &[false, true]
    } else if cli.drag {
        &[true]
    } else {
        &[false]
    };

    let requests: Vec<SimulationRequest> = cli
        .masses
        .iter()
        .flat_map(|&mass| {
            drag_states.iter().map(move |&drag| {
                SimulationRequest::from_grams(mass, drag)
                    .with_time_step(cli.dt)
                    .with_max_time(max_time)
            })
        })
        .collect();

    let mut history = TrajectoryHistory::new();
    let mut telemetry = Telemetry::new();

    for result in simulate_batch(&constants, &requests) {
        let trajectory = result?;
        let frames = PlaybackPlan::for_trajectory(&trajectory, cli.stride)?.frame_count();
        let entry = history.push(trajectory);
        telemetry.collect(entry);

        if !cli.json {
            println!(
                "Threw {} -> {:.2} m ({} frames)",
                entry.style.label,
                entry.trajectory.landing_distance(),
                frames
            );
        }
    }

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&history)?);
    } else {
        let bounds = PlotBounds::covering(&history, None);
        println!("View: {:.2} m x {:.2} m\n", bounds.max_x, bounds.max_y);
        telemetry.display_data();
    }

    Ok(())
}
