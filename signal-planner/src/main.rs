use std::net::SocketAddr;
use std::path::PathBuf;

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use signal_planner::cache::{CacheConfig, CachedOptimizer};
use signal_planner::domain::{ArrivalSchedule, Phase};
use signal_planner::planner::{Optimizer, SignalConfig};
use signal_planner::web::{AppState, create_router};

/// Demonstration forecast, stream A (north-south).
const DEMO_ARRIVALS_A: [u32; 10] = [3, 4, 2, 5, 3, 4, 1, 2, 3, 4];

/// Demonstration forecast, stream B (east-west).
const DEMO_ARRIVALS_B: [u32; 10] = [2, 3, 5, 2, 1, 3, 4, 3, 2, 3];

#[derive(Parser)]
#[command(name = "signal-planner", about = "Optimal signal phasing for a two-phase intersection", version)]
struct Cli {
    /// Config file path (TOML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Optimize the built-in 10-step demonstration forecast
    Demo {
        /// Also print the optimal phase for each step
        #[arg(long)]
        plan: bool,
    },
    /// Serve the optimizer over HTTP
    Serve {
        /// Address to listen on
        #[arg(long, default_value = "127.0.0.1:3000")]
        addr: SocketAddr,
    },
}

fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .compact()
        .init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging();
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => SignalConfig::load_from(path)?,
        None => SignalConfig::default(),
    };
    let optimizer = Optimizer::new(config);

    match cli.command.unwrap_or(Commands::Demo { plan: false }) {
        Commands::Demo { plan } => run_demo(&optimizer, plan)?,
        Commands::Serve { addr } => serve(optimizer, addr).await?,
    }

    Ok(())
}

fn run_demo(optimizer: &Optimizer, show_plan: bool) -> Result<(), Box<dyn std::error::Error>> {
    let schedule = ArrivalSchedule::new(DEMO_ARRIVALS_A.to_vec(), DEMO_ARRIVALS_B.to_vec())?;
    let outcome = optimizer.run(schedule.len(), &schedule)?;

    println!("Minimum cumulative waiting time: {}", outcome.min_cost());

    if show_plan {
        let plan = outcome.plan();
        println!();
        println!("{:>4}  {:<8} {:>6} {:>6} {:>6}", "step", "phase", "A", "B", "total");
        for step in &plan.steps {
            println!(
                "{:>4}  {:<8} {:>6} {:>6} {:>6}",
                step.step, step.phase, step.queue_a, step.queue_b, step.cumulative_cost
            );
        }

        let alternating: Vec<Phase> = (0..schedule.len())
            .map(|t| if t % 2 == 0 { Phase::AGreen } else { Phase::BGreen })
            .collect();
        let fixed = optimizer.evaluate(&schedule, &alternating)?;
        println!();
        println!("Fixed alternation for comparison: {fixed}");
    }

    Ok(())
}

async fn serve(optimizer: Optimizer, addr: SocketAddr) -> Result<(), Box<dyn std::error::Error>> {
    let cached = CachedOptimizer::new(optimizer, &CacheConfig::default());
    let app = create_router(AppState::new(cached));

    let listener = tokio::net::TcpListener::bind(addr).await?;
    println!("Signal planner listening on http://{addr}");
    println!();
    println!("API Endpoints:");
    println!("  GET  /health    - Health check");
    println!("  GET  /config    - Active signal configuration");
    println!("  POST /optimize  - Optimize a phase schedule");

    axum::serve(listener, app).await?;
    Ok(())
}
