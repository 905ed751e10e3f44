use anyhow::Result;
use clap::Parser;
use ecosim_core::config::AppConfig;
use ecosim_io::{PopulationRecorder, ReportLogger};
use ecosim_lib::app::{App, RunSettings};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Config file path; defaults are used if it does not exist
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Number of days to simulate
    #[arg(short, long, default_value_t = 20)]
    days: u64,

    /// Initial population (overrides config)
    #[arg(short, long)]
    population: Option<usize>,

    /// Initial number of food sources (overrides config)
    #[arg(short, long)]
    food: Option<usize>,

    /// RNG seed for a reproducible run (overrides config)
    #[arg(short, long)]
    seed: Option<u64>,

    /// CSV file receiving the Day,Population series
    #[arg(short, long, default_value = "ecosystem_data.csv")]
    output: String,

    /// Optional JSON-lines file receiving full day reports
    #[arg(short, long)]
    events: Option<String>,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "warn")]
    log_level: String,

    /// End the run after the first day that leaves no agents alive
    #[arg(long)]
    stop_on_extinction: bool,
}

impl Args {
    fn apply(&self, config: &mut AppConfig) {
        if let Some(population) = self.population {
            config.world.initial_population = population;
        }
        if let Some(food) = self.food {
            config.world.initial_food = food;
        }
        if self.seed.is_some() {
            config.world.seed = self.seed;
        }
    }

    fn settings(&self) -> RunSettings {
        RunSettings {
            days: self.days,
            stop_on_extinction: self.stop_on_extinction,
        }
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    ecosim_core::init_logging(&args.log_level);

    let mut config = AppConfig::load(&args.config)?;
    args.apply(&mut config);
    config.validate()?;

    let mut app = App::new(config, args.settings())?;
    app.add_sink(PopulationRecorder::create(&args.output)?);
    if let Some(events) = &args.events {
        app.add_sink(ReportLogger::open(events)?);
    }

    let summary = app.run_with(|report| {
        println!("Day {}: Population {}", report.day, report.population);
    })?;

    if summary.extinct {
        println!("Population extinct after {} days.", summary.days_run);
    }
    println!("Simulation complete. Data saved to {}", args.output);

    Ok(())
}
