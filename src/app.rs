use anyhow::{Context, Result};
use ecosim_core::config::AppConfig;
use ecosim_core::world::World;
use ecosim_data::{DayReport, PopulationRecord};
use ecosim_io::ReportSink;

/// How long a run lasts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSettings {
    pub days: u64,
    /// End the run after the first day that leaves no agents alive.
    pub stop_on_extinction: bool,
}

impl Default for RunSettings {
    fn default() -> Self {
        Self {
            days: 20,
            stop_on_extinction: false,
        }
    }
}

/// Outcome of a finished run.
#[derive(Debug, Clone, PartialEq)]
pub struct RunSummary {
    pub series: Vec<PopulationRecord>,
    pub days_run: u64,
    pub final_population: usize,
    pub extinct: bool,
}

pub struct App {
    pub world: World,
    pub settings: RunSettings,
    pub running: bool,
    sinks: Vec<Box<dyn ReportSink>>,
}

impl App {
    pub fn new(config: AppConfig, settings: RunSettings) -> Result<Self> {
        let world = World::new(config).context("failed to build world")?;
        Ok(Self {
            world,
            settings,
            running: true,
            sinks: Vec::new(),
        })
    }

    /// Every later day report is also written to `sink`.
    pub fn add_sink(&mut self, sink: impl ReportSink + 'static) {
        self.sinks.push(Box::new(sink));
    }

    /// Advances one day and records it in every sink.
    pub fn step(&mut self) -> Result<DayReport> {
        let report = self
            .world
            .advance_day()
            .with_context(|| format!("day {} failed", self.world.current_day() + 1))?;
        for sink in &mut self.sinks {
            sink.record(&report)?;
        }
        Ok(report)
    }

    /// Runs up to `settings.days` days, calling `on_day` after each.
    pub fn run_with<F>(&mut self, mut on_day: F) -> Result<RunSummary>
    where
        F: FnMut(&DayReport),
    {
        let mut series = Vec::new();
        let mut days_run = 0;

        while self.running && days_run < self.settings.days {
            let report = self.step()?;
            days_run += 1;
            on_day(&report);
            series.push(report.record());

            if report.population == 0 && self.settings.stop_on_extinction {
                tracing::warn!(day = report.day, "Population extinct, stopping run");
                self.running = false;
            }
        }

        for sink in &mut self.sinks {
            sink.finish()?;
        }

        let final_population = self.world.population();
        Ok(RunSummary {
            series,
            days_run,
            final_population,
            extinct: final_population == 0,
        })
    }

    pub fn run(&mut self) -> Result<RunSummary> {
        self.run_with(|_| {})
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(population: usize, food: usize, seed: u64) -> AppConfig {
        let mut config = AppConfig::default();
        config.world.initial_population = population;
        config.world.initial_food = food;
        config.world.seed = Some(seed);
        config
    }

    #[test]
    fn test_run_counts_days() {
        let mut app = App::new(config(30, 10, 1), RunSettings::default()).unwrap();
        let mut seen = 0;
        let summary = app.run_with(|_| seen += 1).unwrap();
        assert_eq!(summary.days_run, 20);
        assert_eq!(seen, summary.days_run);
        assert_eq!(summary.series.len() as u64, summary.days_run);
        assert_eq!(app.world.current_day(), summary.days_run);
    }

    #[test]
    fn test_extinction_stops_run() {
        let mut cfg = config(5, 1, 2);
        // Nobody can survive a single day.
        cfg.metabolism.initial_energy = 0.5;
        cfg.metabolism.food_energy = 0.0;
        let settings = RunSettings {
            days: 10,
            stop_on_extinction: true,
        };
        let mut app = App::new(cfg, settings).unwrap();
        let summary = app.run().unwrap();
        assert_eq!(summary.days_run, 1);
        assert!(summary.extinct);
        assert_eq!(summary.series, vec![PopulationRecord { day: 1, population: 0 }]);
    }

    #[test]
    fn test_extinct_run_keeps_recording_by_default() {
        let mut cfg = config(5, 1, 3);
        cfg.metabolism.initial_energy = 0.5;
        cfg.metabolism.food_energy = 0.0;
        let mut app = App::new(cfg, RunSettings::default()).unwrap();
        let summary = app.run().unwrap();
        assert_eq!(summary.days_run, 20);
        assert!(summary.extinct);
        assert_eq!(summary.series.len(), 20);
        assert_eq!(summary.series[19], PopulationRecord { day: 20, population: 0 });
        assert!(summary.series.iter().all(|r| r.population == 0));
    }

    #[test]
    fn test_missing_food_surfaces_error() {
        let mut app = App::new(config(3, 0, 4), RunSettings::default()).unwrap();
        let err = app.run().unwrap_err();
        assert_eq!(
            err.downcast_ref::<ecosim_core::SimError>(),
            Some(&ecosim_core::SimError::NoFoodSources)
        );
    }
}
