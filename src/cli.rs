use crate::cards::Board;
use crate::cards::Hole;
use crate::config::Config;
use crate::config::DEFAULT_TRIALS;
use anyhow::Context;
use clap::ArgAction;
use clap::Parser;
use dialoguer::Input;
use std::io::IsTerminal;

/// Estimate Texas Hold'em equity by Monte Carlo simulation.
#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Number of parallel workers
    #[arg(short, long)]
    pub workers: Option<usize>,
    /// Number of trials to simulate
    #[arg(short, long)]
    pub trials: Option<usize>,
    /// A player's hole cards, e.g. "AhAd" (repeat once per player)
    #[arg(short = 'p', long = "hand")]
    pub hands: Vec<String>,
    /// Pre-dealt community cards, e.g. "Qs Jh 2c"
    #[arg(short, long, default_value = "")]
    pub board: String,
    /// Run seed, for replaying a run exactly
    #[arg(long)]
    pub seed: Option<u64>,
    /// Print the report as JSON
    #[arg(long)]
    pub json: bool,
    /// More logging (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Args {
    pub fn level(&self) -> log::LevelFilter {
        match self.verbose {
            0 => log::LevelFilter::Info,
            1 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        }
    }

    /// Resolves every setting, asking for missing counts when a person
    /// is at the terminal and falling back to defaults otherwise.
    pub fn config(&self) -> anyhow::Result<Config> {
        let interactive = std::io::stdin().is_terminal();
        let workers = match self.workers {
            Some(n) => n,
            None if interactive => Self::prompt("Number of workers", num_cpus::get())?,
            None => num_cpus::get(),
        };
        let trials = match self.trials {
            Some(n) => n,
            None if interactive => Self::prompt("Number of trials", DEFAULT_TRIALS)?,
            None => DEFAULT_TRIALS,
        };
        let holes = match self.hands.is_empty() {
            true => Config::default_holes(),
            false => self
                .hands
                .iter()
                .map(|s| Hole::try_from(s.as_str()).map_err(anyhow::Error::msg))
                .collect::<anyhow::Result<Vec<Hole>>>()
                .context("invalid hand")?,
        };
        let board = Board::try_from(self.board.as_str())
            .map_err(anyhow::Error::msg)
            .context("invalid board")?;
        let seed = self.seed.unwrap_or_else(rand::random);
        let config = Config {
            workers,
            trials,
            holes,
            board,
            seed,
        };
        config.validate()?;
        Ok(config)
    }

    fn prompt(label: &str, default: usize) -> anyhow::Result<usize> {
        Input::new()
            .with_prompt(label)
            .default(default)
            .validate_with(|n: &usize| -> Result<(), String> {
                match n {
                    0 => Err(String::from("Enter a positive integer")),
                    _ => Ok(()),
                }
            })
            .interact_text()
            .context("reading from terminal")
    }
}
