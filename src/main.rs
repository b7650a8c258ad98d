use clap::Parser;
use itertools::Itertools;
use log::LevelFilter;
use log4rs::append::console::ConsoleAppender;
use log4rs::config::{Appender, Config, Root};
use log4rs::encode::pattern::PatternEncoder;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::cmp::Reverse;
use std::path::PathBuf;

use rusty_lif::config::NetworkConfig;
use rusty_lif::error::SNNError;
use rusty_lif::network::input::RandomInput;
use rusty_lif::network::{Network, UpdateMode};

#[derive(Parser, Debug)]
struct Args {
    /// A JSON network configuration; the grid options below are ignored when provided
    #[arg(long)]
    config: Option<PathBuf>,
    /// The seed used for network sampling and for the external input
    #[arg(long, default_value = "0")]
    seed: u64,
    /// The number of columns of the grid
    #[arg(long, default_value = "16")]
    width: usize,
    /// The number of rows of the grid
    #[arg(long, default_value = "12")]
    height: usize,
    /// The number of simulated ticks
    #[arg(short = 'T', long, default_value = "1000")]
    ticks: u64,
    /// The update mode, must be one of: cascade, two_phase
    #[arg(long)]
    mode: Option<UpdateMode>,
    /// Log the simulation progress
    #[arg(short, long)]
    verbose: bool,
}

fn init_logging(level: LevelFilter) -> Result<(), SNNError> {
    let stdout = ConsoleAppender::builder()
        .encoder(Box::new(PatternEncoder::new("{l} - {m}\n")))
        .build();
    let config = Config::builder()
        .appender(Appender::builder().build("stdout", Box::new(stdout)))
        .build(Root::builder().appender("stdout").build(level))
        .map_err(|e| SNNError::IOError(e.to_string()))?;
    log4rs::init_config(config).map_err(|e| SNNError::IOError(e.to_string()))?;
    Ok(())
}

fn main() -> Result<(), SNNError> {
    let args = Args::parse();
    init_logging(if args.verbose { LevelFilter::Debug } else { LevelFilter::Info })?;

    let mut config = match &args.config {
        Some(path) => NetworkConfig::load_from(path)?,
        None => NetworkConfig::with_grid(args.width, args.height),
    };
    if let Some(mode) = args.mode {
        config.update_mode = mode;
    }

    let mut rng = ChaCha8Rng::seed_from_u64(args.seed);
    let mut network = Network::build(&config, &mut rng)?;
    let mut input = RandomInput::new(rng, config.max_input);

    let mut spike_counts = vec![0_usize; network.num_neurons()];
    for _ in 0..args.ticks {
        network.tick(&mut input);
        network.firing_ids().into_iter().for_each(|id| spike_counts[id] += 1);
    }

    let total_spikes: usize = spike_counts.iter().sum();
    log::info!(
        "{} spikes in {} ticks ({:.4} spikes per neuron per tick)",
        total_spikes,
        network.ticks(),
        total_spikes as f64 / (network.num_neurons() as f64 * args.ticks.max(1) as f64)
    );
    for (id, count) in spike_counts
        .iter()
        .enumerate()
        .sorted_by_key(|&(id, &count)| (Reverse(count), id))
        .take(3)
    {
        log::info!("Neuron {} fired {} times", id, count);
    }

    Ok(())
}
