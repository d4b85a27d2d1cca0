mod colors;
mod config;
mod help;
mod logging;
mod terminal;
mod watchface;

use clap::Parser;
use config::FaceConfig;
use lifeclock::settings::Settings;
use std::io;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "lifeclock")]
#[command(version)]
#[command(about = "Analog clock over a Game of Life background, in the terminal", long_about = None)]
struct Cli {
    /// Cells per side of the Life grid
    #[arg(short, long)]
    grid: Option<usize>,

    /// Milliseconds between generations
    #[arg(short, long)]
    rate: Option<u64>,

    /// Cells seeded at startup
    #[arg(short = 'n', long)]
    cells: Option<usize>,

    /// Random seed for reproducible patterns
    #[arg(short, long)]
    seed: Option<u64>,

    /// Color scheme (0-4: classic, matrix, ember, neon, paper)
    #[arg(short, long)]
    color: Option<u8>,

    /// Fixed UTC offset in minutes instead of local time
    #[arg(long, allow_hyphen_values = true)]
    utc_offset: Option<i32>,

    /// Hide the second hand
    #[arg(long)]
    no_seconds: bool,

    /// Hide the grid dots
    #[arg(long)]
    no_grid: bool,

    /// Show generation and cell counts
    #[arg(long)]
    status: bool,

    /// Print one frame after N generations instead of running interactively
    #[arg(short, long, value_name = "GENERATIONS")]
    print: Option<u64>,

    /// Config file (default: <config dir>/lifeclock/config.toml)
    #[arg(long)]
    config: Option<PathBuf>,

    /// Append diagnostics to this file (filter with LIFECLOCK_LOG)
    #[arg(long)]
    log_file: Option<PathBuf>,
}

impl Cli {
    fn face_config(&self, settings: &Settings) -> FaceConfig {
        let mut settings = settings.clone();
        if let Some(grid) = self.grid {
            settings.grid_size = grid;
        }
        if let Some(rate) = self.rate {
            settings.rate_ms = rate;
        }
        if let Some(cells) = self.cells {
            settings.initial_cells = cells;
        }
        if let Some(color) = self.color {
            settings.color_scheme = color;
        }
        if self.utc_offset.is_some() {
            settings.utc_offset_minutes = self.utc_offset;
        }
        settings.show_seconds &= !self.no_seconds;
        settings.show_grid &= !self.no_grid;
        settings.show_status |= self.status;

        let mut config = FaceConfig::from(&settings);
        config.seed = self.seed;
        config
    }
}

fn main() -> io::Result<()> {
    let cli = Cli::parse();

    if let Some(path) = &cli.log_file {
        logging::init(path)?;
    }

    let settings = match &cli.config {
        Some(path) => Settings::load_from(path),
        None => Settings::load(),
    };
    let config = cli.face_config(&settings);

    if let (Some(minutes), None) = (cli.utc_offset, config.utc_offset) {
        eprintln!("Ignoring out-of-range UTC offset: {} minutes", minutes);
    }

    match cli.print {
        Some(generations) => watchface::print_frame(config, generations),
        None => watchface::run(config),
    }
}
