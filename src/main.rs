//! Hand gesture control: drives the mouse from a stream of hand landmarks.

use anyhow::Result;
use clap::Parser;
use hand_gesture_control::{
    app::{AppConfig, GestureApp, InputSource, OutputMode},
    config::{Config, EXAMPLE_CONFIG},
};
use log::{info, warn};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Landmark stream to read, one JSON observation per line ("-" for stdin)
    #[arg(short, long)]
    input: Option<String>,

    /// Start an external hand tracker and read its stdout instead of --input
    #[arg(short = 'e', long, conflicts_with = "input")]
    exec: Option<String>,

    /// Path to configuration file (YAML format)
    #[arg(short = 'C', long)]
    config: Option<PathBuf>,

    /// Log input commands instead of injecting them
    #[arg(long)]
    dry_run: bool,

    /// Mirror landmark x coordinates (for trackers that do not flip the image)
    #[arg(short, long)]
    mirror: bool,

    /// Anchor smoothing filter (none, exponential, moving_average)
    #[arg(short, long)]
    smoothing: Option<String>,

    /// Enable debug output
    #[arg(short, long)]
    debug: bool,

    /// Print an example configuration file and exit
    #[arg(long)]
    print_config: bool,
}

fn main() -> Result<()> {
    // Parse command line arguments
    let args = Args::parse();

    if args.print_config {
        print!("{EXAMPLE_CONFIG}");
        return Ok(());
    }

    // Initialize logger
    if args.debug {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("debug"));
    } else {
        env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    }

    info!("Hand Gesture Control");

    // Load configuration if provided
    let mut settings = if let Some(config_path) = &args.config {
        info!("Loading configuration from: {}", config_path.display());
        match Config::from_file(config_path) {
            Ok(cfg) => cfg,
            Err(e) => {
                warn!("Failed to load config file: {}. Using defaults.", e);
                Config::default()
            }
        }
    } else {
        Config::default()
    };

    // Command line overrides
    if args.mirror {
        settings.source.mirror_x = true;
    }
    if let Some(filter) = args.smoothing {
        settings.smoothing.filter = filter;
    }

    // An explicit --input wins over a tracker command from the config file
    let input = match (args.exec, args.input.as_deref()) {
        (Some(command), _) => InputSource::Command(command),
        (None, Some(path)) => {
            if let Some(command) = &settings.source.command {
                warn!("Ignoring configured tracker command '{}' in favour of --input", command);
            }
            if path == "-" {
                InputSource::Stdin
            } else {
                InputSource::File(PathBuf::from(path))
            }
        }
        (None, None) => settings
            .source
            .command
            .clone()
            .map_or(InputSource::Stdin, InputSource::Command),
    };

    let config = AppConfig {
        input,
        output: if args.dry_run { OutputMode::DryRun } else { OutputMode::X11 },
        settings,
    };

    // Create and run application
    let mut app = GestureApp::new(config)?;
    let stats = app.run()?;
    info!("Processed {} hand frames, emitted {} commands", stats.frames, stats.commands);

    Ok(())
}
