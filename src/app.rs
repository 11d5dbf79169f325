//! Main application module: wires a hand-pose source, the gesture
//! controller and an input backend into a frame loop.

use crate::{
    config::Config,
    controller::{Controller, ControllerSettings},
    cursor_control::X11Backend,
    error::{Error, Result},
    hand_source::{CommandSource, HandPoseSource, JsonLinesSource},
    input::{DisplayGeometryProvider, FixedDisplay, InputEmitter, LoggingEmitter},
};
use log::{debug, info, warn};
use std::{
    fs::File,
    io::{self, BufReader},
    path::PathBuf,
    time::{Duration, Instant},
};

/// Where landmark observations come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    /// Protocol lines on standard input
    Stdin,
    /// Protocol lines recorded to a file
    File(PathBuf),
    /// External tracker command writing protocol lines to stdout
    Command(String),
}

/// Where input commands go
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    /// Inject into the X11 session
    X11,
    /// Log only
    DryRun,
}

/// Main application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Landmark source
    pub input: InputSource,
    /// Input backend
    pub output: OutputMode,
    /// Gesture, source and smoothing settings
    pub settings: Config,
}

/// Counters for one run of the frame loop
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunStats {
    /// Observations read from the source
    pub cycles: u64,
    /// Cycles in which no hand was seen
    pub empty_cycles: u64,
    /// Hand frames processed
    pub frames: u64,
    /// Commands emitted
    pub commands: u64,
    /// Unreadable observations skipped
    pub skipped: u64,
}

/// Main application struct
pub struct GestureApp {
    source: Box<dyn HandPoseSource>,
    controller: Controller<Box<dyn InputEmitter>>,
}

impl GestureApp {
    /// Create a new hand gesture control application
    pub fn new(config: AppConfig) -> Result<Self> {
        info!("Initializing Hand Gesture Control application");
        config.settings.validate()?;

        let source = open_source(&config.input, &config.settings)?;

        let fallback = FixedDisplay::new(
            config.settings.display.fallback_width,
            config.settings.display.fallback_height,
        );
        let (emitter, display): (Box<dyn InputEmitter>, FixedDisplay) = match config.output {
            OutputMode::DryRun => {
                info!("Dry run: commands are logged, not injected");
                (Box::new(LoggingEmitter::new(&fallback)), fallback)
            }
            OutputMode::X11 => match X11Backend::new() {
                Ok(backend) => {
                    info!("X11 input backend initialized");
                    let (width, height) = backend.screen_size();
                    (Box::new(backend), FixedDisplay::new(width, height))
                }
                Err(e) => {
                    warn!("Failed to initialize X11 input: {}. Falling back to dry run.", e);
                    (Box::new(LoggingEmitter::new(&fallback)), fallback)
                }
            },
        };

        let controller = Controller::new(emitter, &display, ControllerSettings::from(&config.settings))
            .with_smoothing(config.settings.create_smoothing()?);

        Ok(Self::from_parts(source, controller))
    }

    /// Assemble an application from an existing source and controller
    #[must_use]
    pub fn from_parts(source: Box<dyn HandPoseSource>, controller: Controller<Box<dyn InputEmitter>>) -> Self {
        Self { source, controller }
    }

    /// Run the frame loop until the source is exhausted
    pub fn run(&mut self) -> Result<RunStats> {
        info!("Starting main application loop");

        let mut stats = RunStats::default();
        let start_time = Instant::now();
        let mut last_rate_update = Instant::now();

        loop {
            let frames = match self.source.next_observation() {
                Ok(Some(frames)) => frames,
                Ok(None) => {
                    info!("End of landmark stream reached");
                    break;
                }
                Err(Error::Io(e)) => return Err(Error::Io(e)),
                Err(e) => {
                    warn!("Skipping unreadable observation: {}", e);
                    stats.skipped += 1;
                    continue;
                }
            };

            stats.cycles += 1;
            if frames.is_empty() {
                stats.empty_cycles += 1;
            } else {
                let commands = self.controller.process_observation(&frames, Instant::now());
                stats.frames += frames.len() as u64;
                stats.commands += commands.len() as u64;
            }

            if last_rate_update.elapsed() >= Duration::from_secs(1) {
                let rate = stats.cycles as f64 / start_time.elapsed().as_secs_f64();
                debug!("Processing {:.1} observations/s ({} frames)", rate, stats.frames);
                last_rate_update = Instant::now();
            }
        }

        info!(
            "Application shutting down after {} observations ({} without a hand, {} skipped)",
            stats.cycles, stats.empty_cycles, stats.skipped
        );
        Ok(stats)
    }

    /// The gesture controller
    #[must_use]
    pub const fn controller(&self) -> &Controller<Box<dyn InputEmitter>> {
        &self.controller
    }
}

fn open_source(input: &InputSource, settings: &Config) -> Result<Box<dyn HandPoseSource>> {
    let min_confidence = settings.source.min_confidence;
    let mirror_x = settings.source.mirror_x;

    Ok(match input {
        InputSource::Stdin => {
            info!("Reading landmarks from stdin");
            Box::new(JsonLinesSource::new(io::stdin().lock(), min_confidence).with_mirror(mirror_x))
        }
        InputSource::File(path) => {
            info!("Reading landmarks from {}", path.display());
            let file = File::open(path)
                .map_err(|e| Error::LandmarkSource(format!("Failed to open {}: {e}", path.display())))?;
            Box::new(JsonLinesSource::new(BufReader::new(file), min_confidence).with_mirror(mirror_x))
        }
        InputSource::Command(command) => Box::new(CommandSource::spawn(command, min_confidence, mirror_x)?),
    })
}
