//! Spin Match headless runner
//!
//! Runs the simulation without a window: the autopilot plays, cues go to the
//! log, and frames are drawn into a counting render target. Useful for
//! balancing tuning files and for soak-testing the state machines.

use std::path::PathBuf;

use clap::Parser;
use glam::{Affine2, Vec2};

use spin_match::audio::{AudioManager, LogSink};
use spin_match::consts::{FRAME_DT, MAX_FRAME_DT};
use spin_match::renderer::{self, RenderTarget, Vertex};
use spin_match::sim::{GameState, Substate, TickInput, tick};
use spin_match::{Settings, Tuning};

#[derive(Debug, Parser)]
#[command(name = "spin-match", about = "Headless Spin Match simulation")]
struct Args {
    /// Run seed
    #[arg(long, default_value_t = 12345)]
    seed: u64,
    /// JSON tuning overrides
    #[arg(long)]
    tuning: Option<PathBuf>,
    /// Simulated seconds before stopping
    #[arg(long, default_value_t = 180.0)]
    seconds: f32,
    /// Frame step in seconds
    #[arg(long, default_value_t = FRAME_DT)]
    dt: f32,
    /// Disable the autopilot (nothing turns the player)
    #[arg(long)]
    no_autopilot: bool,
    /// Disable continuous hue drift
    #[arg(long)]
    reduced_motion: bool,
    /// Mute audio cues
    #[arg(long)]
    mute: bool,
}

/// Render target that only counts what it is asked to draw
#[derive(Debug, Default)]
struct CountingTarget {
    vertices: usize,
    texts: usize,
}

impl RenderTarget for CountingTarget {
    fn draw_vertices(&mut self, vertices: &[Vertex]) {
        self.vertices += vertices.len();
    }

    fn draw_text(&mut self, _text: &str, _position: Vec2, _scale: f32, _color: [f32; 4]) {
        self.texts += 1;
    }
}

fn main() {
    env_logger::init();
    let args = Args::parse();
    log::info!("Spin Match (headless) starting, seed {}", args.seed);

    let settings = Settings {
        reduced_motion: args.reduced_motion,
        muted: args.mute,
        ..Settings::default()
    };
    let mut tuning = Tuning::load_or_default(args.tuning.as_deref());
    settings.apply(&mut tuning);

    let audio = AudioManager::from_settings(&settings);
    let mut sink = LogSink::default();
    let mut target = CountingTarget::default();
    // Scale arena units up to a nominal 800px viewport
    let view = Affine2::from_scale(Vec2::splat(800.0 / tuning.arena_size));

    let mut state = GameState::with_tuning(args.seed, tuning);
    let input = TickInput {
        autopilot: !args.no_autopilot,
        ..Default::default()
    };
    let dt = args.dt.clamp(f32::EPSILON, MAX_FRAME_DT);
    let frames = (args.seconds / dt).ceil() as u64;

    let mut frame = 0;
    while frame < frames {
        tick(&mut state, &input, dt);
        let events = state.drain_events();
        audio.dispatch(&events, &mut sink);
        renderer::draw(&state, &mut target, &view);

        frame += 1;
        if state.substate == Substate::Dying {
            break;
        }
    }

    log::info!(
        "Drew {} vertices and {} text runs over {} frames",
        target.vertices,
        target.texts,
        frame
    );
    println!(
        "seed={} frames={} level={} score={} lives={} state={:?} cues={}",
        args.seed,
        frame,
        state.current_level,
        state.player.score,
        state.player.lives,
        state.substate,
        sink.played.len()
    );
}
