use std::path::PathBuf;
use std::time::Instant;

use anyhow::{Context, Result};
use clap::Parser;
use flycam_input::Key;
use flycam_render::{DebugTextRenderer, Renderer};
use flycam_runtime::{GameLoop, SessionConfig};
use tracing_subscriber::EnvFilter;
use winit::application::ApplicationHandler;
use winit::dpi::PhysicalSize;
use winit::event::{ElementState, KeyEvent, WindowEvent};
use winit::event_loop::{ActiveEventLoop, ControlFlow, EventLoop};
use winit::keyboard::{KeyCode, PhysicalKey};
use winit::window::{Window, WindowId};

/// Frames between window title refreshes.
const TITLE_INTERVAL: u64 = 10;

#[derive(Parser)]
#[command(name = "flycam-desktop", about = "First-person camera in a desktop window")]
struct Cli {
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    /// Session config (.yaml, .yml or .json)
    #[arg(short, long)]
    config: Option<PathBuf>,
}

fn key_for(code: KeyCode) -> Option<Key> {
    let key = match code {
        KeyCode::KeyW => Key::W,
        KeyCode::KeyA => Key::A,
        KeyCode::KeyS => Key::S,
        KeyCode::KeyD => Key::D,
        KeyCode::KeyQ => Key::Q,
        KeyCode::KeyE => Key::E,
        KeyCode::KeyZ => Key::Z,
        KeyCode::KeyC => Key::C,
        KeyCode::ArrowUp => Key::ArrowUp,
        KeyCode::ArrowDown => Key::ArrowDown,
        KeyCode::ArrowLeft => Key::ArrowLeft,
        KeyCode::ArrowRight => Key::ArrowRight,
        _ => return None,
    };
    Some(key)
}

struct App {
    game: GameLoop,
    window: Option<Window>,
    renderer: DebugTextRenderer,
    last_frame: Instant,
}

impl App {
    fn new(config: &SessionConfig) -> Self {
        Self {
            game: GameLoop::from_config(config, 1280, 720),
            window: None,
            renderer: DebugTextRenderer::new(),
            last_frame: Instant::now(),
        }
    }

    fn redraw(&mut self) {
        let now = Instant::now();
        let dt = (now - self.last_frame).as_secs_f32().min(0.1);
        self.last_frame = now;

        let frame = self.game.tick(dt);
        tracing::trace!("{}", self.renderer.render(&frame));

        if frame.index % TITLE_INTERVAL == 0 {
            if let Some(window) = &self.window {
                let p = frame.pose.position;
                window.set_title(&format!(
                    "flycam  ({:.1}, {:.1}, {:.1})  yaw {:.2}  pitch {:.2}  {:.0} fps",
                    p.x,
                    p.y,
                    p.z,
                    frame.pose.yaw,
                    frame.pose.pitch,
                    self.game.timer().fps()
                ));
            }
        }
    }
}

impl ApplicationHandler for App {
    fn resumed(&mut self, event_loop: &ActiveEventLoop) {
        if self.window.is_some() {
            return;
        }

        let attrs = Window::default_attributes()
            .with_title("flycam")
            .with_inner_size(PhysicalSize::new(1280u32, 720));
        let window = match event_loop.create_window(attrs) {
            Ok(window) => window,
            Err(e) => {
                tracing::error!("failed to create window: {e}");
                event_loop.exit();
                return;
            }
        };

        let size = window.inner_size();
        self.game.resize(size.width, size.height);
        self.last_frame = Instant::now();
        self.window = Some(window);
        tracing::info!(width = size.width, height = size.height, "window created");
    }

    fn window_event(
        &mut self,
        event_loop: &ActiveEventLoop,
        _window_id: WindowId,
        event: WindowEvent,
    ) {
        match event {
            WindowEvent::CloseRequested => {
                event_loop.exit();
            }
            WindowEvent::Resized(new_size) => {
                if self.game.resize(new_size.width, new_size.height) {
                    tracing::debug!(
                        aspect = self.game.viewport().projection().aspect,
                        "projection updated"
                    );
                }
            }
            WindowEvent::Focused(false) => {
                // Key-up events are lost while unfocused.
                self.game.keys_mut().clear();
            }
            WindowEvent::KeyboardInput {
                event:
                    KeyEvent {
                        physical_key: PhysicalKey::Code(code),
                        state,
                        ..
                    },
                ..
            } => {
                if let Some(key) = key_for(code) {
                    self.game
                        .keys_mut()
                        .set(key, state == ElementState::Pressed);
                } else if code == KeyCode::Escape && state == ElementState::Pressed {
                    event_loop.exit();
                }
            }
            WindowEvent::RedrawRequested => {
                self.redraw();
            }
            _ => {}
        }
    }

    fn about_to_wait(&mut self, _event_loop: &ActiveEventLoop) {
        if let Some(window) = &self.window {
            window.request_redraw();
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(filter))
        .init();

    let config = match &cli.config {
        Some(path) => SessionConfig::load(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => SessionConfig::default(),
    };

    tracing::info!("flycam-desktop starting");

    let event_loop = EventLoop::new()?;
    event_loop.set_control_flow(ControlFlow::Poll);

    let mut app = App::new(&config);
    event_loop.run_app(&mut app)?;

    Ok(())
}
