use anyhow::{Context, Result};
use crossterm::{
    event::{Event, EventStream, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use futures::StreamExt;
use ratatui::{
    Terminal,
    backend::{Backend, CrosstermBackend},
};
use std::io::{Stderr, stderr};
use tracing::{info, warn};

use crate::game::{GameConfig, GameEngine, GameState};
use crate::input::{InputHandler, KeyAction};
use crate::render::Renderer;
use crate::timer::TickTimer;

/// Keyboard-driven game in the terminal.
///
/// Owns the tick schedule: every timer firing runs one tick followed by one
/// render. Key presses only change the heading. The timer is stopped for good
/// once the game ends; the game over screen stays up until the player quits.
pub struct HumanMode {
    engine: GameEngine,
    state: GameState,
    renderer: Renderer,
    input_handler: InputHandler,
    should_quit: bool,
}

impl HumanMode {
    pub fn new(config: GameConfig, seed: Option<u64>) -> Self {
        let mut engine = match seed {
            Some(seed) => {
                info!(seed, "using fixed seed");
                GameEngine::with_seed(config, seed)
            }
            None => GameEngine::new(config),
        };
        let state = engine.reset();

        Self {
            engine,
            state,
            renderer: Renderer::new(),
            input_handler: InputHandler::new(),
            should_quit: false,
        }
    }

    pub async fn run(&mut self) -> Result<()> {
        // Setup terminal
        enable_raw_mode().context("Failed to enable raw mode")?;
        let mut stderr = stderr();
        execute!(stderr, EnterAlternateScreen).context("Failed to enter alternate screen")?;
        let backend = CrosstermBackend::new(stderr);
        let mut terminal = Terminal::new(backend).context("Failed to create terminal")?;
        terminal.hide_cursor().context("Failed to hide cursor")?;
        terminal.clear().context("Failed to clear terminal")?;

        // Run game loop with cleanup
        let result = self.run_game_loop(&mut terminal).await;
        let cleanup = Self::cleanup_terminal(&mut terminal);

        first_error(result, cleanup)
    }

    /// Undo the terminal setup. Every step runs even if an earlier one fails.
    fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<Stderr>>) -> Result<()> {
        let raw_mode = disable_raw_mode().context("Failed to disable raw mode");
        let screen = execute!(terminal.backend_mut(), LeaveAlternateScreen)
            .context("Failed to leave alternate screen");
        let cursor = terminal.show_cursor().context("Failed to show cursor");

        raw_mode.and(screen).and(cursor)
    }

    async fn run_game_loop<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()> {
        let mut event_stream = EventStream::new();
        let mut tick_timer = TickTimer::start(self.engine.config().tick_interval());

        self.draw(terminal)?;

        loop {
            tokio::select! {
                // Handle terminal events
                maybe_event = event_stream.next() => {
                    match maybe_event {
                        Some(Ok(event)) => {
                            if self.handle_event(event) {
                                self.draw(terminal)?;
                            }
                        }
                        Some(Err(err)) => {
                            return Err(err).context("Failed to read terminal event");
                        }
                        None => self.should_quit = true,
                    }
                }

                // Game logic tick, then render
                _ = tick_timer.tick() => {
                    self.update_game(&mut tick_timer);
                    self.draw(terminal)?;
                }

                // Handle Ctrl+C
                _ = tokio::signal::ctrl_c() => {
                    self.should_quit = true;
                }
            }

            if self.should_quit {
                break;
            }
        }

        info!(score = self.state.score, "quit");
        Ok(())
    }

    fn draw<B: Backend>(&self, terminal: &mut Terminal<B>) -> Result<()> {
        terminal
            .draw(|frame| {
                self.renderer
                    .render(frame, &self.state, self.engine.config());
            })
            .context("Failed to draw frame")?;
        Ok(())
    }

    /// Apply a terminal event. Returns true when the screen needs a redraw.
    fn handle_event(&mut self, event: Event) -> bool {
        match event {
            Event::Key(key) => {
                // Only process key press events, not release
                if key.kind != KeyEventKind::Press {
                    return false;
                }

                match self.input_handler.handle_key_event(key) {
                    KeyAction::Turn(direction) => {
                        self.engine.set_direction(&mut self.state, direction);
                    }
                    KeyAction::Quit => {
                        self.should_quit = true;
                    }
                    KeyAction::None => {}
                }
                false
            }
            Event::Resize(_, _) => true,
            _ => false,
        }
    }

    fn update_game(&mut self, tick_timer: &mut TickTimer) {
        let result = self.engine.tick(&mut self.state);

        if result.terminated() {
            tick_timer.stop();
        }
    }
}

/// Keep the game loop's error over a cleanup failure; the latter is only logged
fn first_error(result: Result<()>, cleanup: Result<()>) -> Result<()> {
    match (result, cleanup) {
        (Err(err), Err(cleanup_err)) => {
            warn!(error = %format!("{cleanup_err:#}"), "terminal cleanup failed");
            Err(err)
        }
        (result, cleanup) => result.and(cleanup),
    }
}
