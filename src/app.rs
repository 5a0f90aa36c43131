use crate::command::Command;
use crate::options::Options;
use crate::view::Scene;
use crossterm::event::{poll, read, Event};
use gridsnake::engine::{Direction, Engine, Setup};
use ratatui::{backend::Backend, Terminal};
use std::io;
use std::time::Instant;

/// The interactive front end: owns the current game and feeds it ticks and
/// key presses
#[derive(Clone, Debug)]
pub(crate) struct App {
    options: Options,
    setup: Setup,
    engine: Engine,
    paused: bool,
    next_tick: Option<Instant>,
    quitting: bool,
}

impl App {
    pub(crate) fn new(options: Options, setup: Setup) -> App {
        App {
            options,
            setup,
            engine: Engine::from_setup(setup),
            paused: false,
            next_tick: None,
            quitting: false,
        }
    }

    pub(crate) fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> io::Result<()> {
        while !self.quitting {
            self.draw(&mut terminal)?;
            self.process_input()?;
        }
        Ok(())
    }

    fn draw<B: Backend>(&self, terminal: &mut Terminal<B>) -> io::Result<()> {
        let scene = Scene::new(
            self.engine.state(),
            self.paused,
            self.options.cell_width.get(),
        );
        terminal.draw(|frame| frame.render_widget(&scene, frame.area()))?;
        Ok(())
    }

    fn process_input(&mut self) -> io::Result<()> {
        if self.running() {
            let period = self.options.tick_period();
            let when = *self
                .next_tick
                .get_or_insert_with(|| Instant::now() + period);
            let wait = when.saturating_duration_since(Instant::now());
            if wait.is_zero() || !poll(wait)? {
                self.tick();
                self.next_tick = None;
            } else {
                self.handle_event(read()?);
            }
        } else {
            self.handle_event(read()?);
        }
        Ok(())
    }

    fn tick(&mut self) {
        self.engine.tick();
    }

    fn handle_event(&mut self, event: Event) {
        if event == Event::FocusLost {
            if self.running() {
                self.toggle_pause();
            }
            return;
        }
        let Some(cmd) = event.as_key_press_event().and_then(Command::from_key_event) else {
            return;
        };
        match cmd {
            Command::Quit => self.quitting = true,
            Command::Pause => {
                if !self.engine.state().is_over() {
                    self.toggle_pause();
                }
            }
            Command::Restart => self.restart(),
            Command::Up => self.steer(Direction::Up),
            Command::Down => self.steer(Direction::Down),
            Command::Left => self.steer(Direction::Left),
            Command::Right => self.steer(Direction::Right),
        }
    }

    fn steer(&mut self, direction: Direction) {
        if self.running() {
            self.engine.change_direction(direction);
        }
    }

    fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        self.next_tick = None;
        log::debug!("Game {}", if self.paused { "paused" } else { "resumed" });
    }

    fn restart(&mut self) {
        log::debug!("Restarting game");
        self.engine = Engine::from_setup(self.setup);
        self.paused = false;
        self.next_tick = None;
    }

    fn running(&self) -> bool {
        !self.paused && !self.engine.state().is_over()
    }
}
