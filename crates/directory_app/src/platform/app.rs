use std::io::{self, BufRead, Write};
use std::sync::mpsc;
use std::thread;

use anyhow::Context;
use chrono::Local;
use directory_core::{update, AppState, DirectoryViewModel, Msg};
use engine_logging::{engine_info, engine_trace};

use super::effects::EffectRunner;
use super::ui::{self, input::Command, render::RenderContext};
use crate::cli::Cli;

/// Inputs to the shell loop.
pub enum AppEvent {
    /// Result of a load, already mapped to a message.
    Engine(Msg),
    /// A line typed by the user.
    Input(String),
    /// Stdin reached end of file.
    InputClosed,
}

pub fn run_app(cli: Cli) -> anyhow::Result<()> {
    engine_logging::initialize(cli.log.into(), cli.log_level(), &cli.log_file);
    engine_info!("Starting candidate directory against {}", cli.base_url);

    let (event_tx, event_rx) = mpsc::channel::<AppEvent>();
    let effects =
        EffectRunner::new(cli.fetch_settings(), event_tx.clone()).context("starting loader")?;
    spawn_input_reader(event_tx);

    let stdout = io::stdout();
    let mut shell = Shell::new(effects, cli.base_url.clone(), stdout.lock());
    shell.write_lines(ui::input::HELP.lines().map(str::to_string))?;
    shell.dispatch(Msg::Activated)?;

    while let Ok(event) = event_rx.recv() {
        match event {
            AppEvent::Engine(msg) => {
                shell.last_loaded = Some(Local::now().format("%H:%M:%S").to_string());
                shell.dispatch(msg)?;
            }
            AppEvent::Input(line) => {
                if !shell.handle_line(&line)? {
                    break;
                }
            }
            AppEvent::InputClosed => break,
        }
    }

    engine_info!("Candidate directory closed");
    Ok(())
}

fn spawn_input_reader(event_tx: mpsc::Sender<AppEvent>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if event_tx.send(AppEvent::Input(line)).is_err() {
                return;
            }
        }
        let _ = event_tx.send(AppEvent::InputClosed);
    });
}

struct Shell<W: Write> {
    state: AppState,
    view: DirectoryViewModel,
    effects: EffectRunner,
    base_url: String,
    last_loaded: Option<String>,
    out: W,
}

impl<W: Write> Shell<W> {
    fn new(effects: EffectRunner, base_url: String, out: W) -> Self {
        let state = AppState::new();
        let view = state.view();
        Self {
            state,
            view,
            effects,
            base_url,
            last_loaded: None,
            out,
        }
    }

    fn dispatch(&mut self, msg: Msg) -> io::Result<()> {
        engine_trace!("dispatch {:?}", msg);
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let was_dirty = state.consume_dirty();
        self.state = state;
        self.effects.enqueue(effects);

        if was_dirty {
            self.view = self.state.view();
            self.render()?;
        }
        Ok(())
    }

    /// Returns `false` when the user asked to quit.
    fn handle_line(&mut self, line: &str) -> io::Result<bool> {
        match ui::input::parse(line) {
            Ok(Command::Msg(Msg::NoOp)) => self.prompt()?,
            Ok(Command::Msg(msg)) => {
                let before = self.view.clone();
                self.dispatch(msg)?;
                if self.view == before {
                    self.prompt()?;
                }
            }
            Ok(Command::View(row)) => match self.view.rows.get(row - 1) {
                Some(selected) => {
                    let id = selected.id.clone();
                    self.dispatch(Msg::ViewClicked(id))?;
                }
                None => {
                    let message = format!("No row {row}; {} shown.", self.view.shown_count);
                    self.write_lines([message])?;
                }
            },
            Ok(Command::Jobs) => {
                let lines = ui::render::render_jobs(&self.view);
                self.write_lines(lines)?;
            }
            Ok(Command::Help) => {
                self.write_lines(ui::input::HELP.lines().map(str::to_string))?;
            }
            Ok(Command::Quit) => return Ok(false),
            Err(err) => self.write_lines([err.to_string()])?,
        }
        Ok(true)
    }

    fn render(&mut self) -> io::Result<()> {
        let ctx = RenderContext {
            base_url: self.base_url.clone(),
            last_loaded: self.last_loaded.clone(),
        };
        let lines = ui::render::render(&self.view, &ctx);
        writeln!(self.out)?;
        self.write_lines(lines)
    }

    fn write_lines(&mut self, lines: impl IntoIterator<Item = String>) -> io::Result<()> {
        for line in lines {
            writeln!(self.out, "{line}")?;
        }
        self.prompt()
    }

    fn prompt(&mut self) -> io::Result<()> {
        write!(self.out, "> ")?;
        self.out.flush()
    }
}
