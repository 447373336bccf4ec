use std::io::{self, BufRead, Write};
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use anyhow::Context;
use organizer_core::{update, AppState, Msg};
use organizer_engine::EngineSettings;
use organizer_logging::{organizer_info, organizer_warn};

use super::effects::EffectRunner;
use super::logging::{self, LogSettings};
use super::settings;
use super::ui;
use super::ui::commands::ShellCommand;

/// Everything the main loop reacts to.
pub enum LoopEvent {
    Core(Msg),
    Shell(ShellCommand),
    InputClosed,
}

pub fn run_app() -> anyhow::Result<()> {
    logging::initialize(&LogSettings::from_env());

    let settings = settings::engine_settings()?;
    let backup = settings::load_backup_flag(&settings);
    organizer_info!("Starting with backup enabled = {}", backup);

    let (loop_tx, loop_rx) = mpsc::channel::<LoopEvent>();
    let effects = EffectRunner::new(settings.clone(), loop_tx.clone())?;

    spawn_input_reader(loop_tx.clone());

    // Background tick to age notifications.
    let tick_tx = loop_tx;
    thread::spawn(move || {
        let interval = Duration::from_millis(ui::constants::TICK_MILLIS);
        while tick_tx.send(LoopEvent::Core(Msg::Tick(interval))).is_ok() {
            thread::sleep(interval);
        }
    });

    let mut shell = Shell::new(AppState::with_backup(backup), settings, effects);
    shell.print_lines(&ui::render::render(&shell.state.view()))?;
    shell.print_lines(&[ui::constants::HELP.to_string()])?;
    shell.prompt()?;

    for event in loop_rx {
        match event {
            LoopEvent::Core(msg) => shell.dispatch_msg(msg)?,
            LoopEvent::Shell(ShellCommand::Quit) | LoopEvent::InputClosed => break,
            LoopEvent::Shell(command) => {
                shell.handle_command(command)?;
                shell.prompt()?;
            }
        }
    }

    organizer_info!("Shutting down");
    Ok(())
}

fn spawn_input_reader(loop_tx: mpsc::Sender<LoopEvent>) {
    thread::spawn(move || {
        let stdin = io::stdin();
        for line in stdin.lock().lines() {
            let line = match line {
                Ok(line) => line,
                Err(err) => {
                    organizer_warn!("Failed to read input: {}", err);
                    break;
                }
            };
            if let Some(command) = ui::commands::parse_command(&line) {
                if loop_tx.send(LoopEvent::Shell(command)).is_err() {
                    return;
                }
            }
        }
        let _ = loop_tx.send(LoopEvent::InputClosed);
    });
}

struct Shell {
    state: AppState,
    settings: EngineSettings,
    effects: EffectRunner,
}

impl Shell {
    fn new(state: AppState, settings: EngineSettings, effects: EffectRunner) -> Self {
        Self {
            state,
            settings,
            effects,
        }
    }

    fn handle_command(&mut self, command: ShellCommand) -> anyhow::Result<()> {
        match command {
            ShellCommand::Dispatch(msg) => self.dispatch_msg(msg),
            ShellCommand::Reload => {
                let backup = settings::load_backup_flag(&self.settings);
                self.dispatch_msg(Msg::BackupSettingLoaded(backup))
            }
            ShellCommand::Instructions => {
                self.print_lines(&[ui::constants::INSTRUCTIONS.to_string()])
            }
            ShellCommand::Help => self.print_lines(&[ui::constants::HELP.to_string()]),
            ShellCommand::Unknown(line) => {
                self.print_lines(&[format!("Unknown command: {line} (try `help`)")])
            }
            ShellCommand::Quit => Ok(()),
        }
    }

    fn dispatch_msg(&mut self, msg: Msg) -> anyhow::Result<()> {
        let state = std::mem::take(&mut self.state);
        let (mut state, effects) = update(state, msg);
        let was_dirty = state.consume_dirty();
        let view = state.view();
        self.state = state;

        self.effects.enqueue(effects);
        if was_dirty {
            self.print_lines(&ui::render::render(&view))?;
        }
        Ok(())
    }

    fn print_lines(&self, lines: &[String]) -> anyhow::Result<()> {
        let mut out = io::stdout().lock();
        for line in lines {
            writeln!(out, "{line}").context("writing to stdout")?;
        }
        out.flush().context("flushing stdout")
    }

    fn prompt(&self) -> anyhow::Result<()> {
        let mut out = io::stdout().lock();
        write!(out, "{}", ui::constants::PROMPT).context("writing prompt")?;
        out.flush().context("flushing stdout")
    }
}
