//! Terminal session loop: one message stream, one owned state value.

use std::io::{self, Stdout};
use std::time::Duration;

use crossterm::event::{self, Event};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use apilens_core::{update, Mode, Msg, SessionState};

use crate::effects::EffectRunner;
use crate::keymap;
use crate::ui;

const POLL_INTERVAL: Duration = Duration::from_millis(50);

pub fn run(initial_url: String) -> io::Result<()> {
    let mut terminal = setup_terminal()?;
    let result = event_loop(&mut terminal, initial_url);
    restore_terminal(&mut terminal)?;
    result
}

fn setup_terminal() -> io::Result<Terminal<CrosstermBackend<Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    stdout.execute(EnterAlternateScreen)?;
    Terminal::new(CrosstermBackend::new(stdout))
}

fn restore_terminal(terminal: &mut Terminal<CrosstermBackend<Stdout>>) -> io::Result<()> {
    disable_raw_mode()?;
    terminal.backend_mut().execute(LeaveAlternateScreen)?;
    terminal.show_cursor()
}

fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<Stdout>>,
    initial_url: String,
) -> io::Result<()> {
    let mut state = SessionState::new(initial_url);
    let mut runner = EffectRunner::new();
    let mut spinner_frame = 0usize;

    let view = state.view();
    terminal.draw(|frame| ui::render(frame, &view, spinner_frame))?;

    loop {
        // Engine completions and key events merge into one sequential
        // stream; each message is applied in full before the next one is
        // looked at, so a completion never races a keystroke.
        let msg = if let Some(msg) = runner.poll_engine() {
            Some(msg)
        } else if event::poll(POLL_INTERVAL)? {
            match event::read()? {
                Event::Key(key) => Some(keymap::translate(key, state.mode())),
                Event::Resize(_, _) => Some(Msg::NoOp),
                _ => None,
            }
        } else if state.mode() == Mode::Fetching {
            spinner_frame = spinner_frame.wrapping_add(1);
            Some(Msg::Tick)
        } else {
            None
        };

        let Some(msg) = msg else { continue };

        let (next_state, effects) = update(state, msg);
        state = next_state;
        runner.run(effects);
        if runner.should_quit() {
            return Ok(());
        }

        let view = state.view();
        terminal.draw(|frame| ui::render(frame, &view, spinner_frame))?;
    }
}
