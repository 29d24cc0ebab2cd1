//! Interactive single-line pager.
//!
//! Keys: `←`/`h`/`p` previous page, `→`/`l`/`n` next page, digits then `Enter`
//! to jump, `Backspace` edits the typed number, `Esc` clears it, `q` or
//! `Ctrl-C` quits.

use anyhow::Result;
use core_actions::Paginator;
use core_events::{PageEvent, PaginationHooks};
use core_render::{Labels, Renderer, TerminalRenderer};
use core_terminal::CrosstermBackend;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tracing::{debug, trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyCommand {
    Page(PageEvent),
    Digit(u8),
    Backspace,
    Clear,
    Submit,
    Quit,
}

pub fn key_command(key: &KeyEvent) -> Option<KeyCommand> {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return matches!(key.code, KeyCode::Char('c')).then_some(KeyCommand::Quit);
    }
    match key.code {
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('p') => {
            Some(KeyCommand::Page(PageEvent::Prev))
        }
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('n') => {
            Some(KeyCommand::Page(PageEvent::Next))
        }
        KeyCode::Char(c) if c.is_ascii_digit() => Some(KeyCommand::Digit(c as u8 - b'0')),
        KeyCode::Backspace => Some(KeyCommand::Backspace),
        KeyCode::Esc => Some(KeyCommand::Clear),
        KeyCode::Enter => Some(KeyCommand::Submit),
        KeyCode::Char('q') => Some(KeyCommand::Quit),
        _ => None,
    }
}

/// Page number being typed before `Enter`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct GotoPrompt {
    digits: String,
}

impl GotoPrompt {
    pub fn push(&mut self, digit: u8) {
        // Leading zeros carry no value.
        if digit == 0 && self.digits.is_empty() {
            return;
        }
        self.digits.push(char::from(b'0' + digit));
    }

    pub fn pop(&mut self) {
        self.digits.pop();
    }

    pub fn clear(&mut self) {
        self.digits.clear();
    }

    /// Consume the typed number. Oversized input saturates; the controller
    /// clamps it to the last page anyway.
    pub fn take(&mut self) -> Option<usize> {
        if self.digits.is_empty() {
            return None;
        }
        let page = self.digits.parse::<usize>().unwrap_or(usize::MAX);
        self.digits.clear();
        Some(page)
    }

    pub fn status(&self) -> String {
        if self.digits.is_empty() {
            String::new()
        } else {
            format!("goto: {}", self.digits)
        }
    }
}

/// What the loop should do after a key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Continue,
    Quit,
}

/// Apply one key command to the controller and the prompt.
pub fn apply<H: PaginationHooks>(
    paginator: &mut Paginator<H>,
    prompt: &mut GotoPrompt,
    command: KeyCommand,
) -> Step {
    match command {
        KeyCommand::Page(event) => {
            prompt.clear();
            let transition = paginator.dispatch(event);
            debug!(
                target: "runtime.pager",
                ?transition,
                committed = transition.is_committed(),
                "key_transition"
            );
        }
        KeyCommand::Digit(d) => prompt.push(d),
        KeyCommand::Backspace => prompt.pop(),
        KeyCommand::Clear => prompt.clear(),
        KeyCommand::Submit => {
            if let Some(page) = prompt.take() {
                let transition = paginator.dispatch(PageEvent::Click(page));
                debug!(
                    target: "runtime.pager",
                    ?transition,
                    committed = transition.is_committed(),
                    "key_transition"
                );
            }
        }
        KeyCommand::Quit => return Step::Quit,
    }
    Step::Continue
}

pub fn run<H: PaginationHooks>(paginator: &mut Paginator<H>, labels: Labels) -> Result<()> {
    let mut backend = CrosstermBackend::new();
    let _guard = backend.enter_guard()?;
    let mut renderer = TerminalRenderer::new(std::io::stdout(), labels);
    let mut prompt = GotoPrompt::default();
    renderer.render(paginator.plan())?;

    loop {
        let Event::Key(key) = event::read()? else {
            continue;
        };
        if !matches!(key.kind, KeyEventKind::Press | KeyEventKind::Repeat) {
            continue;
        }
        let Some(command) = key_command(&key) else {
            trace!(target: "runtime.pager", code = ?key.code, "key_ignored");
            continue;
        };
        if apply(paginator, &mut prompt, command) == Step::Quit {
            return Ok(());
        }
        renderer.set_status(prompt.status());
        renderer.render(paginator.plan())?;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_events::NoopHooks;
    use core_model::PaginationOptions;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn paginator() -> Paginator {
        let opts = PaginationOptions {
            count: 1000,
            ..PaginationOptions::default()
        };
        core_actions::initialize(&opts, NoopHooks).unwrap()
    }

    #[test]
    fn maps_navigation_keys() {
        assert_eq!(
            key_command(&key(KeyCode::Right)),
            Some(KeyCommand::Page(PageEvent::Next))
        );
        assert_eq!(
            key_command(&key(KeyCode::Char('h'))),
            Some(KeyCommand::Page(PageEvent::Prev))
        );
        assert_eq!(key_command(&key(KeyCode::Char('7'))), Some(KeyCommand::Digit(7)));
        assert_eq!(key_command(&key(KeyCode::Char('x'))), None);
        assert_eq!(
            key_command(&KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            Some(KeyCommand::Quit)
        );
    }

    #[test]
    fn typed_number_jumps_on_enter() {
        let mut p = paginator();
        let mut prompt = GotoPrompt::default();
        for d in [0, 4, 2] {
            apply(&mut p, &mut prompt, KeyCommand::Digit(d));
        }
        assert_eq!(prompt.status(), "goto: 42");
        apply(&mut p, &mut prompt, KeyCommand::Submit);
        assert_eq!(p.current_page(), Some(42));
        assert_eq!(prompt.status(), "");
    }

    #[test]
    fn oversized_number_clamps_to_last_page() {
        let mut p = paginator();
        let mut prompt = GotoPrompt::default();
        for _ in 0..30 {
            prompt.push(9);
        }
        apply(&mut p, &mut prompt, KeyCommand::Submit);
        assert_eq!(p.current_page(), Some(100));
    }

    #[test]
    fn navigation_discards_typed_number() {
        let mut p = paginator();
        let mut prompt = GotoPrompt::default();
        apply(&mut p, &mut prompt, KeyCommand::Digit(5));
        apply(&mut p, &mut prompt, KeyCommand::Page(PageEvent::Next));
        assert_eq!(p.current_page(), Some(2));
        assert_eq!(prompt.take(), None);
    }

    #[test]
    fn enter_without_digits_does_nothing() {
        let mut p = paginator();
        let mut prompt = GotoPrompt::default();
        assert_eq!(apply(&mut p, &mut prompt, KeyCommand::Submit), Step::Continue);
        assert_eq!(p.current_page(), Some(1));
        assert_eq!(apply(&mut p, &mut prompt, KeyCommand::Quit), Step::Quit);
    }
}
