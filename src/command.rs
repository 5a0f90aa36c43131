use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// An action requested by a key press during play
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Command {
    Quit,
    Up,
    Down,
    Left,
    Right,
    Pause,
    Restart,
}

impl Command {
    pub(crate) fn from_key_event(ev: KeyEvent) -> Option<Command> {
        match (ev.modifiers, ev.code) {
            (KeyModifiers::CONTROL, KeyCode::Char('c')) => Some(Command::Quit),
            (KeyModifiers::NONE, KeyCode::Char('w' | 'k') | KeyCode::Up) => Some(Command::Up),
            (KeyModifiers::NONE, KeyCode::Char('s' | 'j') | KeyCode::Down) => Some(Command::Down),
            (KeyModifiers::NONE, KeyCode::Char('a' | 'h') | KeyCode::Left) => Some(Command::Left),
            (KeyModifiers::NONE, KeyCode::Char('d' | 'l') | KeyCode::Right) => Some(Command::Right),
            (KeyModifiers::NONE, KeyCode::Char('p' | ' ')) => Some(Command::Pause),
            (KeyModifiers::NONE, KeyCode::Char('r')) => Some(Command::Restart),
            (KeyModifiers::NONE, KeyCode::Char('q')) => Some(Command::Quit),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(KeyCode::Up, Some(Command::Up))]
    #[case(KeyCode::Char('w'), Some(Command::Up))]
    #[case(KeyCode::Char('k'), Some(Command::Up))]
    #[case(KeyCode::Down, Some(Command::Down))]
    #[case(KeyCode::Char('j'), Some(Command::Down))]
    #[case(KeyCode::Left, Some(Command::Left))]
    #[case(KeyCode::Char('a'), Some(Command::Left))]
    #[case(KeyCode::Right, Some(Command::Right))]
    #[case(KeyCode::Char('l'), Some(Command::Right))]
    #[case(KeyCode::Char(' '), Some(Command::Pause))]
    #[case(KeyCode::Char('r'), Some(Command::Restart))]
    #[case(KeyCode::Char('q'), Some(Command::Quit))]
    #[case(KeyCode::Char('x'), None)]
    #[case(KeyCode::Enter, None)]
    fn plain_keys(#[case] code: KeyCode, #[case] cmd: Option<Command>) {
        assert_eq!(Command::from_key_event(KeyEvent::from(code)), cmd);
    }

    #[test]
    fn ctrl_c_quits() {
        let ev = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(Command::from_key_event(ev), Some(Command::Quit));
    }

    #[test]
    fn modified_letters_are_ignored() {
        let ev = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::ALT);
        assert_eq!(Command::from_key_event(ev), None);
    }
}
