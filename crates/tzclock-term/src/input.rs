//! Parsing of the lines typed at the clock prompt.

use tzclock_core::timezone::stable_key;
use tzclock_core::{Control, ControlSet};

/// A command typed at the prompt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputCommand {
    /// Stop the clock.
    Quit,
    /// Show the next page of buttons.
    NextPage,
    /// Show the previous page of buttons.
    PrevPage,
    /// Repaint the whole screen.
    Redraw,
    /// Activate the button with this 1-based number.
    Index(usize),
    /// Activate the button with this key or timezone identifier.
    Key(String),
}

/// Parses one line of input. Surrounding whitespace is ignored.
pub fn parse(line: &str) -> InputCommand {
    let line = line.trim();
    match line.to_ascii_lowercase().as_str() {
        "q" | "quit" | "exit" => return InputCommand::Quit,
        "n" | "next" => return InputCommand::NextPage,
        "p" | "prev" => return InputCommand::PrevPage,
        "" => return InputCommand::Redraw,
        _ => {}
    }
    match line.parse::<usize>() {
        Ok(n) => InputCommand::Index(n),
        Err(_) => InputCommand::Key(line.to_string()),
    }
}

/// Finds the control an `Index` or `Key` command refers to.
///
/// Keys are compared after normalising the typed text the same way
/// control keys are built, so `utc`, `UTC` and `Australia/Brisbane`
/// all address their control.
pub fn resolve<'a>(controls: &'a ControlSet, command: &InputCommand) -> Option<&'a Control> {
    match command {
        InputCommand::Index(n) => n.checked_sub(1).and_then(|i| controls.get(i)),
        InputCommand::Key(text) => controls.find_by_key(&stable_key(text)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use tzclock_core::catalog;

    use super::*;

    #[test]
    fn parses_command_words() {
        assert_eq!(parse("q"), InputCommand::Quit);
        assert_eq!(parse(" Quit "), InputCommand::Quit);
        assert_eq!(parse("exit"), InputCommand::Quit);
        assert_eq!(parse("n"), InputCommand::NextPage);
        assert_eq!(parse("next"), InputCommand::NextPage);
        assert_eq!(parse("p"), InputCommand::PrevPage);
        assert_eq!(parse("prev"), InputCommand::PrevPage);
        assert_eq!(parse("   "), InputCommand::Redraw);
    }

    #[test]
    fn parses_numbers_and_keys() {
        assert_eq!(parse("12"), InputCommand::Index(12));
        assert_eq!(parse("utc"), InputCommand::Key("utc".into()));
        assert_eq!(
            parse("Australia/Brisbane\n"),
            InputCommand::Key("Australia/Brisbane".into())
        );
    }

    #[test]
    fn resolves_by_index_key_and_identifier() {
        // Arrange
        let controls = ControlSet::from_catalog(&catalog::fallback());

        // Act
        let first = resolve(&controls, &parse("1"));
        let by_key = resolve(&controls, &parse("australia-brisbane"));
        let by_id = resolve(&controls, &parse("Australia/Brisbane"));
        let upper = resolve(&controls, &parse("UTC"));

        // Assert
        assert_eq!(first.map(|c| c.id.as_str()), Some("UTC"));
        assert_eq!(by_key.map(|c| c.id.as_str()), Some("Australia/Brisbane"));
        assert_eq!(by_id, by_key);
        assert_eq!(upper.map(|c| c.id.as_str()), Some("UTC"));
    }

    #[test]
    fn unknown_targets_resolve_to_nothing() {
        let controls = ControlSet::from_catalog(&catalog::fallback());

        assert!(resolve(&controls, &parse("0")).is_none());
        assert!(resolve(&controls, &parse("999")).is_none());
        assert!(resolve(&controls, &parse("mars-olympus")).is_none());
        assert!(resolve(&controls, &InputCommand::Quit).is_none());
    }
}
