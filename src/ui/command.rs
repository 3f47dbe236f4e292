use std::str::FromStr;

use crate::session::FormEvent;
use crate::types::FieldName;
use crate::ui::InputError;

/// A parsed line of terminal input.
#[derive(Debug, Clone, Eq, PartialEq)]
pub enum Input {
    Event(FormEvent),
    Quit
}

/// Parses one line typed by the user.
///
/// `name=value` edits a field and keeps everything after the first `=` verbatim, so values may
/// contain spaces or further `=` signs. Blank lines yield `None`.
pub fn parse_line(line: &str) -> Result<Option<Input>, InputError> {
    let command = line.trim();

    if command.is_empty() {
        return Ok(None);
    }

    let input = match command {
        "submit" => Input::Event(FormEvent::Submit),
        "show" => Input::Event(FormEvent::Show),
        "help" => Input::Event(FormEvent::Help),
        "quit" | "exit" => Input::Quit,
        _ => {
            let line = line.trim_start();
            let Some((name, value)) = line.split_once('=') else {
                return Err(InputError::unknown_command(command));
            };

            Input::Event(FormEvent::SetField {
                field: FieldName::from_str(name)?,
                value: value.to_string()
            })
        }
    };

    Ok(Some(input))
}
