use std::str::FromStr;

/// Commands coming from the presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// Pick a new random word
    NextWord,
    /// Save the word currently shown
    SaveCurrent,
    /// Show the saved words list
    ListSaved,
    /// Detail page for one saved word (0-based)
    ShowSaved(usize),
    /// Remove saved words at these offsets (0-based)
    DeleteSaved(Vec<usize>),
    Reload,
    Help,
    Quit,
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseEventError {
    #[error("empty command")]
    Empty,

    #[error("unknown command '{0}', try 'help'")]
    Unknown(String),

    #[error("usage: {0}")]
    Usage(&'static str),

    #[error("'{0}' is not a position")]
    BadPosition(String),

    #[error("positions start at 1")]
    ZeroPosition,
}

/// Positions typed by the user start at 1; events carry 0-based offsets.
fn parse_position(arg: &str) -> Result<usize, ParseEventError> {
    let position: usize = arg
        .parse()
        .map_err(|_| ParseEventError::BadPosition(arg.to_string()))?;
    position.checked_sub(1).ok_or(ParseEventError::ZeroPosition)
}

impl FromStr for AppEvent {
    type Err = ParseEventError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let mut words = line.split_whitespace();
        let command = words.next().ok_or(ParseEventError::Empty)?;
        let args: Vec<&str> = words.collect();

        let event = match command.to_lowercase().as_str() {
            "next" | "n" => AppEvent::NextWord,
            "save" | "s" => AppEvent::SaveCurrent,
            "list" | "l" => AppEvent::ListSaved,
            "reload" => AppEvent::Reload,
            "help" | "h" | "?" => AppEvent::Help,
            "quit" | "q" | "exit" => AppEvent::Quit,
            "show" => match args.as_slice() {
                [position] => AppEvent::ShowSaved(parse_position(position)?),
                _ => return Err(ParseEventError::Usage("show <i>")),
            },
            "delete" | "d" => {
                if args.is_empty() {
                    return Err(ParseEventError::Usage("delete <i> [<j>...]"));
                }
                let offsets = args
                    .iter()
                    .map(|a| parse_position(a))
                    .collect::<Result<Vec<_>, _>>()?;
                AppEvent::DeleteSaved(offsets)
            }
            other => return Err(ParseEventError::Unknown(other.to_string())),
        };

        Ok(event)
    }
}
