use organizer_core::Msg;

/// One line typed into the shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    Dispatch(Msg),
    Reload,
    Instructions,
    Help,
    Quit,
    Unknown(String),
}

/// Parses a shell line. Blank lines yield `None`.
///
/// Only the line terminator is stripped from `path` arguments; everything after
/// the first space is the path, spaces included.
pub fn parse_command(line: &str) -> Option<ShellCommand> {
    let line = line.trim_end_matches(['\n', '\r']);
    if line.trim().is_empty() {
        return None;
    }
    let (word, rest) = line.split_once(' ').unwrap_or((line, ""));

    let command = match word {
        "path" => ShellCommand::Dispatch(Msg::PathChanged(rest.to_string())),
        "clear" => ShellCommand::Dispatch(Msg::PathChanged(String::new())),
        "organize" => ShellCommand::Dispatch(Msg::OrganizeClicked),
        "panel" => match rest.trim() {
            "open" => ShellCommand::Dispatch(Msg::PanelOpened),
            "close" => ShellCommand::Dispatch(Msg::PanelClosed),
            _ => ShellCommand::Unknown(line.to_string()),
        },
        "toggle" => ShellCommand::Dispatch(Msg::BackupToggled),
        "config" => ShellCommand::Dispatch(Msg::OpenConfigClicked),
        "dismiss" => match rest.trim().parse() {
            Ok(id) => ShellCommand::Dispatch(Msg::NotificationDismissed(id)),
            Err(_) => ShellCommand::Unknown(line.to_string()),
        },
        "reload" => ShellCommand::Reload,
        "instructions" => ShellCommand::Instructions,
        "help" => ShellCommand::Help,
        "quit" | "exit" => ShellCommand::Quit,
        _ => ShellCommand::Unknown(line.to_string()),
    };
    Some(command)
}
