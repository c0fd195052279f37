use std::str::FromStr;

use clap::Parser;

use crate::errors::AppError;
use crate::storage::DEFAULT_STORAGE_PATH;

#[derive(Parser, Debug)]
#[command(
    name = "rusty-addressbook",
    version,
    about = "Address book assistant bot"
)]
pub struct Cli {
    /// File the address book is loaded from and saved to
    #[arg(long, env = "ADDRESS_BOOK_PATH", default_value_t = String::from(DEFAULT_STORAGE_PATH))]
    pub file: String,

    /// Storage choice (json, mem) are available
    #[arg(long, env = "STORAGE_CHOICE", default_value_t = String::from("json"))]
    pub storage: String,

    /// Log level written to stderr (off, error, warn, info, debug, trace)
    #[arg(long, env = "RUST_LOG", default_value_t = String::from("warn"))]
    pub log_level: String,
}

/// Commands understood at the prompt
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Hello,
    Help,
    Add,
    Change,
    Phone,
    RemovePhone,
    Delete,
    All,
    AddBirthday,
    ShowBirthday,
    Birthdays,
    Exit,
    Empty,
}

impl FromStr for Command {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "hello" => Ok(Command::Hello),
            "help" => Ok(Command::Help),
            "add" => Ok(Command::Add),
            "change" => Ok(Command::Change),
            "phone" => Ok(Command::Phone),
            "remove-phone" => Ok(Command::RemovePhone),
            "delete" => Ok(Command::Delete),
            "all" => Ok(Command::All),
            "add-birthday" => Ok(Command::AddBirthday),
            "show-birthday" => Ok(Command::ShowBirthday),
            "birthdays" => Ok(Command::Birthdays),
            "exit" | "close" => Ok(Command::Exit),
            "" => Ok(Command::Empty),
            _ => Err(AppError::ParseCommand(s.to_string())),
        }
    }
}

/// Split a line into a lowercased command word and its arguments.
pub fn parse_input(user_input: &str) -> (String, Vec<String>) {
    let mut parts = user_input.split_whitespace();

    let Some(cmd) = parts.next() else {
        return (String::new(), Vec::new());
    };

    (cmd.to_lowercase(), parts.map(str::to_string).collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_input_splits_command_and_args() {
        let (cmd, args) = parse_input("  ADD John   1234567890 ");

        assert_eq!(cmd, "add");
        assert_eq!(args, vec!["John".to_string(), "1234567890".to_string()]);
    }

    #[test]
    fn parse_input_blank_line() {
        let (cmd, args) = parse_input("   \t ");

        assert!(cmd.is_empty());
        assert!(args.is_empty());
    }

    #[test]
    fn command_from_str() {
        assert_eq!("close".parse::<Command>().unwrap(), Command::Exit);
        assert_eq!("exit".parse::<Command>().unwrap(), Command::Exit);
        assert_eq!(
            "add-birthday".parse::<Command>().unwrap(),
            Command::AddBirthday
        );
        assert_eq!("".parse::<Command>().unwrap(), Command::Empty);
        assert!(matches!(
            "jump".parse::<Command>(),
            Err(AppError::ParseCommand(cmd)) if cmd == "jump"
        ));
    }

    #[test]
    fn cli_defaults() {
        let cli = Cli::try_parse_from(["rusty-addressbook", "--file", "book.json"]).unwrap();

        assert_eq!(cli.file, "book.json");
    }
}
