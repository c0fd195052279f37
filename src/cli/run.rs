use crate::{
    logger,
    prelude::{
        AddressBook, AppError, NaiveDate,
        command::{Cli, Command, parse_input},
        handlers::{self, reply},
        storage::{StorageMediums, load_or_empty, parse_storage_type},
    },
};
use chrono::Local;
use clap::Parser;
use dotenv::dotenv;
use std::io::{self, BufRead, Write};

pub const WELCOME: &str = "Welcome to the assistant bot!";
pub const PROMPT: &str = "Enter a command: ";
pub const GOODBYE: &str = "Good bye!";
pub const INVALID_INPUT: &str = "Error: Input is not valid UTF-8 text.";

pub fn run_app() -> Result<(), AppError> {
    dotenv().ok();

    let cli = Cli::parse();

    logger::init(logger::parse_level(&cli.log_level))?;

    let medium = StorageMediums::from(&cli.storage)?;
    let storage = parse_storage_type(medium, &cli.file)?;

    log::info!(target: "cli", "Current storage choice is: {}", medium.is_which());

    let source = if medium.is_mem() { "memory" } else { cli.file.as_str() };
    let mut book = load_or_empty(storage.as_ref(), source);

    let stdin = io::stdin();
    let stdout = io::stdout();
    let session = run_session(&mut book, stdin.lock(), stdout.lock(), || {
        Local::now().date_naive()
    });

    // Whatever ended the session, the book is still written out
    if let Err(e) = &session {
        log::error!(target: "cli", "Session ended early: {}", e);
    }
    storage.save(&book)?;

    session
}

/// Read commands from `input` until `exit`/`close` or end of input.
///
/// Command failures and lines that are not valid UTF-8 are reported to
/// `output` and never end the session. Only I/O errors on `input` or
/// `output` are returned.
pub fn run_session<R, W, T>(
    book: &mut AddressBook,
    mut input: R,
    mut output: W,
    today: T,
) -> Result<(), AppError>
where
    R: BufRead,
    W: Write,
    T: Fn() -> NaiveDate,
{
    writeln!(output, "{}", WELCOME)?;

    let mut buf: Vec<u8> = Vec::new();

    loop {
        write!(output, "{}", PROMPT)?;
        output.flush()?;

        buf.clear();
        if input.read_until(b'\n', &mut buf)? == 0 {
            // End of input saves like an explicit exit
            writeln!(output)?;
            break;
        }

        let line = match std::str::from_utf8(&buf) {
            Ok(line) => line,
            Err(e) => {
                log::debug!(target: "cli", "Rejected input line: {}", e);
                writeln!(output, "{}", INVALID_INPUT)?;
                continue;
            }
        };

        let (cmd, args) = parse_input(line);

        let command = match cmd.parse::<Command>() {
            Ok(command) => command,
            Err(e) => {
                log::debug!(target: "cli", "{}", e);
                writeln!(
                    output,
                    "Invalid command. Type 'help' for available commands."
                )?;
                continue;
            }
        };

        let result = match command {
            Command::Exit => break,
            Command::Empty => continue,
            Command::Hello => Ok("How can I help you?".to_string()),
            Command::Help => Ok(handlers::HELP_TEXT.to_string()),
            Command::Add => handlers::add_contact(&args, book),
            Command::Change => handlers::change_contact(&args, book),
            Command::Phone => handlers::show_phone(&args, book),
            Command::RemovePhone => handlers::remove_phone(&args, book),
            Command::Delete => handlers::delete_contact(&args, book),
            Command::All => handlers::show_all(book),
            Command::AddBirthday => handlers::add_birthday(&args, book),
            Command::ShowBirthday => handlers::show_birthday(&args, book),
            Command::Birthdays => handlers::birthdays(book, today()),
        };

        if let Err(e) = &result {
            log::debug!(target: "cli", "{} failed: {}", cmd, e);
        }

        writeln!(output, "{}", reply(result))?;
    }

    writeln!(output, "{}", GOODBYE)?;
    output.flush()?;
    Ok(())
}
