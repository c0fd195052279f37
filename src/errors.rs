use core::fmt;

#[derive(Debug)]
pub enum AppError {
    Io(std::io::Error),
    Json(serde_json::Error),
    Logger(log::SetLoggerError),
    MissingArgs(String),
    NotFound(String),
    ParseCommand(String),
    Regex(regex::Error),
    Validation(String),
}

impl From<std::io::Error> for AppError {
    fn from(err: std::io::Error) -> Self {
        AppError::Io(err)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::Json(err)
    }
}

impl From<regex::Error> for AppError {
    fn from(err: regex::Error) -> Self {
        AppError::Regex(err)
    }
}

impl From<log::SetLoggerError> for AppError {
    fn from(err: log::SetLoggerError) -> Self {
        AppError::Logger(err)
    }
}

impl fmt::Display for AppError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AppError::Io(e) => {
                write!(f, "I/O error while accessing a file or resource: {}", e)
            }
            AppError::Json(e) => {
                write!(f, "Malformed address book data: {}", e)
            }
            AppError::Logger(e) => {
                write!(f, "Logger could not be installed: {}", e)
            }
            AppError::MissingArgs(usage) => {
                write!(f, "{}", usage)
            }
            AppError::NotFound(item) => {
                write!(f, "{} Not found", item)
            }
            AppError::ParseCommand(cmd) => {
                write!(f, "Unrecognized command: '{}'", cmd)
            }
            AppError::Regex(e) => {
                write!(f, "Invalid validation pattern: {}", e)
            }
            AppError::Validation(msg) => {
                write!(f, "{}", msg)
            }
        }
    }
}

impl std::error::Error for AppError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            AppError::Io(e) => Some(e),
            AppError::Json(e) => Some(e),
            AppError::Logger(e) => Some(e),
            AppError::Regex(e) => Some(e),
            _ => None,
        }
    }
}
