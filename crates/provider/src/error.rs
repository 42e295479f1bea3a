use model::error::Invalid;
use serde_json::error::Category;
use std::{
    fmt::{self, Display},
    io,
};

#[derive(Debug)]
pub enum Error {
    /// No quiz with the requested identifier.
    NotFound,
    /// The catalogue could not be read.
    Io(io::ErrorKind),
    /// JSON syntax error detected.
    Syntax,
    /// Unexpected JSON data types encountered.
    Data,
    /// A quiz violates the quiz invariants.
    Invalid(u64, Invalid),
    /// A quiz image is not an absolute web URL.
    BadImage(u64),
    /// Two quizzes share the same identifier.
    DuplicateQuiz(u64),
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Self::Io(err.kind())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        match err.classify() {
            Category::Syntax | Category::Eof => Self::Syntax,
            Category::Data => Self::Data,
            Category::Io => Self::Io(io::ErrorKind::Other),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotFound => f.write_str("not found"),
            Self::Io(kind) => write!(f, "Failed to read the quiz catalogue ({kind})."),
            Self::Syntax => f.write_str("Syntax error in JSON detected."),
            Self::Data => f.write_str("Unexpected data types in JSON detected."),
            Self::Invalid(id, reason) => write!(f, "Quiz {id} is invalid: {reason}"),
            Self::BadImage(id) => write!(f, "Quiz {id} has an invalid image URL."),
            Self::DuplicateQuiz(id) => write!(f, "Quiz {id} appears more than once."),
        }
    }
}

impl std::error::Error for Error {}

pub type Result<T> = core::result::Result<T, Error>;
