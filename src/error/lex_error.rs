#[derive(Debug)]
/// Represents all errors that can occur while tokenizing the input.
pub enum LexError {
    /// Found a character that does not start any token.
    BadToken {
        /// The offending text.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A token was put back while another one was still waiting in the buffer.
    PutbackFull {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The underlying reader failed.
    Io(std::io::Error),
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BadToken { token, line } => {
                write!(f, "Error on line {line}: Bad token '{token}'.")
            },
            Self::PutbackFull { line } => {
                write!(f, "Error on line {line}: putback() into a full buffer.")
            },
            Self::Io(e) => write!(f, "Failed to read input: {e}"),
        }
    }
}

impl std::error::Error for LexError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for LexError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
