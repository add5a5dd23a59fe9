use thiserror::Error;

#[derive(Debug, Error)]
pub enum SyllableError {
    #[error("I/O error while {context}: {source}")]
    Io {
        context: &'static str,
        #[source]
        source: std::io::Error,
    },
    #[error("JSON error while {context}: {source}")]
    Json {
        context: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("CSV error while {context}: {source}")]
    Csv {
        context: &'static str,
        #[source]
        source: csv::Error,
    },
    #[error("TextGrid error while {context}: {message}")]
    TextGrid {
        context: &'static str,
        message: String,
    },
    #[error("{context}: {message}")]
    Runtime {
        context: &'static str,
        message: String,
    },
    #[error("invalid input: {message}")]
    InvalidInput { message: String },
    /// A single word could not be processed. Callers drop the word and keep going.
    #[error("malformed word '{word}': {message}")]
    MalformedWord { word: String, message: String },
}

impl SyllableError {
    pub(crate) fn io(context: &'static str, source: std::io::Error) -> Self {
        Self::Io { context, source }
    }

    pub(crate) fn json(context: &'static str, source: serde_json::Error) -> Self {
        Self::Json { context, source }
    }

    pub(crate) fn csv(context: &'static str, source: csv::Error) -> Self {
        Self::Csv { context, source }
    }

    pub(crate) fn textgrid(context: &'static str, err: impl std::fmt::Display) -> Self {
        Self::TextGrid {
            context,
            message: err.to_string(),
        }
    }

    pub(crate) fn runtime(context: &'static str, err: impl std::fmt::Display) -> Self {
        Self::Runtime {
            context,
            message: err.to_string(),
        }
    }

    pub(crate) fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }

    pub(crate) fn malformed_word(word: impl Into<String>, message: impl Into<String>) -> Self {
        Self::MalformedWord {
            word: word.into(),
            message: message.into(),
        }
    }

    /// True when the error only concerns one word and the batch can continue.
    pub fn is_unit_local(&self) -> bool {
        matches!(self, Self::MalformedWord { .. })
    }
}
