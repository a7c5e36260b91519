use thiserror::Error;

pub type CommandResult<T> = Result<T, GeotestError>;

#[derive(Debug, Error)]
pub enum GeotestError {
    #[error("no handler is registered for command `{0}`")]
    UnknownCommand(String),
    #[error("no value was provided for `{0}`")]
    MissingParameter(&'static str),
    #[error("parameter `{name}` does not hold {expected}")]
    WrongType {
        name: &'static str,
        expected: &'static str,
    },
    #[error("input ended before `{0}` was provided")]
    PromptAborted(&'static str),
    #[error(transparent)]
    Io(#[from] std::io::Error),
}
