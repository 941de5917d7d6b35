#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("The navigation catalog has no entries")]
    Empty,

    #[error("Navigation entry #{index} has an empty `{field}'")]
    MissingField { index: usize, field: &'static str },
}

pub type Result<T> = std::result::Result<T, Error>;
