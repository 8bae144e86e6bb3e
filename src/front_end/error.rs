use super::GraphRule;
use derive_more::{Display, From};

pub type Result<T> = std::result::Result<T, pest::error::Error<GraphRule>>;

#[derive(Debug, Display, From)]
pub enum ReadError {
    #[display(fmt = "{}", _0)]
    Io(std::io::Error),
    #[display(fmt = "{}", _0)]
    Parse(pest::error::Error<GraphRule>),
}

impl std::error::Error for ReadError {}
