use std::io;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("replacement rule {index} has an empty search value")]
    EmptySearchValue { index: usize },
    #[error("rule `{0}` is not of the form SEARCH=REPLACE")]
    MalformedRule(String),
}
