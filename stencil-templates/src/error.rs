use std::error::Error as StdError;
use std::fmt::{self, Display, Formatter};

use crate::params::ParamId;

pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, PartialEq)]
pub enum Error {
    /// The parser bound the same parameter twice.
    /// This is a parser bug, fatal to tag construction.
    DuplicateBinding(ParamId),
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Error::DuplicateBinding(param) => write!(f, "parameter {param} is already bound"),
        }
    }
}

impl StdError for Error {}
