use crate::error::Error as JokeErr;
pub type Result<T> = std::result::Result<T, JokeErr>;
