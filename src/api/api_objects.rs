use serde::Deserialize;

use crate::sequence_generator::Position;

#[derive(Debug, Deserialize)]
pub struct FindNumberQuery {
    pub n: Position,
    #[serde(default)]
    pub iterative: bool, // opt-in loop instead of recursion
}

#[derive(Debug, Deserialize)]
pub struct PositionQuery {
    pub n: Position,
}

#[derive(Debug, Deserialize)]
pub struct CountQuery {
    pub n: i32,
}

/// Count kept as raw text so validation happens in the handler.
#[derive(Debug, Deserialize)]
pub struct RawCountQuery {
    pub n: String,
}

#[derive(Debug, Deserialize)]
pub struct FilenameQuery {
    pub filename: String,
}
