pub mod api;
pub mod error_classifier;
pub mod input_validator;
pub mod persistence_gateway;
pub mod ratio_calculator;
pub mod sequence_generator;
pub mod server;
pub mod utils;

pub use error_classifier::{classify, Classification, DomainError, ErrorKind};
pub use sequence_generator::{Position, Sequence, RANGE_LIMIT};
