use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
  #[error("invalid argument: {0}")]
  InvalidArgument(String),

  #[error("witness does not satisfy the constraint system: {0}")]
  InvalidWitness(String),

  #[error("arithmetic failure: {0}")]
  ArithmeticFailure(String),

  #[error("malformed artifact: {0}")]
  Serialization(String),
}
