use thiserror::Error;

use crate::tensor::TensorId;

#[derive(Error, Debug)]
pub enum GraphError {
    #[error("tensor {0:?} already has a backing handle bound")]
    AlreadyBound(TensorId),
}

pub type Result<T> = std::result::Result<T, GraphError>;
