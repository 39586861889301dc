use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReduceError {
    #[error("geometry batch must not be empty")]
    EmptyBatch,
}

#[derive(Error, Debug)]
pub enum PipelineError {
    #[error("input file has no content")]
    EmptyFile,

    #[error("no valid WKT geometry found in {line_count} lines")]
    NothingDecoded { line_count: usize },

    #[error("reduction failed: {0}")]
    Reduce(#[from] ReduceError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type PipelineResult<T> = Result<T, PipelineError>;
