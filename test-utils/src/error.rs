use thiserror::Error;

/// Errors that can occur while setting up a test environment.
#[derive(Error, Debug)]
pub enum TestError {
    /// The mock server could not bind or inspect its listening socket.
    #[error("Failed to start mock server: {0}")]
    MockServer(#[from] std::io::Error),
}
