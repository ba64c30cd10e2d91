#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Failed to bind {addr}: {reason}")]
    Bind { addr: String, reason: String },

    #[error("Server error: {0}")]
    Serve(String),
}
