// One error type for the whole crate.
// Every variant states *where* things went wrong.
use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Window init error: {0}")]
    WindowInit(String), // Creating the window failed
    #[error("Window update error: {0}")]
    WindowUpdate(String), // Pushing the framebuffer to the window failed
    #[error("Runtime error: {0}")]
    Runtime(String), // The background fetch runtime could not start
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error), // Request failed or returned a non-2xx status
    #[error("Decode error: {0}")]
    Decode(String), // Response body was not what the endpoint promised
    #[error("{0}")]
    InvalidUpi(String), // Payee id missing or malformed (message is user-facing)
    #[error("{0}")]
    InvalidAmount(String), // Amount missing, non-numeric or not positive
    #[error("Image error: {0}")]
    Image(#[from] image::ImageError), // QR bytes could not be decoded or saved
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
