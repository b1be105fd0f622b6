//! Error types for the workshop.

use thiserror::Error;

/// Errors produced while running the workshop.
#[derive(Debug, Error)]
pub enum UsercraftError {
    /// Writing a listing to the output stream failed.
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),

    /// The followers formula does not fit in a `u32` for this user.
    #[error("followers count overflows for user {name} (age {age})")]
    FollowersOverflow { name: String, age: u32 },
}

/// Result alias used across the crate.
pub type Result<T> = std::result::Result<T, UsercraftError>;
