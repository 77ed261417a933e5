//! # Chat Error Types
//!
//! Error types for the chat engine.
//!
//! ## Error Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Error Propagation                                    │
//! │                                                                         │
//! │  ChatHandle method (open / send_message / ...)                          │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  mpsc send fails ← engine task has shut down                            │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  ChatError::ChannelError                                                │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Ignored inputs (blank messages, sends while closed) are not errors;
//! the engine drops them and logs at debug level.

use thiserror::Error;

/// Result type alias for chat operations.
pub type ChatResult<T> = Result<T, ChatError>;

/// Chat engine errors.
#[derive(Debug, Error)]
pub enum ChatError {
    /// The engine task is gone and can no longer accept commands.
    ///
    /// ## When This Occurs
    /// - Using a handle after `shutdown()`
    /// - The engine task panicked
    #[error("Chat channel error: {0}")]
    ChannelError(String),
}
