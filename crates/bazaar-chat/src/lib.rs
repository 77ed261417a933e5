//! # bazaar-chat: Shopping Assistant for Bazaar
//!
//! A rule-based shopping assistant that answers from a fixed set of
//! keyword rules, with replies delivered after a short typing delay.
//!
//! ## Architecture Overview
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                       Chat Engine Architecture                          │
//! │                                                                         │
//! │  Frontend                                                               │
//! │     │  open / close / send / update_catalog                             │
//! │     ▼                                                                   │
//! │  ┌──────────────┐   mpsc commands   ┌──────────────────────────────┐   │
//! │  │  ChatHandle  │ ────────────────▶ │   ChatEngine (Tokio task)    │   │
//! │  │  (Clone)     │                   │                              │   │
//! │  └──────┬───────┘                   │  select! {                   │   │
//! │         │                           │    command  ──▶ mutate,      │   │
//! │         │ transcript() / is_open()  │                 schedule     │   │
//! │         ▼                           │    timer    ──▶ deliver due  │   │
//! │  ┌──────────────────────────┐       │  }                           │   │
//! │  │  Arc<RwLock<Transcript>> │ ◀──── │                              │   │
//! │  └──────────────────────────┘       └──────────────┬───────────────┘   │
//! │                                                    │                   │
//! │                                     ┌──────────────▼───────────────┐   │
//! │                                     │  Responder (rules.rs)        │   │
//! │                                     │  keyword match ──▶ reply     │   │
//! │                                     └──────────────────────────────┘   │
//! │                                                                         │
//! │  CANCELLATION:                                                          │
//! │  Closing the window clears every undelivered reply. The transcript      │
//! │  itself survives close and reopen.                                      │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Module Organization
//!
//! - [`engine`] - The ChatEngine task, ChatHandle and message types
//! - [`rules`] - The Responder trait and built-in keyword rule set
//! - [`error`] - Chat error types
//!
//! ## Usage
//!
//! ```rust,ignore
//! use bazaar_chat::{ChatConfig, ChatEngine};
//!
//! let handle = ChatEngine::new(ChatConfig::default()).start();
//!
//! handle.open().await?;
//! handle.send_message("find running shoes").await?;
//! // ~1 second later the transcript gains the assistant's reply
//! let transcript = handle.transcript().await;
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod engine;
pub mod error;
pub mod rules;

// =============================================================================
// Re-exports
// =============================================================================

pub use engine::{Author, ChatConfig, ChatEngine, ChatHandle, ChatMessage, DEFAULT_REPLY_DELAY_MS};
pub use error::{ChatError, ChatResult};
pub use rules::{ItemSummary, KeywordResponder, Responder};
