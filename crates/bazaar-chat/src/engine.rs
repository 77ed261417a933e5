//! # Chat Engine
//!
//! An agent task that owns the conversation. A [`ChatHandle`] sends it
//! commands over a channel; the transcript and the open flag live behind
//! shared locks so reads never wait on the task.
//!
//! ## Reply Delivery
//! ```text
//! send_message("hi")                            delay elapses
//!        │                                           │
//!        ▼                                           ▼
//!   transcript ◀── shopper message       transcript ◀── assistant reply
//!   pending   ◀── reply scheduled        pending   ──▶ popped in order
//! ```
//!
//! Closing the window clears `pending`, so replies still "being typed"
//! never arrive. The transcript itself survives close and reopen.

use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tokio::sync::{mpsc, RwLock};
use tokio::time::{sleep_until, Instant};
use tracing::{debug, info};
use uuid::Uuid;

use crate::error::{ChatError, ChatResult};
use crate::rules::{ItemSummary, KeywordResponder, Responder};

// =============================================================================
// Configuration
// =============================================================================

/// How long the assistant "types" before a reply appears.
pub const DEFAULT_REPLY_DELAY_MS: u64 = 1000;

/// First message seeded into an empty transcript when the window opens.
const DEFAULT_GREETING: &str =
    "Hello! I'm your shopping assistant. I can help you find products, check \
     availability, or answer any questions you have. How can I help you today?";

/// Tuning knobs for the chat engine.
#[derive(Debug, Clone)]
pub struct ChatConfig {
    /// Delay between a shopper message and the assistant's reply.
    pub reply_delay: Duration,
    /// Greeting seeded on first open.
    pub greeting: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        ChatConfig {
            reply_delay: Duration::from_millis(DEFAULT_REPLY_DELAY_MS),
            greeting: DEFAULT_GREETING.to_string(),
        }
    }
}

impl ChatConfig {
    /// Config with a custom reply delay in milliseconds.
    pub fn with_delay(delay_ms: u64) -> Self {
        ChatConfig {
            reply_delay: Duration::from_millis(delay_ms),
            ..Default::default()
        }
    }
}

// =============================================================================
// Messages
// =============================================================================

/// Who wrote a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Author {
    Shopper,
    Assistant,
}

/// One entry in the conversation transcript.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ChatMessage {
    pub id: String,
    pub text: String,
    pub author: Author,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    fn new(text: String, author: Author) -> Self {
        ChatMessage {
            id: Uuid::new_v4().to_string(),
            text,
            author,
            timestamp: Utc::now(),
        }
    }
}

// =============================================================================
// Commands
// =============================================================================

/// Commands sent from handles to the engine task.
#[derive(Debug)]
enum ChatCommand {
    Open,
    Close,
    Send(String),
    UpdateCatalog(Vec<ItemSummary>),
    Shutdown,
}

/// A reply waiting out its typing delay.
#[derive(Debug)]
struct PendingReply {
    due: Instant,
    text: String,
}

// =============================================================================
// Chat Engine
// =============================================================================

/// The assistant behind the chat window.
///
/// ## Usage
/// ```rust,no_run
/// use bazaar_chat::{ChatConfig, ChatEngine};
///
/// # async fn demo() -> bazaar_chat::ChatResult<()> {
/// let handle = ChatEngine::new(ChatConfig::default()).start();
/// handle.open().await?;
/// handle.send_message("do you ship to Canada?").await?;
/// # Ok(())
/// # }
/// ```
pub struct ChatEngine {
    config: ChatConfig,
    responder: Box<dyn Responder>,
    catalog: Vec<ItemSummary>,
    pending: VecDeque<PendingReply>,
    transcript: Arc<RwLock<Vec<ChatMessage>>>,
    open: Arc<RwLock<bool>>,
}

impl ChatEngine {
    /// Creates an engine with the built-in keyword rules.
    pub fn new(config: ChatConfig) -> Self {
        Self::with_responder(config, Box::new(KeywordResponder))
    }

    /// Creates an engine with a custom responder.
    pub fn with_responder(config: ChatConfig, responder: Box<dyn Responder>) -> Self {
        ChatEngine {
            config,
            responder,
            catalog: Vec::new(),
            pending: VecDeque::new(),
            transcript: Arc::new(RwLock::new(Vec::new())),
            open: Arc::new(RwLock::new(false)),
        }
    }

    /// Spawns the engine task and returns a handle to it.
    pub fn start(self) -> ChatHandle {
        let (cmd_tx, cmd_rx) = mpsc::channel(64);
        let transcript = Arc::clone(&self.transcript);
        let open = Arc::clone(&self.open);

        tokio::spawn(async move {
            self.run(cmd_rx).await;
        });

        ChatHandle {
            cmd_tx,
            transcript,
            open,
        }
    }

    /// Main loop: handle commands, deliver replies when their delay is up.
    async fn run(mut self, mut cmd_rx: mpsc::Receiver<ChatCommand>) {
        info!("Chat engine started");

        loop {
            let next_due = self.pending.front().map(|p| p.due);

            tokio::select! {
                cmd = cmd_rx.recv() => match cmd {
                    Some(ChatCommand::Open) => self.open_window().await,
                    Some(ChatCommand::Close) => self.close_window().await,
                    Some(ChatCommand::Send(text)) => self.accept_message(text).await,
                    Some(ChatCommand::UpdateCatalog(items)) => {
                        debug!(count = items.len(), "Catalog snapshot updated");
                        self.catalog = items;
                    }
                    Some(ChatCommand::Shutdown) | None => {
                        info!("Chat engine shutting down");
                        break;
                    }
                },
                _ = sleep_until(next_due.unwrap_or_else(Instant::now)), if next_due.is_some() => {
                    self.deliver_due().await;
                }
            }
        }
    }

    // =========================================================================
    // Command Handlers
    // =========================================================================

    /// Marks the window open, seeding the greeting on first open.
    async fn open_window(&mut self) {
        *self.open.write().await = true;

        let mut transcript = self.transcript.write().await;
        if transcript.is_empty() {
            transcript.push(ChatMessage::new(
                self.config.greeting.clone(),
                Author::Assistant,
            ));
            debug!("Seeded greeting message");
        }
    }

    /// Marks the window closed and discards replies not yet delivered.
    async fn close_window(&mut self) {
        *self.open.write().await = false;

        let cancelled = self.pending.len();
        self.pending.clear();
        if cancelled > 0 {
            debug!(cancelled, "Discarded pending replies on close");
        }
    }

    /// Records a shopper message and schedules the assistant's reply.
    ///
    /// Messages sent while the window is closed, and blank messages, are
    /// dropped without a reply.
    async fn accept_message(&mut self, text: String) {
        if !*self.open.read().await {
            debug!("Ignoring message while the window is closed");
            return;
        }
        if text.trim().is_empty() {
            debug!("Ignoring blank message");
            return;
        }

        let reply = self.responder.respond(&text, &self.catalog);

        self.transcript
            .write()
            .await
            .push(ChatMessage::new(text, Author::Shopper));

        self.pending.push_back(PendingReply {
            due: Instant::now() + self.config.reply_delay,
            text: reply,
        });
    }

    /// Moves every reply whose delay has elapsed into the transcript.
    async fn deliver_due(&mut self) {
        let now = Instant::now();
        let mut delivered = 0usize;

        let mut transcript = self.transcript.write().await;
        while self.pending.front().map_or(false, |p| p.due <= now) {
            if let Some(reply) = self.pending.pop_front() {
                transcript.push(ChatMessage::new(reply.text, Author::Assistant));
                delivered += 1;
            }
        }

        if delivered > 0 {
            debug!(delivered, "Delivered assistant replies");
        }
    }
}

// =============================================================================
// Chat Handle
// =============================================================================

/// Cloneable handle to a running [`ChatEngine`].
///
/// Commands are fire-and-forget: they queue on the channel and the engine
/// applies them in order. Reads go straight to the shared state.
#[derive(Debug, Clone)]
pub struct ChatHandle {
    cmd_tx: mpsc::Sender<ChatCommand>,
    transcript: Arc<RwLock<Vec<ChatMessage>>>,
    open: Arc<RwLock<bool>>,
}

impl ChatHandle {
    /// Opens the chat window.
    pub async fn open(&self) -> ChatResult<()> {
        self.cmd_tx
            .send(ChatCommand::Open)
            .await
            .map_err(|_| ChatError::ChannelError("Chat channel closed".into()))
    }

    /// Closes the chat window, cancelling undelivered replies.
    pub async fn close(&self) -> ChatResult<()> {
        self.cmd_tx
            .send(ChatCommand::Close)
            .await
            .map_err(|_| ChatError::ChannelError("Chat channel closed".into()))
    }

    /// Sends a shopper message to the assistant.
    pub async fn send_message(&self, text: impl Into<String>) -> ChatResult<()> {
        self.cmd_tx
            .send(ChatCommand::Send(text.into()))
            .await
            .map_err(|_| ChatError::ChannelError("Chat channel closed".into()))
    }

    /// Replaces the catalog snapshot the search rule answers from.
    pub async fn update_catalog(&self, items: Vec<ItemSummary>) -> ChatResult<()> {
        self.cmd_tx
            .send(ChatCommand::UpdateCatalog(items))
            .await
            .map_err(|_| ChatError::ChannelError("Chat channel closed".into()))
    }

    /// Stops the engine task. Pending replies are lost.
    pub async fn shutdown(&self) -> ChatResult<()> {
        self.cmd_tx
            .send(ChatCommand::Shutdown)
            .await
            .map_err(|_| ChatError::ChannelError("Chat channel closed".into()))
    }

    /// Snapshot of the conversation so far.
    pub async fn transcript(&self) -> Vec<ChatMessage> {
        self.transcript.read().await.clone()
    }

    /// Whether the chat window is currently open.
    pub async fn is_open(&self) -> bool {
        *self.open.read().await
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
