//! # Reply Rules
//!
//! The assistant's canned knowledge: keyword rules checked in a fixed
//! order, first match wins.
//!
//! ## Matching Order
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │              "do you have shipping to Canada?"                          │
//! │                           │ lowercase                                   │
//! │                           ▼                                             │
//! │  1. search triggers (find / search / looking for) ──▶ catalog lookup    │
//! │  2. topic rules, in order:                                              │
//! │       stock ▸ shipping ▸ returns ▸ categories ▸ price                   │
//! │       ▸ account ▸ payment ▸ greetings ▸ thanks                          │
//! │  3. fallback ("I'm here to help! ...")                                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Keywords match as substrings, so "this is nice" greets back (it
//! contains "hi"). The rule order keeps the specific topics ahead of
//! the chatty ones.

use bazaar_core::types::Item;

// =============================================================================
// Catalog Summaries
// =============================================================================

/// The slice of an item the search rule needs.
///
/// The engine holds these instead of full items so the chat task never
/// sees prices, counters or seller data it has no use for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemSummary {
    pub name: String,
    pub kind: String,
    /// Lowercase category label.
    pub category: String,
}

impl From<&Item> for ItemSummary {
    fn from(item: &Item) -> Self {
        ItemSummary {
            name: item.name.clone(),
            kind: item.kind.clone(),
            category: item.category.to_string(),
        }
    }
}

// =============================================================================
// Responder
// =============================================================================

/// Turns a shopper message into a reply.
///
/// The engine owns a boxed responder, so tests can swap in a scripted
/// one instead of the keyword rules.
pub trait Responder: Send + Sync {
    /// Produces the reply to one message given the current catalog.
    fn respond(&self, message: &str, catalog: &[ItemSummary]) -> String;
}

// =============================================================================
// Keyword Rule Set
// =============================================================================

/// Trigger words that route a message to the catalog search rule.
const SEARCH_TRIGGERS: &[&str] = &["find", "search", "looking for"];

/// Words dropped from search messages before matching the catalog.
const SEARCH_STOPWORDS: &[&str] = &["find", "search", "looking", "for", "the", "some", "any"];

/// Topic rules in match order: (keywords, reply).
const TOPIC_RULES: &[(&[&str], &str)] = &[
    (
        &["stock", "available", "in stock"],
        "All products shown on our website are currently in stock and ready to ship! \
         If you're looking for a specific item, please let me know the product name.",
    ),
    (
        &["shipping", "delivery", "when will"],
        "We offer free shipping on orders over $50! Standard delivery takes 3-5 business \
         days, and express delivery takes 1-2 business days. Would you like to know about \
         shipping costs?",
    ),
    (
        &["return", "refund", "exchange"],
        "We have a 30-day return policy! You can return any item in its original condition \
         within 30 days of purchase for a full refund or exchange.",
    ),
    (
        &["categories", "what do you sell"],
        "We sell a variety of products including Clothing, Beauty products, Electronics, \
         Sports gear, Home & Garden items, Books, and Toys. What category interests you most?",
    ),
    (
        &["price", "cost", "expensive"],
        "Our prices are competitive and we often have special offers! You can filter \
         products by price range or let me know your budget and I'll help you find \
         suitable options.",
    ),
    (
        &["account", "login", "sign up"],
        "You can create an account by clicking the Login button in the top right corner. \
         Choose \"Buyer\" to shop or \"Seller\" if you want to sell products on our platform!",
    ),
    (
        &["payment", "pay", "credit card"],
        "We accept all major credit cards, PayPal, and other secure payment methods. \
         Your payment information is always encrypted and secure.",
    ),
    (
        &["hello", "hi", "hey"],
        "Hello! Great to see you here. I'm here to help you find the perfect products. \
         What are you shopping for today?",
    ),
    (
        &["thank", "thanks"],
        "You're very welcome! I'm always here to help. Is there anything else you'd \
         like to know?",
    ),
];

/// Reply when a search finds nothing.
const NO_MATCH_REPLY: &str =
    "I couldn't find any products matching your search. Try searching for categories \
     like \"clothing\", \"beauty\", \"electronics\", or \"sports\".";

/// Reply when no rule matches at all.
const FALLBACK_REPLY: &str = "I'm here to help! You can ask me about:\n\
     • Finding specific products\n\
     • Stock availability\n\
     • Shipping and delivery\n\
     • Returns and refunds\n\
     • Product categories\n\
     • Account creation\n\
     \nWhat would you like to know?";

/// The built-in rule set.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeywordResponder;

impl Responder for KeywordResponder {
    fn respond(&self, message: &str, catalog: &[ItemSummary]) -> String {
        let lower = message.to_lowercase();

        if SEARCH_TRIGGERS.iter().any(|t| lower.contains(t)) {
            return search_reply(&lower, catalog);
        }

        for (keywords, reply) in TOPIC_RULES {
            if keywords.iter().any(|k| lower.contains(k)) {
                return (*reply).to_string();
            }
        }

        FALLBACK_REPLY.to_string()
    }
}

/// Answers a search message with up to three matching item names.
///
/// ## Rules
/// - The message is split into words, dropping stopwords and anything
///   shorter than three characters
/// - A word matches an item when it appears in its name, kind or
///   category, case-insensitively
fn search_reply(lower_message: &str, catalog: &[ItemSummary]) -> String {
    let terms: Vec<&str> = lower_message
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| w.len() >= 3)
        .filter(|w| !SEARCH_STOPWORDS.contains(w))
        .collect();

    let mut names: Vec<&str> = Vec::new();
    for item in catalog {
        let fields = [
            item.name.to_lowercase(),
            item.kind.to_lowercase(),
            item.category.to_lowercase(),
        ];
        if terms
            .iter()
            .any(|term| fields.iter().any(|field| field.contains(term)))
        {
            names.push(&item.name);
            if names.len() == 3 {
                break;
            }
        }
    }

    if names.is_empty() {
        NO_MATCH_REPLY.to_string()
    } else {
        format!(
            "I found these products that might interest you: {}. Would you like more \
             details about any of these?",
            names.join(", ")
        )
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
