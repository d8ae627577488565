//! # Portfolio Engine
//!
//! Content indexing, search, and intent-matching chat for a personal
//! portfolio site.
//!
//! The engine aggregates the portfolio's heterogeneous content collections
//! (projects, skills, blog posts, certifications) into one normalized
//! searchable index, filters free-text queries against it, and answers
//! visitor questions with a rule-based chatbot that reads the same content.
//! It is an embedded library consumed by UI event handlers; there is no
//! server or CLI surface.
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────┐   ┌──────────────────┐   ┌───────────────┐
//! │   Content    │──▶│  Index Builder   │──▶│ Query Matcher │──▶ search overlay
//! │  Repository  │   └──────────────────┘   └───────────────┘
//! │ (snapshots)  │   ┌──────────────────┐   ┌───────────────┐
//! │              │──▶│ Intent Responder │──▶│ Chat Session  │──▶ chat surface
//! └──────────────┘   └──────────────────┘   └───────────────┘
//! ```
//!
//! Data flows one way: the repository is read-only for every engine
//! component, and searchable items are recomputed from the live snapshot on
//! each query.
//!
//! ## Quick Start
//!
//! ```rust
//! use std::sync::Arc;
//! use portfolio_engine::config::ChatConfig;
//! use portfolio_engine::content::ContentSet;
//! use portfolio_engine::repository::InMemoryRepository;
//! use portfolio_engine::search::search_items;
//! use portfolio_engine::session::ChatSession;
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let repo = Arc::new(InMemoryRepository::new(ContentSet::default()));
//!
//! let results = search_items(repo.as_ref(), "react", &[]);
//! assert!(results.is_empty());
//!
//! let mut session = ChatSession::new(repo, ChatConfig::default());
//! session.send("What are your strongest skills?");
//! session.flush().await;
//! # }
//! ```
//!
//! ## Modules
//!
//! | Module | Purpose |
//! |--------|---------|
//! | [`config`] | TOML configuration parsing |
//! | [`models`] | Derived search and chat types |
//! | [`content`] | Source content records |
//! | [`repository`] | Read-only content repository seam |
//! | [`index`] | Unified searchable index builder |
//! | [`search`] | Substring query matching with type filters |
//! | [`chat`] | Keyword intent classification and responses |
//! | [`session`] | Chat transcript and typing-delay reveal |
//! | [`store`] | Content snapshot load/save |

pub mod chat;
pub mod config;
pub mod content;
pub mod index;
pub mod models;
pub mod repository;
pub mod search;
pub mod session;
pub mod store;
