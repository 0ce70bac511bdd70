//! Doc Search Server
//!
//! A document manager HTTP server: clients upload document records, search
//! them with keyword/synonym expansion and request canned summaries.
//!
//! # Features
//!
//! - **Keyword Expansion**: Static synonym and related-concept tables
//! - **Relevance Scoring**: Coverage plus exact-match bonus, with jitter
//! - **Snippets**: Context excerpts with two-class term highlighting
//! - **Summaries**: Template summaries selected by keyword presence
//! - **Thread-Safe**: In-memory store behind a `parking_lot` RwLock
//!
//! # Modules
//!
//! - `types`: Core data structures (Document, SearchResult, Summary)
//! - `search`: Term expansion, scoring, context extraction, highlighting
//! - `store`: In-memory document CRUD
//! - `summarize`: Canned summary templates
//! - `validation`: Document payload validation
//! - `api`: Axum router and REST handlers
//! - `config`: Command line and environment configuration
//! - `utils`: File helpers and logging setup
//!
//! # Example
//!
//! ```
//! use doc_search::search::{FixedJitter, RelevanceSearchEngine};
//! use doc_search::DocumentStore;
//!
//! let store = DocumentStore::with_sample_documents();
//! let documents = store.list(None);
//!
//! let mut engine = RelevanceSearchEngine::with_jitter(FixedJitter::default());
//! let results = engine.search(&documents, "financial", true);
//! assert_eq!(results.len(), 3);
//! ```

pub mod api;
pub mod config;
pub mod error;
pub mod search;
pub mod store;
pub mod summarize;
pub mod types;
pub mod utils;
pub mod validation;

// Re-export commonly used items at crate root
pub use config::Config;
pub use error::{DocError, DocResult};
pub use search::RelevanceSearchEngine;
pub use store::DocumentStore;
pub use types::{ContentType, Document, DocumentPatch, NewDocument, SearchResult, Summary};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name
pub const NAME: &str = env!("CARGO_PKG_NAME");
