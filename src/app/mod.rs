//! Application layer: session state and the operations presentation consumes.
//!
//! This layer sits between the presentation collaborator and the feed/storage
//! boundaries. Reads are cheap accessors over in-memory state; mutations
//! complete before the next read observes their effect.
//!
//! ```text
//! Preference Store ──► GlobalStore (startup seed) ──► theme()  ──► presentation
//! Job Feed Client  ──► GlobalStore.refresh()      ──► jobs()   ──► filter_jobs ──► presentation
//! presentation     ──► bookmark add/remove        ──► bookmarked_jobs()
//! presentation     ──► submit_application         ──► external submission callback
//! ```
//!
//! # Modules
//!
//! - [`state`]: [`GlobalStore`], the central session state container
//! - [`bookmarks`]: bookmark membership set
//! - [`search`]: pure search filter over the job collection
//! - [`theme`]: fixed light/dark theme variants

pub mod bookmarks;
pub mod search;
pub mod state;
pub mod theme;

pub use bookmarks::BookmarkSet;
pub use search::filter_jobs;
pub use state::{GlobalStore, DARK_MODE_KEY};
pub use theme::Theme;
