pub mod amount_in_words;
pub mod document_renderer;
pub mod document_service;
pub mod draft_session;

pub use amount_in_words::{amount_in_words, to_words};
pub use document_renderer::{DocumentRenderer, TotalsBlock, TotalsRow};
pub use document_service::DocumentService;
pub use draft_session::DraftSession;
