pub mod document_kind;
pub mod party;
pub mod render_options;
pub mod submission;

pub use document_kind::DocumentKind;
pub use party::{DocumentMeta, PartyInfo};
pub use render_options::RenderOptions;
pub use submission::{ComputedDocument, RenderRequest, SubmitRequest, SubmittedDocument};
