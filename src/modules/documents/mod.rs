pub mod controllers;
pub mod models;
pub mod services;

pub use models::{
    ComputedDocument, DocumentKind, DocumentMeta, PartyInfo, RenderOptions, RenderRequest,
    SubmitRequest, SubmittedDocument,
};
pub use services::{
    amount_in_words, to_words, DocumentRenderer, DocumentService, DraftSession, TotalsBlock,
    TotalsRow,
};
