pub mod book;
pub mod errors;
pub mod quote;
pub mod resource;
pub mod user;

pub use book::{Book, BookDraft, BookQuery};
pub use errors::{ApiError, ErrorDetail, classify_response, credential_failure, failure_message};
pub use quote::{Quote, QuoteDraft, QuoteQuery};
pub use resource::{EditIntent, Resource};
pub use user::{LoginRequest, LoginResponse, RegisterRequest, User};
