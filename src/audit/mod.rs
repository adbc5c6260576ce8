pub mod client;
pub mod models;

pub use client::{AuditClient, AuditError};
pub use models::{AuditRequest, AuditResult, Competitor};
