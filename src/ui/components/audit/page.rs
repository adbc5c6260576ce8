use super::{form::AuditForm, results::AuditResults, status::AuditStatus};
use dioxus::prelude::*;

/// Main audit screen
#[component]
pub fn AuditPage() -> Element {
    rsx! {
        div { class: "audit-page",
            h1 { class: "audit-title", "🔍 SEO Audit Tool" }
            AuditForm {}
            AuditStatus {}
            AuditResults {}
        }
    }
}
