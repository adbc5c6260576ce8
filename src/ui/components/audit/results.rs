use crate::ui::audit_context::AuditContext;
use dioxus::prelude::*;
use std::rc::Rc;

/// Score, verbatim meta tag dump, and competitor list from the last audit
#[component]
pub fn AuditResults() -> Element {
    let audit_ctx = use_context::<Rc<AuditContext>>();
    let result = audit_ctx.result;

    rsx! {
        if let Some(audit) = result.read().as_ref() {
            div { class: "audit-results",
                h2 { class: "audit-score", "SEO Score: {audit.seo_score}" }
                pre { class: "audit-meta-tags",
                    {serde_json::to_string_pretty(&audit.meta_tags).unwrap_or_default()}
                }
                h3 { class: "audit-competitors-heading", "Top Competitors:" }
                ul { class: "audit-competitors",
                    for comp in audit.competitor_comparison.iter() {
                        li { "{comp.url}" }
                    }
                }
            }
        }
    }
}
