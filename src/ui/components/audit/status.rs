use crate::ui::audit_context::AuditContext;
use dioxus::prelude::*;
use std::rc::Rc;

/// Inline error line for the last audit attempt
#[component]
pub fn AuditStatus() -> Element {
    let audit_ctx = use_context::<Rc<AuditContext>>();
    let error_message = audit_ctx.error_message;

    rsx! {
        if let Some(error) = error_message.read().as_ref() {
            p { class: "audit-error", "Error: {error}" }
        }
    }
}
