use crate::audit::AuditRequest;
use crate::ui::audit_context::AuditContext;
use dioxus::prelude::*;
use std::rc::Rc;
use tracing::error;

/// URL and target keyword inputs with the audit trigger
#[component]
pub fn AuditForm() -> Element {
    let audit_ctx = use_context::<Rc<AuditContext>>();
    let mut url = use_signal(String::new);
    let mut keyword = use_signal(String::new);
    let is_running = audit_ctx.is_running;

    let on_run_click = {
        let audit_ctx = audit_ctx.clone();
        let url = url.clone();
        let keyword = keyword.clone();

        move |_event| {
            let request = AuditRequest {
                url: url.read().clone(),
                target_keyword: keyword.read().clone(),
            };

            let audit_ctx = audit_ctx.clone();
            let mut is_running = audit_ctx.is_running;
            let mut result = audit_ctx.result;
            let mut error_message = audit_ctx.error_message;

            is_running.set(true);
            result.set(None);
            error_message.set(None);

            spawn(async move {
                let mut is_running = audit_ctx.is_running;
                let mut result = audit_ctx.result;
                let mut error_message = audit_ctx.error_message;

                match audit_ctx.client.run_audit(&request).await {
                    Ok(audit) => {
                        result.set(Some(audit));
                    }
                    Err(e) => {
                        error!("Audit failed: {}", e);
                        error_message.set(Some(e.to_string()));
                        audit_ctx.dialog.alert(
                            "Audit failed".to_string(),
                            format!("Failed to run audit: {}. Check console for details.", e),
                        );
                    }
                }
                is_running.set(false);
            });
        }
    };

    rsx! {
        div { class: "audit-form",
            input {
                class: "audit-input",
                placeholder: "Website URL",
                value: "{url.read()}",
                oninput: move |event: FormEvent| {
                    url.set(event.value());
                },
            }
            input {
                class: "audit-input",
                placeholder: "Target Keyword",
                value: "{keyword.read()}",
                oninput: move |event: FormEvent| {
                    keyword.set(event.value());
                },
            }
            button {
                class: "audit-run-button",
                disabled: *is_running.read(),
                onclick: on_run_click,
                if *is_running.read() {
                    "Running Audit..."
                } else {
                    "Run Audit"
                }
            }
        }
    }
}
