use crate::ui::audit_context::AuditContextProvider;
use crate::ui::components::audit::AuditPage;
use crate::ui::components::dialog::GlobalDialog;
use crate::ui::components::dialog_context::DialogContext;
use crate::ui::MAIN_CSS;
use dioxus::prelude::*;
use tracing::debug;

#[component]
pub fn App() -> Element {
    debug!("Rendering app component");

    let dialog = DialogContext::new();
    use_context_provider(|| dialog.clone());

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }
        AuditContextProvider {
            AuditPage {}
        }
        GlobalDialog {}
    }
}
