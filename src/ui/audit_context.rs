use crate::audit::{AuditClient, AuditResult};
use crate::config::Config;
use crate::ui::components::dialog_context::DialogContext;
use dioxus::prelude::*;
use std::rc::Rc;

/// Shared state for the audit screen
pub struct AuditContext {
    pub(crate) is_running: Signal<bool>,
    pub(crate) result: Signal<Option<AuditResult>>,
    pub(crate) error_message: Signal<Option<String>>,
    pub(crate) dialog: DialogContext,
    pub(crate) client: AuditClient,
}

impl AuditContext {
    pub fn new(config: &Config, dialog: DialogContext) -> Self {
        Self {
            is_running: Signal::new(false),
            result: Signal::new(None),
            error_message: Signal::new(None),
            dialog,
            client: AuditClient::new(config.audit_base_url.clone()),
        }
    }

    // Getters - return Signal (which can be used as ReadSignal)
    pub fn is_running(&self) -> Signal<bool> {
        self.is_running
    }

    pub fn result(&self) -> Signal<Option<AuditResult>> {
        self.result
    }

    pub fn error_message(&self) -> Signal<Option<String>> {
        self.error_message
    }
}

/// Provider component to make audit state available throughout the app
#[component]
pub fn AuditContextProvider(children: Element) -> Element {
    let dialog = use_context::<DialogContext>();
    let config = Config::load();
    let audit_ctx = AuditContext::new(&config, dialog);

    use_context_provider(move || Rc::new(audit_ctx));

    rsx! {
        {children}
    }
}
