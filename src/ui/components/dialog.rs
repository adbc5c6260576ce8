use crate::ui::components::dialog_context::DialogContext;
use dioxus::prelude::*;

#[component]
pub fn GlobalDialog() -> Element {
    let dialog = use_context::<DialogContext>();
    let dialog_for_dismiss = dialog.clone();

    rsx! {
        if *dialog.is_open.read() {
            div { class: "dialog-overlay",
                div { class: "dialog-box",
                    h2 { class: "dialog-title", "{dialog.title()}" }
                    p { class: "dialog-message", "{dialog.message()}" }
                    div { class: "dialog-actions",
                        button {
                            class: "dialog-dismiss",
                            onclick: move |_| {
                                dialog_for_dismiss.hide();
                            },
                            "OK"
                        }
                    }
                }
            }
        }
    }
}
