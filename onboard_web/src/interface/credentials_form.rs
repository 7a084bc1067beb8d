use dioxus::prelude::*;
use dioxus_logger::tracing::{info, warn};

use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::ld_icons::{
    LdChevronDown, LdChevronUp, LdDatabase, LdKey, LdServer, LdUser,
};

use onboard_core::credentials::{
    CredentialDraft, CredentialField, CredentialForm, CredentialSink, PreviewSegment,
};

/// Used when no submit handler is supplied: logs the hand-off and drops it.
struct LoggingSink;

impl CredentialSink for LoggingSink {
    fn submit(&self, draft: &CredentialDraft) {
        match serde_json::to_string(&draft.redacted()) {
            Ok(json) => info!("Credentials submitted without a handler: {json}"),
            Err(err) => warn!("Could not serialize submitted credentials: {err}"),
        }
    }
}

fn accent(field: CredentialField) -> &'static str {
    match field {
        CredentialField::Username => "text-blue-500",
        CredentialField::Password => "text-green-500",
        CredentialField::ClusterName => "text-purple-500",
        CredentialField::Hostname => "text-red-500",
    }
}

#[component]
#[allow(non_snake_case)]
fn FieldIcon(field: CredentialField) -> Element {
    rsx! {
        span { class: "inline-flex {accent(field)}",
            match field {
                CredentialField::Username => rsx!(Icon { width: 16, icon: LdUser }),
                CredentialField::Password => rsx!(Icon { width: 16, icon: LdKey }),
                CredentialField::ClusterName => rsx!(Icon { width: 16, icon: LdDatabase }),
                CredentialField::Hostname => rsx!(Icon { width: 16, icon: LdServer }),
            }
        }
    }
}

#[component]
#[allow(non_snake_case)]
pub fn CredentialsForm(on_submit: Option<EventHandler<CredentialDraft>>) -> Element {
    let mut credentials = use_signal(CredentialForm::default);

    let form_state = credentials.read().clone();
    let help_open = form_state.help_open;

    rsx! {
        div { class: "flex items-center justify-center h-screen",
            div { class: "w-full max-w-md border-2 border-gray-900 shadow-lg rounded-xl bg-white",
                div { class: "p-6 space-y-1.5",
                    h3 { class: "text-2xl font-bold flex items-center gap-2",
                        Icon { width: 24, icon: LdDatabase }
                        "MongoDB Credentials"
                    }
                    p { class: "text-gray-400 font-semibold",
                        "Please enter your MongoDB connection details below."
                    }
                }
                div { class: "p-6 pt-0",
                    form {
                        class: "space-y-4",
                        onsubmit: move |event| {
                            event.prevent_default();
                            let form = credentials.read().clone();
                            match &on_submit {
                                Some(handler) => match form.submit() {
                                    Ok(draft) => {
                                        info!("Handing off credentials for {}", draft.redacted().preview());
                                        handler.call(draft);
                                    }
                                    Err(err) => warn!("Submission rejected: {err}"),
                                },
                                None => {
                                    if let Err(err) = form.submit_to(&LoggingSink) {
                                        warn!("Submission rejected: {err}");
                                    }
                                }
                            }
                        },

                        for field in CredentialField::all() {
                            div { key: "{field.name()}", class: "space-y-2",
                                label {
                                    r#for: field.name(),
                                    class: "flex items-center gap-2 font-semibold",
                                    FieldIcon { field }
                                    "{field.label()}"
                                }
                                input {
                                    id: field.name(),
                                    name: field.name(),
                                    r#type: field.input_type(),
                                    placeholder: field.placeholder(),
                                    required: true,
                                    class: "w-full rounded-md px-3 py-2 border-2 border-gray-800 placeholder-gray-400",
                                    value: "{form_state.draft.get(field)}",
                                    oninput: move |event| {
                                        credentials.write().update(field, event.value());
                                    },
                                }
                            }
                        }

                        div { class: "space-y-2",
                            button {
                                r#type: "button",
                                class: "flex items-center justify-between w-full px-4 py-2 rounded-md border border-gray-300 bg-gray-100 hover:bg-gray-200 cursor-pointer",
                                onclick: move |_| {
                                    credentials.write().toggle_help();
                                    info!("Credential help open: {}", credentials.read().help_open);
                                },
                                "How to find your credentials"
                                if help_open {
                                    Icon { width: 16, icon: LdChevronUp }
                                } else {
                                    Icon { width: 16, icon: LdChevronDown }
                                }
                            }
                            if help_open {
                                div { class: "space-y-2 p-4 bg-gray-50 rounded-lg",
                                    p { class: "text-sm text-gray-600 font-semibold",
                                        "Your MongoDB connection string looks like this:"
                                    }
                                    div { class: "bg-white p-3 rounded border border-gray-300 text-sm font-mono break-all",
                                        for segment in form_state.draft.preview_segments() {
                                            match segment {
                                                PreviewSegment::Literal(text) => rsx! { "{text}" },
                                                PreviewSegment::Field(field, text) => rsx! {
                                                    span { class: accent(field), "{text}" }
                                                },
                                            }
                                        }
                                    }
                                }
                            }
                        }

                        button {
                            r#type: "submit",
                            class: "w-full px-4 py-2 rounded-md text-white bg-black hover:bg-transparent hover:text-black border-2 border-black transition-all duration-500 cursor-pointer",
                            "Submit Credentials"
                        }
                    }
                }
            }
        }
    }
}
