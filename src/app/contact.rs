use leptos::{ev::SubmitEvent, prelude::*, server_fn::codec::GetUrl, task::spawn_local};
use web_sys::Event;

use crate::config::MailConfig;
use crate::contact::{deliver, ContactForm, EmailJs, Field, Phase, SendError};
use crate::content::Profile;
use crate::scroll_spy::Section;

use super::hero::AvailabilityBadge;

/// Relay credentials injected into the server at startup.
#[server(input = GetUrl)]
pub async fn get_mail_config() -> Result<MailConfig, ServerFnError> {
    use_context::<MailConfig>().ok_or_else(|| ServerFnError::new("mail relay is not configured"))
}

const INPUT_CLASS: &str = "w-full px-4 sm:px-6 py-3 sm:py-4 bg-white rounded-2xl border border-gray-200 focus:border-gray-400 focus:outline-none transition-colors text-gray-900 text-sm sm:text-base";

#[component]
pub fn Contact(profile: &'static Profile) -> impl IntoView {
    let form = RwSignal::new(ContactForm::new());

    let value = move |field: Field| move || form.with(|f| f.get(field).to_string());
    let on_input = move |field: Field| {
        move |ev: Event| {
            let v = event_target_value(&ev);
            form.update(|f| f.set(field, v));
        }
    };

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let Some(message) = form.try_update(ContactForm::begin_submit).flatten() else {
            return;
        };
        spawn_local(async move {
            let outcome = match get_mail_config().await {
                Ok(config) => deliver(&EmailJs::new(config), &message).await,
                Err(e) => {
                    let err = SendError::Unconfigured(e.to_string());
                    log::error!("contact form delivery failed: {err}");
                    Err(err)
                }
            };
            // view may be gone by now
            let Some(notice) = form.try_update(|f| f.settle(outcome)) else {
                return;
            };
            if let Err(e) = window().alert_with_message(notice.message()) {
                log::warn!("couldn't show notice: {e:?}");
            }
        });
    };

    view! {
        <section id=Section::Contact.id() class="py-20 sm:py-32 px-4 sm:px-6 relative z-10">
            <div class="max-w-4xl mx-auto text-center">
                <div class="space-y-6 sm:space-y-8">
                    <AvailabilityBadge text="Open to opportunities" />
                    <h2 class="text-4xl sm:text-5xl md:text-6xl font-bold text-gray-900">
                        "Let's Work Together"
                    </h2>
                    <p class="text-lg sm:text-xl text-gray-600 font-light max-w-2xl mx-auto leading-relaxed">
                        "I'm actively seeking internships and entry-level roles. Let's build something amazing together."
                    </p>
                    <div class="bg-white/60 backdrop-blur-md rounded-3xl p-6 sm:p-10 shadow-lg border border-gray-200/50 max-w-2xl mx-auto">
                        <form class="space-y-3 sm:space-y-4" on:submit=on_submit>
                            <input
                                type="text"
                                placeholder="Your Name"
                                class=INPUT_CLASS
                                prop:value=value(Field::Name)
                                on:input=on_input(Field::Name)
                            />
                            <input
                                type="email"
                                placeholder="Your Email"
                                class=INPUT_CLASS
                                prop:value=value(Field::Email)
                                on:input=on_input(Field::Email)
                            />
                            <textarea
                                placeholder="Your Message"
                                rows=5
                                class=format!("{INPUT_CLASS} resize-none")
                                prop:value=value(Field::Message)
                                on:input=on_input(Field::Message)
                            />
                            <button
                                type="submit"
                                class="w-full bg-gray-900 text-white px-6 sm:px-8 py-3 sm:py-4 rounded-2xl font-medium hover:scale-105 transition-all shadow-lg text-sm sm:text-base"
                            >
                                {move || {
                                    if form.with(|f| f.phase() == Phase::Submitting) {
                                        "Sending..."
                                    } else {
                                        "Send Message"
                                    }
                                }}
                            </button>
                        </form>
                    </div>
                    <div class="flex justify-center gap-4 sm:gap-6 pt-6 sm:pt-8 text-xl sm:text-2xl">
                        <a
                            href=profile.github.clone()
                            target="_blank"
                            rel="noopener noreferrer"
                            class="bg-white/80 backdrop-blur-md p-3 sm:p-4 rounded-full shadow-lg border border-gray-200/50 hover:scale-110 transition-transform"
                            aria-label="GitHub Profile"
                        >
                            <i class="devicon-github-plain" />
                        </a>
                        <a
                            href=profile.linkedin.clone()
                            target="_blank"
                            rel="noopener noreferrer"
                            class="bg-white/80 backdrop-blur-md p-3 sm:p-4 rounded-full shadow-lg border border-gray-200/50 hover:scale-110 transition-transform"
                            aria-label="LinkedIn Profile"
                        >
                            <i class="devicon-linkedin-plain" />
                        </a>
                        <a
                            href=profile.mailto()
                            class="bg-white/80 backdrop-blur-md p-3 sm:p-4 rounded-full shadow-lg border border-gray-200/50 hover:scale-110 transition-transform"
                            aria-label="Email"
                        >
                            "✉"
                        </a>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    fn relay() -> MailConfig {
        MailConfig {
            service_id: "service_abc".into(),
            template_id: "template_xyz".into(),
            public_key: "pk_123".into(),
            endpoint: crate::config::DEFAULT_ENDPOINT.into(),
        }
    }

    #[tokio::test]
    async fn test_server_hands_out_relay_config() {
        let owner = Owner::new();
        owner.set();
        provide_context(relay());

        let config = get_mail_config().await.expect("config provided");
        assert_eq!(config, relay());
        // usable by the browser-side sender as is
        let _sender = EmailJs::new(config);
    }

    #[tokio::test]
    async fn test_unconfigured_server_reports_error() {
        let owner = Owner::new();
        owner.set();

        assert!(get_mail_config().await.is_err());
    }
}
