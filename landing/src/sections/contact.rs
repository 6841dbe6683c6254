use leptos::ev::SubmitEvent;
use leptos::prelude::*;

use super::{Container, SECTION_TITLE};
use crate::config::{PALETTE, SITE};
use crate::icons::{ICON_ARROW_RIGHT, ICON_SEND, Icon};

/// What happened to a contact form submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submission {
    /// Nothing was sent anywhere.
    Discarded,
}

/// Handle a submitted contact form. The page has no backend, so the request
/// is dropped after the browser's own `required`/`type` checks passed.
pub fn discard_submission() -> Submission {
    tracing::debug!("contact form submitted, nothing is sent");
    Submission::Discarded
}

const FIELD: &str = "mt-1 w-full rounded-lg px-3 py-2 border border-white/10 focus:outline-none focus:ring-2 focus:ring-cyan-500";

#[component]
pub fn Contact() -> impl IntoView {
    let field_style = format!("background-color: {};", PALETTE.primary);

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        discard_submission();
    };

    view! {
        <section id="contact" class="py-20">
            <Container>
                <div class="grid lg:grid-cols-2 gap-10">
                    <div>
                        <h2 class=SECTION_TITLE>"Let\u{2019}s build together"</h2>
                        <p class="mt-3 text-white/80">
                            "Tell us about your goals and we\u{2019}ll propose a roadmap within 48 hours."
                        </p>
                        <div class="mt-6 flex items-center gap-3 text-white/70">
                            <Icon path=ICON_SEND class="h-5 w-5 text-cyan-400" />
                            <span class="contact-email">{SITE.contact_email}</span>
                        </div>
                    </div>
                    <form
                        class="contact-form rounded-2xl border border-white/10 bg-white/5 p-6 backdrop-blur"
                        on:submit=on_submit
                    >
                        <div class="grid sm:grid-cols-2 gap-4">
                            <div>
                                <label for="contact-name" class="text-sm text-white/70">"Name"</label>
                                <input
                                    id="contact-name"
                                    name="name"
                                    required
                                    placeholder="Your name"
                                    class=FIELD
                                    style=field_style.clone()
                                />
                            </div>
                            <div>
                                <label for="contact-email" class="text-sm text-white/70">"Email"</label>
                                <input
                                    id="contact-email"
                                    name="email"
                                    type="email"
                                    required
                                    placeholder="you@company.com"
                                    class=FIELD
                                    style=field_style.clone()
                                />
                            </div>
                        </div>
                        <div class="mt-4">
                            <label for="contact-message" class="text-sm text-white/70">"Message"</label>
                            <textarea
                                id="contact-message"
                                name="message"
                                rows="4"
                                required
                                placeholder="Tell us about your project..."
                                class=FIELD
                                style=field_style
                            ></textarea>
                        </div>
                        <div class="mt-6">
                            <button
                                type="submit"
                                class="inline-flex items-center gap-2 rounded-full bg-cyan-500 px-6 py-3 font-semibold text-[#0F172A] hover:bg-cyan-400 transition"
                            >
                                "Send Request"
                                <Icon path=ICON_ARROW_RIGHT />
                            </button>
                        </div>
                    </form>
                </div>
            </Container>
        </section>
    }
}
