use leptos::{html, prelude::*};

use super::reveal::use_scroll_reveal;
use crate::contact::{ContactError, ContactForm, FieldErrors, CONTACT_INBOX};
use crate::guide::Section;

#[server]
pub async fn submit_contact(form: ContactForm) -> Result<(), ServerFnError> {
    // bots fill the hidden field; accept silently without sending
    if form.is_honeypot() {
        return Ok(());
    }
    if let Err(errors) = form.validate() {
        return Err(ServerFnError::new(ContactError::Invalid(errors).to_string()));
    }
    crate::contact::forward_submission(&form)
        .await
        .map_err(|err| ServerFnError::new(err.to_string()))
}

fn reveal_class(is_visible: bool, delay: &str) -> String {
    if is_visible {
        format!("transition-all duration-700 {delay} opacity-100 translate-y-0")
    } else {
        format!("transition-all duration-700 {delay} opacity-0 translate-y-10")
    }
}

#[component]
pub fn ContactSection() -> impl IntoView {
    let (reveal_ref, is_visible) = use_scroll_reveal(0.2);

    let name_ref = NodeRef::<html::Input>::new();
    let email_ref = NodeRef::<html::Input>::new();
    let subject_ref = NodeRef::<html::Input>::new();
    let message_ref = NodeRef::<html::Textarea>::new();
    let company_ref = NodeRef::<html::Input>::new();

    let (field_errors, set_field_errors) = signal(FieldErrors::default());
    let submit = ServerAction::<SubmitContact>::new();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let value_of = |input: NodeRef<html::Input>| {
            input.get_untracked().map(|el| el.value()).unwrap_or_default()
        };
        let form = ContactForm {
            name: value_of(name_ref),
            email: value_of(email_ref),
            subject: value_of(subject_ref),
            message: message_ref
                .get_untracked()
                .map(|el| el.value())
                .unwrap_or_default(),
            company: value_of(company_ref),
        };
        // validate locally first so invalid input never touches the network
        if !form.is_honeypot() {
            if let Err(errors) = form.validate() {
                set_field_errors(errors);
                return;
            }
        }
        set_field_errors(FieldErrors::default());
        submit.dispatch(SubmitContact { form });
    };

    // clear the form once a submission went through
    Effect::new(move |_| {
        if matches!(submit.value().get(), Some(Ok(()))) {
            for input in [name_ref, email_ref, subject_ref, company_ref] {
                if let Some(el) = input.get_untracked() {
                    el.set_value("");
                }
            }
            if let Some(el) = message_ref.get_untracked() {
                el.set_value("");
            }
        }
    });

    let field_error = move |pick: fn(&FieldErrors) -> Option<String>| {
        field_errors.with(pick).map(|message| {
            view! { <p class="mt-1 text-sm text-red-600">{message}</p> }
        })
    };

    view! {
        <section id=Section::Contact.dom_id() class="py-20 bg-slate-50">
            <div node_ref=reveal_ref class="container mx-auto px-4 lg:px-6">
                <div class=move || reveal_class(is_visible(), "")>
                    <p class="text-lg text-slate-600 font-medium mb-4 uppercase tracking-wider text-center">
                        "Get in Touch"
                    </p>
                    <h2 class="text-4xl lg:text-5xl font-bold mb-12 text-center text-slate-900">
                        "Contact Me"
                    </h2>
                </div>
                <div class="grid grid-cols-1 lg:grid-cols-3 gap-8 max-w-6xl mx-auto">
                    <div class=move || reveal_class(is_visible(), "delay-100")>
                        <div class="bg-white/80 border border-slate-200 shadow-xl rounded-xl p-6 mb-6">
                            <h3 class="text-xl font-bold mb-4">"Contact Information"</h3>
                            <div class="space-y-4 text-slate-600">
                                <div>
                                    "📧 "
                                    <a href=format!("mailto:{CONTACT_INBOX}") class="hover:text-slate-900">
                                        {CONTACT_INBOX}
                                    </a>
                                </div>
                                <div>"📍 Udaipur, India"</div>
                                <div>
                                    "🔗 "
                                    <a
                                        href="https://linkedin.com/in/dipesh-soni"
                                        target="_blank"
                                        rel="noopener noreferrer"
                                        class="hover:text-slate-900"
                                    >
                                        "LinkedIn Profile"
                                    </a>
                                </div>
                            </div>
                        </div>
                        <div class="bg-white/80 border border-slate-200 shadow-xl rounded-xl p-6">
                            <h3 class="text-xl font-bold mb-4">"Response Time"</h3>
                            <p class="text-slate-600">
                                "I typically respond to all inquiries within 24-48 hours. For urgent matters, please mark your email as \"Urgent\" in the subject line."
                            </p>
                        </div>
                    </div>
                    <div class=move || format!("lg:col-span-2 {}", reveal_class(is_visible(), "delay-200"))>
                        <form
                            class="bg-white/80 border border-slate-200 shadow-xl rounded-xl p-6 space-y-4"
                            on:submit=on_submit
                        >
                            <div class="grid grid-cols-1 sm:grid-cols-2 gap-4">
                                <div>
                                    <label for="contact_name" class="block text-sm font-medium mb-1">
                                        "Name"
                                    </label>
                                    <input
                                        id="contact_name"
                                        node_ref=name_ref
                                        type="text"
                                        placeholder="Your name"
                                        class="w-full px-4 py-2 rounded-md border border-slate-300 focus:outline-none focus:ring-2 focus:ring-slate-500"
                                    />
                                    {move || field_error(|e| e.name.clone())}
                                </div>
                                <div>
                                    <label for="contact_email" class="block text-sm font-medium mb-1">
                                        "Email"
                                    </label>
                                    <input
                                        id="contact_email"
                                        node_ref=email_ref
                                        type="text"
                                        placeholder="you@example.com"
                                        class="w-full px-4 py-2 rounded-md border border-slate-300 focus:outline-none focus:ring-2 focus:ring-slate-500"
                                    />
                                    {move || field_error(|e| e.email.clone())}
                                </div>
                            </div>
                            <div>
                                <label for="contact_subject" class="block text-sm font-medium mb-1">
                                    "Subject"
                                </label>
                                <input
                                    id="contact_subject"
                                    node_ref=subject_ref
                                    type="text"
                                    placeholder="What's this about?"
                                    class="w-full px-4 py-2 rounded-md border border-slate-300 focus:outline-none focus:ring-2 focus:ring-slate-500"
                                />
                                {move || field_error(|e| e.subject.clone())}
                            </div>
                            <div>
                                <label for="contact_message" class="block text-sm font-medium mb-1">
                                    "Message"
                                </label>
                                <textarea
                                    id="contact_message"
                                    node_ref=message_ref
                                    rows=5
                                    placeholder="Tell me about your project..."
                                    class="w-full px-4 py-2 rounded-md border border-slate-300 focus:outline-none focus:ring-2 focus:ring-slate-500"
                                ></textarea>
                                {move || field_error(|e| e.message.clone())}
                            </div>
                            // honeypot: hidden from people, tempting for bots
                            <div class="hidden" aria-hidden="true">
                                <label for="contact_company">"Company"</label>
                                <input
                                    id="contact_company"
                                    node_ref=company_ref
                                    type="text"
                                    tabindex=-1
                                    autocomplete="off"
                                />
                            </div>
                            <button
                                type="submit"
                                disabled=move || submit.pending().get()
                                class="w-full sm:w-auto px-8 py-3 bg-slate-900 text-white rounded-md font-medium hover:bg-slate-700 transition-colors duration-200 disabled:opacity-50"
                            >
                                {move || {
                                    if submit.pending().get() { "Sending..." } else { "Send Message" }
                                }}
                            </button>
                            {move || {
                                submit
                                    .value()
                                    .get()
                                    .map(|result| match result {
                                        Ok(()) => {
                                            view! {
                                                <p class="p-3 rounded-md bg-green-50 text-green-700 border border-green-200">
                                                    "Your message has been sent successfully!"
                                                </p>
                                            }
                                        }
                                        Err(_) => {
                                            view! {
                                                <p class="p-3 rounded-md bg-red-50 text-red-700 border border-red-200">
                                                    "Failed to send message. Please try again later."
                                                </p>
                                            }
                                        }
                                    })
                            }}
                        </form>
                    </div>
                </div>
            </div>
        </section>
    }
}
