use leptos::prelude::*;

use crate::contact::{ContactForm, Field, FormErrors};
use crate::content::Profile;
use crate::reveal::RevealVariant;

use super::reveal::Reveal;

/// Reactive state behind the contact form.
#[derive(Debug, Clone, Copy)]
struct FormState {
    name: RwSignal<String>,
    email: RwSignal<String>,
    subject: RwSignal<String>,
    message: RwSignal<String>,
    errors: RwSignal<FormErrors>,
    sent: RwSignal<bool>,
}

impl FormState {
    fn new() -> Self {
        Self {
            name: RwSignal::new(String::new()),
            email: RwSignal::new(String::new()),
            subject: RwSignal::new(String::new()),
            message: RwSignal::new(String::new()),
            errors: RwSignal::new(FormErrors::new()),
            sent: RwSignal::new(false),
        }
    }

    fn values(&self) -> [RwSignal<String>; 4] {
        [self.name, self.email, self.subject, self.message]
    }

    /// Validates the current values. On success the form is cleared and
    /// the `mailto:` URI returned; otherwise only the error map changes.
    fn submit(&self, recipient: &str) -> Option<String> {
        let form = ContactForm {
            name: self.name.get_untracked(),
            email: self.email.get_untracked(),
            subject: self.subject.get_untracked(),
            message: self.message.get_untracked(),
        };
        match form.mailto(recipient) {
            Ok(uri) => {
                for value in self.values() {
                    value.set(String::new());
                }
                self.errors.set(FormErrors::new());
                self.sent.set(true);
                Some(uri)
            }
            Err(found) => {
                log::debug!("contact form rejected: {} invalid fields", found.len());
                self.errors.set(found);
                None
            }
        }
    }
}

#[component]
pub fn Contact(profile: Profile) -> impl IntoView {
    let state = FormState::new();
    let FormState {
        name,
        email,
        subject,
        message,
        errors,
        sent,
    } = state;

    let recipient = profile.email.clone();
    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if let Some(uri) = state.submit(&recipient) {
            log::info!("opening mail client for contact form");
            if let Err(e) = window().location().set_href(&uri) {
                log::error!("couldn't open mailto link: {e:?}");
            }
        }
    };

    view! {
        <section id="contact" class="bg-cozy-cream-100 py-20 dark:bg-cozy-brown-800">
            <div class="container mx-auto px-4">
                <Reveal class="mb-12 text-center">
                    <h2 class="text-3xl font-bold md:text-4xl">"Get In Touch"</h2>
                    <p class="mt-4 text-cozy-brown-600 dark:text-cozy-cream-300">
                        "Have a project in mind or just want to say hello?"
                    </p>
                </Reveal>
                <div class="grid gap-12 lg:grid-cols-2">
                    <Reveal variant=RevealVariant::Left class="space-y-4">
                        <ContactCard
                            icon="✉️"
                            label="Email"
                            value=profile.email.clone()
                            href=format!("mailto:{}", profile.email)
                        />
                        <ContactCard
                            icon="💼"
                            label="LinkedIn"
                            value="Connect with me".to_string()
                            href=profile.social.linkedin
                        />
                        <ContactCard
                            icon="💻"
                            label="GitHub"
                            value="See my code".to_string()
                            href=profile.social.github
                        />
                    </Reveal>
                    <Reveal variant=RevealVariant::Right>
                        <form class="space-y-4" novalidate=true on:submit=on_submit>
                            <div class="grid gap-4 sm:grid-cols-2">
                                <FormField field=Field::Name value=name errors />
                                <FormField field=Field::Email value=email errors />
                            </div>
                            <FormField field=Field::Subject value=subject errors />
                            <FormField field=Field::Message value=message errors multiline=true />
                            <button
                                type="submit"
                                class="focus-cozy w-full rounded-lg bg-cozy-orange-500 px-6 py-3 font-medium text-white transition-colors hover:bg-cozy-orange-600"
                            >
                                "Send Message"
                            </button>
                            <Show when=move || sent.get()>
                                <p class="text-center text-sm text-green-700 dark:text-green-400" role="status">
                                    "Your mail client should open with the message ready to send."
                                </p>
                            </Show>
                        </form>
                    </Reveal>
                </div>
            </div>
        </section>
    }
}

#[component]
fn FormField(
    field: Field,
    value: RwSignal<String>,
    errors: RwSignal<FormErrors>,
    #[prop(optional)] multiline: bool,
) -> impl IntoView {
    let id = format!("contact-{}", field.as_str());
    let input_type = if field == Field::Email { "email" } else { "text" };
    let error = move || errors.with(|e| e.get(&field).map(ToString::to_string));
    let clear_error = move || {
        if errors.with_untracked(|e| e.contains_key(&field)) {
            errors.update(|e| {
                e.remove(&field);
            });
        }
    };
    let input_class = move || {
        let border = if error().is_some() {
            "border-red-500"
        } else {
            "border-cozy-cream-300 dark:border-cozy-brown-600"
        };
        format!("focus-cozy w-full rounded-lg border bg-white px-4 py-2 dark:bg-cozy-brown-900 {border}")
    };

    view! {
        <div>
            <label for=id.clone() class="mb-1 block text-sm font-medium">
                {field.label()}
            </label>
            {if multiline {
                view! {
                    <textarea
                        id=id.clone()
                        name=field.as_str()
                        rows="5"
                        class=input_class
                        aria-invalid=move || error().is_some().to_string()
                        bind:value=value
                        on:input=move |_| clear_error()
                    ></textarea>
                }
                    .into_any()
            } else {
                view! {
                    <input
                        id=id.clone()
                        name=field.as_str()
                        type=input_type
                        class=input_class
                        aria-invalid=move || error().is_some().to_string()
                        bind:value=value
                        on:input=move |_| clear_error()
                    />
                }
                    .into_any()
            }}
            {move || error().map(|msg| view! { <p class="mt-1 text-sm text-red-600">{msg}</p> })}
        </div>
    }
}

#[component]
fn ContactCard(icon: &'static str, label: &'static str, value: String, href: String) -> impl IntoView {
    let external = href.starts_with("http");
    view! {
        <a
            href=href
            target=external.then_some("_blank")
            rel=external.then_some("noopener noreferrer")
            class="focus-cozy flex items-center gap-4 rounded-xl bg-white p-4 shadow-sm transition-shadow hover:shadow-md dark:bg-cozy-brown-900"
        >
            <span class="text-2xl" aria-hidden="true">{icon}</span>
            <span>
                <span class="block text-sm text-cozy-brown-600 dark:text-cozy-cream-300">{label}</span>
                <span class="font-medium">{value}</span>
            </span>
        </a>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::contact::FieldError;

    fn fill(state: FormState, values: [&str; 4]) {
        for (signal, value) in state.values().into_iter().zip(values) {
            signal.set(value.to_string());
        }
    }

    #[test]
    fn test_rejected_submit_only_touches_errors() {
        let owner = Owner::new();
        owner.set();
        let state = FormState::new();

        fill(state, ["Jo", "a@b.com", "Hi", "This message is long enough."]);
        assert!(state.submit("owner@example.com").is_some());
        assert!(state.sent.get_untracked());

        fill(state, ["Jo", "bad-email", "Hi", "short"]);
        assert_eq!(state.submit("owner@example.com"), None);
        assert!(state.sent.get_untracked());
        assert_eq!(state.email.get_untracked(), "bad-email");
        assert_eq!(state.message.get_untracked(), "short");
        let errors = state.errors.get_untracked();
        assert_eq!(errors.len(), 2);
        assert_eq!(errors[&Field::Email], FieldError::InvalidEmail);
    }

    #[test]
    fn test_accepted_submit_clears_form() {
        let owner = Owner::new();
        owner.set();
        let state = FormState::new();
        state.errors.set(FormErrors::from([(Field::Name, FieldError::Required("Name"))]));

        fill(state, ["Jo", "a@b.com", "Hi", "This message is long enough."]);
        let uri = state.submit("owner@example.com").unwrap();
        assert!(uri.starts_with("mailto:owner@example.com?subject=Hi&body="));
        assert!(state.values().iter().all(|v| v.get_untracked().is_empty()));
        assert!(state.errors.get_untracked().is_empty());
    }
}
