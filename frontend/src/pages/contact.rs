use std::rc::Rc;

use log::{debug, info};
use wasm_bindgen_futures::spawn_local;
use web_sys::SubmitEvent;
use yew::prelude::*;

use crate::collaborator::use_collaborator;
use crate::components::fields::{choice_options, SelectField, TextArea, TextField};
use crate::components::notification::use_notifier;
use crate::components::submission_success::SubmissionSuccess;
use crate::config;
use crate::form::contact::{ContactField, ContactForm};
use crate::form::options::ContactSubject;
use crate::form::submission::{Receipt, SubmissionStatus, SubmitBlocked, SubmitError};
use crate::form::validation::ValidationErrors;
use crate::Route;

const MAP_EMBED: &str = "https://www.google.com/maps/embed?pb=!1m18!1m12!1m3!1d3887.99020464627!2d77.59791981482161!3d12.970847690855337!2m3!1f0!2f0!3f0!3m2!1i1024!2i768!4f13.1!3m3!1m2!1s0x3bae167f32dfc889%3A0xf5c2cb22af5af5a6!2sCubbon%20Park%2C%20Bengaluru%2C%20Karnataka%20560001!5e0!3m2!1sen!2sin!4v1650450471542!5m2!1sen!2sin";

pub enum ContactAction {
    SetText(ContactField, String),
    Reject(ValidationErrors<ContactField>),
    SubmissionStarted,
    SubmissionSettled(Result<Receipt, SubmitError>),
    StartOver,
}

impl Reducible for ContactForm {
    type Action = ContactAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            ContactAction::SetText(field, value) => next.set_text(field, value),
            ContactAction::Reject(errors) => next.reject(errors),
            ContactAction::SubmissionStarted => {
                if !next.mark_pending() {
                    debug!("Contact message already pending, ignoring start");
                    return self;
                }
            }
            ContactAction::SubmissionSettled(outcome) => next.finish_submission(outcome),
            ContactAction::StartOver => next.start_over(),
        }
        next.into()
    }
}

#[function_component(Contact)]
pub fn contact() -> Html {
    let form = use_reducer(ContactForm::default);
    let notifier = use_notifier();
    let collaborator = use_collaborator();

    if let SubmissionStatus::Succeeded(receipt) = form.status() {
        let start_over = {
            let dispatcher = form.dispatcher();
            Callback::from(move |_: MouseEvent| dispatcher.dispatch(ContactAction::StartOver))
        };
        return html! {
            <div class="page narrow">
                <div class="form-card">
                    <SubmissionSuccess
                        title="Message Sent Successfully!"
                        message="Thank you for reaching out to us. We'll get back to you as soon as possible."
                        return_to={Route::Home}
                        return_text="Back to Home"
                        submitted_at={Some(receipt.submitted_at)}
                    />
                    <div class="centered">
                        <button class="text-link" onclick={start_over}>{"Send another message"}</button>
                    </div>
                </div>
            </div>
        };
    }

    let set_text = |field: ContactField| {
        let dispatcher = form.dispatcher();
        Callback::from(move |value: String| dispatcher.dispatch(ContactAction::SetText(field, value)))
    };

    let error_for = |field: ContactField| form.errors().get(field).map(str::to_string);

    let onsubmit = {
        let form = form.clone();
        let notifier = notifier.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let mut draft = (*form).clone();
            match draft.begin_submission() {
                Ok(submission) => {
                    form.dispatch(ContactAction::SubmissionStarted);
                    let dispatcher = form.dispatcher();
                    let notifier = notifier.clone();
                    let collaborator = collaborator.clone();
                    spawn_local(async move {
                        let outcome = collaborator.submit(submission).await;
                        match &outcome {
                            Ok(_) => notifier.success("Message sent!", "We'll get back to you within 24 hours."),
                            Err(err) => notifier.error("Message not sent", err.to_string()),
                        }
                        dispatcher.dispatch(ContactAction::SubmissionSettled(outcome));
                    });
                }
                Err(SubmitBlocked::Invalid(errors)) => {
                    info!("Contact message blocked: {} invalid field(s)", errors.len());
                    form.dispatch(ContactAction::Reject(errors));
                }
                Err(blocked) => debug!("Contact submit ignored: {}", blocked),
            }
        })
    };

    let values = form.values();
    let pending = form.status().is_pending();

    html! {
        <div class="page">
            <style>
                {r#"
                .contact-grid { display: grid; grid-template-columns: 1fr 1fr; gap: 2.5rem; }
                .info-row { display: flex; gap: 1rem; margin-bottom: 1.25rem; }
                .info-icon { height: 2.5rem; width: 2.5rem; border-radius: 999px; display: grid; place-items: center; background: rgba(139, 92, 246, 0.12); color: var(--brand-purple); flex-shrink: 0; }
                .info-row h3 { margin: 0 0 0.25rem; font-size: 1rem; }
                .map-frame { border-radius: 12px; overflow: hidden; height: 16rem; border: 1px solid var(--border); }
                .map-frame iframe { width: 100%; height: 100%; border: 0; }
                .socials { display: flex; gap: 1rem; }
                @media (max-width: 768px) {
                    .contact-grid { grid-template-columns: 1fr; }
                }
                "#}
            </style>
            <div class="page-heading">
                <h1>{"Get in Touch"}</h1>
                <p class="muted">
                    {"Have questions about our services? Looking to partner with us? Drop us a message and we'll get back to you soon."}
                </p>
            </div>
            <div class="contact-grid">
                <div>
                    <div class="form-card">
                        <h2>{"Contact Information"}</h2>
                        <div class="info-row">
                            <span class="info-icon">{"✉"}</span>
                            <div>
                                <h3>{"Email"}</h3>
                                <a href={format!("mailto:{}", config::CONTACT_EMAIL)}>{config::CONTACT_EMAIL}</a>
                            </div>
                        </div>
                        <div class="info-row">
                            <span class="info-icon">{"☎"}</span>
                            <div>
                                <h3>{"Phone"}</h3>
                                <a href={config::CONTACT_PHONE_HREF}>{config::CONTACT_PHONE_DISPLAY}</a>
                            </div>
                        </div>
                        <div class="info-row">
                            <span class="info-icon">{"⌖"}</span>
                            <div>
                                <h3>{"Office"}</h3>
                                <p class="muted">
                                    {config::OFFICE_ADDRESS[0]}<br />{config::OFFICE_ADDRESS[1]}
                                </p>
                            </div>
                        </div>
                        <h3>{"Connect with us"}</h3>
                        <div class="socials">
                            <a href="https://github.com/" target="_blank" rel="noopener noreferrer" aria-label="GitHub">{"GitHub"}</a>
                            <a href="https://linkedin.com/" target="_blank" rel="noopener noreferrer" aria-label="LinkedIn">{"LinkedIn"}</a>
                            <a href="https://instagram.com/" target="_blank" rel="noopener noreferrer" aria-label="Instagram">{"Instagram"}</a>
                        </div>
                    </div>
                    <div class="form-card">
                        <h2>{"Office Location"}</h2>
                        <div class="map-frame">
                            <iframe
                                title="Decruze Digital Office Location"
                                src={MAP_EMBED}
                                loading="lazy"
                                referrerpolicy="no-referrer-when-downgrade"
                            ></iframe>
                        </div>
                    </div>
                </div>

                <div class="form-card">
                    <h2>{"Send us a message"}</h2>
                    <p class="muted">{"We'll get back to you within 24 hours"}</p>
                    <form {onsubmit} novalidate={true}>
                        <TextField
                            id={ContactField::Name.key()}
                            label="Full Name"
                            placeholder="Enter your full name"
                            required={true}
                            value={values.text(ContactField::Name).to_string()}
                            error={error_for(ContactField::Name)}
                            on_input={set_text(ContactField::Name)}
                        />
                        <TextField
                            id={ContactField::Email.key()}
                            label="Email Address"
                            kind="email"
                            placeholder="youremail@example.com"
                            required={true}
                            value={values.text(ContactField::Email).to_string()}
                            error={error_for(ContactField::Email)}
                            on_input={set_text(ContactField::Email)}
                        />
                        <SelectField
                            id={ContactField::Subject.key()}
                            label="Subject"
                            placeholder="Select a subject"
                            options={choice_options::<ContactSubject>()}
                            required={true}
                            value={values.text(ContactField::Subject).to_string()}
                            error={error_for(ContactField::Subject)}
                            on_change={set_text(ContactField::Subject)}
                        />
                        <TextArea
                            id={ContactField::Message.key()}
                            label="Message"
                            placeholder="How can we help you?"
                            rows={5}
                            required={true}
                            value={values.text(ContactField::Message).to_string()}
                            error={error_for(ContactField::Message)}
                            on_input={set_text(ContactField::Message)}
                        />
                        if let Some(message) = form.status().failure() {
                            <p class="form-failure" role="alert">{message}</p>
                        }
                        <button type="submit" class="gradient-button full-width" disabled={pending}>
                            { if pending { "Sending..." } else { "Send Message" } }
                        </button>
                    </form>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[test]
    fn success_then_start_over_returns_to_idle() {
        let form = Rc::new(ContactForm::default())
            .reduce(ContactAction::SetText(ContactField::Name, "Priya".into()))
            .reduce(ContactAction::SubmissionStarted)
            .reduce(ContactAction::SubmissionSettled(Ok(Receipt {
                submitted_at: Utc::now(),
            })));
        assert!(matches!(form.status(), SubmissionStatus::Succeeded(_)));
        assert!(form.values().name.is_empty());

        let form = form.reduce(ContactAction::StartOver);
        assert_eq!(*form, ContactForm::default());
    }

    #[test]
    fn second_start_while_pending_is_ignored() {
        let pending = Rc::new(ContactForm::default()).reduce(ContactAction::SubmissionStarted);
        assert!(pending.status().is_pending());
        let again = pending.clone().reduce(ContactAction::SubmissionStarted);
        assert!(Rc::ptr_eq(&pending, &again));
    }
}
