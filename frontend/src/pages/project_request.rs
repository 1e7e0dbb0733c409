use std::rc::Rc;

use log::{debug, info, warn};
use wasm_bindgen_futures::spawn_local;
use web_sys::SubmitEvent;
use yew::prelude::*;

use crate::collaborator::use_collaborator;
use crate::components::fields::{choice_options, CheckboxGroup, RadioGroup, SelectField, TextArea, TextField};
use crate::components::file_upload::FileUpload;
use crate::components::notification::use_notifier;
use crate::components::progress_bar::ProgressBar;
use crate::components::submission_success::SubmissionSuccess;
use crate::config;
use crate::form::files::FileDescriptor;
use crate::form::options::{Choice, Department, Domain, ExtraRequirement, HasTeam, ProjectType, TeamSize, Technology};
use crate::form::steps::Step;
use crate::form::submission::{Receipt, SubmissionStatus, SubmitBlocked, SubmitError};
use crate::form::validation::ValidationErrors;
use crate::form::values::Field;
use crate::form::wizard::ProjectRequestWizard;
use crate::Route;

pub enum WizardAction {
    SetText(Field, String),
    SetTechnology(Technology, bool),
    SetRequirement(ExtraRequirement, bool),
    Next,
    Previous,
    AddFiles(Vec<FileDescriptor>),
    RemoveFile(usize),
    Reject(ValidationErrors),
    SubmissionStarted,
    SubmissionSettled(Result<Receipt, SubmitError>),
}

impl Reducible for ProjectRequestWizard {
    type Action = WizardAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            WizardAction::SetText(field, value) => next.set_text(field, value),
            WizardAction::SetTechnology(technology, checked) => next.set_technology(technology, checked),
            WizardAction::SetRequirement(requirement, checked) => next.set_requirement(requirement, checked),
            WizardAction::Next => {
                next.next_step();
            }
            WizardAction::Previous => next.previous_step(),
            WizardAction::AddFiles(files) => {
                if let Err(err) = next.add_files(files) {
                    warn!("Ignoring file selection: {}", err);
                    return self;
                }
            }
            WizardAction::RemoveFile(index) => next.remove_file(index),
            WizardAction::Reject(errors) => next.reject(errors),
            WizardAction::SubmissionStarted => {
                if !next.mark_pending() {
                    debug!("Project request already pending, ignoring start");
                    return self;
                }
            }
            WizardAction::SubmissionSettled(outcome) => next.finish_submission(outcome),
        }
        next.into()
    }
}

fn error_for(wizard: &ProjectRequestWizard, field: Field) -> Option<String> {
    wizard.errors().get(field).map(str::to_string)
}

#[function_component(ProjectRequest)]
pub fn project_request() -> Html {
    let wizard = use_reducer(ProjectRequestWizard::default);
    let notifier = use_notifier();
    let collaborator = use_collaborator();

    {
        use_effect_with_deps(
            |step| {
                debug!("Showing step {}", step.number());
                if let Some(window) = web_sys::window() {
                    window.scroll_to_with_x_and_y(0.0, 0.0);
                }
                || ()
            },
            wizard.step(),
        );
    }

    let set_text = |field: Field| {
        let dispatcher = wizard.dispatcher();
        Callback::from(move |value: String| dispatcher.dispatch(WizardAction::SetText(field, value)))
    };

    if let SubmissionStatus::Succeeded(receipt) = wizard.status() {
        return html! {
            <div class="page narrow">
                <div class="form-card">
                    <SubmissionSuccess
                        title="Project Request Submitted!"
                        message="Thank you for submitting your project request. Our team will review your details and get back to you within 24 hours."
                        return_to={Route::Home}
                        return_text="Back to Home"
                        submitted_at={Some(receipt.submitted_at)}
                    />
                </div>
            </div>
        };
    }

    let on_previous = {
        let dispatcher = wizard.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(WizardAction::Previous))
    };

    let on_next = {
        let dispatcher = wizard.dispatcher();
        Callback::from(move |_: MouseEvent| dispatcher.dispatch(WizardAction::Next))
    };

    let onsubmit = {
        let wizard = wizard.clone();
        let notifier = notifier.clone();
        let collaborator = collaborator.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let mut draft = (*wizard).clone();
            match draft.begin_submission() {
                Ok(submission) => {
                    wizard.dispatch(WizardAction::SubmissionStarted);
                    let dispatcher = wizard.dispatcher();
                    let notifier = notifier.clone();
                    let collaborator = collaborator.clone();
                    spawn_local(async move {
                        let outcome = collaborator.submit(submission).await;
                        match &outcome {
                            Ok(_) => notifier.success(
                                "Project request submitted!",
                                "We'll get back to you within 24 hours.",
                            ),
                            Err(err) => notifier.error("Submission failed", err.to_string()),
                        }
                        dispatcher.dispatch(WizardAction::SubmissionSettled(outcome));
                    });
                }
                Err(SubmitBlocked::NotFinalStep) => wizard.dispatch(WizardAction::Next),
                Err(SubmitBlocked::Invalid(errors)) => {
                    let keys: Vec<&str> = errors.fields().map(Field::key).collect();
                    info!("Project request blocked on {}", keys.join(", "));
                    wizard.dispatch(WizardAction::Reject(errors));
                }
                Err(SubmitBlocked::InFlight) => debug!("Ignoring submit while one is pending"),
            }
        })
    };

    let on_add_files = {
        let wizard = wizard.clone();
        let notifier = notifier.clone();
        Callback::from(move |incoming: Vec<FileDescriptor>| {
            let mut draft = (*wizard).clone();
            match draft.add_files(incoming.clone()) {
                Ok(count) => {
                    notifier.info(
                        "Files attached",
                        format!("{} of {} files selected.", count, draft.files().max()),
                    );
                    wizard.dispatch(WizardAction::AddFiles(incoming));
                }
                Err(err) => notifier.error("Too many files", err.to_string()),
            }
        })
    };

    let on_remove_file = {
        let dispatcher = wizard.dispatcher();
        Callback::from(move |index: usize| dispatcher.dispatch(WizardAction::RemoveFile(index)))
    };

    let on_technology = {
        let dispatcher = wizard.dispatcher();
        Callback::from(move |(id, checked): (&'static str, bool)| {
            if let Some(technology) = Technology::from_id(id) {
                dispatcher.dispatch(WizardAction::SetTechnology(technology, checked));
            }
        })
    };

    let on_requirement = {
        let dispatcher = wizard.dispatcher();
        Callback::from(move |(id, checked): (&'static str, bool)| {
            if let Some(requirement) = ExtraRequirement::from_id(id) {
                dispatcher.dispatch(WizardAction::SetRequirement(requirement, checked));
            }
        })
    };

    let values = wizard.values();
    let step = wizard.step();
    let pending = wizard.status().is_pending();

    let body = match step {
        Step::Personal => html! {
            <>
                <div class="field-grid">
                    <TextField
                        id={Field::Name.key()}
                        label="Full Name"
                        placeholder="Enter your full name"
                        required={Field::Name.is_required()}
                        value={values.text(Field::Name).to_string()}
                        error={error_for(&wizard, Field::Name)}
                        on_input={set_text(Field::Name)}
                    />
                    <TextField
                        id={Field::Email.key()}
                        label="Email Address"
                        kind="email"
                        placeholder="youremail@example.com"
                        required={Field::Email.is_required()}
                        value={values.text(Field::Email).to_string()}
                        error={error_for(&wizard, Field::Email)}
                        on_input={set_text(Field::Email)}
                    />
                    <TextField
                        id={Field::Phone.key()}
                        label="Phone Number"
                        kind="tel"
                        placeholder="Enter your phone number"
                        value={values.text(Field::Phone).to_string()}
                        on_input={set_text(Field::Phone)}
                    />
                    <TextField
                        id={Field::College.key()}
                        label="College Name"
                        placeholder="Enter your college name"
                        required={Field::College.is_required()}
                        value={values.text(Field::College).to_string()}
                        error={error_for(&wizard, Field::College)}
                        on_input={set_text(Field::College)}
                    />
                </div>
                <SelectField
                    id={Field::Department.key()}
                    label="Department"
                    placeholder="Select your department"
                    options={choice_options::<Department>()}
                    required={Field::Department.is_required()}
                    value={values.text(Field::Department).to_string()}
                    error={error_for(&wizard, Field::Department)}
                    on_change={set_text(Field::Department)}
                />
            </>
        },
        Step::Project => html! {
            <>
                <TextField
                    id={Field::ProjectTitle.key()}
                    label="Project Title"
                    placeholder="Enter your project title if you have one"
                    value={values.text(Field::ProjectTitle).to_string()}
                    on_input={set_text(Field::ProjectTitle)}
                />
                <div class="field-grid">
                    <SelectField
                        id={Field::Domain.key()}
                        label="Preferred Domain"
                        placeholder="Select domain"
                        options={choice_options::<Domain>()}
                        required={Field::Domain.is_required()}
                        value={values.text(Field::Domain).to_string()}
                        error={error_for(&wizard, Field::Domain)}
                        on_change={set_text(Field::Domain)}
                    />
                    <SelectField
                        id={Field::ProjectType.key()}
                        label="Type of Project"
                        placeholder="Select project type"
                        options={choice_options::<ProjectType>()}
                        required={Field::ProjectType.is_required()}
                        value={values.text(Field::ProjectType).to_string()}
                        error={error_for(&wizard, Field::ProjectType)}
                        on_change={set_text(Field::ProjectType)}
                    />
                </div>
                <CheckboxGroup
                    label="Technologies to Use"
                    options={Technology::all()
                        .into_iter()
                        .map(|tech| (tech.id(), tech.label(), values.technologies.contains(tech)))
                        .collect::<Vec<_>>()}
                    on_toggle={on_technology}
                />
                <TextField
                    id={Field::CustomTechnology.key()}
                    label="Other Technologies (Comma-separated)"
                    placeholder="Java, Spring Boot, AWS, etc."
                    value={values.text(Field::CustomTechnology).to_string()}
                    on_input={set_text(Field::CustomTechnology)}
                />
            </>
        },
        Step::Details => html! {
            <>
                <TextArea
                    id={Field::ProblemStatement.key()}
                    label="Problem Statement / Project Idea"
                    placeholder="Tell us what you're dreaming to build!"
                    rows={5}
                    required={Field::ProblemStatement.is_required()}
                    value={values.text(Field::ProblemStatement).to_string()}
                    error={error_for(&wizard, Field::ProblemStatement)}
                    on_input={set_text(Field::ProblemStatement)}
                />
                <div class="field-grid">
                    <TextField
                        id={Field::Deadline.key()}
                        label="Expected Deadline"
                        kind="date"
                        value={values.text(Field::Deadline).to_string()}
                        error={error_for(&wizard, Field::Deadline)}
                        on_input={set_text(Field::Deadline)}
                    />
                    <RadioGroup
                        name={Field::HasTeam.key()}
                        label="Do you have a team?"
                        options={choice_options::<HasTeam>()}
                        value={values.text(Field::HasTeam).to_string()}
                        error={error_for(&wizard, Field::HasTeam)}
                        on_change={set_text(Field::HasTeam)}
                    />
                </div>
                if values.has_team() {
                    <SelectField
                        id={Field::TeamSize.key()}
                        label="Team Size"
                        placeholder="Select team size"
                        options={choice_options::<TeamSize>()}
                        value={values.text(Field::TeamSize).to_string()}
                        error={error_for(&wizard, Field::TeamSize)}
                        on_change={set_text(Field::TeamSize)}
                    />
                }
                <CheckboxGroup
                    label="Extra Requirements"
                    grid_class="checkbox-grid two-columns"
                    options={ExtraRequirement::all()
                        .into_iter()
                        .map(|req| (req.id(), req.label(), values.extra_requirements.contains(req)))
                        .collect::<Vec<_>>()}
                    on_toggle={on_requirement}
                />
                <div class="field">
                    <span class="input-label">
                        {"Upload Reference Files"}<span class="optional-mark">{" (Optional)"}</span>
                    </span>
                    <FileUpload
                        files={wizard.files().clone()}
                        accept={config::ACCEPTED_FILE_TYPES}
                        label="Upload Reference Documents"
                        on_add={on_add_files}
                        on_remove={on_remove_file}
                    />
                </div>
                <TextArea
                    id={Field::AdditionalInfo.key()}
                    label="Additional Information"
                    placeholder="Any other details you'd like to share"
                    rows={3}
                    value={values.text(Field::AdditionalInfo).to_string()}
                    on_input={set_text(Field::AdditionalInfo)}
                />
            </>
        },
    };

    html! {
        <div class="page narrow">
            <div class="page-heading">
                <h1>{"Project Request Form"}</h1>
                <p class="muted">{"Fill out the details below to submit your project requirements"}</p>
            </div>
            <div class="form-card">
                <ProgressBar {step} />
                <form {onsubmit} novalidate={true}>
                    <h2 class="step-title">{step.title()}</h2>
                    {body}
                    if let Some(message) = wizard.status().failure() {
                        <p class="form-failure" role="alert">{message}</p>
                    }
                    <div class="form-actions">
                        if !step.is_first() {
                            <button type="button" class="outline-button" onclick={on_previous} disabled={pending}>
                                {"‹ Previous"}
                            </button>
                        }
                        if step.is_last() {
                            <button type="submit" class="gradient-button push-right" disabled={pending}>
                                { if pending { "Submitting..." } else { "Submit Request" } }
                            </button>
                        } else {
                            <button type="button" class="gradient-button push-right" onclick={on_next}>
                                {"Next ›"}
                            </button>
                        }
                    </div>
                </form>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reduce_all(actions: Vec<WizardAction>) -> Rc<ProjectRequestWizard> {
        actions
            .into_iter()
            .fold(Rc::new(ProjectRequestWizard::default()), |state, action| state.reduce(action))
    }

    #[test]
    fn next_with_empty_step_stays_and_reports_errors() {
        let state = reduce_all(vec![WizardAction::Next]);
        assert_eq!(state.step(), Step::Personal);
        assert_eq!(state.errors().len(), 4);
    }

    #[test]
    fn filled_steps_advance_and_previous_goes_back() {
        let state = reduce_all(vec![
            WizardAction::SetText(Field::Name, "Al".into()),
            WizardAction::SetText(Field::Email, "a@b.com".into()),
            WizardAction::SetText(Field::College, "XY".into()),
            WizardAction::SetText(Field::Department, "cs".into()),
            WizardAction::Next,
            WizardAction::SetTechnology(Technology::Python, true),
            WizardAction::SetText(Field::Domain, "ai-ml".into()),
            WizardAction::SetText(Field::ProjectType, "mini".into()),
            WizardAction::Next,
        ]);
        assert_eq!(state.step(), Step::Details);
        assert!(state.values().technologies.contains(Technology::Python));

        let state = state.reduce(WizardAction::Previous);
        assert_eq!(state.step(), Step::Project);
    }

    #[test]
    fn oversized_file_batch_leaves_state_untouched() {
        let file = || FileDescriptor::new("notes.pdf", 2_048, "application/pdf");
        let state = Rc::new(ProjectRequestWizard::default());
        let after = state.clone().reduce(WizardAction::AddFiles(vec![file(); 6]));
        assert!(Rc::ptr_eq(&state, &after));

        let after = after.reduce(WizardAction::AddFiles(vec![file(); 5]));
        assert_eq!(after.files().len(), 5);
    }

    #[test]
    fn failed_settlement_keeps_the_visitor_on_the_form() {
        let state = reduce_all(vec![
            WizardAction::SubmissionStarted,
            WizardAction::SubmissionSettled(Err(SubmitError::Offline)),
        ]);
        assert!(state.status().failure().is_some());
        assert_eq!(state.step(), Step::Personal);
    }

    #[test]
    fn second_start_while_pending_is_ignored() {
        let pending = reduce_all(vec![WizardAction::SubmissionStarted]);
        assert!(pending.status().is_pending());
        let again = pending.clone().reduce(WizardAction::SubmissionStarted);
        assert!(Rc::ptr_eq(&pending, &again));
    }
}
