use log::{debug, info};

use super::files::{FileDescriptor, FileSelection, FileSelectionError};
use super::options::{Choice, ExtraRequirement, Technology};
use super::steps::{Step, StepController};
use super::submission::{Receipt, Submission, SubmissionStatus, SubmitBlocked, SubmitError};
use super::validation::{validate_fields, validate_request, ValidationErrors};
use super::values::{Field, FormValues};

/// Everything the project request page holds between mount and unmount.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ProjectRequestWizard {
    values: FormValues,
    errors: ValidationErrors,
    steps: StepController,
    files: FileSelection,
    status: SubmissionStatus,
}

impl ProjectRequestWizard {
    pub fn with_file_limit(max_files: usize) -> Self {
        Self {
            files: FileSelection::new(max_files),
            ..Self::default()
        }
    }

    pub fn values(&self) -> &FormValues {
        &self.values
    }

    pub fn errors(&self) -> &ValidationErrors {
        &self.errors
    }

    pub fn step(&self) -> Step {
        self.steps.current()
    }

    pub fn files(&self) -> &FileSelection {
        &self.files
    }

    pub fn status(&self) -> &SubmissionStatus {
        &self.status
    }

    /// Updates a field. A field already showing an error is re-checked so the
    /// message goes away as soon as the input becomes valid.
    pub fn set_text(&mut self, field: Field, value: String) {
        self.values.set_text(field, value);
        if self.errors.contains(field) {
            let fresh = validate_fields(&self.values, &[field]);
            self.errors.replace_scope(&[field], fresh);
        }
    }

    pub fn set_technology(&mut self, technology: Technology, checked: bool) {
        self.values.technologies.set(technology, checked);
    }

    pub fn set_requirement(&mut self, requirement: ExtraRequirement, checked: bool) {
        self.values.extra_requirements.set(requirement, checked);
    }

    /// Returns true when the step advanced.
    pub fn next_step(&mut self) -> bool {
        let from = self.steps.current();
        match self.steps.next(&self.values) {
            Ok(to) => {
                self.errors.replace_scope(from.gated_fields(), ValidationErrors::new());
                if to != from {
                    debug!("wizard moved from step {} to {}", from.number(), to.number());
                }
                to != from
            }
            Err(errors) => {
                self.errors.replace_scope(from.gated_fields(), errors);
                false
            }
        }
    }

    pub fn previous_step(&mut self) {
        self.steps.previous();
    }

    pub fn add_files(&mut self, incoming: Vec<FileDescriptor>) -> Result<usize, FileSelectionError> {
        self.files.add(incoming)
    }

    pub fn remove_file(&mut self, index: usize) {
        self.files.remove(index);
    }

    /// Validates the final step and then the whole form. On success the
    /// wizard is pending and the returned submission must be handed to a
    /// collaborator, whose outcome goes to `finish_submission`.
    pub fn begin_submission(&mut self) -> Result<Submission, SubmitBlocked> {
        if self.status.is_pending() {
            return Err(SubmitBlocked::InFlight);
        }
        let step = self.steps.current();
        if !step.is_last() {
            return Err(SubmitBlocked::NotFinalStep);
        }

        let step_errors = validate_fields(&self.values, step.gated_fields());
        if !step_errors.is_empty() {
            self.errors.replace_scope(step.gated_fields(), step_errors.clone());
            return Err(SubmitBlocked::Invalid(step_errors));
        }

        match validate_request(&self.values, &self.files) {
            Ok(payload) => {
                self.errors = ValidationErrors::new();
                self.status.begin();
                info!(
                    "project request ready with {} technologies, {} extra requirement(s), {} attachment(s)",
                    payload.project.technologies.len(),
                    payload.details.extra_requirements.len(),
                    payload.attachments.len()
                );
                if !payload.project.technologies.is_empty() {
                    let ids: Vec<&str> = payload.project.technologies.iter().map(Choice::id).collect();
                    debug!("technologies picked: {}", ids.join(", "));
                }
                Ok(Submission::ProjectRequest(payload))
            }
            Err(errors) => {
                self.errors = errors.clone();
                Err(SubmitBlocked::Invalid(errors))
            }
        }
    }

    /// Applies an accepted `begin_submission` made on a snapshot. Returns
    /// `false` and changes nothing when a submission is already in flight.
    pub fn mark_pending(&mut self) -> bool {
        if !self.status.begin() {
            return false;
        }
        self.errors = ValidationErrors::new();
        true
    }

    /// Shows errors found on a snapshot.
    pub fn reject(&mut self, errors: ValidationErrors) {
        self.errors = errors;
    }

    /// Success resets the form to its initial values; failure keeps
    /// everything so the visitor can retry.
    pub fn finish_submission(&mut self, outcome: Result<Receipt, SubmitError>) {
        if outcome.is_ok() {
            let max_files = self.files.max();
            *self = Self::with_file_limit(max_files);
        }
        self.status.settle(outcome);
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;

    use async_trait::async_trait;
    use chrono::Utc;
    use futures::executor::block_on;
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::form::payload::Team;
    use crate::form::submission::Submitter;

    #[derive(Default)]
    struct CountingSubmitter {
        calls: Cell<usize>,
        fail: bool,
    }

    #[async_trait(?Send)]
    impl Submitter for CountingSubmitter {
        async fn submit(&self, _submission: Submission) -> Result<Receipt, SubmitError> {
            self.calls.set(self.calls.get() + 1);
            if self.fail {
                Err(SubmitError::Offline)
            } else {
                Ok(Receipt {
                    submitted_at: Utc::now(),
                })
            }
        }
    }

    /// Drives a submission the way the page does.
    fn submit(wizard: &mut ProjectRequestWizard, submitter: &CountingSubmitter) -> Result<(), SubmitBlocked> {
        let submission = wizard.begin_submission()?;
        let outcome = block_on(submitter.submit(submission));
        wizard.finish_submission(outcome);
        Ok(())
    }

    fn fill(wizard: &mut ProjectRequestWizard, pairs: &[(Field, &str)]) {
        for (field, value) in pairs {
            wizard.set_text(*field, value.to_string());
        }
    }

    fn at_final_step() -> ProjectRequestWizard {
        let mut wizard = ProjectRequestWizard::default();
        fill(
            &mut wizard,
            &[
                (Field::Name, "Al"),
                (Field::Email, "a@b.com"),
                (Field::College, "XY"),
                (Field::Department, "cs"),
            ],
        );
        assert!(wizard.next_step());
        fill(&mut wizard, &[(Field::Domain, "web-dev"), (Field::ProjectType, "major")]);
        assert!(wizard.next_step());
        wizard
    }

    #[test]
    fn step_one_sample_advances_to_step_two() {
        let mut wizard = ProjectRequestWizard::default();
        fill(
            &mut wizard,
            &[
                (Field::Name, "Al"),
                (Field::Email, "a@b.com"),
                (Field::College, "XY"),
                (Field::Department, "cs"),
            ],
        );
        assert!(wizard.next_step());
        assert_eq!(wizard.step(), Step::Project);
        assert!(wizard.errors().is_empty());
    }

    #[test]
    fn short_problem_statement_never_reaches_the_collaborator() {
        let mut wizard = at_final_step();
        fill(&mut wizard, &[(Field::ProblemStatement, "Hello")]);
        let submitter = CountingSubmitter::default();

        let blocked = submit(&mut wizard, &submitter).expect_err("too short");
        assert!(matches!(blocked, SubmitBlocked::Invalid(ref errors) if errors.contains(Field::ProblemStatement)));
        assert_eq!(submitter.calls.get(), 0);
        assert_eq!(wizard.step(), Step::Details);
        assert_eq!(wizard.status(), &SubmissionStatus::Idle);
    }

    #[test]
    fn submit_is_refused_before_the_last_step() {
        let mut wizard = ProjectRequestWizard::default();
        assert_eq!(wizard.begin_submission(), Err(SubmitBlocked::NotFinalStep));
    }

    #[test]
    fn successful_submission_resets_everything() {
        let mut wizard = at_final_step();
        fill(
            &mut wizard,
            &[
                (Field::ProblemStatement, "An attendance tracker using face recognition"),
                (Field::HasTeam, "yes"),
                (Field::TeamSize, "3"),
            ],
        );
        wizard
            .add_files(vec![FileDescriptor::new("brief.pdf", 10, "application/pdf")])
            .expect("one file");
        let submitter = CountingSubmitter::default();

        submit(&mut wizard, &submitter).expect("valid");

        assert_eq!(submitter.calls.get(), 1);
        assert!(matches!(wizard.status(), SubmissionStatus::Succeeded(_)));
        assert_eq!(wizard.values(), &FormValues::default());
        assert_eq!(wizard.step(), Step::Personal);
        assert!(wizard.files().is_empty());
    }

    #[test]
    fn failed_submission_is_surfaced_and_keeps_input() {
        let mut wizard = at_final_step();
        fill(&mut wizard, &[(Field::ProblemStatement, "A campus lost-and-found portal")]);
        let submitter = CountingSubmitter {
            fail: true,
            ..CountingSubmitter::default()
        };

        submit(&mut wizard, &submitter).expect("reached collaborator");

        assert!(wizard.status().failure().is_some());
        assert_eq!(wizard.values().name, "Al");
        assert_eq!(wizard.step(), Step::Details);
    }

    #[test]
    fn second_submit_while_pending_is_refused() {
        let mut wizard = at_final_step();
        fill(&mut wizard, &[(Field::ProblemStatement, "Inventory tracking for a canteen")]);

        let first = wizard.begin_submission().expect("valid");
        assert!(matches!(first, Submission::ProjectRequest(ref p) if p.details.team == Team::Solo));
        assert_eq!(wizard.begin_submission(), Err(SubmitBlocked::InFlight));
    }

    #[test]
    fn errors_clear_once_the_field_is_fixed() {
        let mut wizard = ProjectRequestWizard::default();
        assert!(!wizard.next_step());
        assert!(wizard.errors().contains(Field::Name));

        wizard.set_text(Field::Name, "Al".to_string());
        assert!(!wizard.errors().contains(Field::Name));
        assert!(wizard.errors().contains(Field::Email));
    }

    #[test]
    fn file_limit_is_enforced_through_the_wizard() {
        let mut wizard = ProjectRequestWizard::with_file_limit(2);
        let file = || FileDescriptor::new("a.png", 1, "image/png");

        assert_eq!(wizard.add_files(vec![file(), file(), file()]), Err(FileSelectionError::TooManyFiles { max: 2 }));
        assert!(wizard.files().is_empty());
        assert_eq!(wizard.add_files(vec![file(), file()]), Ok(2));
        wizard.remove_file(0);
        assert_eq!(wizard.files().len(), 1);
    }

    #[test]
    fn mark_pending_only_starts_one_submission() {
        let mut wizard = ProjectRequestWizard::default();
        assert!(wizard.mark_pending());
        assert!(wizard.status().is_pending());
        assert!(!wizard.mark_pending());
        assert!(wizard.status().is_pending());
    }
}
