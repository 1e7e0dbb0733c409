//! Field rules for the project request form and the shared building blocks
//! the contact form reuses.
//!
//! Rules only look at trimmed text. Each rule yields either the parsed value
//! or the message shown under the input.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use once_cell::sync::Lazy;
use regex::Regex;

use super::files::FileSelection;
use super::options::{Choice, Department, Domain, HasTeam, ProjectType, TeamSize};
use super::payload::{Applicant, ProjectDetails, ProjectInfo, ProjectRequestPayload, Team};
use super::values::{Field, FormValues};

pub const NAME_MESSAGE: &str = "Name must be at least 2 characters";
pub const EMAIL_MESSAGE: &str = "Please enter a valid email address";
pub const COLLEGE_MESSAGE: &str = "Please enter your college name";
pub const DEPARTMENT_MESSAGE: &str = "Please select your department";
pub const DOMAIN_MESSAGE: &str = "Please select a domain";
pub const PROJECT_TYPE_MESSAGE: &str = "Please select a project type";
pub const PROBLEM_STATEMENT_MESSAGE: &str = "Please provide a brief description of your project";
pub const HAS_TEAM_MESSAGE: &str = "Please choose whether you have a team";

static EMAIL: Lazy<Regex> = Lazy::new(|| {
    Regex::new(
        r"^[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+(?:\.[A-Za-z0-9!#$%&'*+/=?^_`{|}~-]+)*@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)+$",
    )
    .expect("email pattern compiles")
});

/// Messages keyed by field, in field order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationErrors<F: Ord = Field> {
    messages: BTreeMap<F, String>,
}

impl<F: Ord> Default for ValidationErrors<F> {
    fn default() -> Self {
        Self {
            messages: BTreeMap::new(),
        }
    }
}

impl<F: Ord + Copy> ValidationErrors<F> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, field: F, message: impl Into<String>) {
        self.messages.insert(field, message.into());
    }

    pub fn remove(&mut self, field: F) {
        self.messages.remove(&field);
    }

    pub fn get(&self, field: F) -> Option<&str> {
        self.messages.get(&field).map(String::as_str)
    }

    pub fn contains(&self, field: F) -> bool {
        self.messages.contains_key(&field)
    }

    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    pub fn len(&self) -> usize {
        self.messages.len()
    }

    pub fn fields(&self) -> impl Iterator<Item = F> + '_ {
        self.messages.keys().copied()
    }

    /// Records a failed rule and turns the outcome into an `Option`.
    pub fn capture<T>(&mut self, field: F, outcome: Result<T, &'static str>) -> Option<T> {
        match outcome {
            Ok(value) => Some(value),
            Err(message) => {
                self.insert(field, message);
                None
            }
        }
    }

    /// Replaces the entries for `fields` with those of `fresh`, keeping
    /// messages of fields outside that scope.
    pub fn replace_scope(&mut self, fields: &[F], fresh: ValidationErrors<F>) {
        for field in fields {
            self.messages.remove(field);
        }
        self.messages.extend(fresh.messages);
    }
}

pub fn min_chars(value: &str, min: usize, message: &'static str) -> Result<String, &'static str> {
    let trimmed = value.trim();
    if trimmed.chars().count() >= min {
        Ok(trimmed.to_string())
    } else {
        Err(message)
    }
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL.is_match(value.trim())
}

pub fn email(value: &str, message: &'static str) -> Result<String, &'static str> {
    if is_valid_email(value) {
        Ok(value.trim().to_string())
    } else {
        Err(message)
    }
}

pub fn choice<T: Choice>(value: &str, message: &'static str) -> Result<T, &'static str> {
    T::from_id(value.trim()).ok_or(message)
}

/// Trimmed text, or `None` when left blank.
pub fn optional(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Splits the free-text "other technologies" input on commas.
pub fn split_technologies(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(str::to_string)
        .collect()
}

fn check(values: &FormValues, field: Field) -> Result<(), &'static str> {
    match field {
        Field::Name => min_chars(&values.name, 2, NAME_MESSAGE).map(drop),
        Field::Email => email(&values.email, EMAIL_MESSAGE).map(drop),
        Field::College => min_chars(&values.college, 2, COLLEGE_MESSAGE).map(drop),
        Field::Department => choice::<Department>(&values.department, DEPARTMENT_MESSAGE).map(drop),
        Field::Domain => choice::<Domain>(&values.domain, DOMAIN_MESSAGE).map(drop),
        Field::ProjectType => choice::<ProjectType>(&values.project_type, PROJECT_TYPE_MESSAGE).map(drop),
        Field::ProblemStatement => {
            min_chars(&values.problem_statement, 10, PROBLEM_STATEMENT_MESSAGE).map(drop)
        }
        Field::HasTeam => choice::<HasTeam>(&values.has_team, HAS_TEAM_MESSAGE).map(drop),
        Field::Phone
        | Field::ProjectTitle
        | Field::CustomTechnology
        | Field::Deadline
        | Field::TeamSize
        | Field::AdditionalInfo => Ok(()),
    }
}

/// Validates exactly the listed fields.
pub fn validate_fields(values: &FormValues, fields: &[Field]) -> ValidationErrors {
    let mut errors = ValidationErrors::new();
    for &field in fields {
        if let Err(message) = check(values, field) {
            errors.insert(field, message);
        }
    }
    errors
}

/// Validates every required field and builds the typed payload.
pub fn validate_request(
    values: &FormValues,
    files: &FileSelection,
) -> Result<ProjectRequestPayload, ValidationErrors> {
    let mut errors = ValidationErrors::new();

    let name = errors.capture(Field::Name, min_chars(&values.name, 2, NAME_MESSAGE));
    let email = errors.capture(Field::Email, email(&values.email, EMAIL_MESSAGE));
    let college = errors.capture(Field::College, min_chars(&values.college, 2, COLLEGE_MESSAGE));
    let department = errors.capture(
        Field::Department,
        choice::<Department>(&values.department, DEPARTMENT_MESSAGE),
    );
    let domain = errors.capture(Field::Domain, choice::<Domain>(&values.domain, DOMAIN_MESSAGE));
    let project_type = errors.capture(
        Field::ProjectType,
        choice::<ProjectType>(&values.project_type, PROJECT_TYPE_MESSAGE),
    );
    let problem_statement = errors.capture(
        Field::ProblemStatement,
        min_chars(&values.problem_statement, 10, PROBLEM_STATEMENT_MESSAGE),
    );
    let has_team = errors.capture(Field::HasTeam, choice::<HasTeam>(&values.has_team, HAS_TEAM_MESSAGE));

    let (
        Some(name),
        Some(email),
        Some(college),
        Some(department),
        Some(domain),
        Some(project_type),
        Some(problem_statement),
        Some(has_team),
    ) = (name, email, college, department, domain, project_type, problem_statement, has_team)
    else {
        return Err(errors);
    };

    let team = match has_team {
        HasTeam::Yes => Team::Group {
            size: TeamSize::from_id(values.team_size.trim()),
        },
        HasTeam::No => Team::Solo,
    };

    Ok(ProjectRequestPayload {
        applicant: Applicant {
            name,
            email,
            phone: optional(&values.phone),
            college,
            department,
        },
        project: ProjectInfo {
            title: optional(&values.project_title),
            domain,
            project_type,
            technologies: values.technologies.clone(),
            custom_technologies: split_technologies(&values.custom_technology),
        },
        details: ProjectDetails {
            problem_statement,
            deadline: NaiveDate::parse_from_str(values.deadline.trim(), "%Y-%m-%d").ok(),
            team,
            extra_requirements: values.extra_requirements.clone(),
            additional_info: optional(&values.additional_info),
        },
        attachments: files.as_slice().to_vec(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::files::FileDescriptor;
    use crate::form::options::Technology;
    use pretty_assertions::assert_eq;

    fn complete() -> FormValues {
        FormValues {
            name: "Asha Rao".to_string(),
            email: "asha@college.edu".to_string(),
            college: "RV College".to_string(),
            department: "aiml".to_string(),
            domain: "ai-ml".to_string(),
            project_type: "final-year".to_string(),
            problem_statement: "Detect crop disease from leaf photos".to_string(),
            ..FormValues::default()
        }
    }

    #[test]
    fn short_names_are_rejected() {
        for name in ["", "A", " B ", "  "] {
            let values = FormValues {
                name: name.to_string(),
                ..complete()
            };
            let errors = validate_fields(&values, &[Field::Name]);
            assert_eq!(errors.get(Field::Name), Some(NAME_MESSAGE), "name {name:?}");
        }
        let values = FormValues {
            name: "Al".to_string(),
            ..complete()
        };
        assert!(validate_fields(&values, &[Field::Name]).is_empty());
    }

    #[test]
    fn emails_need_at_sign_and_domain() {
        for bad in ["", "asha", "asha@", "@college.edu", "asha@college", "asha college@x.io", "a@b."] {
            assert!(!is_valid_email(bad), "{bad:?} should be rejected");
        }
        for dotted in ["a..b@c.com", ".a@b.com", "a.@b.com"] {
            assert!(!is_valid_email(dotted), "{dotted:?} has a misplaced dot");
        }
        for good in ["a@b.com", "first.last+tag@sub.example.co.in", " a@b.com "] {
            assert!(is_valid_email(good), "{good:?} should pass");
        }
    }

    #[test]
    fn only_listed_fields_are_reported() {
        let values = FormValues::default();
        let errors = validate_fields(&values, &[Field::Domain, Field::ProjectType]);
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec![Field::Domain, Field::ProjectType]);
    }

    #[test]
    fn selects_must_hold_a_known_option() {
        let values = FormValues {
            department: "mechanical".to_string(),
            has_team: "maybe".to_string(),
            ..complete()
        };
        let errors = validate_fields(&values, &[Field::Department, Field::HasTeam]);
        assert_eq!(errors.get(Field::Department), Some(DEPARTMENT_MESSAGE));
        assert_eq!(errors.get(Field::HasTeam), Some(HAS_TEAM_MESSAGE));
    }

    #[test]
    fn optional_fields_are_unconstrained() {
        let values = FormValues {
            phone: "12".to_string(),
            project_title: "x".to_string(),
            deadline: "next week".to_string(),
            ..complete()
        };
        let optional_fields = [
            Field::Phone,
            Field::ProjectTitle,
            Field::CustomTechnology,
            Field::Deadline,
            Field::TeamSize,
            Field::AdditionalInfo,
        ];
        assert!(validate_fields(&values, &optional_fields).is_empty());
        let payload = validate_request(&values, &FileSelection::default()).expect("valid");
        assert_eq!(payload.details.deadline, None);
        assert_eq!(payload.project.title.as_deref(), Some("x"));
    }

    #[test]
    fn solo_request_drops_team_size() {
        let values = FormValues {
            has_team: "no".to_string(),
            team_size: "4".to_string(),
            ..complete()
        };
        let payload = validate_request(&values, &FileSelection::default()).expect("valid");
        assert_eq!(payload.details.team, Team::Solo);

        let json = serde_json::to_value(&payload).expect("serialize");
        assert_eq!(json["details"]["team"], serde_json::json!({ "hasTeam": "no" }));
    }

    #[test]
    fn group_request_keeps_team_size() {
        let values = FormValues {
            has_team: "yes".to_string(),
            team_size: "5+".to_string(),
            ..complete()
        };
        let payload = validate_request(&values, &FileSelection::default()).expect("valid");
        assert_eq!(payload.details.team, Team::Group { size: Some(TeamSize::FivePlus) });

        let json = serde_json::to_value(&payload).expect("serialize");
        assert_eq!(
            json["details"]["team"],
            serde_json::json!({ "hasTeam": "yes", "teamSize": "5+" })
        );
    }

    #[test]
    fn full_validation_reports_every_missing_required_field() {
        let errors = validate_request(&FormValues::default(), &FileSelection::default())
            .expect_err("empty form");
        let expected: Vec<Field> = Field::REQUIRED
            .iter()
            .copied()
            .filter(|field| *field != Field::HasTeam)
            .collect();
        assert_eq!(errors.fields().collect::<Vec<_>>(), expected);
    }

    #[test]
    fn payload_carries_checklists_custom_tech_and_files() {
        let mut values = FormValues {
            custom_technology: "Java, Spring Boot, , AWS ".to_string(),
            deadline: "2026-12-01".to_string(),
            ..complete()
        };
        values.technologies.set(Technology::Python, true);
        values.technologies.set(Technology::TensorFlow, true);

        let mut files = FileSelection::default();
        files
            .add(vec![FileDescriptor::new("leaf.png", 4096, "image/png")])
            .expect("one file");

        let payload = validate_request(&values, &files).expect("valid");
        assert_eq!(payload.project.custom_technologies, vec!["Java", "Spring Boot", "AWS"]);
        assert_eq!(
            payload.project.technologies.iter().collect::<Vec<_>>(),
            vec![Technology::Python, Technology::TensorFlow]
        );
        assert_eq!(payload.details.deadline, NaiveDate::from_ymd_opt(2026, 12, 1));
        assert_eq!(payload.attachments.len(), 1);
        assert_eq!(payload.applicant.phone, None);
    }

    #[test]
    fn replace_scope_keeps_other_fields() {
        let mut errors = ValidationErrors::new();
        errors.insert(Field::Name, NAME_MESSAGE);
        errors.insert(Field::Domain, DOMAIN_MESSAGE);

        errors.replace_scope(&[Field::Name], ValidationErrors::new());
        assert!(!errors.contains(Field::Name));
        assert!(errors.contains(Field::Domain));
    }
}
