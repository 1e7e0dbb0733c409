use super::options::{Checklist, ExtraRequirement, HasTeam, Technology};
use super::options::Choice;

/// Every text-valued input of the project request form. Checklists are kept
/// on `FormValues` directly and never carry a validation message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Email,
    Phone,
    College,
    Department,
    ProjectTitle,
    Domain,
    ProjectType,
    CustomTechnology,
    ProblemStatement,
    Deadline,
    HasTeam,
    TeamSize,
    AdditionalInfo,
}

impl Field {
    /// Fields that must pass before the request can be submitted.
    pub const REQUIRED: [Field; 8] = [
        Field::Name,
        Field::Email,
        Field::College,
        Field::Department,
        Field::Domain,
        Field::ProjectType,
        Field::ProblemStatement,
        Field::HasTeam,
    ];

    pub fn is_required(self) -> bool {
        Self::REQUIRED.contains(&self)
    }

    /// DOM id and payload key.
    pub fn key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::College => "college",
            Field::Department => "department",
            Field::ProjectTitle => "projectTitle",
            Field::Domain => "domain",
            Field::ProjectType => "projectType",
            Field::CustomTechnology => "customTechnology",
            Field::ProblemStatement => "problemStatement",
            Field::Deadline => "deadline",
            Field::HasTeam => "hasTeam",
            Field::TeamSize => "teamSize",
            Field::AdditionalInfo => "additionalInfo",
        }
    }
}

/// Raw values as the visitor typed or picked them. Selects hold the option
/// id, or an empty string while nothing is picked.
#[derive(Debug, Clone, PartialEq)]
pub struct FormValues {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub college: String,
    pub department: String,
    pub project_title: String,
    pub domain: String,
    pub project_type: String,
    pub technologies: Checklist<Technology>,
    pub custom_technology: String,
    pub problem_statement: String,
    pub deadline: String,
    pub has_team: String,
    pub team_size: String,
    pub extra_requirements: Checklist<ExtraRequirement>,
    pub additional_info: String,
}

impl Default for FormValues {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            college: String::new(),
            department: String::new(),
            project_title: String::new(),
            domain: String::new(),
            project_type: String::new(),
            technologies: Checklist::default(),
            custom_technology: String::new(),
            problem_statement: String::new(),
            deadline: String::new(),
            has_team: HasTeam::No.id().to_string(),
            team_size: String::new(),
            extra_requirements: Checklist::default(),
            additional_info: String::new(),
        }
    }
}

impl FormValues {
    /// Current text of a field.
    pub fn text(&self, field: Field) -> &str {
        match field {
            Field::Name => &self.name,
            Field::Email => &self.email,
            Field::Phone => &self.phone,
            Field::College => &self.college,
            Field::Department => &self.department,
            Field::ProjectTitle => &self.project_title,
            Field::Domain => &self.domain,
            Field::ProjectType => &self.project_type,
            Field::CustomTechnology => &self.custom_technology,
            Field::ProblemStatement => &self.problem_statement,
            Field::Deadline => &self.deadline,
            Field::HasTeam => &self.has_team,
            Field::TeamSize => &self.team_size,
            Field::AdditionalInfo => &self.additional_info,
        }
    }

    pub fn set_text(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Name => &mut self.name,
            Field::Email => &mut self.email,
            Field::Phone => &mut self.phone,
            Field::College => &mut self.college,
            Field::Department => &mut self.department,
            Field::ProjectTitle => &mut self.project_title,
            Field::Domain => &mut self.domain,
            Field::ProjectType => &mut self.project_type,
            Field::CustomTechnology => &mut self.custom_technology,
            Field::ProblemStatement => &mut self.problem_statement,
            Field::Deadline => &mut self.deadline,
            Field::HasTeam => &mut self.has_team,
            Field::TeamSize => &mut self.team_size,
            Field::AdditionalInfo => &mut self.additional_info,
        };
        *slot = value;
    }

    /// Whether the team size picker should be shown.
    pub fn has_team(&self) -> bool {
        HasTeam::from_id(&self.has_team) == Some(HasTeam::Yes)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_to_working_alone() {
        let values = FormValues::default();
        assert_eq!(values.has_team, "no");
        assert!(!values.has_team());
        assert!(values.technologies.is_empty());
    }

    #[test]
    fn set_text_targets_the_named_field() {
        let mut values = FormValues::default();
        values.set_text(Field::ProjectType, "final-year".to_string());
        values.set_text(Field::HasTeam, "yes".to_string());

        assert_eq!(values.text(Field::ProjectType), "final-year");
        assert!(values.has_team());
    }

    #[test]
    fn optional_inputs_are_not_required() {
        assert!(Field::Name.is_required());
        assert!(Field::HasTeam.is_required());
        assert!(!Field::Phone.is_required());
        assert!(!Field::Deadline.is_required());
        assert!(!Field::TeamSize.is_required());
    }
}
