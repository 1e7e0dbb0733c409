use super::validation::{validate_fields, ValidationErrors};
use super::values::{Field, FormValues};

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Step {
    #[default]
    Personal,
    Project,
    Details,
}

impl Step {
    pub const COUNT: u8 = 3;

    pub fn number(self) -> u8 {
        match self {
            Step::Personal => 1,
            Step::Project => 2,
            Step::Details => 3,
        }
    }

    pub fn from_number(number: u8) -> Option<Step> {
        match number {
            1 => Some(Step::Personal),
            2 => Some(Step::Project),
            3 => Some(Step::Details),
            _ => None,
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            Step::Personal => "Personal Information",
            Step::Project => "Project Information",
            Step::Details => "Project Details",
        }
    }

    /// Fields that must pass before leaving this step.
    pub fn gated_fields(self) -> &'static [Field] {
        match self {
            Step::Personal => &[Field::Name, Field::Email, Field::College, Field::Department],
            Step::Project => &[Field::Domain, Field::ProjectType],
            Step::Details => &[Field::ProblemStatement, Field::HasTeam],
        }
    }

    pub fn is_first(self) -> bool {
        self == Step::Personal
    }

    pub fn is_last(self) -> bool {
        self == Step::Details
    }

    pub fn following(self) -> Step {
        Step::from_number(self.number() + 1).unwrap_or(self)
    }

    pub fn preceding(self) -> Step {
        Step::from_number(self.number().saturating_sub(1)).unwrap_or(self)
    }

    pub fn progress_percent(self) -> u8 {
        (f64::from(self.number()) / f64::from(Step::COUNT) * 100.0).round() as u8
    }
}

/// Tracks the active step and gates forward moves on that step's fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepController {
    current: Step,
}

impl StepController {
    pub fn current(&self) -> Step {
        self.current
    }

    /// Validates the active step's fields and advances when they all pass.
    /// On the last step a passing check leaves the step where it is.
    pub fn next(&mut self, values: &FormValues) -> Result<Step, ValidationErrors> {
        let errors = validate_fields(values, self.current.gated_fields());
        if !errors.is_empty() {
            log::debug!(
                "step {} blocked by {} field(s)",
                self.current.number(),
                errors.len()
            );
            return Err(errors);
        }
        self.current = self.current.following();
        Ok(self.current)
    }

    pub fn previous(&mut self) -> Step {
        self.current = self.current.preceding();
        self.current
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn step_one_values() -> FormValues {
        FormValues {
            name: "Al".to_string(),
            email: "a@b.com".to_string(),
            college: "XY".to_string(),
            department: "cs".to_string(),
            ..FormValues::default()
        }
    }

    #[test]
    fn step_one_advances_once_its_fields_pass() {
        let mut steps = StepController::default();
        assert_eq!(steps.next(&step_one_values()), Ok(Step::Project));
        assert_eq!(steps.current().number(), 2);
    }

    #[test]
    fn step_one_blocks_until_every_gated_field_passes() {
        let mut steps = StepController::default();
        let mut values = FormValues::default();

        let errors = steps.next(&values).expect_err("empty step one");
        assert_eq!(
            errors.fields().collect::<Vec<_>>(),
            vec![Field::Name, Field::Email, Field::College, Field::Department]
        );
        assert_eq!(steps.current(), Step::Personal);

        values = FormValues {
            department: String::new(),
            ..step_one_values()
        };
        let errors = steps.next(&values).expect_err("no department");
        assert_eq!(errors.fields().collect::<Vec<_>>(), vec![Field::Department]);
        assert_eq!(steps.current(), Step::Personal);
    }

    #[test]
    fn later_step_fields_do_not_gate_earlier_steps() {
        let mut steps = StepController::default();
        let values = FormValues {
            problem_statement: "short".to_string(),
            ..step_one_values()
        };
        assert_eq!(steps.next(&values), Ok(Step::Project));
    }

    #[test]
    fn previous_is_unconditional_and_clamped() {
        let mut steps = StepController::default();
        assert_eq!(steps.previous(), Step::Personal);

        steps.next(&step_one_values()).expect("advance");
        assert_eq!(steps.previous(), Step::Personal);
    }

    #[test]
    fn next_on_last_step_stays_put() {
        let mut steps = StepController::default();
        let values = FormValues {
            domain: "iot".to_string(),
            project_type: "mini".to_string(),
            problem_statement: "A smart irrigation controller".to_string(),
            ..step_one_values()
        };
        assert_eq!(steps.next(&values), Ok(Step::Project));
        assert_eq!(steps.next(&values), Ok(Step::Details));
        assert_eq!(steps.next(&values), Ok(Step::Details));
    }

    #[test]
    fn progress_rounds_to_whole_percent() {
        assert_eq!(Step::Personal.progress_percent(), 33);
        assert_eq!(Step::Project.progress_percent(), 67);
        assert_eq!(Step::Details.progress_percent(), 100);
        assert_eq!(Step::from_number(0), None);
        assert_eq!(Step::from_number(4), None);
    }
}
