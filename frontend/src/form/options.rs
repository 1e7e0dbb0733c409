use std::collections::BTreeSet;
use std::str::FromStr;

use serde::Serialize;
use strum::{EnumIter, EnumMessage, EnumString, IntoEnumIterator, IntoStaticStr};

/// A closed set of options rendered as a select, radio group or checklist.
///
/// `id` is the value that travels through the DOM and the submitted payload,
/// `label` is what the visitor reads.
pub trait Choice:
    Copy + Ord + IntoEnumIterator + EnumMessage + FromStr + Into<&'static str> + 'static
{
    fn id(self) -> &'static str {
        self.into()
    }

    fn label(self) -> &'static str {
        self.get_message().unwrap_or_else(|| self.id())
    }

    fn from_id(id: &str) -> Option<Self> {
        id.parse().ok()
    }

    fn all() -> Vec<Self> {
        Self::iter().collect()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter, EnumString, EnumMessage, IntoStaticStr, Serialize)]
#[serde(into = "&'static str")]
pub enum Department {
    #[strum(serialize = "cs", message = "Computer Science (CS)")]
    Cs,
    #[strum(serialize = "it", message = "Information Technology (IT)")]
    It,
    #[strum(serialize = "aiml", message = "Artificial Intelligence & Machine Learning (AIML)")]
    Aiml,
    #[strum(serialize = "aids", message = "Artificial Intelligence & Data Science (AIDS)")]
    Aids,
    #[strum(serialize = "other", message = "Other")]
    Other,
}

impl Choice for Department {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter, EnumString, EnumMessage, IntoStaticStr, Serialize)]
#[serde(into = "&'static str")]
pub enum Domain {
    #[strum(serialize = "web-dev", message = "Web Development")]
    WebDev,
    #[strum(serialize = "mobile-app", message = "Mobile App Development")]
    MobileApp,
    #[strum(serialize = "ai-ml", message = "AI/ML")]
    AiMl,
    #[strum(serialize = "data-science", message = "Data Science")]
    DataScience,
    #[strum(serialize = "cyber-security", message = "Cyber Security")]
    CyberSecurity,
    #[strum(serialize = "iot", message = "Internet of Things (IoT)")]
    Iot,
    #[strum(serialize = "blockchain", message = "Blockchain")]
    Blockchain,
    #[strum(serialize = "other", message = "Other")]
    Other,
}

impl Choice for Domain {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter, EnumString, EnumMessage, IntoStaticStr, Serialize)]
#[serde(into = "&'static str")]
pub enum ProjectType {
    #[strum(serialize = "mini", message = "Mini Project")]
    Mini,
    #[strum(serialize = "major", message = "Major Project")]
    Major,
    #[strum(serialize = "final-year", message = "Final Year Project")]
    FinalYear,
    #[strum(serialize = "research", message = "Research-based Project")]
    Research,
    #[strum(serialize = "other", message = "Other")]
    Other,
}

impl Choice for ProjectType {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter, EnumString, EnumMessage, IntoStaticStr, Serialize)]
#[serde(into = "&'static str")]
pub enum HasTeam {
    #[strum(serialize = "yes", message = "Yes")]
    Yes,
    #[strum(serialize = "no", message = "No")]
    No,
}

impl Choice for HasTeam {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter, EnumString, EnumMessage, IntoStaticStr, Serialize)]
#[serde(into = "&'static str")]
pub enum TeamSize {
    #[strum(serialize = "2", message = "2 members")]
    Two,
    #[strum(serialize = "3", message = "3 members")]
    Three,
    #[strum(serialize = "4", message = "4 members")]
    Four,
    #[strum(serialize = "5+", message = "5+ members")]
    FivePlus,
}

impl Choice for TeamSize {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter, EnumString, EnumMessage, IntoStaticStr, Serialize)]
#[serde(into = "&'static str")]
pub enum Technology {
    #[strum(serialize = "react", message = "React.js")]
    React,
    #[strum(serialize = "angular", message = "Angular")]
    Angular,
    #[strum(serialize = "vue", message = "Vue.js")]
    Vue,
    #[strum(serialize = "node", message = "Node.js")]
    Node,
    #[strum(serialize = "python", message = "Python")]
    Python,
    #[strum(serialize = "django", message = "Django")]
    Django,
    #[strum(serialize = "flutter", message = "Flutter")]
    Flutter,
    #[strum(serialize = "reactNative", message = "React Native")]
    ReactNative,
    #[strum(serialize = "tensorflow", message = "TensorFlow")]
    TensorFlow,
    #[strum(serialize = "pytorch", message = "PyTorch")]
    PyTorch,
}

impl Choice for Technology {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter, EnumString, EnumMessage, IntoStaticStr, Serialize)]
#[serde(into = "&'static str")]
pub enum ExtraRequirement {
    #[strum(serialize = "hosting", message = "Hosting Setup")]
    Hosting,
    #[strum(serialize = "report", message = "Project Report")]
    Report,
    #[strum(serialize = "presentation", message = "Presentation Slides")]
    Presentation,
    #[strum(serialize = "documentation", message = "Technical Documentation")]
    Documentation,
    #[strum(serialize = "testing", message = "Testing & QA")]
    Testing,
}

impl Choice for ExtraRequirement {}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, EnumIter, EnumString, EnumMessage, IntoStaticStr, Serialize)]
#[serde(into = "&'static str")]
pub enum ContactSubject {
    #[strum(serialize = "general", message = "General Query")]
    General,
    #[strum(serialize = "mentor", message = "Mentor Inquiry")]
    Mentor,
    #[strum(serialize = "partnership", message = "Partnership Opportunity")]
    Partnership,
    #[strum(serialize = "feedback", message = "Feedback")]
    Feedback,
}

impl Choice for ContactSubject {}

/// The checked subset of a checklist. Iteration follows declaration order,
/// not click order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Checklist<T: Choice + Serialize> {
    selected: BTreeSet<T>,
}

impl<T: Choice + Serialize> Default for Checklist<T> {
    fn default() -> Self {
        Self {
            selected: BTreeSet::new(),
        }
    }
}

impl<T: Choice + Serialize> Checklist<T> {
    pub fn set(&mut self, item: T, checked: bool) {
        if checked {
            self.selected.insert(item);
        } else {
            self.selected.remove(&item);
        }
    }

    pub fn contains(&self, item: T) -> bool {
        self.selected.contains(&item)
    }

    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }

    pub fn len(&self) -> usize {
        self.selected.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = T> + '_ {
        self.selected.iter().copied()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn ids_round_trip_through_from_id() {
        for domain in Domain::all() {
            assert_eq!(Domain::from_id(domain.id()), Some(domain));
        }
        assert_eq!(TeamSize::from_id("5+"), Some(TeamSize::FivePlus));
        assert_eq!(Technology::from_id("reactNative"), Some(Technology::ReactNative));
    }

    #[test]
    fn unknown_or_empty_ids_are_rejected() {
        assert_eq!(Department::from_id(""), None);
        assert_eq!(Department::from_id("CS"), None);
        assert_eq!(ProjectType::from_id("capstone"), None);
    }

    #[test]
    fn labels_come_from_messages() {
        assert_eq!(Department::Aiml.label(), "Artificial Intelligence & Machine Learning (AIML)");
        assert_eq!(ExtraRequirement::Testing.label(), "Testing & QA");
        assert_eq!(ContactSubject::all().len(), 4);
    }

    #[test]
    fn checklist_keeps_declaration_order_and_ignores_repeats() {
        let mut techs = Checklist::<Technology>::default();
        techs.set(Technology::PyTorch, true);
        techs.set(Technology::React, true);
        techs.set(Technology::React, true);
        techs.set(Technology::Vue, true);
        techs.set(Technology::Vue, false);

        assert_eq!(techs.iter().collect::<Vec<_>>(), vec![Technology::React, Technology::PyTorch]);
        assert_eq!(techs.len(), 2);
        assert!(!techs.contains(Technology::Vue));
    }

    #[test]
    fn checklist_serializes_as_ids() {
        let mut reqs = Checklist::<ExtraRequirement>::default();
        reqs.set(ExtraRequirement::Report, true);
        reqs.set(ExtraRequirement::Hosting, true);

        let json = serde_json::to_string(&reqs).expect("serialize");
        assert_eq!(json, r#"["hosting","report"]"#);
    }
}
