use chrono::NaiveDate;
use serde::Serialize;

use super::files::FileDescriptor;
use super::options::{Checklist, Department, Domain, ExtraRequirement, ProjectType, TeamSize, Technology};

/// A project request that passed validation.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectRequestPayload {
    pub applicant: Applicant,
    pub project: ProjectInfo,
    pub details: ProjectDetails,
    pub attachments: Vec<FileDescriptor>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Applicant {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    pub college: String,
    pub department: Department,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectInfo {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub domain: Domain,
    pub project_type: ProjectType,
    pub technologies: Checklist<Technology>,
    pub custom_technologies: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDetails {
    pub problem_statement: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deadline: Option<NaiveDate>,
    pub team: Team,
    pub extra_requirements: Checklist<ExtraRequirement>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_info: Option<String>,
}

/// Team size only exists for group projects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "hasTeam")]
pub enum Team {
    #[serde(rename = "no")]
    Solo,
    #[serde(rename = "yes")]
    Group {
        #[serde(rename = "teamSize", skip_serializing_if = "Option::is_none")]
        size: Option<TeamSize>,
    },
}
