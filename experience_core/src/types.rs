//! Experience Types
//!
//! The stored record and the request shape used to create one.

use crate::taxonomy::{deserialize_organization, OrganizationRef, OrganizationType};
use serde::{Deserialize, Serialize};

// ============================================================
// EXPERIENCE RECORD
// ============================================================

/// One employment-history entry
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperienceRecord {
    /// Assigned by the store, never reused
    pub id: String,
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    #[serde(default)]
    pub job_title: String,
    #[serde(default)]
    pub job_summary: String,
    #[serde(default)]
    pub job_description: String,
    #[serde(default)]
    pub skills_required: String,
    #[serde(default)]
    pub detailed_achievements: String,
    /// Read from a name or an ordinal, always written as the name
    #[serde(rename = "type", default, deserialize_with = "deserialize_organization")]
    pub kind: OrganizationType,
}

impl ExperienceRecord {
    pub fn new(id: &str, company_name: &str, kind: OrganizationType) -> Self {
        Self {
            id: id.to_string(),
            company_name: company_name.to_string(),
            start_date: String::new(),
            end_date: String::new(),
            job_title: String::new(),
            job_summary: String::new(),
            job_description: String::new(),
            skills_required: String::new(),
            detailed_achievements: String::new(),
            kind,
        }
    }

    /// Build a record from a request whose type has already been resolved
    pub(crate) fn from_request(id: String, request: CreateExperienceRequest, kind: OrganizationType) -> Self {
        Self {
            id,
            company_name: request.company_name.unwrap_or_default(),
            start_date: request.start_date.unwrap_or_default(),
            end_date: request.end_date.unwrap_or_default(),
            job_title: request.job_title.unwrap_or_default(),
            job_summary: request.job_summary.unwrap_or_default(),
            job_description: request.job_description.unwrap_or_default(),
            skills_required: request.skills_required.unwrap_or_default(),
            detailed_achievements: request.detailed_achievements.unwrap_or_default(),
            kind,
        }
    }
}

// ============================================================
// CREATE REQUEST
// ============================================================

/// Input for creating a record. Every field is optional; `kind` is validated
/// against the taxonomy by the store.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateExperienceRequest {
    pub company_name: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub job_title: Option<String>,
    pub job_summary: Option<String>,
    pub job_description: Option<String>,
    pub skills_required: Option<String>,
    pub detailed_achievements: Option<String>,
    #[serde(rename = "type")]
    pub kind: Option<OrganizationRef>,
}

impl CreateExperienceRequest {
    pub fn new(company_name: &str, kind: OrganizationType) -> Self {
        Self {
            company_name: Some(company_name.to_string()),
            kind: Some(kind.into()),
            ..Self::default()
        }
    }

    pub fn with_job_title(mut self, job_title: &str) -> Self {
        self.job_title = Some(job_title.to_string());
        self
    }

    pub fn with_dates(mut self, start_date: &str, end_date: &str) -> Self {
        self.start_date = Some(start_date.to_string());
        self.end_date = Some(end_date.to_string());
        self
    }

    pub fn with_kind(mut self, kind: OrganizationRef) -> Self {
        self.kind = Some(kind);
        self
    }
}
