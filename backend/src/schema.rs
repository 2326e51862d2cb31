//! Schema Adapter
//!
//! Static mapping between the wire shapes of the API and the core store
//! types, the declared schema (objects, input objects, enum), and the typed
//! query/mutation dispatcher shared by every transport route.

use experience_core::{
    CreateExperienceRequest, ExperienceRecord, ExperienceStore, OrganizationRef, OrganizationType,
    StoreError,
};
use serde::{Deserialize, Serialize};

// ============================================================
// WIRE SHAPES
// ============================================================

/// `Experience` object as returned to callers
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExperiencePayload {
    pub id: String,
    pub company_name: String,
    pub start_date: String,
    pub end_date: String,
    pub job_title: String,
    pub job_summary: String,
    pub job_description: String,
    pub skills_required: String,
    pub detailed_achievements: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl From<ExperienceRecord> for ExperiencePayload {
    fn from(record: ExperienceRecord) -> Self {
        Self {
            kind: record.kind.as_str().to_string(),
            id: record.id,
            company_name: record.company_name,
            start_date: record.start_date,
            end_date: record.end_date,
            job_title: record.job_title,
            job_summary: record.job_summary,
            job_description: record.job_description,
            skills_required: record.skills_required,
            detailed_achievements: record.detailed_achievements,
        }
    }
}

/// `CreateExperienceRequest` input object as sent by callers
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateExperienceInput {
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

impl From<CreateExperienceInput> for CreateExperienceRequest {
    fn from(input: CreateExperienceInput) -> Self {
        Self {
            company_name: input.company_name,
            start_date: input.start_date,
            end_date: input.end_date,
            job_title: input.job_title,
            job_summary: input.job_summary,
            job_description: input.job_description,
            skills_required: input.skills_required,
            detailed_achievements: input.detailed_achievements,
            kind: input.kind,
        }
    }
}

// ============================================================
// SCHEMA DECLARATION
// ============================================================

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct FieldDecl {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub type_name: &'static str,
    pub nullable: bool,
}

impl FieldDecl {
    fn new(name: &'static str, type_name: &'static str, nullable: bool) -> Self {
        Self {
            name,
            type_name,
            nullable,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct TypeDecl {
    pub name: &'static str,
    pub fields: Vec<FieldDecl>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EnumDecl {
    pub name: &'static str,
    pub values: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
pub struct OperationDecl {
    pub name: &'static str,
    pub arguments: Vec<FieldDecl>,
    pub returns: &'static str,
}

/// The full declared API surface
#[derive(Debug, Clone, Serialize)]
pub struct SchemaDescriptor {
    pub objects: Vec<TypeDecl>,
    pub input_objects: Vec<TypeDecl>,
    pub enums: Vec<EnumDecl>,
    pub queries: Vec<OperationDecl>,
    pub mutations: Vec<OperationDecl>,
}

const TEXT_FIELDS: [&str; 8] = [
    "companyName",
    "startDate",
    "endDate",
    "jobTitle",
    "jobSummary",
    "jobDescription",
    "skillsRequired",
    "detailedAchievements",
];

pub fn describe() -> SchemaDescriptor {
    let mut object_fields = vec![FieldDecl::new("id", "ID", false)];
    object_fields.extend(TEXT_FIELDS.into_iter().map(|f| FieldDecl::new(f, "String", false)));
    object_fields.push(FieldDecl::new("type", "Type", false));

    let mut input_fields: Vec<FieldDecl> = TEXT_FIELDS
        .into_iter()
        .map(|f| FieldDecl::new(f, "String", true))
        .collect();
    input_fields.push(FieldDecl::new("type", "Type", true));

    SchemaDescriptor {
        objects: vec![TypeDecl {
            name: "Experience",
            fields: object_fields,
        }],
        input_objects: vec![TypeDecl {
            name: "CreateExperienceRequest",
            fields: input_fields,
        }],
        enums: vec![EnumDecl {
            name: "Type",
            values: OrganizationType::names().to_vec(),
        }],
        queries: vec![
            OperationDecl {
                name: "experience",
                arguments: vec![FieldDecl::new("id", "ID", false)],
                returns: "Experience",
            },
            OperationDecl {
                name: "experiences",
                arguments: vec![],
                returns: "[Experience!]!",
            },
        ],
        mutations: vec![OperationDecl {
            name: "createExperience",
            arguments: vec![FieldDecl::new("input", "CreateExperienceRequest", false)],
            returns: "Experience!",
        }],
    }
}

// ============================================================
// OPERATIONS
// ============================================================

/// A query or mutation against the store
#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "operation", rename_all = "camelCase")]
pub enum Operation {
    Experience { id: String },
    Experiences,
    CreateExperience { input: CreateExperienceInput },
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Experience { .. } => "experience",
            Operation::Experiences => "experiences",
            Operation::CreateExperience { .. } => "createExperience",
        }
    }
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum OperationOutput {
    One(Option<ExperiencePayload>),
    Many(Vec<ExperiencePayload>),
}

/// `experience(id)`: unknown ids resolve to `None`
pub fn experience(store: &ExperienceStore, id: &str) -> Option<ExperiencePayload> {
    match store.get(id) {
        Ok(record) => Some(record.into()),
        Err(_) => None,
    }
}

/// `experiences()`
pub fn experiences(store: &ExperienceStore) -> Vec<ExperiencePayload> {
    store.list().into_iter().map(ExperiencePayload::from).collect()
}

/// `createExperience(input)`
pub fn create_experience(
    store: &ExperienceStore,
    input: CreateExperienceInput,
) -> Result<ExperiencePayload, StoreError> {
    store.create(input.into()).map(ExperiencePayload::from)
}

pub fn execute(store: &ExperienceStore, operation: Operation) -> Result<OperationOutput, StoreError> {
    log::debug!("Executing operation {}", operation.name());
    match operation {
        Operation::Experience { id } => Ok(OperationOutput::One(experience(store, &id))),
        Operation::Experiences => Ok(OperationOutput::Many(experiences(store))),
        Operation::CreateExperience { input } => {
            create_experience(store, input).map(|payload| OperationOutput::One(Some(payload)))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use experience_core::default_seed;
    use serde_json::json;

    #[test]
    fn test_payload_mapping() {
        let record = ExperienceRecord::new("9", "Apollo", OrganizationType::ApolloDae);
        let payload = ExperiencePayload::from(record);
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["id"], "9");
        assert_eq!(json["companyName"], "Apollo");
        assert_eq!(json["type"], "APOLLODAE");
        assert_eq!(json["detailedAchievements"], "");
    }

    #[test]
    fn test_enum_declaration_follows_taxonomy() {
        let schema = describe();
        assert_eq!(schema.enums[0].name, "Type");
        assert_eq!(schema.enums[0].values, OrganizationType::names());
        assert_eq!(schema.objects[0].fields.len(), 10);
        assert_eq!(schema.input_objects[0].fields.len(), 9);
        assert!(schema.input_objects[0].fields.iter().all(|f| f.nullable));
        assert!(schema.input_objects[0].fields.iter().all(|f| f.name != "id"));
    }

    #[test]
    fn test_operation_parsing() {
        let op: Operation = serde_json::from_value(json!({"operation": "experience", "id": "1"})).unwrap();
        assert_eq!(op.name(), "experience");

        let op: Operation = serde_json::from_value(json!({"operation": "experiences"})).unwrap();
        assert!(matches!(op, Operation::Experiences));

        let op: Operation = serde_json::from_value(json!({
            "operation": "createExperience",
            "input": {"companyName": "Trimble", "type": 1}
        }))
        .unwrap();
        match op {
            Operation::CreateExperience { input } => {
                assert_eq!(input.kind, Some(OrganizationRef::Ordinal(1)));
            }
            other => panic!("unexpected operation {:?}", other),
        }
    }

    #[test]
    fn test_execute() {
        let store = ExperienceStore::with_seed(default_seed()).unwrap();

        let created = execute(
            &store,
            Operation::CreateExperience {
                input: CreateExperienceInput {
                    company_name: Some("Trimble".to_string()),
                    kind: Some(OrganizationRef::Name("TRIMBLE".to_string())),
                    ..CreateExperienceInput::default()
                },
            },
        )
        .unwrap();
        let OperationOutput::One(Some(created)) = created else {
            panic!("expected a single experience");
        };
        assert_eq!(created.kind, "TRIMBLE");

        let found = execute(&store, Operation::Experience { id: created.id.clone() }).unwrap();
        assert_eq!(found, OperationOutput::One(Some(created.clone())));

        let missing = execute(&store, Operation::Experience { id: "nope".to_string() }).unwrap();
        assert_eq!(missing, OperationOutput::One(None));

        match execute(&store, Operation::Experiences).unwrap() {
            OperationOutput::Many(all) => {
                assert_eq!(all.len(), 2);
                assert_eq!(all[0].id, "1");
                assert_eq!(all[1], created);
            }
            other => panic!("expected a list, got {:?}", other),
        }
    }

    #[test]
    fn test_execute_rejects_unknown_type() {
        let store = ExperienceStore::new();
        let result = execute(
            &store,
            Operation::CreateExperience {
                input: CreateExperienceInput {
                    kind: Some(OrganizationRef::Name("ACME".to_string())),
                    ..CreateExperienceInput::default()
                },
            },
        );
        assert_eq!(result, Err(StoreError::InvalidType("ACME".to_string())));
        assert!(store.is_empty());
    }
}
