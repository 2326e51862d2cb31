//! Initial records loaded into a fresh store

use crate::taxonomy::OrganizationType;
use crate::types::ExperienceRecord;

/// The record every deployment starts with unless a seed file overrides it
pub fn default_seed() -> Vec<ExperienceRecord> {
    vec![ExperienceRecord {
        id: "1".to_string(),
        company_name: "IBM".to_string(),
        start_date: "2017-07-01".to_string(),
        end_date: "2018-03-01".to_string(),
        job_title: "Global Technology Services: Solutions, Del, & Transf.".to_string(),
        job_summary: "Anthem Healthcare z/OS Mainframe Administrator and State Street Investment Bank Help Desk Admin".to_string(),
        job_description: "Level 1.5 CTS Agent, administrator rights to remote into State Street virtual desktops and physical machines after initial troubleshooting as failed on other teams. Mainly services the U.S. and India. Support Active Directory and configuration of multiple server types. Support IBM mainframe z/OS systems. Write troubleshooting and DevOps documentation and SLA status templates. Deploy and maintain Windows 10 and Ent. Server 2012-16 Deploy Microsoft Office 365 via local source and configuration manager. Development of applications for z/OS utilizing various databases".to_string(),
        skills_required: "z/OS, MVS, JCL, SDSF, VSAM, Endevor, SyncSort, MQSeries, SQL, SPUFI, FileAid, Xpediter".to_string(),
        detailed_achievements: "Master the Mainframe Part 2 Competitor".to_string(),
        kind: OrganizationType::Ibm,
    }]
}

/// Parse a JSON array of records
pub fn parse_seed(json: &str) -> Result<Vec<ExperienceRecord>, serde_json::Error> {
    serde_json::from_str(json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_seed() {
        let seed = default_seed();
        assert_eq!(seed.len(), 1);
        assert_eq!(seed[0].id, "1");
        assert_eq!(seed[0].kind, OrganizationType::Ibm);
    }

    #[test]
    fn test_parse_seed() {
        let json = r#"[
            {"id": "a", "companyName": "Trimble", "type": "TRIMBLE"},
            {"id": "b", "companyName": "Igadi", "type": "IGADI", "jobTitle": "Engineer"}
        ]"#;
        let seed = parse_seed(json).unwrap();
        assert_eq!(seed.len(), 2);
        assert_eq!(seed[1].job_title, "Engineer");
        assert_eq!(seed[1].kind, OrganizationType::Igadi);
        assert_eq!(seed[0].end_date, "");
    }

    #[test]
    fn test_parse_seed_accepts_ordinals() {
        let seed = parse_seed(r#"[{"id": "a", "type": 1}, {"id": "b", "type": "421HEMP"}, {"id": "c"}]"#).unwrap();
        assert_eq!(seed[0].kind, OrganizationType::Trimble);
        assert_eq!(seed[1].kind, OrganizationType::MrsGreensRemedies);
        assert_eq!(seed[2].kind, OrganizationType::Ibm);
    }

    #[test]
    fn test_parse_seed_rejects_unknown_type() {
        assert!(parse_seed(r#"[{"id": "a", "type": "ACME"}]"#).is_err());
        assert!(parse_seed(r#"[{"id": "a", "type": 6}]"#).is_err());
        assert!(parse_seed(r#"[{"id": "a", "type": true}]"#).is_err());
    }
}
