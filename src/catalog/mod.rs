//! The candidate catalog model: what a municipal service looks like before it
//! lands in storage.

pub mod builtin;
pub mod source;

use std::fmt::{self, Display, Formatter};

use sea_orm::{sea_query, DeriveActiveEnum, EnumIter, Iden};

use crate::prelude::*;

#[derive(
    Deserialize, Debug, Serialize, PartialEq, Eq, Copy, Clone, DeriveActiveEnum, EnumIter, Iden,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::N(16))")]
/// Whether a service merely displays information or collects a structured submission
pub enum ServiceKind {
    #[sea_orm(string_value = "informational")]
    Informational,
    #[sea_orm(string_value = "data_collecting")]
    DataCollecting,
}

impl Display for ServiceKind {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Self::Informational => write!(f, "informational"),
            Self::DataCollecting => write!(f, "data-collecting"),
        }
    }
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, JsonSchema)]
/// One input field of a citizen-facing submission form
pub struct FormField {
    pub id: String,
    /// Free-form widget type: text, date, number, select, textarea...
    #[serde(rename = "type")]
    pub field_type: String,
    pub label: String,
    #[serde(default)]
    pub required: bool,
    /// Only for enumerated fields
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, Eq, JsonSchema)]
pub struct FormSchema {
    pub fields: Vec<FormField>,
}

fn default_priority() -> i32 {
    3
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq, JsonSchema)]
/// A candidate catalog entry, as found in the template data files
pub struct ServiceTemplate {
    /// Stable natural key, unique across the whole catalog. Renaming a service
    /// must not create a duplicate, so lookups never go through `name`.
    pub code: String,
    pub name: String,
    pub description: String,
    /// Free-text grouping label, eg "Saúde"
    pub category: String,
    /// Resolved against the department table at reconciliation time
    pub department_code: String,
    pub kind: ServiceKind,
    /// Which workflow module handles submissions; only set for data-collecting services
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub module_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub form_schema: Option<FormSchema>,
    #[serde(default)]
    pub requires_documents: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub required_documents: Option<Vec<String>>,
    /// SLA in business days, 0 means same-day
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_days: Option<i32>,
    #[serde(default = "default_priority")]
    pub priority: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl ServiceTemplate {
    /// Checks the shape rules before a candidate is allowed near storage
    pub fn validate(&self) -> Result<(), Error> {
        if self.code.trim().is_empty() {
            return Err(Error::InvalidTemplate(format!(
                "'{}' has an empty code",
                self.name
            )));
        }
        if !(1..=5).contains(&self.priority) {
            return Err(Error::InvalidTemplate(format!(
                "'{}' has priority {} outside 1..=5",
                self.code, self.priority
            )));
        }
        match self.kind {
            ServiceKind::Informational => {
                if self.module_type.is_some() || self.form_schema.is_some() {
                    return Err(Error::InvalidTemplate(format!(
                        "'{}' is informational but carries a module or form schema",
                        self.code
                    )));
                }
            }
            ServiceKind::DataCollecting => {
                if self.module_type.is_none() {
                    return Err(Error::InvalidTemplate(format!(
                        "'{}' collects data but names no workflow module",
                        self.code
                    )));
                }
                match &self.form_schema {
                    Some(schema) if !schema.fields.is_empty() => {}
                    _ => {
                        return Err(Error::InvalidTemplate(format!(
                            "'{}' collects data but has no form fields",
                            self.code
                        )))
                    }
                }
            }
        }
        if self.requires_documents
            && !matches!(&self.required_documents, Some(docs) if !docs.is_empty())
        {
            return Err(Error::InvalidTemplate(format!(
                "'{}' requires documents but lists none",
                self.code
            )));
        }
        Ok(())
    }

    /// JSON representation of the form schema for the storage layer
    pub fn form_schema_json(&self) -> Result<Option<Json>, Error> {
        self.form_schema
            .as_ref()
            .map(serde_json::to_value)
            .transpose()
            .map_err(Error::from)
    }

    pub fn required_documents_json(&self) -> Result<Option<Json>, Error> {
        self.required_documents
            .as_ref()
            .map(serde_json::to_value)
            .transpose()
            .map_err(Error::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    pub(crate) fn test_template() -> ServiceTemplate {
        ServiceTemplate {
            code: "saude-teste".to_string(),
            name: "Serviço de Teste".to_string(),
            description: "Serviço usado nos testes".to_string(),
            category: "Saúde".to_string(),
            department_code: "SAUDE".to_string(),
            kind: ServiceKind::DataCollecting,
            module_type: Some("TESTE".to_string()),
            form_schema: Some(FormSchema {
                fields: vec![FormField {
                    id: "nome".to_string(),
                    field_type: "text".to_string(),
                    label: "Nome completo".to_string(),
                    required: true,
                    options: None,
                }],
            }),
            requires_documents: false,
            required_documents: None,
            estimated_days: Some(5),
            priority: 3,
            icon: None,
            color: None,
        }
    }

    #[test]
    fn test_valid_template() {
        test_template().validate().expect("Template should be valid");
    }

    #[test]
    fn test_informational_must_not_carry_module_or_form() {
        let mut template = test_template();
        template.kind = ServiceKind::Informational;
        assert!(template.validate().is_err());

        template.form_schema = None;
        assert!(template.validate().is_err());

        template.module_type = None;
        template.validate().expect("Bare informational template should be valid");
    }

    #[test]
    fn test_data_collecting_needs_module_and_fields() {
        let mut template = test_template();
        template.module_type = None;
        assert!(template.validate().is_err());

        let mut template = test_template();
        template.form_schema = Some(FormSchema { fields: vec![] });
        assert!(template.validate().is_err());

        let mut template = test_template();
        template.form_schema = None;
        assert!(template.validate().is_err());
    }

    #[test]
    fn test_priority_bounds() {
        let mut template = test_template();
        template.priority = 0;
        assert!(template.validate().is_err());
        template.priority = 6;
        assert!(template.validate().is_err());
        template.priority = 5;
        assert!(template.validate().is_ok());
    }

    #[test]
    fn test_requires_documents_needs_a_list() {
        let mut template = test_template();
        template.requires_documents = true;
        assert!(template.validate().is_err());
        template.required_documents = Some(vec![]);
        assert!(template.validate().is_err());
        template.required_documents = Some(vec!["Documento de identidade".to_string()]);
        assert!(template.validate().is_ok());
    }

    #[test]
    fn test_parse_template_from_json() {
        let raw = r#"{
            "code": "saude-cartao-sus",
            "name": "Emissão do Cartão SUS",
            "description": "Solicitação de primeira via do Cartão SUS",
            "category": "Saúde",
            "department_code": "SAUDE",
            "kind": "data_collecting",
            "module_type": "CARTAO_SUS",
            "form_schema": {
                "fields": [
                    {"id": "nome", "type": "text", "label": "Nome completo", "required": true}
                ]
            },
            "requires_documents": true,
            "required_documents": ["Documento de identidade"]
        }"#;
        let template: ServiceTemplate =
            serde_json::from_str(raw).expect("Failed to parse template");
        assert_eq!(template.kind, ServiceKind::DataCollecting);
        // serde defaults
        assert_eq!(template.priority, 3);
        assert!(template.estimated_days.is_none());
        template.validate().expect("Parsed template should be valid");
    }

    #[test]
    fn test_servicekind_display() {
        assert_eq!(format!("{}", ServiceKind::Informational), "informational");
        assert_eq!(format!("{}", ServiceKind::DataCollecting), "data-collecting");
    }
}
