//! The embedded literal catalog, used when no template data files are
//! available. Smaller than the full bundled set but enough to stand up a
//! working demo municipality.

use super::{FormField, FormSchema, ServiceKind, ServiceTemplate};

fn field(id: &str, field_type: &str, label: &str, required: bool) -> FormField {
    FormField {
        id: id.to_string(),
        field_type: field_type.to_string(),
        label: label.to_string(),
        required,
        options: None,
    }
}

fn select(id: &str, label: &str, required: bool, options: &[&str]) -> FormField {
    FormField {
        id: id.to_string(),
        field_type: "select".to_string(),
        label: label.to_string(),
        required,
        options: Some(options.iter().map(|opt| opt.to_string()).collect()),
    }
}

fn docs(list: &[&str]) -> Option<Vec<String>> {
    Some(list.iter().map(|doc| doc.to_string()).collect())
}

/// The fallback catalog. Every entry must satisfy
/// [ServiceTemplate::validate], there's a test for that.
pub fn catalog() -> Vec<ServiceTemplate> {
    vec![
        ServiceTemplate {
            code: "saude-agendamento-vacinacao".to_string(),
            name: "Agendamento de Vacinação".to_string(),
            description: "Agendamento de vacinas nas unidades básicas de saúde".to_string(),
            category: "Saúde".to_string(),
            department_code: "SAUDE".to_string(),
            kind: ServiceKind::DataCollecting,
            module_type: Some("VACINACAO".to_string()),
            form_schema: Some(FormSchema {
                fields: vec![
                    field("nome_completo", "text", "Nome completo", true),
                    field("data_nascimento", "date", "Data de nascimento", true),
                    field("cartao_sus", "text", "Número do Cartão SUS", false),
                    select(
                        "vacina",
                        "Vacina desejada",
                        true,
                        &["COVID-19", "Influenza", "Hepatite B", "Tétano"],
                    ),
                ],
            }),
            requires_documents: true,
            required_documents: docs(&["Documento de identidade", "Carteira de vacinação"]),
            estimated_days: Some(0),
            priority: 4,
            icon: Some("syringe".to_string()),
            color: Some("#0ea5e9".to_string()),
        },
        ServiceTemplate {
            code: "saude-horarios-unidades".to_string(),
            name: "Horários das Unidades de Saúde".to_string(),
            description: "Horários de funcionamento e endereços das unidades de saúde"
                .to_string(),
            category: "Saúde".to_string(),
            department_code: "SAUDE".to_string(),
            kind: ServiceKind::Informational,
            module_type: None,
            form_schema: None,
            requires_documents: false,
            required_documents: None,
            estimated_days: None,
            priority: 2,
            icon: Some("clock".to_string()),
            color: Some("#0ea5e9".to_string()),
        },
        ServiceTemplate {
            code: "educacao-matricula-escolar".to_string(),
            name: "Matrícula Escolar".to_string(),
            description: "Matrícula de alunos na rede municipal de ensino".to_string(),
            category: "Educação".to_string(),
            department_code: "EDUCACAO".to_string(),
            kind: ServiceKind::DataCollecting,
            module_type: Some("MATRICULA".to_string()),
            form_schema: Some(FormSchema {
                fields: vec![
                    field("nome_aluno", "text", "Nome do aluno", true),
                    field("data_nascimento", "date", "Data de nascimento", true),
                    select(
                        "serie",
                        "Série pretendida",
                        true,
                        &["Infantil", "1º ano", "2º ano", "3º ano", "4º ano", "5º ano"],
                    ),
                    field("nome_responsavel", "text", "Nome do responsável", true),
                    field("endereco", "text", "Endereço residencial", true),
                ],
            }),
            requires_documents: true,
            required_documents: docs(&["Certidão de nascimento", "Comprovante de residência"]),
            estimated_days: Some(10),
            priority: 5,
            icon: Some("graduation-cap".to_string()),
            color: Some("#8b5cf6".to_string()),
        },
        ServiceTemplate {
            code: "educacao-transporte-escolar".to_string(),
            name: "Transporte Escolar".to_string(),
            description: "Solicitação de vaga no transporte escolar municipal".to_string(),
            category: "Educação".to_string(),
            department_code: "EDUCACAO".to_string(),
            kind: ServiceKind::DataCollecting,
            module_type: Some("TRANSPORTE_ESCOLAR".to_string()),
            form_schema: Some(FormSchema {
                fields: vec![
                    field("nome_aluno", "text", "Nome do aluno", true),
                    field("escola", "text", "Escola", true),
                    field("endereco", "text", "Endereço residencial", true),
                    select("turno", "Turno", true, &["Manhã", "Tarde", "Noite"]),
                ],
            }),
            requires_documents: true,
            required_documents: docs(&["Comprovante de matrícula", "Comprovante de residência"]),
            estimated_days: Some(15),
            priority: 3,
            icon: Some("bus".to_string()),
            color: Some("#8b5cf6".to_string()),
        },
        ServiceTemplate {
            code: "assistencia-cadastro-cras".to_string(),
            name: "Cadastro no CRAS".to_string(),
            description: "Cadastro de famílias para atendimento no CRAS".to_string(),
            category: "Assistência Social".to_string(),
            department_code: "ASSISTENCIA_SOCIAL".to_string(),
            kind: ServiceKind::DataCollecting,
            module_type: Some("ATENDIMENTO_SOCIAL".to_string()),
            form_schema: Some(FormSchema {
                fields: vec![
                    field("nome_completo", "text", "Nome completo", true),
                    field("nis", "text", "Número do NIS", false),
                    field("renda_familiar", "number", "Renda familiar mensal", true),
                    field("membros_familia", "number", "Pessoas na família", true),
                ],
            }),
            requires_documents: true,
            required_documents: docs(&["Documento de identidade", "Comprovante de residência"]),
            estimated_days: Some(5),
            priority: 5,
            icon: Some("users".to_string()),
            color: Some("#f59e0b".to_string()),
        },
        ServiceTemplate {
            code: "cultura-programacao-eventos".to_string(),
            name: "Programação Cultural".to_string(),
            description: "Agenda de eventos culturais do município".to_string(),
            category: "Cultura".to_string(),
            department_code: "CULTURA".to_string(),
            kind: ServiceKind::Informational,
            module_type: None,
            form_schema: None,
            requires_documents: false,
            required_documents: None,
            estimated_days: None,
            priority: 1,
            icon: Some("theater".to_string()),
            color: Some("#ec4899".to_string()),
        },
        ServiceTemplate {
            code: "meio-ambiente-poda-arvores".to_string(),
            name: "Poda de Árvores".to_string(),
            description: "Solicitação de poda ou remoção de árvores em via pública".to_string(),
            category: "Meio Ambiente".to_string(),
            department_code: "MEIO_AMBIENTE".to_string(),
            kind: ServiceKind::DataCollecting,
            module_type: Some("PODA_ARVORE".to_string()),
            form_schema: Some(FormSchema {
                fields: vec![
                    field("endereco", "text", "Endereço da árvore", true),
                    field("justificativa", "textarea", "Motivo da solicitação", true),
                ],
            }),
            requires_documents: false,
            required_documents: None,
            estimated_days: Some(20),
            priority: 2,
            icon: Some("tree".to_string()),
            color: Some("#22c55e".to_string()),
        },
        ServiceTemplate {
            code: "esportes-reserva-quadras".to_string(),
            name: "Reserva de Quadras Esportivas".to_string(),
            description: "Reserva de quadras e ginásios municipais".to_string(),
            category: "Esportes".to_string(),
            department_code: "ESPORTES".to_string(),
            kind: ServiceKind::DataCollecting,
            module_type: Some("RESERVA_ESPACO".to_string()),
            form_schema: Some(FormSchema {
                fields: vec![
                    field("nome_completo", "text", "Nome completo", true),
                    select(
                        "quadra",
                        "Espaço desejado",
                        true,
                        &["Quadra Poliesportiva", "Ginásio Municipal", "Campo Society"],
                    ),
                    field("data", "date", "Data da reserva", true),
                    select(
                        "horario",
                        "Horário",
                        true,
                        &["08:00", "10:00", "14:00", "16:00", "19:00"],
                    ),
                ],
            }),
            requires_documents: false,
            required_documents: None,
            estimated_days: Some(2),
            priority: 2,
            icon: Some("volleyball".to_string()),
            color: Some("#f97316".to_string()),
        },
    ]
}

#[cfg(test)]
mod tests {
    use std::collections::HashSet;

    use super::*;

    #[test]
    fn test_builtin_catalog_is_valid() {
        for template in catalog() {
            template
                .validate()
                .unwrap_or_else(|err| panic!("'{}' failed validation: {:?}", template.code, err));
        }
    }

    /// informational entries must not carry a workflow module or a form
    #[test]
    fn test_builtin_catalog_kind_invariant() {
        for template in catalog() {
            if template.kind == ServiceKind::Informational {
                assert!(template.module_type.is_none(), "'{}'", template.code);
                assert!(template.form_schema.is_none(), "'{}'", template.code);
            } else {
                assert!(template.module_type.is_some(), "'{}'", template.code);
            }
        }
    }

    #[test]
    fn test_builtin_catalog_codes_are_unique() {
        let templates = catalog();
        let codes: HashSet<&str> = templates.iter().map(|t| t.code.as_str()).collect();
        assert_eq!(codes.len(), templates.len());
    }
}
