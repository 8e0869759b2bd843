//! Makes the stored catalog match the candidate list, one template at a time.
//!
//! Strictly sequential: each candidate's storage round-trip completes before
//! the next begins, so writes within a run are totally ordered. A bad
//! candidate never aborts the run, it lands in a counter instead.

use sea_orm::ActiveValue::Set;

use crate::prelude::*;

/// What happened to a single candidate
#[derive(Debug, PartialEq, Eq)]
enum Outcome {
    Created,
    Updated,
    Unchanged,
    SkippedMissingDepartment,
}

/// Counters for one seed run. `total()` always equals the candidate count.
#[derive(Debug, Default, PartialEq, Eq, Serialize)]
pub struct SeedSummary {
    pub created: usize,
    pub updated: usize,
    pub unchanged: usize,
    pub skipped: usize,
    pub errors: usize,
}

impl SeedSummary {
    pub fn total(&self) -> usize {
        self.created + self.updated + self.unchanged + self.skipped + self.errors
    }
}

/// Reconcile the candidate catalog into storage for one tenant.
///
/// Policy is update-on-match keyed by `code`: an existing record gets its
/// mutable fields overwritten, a clean reapply is reported as unchanged and
/// writes nothing. Records are never deleted here.
pub async fn reconcile_catalog(
    db: &DatabaseConnection,
    tenant: &str,
    candidates: &[ServiceTemplate],
) -> Result<SeedSummary, Error> {
    let mut summary = SeedSummary::default();

    for candidate in candidates {
        match reconcile_one(db, tenant, candidate).await {
            Ok(Outcome::Created) => summary.created += 1,
            Ok(Outcome::Updated) => summary.updated += 1,
            Ok(Outcome::Unchanged) => summary.unchanged += 1,
            Ok(Outcome::SkippedMissingDepartment) => summary.skipped += 1,
            Err(err) => {
                error!("Failed to reconcile '{}': {:?}", candidate.code, err);
                summary.errors += 1;
            }
        }
    }

    info!(
        "Reconciled {} candidates for tenant '{}': {:?}",
        summary.total(),
        tenant,
        summary
    );
    Ok(summary)
}

async fn reconcile_one(
    db: &DatabaseConnection,
    tenant: &str,
    candidate: &ServiceTemplate,
) -> Result<Outcome, Error> {
    candidate.validate()?;

    let department =
        match entities::department::Model::find_by_code(&candidate.department_code, tenant, db)
            .await?
        {
            Some(val) => val,
            None => {
                // department provisioning may lag catalog updates, so this is
                // a skip rather than an error
                warn!(
                    "Department '{}' not found for '{}', skipping",
                    candidate.department_code, candidate.code
                );
                return Ok(Outcome::SkippedMissingDepartment);
            }
        };

    match entities::service_template::Model::find_by_code(&candidate.code, db).await? {
        Some(existing) => {
            let mut model = existing.into_active_model();

            model.tenant.set_if_not_equals(tenant.to_string());
            model.department_id.set_if_not_equals(department.id);
            model.name.set_if_not_equals(candidate.name.clone());
            model
                .description
                .set_if_not_equals(candidate.description.clone());
            model.category.set_if_not_equals(candidate.category.clone());
            model.kind.set_if_not_equals(candidate.kind);
            model
                .module_type
                .set_if_not_equals(candidate.module_type.clone());
            model
                .form_schema
                .set_if_not_equals(candidate.form_schema_json()?);
            model
                .requires_documents
                .set_if_not_equals(candidate.requires_documents);
            model
                .required_documents
                .set_if_not_equals(candidate.required_documents_json()?);
            model
                .estimated_days
                .set_if_not_equals(candidate.estimated_days);
            model.priority.set_if_not_equals(candidate.priority);
            model.icon.set_if_not_equals(candidate.icon.clone());
            model.color.set_if_not_equals(candidate.color.clone());

            if model.is_changed() {
                model.last_updated = Set(Utc::now());
                debug!("Updating '{}'", candidate.code);
                model.save(db).await?;
                Ok(Outcome::Updated)
            } else {
                debug!("No changes to '{}'", candidate.code);
                Ok(Outcome::Unchanged)
            }
        }
        None => {
            let model =
                entities::service_template::Model::from_template(candidate, department.id, tenant)?;
            info!("Creating '{}' ({})", model.code, model.name);
            model.into_active_model().insert(db).await?;
            Ok(Outcome::Created)
        }
    }
}
