//! Human-readable run summaries for the operator driving a seed run.

use sea_orm::{QueryOrder, QuerySelect};

use crate::prelude::*;
use crate::reconcile::SeedSummary;

/// Percentage of each kind over the whole candidate list, stored or not
pub fn kind_percentages(candidates: &[ServiceTemplate]) -> Vec<(ServiceKind, f64)> {
    let total = candidates.len();
    if total == 0 {
        return Vec::new();
    }
    let data_collecting = candidates
        .iter()
        .filter(|candidate| candidate.kind == ServiceKind::DataCollecting)
        .count();
    vec![
        (
            ServiceKind::Informational,
            ((total - data_collecting) as f64 / total as f64) * 100.0,
        ),
        (
            ServiceKind::DataCollecting,
            (data_collecting as f64 / total as f64) * 100.0,
        ),
    ]
}

/// Per-category totals straight from storage, so the numbers are cumulative
/// across every historical run, not just this one.
pub async fn category_totals(
    db: &DatabaseConnection,
    tenant: &str,
) -> Result<Vec<(String, i64)>, Error> {
    entities::service_template::Entity::find()
        .select_only()
        .column(entities::service_template::Column::Category)
        .column_as(entities::service_template::Column::Id.count(), "total")
        .filter(entities::service_template::Column::Tenant.eq(tenant))
        .group_by(entities::service_template::Column::Category)
        .order_by_asc(entities::service_template::Column::Category)
        .into_tuple()
        .all(db)
        .await
        .map_err(Error::from)
}

pub fn print_summary(summary: &SeedSummary, candidates: &[ServiceTemplate]) {
    println!("Seed run complete, {} candidates", summary.total());
    println!("  created:   {}", summary.created);
    println!("  updated:   {}", summary.updated);
    println!("  unchanged: {}", summary.unchanged);
    println!("  skipped:   {}", summary.skipped);
    println!("  errors:    {}", summary.errors);

    for (kind, percentage) in kind_percentages(candidates) {
        println!("  {}: {:.1}%", kind, percentage);
    }
}

pub fn print_category_totals(totals: &[(String, i64)]) {
    if totals.is_empty() {
        return;
    }
    println!("Stored templates by category:");
    for (category, total) in totals {
        println!("  {}: {}", category, total);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin;
    use crate::db::tests::test_setup;
    use crate::reconcile::reconcile_catalog;

    #[test]
    fn test_kind_percentages() {
        let catalog = builtin::catalog();
        let percentages = kind_percentages(&catalog);
        assert_eq!(percentages.len(), 2);

        let total: f64 = percentages.iter().map(|(_, pct)| pct).sum();
        assert!((total - 100.0).abs() < f64::EPSILON);

        let informational = catalog
            .iter()
            .filter(|t| t.kind == ServiceKind::Informational)
            .count();
        let expected = (informational as f64 / catalog.len() as f64) * 100.0;
        assert_eq!(percentages[0], (ServiceKind::Informational, expected));
    }

    #[test]
    fn test_kind_percentages_empty() {
        assert!(kind_percentages(&[]).is_empty());
    }

    #[tokio::test]
    async fn test_category_totals() {
        let (db, config) = test_setup().await.expect("Failed to start test harness");

        let catalog = builtin::catalog();
        let summary = reconcile_catalog(db.as_ref(), &config.tenant, &catalog)
            .await
            .expect("Failed to reconcile");

        let totals = category_totals(db.as_ref(), &config.tenant)
            .await
            .expect("Failed to query category totals");

        let stored: i64 = totals.iter().map(|(_, total)| total).sum();
        assert_eq!(stored as usize, summary.created);

        let saude = totals
            .iter()
            .find(|(category, _)| category == "Saúde")
            .expect("Saúde category should be present");
        assert_eq!(saude.1, 2);
    }

    #[tokio::test]
    async fn test_category_totals_scoped_by_tenant() {
        let (db, config) = test_setup().await.expect("Failed to start test harness");

        reconcile_catalog(db.as_ref(), &config.tenant, &builtin::catalog())
            .await
            .expect("Failed to reconcile");

        let totals = category_totals(db.as_ref(), "another-town")
            .await
            .expect("Failed to query category totals");
        assert!(totals.is_empty());
    }
}
