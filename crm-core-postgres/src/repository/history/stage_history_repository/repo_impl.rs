use crm_core_db::models::history::StageHistoryModel;
use sqlx::{postgres::PgRow, Row};
use std::error::Error;

use crate::unit_of_work::Executor;
use crate::utils::{get_heapless_string, get_stored_stage, TryFromRow};

pub struct StageHistoryRepositoryImpl {
    pub executor: Executor,
}

impl StageHistoryRepositoryImpl {
    pub fn new(executor: Executor) -> Self {
        Self { executor }
    }
}

/// Newest first by append order. `created_at` comes from the application clock and is
/// not used for ordering.
pub(super) const NEWEST_FIRST: &str = "ORDER BY id DESC";

impl TryFromRow<PgRow> for StageHistoryModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        let stage = get_stored_stage(row, "updated_stage")?;
        Ok(StageHistoryModel {
            id: row.try_get("id")?,
            customer_id: row.try_get("customer_id")?,
            company_name: get_heapless_string(row, "company_name")?,
            updated_stage: stage.stage,
            non_standard_stage: stage.non_standard,
            changed_by: get_heapless_string(row, "changed_by")?,
            notes: row.try_get("notes")?,
            created_at: row.try_get("created_at")?,
            antecedent_hash: row.try_get("antecedent_hash")?,
            hash: row.try_get("hash")?,
        })
    }
}
