use crm_core_db::models::customer::CustomerModel;
use sqlx::{postgres::PgRow, Row};
use std::error::Error;

use crate::unit_of_work::Executor;
use crate::utils::{get_heapless_string, get_optional_heapless_string, get_stored_stage, TryFromRow};

pub struct CustomerRepositoryImpl {
    pub executor: Executor,
}

impl CustomerRepositoryImpl {
    pub fn new(executor: Executor) -> Self {
        Self { executor }
    }
}

impl TryFromRow<PgRow> for CustomerModel {
    fn try_from_row(row: &PgRow) -> Result<Self, Box<dyn Error + Send + Sync>> {
        let status = get_stored_stage(row, "status")?;
        Ok(CustomerModel {
            id: row.try_get("id")?,
            company_name: get_heapless_string(row, "company_name")?,
            sector: get_optional_heapless_string(row, "sector")?,
            contact_name: get_optional_heapless_string(row, "contact_name")?,
            job_title: get_optional_heapless_string(row, "job_title")?,
            phone: get_heapless_string(row, "phone")?,
            email: get_optional_heapless_string(row, "email")?,
            event_name: get_optional_heapless_string(row, "event_name")?,
            owner: get_heapless_string(row, "owner")?,
            status: status.stage,
            non_standard_status: status.non_standard,
            quoted_amount: row.try_get("quoted_amount")?,
            quoted_on: row.try_get("quoted_on")?,
            contract_amount: row.try_get("contract_amount")?,
            created_at: row.try_get("created_at")?,
        })
    }
}
