use chrono::{SubsecRound, Utc};
use tracing::{debug, info, warn};
use validator::Validate;

use crm_core_api::{ContactInfoUpdate, CrmError, CrmResult, NewCustomer, StageChange};

use crate::models::customer::{ContactChanges, CustomerModel, PipelineStage, StageUpdate};
use crate::models::history::StageHistoryModel;
use crate::policy::duplicate_guard::find_duplicate;
use crate::policy::phone::normalize_phone;
use crate::repository::*;
use crate::service::{bounded, optional_bounded, CustomerService};

impl<U: UnitOfWork> CustomerService<U> {
    /// Registers a new customer in the initial stage and returns its id.
    ///
    /// The phone is normalized first, then the duplicate guard scans every stored
    /// customer. On a collision nothing is written and the error names the owner of the
    /// existing record. No history entry is written: creation is not a transition.
    pub async fn create_customer(&self, request: NewCustomer) -> CrmResult<i64> {
        request.validate()?;
        let phone = normalize_phone(&request.country_code, &request.phone)?;

        let customer = CustomerModel {
            id: 0,
            company_name: bounded("company_name", &request.company_name)?,
            sector: optional_bounded("sector", request.sector.as_deref())?,
            contact_name: optional_bounded("contact_name", request.contact_name.as_deref())?,
            job_title: optional_bounded("job_title", request.job_title.as_deref())?,
            phone: bounded("phone", &phone)?,
            email: optional_bounded("email", request.email.as_deref())?,
            event_name: optional_bounded("event_name", request.event_name.as_deref())?,
            owner: bounded("owner", &request.owner)?,
            status: PipelineStage::initial(),
            non_standard_status: None,
            quoted_amount: None,
            quoted_on: None,
            contract_amount: None,
            created_at: Utc::now().trunc_subsecs(6),
        };

        let session = self.store.begin().await?;
        let existing: Vec<CustomerModel> = session.customer_repository().find_all().await?;
        if let Some(hit) = find_duplicate(&existing, &phone, &customer.company_name) {
            warn!(
                company_name = %customer.company_name,
                phone = %phone,
                existing_customer_id = hit.customer.id,
                existing_owner = %hit.customer.owner,
                reason = ?hit.reason,
                "duplicate customer rejected"
            );
            let error = CrmError::Duplicate {
                existing_owner: hit.customer.owner.to_string(),
                existing_customer_id: hit.customer.id,
            };
            session.rollback().await?;
            return Err(error);
        }

        let saved = session
            .customer_repository()
            .create_batch(vec![customer])
            .await?;
        let created = saved
            .into_iter()
            .next()
            .ok_or_else(|| CrmError::InternalError("Insert returned no customer".to_string()))?;
        session.commit().await?;

        info!(
            customer_id = created.id,
            owner = %created.owner,
            phone = %created.phone,
            "customer created"
        );
        Ok(created.id)
    }

    /// Creates already-parsed rows one by one, each in its own session.
    ///
    /// A failing row does not stop the import; rows later in the batch see the rows
    /// created before them, so duplicates within one file are reported too.
    pub async fn import_customers(&self, rows: Vec<NewCustomer>) -> Vec<CrmResult<i64>> {
        let mut results = Vec::with_capacity(rows.len());
        for row in rows {
            results.push(self.create_customer(row).await);
        }
        let created = results.iter().filter(|r| r.is_ok()).count();
        info!(
            rows = results.len(),
            created,
            rejected = results.len() - created,
            "customer import finished"
        );
        results
    }

    /// Overwrites company name, phone and e-mail in place without a history entry.
    ///
    /// A new phone needs its country code and is normalized like on create. An unknown
    /// id or an update without any field writes nothing and returns `Ok(false)`.
    pub async fn update_contact_info(&self, id: i64, update: ContactInfoUpdate) -> CrmResult<bool> {
        update.validate()?;
        if update.is_empty() {
            debug!(customer_id = id, "empty contact update skipped");
            return Ok(false);
        }

        let phone = match (&update.phone, &update.country_code) {
            (Some(phone), Some(country_code)) => Some(normalize_phone(country_code, phone)?),
            (Some(_), None) => {
                return Err(CrmError::ValidationError(
                    "country_code is required when changing the phone".to_string(),
                ))
            }
            (None, _) => None,
        };
        let changes = ContactChanges {
            company_name: optional_bounded("company_name", update.company_name.as_deref())?,
            phone: optional_bounded("phone", phone.as_deref())?,
            email: optional_bounded("email", update.email.as_deref())?,
        };

        let session = self.store.begin().await?;
        let updated = session
            .customer_repository()
            .update_contact_info(id, &changes)
            .await?;
        session.commit().await?;

        if updated {
            info!(customer_id = id, "customer contact info updated");
        } else {
            warn!(customer_id = id, "contact update for unknown customer ignored");
        }
        Ok(updated)
    }

    /// Moves a customer to `change.new_stage` and appends the matching ledger entry.
    ///
    /// Any stage may follow any other. A quoted amount is kept only when moving to
    /// quote submitted (stamped with today's date) and a contract amount only when moving
    /// to contract won. The status update and the append commit together or not at all.
    pub async fn advance_stage(&self, change: StageChange) -> CrmResult<StageHistoryModel> {
        change.validate()?;
        let stage: PipelineStage = change
            .new_stage
            .parse()
            .map_err(|_| CrmError::InvalidStage(change.new_stage.clone()))?;
        let actor = bounded("actor", &change.actor)?;
        let notes = change
            .notes
            .as_deref()
            .map(str::trim)
            .filter(|n| !n.is_empty())
            .map(str::to_string);

        let mut update = StageUpdate::status_only(stage);
        match (stage, change.quoted_amount) {
            (PipelineStage::QuoteSubmitted, Some(amount)) => {
                update.quoted_amount = Some(amount);
                update.quoted_on = Some(Utc::now().date_naive());
            }
            (_, Some(amount)) => debug!(%amount, %stage, "quoted amount ignored outside quote submitted"),
            _ => {}
        }
        match (stage, change.contract_amount) {
            (PipelineStage::ContractWon, Some(amount)) => update.contract_amount = Some(amount),
            (_, Some(amount)) => debug!(%amount, %stage, "contract amount ignored outside contract won"),
            _ => {}
        }

        let session = self.store.begin().await?;
        let customer = session
            .customer_repository()
            .load_batch(&[change.customer_id])
            .await?
            .into_iter()
            .next()
            .flatten()
            .ok_or_else(|| CrmError::NotFound(format!("Customer {}", change.customer_id)))?;

        if !session
            .customer_repository()
            .update_stage(customer.id, &update)
            .await?
        {
            return Err(CrmError::NotFound(format!("Customer {}", customer.id)));
        }
        let entry = StageHistoryModel::new(
            customer.id,
            customer.company_name.clone(),
            stage,
            actor,
            notes,
        );
        let appended = session.stage_history_repository().append(entry).await?;
        session.commit().await?;

        info!(
            customer_id = customer.id,
            from = %customer.status,
            to = %stage,
            changed_by = %appended.changed_by,
            history_id = appended.id,
            "customer stage changed"
        );
        Ok(appended)
    }
}
