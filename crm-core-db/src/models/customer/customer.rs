use chrono::{DateTime, NaiveDate, Utc};
use heapless::String as HeaplessString;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::customer::pipeline_stage::PipelineStage;
use crate::models::identifiable::Identifiable;

/// # Documentation
/// A prospect or account tracked through the sales pipeline.
///
/// - `id` is assigned by the store on insert and never reused.
/// - `phone` is always in normalized `+<country><national>` form and acts as the natural
///   deduplication key (checked by the duplicate guard, not by a unique constraint).
/// - `status` caches the stage of the latest history entry. When the stored value was not
///   a known stage, `status` reads as the initial stage and `non_standard_status` carries
///   the raw value.
/// - Customers are never physically deleted.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CustomerModel {
    pub id: i64,

    pub company_name: HeaplessString<512>,

    /// Free-form sector tag (e.g. hospitality, retail)
    pub sector: Option<HeaplessString<128>>,

    pub contact_name: Option<HeaplessString<256>>,

    pub job_title: Option<HeaplessString<256>>,

    pub phone: HeaplessString<24>,

    pub email: Option<HeaplessString<128>>,

    /// Exhibition or event the lead originated from
    pub event_name: Option<HeaplessString<256>>,

    /// Display name of the owning representative
    pub owner: HeaplessString<256>,

    pub status: PipelineStage,

    /// Raw stored status when it did not match any known stage
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub non_standard_status: Option<String>,

    /// Set when the customer reaches the quote submitted stage with an amount
    pub quoted_amount: Option<Decimal>,

    /// Date the quote was recorded; drives the follow-up reminder in the UI
    pub quoted_on: Option<NaiveDate>,

    /// Set when the customer reaches the contract won stage with an amount
    pub contract_amount: Option<Decimal>,

    pub created_at: DateTime<Utc>,
}

impl CustomerModel {
    pub fn has_non_standard_status(&self) -> bool {
        self.non_standard_status.is_some()
    }

    /// Click-to-chat link for the customer's phone
    pub fn whatsapp_url(&self) -> String {
        crate::policy::phone::whatsapp_url(&self.phone)
    }
}

impl Identifiable for CustomerModel {
    fn get_id(&self) -> i64 {
        self.id
    }
}

/// Normalized overwrite of contact attributes; `None` leaves the column unchanged.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ContactChanges {
    pub company_name: Option<HeaplessString<512>>,
    pub phone: Option<HeaplessString<24>>,
    pub email: Option<HeaplessString<128>>,
}

/// Column changes written together with a stage transition.
#[derive(Debug, Clone, PartialEq)]
pub struct StageUpdate {
    pub status: PipelineStage,
    pub quoted_amount: Option<Decimal>,
    pub quoted_on: Option<NaiveDate>,
    pub contract_amount: Option<Decimal>,
}

impl StageUpdate {
    pub fn status_only(status: PipelineStage) -> Self {
        Self {
            status,
            quoted_amount: None,
            quoted_on: None,
            contract_amount: None,
        }
    }

    /// Applies the update to an in-memory copy the same way the SQL update does:
    /// amounts that are `None` keep their previous value.
    pub fn apply_to(&self, customer: &mut CustomerModel) {
        customer.status = self.status;
        customer.non_standard_status = None;
        if let Some(amount) = self.quoted_amount {
            customer.quoted_amount = Some(amount);
        }
        if let Some(date) = self.quoted_on {
            customer.quoted_on = Some(date);
        }
        if let Some(amount) = self.contract_amount {
            customer.contract_amount = Some(amount);
        }
    }
}

impl ContactChanges {
    pub fn apply_to(&self, customer: &mut CustomerModel) {
        if let Some(company_name) = &self.company_name {
            customer.company_name = company_name.clone();
        }
        if let Some(phone) = &self.phone {
            customer.phone = phone.clone();
        }
        if let Some(email) = &self.email {
            customer.email = Some(email.clone());
        }
    }
}
