//! Caller-facing request types.
//!
//! These carry raw form values exactly as the presentation layer collected them.
//! Structural checks (required fields, lengths, e-mail syntax) are declared with
//! `validator` and run by the service before any storage access; domain checks such as
//! stage parsing and phone normalization happen in the service itself.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

/// Attributes of a prospect as entered in the "add customer" form or parsed from an
/// import file.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct NewCustomer {
    #[validate(length(min = 1, max = 200), custom(function = "not_blank"))]
    pub company_name: String,

    #[validate(length(max = 50))]
    pub sector: Option<String>,

    #[validate(length(max = 100))]
    pub contact_name: Option<String>,

    #[validate(length(max = 100))]
    pub job_title: Option<String>,

    /// Dialing code chosen from the fixed lookup, e.g. `966` or `+966`
    #[validate(length(min = 1, max = 6))]
    pub country_code: String,

    /// National number as typed; separators and a leading trunk zero are tolerated
    #[validate(length(min = 1, max = 30), custom(function = "not_blank"))]
    pub phone: String,

    #[validate(length(max = 100), email)]
    pub email: Option<String>,

    /// Exhibition or event the lead came from
    #[validate(length(max = 100))]
    pub event_name: Option<String>,

    /// Display name of the owning representative
    #[validate(length(min = 1, max = 100), custom(function = "not_blank"))]
    pub owner: String,
}

/// Partial overwrite of a customer's contact attributes. `None` leaves a field as is.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct ContactInfoUpdate {
    #[validate(length(min = 1, max = 200), custom(function = "not_blank"))]
    pub company_name: Option<String>,

    /// Required together with `phone`
    #[validate(length(min = 1, max = 6))]
    pub country_code: Option<String>,

    #[validate(length(min = 1, max = 30), custom(function = "not_blank"))]
    pub phone: Option<String>,

    #[validate(length(max = 100), email)]
    pub email: Option<String>,
}

impl ContactInfoUpdate {
    pub fn is_empty(&self) -> bool {
        self.company_name.is_none() && self.phone.is_none() && self.email.is_none()
    }
}

/// A request to move a customer to another pipeline stage.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct StageChange {
    pub customer_id: i64,

    /// Stage code or display label; parsed by the service
    pub new_stage: String,

    /// Name of the representative or admin making the change
    #[validate(length(min = 1, max = 100), custom(function = "not_blank"))]
    pub actor: String,

    #[validate(length(max = 2000))]
    pub notes: Option<String>,

    /// Persisted only when moving to the quote submitted stage
    #[validate(custom(function = "non_negative"))]
    pub quoted_amount: Option<Decimal>,

    /// Persisted only when moving to the contract won stage
    #[validate(custom(function = "non_negative"))]
    pub contract_amount: Option<Decimal>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct NewUser {
    #[validate(length(min = 3, max = 50), custom(function = "not_blank"))]
    pub username: String,

    #[validate(length(min = 1, max = 100), custom(function = "not_blank"))]
    pub display_name: String,

    /// `admin` or `rep`
    #[validate(custom(function = "known_role"))]
    pub role: String,
}

fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("blank"));
    }
    Ok(())
}

fn non_negative(value: &Decimal) -> Result<(), ValidationError> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(ValidationError::new("negative_amount"));
    }
    Ok(())
}

fn known_role(value: &str) -> Result<(), ValidationError> {
    match value {
        "admin" | "rep" => Ok(()),
        _ => Err(ValidationError::new("unknown_role")),
    }
}
