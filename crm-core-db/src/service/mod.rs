//! Operations of the CRM core.
//!
//! `CustomerService` is constructed once over a [`UnitOfWork`] and shared by reference.
//! Every write runs in its own session: the duplicate check and the insert of
//! `create_customer` commit together, and so do the status update and the ledger append
//! of `advance_stage`. Storage errors surface as [`CrmError::DatabaseError`].

pub mod customer_service;
pub mod queries;
pub mod reports;
pub mod users;

#[cfg(test)]
pub(crate) mod test_utils;

use heapless::String as HeaplessString;
use std::sync::Arc;

use crm_core_api::{CrmError, CrmResult};

use crate::repository::unit_of_work::UnitOfWork;
use crate::utils::to_heapless;

pub struct CustomerService<U: UnitOfWork> {
    store: Arc<U>,
}

impl<U: UnitOfWork> CustomerService<U> {
    pub fn new(store: Arc<U>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &Arc<U> {
        &self.store
    }
}

impl<U: UnitOfWork> Clone for CustomerService<U> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
        }
    }
}

pub(crate) fn bounded<const N: usize>(field: &str, value: &str) -> CrmResult<HeaplessString<N>> {
    to_heapless::<N>(field, value.trim()).map_err(CrmError::ValidationError)
}

/// Blank optional form values are stored as absent
pub(crate) fn optional_bounded<const N: usize>(
    field: &str,
    value: Option<&str>,
) -> CrmResult<Option<HeaplessString<N>>> {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(v) => bounded::<N>(field, v).map(Some),
        None => Ok(None),
    }
}
