use chrono::Utc;
use heapless::String as HeaplessString;
use std::sync::Arc;

use crm_core_api::NewCustomer;

use crate::memory::InMemoryStore;
use crate::models::customer::{CustomerModel, PipelineStage};
use crate::service::CustomerService;

pub fn create_test_customer(company_name: &str, phone: &str, owner: &str) -> CustomerModel {
    CustomerModel {
        id: 0,
        company_name: HeaplessString::try_from(company_name).unwrap(),
        sector: None,
        contact_name: None,
        job_title: None,
        phone: HeaplessString::try_from(phone).unwrap(),
        email: None,
        event_name: None,
        owner: HeaplessString::try_from(owner).unwrap(),
        status: PipelineStage::New,
        non_standard_status: None,
        quoted_amount: None,
        quoted_on: None,
        contract_amount: None,
        created_at: Utc::now(),
    }
}

pub fn new_customer(company_name: &str, phone: &str, owner: &str) -> NewCustomer {
    NewCustomer {
        company_name: company_name.to_string(),
        country_code: "966".to_string(),
        phone: phone.to_string(),
        owner: owner.to_string(),
        ..Default::default()
    }
}

pub fn memory_service() -> (Arc<InMemoryStore>, CustomerService<InMemoryStore>) {
    let store = Arc::new(InMemoryStore::new());
    (store.clone(), CustomerService::new(store))
}
