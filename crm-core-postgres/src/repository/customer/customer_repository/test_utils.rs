#[cfg(test)]
pub mod test_utils {
    use chrono::Utc;
    use crm_core_db::models::customer::{CustomerModel, PipelineStage};
    use heapless::String as HeaplessString;
    use rand::Rng;

    pub fn create_test_customer(company_name: &str, owner: &str) -> CustomerModel {
        CustomerModel {
            id: 0,
            company_name: HeaplessString::try_from(company_name).unwrap(),
            sector: Some(HeaplessString::try_from("hospitality").unwrap()),
            contact_name: Some(HeaplessString::try_from("Faisal").unwrap()),
            job_title: None,
            phone: HeaplessString::try_from(random_phone().as_str()).unwrap(),
            email: None,
            event_name: Some(HeaplessString::try_from("Index Saudi").unwrap()),
            owner: HeaplessString::try_from(owner).unwrap(),
            status: PipelineStage::New,
            non_standard_status: None,
            quoted_amount: None,
            quoted_on: None,
            contract_amount: None,
            created_at: Utc::now(),
        }
    }

    pub fn random_phone() -> String {
        format!("+9665{:08}", rand::thread_rng().gen_range(0..100_000_000))
    }

    /// Owner names unique per test, since committed rows from other runs may exist
    pub fn random_owner() -> String {
        format!("rep-{}", rand::thread_rng().gen::<u32>())
    }
}
