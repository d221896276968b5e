use crm_core_api::{CrmError, CrmResult};

use crate::models::customer::CustomerModel;
use crate::models::history::{verify_history_chain, HistoryChainBreak, StageHistoryModel};
use crate::policy::duplicate_guard::find_duplicate;
use crate::repository::*;
use crate::service::CustomerService;

impl<U: UnitOfWork> CustomerService<U> {
    pub async fn load_customer(&self, id: i64) -> CrmResult<CustomerModel> {
        let session = self.store.begin().await?;
        let found = session.customer_repository().load_batch(&[id]).await?;
        found
            .into_iter()
            .next()
            .flatten()
            .ok_or_else(|| CrmError::NotFound(format!("Customer {id}")))
    }

    /// Customers owned by `owner`, in insertion order
    pub async fn list_by_owner(&self, owner: &str) -> CrmResult<Vec<CustomerModel>> {
        let session = self.store.begin().await?;
        Ok(session.customer_repository().find_by_owner(owner).await?)
    }

    pub async fn list_all(&self) -> CrmResult<Vec<CustomerModel>> {
        let session = self.store.begin().await?;
        Ok(session.customer_repository().find_all().await?)
    }

    /// First customer with the given normalized phone or an overlapping company name,
    /// using the same rules as the duplicate check on create.
    pub async fn find_by_phone_or_name(
        &self,
        normalized_phone: &str,
        company_name: &str,
    ) -> CrmResult<Option<CustomerModel>> {
        let customers = self.list_all().await?;
        Ok(find_duplicate(&customers, normalized_phone, company_name).map(|hit| hit.customer.clone()))
    }

    /// Case-insensitive substring search on company name, optionally for one owner.
    /// A blank query returns every candidate.
    pub async fn search_customers(
        &self,
        owner: Option<&str>,
        query: &str,
    ) -> CrmResult<Vec<CustomerModel>> {
        let candidates = match owner {
            Some(owner) => self.list_by_owner(owner).await?,
            None => self.list_all().await?,
        };
        let needle = query.trim().to_lowercase();
        Ok(candidates
            .into_iter()
            .filter(|c| c.company_name.to_lowercase().contains(&needle))
            .collect())
    }

    /// Ledger entries of one customer, newest first
    pub async fn customer_timeline(&self, customer_id: i64) -> CrmResult<Vec<StageHistoryModel>> {
        let session = self.store.begin().await?;
        Ok(session
            .stage_history_repository()
            .find_by_customer_id(customer_id)
            .await?)
    }

    /// Whole ledger, newest first
    pub async fn list_history(&self) -> CrmResult<Vec<StageHistoryModel>> {
        let session = self.store.begin().await?;
        Ok(session.stage_history_repository().find_all().await?)
    }

    pub async fn history_page(&self, page: PageRequest) -> CrmResult<Page<StageHistoryModel>> {
        let session = self.store.begin().await?;
        Ok(session.stage_history_repository().find_page(page).await?)
    }

    /// Checks that a customer's ledger entries still form an unbroken hash chain.
    pub async fn verify_timeline(&self, customer_id: i64) -> CrmResult<()> {
        let timeline = self.customer_timeline(customer_id).await?;
        verify_history_chain(&timeline).map_err(|chain_break| {
            let message = match chain_break {
                HistoryChainBreak::Tampered { entry_id } => {
                    format!("History entry {entry_id} of customer {customer_id} does not match its hash")
                }
                HistoryChainBreak::Unlinked { entry_id } => {
                    format!("History entry {entry_id} of customer {customer_id} is not linked to its predecessor")
                }
            };
            CrmError::InternalError(message)
        })
    }
}

#[cfg(test)]
mod tests {
    use crm_core_api::StageChange;

    use crate::models::customer::PipelineStage;
    use crate::repository::pagination::PageRequest;
    use crate::service::test_utils::{memory_service, new_customer};

    async fn advance(
        service: &crate::service::CustomerService<crate::memory::InMemoryStore>,
        customer_id: i64,
        stage: &str,
        actor: &str,
    ) {
        service
            .advance_stage(StageChange {
                customer_id,
                new_stage: stage.to_string(),
                actor: actor.to_string(),
                ..Default::default()
            })
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_list_by_owner_keeps_insertion_order() {
        let (_, service) = memory_service();
        let a = service.create_customer(new_customer("Desert Rose", "500000001", "Huda")).await.unwrap();
        service.create_customer(new_customer("Blue Lagoon", "500000002", "Sara")).await.unwrap();
        let c = service.create_customer(new_customer("Oasis Mall", "500000003", "Huda")).await.unwrap();

        let ids: Vec<i64> = service
            .list_by_owner("Huda")
            .await
            .unwrap()
            .iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(ids, vec![a, c]);
        assert!(service.list_by_owner("Nobody").await.unwrap().is_empty());
        assert_eq!(service.list_all().await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_load_unknown_customer_is_not_found() {
        let (_, service) = memory_service();
        assert!(matches!(
            service.load_customer(7).await,
            Err(crm_core_api::CrmError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_find_by_phone_or_name() {
        let (_, service) = memory_service();
        let id = service
            .create_customer(new_customer("مؤسسة الأمل للتجارة", "500000001", "Huda"))
            .await
            .unwrap();

        let by_name = service.find_by_phone_or_name("+966599999999", "الأمل").await.unwrap();
        assert_eq!(by_name.map(|c| c.id), Some(id));
        let by_phone = service.find_by_phone_or_name("+966500000001", "Other").await.unwrap();
        assert_eq!(by_phone.map(|c| c.id), Some(id));
        assert!(service
            .find_by_phone_or_name("+966599999999", "Other")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_search_is_case_insensitive_and_scoped() {
        let (_, service) = memory_service();
        service.create_customer(new_customer("Desert Rose", "500000001", "Huda")).await.unwrap();
        service.create_customer(new_customer("Rose Garden Mall", "500000002", "Sara")).await.unwrap();
        service.create_customer(new_customer("Blue Lagoon", "500000003", "Huda")).await.unwrap();

        assert_eq!(service.search_customers(None, "ROSE").await.unwrap().len(), 2);
        let scoped = service.search_customers(Some("Huda"), "rose").await.unwrap();
        assert_eq!(scoped.len(), 1);
        assert_eq!(scoped[0].company_name.as_str(), "Desert Rose");
        assert_eq!(service.search_customers(Some("Huda"), " ").await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn test_history_listing_and_paging() {
        let (_, service) = memory_service();
        let a = service.create_customer(new_customer("Desert Rose", "500000001", "Huda")).await.unwrap();
        let b = service.create_customer(new_customer("Blue Lagoon", "500000002", "Sara")).await.unwrap();
        advance(&service, a, "contacted", "Huda").await;
        advance(&service, b, "contacted", "Sara").await;
        advance(&service, a, "meeting_held", "Huda").await;

        let all = service.list_history().await.unwrap();
        assert_eq!(all.len(), 3);
        assert_eq!(all[0].updated_stage, PipelineStage::MeetingHeld);
        assert_eq!(all[2].customer_id, a);

        let page = service.history_page(PageRequest::new(2, 0)).await.unwrap();
        assert_eq!(page.total, 3);
        assert_eq!(page.items.len(), 2);
        assert!(page.has_more());
        let last = service.history_page(PageRequest::new(2, 2)).await.unwrap();
        assert_eq!(last.items.len(), 1);
        assert!(!last.has_more());

        assert_eq!(service.customer_timeline(b).await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_timeline_chain_links_per_customer() {
        let (_, service) = memory_service();
        let a = service.create_customer(new_customer("Desert Rose", "500000001", "Huda")).await.unwrap();
        let b = service.create_customer(new_customer("Blue Lagoon", "500000002", "Sara")).await.unwrap();
        advance(&service, a, "contacted", "Huda").await;
        advance(&service, b, "contacted", "Sara").await;
        advance(&service, a, "meeting_held", "Huda").await;

        let timeline = service.customer_timeline(a).await.unwrap();
        assert_eq!(timeline[0].antecedent_hash, timeline[1].hash);
        assert_eq!(timeline[1].antecedent_hash, 0);
        assert!(service.verify_timeline(a).await.is_ok());
        assert!(service.verify_timeline(b).await.is_ok());
    }
}
