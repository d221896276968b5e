use crm_core_api::CrmResult;

use crate::models::history::StageHistoryModel;
use crate::policy::reporting::{pipeline_snapshot, tally_stage_activity, StageActivityCount, StageTally};
use crate::repository::*;
use crate::service::CustomerService;

impl<U: UnitOfWork> CustomerService<U> {
    /// Transitions per actor and stage over the whole ledger
    pub async fn stage_activity_report(&self) -> CrmResult<Vec<StageActivityCount>> {
        let entries: Vec<StageHistoryModel> = self.list_history().await?;
        Ok(tally_stage_activity(&entries))
    }

    /// Customers per current stage, for one owner or for everyone
    pub async fn pipeline_snapshot(&self, owner: Option<&str>) -> CrmResult<Vec<StageTally>> {
        let customers = match owner {
            Some(owner) => self.list_by_owner(owner).await?,
            None => self.list_all().await?,
        };
        Ok(pipeline_snapshot(&customers))
    }
}
