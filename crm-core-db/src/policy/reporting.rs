use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::models::customer::{CustomerModel, PipelineStage};
use crate::models::history::StageHistoryModel;

/// Number of transitions one actor made into one stage.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageActivityCount {
    pub changed_by: String,
    pub stage: PipelineStage,
    pub count: usize,
}

/// Number of customers currently in one stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StageTally {
    pub stage: PipelineStage,
    pub count: usize,
}

/// Groups ledger entries by actor and stage, sorted by actor then pipeline order.
pub fn tally_stage_activity(entries: &[StageHistoryModel]) -> Vec<StageActivityCount> {
    let mut counts: BTreeMap<(&str, PipelineStage), usize> = BTreeMap::new();
    for entry in entries {
        *counts
            .entry((entry.changed_by.as_str(), entry.updated_stage))
            .or_default() += 1;
    }
    counts
        .into_iter()
        .map(|((changed_by, stage), count)| StageActivityCount {
            changed_by: changed_by.to_string(),
            stage,
            count,
        })
        .collect()
}

/// Customers per current stage, every stage listed in pipeline order.
pub fn pipeline_snapshot(customers: &[CustomerModel]) -> Vec<StageTally> {
    PipelineStage::ALL
        .iter()
        .map(|stage| StageTally {
            stage: *stage,
            count: customers.iter().filter(|c| c.status == *stage).count(),
        })
        .collect()
}
