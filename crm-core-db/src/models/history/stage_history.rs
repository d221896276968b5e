use chrono::{DateTime, SubsecRound, Utc};
use heapless::String as HeaplessString;
use serde::{Deserialize, Serialize};

use crate::models::customer::pipeline_stage::PipelineStage;
use crate::models::identifiable::Identifiable;
use crate::utils::hash_as_i64;

/// # Documentation
/// One stage transition of a customer. Immutable once appended.
///
/// - `company_name` is the customer's name at the moment of the transition and is kept
///   even if the customer is renamed later.
/// - Entries of one customer form a hash chain: `antecedent_hash` is the `hash` of the
///   previous entry of the same customer (0 for the first one), and `hash` is computed
///   over the entry with `id` and `hash` set to 0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StageHistoryModel {
    pub id: i64,

    pub customer_id: i64,

    pub company_name: HeaplessString<512>,

    pub updated_stage: PipelineStage,

    /// Raw stored stage when it did not match any known stage
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub non_standard_stage: Option<String>,

    /// Representative or admin who made the change
    pub changed_by: HeaplessString<256>,

    pub notes: Option<String>,

    pub created_at: DateTime<Utc>,

    /// Hash of the previous entry of the same customer (0 for the first entry)
    pub antecedent_hash: i64,

    /// Hash of this entry with `id` and `hash` set to 0
    pub hash: i64,
}

impl StageHistoryModel {
    /// Builds an unsealed entry timestamped now. The timestamp is truncated to
    /// microseconds, the precision PostgreSQL keeps, so hashes survive a round trip.
    pub fn new(
        customer_id: i64,
        company_name: HeaplessString<512>,
        updated_stage: PipelineStage,
        changed_by: HeaplessString<256>,
        notes: Option<String>,
    ) -> Self {
        Self {
            id: 0,
            customer_id,
            company_name,
            updated_stage,
            non_standard_stage: None,
            changed_by,
            notes,
            created_at: Utc::now().trunc_subsecs(6),
            antecedent_hash: 0,
            hash: 0,
        }
    }

    pub fn compute_hash(&self) -> Result<i64, String> {
        let mut entity_for_hashing = self.clone();
        entity_for_hashing.id = 0;
        entity_for_hashing.hash = 0;
        hash_as_i64(&entity_for_hashing)
    }

    /// Links the entry to its predecessor and stamps its own hash
    pub fn seal(&mut self, antecedent_hash: i64) -> Result<(), String> {
        self.antecedent_hash = antecedent_hash;
        self.hash = self.compute_hash()?;
        Ok(())
    }
}

impl Identifiable for StageHistoryModel {
    fn get_id(&self) -> i64 {
        self.id
    }
}

/// Where a customer's history chain stops verifying.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HistoryChainBreak {
    /// The entry's stored hash does not match its content
    Tampered { entry_id: i64 },
    /// The entry does not point at the hash of its predecessor
    Unlinked { entry_id: i64 },
}

/// Verifies the hash chain of one customer's entries, given newest-first as returned by
/// the ledger.
pub fn verify_history_chain(entries_newest_first: &[StageHistoryModel]) -> Result<(), HistoryChainBreak> {
    let mut expected_antecedent = 0;
    for entry in entries_newest_first.iter().rev() {
        if entry.antecedent_hash != expected_antecedent {
            return Err(HistoryChainBreak::Unlinked { entry_id: entry.id });
        }
        match entry.compute_hash() {
            Ok(hash) if hash == entry.hash => {}
            _ => return Err(HistoryChainBreak::Tampered { entry_id: entry.id }),
        }
        expected_antecedent = entry.hash;
    }
    Ok(())
}
