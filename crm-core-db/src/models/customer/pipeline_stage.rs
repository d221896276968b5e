use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// Sales pipeline stage of a customer.
///
/// Variants are declared in pipeline order, so the derived `Ord` sorts stages the way
/// the sales team reads the funnel. Transitions between stages are unrestricted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PipelineStage {
    New,
    Contacted,
    MeetingHeld,
    DesignSubmitted,
    QuoteSubmitted,
    QuoteRevised,
    ContractWon,
    Rejected,
}

impl PipelineStage {
    pub const ALL: [PipelineStage; 8] = [
        PipelineStage::New,
        PipelineStage::Contacted,
        PipelineStage::MeetingHeld,
        PipelineStage::DesignSubmitted,
        PipelineStage::QuoteSubmitted,
        PipelineStage::QuoteRevised,
        PipelineStage::ContractWon,
        PipelineStage::Rejected,
    ];

    /// Stage every new customer starts in, and the stand-in for unreadable stored values
    pub fn initial() -> Self {
        PipelineStage::New
    }

    /// Storage code written to the status columns
    pub fn code(&self) -> &'static str {
        match self {
            PipelineStage::New => "new",
            PipelineStage::Contacted => "contacted",
            PipelineStage::MeetingHeld => "meeting_held",
            PipelineStage::DesignSubmitted => "design_submitted",
            PipelineStage::QuoteSubmitted => "quote_submitted",
            PipelineStage::QuoteRevised => "quote_revised",
            PipelineStage::ContractWon => "contract_won",
            PipelineStage::Rejected => "rejected",
        }
    }

    /// Label shown to the sales team
    pub fn label(&self) -> &'static str {
        match self {
            PipelineStage::New => "جديد",
            PipelineStage::Contacted => "تم التواصل",
            PipelineStage::MeetingHeld => "تم الاجتماع",
            PipelineStage::DesignSubmitted => "تم تقديم التصميم",
            PipelineStage::QuoteSubmitted => "تم تقديم عرض السعر",
            PipelineStage::QuoteRevised => "تم تعديل عرض السعر",
            PipelineStage::ContractWon => "تم التعاقد",
            PipelineStage::Rejected => "مرفوض",
        }
    }

    /// Zero-based position in the pipeline
    pub fn position(&self) -> usize {
        Self::ALL.iter().position(|stage| stage == self).unwrap_or(0)
    }
}

impl std::fmt::Display for PipelineStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

impl FromStr for PipelineStage {
    type Err = ();

    /// Accepts the storage code (case and separator insensitive), the display label,
    /// or the short alias `won`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Some(stage) = Self::ALL.iter().find(|stage| stage.label() == trimmed) {
            return Ok(*stage);
        }

        let code = trimmed.to_ascii_lowercase().replace([' ', '-'], "_");
        match code.as_str() {
            "new" => Ok(PipelineStage::New),
            "contacted" => Ok(PipelineStage::Contacted),
            "meeting_held" => Ok(PipelineStage::MeetingHeld),
            "design_submitted" => Ok(PipelineStage::DesignSubmitted),
            "quote_submitted" => Ok(PipelineStage::QuoteSubmitted),
            "quote_revised" => Ok(PipelineStage::QuoteRevised),
            "contract_won" | "won" => Ok(PipelineStage::ContractWon),
            "rejected" => Ok(PipelineStage::Rejected),
            _ => Err(()),
        }
    }
}

/// Result of reading a status column.
///
/// Rows written before the stage set was fixed may hold values outside it. Those are
/// read as the initial stage and the raw value is kept in `non_standard` so callers can
/// warn a human. The stored column itself is never rewritten by a read.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredStage {
    pub stage: PipelineStage,
    pub non_standard: Option<String>,
}

impl StoredStage {
    pub fn read(raw: &str) -> Self {
        match raw.parse::<PipelineStage>() {
            Ok(stage) => Self {
                stage,
                non_standard: None,
            },
            Err(()) => {
                tracing::warn!(
                    stored_value = raw,
                    "non-standard pipeline stage in storage, reading it as the initial stage"
                );
                Self {
                    stage: PipelineStage::initial(),
                    non_standard: Some(raw.to_string()),
                }
            }
        }
    }
}
