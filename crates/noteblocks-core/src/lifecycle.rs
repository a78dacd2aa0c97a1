//! Block lifecycle statuses.
//!
//! A block moves through `ingested → created → enriching/enriched →
//! transforming/transformed → routed/routed_final → editing/edited →
//! pre_processing/pre_processed → processing/processed →
//! post_processing/post_processed → indexing/indexed`, with side states
//! `on_hold`, `archived` and one `*_failed` state per fallible stage.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LifecycleStatus {
    Ingested,
    Created,
    Enriching,
    Enriched,
    Transforming,
    Transformed,
    Routed,
    RoutedFinal,
    Editing,
    Edited,
    PreProcessing,
    PreProcessed,
    Processing,
    Processed,
    PostProcessing,
    PostProcessed,
    Indexing,
    Indexed,
    OnHold,
    Archived,
    EnrichmentFailed,
    RoutingFailed,
    ProcessingFailed,
    PreProcessingFailed,
    PostProcessingFailed,
}

impl LifecycleStatus {
    pub const ALL: [LifecycleStatus; 25] = [
        Self::Ingested,
        Self::Created,
        Self::Enriching,
        Self::Enriched,
        Self::Transforming,
        Self::Transformed,
        Self::Routed,
        Self::RoutedFinal,
        Self::Editing,
        Self::Edited,
        Self::PreProcessing,
        Self::PreProcessed,
        Self::Processing,
        Self::Processed,
        Self::PostProcessing,
        Self::PostProcessed,
        Self::Indexing,
        Self::Indexed,
        Self::OnHold,
        Self::Archived,
        Self::EnrichmentFailed,
        Self::RoutingFailed,
        Self::ProcessingFailed,
        Self::PreProcessingFailed,
        Self::PostProcessingFailed,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ingested => "ingested",
            Self::Created => "created",
            Self::Enriching => "enriching",
            Self::Enriched => "enriched",
            Self::Transforming => "transforming",
            Self::Transformed => "transformed",
            Self::Routed => "routed",
            Self::RoutedFinal => "routed_final",
            Self::Editing => "editing",
            Self::Edited => "edited",
            Self::PreProcessing => "pre_processing",
            Self::PreProcessed => "pre_processed",
            Self::Processing => "processing",
            Self::Processed => "processed",
            Self::PostProcessing => "post_processing",
            Self::PostProcessed => "post_processed",
            Self::Indexing => "indexing",
            Self::Indexed => "indexed",
            Self::OnHold => "on_hold",
            Self::Archived => "archived",
            Self::EnrichmentFailed => "enrichment_failed",
            Self::RoutingFailed => "routing_failed",
            Self::ProcessingFailed => "processing_failed",
            Self::PreProcessingFailed => "pre_processing_failed",
            Self::PostProcessingFailed => "post_processing_failed",
        }
    }

    /// Statuses worth persisting a history entry for.
    pub fn is_recordable(&self) -> bool {
        matches!(
            self,
            Self::Ingested
                | Self::Created
                | Self::Enriched
                | Self::Transformed
                | Self::Routed
                | Self::RoutedFinal
                | Self::Edited
                | Self::Processed
                | Self::PreProcessed
                | Self::PostProcessed
        )
    }

    pub fn is_failure(&self) -> bool {
        matches!(
            self,
            Self::EnrichmentFailed
                | Self::RoutingFailed
                | Self::ProcessingFailed
                | Self::PreProcessingFailed
                | Self::PostProcessingFailed
        )
    }

    /// A stage is running; the block should not be picked up again.
    pub fn is_in_progress(&self) -> bool {
        matches!(
            self,
            Self::Enriching
                | Self::Transforming
                | Self::Editing
                | Self::PreProcessing
                | Self::Processing
                | Self::PostProcessing
                | Self::Indexing
        )
    }
}

impl std::fmt::Display for LifecycleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for LifecycleStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| format!("Invalid lifecycle status: {}", s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serde_matches_as_str() {
        for status in LifecycleStatus::ALL {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.as_str()));
            assert_eq!(status.as_str().parse::<LifecycleStatus>().unwrap(), status);
        }
    }

    #[test]
    fn test_recordable_excludes_failure_and_in_progress() {
        for status in LifecycleStatus::ALL {
            if status.is_failure() || status.is_in_progress() {
                assert!(!status.is_recordable(), "{status} should not be recordable");
            }
        }
        assert!(LifecycleStatus::RoutedFinal.is_recordable());
        assert!(!LifecycleStatus::Indexed.is_recordable());
        assert!(!LifecycleStatus::OnHold.is_recordable());
    }

    #[test]
    fn test_failure_statuses() {
        let failures: Vec<_> = LifecycleStatus::ALL
            .into_iter()
            .filter(LifecycleStatus::is_failure)
            .collect();
        assert_eq!(failures.len(), 5);
        assert!(failures.iter().all(|s| s.as_str().ends_with("_failed")));
    }
}
