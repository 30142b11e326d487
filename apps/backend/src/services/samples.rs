//! Sample design collaborator.
//!
//! Samples are ready-made designs a user can start a component from. The
//! store behind them (ownership checks, library lookup) lives outside this
//! crate; configurators only see the fetched payload and copy the fields
//! they care about. Source errors propagate unmodified.

use async_trait::async_trait;
use uuid::Uuid;

use crate::errors::domain::DomainError;

/// Design payload copied from a sample onto a new component.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SampleDesign {
    pub front_design: Option<serde_json::Value>,
    pub back_design: Option<serde_json::Value>,
}

#[async_trait]
pub trait SampleSource: Send + Sync {
    /// Fetch a sample the given user is allowed to use.
    async fn fetch_sample(
        &self,
        user_id: Uuid,
        sample_id: Uuid,
    ) -> Result<SampleDesign, DomainError>;
}

/// Fetch a sample and hand it to `apply`, which copies the relevant fields
/// onto the target component.
pub async fn apply_sample<S, F>(
    source: &S,
    user_id: Uuid,
    sample_id: Uuid,
    apply: F,
) -> Result<(), DomainError>
where
    S: SampleSource + ?Sized,
    F: FnOnce(&SampleDesign),
{
    let sample = source.fetch_sample(user_id, sample_id).await?;
    apply(&sample);
    Ok(())
}
