#![allow(dead_code)]

// tests/common/mod.rs
use std::collections::HashMap;

use async_trait::async_trait;
use backend::errors::domain::{DomainError, NotFoundKind};
use backend::services::samples::{SampleDesign, SampleSource};
use serde_json::json;
use uuid::Uuid;

// Logging is auto-installed for most test binaries
#[ctor::ctor]
fn init_logging() {
    backend_test_support::test_logging::init();
}

/// In-memory sample store standing in for the real sample library.
#[derive(Default)]
pub struct StubSampleSource {
    samples: HashMap<Uuid, SampleDesign>,
}

impl StubSampleSource {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn with_sample(sample_id: Uuid, design: SampleDesign) -> Self {
        let mut samples = HashMap::new();
        samples.insert(sample_id, design);
        Self { samples }
    }
}

#[async_trait]
impl SampleSource for StubSampleSource {
    async fn fetch_sample(
        &self,
        _user_id: Uuid,
        sample_id: Uuid,
    ) -> Result<SampleDesign, DomainError> {
        self.samples.get(&sample_id).cloned().ok_or_else(|| {
            DomainError::not_found(NotFoundKind::Sample, format!("sample {sample_id} not found"))
        })
    }
}

/// A sample with recognizable front/back payloads.
pub fn front_back_design() -> SampleDesign {
    SampleDesign {
        front_design: Some(json!({"layers": [{"kind": "text", "value": "front"}]})),
        back_design: Some(json!({"layers": [{"kind": "image", "value": "back"}]})),
    }
}
