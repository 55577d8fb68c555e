use crate::ports::preset_source::{PresetSourceError, PresetSourcePort};
use presets_domain::PresetDocument;
use std::sync::atomic::{AtomicUsize, Ordering};

/// In-memory preset source that counts how often it is loaded.
pub(crate) struct StubSource {
    result: Result<PresetDocument, PresetSourceError>,
    loads: AtomicUsize,
}

impl StubSource {
    pub(crate) fn ok(document: PresetDocument) -> Self {
        Self {
            result: Ok(document),
            loads: AtomicUsize::new(0),
        }
    }

    pub(crate) fn failing(error: PresetSourceError) -> Self {
        Self {
            result: Err(error),
            loads: AtomicUsize::new(0),
        }
    }

    pub(crate) fn loads(&self) -> usize {
        self.loads.load(Ordering::SeqCst)
    }
}

impl PresetSourcePort for StubSource {
    fn load(&self) -> Result<PresetDocument, PresetSourceError> {
        self.loads.fetch_add(1, Ordering::SeqCst);
        self.result.clone()
    }

    fn location(&self) -> String {
        "memory".to_string()
    }
}
