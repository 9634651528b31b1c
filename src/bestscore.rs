//! Best-score persistence
//!
//! A single scalar, stored in LocalStorage as a plain decimal string.
//! Storage being unavailable is never an error: reads fall back to 0 and
//! writes are best-effort.

/// The persisted best score across sessions
#[derive(Debug, Clone, Copy, Default)]
pub struct BestScore {
    pub value: u32,
}

impl BestScore {
    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "leopard_best";

    pub fn new() -> Self {
        Self::default()
    }

    /// Write-through update. Returns true when `score` set a new record.
    pub fn record(&mut self, score: u32) -> bool {
        if score > self.value {
            self.value = score;
            self.save();
            true
        } else {
            false
        }
    }

    /// Load the best score from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(raw)) = storage.get_item(Self::STORAGE_KEY) {
                if let Ok(value) = raw.trim().parse::<u32>() {
                    log::info!("Loaded best score: {}", value);
                    return Self { value };
                }
            }
        }

        log::info!("No best score found, starting fresh");
        Self::new()
    }

    /// Save the best score to LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn save(&self) {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            let _ = storage.set_item(Self::STORAGE_KEY, &self.value.to_string());
            log::info!("Best score saved ({})", self.value);
        }
    }

    /// Native stubs
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        Self::new()
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn save(&self) {
        // No-op for native
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_keeps_maximum() {
        let mut best = BestScore::new();
        assert!(best.record(5));
        assert_eq!(best.value, 5);

        assert!(!best.record(5));
        assert!(!best.record(3));
        assert_eq!(best.value, 5);

        assert!(best.record(8));
        assert_eq!(best.value, 8);
    }
}
