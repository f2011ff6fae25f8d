use std::sync::RwLock;

/// Where the dashboard remembers the last-uploaded dataset between visits.
///
/// Injected into the controller instead of being read as ambient storage,
/// so tests can run without a browser.
pub trait SessionStore: Send + Sync + 'static {
    fn last_file(&self) -> Option<String>;
    fn set_last_file(&self, file_name: &str);
}

const LAST_FILE_KEY: &str = "lastUploadedFile";

/// localStorage-backed store used in the browser.
pub struct BrowserSession;

impl SessionStore for BrowserSession {
    fn last_file(&self) -> Option<String> {
        let storage = web_sys::window()?.local_storage().ok()??;
        storage.get_item(LAST_FILE_KEY).ok()?
    }

    fn set_last_file(&self, file_name: &str) {
        let Some(storage) = web_sys::window().and_then(|w| w.local_storage().ok().flatten())
        else {
            return;
        };
        if let Err(err) = storage.set_item(LAST_FILE_KEY, file_name) {
            log::warn!("failed to persist last file handle: {:?}", err);
        }
    }
}

/// In-memory store for tests.
#[derive(Default)]
pub struct MemorySession(RwLock<Option<String>>);

impl SessionStore for MemorySession {
    fn last_file(&self) -> Option<String> {
        self.0.read().ok().and_then(|guard| guard.clone())
    }

    fn set_last_file(&self, file_name: &str) {
        if let Ok(mut guard) = self.0.write() {
            *guard = Some(file_name.to_string());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_session_round_trips() {
        let session = MemorySession::default();
        assert_eq!(session.last_file(), None);
        session.set_last_file("sales.csv");
        assert_eq!(session.last_file(), Some("sales.csv".to_string()));
        session.set_last_file("other.csv");
        assert_eq!(session.last_file(), Some("other.csv".to_string()));
    }
}
