use std::sync::atomic::{AtomicUsize, Ordering};
use crate::catalog::domain::model::Library;
use crate::core::domain::Configuration;

// LibraryRegistry opens libraries and counts how many were opened. One registry is owned
// by the binary's main and passed to whatever needs the count.
#[derive(Debug, Default)]
pub struct LibraryRegistry {
    opened: AtomicUsize,
}

impl LibraryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn open_library(&self, config: &Configuration) -> Library {
        self.opened.fetch_add(1, Ordering::SeqCst);
        tracing::info!(library = config.library_name.as_str(), "library opened");
        Library::new(config)
    }

    pub fn library_count(&self) -> usize {
        self.opened.load(Ordering::SeqCst)
    }
}

#[cfg(test)]
mod tests {
    use crate::catalog::registry::LibraryRegistry;
    use crate::core::domain::Configuration;

    #[tokio::test]
    async fn test_should_count_opened_libraries() {
        let registry = LibraryRegistry::new();
        assert_eq!(0, registry.library_count());
        let main = registry.open_library(&Configuration::new("Main"));
        let branch = registry.open_library(&Configuration::new("Branch"));
        assert_eq!("Main", main.name());
        assert_eq!("Branch", branch.name());
        assert_eq!(2, registry.library_count());
    }

    #[tokio::test]
    async fn test_should_keep_registries_independent() {
        let first = LibraryRegistry::new();
        let second = LibraryRegistry::new();
        let _ = first.open_library(&Configuration::new("Main"));
        assert_eq!(1, first.library_count());
        assert_eq!(0, second.library_count());
    }
}
