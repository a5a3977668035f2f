//! Loading the event list a session starts from.

use std::path::Path;

use praonde_core::{Event, Seed};
use tracing::debug;

use crate::error::AppError;

/// The built-in events, or the JSON array at `path`.
pub fn load_seed(path: Option<&Path>) -> Result<Seed, AppError> {
    let Some(path) = path else {
        return Ok(Seed::builtin());
    };

    let content = std::fs::read_to_string(path)?;
    let events: Vec<Event> = serde_json::from_str(&content)?;
    let seed = Seed::new(events)?;
    debug!(path = %path.display(), events = seed.len(), "loaded seed file");
    Ok(seed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use praonde_core::SeedError;

    fn write(dir: &tempfile::TempDir, body: &str) -> std::path::PathBuf {
        let path = dir.path().join("events.json");
        std::fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn no_path_means_builtin() {
        assert_eq!(load_seed(None).unwrap(), Seed::builtin());
    }

    #[test]
    fn loads_custom_events() {
        let dir = tempfile::tempdir().unwrap();
        let builtin = Seed::builtin();
        let events = &builtin.events()[..2];
        let path = write(&dir, &serde_json::to_string(events).unwrap());
        let seed = load_seed(Some(&path)).unwrap();
        assert_eq!(seed.events(), events);
    }

    #[test]
    fn rejects_duplicate_ids() {
        let dir = tempfile::tempdir().unwrap();
        let first = Seed::builtin().events()[0].clone();
        let path = write(&dir, &serde_json::to_string(&[&first, &first]).unwrap());
        assert!(matches!(
            load_seed(Some(&path)),
            Err(AppError::Seed(SeedError::DuplicateId(1)))
        ));
    }

    #[test]
    fn rejects_malformed_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = write(&dir, "[{\"id\": 1}]");
        assert!(matches!(load_seed(Some(&path)), Err(AppError::SeedJson(_))));
    }
}
