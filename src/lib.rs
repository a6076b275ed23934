pub mod cli;
pub mod storage;

pub use cli::CLI;
pub use storage::{RecordStore, Result, StoreError, StudentRecord};

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_roster_survives_restart() {
        let temp_dir = TempDir::new().unwrap();
        let data_file = temp_dir.path().join("students.txt");

        // Phase 1: populate a store and save it.
        {
            let mut store = RecordStore::new();
            store
                .add(StudentRecord::new(
                    101,
                    "Alice".to_string(),
                    "alice@example.com".to_string(),
                    "CS101".to_string(),
                    92.5,
                ))
                .unwrap();
            store
                .add(StudentRecord::new(
                    102,
                    "Bob".to_string(),
                    "bob@example.com".to_string(),
                    "MATH201".to_string(),
                    67.0,
                ))
                .unwrap();
            store.delete(102).unwrap();
            store
                .add(StudentRecord::new(
                    103,
                    "Carol".to_string(),
                    "carol@example.com".to_string(),
                    "PHYS110".to_string(),
                    58.25,
                ))
                .unwrap();
            store.save(&data_file).unwrap();
        }

        // Phase 2: a fresh store sees exactly what was saved.
        {
            let mut store = RecordStore::new();
            assert_eq!(store.load(&data_file).unwrap(), 2);

            let alice = store.find(101).unwrap();
            assert_eq!(alice.name(), "Alice");
            assert_eq!(alice.email(), "alice@example.com");
            assert_eq!(alice.course(), "CS101");
            assert_eq!(alice.score(), 92.5);
            assert_eq!(alice.grade(), 'A');

            assert!(matches!(store.find(102), Err(StoreError::NotFound(102))));
            assert_eq!(store.find(103).unwrap().grade(), 'D');

            // The store stays fully usable after a reload.
            store
                .add(StudentRecord::new(
                    104,
                    "Dave".to_string(),
                    "dave@example.com".to_string(),
                    "CS101".to_string(),
                    75.0,
                ))
                .unwrap();
            assert_eq!(store.len(), 3);
        }
    }
}
