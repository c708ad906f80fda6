//! Tests for output tree recreation and candidate enumeration

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;
    use tiledata::io::layout::{list_candidates, prepare_output_tree};

    // Tests the four split/category directories are created
    // Verified by skipping the Validation split
    #[test]
    fn test_prepare_creates_layout() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("NewDatabase");

        prepare_output_tree(&root).unwrap();

        for split in ["Training", "Validation"] {
            for category in ["empty", "robot"] {
                assert!(root.join(split).join(category).is_dir());
            }
        }
    }

    // Tests stale outputs from a previous run are removed
    // Verified by removing the delete step
    #[test]
    fn test_prepare_removes_previous_run() {
        let dir = tempfile::tempdir().unwrap();
        let root = dir.path().join("NewDatabase");
        fs::create_dir_all(root.join("Training/empty")).unwrap();
        fs::write(root.join("Training/empty/0.jpg"), b"stale").unwrap();
        fs::write(root.join("leftover.txt"), b"stale").unwrap();

        prepare_output_tree(&root).unwrap();

        assert!(!root.join("Training/empty/0.jpg").exists());
        assert!(!root.join("leftover.txt").exists());
        assert!(root.join("Training/empty").is_dir());
    }

    // Tests candidates come back sorted, including non-image entries
    // Verified by removing the sort
    #[test]
    fn test_list_candidates_sorted() {
        let dir = tempfile::tempdir().unwrap();
        for name in ["c.png", "a.png", "b.txt"] {
            fs::write(dir.path().join(name), b"x").unwrap();
        }
        fs::create_dir(dir.path().join("nested")).unwrap();

        let names: Vec<PathBuf> = list_candidates(dir.path())
            .into_iter()
            .filter_map(|p| p.file_name().map(PathBuf::from))
            .collect();

        assert_eq!(
            names,
            vec![
                PathBuf::from("a.png"),
                PathBuf::from("b.txt"),
                PathBuf::from("c.png"),
                PathBuf::from("nested"),
            ]
        );
    }

    // Tests a missing input directory enumerates as empty
    // Verified by propagating the read_dir error
    #[test]
    fn test_list_candidates_missing_directory() {
        let dir = tempfile::tempdir().unwrap();
        assert!(list_candidates(&dir.path().join("RobotImages")).is_empty());
    }
}
