//! Layout checks for the test tree
//!
//! `tests/unit` mirrors `src/` file for file, every mirrored module is wired
//! into the unit test crate, and every top-level scenario drives a full
//! generation run inside a temporary directory.

#[cfg(test)]
mod tests {
    use std::collections::BTreeSet;
    use std::fs;
    use std::io;
    use std::path::{Path, PathBuf};

    const SRC_DIR: &str = "src";
    const UNIT_DIR: &str = "tests/unit";
    const TESTS_DIR: &str = "tests";

    /// Root of the unit test crate; it checks the binary setup, not a module
    const UNIT_ROOT: &str = "main.rs";

    /// Crate roots that only wire modules together
    const SRC_ROOTS: [&str; 2] = ["lib.rs", "main.rs"];

    fn rust_files(base: &Path) -> io::Result<BTreeSet<PathBuf>> {
        let mut files = BTreeSet::new();
        let mut pending = vec![base.to_path_buf()];

        while let Some(dir) = pending.pop() {
            for entry in fs::read_dir(&dir)? {
                let path = entry?.path();
                if path.is_dir() {
                    pending.push(path);
                } else if path.extension().is_some_and(|ext| ext == "rs") {
                    let relative = path
                        .strip_prefix(base)
                        .map_err(|_| io::Error::other("entry outside its base directory"))?;
                    files.insert(relative.to_path_buf());
                }
            }
        }

        Ok(files)
    }

    fn is_module_file(path: &Path) -> bool {
        path.file_name().is_some_and(|name| name == "mod.rs")
    }

    fn is_src_root(path: &Path) -> bool {
        SRC_ROOTS.iter().any(|root| path == Path::new(root))
    }

    fn module_name(path: &Path) -> Option<String> {
        if is_module_file(path) {
            path.parent()?.file_name()?.to_str().map(str::to_owned)
        } else {
            path.file_stem()?.to_str().map(str::to_owned)
        }
    }

    fn declares_module(content: &str, name: &str) -> bool {
        content
            .lines()
            .map(str::trim)
            .any(|line| line == format!("mod {name};"))
    }

    fn listing(paths: &[PathBuf]) -> String {
        paths
            .iter()
            .map(|path| format!("  - {}", path.display()))
            .collect::<Vec<_>>()
            .join("\n")
    }

    // Tests every source file has a unit test file at the same relative path
    // Verified by deleting tests/unit/spatial/sliding.rs
    #[test]
    fn test_every_src_file_has_unit_tests() {
        let src = rust_files(Path::new(SRC_DIR)).unwrap();
        let unit = rust_files(Path::new(UNIT_DIR)).unwrap();

        let missing: Vec<PathBuf> = src
            .iter()
            .filter(|path| !is_src_root(path) && !is_module_file(path))
            .filter(|path| !unit.contains(*path))
            .cloned()
            .collect();

        assert!(
            missing.is_empty(),
            "src files without a tests/unit counterpart:\n{}",
            listing(&missing)
        );
    }

    // Tests no unit test file outlives the source file it mirrors
    // Verified by adding tests/unit/io/cli.rs with no src/io/cli.rs
    #[test]
    fn test_every_unit_file_has_src_counterpart() {
        let src = rust_files(Path::new(SRC_DIR)).unwrap();
        let unit = rust_files(Path::new(UNIT_DIR)).unwrap();

        let orphaned: Vec<PathBuf> = unit
            .iter()
            .filter(|path| *path != Path::new(UNIT_ROOT) && !is_module_file(path))
            .filter(|path| !src.contains(*path))
            .cloned()
            .collect();

        assert!(
            orphaned.is_empty(),
            "tests/unit files with no src counterpart:\n{}",
            listing(&orphaned)
        );
    }

    // Tests each unit test file is declared by its parent module so it compiles
    // Verified by removing `mod region;` from tests/unit/spatial/mod.rs
    #[test]
    fn test_unit_files_are_declared() {
        let base = Path::new(UNIT_DIR);
        let unit = rust_files(base).unwrap();

        let undeclared: Vec<PathBuf> = unit
            .iter()
            .filter(|path| *path != Path::new(UNIT_ROOT))
            .filter(|path| {
                let Some(name) = module_name(path) else {
                    return true;
                };
                let parent_dir = if is_module_file(path) {
                    path.parent().and_then(Path::parent)
                } else {
                    path.parent()
                };
                let parent = match parent_dir {
                    Some(dir) if dir.as_os_str().is_empty() => base.join(UNIT_ROOT),
                    Some(dir) => base.join(dir).join("mod.rs"),
                    None => base.join(UNIT_ROOT),
                };
                let content = fs::read_to_string(parent).unwrap_or_default();
                !declares_module(&content, &name)
            })
            .cloned()
            .collect();

        assert!(
            undeclared.is_empty(),
            "tests/unit files not declared by their parent module:\n{}",
            listing(&undeclared)
        );
    }

    // Tests unit test files, including the crate root, contain test functions
    // Verified by emptying the tests module of tests/unit/io/layout.rs
    #[test]
    fn test_unit_files_contain_tests() {
        let base = Path::new(UNIT_DIR);
        let unit = rust_files(base).unwrap();

        let empty: Vec<PathBuf> = unit
            .iter()
            .filter(|path| !is_module_file(path))
            .filter(|path| {
                let content = fs::read_to_string(base.join(path)).unwrap_or_default();
                !content.contains("#[test]")
            })
            .cloned()
            .collect();

        assert!(
            empty.is_empty(),
            "tests/unit files without any #[test] function:\n{}",
            listing(&empty)
        );
    }

    // Tests every top-level scenario runs the generator in a temporary directory
    // Verified by pointing tests/scenario.rs at the working directory
    #[test]
    fn test_scenarios_run_generator_in_tempdir() {
        let mut scenarios = Vec::new();
        for entry in fs::read_dir(TESTS_DIR).unwrap() {
            let path = entry.unwrap().path();
            if path.is_file() && path.extension().is_some_and(|ext| ext == "rs") {
                scenarios.push(path);
            }
        }
        scenarios.sort();

        assert!(
            scenarios.contains(&Path::new(TESTS_DIR).join("scenario.rs")),
            "tests/scenario.rs is missing"
        );

        let incomplete: Vec<PathBuf> = scenarios
            .into_iter()
            .filter(|path| {
                let content = fs::read_to_string(path).unwrap_or_default();
                !(content.contains("#[test]")
                    && content.contains("DatasetGenerator")
                    && content.contains("tempfile::tempdir()"))
            })
            .collect();

        assert!(
            incomplete.is_empty(),
            "scenario files must contain tests that run DatasetGenerator under tempfile::tempdir():\n{}",
            listing(&incomplete)
        );
    }
}
