//! Steam game detection
//!
//! Scans the `*.acf` app manifests of each library for their app ID and name.

use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};

use walkdir::WalkDir;

use super::vdf::parse_line;
use super::Entry;
use crate::logging::{log_info, log_warning};

/// Manifest extension inside a steamapps directory
const MANIFEST_EXTENSION: &str = "acf";

/// Case-folded name fragments of runtimes and compatibility tools
/// (Steam Linux Runtime, Proton, Steamworks Redistributables, ...)
const EXCLUDED_NAME_FRAGMENTS: &[&str] = &["steam", "proton"];

/// Scan every library for installed games.
///
/// Libraries are visited in order and manifests in file name order. A library
/// that cannot be listed or a manifest that cannot be read is skipped with a
/// warning. Nothing is deduplicated.
pub fn scan_entries(libraries: &[PathBuf]) -> Vec<Entry> {
    let mut entries = Vec::new();

    for library in libraries {
        for manifest in list_manifests(library) {
            if let Some(entry) = read_manifest(&manifest) {
                if is_excluded(&entry.name) {
                    continue;
                }
                entries.push(entry);
            }
        }
    }

    log_info(&format!("Steam: Found {} installed games", entries.len()));
    entries
}

/// Manifest files directly inside `library`, sorted by file name
fn list_manifests(library: &Path) -> Vec<PathBuf> {
    let mut manifests = Vec::new();

    for item in WalkDir::new(library)
        .min_depth(1)
        .max_depth(1)
        .sort_by_file_name()
    {
        let item = match item {
            Ok(item) => item,
            Err(e) => {
                log_warning(&format!("Skipping unreadable library {}: {}", library.display(), e));
                continue;
            }
        };

        let path = item.path();
        if item.file_type().is_file()
            && path.extension().is_some_and(|ext| ext == MANIFEST_EXTENSION)
        {
            manifests.push(path.to_path_buf());
        }
    }

    manifests
}

/// Read `appid` and `name` from a manifest, stopping once both are known
fn read_manifest(path: &Path) -> Option<Entry> {
    let file = match File::open(path) {
        Ok(file) => file,
        Err(e) => {
            log_warning(&format!("Skipping manifest {}: {}", path.display(), e));
            return None;
        }
    };

    let mut app_id = String::new();
    let mut name = String::new();

    for line in BufReader::new(file).lines() {
        let line = match line {
            Ok(line) => line,
            Err(e) => {
                log_warning(&format!("Skipping manifest {}: {}", path.display(), e));
                return None;
            }
        };

        if let Some(kv) = parse_line(&line) {
            match kv.key.as_str() {
                "appid" => app_id = kv.value,
                "name" => name = kv.value,
                _ => {}
            }
        }

        if !app_id.is_empty() && !name.is_empty() {
            break;
        }
    }

    if app_id.is_empty() || name.is_empty() {
        return None;
    }

    Some(Entry { app_id, name })
}

fn is_excluded(name: &str) -> bool {
    let lower = name.to_lowercase();
    EXCLUDED_NAME_FRAGMENTS
        .iter()
        .any(|fragment| lower.contains(fragment))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn manifest(app_id: &str, name: &str) -> String {
        format!(
            "\"AppState\"\n{{\n\t\"appid\"\t\t\"{}\"\n\t\"Universe\"\t\t\"1\"\n\t\"name\"\t\t\"{}\"\n\t\"StateFlags\"\t\t\"4\"\n}}\n",
            app_id, name
        )
    }

    fn names(entries: &[Entry]) -> Vec<&str> {
        entries.iter().map(|e| e.name.as_str()).collect()
    }

    #[test]
    fn test_scan_reads_manifests_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let lib = dir.path().to_path_buf();
        fs::write(lib.join("appmanifest_620.acf"), manifest("620", "Portal 2")).unwrap();
        fs::write(lib.join("appmanifest_220.acf"), manifest("220", "Half-Life 2")).unwrap();
        fs::write(lib.join("notes.txt"), manifest("1", "Not A Manifest")).unwrap();

        let entries = scan_entries(&[lib]);
        assert_eq!(
            entries,
            vec![
                Entry { app_id: "220".into(), name: "Half-Life 2".into() },
                Entry { app_id: "620".into(), name: "Portal 2".into() },
            ]
        );
    }

    #[test]
    fn test_runtime_and_proton_entries_are_filtered() {
        let dir = tempfile::tempdir().unwrap();
        let lib = dir.path().to_path_buf();
        fs::write(lib.join("a.acf"), manifest("1070560", "Steam Linux Runtime")).unwrap();
        fs::write(lib.join("b.acf"), manifest("1493710", "Proton Experimental")).unwrap();
        fs::write(lib.join("c.acf"), manifest("228980", "Steamworks Common Redistributables")).unwrap();
        fs::write(lib.join("d.acf"), manifest("2379780", "Balatro")).unwrap();
        fs::write(lib.join("e.acf"), manifest("999", "SteamWorld Dig")).unwrap();

        let entries = scan_entries(&[lib]);
        assert_eq!(names(&entries), vec!["Balatro"]);
    }

    #[test]
    fn test_incomplete_manifests_are_dropped() {
        let dir = tempfile::tempdir().unwrap();
        let lib = dir.path().to_path_buf();
        fs::write(lib.join("a.acf"), "\"AppState\"\n{\n\t\"appid\"\t\t\"10\"\n}\n").unwrap();
        fs::write(lib.join("b.acf"), "\"AppState\"\n{\n\t\"name\"\t\t\"Nameless\"\n}\n").unwrap();
        fs::write(lib.join("c.acf"), manifest("30", "")).unwrap();
        fs::write(lib.join("d.acf"), manifest("40", "Day of Defeat")).unwrap();

        let entries = scan_entries(&[lib]);
        assert_eq!(names(&entries), vec!["Day of Defeat"]);
    }

    #[test]
    fn test_scan_stops_after_both_fields() {
        let dir = tempfile::tempdir().unwrap();
        let lib = dir.path().to_path_buf();
        let content = "\"AppState\"\n{\n\t\"appid\"\t\t\"70\"\n\t\"name\"\t\t\"Half-Life\"\n\t\"name\"\t\t\"Steam Overwritten\"\n}\n";
        fs::write(lib.join("a.acf"), content).unwrap();

        let entries = scan_entries(&[lib]);
        assert_eq!(entries, vec![Entry { app_id: "70".into(), name: "Half-Life".into() }]);
    }

    #[test]
    fn test_duplicate_libraries_are_not_deduplicated() {
        let dir = tempfile::tempdir().unwrap();
        let lib = dir.path().to_path_buf();
        fs::write(lib.join("appmanifest_440.acf"), manifest("440", "Team Fortress 2")).unwrap();

        let entries = scan_entries(&[lib.clone(), lib]);
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0], entries[1]);
    }

    #[test]
    fn test_unreadable_manifest_does_not_abort_scan() {
        let dir = tempfile::tempdir().unwrap();
        let lib = dir.path().to_path_buf();
        fs::write(lib.join("a.acf"), [0xff, 0xfe, 0xfd, b'\n']).unwrap();
        fs::write(lib.join("b.acf"), manifest("500", "Left 4 Dead")).unwrap();

        let missing = dir.path().join("does-not-exist");
        let entries = scan_entries(&[missing, lib]);
        assert_eq!(names(&entries), vec!["Left 4 Dead"]);
    }

    #[test]
    fn test_manifest_directories_are_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let lib = dir.path().to_path_buf();
        fs::create_dir(lib.join("weird.acf")).unwrap();
        fs::write(lib.join("weird.acf").join("inner.acf"), manifest("1", "Nested")).unwrap();

        assert!(scan_entries(&[lib]).is_empty());
    }
}
