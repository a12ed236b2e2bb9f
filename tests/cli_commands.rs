//! Integration tests for the work behind each CLI command.
//!
//! These load a dictionary from disk the way the binary does and verify
//! translate, list and export end to end.

use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

use slang_translator::{export_js, translate, SlangDictionary};

const SAMPLE: &str = "\
BRB=Be Right Back
ASAP = As Soon As Possible
lol=Laughing Out Loud
IMO=In My Opinion

this line has no delimiter
EQ=x=y
LOL=Lots Of Love
";

/// Writes the sample dictionary into a temp dir.
fn create_dictionary() -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join("slang.txt");
    fs::write(&path, SAMPLE).expect("Failed to write dictionary");
    (path, temp_dir)
}

// ============================================================================
// Dictionary Loading
// ============================================================================

mod load {
    use super::*;

    #[test]
    fn test_load_sample() {
        let (path, _temp_dir) = create_dictionary();
        let dict = SlangDictionary::load(&path);

        assert_eq!(dict.len(), 5);
        assert_eq!(dict.get("asap"), Some("As Soon As Possible"));
        assert_eq!(dict.get("EQ"), Some("x=y"));
    }

    #[test]
    fn test_last_duplicate_wins() {
        let (path, _temp_dir) = create_dictionary();
        let dict = SlangDictionary::load(&path);

        assert_eq!(dict.get("lol"), Some("Lots Of Love"));
    }

    #[test]
    fn test_any_casing_lookup() {
        let (path, _temp_dir) = create_dictionary();
        let dict = SlangDictionary::load(&path);

        for key in ["imo", "IMO", "Imo", " imo "] {
            assert_eq!(dict.get(key), Some("In My Opinion"), "lookup of {:?}", key);
        }
    }

    #[test]
    fn test_missing_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let dict = SlangDictionary::load(&temp_dir.path().join("does-not-exist.txt"));

        assert!(dict.is_empty());
    }

    #[test]
    fn test_directory_instead_of_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let dict = SlangDictionary::load(temp_dir.path());

        assert!(dict.is_empty());
    }
}

// ============================================================================
// Translate Command
// ============================================================================

mod translate_command {
    use super::*;

    #[test]
    fn test_translate_with_loaded_dictionary() {
        let (path, _temp_dir) = create_dictionary();
        let dict = SlangDictionary::load(&path);

        let result = translate("brb, imo this is fine", &dict);
        assert_eq!(result.translated, "Be Right Back In My Opinion this is fine");
        assert_eq!(result.translations_count, 2);
    }

    #[test]
    fn test_translate_json_shape() {
        let dict = SlangDictionary::parse("BRB=Be Right Back\n");
        let result = translate("brb", &dict);
        let value = serde_json::to_value(&result).unwrap();

        assert_eq!(value["original"], "brb");
        assert_eq!(value["translated"], "Be Right Back");
        assert_eq!(value["translations_count"], 1);
    }
}

// ============================================================================
// List Command
// ============================================================================

mod list_command {
    use super::*;

    #[test]
    fn test_entries_sorted_by_key() {
        let (path, _temp_dir) = create_dictionary();
        let dict = SlangDictionary::load(&path);

        let keys: Vec<String> = dict.entries().map(|e| e.abbreviation).collect();
        assert_eq!(keys, vec!["ASAP", "BRB", "EQ", "IMO", "LOL"]);
    }

    #[test]
    fn test_search() {
        let (path, _temp_dir) = create_dictionary();
        let dict = SlangDictionary::load(&path);

        let found = dict.search("opinion");
        assert_eq!(found.len(), 1);
        assert_eq!(found.get("IMO"), Some("In My Opinion"));
    }
}

// ============================================================================
// Export Command
// ============================================================================

mod export_command {
    use super::*;

    #[test]
    fn test_export_mirrors_dictionary() {
        let (path, temp_dir) = create_dictionary();
        let dict = SlangDictionary::load(&path);
        let output = temp_dir.path().join("frontend/js/slangData.js");

        let count = export_js(&dict, "slang.txt", &output).expect("Failed to export");
        assert_eq!(count, 5);

        let content = fs::read_to_string(&output).expect("Failed to read export");
        assert!(content.starts_with("/**\n * Auto-generated from slang.txt\n"));

        let json = content
            .split_once("const SLANG_DATA = ")
            .and_then(|(_, rest)| rest.strip_suffix(";\n"))
            .expect("Unexpected export layout");
        let exported: SlangDictionary = serde_json::from_str(json).expect("Export is not JSON");
        assert_eq!(exported, dict);
    }

    #[test]
    fn test_export_overwrites_existing_file() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let output = temp_dir.path().join("slangData.js");
        fs::write(&output, "stale").unwrap();

        export_js(&SlangDictionary::new(), "slang.txt", &output).expect("Failed to export");

        let content = fs::read_to_string(&output).unwrap();
        assert!(!content.contains("stale"));
        assert!(content.contains("const SLANG_DATA = {};"));
    }
}
