// tests/integration_tests/scenarios_test.rs
use super::common::{analyze_to_string, create_test_bytes, create_test_file};
use anyhow::Result;
use letterfreq::AnalysisConfig;
use tempfile::TempDir;

#[test]
fn test_empty_directory() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output = analyze_to_string(&AnalysisConfig::new(temp_dir.path()))?;

    assert_eq!(output, "No text files found in the specified folder.\n");
    Ok(())
}

#[test]
fn test_directory_without_txt_files() -> Result<()> {
    let temp_dir = TempDir::new()?;
    create_test_file(temp_dir.path(), "notes.md", "letters everywhere")?;
    create_test_file(temp_dir.path(), "nested/inner.txt", "but too deep")?;

    let output = analyze_to_string(&AnalysisConfig::new(temp_dir.path()))?;
    assert_eq!(output, "No text files found in the specified folder.\n");
    Ok(())
}

#[test]
fn test_single_mixed_case_file() -> Result<()> {
    let temp_dir = TempDir::new()?;
    create_test_file(temp_dir.path(), "a.txt", "AbC ab")?;

    let output = analyze_to_string(&AnalysisConfig::new(temp_dir.path()))?;
    let folder = temp_dir.path().display();
    let expected = format!(
        "\nMost common single letters in {folder}:\n\
         'a': 2 occurrences\n\
         'b': 2 occurrences\n\
         'c': 1 occurrences\n\
         Total letters counted: 5\n\
         \nMost common two-letter combinations in {folder}:\n\
         'ab': 2 occurrences\n\
         'bc': 1 occurrences\n\
         'ca': 1 occurrences\n\
         Total two-letter combinations counted: 4\n"
    );

    assert_eq!(output, expected);
    Ok(())
}

#[test]
fn test_analyze_reports_missing_directory_itself() -> Result<()> {
    let temp_dir = TempDir::new()?;
    let output = analyze_to_string(&AnalysisConfig::new(temp_dir.path().join("corpus")))?;

    assert_eq!(
        output,
        "Invalid folder path. Please provide a valid directory.\n"
    );
    Ok(())
}

#[test]
fn test_undecodable_file_is_reported_and_skipped() -> Result<()> {
    let temp_dir = TempDir::new()?;
    create_test_bytes(temp_dir.path(), "broken.txt", b"ok \xff\xfe bad")?;
    create_test_file(temp_dir.path(), "fine.txt", "zzz")?;

    let output = analyze_to_string(&AnalysisConfig::new(temp_dir.path()))?;

    assert!(
        output.starts_with("Error reading file broken.txt: "),
        "error line comes first and names the file: {output:?}"
    );
    assert!(output.contains("'z': 3 occurrences"));
    assert!(output.contains("'zz': 2 occurrences"));
    assert!(output.contains("Total letters counted: 3"));
    assert!(!output.contains("'o'"), "nothing from the broken file is counted");
    Ok(())
}

#[test]
fn test_file_without_letters() -> Result<()> {
    let temp_dir = TempDir::new()?;
    create_test_file(temp_dir.path(), "digits.txt", "0123456789 !?,. \n")?;

    let output = analyze_to_string(&AnalysisConfig::new(temp_dir.path()))?;

    assert_eq!(output, "No letters found in the text files.\n");
    assert!(!output.contains("two-letter"));
    Ok(())
}

#[test]
fn test_single_letters_only_prints_no_pairs_message() -> Result<()> {
    let temp_dir = TempDir::new()?;
    create_test_file(temp_dir.path(), "x.txt", "x")?;
    create_test_file(temp_dir.path(), "y.txt", "  Y  ")?;

    let output = analyze_to_string(&AnalysisConfig::new(temp_dir.path()))?;

    assert!(output.contains("'x': 1 occurrences"));
    assert!(output.contains("'y': 1 occurrences"));
    assert!(output.ends_with(
        "Total letters counted: 2\nNo two-letter combinations found in the text files.\n"
    ));
    Ok(())
}
