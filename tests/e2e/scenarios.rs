use super::helpers::{inventory, stderr, stdout, TestProject};

const ROWS: [[&str; 6]; 2] = [
    ["a", "1.0.0", "MIT", "Unknown", "Unknown", "Unknown"],
    ["b", "2.0.0", "GPL-3.0", "Unknown", "Unknown", "Unknown"],
];

#[test]
fn test_unapproved_license_fails() {
    let project = TestProject::new();

    let output = project.run_manylicenses(&["--approve=MIT", "--counts"], &inventory(&ROWS));

    assert_eq!(output.status.code(), Some(1));
    let stderr = stderr(&output);
    assert!(stderr.contains("\"b@2.0.0\" has unapproved license: \"GPL-3.0\""));
    assert!(stderr.contains("Unapproved licenses: \"GPL-3.0\""));
    assert!(stdout(&output).is_empty(), "counts are not printed on failure");
}

#[test]
fn test_excluded_package_passes() {
    let project = TestProject::new();

    let output = project.run_manylicenses(&["--approve=MIT", "--exclude=b", "--counts"], &inventory(&ROWS));

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let counts: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(counts, serde_json::json!({"MIT": 1}));
}

#[test]
fn test_exclude_prefix() {
    let project = TestProject::new();
    let rows = [
        ["@acme/ui", "1.0.0", "UNLICENSED", "Unknown", "Unknown", "Unknown"],
        ["react", "18.2.0", "MIT", "Unknown", "Unknown", "Unknown"],
    ];

    let output = project.run_manylicenses(&["--approve=MIT", "--exclude-prefix=@acme/"], &inventory(&rows));

    assert!(output.status.success(), "stderr: {}", stderr(&output));
}

#[test]
fn test_no_verify_counts_everything() {
    let project = TestProject::new();

    let output = project.run_manylicenses(&["--approve=MIT", "--no-verify", "--counts"], &inventory(&ROWS));

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let counts: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(counts, serde_json::json!({"MIT": 1, "GPL-3.0": 1}));
}

#[test]
fn test_csv_includes_violating_rows() {
    let project = TestProject::new();

    let output = project.run_manylicenses(&["--approve=MIT", "--csv"], &inventory(&ROWS));

    assert_eq!(output.status.code(), Some(1));
    let stdout = stdout(&output);
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "Name, Version, SPDX, Description, Authors/Contributors, URLs");
    assert_eq!(lines[1], r#""a", "1.0.0", "MIT", "", "", """#);
    assert_eq!(lines[2], r#""b", "2.0.0", "GPL-3.0", "", "", """#);
}

#[test]
fn test_package_json_config_is_merged() {
    let project = TestProject::new();
    project.write_package_json(
        r#"{"name": "app", "manylicenses": {"approve": "GPL-3.0", "exclude": []}}"#,
    );

    let output = project.run_manylicenses(&["--approve=MIT"], &inventory(&ROWS));

    assert!(output.status.success(), "stderr: {}", stderr(&output));
}

#[test]
fn test_missing_table_is_fatal() {
    let project = TestProject::new();

    let output = project.run_manylicenses(&["--counts", "--csv"], "{\"type\":\"info\",\"data\":\"nothing\"}\n");

    assert_eq!(output.status.code(), Some(1));
    assert!(stdout(&output).is_empty());
    assert!(stderr(&output).contains("no record of type \"table\""));
}

#[test]
fn test_malformed_input_is_fatal() {
    let project = TestProject::new();

    let output = project.run_manylicenses(&["--approve=MIT"], "{\"type\": \"table\"\n");

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr(&output).contains("malformed JSON on inventory line 1"));
}

#[test]
fn test_help_exits_zero_without_reading_input() {
    let project = TestProject::new();

    for flag in ["--help", "-h"] {
        let output = project.run_manylicenses(&[flag], "");

        assert!(output.status.success(), "{flag} should exit 0");
        let stdout = stdout(&output);
        assert!(stdout.contains("--approve"), "{flag}: {stdout}");
        assert!(stdout.contains("--exclude-prefix"), "{flag}: {stdout}");
        assert!(stdout.contains("--no-verify"), "{flag}: {stdout}");
        assert!(stdout.contains("Exit status"), "{flag}: {stdout}");
    }
}
