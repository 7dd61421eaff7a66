use std::fs;

use tempfile::TempDir;

use super::*;

fn rules() -> ExclusionRules {
    ExclusionRules::builtin().unwrap()
}

fn scan(path: &str, content: &str) -> FileReport {
    let rules = rules();
    WhitespaceChecker::new(&rules).check_content(path, content)
}

#[test]
fn clean_file_passes() {
    let report = scan("./src/a.cpp", "int a;\n\nint b;\n");
    assert!(report.passed());
}

#[test]
fn empty_file_passes() {
    assert!(scan("./src/a.cpp", "").passed());
}

#[test]
fn three_blank_lines_reported_once() {
    let report = scan("./src/a.cpp", "a\n\n\n\nb\n");
    assert_eq!(
        report.violations,
        vec![Violation::MultipleEmptyLines {
            first_line: 2,
            last_line: 5
        }]
    );
}

#[test]
fn two_blank_lines_fail_outside_python() {
    let report = scan("./src/a.cpp", "a\n\n\nb\n");
    assert_eq!(
        report.violations,
        vec![Violation::MultipleEmptyLines {
            first_line: 2,
            last_line: 4
        }]
    );
}

#[test]
fn python_allows_two_blank_lines() {
    assert!(scan("./tools/run.py", "import os\n\n\ndef main():\n    pass\n").passed());
}

#[test]
fn python_rejects_three_blank_lines() {
    let report = scan("./tools/run.py", "a\n\n\n\nb\n");
    assert_eq!(
        report.violations,
        vec![Violation::MultipleEmptyLines {
            first_line: 2,
            last_line: 5
        }]
    );
}

#[test]
fn whitespace_only_lines_count_as_blank() {
    let report = scan("./src/a.cpp", "a\n\t\n\nb\n");
    assert!(report.violations.contains(&Violation::MultipleEmptyLines {
        first_line: 2,
        last_line: 4
    }));
    assert!(report
        .violations
        .contains(&Violation::TrailingWhitespace { line: 2 }));
}

#[test]
fn each_blank_run_reported_separately() {
    let report = scan("./src/a.cpp", "a\n\n\nb\n\n\nc\n");
    assert_eq!(
        report.violations,
        vec![
            Violation::MultipleEmptyLines {
                first_line: 2,
                last_line: 4
            },
            Violation::MultipleEmptyLines {
                first_line: 5,
                last_line: 7
            },
        ]
    );
}

#[test]
fn trailing_space_reported() {
    let report = scan("./src/a.cpp", "a \n");
    assert_eq!(
        report.violations,
        vec![Violation::TrailingWhitespace { line: 1 }]
    );
}

#[test]
fn trailing_tab_before_crlf_reported() {
    let report = scan("./src/a.cpp", "a\t\r\nb\r\n");
    assert_eq!(
        report.violations,
        vec![Violation::TrailingWhitespace { line: 1 }]
    );
}

#[test]
fn crlf_alone_is_not_trailing_whitespace() {
    assert!(scan("./src/a.cpp", "a\r\nb\r\n").passed());
}

#[test]
fn every_line_with_trailing_whitespace_reported() {
    let report = scan("./src/a.cpp", "a \nb\nc\t\n");
    assert_eq!(
        report.violations,
        vec![
            Violation::TrailingWhitespace { line: 1 },
            Violation::TrailingWhitespace { line: 3 },
        ]
    );
}

#[test]
fn trailing_whitespace_on_last_line_without_newline() {
    let report = scan("./src/a.cpp", "a\nb ");
    assert_eq!(
        report.violations,
        vec![
            Violation::TrailingWhitespace { line: 2 },
            Violation::MissingTrailingNewline,
        ]
    );
}

#[test]
fn trailing_blank_line_reported() {
    let report = scan("./src/a.cpp", "a\n\n");
    assert_eq!(report.violations, vec![Violation::ExtraTrailingNewline]);
}

#[test]
fn many_trailing_blank_lines_reported_once() {
    // A run at end of file is never closed by a non-blank line.
    let report = scan("./src/a.cpp", "a\n\n\n\n");
    assert_eq!(report.violations, vec![Violation::ExtraTrailingNewline]);
}

#[test]
fn lone_newline_ends_with_more_than_one_newline() {
    let report = scan("./src/a.cpp", "\n");
    assert_eq!(report.violations, vec![Violation::ExtraTrailingNewline]);
}

#[test]
fn missing_final_newline_reported() {
    let report = scan("./src/a.cpp", "a\nb");
    assert_eq!(report.violations, vec![Violation::MissingTrailingNewline]);
}

#[test]
fn project_file_may_omit_final_newline() {
    assert!(scan("./msbuild/ice.sln", "a\nb").passed());
    assert!(scan("./csharp/Ice.csproj", "a\nb").passed());
}

#[test]
fn project_file_still_rejects_extra_newline() {
    let report = scan("./msbuild/ice.sln", "a\n\n");
    assert_eq!(report.violations, vec![Violation::ExtraTrailingNewline]);
}

#[test]
fn asset_catalog_may_omit_final_newline() {
    assert!(scan("./ios/Images.xcassets/AppIcon/Contents.json", "{}").passed());
}

#[test]
fn trailing_whitespace_exclusion_suppresses_diagnostic() {
    let report = scan("./cpp/src/Slice/Grammar.cpp", "a  \n\t\nb \n");
    assert!(!report
        .violations
        .iter()
        .any(|v| matches!(v, Violation::TrailingWhitespace { .. })));
}

#[test]
fn blank_line_exclusion_skips_runs_and_eof_checks() {
    let path = "./src/ice/msi/docs/main/THIRD_PARTY_LICENSE.txt";
    assert!(scan(path, "a\n\n\n\nb\n\n").passed());
    assert!(scan(path, "a\nb").passed());
}

#[test]
fn blank_line_exclusion_keeps_trailing_whitespace_check() {
    let path = "./src/ice/msi/docs/main/THIRD_PARTY_LICENSE.txt";
    let report = scan(path, "a \n");
    assert_eq!(
        report.violations,
        vec![Violation::TrailingWhitespace { line: 1 }]
    );
}

#[test]
fn violations_accumulate_across_categories() {
    let report = scan("./src/a.cpp", "a \n\n\nb\n\n");
    assert_eq!(
        report.violations,
        vec![
            Violation::TrailingWhitespace { line: 1 },
            Violation::MultipleEmptyLines {
                first_line: 2,
                last_line: 4
            },
            Violation::ExtraTrailingNewline,
        ]
    );
}

#[test]
fn scanning_twice_is_identical() {
    let content = "a \n\n\n\nb";
    assert_eq!(scan("./x.c", content), scan("./x.c", content));
}

#[test]
fn check_reads_file_from_disk() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("a.txt");
    fs::write(&path, "hello \n").unwrap();

    let rules = rules();
    let report = WhitespaceChecker::new(&rules).check(&path).unwrap();
    assert_eq!(
        report.violations,
        vec![Violation::TrailingWhitespace { line: 1 }]
    );
    assert_eq!(report.path, path.to_string_lossy());
}

#[test]
fn non_utf8_file_fails_with_single_violation() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("latin1.txt");
    fs::write(&path, b"caf\xe9 \n\n\n\n").unwrap();

    let rules = rules();
    let report = WhitespaceChecker::new(&rules).check(&path).unwrap();
    assert_eq!(report.violations, vec![Violation::NotUtf8]);
}

#[test]
fn missing_file_is_an_error() {
    let dir = TempDir::new().unwrap();
    let rules = rules();
    let result = WhitespaceChecker::new(&rules).check(&dir.path().join("gone.txt"));
    assert!(matches!(result, Err(WsGuardError::FileRead { .. })));
}

#[test]
fn check_whitespace_returns_pass_flag() {
    let dir = TempDir::new().unwrap();
    let good = dir.path().join("good.txt");
    let bad = dir.path().join("bad.txt");
    fs::write(&good, "ok\n").unwrap();
    fs::write(&bad, "a\nb").unwrap();

    let rules = rules();
    assert!(check_whitespace(&good, &rules));
    assert!(!check_whitespace(&bad, &rules));
    assert!(!check_whitespace(&dir.path().join("gone.txt"), &rules));
}

#[test]
fn strip_terminator_handles_line_endings() {
    assert_eq!(strip_terminator("a\n"), "a");
    assert_eq!(strip_terminator("a\r\n"), "a");
    assert_eq!(strip_terminator("a"), "a");
    assert_eq!(strip_terminator("a\r"), "a");
    assert_eq!(strip_terminator("a\r\r"), "a\r");
}

#[test]
fn split_lines_breaks_on_every_terminator() {
    assert_eq!(split_lines("a\nb\r\nc\rd"), vec!["a\n", "b\r\n", "c\r", "d"]);
    assert_eq!(split_lines("\r\r\n"), vec!["\r", "\r\n"]);
    assert!(split_lines("").is_empty());
}

#[test]
fn lone_carriage_return_ends_line() {
    assert!(scan("./src/a.cpp", "a\rb\r").passed());
}

#[test]
fn trailing_space_before_lone_carriage_return_reported() {
    let report = scan("./src/a.cpp", "a \rb\n");
    assert_eq!(
        report.violations,
        vec![Violation::TrailingWhitespace { line: 1 }]
    );
}

#[test]
fn carriage_return_blank_lines_form_a_run() {
    let report = scan("./src/a.cpp", "a\r\r\rb\r");
    assert_eq!(
        report.violations,
        vec![Violation::MultipleEmptyLines {
            first_line: 2,
            last_line: 4
        }]
    );
}

#[test]
fn check_file_reports_under_given_path() {
    let dir = TempDir::new().unwrap();
    let location = dir.path().join("ice.sln");
    fs::write(&location, "a\nb").unwrap();

    let rules = rules();
    let checker = WhitespaceChecker::new(&rules);

    // Rules are matched against the reported path, not the on-disk location.
    let exempt = checker.check_file(&location, "./msbuild/ice.sln").unwrap();
    assert!(exempt.passed());
    assert_eq!(exempt.path, "./msbuild/ice.sln");

    let plain = checker.check_file(&location, "./notes.txt").unwrap();
    assert_eq!(plain.violations, vec![Violation::MissingTrailingNewline]);
}
