use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, go_file, run};

#[test]
fn test_check_no_findings() -> Result<()> {
    let test = CliTest::with_file("main.go", &go_file("\tlog.Print(\"ready: \", addr)\n"))?;

    let output = run(test.check_command())?;
    assert_eq!(output.code, Some(0));
    assert_eq!(output.stdout, "✓ Checked 1 Go file - no issues found\n");
    assert_eq!(output.stderr, "");
    Ok(())
}

#[test]
fn test_check_reports_findings() -> Result<()> {
    let test = CliTest::with_file(
        "main.go",
        &go_file("\tlogger.Warnf(\"request failed: %v\", err)\n\tlog.Printf(\"done\")\n"),
    )?;
    test.write_file(
        "pkg/util/util_test.go",
        "package util\n\nfunc TestX(t *testing.T) {\n\tt.Errorf(\"unexpected value: %v\", got)\n}\n",
    )?;

    let output = run(test.check_command())?;
    assert_eq!(output.code, Some(1));
    assert_eq!(
        output.stdout,
        r#"./main.go:4 -> logger.Warnf("request failed: %v", err)
./pkg/util/util_test.go:4 -> t.Errorf("unexpected value: %v", got)

✘ 2 findings in 2 files
"#
    );
    Ok(())
}

#[test]
fn test_check_does_not_modify_files() -> Result<()> {
    let source = go_file("\tlog.Printf(\"a: %v\", x)\n");
    let test = CliTest::with_file("main.go", &source)?;

    run(test.check_command())?;
    assert_eq!(test.read_file("main.go")?, source);
    Ok(())
}

#[test]
fn test_check_skips_vendor_and_excluded() -> Result<()> {
    let dirty = go_file("\tlog.Printf(\"a: %v\", x)\n");
    let test = CliTest::new()?;
    test.write_file("vendor/dep/dep.go", &dirty)?;
    test.write_file("testdata/case.go", &dirty)?;
    test.write_file("gen_api/api.go", &dirty)?;

    let output = run(test.check_command())?;
    assert_eq!(output.code, Some(1));
    assert!(!output.stdout.contains("vendor"));
    assert!(output.stdout.contains("./testdata/case.go:4"));

    let mut cmd = test.check_command();
    cmd.args(["--exclude", "testdata", "--exclude", "gen_*"]);
    let output = run(cmd)?;
    assert_eq!(output.code, Some(0));
    assert_eq!(output.stdout, "✓ Checked 0 Go files - no issues found\n");
    Ok(())
}

#[test]
fn test_check_explicit_paths() -> Result<()> {
    let dirty = go_file("\tlog.Printf(\"a: %v\", x)\n");
    let test = CliTest::new()?;
    test.write_file("a/a.go", &dirty)?;
    test.write_file("b/b.go", &dirty)?;

    let mut cmd = test.check_command();
    cmd.arg("b");
    let output = run(cmd)?;
    assert_eq!(
        output.stdout,
        "b/b.go:4 -> log.Printf(\"a: %v\", x)\n\n✘ 1 finding in 1 file\n"
    );
    Ok(())
}

#[test]
fn test_check_custom_prefix() -> Result<()> {
    let test = CliTest::with_file(
        "main.go",
        &go_file("\tlog.Printf(\"a: %v\", x)\n\tlog.Noticef(\"b: %v\", y)\n"),
    )?;

    let mut cmd = test.check_command();
    cmd.args(["--prefix", "Notice"]);
    let output = run(cmd)?;
    assert_eq!(
        output.stdout,
        "./main.go:5 -> log.Noticef(\"b: %v\", y)\n\n✘ 1 finding in 1 file\n"
    );
    Ok(())
}

#[test]
fn test_check_parse_error_skips_directory() -> Result<()> {
    let dirty = go_file("\tlog.Printf(\"a: %v\", x)\n");
    let test = CliTest::new()?;
    test.write_file("good/good.go", &dirty)?;
    test.write_file("bad/dirty.go", &dirty)?;
    test.write_file("bad/broken.go", "package bad\n\nfunc (\n")?;

    let output = run(test.check_command())?;
    assert_eq!(output.code, Some(2));
    assert_eq!(
        output.stdout,
        "./good/good.go:4 -> log.Printf(\"a: %v\", x)\n\n✘ 1 finding in 1 file\n"
    );
    assert!(
        output
            .stderr
            .starts_with("error: failed to parse ./bad/broken.go")
    );
    assert!(output.stderr.contains("[parse-error]"));
    Ok(())
}

#[test]
fn test_check_missing_root_is_fatal() -> Result<()> {
    let test = CliTest::new()?;

    let mut cmd = test.check_command();
    cmd.arg("missing");
    let output = run(cmd)?;
    assert_eq!(output.code, Some(2));
    assert_eq!(output.stdout, "");
    assert!(output.stderr.starts_with("error: failed to stat missing"));
    Ok(())
}

#[test]
fn test_check_file_root_is_ignored() -> Result<()> {
    let test = CliTest::with_file("main.go", &go_file("\tlog.Printf(\"a: %v\", x)\n"))?;

    let mut cmd = test.check_command();
    cmd.arg("main.go");
    let output = run(cmd)?;
    assert_eq!(output.code, Some(0));
    assert_eq!(output.stderr, "warning: Ignoring non-directory main.go\n");
    Ok(())
}

#[test]
fn test_check_json() -> Result<()> {
    let test = CliTest::with_file("main.go", &go_file("\tt.Skipf(\"flaky: %v\", reason)\n"))?;

    let mut cmd = test.check_command();
    cmd.args(["--format", "json"]);
    let output = run(cmd)?;
    assert_eq!(output.code, Some(1));

    let value: serde_json::Value = serde_json::from_str(&output.stdout)?;
    assert_eq!(value["files_checked"], 1);
    let finding = &value["findings"][0];
    assert_eq!(finding["location"]["file_path"], "./main.go");
    assert_eq!(finding["location"]["line"], 4);
    assert_eq!(finding["location"]["col"], 2);
    assert_eq!(finding["excerpt"], r#"t.Skipf("flaky: %v", reason)"#);
    assert_eq!(finding["replacement"], r#"t.Skip("flaky:", reason)"#);
    assert_eq!(finding["variant"], "format-to-plain");
    assert_eq!(value["errors"], serde_json::json!([]));
    Ok(())
}
