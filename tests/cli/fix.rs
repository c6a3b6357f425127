use anyhow::Result;
use pretty_assertions::assert_eq;

use crate::{CliTest, go_file, run};

#[test]
fn test_fix_dry_run() -> Result<()> {
    let source = go_file(
        "\tlogger.Warnf(\"request failed: %v\", err)\n\tlogger.Info(\"started:\", name)\n",
    );
    let test = CliTest::with_file("main.go", &source)?;

    let output = run(test.fix_command())?;
    assert_eq!(output.code, Some(1));
    assert_eq!(
        output.stdout,
        r#"./main.go:4 -> logger.Warnf("request failed: %v", err) => logger.Warn("request failed: ", err)
./main.go:5 -> logger.Info("started:", name) => logger.Info("started: ", name)

Would rewrite 2 call(s) in 1 file(s).
Run with --apply to rewrite these calls.
"#
    );
    assert_eq!(test.read_file("main.go")?, source);
    Ok(())
}

#[test]
fn test_fix_apply() -> Result<()> {
    let test = CliTest::with_file(
        "main.go",
        &go_file("\tlogger.Warnf(\"request failed: %v\", err)\n\tlog.Println(\"ready:\", addr)\n"),
    )?;
    test.write_file(
        "server/server_test.go",
        "package server\n\nfunc TestServe(t *testing.T) {\n\tt.Errorf(\"unexpected value: %v\", got)\n}\n",
    )?;

    let mut cmd = test.fix_command();
    cmd.arg("--apply");
    let output = run(cmd)?;
    assert_eq!(output.code, Some(0));
    assert_eq!(output.stdout, "Rewrote 2 call(s) in 2 file(s).\n");

    assert_eq!(
        test.read_file("main.go")?,
        go_file("\tlogger.Warn(\"request failed: \", err)\n\tlog.Println(\"ready:\", addr)\n")
    );
    assert_eq!(
        test.read_file("server/server_test.go")?,
        "package server\n\nfunc TestServe(t *testing.T) {\n\tt.Error(\"unexpected value:\", got)\n}\n"
    );
    Ok(())
}

#[test]
fn test_fix_apply_is_idempotent() -> Result<()> {
    let test = CliTest::with_file(
        "main.go",
        &go_file("\tlog.Printf(\"a: %s\", x)\n\tlog.Print(\"b:\", y)\n\tlogger.Infof(\"c:  %v\", z)\n"),
    )?;

    let mut cmd = test.fix_command();
    cmd.arg("--apply");
    run(cmd)?;
    let once = test.read_file("main.go")?;

    let mut cmd = test.fix_command();
    cmd.arg("--apply");
    let output = run(cmd)?;
    assert_eq!(output.code, Some(0));
    assert_eq!(output.stdout, "✓ Checked 1 Go file - no issues found\n");
    assert_eq!(test.read_file("main.go")?, once);
    Ok(())
}

#[test]
fn test_fix_exclude_call_keeps_aliased_constructor() -> Result<()> {
    let source = go_file(
        "\t_ = pkgerrors.Errorf(\"wrap: %v\", err)\n\tlogger.Warnf(\"failed: %v\", err)\n",
    );
    let test = CliTest::with_file("main.go", &source)?;

    // Receivers are matched by name, so the alias is rewritten by default
    let output = run(test.fix_command())?;
    assert!(output.stdout.contains("pkgerrors.Error(\"wrap: \", err)"));

    let mut cmd = test.fix_command();
    cmd.args(["--exclude-call", "pkgerrors.Errorf", "--apply"]);
    let output = run(cmd)?;
    assert_eq!(output.code, Some(0));
    assert_eq!(output.stdout, "Rewrote 1 call(s) in 1 file(s).\n");
    assert_eq!(
        test.read_file("main.go")?,
        go_file("\t_ = pkgerrors.Errorf(\"wrap: %v\", err)\n\tlogger.Warn(\"failed: \", err)\n")
    );
    Ok(())
}

#[cfg(unix)]
#[test]
fn test_fix_apply_preserves_permissions() -> Result<()> {
    use std::fs;
    use std::os::unix::fs::PermissionsExt;

    let test = CliTest::with_file("main.go", &go_file("\tlog.Printf(\"a: %v\", x)\n"))?;
    let path = test.root().join("main.go");
    fs::set_permissions(&path, fs::Permissions::from_mode(0o600))?;

    let mut cmd = test.fix_command();
    cmd.arg("--apply");
    run(cmd)?;

    let mode = fs::metadata(&path)?.permissions().mode();
    assert_eq!(mode & 0o777, 0o600);
    assert_eq!(
        test.read_file("main.go")?,
        go_file("\tlog.Print(\"a: \", x)\n")
    );
    Ok(())
}

#[test]
fn test_fix_apply_leaves_unparsable_directory_untouched() -> Result<()> {
    let dirty = go_file("\tlog.Printf(\"a: %v\", x)\n");
    let test = CliTest::new()?;
    test.write_file("good/good.go", &dirty)?;
    test.write_file("bad/dirty.go", &dirty)?;
    test.write_file("bad/broken.go", "package bad\n\nfunc (\n")?;

    let mut cmd = test.fix_command();
    cmd.arg("--apply");
    let output = run(cmd)?;
    assert_eq!(output.code, Some(2));
    assert_eq!(output.stdout, "Rewrote 1 call(s) in 1 file(s).\n");
    assert_eq!(test.read_file("bad/dirty.go")?, dirty);
    assert_eq!(
        test.read_file("good/good.go")?,
        go_file("\tlog.Print(\"a: \", x)\n")
    );
    Ok(())
}
