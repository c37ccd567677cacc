use anyhow::Result;

use crate::{CliTest, run};

#[test]
fn scan_lists_dependencies_in_file_order() -> Result<()> {
    let test = CliTest::with_file(
        "src/app.tsx",
        r#"
import React from 'react';
import { Button } from './components/button.tsx';
import './styles/global.css.js';
"#,
    )?;

    let (stdout, _, code) = run(&mut test.scan_command());

    assert_eq!(code, Some(0));
    assert!(stdout.contains("react, button, global.css"));
    assert!(stdout.contains("Scanned 1 file - 3 dependencies found"));
    Ok(())
}

#[test]
fn scan_without_imports_reports_zero() -> Result<()> {
    let test = CliTest::with_file("src/util.ts", "export const x = 1;\n")?;

    let (stdout, _, code) = run(&mut test.scan_command());

    assert_eq!(code, Some(0));
    assert!(stdout.contains("Scanned 1 file - 0 dependencies found"));
    Ok(())
}

#[test]
fn scan_keeps_duplicate_imports() -> Result<()> {
    let test = CliTest::with_file(
        "a.js",
        "import x from 'react';\nimport y from 'react';\n",
    )?;

    let (stdout, _, _) = run(&mut test.scan_command());

    assert!(stdout.contains("react, react"));
    Ok(())
}

#[test]
fn scan_respects_config_ignores() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        ".deplensrc.json",
        r#"{ "ignores": ["**/generated/**"] }"#,
    )?;
    test.write_file("src/app.ts", "import a from 'kept';")?;
    test.write_file("generated/types.ts", "import b from 'dropped';")?;

    let (stdout, _, code) = run(&mut test.scan_command());

    assert_eq!(code, Some(0));
    assert!(stdout.contains("kept"));
    assert!(!stdout.contains("dropped"));
    Ok(())
}

#[test]
fn scan_ignores_test_files_by_default() -> Result<()> {
    let test = CliTest::with_file("src/app.ts", "import a from 'app-dep';")?;
    test.write_file("src/app.test.ts", "import b from 'test-dep';")?;

    let (stdout, _, _) = run(&mut test.scan_command());

    assert!(stdout.contains("app-dep"));
    assert!(!stdout.contains("test-dep"));
    Ok(())
}

#[test]
fn scan_fails_with_exit_one_when_a_file_cannot_be_tokenized() -> Result<()> {
    let test = CliTest::with_file("ok.js", "import a from 'fine';")?;
    test.write_file("broken.js", "const s = 'unterminated\n")?;

    let (stdout, stderr, code) = run(&mut test.scan_command());

    assert_eq!(code, Some(1));
    assert!(stdout.contains("fine"));
    assert!(stdout.contains("1 file failed"));
    assert!(stderr.contains("could not be processed"));
    Ok(())
}

#[test]
fn scan_verbose_names_the_failing_file() -> Result<()> {
    let test = CliTest::with_file("broken.js", "const s = 'unterminated\n")?;

    let (_, stderr, code) = run(test.scan_command().arg("--verbose"));

    assert_eq!(code, Some(1));
    assert!(stderr.contains("broken.js"));
    assert!(stderr.contains("tokenize"));
    Ok(())
}

#[test]
fn scan_json_emits_machine_readable_report() -> Result<()> {
    let test = CliTest::with_file("src/app.ts", "import a from '@org/pkg';")?;

    let (stdout, _, code) = run(test.scan_command().arg("--json"));

    assert_eq!(code, Some(0));
    let value: serde_json::Value = serde_json::from_str(&stdout)?;
    let report = &value["reports"][0];
    assert!(report["path"].as_str().unwrap().ends_with("src/app.ts"));
    assert_eq!(report["language"], "typescript");
    assert_eq!(report["dependencies"][0], "pkg");
    Ok(())
}

#[test]
fn scan_source_root_flag_overrides_cwd() -> Result<()> {
    let test = CliTest::with_file("project/src/app.ts", "import a from 'nested';")?;

    let root = test.root().join("project");
    let (stdout, _, code) = run(test.scan_command().arg("--source-root").arg(&root));

    assert_eq!(code, Some(0));
    assert!(stdout.contains("nested"));
    Ok(())
}

#[test]
fn scan_bad_source_root_is_an_error() -> Result<()> {
    let test = CliTest::new()?;

    let (_, stderr, code) = run(test
        .scan_command()
        .arg("--source-root")
        .arg("/definitely/not/here"));

    assert_eq!(code, Some(2));
    assert!(stderr.contains("Source root is not a directory"));
    Ok(())
}

#[test]
fn help_lists_commands() -> Result<()> {
    let test = CliTest::new()?;

    let (stdout, _, code) = run(test.command().arg("--help"));

    assert_eq!(code, Some(0));
    assert!(stdout.contains("scan"));
    assert!(stdout.contains("offline-count"));
    assert!(stdout.contains("init"));
    Ok(())
}
