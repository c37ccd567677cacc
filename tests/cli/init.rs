use anyhow::Result;

use crate::{CliTest, run};

#[test]
fn init_creates_the_config_file() -> Result<()> {
    let test = CliTest::new()?;

    let (stdout, _, code) = run(test.command().arg("init"));

    assert_eq!(code, Some(0));
    assert!(stdout.contains("Created .deplensrc.json"));

    let content = std::fs::read_to_string(test.root().join(".deplensrc.json"))?;
    let value: serde_json::Value = serde_json::from_str(&content)?;
    assert!(value["ignores"].as_array().unwrap().iter().any(|p| p
        .as_str()
        .unwrap()
        .contains("node_modules")));
    Ok(())
}

#[test]
fn init_refuses_to_overwrite() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".deplensrc.json", "{}")?;

    let (_, stderr, code) = run(test.command().arg("init"));

    assert_eq!(code, Some(2));
    assert!(stderr.contains("already exists"));
    Ok(())
}
