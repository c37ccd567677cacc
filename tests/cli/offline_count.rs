use anyhow::Result;

use crate::{CliTest, run};

fn record(entity: &str) -> String {
    format!(r#"{{"entity":"{}","time":1740000000.0}}"#, entity)
}

#[test]
fn prints_the_pending_record_count() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(
        "queue.jsonl",
        &format!("{}\n{}\n", record("a.ts"), record("b.ts")),
    )?;

    let (stdout, _, code) = run(test
        .command()
        .arg("offline-count")
        .arg("--queue-file")
        .arg("queue.jsonl"));

    assert_eq!(code, Some(0));
    assert_eq!(stdout.trim(), "2");
    Ok(())
}

#[test]
fn missing_queue_file_counts_zero() -> Result<()> {
    let test = CliTest::new()?;

    let (stdout, _, code) = run(test
        .command()
        .arg("offline-count")
        .arg("--queue-file")
        .arg("absent.jsonl"));

    assert_eq!(code, Some(0));
    assert_eq!(stdout.trim(), "0");
    Ok(())
}

#[test]
fn queue_file_from_config_is_used() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file(".deplensrc.json", r#"{ "queueFile": "my-queue.jsonl" }"#)?;
    test.write_file("my-queue.jsonl", &record("a.ts"))?;

    let (stdout, _, code) = run(test.command().arg("offline-count"));

    assert_eq!(code, Some(0));
    assert_eq!(stdout.trim(), "1");
    Ok(())
}

#[test]
fn source_root_selects_the_config_directory() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("project/.deplensrc.json", r#"{ "queueFile": "pending.jsonl" }"#)?;
    test.write_file("project/pending.jsonl", &record("a.ts"))?;

    let (stdout, _, code) = run(test
        .command()
        .arg("offline-count")
        .arg("--source-root")
        .arg("project"));

    assert_eq!(code, Some(0));
    assert_eq!(stdout.trim(), "1");
    Ok(())
}

#[test]
fn corrupt_queue_is_an_error() -> Result<()> {
    let test = CliTest::new()?;
    test.write_file("queue.jsonl", "this is not json\n")?;

    let (_, stderr, code) = run(test
        .command()
        .arg("offline-count")
        .arg("--queue-file")
        .arg("queue.jsonl"));

    assert_eq!(code, Some(2));
    assert!(stderr.contains("Corrupt queue record"));
    Ok(())
}
