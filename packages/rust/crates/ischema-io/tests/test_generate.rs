//! Tests for the generation driver - project directory to schema files.

use std::fs;
use std::path::Path;

use ischema_io::{
    CONFIG_FILE_NAME, GenerateError, Generator, SinkError, init_config, load_config,
    prepare_out_dir,
};
use serde_json::Value;
use tempfile::TempDir;

const USER_TS: &str = "\
import { x } from './x';

/* SCHEMA */
interface User {
\tid: string;
\tprofile: {
\t\tage: number;
\t\ttags: {
\t\t\t[key: string]: boolean;
\t\t};
\t};
}
/* END SCHEMA */

export function helper() {}
";

const ORDER_TS: &str = "\
/* SCHEMA */
interface Order {
  [key: string]: string;
  total: number;
}
/* END SCHEMA */
/* SCHEMA */
interface Unfinished {
  a: string;
}
";

fn write(path: &Path, content: &str) {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(path, content).unwrap();
}

fn read_json(path: &Path) -> Value {
    serde_json::from_str(&fs::read_to_string(path).unwrap()).unwrap()
}

#[tokio::test]
async fn test_generate_project_with_init_config() {
    let project = TempDir::new().unwrap();
    let root = project.path();
    write(&root.join("src/user.ts"), USER_TS);
    write(&root.join("src/models/order.ts"), ORDER_TS);
    write(&root.join("src/readme.md"), USER_TS);
    init_config(root).unwrap();

    let config = load_config(root).unwrap().resolve(root);
    prepare_out_dir(&config.out_dir).await.unwrap();
    let report = Generator::new(config).run().await.unwrap();

    assert_eq!(report.files_scanned, 2);
    assert_eq!(report.schemas_written.len(), 2);

    let out = root.join("schemas");
    assert!(out.join("User.json").is_file());
    assert!(out.join("Order.json").is_file());
    assert!(!out.join("Unfinished.json").exists());

    let user = read_json(&out.join("User.json"));
    assert_eq!(user["title"], "User");
    assert_eq!(user["required"], serde_json::json!(["id", "profile"]));
    let tags = &user["properties"]["profile"]["properties"]["tags"];
    assert_eq!(tags["type"], "object");
    assert_eq!(
        tags["description"],
        r#"{"indexSignatures":[{"key":"string","value":"boolean"}]}"#
    );

    let order = read_json(&out.join("Order.json"));
    assert_eq!(
        order["$comment"],
        r#"{"indexSignatures":[{"key":"string","value":"string"}]}"#
    );

    let raw = fs::read_to_string(out.join("Order.json")).unwrap();
    assert!(raw.contains("\n\t\"title\": \"Order\""));
}

#[tokio::test]
async fn test_generate_without_config_writes_next_to_sources() {
    let project = TempDir::new().unwrap();
    let root = project.path();
    write(&root.join("order.ts"), ORDER_TS);
    assert!(!root.join(CONFIG_FILE_NAME).exists());

    let config = load_config(root).unwrap().resolve(root);
    let report = Generator::new(config).run().await.unwrap();

    assert_eq!(report.schemas_written, vec![root.join("./Order.json")]);
    assert!(root.join("Order.json").is_file());
}

#[tokio::test]
async fn test_invalid_schema_aborts_before_writing() {
    let project = TempDir::new().unwrap();
    let root = project.path();
    write(
        &root.join("a.ts"),
        "/* SCHEMA */\ninterface Good {\n  a: string;\n}\n/* END SCHEMA */\n",
    );
    write(
        &root.join("b.ts"),
        "/* SCHEMA */\ninterface Event {\n  at: Date;\n}\n/* END SCHEMA */\n",
    );

    let config = load_config(root).unwrap().resolve(root);
    let err = Generator::new(config).run().await.unwrap_err();

    match err {
        GenerateError::Sink(SinkError::Rejected { title, .. }) => assert_eq!(title, "Event"),
        other => panic!("expected rejection, got {other:?}"),
    }
    assert!(root.join("Good.json").is_file());
    assert!(!root.join("Event.json").exists());
}

#[tokio::test]
async fn test_missing_root_dir_is_reported() {
    let project = TempDir::new().unwrap();
    let root = project.path();
    write(
        &root.join(CONFIG_FILE_NAME),
        r#"{ "options": { "rootDir": "./does-not-exist" } }"#,
    );

    let config = load_config(root).unwrap().resolve(root);
    let err = Generator::new(config).run().await.unwrap_err();
    assert!(matches!(err, GenerateError::Discover(_)));
}

#[tokio::test]
async fn test_nameless_blocks_are_skipped() {
    let project = TempDir::new().unwrap();
    let root = project.path();
    write(
        &root.join("mixed.ts"),
        "/* SCHEMA */\n/* END SCHEMA */\n\
         /* SCHEMA */\ninterface Named {\n  a: string;\n}\n/* END SCHEMA */\n\
         /* SCHEMA */\n\n/* END SCHEMA */\n",
    );

    let config = load_config(root).unwrap().resolve(root);
    let report = Generator::new(config).run().await.unwrap();

    assert_eq!(report.files_scanned, 1);
    assert_eq!(report.schemas_written, vec![root.join("./Named.json")]);
    assert!(!root.join(".json").exists());
}

#[tokio::test]
async fn test_escaping_title_aborts_run() {
    let project = TempDir::new().unwrap();
    let root = project.path().join("app");
    write(
        &root.join("evil.ts"),
        "/* SCHEMA */\ninterface ../Escaped {\n  a: string;\n}\n/* END SCHEMA */\n",
    );

    let config = load_config(&root).unwrap().resolve(&root);
    let err = Generator::new(config).run().await.unwrap_err();

    assert!(matches!(
        err,
        GenerateError::Sink(SinkError::UnsafeTitle { ref title }) if title == "../Escaped"
    ));
    assert!(!project.path().join("Escaped.json").exists());
}
