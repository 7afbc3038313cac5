mod common;

use common::TestEnv;
use jsonschema::JSONSchema;
use serde_json::Value;
use std::fs;
use std::path::PathBuf;

fn load_schema(name: &str) -> Value {
    let root = PathBuf::from(env!("CARGO_MANIFEST_DIR"));
    let raw = fs::read_to_string(root.join("docs/contracts").join(name)).unwrap();
    serde_json::from_str(&raw).unwrap()
}

fn validate(schema_name: &str, data: &Value) {
    let schema = load_schema(schema_name);
    let validator = JSONSchema::compile(&schema).expect("compile schema");
    let msgs: Vec<String> = match validator.validate(data) {
        Ok(()) => return,
        Err(errors) => errors.map(|e| e.to_string()).collect(),
    };
    panic!("schema validation failed: {}", msgs.join(" | "));
}

#[test]
fn contracts_check() {
    let env = TestEnv::new();

    let crosstab = env.run_json(&["crosstab"]);
    validate("crosstab.schema.json", &crosstab);

    let other = env.run_json(&["crosstab", "--feature", "men_overwork", "--group", "education"]);
    validate("crosstab.schema.json", &other);

    let catalog = env.run_json(&["catalog"]);
    validate("catalog.schema.json", &catalog);

    let summary = env.run_json(&["summary"]);
    validate("summary.schema.json", &summary);

    for metric in ["income", "job-prestige"] {
        let boxes = env.run_json(&["boxplot", "--metric", metric]);
        validate("boxplot.schema.json", &boxes);
    }

    let dashboard = env.run_json(&["dashboard"]);
    let initial = &dashboard["data"]["tabs"][1]["view"]["initial"];
    validate(
        "crosstab.schema.json",
        &serde_json::json!({"ok": true, "data": initial}),
    );
}

#[test]
fn error_contract() {
    let env = TestEnv::new();
    let out = env
        .cmd_with_source()
        .args(["--json", "crosstab", "--group", "satjob"])
        .assert()
        .failure()
        .get_output()
        .stdout
        .clone();
    let v: Value = serde_json::from_slice(&out).expect("valid json output");
    validate("error.schema.json", &v);

    let out = env
        .cmd_with_source()
        .args(["--json", "explore"])
        .write_stdin("one two three\n")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let last = String::from_utf8(out)
        .expect("utf8")
        .lines()
        .last()
        .map(|l| serde_json::from_str::<Value>(l).expect("json line"))
        .expect("at least one event");
    validate("error.schema.json", &last);
}
