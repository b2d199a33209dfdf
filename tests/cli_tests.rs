use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const DEPLOYMENT: &str = r#"apiVersion: apps/v1
kind: Deployment
metadata:
  name: web
spec:
  template:
    spec:
      containers:
      - name: web
        image: gcr.io/example/web
---
apiVersion: v1
kind: Service
metadata:
  name: web
"#;

const CRD: &str = r#"apiVersion: my.crd.io/v1
kind: CustomType
metadata:
  name: worker
spec:
  containers:
  - name: worker
    image: gcr.io/example/worker
"#;

fn project() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let root = temp_dir.path();
    fs::create_dir_all(root.join("k8s")).unwrap();
    fs::write(root.join("k8s/deployment.yaml"), DEPLOYMENT).unwrap();
    fs::write(root.join("k8s/worker.yml"), CRD).unwrap();
    fs::write(root.join("k8s/values.yaml"), "replicaCount: 2\n").unwrap();
    fs::write(root.join("package.json"), r#"{"name":"web"}"#).unwrap();
    temp_dir
}

fn deploy_init(home: &Path) -> Command {
    let mut cmd = Command::cargo_bin("deploy-init").unwrap();
    cmd.env("HOME", home).env_remove("RUST_LOG");
    cmd
}

#[test]
fn detect_lists_only_manifests() {
    let project = project();
    deploy_init(project.path())
        .arg("detect")
        .arg(project.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("deployment.yaml"))
        .stdout(predicate::str::contains("worker.yml"))
        .stdout(predicate::str::contains("values.yaml").not())
        .stdout(predicate::str::contains("package.json").not());
}

#[test]
fn images_prints_json_per_file() {
    let project = project();
    let output = deploy_init(project.path())
        .args(["images", "--json"])
        .arg(project.path().join("k8s/deployment.yaml"))
        .arg(project.path().join("k8s/worker.yml"))
        .output()
        .unwrap();
    assert!(output.status.success());

    let parsed: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(parsed[0]["images"], serde_json::json!(["gcr.io/example/web"]));
    assert_eq!(parsed[1]["images"], serde_json::json!(["gcr.io/example/worker"]));
}

#[test]
fn images_fails_on_invalid_manifest() {
    let project = project();
    let bad = project.path().join("bad.yaml");
    fs::write(&bad, "no apiVersion: t\nkind: Pod").unwrap();

    deploy_init(project.path())
        .arg("images")
        .arg(&bad)
        .assert()
        .failure()
        .stderr(predicate::str::contains("apiVersion"));
}

#[test]
fn init_prints_pipeline_yaml() {
    let project = project();
    let output = deploy_init(project.path())
        .arg("init")
        .arg(project.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let pipeline: serde_yaml::Value = serde_yaml::from_slice(&output.stdout).unwrap();
    assert_eq!(pipeline["kind"].as_str(), Some("Config"));
    let artifacts: Vec<&str> = pipeline["build"]["artifacts"]
        .as_sequence()
        .unwrap()
        .iter()
        .filter_map(|a| a["image"].as_str())
        .collect();
    assert_eq!(artifacts, vec!["gcr.io/example/web", "gcr.io/example/worker"]);
    assert_eq!(
        pipeline["deploy"]["kubectl"]["manifests"]
            .as_sequence()
            .unwrap()
            .len(),
        2
    );
}

#[test]
fn init_with_explicit_manifest_writes_output() {
    let project = project();
    let manifest = project.path().join("k8s/worker.yml");
    let out = project.path().join("pipeline.yaml");

    deploy_init(project.path())
        .arg("init")
        .arg(project.path())
        .arg("--manifest")
        .arg(&manifest)
        .arg("--output")
        .arg(&out)
        .assert()
        .success();

    let pipeline: serde_yaml::Value =
        serde_yaml::from_str(&fs::read_to_string(&out).unwrap()).unwrap();
    assert_eq!(
        pipeline["deploy"]["kubectl"]["manifests"][0].as_str(),
        manifest.to_str()
    );

    // A second run refuses to clobber the file without --force.
    deploy_init(project.path())
        .arg("init")
        .arg("--manifest")
        .arg(&manifest)
        .arg("--output")
        .arg(&out)
        .assert()
        .failure()
        .stderr(predicate::str::contains("--force"));
}

#[test]
fn init_without_manifests_fails() {
    let temp_dir = TempDir::new().unwrap();
    fs::write(temp_dir.path().join("README.md"), "# nothing here\n").unwrap();

    deploy_init(temp_dir.path())
        .arg("init")
        .arg(temp_dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("No Kubernetes manifests found"));
}

#[test]
fn config_file_sets_output_format() {
    let project = project();
    fs::write(
        project.path().join(".deploy-init.toml"),
        "[output]\nformat = \"json\"\n\n[pipeline]\napi_version = \"example/v9\"\n",
    )
    .unwrap();

    let output = deploy_init(project.path())
        .arg("init")
        .arg(project.path())
        .output()
        .unwrap();
    assert!(output.status.success());

    let pipeline: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(pipeline["apiVersion"], "example/v9");
}
