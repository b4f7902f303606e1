//! `mlp config` specs

use crate::prelude::*;

#[test]
fn prints_resolved_toml() {
    Project::with_config()
        .mlp()
        .args(&["config"])
        .passes()
        .stdout_has("[modeling.random_forest]")
        .stdout_has("n_estimators = 100")
        .stdout_lacks("${");
}

#[test]
fn references_keep_the_referenced_type() {
    let out = Project::with_config()
        .mlp()
        .args(&["config", "--format", "json"])
        .passes();
    let json = out.json();
    assert_eq!(json["data_check"]["min_price"], 10);
    assert_eq!(json["data_check"]["max_price"], 350);
}

#[test]
fn overrides_apply_before_references_resolve() {
    let out = Project::with_config()
        .mlp()
        .args(&["config", "--format", "json", "etl.min_price=20", "modeling.random_forest.max_depth=7"])
        .passes();
    let json = out.json();
    assert_eq!(json["etl"]["min_price"], 20);
    assert_eq!(json["data_check"]["min_price"], 20);
    assert_eq!(json["modeling"]["random_forest"]["max_depth"], 7);
}

#[test]
fn overrides_alone_need_no_file() {
    let out = Project::empty()
        .mlp()
        .args(&["config", "--format", "json", "main.steps=download"])
        .passes();
    assert_eq!(out.json()["main"]["steps"], "download");
}
