#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const HEADER: &str = "id,year,wtss,sex,educ,region,age,coninc,prestg10,mapres10,papres10,sei10,satjob,fechld,fefam,fepol,fepresch,meovrwrk";

/// Six respondents. Row 3 carries a windows-1252 apostrophe (0x92), row 6
/// has no answer to `fefam` and so drops out of the default crosstab.
pub const ROWS: &[&[u8]] = &[
    b"1,2018,1.2,male,16,pacific,34,40000,30,40,45,50.0,very satisfied,agree,agree,disagree,disagree,agree",
    b"2,2018,0.8,male,12,new england,45,60000,40,,50,60.0,moderately satisfied,strongly agree,disagree,disagree,agree,disagree",
    b"3,2018,1.0,female,14,pacific,29,30000,20,35,,40.0,very satisfied,don\x92t know,disagree,disagree,disagree,agree",
    b"4,2018,1.1,female,12,south atlantic,52,20000,30,,,35.0,IAP,agree,disagree,agree,disagree,IAP",
    b"5,2018,0.9,female,16,,61,IAP,60,50,55,70.0,a little dissatisfied,disagree,strongly disagree,disagree,disagree,disagree",
    b"6,2018,1.3,male,12,pacific,89 or older,,50,40,40,55.0,very satisfied,agree,IAP,agree,agree,agree",
];

pub struct TestEnv {
    _tmp: TempDir,
    pub home: PathBuf,
    pub dataset: PathBuf,
}

impl TestEnv {
    pub fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let home = tmp.path().join("home");
        fs::create_dir_all(&home).expect("create isolated home");

        let dataset = write_fixture_dataset(tmp.path());

        Self {
            _tmp: tmp,
            home,
            dataset,
        }
    }

    pub fn cmd(&self) -> Command {
        let mut cmd = cargo_bin_cmd!("gss-explorer");
        cmd.env("HOME", &self.home).env_remove("GSS_EXPLORER_LOG");
        cmd
    }

    /// Same as `cmd` with `--source` pointing at the fixture.
    pub fn cmd_with_source(&self) -> Command {
        let mut cmd = self.cmd();
        cmd.arg("--source")
            .arg(self.dataset.to_str().expect("dataset path utf8"));
        cmd
    }

    pub fn run_json(&self, args: &[&str]) -> Value {
        let out = self
            .cmd_with_source()
            .arg("--json")
            .args(args)
            .assert()
            .success()
            .get_output()
            .stdout
            .clone();
        serde_json::from_slice(&out).expect("valid json output")
    }

    pub fn write_config(&self, body: &str) -> PathBuf {
        let path = self.home.join("explorer.toml");
        fs::write(&path, body).expect("write config");
        path
    }
}

pub fn write_fixture_dataset(base: &Path) -> PathBuf {
    let path = base.join("gss2018.csv");
    let mut body = HEADER.as_bytes().to_vec();
    for row in ROWS {
        body.push(b'\n');
        body.extend_from_slice(row);
    }
    body.push(b'\n');
    fs::write(&path, body).expect("write fixture dataset");
    path
}
