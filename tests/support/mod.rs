#![allow(dead_code)]

use assert_cmd::cargo::cargo_bin_cmd;
use assert_cmd::Command as AssertCommand;
use serde_json::Value as Json;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub const SECTIONS: [&str; 6] = [
    "Purpose",
    "Key Concepts",
    "Application",
    "Examples",
    "Common Pitfalls",
    "References",
];

/// A SKILL.md that passes every check when stored under a folder named `name`.
pub fn valid_skill(name: &str) -> String {
    skill_with(name, "Helps plan product work.", "workflow", &SECTIONS)
}

pub fn skill_with(name: &str, description: &str, skill_type: &str, sections: &[&str]) -> String {
    let mut out = format!(
        "---\nname: {name}\ndescription: {description}\ntype: {skill_type}\n---\n\n# {name}\n"
    );
    for section in sections {
        out.push_str(&format!("\n## {section}\n\nText for {section}.\n"));
    }
    out
}

pub struct SkillFixture {
    _tmp: TempDir,
    pub project: PathBuf,
    config_dir: PathBuf,
}

impl SkillFixture {
    pub fn new() -> Self {
        let tmp = TempDir::new().unwrap();
        let project = tmp.path().join("project");
        let config_dir = tmp.path().join("config");
        fs::create_dir_all(&project).unwrap();
        fs::create_dir_all(&config_dir).unwrap();
        Self {
            _tmp: tmp,
            project,
            config_dir,
        }
    }

    /// Write `skills/<folder>/SKILL.md` and return its project-relative path.
    pub fn write_skill(&self, folder: &str, contents: &str) -> String {
        self.write_file(&format!("skills/{folder}/SKILL.md"), contents)
    }

    pub fn write_file(&self, rel: &str, contents: &str) -> String {
        let target = self.project.join(rel);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&target, contents).unwrap();
        rel.to_string()
    }

    pub fn path(&self, rel: &str) -> PathBuf {
        self.project.join(rel)
    }

    pub fn config_file(&self) -> PathBuf {
        self.config_dir.join("config.json")
    }

    pub fn cmd(&self) -> AssertCommand {
        let mut cmd = cargo_bin_cmd!("skcheck");
        cmd.current_dir(&self.project)
            .env("SKCHECK_CONFIG_DIR", &self.config_dir)
            .env_remove("RUST_LOG");
        cmd
    }

    pub fn check_json(&self, args: &[&str]) -> (bool, Json) {
        let out = self.cmd().arg("check").arg("--json").args(args).output().unwrap();
        let json = serde_json::from_slice(&out.stdout).unwrap_or_else(|err| {
            panic!(
                "invalid json ({err}): stdout={:?} stderr={:?}",
                String::from_utf8_lossy(&out.stdout),
                String::from_utf8_lossy(&out.stderr)
            )
        });
        (out.status.success(), json)
    }
}

pub fn codes(report: &Json) -> Vec<String> {
    report["issues"]
        .as_array()
        .expect("issues array")
        .iter()
        .map(|issue| issue["code"].as_str().unwrap().to_string())
        .collect()
}

pub fn issue_paths(report: &Json) -> Vec<String> {
    report["issues"]
        .as_array()
        .expect("issues array")
        .iter()
        .map(|issue| issue["path"].as_str().unwrap().to_string())
        .collect()
}

pub fn rel(path: &Path) -> String {
    path.display().to_string()
}
