use anyhow::{Context, Result};
use colored::Colorize;
use serde::Serialize;
use std::path::{Path, PathBuf};

use streamgen_engine::{DiagnosticKind, ExpandOptions};

use crate::config;
use crate::sites::{find_sites, parse_source, Location, SiteOutcome};
use crate::ui;

#[derive(Debug, Serialize)]
pub struct CheckReport {
    pub sites: Vec<SiteRecord>,
    pub summary: CheckSummary,
}

#[derive(Debug, Default, Serialize)]
pub struct CheckSummary {
    pub files: usize,
    pub sites: usize,
    pub valid: usize,
    pub failed: usize,
}

#[derive(Debug, Serialize)]
pub struct SiteRecord {
    pub path: PathBuf,
    #[serde(flatten)]
    pub location: Location,
    pub annotation: &'static str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub declaration: Option<String>,
    #[serde(flatten)]
    pub result: SiteResult,
}

#[derive(Debug, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum SiteResult {
    Valid {
        member: String,
        element_type: String,
    },
    Failed {
        kind: DiagnosticKind,
        message: String,
        at: Location,
    },
}

impl SiteRecord {
    fn is_valid(&self) -> bool {
        matches!(self.result, SiteResult::Valid { .. })
    }

    fn render(&self) -> String {
        match &self.result {
            SiteResult::Valid { member, .. } => format!(
                "{}:{}:{} {}.{}",
                self.path.display(),
                self.location.line,
                self.location.column,
                self.declaration.as_deref().unwrap_or("_"),
                member
            ),
            SiteResult::Failed { kind, message, at } => format!(
                "{}:{}:{} [{}] {}",
                self.path.display(),
                at.line,
                at.column,
                kind,
                message
            ),
        }
    }
}

/// Expand every annotation site in `files` and collect the outcomes.
pub fn check_files(files: &[PathBuf], options: &ExpandOptions) -> Result<CheckReport> {
    let mut report = CheckReport {
        sites: Vec::new(),
        summary: CheckSummary::default(),
    };

    for path in files {
        report.sites.extend(check_file(path, options)?);
        report.summary.files += 1;
    }

    report.summary.sites = report.sites.len();
    report.summary.valid = report.sites.iter().filter(|s| s.is_valid()).count();
    report.summary.failed = report.summary.sites - report.summary.valid;
    Ok(report)
}

fn check_file(path: &Path, options: &ExpandOptions) -> Result<Vec<SiteRecord>> {
    let source = parse_source(path)?;
    let sites = find_sites(&source);
    tracing::debug!(path = %path.display(), sites = sites.len(), "scanned file");

    Ok(sites
        .iter()
        .map(|site| {
            let result = match site.run(options) {
                SiteOutcome::Expanded {
                    member,
                    element_type,
                    ..
                } => SiteResult::Valid {
                    member,
                    element_type,
                },
                SiteOutcome::Failed(diagnostic) => SiteResult::Failed {
                    kind: diagnostic.kind(),
                    message: diagnostic.message(),
                    at: Location::of(diagnostic.span()),
                },
            };

            SiteRecord {
                path: path.to_path_buf(),
                location: site.location,
                annotation: site.registration.name,
                declaration: site.declaration_name(),
                result,
            }
        })
        .collect())
}

pub fn check(config_path: Option<&Path>, files: &[PathBuf], json: bool) -> Result<()> {
    let options = config::load_options(config_path)?;
    let report = check_files(files, &options)?;

    if json {
        let output =
            serde_json::to_string_pretty(&report).context("Failed to serialize check report")?;
        println!("{}", output);
    } else {
        print_report(&report);
    }

    if report.summary.failed > 0 {
        anyhow::bail!(
            "{} of {} annotation site(s) failed",
            report.summary.failed,
            report.summary.sites
        );
    }
    Ok(())
}

fn print_report(report: &CheckReport) {
    for site in &report.sites {
        if site.is_valid() {
            ui::print_success(&site.render());
        } else {
            ui::print_error(&site.render());
        }
    }

    let summary = &report.summary;
    if summary.sites == 0 {
        ui::print_warning(&format!("No annotation sites in {} file(s)", summary.files));
        return;
    }

    println!();
    println!(
        "  {} site(s) in {} file(s): {} valid, {} failed",
        summary.sites,
        summary.files,
        summary.valid.to_string().green(),
        summary.failed.to_string().red()
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_source(dir: &Path, name: &str, contents: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_check_files_counts_outcomes() {
        let dir = tempfile::tempdir().unwrap();
        let good = write_source(
            dir.path(),
            "good.rs",
            "#[create_async_stream(of: i32.self, named: \"numbers\")]\nstruct Counter {}\n",
        );
        let bad = write_source(
            dir.path(),
            "bad.rs",
            "#[create_async_stream(of: Int.self)]\nstruct Single {}\n\n#[create_async_stream(of: x, named: \"y\")]\nstruct Var {}\n",
        );

        let report = check_files(&[good, bad], &ExpandOptions::default()).unwrap();
        assert_eq!(report.summary.files, 2);
        assert_eq!(report.summary.sites, 3);
        assert_eq!(report.summary.valid, 1);
        assert_eq!(report.summary.failed, 2);

        assert!(report.sites[0].render().ends_with("good.rs:1:1 Counter.numbers"));
        assert!(report.sites[1].render().contains("[WrongArgumentCount]"));
        assert!(report.sites[2].render().contains("[InvalidTypeArgument]"));
    }

    #[test]
    fn test_json_report_shape() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_source(
            dir.path(),
            "lib.rs",
            "#[create_async_stream(of: u8.self, named: \"bytes\")]\npub struct Port;\n\n#[create_async_stream(of: u8.self, named: \"bytes\")]\nenum Mode { A }\n",
        );

        let report = check_files(&[path], &ExpandOptions::default()).unwrap();
        let value = serde_json::to_value(&report).unwrap();

        let sites = value["sites"].as_array().unwrap();
        assert_eq!(sites[0]["status"], "valid");
        assert_eq!(sites[0]["member"], "bytes");
        assert_eq!(sites[0]["declaration"], "Port");
        assert_eq!(sites[1]["status"], "failed");
        assert_eq!(sites[1]["kind"], "InvalidAttachmentKind");
        assert_eq!(value["summary"]["failed"], 1);
    }

    #[test]
    fn test_unreadable_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("missing.rs");
        assert!(check_files(&[missing], &ExpandOptions::default()).is_err());
    }
}
