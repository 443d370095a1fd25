use anyhow::Result;
use colored::Colorize;
use std::path::Path;

use crate::config;
use crate::sites::{find_sites, parse_source, SiteOutcome};
use crate::ui;

pub fn expand(config_path: Option<&Path>, file: &Path) -> Result<()> {
    let options = config::load_options(config_path)?;
    let source = parse_source(file)?;
    let sites = find_sites(&source);

    if sites.is_empty() {
        ui::print_warning(&format!("No annotation sites in {}", file.display()));
        return Ok(());
    }

    let mut failed = 0;
    for site in &sites {
        let header = format!(
            "// {}:{}:{} #[{}]",
            file.display(),
            site.location.line,
            site.location.column,
            site.registration.name
        );
        println!("{}", header.dimmed());

        match site.run(&options) {
            SiteOutcome::Expanded { tokens, .. } => println!("{}\n", tokens),
            SiteOutcome::Failed(diagnostic) => {
                failed += 1;
                ui::print_error(&format!("[{}] {}\n", diagnostic.kind(), diagnostic));
            }
        }
    }

    if failed > 0 {
        anyhow::bail!("{} of {} annotation site(s) failed to expand", failed, sites.len());
    }
    Ok(())
}
