//! Terminal output for the `semantic-version` binary.
//!
//! `format_*` functions build plain text and are covered by tests;
//! `display_*` functions add styling and print.

use console::style;

use crate::domain::SemanticVersion;
use crate::release::{PublishPlan, ReleasePlan};

/// Format and print an error message in red.
pub fn display_error(message: &str) {
    eprintln!("{} {}", style("ERROR:").red(), message);
}

/// Format and print a success message with green checkmark.
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green(), message);
}

/// Format and print a status message with yellow arrow.
pub fn display_status(message: &str) {
    println!("{} {}", style("→").yellow(), message);
}

/// Describe the components of a version, one `key: value` per line.
pub fn format_version_details(version: &SemanticVersion) -> String {
    let mut lines = vec![
        format!("version:    {}", version),
        format!("major:      {}", version.major()),
        format!("minor:      {}", version.minor()),
        format!("patch:      {}", version.patch()),
    ];

    if let Some(prerelease) = version.prerelease() {
        lines.push(format!("prerelease: {}", prerelease));
    }
    if let Some(build) = version.build() {
        lines.push(format!("build:      {}", build));
    }
    lines.push(format!("stable:     {}", version.is_stable()));

    lines.join("\n")
}

pub fn format_publish_plan(plan: &PublishPlan) -> String {
    format!(
        "version:  {}\ndist-tag: {}\ngit tag:  {}",
        plan.version,
        plan.dist_tag.as_deref().unwrap_or("(default)"),
        plan.git_tag
    )
}

pub fn format_release_plan(plan: &ReleasePlan) -> String {
    format!(
        "prerelease:     {}\nrelease:        {}\npending branch: {}\ntarget branch:  {}\npull request:   {}",
        plan.prerelease_version,
        plan.release_version,
        plan.pending_branch,
        plan.target_branch,
        plan.pull_request_title
    )
}

/// Print version details with a bold header.
pub fn display_version(version: &SemanticVersion) {
    println!("{}", style("Semantic version").bold());
    println!("{}", indent(&format_version_details(version)));
}

pub fn display_publish_plan(plan: &PublishPlan) {
    println!("{}", style("Publish plan").bold());
    println!("{}", indent(&format_publish_plan(plan)));
}

pub fn display_release_plan(plan: &ReleasePlan) {
    println!("{}", style("Release plan").bold());
    println!("{}", indent(&format_release_plan(plan)));
}

fn indent(text: &str) -> String {
    text.lines()
        .map(|line| format!("  {}", line))
        .collect::<Vec<_>>()
        .join("\n")
}
