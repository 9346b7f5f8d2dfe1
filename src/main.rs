use anyhow::Result;
use clap::{Parser, Subcommand};

use semantic_version::config;
use semantic_version::git::{self, Git2TagSource};
use semantic_version::release::{PublishPlan, ReleasePlan};
use semantic_version::{ui, BuildInfo, PreReleaseInfo, SemanticVersion, VersionUpdate};

#[derive(Parser)]
#[command(
    name = "semantic-version",
    version,
    about = "Parse, compare and derive SemVer 2.0.0 versions"
)]
struct Args {
    #[arg(short, long, global = true, help = "Custom configuration file path")]
    config: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Validate a version and show its components
    Parse {
        version: String,
        #[arg(long, help = "Print the version as a JSON record")]
        json: bool,
    },
    /// Print -1, 0 or 1 comparing the precedence of two versions
    Compare { a: String, b: String },
    /// Print versions ordered by precedence, lowest first
    Sort {
        #[arg(required = true)]
        versions: Vec<String>,
        #[arg(short, long, help = "Highest first")]
        reverse: bool,
    },
    /// Derive a new version
    Bump {
        version: String,
        #[arg(long, help = "Increment major")]
        major: bool,
        #[arg(long, help = "Increment minor")]
        minor: bool,
        #[arg(long, help = "Increment patch")]
        patch: bool,
        #[arg(long, conflicts_with = "clear_prerelease", help = "Replace the pre-release")]
        prerelease: Option<String>,
        #[arg(long, help = "Remove the pre-release")]
        clear_prerelease: bool,
        #[arg(long, conflicts_with = "clear_build", help = "Replace the build metadata")]
        build: Option<String>,
        #[arg(long, help = "Remove the build metadata")]
        clear_build: bool,
    },
    /// Show the dist-tag and git tag for publishing a version
    PublishPlan { version: String },
    /// Show the branches and pull request for releasing a pre-release
    ReleasePlan { version: String },
    /// Show the highest version tag of a git repository
    Latest {
        #[arg(long, default_value = ".", help = "Repository path")]
        path: String,
        #[arg(long, help = "Consider pre-release tags")]
        include_prereleases: bool,
    },
}

fn main() {
    let args = Args::parse();

    if let Err(e) = run(args) {
        ui::display_error(&format!("{:#}", e));
        std::process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    match args.command {
        Command::Parse { version, json } => {
            let version = SemanticVersion::parse(&version)?;
            if json {
                println!("{}", serde_json::to_string(&version)?);
            } else {
                ui::display_version(&version);
            }
        }
        Command::Compare { a, b } => {
            let a = SemanticVersion::parse(&a)?;
            let b = SemanticVersion::parse(&b)?;
            println!("{}", a.compare_to(&b) as i8);
        }
        Command::Sort { versions, reverse } => {
            let mut versions = versions
                .iter()
                .map(|v| SemanticVersion::parse(v))
                .collect::<semantic_version::Result<Vec<_>>>()?;
            versions.sort();
            if reverse {
                versions.reverse();
            }
            for version in versions {
                println!("{}", version);
            }
        }
        Command::Bump {
            version,
            major,
            minor,
            patch,
            prerelease,
            clear_prerelease,
            build,
            clear_build,
        } => {
            let mut update = VersionUpdate::new();
            if major {
                update = update.increment_major();
            }
            if minor {
                update = update.increment_minor();
            }
            if patch {
                update = update.increment_patch();
            }
            if let Some(prerelease) = prerelease {
                update = update.prerelease(Some(PreReleaseInfo::parse(&prerelease)?));
            } else if clear_prerelease {
                update = update.clear_prerelease();
            }
            if let Some(build) = build {
                update = update.build(Some(BuildInfo::parse(&build)?));
            } else if clear_build {
                update = update.clear_build();
            }

            let bumped = SemanticVersion::parse(&version)?.with(update)?;
            println!("{}", bumped);
        }
        Command::PublishPlan { version } => {
            let config = config::load_config(args.config.as_deref())?;
            let plan = PublishPlan::new(&SemanticVersion::parse(&version)?, &config)?;
            ui::display_publish_plan(&plan);
        }
        Command::ReleasePlan { version } => {
            let config = config::load_config(args.config.as_deref())?;
            let plan = ReleasePlan::new(&SemanticVersion::parse(&version)?, &config)?;
            ui::display_release_plan(&plan);
        }
        Command::Latest {
            path,
            include_prereleases,
        } => {
            let config = config::load_config(args.config.as_deref())?;
            let pattern = config.tags.tag_pattern()?;
            let source = Git2TagSource::open(&path)?;

            match git::latest_version(&source, &pattern, include_prereleases)? {
                Some(tag) => {
                    ui::display_success(&format!("Latest tag: {}", tag.name));
                    println!("{}", tag.version);
                }
                None => {
                    ui::display_status(&format!(
                        "No tags matching '{}' in {}",
                        pattern.as_str(),
                        path
                    ));
                }
            }
        }
    }

    Ok(())
}
