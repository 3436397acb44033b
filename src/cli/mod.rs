use crate::classify::{Framework, Language, Selection, StyleSystem};
use crate::config::Settings;
use crate::detect::{detect_project, DetectOptions};
use crate::error::ScanError;
use crate::html::inspect_file;
use crate::project::DEFAULT_MAX_FILES;
use crate::target::{naming, suggest_target, OverwritePolicy, Scope, TargetOptions};
use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use log::debug;
use serde::Serialize;
use serde_json::json;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "draftscope")]
#[command(version, about = "Inspect HTML design drafts and the projects they will land in", long_about = None)]
pub struct Args {
    /// Verbose logging on stderr
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Only log errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Settings file (TOML)
    #[arg(short, long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Commands {
    /// Classify the framework, language, style system and package manager
    Detect {
        #[arg(long, value_name = "DIR")]
        project_root: PathBuf,

        /// auto, next, react, nuxt, vue, taro, svelte or vanilla
        #[arg(long)]
        framework: Option<Selection<Framework>>,

        /// auto, tailwind, css-modules, scss, less, styled-components, emotion or css
        #[arg(long)]
        style: Option<Selection<StyleSystem>>,

        /// auto, typescript or javascript
        #[arg(long)]
        language: Option<Selection<Language>>,

        /// Stop counting source files after this many
        #[arg(long, value_name = "N")]
        max_files: Option<usize>,
    },

    /// Summarize the structure and design tokens of an HTML draft
    Inspect {
        #[arg(long, value_name = "FILE")]
        html: PathBuf,
    },

    /// Suggest where the restored design should be written
    SuggestPath {
        #[arg(long, value_name = "DIR")]
        project_root: PathBuf,

        #[arg(long)]
        framework: Option<Selection<Framework>>,

        #[arg(long)]
        language: Option<Selection<Language>>,

        #[arg(long, value_enum)]
        scope: Option<Scope>,

        /// Use this path instead of the suggested one
        #[arg(long, value_name = "PATH")]
        target: Option<PathBuf>,

        /// Component or route name hint
        #[arg(long)]
        name: Option<String>,

        #[arg(long, value_enum)]
        overwrite: Option<OverwritePolicy>,
    },
}

impl Args {
    /// Default log filter; `RUST_LOG` still wins.
    pub fn log_level(&self) -> &'static str {
        if self.quiet {
            "error"
        } else if self.verbose {
            "debug"
        } else {
            "warn"
        }
    }
}

/// Run one command, print its JSON report and return the process exit code.
pub fn run(args: Args) -> i32 {
    match execute(&args) {
        Ok(output) => {
            println!("{}", output);
            0
        }
        Err(err) => {
            let code = err
                .downcast_ref::<ScanError>()
                .map(ScanError::exit_code)
                .unwrap_or(1);
            println!("{:#}", json!({ "error": err.to_string() }));
            code
        }
    }
}

fn execute(args: &Args) -> Result<String> {
    let settings = Settings::load_optional(args.config.as_deref())?;

    match &args.command {
        Commands::Detect {
            project_root,
            framework,
            style,
            language,
            max_files,
        } => {
            let detect = &settings.detect;
            let options = DetectOptions {
                framework: framework.or(detect.framework).unwrap_or_default(),
                style: style.or(detect.style).unwrap_or_default(),
                language: language.or(detect.language).unwrap_or_default(),
                max_files: max_files.or(detect.max_files).unwrap_or(DEFAULT_MAX_FILES),
            };
            debug!("detect options: {:?}", options);
            render(&detect_project(project_root, &options)?)
        }
        Commands::Inspect { html } => render(&inspect_file(html)?),
        Commands::SuggestPath {
            project_root,
            framework,
            language,
            scope,
            target,
            name,
            overwrite,
        } => {
            let options = target_options(
                &settings,
                *framework,
                *language,
                *scope,
                target.clone(),
                name.clone(),
                *overwrite,
            );
            debug!("target options: {:?}", options);
            render(&suggest_target(project_root, &options)?)
        }
    }
}

fn target_options(
    settings: &Settings,
    framework: Option<Selection<Framework>>,
    language: Option<Selection<Language>>,
    scope: Option<Scope>,
    target: Option<PathBuf>,
    name: Option<String>,
    overwrite: Option<OverwritePolicy>,
) -> TargetOptions {
    let file = &settings.target;
    TargetOptions {
        framework: framework.or(settings.detect.framework).unwrap_or_default(),
        language: language.or(settings.detect.language).unwrap_or_default(),
        scope: scope.or(file.scope).unwrap_or_default(),
        target: target.or_else(|| file.path.clone()),
        name: name
            .or_else(|| file.name.clone())
            .unwrap_or_else(|| naming::DEFAULT_COMPONENT_NAME.to_string()),
        overwrite: overwrite.or(file.overwrite).unwrap_or_default(),
        max_files: settings.detect.max_files.unwrap_or(DEFAULT_MAX_FILES),
    }
}

fn render<T: Serialize>(report: &T) -> Result<String> {
    serde_json::to_string_pretty(report).context("Failed to serialize report")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_subcommands() {
        let args = Args::try_parse_from([
            "draftscope",
            "-v",
            "detect",
            "--project-root",
            "web",
            "--framework",
            "vue",
            "--style",
            "auto",
        ])
        .unwrap();
        assert_eq!(args.log_level(), "debug");

        match args.command {
            Commands::Detect { framework, style, language, .. } => {
                assert_eq!(framework, Some(Selection::Forced(Framework::Vue)));
                assert_eq!(style, Some(Selection::Auto));
                assert_eq!(language, None);
            }
            other => panic!("unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_rejects_unknown_framework() {
        let result = Args::try_parse_from([
            "draftscope",
            "detect",
            "--project-root",
            ".",
            "--framework",
            "angular",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_command_line_beats_settings_file() {
        let settings = Settings::from_toml(
            "[detect]\nframework = \"nuxt\"\n[target]\nscope = \"page\"\nname = \"Landing\"\n",
        )
        .unwrap();

        let options = target_options(
            &settings,
            Some(Selection::Forced(Framework::Vue)),
            None,
            None,
            None,
            None,
            Some(OverwritePolicy::Replace),
        );
        assert_eq!(options.framework, Selection::Forced(Framework::Vue));
        assert_eq!(options.scope, Scope::Page);
        assert_eq!(options.name, "Landing");
        assert_eq!(options.overwrite, OverwritePolicy::Replace);
        assert_eq!(options.language, Selection::Auto);
    }
}
