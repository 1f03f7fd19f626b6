use crate::annotator::{AnnotateOutcome, EntityAnnotator};
use crate::config::{load_resolved_config, AnnotatorConfig, HintContext};
use crate::oracle::{KnownClasses, SourceTreeOracle};
use crate::schema::{load_schema, TableSchema};
use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use indexmap::IndexMap;
use std::path::{Path, PathBuf};

/// Command-line interface for the entity annotator
#[derive(Parser)]
#[command(name = "entity-annotator")]
#[command(about = "Annotate entity classes with @property type hints", long_about = None)]
pub struct Cli {
    /// The subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand)]
pub enum Commands {
    /// Merge computed @property annotations into an entity class file
    Annotate {
        /// Table schema description (YAML or JSON)
        #[arg(short, long)]
        schema: PathBuf,

        /// Entity class source file to annotate
        #[arg(short, long)]
        file: PathBuf,

        /// Path to the annotator config (entity-annotator.toml)
        /// If not provided, will auto-detect alongside the schema or in the app root
        #[arg(long)]
        config: Option<PathBuf>,

        /// Application root, used to look up entity classes
        #[arg(long, default_value = ".")]
        app_root: PathBuf,

        /// Perform a dry run: show what would change without writing files
        #[arg(long, default_value_t = false)]
        dry_run: bool,
    },
    /// Print the computed @property hints for a schema
    Hints {
        /// Table schema description (YAML or JSON)
        #[arg(short, long)]
        schema: PathBuf,

        /// Path to the annotator config (entity-annotator.toml)
        #[arg(long)]
        config: Option<PathBuf>,

        /// Application root, used to look up entity classes
        #[arg(long, default_value = ".")]
        app_root: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
        format: OutputFormat,
    },
}

/// Output format of the `hints` command
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// One `@property` line per hint
    Text,
    /// JSON object of property name to hint
    Json,
}

/// Schema, config and class lookup shared by both commands.
struct Session {
    schema: TableSchema,
    ctx: HintContext,
    oracle: SourceTreeOracle,
}

impl Session {
    fn load(schema_path: &Path, config: Option<&Path>, app_root: &Path) -> anyhow::Result<Self> {
        let schema = load_schema(schema_path)?;
        let config: AnnotatorConfig = load_resolved_config(config, schema_path, app_root)?;
        let ctx = HintContext::from_config(&config);
        let oracle = SourceTreeOracle::new(
            app_root,
            &config.app_namespace,
            KnownClasses::new(&config.known_classes),
        );
        Ok(Session {
            schema,
            ctx,
            oracle,
        })
    }

    fn annotator(&self) -> EntityAnnotator<'_> {
        EntityAnnotator::new(&self.ctx, &self.oracle, &self.schema)
    }
}

/// Parse arguments from the process and run the selected command.
pub fn run_cli() -> Result<(), Box<dyn std::error::Error>> {
    execute(Cli::parse())
}

/// Run an already-parsed command.
pub fn execute(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match &cli.command {
        Commands::Annotate {
            schema,
            file,
            config,
            app_root,
            dry_run,
        } => {
            let session = Session::load(schema, config.as_deref(), app_root)?;
            let outcome = session
                .annotator()
                .dry_run(*dry_run)
                .annotate(file)
                .with_context(|| format!("Failed to annotate {}", file.display()))?;
            match outcome {
                AnnotateOutcome::Skipped => {
                    println!("⚠️  Skipping base entity class: {}", file.display());
                }
                AnnotateOutcome::Unchanged => {
                    println!("✅ Annotations up to date: {}", file.display());
                }
                AnnotateOutcome::Updated { added, updated } if *dry_run => {
                    println!(
                        "📝 Would annotate {} ({added} added, {updated} updated)",
                        file.display()
                    );
                }
                AnnotateOutcome::Updated { added, updated } => {
                    println!(
                        "✅ Annotated {} ({added} added, {updated} updated)",
                        file.display()
                    );
                }
            }
            Ok(())
        }
        Commands::Hints {
            schema,
            config,
            app_root,
            format,
        } => {
            let session = Session::load(schema, config.as_deref(), app_root)?;
            let hints = session.annotator().hints();
            match format {
                OutputFormat::Text => {
                    for line in hints.annotation_strings() {
                        println!("{line}");
                    }
                }
                OutputFormat::Json => {
                    let map: IndexMap<&str, String> = hints
                        .properties
                        .iter()
                        .chain(hints.associations.iter())
                        .map(|(name, hint)| (name.as_str(), hint.to_string()))
                        .collect();
                    println!("{}", serde_json::to_string_pretty(&map)?);
                }
            }
            Ok(())
        }
    }
}
