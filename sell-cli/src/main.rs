mod config;
mod redact;

use std::collections::HashMap;
use std::io::Write;
use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use colored::Colorize;
use similar::{ChangeTag, TextDiff};

use sell_core::differ::{self, Diff};
use sell_core::resource::{Attributes, Resource, State, attributes_to_json};
use sell_core::schema::{AttributeSchema, AttributeType, ResourceSchema};
use sell_provider::preview::preview_update;
use sell_provider::schemas::{self, get_schema_config};

use config::Document;
use redact::redact;

#[derive(Parser)]
#[command(name = "sell")]
#[command(about = "Partner Center Sell onboarding resource tool", long_about = None)]
struct Cli {
    /// Print debug logs
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Validate the resources declared in a document
    Validate {
        /// Path to the JSON document
        #[arg(default_value = "onboarding.json")]
        file: PathBuf,
    },
    /// Show the schema of one or all resource types
    Schema {
        /// Resource type (e.g., ibm_onboarding_catalog_plan)
        resource_type: Option<String>,
    },
    /// Show what an apply would change and the merge patch each update sends
    Diff {
        /// Path to the JSON document
        #[arg(default_value = "onboarding.json")]
        file: PathBuf,
    },
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let result = match cli.command {
        Commands::Validate { file } => run_validate(&file),
        Commands::Schema { resource_type } => run_schema(resource_type.as_deref()),
        Commands::Diff { file } => run_diff(&file).await,
    };

    if let Err(e) = result {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn init_logger(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

fn get_schemas() -> HashMap<String, ResourceSchema> {
    schemas::all_schemas()
        .into_iter()
        .map(|schema| (schema.resource_type.clone(), schema))
        .collect()
}

fn load_document(file: &Path) -> Result<Document, String> {
    let document = Document::load(file).map_err(|e| e.to_string())?;
    document.check_unique().map_err(|e| e.to_string())?;
    log::debug!(
        "loaded {} resources from {}",
        document.resources.len(),
        file.display()
    );
    Ok(document)
}

/// Desired resources of a document, each paired with its schema
fn desired_resources(document: &Document) -> Result<Vec<(Resource, ResourceSchema)>, String> {
    let schemas = get_schemas();
    document
        .resources
        .iter()
        .map(|config| {
            let schema = schemas
                .get(&config.resource_type)
                .ok_or_else(|| format!("{}: Unknown resource type", config.id()))?;
            Ok((config.to_resource(Some(schema)), schema.clone()))
        })
        .collect()
}

fn validate_resources(resources: &[(Resource, ResourceSchema)]) -> Result<(), String> {
    let mut all_errors = Vec::new();

    for (resource, schema) in resources {
        if let Err(errors) = schema.validate(&resource.attributes) {
            for error in errors {
                all_errors.push(format!("{}: {}", resource.id, error));
            }
        }
    }

    if all_errors.is_empty() {
        Ok(())
    } else {
        Err(all_errors.join("\n"))
    }
}

fn run_validate(file: &Path) -> Result<(), String> {
    let document = load_document(file)?;
    let resources = desired_resources(&document)?;

    println!("{}", "Validating...".cyan());

    validate_resources(&resources)?;

    println!(
        "{}",
        format!("✓ {} resources validated successfully.", resources.len())
            .green()
            .bold()
    );

    for (resource, _) in &resources {
        println!("  • {}", resource.id);
    }

    Ok(())
}

// =============================================================================
// Schema
// =============================================================================

fn run_schema(resource_type: Option<&str>) -> Result<(), String> {
    match resource_type {
        Some(name) => {
            let config = get_schema_config(name)
                .ok_or_else(|| format!("Unknown resource type: {}", name))?;
            for line in schema_lines(&config.schema) {
                println!("{}", line);
            }
        }
        None => {
            for config in schemas::configs() {
                println!("{}", config.resource_type_name.cyan().bold());
                if let Some(description) = &config.schema.description {
                    println!("  {}", description);
                }
            }
        }
    }
    Ok(())
}

fn schema_lines(schema: &ResourceSchema) -> Vec<String> {
    let mut lines = vec![schema.resource_type.clone()];
    attribute_lines(&schema.attributes, 1, &mut lines);
    lines
}

fn attribute_lines(
    attributes: &HashMap<String, AttributeSchema>,
    depth: usize,
    lines: &mut Vec<String>,
) {
    let mut names: Vec<&String> = attributes.keys().collect();
    names.sort();

    for name in names {
        let attribute = &attributes[name];
        let mut flags = Vec::new();
        if attribute.required {
            flags.push("required");
        }
        if attribute.computed {
            flags.push("computed");
        }
        if attribute.force_new {
            flags.push("force_new");
        }
        if attribute.sensitive {
            flags.push("sensitive");
        }

        let mut line = format!("{}{}: {}", "  ".repeat(depth), name, attribute.attr_type);
        if !flags.is_empty() {
            line.push_str(&format!(" [{}]", flags.join(", ")));
        }
        lines.push(line);

        if let AttributeType::Block(block) = &attribute.attr_type {
            attribute_lines(&block.attributes, depth + 1, lines);
        }
    }
}

// =============================================================================
// Diff
// =============================================================================

async fn run_diff(file: &Path) -> Result<(), String> {
    let stdout = std::io::stdout();
    write_diff(file, &mut stdout.lock()).await
}

fn io_error(e: std::io::Error) -> String {
    format!("Failed to write output: {}", e)
}

async fn write_diff(file: &Path, out: &mut impl Write) -> Result<(), String> {
    let document = load_document(file)?;
    let resources = desired_resources(&document)?;
    validate_resources(&resources)?;

    let env = document.provider.env.as_deref();
    let mut changes = 0;

    for ((resource, schema), config) in resources.into_iter().zip(&document.resources) {
        let current = config
            .prior_state(Some(&schema))
            .unwrap_or_else(|| State::not_found(resource.id.clone()));

        match differ::diff(&resource, &current, &schema) {
            Diff::NoChange(_) => {}
            Diff::Create(resource) => {
                changes += 1;
                writeln!(out, "{} {}", "+".green().bold(), resource.id).map_err(io_error)?;
            }
            Diff::Update {
                id,
                from,
                to,
                changed_attributes,
            } => {
                changes += 1;
                writeln!(out, "{} {}", "~".yellow().bold(), id).map_err(io_error)?;
                writeln!(out, "  changed: {}", changed_attributes.join(", ")).map_err(io_error)?;
                write_attribute_diff(out, &schema, &from.attributes, &to.attributes)?;

                let identifier = from.identifier.clone().unwrap_or_default();
                match preview_update(env, id, &identifier, &from, to).await {
                    Ok(Some(mut patch)) => {
                        redact(&mut patch, &schema.attributes);
                        let body = serde_json::to_string_pretty(&patch)
                            .map_err(|e| format!("Failed to render patch: {}", e))?;
                        writeln!(out, "  {}", "merge patch:".cyan()).map_err(io_error)?;
                        for line in body.lines() {
                            writeln!(out, "    {}", line).map_err(io_error)?;
                        }
                    }
                    Ok(None) => {
                        writeln!(out, "  {}", "no patchable changes".dimmed()).map_err(io_error)?
                    }
                    Err(e) if e.step().is_some_and(|s| s.ends_with("-forces-new")) => {
                        writeln!(out, "  {} {}", "must be replaced:".red().bold(), e.message)
                            .map_err(io_error)?;
                    }
                    Err(e) => return Err(e.to_string()),
                }
            }
        }
    }

    if changes == 0 {
        writeln!(
            out,
            "{}",
            "No changes. Onboarding resources are up-to-date.".green()
        )
        .map_err(io_error)?;
    }
    Ok(())
}

/// Pretty JSON of `attributes` with sensitive values masked
fn pretty(schema: &ResourceSchema, attributes: &Attributes) -> String {
    let mut object = attributes_to_json(attributes);
    redact(&mut object, &schema.attributes);
    serde_json::to_string_pretty(&object).unwrap_or_default() + "\n"
}

fn write_attribute_diff(
    out: &mut impl Write,
    schema: &ResourceSchema,
    from: &Attributes,
    to: &Attributes,
) -> Result<(), String> {
    let from = pretty(schema, from);
    let to = pretty(schema, to);

    let diff = TextDiff::from_lines(&from, &to);
    for change in diff.iter_all_changes() {
        let sign = match change.tag() {
            ChangeTag::Delete => "-".red(),
            ChangeTag::Insert => "+".green(),
            ChangeTag::Equal => " ".normal(),
        };
        write!(out, "  {}{}", sign, change).map_err(io_error)?;
    }
    Ok(())
}
