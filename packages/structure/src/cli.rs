//! Command-line interface for the structure engine.

use std::path::{Path, PathBuf};

use clap::{Parser, Subcommand};
use console::style;

use crate::commands::{insert_structure, move_structure, recalculate_all, remove_structure, Direction};
use crate::config::{parse_cursor_path, validate_resource_uri};
use crate::document::Transaction;
use crate::error::{Result, StructureError};
use crate::i18n::TranslationCatalog;
use crate::state::EditorState;
use crate::structure::{create_default_structures, NumberFormat};
use crate::yaml::{outline_to_yaml, triples_to_yaml};

/// RegelRecht Structure - Insert, number and move structures in decision markup.
#[derive(Parser)]
#[command(name = "regelrecht-structure")]
#[command(version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List the available structure types.
    Structures {
        /// Only show these types (default: all)
        #[arg(long)]
        only: Vec<String>,
    },

    /// Insert a new structure at a cursor position.
    Insert {
        /// Document markup file
        input: PathBuf,

        /// Structure type (e.g., article, chapter)
        structure: String,

        /// Cursor as child indices from the root (e.g., 0/1/2)
        #[arg(short, long, default_value = "")]
        cursor: String,

        /// Translation catalogue for placeholder text (default: built-in nl-BE)
        #[arg(short, long)]
        translations: Option<PathBuf>,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Move a structure up or down among its siblings.
    Move {
        /// Document markup file
        input: PathBuf,

        /// Resource URI of the structure
        resource: String,

        /// Direction: up or down
        direction: Direction,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Remove a structure and renumber what remains.
    Remove {
        /// Document markup file
        input: PathBuf,

        /// Resource URI of the structure
        resource: String,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Recalculate every structure number.
    Renumber {
        /// Document markup file
        input: PathBuf,

        /// Output file (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Print the structure outline as YAML.
    Outline {
        /// Document markup file
        input: PathBuf,
    },

    /// Print matching triples of the property graph as YAML.
    Triples {
        /// Document markup file
        input: PathBuf,

        /// Subject filter (prefix with '>' for an exact match)
        #[arg(short, long)]
        subject: Option<String>,

        /// Predicate filter (e.g., say:hasPart)
        #[arg(short, long)]
        predicate: Option<String>,

        /// Object filter
        #[arg(long)]
        object: Option<String>,
    },
}

/// Run the CLI.
pub fn run() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Structures { only } => structures_command(&only),
        Commands::Insert {
            input,
            structure,
            cursor,
            translations,
            output,
        } => insert_command(
            &input,
            &structure,
            &cursor,
            translations.as_deref(),
            output.as_deref(),
        ),
        Commands::Move {
            input,
            resource,
            direction,
            output,
        } => move_command(&input, &resource, direction, output.as_deref()),
        Commands::Remove {
            input,
            resource,
            output,
        } => remove_command(&input, &resource, output.as_deref()),
        Commands::Renumber { input, output } => renumber_command(&input, output.as_deref()),
        Commands::Outline { input } => outline_command(&input),
        Commands::Triples {
            input,
            subject,
            predicate,
            object,
        } => triples_command(
            &input,
            subject.as_deref(),
            predicate.as_deref(),
            object.as_deref(),
        ),
    }
}

fn load_state(input: &Path) -> Result<EditorState> {
    let markup = std::fs::read_to_string(input)?;
    EditorState::from_markup(&markup)
}

/// Load a document that must contain `resource`.
fn load_state_with(input: &Path, resource: &str) -> Result<EditorState> {
    validate_resource_uri(resource)?;
    let state = load_state(input)?;
    if state.doc().find_resource(resource).is_none() {
        return Err(StructureError::ResourceNotFound(resource.to_string()));
    }
    Ok(state)
}

/// Apply a command's outcome and write the resulting document.
///
/// Without a transaction the document is left alone and nothing is written.
fn finish(
    state: &EditorState,
    transaction: Option<Transaction>,
    output: Option<&Path>,
    done: &str,
    noop: &str,
) -> Result<()> {
    let Some(transaction) = transaction else {
        eprintln!("{} {}", style("Nothing changed:").yellow().bold(), noop);
        return Ok(());
    };

    let next = state.apply(&transaction)?;
    let markup = next.to_markup();
    match output {
        Some(path) => {
            std::fs::write(path, markup)?;
            println!("{done}");
            println!("  Edits: {}", transaction.len());
            println!(
                "{} {}",
                style("Saved to:").green().bold(),
                path.display()
            );
        }
        None => {
            print!("{markup}");
            eprintln!("{done}");
        }
    }
    Ok(())
}

fn structures_command(only: &[String]) -> Result<()> {
    let registry = create_default_structures();
    let filter = (!only.is_empty()).then_some(only);

    for spec in registry.select(filter)? {
        let context: Vec<&str> = spec.context.iter().map(|k| k.tag()).collect();
        println!(
            "{} {}",
            style(spec.name()).cyan().bold(),
            style(format!("(level {})", spec.header_level)).dim()
        );
        println!("  Context: {}", context.join(", "));
        println!(
            "  Numbering: {}, {}",
            number_format_label(spec.number_format),
            if spec.continuous { "continuous" } else { "restarts per container" }
        );
        if let Some(predicate) = &spec.insert_predicate {
            println!("  Insert predicate: {}", predicate.prefixed());
        }
    }
    Ok(())
}

fn number_format_label(format: NumberFormat) -> &'static str {
    match format {
        NumberFormat::Arabic => "arabic",
        NumberFormat::Roman => "roman",
    }
}

fn insert_command(
    input: &Path,
    structure: &str,
    cursor: &str,
    translations: Option<&Path>,
    output: Option<&Path>,
) -> Result<()> {
    // Validate inputs before reading the document
    let cursor = parse_cursor_path(cursor)?;
    let registry = create_default_structures();
    registry.lookup(structure)?;
    let catalog = match translations {
        Some(path) => TranslationCatalog::from_file(path)?,
        None => TranslationCatalog::builtin()?,
    };

    let state = load_state(input)?;
    let transaction = insert_structure(&state, &registry, &cursor, structure, None, &catalog)?;

    let done = match transaction.as_ref().and_then(Transaction::created_resource) {
        Some(resource) => format!(
            "{} {} {}",
            style("Inserted").green().bold(),
            style(structure).cyan(),
            resource
        ),
        None => format!("{} {}", style("Inserted").green().bold(), style(structure).cyan()),
    };
    finish(
        &state,
        transaction,
        output,
        &done,
        &format!("no valid position for {structure} at cursor {cursor}"),
    )
}

fn move_command(
    input: &Path,
    resource: &str,
    direction: Direction,
    output: Option<&Path>,
) -> Result<()> {
    let registry = create_default_structures();
    let state = load_state_with(input, resource)?;
    let transaction = move_structure(&state, &registry, resource, direction)?;
    finish(
        &state,
        transaction,
        output,
        &format!("{} {} {}", style("Moved").green().bold(), resource, direction),
        &format!("cannot move {resource} {direction}"),
    )
}

fn remove_command(input: &Path, resource: &str, output: Option<&Path>) -> Result<()> {
    let registry = create_default_structures();
    let state = load_state_with(input, resource)?;
    let transaction = remove_structure(&state, &registry, resource)?;
    finish(
        &state,
        transaction,
        output,
        &format!("{} {}", style("Removed").green().bold(), resource),
        &format!("{resource} is not a structure"),
    )
}

fn renumber_command(input: &Path, output: Option<&Path>) -> Result<()> {
    let registry = create_default_structures();
    let state = load_state(input)?;
    let transaction = recalculate_all(&state, &registry)?;
    finish(
        &state,
        Some(transaction),
        output,
        &format!("{}", style("Renumbered").green().bold()),
        "",
    )
}

fn outline_command(input: &Path) -> Result<()> {
    let registry = create_default_structures();
    let state = load_state(input)?;
    print!("{}", outline_to_yaml(state.doc(), &registry)?);
    Ok(())
}

fn triples_command(
    input: &Path,
    subject: Option<&str>,
    predicate: Option<&str>,
    object: Option<&str>,
) -> Result<()> {
    let state = load_state(input)?;
    let triples = state.graph().match_pattern(subject, predicate, object);
    print!("{}", triples_to_yaml(triples)?);
    Ok(())
}
