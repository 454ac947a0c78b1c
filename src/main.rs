// SPDX-License-Identifier: PMPL-1.0-or-later

//! insectaid: command-line front end for the InsectAID core
//!
//! Drives the same translation tables, language preference and history log
//! the app screens use, against a file-backed store.

use anyhow::{anyhow, Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use insectaid::config::{Config, LANG_ENV};
use insectaid::history::HistoryStore;
use insectaid::i18n::{Lang, Translator, Vars};
use insectaid::identify::{identify_and_record, RandomIds, SystemClock};
use insectaid::insects::{INSECT_CATEGORIES, LIBRARY_ENTRIES};
use insectaid::storage::FileStore;
use insectaid::types::HistoryRecord;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "insectaid")]
#[command(version)]
#[command(about = "Insect identification field guide: translations and history")]
#[command(long_about = None)]
struct Cli {
    /// Configuration file (YAML)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory holding persisted history and preferences
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Display language for this run (does not change the saved preference)
    #[arg(long, global = true, value_enum)]
    lang: Option<LangArg>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Resolve a translation key
    T {
        /// Dotted key path, e.g. home.takePhoto
        #[arg(value_name = "PATH")]
        path: String,

        /// Placeholder value as name=value (repeatable)
        #[arg(long = "var", value_name = "NAME=VALUE")]
        vars: Vec<String>,
    },

    /// Resolve a translation key that holds a list
    TArray {
        #[arg(value_name = "PATH")]
        path: String,
    },

    /// Show or change the saved display language
    Lang {
        #[command(subcommand)]
        action: Option<LangAction>,
    },

    /// Identify a photo and record the result in history
    Identify {
        /// Reference to the captured or selected image
        #[arg(value_name = "IMAGE_URI")]
        image_uri: String,

        /// Print the full result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Inspect or edit identification history
    History {
        #[command(subcommand)]
        action: HistoryAction,
    },

    /// List insect orders
    Encyclopedia,

    /// Show the stored-product pest library
    Library,
}

#[derive(Subcommand)]
enum LangAction {
    /// Print the saved language
    Show,
    /// Save a new language
    Set {
        #[arg(value_enum)]
        lang: LangArg,
    },
}

#[derive(Subcommand)]
enum HistoryAction {
    /// List records, newest first
    List {
        /// Print the raw records as JSON
        #[arg(long)]
        json: bool,
    },
    /// Show one record
    Show { id: String },
    /// Delete one record
    Remove { id: String },
    /// Delete every record
    Clear,
}

#[derive(Debug, Clone, Copy, clap::ValueEnum)]
enum LangArg {
    En,
    Tr,
}

impl From<LangArg> for Lang {
    fn from(arg: LangArg) -> Self {
        match arg {
            LangArg::En => Lang::En,
            LangArg::Tr => Lang::Tr,
        }
    }
}

fn parse_vars(raw: &[String]) -> Result<Vars> {
    raw.iter()
        .map(|pair| {
            pair.split_once('=')
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .ok_or_else(|| anyhow!("expected NAME=VALUE, got {:?}", pair))
        })
        .collect::<Result<Vec<_>>>()
        .map(|pairs| pairs.into_iter().collect())
}

fn init_logging(filter: &str) {
    let filter = EnvFilter::try_new(filter).unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

fn print_record(t: &Translator<&FileStore>, record: &HistoryRecord) {
    let band = t.t(record.confidence_band().key());
    println!(
        "{}  {} ({})",
        record.id.dimmed(),
        record.name.bold(),
        record.scientific_name.italic()
    );
    println!(
        "    {} · {}% · {} · {}",
        record.category,
        record.confidence,
        band,
        record.display_date()
    );
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let (mut config, rejected_lang) = Config::load(cli.config.as_deref())?;
    if let Some(dir) = cli.data_dir {
        config.data_dir = dir;
    }
    if let Some(lang) = cli.lang {
        config.lang = Some(lang.into());
    }
    init_logging(&config.log_filter);
    if let Some(code) = rejected_lang {
        tracing::warn!(code = %code, "ignoring unsupported {}", LANG_ENV);
    }

    let store = FileStore::open(&config.data_dir)?;
    let mut t = match config.lang {
        Some(lang) => Translator::with_lang(&store, lang),
        None => Translator::load(&store),
    };
    let history = HistoryStore::new(&store);

    match cli.command {
        Commands::T { path, vars } => {
            let vars = parse_vars(&vars)?;
            println!("{}", t.t_with(&path, &vars));
        }

        Commands::TArray { path } => {
            for item in t.t_array(&path) {
                println!("{}", item);
            }
        }

        Commands::Lang { action } => match action.unwrap_or(LangAction::Show) {
            LangAction::Show => {
                let lang = t.lang();
                let vars = Vars::new().with("lang", lang.native_name());
                println!("{}", t.t_with("language.current", &vars));
            }
            LangAction::Set { lang } => {
                t.set_lang(lang.into());
                let vars = Vars::new().with("lang", t.lang().native_name());
                println!("{}", t.t_with("language.changed", &vars).green());
            }
        },

        Commands::Identify { image_uri, json } => {
            let vars = Vars::new().with("uri", &image_uri);
            eprintln!("{}", t.t_with("home.identifying", &vars).dimmed());

            let outcome = identify_and_record(&image_uri, &history, &RandomIds, &SystemClock)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&outcome.result)?);
            } else {
                let result = &outcome.result;
                println!("\n{}", t.t("results.title").bold());
                println!(
                    "  {} ({}) · {}",
                    result.name.bold(),
                    result.scientific_name.italic(),
                    t.t_with("results.confidence", &Vars::new().with("value", result.confidence))
                );
                println!("  {}: {}", t.t("results.category"), result.category);
                println!("  {}: {}", t.t("results.habitat"), result.habitat);
                println!("  {}: {}", t.t("results.diet"), result.diet);
                println!("  {}: {}", t.t("results.lifespan"), result.lifespan);
                println!("  {}: {}", t.t("results.size"), result.size);
                println!("  {}:", t.t("results.characteristics"));
                for item in &result.characteristics {
                    println!("    - {}", item);
                }
                println!("  {}: {}", t.t("results.funFact"), result.fun_fact);
            }
            let vars = Vars::new().with("id", &outcome.record.id);
            eprintln!("{}", t.t_with("results.savedToHistory", &vars).green());
        }

        Commands::History { action } => match action {
            HistoryAction::List { json } => {
                let records = history.list();
                if json {
                    println!("{}", serde_json::to_string_pretty(&records)?);
                } else if records.is_empty() {
                    println!("{}", t.t("history.empty").bold());
                    println!("{}", t.t("history.emptyHint").dimmed());
                } else {
                    let vars = Vars::new().with("count", records.len());
                    println!("{}", t.t_with("history.subtitle", &vars).bold());
                    for record in &records {
                        print_record(&t, record);
                    }
                }
            }
            HistoryAction::Show { id } => match history.find(&id) {
                Some(record) => print_record(&t, &record),
                None => {
                    let vars = Vars::new().with("id", &id);
                    println!("{}", t.t_with("history.notFound", &vars).yellow());
                }
            },
            HistoryAction::Remove { id } => {
                let vars = Vars::new().with("id", &id);
                let removed = history
                    .try_remove(&id)
                    .with_context(|| format!("removing history item {}", id))?;
                if removed {
                    println!("{}", t.t_with("history.removed", &vars).green());
                } else {
                    println!("{}", t.t_with("history.notFound", &vars).yellow());
                }
            }
            HistoryAction::Clear => {
                history.clear();
                println!("{}", t.t("history.cleared").green());
            }
        },

        Commands::Encyclopedia => {
            println!("{}", t.t("encyclopedia.title").bold());
            let vars = Vars::new().with("count", INSECT_CATEGORIES.len());
            println!("{}\n", t.t_with("encyclopedia.subtitle", &vars).dimmed());
            for category in INSECT_CATEGORIES {
                println!(
                    "{} ({}) · {} {}",
                    t.t(&category.name_key()).bold(),
                    category.scientific_order.italic(),
                    category.count,
                    t.t("encyclopedia.species")
                );
                println!("    {}", t.t(&category.description_key()));
                println!(
                    "    {}: {}",
                    t.t("encyclopedia.examples"),
                    category.examples.join(", ")
                );
            }
        }

        Commands::Library => {
            println!("{}", t.t("library.title").bold());
            println!("{}\n", t.t("library.subtitle").dimmed());
            for entry in LIBRARY_ENTRIES {
                println!(
                    "{} ({})",
                    t.t(&entry.field_key("commonName")).bold(),
                    entry.scientific_name.italic()
                );
                println!(
                    "    {}: {} · {}: {}",
                    t.t("library.family"),
                    entry.family,
                    t.t("library.order"),
                    entry.order
                );
                println!("  {}", t.t("library.physicalDesc").underline());
                println!("    {}", t.t(&entry.field_key("physicalDesc")));
                println!("  {}", t.t("library.distinguishing").underline());
                for item in t.t_array(&entry.field_key("distinguishing")) {
                    println!("    - {}", item);
                }
                println!("  {}", t.t("library.reproduction").underline());
                println!("    {}", t.t(&entry.field_key("reproduction")));
                println!("  {}", t.t("library.biologicalNotes").underline());
                println!("    {}\n", t.t(&entry.field_key("bioNotes")));
            }
        }
    }

    Ok(())
}
