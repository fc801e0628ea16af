use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{bail, Context};
use clap::{Parser, Subcommand};

use console_editor::kernel::services::adapters::{
    ensure_settings_file, get_settings_path, get_text_objects_dir, load_settings_or_default,
    LocalStorage,
};
use console_editor::kernel::{EditorSession, FileTree, FileTreeEntry};

mod logging;

#[derive(Parser, Debug)]
#[command(name = "console_editor", version, about = "Manage console text objects")]
struct Cli {
    /// Directory holding the text objects.
    #[arg(long, env = "CONSOLE_EDITOR_DATA_DIR")]
    data_dir: Option<PathBuf>,

    /// Settings file (defaults to the per-user settings.json).
    #[arg(long, env = "CONSOLE_EDITOR_SETTINGS")]
    settings: Option<PathBuf>,

    /// Log directory (defaults to the per-user log directory).
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// Also log to stderr.
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List text objects, optionally filtered by name.
    List {
        #[arg(long)]
        filter: Option<String>,
    },
    /// Create a new, empty text object.
    Create { name: String },
    /// Rename a text object.
    Rename { id: String, name: String },
    /// Delete a text object.
    Delete { id: String },
    /// Print the body of a text object (the scratch pad by default).
    Show { id: Option<String> },
    /// Print the effective settings.
    Settings {
        /// Write a default settings file if none exists.
        #[arg(long)]
        init: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let logging = logging::init(cli.log_dir.clone(), cli.verbose);
    if cli.verbose {
        if let Some(guard) = &logging {
            eprintln!("logging to {}", guard.log_dir().display());
        }
    }

    let runtime = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .context("failed to build tokio runtime")?;
    runtime.block_on(run(cli))
}

async fn run(cli: Cli) -> anyhow::Result<()> {
    if let Command::Settings { init } = cli.command {
        return show_settings(cli.settings, init);
    }

    let settings =
        load_settings_or_default(cli.settings.as_deref()).context("failed to load settings")?;

    let data_dir = match cli.data_dir {
        Some(dir) => dir,
        None => get_text_objects_dir().context("cannot determine data directory")?,
    };
    let storage = LocalStorage::open(&data_dir)
        .await
        .with_context(|| format!("failed to open {}", data_dir.display()))?;

    let mut session = EditorSession::new(Arc::new(storage));
    session.update_settings(settings);
    session
        .bootstrap()
        .await
        .context("failed to load text objects")?;

    let mut tree = FileTree::new(session.crud());

    match cli.command {
        Command::List { filter } => {
            if let Some(filter) = filter {
                tree.toggle_search_bar();
                tree.set_search_filter(filter);
            }
        }
        Command::Create { name } => {
            let created = tree.create(name).await?;
            println!("created {}", created.id);
        }
        Command::Rename { id, name } => {
            ensure_exists(&session, &id)?;
            tree.select(id);
            session.pump();
            tree.rename_current(session.state(), name).await?;
        }
        Command::Delete { id } => {
            ensure_exists(&session, &id)?;
            tree.request_delete(session.state(), id)?;
            tree.confirm_delete(session.state()).await?;
        }
        Command::Show { id } => {
            let obj = match id {
                Some(id) => session.state().text_objects.get(&id),
                None => session.state().scratch_pad(),
            };
            let Some(obj) = obj else {
                bail!("no such text object");
            };
            println!("{}", obj.text);
            return Ok(());
        }
        Command::Settings { .. } => {}
    }

    session.pump();
    print_entries(&tree.entries(session.state()));
    Ok(())
}

fn ensure_exists(session: &EditorSession, id: &str) -> anyhow::Result<()> {
    if !session.state().text_objects.contains_key(id) {
        bail!("no text object with id {id}");
    }
    Ok(())
}

fn print_entries(entries: &[FileTreeEntry]) {
    for entry in entries {
        let marker = if entry.is_selected { '*' } else { ' ' };
        match &entry.save_error {
            Some(error) => println!("{marker} {}  {}  (save failed: {error})", entry.id, entry.label),
            None => println!("{marker} {}  {}", entry.id, entry.label),
        }
    }
}

fn show_settings(path: Option<PathBuf>, init: bool) -> anyhow::Result<()> {
    if init {
        let path = match path.clone() {
            Some(path) => path,
            None => get_settings_path().context("cannot determine settings directory")?,
        };
        ensure_settings_file(&path)?;
        println!("{}", path.display());
    }
    let settings = load_settings_or_default(path.as_deref())?;
    println!("{}", serde_json::to_string_pretty(&settings)?);
    Ok(())
}
