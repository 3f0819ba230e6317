use clap::Parser;
use directories::ProjectDirs;
use log::warn;
use smartlife::api::OrganizerApi;
use smartlife::commands::config::ConfigAction;
use smartlife::commands::DataPaths;
use smartlife::config::SmartlifeConfig;
use smartlife::error::{Result, StoreError};
use smartlife::model::{EventPatch, NotePatch, PreferencesPatch, RecordId, StoreKey, TaskPatch};
use smartlife::store::fs_backend::FsBackend;
use std::path::PathBuf;

mod args;
mod cli;

use args::{Cli, Commands, EventAction, NoteAction, PrefsAction, TaskAction};
use cli::print;

const DATA_DIR_ENV: &str = "SMARTLIFE_DATA";

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Err(e) = run(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .format_timestamp(None)
        .init();
}

struct AppContext {
    api: OrganizerApi<FsBackend>,
    paths: DataPaths,
}

fn run(cli: Cli) -> Result<()> {
    let paths = resolve_paths(cli.data_dir)?;
    match cli.command.unwrap_or(Commands::List) {
        // Config is readable and writable without opening the store
        Commands::Config { key, value } => handle_config(&paths, key, value),
        command => handle_command(&init_context(paths), command),
    }
}

fn handle_command(ctx: &AppContext, command: Commands) -> Result<()> {
    match command {
        Commands::List => handle_overview(ctx),
        Commands::Event { action } => handle_event(ctx, action),
        Commands::Task { action } => handle_task(ctx, action),
        Commands::Note { action } => handle_note(ctx, action),
        Commands::Prefs { action } => handle_prefs(ctx, action),
        Commands::Init => handle_init(ctx),
        Commands::Clear { yes } => handle_clear(ctx, yes),
        Commands::Config { key, value } => handle_config(&ctx.paths, key, value),
    }
}

fn resolve_paths(data_dir: Option<PathBuf>) -> Result<DataPaths> {
    if let Some(dir) = data_dir {
        return Ok(DataPaths::new(dir));
    }
    if let Some(dir) = std::env::var_os(DATA_DIR_ENV) {
        return Ok(DataPaths::new(dir));
    }
    let proj_dirs = ProjectDirs::from("com", "smartlife", "smartlife").ok_or_else(|| {
        StoreError::Unavailable("could not determine a data directory".to_string())
    })?;
    Ok(DataPaths::new(proj_dirs.data_dir()))
}

fn init_context(paths: DataPaths) -> AppContext {
    let config = SmartlifeConfig::load(paths.config_dir()).unwrap_or_else(|e| {
        warn!("ignoring config: {}", e);
        SmartlifeConfig::default()
    });
    let api = OrganizerApi::open(&paths, &config);
    AppContext { api, paths }
}

fn handle_overview(ctx: &AppContext) -> Result<()> {
    let prefs = ctx.api.preferences();
    println!("Hello, {}!", prefs.user_name);
    println!();

    let events = ctx.api.events();
    print::print_heading("Events", events.len());
    print::print_events(&events);
    println!();

    let tasks = ctx.api.tasks();
    let pending = tasks.iter().filter(|t| !t.completed).count();
    print::print_heading("Tasks", tasks.len());
    print::print_tasks(&tasks);
    print::info(format!("{} pending", pending));
    println!();

    let notes = ctx.api.notes();
    print::print_heading("Notes", notes.len());
    print::print_notes(&notes);
    Ok(())
}

fn handle_event(ctx: &AppContext, action: EventAction) -> Result<()> {
    match action {
        EventAction::List => print::print_events(&ctx.api.events()),
        EventAction::Add { title, time, kind } => {
            require_non_empty(&title, "Event title")?;
            require_non_empty(&time, "Event time")?;
            let event = ctx.api.add_event(EventPatch::new(title, time, kind))?;
            print::success(format!("Event added ({}): {}", event.id, event.title));
        }
        EventAction::Edit {
            id,
            title,
            time,
            kind,
        } => {
            if let Some(title) = &title {
                require_non_empty(title, "Event title")?;
            }
            if let Some(time) = &time {
                require_non_empty(time, "Event time")?;
            }
            let event = ctx
                .api
                .update_event(id, EventPatch { title, time, kind })?;
            print::success(format!("Event updated ({}): {}", event.id, event.title));
        }
        EventAction::Delete { id } => match ctx.api.delete_event(id)? {
            Some(event) => print::success(format!("Event deleted ({}): {}", id, event.title)),
            None => report_missing(StoreKey::Events, id),
        },
    }
    Ok(())
}

fn handle_task(ctx: &AppContext, action: TaskAction) -> Result<()> {
    match action {
        TaskAction::List { pending } => {
            let mut tasks = ctx.api.tasks();
            if pending {
                tasks.retain(|t| !t.completed);
            }
            print::print_tasks(&tasks);
        }
        TaskAction::Add { text } => {
            require_non_empty(&text, "Task text")?;
            let task = ctx.api.add_task(TaskPatch::text(text))?;
            print::success(format!("Task added ({}): {}", task.id, task.text));
        }
        TaskAction::Edit { id, text } => {
            require_non_empty(&text, "Task text")?;
            let task = ctx.api.update_task(id, TaskPatch::text(text))?;
            print::success(format!("Task updated ({}): {}", task.id, task.text));
        }
        TaskAction::Done { id } => {
            let task = ctx.api.toggle_task(id)?;
            let state = if task.completed { "done" } else { "not done" };
            print::success(format!("Task {} ({}): {}", state, task.id, task.text));
        }
        TaskAction::Delete { id } => match ctx.api.delete_task(id)? {
            Some(task) => print::success(format!("Task deleted ({}): {}", id, task.text)),
            None => report_missing(StoreKey::Tasks, id),
        },
    }
    Ok(())
}

fn handle_note(ctx: &AppContext, action: NoteAction) -> Result<()> {
    match action {
        NoteAction::List => print::print_notes(&ctx.api.notes()),
        NoteAction::Show { id } => {
            let note = ctx
                .api
                .note(id)
                .ok_or(StoreError::NotFound { kind: "Note", id })?;
            print::print_full_note(&note);
        }
        NoteAction::Add { title, content } => {
            require_non_empty(&title, "Note title")?;
            let note = ctx.api.add_note(NotePatch::new(title, content))?;
            print::success(format!("Note added ({}): {}", note.id, note.title));
        }
        NoteAction::Edit { id, title, content } => {
            if let Some(title) = &title {
                require_non_empty(title, "Note title")?;
            }
            let note = ctx.api.update_note(id, NotePatch { title, content })?;
            print::success(format!("Note updated ({}): {}", note.id, note.title));
        }
        NoteAction::Delete { id } => match ctx.api.delete_note(id)? {
            Some(note) => print::success(format!("Note deleted ({}): {}", id, note.title)),
            None => report_missing(StoreKey::Notes, id),
        },
    }
    Ok(())
}

fn handle_prefs(ctx: &AppContext, action: Option<PrefsAction>) -> Result<()> {
    match action {
        None | Some(PrefsAction::Show) => print::print_preferences(&ctx.api.preferences()),
        Some(PrefsAction::Set {
            user_name,
            theme,
            notifications,
        }) => {
            let patch = PreferencesPatch {
                user_name,
                theme,
                notifications,
            };
            if patch.is_empty() {
                return Err(StoreError::Input(
                    "Nothing to set (try --user-name, --theme or --notifications)".into(),
                ));
            }
            let prefs = ctx.api.update_preferences(patch)?;
            print::print_preferences(&prefs);
            print::success("Preferences saved.");
        }
    }
    Ok(())
}

fn handle_init(ctx: &AppContext) -> Result<()> {
    let report = ctx.api.initialize_defaults();
    for key in &report.seeded {
        print::success(format!("Seeded default {}", key));
    }
    if let Some(key) = report.failed.first() {
        return Err(StoreError::Unavailable(format!("could not seed {}", key)));
    }
    if report.is_noop() {
        print::info("Nothing to seed; every collection already has records.");
    }
    Ok(())
}

fn handle_clear(ctx: &AppContext, yes: bool) -> Result<()> {
    if !yes {
        return Err(StoreError::Input(
            "Refusing to delete all data without --yes".into(),
        ));
    }
    ctx.api.clear_all()?;
    print::success(format!(
        "All data cleared in {}",
        ctx.paths.storage_dir().display()
    ));
    Ok(())
}

fn handle_config(paths: &DataPaths, key: Option<String>, value: Option<String>) -> Result<()> {
    let action = match (key, value) {
        (None, _) => ConfigAction::ShowAll,
        (Some(key), None) => ConfigAction::ShowKey(key),
        (Some(key), Some(value)) => ConfigAction::Set(key, value),
    };

    for (key, value) in smartlife::commands::config::run(paths, action)? {
        println!("{} = {}", key, value);
    }
    Ok(())
}

fn require_non_empty(value: &str, what: &str) -> Result<()> {
    if value.trim().is_empty() {
        return Err(StoreError::Input(format!("{} cannot be empty", what)));
    }
    Ok(())
}

fn report_missing(key: StoreKey, id: RecordId) {
    print::info(format!("No record {} in {}; nothing deleted.", id, key));
}
