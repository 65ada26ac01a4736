use std::{
    io::{self, Write},
    sync::Arc,
};

use anyhow::Result;
use catalog_core::{
    CatalogStore, DeleteConfirmation, DraftField, EditingSession, EditorState,
    RemoteCatalogClient, SubmitOutcome,
};
use clap::Parser;
use shared::{domain::MovieId, protocol::MovieRecord};

mod config;

#[derive(Parser, Debug)]
struct Args {
    /// Base address of the catalog service, e.g. http://192.168.0.10:3000;
    /// overrides catalog.toml and environment settings.
    #[arg(long)]
    server_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().init();
    let args = Args::parse();

    let mut settings = config::load_settings();
    if let Some(server_url) = args.server_url {
        settings.server_url = server_url;
    }

    let api = Arc::new(RemoteCatalogClient::new(settings.server_url.as_str())?);
    let mut store = CatalogStore::new(api);
    let mut session = EditingSession::new();
    let mut confirmation = DeleteConfirmation::default();

    println!("My movies ({})", settings.server_url);
    match store.refresh().await {
        Ok(()) => render_list(&store),
        Err(err) => println!("{err}"),
    }
    print_help();

    let stdin = io::stdin();
    let mut line = String::new();
    loop {
        prompt(&session, &confirmation)?;
        line.clear();
        if stdin.read_line(&mut line)? == 0 {
            break;
        }
        let input = line.trim();

        if confirmation.pending().is_some() {
            handle_confirmation(input, &mut confirmation, &mut store).await;
        } else if session.is_editing() {
            handle_editor(input, &mut session, &mut store).await;
        } else if handle_browse(input, &mut session, &mut confirmation, &mut store).await {
            break;
        }
    }
    Ok(())
}

/// Only an explicit `y`/`yes` fires the armed delete; anything else denies.
async fn handle_confirmation(
    input: &str,
    confirmation: &mut DeleteConfirmation,
    store: &mut CatalogStore,
) {
    if matches!(input, "y" | "yes") {
        match confirmation.confirm(store).await {
            Some(Ok(())) => {
                println!("Movie deleted.");
                render_list(store);
            }
            Some(Err(err)) => println!("{err}"),
            None => {}
        }
    } else {
        confirmation.deny();
        println!("Deletion cancelled.");
    }
}

async fn handle_editor(input: &str, session: &mut EditingSession, store: &mut CatalogStore) {
    let (command, rest) = split_command(input);
    match command {
        "title" => session.change_field(DraftField::Title, rest),
        "director" => session.change_field(DraftField::Director, rest),
        "year" => session.change_field(DraftField::Year, rest),
        "rating" => session.change_field(DraftField::Rating, rest),
        "show" => render_draft(session),
        "cancel" => {
            session.cancel();
            println!("Discarded.");
        }
        "save" => {
            let updating = matches!(session.state(), EditorState::Editing { target: Some(_) });
            match session.submit(store).await {
                SubmitOutcome::Saved => {
                    println!("{}", if updating { "Movie updated." } else { "Movie added." });
                    render_list(store);
                }
                SubmitOutcome::SavedListStale(err) => {
                    println!("{}", if updating { "Movie updated." } else { "Movie added." });
                    println!("{err}");
                }
                SubmitOutcome::Rejected(err) => println!("Check the form: {err}."),
                SubmitOutcome::SaveFailed(err) => println!("{err}"),
                SubmitOutcome::NotEditing => {}
            }
        }
        "" => {}
        _ => println!("Editor commands: title/director/year/rating <value>, show, save, cancel."),
    }
}

/// Returns true when the user asked to quit.
async fn handle_browse(
    input: &str,
    session: &mut EditingSession,
    confirmation: &mut DeleteConfirmation,
    store: &mut CatalogStore,
) -> bool {
    let (command, rest) = split_command(input);
    match command {
        "list" => match store.refresh().await {
            Ok(()) => render_list(store),
            Err(err) => println!("{err}"),
        },
        "add" => {
            session.open_create();
            println!("New movie. Set title, director, year, rating; then save.");
        }
        "edit" => match find_movie(store, rest) {
            Some(movie) => {
                println!("Editing \"{}\". Adjust fields, then save.", movie.title);
                session.open_edit(&movie);
            }
            None => println!("No movie with that id; try list."),
        },
        "delete" => match find_movie(store, rest) {
            Some(movie) => {
                let question = confirmation.request(&movie);
                println!("{question} [y/N]");
            }
            None => println!("No movie with that id; try list."),
        },
        "help" => print_help(),
        "quit" | "exit" => return true,
        "" => {}
        _ => println!("Unknown command; try help."),
    }
    false
}

fn find_movie(store: &CatalogStore, raw_id: &str) -> Option<MovieRecord> {
    let id = raw_id.trim().parse::<i64>().ok()?;
    store
        .movies()
        .iter()
        .find(|movie| movie.id == MovieId(id))
        .cloned()
}

fn split_command(input: &str) -> (&str, &str) {
    match input.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (input, ""),
    }
}

fn render_list(store: &CatalogStore) {
    if store.movies().is_empty() {
        println!("  (no movies yet)");
        return;
    }
    for movie in store.movies() {
        println!(
            "  [{}] {} by {} ({}) {}",
            movie.id.0,
            movie.title,
            movie.director,
            movie.year,
            stars(movie.rating)
        );
    }
}

fn render_draft(session: &EditingSession) {
    let draft = session.draft();
    println!("  title:    {}", draft.title);
    println!("  director: {}", draft.director);
    println!("  year:     {}", draft.year);
    println!("  rating:   {}", draft.rating);
}

fn stars(rating: i32) -> String {
    "★".repeat(rating.clamp(0, 5) as usize)
}

fn prompt(session: &EditingSession, confirmation: &DeleteConfirmation) -> io::Result<()> {
    let mut out = io::stdout();
    if confirmation.pending().is_some() {
        write!(out, "confirm> ")?;
    } else if session.is_editing() {
        write!(out, "edit> ")?;
    } else {
        write!(out, "> ")?;
    }
    out.flush()
}

fn print_help() {
    println!("Commands: list, add, edit <id>, delete <id>, help, quit.");
}
