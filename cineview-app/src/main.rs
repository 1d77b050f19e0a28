//! Interactive demo driver for the headless application core.
//!
//! Reads commands from stdin, feeds them through the update loop, and
//! prints a short summary of the resulting state after each one.

use std::io::BufRead;
use std::sync::Arc;

use anyhow::Context;
use cineview_app::domains::filter::{self, PageItem};
use cineview_app::domains::navigation::{self, Route};
use cineview_app::domains::{detail, search, session};
use cineview_app::{AppMessage, AppRuntime, AppState};
use cineview_client::{ApiClient, ClientConfig};
use cineview_model::SortKey;
use env_logger::{Builder, Target};
use log::LevelFilter;

fn init_logger() {
    Builder::new()
        .target(Target::Stdout)
        .filter_level(LevelFilter::Warn)
        .filter_module("cineview", LevelFilter::Debug)
        .init();
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    if std::env::var("RUST_LOG").is_err() {
        init_logger();
    } else {
        env_logger::init();
    }

    let config = ClientConfig::from_environment().context("loading configuration")?;
    config.validate().map_err(anyhow::Error::msg)?;
    let client = ApiClient::new(&config).context("building API client")?;

    run(Arc::new(client)).await
}

async fn run(api: Arc<ApiClient>) -> anyhow::Result<()> {
    let mut app = AppRuntime::new(api);

    // Startup: re-validate any existing session, then land on home.
    app.dispatch(AppMessage::Session(session::Message::ValidateSession));
    app.dispatch(AppMessage::Navigation(navigation::Message::go(Route::Home)));
    app.run_until_idle().await;
    print_summary(app.state());
    print_help();

    let (line_tx, mut line_rx) = tokio::sync::mpsc::unbounded_channel::<String>();
    std::thread::spawn(move || {
        let stdin = std::io::stdin();
        for line in stdin.lock().lines() {
            let Ok(line) = line else { break };
            if line_tx.send(line).is_err() {
                break;
            }
        }
    });

    while let Some(line) = line_rx.recv().await {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        if line == "/quit" {
            break;
        }
        match parse_line(line) {
            Some(messages) => {
                for message in messages {
                    app.dispatch(message);
                }
                app.run_until_idle().await;
                print_summary(app.state());
            }
            None => print_help(),
        }
    }
    Ok(())
}

/// Map a typed line to messages. Plain text is a keystroke; commands
/// start with `/`.
fn parse_line(line: &str) -> Option<Vec<AppMessage>> {
    let mut parts = line.splitn(2, ' ');
    let head = parts.next().unwrap_or_default();
    let rest = parts.next().unwrap_or_default().trim();

    let messages = match head {
        "/search" => vec![
            AppMessage::Search(search::Message::QueryChanged(rest.to_string())),
            AppMessage::Search(search::Message::Submit),
        ],
        "/open" => vec![AppMessage::Search(search::Message::OpenResult(
            rest.to_string(),
        ))],
        "/suggest" => vec![AppMessage::Search(search::Message::SelectSuggestion(
            rest.to_string(),
        ))],
        "/back" => vec![AppMessage::Detail(detail::Message::Back)],
        "/home" => vec![AppMessage::Navigation(navigation::Message::go(Route::Home))],
        "/profile" => vec![AppMessage::Navigation(navigation::Message::go(
            Route::Profile,
        ))],
        "/filter" => vec![AppMessage::Navigation(navigation::Message::go(
            Route::FilterSearch,
        ))],
        "/genre" => vec![AppMessage::Filter(filter::Message::ToggleGenre(
            rest.to_string(),
        ))],
        "/type" => vec![AppMessage::Filter(filter::Message::ToggleType(
            rest.to_string(),
        ))],
        "/status" => vec![AppMessage::Filter(filter::Message::ToggleStatus(
            rest.to_string(),
        ))],
        "/year" => vec![AppMessage::Filter(filter::Message::ToggleYear(
            rest.to_string(),
        ))],
        "/sort" => {
            let key = SortKey::all()
                .iter()
                .find(|key| key.api_name() == rest)
                .copied()?;
            vec![AppMessage::Filter(filter::Message::SetSortKey(key))]
        }
        "/go" => vec![AppMessage::Filter(filter::Message::Submit)],
        "/page" => vec![AppMessage::Filter(filter::Message::GoToPage(
            rest.parse().ok()?,
        ))],
        "/login" => {
            let mut credentials = rest.splitn(2, ' ');
            let username = credentials.next()?.to_string();
            let password = credentials.next()?.to_string();
            vec![AppMessage::Session(session::Message::SubmitLogin(
                cineview_model::LoginRequest { username, password },
            ))]
        }
        "/logout" => vec![AppMessage::Session(session::Message::Logout)],
        _ if head.starts_with('/') => return None,
        // Anything else is typing into the search box.
        _ => vec![AppMessage::Search(search::Message::QueryChanged(
            line.to_string(),
        ))],
    };
    Some(messages)
}

fn print_summary(state: &AppState) {
    let domains = &state.domains;
    println!("-- route: {:?}", domains.navigation.current);

    if let Some(user) = &domains.session.user {
        println!("   user: {} ({})", user.username, user.role_name);
    }
    if let Some(error) = &domains.session.error {
        println!("   auth error: {error}");
    }

    match &domains.navigation.current {
        Route::Home => {
            let search = &domains.search;
            if search.show_suggestions {
                println!("   suggestions for '{}':", search.query);
                for hit in &search.suggestions {
                    println!("     [{}] {}", hit.title_id, hit.name);
                }
            }
            if search.has_searched {
                println!(
                    "   results for '{}': {}",
                    search.committed_query.as_deref().unwrap_or_default(),
                    search.results.len()
                );
            }
            if let Some(error) = &search.error {
                println!("   search error: {error}");
            }
            println!(
                "   rails: {} trending / {} top rated",
                domains.home.trending.len(),
                domains.home.top_rated.len()
            );
        }
        Route::FilterSearch => {
            let filter = &domains.filter;
            println!(
                "   phase: {:?}, {} results of {} (page {}/{})",
                filter.phase(),
                filter.results.len(),
                filter.total_count,
                filter.current_page,
                filter.total_pages()
            );
            let strip: Vec<String> = filter::page_window(
                filter.current_page,
                filter.total_pages(),
            )
            .into_iter()
            .map(|item| match item {
                PageItem::Page(page) => page.to_string(),
                PageItem::Gap => "...".to_string(),
            })
            .collect();
            if !strip.is_empty() {
                println!("   pages: {}", strip.join(" "));
            }
            if let Some(error) = &filter.error {
                println!("   filter error: {error}");
            }
        }
        Route::Profile => {
            println!(
                "   {} reviews written, {} titles in watchlist",
                domains.profile.reviews.len(),
                domains.profile.watchlist.len()
            );
        }
        Route::TitleDetail(_) => {
            let detail = &domains.detail;
            match (&detail.detail, &detail.error) {
                (Some(payload), _) => {
                    if let Some(body) = &payload.detail {
                        println!("   {} ({:?})", body.name, body.start_year);
                    }
                    println!(
                        "   {} reviews, watchlist: {:?}",
                        detail.reviews.len(),
                        detail.watchlist
                    );
                }
                (None, Some(error)) => println!("   detail error: {error}"),
                (None, None) => println!("   loading..."),
            }
        }
        _ => {}
    }
}

fn print_help() {
    println!(
        "commands: <text> | /search <text> | /suggest <id> | /open <id> | /back\n\
         | /home | /profile | /filter | /genre <id> | /type <id> | /status <id> | /year <y>\n\
         | /sort <released|popularity|name|rating> | /go | /page <n>\n\
         | /login <user> <pass> | /logout | /quit"
    );
}
