// Presentation layer. Runs the use case handlers and maps their results onto the page.
//
// Responsibilities
// - Pick the single user-visible message per failure and log the failure detail.
// - Lock the page only to apply a result, never across a request.
//
// Boundaries
// - Handlers never see the page; this module never talks HTTP.

use crate::modules::entries::use_cases::list_entries::projection::render;
use crate::modules::entries::use_cases::submit_entry::command::SubmitEntry;
use crate::shell::page::{LOAD_FAILED, Page, SAVE_FAILED};
use crate::shell::state::AppState;
use tokio::sync::Mutex;
use tracing::{error, info};

/// Page load: identity and list are fetched independently and land in whatever order they finish.
pub async fn load(state: &AppState, page: &Mutex<Page>) {
    info!("loading page");
    tokio::join!(refresh(state, page), identify(state, page));
}

/// Form submission. Reads the page input, posts it, then refreshes the list.
pub async fn submit(state: &AppState, page: &Mutex<Page>) {
    let command = {
        let mut page = page.lock().await;
        page.clear_error();
        match SubmitEntry::from_input(page.input()) {
            Some(command) => command,
            None => return,
        }
    };

    match state.submit_handler.handle(command).await {
        Ok(()) => {
            page.lock().await.clear_input();
            refresh(state, page).await;
        }
        Err(err) => {
            error!(error = %err, "failed to save entry");
            page.lock().await.show_error(SAVE_FAILED);
        }
    }
}

pub async fn refresh(state: &AppState, page: &Mutex<Page>) {
    match state.list_handler.handle().await {
        Ok(entries) => page.lock().await.replace_entries(render(&entries)),
        Err(err) => {
            error!(error = %err, "failed to load entries");
            page.lock().await.show_error(LOAD_FAILED);
        }
    }
}

pub async fn identify(state: &AppState, page: &Mutex<Page>) {
    match state.identify_handler.handle().await {
        Ok(identity) => page.lock().await.show_identity(&identity.user_id),
        Err(err) => {
            error!(error = %err, "failed to resolve user id");
            page.lock().await.show_identity_unknown();
        }
    }
}
