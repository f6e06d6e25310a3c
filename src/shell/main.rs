use tokio::io::BufReader;
use tokio::sync::Mutex;
use tracing_subscriber::{EnvFilter, fmt};

use entries_client::shell::config::ClientConfig;
use entries_client::shell::controller;
use entries_client::shell::input::next_submission;
use entries_client::shell::page::Page;
use entries_client::shell::state::AppState;

async fn print(page: &Mutex<Page>) {
    println!("{}", *page.lock().await);
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Logs go to stderr so the page on stdout stays readable.
    fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let config = ClientConfig::default();
    tracing::info!("entries backend: {}", config.api_base);
    let state = AppState::from_config(&config)?;
    let page = Mutex::new(Page::new());

    let on_load = async {
        controller::load(&state, &page).await;
        print(&page).await;
    };

    // Each stdin line is one form submission.
    let on_submit = async {
        let mut stdin = BufReader::new(tokio::io::stdin());
        while let Some(line) = next_submission(&mut stdin).await? {
            page.lock().await.set_input(line);
            controller::submit(&state, &page).await;
            print(&page).await;
        }
        anyhow::Ok(())
    };

    let ((), submitted) = tokio::join!(on_load, on_submit);
    submitted
}
