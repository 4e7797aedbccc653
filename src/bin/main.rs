use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::Colorize;
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crypto_dashboard::feed;
use crypto_dashboard::tui::app::App;
use crypto_dashboard::AppEvent;

#[derive(Parser, Debug)]
struct Args {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Subcommand)]
enum Commands {
    Tui,
    Dump {
        #[arg(long)]
        json: bool,
    },
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            format!("{}=debug", env!("CARGO_CRATE_NAME")).into()
        }))
        .with(fmt::layer())
        .init();

    let args = Args::parse();

    match args.command {
        Some(Commands::Dump { json }) => {
            let _ = run_dump(json);
        }
        Some(Commands::Tui) | None => {
            let _ = run_tui().await;
        }
    }
}

fn run_dump(json: bool) -> Result<()> {
    let snapshot = feed::snapshot();

    if json {
        println!("{}", serde_json::to_string_pretty(&snapshot)?);
        return Ok(());
    }

    println!("{}", snapshot.metrics);
    for tx in &snapshot.transactions {
        println!("{tx}");
    }
    for point in &snapshot.holdings {
        println!("{} : {}", point.label, point.value);
    }

    Ok(())
}

async fn run_tui() -> Result<()> {
    info!("{}", "STARTING DASHBOARD".green());

    let (tx, rx) = tokio::sync::mpsc::channel::<AppEvent>(16);
    let (first_frame_tx, first_frame_rx) = tokio::sync::oneshot::channel::<()>();
    let mut app = App::new(rx, first_frame_tx);

    // generate nothing until the loading frame is on screen
    let feed_task = tokio::task::spawn(async move {
        let _ = first_frame_rx.await;
        let _ = tx.send(AppEvent::Snapshot(feed::snapshot())).await;
    });

    let app_task = tokio::task::spawn(async move {
        let _ = app.run().await;
    });

    let _ = app_task.await;
    let _ = feed_task.await;

    ratatui::restore();

    Ok(())
}
