use std::sync::Arc;

use anyhow::Result;
use clap::Parser;
use shared::protocol::PAGE_SIZE;
use table_core::{ArticFetcher, TableSession, TableSnapshot, DEFAULT_BASE_URL};

#[derive(Parser, Debug)]
struct Args {
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    base_url: String,
    /// Number of rows to select, as typed into the selection overlay.
    #[arg(long, default_value = "0")]
    select: String,
    /// Pages to visit after the initial one, 0-based, comma separated.
    #[arg(long, value_delimiter = ',')]
    visit: Vec<u32>,
    /// Press the overlay submit button at the end, replacing the
    /// selection from the page showing at that point.
    #[arg(long)]
    submit: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt().with_env_filter("info").init();
    let args = Args::parse();

    let session = TableSession::new(Arc::new(ArticFetcher::new(args.base_url)));
    if !session.set_target_text(&args.select).await {
        anyhow::bail!("--select takes digits only, got {:?}", args.select);
    }

    session.start().await;
    render(&session.snapshot().await);

    for page_index in args.visit {
        session.goto_page(page_index).await;
        render(&session.snapshot().await);
    }

    if args.submit {
        session.submit().await;
    }

    let snapshot = session.snapshot().await;
    let selected: Vec<i64> = snapshot.selected.iter().map(|id| id.0).collect();
    println!();
    println!("selected {} rows: {selected:?}", selected.len());

    Ok(())
}

fn render(snapshot: &TableSnapshot) {
    let offset = snapshot.first_row_offset();
    println!();
    println!(
        "page {} of {} (rows {}-{} of {})",
        snapshot.page_index + 1,
        snapshot.total.div_ceil(PAGE_SIZE as u64),
        offset + 1,
        offset + snapshot.items.len() as u64,
        snapshot.total
    );
    println!(
        "    {:<40} {:<18} {:<30} {:<24} {:>5} {:>5}",
        "Title", "Place of Origin", "Artist", "Inscriptions", "Start", "End"
    );
    for artwork in &snapshot.items {
        let mark = if snapshot.selected.contains(&artwork.id) {
            "[x]"
        } else {
            "[ ]"
        };
        println!(
            "{mark} {:<40} {:<18} {:<30} {:<24} {:>5} {:>5}",
            clip(artwork.title_text(), 40),
            clip(artwork.origin_text(), 18),
            clip(artwork.artist_text(), 30),
            clip(artwork.inscriptions_text(), 24),
            artwork.date_start_text(),
            artwork.date_end_text(),
        );
    }
}

fn clip(text: &str, width: usize) -> String {
    if text.chars().count() <= width {
        return text.to_string();
    }
    let mut clipped: String = text.chars().take(width.saturating_sub(3)).collect();
    clipped.push_str("...");
    clipped
}
