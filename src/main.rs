use anyhow::Result;
use ortscraper::{export, fetch, process};
use reqwest::Client;
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_span_events(fmt::format::FmtSpan::CLOSE)
        .init();
    info!("startup");

    // ─── 2) download the archive ─────────────────────────────────────
    let client = Client::new();
    info!(url = fetch::DATASET_URL, "downloading");
    let zip_bytes = fetch::download_zip(&client, fetch::DATASET_URL).await?;
    info!(bytes = zip_bytes.len(), "downloaded");

    // ─── 3) extract + parse the first CSV entry ──────────────────────
    let (entry_name, csv_bytes) = process::extract_first_csv(&zip_bytes)?;
    info!(entry = %entry_name, "extracted CSV entry");

    let table = process::parse_table(&csv_bytes)?;
    info!(
        rows = table.rows.len(),
        columns = table.headers.len(),
        "parsed table"
    );

    // ─── 4) transform into canonical records ─────────────────────────
    let records = process::transform::build_records(&table)?;
    info!(records = records.len(), "built locality records");

    // ─── 5) write both outputs ───────────────────────────────────────
    export::write_csv(&records, export::CSV_PATH)?;
    export::write_xlsx(&records, export::XLSX_PATH)?;

    println!("OK: {} rows exported", records.len());
    println!("Files written: {} / {}", export::CSV_PATH, export::XLSX_PATH);
    Ok(())
}
