use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

/// Lay out card images on printable pages.
///
/// Without arguments every setting takes its built-in default: the manifest
/// is read from `cards.xml`, images from `./images/`, and pages are written
/// to `./pages/`.
#[derive(Parser)]
#[command(name = "csheets", about = "Card sheet layout", version)]
struct Cli {
    /// JSON configuration file (missing fields use defaults)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Manifest XML file
    #[arg(short, long)]
    manifest: Option<PathBuf>,

    /// Directory holding card images
    #[arg(short, long)]
    images: Option<PathBuf>,

    /// Output directory for pages (cleared before every run)
    #[arg(short, long)]
    pages: Option<PathBuf>,

    /// Nominal card width in pixels
    #[arg(long)]
    card_width: Option<u32>,

    /// Show statistics only, don't write pages
    #[arg(long)]
    stats_only: bool,

    /// Save the effective configuration to this file and exit
    #[arg(long)]
    write_config: Option<PathBuf>,
}

impl Cli {
    async fn options(&self) -> Result<card_sheets::SheetOptions> {
        let mut options = match &self.config {
            Some(path) => card_sheets::SheetOptions::load(path).await?,
            None => card_sheets::SheetOptions::default(),
        };

        if let Some(manifest) = &self.manifest {
            options.paths.manifest = manifest.clone();
        }
        if let Some(images) = &self.images {
            options.paths.images = images.clone();
        }
        if let Some(pages) = &self.pages {
            options.paths.pages = pages.clone();
        }
        if let Some(card_width) = self.card_width {
            options.card_width = card_width;
        }

        options.validate()?;
        Ok(options)
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();
    let options = cli.options().await?;

    if let Some(path) = &cli.write_config {
        options.save(path).await?;
        println!("Configuration saved → {}", path.display());
        return Ok(());
    }

    if cli.stats_only {
        let manifest = card_sheets::load_manifest(&options.paths.manifest).await?;
        let stats = card_sheets::calculate_statistics(&manifest, &options.layout);
        let dims = options.dimensions();

        println!("Sheet Statistics:");
        println!("  Card entries: {}", stats.front_entries);
        println!("  Double-sided entries: {}", stats.double_sided_entries);
        println!("  Cards: {}", stats.cards);
        println!(
            "  Grid: {} x {} ({} per page)",
            options.layout.rows, options.layout.columns, stats.cards_per_page
        );
        println!(
            "  Page size: {} x {} px, card {} x {} px",
            dims.page_width, dims.page_height, dims.card_width, dims.card_height
        );
        println!("  Pages: {}", stats.pages);
        println!("  Back pages: {}", stats.back_pages);
        return Ok(());
    }

    let summary = card_sheets::run(&options).await?;
    log::info!(
        "Placed {} cards → {} pages, {} back pages in {}",
        summary.cards_placed,
        summary.pages_written,
        summary.back_pages_written,
        options.paths.pages.display()
    );

    Ok(())
}
