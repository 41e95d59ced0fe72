use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, ValueEnum};
use property_dashboard::config::{load_config, AppConfig};
use property_dashboard::downloads::{DownloadController, DownloadOutcome, HttpAssetDownloader};
use property_dashboard::providers::{JsonProvider, MockProvider, PropertyProvider};
use property_dashboard::routes::Route;
use property_dashboard::views::{
    filter_properties, DashboardSummary, DetailTab, MediaFilter, MediaLibrary, OccupancyBand,
    PropertyDetail, PropertyFilter,
};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "property-dashboard", about = "Property management dashboard")]
struct Cli {
    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// View to show: /, /properties, /media or /properties/{id}
    #[arg(default_value = "/")]
    path: String,

    /// Name or address search on the properties list
    #[arg(long, default_value = "")]
    search: String,

    /// Occupancy band on the properties list
    #[arg(long, value_enum, default_value_t = Band::All)]
    band: Band,

    /// Media library category (all, amenity, property, unit, legal)
    #[arg(long, default_value = "all")]
    category: String,

    /// Detail view tab
    #[arg(long, value_enum, default_value_t = Tab::Overview)]
    tab: Tab,

    /// Download the asset bundle of this layout (detail view only)
    #[arg(long)]
    download: Option<String>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Band {
    All,
    High,
    Low,
}

impl From<Band> for OccupancyBand {
    fn from(band: Band) -> Self {
        match band {
            Band::All => OccupancyBand::All,
            Band::High => OccupancyBand::High,
            Band::Low => OccupancyBand::Low,
        }
    }
}

#[derive(Clone, Copy, ValueEnum)]
enum Tab {
    Overview,
    Layouts,
    Amenities,
    Gallery,
}

impl From<Tab> for DetailTab {
    fn from(tab: Tab) -> Self {
        match tab {
            Tab::Overview => DetailTab::Overview,
            Tab::Layouts => DetailTab::Layouts,
            Tab::Amenities => DetailTab::Amenities,
            Tab::Gallery => DetailTab::Gallery,
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => load_config(path)?,
        None => AppConfig::default(),
    };

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&config.logging.filter)),
        )
        .init();

    info!("🏢 Property Dashboard");

    let provider: Box<dyn PropertyProvider> = match &config.data.snapshot_path {
        Some(path) => Box::new(JsonProvider::load(path).await?),
        None => Box::new(MockProvider::new()),
    };
    info!("Data source: {}", provider.source_name());

    match Route::parse(&cli.path) {
        Route::Dashboard => show_dashboard(provider.as_ref(), &config).await,
        Route::Properties => show_properties(provider.as_ref(), &cli).await,
        Route::MediaLibrary => show_media(provider.as_ref(), &cli).await,
        Route::PropertyDetail(id) => show_detail(provider.as_ref(), &config, &cli, &id).await,
        Route::NotFound => {
            println!("No page at {}", cli.path);
            Ok(())
        }
    }
}

async fn show_dashboard(provider: &dyn PropertyProvider, config: &AppConfig) -> Result<()> {
    let properties = provider.list_properties().await?;
    let media = provider.list_media().await?;
    let summary = DashboardSummary::new(&properties, &media, config.data.recent_media);

    println!("Properties:       {}", summary.total_properties);
    println!(
        "Units:            {} ({} occupied, {} vacant)",
        summary.total_units,
        summary.occupied_units,
        summary.vacant_units()
    );
    println!("Occupancy:        {:.1}%", summary.occupancy_rate());
    println!(
        "High / low:       {} / {}",
        summary.high_occupancy, summary.low_occupancy
    );
    println!();
    println!("Recent uploads:");
    for item in &summary.recent_media {
        println!(
            "  {} [{}] {}",
            item.uploaded_at.format("%Y-%m-%d"),
            item.category.as_str(),
            item.image.title.as_deref().unwrap_or(&item.image.id)
        );
    }
    Ok(())
}

async fn show_properties(provider: &dyn PropertyProvider, cli: &Cli) -> Result<()> {
    let properties = provider.list_properties().await?;
    let filter = PropertyFilter::new(cli.search.clone(), cli.band.into());
    let matches = filter_properties(&properties, &filter);

    if matches.is_empty() {
        println!("No properties match the current filters.");
        return Ok(());
    }

    for (i, property) in matches.iter().enumerate() {
        println!("{}. {} ({:.0}% occupied)", i + 1, property.name, property.occupancy_rate());
        println!("   {}", property.address);
        println!(
            "   {}/{} units, {}",
            property.occupied_units,
            property.total_units,
            property.amenities.join(", ")
        );
        println!("   Link: {}", Route::PropertyDetail(property.id.clone()).path());
        println!();
    }
    Ok(())
}

async fn show_media(provider: &dyn PropertyProvider, cli: &Cli) -> Result<()> {
    let mut library = MediaLibrary::new(provider.list_media().await?);
    library.select(cli.category.parse::<MediaFilter>()?);

    for (category, count) in library.counts() {
        println!("{:<10} {}", category.as_str(), count);
    }
    println!("Total size: {} bytes", library.total_bytes());
    println!();

    for item in library.visible() {
        println!(
            "[{}] {:<8} {} {}",
            item.category.as_str(),
            item.kind.as_str(),
            item.image.title.as_deref().unwrap_or(&item.image.id),
            item.image.url
        );
    }
    Ok(())
}

async fn show_detail(
    provider: &dyn PropertyProvider,
    config: &AppConfig,
    cli: &Cli,
    id: &str,
) -> Result<()> {
    let mut detail = PropertyDetail::load(provider, id).await?;
    let back_link = detail.back_link();

    let Some(page) = detail.page_mut() else {
        println!("Property not found.");
        println!("Back to properties: {}", back_link);
        return Ok(());
    };
    page.select_tab(cli.tab.into());

    let today = Utc::now().date_naive();
    let property = &page.property;
    println!("{}", property.name);
    println!("{}", property.address);
    match page.tab_count(page.state.tab) {
        Some(count) => println!("[{} ({})]", page.state.tab.label(), count),
        None => println!("[{}]", page.state.tab.label()),
    }
    println!();

    match page.state.tab {
        DetailTab::Overview => {
            println!("Occupancy: {:.1}%", property.occupancy_rate());
            println!("Units: {} total, {} vacant", property.total_units, property.vacant_units());
            println!("Amenities: {}", property.amenities.join(", "));
        }
        DetailTab::Layouts => {
            for card in page.layout_cards() {
                let layout = card.layout;
                println!(
                    "{} - {} bd / {} ba, {} sqft, ${:.0}/mo",
                    layout.name, layout.bedrooms, layout.bathrooms, layout.square_feet, layout.base_rent
                );
                if let Some(hero) = card.hero_image() {
                    println!("   Image: {}", hero.url);
                }
                for unit in &card.units {
                    let when = if unit.is_immediately_available {
                        "now".to_string()
                    } else {
                        format!("{} ({} days)", unit.available_date, unit.days_until(today))
                    };
                    println!(
                        "   #{} floor {} from {} at ${:.0}{}",
                        unit.unit_number,
                        unit.floor,
                        when,
                        unit.rent_amount,
                        unit.special_offer
                            .as_deref()
                            .map(|o| format!(" ({})", o))
                            .unwrap_or_default()
                    );
                }
            }
        }
        DetailTab::Amenities => {
            for space in property.common_spaces() {
                let reservation = if space.requires_reservation { ", reservation required" } else { "" };
                println!("{} ({}{})", space.name, space.hours_of_operation, reservation);
            }
            for (category, features) in page.features_by_category() {
                println!("{}:", category.label());
                for feature in features {
                    println!("   {} - {}", feature.name, feature.description);
                }
            }
        }
        DetailTab::Gallery => {
            for image in page.gallery() {
                println!("{} {}", image.title.as_deref().unwrap_or(&image.id), image.url);
            }
        }
    }

    if let Some(layout_id) = &cli.download {
        if !page.open_layout(layout_id) {
            println!("No layout {} on this property", layout_id);
            return Ok(());
        }
        let Some(layout) = page.state.modal.selected() else {
            return Ok(());
        };
        if let Some(image) = layout.modal_image() {
            println!("{}: {}", layout.name, image.url);
        }

        let downloader = HttpAssetDownloader::new(&config.downloads.output_dir, config.downloads.timeout())
            .context("Failed to set up asset downloader")?;
        let controller = DownloadController::new(Arc::new(downloader));

        match controller.request(layout).await {
            DownloadOutcome::Completed(receipt) => {
                println!("Saved {} files to {}", receipt.files.len(), receipt.directory.display());
            }
            DownloadOutcome::Failed(message) => println!("{}", message),
            DownloadOutcome::Ignored => {}
        }
        page.close_layout();
    }

    Ok(())
}
