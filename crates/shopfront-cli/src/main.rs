use clap::Parser;
use shopfront_api::FakeStoreClient;
use shopfront_core::{
    filter::{by_category, by_search_term},
    label_for, AppContext, CatalogStore, Config, FakeStoreSource, StorageBackend,
};
use shopfront_tui::view::LOAD_ERROR_MESSAGE;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "shopfront")]
#[command(version, about = "Terminal storefront for the Fake Store catalog", long_about = None)]
struct Cli {
    /// Catalog API root (overrides config)
    #[arg(long, global = true, env = "SHOPFRONT_API_URL")]
    api_url: Option<String>,

    /// Favorites backend: sqlite, file or memory
    #[arg(long, global = true)]
    store: Option<StorageBackend>,

    /// Where the favorites store lives
    #[arg(long, global = true)]
    store_path: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(clap::Subcommand)]
enum Commands {
    /// Open the interactive storefront (default)
    Browse,
    /// Print the catalog, optionally filtered
    List {
        /// Only products in this category (exact id, e.g. "electronics")
        #[arg(long, conflicts_with = "search")]
        category: Option<String>,
        /// Only products whose title, description or category contains this
        #[arg(long)]
        search: Option<String>,
    },
    /// Print category ids with their display labels
    Categories,
    /// Toggle a product in the favorites
    Favorite {
        /// Product id
        id: u64,
    },
}

fn init_logging(to_file: bool) -> anyhow::Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "shopfront=info".into());

    if to_file {
        // Anything written to the terminal would tear the TUI apart
        let log_dir = Config::data_dir()?;
        std::fs::create_dir_all(&log_dir)?;
        let file = std::fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open(log_dir.join("shopfront.log"))?;

        tracing_subscriber::registry()
            .with(filter)
            .with(
                tracing_subscriber::fmt::layer()
                    .with_ansi(false)
                    .with_writer(std::sync::Mutex::new(file)),
            )
            .init();
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }

    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let command = cli.command.unwrap_or(Commands::Browse);
    init_logging(matches!(command, Commands::Browse))?;

    let mut config = Config::load()?;
    if let Some(url) = cli.api_url {
        config.api.base_url = url;
    }
    if let Some(backend) = cli.store {
        config.storage.backend = backend;
    }
    if let Some(path) = cli.store_path {
        config.storage.path = Some(path);
    }

    let store = config.storage.open()?;
    let mut ctx = AppContext::new(CatalogStore::new(), store, config.ui.currency_symbol.clone());
    let source = FakeStoreSource::new(FakeStoreClient::with_base_url(config.api.base_url.clone())?);

    match command {
        Commands::Browse => {
            tracing::info!("Starting storefront against {}", config.api.base_url);
            shopfront_tui::run_tui(&mut ctx, &source).await?;
        }
        Commands::List { category, search } => {
            if let Err(e) = ctx.catalog.load(&source).await {
                eprintln!("{}", LOAD_ERROR_MESSAGE);
                return Err(e.into());
            }

            let all = ctx.catalog.all_products();
            let products = match (category, search) {
                (Some(category), _) => by_category(all, &category),
                (None, Some(term)) => by_search_term(all, &term),
                (None, None) => all.to_vec(),
            };

            for product in &products {
                let heart = if ctx.favorites.contains(product.id) { "♥" } else { "♡" };
                println!(
                    "{} [{}] {} | Категория: {} | {}",
                    heart,
                    product.id,
                    product.title,
                    label_for(&product.category).text,
                    ctx.price_label(product.price)
                );
            }
            println!("Товаров: {}", products.len());
        }
        Commands::Categories => {
            if let Err(e) = ctx.catalog.load(&source).await {
                eprintln!("{}", LOAD_ERROR_MESSAGE);
                return Err(e.into());
            }

            for category in ctx.catalog.all_categories() {
                let label = label_for(category);
                println!("{} {} ({})", label.icon.as_emoji(), label.text, category);
            }
        }
        Commands::Favorite { id } => {
            let now_favorite = ctx.favorites.toggle(id)?;
            if now_favorite {
                println!("♥ Товар {} добавлен в избранное", id);
            } else {
                println!("♡ Товар {} удалён из избранного", id);
            }
            tracing::info!("Favorites now: {}", ctx.favorites.set().to_json());
        }
    }

    Ok(())
}
