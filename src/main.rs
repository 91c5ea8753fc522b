use blog_grid::config::{self, WidgetConfig};
use blog_grid::load::{self, FileSource};
use blog_grid::widget::{Action, BlogManager, BlogWidget, MemoryHost};
use blog_grid::{categories, output};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "blog-grid")]
#[command(about = "Render a paginated, filterable blog post grid from a JSON feed")]
#[command(long_about = "\
Render a paginated, filterable blog post grid from a JSON feed

The feed is a JSON document of the form:

  { \"posts\": [ { \"title\": ..., \"description\": ..., \"category\": ...,
                 \"date\": \"2024-01-05\", \"author\": ..., \"url\": ..., \"cover\": ... } ] }

Posts are shown nine per page, filtered by category and an optional
case-insensitive search on title and description.

Set RUST_LOG=debug for diagnostics. Run 'blog-grid gen-config' to generate
a documented config.toml.")]
#[command(version)]
struct Cli {
    /// Config file
    #[arg(long, default_value = "config.toml", global = true)]
    config: PathBuf,

    /// Feed location (overrides `data` from the config file)
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Render the widget as a standalone HTML page
    Render {
        /// Category to select ("all" for no filter)
        #[arg(long)]
        category: Option<String>,
        /// Search query applied on top of the category
        #[arg(long)]
        search: Option<String>,
        /// Page to show
        #[arg(long, default_value_t = 1)]
        page: usize,
        /// Write the page here instead of stdout
        #[arg(long, short)]
        output: Option<PathBuf>,
    },
    /// List categories with post counts
    Categories,
    /// List the first posts of the feed
    Latest {
        /// Number of posts (defaults to `latest.count` from the config)
        #[arg(long, short)]
        count: Option<usize>,
    },
    /// Validate the feed without rendering
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(std::io::stderr),
        )
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    run(Cli::parse())
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let Cli {
        config: config_path,
        data,
        command,
    } = cli;

    // Config and feed are resolved only by the commands that read them.
    let setup = || -> Result<(WidgetConfig, FileSource), config::ConfigError> {
        let config = config::load_config(&config_path)?;
        let source = feed_source(data.clone(), &config);
        Ok((config, source))
    };

    match command {
        Command::Render {
            category,
            search,
            page,
            output: out_path,
        } => {
            let (config, source) = setup()?;
            let mut widget = BlogWidget::new(MemoryHost::new(), config);
            widget.init(&source);
            if let Some(category) = category {
                widget.dispatch(Action::SelectCategory(category.as_str().into()));
            }
            if let Some(query) = search {
                widget.dispatch(Action::Search(query));
            }
            if page != 1 {
                widget.dispatch(Action::GoToPage(page));
            }

            let html = widget.render_document().into_string();
            match &out_path {
                Some(path) => {
                    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                        std::fs::create_dir_all(parent)?;
                    }
                    std::fs::write(path, html)?;
                }
                None => println!("{}", html),
            }
            output::print_render_summary(widget.state(), out_path.as_deref());
        }
        Command::Categories => {
            let (config, source) = setup()?;
            let posts = load::load_posts(&source);
            output::print_categories(&categories::summarize(&posts), &config.labels);
        }
        Command::Latest { count } => {
            let (config, source) = setup()?;
            let count = count.unwrap_or(config.latest.count);
            let mut widget = BlogWidget::new(MemoryHost::new(), config);
            widget.load_posts(&source);
            output::print_posts("Latest", widget.latest_posts(count));
        }
        Command::Check => {
            let (config, source) = setup()?;
            println!("==> Checking {}", source.path().display());
            let posts = load::try_load_posts(&source)?;
            output::print_categories(&categories::summarize(&posts), &config.labels);
            println!("==> Feed is valid ({} posts)", posts.len());
        }
        Command::GenConfig => print!("{}", config::stock_config_toml()),
    }
    Ok(())
}

/// Resolve the feed: `--data` wins over the config file's `data`.
fn feed_source(data: Option<PathBuf>, config: &WidgetConfig) -> FileSource {
    match data {
        Some(path) => FileSource::new(path),
        None => FileSource::new(&config.data),
    }
}
