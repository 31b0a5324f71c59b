use crate::config::Config;
use crate::events::{
    EXPORT_CSV, FILTER_CATEGORY, FILTER_YEAR, SEARCH_INPUT, SHOW_ALUMNI, SHOW_CURRENT,
    SYSTEM_SEARCH_INPUT, UiEvent,
};
use crate::export::Download;
use crate::loaders::Loader;
use crate::pages::{
    ACTIVITIES, ListingPage, NEWS, PROJECTS, PageController, PublicationsPage, SystemsPage,
    TeamPage,
};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use eyre::{Error, WrapErr, bail};
use std::path::{Path, PathBuf};
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

mod config;
mod events;
mod export;
mod filter;
mod loaders;
mod model;
mod page;
mod pages;
mod render;

#[derive(Parser)]
#[command(version, author, about)]
struct Args {
    /// Use FILE instead of labsite.toml
    #[arg(short, long, value_name = "FILE", default_value = config::DEFAULT_CONFIG_FILE)]
    config: PathBuf,
    /// Set verbosity level (repeat for more)
    #[arg(short, action = ArgAction::Count)]
    verbose: u8,
    #[command(subcommand)]
    command: Cmd,
}

#[derive(Subcommand)]
enum Cmd {
    /// Render every page and the publications export into the output directory
    Build,
    /// Render one page to standard output
    Render {
        page: PageName,
        #[command(flatten)]
        filters: FilterArgs,
        /// Team members to show
        #[arg(long)]
        view: Option<View>,
    },
    /// Write the publications CSV export into the output directory
    Export {
        #[command(flatten)]
        filters: FilterArgs,
    },
}

#[derive(clap::Args)]
struct FilterArgs {
    #[arg(long)]
    year: Option<String>,
    #[arg(long)]
    category: Option<String>,
    /// Free-text search term
    #[arg(long)]
    search: Option<String>,
}

#[derive(Clone, Copy, ValueEnum)]
enum PageName {
    Team,
    Publications,
    Projects,
    News,
    Activities,
    Systems,
}

#[derive(Clone, Copy, ValueEnum)]
enum View {
    Current,
    Alumni,
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "error",
        1 => "warn",
        2 => "info",
        3 => "debug",
        _ => "trace",
    };
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("labsite={level}")));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

/// Replay command-line filter values as user interface events.
fn apply(
    page: &mut dyn PageController,
    filters: &FilterArgs,
    view: Option<View>,
) -> Result<(), Error> {
    let mut events = Vec::new();
    if let Some(year) = &filters.year {
        events.push(UiEvent::change(FILTER_YEAR, year));
    }
    if let Some(category) = &filters.category {
        events.push(UiEvent::change(FILTER_CATEGORY, category));
    }
    if let Some(search) = &filters.search {
        events.push(UiEvent::input(SEARCH_INPUT, search));
        events.push(UiEvent::input(SYSTEM_SEARCH_INPUT, search));
    }
    match view {
        Some(View::Current) => events.push(UiEvent::click(SHOW_CURRENT)),
        Some(View::Alumni) => events.push(UiEvent::click(SHOW_ALUMNI)),
        None => (),
    }
    for event in &events {
        page.handle(event)?;
    }
    Ok(())
}

async fn load_page(name: PageName, config: &Config, loader: &Loader) -> Box<dyn PageController> {
    match name {
        PageName::Team => Box::new(TeamPage::new(
            loader.load_team(config.team.alumni_layout).await,
        )),
        PageName::Publications => Box::new(PublicationsPage::new(
            loader.load_publications().await,
            export::filename(config.export.legacy_filename),
        )),
        PageName::Projects => Box::new(ListingPage::new(PROJECTS, loader.load_projects().await)),
        PageName::News => Box::new(ListingPage::new(NEWS, loader.load_news().await)),
        PageName::Activities => Box::new(ListingPage::new(
            ACTIVITIES,
            loader.load_activities().await,
        )),
        PageName::Systems => Box::new(SystemsPage::new(loader.load_systems().await)),
    }
}

fn write_download(output: &Path, download: &Download) -> Result<(), Error> {
    std::fs::create_dir_all(output)
        .wrap_err_with(|| format!("cannot create {}", output.display()))?;
    let path = output.join(download.filename);
    std::fs::write(&path, &download.contents)
        .wrap_err_with(|| format!("cannot write {}", path.display()))?;
    info!(path = %path.display(), mime_type = download.mime_type, "download written");
    Ok(())
}

async fn build(config: &Config, loader: &Loader) -> Result<(), Error> {
    let (team, publications, projects, news, activities, systems) = tokio::join!(
        loader.load_team(config.team.alumni_layout),
        loader.load_publications(),
        loader.load_projects(),
        loader.load_news(),
        loader.load_activities(),
        loader.load_systems(),
    );
    let mut publications = PublicationsPage::new(
        publications,
        export::filename(config.export.legacy_filename),
    );
    if let Some(download) = publications.handle(&UiEvent::click(EXPORT_CSV))? {
        write_download(&config.site.output, &download)?;
    }
    let pages: Vec<Box<dyn PageController>> = vec![
        Box::new(TeamPage::new(team)),
        Box::new(publications),
        Box::new(ListingPage::new(PROJECTS, projects)),
        Box::new(ListingPage::new(NEWS, news)),
        Box::new(ListingPage::new(ACTIVITIES, activities)),
        Box::new(SystemsPage::new(systems)),
    ];
    std::fs::create_dir_all(&config.site.output)
        .wrap_err_with(|| format!("cannot create {}", config.site.output.display()))?;
    let mut failed = 0;
    for controller in &pages {
        let page = controller.page();
        if page.has_failed() {
            failed += 1;
        }
        let path = config.site.output.join(format!("{}.html", page.name()));
        std::fs::write(&path, page.to_html())
            .wrap_err_with(|| format!("cannot write {}", path.display()))?;
        info!(path = %path.display(), "page written");
    }
    if failed > 0 {
        warn!(failed, total = pages.len(), "some pages could not load their data");
    }
    Ok(())
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    color_eyre::install()?;
    let args = Args::parse();
    init_tracing(args.verbose);
    let config = Config::load(&args.config)?;
    let loader = Loader::new(&config.site.data);
    match args.command {
        Cmd::Build => build(&config, &loader).await?,
        Cmd::Render {
            page,
            filters,
            view,
        } => {
            let mut controller = load_page(page, &config, &loader).await;
            apply(controller.as_mut(), &filters, view)?;
            print!("{}", controller.page().to_html());
        }
        Cmd::Export { filters } => {
            let mut page = PublicationsPage::new(
                loader.load_publications().await,
                export::filename(config.export.legacy_filename),
            );
            apply(&mut page, &filters, None)?;
            match page.handle(&UiEvent::click(EXPORT_CSV))? {
                Some(download) => write_download(&config.site.output, &download)?,
                None => bail!("publications could not be loaded"),
            }
        }
    }
    Ok(())
}
