//! Browse the popular movies listing from a terminal.
#![cfg_attr(not(any(test, doctest)), deny(clippy::unwrap_used))]
#![cfg_attr(not(any(test, doctest)), deny(clippy::expect_used))]

use std::ffi::OsString;
use std::io;

use clap::Parser;
use ortho_config::OrthoConfig;
use popular_movies::config::CatalogueSettings;
use popular_movies::inbound::list::MovieListController;
use popular_movies::inbound::presentation::{DisplayList, ImageUrlBuilder};
use popular_movies::inbound::terminal::{COMMAND_HINT, render_list};
use popular_movies::wiring::{build_image_urls, build_query};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::runtime::Builder;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, fmt};

/// `popular-movies` command arguments.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "popular-movies",
    about = "List popular movies from TMDB or the built-in fixture catalogue",
    version
)]
struct CliArgs {
    /// Number of pages to load before rendering.
    #[arg(long, value_name = "count", default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
    pages: u32,
    /// Read `next`, `refresh` and `quit` commands from stdin.
    #[arg(long)]
    interactive: bool,
    /// Print the list as JSON instead of text.
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Command {
    Next,
    Refresh,
    Quit,
}

impl Command {
    fn parse(line: &str) -> Option<Self> {
        match line.trim().to_ascii_lowercase().as_str() {
            "n" | "next" | "" => Some(Self::Next),
            "r" | "refresh" => Some(Self::Refresh),
            "q" | "quit" | "exit" => Some(Self::Quit),
            _ => None,
        }
    }
}

struct View {
    images: ImageUrlBuilder,
    placeholder: String,
    json: bool,
}

impl View {
    fn print(&self, controller: &MovieListController) -> io::Result<()> {
        let list = DisplayList::project(controller.state(), &self.images, &self.placeholder);
        if self.json {
            let json = serde_json::to_string_pretty(&list).map_err(io::Error::other)?;
            println!("{json}");
        } else {
            print!("{}", render_list(&list));
        }
        Ok(())
    }
}

fn main() -> io::Result<()> {
    if let Err(error) = fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .json()
        .try_init()
    {
        warn!(%error, "tracing init failed");
    }

    let runtime = Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|error| io::Error::other(format!("create Tokio runtime: {error}")))?;
    runtime.block_on(async_main())
}

async fn async_main() -> io::Result<()> {
    let args = match CliArgs::try_parse() {
        Ok(args) => args,
        Err(error) if !error.use_stderr() => error.exit(),
        Err(error) => return Err(io::Error::other(error)),
    };
    let settings = CatalogueSettings::load_from_iter([OsString::from("popular-movies")])
        .map_err(|error| io::Error::other(format!("load configuration: {error}")))?;
    let query = build_query(&settings).map_err(|error| {
        io::Error::new(io::ErrorKind::InvalidInput, format!("configuration: {error}"))
    })?;
    let view = View {
        images: build_image_urls(&settings),
        placeholder: settings.poster_placeholder().to_owned(),
        json: args.json,
    };

    let mut controller = MovieListController::new(query);
    controller.load_initial().await;
    for _ in 1..args.pages {
        if !controller.load_next_page().await {
            break;
        }
    }

    if args.interactive {
        run_interactive(&mut controller, &view).await
    } else {
        if let Some(error) = controller.state().error() {
            warn!(%error, "listing finished with an error");
        }
        view.print(&controller)
    }
}

async fn run_interactive(controller: &mut MovieListController, view: &View) -> io::Result<()> {
    view.print(controller)?;
    println!("{COMMAND_HINT}");

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        match Command::parse(&line) {
            Some(Command::Next) => {
                if !controller.load_next_page().await {
                    println!("Nothing more to load.");
                    continue;
                }
            }
            Some(Command::Refresh) => {
                controller.refresh().await;
            }
            Some(Command::Quit) => break,
            None => {
                println!("Unknown command `{}`. {COMMAND_HINT}", line.trim());
                continue;
            }
        }
        view.print(controller)?;
        println!("{COMMAND_HINT}");
    }
    info!(
        items = controller.state().items().len(),
        "interactive session ended"
    );
    Ok(())
}
