//! mdlive - Command line entry point
//!
//! Renders Markdown files to markup, searches them and prints document
//! statistics. The render theme defaults to the one saved in the user's
//! configuration.

use clap::{Parser, Subcommand};
use log::{debug, info};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use mdlive::config::{get_config_file_path, load_config};
use mdlive::document::{estimate_reading_time, generate_toc, TextStats, DEFAULT_WORDS_PER_MINUTE};
use mdlive::markup::plain_text;
use mdlive::search::{MarkupHighlighter, NullSurface, SearchIndex};
use mdlive::{Renderer, Theme};

/// Application name constant.
const APP_NAME: &str = "mdlive";

#[derive(Parser, Debug)]
#[command(name = "mdlive")]
#[command(version, about = "Render Markdown to styled markup")]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Render a Markdown file to markup
    Render {
        file: PathBuf,

        /// Theme name; defaults to the configured render style
        #[arg(long, short)]
        theme: Option<String>,

        /// Print the text content without markup tags
        #[arg(long)]
        plain: bool,
    },

    /// List case-insensitive matches of QUERY in a file
    Search {
        file: PathBuf,
        query: String,

        /// Print the document with matches highlighted in the configured colours
        #[arg(long)]
        markup: bool,
    },

    /// Print statistics and a table of contents for a file
    Stats { file: PathBuf },

    /// List the available themes
    Themes,

    /// Print the config file location and the loaded settings
    Config,
}

fn main() -> ExitCode {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let args = Args::parse();
    debug!("Starting {} with {:?}", APP_NAME, args.command);

    match run(args.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("{}: {}", APP_NAME, message);
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<(), String> {
    match command {
        Command::Render { file, theme, plain } => {
            let theme = match theme {
                Some(name) => {
                    Theme::parse(&name).ok_or_else(|| format!("unknown theme '{}'", name))?
                }
                None => load_config().render_style,
            };
            let text = read_document(&file)?;
            let (markup, strategy) = Renderer::new(theme).render_traced(&text);
            info!("Rendered {} with {} ({})", file.display(), strategy, theme);
            if plain {
                println!("{}", plain_text(&markup));
            } else {
                println!("{}", markup);
            }
        }
        Command::Search {
            file,
            query,
            markup: true,
        } => {
            let text = read_document(&file)?;
            let mut surface = MarkupHighlighter::new(&load_config().search);
            SearchIndex::new().set_query(&text, &query, &mut surface);
            println!("{}", surface.render(&text));
            println!("{}", surface.status().label());
        }
        Command::Search { file, query, .. } => {
            let text = read_document(&file)?;
            let mut index = SearchIndex::new();
            let status = index.set_query(&text, &query, &mut NullSurface);
            for span in index.matches() {
                let range = span.char_range(&text);
                println!("{}..{}\t{}", range.start, range.end, &text[span.range()]);
            }
            println!("{}", status.label());
        }
        Command::Stats { file } => {
            let text = read_document(&file)?;
            let stats = TextStats::from_text(&text);
            println!("{}", stats.format_compact());
            println!("{} characters", stats.characters);
            println!(
                "{} min read",
                estimate_reading_time(&text, DEFAULT_WORDS_PER_MINUTE)
            );
            let toc = generate_toc(&text);
            if !toc.is_empty() {
                print!("\n{}", toc);
            }
        }
        Command::Themes => {
            for theme in Theme::all() {
                println!("{:<14}{}", theme.name(), theme.display_name());
            }
        }
        Command::Config => {
            match get_config_file_path() {
                Ok(path) => println!("{}", path.display()),
                Err(e) => println!("({})", e),
            }
            let json = serde_json::to_string_pretty(&load_config())
                .map_err(|e| format!("cannot serialize settings: {}", e))?;
            println!("{}", json);
        }
    }
    Ok(())
}

fn read_document(path: &Path) -> Result<String, String> {
    fs::read_to_string(path).map_err(|e| format!("cannot read {}: {}", path.display(), e))
}
