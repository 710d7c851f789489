use std::path::PathBuf;

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use booktrack::{cli, config, error};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  author=env!("CARGO_PKG_AUTHORS"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Add a new book
    Add(AddOptions),

    /// Delete a book by id
    Delete(IdOption),

    /// List all books
    List(ListOptions),

    /// Show a book with its reviews
    Show(IdOption),

    /// Update reading progress of a book
    Progress(ProgressOptions),

    /// Add a star review to a book
    Review(ReviewOptions),

    #[clap(about = "Export all books to a JSON file")]
    Export(ExportOptions),

    /// Replace all books with the contents of a JSON file
    Import(ImportOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct AddOptions {
    #[clap(long)]
    pub title: String,
    #[clap(long)]
    pub author: String,
    #[clap(long)]
    pub genre: String,
}

#[derive(Parser, Debug, Clone)]
pub struct IdOption {
    /// Id of the book
    pub id: String,
}

#[derive(Parser, Debug, Clone)]
pub struct ListOptions {
    /// Filter by title, author or genre
    #[clap(long)]
    pub search: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct ProgressOptions {
    /// Id of the book
    pub id: String,

    /// Total number of pages (greater than 0)
    #[clap(long, allow_negative_numbers = true)]
    pub total_pages: i64,

    /// Pages read so far (0 up to the total)
    #[clap(long, allow_negative_numbers = true)]
    pub pages_read: i64,
}

#[derive(Parser, Debug, Clone)]
pub struct ReviewOptions {
    /// Id of the book
    pub id: String,

    /// Star rating from 1 to 5
    #[clap(long, allow_negative_numbers = true)]
    pub rating: i64,

    /// Review text
    #[clap(long)]
    pub text: String,
}

#[derive(Parser, Debug, Clone)]
pub struct ExportOptions {
    /// Output file, defaults to books.json in the current directory
    #[clap(long)]
    pub output: Option<PathBuf>,
}

#[derive(Parser, Debug, Clone)]
pub struct ImportOptions {
    /// JSON file holding an array of books
    pub file: PathBuf,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Add(opt) => cli::add_book(&opt.title, &opt.author, &opt.genre).await,
        Command::Delete(opt) => cli::delete_book(&opt.id).await,
        Command::List(opt) => cli::list_books(opt.search).await,
        Command::Show(opt) => cli::show_book(&opt.id).await,
        Command::Progress(opt) => {
            cli::update_progress(&opt.id, opt.total_pages, opt.pages_read).await
        }
        Command::Review(opt) => cli::add_review(&opt.id, opt.rating, &opt.text).await,
        Command::Export(opt) => cli::export_books(opt.output).await,
        Command::Import(opt) => cli::import_books(opt.file).await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
