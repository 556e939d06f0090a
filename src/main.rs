use std::sync::Arc;

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use tokio::sync::Mutex;
use tunedrop::{cli, config, error, types::AuthAttempt};

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
    /// Create the profile and store the recognition API key
    Setup(SetupOptions),

    /// Authorize with the Spotify API
    Auth,

    /// Show setup progress and stored configuration
    Status,

    /// List playlists or select the target playlist
    Playlists(PlaylistsOptions),

    /// Recognize a recorded sample and add it to the playlist
    Listen(ListenOptions),

    /// Add a track from a known artist and title
    Add(AddOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct SetupOptions {
    /// Recognition API key to store in the profile
    #[clap(long = "audd-key")]
    pub audd_key: Option<String>,
}

#[derive(Parser, Debug, Clone)]
#[command(
    about = "List playlists or select the target playlist",
    args_conflicts_with_subcommands = true
)]
pub struct PlaylistsOptions {
    /// Subcommands under `playlists` (e.g., `select`)
    #[command(subcommand)]
    pub command: Option<PlaylistsSubcommand>,
}

#[derive(Subcommand, Debug, Clone)]
pub enum PlaylistsSubcommand {
    /// Select the playlist recognized songs get added to
    Select(PlaylistsSelectOpts),
}

#[derive(Parser, Debug, Clone)]
pub struct PlaylistsSelectOpts {
    /// Playlist id as shown by `tunedrop playlists`
    pub id: String,
}

#[derive(Parser, Debug, Clone)]
pub struct ListenOptions {
    /// Path to the recorded audio sample (WAV, around five seconds)
    pub file: String,
}

#[derive(Parser, Debug, Clone)]
pub struct AddOptions {
    /// Artist name
    #[clap(long)]
    pub artist: String,

    /// Track title
    #[clap(long)]
    pub title: String,
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
        Command::Setup(opt) => cli::setup(opt.audd_key).await,
        Command::Auth => {
            let oauth_result: Arc<Mutex<Option<AuthAttempt>>> = Arc::new(Mutex::new(None));
            cli::auth(Arc::clone(&oauth_result)).await;
        }
        Command::Status => cli::status().await,
        Command::Playlists(opt) => match opt.command {
            Some(PlaylistsSubcommand::Select(s)) => cli::select_playlist(s.id).await,
            None => cli::list_playlists().await,
        },
        Command::Listen(opt) => cli::listen(opt.file).await,
        Command::Add(opt) => cli::add(opt.artist, opt.title).await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
