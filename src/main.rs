use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use featlist::{cli, config, error};

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
    /// Print the tracks selected for a feature
    Select(SelectOptions),

    /// Create a playlist from the tracks selected for a feature
    Playlist(PlaylistOptions),

    /// Copy an existing playlist into a new private playlist
    Copy(CopyOptions),

    /// Show your top tracks
    Top(TopOptions),

    /// Manage stored feature extremes
    Extremes(ExtremesOptions),

    /// Run the local extremes service
    Serve,

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct SelectOptions {
    /// Audio feature, e.g. energy or tempo
    #[clap(long)]
    pub feature: String,

    /// Maximum number of tracks
    #[clap(long, default_value_t = 20)]
    pub limit: usize,

    /// Track id that must come first
    #[clap(long)]
    pub track: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct PlaylistOptions {
    #[clap(flatten)]
    pub selection: SelectOptions,

    /// Playlist name
    #[clap(long)]
    pub name: Option<String>,

    /// Mark the playlist as temporary (generated name if none given)
    #[clap(long)]
    pub temporary: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct CopyOptions {
    /// Id of the playlist to copy
    #[clap(long)]
    pub playlist: String,

    /// Name of the new playlist (defaults to the source playlist's name)
    #[clap(long)]
    pub name: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct TopOptions {
    #[clap(long, default_value_t = 5)]
    pub limit: u32,
}

#[derive(Parser, Debug, Clone)]
pub struct ExtremesOptions {
    #[command(subcommand)]
    pub command: ExtremesSubcommand,
}

#[derive(Subcommand, Debug, Clone)]
pub enum ExtremesSubcommand {
    /// List the stored features with their tracks
    List,
    /// Store the highest and lowest track of a feature
    Set(ExtremesSetOpts),
    /// Remove a feature from the store
    Remove(ExtremesRemoveOpts),
}

#[derive(Parser, Debug, Clone)]
pub struct ExtremesSetOpts {
    #[clap(long)]
    pub feature: String,
    /// Track id with the highest value
    #[clap(long)]
    pub highest: String,
    /// Track id with the lowest value
    #[clap(long)]
    pub lowest: String,
}

#[derive(Parser, Debug, Clone)]
pub struct ExtremesRemoveOpts {
    #[clap(long)]
    pub feature: String,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    env_logger::init();

    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Select(opt) => cli::select(opt.feature, opt.limit, opt.track).await,
        Command::Playlist(opt) => {
            cli::playlist(
                opt.selection.feature,
                opt.name,
                opt.selection.limit,
                opt.selection.track,
                opt.temporary,
            )
            .await
        }
        Command::Copy(opt) => cli::copy(opt.playlist, opt.name).await,
        Command::Top(opt) => cli::top(opt.limit).await,
        Command::Extremes(opt) => match opt.command {
            ExtremesSubcommand::List => cli::list_extremes().await,
            ExtremesSubcommand::Set(s) => cli::set_extremes(s.feature, s.highest, s.lowest).await,
            ExtremesSubcommand::Remove(r) => cli::remove_extremes(r.feature).await,
        },
        Command::Serve => cli::serve().await,
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copy_name_is_optional() {
        let cli = Cli::try_parse_from(["featlist", "copy", "--playlist", "src"]).unwrap();
        match cli.command {
            Command::Copy(opt) => {
                assert_eq!(opt.playlist, "src");
                assert!(opt.name.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn extremes_needs_an_explicit_subcommand() {
        let list = Cli::try_parse_from(["featlist", "extremes", "list"]).unwrap();
        assert!(matches!(
            list.command,
            Command::Extremes(ExtremesOptions {
                command: ExtremesSubcommand::List
            })
        ));

        let remove =
            Cli::try_parse_from(["featlist", "extremes", "remove", "--feature", "energy"]).unwrap();
        assert!(matches!(
            remove.command,
            Command::Extremes(ExtremesOptions {
                command: ExtremesSubcommand::Remove(_)
            })
        ));

        assert!(Cli::try_parse_from(["featlist", "extremes"]).is_err());
    }

    #[test]
    fn command_definition_is_consistent() {
        Cli::command().debug_assert();
    }
}
