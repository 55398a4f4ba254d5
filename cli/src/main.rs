mod comments;
mod feed;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use emberfeed::{
    storage::{file::FileStorage, StorageBridge},
    FeedSession,
};

use crate::{
    comments::{comments_cli, CommentsCLI},
    feed::{post_cli, show_cli, PostCLI},
};

#[derive(Parser)]
#[command(name = "emberfeed", bin_name = "emberfeed", version, about, long_about = None, rename_all = "kebab-case")]
struct Emberfeed {
    /// Storage directory.
    #[arg(short, long, default_value = ".emberfeed")]
    path: PathBuf,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Show the feed and every comment thread.
    Show,

    /// Publish a new post.
    Post(PostCLI),

    /// Comment related commands.
    Comments(CommentsCLI),
}

fn main() {
    tracing_subscriber::fmt::init();

    let cli = Emberfeed::parse();

    let storage = match FileStorage::open(&cli.path) {
        Ok(storage) => storage,
        Err(e) => {
            eprintln!("❗ Storage: {:#?}", e);

            return;
        }
    };

    let mut session = FeedSession::new(StorageBridge::new(storage));

    match cli.command {
        Commands::Show => show_cli(&session),
        Commands::Post(args) => post_cli(&mut session, args),
        Commands::Comments(args) => comments_cli(&mut session, args),
    }
}
