use clap::{Args, Subcommand};

use emberfeed::FeedSession;

use feed_data::PostId;

#[derive(Debug, Args)]
pub struct CommentsCLI {
    /// Post the comment belongs to.
    #[arg(short, long)]
    post: PostId,

    #[command(subcommand)]
    cmd: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Add a new comment.
    Add(AddArgs),

    /// Remove every comment with this exact text.
    Remove(RemoveArgs),

    /// Like the comment at this position in the thread.
    Like(LikeArgs),
}

#[derive(Debug, Args)]
struct AddArgs {
    /// The comment text.
    #[arg(short, long)]
    text: String,
}

#[derive(Debug, Args)]
struct RemoveArgs {
    /// The exact text to match.
    #[arg(short, long)]
    text: String,
}

#[derive(Debug, Args)]
struct LikeArgs {
    /// Zero-based position in the thread.
    #[arg(short, long)]
    index: usize,
}

pub fn comments_cli(session: &mut FeedSession, cli: CommentsCLI) {
    let res = match cli.cmd {
        Command::Add(args) => session
            .add_comment(cli.post, &args.text)
            .map(|_| "✅ Added Comment".to_owned()),
        Command::Remove(args) => session
            .delete_comment(cli.post, &args.text)
            .map(|count| format!("✅ Removed {} Comment(s)", count)),
        Command::Like(args) => session
            .like_comment(cli.post, args.index)
            .map(|count| format!("✅ Liked, now at {}", count)),
    };

    match res {
        Ok(message) => println!("{}", message),
        Err(e) => eprintln!("❗ Feed: {:#?}", e),
    }
}
