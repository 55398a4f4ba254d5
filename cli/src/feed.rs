use chrono::Utc;

use clap::Args;

use emberfeed::{datetime, FeedSession};

use feed_data::{identity::Author, post::LineKind};

#[derive(Debug, Args)]
pub struct PostCLI {
    /// Post text, one content line per input line.
    #[arg(short, long)]
    text: String,

    /// Author display name.
    #[arg(short, long)]
    name: String,

    /// Author role line.
    #[arg(short, long, default_value = "Dev")]
    role: String,

    /// Author avatar URL.
    #[arg(short, long, default_value = "")]
    avatar_url: String,
}

pub fn post_cli(session: &mut FeedSession, args: PostCLI) {
    let author = Author {
        avatar_url: args.avatar_url,
        name: args.name,
        role: args.role,
    };

    match session.create_post(&args.text, author) {
        Ok(id) => println!("✅ Published Post {}", id),
        Err(e) => eprintln!("❗ Feed: {:#?}", e),
    }
}

pub fn show_cli(session: &FeedSession) {
    let now = Utc::now();

    for post in session.posts() {
        let time = datetime::format(post.published_at, now);

        println!("#{} {} · {}", post.id, post.author.name, post.author.role);
        println!("   {} ({})", time.relative, time.absolute);

        for line in &post.content {
            match line.kind {
                LineKind::Paragraph => println!("   {}", line.text),
                LineKind::Link => println!("   🔗 {}", line.text),
            }
        }

        if let Ok(comments) = session.comments(post.id) {
            for (index, comment) in comments.iter().enumerate() {
                println!(
                    "   [{}] {} · {} 👏 {}",
                    index,
                    comment.content,
                    datetime::relative(comment.created_at, now),
                    comment.like_count,
                );
            }
        }

        println!();
    }
}
