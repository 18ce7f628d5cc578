use at_app::usecases::{ListMyPosts, LoadReelComments};
use at_core::ReelId;

use super::CommandContext;
use crate::cli::output::{emit, print_comments};

pub async fn posts(ctx: &CommandContext<'_>) -> anyhow::Result<()> {
    ctx.require_session()?;
    let posts = ListMyPosts::new(ctx.deps().posts.clone()).execute().await?;
    emit(ctx.json, &posts, |posts| {
        if posts.is_empty() {
            println!("No posts yet.");
        }
        for post in posts {
            let when = post
                .created_at
                .map_or_else(|| "-".to_string(), |at| at.format("%Y-%m-%d").to_string());
            println!("{when}  {}  ({} likes)", post.caption, post.likes);
        }
    })
}

pub async fn comments(ctx: &CommandContext<'_>, reel: &str) -> anyhow::Result<()> {
    ctx.require_session()?;
    let comments = LoadReelComments::new(ctx.deps().reels.clone())
        .execute(&ReelId::new(reel))
        .await?;
    emit(ctx.json, &comments, |comments| print_comments(comments))
}
