//! Own posts and reel comment threads.

mod my_posts;
mod reel_comments;

pub use my_posts::ListMyPosts;
pub use reel_comments::LoadReelComments;
