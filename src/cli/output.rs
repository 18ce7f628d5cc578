//! Command output: human readable text or JSON with `--json`.

use at_core::comments::Comment;
use at_core::verification::{VerificationError, VerificationSnapshot};
use at_core::User;
use serde::Serialize;

pub fn emit<T: Serialize>(json: bool, value: &T, human: impl FnOnce(&T)) -> anyhow::Result<()> {
    if json {
        println!("{}", serde_json::to_string_pretty(value)?);
    } else {
        human(value);
    }
    Ok(())
}

pub fn print_user(user: &User) {
    println!("id:        {}", user.id);
    println!("email:     {}", user.email.as_deref().unwrap_or("-"));
    println!("username:  {}", user.username.as_deref().unwrap_or("-"));
    println!("role:      {}", user.primary_role());
    println!("setup:     {}", done(user.profile_setup_complete));
    println!("kyc:       {}", done(user.kyc_completed));
    println!("portfolio: {}", done(user.portfolio_complete));
    println!("verified:  {}", yes_no(user.verified));
}

pub fn print_snapshot(snapshot: &VerificationSnapshot) {
    println!("role:      {}", snapshot.role);
    println!("stage:     {:?}", snapshot.stage);
    println!("kyc:       {}", done(snapshot.kyc_completed));
    if snapshot.portfolio_tile_visible() {
        println!("portfolio: {}", done(snapshot.portfolio_complete));
    }
    match &snapshot.error {
        Some(VerificationError::Incomplete) => {
            println!("error:     finish every verification step first")
        }
        Some(VerificationError::PersistFailed { message }) => println!("error:     {message}"),
        None => {}
    }
    if snapshot.all_done() {
        println!("ready:     run `atmosphere verify complete`");
    }
}

pub fn print_comments(comments: &[Comment]) {
    for comment in comments {
        let indent = if comment.depth == 0 { "" } else { "    " };
        println!("{indent}{}: {}", comment.author, comment.text);
    }
}

fn done(flag: bool) -> &'static str {
    if flag {
        "done"
    } else {
        "pending"
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag {
        "yes"
    } else {
        "no"
    }
}
