use anyhow::Context;
use at_app::session::SessionGate;
use at_app::usecases::{ForgotPassword, SignIn, SignOut, SignUp};
use at_core::security::SecretString;
use at_core::{Role, Screen};
use clap::Args;
use serde_json::json;

use super::CommandContext;
use crate::cli::output::{emit, print_user};

#[derive(Args, Debug)]
pub struct LoginArgs {
    pub email: String,

    #[arg(long, env = "ATMOSPHERE_PASSWORD", hide_env_values = true)]
    pub password: String,
}

#[derive(Args, Debug)]
pub struct RegisterArgs {
    pub email: String,

    pub username: String,

    /// personal, startup or investor
    #[arg(long, default_value = "personal")]
    pub role: Role,

    #[arg(long, env = "ATMOSPHERE_PASSWORD", hide_env_values = true)]
    pub password: String,
}

pub async fn login(ctx: &CommandContext<'_>, args: LoginArgs) -> anyhow::Result<()> {
    let deps = ctx.deps();
    let user = SignIn::new(deps.auth.clone(), ctx.runtime.session.clone())
        .execute(&args.email, SecretString::new(args.password))
        .await?;
    let next = SessionGate::route(Screen::SignIn, &ctx.runtime.session.current());
    emit(ctx.json, &user, |user| {
        println!("Signed in as {}", user.email.as_deref().unwrap_or(user.id.as_str()));
        if next == Screen::ProfileSetup {
            println!("Profile setup is not finished; continue with `atmosphere setup basic`.");
        }
    })
}

pub async fn register(ctx: &CommandContext<'_>, args: RegisterArgs) -> anyhow::Result<()> {
    let deps = ctx.deps();
    let user = SignUp::new(deps.auth.clone(), ctx.runtime.session.clone())
        .execute(
            &args.email,
            SecretString::new(args.password),
            &args.username,
            args.role,
        )
        .await?;
    emit(ctx.json, &user, |user| {
        println!("Account created for {} ({}).", user.id, user.primary_role());
        println!("Continue with `atmosphere setup basic`.");
    })
}

pub async fn forgot_password(ctx: &CommandContext<'_>, email: &str) -> anyhow::Result<()> {
    ForgotPassword::new(ctx.deps().auth.clone())
        .execute(email)
        .await?;
    emit(ctx.json, &json!({ "sent": true }), |_| {
        println!("If an account exists for {email}, a reset link is on its way.");
    })
}

pub async fn logout(ctx: &CommandContext<'_>) -> anyhow::Result<()> {
    SignOut::new(ctx.runtime.session.clone()).execute().await;
    emit(ctx.json, &json!({ "signedOut": true }), |_| {
        println!("Signed out.");
    })
}

/// Fetch the profile, refresh the cached user and show where the app would land.
pub async fn whoami(ctx: &CommandContext<'_>) -> anyhow::Result<()> {
    ctx.require_session()?;
    let user = ctx
        .deps()
        .profile
        .get_profile()
        .await
        .context("failed to fetch profile")?;
    ctx.runtime.session.update_user(user.clone()).await?;
    let screen = SessionGate::route(Screen::SignIn, &ctx.runtime.session.current());
    emit(
        ctx.json,
        &json!({ "user": user, "screen": screen }),
        |_| {
            print_user(&user);
            println!("screen:    {screen:?}");
        },
    )
}
