//! Register, login and logout commands

use anyhow::Result;

use sporta::activity::rewards::Rewards;
use sporta::auth::{Credentials, Registration};

use super::Context;

/// Create an account, sign it in and report the welcome award
pub fn register_command(
    ctx: &Context,
    username: String,
    email: String,
    password: String,
    confirm: String,
) -> Result<()> {
    let form = Registration {
        username,
        email,
        password,
        confirm,
    };
    let (session, _record) = ctx.gate().register(&form)?;
    ctx.sessions.begin(&session)?;

    println!(
        "Welcome, {}! You received {} points for registering.",
        session.username(),
        Rewards::REGISTRATION
    );
    Ok(())
}

/// Sign in and remember the session
pub fn login_command(ctx: &Context, username: String, password: String) -> Result<()> {
    let session = ctx.gate().login(&Credentials { username, password })?;
    ctx.sessions.begin(&session)?;

    println!("Logged in as {}.", session.username());
    Ok(())
}

/// Forget the active session
pub fn logout_command(ctx: &Context) -> Result<()> {
    match ctx.sessions.end()? {
        Some(session) => {
            tracing::info!(user = session.username(), "User logged out");
            println!("Logged out {}.", session.username());
        }
        None => println!("Not logged in."),
    }
    Ok(())
}
