//! Sync command

use anyhow::Result;

use super::Context;

/// Device synchronization is not implemented; report that to the signed-in user
pub fn sync_command(ctx: &Context) -> Result<()> {
    let session = ctx.require_session()?;
    tracing::debug!(user = session.username(), "Sync requested");

    println!("Synchronization with a device is not available in this version.");
    Ok(())
}
