//! Result commands

use anyhow::Result;

use sporta::activity::rewards::Rewards;
use sporta::activity::{self, ResultForm};
use sporta::views::result_list;

use super::Context;

/// Log a result for the signed-in user
pub fn add_command(ctx: &Context, form: ResultForm) -> Result<()> {
    let session = ctx.require_session()?;
    let record = activity::add_result(&ctx.store, &session, form)?;

    println!(
        "Result saved! +{} points (total {})",
        Rewards::RESULT_RECORDED,
        record.points()
    );
    Ok(())
}

/// List the signed-in user's results, newest first
pub fn list_command(ctx: &Context) -> Result<()> {
    let session = ctx.require_session()?;
    let record = activity::current_record(&ctx.store, &session)?;

    let results = result_list(&record);
    if results.is_empty() {
        println!("No results yet. Add your first one!");
        return Ok(());
    }

    println!("Results ({}):\n", results.len());
    for result in results {
        let detail = if result.note.is_empty() {
            result.timestamp.as_str()
        } else {
            result.note.as_str()
        };
        println!(
            "  {:<12} {:>10} {:<6} {}",
            result.sport.label(),
            result.value,
            result.unit,
            detail
        );
    }
    Ok(())
}
