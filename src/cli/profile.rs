//! Profile command

use anyhow::Result;

use sporta::activity;
use sporta::views::ProfileSummary;

use super::Context;

/// Show profile, counters and latest results
pub fn profile_command(ctx: &Context) -> Result<()> {
    let session = ctx.require_session()?;
    let record = activity::current_record(&ctx.store, &session)?;
    let profile = ProfileSummary::from_record(&record, ctx.config.display.recent_results);

    println!("{} <{}>", profile.username, profile.email);
    println!("Logged in since {}\n", session.started_at());

    println!("Statistics:");
    println!("  Challenges:   {}", profile.challenge_count);
    println!("  Results:      {}", profile.result_count);
    println!("  Points:       {} ({})", profile.points, profile.level);
    println!("  Achievements: {}", profile.achievement_count);

    println!("\nLatest results:");
    if profile.recent_results.is_empty() {
        println!("  No results.");
        return Ok(());
    }
    for result in &profile.recent_results {
        println!(
            "  {:<12} {:>10} {:<6} {}",
            result.sport.label(),
            result.value,
            result.unit,
            result.date()
        );
    }
    Ok(())
}
