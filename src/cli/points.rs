//! Points command

use anyhow::Result;

use sporta::activity;
use sporta::points::PointsSummary;

use super::Context;

/// Show total points, level and the award history
pub fn points_command(ctx: &Context) -> Result<()> {
    let session = ctx.require_session()?;
    let record = activity::current_record(&ctx.store, &session)?;
    let summary = PointsSummary::from_record(&record);

    println!("Total points: {}", summary.total);
    if summary.is_max_level() {
        println!("Level: {} (max)", summary.level);
    } else {
        println!(
            "Level: {} ({:.0}% of the way to the next level)",
            summary.level,
            summary.progress_to_next() * 100.0
        );
    }

    println!("\nAchievement history:");
    if summary.history.is_empty() {
        println!("  No achievements yet.");
        return Ok(());
    }
    for achievement in &summary.history {
        println!(
            "  +{:<4} {}  {}  ({})",
            achievement.points, achievement.title, achievement.description, achievement.timestamp
        );
    }
    Ok(())
}
