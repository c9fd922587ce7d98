//! Challenge commands

use anyhow::Result;

use sporta::activity::rewards::Rewards;
use sporta::activity::{self, ChallengeForm};
use sporta::views::challenge_list;
use sporta::{Challenge, SPORTS};

use super::Context;

/// Create a challenge for the signed-in user
pub fn add_command(ctx: &Context, form: ChallengeForm) -> Result<()> {
    let session = ctx.require_session()?;
    let record = activity::add_challenge(&ctx.store, &session, form)?;

    println!(
        "Challenge created! +{} points (total {})",
        Rewards::CHALLENGE_CREATED,
        record.points()
    );
    Ok(())
}

/// List the signed-in user's challenges, newest first
pub fn list_command(ctx: &Context) -> Result<()> {
    let session = ctx.require_session()?;
    let record = activity::current_record(&ctx.store, &session)?;

    let challenges = challenge_list(&record);
    if challenges.is_empty() {
        println!("No challenges yet. Create your first one!");
        return Ok(());
    }

    println!("Challenges ({}):\n", challenges.len());
    for challenge in challenges {
        print_challenge(challenge);
    }
    Ok(())
}

/// Print the selectable sports
pub fn sports_command() {
    for sport in SPORTS {
        println!("  {:<12} {}", sport.as_str(), sport.label());
    }
}

fn print_challenge(challenge: &Challenge) {
    println!("  {} [{}]", challenge.title, challenge.sport);

    if !challenge.description.is_empty() {
        println!("    {}", challenge.description);
    }

    let deadline = if challenge.deadline.is_empty() {
        "none"
    } else {
        challenge.deadline.as_str()
    };
    println!(
        "    Target: {} {}  |  Deadline: {}  |  Created: {}",
        challenge.target, challenge.unit, deadline, challenge.created_date
    );
    println!();
}
