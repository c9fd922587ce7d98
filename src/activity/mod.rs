//! Challenge and result entry
//!
//! Both follow the same steps: validate the form, build the entry with a
//! generated timestamp, append it to the signed-in user's record, award the
//! fixed points and persist, all under the record's write lock.

pub mod rewards;

use tracing::info;

use crate::domain::{timestamp, Challenge, ResultEntry, Sport, UserRecord};
use crate::error::{AppError, Result, ValidationError};
use crate::session::Session;
use crate::store::UserStore;
use rewards::{titles, Rewards};

/// New-challenge form as entered
#[derive(Debug, Clone, Default)]
pub struct ChallengeForm {
    pub title: String,
    pub sport: String,
    pub description: String,
    pub target: String,
    pub unit: String,
    pub deadline: String,
}

impl ChallengeForm {
    /// Validate and build the entry, stamped with `created_date`
    pub fn into_challenge(
        self,
        created_date: String,
    ) -> std::result::Result<Challenge, ValidationError> {
        let title = self.title.trim();
        if title.is_empty() {
            return Err(ValidationError::BlankField("title"));
        }
        let sport: Sport = self.sport.parse()?;

        Ok(Challenge {
            title: title.to_string(),
            sport,
            description: self.description.trim().to_string(),
            target: self.target.trim().to_string(),
            unit: self.unit.trim().to_string(),
            deadline: self.deadline.trim().to_string(),
            created_date,
        })
    }
}

/// New-result form as entered
#[derive(Debug, Clone, Default)]
pub struct ResultForm {
    pub sport: String,
    pub value: String,
    pub unit: String,
    pub note: String,
}

impl ResultForm {
    /// Validate and build the entry, stamped with `timestamp`.
    ///
    /// The value must be a finite number; the trimmed text is what gets stored.
    pub fn into_result(
        self,
        timestamp: String,
    ) -> std::result::Result<ResultEntry, ValidationError> {
        let sport: Sport = self.sport.parse()?;
        let value = self.value.trim();
        if value.is_empty() {
            return Err(ValidationError::BlankField("value"));
        }
        match value.parse::<f64>() {
            Ok(number) if number.is_finite() => {}
            _ => return Err(ValidationError::NotANumber(value.to_string())),
        }

        Ok(ResultEntry {
            sport,
            value: value.to_string(),
            unit: self.unit.trim().to_string(),
            note: self.note.trim().to_string(),
            timestamp,
        })
    }
}

/// Add a challenge to the signed-in user's record (+20 points)
pub fn add_challenge(
    store: &UserStore,
    session: &Session,
    form: ChallengeForm,
) -> Result<UserRecord> {
    let challenge = form.into_challenge(timestamp::today_stamp())?;
    let description = format!("Created: {}", challenge.title);

    let record = mutate(store, session, |record| {
        record.challenges.push(challenge);
        record.award_achievement(
            titles::CHALLENGE_CREATED,
            description,
            Rewards::CHALLENGE_CREATED,
        );
    })?;

    info!(
        user = session.username(),
        challenges = record.challenges.len(),
        points = record.points(),
        "Challenge created"
    );
    Ok(record)
}

/// Log a result on the signed-in user's record (+10 points)
pub fn add_result(store: &UserStore, session: &Session, form: ResultForm) -> Result<UserRecord> {
    let entry = form.into_result(timestamp::now_minute_stamp())?;
    let description = format!("{}: {} {}", entry.sport, entry.value, entry.unit)
        .trim_end()
        .to_string();

    let record = mutate(store, session, |record| {
        record.results.push(entry);
        record.award_achievement(titles::RESULT_RECORDED, description, Rewards::RESULT_RECORDED);
    })?;

    info!(
        user = session.username(),
        results = record.results.len(),
        points = record.points(),
        "Result recorded"
    );
    Ok(record)
}

/// Load the signed-in user's record for display
pub fn current_record(store: &UserStore, session: &Session) -> Result<UserRecord> {
    store
        .load(session.username())?
        .ok_or_else(|| AppError::RecordMissing(session.username().to_string()))
}

fn mutate<F>(store: &UserStore, session: &Session, apply: F) -> Result<UserRecord>
where
    F: FnOnce(&mut UserRecord),
{
    let username = session.username();
    store
        .update(username, |record| -> Result<()> {
            apply(record);
            Ok(())
        })?
        .map(|(record, ())| record)
        .ok_or_else(|| AppError::RecordMissing(username.to_string()))
}
