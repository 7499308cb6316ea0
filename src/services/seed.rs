//! Startup dataset for the activity directory.
//!
//! The built-in Mergington roster is used unless `ACTIVITIES_SEED` points at
//! a JSON file shaped like the `GET /activities` payload.

use std::collections::{BTreeMap, HashSet};
use std::path::Path;

use tracing::info;

use super::activity::{Activity, ActivityDirectory};

#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("failed to read seed file {path}: {source}")]
    Read { path: String, source: std::io::Error },
    #[error("invalid seed json: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("duplicate participant {email} in {activity}")]
    DuplicateParticipant { activity: String, email: String },
}

/// Build the directory from `path`, or from the built-in dataset when `None`.
///
/// # Errors
///
/// Returns a `SeedError` if the file cannot be read or parsed, or if any
/// roster lists the same email twice.
pub fn load(path: Option<&Path>) -> Result<ActivityDirectory, SeedError> {
    let Some(path) = path else {
        return Ok(builtin());
    };

    let raw = std::fs::read_to_string(path)
        .map_err(|source| SeedError::Read { path: path.display().to_string(), source })?;
    let directory = parse(&raw)?;
    info!(path = %path.display(), activities = directory.len(), "loaded activity seed file");
    Ok(directory)
}

/// Parse and validate a JSON seed document.
///
/// # Errors
///
/// Returns `Parse` on malformed JSON and `DuplicateParticipant` when a roster
/// repeats an email.
pub fn parse(raw: &str) -> Result<ActivityDirectory, SeedError> {
    let activities: BTreeMap<String, Activity> = serde_json::from_str(raw)?;

    for (name, activity) in &activities {
        let mut seen = HashSet::new();
        for email in &activity.participants {
            if !seen.insert(email.as_str()) {
                return Err(SeedError::DuplicateParticipant { activity: name.clone(), email: email.clone() });
            }
        }
    }

    Ok(ActivityDirectory::new(activities))
}

/// The Mergington High School extracurricular roster.
#[must_use]
pub fn builtin() -> ActivityDirectory {
    let entries = [
        (
            "Chess Club",
            "Learn strategies and compete in chess tournaments",
            "Fridays, 3:30 PM - 5:00 PM",
            12,
            ["michael@mergington.edu", "daniel@mergington.edu"],
        ),
        (
            "Programming Class",
            "Learn programming fundamentals and build software projects",
            "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
            20,
            ["emma@mergington.edu", "sophia@mergington.edu"],
        ),
        (
            "Gym Class",
            "Physical education and sports activities",
            "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
            30,
            ["john@mergington.edu", "olivia@mergington.edu"],
        ),
        (
            "Soccer Team",
            "Join the school soccer team and compete in matches",
            "Tuesdays and Thursdays, 4:00 PM - 5:30 PM",
            22,
            ["liam@mergington.edu", "noah@mergington.edu"],
        ),
        (
            "Basketball Team",
            "Practice and play basketball with the school team",
            "Wednesdays and Fridays, 3:30 PM - 5:00 PM",
            15,
            ["ava@mergington.edu", "mia@mergington.edu"],
        ),
        (
            "Art Club",
            "Explore your creativity through painting and drawing",
            "Thursdays, 3:30 PM - 5:00 PM",
            15,
            ["amelia@mergington.edu", "harper@mergington.edu"],
        ),
        (
            "Drama Society",
            "Act, direct, and produce plays and performances",
            "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
            20,
            ["ella@mergington.edu", "henry@mergington.edu"],
        ),
        (
            "Science Club",
            "Conduct experiments and explore scientific concepts",
            "Tuesdays, 3:30 PM - 5:00 PM",
            18,
            ["lucas@mergington.edu", "grace@mergington.edu"],
        ),
        (
            "Debate Team",
            "Develop public speaking and argumentation skills",
            "Fridays, 4:00 PM - 5:30 PM",
            12,
            ["charlotte@mergington.edu", "james@mergington.edu"],
        ),
    ];

    let activities = entries
        .into_iter()
        .map(|(name, description, schedule, max_participants, participants)| {
            (
                name.to_owned(),
                Activity {
                    description: description.to_owned(),
                    schedule: schedule.to_owned(),
                    max_participants,
                    participants: participants.into_iter().map(str::to_owned).collect(),
                },
            )
        })
        .collect();

    ActivityDirectory::new(activities)
}

#[cfg(test)]
#[path = "seed_test.rs"]
mod tests;
