use serde::{Deserialize, Serialize};
use std::collections::{HashMap, HashSet};

/// Mapping of activity name to its record
pub type Roster = HashMap<String, Activity>;

/// An extracurricular activity and the students signed up for it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Activity {
    /// Human readable description
    pub description: String,
    /// When the activity meets
    pub schedule: String,
    /// Capacity of the activity (informational, not enforced on signup)
    pub max_participants: u32,
    /// Participant identifiers in signup order
    #[serde(default)]
    pub participants: Vec<String>,
}

impl Activity {
    /// Create a new activity with no participants
    pub fn new(description: &str, schedule: &str, max_participants: u32) -> Self {
        Self {
            description: description.to_string(),
            schedule: schedule.to_string(),
            max_participants,
            participants: Vec::new(),
        }
    }

    /// Builder-style helper for seeding existing participants
    pub fn with_participants(mut self, participants: &[&str]) -> Self {
        self.participants = participants.iter().map(|p| p.to_string()).collect();
        self
    }

    /// Whether `participant` is already signed up
    pub fn has_participant(&self, participant: &str) -> bool {
        self.participants.iter().any(|p| p == participant)
    }
}

/// Root configuration structure for the seed roster
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RosterConfig {
    /// Map of activity name to activity record
    pub activities: Roster,
}

impl RosterConfig {
    /// Get an activity by name
    pub fn get_activity(&self, name: &str) -> Option<&Activity> {
        self.activities.get(name)
    }

    /// Consume the configuration, yielding the roster it describes
    pub fn into_roster(self) -> Roster {
        self.activities
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), String> {
        if self.activities.is_empty() {
            return Err("Roster must have at least one activity".to_string());
        }

        for (name, activity) in &self.activities {
            if name.trim().is_empty() {
                return Err("Activity names cannot be empty".to_string());
            }

            if activity.max_participants == 0 {
                return Err(format!(
                    "Activity '{}' must allow at least one participant",
                    name
                ));
            }

            let mut seen = HashSet::new();
            for participant in &activity.participants {
                if !seen.insert(participant.as_str()) {
                    return Err(format!(
                        "Activity '{}' lists participant '{}' more than once",
                        name, participant
                    ));
                }
            }
        }

        Ok(())
    }
}

impl Default for RosterConfig {
    /// Built-in seed roster used when no roster file is configured
    fn default() -> Self {
        let activities = [
            (
                "Chess Club",
                Activity::new(
                    "Learn strategies and compete in chess tournaments",
                    "Fridays, 3:30 PM - 5:00 PM",
                    12,
                )
                .with_participants(&["michael@mergington.edu", "daniel@mergington.edu"]),
            ),
            (
                "Programming Class",
                Activity::new(
                    "Learn programming fundamentals and build software projects",
                    "Tuesdays and Thursdays, 3:30 PM - 4:30 PM",
                    20,
                )
                .with_participants(&["emma@mergington.edu", "sophia@mergington.edu"]),
            ),
            (
                "Gym Class",
                Activity::new(
                    "Physical education and sports activities",
                    "Mondays, Wednesdays, Fridays, 2:00 PM - 3:00 PM",
                    30,
                )
                .with_participants(&["john@mergington.edu", "olivia@mergington.edu"]),
            ),
            (
                "Basketball Team",
                Activity::new(
                    "Practice and compete in inter-school basketball games",
                    "Mondays and Wednesdays, 4:00 PM - 5:30 PM",
                    15,
                ),
            ),
            (
                "Drama Club",
                Activity::new(
                    "Act, direct, and produce school plays and performances",
                    "Thursdays, 3:30 PM - 5:30 PM",
                    25,
                ),
            ),
        ];

        Self {
            activities: activities
                .into_iter()
                .map(|(name, activity)| (name.to_string(), activity))
                .collect(),
        }
    }
}
