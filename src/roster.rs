// Activity signup business logic
// Pure mutations over a roster; callers provide exclusive access

use crate::models::Roster;

/// Errors raised by roster mutations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RosterError {
    ActivityNotFound { activity: String },
    ParticipantNotFound { activity: String, participant: String },
    AlreadySignedUp { activity: String, participant: String },
}

impl RosterError {
    /// Short description of the failure without participant identifiers
    pub fn reason(&self) -> &'static str {
        match self {
            RosterError::ActivityNotFound { .. } => "activity not found",
            RosterError::ParticipantNotFound { .. } => "participant not signed up",
            RosterError::AlreadySignedUp { .. } => "participant already signed up",
        }
    }
}

impl std::fmt::Display for RosterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RosterError::ActivityNotFound { activity } => {
                write!(f, "Activity '{}' not found", activity)
            }
            RosterError::ParticipantNotFound {
                activity,
                participant,
            } => write!(f, "Participant '{}' not found in '{}'", participant, activity),
            RosterError::AlreadySignedUp { .. } => write!(f, "Student already signed up"),
        }
    }
}

impl std::error::Error for RosterError {}

/// Sign up a participant for an activity.
///
/// Appends `participant` to the end of the activity's participant list.
/// Fails without touching the roster if the activity does not exist or the
/// participant is already signed up.
pub fn signup_participant(
    roster: &mut Roster,
    activity_name: &str,
    participant: &str,
) -> Result<(), RosterError> {
    let activity = roster
        .get_mut(activity_name)
        .ok_or_else(|| RosterError::ActivityNotFound {
            activity: activity_name.to_string(),
        })?;

    if activity.has_participant(participant) {
        return Err(RosterError::AlreadySignedUp {
            activity: activity_name.to_string(),
            participant: participant.to_string(),
        });
    }

    activity.participants.push(participant.to_string());
    Ok(())
}

/// Unregister a participant from an activity.
///
/// Fails without touching the roster if the activity does not exist or the
/// participant is not signed up for it.
pub fn unregister_participant(
    roster: &mut Roster,
    activity_name: &str,
    participant: &str,
) -> Result<(), RosterError> {
    let activity = roster
        .get_mut(activity_name)
        .ok_or_else(|| RosterError::ActivityNotFound {
            activity: activity_name.to_string(),
        })?;

    let position = activity
        .participants
        .iter()
        .position(|p| p == participant)
        .ok_or_else(|| RosterError::ParticipantNotFound {
            activity: activity_name.to_string(),
            participant: participant.to_string(),
        })?;

    activity.participants.remove(position);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Activity;

    fn sample_roster() -> Roster {
        let mut roster = Roster::new();
        roster.insert(
            "Chess Club".to_string(),
            Activity::new("Learn chess strategies", "Friday 3:30 PM", 12)
                .with_participants(&["alice@school.edu"]),
        );
        roster.insert(
            "Basketball".to_string(),
            Activity::new("Play basketball", "Monday 4:00 PM", 15),
        );
        roster
    }

    fn participants<'a>(roster: &'a Roster, name: &str) -> &'a [String] {
        &roster[name].participants
    }

    #[test]
    fn test_signup_appends_once() {
        let mut roster = sample_roster();
        signup_participant(&mut roster, "Chess Club", "bob@school.edu").unwrap();

        assert_eq!(
            participants(&roster, "Chess Club"),
            ["alice@school.edu", "bob@school.edu"]
        );
    }

    #[test]
    fn test_signup_duplicate_leaves_list_untouched() {
        let mut roster = sample_roster();
        let before = roster.clone();

        let err = signup_participant(&mut roster, "Chess Club", "alice@school.edu").unwrap_err();
        assert!(matches!(err, RosterError::AlreadySignedUp { .. }));
        assert!(err.to_string().contains("already signed up"));
        assert_eq!(roster, before);
    }

    #[test]
    fn test_signup_unknown_activity_leaves_roster_untouched() {
        let mut roster = sample_roster();
        let before = roster.clone();

        let err = signup_participant(&mut roster, "Yoga Club", "dave@school.edu").unwrap_err();
        assert_eq!(
            err,
            RosterError::ActivityNotFound {
                activity: "Yoga Club".to_string()
            }
        );
        assert_eq!(err.to_string(), "Activity 'Yoga Club' not found");
        assert_eq!(roster, before);
    }

    #[test]
    fn test_unregister_removes_participant() {
        let mut roster = sample_roster();
        unregister_participant(&mut roster, "Chess Club", "alice@school.edu").unwrap();
        assert!(participants(&roster, "Chess Club").is_empty());
    }

    #[test]
    fn test_unregister_missing_participant() {
        let mut roster = sample_roster();
        let before = roster.clone();

        let err =
            unregister_participant(&mut roster, "Chess Club", "unknown@school.edu").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Participant 'unknown@school.edu' not found in 'Chess Club'"
        );
        assert_eq!(roster, before);
    }

    #[test]
    fn test_reason_omits_participant() {
        let mut roster = sample_roster();

        let err =
            unregister_participant(&mut roster, "Chess Club", "unknown@school.edu").unwrap_err();
        assert_eq!(err.reason(), "participant not signed up");
        assert!(err.to_string().contains("unknown@school.edu"));

        let err = signup_participant(&mut roster, "Chess Club", "alice@school.edu").unwrap_err();
        assert_eq!(err.reason(), "participant already signed up");
        assert!(!err.reason().contains("alice"));
    }

    #[test]
    fn test_unregister_unknown_activity() {
        let mut roster = sample_roster();
        let err =
            unregister_participant(&mut roster, "Yoga Club", "alice@school.edu").unwrap_err();
        assert!(matches!(err, RosterError::ActivityNotFound { .. }));
    }

    #[test]
    fn test_unregister_keeps_order_of_remaining() {
        let mut roster = sample_roster();
        for student in ["bob@school.edu", "carol@school.edu"] {
            signup_participant(&mut roster, "Chess Club", student).unwrap();
        }

        unregister_participant(&mut roster, "Chess Club", "bob@school.edu").unwrap();
        assert_eq!(
            participants(&roster, "Chess Club"),
            ["alice@school.edu", "carol@school.edu"]
        );
    }
}
