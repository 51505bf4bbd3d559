//! Turns backend activity data into the cards the page shows.

use crate::models::{Activity, ActivityCard, ActivityList, ParticipantRow};

pub const NO_PARTICIPANTS: &str = "No participants yet";

/// Remaining capacity. Negative when the backend has over-allocated.
pub fn spots_left(activity: &Activity) -> i64 {
    let taken = i64::try_from(activity.participants.len()).unwrap_or(i64::MAX);
    activity.max_participants.saturating_sub(taken)
}

/// Two-letter avatar code for a participant name or email.
///
/// Only the part before `@` is used; `.`, `_` and `-` separate tokens. A single
/// token contributes its first two characters, otherwise the first character of
/// each of the first two tokens is used.
pub fn initials(text: &str) -> String {
    let local = text.split('@').next().unwrap_or_default();
    let spaced: String = local
        .chars()
        .map(|c| if matches!(c, '.' | '_' | '-') { ' ' } else { c })
        .collect();
    let tokens: Vec<&str> = spaced.split(' ').filter(|token| !token.is_empty()).collect();

    let picked: String = match tokens.as_slice() {
        [] => String::new(),
        [only] => only.chars().take(2).collect(),
        [first, second, ..] => first.chars().take(1).chain(second.chars().take(1)).collect(),
    };
    picked.to_uppercase()
}

pub fn render_activity(name: &str, activity: &Activity) -> ActivityCard {
    ActivityCard {
        name: name.to_string(),
        description: activity.description.clone(),
        schedule: activity.schedule.clone(),
        max_participants: activity.max_participants,
        spots_left: spots_left(activity),
        participants: activity
            .participants
            .iter()
            .map(|email| ParticipantRow {
                email: email.clone(),
                initials: initials(email),
            })
            .collect(),
    }
}

pub fn render_activities(list: &ActivityList) -> Vec<ActivityCard> {
    list.iter()
        .map(|(name, activity)| render_activity(name, activity))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn activity(max: i64, participants: &[&str]) -> Activity {
        Activity {
            description: "d".into(),
            schedule: "s".into(),
            max_participants: max,
            participants: participants.iter().map(|p| p.to_string()).collect(),
        }
    }

    #[test]
    fn initials_from_single_token_email() {
        assert_eq!(initials("michael@mergington.edu"), "MI");
        assert_eq!(initials("a@x.com"), "A");
    }

    #[test]
    fn initials_from_multi_token_email() {
        assert_eq!(initials("john.doe@x.com"), "JD");
        assert_eq!(initials("emma_jane-smith@x.com"), "EJ");
        assert_eq!(initials("Sophia Lee"), "SL");
    }

    #[test]
    fn initials_collapse_separator_runs() {
        assert_eq!(initials("..ana__--bo@x.com"), "AB");
    }

    #[test]
    fn initials_empty_cases() {
        assert_eq!(initials(""), "");
        assert_eq!(initials("@x.com"), "");
        assert_eq!(initials("._-@x.com"), "");
    }

    #[test]
    fn initials_are_uppercase_and_at_most_two_chars() {
        for input in ["zoe@x.com", "x.y.z@x.com", "émile.zola@x.com", "li@x.com"] {
            let code = initials(input);
            assert!(code.chars().count() <= 2, "{input} -> {code}");
            assert_eq!(code, code.to_uppercase());
        }
        assert_eq!(initials("émile.zola@x.com"), "ÉZ");
    }

    #[test]
    fn spots_left_is_capacity_minus_roster() {
        assert_eq!(spots_left(&activity(12, &["a@x.com", "b@x.com"])), 10);
        assert_eq!(spots_left(&activity(0, &[])), 0);
    }

    #[test]
    fn spots_left_goes_negative_when_over_allocated() {
        assert_eq!(spots_left(&activity(1, &["a@x.com", "b@x.com", "c@x.com"])), -2);
    }

    #[test]
    fn chess_club_card() {
        let card = render_activity("Chess Club", &activity(2, &["a@x.com"]));
        assert_eq!(card.name, "Chess Club");
        assert_eq!(card.spots_left, 1);
        assert_eq!(
            card.participants,
            vec![ParticipantRow {
                email: "a@x.com".into(),
                initials: "A".into(),
            }]
        );
    }

    #[test]
    fn render_activities_keeps_order() {
        let list = ActivityList(vec![
            ("Gym Class".into(), activity(30, &[])),
            ("Art Club".into(), activity(15, &["amy@x.com"])),
        ]);
        let cards = render_activities(&list);
        let names: Vec<&str> = cards.iter().map(|card| card.name.as_str()).collect();
        assert_eq!(names, ["Gym Class", "Art Club"]);
        assert!(cards[0].participants.is_empty());
    }
}
