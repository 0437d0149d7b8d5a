use std::fmt::Write as _;

use icalendar::{Calendar, Component, Event as CalendarEntry, EventLike};
use once_cell::sync::Lazy;
use regex::Regex;

use crate::error::{Error, Result};
use crate::models::{Event, Team};

/// Namespace for entry uids. Uids are only stable for one generation call:
/// they index into the event list, so a reordering upstream produces
/// different uids on the next run.
const CALENDAR_NAMESPACE: &str = "floorball-cal";

static NON_ALNUM_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"[^A-Za-z0-9]+").expect("valid filename regex"));

/// Serializes a team's fixtures into an iCalendar payload, one entry per
/// event. Fails as a whole if the payload cannot be written; there is no
/// partial calendar output.
pub fn build_calendar(team: &Team, events: &[Event]) -> Result<String> {
    let mut calendar = Calendar::new();
    calendar.name(&team.name);

    for (index, event) in events.iter().enumerate() {
        calendar.push(
            CalendarEntry::new()
                .uid(&format!("{}-{index}@{CALENDAR_NAMESPACE}", team.id))
                .summary(&event.title())
                .description(&build_description(event))
                .location(&event.location)
                .starts(event.start)
                .ends(event.end)
                .done(),
        );
    }

    let mut payload = String::new();
    write!(payload, "{calendar}").map_err(|err| Error::Serialization(err.to_string()))?;
    Ok(payload)
}

fn build_description(event: &Event) -> String {
    let mut lines = vec![
        format!("Heim: {}", event.home_team),
        format!("Gast: {}", event.guest_team),
    ];
    if let Some(host_club) = &event.host_club {
        lines.push(format!("Ausrichter: {host_club}"));
    }
    lines.join("\n")
}

/// Download filename for a team calendar: every run of non-alphanumeric
/// characters becomes a single hyphen.
pub fn calendar_filename(team_name: &str) -> String {
    format!("{}.ics", NON_ALNUM_RE.replace_all(team_name, "-"))
}
