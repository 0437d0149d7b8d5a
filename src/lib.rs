//! Scrapes club, team and fixture data from saisonmanager.de (which has no
//! public API) and turns a selected team's schedule into an iCalendar file.
//!
//! The site is an uncontrolled upstream: individual malformed anchors and
//! table rows are skipped so one bad entry never loses the rest of a page,
//! while transport failures and non-success statuses propagate to the
//! caller.

mod calendar;
mod client;
mod date;
mod error;
mod models;
mod scraping;

use serde::Serialize;

pub use calendar::{build_calendar, calendar_filename};
pub use client::{SaisonManager, BASE_URL};
pub use date::{default_end, end_after, parse_german_date_time, DEFAULT_EVENT_DURATION_MINUTES};
pub use error::{Error, Result};
pub use models::{Club, Event, Team};

/// A ready-to-serve calendar download: `text/calendar` payload plus the
/// filename derived from the team name.
#[derive(Debug, Clone, Serialize)]
pub struct TeamCalendar {
    pub filename: String,
    pub payload: String,
}

impl SaisonManager {
    /// Fetches the team list and the schedule concurrently, then builds the
    /// calendar file for the requested team.
    pub async fn team_calendar(&self, club_id: &str, team_id: &str) -> Result<TeamCalendar> {
        let (teams, events) = tokio::try_join!(self.teams(club_id), self.events(club_id, team_id))?;

        let team = teams
            .into_iter()
            .find(|team| team.id == team_id)
            .ok_or_else(|| Error::TeamNotFound {
                team_id: team_id.to_string(),
            })?;

        let payload = build_calendar(&team, &events)?;
        Ok(TeamCalendar {
            filename: calendar_filename(&team.name),
            payload,
        })
    }
}
