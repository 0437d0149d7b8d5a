use once_cell::sync::Lazy;
use scraper::{Html, Selector};
use tracing::warn;

use super::base;
use crate::client::SaisonManager;
use crate::date::{default_end, parse_german_date_time};
use crate::error::Result;
use crate::models::Event;

static ROW_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("table tbody tr").expect("schedule row selector"));
static CELL_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("td").expect("schedule cell selector"));

// Column order of the schedule table.
const COL_DATE: usize = 0;
const COL_TIME: usize = 1;
const COL_HOME: usize = 2;
const COL_GUEST: usize = 3;
const COL_LOCATION: usize = 4;
const COL_HOST_CLUB: usize = 5;

impl SaisonManager {
    /// Scheduled fixtures for one team, in the row order of the schedule
    /// table. Malformed rows are skipped individually so one bad entry
    /// never loses the rest of the page.
    pub async fn events(&self, club_id: &str, team_id: &str) -> Result<Vec<Event>> {
        let html = self
            .fetch_html(&format!("/club/{club_id}/team/{team_id}"))
            .await?;
        Ok(parse_events(&html))
    }
}

pub(crate) fn parse_events(html: &str) -> Vec<Event> {
    let document = Html::parse_document(html);
    let mut events = Vec::new();

    for row in document.select(&ROW_SELECTOR) {
        let cells: Vec<String> = row.select(&CELL_SELECTOR).map(base::inner_text).collect();
        if cells.is_empty() {
            continue;
        }
        let column = |index: usize| cells.get(index).cloned().unwrap_or_default();

        let date_text = column(COL_DATE);
        let time_text = column(COL_TIME);
        let home_team = column(COL_HOME);
        let guest_team = column(COL_GUEST);
        let location = column(COL_LOCATION);
        let host_club = column(COL_HOST_CLUB);

        if date_text.is_empty()
            || time_text.is_empty()
            || home_team.is_empty()
            || guest_team.is_empty()
        {
            continue;
        }

        let start = match parse_german_date_time(&format!("{date_text} {time_text}")) {
            Ok(start) => start,
            Err(err) => {
                warn!(%home_team, %guest_team, "skipping event row: {err}");
                continue;
            }
        };

        events.push(Event {
            home_team,
            guest_team,
            start,
            end: default_end(start),
            location,
            host_club: if host_club.is_empty() {
                None
            } else {
                Some(host_club)
            },
        });
    }

    events
}
