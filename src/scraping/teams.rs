use once_cell::sync::Lazy;
use reqwest::Url;
use scraper::{Html, Selector};

use super::base;
use crate::client::{build_url, SaisonManager};
use crate::error::Result;
use crate::models::{Club, Team};

static TEAM_LINK_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse(r#"a[href*="/team"]"#).expect("team link selector"));
static LOGO_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("img").expect("logo selector"));
static INFO_CONTAINER_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("[data-team-info]").expect("team info selector"));
static MODUS_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("[data-team-modus]").expect("team modus selector"));
static LEAGUE_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("[data-team-league]").expect("team league selector"));

impl SaisonManager {
    /// Teams listed on a club page, sorted by name (German collation).
    /// Distinct anchors are assumed to be distinct teams, so unlike clubs
    /// there is no dedup here.
    pub async fn teams(&self, club_id: &str) -> Result<Vec<Team>> {
        let html = self.fetch_html(&format!("/club/{club_id}")).await?;
        Ok(parse_teams(&html, club_id, self.base_url()))
    }
}

pub(crate) fn parse_teams(html: &str, club_id: &str, base: &Url) -> Vec<Team> {
    let document = Html::parse_document(html);
    let mut teams = Vec::new();

    for anchor in document.select(&TEAM_LINK_SELECTOR) {
        let href = anchor.value().attr("href");
        let id = match base::extract_last_path_segment(href, base) {
            Some(id) => id,
            None => continue,
        };

        let name = base::inner_text(anchor);
        if name.is_empty() {
            continue;
        }

        let logo_url = base::first_attr(&anchor, &LOGO_SELECTOR, "src")
            .and_then(|src| base::absolute_url(base, Some(&src)));

        let mut modus = None;
        let mut league = None;
        if let Some(info) = base::closest(&anchor, &INFO_CONTAINER_SELECTOR) {
            modus = base::first_text(&info, &MODUS_SELECTOR);
            league = base::first_text(&info, &LEAGUE_SELECTOR);
        }

        teams.push(Team {
            url: build_url(base, &format!("/team/{id}")),
            id,
            name,
            logo_url,
            // The caller already knows the club; name and location would
            // cost another fetch, so only id and url are carried.
            club: Club {
                id: club_id.to_string(),
                name: String::new(),
                location: String::new(),
                url: build_url(base, &format!("/club/{club_id}")),
            },
            modus,
            league,
        });
    }

    teams.sort_by(|a, b| base::german_collate(&a.name, &b.name));
    teams
}
