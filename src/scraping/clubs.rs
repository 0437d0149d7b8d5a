use std::collections::HashSet;

use once_cell::sync::Lazy;
use reqwest::Url;
use scraper::{Html, Selector};

use super::base;
use crate::client::{build_url, SaisonManager};
use crate::error::Result;
use crate::models::Club;

static CLUB_LINK_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse(r#"a[href*="/club"]"#).expect("club link selector"));

impl SaisonManager {
    /// All clubs listed on the site root, sorted by name (German collation).
    pub async fn clubs(&self) -> Result<Vec<Club>> {
        let html = self.fetch_html("/").await?;
        Ok(parse_clubs(&html, self.base_url()))
    }
}

pub(crate) fn parse_clubs(html: &str, base: &Url) -> Vec<Club> {
    let document = Html::parse_document(html);
    let mut seen = HashSet::new();
    let mut clubs = Vec::new();

    for anchor in document.select(&CLUB_LINK_SELECTOR) {
        let href = anchor.value().attr("href");
        let id = match base::extract_last_path_segment(href, base) {
            Some(id) => id,
            None => continue,
        };

        let name = base::inner_text(anchor);
        if name.is_empty() {
            continue;
        }

        // First occurrence wins; the listing repeats club links in several
        // page sections.
        if !seen.insert(id.clone()) {
            continue;
        }

        clubs.push(Club {
            url: build_url(base, &format!("/club/{id}")),
            id,
            name,
            // Not present on the listing page.
            location: String::new(),
        });
    }

    clubs.sort_by(|a, b| base::german_collate(&a.name, &b.name));
    clubs
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE_HTML: &str = r#"
    <nav>
        <a href="/club/sc-baeren-12">SC  Bären</a>
    </nav>
    <main>
        <ul>
            <li><a href="/club/adler-04">Adler 04</a></li>
            <li><a href="/club/aerger-7?ref=list"> Ärger   07 </a></li>
            <li><a href="/club/sc-baeren-12">SC Bären</a></li>
            <li><a href="/club/no-name-club"><img src="/logo.png"></a></li>
        </ul>
    </main>
    "#;

    fn base() -> Url {
        Url::parse("https://saisonmanager.de").expect("valid base url")
    }

    #[test]
    fn parses_and_sorts_clubs() {
        let clubs = parse_clubs(SAMPLE_HTML, &base());
        let names: Vec<_> = clubs.iter().map(|club| club.name.as_str()).collect();
        assert_eq!(names, vec!["Adler 04", "Ärger 07", "SC Bären"]);

        let first = &clubs[0];
        assert_eq!(first.id, "adler-04");
        assert_eq!(first.url, "https://saisonmanager.de/club/adler-04");
        assert_eq!(first.location, "");
    }

    #[test]
    fn first_occurrence_wins_on_duplicate_id() {
        let clubs = parse_clubs(SAMPLE_HTML, &base());
        let baeren: Vec<_> = clubs
            .iter()
            .filter(|club| club.id == "sc-baeren-12")
            .collect();
        assert_eq!(baeren.len(), 1);
        assert_eq!(baeren[0].name, "SC Bären");
    }

    #[test]
    fn skips_anchors_without_a_name() {
        let clubs = parse_clubs(SAMPLE_HTML, &base());
        assert!(clubs.iter().all(|club| club.id != "no-name-club"));
    }
}
