use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Club {
    pub id: String, // last path segment of the club href
    pub name: String,
    pub location: String,
    pub url: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Team {
    pub id: String,
    pub name: String,
    pub logo_url: Option<String>,
    pub club: Club,
    pub modus: Option<String>,
    pub league: Option<String>,
    pub url: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Event {
    pub home_team: String,
    pub guest_team: String,
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
    pub location: String,
    pub host_club: Option<String>,
}

impl Event {
    pub fn title(&self) -> String {
        format!("{} vs. {}", self.home_team, self.guest_team)
    }
}
