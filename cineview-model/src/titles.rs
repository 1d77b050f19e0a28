use serde::{Deserialize, Serialize};

/// Lightweight title record used by the trending and top-rated rails.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TitleSummary {
    pub title_id: String,
    pub name: String,
    pub start_year: Option<i32>,
    pub vote_average: f64,
    pub vote_count: i64,
    pub genre_name: Option<String>,
}

/// One type-ahead search hit. The server may return many; the suggestion
/// dropdown truncates to its own display limit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TitleSearchHit {
    pub title_id: String,
    pub name: String,
    #[serde(default)]
    pub overview: Option<String>,
    pub vote_average: f64,
}

/// A row of the faceted filter result grid.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FilteredTitle {
    pub title_id: String,
    pub name: String,
    pub start_year: Option<i32>,
    pub vote_average: f64,
    #[serde(default)]
    pub genre_name: Option<String>,
    #[serde(default)]
    pub type_name: Option<String>,
    #[serde(default)]
    pub status_name: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TitleGenre {
    pub genre_type_id: String,
    pub genre_name: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ProductionCompany {
    pub company_id: String,
    pub company_name: String,
    #[serde(default)]
    pub origin_country: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TitleNetwork {
    pub network_id: String,
    pub network_name: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct AirDate {
    #[serde(default)]
    pub air_date: Option<String>,
    #[serde(default)]
    pub episode_count: Option<i32>,
    #[serde(default)]
    pub season_number: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct CastCrewMember {
    pub person_name: String,
    #[serde(default)]
    pub role: Option<String>,
    #[serde(default)]
    pub character_name: Option<String>,
}

/// The core record of a title detail response.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TitleDetailBody {
    pub title_id: String,
    pub name: String,
    #[serde(default)]
    pub overview: Option<String>,
    #[serde(default)]
    pub start_year: Option<i32>,
    #[serde(default)]
    pub end_year: Option<i32>,
    #[serde(default)]
    pub runtime_minutes: Option<i32>,
    pub vote_average: f64,
    pub vote_count: i64,
    #[serde(default)]
    pub status_name: Option<String>,
    #[serde(default)]
    pub type_name: Option<String>,
}

/// Full detail payload for a title page.
///
/// `detail` may be absent on a successful response when the id is unknown;
/// callers must treat that as "title not found", not as a transport error.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TitleDetail {
    #[serde(default)]
    pub detail: Option<TitleDetailBody>,
    #[serde(default)]
    pub genres: Vec<TitleGenre>,
    #[serde(default)]
    pub languages: Vec<String>,
    #[serde(default)]
    pub countries: Vec<String>,
    #[serde(default)]
    pub companies: Vec<ProductionCompany>,
    #[serde(default)]
    pub networks: Vec<TitleNetwork>,
    #[serde(default)]
    pub air_dates: Vec<AirDate>,
    #[serde(default)]
    pub cast_and_crew: Vec<CastCrewMember>,
}

impl TitleDetail {
    pub fn is_found(&self) -> bool {
        self.detail.is_some()
    }
}
