use std::fmt;

use serde::{Deserialize, Serialize};

/// Sort orders accepted by the filter endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortKey {
    /// Release date, newest first. The server default when unset.
    #[default]
    Released,
    /// Most viewed.
    Popularity,
    /// Alphabetical.
    Name,
    /// Vote average.
    Rating,
}

impl SortKey {
    pub fn all() -> &'static [SortKey] {
        use SortKey::*;
        &[Released, Popularity, Name, Rating]
    }

    pub fn label(&self) -> &'static str {
        match self {
            SortKey::Released => "Release Date",
            SortKey::Popularity => "Most Viewed",
            SortKey::Name => "Name",
            SortKey::Rating => "IMDb Rating",
        }
    }

    pub fn api_name(&self) -> &'static str {
        match self {
            SortKey::Released => "released",
            SortKey::Popularity => "popularity",
            SortKey::Name => "name",
            SortKey::Rating => "rating",
        }
    }
}

impl fmt::Display for SortKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct GenreOption {
    pub genre_type_id: String,
    pub genre_name: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TypeOption {
    pub type_id: String,
    pub type_name: String,
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StatusOption {
    pub status_id: String,
    pub status_name: String,
}

/// Read-only reference data backing the filter panel, fetched once per
/// page mount.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FilterOptions {
    #[serde(default)]
    pub genres: Vec<GenreOption>,
    #[serde(default)]
    pub types: Vec<TypeOption>,
    #[serde(default)]
    pub statuses: Vec<StatusOption>,
    #[serde(default)]
    pub years: Vec<i32>,
}

/// Body of `POST /titles/filter`.
///
/// Facet arrays are omitted entirely when empty: an absent field means
/// "no constraint on this facet", an empty list would mean "match
/// nothing". `year` is a single value even though the panel is
/// multi-select; the backend contract only accepts one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FilterRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub genre_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub type_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status_ids: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub year: Option<i32>,
    pub sort_by: SortKey,
    pub page: u32,
    pub limit: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_facets_are_omitted_from_the_wire() {
        let request = FilterRequest {
            genre_ids: None,
            type_ids: Some(vec!["2".to_string()]),
            status_ids: None,
            year: None,
            sort_by: SortKey::Released,
            page: 1,
            limit: 25,
        };

        let json = serde_json::to_value(&request).unwrap();
        let object = json.as_object().unwrap();
        assert!(!object.contains_key("genreIds"));
        assert!(!object.contains_key("statusIds"));
        assert!(!object.contains_key("year"));
        assert_eq!(json["typeIds"], serde_json::json!(["2"]));
        assert_eq!(json["sortBy"], "released");
        assert_eq!(json["limit"], 25);
    }

    #[test]
    fn sort_keys_round_trip_by_api_name() {
        for key in SortKey::all() {
            let json = serde_json::to_string(key).unwrap();
            assert_eq!(json, format!("\"{}\"", key.api_name()));
            let back: SortKey = serde_json::from_str(&json).unwrap();
            assert_eq!(back, *key);
        }
    }
}
