//! Character resource

use super::ids::{resource_id, resource_ids};
use super::Resource;
use crate::filter::CharacterFilter;
use serde::Deserialize;

/// A character from the api
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Character {
    /// The hypermedia URL of this resource
    pub url: String,

    /// The name of this character
    pub name: String,

    /// The gender of this character: Female, Male or Unknown
    pub gender: String,

    /// The culture this character belongs to
    pub culture: String,

    /// The year this character was born
    pub born: String,

    /// The year this character died
    pub died: String,

    /// The titles this character holds
    #[serde(default)]
    pub titles: Vec<String>,

    /// The aliases this character goes by
    #[serde(default)]
    pub aliases: Vec<String>,

    /// Id of this character's father
    #[serde(rename = "father", default, deserialize_with = "resource_id")]
    pub father_id: Option<u64>,

    /// Id of this character's mother
    #[serde(rename = "mother", default, deserialize_with = "resource_id")]
    pub mother_id: Option<u64>,

    /// Id of this character's spouse
    #[serde(rename = "spouse", default, deserialize_with = "resource_id")]
    pub spouse_id: Option<u64>,

    /// Ids of the houses this character is loyal to
    #[serde(rename = "allegiances", default, deserialize_with = "resource_ids")]
    pub allegiance_ids: Vec<u64>,

    /// Ids of the books this character appears in
    #[serde(rename = "books", default, deserialize_with = "resource_ids")]
    pub book_ids: Vec<u64>,

    /// Ids of the books this character has a POV chapter in
    #[serde(rename = "povBooks", default, deserialize_with = "resource_ids")]
    pub pov_book_ids: Vec<u64>,

    /// Seasons of the TV show this character appears in
    #[serde(default)]
    pub tv_series: Vec<String>,

    /// Actors that have played this character
    #[serde(default)]
    pub played_by: Vec<String>,
}

impl Resource for Character {
    type Filter = CharacterFilter;

    const ENDPOINT: &'static str = "characters";
}
