//! House resource

use super::ids::{resource_id, resource_ids};
use super::Resource;
use crate::filter::HouseFilter;
use serde::Deserialize;

/// A house from the api
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct House {
    /// The hypermedia URL of this resource
    pub url: String,

    /// The name of this house
    pub name: String,

    /// The region this house resides in
    pub region: String,

    /// Text describing the coat of arms of this house
    pub coat_of_arms: String,

    /// The words of this house
    pub words: String,

    /// The titles this house holds
    #[serde(default)]
    pub titles: Vec<String>,

    /// The seats this house holds
    #[serde(default)]
    pub seats: Vec<String>,

    /// Id of this house's current lord
    #[serde(rename = "currentLord", default, deserialize_with = "resource_id")]
    pub current_lord_id: Option<u64>,

    /// Id of this house's heir
    #[serde(rename = "heir", default, deserialize_with = "resource_id")]
    pub heir_id: Option<u64>,

    /// Id of the house this house answers to
    #[serde(rename = "overlord", default, deserialize_with = "resource_id")]
    pub overlord_id: Option<u64>,

    /// The year this house was founded
    pub founded: String,

    /// Id of the character that founded this house
    #[serde(rename = "founder", default, deserialize_with = "resource_id")]
    pub founder_id: Option<u64>,

    /// The year this house died out
    pub died_out: String,

    /// Names of the noteworthy weapons this house owns
    #[serde(default)]
    pub ancestral_weapons: Vec<String>,

    /// Ids of the houses founded from this house
    #[serde(rename = "cadetBranches", default, deserialize_with = "resource_ids")]
    pub cadet_branch_ids: Vec<u64>,

    /// Ids of the characters sworn to this house
    #[serde(rename = "swornMembers", default, deserialize_with = "resource_ids")]
    pub sworn_member_ids: Vec<u64>,
}

impl Resource for House {
    type Filter = HouseFilter;

    const ENDPOINT: &'static str = "houses";
}
