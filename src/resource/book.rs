//! Book resource

use super::ids::resource_ids;
use super::Resource;
use crate::filter::BookFilter;
use chrono::NaiveDateTime;
use serde::Deserialize;

/// A book from the api
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Book {
    /// The hypermedia URL of this resource
    pub url: String,

    /// The name of this book
    pub name: String,

    /// The ISBN-13 that uniquely identifies this book
    pub isbn: String,

    /// Names of the authors that wrote this book
    #[serde(default)]
    pub authors: Vec<String>,

    /// The number of pages in this book
    pub number_of_pages: u32,

    /// The company that published this book
    pub publisher: String,

    /// The country this book was published in
    pub country: String,

    /// The release medium: Hardback, Hardcover, GraphicNovel or Paperback
    pub media_type: String,

    /// The date this book was released
    #[serde(with = "super::datetime")]
    pub released: NaiveDateTime,

    /// Ids of the characters that appear in this book
    #[serde(rename = "characters", default, deserialize_with = "resource_ids")]
    pub character_ids: Vec<u64>,

    /// Ids of the characters with a POV chapter in this book
    #[serde(rename = "povCharacters", default, deserialize_with = "resource_ids")]
    pub pov_character_ids: Vec<u64>,
}

impl Resource for Book {
    type Filter = BookFilter;

    const ENDPOINT: &'static str = "books";
}
