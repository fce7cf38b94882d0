//! End-to-end pagination flow against a mock server
//!
//! Exercises the full loop: filtered listing, link-header parsing, filter
//! reconstruction from the advertised URL, and the follow-up fetch issued
//! with that reconstructed filter.

use iceandfire::{CharacterFilter, ClientConfig, Error, Filter, IceAndFireClient, QueryMap};
use serde_json::{json, Value};
use wiremock::matchers::{method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn character_body(id: u64, name: &str) -> Value {
    json!({
        "url": format!("https://anapioficeandfire.com/api/characters/{id}"),
        "name": name,
        "gender": "Female",
        "culture": "Northmen",
        "born": "In 287 AC",
        "died": "",
        "titles": ["Princess"],
        "aliases": [],
        "father": "",
        "mother": "",
        "spouse": "",
        "allegiances": ["https://anapioficeandfire.com/api/houses/362"],
        "books": [],
        "povBooks": [format!("https://anapioficeandfire.com/api/books/{id}")],
        "tvSeries": [],
        "playedBy": []
    })
}

fn client_for(server: &MockServer) -> IceAndFireClient {
    IceAndFireClient::with_config(
        ClientConfig::builder()
            .base_url(format!("{}/api", server.uri()))
            .build(),
    )
}

#[tokio::test]
async fn walks_adjacent_pages_with_reconstructed_filters() {
    let server = MockServer::start().await;
    let base = format!("{}/api", server.uri());

    // Page 1 advertises next and last; the culture filter is carried in
    // the advertised URLs, just like the real api does it.
    let page_one_link = format!(
        "<{base}/characters?page=2&pageSize=2&culture=Northmen>; rel=\"next\", \
         <{base}/characters?page=3&pageSize=2&culture=Northmen>; rel=\"last\""
    );
    Mock::given(method("GET"))
        .and(path("/api/characters"))
        .and(query_param("page", "2"))
        .and(query_param_is_missing("pageSize"))
        .and(query_param("culture", "Northmen"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("link", page_one_link.as_str())
                .set_body_json(json!([
                    character_body(1, "Sansa Stark"),
                    character_body(2, "Arya Stark"),
                ])),
        )
        .mount(&server)
        .await;

    // Page 2 advertises prev and first.
    let page_two_link = format!(
        "<{base}/characters?page=1&pageSize=2&culture=Northmen>; rel=\"prev\", \
         <{base}/characters?page=1&pageSize=2&culture=Northmen>; rel=\"first\""
    );
    Mock::given(method("GET"))
        .and(path("/api/characters"))
        .and(query_param("page", "2"))
        .and(query_param("pageSize", "2"))
        .and(query_param("culture", "Northmen"))
        .respond_with(
            ResponseTemplate::new(200)
                .insert_header("link", page_two_link.as_str())
                .set_body_json(json!([character_body(3, "Lyanna Stark")])),
        )
        .mount(&server)
        .await;

    let client = client_for(&server);

    let first_page = client
        .characters(CharacterFilter::new().limit(2).culture("Northmen"))
        .await
        .unwrap();
    assert_eq!(first_page.len(), 2);
    assert_eq!(first_page.data()[0].name, "Sansa Stark");

    // Reconstructed filter carries both paging and the culture filter.
    let next_filter = first_page.next().unwrap();
    let expected = CharacterFilter::new().limit(2).page(2).culture("Northmen");
    assert_eq!(next_filter, expected);

    let second_page = client.characters(next_filter).await.unwrap();
    assert_eq!(second_page.len(), 1);
    assert_eq!(second_page.data()[0].name, "Lyanna Stark");

    // The second page has prev/first but no next/last.
    let back = second_page.prev().unwrap();
    assert_eq!(
        back.to_query_params(),
        CharacterFilter::new()
            .limit(1)
            .page(2)
            .culture("Northmen")
            .to_query_params()
    );
    assert!(matches!(second_page.next().unwrap_err(), Error::NoResultSet));
    assert!(matches!(second_page.last().unwrap_err(), Error::NoResultSet));
}

#[tokio::test]
async fn serialized_filters_round_trip_through_real_urls() {
    // Serialize a filter, embed it in a URL, extract the query and
    // reconstruct. Equality holds on every serialized field.
    let filter = CharacterFilter::new()
        .limit(40)
        .page(7)
        .name("Brienne of Tarth")
        .is_alive(true);

    let query_string = filter
        .to_query_params()
        .into_iter()
        .map(|(k, v)| format!("{}={}", k, urlencode(&v)))
        .collect::<Vec<_>>()
        .join("&");
    let url = format!("https://anapioficeandfire.com/api/characters?{query_string}");

    let rebuilt = CharacterFilter::from_query(&QueryMap::from_url(&url).unwrap()).unwrap();
    assert_eq!(rebuilt, filter);
}

fn urlencode(value: &str) -> String {
    value.replace(' ', "%20")
}
