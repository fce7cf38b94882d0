//! Tests for resource decoding

use super::*;
use chrono::NaiveDate;
use pretty_assertions::assert_eq;
use serde_json::json;

#[test]
fn test_decode_book() {
    let body = json!({
        "url": "https://anapioficeandfire.com/api/books/1",
        "name": "A Game of Thrones",
        "isbn": "978-0553103540",
        "authors": ["George R. R. Martin"],
        "numberOfPages": 694,
        "publisher": "Bantam Books",
        "country": "United States",
        "mediaType": "Hardcover",
        "released": "1996-08-01T00:00:00",
        "characters": [
            "https://anapioficeandfire.com/api/characters/2",
            "https://anapioficeandfire.com/api/characters/12"
        ],
        "povCharacters": ["https://anapioficeandfire.com/api/characters/148"]
    });

    let book: Book = serde_json::from_value(body).unwrap();
    assert_eq!(book.name, "A Game of Thrones");
    assert_eq!(book.isbn, "978-0553103540");
    assert_eq!(book.authors, vec!["George R. R. Martin"]);
    assert_eq!(book.number_of_pages, 694);
    assert_eq!(book.media_type, "Hardcover");
    assert_eq!(
        book.released,
        NaiveDate::from_ymd_opt(1996, 8, 1)
            .unwrap()
            .and_hms_opt(0, 0, 0)
            .unwrap()
    );
    assert_eq!(book.character_ids, vec![2, 12]);
    assert_eq!(book.pov_character_ids, vec![148]);
}

#[test]
fn test_decode_character() {
    let body = json!({
        "url": "https://anapioficeandfire.com/api/characters/583",
        "name": "Jon Snow",
        "gender": "Male",
        "culture": "Northmen",
        "born": "In 283 AC",
        "died": "",
        "titles": ["Lord Commander of the Night's Watch"],
        "aliases": ["Lord Snow", "The White Wolf"],
        "father": "",
        "mother": "",
        "spouse": "",
        "allegiances": ["https://anapioficeandfire.com/api/houses/362"],
        "books": ["https://anapioficeandfire.com/api/books/5"],
        "povBooks": [
            "https://anapioficeandfire.com/api/books/1",
            "https://anapioficeandfire.com/api/books/2"
        ],
        "tvSeries": ["Season 1", "Season 2"],
        "playedBy": ["Kit Harington"]
    });

    let character: Character = serde_json::from_value(body).unwrap();
    assert_eq!(character.name, "Jon Snow");
    assert_eq!(character.gender, "Male");
    // Empty hypermedia URLs mean "no relation".
    assert_eq!(character.father_id, None);
    assert_eq!(character.mother_id, None);
    assert_eq!(character.spouse_id, None);
    assert_eq!(character.allegiance_ids, vec![362]);
    assert_eq!(character.pov_book_ids, vec![1, 2]);
    assert_eq!(character.played_by, vec!["Kit Harington"]);
}

#[test]
fn test_decode_house() {
    let body = json!({
        "url": "https://anapioficeandfire.com/api/houses/362",
        "name": "House Stark of Winterfell",
        "region": "The North",
        "coatOfArms": "A running grey direwolf",
        "words": "Winter is Coming",
        "titles": ["King in the North"],
        "seats": ["Winterfell"],
        "currentLord": "https://anapioficeandfire.com/api/characters/339",
        "heir": "",
        "overlord": "https://anapioficeandfire.com/api/houses/16",
        "founded": "Age of Heroes",
        "founder": "https://anapioficeandfire.com/api/characters/209",
        "diedOut": "",
        "ancestralWeapons": ["Ice"],
        "cadetBranches": ["https://anapioficeandfire.com/api/houses/170"],
        "swornMembers": [
            "https://anapioficeandfire.com/api/characters/2",
            "https://anapioficeandfire.com/api/characters/3"
        ]
    });

    let house: House = serde_json::from_value(body).unwrap();
    assert_eq!(house.name, "House Stark of Winterfell");
    assert_eq!(house.region, "The North");
    assert_eq!(house.words, "Winter is Coming");
    assert_eq!(house.current_lord_id, Some(339));
    assert_eq!(house.heir_id, None);
    assert_eq!(house.overlord_id, Some(16));
    assert_eq!(house.founder_id, Some(209));
    assert_eq!(house.ancestral_weapons, vec!["Ice"]);
    assert_eq!(house.cadet_branch_ids, vec![170]);
    assert_eq!(house.sworn_member_ids, vec![2, 3]);
}

#[test]
fn test_decode_list_body() {
    let body = json!([
        {
            "url": "https://anapioficeandfire.com/api/characters/1",
            "name": "",
            "gender": "Female",
            "culture": "Braavosi",
            "born": "",
            "died": "",
            "titles": [],
            "aliases": ["The Daughter of the Dusk"],
            "father": "",
            "mother": "",
            "spouse": "",
            "allegiances": [],
            "books": ["https://anapioficeandfire.com/api/books/5"],
            "povBooks": [],
            "tvSeries": [],
            "playedBy": []
        }
    ]);

    let characters: Vec<Character> = serde_json::from_value(body).unwrap();
    assert_eq!(characters.len(), 1);
    assert_eq!(characters[0].aliases, vec!["The Daughter of the Dusk"]);
    assert!(characters[0].book_ids == vec![5]);
}

#[test]
fn test_endpoints() {
    assert_eq!(Book::ENDPOINT, "books");
    assert_eq!(Character::ENDPOINT, "characters");
    assert_eq!(House::ENDPOINT, "houses");
}
