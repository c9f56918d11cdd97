//! Integration tests for place extraction
//!
//! These tests run both extractors against the geonames excerpts in
//! `tests/fixtures` and cover:
//! - Strict and aggressive matching
//! - Country filtering
//! - Country mention ranking
//! - Sharing one index across threads

use std::path::PathBuf;
use std::sync::{Arc, OnceLock};
use std::thread;

use geotext::gazetteer::normalize;
use geotext::prelude::*;

fn fixtures_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

fn index() -> &'static GazetteerIndex {
    static INDEX: OnceLock<GazetteerIndex> = OnceLock::new();
    INDEX.get_or_init(|| {
        let config = ConfigBuilder::new()
            .with_data_dir(fixtures_dir())
            .build()
            .expect("Fixture config should be valid");
        GazetteerIndex::load(&config.gazetteer).expect("Fixtures should load")
    })
}

fn strict(text: &str) -> GeoText {
    GeoText::new(index(), text)
}

fn aggressive(text: &str) -> GeoText {
    GeoText::aggressive(index(), text)
}

/// Whether `inner` is a contiguous run of the tokens of `outer`.
fn contains_tokens(outer: &str, inner: &str) -> bool {
    format!(" {} ", outer).contains(&format!(" {} ", inner))
}

#[test]
fn test_cities_and_country_mentions() {
    let places = strict("I would like to visit Lima, Dublin and Moscow (Russia).");

    assert_eq!(places.cities(), ["Lima", "Dublin", "Moscow"]);
    assert_eq!(places.countries(), ["Russia"]);
    assert!(places.admin_divisions().is_empty());
    assert_eq!(
        places.country_mentions().to_pairs(),
        vec![("RU", 2), ("PE", 1), ("IE", 1)]
    );
}

#[test]
fn test_georgia_is_attributed_by_context() {
    let places = strict("Atlanta, Georgia");
    assert_eq!(places.countries(), ["Georgia"]);
    assert_eq!(places.admin_divisions(), ["Georgia"]);
    assert_eq!(
        places.country_mentions().to_pairs(),
        vec![("US", 2), ("GE", 1)]
    );

    let places = strict("Tbilisi, Georgia");
    assert_eq!(
        places.country_mentions().to_pairs(),
        vec![("GE", 2), ("US", 1)]
    );
}

#[test]
fn test_tie_goes_to_larger_population() {
    let places = strict("Georgia");
    assert_eq!(
        places.country_mentions().to_pairs(),
        vec![("US", 1), ("GE", 1)]
    );
}

#[test]
fn test_city_and_state_with_same_name_count_once() {
    let places = strict("New York, New York, New York");

    assert_eq!(places.cities(), ["New York", "New York", "New York"]);
    assert_eq!(places.admin_divisions(), ["New York", "New York", "New York"]);
    assert_eq!(places.country_mentions().to_pairs(), vec![("US", 3)]);
}

#[test]
fn test_born_raised_and_die_in_new_york() {
    let places = strict("I was born in New York, raised in New York, and will die in New York");

    assert_eq!(places.cities(), ["New York", "New York", "New York"]);
    assert_eq!(places.admin_divisions(), ["New York", "New York", "New York"]);
    assert_eq!(places.country_mentions().to_pairs(), vec![("US", 3)]);
}

#[test]
fn test_repeated_country_counts_every_time() {
    let places = strict("China, China, China");
    assert_eq!(places.countries(), ["China", "China", "China"]);
    assert_eq!(places.country_mentions().to_pairs(), vec![("CN", 3)]);

    let places = aggressive("China China China");
    assert_eq!(places.countries(), ["China", "China", "China"]);
    assert_eq!(places.country_mentions().to_pairs(), vec![("CN", 3)]);
}

#[test]
fn test_strict_countries_and_admin_divisions() {
    let places = strict("That was fun, Japan, Italy, and Germany.");
    assert_eq!(places.countries(), ["Japan", "Italy", "Germany"]);

    let places = strict("The sun is nice in Florida and the snow is nice in Hokkaido");
    assert_eq!(places.admin_divisions(), ["Florida", "Hokkaido"]);
    assert!(places.cities().is_empty());
}

#[test]
fn test_strict_linking_article() {
    let places = strict("Rio de Janeiro y Havana");
    assert_eq!(places.cities(), ["Rio de Janeiro", "Havana"]);
    assert_eq!(places.admin_divisions(), ["Rio de Janeiro"]);
}

#[test]
fn test_strict_accented_and_alias_names() {
    let places = strict("Viajei para São Paulo, Barueri, Carapicuíba, Salvador e Santos.");
    assert_eq!(
        places.cities(),
        ["São Paulo", "Barueri", "Carapicuíba", "Salvador", "Santos"]
    );
    assert_eq!(places.admin_divisions(), ["São Paulo"]);
    assert_eq!(places.country_mentions().to_pairs(), vec![("BR", 5)]);

    let places = strict("Floripa! Istanbul! Bukarest!");
    assert_eq!(places.cities(), ["Floripa", "Istanbul", "Bukarest"]);
}

#[test]
fn test_strict_never_reports_nationalities() {
    let places = strict("Japanese, French and Chinese food");
    assert!(places.nationalities().is_empty());
    assert!(places.country_mentions().is_empty());
}

#[test]
fn test_country_filter() {
    let options = ExtractOptions::strict().with_country("BR");
    let places = GeoText::with_options(index(), "Rio de Janeiro y Havana", &options);

    assert_eq!(places.cities(), ["Rio de Janeiro"]);
    assert_eq!(places.country_mentions().to_pairs(), vec![("BR", 1)]);
}

#[test]
fn test_country_filter_ignores_case_and_keeps_countries() {
    let options = ExtractOptions::strict().with_country("br");
    let places = GeoText::with_options(index(), "Havana, Cuba and Rio de Janeiro", &options);
    assert_eq!(places.cities(), ["Rio de Janeiro"]);
    assert_eq!(places.countries(), ["Cuba"]);

    let options = ExtractOptions::strict().with_country("ZZ");
    let places = GeoText::with_options(index(), "Havana, Cuba and Rio de Janeiro", &options);
    assert!(places.cities().is_empty());
    assert!(places.admin_divisions().is_empty());
    assert_eq!(places.countries(), ["Cuba"]);
}

#[test]
fn test_aggressive_disambiguating_suffixes() {
    let places = aggressive("I went to school in Essex, UK, but now I live in Essex, MD.");

    assert_eq!(places.cities(), ["Essex MD"]);
    assert_eq!(places.admin_divisions(), ["Essex UK"]);
    assert!(places.countries().is_empty());
    assert_eq!(
        places.country_mentions().to_pairs(),
        vec![("GB", 1), ("US", 1)]
    );

    let places = aggressive("Cambridge, MA is not Cambridge, UK");
    assert_eq!(places.cities(), ["Cambridge MA", "Cambridge UK"]);
    assert!(places.countries().is_empty());
}

#[test]
fn test_aggressive_prefers_longest_match() {
    let places = aggressive("These should only be cities: San Francisco, New York City");
    assert_eq!(places.cities(), ["San Francisco", "New York City"]);
    assert!(places.admin_divisions().is_empty());
}

#[test]
fn test_aggressive_overlapping_matches() {
    let places = aggressive("I am not sure what city you mean by San Francisco Beltrao");
    assert_eq!(places.cities(), ["San Francisco", "Francisco Beltrao"]);

    let places = aggressive("I am not sure what city you mean by La Isla Vista");
    assert_eq!(places.cities(), ["La Isla", "Isla Vista"]);
}

#[test]
fn test_aggressive_ignores_case_and_punctuation() {
    let places = aggressive("Washington, D.C., paris? INDIA, 日本, and București!");

    assert_eq!(places.cities(), ["Washington DC", "paris", "București"]);
    assert_eq!(places.countries(), ["INDIA", "日本"]);
}

#[test]
fn test_aggressive_nationalities() {
    let places = aggressive(
        "Japanese people like anime. French people often drink wine. \
         Chinese people enjoy fireworks.",
    );
    assert_eq!(places.nationalities(), ["Japanese", "French", "Chinese"]);
    assert_eq!(places.country_mentions().len(), 3);
}

#[test]
fn test_aggressive_short_lowercase_tokens_are_noise() {
    let places = aggressive("I love LA but la vida is elsewhere");
    assert_eq!(places.cities(), ["LA"]);
}

#[test]
fn test_blacklisted_names_are_never_matched() {
    let index = index();
    assert!(index.admin_divisions().get("Central").is_some());
    assert!(index.lookup("Central").is_none());

    let places = aggressive("Central heating in Florida");
    assert_eq!(places.admin_divisions(), ["Florida"]);
    assert!(strict("Central").matches().is_empty());
}

#[test]
fn test_unknown_text_yields_nothing() {
    for text in ["", "   ", "nothing to see here", "!!! ??? ..."] {
        assert!(strict(text).matches().is_empty());
        assert!(aggressive(text).matches().is_empty());
        assert!(aggressive(text).country_mentions().is_empty());
    }
}

const SAMPLE_TEXTS: &[&str] = &[
    "I would like to visit Lima, Dublin and Moscow (Russia).",
    "I went to school in Essex, UK, but now I live in Essex, MD.",
    "These should only be cities: San Francisco, New York City",
    "I am not sure what city you mean by La Isla Vista",
    "Washington, D.C., paris? INDIA, 日本, and București!",
    "Viajei para São Paulo, Barueri, Carapicuíba, Salvador e Santos.",
];

#[test]
fn test_extraction_is_repeatable() {
    for text in SAMPLE_TEXTS {
        assert_eq!(strict(text), strict(text));
        assert_eq!(aggressive(text), aggressive(text));
    }
}

#[test]
fn test_matches_are_verbatim_substrings() {
    for text in SAMPLE_TEXTS {
        let normalized = normalize(text);
        let places = aggressive(text);
        for category in Category::ALL {
            for name in places.matches().bucket(category) {
                assert!(
                    normalized.contains(name.as_str()),
                    "{name:?} not found in {normalized:?}"
                );
            }
        }

        let places = strict(text);
        for category in Category::ALL {
            for name in places.matches().bucket(category) {
                assert!(text.contains(name.as_str()), "{name:?} not found in {text:?}");
            }
        }
    }
}

#[test]
fn test_aggressive_matches_do_not_nest() {
    for text in SAMPLE_TEXTS {
        let places = aggressive(text);
        let found: Vec<&String> = Category::ALL
            .into_iter()
            .flat_map(|category| places.matches().bucket(category))
            .collect();

        for outer in &found {
            for inner in &found {
                if outer != inner {
                    assert!(
                        !contains_tokens(outer, inner),
                        "{inner:?} nested in {outer:?} for {text:?}"
                    );
                }
            }
        }
    }
}

#[test]
fn test_index_shared_across_threads() {
    let config = ConfigBuilder::new()
        .with_data_dir(fixtures_dir())
        .build()
        .expect("Fixture config should be valid");
    let index = Arc::new(GazetteerIndex::load(&config.gazetteer).expect("Fixtures should load"));
    let expected = GeoText::aggressive(&index, SAMPLE_TEXTS[1]);

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let index = Arc::clone(&index);
            thread::spawn(move || GeoText::aggressive(&index, SAMPLE_TEXTS[1]))
        })
        .collect();

    for handle in handles {
        let places = handle.join().expect("Extraction thread should not panic");
        assert_eq!(places, expected);
    }
}

#[test]
fn test_json_output() {
    let places = strict("Tbilisi, Georgia");
    let json = places.to_json().expect("Should serialize");

    assert!(json.contains(r#""cities":["Tbilisi"]"#));
    assert!(json.contains(r#""countries":["Georgia"]"#));
    assert!(json.contains(r#""country_mentions":{"GE":2,"US":1}"#));
}

#[test]
fn test_options_from_config() {
    let config = ConfigBuilder::new()
        .with_data_dir(fixtures_dir())
        .aggressive()
        .with_country("US")
        .build()
        .expect("Config should be valid");
    let options = ExtractOptions::from(&config.extraction);

    let places = GeoText::with_options(index(), "essex md and essex uk", &options);
    assert_eq!(places.cities(), ["essex md"]);
    assert!(places.admin_divisions().is_empty());
}

#[test]
fn test_init_from_config() {
    let config = ConfigBuilder::new()
        .with_data_dir(fixtures_dir())
        .build()
        .expect("Config should be valid");
    let index = geotext::init(config).expect("Fixtures should load");

    let stats = index.stats();
    assert_eq!(stats.nationalities, 11);
    assert!(stats.countries >= 19);
    assert!(stats.names > stats.cities);

    let places = GeoText::new(&index, "Atlanta");
    assert_eq!(places.cities(), ["Atlanta"]);
}

#[test]
fn test_city_patches_from_config() {
    let config = ConfigBuilder::new()
        .with_data_dir(fixtures_dir())
        .with_city_patches("citypatches.txt")
        .build()
        .expect("Config should be valid");
    let index = GazetteerIndex::load(&config.gazetteer).expect("Fixtures should load");

    // Without patches the bare name resolves to the last geonames row (US)
    assert_eq!(
        self::index().cities().get("Cambridge").map(|r| r.country_code.as_str()),
        Some("US")
    );
    assert_eq!(
        index.cities().get("Cambridge").map(|r| r.country_code.as_str()),
        Some("GB")
    );

    let places = GeoText::new(&index, "Springfield and Cambridge");
    assert_eq!(places.cities(), ["Springfield", "Cambridge"]);
    assert_eq!(
        places.country_mentions().to_pairs(),
        vec![("GB", 1), ("US", 1)]
    );
}

#[test]
fn test_missing_table_is_a_load_error() {
    let config = ConfigBuilder::new()
        .with_data_dir(fixtures_dir())
        .with_cities_file("cities500.txt")
        .build()
        .expect("Config should be valid");

    let err = GazetteerIndex::load(&config.gazetteer).expect_err("Load should fail");
    assert!(matches!(err, DataLoadError::Io { .. }));
    assert!(err.to_string().contains("cities500.txt"));
}
