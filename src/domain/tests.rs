//! Tests for domain module.

use super::*;
use super::scheme::{CASE_SCHEMES, DEATH_SCHEMES};

fn id(index: u32) -> AgeGroupId {
    AgeGroupId::new(index).unwrap()
}

// ==================== Age group identifier tests ====================

#[test]
fn test_age_group_id_parse() {
    let parsed: AgeGroupId = "age_group_3".parse().unwrap();
    assert_eq!(parsed.index(), 3);
    assert_eq!(parsed.to_string(), "age_group_3");
}

#[test]
fn test_age_group_id_rejects_bad_patterns() {
    for bad in [
        "age_group_0",
        "age_group_",
        "age_group_01",
        "age_group_-1",
        "age_group_+2",
        "age_group_1a",
        "Age_Group_1",
        "group_1",
        "",
    ] {
        let result = bad.parse::<AgeGroupId>();
        assert!(result.is_err(), "expected `{}` to be rejected", bad);
    }
}

#[test]
fn test_age_group_id_error_message() {
    let err = "cohort_1".parse::<AgeGroupId>().unwrap_err();
    assert!(err.to_string().contains("invalid age group identifier `cohort_1`"));
}

#[test]
fn test_age_group_id_new_zero() {
    assert!(AgeGroupId::new(0).is_none());
}

#[test]
fn test_age_group_id_orders_numerically() {
    let mut ids: Vec<AgeGroupId> = ["age_group_10", "age_group_2", "age_group_9"]
        .iter()
        .map(|s| s.parse().unwrap())
        .collect();
    ids.sort();
    let names: Vec<String> = ids.iter().map(ToString::to_string).collect();
    assert_eq!(names, vec!["age_group_2", "age_group_9", "age_group_10"]);
}

// ==================== Bracket counts tests ====================

#[test]
fn test_bracket_counts_with_sentinels() {
    let counts = BracketCounts::with_sentinels(["0-18", "19-64", "65+"]);
    assert_eq!(counts.len(), 3);
    assert!(counts.iter().all(|(_, c)| c == SENTINEL));
    assert!(!counts.is_populated());
    assert_eq!(counts.total(), None);
}

#[test]
fn test_bracket_counts_insert_keeps_position() {
    let mut counts = BracketCounts::with_sentinels(["a", "b", "c"]);
    assert_eq!(counts.insert("b", 7), Some(SENTINEL));
    assert_eq!(counts.insert("d", 1), None);

    let labels: Vec<&str> = counts.labels().collect();
    assert_eq!(labels, vec!["a", "b", "c", "d"]);
    assert_eq!(counts.get("b"), Some(7));
    assert_eq!(counts.get("missing"), None);
}

#[test]
fn test_bracket_counts_total_when_populated() {
    let mut counts = BracketCounts::new();
    counts.insert("Under 60", 1);
    counts.insert("60+", 4);
    assert!(counts.is_populated());
    assert_eq!(counts.total(), Some(5));
}

#[test]
fn test_bracket_counts_preserve_json_order() {
    let json = r#"{"90+": -1, "0 to 19": 3, "20-29": 0}"#;
    let counts: BracketCounts = serde_json::from_str(json).unwrap();
    let labels: Vec<&str> = counts.labels().collect();
    assert_eq!(labels, vec!["90+", "0 to 19", "20-29"]);

    let out = serde_json::to_string(&counts).unwrap();
    assert_eq!(out, r#"{"90+":-1,"0 to 19":3,"20-29":0}"#);
}

#[test]
fn test_bracket_counts_duplicate_label_rejected() {
    let json = r#"{"65+": -1, "65+": 2}"#;
    let err = serde_json::from_str::<BracketCounts>(json).unwrap_err();
    assert!(err.to_string().contains("duplicate bracket label `65+`"));
}

#[test]
fn test_bracket_counts_non_integer_rejected() {
    let json = r#"{"65+": "many"}"#;
    assert!(serde_json::from_str::<BracketCounts>(json).is_err());
}

// ==================== Scheme tests ====================

#[test]
fn test_scheme_tables_are_numbered_in_order() {
    for (i, s) in CASE_SCHEMES.iter().enumerate() {
        assert_eq!(s.id.index() as usize, i + 1);
        assert_eq!(s.measure, Measure::Cases);
    }
    for (i, s) in DEATH_SCHEMES.iter().enumerate() {
        assert_eq!(s.id.index() as usize, i + 1);
        assert_eq!(s.measure, Measure::Deaths);
    }
}

#[test]
fn test_scheme_lookup_case_insensitive() {
    let scheme = AgeScheme::lookup("  contra costa ", Measure::Cases).unwrap();
    assert_eq!(scheme.id, id(5));
    assert_eq!(scheme.brackets.len(), 5);
}

#[test]
fn test_scheme_lookup_deaths_subset() {
    assert_eq!(AgeScheme::lookup("San Francisco", Measure::Deaths).unwrap().id, id(1));
    assert_eq!(AgeScheme::lookup("Santa Clara", Measure::Deaths).unwrap().id, id(2));
    assert_eq!(AgeScheme::lookup("Marin", Measure::Deaths).unwrap().id, id(3));
    assert_eq!(AgeScheme::lookup("San Mateo", Measure::Deaths).unwrap().id, id(4));
    assert!(AgeScheme::lookup("Sonoma", Measure::Deaths).is_none());
    assert!(AgeScheme::lookup("Alameda", Measure::Deaths).is_none());
}

#[test]
fn test_scheme_every_county_has_case_scheme() {
    for county in [
        "San Francisco",
        "Santa Clara",
        "Alameda",
        "Marin",
        "Solano",
        "Sonoma",
        "Napa",
        "San Mateo",
        "Contra Costa",
    ] {
        assert!(
            AgeScheme::lookup(county, Measure::Cases).is_some(),
            "no case scheme for {}",
            county
        );
    }
}

#[test]
fn test_measure_display() {
    assert_eq!(Measure::Cases.to_string(), "cases");
    assert_eq!(Measure::Deaths.to_string(), "deaths");
}

// ==================== Template tests ====================

#[test]
fn test_blank_template_shape() {
    let template = Template::blank("County Name");
    assert_eq!(template.len(), 1);

    let block = template.county("County Name").unwrap();
    let cases: Vec<String> = block.data.cases.keys().map(ToString::to_string).collect();
    assert_eq!(
        cases,
        vec!["age_group_1", "age_group_2", "age_group_3", "age_group_4", "age_group_5"]
    );

    let deaths = block.data.deaths.as_ref().unwrap();
    let deaths: Vec<String> = deaths.keys().map(ToString::to_string).collect();
    assert_eq!(
        deaths,
        vec!["age_group_1", "age_group_2", "age_group_3", "age_group_4"]
    );
}

#[test]
fn test_blank_template_all_sentinels() {
    let template = Template::blank("X");
    let block = template.county("X").unwrap();
    let all_groups = block
        .data
        .cases
        .values()
        .chain(block.data.deaths.as_ref().unwrap().values());
    for counts in all_groups {
        assert!(counts.iter().all(|(_, c)| c == SENTINEL));
    }
}

#[test]
fn test_for_county_with_deaths() {
    let template = Template::for_county("San Mateo").unwrap();
    let block = template.county("San Mateo").unwrap();

    assert_eq!(block.data.cases.len(), 1);
    assert!(block.data.cases.contains_key(&id(4)));
    let deaths = block.data.deaths.as_ref().unwrap();
    assert_eq!(deaths.len(), 1);
    assert_eq!(deaths[&id(4)].labels().next(), Some("0 to 19"));
}

#[test]
fn test_for_county_without_deaths() {
    let template = Template::for_county("Napa").unwrap();
    let block = template.county("Napa").unwrap();
    assert!(block.data.cases.contains_key(&id(3)));
    assert!(block.data.deaths.is_none());

    let json = serde_json::to_string(&template).unwrap();
    assert!(!json.contains("deaths"));
}

#[test]
fn test_for_county_unknown() {
    let err = Template::for_county("Los Angeles").unwrap_err();
    assert!(matches!(err, DomainError::UnknownCounty(ref c) if c == "Los Angeles"));
}

#[test]
fn test_blank_trims_county_name() {
    let template = Template::blank("  Marin ");
    assert!(template.county("Marin").is_some());
    assert!(template.county("  Marin ").is_none());
}

#[test]
fn test_from_counties_last_block_wins() {
    let marin = Template::for_county("Marin").unwrap();
    let marin_block = marin.county("Marin").unwrap().clone();

    let template = Template::from_counties([
        ("Napa".to_string(), CountyBlock::default()),
        ("Marin".to_string(), CountyBlock::default()),
        ("Marin".to_string(), marin_block.clone()),
    ]);

    assert_eq!(template.len(), 2);
    assert_eq!(template.county("Marin"), Some(&marin_block));
    let names: Vec<&str> = template.counties().map(|(n, _)| n).collect();
    assert_eq!(names, vec!["Marin", "Napa"]);
}

#[test]
fn test_template_insert_replaces() {
    let mut template = Template::default();
    assert!(template.is_empty());
    assert!(template.insert("A", CountyBlock::default()).is_none());
    assert!(template.insert("A", CountyBlock::default()).is_some());
    assert_eq!(template.len(), 1);
    let names: Vec<&str> = template.counties().map(|(n, _)| n).collect();
    assert_eq!(names, vec!["A"]);
}

#[test]
fn test_county_block_rejects_unknown_fields() {
    let json = r#"{"data": {"cases": {}, "hospitalizations": {}}}"#;
    assert!(serde_json::from_str::<CountyBlock>(json).is_err());
}

#[test]
fn test_county_block_rejects_bad_age_group_key() {
    let json = r#"{"data": {"cases": {"group_one": {"0-18": -1}}}}"#;
    let err = serde_json::from_str::<CountyBlock>(json).unwrap_err();
    assert!(err.to_string().contains("invalid age group identifier"));
}

// ==================== Record tests ====================

#[test]
fn test_records_skip_sentinels() {
    let mut template = Template::for_county("Marin").unwrap();
    let mut block = template.county("Marin").unwrap().clone();
    let counts = block.data.cases.get_mut(&id(2)).unwrap();
    counts.insert("0-18", 12);
    counts.insert("65+", 30);
    template.insert("Marin", block);

    let records = template
        .county("Marin")
        .unwrap()
        .records("Marin", Measure::Cases, id(2))
        .unwrap();
    assert_eq!(
        records,
        vec![
            AgeGroupRecord { group: "0-18".into(), raw_count: 12 },
            AgeGroupRecord { group: "65+".into(), raw_count: 30 },
        ]
    );
}

#[test]
fn test_records_missing_group() {
    let template = Template::for_county("Napa").unwrap();
    let block = template.county("Napa").unwrap();

    let err = block.records("Napa", Measure::Deaths, id(1)).unwrap_err();
    assert!(err.to_string().contains("county `Napa` has no deaths entry for age_group_1"));

    assert!(block.records("Napa", Measure::Cases, id(1)).is_err());
}

#[test]
fn test_record_serialization_shape() {
    let record = AgeGroupRecord { group: "90+".into(), raw_count: 2 };
    let json = serde_json::to_value(&record).unwrap();
    assert_eq!(json, serde_json::json!({"group": "90+", "raw_count": 2}));
}
