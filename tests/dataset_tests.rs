//! Shipped dataset tests: metric formatting and rankings.

use country_guesser::{Dataset, Direction};

#[test]
fn test_all_shipped_metrics_higher_wins() {
    let dataset = Dataset::standard();
    assert!(dataset
        .metrics()
        .iter()
        .all(|m| m.direction == Direction::HigherWins));
}

#[test]
fn test_shipped_formats() {
    let dataset = Dataset::standard();
    let japan = dataset.country_by_name("Japan").unwrap();

    let rendered: Vec<(String, String)> = dataset
        .metrics()
        .iter()
        .map(|m| (m.id.clone(), m.format_value(m.value(japan))))
        .collect();

    assert_eq!(
        rendered,
        vec![
            ("population".to_string(), "123,103,479".to_string()),
            ("landArea".to_string(), "364,555 km²".to_string()),
            ("density".to_string(), "338 people/km²".to_string()),
            ("medianAge".to_string(), "49.8".to_string()),
            ("urbanPopulationPercent".to_string(), "93.1%".to_string()),
            ("migrants".to_string(), "140,579".to_string()),
            ("fertilityRate".to_string(), "1.23".to_string()),
            ("yearlyChange".to_string(), "-0.52%".to_string()),
        ]
    );
}

#[test]
fn test_ranking_extremes() {
    let dataset = Dataset::standard();
    let top_and_bottom = |id: &str| {
        let entries = dataset.ranking_for(id).entries();
        (
            entries.first().unwrap().country.clone(),
            entries.last().unwrap().country.clone(),
        )
    };

    assert_eq!(top_and_bottom("landArea"), ("Russia".into(), "South Korea".into()));
    assert_eq!(top_and_bottom("medianAge"), ("Japan".into(), "DR Congo".into()));
    assert_eq!(top_and_bottom("migrants"), ("United States".into(), "Pakistan".into()));
    assert_eq!(top_and_bottom("fertilityRate"), ("DR Congo".into(), "South Korea".into()));
    assert_eq!(top_and_bottom("yearlyChange"), ("DR Congo".into(), "Russia".into()));
}

#[test]
fn test_density_tie_keeps_dataset_order() {
    let dataset = Dataset::standard();
    let table = dataset.ranking_for("density");

    // Canada precedes Australia in the dataset; both have 4 people/km²
    assert_eq!(table.rank_of("Canada"), Some(28));
    assert_eq!(table.rank_of("Australia"), Some(29));
}

#[test]
fn test_rankings_serialize() {
    let dataset = Dataset::standard();
    let json = serde_json::to_value(dataset.ranking_for("population")).unwrap();

    assert_eq!(json["metric_id"], "population");
    assert_eq!(json["entries"][0]["country"], "India");
    assert_eq!(json["entries"][0]["code"], "IN");
}
