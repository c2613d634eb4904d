use common::match_report::{MatchReport, RankedEntry};
use pretty_assertions::assert_eq;
use reporter::report;

fn record(total_kills: usize, scores: &[(&str, i64)], causes: &[(&str, usize)]) -> analysis::MatchRecord {
    analysis::MatchRecord {
        total_kills,
        player_scores: scores.iter().map(|(n, s)| (n.to_string(), *s)).collect(),
        cause_of_death: causes.iter().map(|(c, n)| (c.to_string(), *n)).collect(),
    }
}

fn entry<V>(name: &str, value: V) -> RankedEntry<V> {
    RankedEntry {
        name: name.to_owned(),
        value,
    }
}

#[test]
fn build_reports_ranks_and_numbers() {
    let records = vec![
        record(
            4,
            &[("Zeh", -2), ("Mocinha", 0), ("Isgalamido", 1), ("Dono da Bola", -1)],
            &[("MOD_FALLING", 1), ("MOD_TRIGGER_HURT", 2), ("MOD_ROCKET", 1)],
        ),
        record(0, &[], &[]),
    ];

    let reports = report::build_reports(&records);

    assert_eq!(
        vec![
            MatchReport {
                number: 1,
                total_kills: 4,
                scores: vec![
                    entry("Isgalamido", 1),
                    entry("Mocinha", 0),
                    entry("Dono da Bola", -1),
                    entry("Zeh", -2),
                ],
                causes_of_death: vec![
                    entry("MOD_TRIGGER_HURT", 2),
                    entry("MOD_FALLING", 1),
                    entry("MOD_ROCKET", 1),
                ],
            },
            MatchReport {
                number: 2,
                total_kills: 0,
                scores: Vec::new(),
                causes_of_death: Vec::new(),
            },
        ],
        reports
    );
}

#[test]
fn text_layout() {
    let reports = report::build_reports(&[record(
        1,
        &[("Zeh", 1), ("Dono da Bola", 0)],
        &[("MOD_ROCKET_SPLASH", 1)],
    )]);

    let expected = "\
---------------------------------------
Matches kill report:
---------------------------------------
Match 1:
Total Kills: 1
Scores:
- Zeh: 1
- Dono da Bola: 0
Cause of Death:
- MOD_ROCKET_SPLASH: 1
---------------------------------------
";

    assert_eq!(expected, report::render_text(&reports));
}

#[test]
fn text_without_matches() {
    let expected = "\
---------------------------------------
Matches kill report:
---------------------------------------
";

    assert_eq!(expected, report::render_text(&[]));
}

#[test]
fn json_layout() {
    let reports = report::build_reports(&[record(
        1,
        &[("Dono da Bola", -1)],
        &[("MOD_TRIGGER_HURT", 1)],
    )]);

    let rendered = report::render_json(&reports).unwrap();
    let value: serde_json::Value = serde_json::from_str(&rendered).unwrap();

    assert_eq!(
        serde_json::json!([{
            "number": 1,
            "total_kills": 1,
            "scores": [{ "name": "Dono da Bola", "value": -1 }],
            "causes_of_death": [{ "name": "MOD_TRIGGER_HURT", "value": 1 }],
        }]),
        value
    );
}
