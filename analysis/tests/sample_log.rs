use analysis::MatchRecord;
use pretty_assertions::assert_eq;
use tracing_test::traced_test;

fn record(total_kills: usize, scores: &[(&str, i64)], causes: &[(&str, usize)]) -> MatchRecord {
    MatchRecord {
        total_kills,
        player_scores: scores.iter().map(|(n, s)| (n.to_string(), *s)).collect(),
        cause_of_death: causes.iter().map(|(c, n)| (c.to_string(), *n)).collect(),
    }
}

#[test]
#[traced_test]
fn sample_log() {
    let content = include_str!("../../testfiles/qgames_sample.log");

    let result = analysis::parse_str(content);

    let expected = vec![
        record(
            11,
            &[("Isgalamido", -9), ("Dono da Bola", 0), ("Mocinha", 0)],
            &[
                ("MOD_TRIGGER_HURT", 7),
                ("MOD_ROCKET_SPLASH", 3),
                ("MOD_FALLING", 1),
            ],
        ),
        record(
            4,
            &[
                ("Isgalamido", 1),
                ("Mocinha", 0),
                ("Dono da Bola", -1),
                ("Zeh", -2),
            ],
            &[
                ("MOD_TRIGGER_HURT", 2),
                ("MOD_ROCKET", 1),
                ("MOD_FALLING", 1),
            ],
        ),
        record(
            4,
            &[("Oootsimo", 1), ("Assasinu Credi", 1)],
            &[
                ("MOD_RAILGUN", 2),
                ("MOD_ROCKET_SPLASH", 1),
                ("MOD_TRIGGER_HURT", 1),
            ],
        ),
    ];

    assert_eq!(expected, result);
    assert!(logs_contain("InitGame while a match is running"));
}

#[test]
fn kills_match_causes_of_death() {
    let content = include_str!("../../testfiles/qgames_sample.log");

    for record in analysis::parse_str(content) {
        assert!(record.kills_are_consistent(), "{:?}", record);
    }
}
