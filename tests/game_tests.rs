use kbo_sim::error::{Rotation, SimError};
use kbo_sim::game::{simulate_game, simulate_half_inning, GameOutcome, Side, INNINGS};
use kbo_sim::model::{
    Batter, BatterPosition, BatterStats, Pitcher, PitcherRole, PitcherStats, Weather,
};
use kbo_sim::load_league;
use kbo_sim::roster::{League, Roster};
use kbo_sim::series::simulate_series;
use rand::rngs::SmallRng;
use rand::SeedableRng;

fn make_batter(name: &str, position: BatterPosition, avg: f64) -> Batter {
    Batter {
        name: name.to_string(),
        team: "Test".to_string(),
        position,
        preferred_weather: Weather::Sunny,
        stats: BatterStats {
            walk_pct: 9.0,
            strikeout_pct: 18.0,
            wrc: 80.0,
            avg,
            at_bats: 400,
            hits: 110,
            singles: 75,
            doubles: 20,
            triples: 3,
            home_runs: 12,
        },
    }
}

fn make_pitcher(name: &str, role: PitcherRole, era: f64) -> Pitcher {
    Pitcher {
        name: name.to_string(),
        team: "Test".to_string(),
        role,
        preferred_weather: Weather::Rainy,
        stats: PitcherStats {
            era,
            walks_per_9: 3.5,
            strikeouts_per_9: 8.0,
        },
    }
}

fn make_roster(team: &str, relievers: usize) -> Roster {
    let mut lineup = vec![make_batter(&format!("{team} C"), BatterPosition::Catcher, 0.270)];
    for i in 0..4 {
        lineup.push(make_batter(
            &format!("{team} IF{i}"),
            BatterPosition::Infielder,
            0.280,
        ));
    }
    for i in 0..3 {
        lineup.push(make_batter(
            &format!("{team} OF{i}"),
            BatterPosition::Outfielder,
            0.290,
        ));
    }
    for i in 0..6 {
        lineup.push(make_batter(
            &format!("{team} B{i}"),
            BatterPosition::Infielder,
            0.250,
        ));
    }
    Roster {
        team_name: team.to_string(),
        lineup,
        starters: (0..5)
            .map(|i| make_pitcher(&format!("{team} SP{i}"), PitcherRole::Starter, 3.5))
            .collect(),
        relievers: (0..relievers)
            .map(|i| make_pitcher(&format!("{team} RP{i}"), PitcherRole::Reliever, 4.0))
            .collect(),
    }
}

#[test]
fn full_rosters_pass_validation() {
    assert_eq!(make_roster("Tigers", 6).validate(), Ok(()));
}

#[test]
fn game_is_deterministic_for_same_seed() {
    let away = make_roster("Tigers", 6);
    let home = make_roster("Lions", 6);
    let first = simulate_game(&away, &home, Weather::Cloudy, 17).expect("game");
    let second = simulate_game(&away, &home, Weather::Cloudy, 17).expect("game");
    assert_eq!(first.away_score, second.away_score);
    assert_eq!(first.home_score, second.home_score);
    assert_eq!(first.line_score(Side::Away), second.line_score(Side::Away));
    assert_eq!(first.line_score(Side::Home), second.line_score(Side::Home));
}

#[test]
fn game_runs_nine_full_innings() {
    let away = make_roster("Tigers", 6);
    let home = make_roster("Lions", 6);
    let result = simulate_game(&away, &home, Weather::Sunny, 5).expect("game");
    assert_eq!(result.half_innings.len(), 2 * INNINGS as usize);
    let away_line = result.line_score(Side::Away);
    let home_line = result.line_score(Side::Home);
    assert_eq!(away_line.len(), INNINGS as usize);
    assert_eq!(away_line.iter().sum::<u32>(), result.away_score);
    assert_eq!(home_line.iter().sum::<u32>(), result.home_score);
    assert_eq!(
        result.outcome,
        GameOutcome::from_scores(result.away_score, result.home_score)
    );
}

#[test]
fn plate_appearances_account_for_every_run() {
    let away = make_roster("Tigers", 6);
    let home = make_roster("Lions", 6);
    for seed in 0..20 {
        let result = simulate_game(&away, &home, Weather::Rainy, seed).expect("game");
        for half in &result.half_innings {
            let runs: u32 = half.plate_appearances.iter().map(|pa| pa.runs).sum();
            assert_eq!(runs, half.runs);
            assert!(half.plate_appearances.iter().all(|pa| pa.outs_after <= 3));
            let last = half.plate_appearances.last().expect("at least one batter");
            assert!(last.outs_after == 3 || half.plate_appearances.len() == away.lineup.len());
        }
    }
}

#[test]
fn short_lineup_does_not_wrap() {
    let mut away = make_roster("Tigers", 6);
    away.lineup.truncate(2);
    let home = make_roster("Lions", 6);
    for seed in 0..10 {
        let result = simulate_game(&away, &home, Weather::Snowy, seed).expect("game");
        for half in result.half_innings.iter().filter(|h| h.batting == Side::Away) {
            assert!(half.plate_appearances.len() <= 2);
        }
    }
}

#[test]
fn starters_then_relievers_by_inning() {
    let roster = make_roster("Tigers", 6);
    assert_eq!(roster.pitcher_for_inning(1).unwrap().name, "Tigers SP0");
    assert_eq!(roster.pitcher_for_inning(5).unwrap().name, "Tigers SP4");
    assert_eq!(roster.pitcher_for_inning(6).unwrap().name, "Tigers RP5");
    assert_eq!(roster.pitcher_for_inning(9).unwrap().name, "Tigers RP2");
}

#[test]
fn half_inning_uses_rotation_pitcher() {
    let batting = make_roster("Tigers", 6);
    let pitching = make_roster("Lions", 6);
    let mut rng = SmallRng::seed_from_u64(9);
    let half = simulate_half_inning(&batting, &pitching, Side::Away, 7, Weather::Sunny, &mut rng)
        .expect("half inning");
    assert_eq!(half.pitcher, "Lions RP0");
    assert!(half
        .plate_appearances
        .iter()
        .all(|pa| pa.pitcher == "Lions RP0"));
}

#[test]
fn empty_bullpen_fails_entering_sixth() {
    let away = make_roster("Tigers", 6);
    let home = make_roster("Lions", 0);
    let err = simulate_game(&away, &home, Weather::Sunny, 1).unwrap_err();
    assert_eq!(
        err,
        SimError::EmptyRotation {
            team: "Lions".to_string(),
            rotation: Rotation::Relievers,
            inning: 6,
        }
    );
    assert!(err.is_configuration());
}

#[test]
fn empty_lineup_is_rejected_before_first_pitch() {
    let mut away = make_roster("Tigers", 6);
    away.lineup.clear();
    let home = make_roster("Lions", 6);
    let err = simulate_game(&away, &home, Weather::Sunny, 1).unwrap_err();
    assert!(matches!(
        err,
        SimError::RosterIncomplete {
            group: "batters",
            found: 0,
            ..
        }
    ));
}

#[test]
fn validation_reports_short_bullpen() {
    let roster = make_roster("Tigers", 4);
    assert_eq!(
        roster.validate(),
        Err(SimError::RosterIncomplete {
            team: "Tigers".to_string(),
            group: "relievers",
            expected: 6,
            found: 4,
        })
    );
}

#[test]
fn series_counts_every_game() {
    let away = make_roster("Tigers", 6);
    let home = make_roster("Lions", 6);
    let summary = simulate_series(&away, &home, Weather::Cloudy, 40, 7).expect("series");
    assert_eq!(summary.games.len(), 40);
    assert_eq!(summary.away_wins + summary.home_wins + summary.draws, 40);
    let rerun = simulate_series(&away, &home, Weather::Cloudy, 40, 7).expect("series");
    assert_eq!(summary.games, rerun.games);
    assert!((0.0..=1.0).contains(&summary.away_win_rate()));
}

#[test]
fn series_surfaces_configuration_errors() {
    let away = make_roster("Tigers", 0);
    let home = make_roster("Lions", 6);
    assert!(matches!(
        simulate_series(&away, &home, Weather::Sunny, 8, 3),
        Err(SimError::EmptyRotation { .. })
    ));
}

#[test]
fn sample_league_plays_a_game() {
    let path = std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join("data/league.json");
    let file = load_league(&path).expect("sample league");
    let league = League::from_players(file.batters, file.pitchers);
    assert_eq!(league.len(), 3);
    let kia = league.team("KIA").expect("team").rank();
    assert_eq!(kia.validate(), Ok(()));
    let opponents = league.auto_configure("KIA");
    assert_eq!(opponents.len(), 2);
    for opponent in &opponents {
        assert_eq!(opponent.validate(), Ok(()));
        simulate_game(&kia, opponent, Weather::Rainy, 2024).expect("game");
    }
}
