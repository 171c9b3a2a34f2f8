use crate::error::SimError;
use crate::game::{simulate_game, GameOutcome};
use crate::model::Weather;
use crate::roster::Roster;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;
use serde::Serialize;

/// Final score of one game in a batch.
#[derive(Clone, Copy, Debug, Eq, PartialEq, Serialize)]
pub struct GameScore {
    pub game: usize,
    pub seed: u64,
    pub away: u32,
    pub home: u32,
    pub outcome: GameOutcome,
}

#[derive(Clone, Debug, Serialize)]
pub struct SeriesSummary {
    pub away_team: String,
    pub home_team: String,
    pub weather: Weather,
    pub away_wins: usize,
    pub home_wins: usize,
    pub draws: usize,
    pub avg_away_runs: f64,
    pub avg_home_runs: f64,
    pub games: Vec<GameScore>,
}

impl SeriesSummary {
    pub fn away_win_rate(&self) -> f64 {
        if self.games.is_empty() {
            return 0.0;
        }
        (self.away_wins as f64 + 0.5 * self.draws as f64) / self.games.len() as f64
    }
}

/// Plays `games` independent games of the same matchup in parallel. Each
/// game draws its own seed from a generator seeded with `seed`, so results
/// do not depend on thread scheduling.
pub fn simulate_series(
    away: &Roster,
    home: &Roster,
    weather: Weather,
    games: usize,
    seed: u64,
) -> Result<SeriesSummary, SimError> {
    let mut seeder = SmallRng::seed_from_u64(seed);
    let seeds: Vec<u64> = (0..games).map(|_| seeder.gen()).collect();
    let scores: Vec<GameScore> = seeds
        .par_iter()
        .enumerate()
        .map(|(game, game_seed)| {
            let result = simulate_game(away, home, weather, *game_seed)?;
            Ok(GameScore {
                game,
                seed: *game_seed,
                away: result.away_score,
                home: result.home_score,
                outcome: result.outcome,
            })
        })
        .collect::<Result<Vec<_>, SimError>>()?;

    let count = |outcome: GameOutcome| scores.iter().filter(|s| s.outcome == outcome).count();
    let mean = |runs: fn(&GameScore) -> u32| {
        if scores.is_empty() {
            0.0
        } else {
            scores.iter().map(|s| runs(s) as f64).sum::<f64>() / scores.len() as f64
        }
    };
    Ok(SeriesSummary {
        away_team: away.team_name.clone(),
        home_team: home.team_name.clone(),
        weather,
        away_wins: count(GameOutcome::AwayWins),
        home_wins: count(GameOutcome::HomeWins),
        draws: count(GameOutcome::Draw),
        avg_away_runs: mean(|s| s.away),
        avg_home_runs: mean(|s| s.home),
        games: scores,
    })
}

pub fn write_csv(summary: &SeriesSummary, path: &std::path::Path) -> anyhow::Result<()> {
    let mut out = String::from("game,seed,away,home,outcome\n");
    for score in &summary.games {
        let outcome = match score.outcome {
            GameOutcome::AwayWins => "away",
            GameOutcome::HomeWins => "home",
            GameOutcome::Draw => "draw",
        };
        out.push_str(&format!(
            "{},{},{},{},{outcome}\n",
            score.game + 1,
            score.seed,
            score.away,
            score.home
        ));
    }
    std::fs::write(path, out)?;
    Ok(())
}
