//! Team pools, roster validation and stat-ranked roster construction.

use crate::error::{Rotation, SimError};
use crate::model::{Batter, BatterPosition, Pitcher, PitcherRole, RosterSelection};
use std::collections::{BTreeMap, HashSet};

pub const CATCHERS: usize = 1;
pub const INFIELDERS: usize = 4;
pub const OUTFIELDERS: usize = 3;
pub const BENCH: usize = 6;
pub const LINEUP_SIZE: usize = CATCHERS + INFIELDERS + OUTFIELDERS + BENCH;
pub const STARTERS: usize = 5;
pub const RELIEVERS: usize = 6;

/// Number of innings covered by the starting rotation.
pub const STARTER_INNINGS: u32 = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct Roster {
    pub team_name: String,
    pub lineup: Vec<Batter>,
    pub starters: Vec<Pitcher>,
    pub relievers: Vec<Pitcher>,
}

impl Roster {
    /// Pitcher on the mound for `inning` (1-based). Starters cover the first
    /// five innings, relievers the rest.
    pub fn pitcher_for_inning(&self, inning: u32) -> Result<&Pitcher, SimError> {
        let (staff, rotation) = if inning <= STARTER_INNINGS {
            (&self.starters, Rotation::Starters)
        } else {
            (&self.relievers, Rotation::Relievers)
        };
        if staff.is_empty() {
            return Err(SimError::EmptyRotation {
                team: self.team_name.clone(),
                rotation,
                inning,
            });
        }
        let idx = (inning.saturating_sub(1) as usize) % staff.len();
        Ok(&staff[idx])
    }

    /// Minimum needed to start a game. Reliever coverage is checked when
    /// the sixth inning arrives.
    pub fn check_playable(&self) -> Result<(), SimError> {
        if self.lineup.is_empty() {
            return Err(self.incomplete("batters", LINEUP_SIZE, 0));
        }
        if self.starters.is_empty() {
            return Err(self.incomplete("starters", STARTERS, 0));
        }
        Ok(())
    }

    /// Exact sizes and lineup composition of a full roster.
    pub fn validate(&self) -> Result<(), SimError> {
        if self.lineup.len() != LINEUP_SIZE {
            return Err(self.incomplete("batters", LINEUP_SIZE, self.lineup.len()));
        }
        let fielders = &self.lineup[..CATCHERS + INFIELDERS + OUTFIELDERS];
        for (position, expected, group) in [
            (BatterPosition::Catcher, CATCHERS, "catchers"),
            (BatterPosition::Infielder, INFIELDERS, "infielders"),
            (BatterPosition::Outfielder, OUTFIELDERS, "outfielders"),
        ] {
            let found = fielders.iter().filter(|b| b.position == position).count();
            if found != expected {
                return Err(self.incomplete(group, expected, found));
            }
        }
        if self.starters.len() != STARTERS {
            return Err(self.incomplete("starters", STARTERS, self.starters.len()));
        }
        if self.relievers.len() != RELIEVERS {
            return Err(self.incomplete("relievers", RELIEVERS, self.relievers.len()));
        }
        Ok(())
    }

    fn incomplete(&self, group: &'static str, expected: usize, found: usize) -> SimError {
        SimError::RosterIncomplete {
            team: self.team_name.clone(),
            group,
            expected,
            found,
        }
    }

    /// Builds a roster from hand-picked names, checking every slot against
    /// the team pool.
    pub fn from_selection(pool: &TeamPool, selection: &RosterSelection) -> Result<Roster, SimError> {
        let team = pool.team_name.clone();
        let mut seen = HashSet::new();
        let mut claim = |name: &str| -> Result<(), SimError> {
            if seen.insert(name.to_string()) {
                Ok(())
            } else {
                Err(SimError::DuplicatePlayer {
                    team: team.clone(),
                    name: name.to_string(),
                })
            }
        };

        let slots: [(&[String], Option<BatterPosition>, usize, &'static str); 4] = [
            (&selection.catcher, Some(BatterPosition::Catcher), CATCHERS, "catcher"),
            (&selection.infielders, Some(BatterPosition::Infielder), INFIELDERS, "infielder"),
            (&selection.outfielders, Some(BatterPosition::Outfielder), OUTFIELDERS, "outfielder"),
            (&selection.bench, None, BENCH, "bench"),
        ];
        let mut lineup = Vec::with_capacity(LINEUP_SIZE);
        for (names, position, expected, slot) in slots {
            if names.len() != expected {
                return Err(SimError::RosterIncomplete {
                    team: team.clone(),
                    group: slot,
                    expected,
                    found: names.len(),
                });
            }
            for name in names {
                let batter = pool.batter(name)?;
                if position.is_some_and(|p| p != batter.position) {
                    return Err(SimError::PositionMismatch {
                        team: team.clone(),
                        name: name.clone(),
                        slot,
                    });
                }
                claim(name)?;
                lineup.push(batter.clone());
            }
        }

        let mut staff = |names: &[String], role: PitcherRole, expected: usize| {
            if names.len() != expected {
                return Err(SimError::RosterIncomplete {
                    team: team.clone(),
                    group: role.label(),
                    expected,
                    found: names.len(),
                });
            }
            names
                .iter()
                .map(|name| -> Result<Pitcher, SimError> {
                    let pitcher = pool.pitcher(name)?;
                    if pitcher.role != role {
                        return Err(SimError::PositionMismatch {
                            team: team.clone(),
                            name: name.clone(),
                            slot: role.label(),
                        });
                    }
                    claim(name)?;
                    Ok(pitcher.clone())
                })
                .collect::<Result<Vec<_>, _>>()
        };
        let starters = staff(&selection.starters, PitcherRole::Starter, STARTERS)?;
        let relievers = staff(&selection.relievers, PitcherRole::Reliever, RELIEVERS)?;

        Ok(Roster {
            team_name: pool.team_name.clone(),
            lineup,
            starters,
            relievers,
        })
    }
}

/// Every batter and pitcher on file for one team.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TeamPool {
    pub team_name: String,
    pub batters: Vec<Batter>,
    pub pitchers: Vec<Pitcher>,
}

impl TeamPool {
    fn batter(&self, name: &str) -> Result<&Batter, SimError> {
        self.batters
            .iter()
            .find(|b| b.name == name)
            .ok_or_else(|| self.unknown(name))
    }

    fn pitcher(&self, name: &str) -> Result<&Pitcher, SimError> {
        self.pitchers
            .iter()
            .find(|p| p.name == name)
            .ok_or_else(|| self.unknown(name))
    }

    fn unknown(&self, name: &str) -> SimError {
        SimError::UnknownPlayer {
            team: self.team_name.clone(),
            name: name.to_string(),
        }
    }

    /// Ranks the pool into a roster: best catcher, four infielders and three
    /// outfielders by wRC, six more bats off the bench, then five starters
    /// and six relievers by ERA.
    pub fn rank(&self) -> Roster {
        let mut by_wrc: Vec<&Batter> = self.batters.iter().collect();
        by_wrc.sort_by(|lhs, rhs| rhs.stats.wrc.total_cmp(&lhs.stats.wrc));

        let mut lineup: Vec<Batter> = Vec::with_capacity(LINEUP_SIZE);
        let mut taken = vec![false; by_wrc.len()];
        for (position, count) in [
            (BatterPosition::Catcher, CATCHERS),
            (BatterPosition::Infielder, INFIELDERS),
            (BatterPosition::Outfielder, OUTFIELDERS),
        ] {
            let picks: Vec<usize> = by_wrc
                .iter()
                .enumerate()
                .filter(|(_, b)| b.position == position)
                .map(|(idx, _)| idx)
                .take(count)
                .collect();
            if picks.len() < count {
                log::warn!(
                    "{}: only {} of {} {} available",
                    self.team_name,
                    picks.len(),
                    count,
                    position.label()
                );
            }
            for idx in picks {
                taken[idx] = true;
                lineup.push(by_wrc[idx].clone());
            }
        }
        let bench: Vec<Batter> = by_wrc
            .iter()
            .zip(&taken)
            .filter(|(_, taken)| !**taken)
            .map(|(b, _)| (*b).clone())
            .take(BENCH)
            .collect();
        if bench.len() < BENCH {
            log::warn!("{}: bench short, {} of {}", self.team_name, bench.len(), BENCH);
        }
        lineup.extend(bench);

        let starters = self.best_arms(PitcherRole::Starter, STARTERS, &[]);
        let relievers = self.best_arms(PitcherRole::Reliever, RELIEVERS, &starters);
        if relievers.is_empty() {
            log::warn!("{}: no relievers available", self.team_name);
        } else {
            log::info!(
                "{}: bullpen {:?}",
                self.team_name,
                relievers.iter().map(|p| p.name.as_str()).collect::<Vec<_>>()
            );
        }

        Roster {
            team_name: self.team_name.clone(),
            lineup,
            starters,
            relievers,
        }
    }

    fn best_arms(&self, role: PitcherRole, count: usize, exclude: &[Pitcher]) -> Vec<Pitcher> {
        let mut arms: Vec<&Pitcher> = self
            .pitchers
            .iter()
            .filter(|p| p.role == role && !exclude.contains(p))
            .collect();
        arms.sort_by(|lhs, rhs| lhs.stats.era.total_cmp(&rhs.stats.era));
        arms.into_iter().take(count).cloned().collect()
    }
}

/// Player pools keyed by team name.
#[derive(Debug, Clone, Default)]
pub struct League {
    teams: BTreeMap<String, TeamPool>,
}

impl League {
    /// Groups records by team. Records without a team are skipped, as are
    /// teams missing either batters or pitchers.
    pub fn from_players(batters: Vec<Batter>, pitchers: Vec<Pitcher>) -> Self {
        let mut teams: BTreeMap<String, TeamPool> = BTreeMap::new();
        for mut pitcher in pitchers {
            let team = pitcher.team.trim().to_string();
            if team.is_empty() {
                continue;
            }
            pitcher.team = team.clone();
            teams
                .entry(team.clone())
                .or_insert_with(|| TeamPool {
                    team_name: team,
                    ..Default::default()
                })
                .pitchers
                .push(pitcher);
        }
        for mut batter in batters {
            let team = batter.team.trim().to_string();
            if team.is_empty() {
                continue;
            }
            batter.team = team.clone();
            teams
                .entry(team.clone())
                .or_insert_with(|| TeamPool {
                    team_name: team,
                    ..Default::default()
                })
                .batters
                .push(batter);
        }
        teams.retain(|_, pool| !pool.batters.is_empty() && !pool.pitchers.is_empty());
        League { teams }
    }

    pub fn team(&self, name: &str) -> Result<&TeamPool, SimError> {
        self.teams
            .get(name.trim())
            .ok_or_else(|| SimError::UnknownTeam(name.to_string()))
    }

    pub fn team_names(&self) -> impl Iterator<Item = &str> {
        self.teams.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.teams.len()
    }

    pub fn is_empty(&self) -> bool {
        self.teams.is_empty()
    }

    /// Ranked rosters for every team except the user's.
    pub fn auto_configure(&self, user_team: &str) -> Vec<Roster> {
        self.teams
            .values()
            .filter(|pool| pool.team_name != user_team)
            .map(TeamPool::rank)
            .collect()
    }
}
