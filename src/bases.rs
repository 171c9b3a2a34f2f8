//! Base/out state machine for a single half-inning.

use crate::outcome::Outcome;
use serde::Serialize;

pub const OUTS_PER_HALF_INNING: u8 = 3;

/// Runner names on first, second and third.
#[derive(Clone, Debug, Default, Eq, PartialEq, Serialize)]
pub struct Bases {
    pub first: Option<String>,
    pub second: Option<String>,
    pub third: Option<String>,
}

impl Bases {
    pub fn empty() -> Self {
        Bases::default()
    }

    pub fn loaded(first: &str, second: &str, third: &str) -> Self {
        Bases {
            first: Some(first.to_string()),
            second: Some(second.to_string()),
            third: Some(third.to_string()),
        }
    }

    pub fn occupied(&self) -> u32 {
        [&self.first, &self.second, &self.third]
            .iter()
            .filter(|slot| slot.is_some())
            .count() as u32
    }

    pub fn is_empty(&self) -> bool {
        self.occupied() == 0
    }

    fn clear(&mut self) {
        *self = Bases::empty();
    }

    /// Batter takes first; only runners forced by the trailing base move up.
    fn force_advance(&mut self, batter: &str) -> u32 {
        let mut runs = 0;
        if let Some(from_first) = self.first.take() {
            if let Some(from_second) = self.second.take() {
                if self.third.take().is_some() {
                    runs += 1;
                }
                self.third = Some(from_second);
            }
            self.second = Some(from_first);
        }
        self.first = Some(batter.to_string());
        runs
    }

    /// Every runner moves `steps` bases, lead runner first. The batter lands
    /// on base `steps`.
    fn advance_all(&mut self, steps: u8, batter: &str) -> u32 {
        let mut runs = 0;
        let mut slots = [self.first.take(), self.second.take(), self.third.take()];
        let mut moved: [Option<String>; 3] = Default::default();
        for base in (0..3usize).rev() {
            let Some(runner) = slots[base].take() else {
                continue;
            };
            let target = base + steps as usize;
            if target >= 3 {
                runs += 1;
            } else {
                moved[target] = Some(runner);
            }
        }
        moved[steps as usize - 1] = Some(batter.to_string());
        let [first, second, third] = moved;
        self.first = first;
        self.second = second;
        self.third = third;
        runs
    }
}

/// Runs and outs produced by one transition.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Serialize)]
pub struct PlayResult {
    pub runs: u32,
    pub outs_recorded: u8,
}

/// Bases, outs and runs of the half-inning in progress.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct HalfInning {
    bases: Bases,
    outs: u8,
    runs: u32,
}

impl HalfInning {
    pub fn new() -> Self {
        HalfInning::default()
    }

    pub fn with_state(bases: Bases, outs: u8) -> Self {
        HalfInning {
            bases,
            outs: outs.min(OUTS_PER_HALF_INNING),
            runs: 0,
        }
    }

    pub fn bases(&self) -> &Bases {
        &self.bases
    }

    pub fn outs(&self) -> u8 {
        self.outs
    }

    pub fn runs(&self) -> u32 {
        self.runs
    }

    pub fn is_over(&self) -> bool {
        self.outs >= OUTS_PER_HALF_INNING
    }

    /// Applies one plate appearance. A finished half-inning ignores further
    /// plays.
    pub fn apply(&mut self, outcome: Outcome, batter: &str) -> PlayResult {
        if self.is_over() {
            return PlayResult::default();
        }
        let result = match outcome {
            Outcome::Walk | Outcome::HitByPitch => PlayResult {
                runs: self.bases.force_advance(batter),
                outs_recorded: 0,
            },
            Outcome::Single => self.hit(1, batter),
            Outcome::Double => self.hit(2, batter),
            Outcome::Triple => self.hit(3, batter),
            Outcome::HomeRun => {
                let runs = self.bases.occupied() + 1;
                self.bases.clear();
                PlayResult {
                    runs,
                    outs_recorded: 0,
                }
            }
            Outcome::Strikeout => PlayResult {
                runs: 0,
                outs_recorded: 1,
            },
            Outcome::FlyOut => self.fly_out(),
            Outcome::GroundOut => self.ground_out(),
        };
        self.runs += result.runs;
        self.outs = (self.outs + result.outs_recorded).min(OUTS_PER_HALF_INNING);
        result
    }

    fn hit(&mut self, steps: u8, batter: &str) -> PlayResult {
        PlayResult {
            runs: self.bases.advance_all(steps, batter),
            outs_recorded: 0,
        }
    }

    fn fly_out(&mut self) -> PlayResult {
        let mut runs = 0;
        if self.outs < 2 && self.bases.third.take().is_some() {
            runs = 1;
        }
        PlayResult {
            runs,
            outs_recorded: 1,
        }
    }

    fn ground_out(&mut self) -> PlayResult {
        if self.outs >= 2 {
            return PlayResult {
                runs: 0,
                outs_recorded: 1,
            };
        }
        let bases = &mut self.bases;
        let on_first = bases.first.is_some();
        let on_second = bases.second.is_some();
        let on_third = bases.third.is_some();
        match (on_first, on_second, on_third) {
            // Double play at first; the lead runner only scores with nobody out.
            (true, _, true) => {
                let mut runs = 0;
                if self.outs == 0 {
                    bases.third = None;
                    runs = 1;
                }
                bases.first = None;
                PlayResult {
                    runs,
                    outs_recorded: 2,
                }
            }
            (false, _, true) => {
                bases.third = None;
                PlayResult {
                    runs: 1,
                    outs_recorded: 1,
                }
            }
            (_, true, false) => PlayResult {
                runs: 0,
                outs_recorded: 1,
            },
            (true, false, false) => {
                bases.first = None;
                PlayResult {
                    runs: 0,
                    outs_recorded: 2,
                }
            }
            (false, false, false) => PlayResult {
                runs: 0,
                outs_recorded: 1,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn runner(name: &str) -> Option<String> {
        Some(name.to_string())
    }

    #[test]
    fn walk_with_bases_loaded_forces_in_a_run() {
        let mut half = HalfInning::with_state(Bases::loaded("A", "B", "C"), 1);
        let result = half.apply(Outcome::Walk, "D");
        assert_eq!(result.runs, 1);
        assert_eq!(half.bases(), &Bases::loaded("D", "A", "B"));
        assert_eq!(half.outs(), 1);
    }

    #[test]
    fn walk_does_not_push_unforced_runners() {
        let bases = Bases {
            first: None,
            second: runner("B"),
            third: runner("C"),
        };
        let mut half = HalfInning::with_state(bases, 0);
        let result = half.apply(Outcome::HitByPitch, "D");
        assert_eq!(result.runs, 0);
        assert_eq!(
            half.bases(),
            &Bases {
                first: runner("D"),
                second: runner("B"),
                third: runner("C"),
            }
        );
    }

    #[test]
    fn walk_with_first_and_third_moves_only_the_forced_runner() {
        let bases = Bases {
            first: runner("A"),
            second: None,
            third: runner("C"),
        };
        let mut half = HalfInning::with_state(bases, 0);
        assert_eq!(half.apply(Outcome::Walk, "D").runs, 0);
        assert_eq!(half.bases(), &Bases::loaded("D", "A", "C"));
    }

    #[test]
    fn single_scores_runner_from_third() {
        let bases = Bases {
            first: runner("A"),
            second: None,
            third: runner("C"),
        };
        let mut half = HalfInning::with_state(bases, 0);
        let result = half.apply(Outcome::Single, "D");
        assert_eq!(result.runs, 1);
        assert_eq!(
            half.bases(),
            &Bases {
                first: runner("D"),
                second: runner("A"),
                third: None,
            }
        );
    }

    #[test]
    fn double_clears_second_and_third() {
        let mut half = HalfInning::with_state(Bases::loaded("A", "B", "C"), 2);
        let result = half.apply(Outcome::Double, "D");
        assert_eq!(result.runs, 2);
        assert_eq!(
            half.bases(),
            &Bases {
                first: None,
                second: runner("D"),
                third: runner("A"),
            }
        );
    }

    #[test]
    fn triple_scores_everyone_aboard() {
        let mut half = HalfInning::with_state(Bases::loaded("A", "B", "C"), 0);
        assert_eq!(half.apply(Outcome::Triple, "D").runs, 3);
        assert_eq!(
            half.bases(),
            &Bases {
                first: None,
                second: None,
                third: runner("D"),
            }
        );
    }

    #[test]
    fn solo_home_run_scores_one() {
        let mut half = HalfInning::new();
        let result = half.apply(Outcome::HomeRun, "A");
        assert_eq!(result.runs, 1);
        assert!(half.bases().is_empty());
    }

    #[test]
    fn grand_slam_scores_four() {
        let mut half = HalfInning::with_state(Bases::loaded("A", "B", "C"), 1);
        assert_eq!(half.apply(Outcome::HomeRun, "D").runs, 4);
        assert!(half.bases().is_empty());
        assert_eq!(half.runs(), 4);
    }

    #[test]
    fn sacrifice_fly_with_one_out() {
        let bases = Bases {
            third: runner("C"),
            ..Bases::empty()
        };
        let mut half = HalfInning::with_state(bases, 1);
        let result = half.apply(Outcome::FlyOut, "D");
        assert_eq!(result.runs, 1);
        assert_eq!(half.outs(), 2);
        assert!(half.bases().third.is_none());
    }

    #[test]
    fn fly_out_with_two_outs_strands_runner() {
        let bases = Bases {
            third: runner("C"),
            ..Bases::empty()
        };
        let mut half = HalfInning::with_state(bases, 2);
        assert_eq!(half.apply(Outcome::FlyOut, "D").runs, 0);
        assert!(half.is_over());
        assert_eq!(half.bases().third, runner("C"));
    }

    #[test]
    fn ground_out_with_bases_loaded_and_nobody_out() {
        let mut half = HalfInning::with_state(Bases::loaded("A", "B", "C"), 0);
        let result = half.apply(Outcome::GroundOut, "D");
        assert_eq!(result.runs, 1);
        assert_eq!(half.outs(), 2);
        assert_eq!(
            half.bases(),
            &Bases {
                first: None,
                second: runner("B"),
                third: None,
            }
        );
    }

    #[test]
    fn ground_out_first_and_third_one_out_ends_inning_without_run() {
        let bases = Bases {
            first: runner("A"),
            second: None,
            third: runner("C"),
        };
        let mut half = HalfInning::with_state(bases, 1);
        let result = half.apply(Outcome::GroundOut, "D");
        assert_eq!(result.runs, 0);
        assert_eq!(half.outs(), 3);
        assert_eq!(half.bases().third, runner("C"));
        assert!(half.bases().first.is_none());
    }

    #[test]
    fn ground_out_second_and_third_scores_lead_runner() {
        let bases = Bases {
            first: None,
            second: runner("B"),
            third: runner("C"),
        };
        let mut half = HalfInning::with_state(bases, 1);
        let result = half.apply(Outcome::GroundOut, "D");
        assert_eq!(result, PlayResult { runs: 1, outs_recorded: 1 });
        assert_eq!(half.bases().second, runner("B"));
        assert!(half.bases().third.is_none());
    }

    #[test]
    fn ground_out_runner_on_second_holds() {
        let bases = Bases {
            second: runner("B"),
            ..Bases::empty()
        };
        let mut half = HalfInning::with_state(bases.clone(), 0);
        assert_eq!(
            half.apply(Outcome::GroundOut, "D"),
            PlayResult { runs: 0, outs_recorded: 1 }
        );
        assert_eq!(half.bases(), &bases);
    }

    #[test]
    fn ground_out_runner_on_first_is_double_play() {
        let bases = Bases {
            first: runner("A"),
            ..Bases::empty()
        };
        let mut half = HalfInning::with_state(bases, 0);
        assert_eq!(half.apply(Outcome::GroundOut, "D").outs_recorded, 2);
        assert!(half.bases().is_empty());
        assert_eq!(half.outs(), 2);
    }

    #[test]
    fn ground_out_with_two_outs_only_retires_batter() {
        let mut half = HalfInning::with_state(Bases::loaded("A", "B", "C"), 2);
        let result = half.apply(Outcome::GroundOut, "D");
        assert_eq!(result, PlayResult { runs: 0, outs_recorded: 1 });
        assert!(half.is_over());
        assert_eq!(half.bases(), &Bases::loaded("A", "B", "C"));
    }

    #[test]
    fn finished_half_inning_ignores_plays() {
        let mut half = HalfInning::with_state(Bases::empty(), 3);
        assert_eq!(half.apply(Outcome::HomeRun, "A"), PlayResult::default());
        assert_eq!(half.runs(), 0);
    }
}
