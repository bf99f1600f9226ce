use super::ranking::Ranking;
use super::verdict::Verdict;
use crate::Fault;

/// Final result of one trial.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub enum Outcome {
    Winner(usize),
    Tie,
}

/// Running result while players are still being registered.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Default)]
pub enum Standing {
    #[default]
    Pending,
    Winner(usize),
    Tie,
}

/// Resolves a trial by folding players' rankings in seat order.
///
/// Keeps the best ranking seen so far. A strictly better hand takes the
/// lead outright. A hand that ties the leader turns the standing into a
/// tie (and becomes the stored best, which compares equal anyway). A
/// worse hand changes nothing, so a later strictly better hand can still
/// break an earlier tie.
#[derive(Debug, Default)]
pub struct Showdown {
    best: Option<Ranking>,
    standing: Standing,
}

impl Showdown {
    pub fn standing(&self) -> Standing {
        self.standing
    }
    pub fn best(&self) -> Option<&Ranking> {
        self.best.as_ref()
    }

    pub fn register(&mut self, player: usize, candidate: Ranking) -> Result<Verdict, Fault> {
        let verdict = match self.best {
            None => Verdict::Win,
            Some(ref best) => candidate.versus(best)?,
        };
        match verdict {
            Verdict::Win => {
                self.best = Some(candidate);
                self.standing = Standing::Winner(player);
            }
            Verdict::Tie => {
                self.best = Some(candidate);
                self.standing = Standing::Tie;
            }
            Verdict::Lose => {}
        }
        Ok(verdict)
    }

    pub fn resolve(&self) -> Result<Outcome, Fault> {
        match self.standing {
            Standing::Winner(player) => Ok(Outcome::Winner(player)),
            Standing::Tie => Ok(Outcome::Tie),
            Standing::Pending => Err(Fault::Unresolved),
        }
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Winner(player) => write!(f, "Player {} wins", player),
            Self::Tie => write!(f, "No winner"),
        }
    }
}
