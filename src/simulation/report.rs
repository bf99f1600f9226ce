use super::table::Table;
use super::tally::Tally;
use crate::Probability;
use serde::Serialize;

/// One player's line in the final report.
#[derive(Debug, Clone, Serialize)]
pub struct Equity {
    pub player: usize,
    pub hole: String,
    pub wins: usize,
    pub win: Probability,
}

/// Final result of a run.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub seed: u64,
    pub trials: usize,
    pub board: String,
    pub players: Vec<Equity>,
    pub split: Probability,
}

impl Report {
    pub fn new(table: &Table, tally: &Tally, seed: u64) -> Self {
        Self {
            seed,
            trials: tally.trials(),
            board: table.board().to_string().trim_end().to_string(),
            players: table
                .holes()
                .iter()
                .enumerate()
                .map(|(player, hole)| Equity {
                    player,
                    hole: hole.to_string(),
                    wins: tally.wins(player),
                    win: tally.win_probability(player),
                })
                .collect(),
            split: tally.split_probability(),
        }
    }
    pub fn json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

impl std::fmt::Display for Report {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        for equity in self.players.iter() {
            writeln!(
                f,
                "Player {} ({}) win probability: {:.4}%",
                equity.player, equity.hole, equity.win
            )?;
        }
        write!(f, "Split probability: {:.4}%", self.split)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::Board;
    use crate::cards::Hole;
    use crate::evaluation::Outcome;

    fn report() -> Report {
        let holes = vec![
            Hole::try_from("AhAd").unwrap(),
            Hole::try_from("2c7d").unwrap(),
        ];
        let table = Table::new(holes, Board::try_from("Qs Jh 2h").unwrap()).unwrap();
        let mut tally = Tally::new(2, 4);
        tally.witness(Outcome::Winner(0));
        tally.witness(Outcome::Winner(0));
        tally.witness(Outcome::Winner(1));
        tally.witness(Outcome::Tie);
        Report::new(&table, &tally, 42)
    }

    #[test]
    fn display() {
        assert_eq!(
            report().to_string(),
            "Player 0 (AhAd) win probability: 50.0000%\n\
             Player 1 (2c7d) win probability: 25.0000%\n\
             Split probability: 25.0000%"
        );
    }

    #[test]
    fn json() {
        let value = serde_json::from_str::<serde_json::Value>(&report().json().unwrap()).unwrap();
        assert_eq!(value["seed"], 42);
        assert_eq!(value["trials"], 4);
        assert_eq!(value["board"], "Qs Jh 2h");
        assert_eq!(value["players"][1]["hole"], "2c7d");
        assert_eq!(value["players"][0]["wins"], 2);
        assert_eq!(value["split"], 25.0);
    }
}
