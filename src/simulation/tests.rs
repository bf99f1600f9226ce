use super::*;
use crate::Fault;
use crate::cards::Board;
use crate::cards::Hole;

fn table(hands: &[&str], board: &str) -> Table {
    let holes = hands.iter().map(|s| Hole::try_from(*s).unwrap()).collect();
    Table::new(holes, Board::try_from(board).unwrap()).unwrap()
}

#[tokio::test(flavor = "multi_thread")]
async fn aces_dominate_seven_deuce() {
    let table = table(&["AhAd", "2c7d"], "");
    let tally = Pool::new(4).simulate(&table, 5_000, 0xA11CE).await.unwrap();
    assert_eq!(tally.count(), 5_000);
    assert!(tally.win_probability(0) > 80.);
}

#[tokio::test(flavor = "multi_thread")]
async fn suit_isomorphic_hands_mostly_split() {
    let table = table(&["Ah2h", "Ac2c"], "");
    let tally = Pool::new(4).simulate(&table, 2_000, 7).await.unwrap();
    let gap = (tally.win_probability(0) - tally.win_probability(1)).abs();
    assert!(tally.split_probability() > 75.);
    assert!(gap < 5.);
}

#[tokio::test(flavor = "multi_thread")]
async fn worker_count_does_not_change_results() {
    let table = table(&["Ah2h", "Ac2c", "TcAd"], "");
    let solo = Pool::new(1).simulate(&table, 1_000, 99).await.unwrap();
    let many = Pool::new(4).simulate(&table, 1_000, 99).await.unwrap();
    assert_eq!(solo, many);
}

#[tokio::test(flavor = "multi_thread")]
async fn river_board_is_deterministic() {
    let table = table(&["AhAd", "KcKd"], "2s 7h 9c Jd 3s");
    let tally = Pool::new(3).simulate(&table, 200, 1).await.unwrap();
    assert_eq!(tally.wins(0), 200);
    assert_eq!(tally.win_probability(0), 100.);
    assert_eq!(tally.split_probability(), 0.);
}

#[tokio::test(flavor = "multi_thread")]
async fn royal_board_always_splits() {
    let table = table(&["2h3d", "4c5d"], "Ts Js Qs Ks As");
    let tally = Pool::new(2).simulate(&table, 100, 1).await.unwrap();
    assert_eq!(tally.split_probability(), 100.);
}

#[tokio::test(flavor = "multi_thread")]
async fn more_workers_than_trials() {
    let table = table(&["AhAd", "2c7d"], "Qs Jh 2h");
    let tally = Pool::new(16).simulate(&table, 3, 5).await.unwrap();
    assert_eq!(tally.count(), 3);
}

#[tokio::test(flavor = "multi_thread")]
async fn zero_trials_is_empty() {
    let table = table(&["AhAd", "2c7d"], "");
    let tally = Pool::new(2).simulate(&table, 0, 5).await.unwrap();
    assert_eq!(tally.count(), 0);
}

#[test]
fn illegal_board_never_starts() {
    let holes = vec![
        Hole::try_from("AhAd").unwrap(),
        Hole::try_from("2c7d").unwrap(),
    ];
    let board = Board::try_from("Qs Jh 2h 3d 4d 5d").unwrap();
    assert_eq!(Table::new(holes, board).err(), Some(Fault::BoardSize(6)));
}
