use std::collections::HashSet;

use proptest::prelude::*;

use hundredone_rs::config::GameConfig;
use hundredone_rs::games::hundredone::{
    Board, CardOwner, ChangeType, Phase, DECK_SIZE, HAND_SIZE, PLAYERS,
};
use hundredone_rs::telemetry::init_test_logging;

fn auto_config(seed: u64) -> GameConfig {
    GameConfig {
        seed: Some(seed),
        human_player: false,
        ..Default::default()
    }
}

fn hands(board: &Board) -> Vec<Vec<i32>> {
    PLAYERS
        .iter()
        .map(|p| board.hand(*p).iter().map(|c| c.id).collect())
        .collect()
}

#[test]
fn test_seeded_games_replay_identically() {
    init_test_logging();
    let mut a = Board::new_game(auto_config(2024));
    let mut b = Board::new_game(auto_config(2024));
    while a.phase() != Phase::Ended {
        a.step();
        b.step();
        assert_eq!(a.cards(), b.cards());
        assert_eq!(a.deliverer(), b.deliverer());
        assert_eq!(a.phase(), b.phase());
        assert_eq!(a.changes, b.changes);
    }
    assert_eq!(b.phase(), Phase::Ended);
    assert_eq!(a.player_score(), b.player_score());
}

#[test]
fn test_human_game_played_through_the_public_api() {
    init_test_logging();
    let mut board = Board::new_game(GameConfig::with_seed(77));
    let mut steps = 0;
    while board.phase() != Phase::Ended {
        let moves = board.get_moves();
        if let Some(card_id) = moves.first() {
            assert!(!board.pending_auto_move());
            board.play(*card_id).unwrap();
            assert_eq!(board.top_of_table().unwrap().id, *card_id);
        } else {
            board.step();
        }
        steps += 1;
        assert!(steps < 500);
    }
    let score = board.player_score().unwrap();
    for (seat, player) in PLAYERS.iter().enumerate() {
        assert_eq!(score.scores[seat], board.score_player(*player));
    }
}

#[test]
fn test_changes_follow_the_board() {
    init_test_logging();
    let mut board = Board::new_game(auto_config(31));
    while board.phase() != Phase::Ended {
        board.step();
        let played: HashSet<i32> = board
            .changes
            .iter()
            .flatten()
            .filter(|c| c.change_type == ChangeType::Play)
            .map(|c| c.object_id)
            .collect();
        let drawn: HashSet<i32> = board
            .changes
            .iter()
            .flatten()
            .filter(|c| c.change_type == ChangeType::Draw)
            .map(|c| c.object_id)
            .collect();
        for transition in board.owner_transitions() {
            match (transition.from, transition.to) {
                (_, CardOwner::Table) => assert!(played.contains(&transition.card_id)),
                (CardOwner::Deck, _) => {
                    // Dealt cards come out of the deck too
                    assert!(
                        drawn.contains(&transition.card_id)
                            || board.phase() == Phase::OpeningMove
                    )
                }
                other => panic!("unexpected transition {:?}", other),
            }
        }
    }
}

#[test]
fn test_no_changes_skips_animation_list() {
    let mut board = Board::new_game(auto_config(4));
    board.no_changes = true;
    while board.phase() != Phase::Ended {
        board.step();
        assert!(board.changes.iter().all(|group| group.is_empty()));
    }
}

proptest! {
    #[test]
    fn prop_deal_gives_every_player_five_cards(seed in any::<u64>()) {
        let mut board = Board::with_seed(seed);
        board.step();
        board.step();
        for player in PLAYERS {
            prop_assert_eq!(board.hand_len(player), HAND_SIZE);
        }
        prop_assert_eq!(board.deck_len(), DECK_SIZE - 4 * HAND_SIZE);
        let ids: HashSet<i32> = hands(&board).into_iter().flatten().collect();
        prop_assert_eq!(ids.len(), 4 * HAND_SIZE);
    }

    #[test]
    fn prop_every_game_accounts_for_all_cards(seed in any::<u64>()) {
        let mut board = Board::new_game(auto_config(seed));
        let mut table_len = 0;
        while board.phase() != Phase::Ended {
            board.step();
            prop_assert_eq!(board.cards().len(), DECK_SIZE);
            // The table pile only grows
            prop_assert!(board.table().len() >= table_len);
            table_len = board.table().len();
        }
        let owned: usize = [CardOwner::Deck, CardOwner::Table]
            .iter()
            .chain(PLAYERS.iter())
            .map(|o| board.hand_len(*o))
            .sum();
        prop_assert_eq!(owned, DECK_SIZE);
        prop_assert!(board.is_ended());
    }

    #[test]
    fn prop_rotation_returns_after_four(start in 0usize..4, extra in 0usize..12) {
        let mut board = Board::with_seed(extra as u64);
        for _ in 0..start {
            board.assign_next_deliverer();
        }
        let from = board.deliverer();
        for _ in 0..4 * (extra + 1) {
            board.assign_next_deliverer();
        }
        prop_assert_eq!(board.deliverer(), from);
    }
}
