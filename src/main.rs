use std::collections::HashMap;
use std::io;
use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;
use tracing::info;

use hundredone_rs::config::GameConfig;
use hundredone_rs::games::hundredone::{
    Board, Card, CardOwner, Phase, Suit, GAME_DESCRIPTION, PLAYERS,
};
use hundredone_rs::telemetry;

#[derive(Parser)]
#[command(name = "hundredone")]
#[command(about = "Play 101 against three AI players in the terminal")]
struct Args {
    /// Seed for shuffling and picking the first deliverer
    #[arg(long)]
    seed: Option<u64>,

    /// JSON config file, command line flags override its values
    #[arg(long)]
    config: Option<PathBuf>,

    /// Let the AI play your seat as well
    #[arg(long)]
    auto: bool,

    /// Simulate this many all-AI games and print the winner tally
    #[arg(long)]
    games: Option<u32>,

    /// Show the cards the AI players hold
    #[arg(long)]
    open_cards: bool,

    /// Print the rules and exit
    #[arg(long)]
    rules: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    telemetry::init_tracing(args.verbose);

    if args.rules {
        println!("{}", GAME_DESCRIPTION);
        return Ok(());
    }

    let mut config = match &args.config {
        Some(path) => GameConfig::from_json_file(path)?,
        None => GameConfig::default(),
    };
    if args.seed.is_some() {
        config.seed = args.seed;
    }
    if args.auto {
        config.human_player = false;
    }

    match args.games {
        Some(games) => simulate(config, games),
        None => play(config, args.open_cards)?,
    }
    Ok(())
}

fn print_card(card: &Card) -> String {
    let string = card.to_string();
    let colored_string = match card.suit {
        Suit::Hearts | Suit::Diamonds => string.red(),
        Suit::Clubs | Suit::Spades => string.normal(),
    };
    format!("{}:{}", card.id, colored_string)
}

fn print_cards(cards: &[Card]) -> String {
    cards.iter().map(print_card).collect::<Vec<_>>().join(" ")
}

fn read_card_id(prompt: &str) -> io::Result<String> {
    println!("{}", prompt);
    let mut line = String::new();
    if io::stdin().read_line(&mut line)? == 0 {
        return Err(io::Error::new(
            io::ErrorKind::UnexpectedEof,
            "stdin closed before the game ended",
        ));
    }
    Ok(line.trim().to_string())
}

fn display_game(board: &Board, open_cards: bool) {
    println!("---");
    for player in PLAYERS.iter().skip(1) {
        if open_cards {
            println!(
                "{:<6} {}",
                player.display_name(),
                print_cards(&board.hand(*player))
            );
        } else {
            println!(
                "{:<6} {} cards",
                player.display_name(),
                board.hand_len(*player)
            );
        }
    }
    println!("deck: {} cards", board.deck_len());
    match board.top_of_table() {
        Some(top) => println!("table: {}", print_card(top)),
        None => println!("table: empty"),
    }
    println!(
        "your hand: {}",
        print_cards(&board.hand(CardOwner::Player1))
    );
    println!("---");
}

fn report_step(board: &Board) {
    for transition in board.owner_transitions() {
        let Ok(card) = board.card_by_id(transition.card_id) else {
            continue;
        };
        // Cards drawn by the AI stay face down
        let shown = if transition.from == CardOwner::Deck && transition.to != CardOwner::Player1 {
            "a card".to_string()
        } else {
            print_card(card)
        };
        match (transition.from, transition.to) {
            (CardOwner::Deck, to) => println!("{}: draw {}", to.display_name(), shown),
            (from, CardOwner::Table) => println!("{}: play {}", from.display_name(), shown),
            (from, to) => println!(
                "{} moves from {} to {}",
                shown,
                from.display_name(),
                to.display_name()
            ),
        }
    }
}

fn play(config: GameConfig, open_cards: bool) -> io::Result<()> {
    let mut board = Board::new_game(config);
    board.no_changes = true;

    while board.phase() != Phase::Ended {
        board.step();
        match board.phase() {
            Phase::Dealing => println!("Shuffling the deck"),
            Phase::OpeningMove => println!(
                "Cards dealt, {} opens",
                board.deliverer().display_name()
            ),
            _ => report_step(&board),
        }

        if !board.get_moves().is_empty() {
            display_game(&board, open_cards);
            loop {
                let input = read_card_id("Pick a card id to play:")?;
                let Ok(card_id) = input.parse::<i32>() else {
                    println!("{} is not a card id", input);
                    continue;
                };
                match board.play(card_id) {
                    Ok(()) => break,
                    Err(err) => println!("{}", err),
                }
            }
            report_step(&board);
        }
    }

    if let Some(score) = board.player_score() {
        for player in PLAYERS {
            println!(
                "{:<6} {:>3} points",
                player.display_name(),
                score.score(player).unwrap_or_default()
            );
        }
        let winners = score
            .winners
            .iter()
            .map(|p| p.display_name())
            .collect::<Vec<_>>()
            .join(", ");
        println!("winner: {}", winners.green());
    }
    Ok(())
}

fn simulate(config: GameConfig, games: u32) {
    let mut wins: HashMap<CardOwner, usize> = HashMap::new();
    let mut total_turns: u64 = 0;

    for game in 0..games {
        let mut game_config = config.clone();
        game_config.human_player = false;
        game_config.seed = config.seed.map(|seed| seed.wrapping_add(game as u64));

        let mut board = Board::new_game(game_config);
        board.no_changes = true;
        while board.phase() != Phase::Ended {
            board.step();
        }
        total_turns += board.turn() as u64;
        if let Some(score) = board.player_score() {
            for winner in &score.winners {
                *wins.entry(*winner).or_insert(0) += 1;
            }
        }
    }

    info!(games, total_turns, "simulation finished");
    for player in PLAYERS {
        println!(
            "{:<6} {} wins",
            player.display_name(),
            wins.get(&player).copied().unwrap_or_default()
        );
    }
    if games > 0 {
        println!(
            "average turns per game: {:.1}",
            total_turns as f64 / games as f64
        );
    }
}
