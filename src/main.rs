use std::env;
use std::sync::Arc;
use std::time::{Duration, Instant};

use mailbox_chess::board::{SearchConfig, SearchIterationInfo};
use mailbox_chess::{play, render, Board, GameOutcome};

/// Clear the terminal and park the cursor in the top-left corner.
fn clear_screen() {
    print!("\x1b[H\x1b[2J");
}

fn parse_config(args: &[String]) -> Option<SearchConfig> {
    let mut config = SearchConfig::default();
    let mut iter = args.iter().skip(1);
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--depth" => {
                config.max_depth = iter.next()?.parse().ok()?;
            }
            "--time" => {
                let seconds: u64 = iter.next()?.parse().ok()?;
                config.move_time = Some(Duration::from_secs(seconds));
            }
            _ => return None,
        }
    }
    Some(config)
}

fn main() {
    let args: Vec<String> = env::args().collect();
    let Some(config) = parse_config(&args) else {
        eprintln!("usage: mailbox_chess [--depth PLIES] [--time SECONDS]");
        return;
    };
    let config = config.with_info_callback(Arc::new(|info: &SearchIterationInfo| {
        println!(
            "depth {:2}  score {:7}  nodes {:9}  {:6} ms  {} nodes/s",
            info.depth, info.score, info.nodes, info.time_ms, info.nps
        );
    }));

    let game_start = Instant::now();
    let board = Board::new();
    clear_screen();
    print!("{}", render(&board));
    println!("White to move:");

    let outcome = play(board, &config, |number, mover, position| {
        clear_screen();
        print!("{}", render(position));
        println!("Move {number}: {mover}");
        println!("Elapsed time: {:.1}s", game_start.elapsed().as_secs_f64());
        println!("{} to move:", mover.opponent());
    });
    println!("\n** {outcome} **");
}
