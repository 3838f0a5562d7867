#![cfg(feature = "std")]

//! Plain-text view of a match for the terminal driver.

use std::string::String;

use crate::{
    board::Board,
    common::Cell,
    config::{ship_name, BOARD_SIZE},
    game::{GameEngine, Mode, Winner},
};

/// Column letter + 1-based row, e.g. `(2, 3)` → `C4`.
pub fn coord_to_string(cell: Cell) -> String {
    let col = (b'A' + cell.x as u8) as char;
    format!("{}{}", col, cell.y + 1)
}

/// Parse `C4`-style input into a cell. Column letters map to `x`, rows to `y`.
pub fn parse_coord(input: &str) -> Result<Cell, String> {
    let input = input.trim();
    if input.len() < 2 {
        return Err("Too short - need column letter and row number (e.g., C4)".to_string());
    }
    let last_col = (b'A' + BOARD_SIZE as u8 - 1) as char;
    let mut chars = input.chars();
    let col_ch = chars.next().ok_or("No column letter")?.to_ascii_uppercase();
    if !col_ch.is_ascii_alphabetic() {
        return Err(format!("Invalid column '{}' - must be a letter A-{}", col_ch, last_col));
    }
    let x = (col_ch as u8).wrapping_sub(b'A') as usize;
    if x >= BOARD_SIZE {
        return Err(format!("Column '{}' out of bounds - must be A-{}", col_ch, last_col));
    }
    let row_str: String = chars.collect();
    let row: usize = row_str
        .parse()
        .map_err(|_| format!("Invalid row '{}' - must be a number 1-{}", row_str, BOARD_SIZE))?;
    if row == 0 || row > BOARD_SIZE {
        return Err(format!("Row {} out of bounds - must be 1-{}", row, BOARD_SIZE));
    }
    Ok(Cell::new(x, row - 1))
}

/// Render a board as text. Ships are drawn only when `reveal` is set.
pub fn board_to_string(board: &Board, reveal: bool) -> String {
    let mut out = String::from("   ");
    for x in 0..BOARD_SIZE {
        out.push(' ');
        out.push((b'A' + x as u8) as char);
    }
    out.push('\n');
    for y in 0..BOARD_SIZE {
        out.push_str(&format!("{:2} ", y + 1));
        for x in 0..BOARD_SIZE {
            let ch = if board.hits().get(x, y).unwrap_or(false) {
                let sunk = board.ship(board.ship_at(x, y)).is_some_and(|s| s.is_sunk());
                if sunk {
                    '#'
                } else {
                    'X'
                }
            } else if board.misses().get(x, y).unwrap_or(false) {
                'o'
            } else if reveal && board.is_occupied(x, y) {
                'S'
            } else {
                '.'
            };
            out.push(' ');
            out.push(ch);
        }
        out.push('\n');
    }
    out
}

/// Print both boards, the afloat counts and the latest notice.
pub fn print_player_view(engine: &GameEngine) {
    let Some(session) = engine.session() else {
        println!("{}", engine.message());
        return;
    };
    let reveal_enemy = engine.mode() == Mode::Over;
    println!("\nYour Fleet");
    print!("{}", board_to_string(session.player_board(), true));
    println!("\nEnemy Waters");
    print!("{}", board_to_string(session.enemy_board(), reveal_enemy));
    println!(
        "\nYour ships afloat: {}    Enemy ships afloat: {}",
        session.player_board().alive_count(),
        session.enemy_board().alive_count()
    );
    for ship in session.player_board().fleet() {
        let status = if ship.is_sunk() { "SUNK" } else { "Active" };
        println!(
            "  {} ({}): {}",
            ship_name(ship.id()).unwrap_or("Ship"),
            ship.size(),
            status
        );
    }
    println!("{}", engine.message());
    match engine.winner() {
        Winner::Player => println!("You have sunk all enemy ships!"),
        Winner::Enemy => println!("All your ships have been destroyed."),
        Winner::None => {}
    }
}
