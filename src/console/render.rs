//! Text rendering of the board and the numbering legend.

use tictactoe_engine::{Board, PlayerSymbols, Position, Square};

/// Greeting shown above the legend at the start of every game.
pub const WELCOME: &str = "Welcome to Tic-Tac-Toe!\n\
You will enter the number of the cell to select your play.\n";

/// Renders the cell numbers 1-9, one row per line, followed by a blank line.
///
/// ```text
/// |1|2|3|
/// |4|5|6|
/// |7|8|9|
/// ```
pub fn render_legend() -> String {
    render_rows(|pos| pos.to_number().to_string())
}

/// Renders the marks on the board, one row per line, followed by a blank line.
///
/// Empty cells are drawn as a single space.
pub fn render_board(board: &Board, symbols: &PlayerSymbols) -> String {
    render_rows(|pos| match board.get(pos) {
        Square::Empty => " ".to_string(),
        Square::Occupied(player) => symbols.symbol(player).to_string(),
    })
}

fn render_rows(cell: impl Fn(Position) -> String) -> String {
    let mut result = String::new();
    for row in Position::ALL.chunks(3) {
        for pos in row {
            result.push('|');
            result.push_str(&cell(*pos));
        }
        result.push_str("|\n");
    }
    result.push('\n');
    result
}
