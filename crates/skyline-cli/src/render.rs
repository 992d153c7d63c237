//! Text rendering of boards.

use std::fmt::Write as _;

use skyline_core::{Board, Edge};

fn clue_text(clue: u8) -> String {
    if clue == 0 {
        String::new()
    } else {
        clue.to_string()
    }
}

/// Renders the grid inside a border, with the clues on all four sides.
///
/// Each cell shows its candidates as formatted by [`HeightSet`](skyline_core::HeightSet);
/// clue slots without a clue are blank.
pub fn render_board(board: &Board) -> String {
    let size = board.size();
    let n = size.get();
    let clues = board.clues();
    let candidates = board.candidates();

    let cell_width = candidates
        .as_slice()
        .iter()
        .map(|set| set.to_string().len())
        .max()
        .unwrap_or(0)
        .max(1);
    let clue_width = n.to_string().len();
    let margin = " ".repeat(clue_width + 1);
    let border = format!(
        "{margin}+{}",
        format!("{}+", "-".repeat(cell_width + 2)).repeat(n)
    );

    let clue_row = |edge: Edge| {
        let mut line = margin.clone();
        for clue in clues.edge(edge) {
            let _ = write!(line, "  {:<cell_width$} ", clue_text(clue));
        }
        line.trim_end().to_owned()
    };

    let mut lines = vec![clue_row(Edge::Top), border.clone()];
    let row_clues = clues.edge(Edge::Left).zip(clues.edge(Edge::Right));
    for (y, (left, right)) in row_clues.enumerate() {
        let mut line = format!("{:>clue_width$} |", clue_text(left));
        for cell in y * n..(y + 1) * n {
            let _ = write!(line, " {:<cell_width$} |", candidates[cell].to_string());
        }
        let _ = write!(line, " {}", clue_text(right));
        lines.push(line.trim_end().to_owned());
        lines.push(border.clone());
    }
    lines.push(clue_row(Edge::Bottom));

    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Lists every cell with its coordinate and candidates, one per line.
pub fn render_candidates(board: &Board) -> String {
    let size = board.size();
    let mut out = String::new();
    for cell in size.cells() {
        let _ = writeln!(
            out,
            "{cell:>4} {}: {}",
            size.position(cell),
            board.candidates()[cell]
        );
    }
    out
}
