use std::fmt::{self, Display, Formatter};

use crate::board::Board;
use crate::cell::Cell;
use crate::constants::{BOARD_HEIGHT, BOARD_WIDTH};

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let border = format!("   +{}", "---+".repeat(BOARD_WIDTH));

        writeln!(f)?;
        writeln!(f, "{}", border)?;

        for row in (0..BOARD_HEIGHT).rev() {
            write!(f, "   |")?;
            for col in 0..BOARD_WIDTH {
                write!(f, " {} |", self.cell(row * BOARD_WIDTH + col).to_char())?;
            }
            writeln!(f)?;
            writeln!(f, "{}", border)?;
        }

        write!(f, "    ")?;
        for col in 1..=BOARD_WIDTH {
            write!(f, " {}  ", col)?;
        }
        writeln!(f)?;

        Ok(())
    }
}

fn html_cell(cell: Cell) -> &'static str {
    match cell {
        Cell::Empty => "&ensp;",
        Cell::Black => "b",
        Cell::Red => "r",
    }
}

impl Board {
    /// The position as a bordered HTML table, top row first. Pure function of
    /// the state.
    pub fn html_table(&self) -> String {
        let rows: String = (0..BOARD_HEIGHT)
            .rev()
            .map(|row| {
                let cells: String = (0..BOARD_WIDTH)
                    .map(|col| format!("<td>{}</td>", html_cell(self.cell(row * BOARD_WIDTH + col))))
                    .collect();
                format!("<tr>{}</tr>", cells)
            })
            .collect();

        format!("<table border=\"1\">{}</table>", rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::BOARD_SIZE;

    #[test]
    fn test_display_renders_the_top_row_first() {
        let mut board = Board::new();
        for row in 0..BOARD_HEIGHT {
            let side = if row == BOARD_HEIGHT - 1 {
                Cell::Red
            } else {
                Cell::Black
            };
            board.apply_move(row * BOARD_WIDTH, side).unwrap();
        }

        let rendered = board.to_string();
        let first_r = rendered.find('r').unwrap();
        let first_b = rendered.find('b').unwrap();
        assert!(first_r < first_b);
    }

    #[test]
    fn test_display_is_deterministic() {
        let mut a = Board::new();
        let mut b = Board::new();
        a.apply_move(3, Cell::Black).unwrap();
        b.apply_move(3, Cell::Black).unwrap();

        assert_eq!(a.to_string(), b.to_string());
    }

    #[test]
    fn test_display_delimits_columns() {
        let board = Board::new();
        let rendered = board.to_string();

        let piece_row = format!("   |{}", "   |".repeat(BOARD_WIDTH));
        assert!(rendered.contains(&piece_row));
        assert!(rendered.contains(" 1 "));
        assert!(rendered.contains(" 7 "));
    }

    #[test]
    fn test_html_table_of_an_empty_board() {
        let html = Board::new().html_table();

        assert!(html.starts_with("<table border=\"1\"><tr>"));
        assert!(html.ends_with("</tr></table>"));
        assert_eq!(html.matches("<td>&ensp;</td>").count(), BOARD_SIZE);
        assert_eq!(html.matches("<tr>").count(), BOARD_HEIGHT);
    }

    #[test]
    fn test_html_table_shows_pieces() {
        let mut board = Board::new();
        board.apply_move(0, Cell::Black).unwrap();
        board.apply_move(1, Cell::Red).unwrap();

        let html = board.html_table();
        assert!(html.contains("<td>b</td><td>r</td>"));
    }
}
