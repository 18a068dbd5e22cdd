//! Text rendering for boards and style cards. Display only.

use std::fmt::{self, Display, Formatter, Write};

use super::grid::Board;
use crate::cards::StyleCard;

impl Display for Board {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let size = self.size() as i32;
        let mut rule = String::from(" +");
        for _ in 0..size {
            rule.push_str("-+");
        }

        let mut header = String::from("  ");
        for col in 0..size {
            write!(header, "{col} ")?;
        }

        writeln!(f, "{header}")?;
        writeln!(f, "{rule}")?;
        for row in 0..size {
            write!(f, "{row}|")?;
            for col in 0..size {
                write!(f, "{}|", self.get_token(row, col))?;
            }
            writeln!(f, "{row}")?;
            writeln!(f, "{rule}")?;
        }
        writeln!(f, "{header}")
    }
}

impl Display for StyleCard {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}:", self.name)?;
        for (row, col) in self.offsets() {
            write!(f, " ({row}, {col})")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::StyleName;

    #[test]
    fn test_board_text() {
        let board = Board::new(5).unwrap();
        let expected = concat!(
            "  0 1 2 3 4 \n",
            " +-+-+-+-+-+\n",
            "0|x|x|X|x|x|0\n",
            " +-+-+-+-+-+\n",
            "1| | | | | |1\n",
            " +-+-+-+-+-+\n",
            "2| | | | | |2\n",
            " +-+-+-+-+-+\n",
            "3| | | | | |3\n",
            " +-+-+-+-+-+\n",
            "4|y|y|Y|y|y|4\n",
            " +-+-+-+-+-+\n",
            "  0 1 2 3 4 \n",
        );
        assert_eq!(board.to_string(), expected);
    }

    #[test]
    fn test_style_text() {
        let board = Board::new(5).unwrap();
        let crab = board.style(StyleName::Crab).unwrap();
        assert_eq!(crab.to_string(), "crab: (-1, 0) (0, -2) (0, 2)");
    }
}
