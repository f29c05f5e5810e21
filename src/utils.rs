use std::ops::Add;

/// Zero-based `(row, col)` grid coordinate.
#[derive(Debug, PartialEq, Eq, Hash, Clone, Copy, PartialOrd, Ord)]
pub struct Pos {
    pub row: usize,
    pub col: usize,
}

#[macro_export]
macro_rules! pos {
    ($row:expr, $col:expr) => {
        $crate::Pos {
            row: $row,
            col: $col,
        }
    };
}

impl Add for Pos {
    type Output = Self;
    fn add(self, rhs: Self) -> Self::Output {
        pos!(self.row + rhs.row, self.col + rhs.col)
    }
}

#[test]
fn test_add() {
    assert_eq!(pos!(2, 12) + pos!(1, 1), pos!(3, 13));
    assert_eq!(pos!(0, 0) + pos!(4, 0), pos!(4, 0));
}
