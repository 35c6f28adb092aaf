//! A square list implementation that avoids heap allocations.

use crate::geometry::Square;
use std::ops::Index;

const MAX_SQUARES: usize = 64;

#[derive(Debug, Clone)]
pub struct SquareList {
    squares: [Square; MAX_SQUARES],
    count: usize,
}

impl SquareList {
    pub fn new() -> Self {
        Self {
            squares: [Square::new(0, 0); MAX_SQUARES],
            count: 0,
        }
    }

    pub fn push(&mut self, square: Square) {
        if self.count < MAX_SQUARES {
            self.squares[self.count] = square;
            self.count += 1;
        }
    }

    pub fn len(&self) -> usize {
        self.count
    }

    pub fn is_empty(&self) -> bool {
        self.count == 0
    }

    pub fn contains(&self, square: Square) -> bool {
        self.as_slice().contains(&square)
    }

    /// Keeps only the squares for which `keep` returns true, preserving order.
    pub fn retain(&mut self, mut keep: impl FnMut(Square) -> bool) {
        let mut kept = 0;
        for i in 0..self.count {
            let square = self.squares[i];
            if keep(square) {
                self.squares[kept] = square;
                kept += 1;
            }
        }
        self.count = kept;
    }

    pub fn as_slice(&self) -> &[Square] {
        &self.squares[0..self.count]
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Square> {
        self.as_slice().iter()
    }
}

impl Default for SquareList {
    fn default() -> Self {
        Self::new()
    }
}

impl Index<usize> for SquareList {
    type Output = Square;

    fn index(&self, index: usize) -> &Self::Output {
        &self.as_slice()[index]
    }
}

impl<'a> IntoIterator for &'a SquareList {
    type Item = &'a Square;
    type IntoIter = std::slice::Iter<'a, Square>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl FromIterator<Square> for SquareList {
    fn from_iter<I: IntoIterator<Item = Square>>(iter: I) -> Self {
        let mut list = SquareList::new();
        for square in iter {
            list.push(square);
        }
        list
    }
}
