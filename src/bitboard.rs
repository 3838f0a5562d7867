//! A fixed-size bitboard implementation using const generics.
//!
//! Boards are an `N×N` grid packed into an unsigned integer `T`, addressed by
//! `(x, y)` with the origin at the top-left: bit `y * N + x`. The type is
//! `no_std` friendly and never allocates.

use core::ops::{BitAnd, BitOr, Not};
use core::{any, fmt, mem};
use num_traits::{PrimInt, Unsigned, Zero};

/// Errors returned by bitboard operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BitBoardError {
    /// Requested board size N*N exceeds capacity of `T::BITS`.
    SizeTooLarge { n: usize, capacity: usize },
    /// Column or row index is out of bounds [0..N).
    IndexOutOfBounds { x: usize, y: usize },
}

impl fmt::Display for BitBoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BitBoardError::SizeTooLarge { n, capacity } => {
                write!(f, "SizeTooLarge: N*N={} exceeds T::BITS={}", n * n, capacity)
            }
            BitBoardError::IndexOutOfBounds { x, y } => {
                write!(f, "IndexOutOfBounds: x={}, y={}", x, y)
            }
        }
    }
}

/// A fixed-size N×N bitboard stored in the unsigned integer `T`.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct BitBoard<T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    bits: T,
}

impl<T, const N: usize> BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    /// Number of usable bits in the board (`N * N`).
    const BOARD_BITS: usize = N * N;

    #[inline]
    fn mask() -> T {
        if Self::BOARD_BITS == mem::size_of::<T>() * 8 {
            !T::zero()
        } else {
            (T::one() << Self::BOARD_BITS) - T::one()
        }
    }

    /// Create a new empty bitboard without a size check.
    #[inline]
    pub fn new() -> Self {
        BitBoard { bits: T::zero() }
    }

    /// Fallible constructor: returns `Err(SizeTooLarge)` if N*N > T::BITS.
    pub fn try_new() -> Result<Self, BitBoardError> {
        let capacity = mem::size_of::<T>() * 8;
        if Self::BOARD_BITS > capacity {
            Err(BitBoardError::SizeTooLarge { n: N, capacity })
        } else {
            Ok(BitBoard { bits: T::zero() })
        }
    }

    /// Number of marked cells.
    pub fn count_ones(&self) -> usize {
        self.bits.count_ones() as usize
    }

    pub fn is_empty(&self) -> bool {
        self.bits.is_zero()
    }

    /// Whether the cell at (x, y) is marked.
    pub fn get(&self, x: usize, y: usize) -> Result<bool, BitBoardError> {
        let idx = Self::index(x, y)?;
        Ok(((self.bits >> idx) & T::one()) != T::zero())
    }

    /// Marks the cell at (x, y).
    pub fn set(&mut self, x: usize, y: usize) -> Result<(), BitBoardError> {
        let idx = Self::index(x, y)?;
        self.bits = self.bits | (T::one() << idx);
        Ok(())
    }

    #[inline]
    fn index(x: usize, y: usize) -> Result<usize, BitBoardError> {
        if x >= N || y >= N {
            Err(BitBoardError::IndexOutOfBounds { x, y })
        } else {
            Ok(y * N + x)
        }
    }

    #[inline]
    fn from_raw(raw: T) -> Self {
        BitBoard {
            bits: raw & Self::mask(),
        }
    }

    /// Builds a bitboard from `(x, y)` positions.
    pub fn from_cells<I>(cells: I) -> Result<Self, BitBoardError>
    where
        I: IntoIterator<Item = (usize, usize)>,
    {
        let mut board = Self::new();
        for (x, y) in cells {
            board.set(x, y)?;
        }
        Ok(board)
    }

    /// Iterator over marked cells in row-major order (y, then x).
    #[inline]
    pub fn cells(&self) -> Cells<'_, T, N> {
        Cells {
            board: self,
            idx: 0,
        }
    }
}

impl<T, const N: usize> Default for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    #[inline]
    fn default() -> Self {
        Self::new()
    }
}

impl<T, const N: usize> fmt::Debug for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "BitBoard<{}, {}>:", any::type_name::<T>(), N)?;
        for y in 0..N {
            for x in 0..N {
                let bit = if ((self.bits >> (y * N + x)) & T::one()) != T::zero() {
                    '■'
                } else {
                    '□'
                };
                write!(f, "{} ", bit)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Iterator over the marked cells of a bitboard, yielding `(x, y)`.
#[derive(Clone, Copy)]
pub struct Cells<'a, T, const N: usize>
where
    T: PrimInt + Unsigned + Zero,
{
    board: &'a BitBoard<T, N>,
    idx: usize,
}

impl<'a, T, const N: usize> Iterator for Cells<'a, T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Item = (usize, usize);
    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        while self.idx < N * N {
            let idx = self.idx;
            self.idx += 1;
            if ((self.board.bits >> idx) & T::one()) != T::zero() {
                return Some((idx % N, idx / N));
            }
        }
        None
    }
}

impl<T, const N: usize> BitAnd for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitand(self, rhs: Self) -> Self {
        BitBoard::from_raw(self.bits & rhs.bits)
    }
}

impl<T, const N: usize> BitOr for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    fn bitor(self, rhs: Self) -> Self {
        BitBoard::from_raw(self.bits | rhs.bits)
    }
}

/// Complement within the `N×N` area: the cells not marked.
impl<T, const N: usize> Not for BitBoard<T, N>
where
    T: PrimInt + Unsigned + Zero,
{
    type Output = Self;
    #[inline]
    fn not(self) -> Self {
        Self::from_raw(!self.bits)
    }
}
