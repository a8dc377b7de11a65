//! Connectivity: flood fill for groups, liberties, and empty regions.
//!
//! Groups are never stored. The board is the single source of truth and
//! connectivity is recomputed on demand, which keeps capture handling
//! free of incremental bookkeeping. Both traversals here are pure
//! functions of an immutable board: they visit each intersection at
//! most once, so one call is O(size^2) in the worst case.

use std::collections::BTreeSet;

use crate::board::{Board, Color};
use crate::coord::Coord;
use crate::error::GameError;

/// A maximal set of connected same-colored stones and its liberties.
///
/// Both sets are ordered by coordinate (column, then row), so any
/// exposed ordering is independent of traversal order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Group {
    /// Member intersections, all holding stones of one color.
    pub stones: BTreeSet<Coord>,
    /// Distinct empty intersections adjacent to any member.
    pub liberties: BTreeSet<Coord>,
}

impl Group {
    /// True when the start point was empty and no group exists there.
    pub fn is_empty(&self) -> bool {
        self.stones.is_empty()
    }
}

/// A maximal connected region of empty intersections, together with the
/// colors of the stones that border it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Region {
    pub points: BTreeSet<Coord>,
    pub touches_black: bool,
    pub touches_white: bool,
}

impl Region {
    /// The single color bordering this region, if exactly one does.
    pub fn sole_border(&self) -> Option<Color> {
        match (self.touches_black, self.touches_white) {
            (true, false) => Some(Color::Black),
            (false, true) => Some(Color::White),
            _ => None,
        }
    }
}

/// Find the group containing the stone at `coord` and its liberties.
///
/// An empty start point yields an empty [`Group`]; callers distinguish
/// that case. Fails only when `coord` is off the board.
pub fn group_and_liberties(board: &Board, coord: Coord) -> Result<Group, GameError> {
    let Some(color) = board.get(coord)? else {
        return Ok(Group::default());
    };

    let mut group = Group::default();
    let mut stack = vec![coord];

    while let Some(c) = stack.pop() {
        if !group.stones.insert(c) {
            continue;
        }
        for n in board.neighbors(c) {
            match board.at(n) {
                None => {
                    group.liberties.insert(n);
                }
                Some(s) if s == color && !group.stones.contains(&n) => stack.push(n),
                _ => {}
            }
        }
    }

    Ok(group)
}

/// Find the connected empty region containing `coord` and which colors
/// border it. The scorer's generalization of the group traversal.
///
/// An occupied start point yields an empty [`Region`]. Fails only when
/// `coord` is off the board.
pub fn empty_region(board: &Board, coord: Coord) -> Result<Region, GameError> {
    if board.get(coord)?.is_some() {
        return Ok(Region::default());
    }

    let mut region = Region::default();
    let mut stack = vec![coord];

    while let Some(c) = stack.pop() {
        if !region.points.insert(c) {
            continue;
        }
        for n in board.neighbors(c) {
            match board.at(n) {
                None => {
                    if !region.points.contains(&n) {
                        stack.push(n);
                    }
                }
                Some(Color::Black) => region.touches_black = true,
                Some(Color::White) => region.touches_white = true,
            }
        }
    }

    Ok(region)
}
