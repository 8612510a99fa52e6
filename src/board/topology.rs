//! Immutable board: square count plus connection table.

use rustc_hash::FxHashMap;

use super::connection::Connection;
use super::layout::GridLayout;
use super::Square;
use crate::error::BoardError;

/// Grid side of the classic board.
pub const CLASSIC_SIDE: u8 = 10;

/// Largest supported grid side (`15 * 15` still fits in a `Square`).
pub const MAX_SIDE: u8 = 15;

/// The classic "Neon Nexus" connection set.
pub const CLASSIC_CONNECTIONS: [Connection; 21] = [
    // Hyper-loops
    Connection::shortcut(2, 38),
    Connection::shortcut(7, 14),
    Connection::shortcut(8, 31),
    Connection::shortcut(15, 26),
    Connection::shortcut(21, 42),
    Connection::shortcut(28, 84),
    Connection::shortcut(36, 44),
    Connection::shortcut(51, 67),
    Connection::shortcut(71, 91),
    Connection::shortcut(78, 98),
    Connection::shortcut(87, 94),
    // Neural de-syncs
    Connection::setback(16, 6),
    Connection::setback(46, 25),
    Connection::setback(49, 11),
    Connection::setback(62, 19),
    Connection::setback(64, 60),
    Connection::setback(74, 53),
    Connection::setback(89, 68),
    Connection::setback(92, 88),
    Connection::setback(95, 75),
    Connection::setback(99, 80),
];

/// Board topology.
///
/// Connections are keyed by start square, so at most one connection can
/// leave any square and lookup during move resolution is deterministic.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    side: u8,
    connections: FxHashMap<Square, Connection>,
}

impl Board {
    /// Build a `side x side` board.
    ///
    /// Rejects connections that leave the track, loop onto themselves, point
    /// against their kind, share a start square, or start on the first or
    /// last square.
    pub fn new(
        side: u8,
        connections: impl IntoIterator<Item = Connection>,
    ) -> Result<Self, BoardError> {
        if !(2..=MAX_SIDE).contains(&side) {
            return Err(BoardError::InvalidSide(side));
        }
        let total = side * side;

        let mut table = FxHashMap::default();
        for conn in connections {
            if !(1..=total).contains(&conn.start) || !(1..=total).contains(&conn.end) {
                return Err(BoardError::OutOfRange {
                    start: conn.start,
                    end: conn.end,
                    total,
                });
            }
            if conn.start == conn.end {
                return Err(BoardError::SelfLoop(conn.start));
            }
            if conn.start == 1 || conn.start == total {
                return Err(BoardError::ReservedSquare(conn.start));
            }
            if !conn.is_well_directed() {
                return Err(BoardError::WrongDirection {
                    kind: conn.kind,
                    start: conn.start,
                    end: conn.end,
                });
            }
            if table.insert(conn.start, conn).is_some() {
                return Err(BoardError::DuplicateStart(conn.start));
            }
        }

        Ok(Self {
            side,
            connections: table,
        })
    }

    /// The 10x10 board with the classic connection set.
    #[must_use]
    pub fn classic() -> Self {
        let connections = CLASSIC_CONNECTIONS
            .iter()
            .map(|c| (c.start, *c))
            .collect();
        Self {
            side: CLASSIC_SIDE,
            connections,
        }
    }

    /// A board with no connections.
    pub fn plain(side: u8) -> Result<Self, BoardError> {
        Self::new(side, std::iter::empty())
    }

    #[must_use]
    pub fn side(&self) -> u8 {
        self.side
    }

    /// Number of squares; also the winning square.
    #[must_use]
    pub fn total_squares(&self) -> Square {
        self.side * self.side
    }

    #[must_use]
    pub fn final_square(&self) -> Square {
        self.total_squares()
    }

    /// Connection leaving `square`, if any.
    #[must_use]
    pub fn connection_at(&self, square: Square) -> Option<&Connection> {
        self.connections.get(&square)
    }

    /// All connections ordered by start square.
    #[must_use]
    pub fn connections(&self) -> Vec<Connection> {
        let mut all: Vec<_> = self.connections.values().copied().collect();
        all.sort_by_key(|c| c.start);
        all
    }

    #[must_use]
    pub fn layout(&self) -> GridLayout {
        GridLayout::new(self.side)
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::classic()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::ConnectionKind;

    #[test]
    fn test_classic_board() {
        let board = Board::classic();
        assert_eq!(board.total_squares(), 100);
        assert_eq!(board.connections().len(), 21);

        let c = board.connection_at(2).unwrap();
        assert_eq!(c.end, 38);
        assert_eq!(c.kind, ConnectionKind::Shortcut);

        let s = board.connection_at(16).unwrap();
        assert_eq!(s.end, 6);
        assert_eq!(s.kind, ConnectionKind::Setback);

        assert!(board.connection_at(100).is_none());
        assert!(board.connection_at(3).is_none());
    }

    #[test]
    fn test_classic_passes_validation() {
        let validated = Board::new(CLASSIC_SIDE, CLASSIC_CONNECTIONS).unwrap();
        assert_eq!(validated, Board::classic());
    }

    #[test]
    fn test_connections_sorted() {
        let starts: Vec<_> = Board::classic().connections().iter().map(|c| c.start).collect();
        let mut sorted = starts.clone();
        sorted.sort_unstable();
        assert_eq!(starts, sorted);
    }

    #[test]
    fn test_rejects_duplicate_start() {
        let err = Board::new(10, [Connection::shortcut(5, 20), Connection::setback(5, 3)]);
        assert_eq!(err, Err(BoardError::DuplicateStart(5)));
    }

    #[test]
    fn test_rejects_out_of_range() {
        let err = Board::new(10, [Connection::shortcut(90, 101)]);
        assert!(matches!(err, Err(BoardError::OutOfRange { total: 100, .. })));

        let err = Board::new(10, [Connection::setback(5, 0)]);
        assert!(matches!(err, Err(BoardError::OutOfRange { .. })));
    }

    #[test]
    fn test_rejects_wrong_direction() {
        let err = Board::new(10, [Connection::setback(10, 40)]);
        assert!(matches!(err, Err(BoardError::WrongDirection { .. })));
    }

    #[test]
    fn test_rejects_reserved_squares() {
        assert_eq!(
            Board::new(10, [Connection::shortcut(1, 40)]),
            Err(BoardError::ReservedSquare(1))
        );
        assert_eq!(
            Board::new(10, [Connection::setback(100, 40)]),
            Err(BoardError::ReservedSquare(100))
        );
    }

    #[test]
    fn test_rejects_self_loop() {
        let conn = Connection {
            start: 12,
            end: 12,
            kind: ConnectionKind::Shortcut,
        };
        assert_eq!(Board::new(10, [conn]), Err(BoardError::SelfLoop(12)));
    }

    #[test]
    fn test_rejects_bad_side() {
        assert_eq!(Board::plain(1), Err(BoardError::InvalidSide(1)));
        assert_eq!(Board::plain(16), Err(BoardError::InvalidSide(16)));
        assert_eq!(Board::plain(15).unwrap().total_squares(), 225);
    }
}
