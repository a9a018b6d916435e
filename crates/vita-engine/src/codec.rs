//! Fixed-layout byte encoding of a distributed tile.
//!
//! ```text
//! offset  len   field
//! 0       32    own id
//! 32      32    top neighbour id
//! 64      32    bottom neighbour id
//! 96      32    left neighbour id
//! 128     32    right neighbour id
//! 160     h*w   cells, row-major, one byte each (0 dead, 1 alive)
//! ```
//!
//! There is no header, version or length prefix: the reader must already
//! know the tile's dimensions, and a buffer of any other length is rejected.

use vita_core::{Direction, TileError, TileId, ID_LEN};

/// Bytes before the cell section.
pub const HEADER_LEN: usize = 5 * ID_LEN;

/// Encoded size of a tile with `cell_count` cells.
pub fn encoded_len(cell_count: usize) -> usize {
    HEADER_LEN + cell_count
}

/// A decoded tile, borrowing its cell bytes from the input buffer.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TileRecord<'a> {
    /// The tile's own id.
    pub id: TileId,
    /// Neighbour ids indexed by [`Direction::index`].
    pub neighbours: [TileId; 4],
    /// Cell bytes.
    pub cells: &'a [u8],
}

impl<'a> TileRecord<'a> {
    /// Neighbour id on one side.
    pub fn neighbour(&self, direction: Direction) -> TileId {
        self.neighbours[direction.index()]
    }

    /// Write the record into `buf`, which must be exactly
    /// [`encoded_len`]`(cells.len())` bytes. Returns the number of bytes
    /// written.
    pub fn encode_into(&self, buf: &mut [u8]) -> Result<usize, TileError> {
        check_len(buf.len(), self.cells.len())?;
        buf[..ID_LEN].copy_from_slice(self.id.as_bytes());
        for direction in Direction::ALL {
            let start = id_offset(direction);
            buf[start..start + ID_LEN].copy_from_slice(self.neighbour(direction).as_bytes());
        }
        buf[HEADER_LEN..].copy_from_slice(self.cells);
        Ok(buf.len())
    }

    /// The record in a freshly allocated buffer of
    /// [`encoded_len`]`(cells.len())` bytes.
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut buf = Vec::with_capacity(encoded_len(self.cells.len()));
        buf.extend_from_slice(self.id.as_bytes());
        for direction in Direction::ALL {
            buf.extend_from_slice(self.neighbour(direction).as_bytes());
        }
        buf.extend_from_slice(self.cells);
        buf
    }

    /// Parse `buf` as a tile of `cell_count` cells.
    pub fn decode(buf: &'a [u8], cell_count: usize) -> Result<Self, TileError> {
        check_len(buf.len(), cell_count)?;
        let id = TileId::from_slice(&buf[..ID_LEN])?;
        let mut neighbours = [TileId::NULL; 4];
        for direction in Direction::ALL {
            let start = id_offset(direction);
            neighbours[direction.index()] = TileId::from_slice(&buf[start..start + ID_LEN])?;
        }
        Ok(Self {
            id,
            neighbours,
            cells: &buf[HEADER_LEN..],
        })
    }
}

fn id_offset(direction: Direction) -> usize {
    ID_LEN * (1 + direction.index())
}

fn check_len(actual: usize, cell_count: usize) -> Result<(), TileError> {
    let expected = encoded_len(cell_count);
    if actual != expected {
        return Err(TileError::LengthMismatch { expected, actual });
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn id(fill: u8) -> TileId {
        TileId::from_bytes([fill; ID_LEN])
    }

    #[test]
    fn layout_offsets() {
        let cells = [1u8, 0, 1, 1];
        let rec = TileRecord {
            id: id(b'a'),
            neighbours: [id(b't'), id(b'b'), id(b'l'), id(b'r')],
            cells: &cells,
        };
        let mut buf = vec![0u8; encoded_len(4)];
        assert_eq!(rec.encode_into(&mut buf).unwrap(), 164);
        assert_eq!(buf[0], b'a');
        assert_eq!(buf[31], b'a');
        assert_eq!(buf[32], b't');
        assert_eq!(buf[64], b'b');
        assert_eq!(buf[96], b'l');
        assert_eq!(buf[128], b'r');
        assert_eq!(buf[159], b'r');
        assert_eq!(&buf[160..], &cells);
    }

    #[test]
    fn decode_reads_back_encoded_record() {
        let cells = [0u8, 1, 0];
        let rec = TileRecord {
            id: TileId::generate(),
            neighbours: [TileId::NULL, TileId::generate(), TileId::NULL, TileId::NULL],
            cells: &cells,
        };
        let mut buf = vec![0u8; encoded_len(3)];
        rec.encode_into(&mut buf).unwrap();
        assert_eq!(TileRecord::decode(&buf, 3).unwrap(), rec);
    }

    #[test]
    fn wrong_length_is_rejected() {
        let buf = vec![0u8; 170];
        assert_eq!(
            TileRecord::decode(&buf, 4).unwrap_err(),
            TileError::LengthMismatch {
                expected: 164,
                actual: 170
            }
        );
        let rec = TileRecord {
            id: TileId::NULL,
            neighbours: [TileId::NULL; 4],
            cells: &[0; 4],
        };
        let mut short = vec![0u8; 163];
        assert!(matches!(
            rec.encode_into(&mut short),
            Err(TileError::LengthMismatch { .. })
        ));
    }

    #[test]
    fn to_bytes_matches_encode_into() {
        let cells = [1u8, 1, 0, 1, 0, 0];
        let rec = TileRecord {
            id: id(b'x'),
            neighbours: [TileId::NULL, id(b'b'), TileId::NULL, id(b'r')],
            cells: &cells,
        };
        let mut buf = vec![0u8; encoded_len(6)];
        rec.encode_into(&mut buf).unwrap();
        assert_eq!(rec.to_bytes(), buf);
    }

    proptest! {
        #[test]
        fn encoded_record_decodes_to_itself(
            own in proptest::array::uniform32(any::<u8>()),
            ids in proptest::collection::vec(proptest::array::uniform32(any::<u8>()), 4),
            cells in proptest::collection::vec(0u8..=1, 0..64),
        ) {
            let rec = TileRecord {
                id: TileId::from_bytes(own),
                neighbours: [
                    TileId::from_bytes(ids[0]),
                    TileId::from_bytes(ids[1]),
                    TileId::from_bytes(ids[2]),
                    TileId::from_bytes(ids[3]),
                ],
                cells: &cells,
            };
            let buf = rec.to_bytes();
            prop_assert_eq!(buf.len(), encoded_len(cells.len()));
            prop_assert_eq!(TileRecord::decode(&buf, cells.len()).unwrap(), rec);
        }
    }
}
