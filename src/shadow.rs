//! Shadow, the permutation used to initialize and advance the Spook duplex.
//!
//! Shadow operates on a multi-LS-state of three rows ([`Shadow384`]) or four rows
//! ([`Shadow512`]). Each step applies the LS-state rounds to every row independently, then mixes
//! the rows together with the D-box.
use zeroize::Zeroize;

use crate::ls::{add_rc, lbox_layer, sbox_layer, LsState, N_STEPS};

/// The 384-bit Shadow permutation, used by the `*384` Spook instances.
pub type Shadow384 = Shadow<3>;

/// The 512-bit Shadow permutation, used by the `*512` Spook instances.
pub type Shadow512 = Shadow<4>;

/// The generic Shadow permutation, parameterized with its number of LS-state rows.
#[derive(Clone, Debug, PartialEq, Eq, Zeroize)]
pub struct Shadow<const ROWS: usize>([LsState; ROWS]);

impl<const ROWS: usize> Default for Shadow<ROWS> {
    fn default() -> Self {
        Shadow([[0u32; 4]; ROWS])
    }
}

impl<const ROWS: usize> From<[LsState; ROWS]> for Shadow<ROWS> {
    fn from(rows: [LsState; ROWS]) -> Self {
        Shadow(rows)
    }
}

impl<const ROWS: usize> AsRef<[LsState; ROWS]> for Shadow<ROWS> {
    fn as_ref(&self) -> &[LsState; ROWS] {
        &self.0
    }
}

impl<const ROWS: usize> AsMut<[LsState; ROWS]> for Shadow<ROWS> {
    fn as_mut(&mut self) -> &mut [LsState; ROWS] {
        &mut self.0
    }
}

impl<const ROWS: usize> Shadow<ROWS> {
    /// Permutes the state.
    pub fn permute(&mut self) {
        for step in 0..N_STEPS {
            for (i, row) in self.0.iter_mut().enumerate() {
                sbox_layer(row);
                lbox_layer(row);
                add_rc(row, 2 * step, i as u32);
                sbox_layer(row);
            }
            dbox(&mut self.0);
            for (i, row) in self.0.iter_mut().enumerate() {
                add_rc(row, 2 * step + 1, i as u32);
            }
        }
    }
}

/// The row-mixing layer.
#[inline(always)]
fn dbox<const ROWS: usize>(x: &mut [LsState; ROWS]) {
    let y = *x;
    match ROWS {
        3 => {
            for i in 0..4 {
                x[0][i] = y[0][i] ^ y[1][i] ^ y[2][i];
                x[1][i] = y[0][i] ^ y[2][i];
                x[2][i] = y[0][i] ^ y[1][i];
            }
        }
        4 => {
            // Each row becomes the sum of the other three.
            for i in 0..4 {
                let sum = y.iter().fold(0, |acc, row| acc ^ row[i]);
                for (out, row) in x.iter_mut().zip(&y) {
                    out[i] = sum ^ row[i];
                }
            }
        }
        _ => unreachable!("Shadow is defined for 3 or 4 rows, not {}", ROWS),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ls::to_bytes;

    fn state_bytes<const ROWS: usize>(state: &Shadow<ROWS>) -> Vec<u8> {
        state.as_ref().iter().flat_map(to_bytes).collect()
    }

    #[test]
    fn shadow384_kat() {
        // produced by the Spook v2.0 reference implementation
        let mut state = Shadow384::default();
        state.permute();
        assert_eq!(
            state_bytes(&state),
            [
                0xe9, 0x87, 0x85, 0x62, 0xba, 0x13, 0x04, 0x13, 0xcf, 0xd4, 0xb1, 0x25, 0xfc, 0x6f,
                0x26, 0xd7, 0x2d, 0x7e, 0x15, 0xc7, 0x10, 0x8f, 0x40, 0x8f, 0x9f, 0x4b, 0x3d, 0x67,
                0x68, 0xea, 0x04, 0x7d, 0x2a, 0x9f, 0xf1, 0xe7, 0xa0, 0xf2, 0x0a, 0x85, 0xdb, 0x65,
                0x24, 0x90, 0x21, 0x55, 0x96, 0x55,
            ]
        );
    }

    #[test]
    fn shadow512_kat() {
        // produced by the Spook v2.0 reference implementation
        let mut state = Shadow512::default();
        state.permute();
        assert_eq!(
            state_bytes(&state),
            [
                0x30, 0x89, 0x22, 0x96, 0x12, 0xcf, 0x76, 0x60, 0xe6, 0xab, 0x93, 0xaf, 0x22, 0x33,
                0xe8, 0xbf, 0x7f, 0xac, 0x96, 0x26, 0x24, 0xca, 0xc7, 0x02, 0xe6, 0x4c, 0x5c, 0x5b,
                0x6c, 0xad, 0xbf, 0x2f, 0x2f, 0xa3, 0x1f, 0xdc, 0x96, 0xc2, 0x54, 0x4f, 0x7b, 0x59,
                0xcd, 0xdb, 0xc0, 0xfb, 0x0e, 0x1a, 0xb7, 0x41, 0x48, 0x97, 0xac, 0x86, 0xb0, 0x5f,
                0x2b, 0x7a, 0xe4, 0xd1, 0x56, 0x8f, 0x68, 0xd7,
            ]
        );
    }

    #[test]
    fn dbox512_is_an_involution() {
        let rows = [[1, 2, 3, 4], [5, 6, 7, 8], [9, 10, 11, 12], [13, 14, 15, 16]];
        let mut x = rows;
        dbox(&mut x);
        assert_ne!(x, rows);
        dbox(&mut x);
        assert_eq!(x, rows);
    }

    #[test]
    fn rows_are_not_symmetric() {
        // Identical rows must diverge thanks to the row-shifted round constants.
        let mut state = Shadow384::from([[7, 7, 7, 7]; 3]);
        state.permute();
        let rows = state.as_ref();
        assert_ne!(rows[0], rows[1]);
        assert_ne!(rows[1], rows[2]);
    }
}
