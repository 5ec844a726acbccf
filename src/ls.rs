//! The LS-state algebra shared by Clyde-128 and Shadow.
//!
//! An LS-state is a 4×32 bit matrix stored as four little-endian rows. The S-box operates on the
//! columns of the matrix (bitsliced across the four rows) and the L-box operates on pairs of rows.
use byteorder::{ByteOrder, LittleEndian};

/// A 128-bit LS-state: four 32-bit rows.
pub type LsState = [u32; 4];

/// The size of an LS-state in bytes.
pub const LS_SIZE: usize = 16;

/// The number of steps in both Clyde-128 and Shadow. Each step is two rounds.
pub const N_STEPS: usize = 6;

/// Round constants, one 4-bit column per round.
const RC: [LsState; 2 * N_STEPS] = [
    [1, 0, 0, 0],
    [0, 1, 0, 0],
    [0, 0, 1, 0],
    [0, 0, 0, 1],
    [1, 1, 0, 0],
    [0, 1, 1, 0],
    [0, 0, 1, 1],
    [1, 1, 0, 1],
    [1, 0, 1, 0],
    [0, 1, 0, 1],
    [1, 1, 1, 0],
    [0, 1, 1, 1],
];

#[inline(always)]
fn lbox(x: u32, y: u32) -> (u32, u32) {
    let mut a = x ^ x.rotate_right(12);
    let mut b = y ^ y.rotate_right(12);
    a ^= a.rotate_right(3);
    b ^= b.rotate_right(3);
    a ^= x.rotate_right(17);
    b ^= y.rotate_right(17);
    let c = a ^ a.rotate_right(31);
    let d = b ^ b.rotate_right(31);
    a ^= d.rotate_right(26);
    b ^= c.rotate_right(25);
    a ^= c.rotate_right(15);
    b ^= d.rotate_right(15);
    (a, b)
}

#[inline(always)]
fn lbox_inv(x: u32, y: u32) -> (u32, u32) {
    let mut a = x ^ x.rotate_right(25);
    let mut b = y ^ y.rotate_right(25);
    let mut c = x ^ a.rotate_right(31);
    let mut d = y ^ b.rotate_right(31);
    c ^= a.rotate_right(20);
    d ^= b.rotate_right(20);
    a = c ^ c.rotate_right(31);
    b = d ^ d.rotate_right(31);
    c ^= b.rotate_right(26);
    d ^= a.rotate_right(25);
    a ^= c.rotate_right(17);
    b ^= d.rotate_right(17);
    (a.rotate_right(16), b.rotate_right(16))
}

/// Applies the L-box to rows (0, 1) and (2, 3).
#[inline]
pub fn lbox_layer(x: &mut LsState) {
    (x[0], x[1]) = lbox(x[0], x[1]);
    (x[2], x[3]) = lbox(x[2], x[3]);
}

/// Inverts [`lbox_layer`].
#[inline]
pub fn lbox_layer_inv(x: &mut LsState) {
    (x[0], x[1]) = lbox_inv(x[0], x[1]);
    (x[2], x[3]) = lbox_inv(x[2], x[3]);
}

/// Applies the bitsliced 4-bit S-box to every column of the state.
#[inline]
pub fn sbox_layer(x: &mut LsState) {
    let y1 = (x[0] & x[1]) ^ x[2];
    let y0 = (x[3] & x[0]) ^ x[1];
    let y3 = (y1 & x[3]) ^ x[0];
    let y2 = (y0 & y1) ^ x[3];
    *x = [y0, y1, y2, y3];
}

/// Inverts [`sbox_layer`].
#[inline]
pub fn sbox_layer_inv(x: &mut LsState) {
    let y3 = (x[0] & x[1]) ^ x[2];
    let y0 = (x[1] & y3) ^ x[3];
    let y1 = (y3 & y0) ^ x[0];
    let y2 = (y0 & y1) ^ x[1];
    *x = [y0, y1, y2, y3];
}

/// XORs the constant of round `round` into the state, shifted left by `shift` bits.
///
/// Shadow uses the shift to give each of its rows a different constant.
#[inline]
pub fn add_rc(x: &mut LsState, round: usize, shift: u32) {
    for (row, rc) in x.iter_mut().zip(&RC[round]) {
        *row ^= rc << shift;
    }
}

#[inline]
pub fn xor_states(x: &mut LsState, y: &LsState) {
    for (a, b) in x.iter_mut().zip(y) {
        *a ^= b;
    }
}

/// Loads an LS-state from 16 little-endian bytes.
#[inline]
pub fn from_bytes(bytes: &[u8; LS_SIZE]) -> LsState {
    let mut x = [0u32; 4];
    LittleEndian::read_u32_into(bytes, &mut x);
    x
}

/// Stores an LS-state as 16 little-endian bytes.
#[inline]
pub fn to_bytes(x: &LsState) -> [u8; LS_SIZE] {
    let mut bytes = [0u8; LS_SIZE];
    LittleEndian::write_u32_into(x, &mut bytes);
    bytes
}
