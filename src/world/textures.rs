//! Compiled-in texel data for the demo map.

pub const BRICK_SIZE: usize = 16;

/// Offset-row brick pattern, 16×16.
#[rustfmt::skip]
pub const BRICK: [f32; BRICK_SIZE * BRICK_SIZE] = [
    0.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 0.8, 0.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 0.8,
    0.0, 0.8, 1.0, 1.0, 1.0, 1.0, 0.8, 0.5, 0.0, 0.8, 1.0, 1.0, 1.0, 1.0, 0.8, 0.5,
    0.0, 0.5, 0.5, 0.5, 0.5, 0.5, 0.5, 0.5, 0.0, 0.5, 0.5, 0.5, 0.5, 0.5, 0.5, 0.5,
    0.0, 0.1, 0.1, 0.1, 0.1, 0.0, 0.0, 0.0, 0.0, 0.1, 0.1, 0.1, 0.1, 0.0, 0.0, 0.0,
    1.0, 1.0, 1.0, 0.8, 0.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 0.8, 0.0, 1.0, 1.0, 1.0,
    1.0, 1.0, 0.8, 0.5, 0.0, 0.8, 1.0, 1.0, 1.0, 1.0, 0.8, 0.5, 0.0, 0.8, 1.0, 1.0,
    0.5, 0.5, 0.5, 0.5, 0.0, 0.5, 0.5, 0.5, 0.5, 0.5, 0.5, 0.5, 0.0, 0.5, 0.5, 0.5,
    0.1, 0.0, 0.0, 0.0, 0.0, 0.1, 0.1, 0.1, 0.1, 0.0, 0.0, 0.0, 0.0, 0.1, 0.1, 0.1,
    0.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 0.8, 0.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 0.8,
    0.0, 0.8, 1.0, 1.0, 1.0, 1.0, 0.8, 0.5, 0.0, 0.8, 1.0, 1.0, 1.0, 1.0, 0.8, 0.5,
    0.0, 0.5, 0.5, 0.5, 0.5, 0.5, 0.5, 0.5, 0.0, 0.5, 0.5, 0.5, 0.5, 0.5, 0.5, 0.5,
    0.0, 0.1, 0.1, 0.1, 0.1, 0.0, 0.0, 0.0, 0.0, 0.1, 0.1, 0.1, 0.1, 0.0, 0.0, 0.0,
    1.0, 1.0, 1.0, 0.8, 0.0, 1.0, 1.0, 1.0, 1.0, 1.0, 1.0, 0.8, 0.0, 1.0, 1.0, 1.0,
    1.0, 1.0, 0.8, 0.5, 0.0, 0.8, 1.0, 1.0, 1.0, 1.0, 0.8, 0.5, 0.0, 0.8, 1.0, 1.0,
    0.5, 0.5, 0.5, 0.5, 0.0, 0.5, 0.5, 0.5, 0.5, 0.5, 0.5, 0.5, 0.0, 0.5, 0.5, 0.5,
    0.1, 0.0, 0.0, 0.0, 0.0, 0.1, 0.1, 0.1, 0.1, 0.0, 0.0, 0.0, 0.0, 0.1, 0.1, 0.1,
];

pub const CHECKER_SIZE: usize = 2;

#[rustfmt::skip]
pub const CHECKER: [f32; CHECKER_SIZE * CHECKER_SIZE] = [
    0.0, 1.0,
    1.0, 0.0,
];
