//! Error diffusion kernel definitions.
//!
//! Each kernel lists the not-yet-visited neighbours that receive a share of
//! a pixel's quantization error, for a left-to-right, top-to-bottom scan.

/// An error diffusion kernel.
///
/// Each neighbour receives `error * weight / divisor`. The total propagated
/// is `sum(weights) / divisor`: Floyd-Steinberg passes on all of it,
/// Atkinson only 6/8.
///
/// The `max_dy` field sizes the error buffer: `max_dy + 1` rows.
#[derive(Debug, Clone, Copy)]
pub struct Kernel {
    /// (dx, dy, weight) entries. `dy` is never negative.
    pub entries: &'static [(i32, i32, u8)],

    /// Normalizing divisor for the weights.
    pub divisor: u8,

    /// Largest `dy` among the entries.
    pub max_dy: usize,
}

impl Kernel {
    /// Fraction of error this kernel propagates.
    pub fn total_weight(&self) -> f32 {
        let sum: u32 = self.entries.iter().map(|&(_, _, w)| w as u32).sum();
        sum as f32 / self.divisor as f32
    }
}

/// Atkinson kernel, 6/8 propagation.
///
/// ```text
///        X   1   1
///    1   1   1
///        1
/// ```
pub const ATKINSON: Kernel = Kernel {
    entries: &[
        (1, 0, 1),  // right
        (2, 0, 1),  // two right
        (-1, 1, 1), // bottom-left
        (0, 1, 1),  // bottom
        (1, 1, 1),  // bottom-right
        (0, 2, 1),  // two below
    ],
    divisor: 8,
    max_dy: 2,
};

/// Floyd-Steinberg kernel, 16/16 propagation.
///
/// ```text
///        X   7
///    3   5   1
/// ```
pub const FLOYD_STEINBERG: Kernel = Kernel {
    entries: &[
        (1, 0, 7),  // right
        (-1, 1, 3), // bottom-left
        (0, 1, 5),  // bottom
        (1, 1, 1),  // bottom-right
    ],
    divisor: 16,
    max_dy: 1,
};
