//! Candidate-neighborhood geometry for the Nagao-Matsuyama filter
//!
//! The filter probes each pixel with nine fixed regions inside the
//! surrounding 5x5 window and keeps the statistically flattest one. The
//! regions are pure data: constant lists of `(dy, dx)` offsets relative
//! to the evaluated pixel, so the per-pixel loop is an iteration over a
//! lookup table rather than branchy geometry code.
//!
//! # Region set
//!
//! - `center`: the full 3x3 block around the pixel (the only region that
//!   contains the pixel itself)
//! - `north` / `south` / `west` / `east`: 3x2 half-side strips between
//!   one and two pixels out
//! - `northwest` / `northeast` / `southwest` / `southeast`: six-cell
//!   corner wedges
//!
//! Near an intensity edge, the strips and wedges lying entirely on one
//! side of the edge have far lower variance than any region straddling
//! it, which is what lets the filter smooth without blurring the edge.
//! Because the eight directional regions exclude the evaluated pixel, an
//! isolated outlier cannot drag its own replacement value.

/// One candidate neighborhood: a named set of relative pixel offsets.
#[derive(Debug, Clone, Copy)]
pub struct RegionTemplate {
    /// Human-readable region name (for diagnostics)
    pub name: &'static str,
    /// Member cells as `(dy, dx)` offsets from the evaluated pixel
    pub offsets: &'static [(i8, i8)],
}

/// Largest offset magnitude in [`NAGAO_TEMPLATES`]; the input must be
/// padded by this radius before evaluation.
pub const PAD_RADIUS: u32 = 2;

/// The nine Nagao-Matsuyama candidate regions, in tie-break order.
///
/// When two regions have exactly equal variance at a pixel, the earlier
/// entry in this array wins.
pub const NAGAO_TEMPLATES: [RegionTemplate; 9] = [
    RegionTemplate {
        name: "center",
        offsets: &[
            (-1, -1),
            (-1, 0),
            (-1, 1),
            (0, -1),
            (0, 0),
            (0, 1),
            (1, -1),
            (1, 0),
            (1, 1),
        ],
    },
    RegionTemplate {
        name: "north",
        offsets: &[(-2, -1), (-2, 0), (-2, 1), (-1, -1), (-1, 0), (-1, 1)],
    },
    RegionTemplate {
        name: "south",
        offsets: &[(1, -1), (1, 0), (1, 1), (2, -1), (2, 0), (2, 1)],
    },
    RegionTemplate {
        name: "west",
        offsets: &[(-1, -2), (-1, -1), (0, -2), (0, -1), (1, -2), (1, -1)],
    },
    RegionTemplate {
        name: "east",
        offsets: &[(-1, 1), (-1, 2), (0, 1), (0, 2), (1, 1), (1, 2)],
    },
    RegionTemplate {
        name: "northwest",
        offsets: &[(-2, -2), (-2, -1), (-1, -2), (-1, -1), (-1, 0), (0, -1)],
    },
    RegionTemplate {
        name: "northeast",
        offsets: &[(-2, 1), (-2, 2), (-1, 0), (-1, 1), (-1, 2), (0, 1)],
    },
    RegionTemplate {
        name: "southwest",
        offsets: &[(0, -1), (1, -2), (1, -1), (1, 0), (2, -2), (2, -1)],
    },
    RegionTemplate {
        name: "southeast",
        offsets: &[(0, 1), (1, 0), (1, 1), (1, 2), (2, 1), (2, 2)],
    },
];
