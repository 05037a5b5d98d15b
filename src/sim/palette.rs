//! Random cosmetic colors
//!
//! Colors are CSS color names, handed to the renderer untouched.

use rand::Rng;
use rand::seq::IndexedRandom;

/// Obstacle fill colors (light, to stand out against the floor)
pub const OBSTACLE_COLORS: [&str; 9] = [
    "white",
    "lightblue",
    "azure",
    "chartreuse",
    "salmon",
    "lemonchiffon",
    "lightcyan",
    "palegreen",
    "paleturquoise",
];

/// Floor colors, one picked per run
pub const FLOOR_COLORS: [&str; 10] = [
    "blue",
    "rebeccapurple",
    "teal",
    "yellowgreen",
    "tomato",
    "orange",
    "indigo",
    "firebrick",
    "crimson",
    "coral",
];

/// Pick uniformly from a non-empty palette
pub fn pick<R: Rng + ?Sized>(rng: &mut R, palette: &[&'static str]) -> &'static str {
    palette.choose(rng).copied().unwrap_or("white")
}
