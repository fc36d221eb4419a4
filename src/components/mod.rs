//! The components module contains the card and the gallery that hosts it.

mod gallery;
mod image_card;

pub use gallery::*;
pub use image_card::*;
