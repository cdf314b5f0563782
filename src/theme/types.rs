//! Badge colors for type tags.

use super::{Color, Theme};

/// Color the Pokédex uses for a type tag; unknown types are neutral gray.
pub fn type_color(type_name: &str) -> Color {
    let (r, g, b) = match type_name.to_ascii_lowercase().as_str() {
        "normal" => (0xA8, 0xA8, 0x78),
        "fire" => (0xF0, 0x80, 0x30),
        "water" => (0x68, 0x90, 0xF0),
        "electric" => (0xF8, 0xD0, 0x30),
        "grass" => (0x78, 0xC8, 0x50),
        "ice" => (0x98, 0xD8, 0xD8),
        "fighting" => (0xC0, 0x30, 0x28),
        "poison" => (0xA0, 0x40, 0xA0),
        "ground" => (0xE0, 0xC0, 0x68),
        "flying" => (0xA8, 0x90, 0xF0),
        "psychic" => (0xF8, 0x58, 0x88),
        "bug" => (0xA8, 0xB8, 0x20),
        "rock" => (0xB8, 0xA0, 0x38),
        "ghost" => (0x70, 0x58, 0x98),
        "dragon" => (0x70, 0x38, 0xF8),
        "dark" => (0x70, 0x58, 0x48),
        "steel" => (0xB8, 0xB8, 0xD0),
        "fairy" => (0xEE, 0x99, 0xAC),
        _ => (0x77, 0x77, 0x77),
    };
    Color::Rgb(r, g, b)
}

/// Upper-cased, colored type tag: `FIRE`.
pub fn type_badge(theme: &Theme, type_name: &str) -> String {
    theme.paint(type_color(type_name), &type_name.to_uppercase())
}
