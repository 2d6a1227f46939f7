use std::collections::HashSet;

/// Google Fonts families a listing theme may request.
pub const FONT_LIST: &[&str] = &[
    "Abril Fatface",
    "Archivo Black",
    "Bebas Neue",
    "Cinzel",
    "Cormorant Garamond",
    "DM Serif Display",
    "IBM Plex Mono",
    "Inter",
    "Libre Baskerville",
    "Lora",
    "Merriweather",
    "Montserrat",
    "Orbitron",
    "Oswald",
    "Playfair Display",
    "Press Start 2P",
    "Raleway",
    "Righteous",
    "Space Grotesk",
    "VT323",
    "Work Sans",
];

lazy_static! {
    pub static ref FONTS: HashSet<&'static str> = FONT_LIST.iter().copied().collect();
}
