use bevy::prelude::*;

/// Sprite of a body, `name` matches the id the controller knows it by.
#[derive(Debug, Clone, Component)]
pub struct Planet {
    pub name: String,
}

#[derive(Component)]
pub struct Star;

pub fn planet_color(name: &str) -> Color {
    match name.to_ascii_lowercase().as_str() {
        "mercury" => Color::BEIGE,
        "venus" => Color::ORANGE,
        "earth" => Color::BLUE,
        "mars" => Color::RED,
        "jupiter" => Color::ORANGE_RED,
        "saturn" => Color::YELLOW_GREEN,
        "uranus" => Color::ALICE_BLUE,
        "neptune" => Color::MIDNIGHT_BLUE,
        _ => Color::GRAY,
    }
}
