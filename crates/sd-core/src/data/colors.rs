//! Palette definitions and the name -> color lookup.

/// RGB color triple
pub type Color = (u8, u8, u8);

pub const BLACK: Color = (0, 0, 0);
pub const WHITE: Color = (255, 255, 255);
pub const RED: Color = (255, 0, 0);
pub const ORANGE: Color = (255, 127, 0);
pub const YELLOW: Color = (255, 255, 0);
pub const VIOLET: Color = (127, 0, 255);
pub const GREEN: Color = (0, 255, 0);
pub const DESATURATED_GREEN: Color = (63, 127, 63);
pub const DARKER_GREEN: Color = (0, 127, 0);
pub const LIGHT_GRAY: Color = (159, 159, 159);

/// Look up a palette color by name
pub fn color_by_name(name: &str) -> Option<Color> {
    match name {
        "black" => Some(BLACK),
        "white" => Some(WHITE),
        "red" => Some(RED),
        "orange" => Some(ORANGE),
        "yellow" => Some(YELLOW),
        "violet" => Some(VIOLET),
        "green" => Some(GREEN),
        "desaturated_green" => Some(DESATURATED_GREEN),
        "darker_green" => Some(DARKER_GREEN),
        "light_gray" => Some(LIGHT_GRAY),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lookup_known_names() {
        assert_eq!(color_by_name("red"), Some(RED));
        assert_eq!(color_by_name("desaturated_green"), Some(DESATURATED_GREEN));
        assert_eq!(color_by_name("white"), Some(WHITE));
    }

    #[test]
    fn test_lookup_unknown_name() {
        assert_eq!(color_by_name("heliotrope"), None);
        assert_eq!(color_by_name(""), None);
    }
}
