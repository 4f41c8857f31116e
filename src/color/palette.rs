//! Named colors of the CSS/X11 palette.
//!
//! Every color is opaque except [TRANSPARENT].
//! # Examples
//! ```
//! use halp_math::color::{palette, Color};
//!
//! assert_eq!(palette::CORNFLOWER_BLUE, Color::new(100, 149, 237, 255));
//! assert_eq!(palette::by_name("CornflowerBlue"), Some(palette::CORNFLOWER_BLUE));
//! assert_eq!(palette::by_name("not a color"), None);
//! ```
use crate::color::Color;

macro_rules! named_colors {
    ($($constant:ident, $name:literal, $r:literal, $g:literal, $b:literal;)*) => {
        $(#[doc = $name]
        pub const $constant: Color = Color::new($r, $g, $b, 255);)*

        const NAMED: &[(&str, Color)] = &[$(($name, $constant),)*];
    };
}

/// A fully transparent black.
pub const TRANSPARENT: Color = Color::new(0, 0, 0, 0);

named_colors! {
    ALICE_BLUE, "AliceBlue", 240, 248, 255;
    ANTIQUE_WHITE, "AntiqueWhite", 250, 235, 215;
    AQUA, "Aqua", 0, 255, 255;
    AQUAMARINE, "Aquamarine", 127, 255, 212;
    AZURE, "Azure", 240, 255, 255;
    BEIGE, "Beige", 245, 245, 220;
    BISQUE, "Bisque", 255, 228, 196;
    BLACK, "Black", 0, 0, 0;
    BLANCHED_ALMOND, "BlanchedAlmond", 255, 235, 205;
    BLUE, "Blue", 0, 0, 255;
    BLUE_VIOLET, "BlueViolet", 138, 43, 226;
    BROWN, "Brown", 165, 42, 42;
    BURLY_WOOD, "BurlyWood", 222, 184, 135;
    CADET_BLUE, "CadetBlue", 95, 158, 160;
    CHARTREUSE, "Chartreuse", 127, 255, 0;
    CHOCOLATE, "Chocolate", 210, 105, 30;
    CORAL, "Coral", 255, 127, 80;
    CORNFLOWER_BLUE, "CornflowerBlue", 100, 149, 237;
    CORNSILK, "Cornsilk", 255, 248, 220;
    CRIMSON, "Crimson", 220, 20, 60;
    CYAN, "Cyan", 0, 255, 255;
    DARK_BLUE, "DarkBlue", 0, 0, 139;
    DARK_CYAN, "DarkCyan", 0, 139, 139;
    DARK_GOLDENROD, "DarkGoldenrod", 184, 134, 11;
    DARK_GRAY, "DarkGray", 169, 169, 169;
    DARK_GREEN, "DarkGreen", 0, 100, 0;
    DARK_KHAKI, "DarkKhaki", 189, 183, 107;
    DARK_MAGENTA, "DarkMagenta", 139, 0, 139;
    DARK_OLIVE_GREEN, "DarkOliveGreen", 85, 107, 47;
    DARK_ORANGE, "DarkOrange", 255, 140, 0;
    DARK_ORCHID, "DarkOrchid", 153, 50, 204;
    DARK_RED, "DarkRed", 139, 0, 0;
    DARK_SALMON, "DarkSalmon", 233, 150, 122;
    DARK_SEA_GREEN, "DarkSeaGreen", 143, 188, 139;
    DARK_SLATE_BLUE, "DarkSlateBlue", 72, 61, 139;
    DARK_SLATE_GRAY, "DarkSlateGray", 47, 79, 79;
    DARK_TURQUOISE, "DarkTurquoise", 0, 206, 209;
    DARK_VIOLET, "DarkViolet", 148, 0, 211;
    DEEP_PINK, "DeepPink", 255, 20, 147;
    DEEP_SKY_BLUE, "DeepSkyBlue", 0, 191, 255;
    DIM_GRAY, "DimGray", 105, 105, 105;
    DODGER_BLUE, "DodgerBlue", 30, 144, 255;
    FIREBRICK, "Firebrick", 178, 34, 34;
    FLORAL_WHITE, "FloralWhite", 255, 250, 240;
    FOREST_GREEN, "ForestGreen", 34, 139, 34;
    FUCHSIA, "Fuchsia", 255, 0, 255;
    GAINSBORO, "Gainsboro", 220, 220, 220;
    GHOST_WHITE, "GhostWhite", 248, 248, 255;
    GOLD, "Gold", 255, 215, 0;
    GOLDENROD, "Goldenrod", 218, 165, 32;
    GRAY, "Gray", 128, 128, 128;
    GREEN, "Green", 0, 128, 0;
    GREEN_YELLOW, "GreenYellow", 173, 255, 47;
    HONEYDEW, "Honeydew", 240, 255, 240;
    HOT_PINK, "HotPink", 255, 105, 180;
    INDIAN_RED, "IndianRed", 205, 92, 92;
    INDIGO, "Indigo", 75, 0, 130;
    IVORY, "Ivory", 255, 255, 240;
    KHAKI, "Khaki", 240, 230, 140;
    LAVENDER, "Lavender", 230, 230, 250;
    LAVENDER_BLUSH, "LavenderBlush", 255, 240, 245;
    LAWN_GREEN, "LawnGreen", 124, 252, 0;
    LEMON_CHIFFON, "LemonChiffon", 255, 250, 205;
    LIGHT_BLUE, "LightBlue", 173, 216, 230;
    LIGHT_CORAL, "LightCoral", 240, 128, 128;
    LIGHT_CYAN, "LightCyan", 224, 255, 255;
    LIGHT_GOLDENROD_YELLOW, "LightGoldenrodYellow", 250, 250, 210;
    LIGHT_GRAY, "LightGray", 211, 211, 211;
    LIGHT_GREEN, "LightGreen", 144, 238, 144;
    LIGHT_PINK, "LightPink", 255, 182, 193;
    LIGHT_SALMON, "LightSalmon", 255, 160, 122;
    LIGHT_SEA_GREEN, "LightSeaGreen", 32, 178, 170;
    LIGHT_SKY_BLUE, "LightSkyBlue", 135, 206, 250;
    LIGHT_SLATE_GRAY, "LightSlateGray", 119, 136, 153;
    LIGHT_STEEL_BLUE, "LightSteelBlue", 176, 196, 222;
    LIGHT_YELLOW, "LightYellow", 255, 255, 224;
    LIME, "Lime", 0, 255, 0;
    LIME_GREEN, "LimeGreen", 50, 205, 50;
    LINEN, "Linen", 250, 240, 230;
    MAGENTA, "Magenta", 255, 0, 255;
    MAROON, "Maroon", 128, 0, 0;
    MEDIUM_AQUAMARINE, "MediumAquamarine", 102, 205, 170;
    MEDIUM_BLUE, "MediumBlue", 0, 0, 205;
    MEDIUM_ORCHID, "MediumOrchid", 186, 85, 211;
    MEDIUM_PURPLE, "MediumPurple", 147, 112, 219;
    MEDIUM_SEA_GREEN, "MediumSeaGreen", 60, 179, 113;
    MEDIUM_SLATE_BLUE, "MediumSlateBlue", 123, 104, 238;
    MEDIUM_SPRING_GREEN, "MediumSpringGreen", 0, 250, 154;
    MEDIUM_TURQUOISE, "MediumTurquoise", 72, 209, 204;
    MEDIUM_VIOLET_RED, "MediumVioletRed", 199, 21, 133;
    MIDNIGHT_BLUE, "MidnightBlue", 25, 25, 112;
    MINT_CREAM, "MintCream", 245, 255, 250;
    MISTY_ROSE, "MistyRose", 255, 228, 225;
    MOCCASIN, "Moccasin", 255, 228, 181;
    NAVAJO_WHITE, "NavajoWhite", 255, 222, 173;
    NAVY, "Navy", 0, 0, 128;
    OLD_LACE, "OldLace", 253, 245, 230;
    OLIVE, "Olive", 128, 128, 0;
    OLIVE_DRAB, "OliveDrab", 107, 142, 35;
    ORANGE, "Orange", 255, 165, 0;
    ORANGE_RED, "OrangeRed", 255, 69, 0;
    ORCHID, "Orchid", 218, 112, 214;
    PALE_GOLDENROD, "PaleGoldenrod", 238, 232, 170;
    PALE_GREEN, "PaleGreen", 152, 251, 152;
    PALE_TURQUOISE, "PaleTurquoise", 175, 238, 238;
    PALE_VIOLET_RED, "PaleVioletRed", 219, 112, 147;
    PAPAYA_WHIP, "PapayaWhip", 255, 239, 213;
    PEACH_PUFF, "PeachPuff", 255, 218, 185;
    PERU, "Peru", 205, 133, 63;
    PINK, "Pink", 255, 192, 203;
    PLUM, "Plum", 221, 160, 221;
    POWDER_BLUE, "PowderBlue", 176, 224, 230;
    PURPLE, "Purple", 128, 0, 128;
    RED, "Red", 255, 0, 0;
    ROSY_BROWN, "RosyBrown", 188, 143, 143;
    ROYAL_BLUE, "RoyalBlue", 65, 105, 225;
    SADDLE_BROWN, "SaddleBrown", 139, 69, 19;
    SALMON, "Salmon", 250, 128, 114;
    SANDY_BROWN, "SandyBrown", 244, 164, 96;
    SEA_GREEN, "SeaGreen", 46, 139, 87;
    SEA_SHELL, "SeaShell", 255, 245, 238;
    SIENNA, "Sienna", 160, 82, 45;
    SILVER, "Silver", 192, 192, 192;
    SKY_BLUE, "SkyBlue", 135, 206, 235;
    SLATE_BLUE, "SlateBlue", 106, 90, 205;
    SLATE_GRAY, "SlateGray", 112, 128, 144;
    SNOW, "Snow", 255, 250, 250;
    SPRING_GREEN, "SpringGreen", 0, 255, 127;
    STEEL_BLUE, "SteelBlue", 70, 130, 180;
    TAN, "Tan", 210, 180, 140;
    TEAL, "Teal", 0, 128, 128;
    THISTLE, "Thistle", 216, 191, 216;
    TOMATO, "Tomato", 255, 99, 71;
    TURQUOISE, "Turquoise", 64, 224, 208;
    VIOLET, "Violet", 238, 130, 238;
    WHEAT, "Wheat", 245, 222, 179;
    WHITE, "White", 255, 255, 255;
    WHITE_SMOKE, "WhiteSmoke", 245, 245, 245;
    YELLOW, "Yellow", 255, 255, 0;
    YELLOW_GREEN, "YellowGreen", 154, 205, 50;
}

/// Looks up a named color, ignoring the case of `name`.
///
/// Returns `None` if the name is unknown.
pub fn by_name(name: &str) -> Option<Color> {
    if name.eq_ignore_ascii_case("Transparent") {
        return Some(TRANSPARENT);
    }
    NAMED
        .iter()
        .find(|(known, _)| known.eq_ignore_ascii_case(name))
        .map(|(_, color)| *color)
}
