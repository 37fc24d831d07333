//! Base-14 font dictionaries and width metrics
//!
//! The test sheet only uses Helvetica and Helvetica-Bold, two of the 14
//! standard PDF fonts that every viewer ships, so no font data needs to be
//! embedded. The AFM width tables below are required to center text: the
//! page description can only place a string at an x position, so the layout
//! code has to know how wide the string will render.

use lopdf::{dictionary, Dictionary};

/// Fonts available on the test sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontFace {
    Helvetica,
    HelveticaBold,
}

impl FontFace {
    /// PostScript name used as the BaseFont entry
    pub fn base_font(&self) -> &'static str {
        match self {
            FontFace::Helvetica => "Helvetica",
            FontFace::HelveticaBold => "Helvetica-Bold",
        }
    }

    fn widths(&self) -> &'static [u16; 95] {
        match self {
            FontFace::Helvetica => &HELVETICA_WIDTHS,
            FontFace::HelveticaBold => &HELVETICA_BOLD_WIDTHS,
        }
    }
}

/// Build a Type1 font dictionary for one of the standard 14 fonts
pub fn type1_font(face: FontFace) -> Dictionary {
    dictionary! {
        "Type" => "Font",
        "Subtype" => "Type1",
        "BaseFont" => face.base_font(),
    }
}

/// Width of `text` in points when set in `face` at `size`
///
/// Widths come from the Adobe AFM tables. Bytes outside the printable ASCII
/// range fall back to an average width; the strings drawn on the test sheet
/// are all ASCII.
pub fn text_width(text: &str, face: FontFace, size: f64) -> f64 {
    let widths = face.widths();
    let total: u32 = text.bytes().map(|b| u32::from(glyph_width(widths, b))).sum();
    f64::from(total) * size / 1000.0
}

fn glyph_width(widths: &[u16; 95], byte: u8) -> u16 {
    if (0x20..=0x7e).contains(&byte) {
        widths[usize::from(byte - 0x20)]
    } else {
        AVERAGE_WIDTH
    }
}

/// Fallback width for glyphs outside the table, in 1/1000 em
const AVERAGE_WIDTH: u16 = 556;

/// Helvetica glyph widths for chars 32-126, in 1/1000 em
const HELVETICA_WIDTHS: [u16; 95] = [
    278, 278, 355, 556, 556, 889, 667, 191, 333, 333, // space ! " # $ % & ' ( )
    389, 584, 278, 333, 278, 278, 556, 556, 556, 556, // * + , - . / 0 1 2 3
    556, 556, 556, 556, 556, 556, 278, 278, 584, 584, // 4 5 6 7 8 9 : ; < =
    584, 556, 1015, 667, 667, 722, 722, 667, 611, 778, // > ? @ A B C D E F G
    722, 278, 500, 667, 556, 833, 722, 778, 667, 778, // H I J K L M N O P Q
    722, 667, 611, 722, 667, 944, 667, 667, 611, 278, // R S T U V W X Y Z [
    278, 278, 469, 556, 333, 556, 556, 500, 556, 556, // \ ] ^ _ ` a b c d e
    278, 556, 556, 222, 222, 500, 222, 833, 556, 556, // f g h i j k l m n o
    556, 556, 333, 500, 278, 556, 500, 722, 500, 500, // p q r s t u v w x y
    500, 334, 260, 334, 584, // z { | } ~
];

/// Helvetica-Bold glyph widths for chars 32-126, in 1/1000 em
const HELVETICA_BOLD_WIDTHS: [u16; 95] = [
    278, 333, 474, 556, 556, 889, 722, 238, 333, 333, // space ! " # $ % & ' ( )
    389, 584, 278, 333, 278, 278, 556, 556, 556, 556, // * + , - . / 0 1 2 3
    556, 556, 556, 556, 556, 556, 333, 333, 584, 584, // 4 5 6 7 8 9 : ; < =
    584, 611, 975, 722, 722, 722, 722, 667, 611, 778, // > ? @ A B C D E F G
    722, 278, 556, 722, 611, 833, 722, 778, 667, 778, // H I J K L M N O P Q
    722, 667, 611, 722, 667, 944, 667, 667, 611, 333, // R S T U V W X Y Z [
    278, 333, 584, 556, 333, 556, 611, 556, 611, 556, // \ ] ^ _ ` a b c d e
    333, 611, 611, 278, 278, 556, 278, 889, 611, 611, // f g h i j k l m n o
    611, 611, 389, 556, 333, 611, 556, 778, 556, 556, // p q r s t u v w x y
    500, 389, 280, 389, 584, // z { | } ~
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_space_width() {
        // A 10pt space in either face is 2.78pt wide
        assert!((text_width(" ", FontFace::Helvetica, 10.0) - 2.78).abs() < 0.001);
        assert!((text_width(" ", FontFace::HelveticaBold, 10.0) - 2.78).abs() < 0.001);
    }

    #[test]
    fn test_bold_wider_than_regular() {
        let text = "HP DeskJet Test Page";
        let regular = text_width(text, FontFace::Helvetica, 16.0);
        let bold = text_width(text, FontFace::HelveticaBold, 16.0);
        assert!(bold > regular);
    }

    #[test]
    fn test_width_scales_with_size() {
        let at_12 = text_width("Magenta", FontFace::Helvetica, 12.0);
        let at_24 = text_width("Magenta", FontFace::Helvetica, 24.0);
        assert!((at_24 - 2.0 * at_12).abs() < 0.001);
    }

    #[test]
    fn test_non_ascii_falls_back_to_average() {
        let width = text_width("\u{00e9}", FontFace::Helvetica, 10.0);
        // é is two UTF-8 bytes, both outside the table
        assert!((width - 2.0 * 5.56).abs() < 0.001);
    }
}
