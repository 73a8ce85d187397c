use crate::Float;

/// The table of named colors.
///
/// The table comprises the HTML 4 and CSS 3 color keywords, including
/// `transparent`, as well as the non-standard `clear` and `navyblue`. Names
/// are lowercase and sorted by byte value, so that lookups can use binary
/// search. Each color is packed as `0xAARRGGBB`.
pub(crate) const NAMED_COLORS: [(&str, u32); 150] = [
    ("aliceblue", 0xff_f0f8ff),
    ("antiquewhite", 0xff_faebd7),
    ("aqua", 0xff_00ffff),
    ("aquamarine", 0xff_7fffd4),
    ("azure", 0xff_f0ffff),
    ("beige", 0xff_f5f5dc),
    ("bisque", 0xff_ffe4c4),
    ("black", 0xff_000000),
    ("blanchedalmond", 0xff_ffebcd),
    ("blue", 0xff_0000ff),
    ("blueviolet", 0xff_8a2be2),
    ("brown", 0xff_a52a2a),
    ("burlywood", 0xff_deb887),
    ("cadetblue", 0xff_5f9ea0),
    ("chartreuse", 0xff_7fff00),
    ("chocolate", 0xff_d2691e),
    ("clear", 0x7f_000000),
    ("coral", 0xff_ff7f50),
    ("cornflowerblue", 0xff_6495ed),
    ("cornsilk", 0xff_fff8dc),
    ("crimson", 0xff_dc143c),
    ("cyan", 0xff_00ffff),
    ("darkblue", 0xff_00008b),
    ("darkcyan", 0xff_008b8b),
    ("darkgoldenrod", 0xff_b8860b),
    ("darkgray", 0xff_a9a9a9),
    ("darkgreen", 0xff_006400),
    ("darkgrey", 0xff_a9a9a9),
    ("darkkhaki", 0xff_bdb76b),
    ("darkmagenta", 0xff_8b008b),
    ("darkolivegreen", 0xff_556b2f),
    ("darkorange", 0xff_ff8c00),
    ("darkorchid", 0xff_9932cc),
    ("darkred", 0xff_8b0000),
    ("darksalmon", 0xff_e9967a),
    ("darkseagreen", 0xff_8fbc8f),
    ("darkslateblue", 0xff_483d8b),
    ("darkslategray", 0xff_2f4f4f),
    ("darkslategrey", 0xff_2f4f4f),
    ("darkturquoise", 0xff_00ced1),
    ("darkviolet", 0xff_9400d3),
    ("deeppink", 0xff_ff1493),
    ("deepskyblue", 0xff_00bfff),
    ("dimgray", 0xff_696969),
    ("dimgrey", 0xff_696969),
    ("dodgerblue", 0xff_1e90ff),
    ("firebrick", 0xff_b22222),
    ("floralwhite", 0xff_fffaf0),
    ("forestgreen", 0xff_228b22),
    ("fuchsia", 0xff_ff00ff),
    ("gainsboro", 0xff_dcdcdc),
    ("ghostwhite", 0xff_f8f8ff),
    ("gold", 0xff_ffd700),
    ("goldenrod", 0xff_daa520),
    ("gray", 0xff_808080),
    ("green", 0xff_008000),
    ("greenyellow", 0xff_adff2f),
    ("grey", 0xff_808080),
    ("honeydew", 0xff_f0fff0),
    ("hotpink", 0xff_ff69b4),
    ("indianred", 0xff_cd5c5c),
    ("indigo", 0xff_4b0082),
    ("ivory", 0xff_fffff0),
    ("khaki", 0xff_f0e68c),
    ("lavender", 0xff_e6e6fa),
    ("lavenderblush", 0xff_fff0f5),
    ("lawngreen", 0xff_7cfc00),
    ("lemonchiffon", 0xff_fffacd),
    ("lightblue", 0xff_add8e6),
    ("lightcoral", 0xff_f08080),
    ("lightcyan", 0xff_e0ffff),
    ("lightgoldenrodyellow", 0xff_fafad2),
    ("lightgray", 0xff_d3d3d3),
    ("lightgreen", 0xff_90ee90),
    ("lightgrey", 0xff_d3d3d3),
    ("lightpink", 0xff_ffb6c1),
    ("lightsalmon", 0xff_ffa07a),
    ("lightseagreen", 0xff_20b2aa),
    ("lightskyblue", 0xff_87cefa),
    ("lightslategray", 0xff_778899),
    ("lightslategrey", 0xff_778899),
    ("lightsteelblue", 0xff_b0c4de),
    ("lightyellow", 0xff_ffffe0),
    ("lime", 0xff_00ff00),
    ("limegreen", 0xff_32cd32),
    ("linen", 0xff_faf0e6),
    ("magenta", 0xff_ff00ff),
    ("maroon", 0xff_800000),
    ("mediumaquamarine", 0xff_66cdaa),
    ("mediumblue", 0xff_0000cd),
    ("mediumorchid", 0xff_ba55d3),
    ("mediumpurple", 0xff_9370db),
    ("mediumseagreen", 0xff_3cb371),
    ("mediumslateblue", 0xff_7b68ee),
    ("mediumspringgreen", 0xff_00fa9a),
    ("mediumturquoise", 0xff_48d1cc),
    ("mediumvioletred", 0xff_c71585),
    ("midnightblue", 0xff_191970),
    ("mintcream", 0xff_f5fffa),
    ("mistyrose", 0xff_ffe4e1),
    ("moccasin", 0xff_ffe4b5),
    ("navajowhite", 0xff_ffdead),
    ("navy", 0xff_000080),
    ("navyblue", 0xff_9fafdf),
    ("oldlace", 0xff_fdf5e6),
    ("olive", 0xff_808000),
    ("olivedrab", 0xff_6b8e23),
    ("orange", 0xff_ffa500),
    ("orangered", 0xff_ff4500),
    ("orchid", 0xff_da70d6),
    ("palegoldenrod", 0xff_eee8aa),
    ("palegreen", 0xff_98fb98),
    ("paleturquoise", 0xff_afeeee),
    ("palevioletred", 0xff_db7093),
    ("papayawhip", 0xff_ffefd5),
    ("peachpuff", 0xff_ffdab9),
    ("peru", 0xff_cd853f),
    ("pink", 0xff_ffc0cb),
    ("plum", 0xff_dda0dd),
    ("powderblue", 0xff_b0e0e6),
    ("purple", 0xff_800080),
    ("red", 0xff_ff0000),
    ("rosybrown", 0xff_bc8f8f),
    ("royalblue", 0xff_4169e1),
    ("saddlebrown", 0xff_8b4513),
    ("salmon", 0xff_fa8072),
    ("sandybrown", 0xff_f4a460),
    ("seagreen", 0xff_2e8b57),
    ("seashell", 0xff_fff5ee),
    ("sienna", 0xff_a0522d),
    ("silver", 0xff_c0c0c0),
    ("skyblue", 0xff_87ceeb),
    ("slateblue", 0xff_6a5acd),
    ("slategray", 0xff_708090),
    ("slategrey", 0xff_708090),
    ("snow", 0xff_fffafa),
    ("springgreen", 0xff_00ff7f),
    ("steelblue", 0xff_4682b4),
    ("tan", 0xff_d2b48c),
    ("teal", 0xff_008080),
    ("thistle", 0xff_d8bfd8),
    ("tomato", 0xff_ff6347),
    ("transparent", 0x00_000000),
    ("turquoise", 0xff_40e0d0),
    ("violet", 0xff_ee82ee),
    ("wheat", 0xff_f5deb3),
    ("white", 0xff_ffffff),
    ("whitesmoke", 0xff_f5f5f5),
    ("yellow", 0xff_ffff00),
    ("yellowgreen", 0xff_9acd32),
];

/// Look up the packed ARGB value for the lowercase name.
pub(crate) fn find_named(name: &str) -> Option<u32> {
    NAMED_COLORS
        .binary_search_by(|(key, _)| (*key).cmp(name))
        .ok()
        .map(|index| NAMED_COLORS[index].1)
}

/// Unpack a `0xAARRGGBB` integer into unit-range RGBA channels.
pub(crate) fn unpack_argb(argb: u32) -> [Float; 4] {
    let [a, r, g, b] = argb.to_be_bytes();
    [
        r as Float / 255.0,
        g as Float / 255.0,
        b as Float / 255.0,
        a as Float / 255.0,
    ]
}

#[cfg(test)]
mod test {
    use super::{find_named, unpack_argb, NAMED_COLORS};

    #[test]
    fn test_table_is_sorted() {
        for pair in NAMED_COLORS.windows(2) {
            assert!(pair[0].0 < pair[1].0, "{} before {}", pair[0].0, pair[1].0);
        }
    }

    #[test]
    fn test_find_named() {
        assert_eq!(find_named("springgreen"), Some(0xff_00ff7f));
        assert_eq!(find_named("aliceblue"), Some(0xff_f0f8ff));
        assert_eq!(find_named("yellowgreen"), Some(0xff_9acd32));
        assert_eq!(find_named("clear"), Some(0x7f_000000));
        assert_eq!(find_named("SpringGreen"), None);
        assert_eq!(find_named("octarine"), None);
    }

    #[test]
    fn test_unpack() {
        assert_eq!(unpack_argb(0xff_ff0000), [1.0, 0.0, 0.0, 1.0]);
        assert_eq!(unpack_argb(0x00_000000), [0.0, 0.0, 0.0, 0.0]);
    }
}
