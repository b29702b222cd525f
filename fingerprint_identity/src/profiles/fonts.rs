use crate::configs::Platform;
use rand::prelude::IndexedRandom;
use rand::Rng;
use std::collections::BTreeSet;

/// Windows system fonts plus the families Office installs.
pub static FONTS_WINDOWS: &[&str] = &[
    "Arial",
    "Arial Black",
    "Arial Narrow",
    "Arial Rounded MT Bold",
    "Arial Unicode MS",
    "Bahnschrift",
    "Baskerville Old Face",
    "Bell MT",
    "Book Antiqua",
    "Bookman Old Style",
    "Calibri",
    "Calibri Light",
    "Cambria",
    "Cambria Math",
    "Candara",
    "Century",
    "Century Gothic",
    "Century Schoolbook",
    "Comic Sans MS",
    "Consolas",
    "Constantia",
    "Copperplate Gothic Light",
    "Corbel",
    "Courier",
    "Courier New",
    "Ebrima",
    "Franklin Gothic Medium",
    "Gabriola",
    "Gadugi",
    "Garamond",
    "Georgia",
    "Gill Sans MT",
    "Haettenschweiler",
    "HoloLens MDL2 Assets",
    "Impact",
    "Ink Free",
    "Javanese Text",
    "Leelawadee UI",
    "Lucida Bright",
    "Lucida Console",
    "Lucida Fax",
    "Lucida Handwriting",
    "Lucida Sans",
    "Lucida Sans Typewriter",
    "Lucida Sans Unicode",
    "Malgun Gothic",
    "Marlett",
    "Microsoft Himalaya",
    "Microsoft JhengHei",
    "Microsoft New Tai Lue",
    "Microsoft PhagsPa",
    "Microsoft Sans Serif",
    "Microsoft Tai Le",
    "Microsoft YaHei",
    "Microsoft Yi Baiti",
    "MingLiU-ExtB",
    "Mongolian Baiti",
    "MS Gothic",
    "MS Outlook",
    "MS PGothic",
    "MS Reference Sans Serif",
    "MS Reference Specialty",
    "MS UI Gothic",
    "MV Boli",
    "Myanmar Text",
    "Nirmala UI",
    "Palatino Linotype",
    "Segoe MDL2 Assets",
    "Segoe Print",
    "Segoe Script",
    "Segoe UI",
    "Segoe UI Emoji",
    "Segoe UI Historic",
    "Segoe UI Symbol",
    "SimSun",
    "Sitka Text",
    "Sylfaen",
    "Symbol",
    "Tahoma",
    "Times New Roman",
    "Trebuchet MS",
    "Verdana",
    "Webdings",
    "Wingdings",
    "Yu Gothic",
    "Agency FB",
    "Algerian",
    "Bauhaus 93",
    "Berlin Sans FB",
    "Bernard MT Condensed",
    "Blackadder ITC",
    "Bodoni MT",
    "Britannic Bold",
    "Broadway",
    "Brush Script MT",
    "Californian FB",
    "Calisto MT",
    "Castellar",
    "Centaur",
    "Chiller",
    "Colonna MT",
    "Cooper Black",
    "Curlz MT",
    "Edwardian Script ITC",
    "Elephant",
    "Engravers MT",
    "Eras Bold ITC",
    "Felix Titling",
    "Footlight MT Light",
    "Forte",
    "Freestyle Script",
    "French Script MT",
    "Gigi",
    "Gloucester MT Extra Condensed",
    "Goudy Old Style",
    "Goudy Stout",
    "Harlow Solid Italic",
    "Harrington",
    "High Tower Text",
    "Imprint MT Shadow",
    "Informal Roman",
    "Jokerman",
    "Juice ITC",
    "Kristen ITC",
    "Kunstler Script",
    "Magneto",
    "Maiandra GD",
    "Matura MT Script Capitals",
    "Mistral",
    "Modern No. 20",
    "Niagara Engraved",
    "Old English Text MT",
    "Onyx",
    "Parchment",
    "Perpetua",
    "Playbill",
    "Poor Richard",
    "Pristina",
    "Rage Italic",
    "Ravie",
    "Rockwell",
    "Script MT Bold",
    "Showcard Gothic",
    "Snap ITC",
    "Stencil",
    "Tempus Sans ITC",
    "Tw Cen MT",
    "Viner Hand ITC",
    "Vivaldi",
    "Vladimir Script",
    "Wide Latin",
];

/// macOS system fonts plus the Microsoft core fonts Office ships there.
pub static FONTS_MAC: &[&str] = &[
    "American Typewriter",
    "Andale Mono",
    "Apple Chancery",
    "Apple Color Emoji",
    "Apple SD Gothic Neo",
    "AppleGothic",
    "Avenir",
    "Avenir Next",
    "Avenir Next Condensed",
    "Baskerville",
    "Big Caslon",
    "Bradley Hand",
    "Brush Script MT",
    "Chalkboard",
    "Chalkboard SE",
    "Chalkduster",
    "Charter",
    "Cochin",
    "Copperplate",
    "Didot",
    "DIN Alternate",
    "DIN Condensed",
    "Futura",
    "Geneva",
    "Gill Sans",
    "Helvetica",
    "Helvetica Neue",
    "Herculanum",
    "Hoefler Text",
    "Iowan Old Style",
    "Lucida Grande",
    "Luminari",
    "Marker Felt",
    "Menlo",
    "Monaco",
    "Noteworthy",
    "Optima",
    "Palatino",
    "Papyrus",
    "Phosphate",
    "Rockwell",
    "Savoye LET",
    "SignPainter",
    "Skia",
    "Snell Roundhand",
    "Superclarendon",
    "Trattatello",
    "Zapfino",
    "Al Nile",
    "Arial",
    "Arial Black",
    "Arial Hebrew",
    "Arial Narrow",
    "Arial Rounded MT Bold",
    "Arial Unicode MS",
    "Athelas",
    "Ayuthaya",
    "Baghdad",
    "Bangla MN",
    "Beirut",
    "Bodoni 72",
    "Bodoni 72 Oldstyle",
    "Bodoni Ornaments",
    "Comic Sans MS",
    "Courier",
    "Courier New",
    "Damascus",
    "DecoType Naskh",
    "Devanagari MT",
    "Diwan Kufi",
    "Diwan Thuluth",
    "Euphemia UCAS",
    "Farah",
    "Farisi",
    "Georgia",
    "Gujarati MT",
    "Gurmukhi MT",
    "Heiti SC",
    "Heiti TC",
    "Hiragino Kaku Gothic ProN",
    "Hiragino Maru Gothic ProN",
    "Hiragino Mincho ProN",
    "Hiragino Sans",
    "ITF Devanagari",
    "Impact",
    "InaiMathi",
    "Kailasa",
    "Kannada MN",
    "Kefa",
    "Khmer MN",
    "Kohinoor Bangla",
    "Kohinoor Devanagari",
    "Kokonor",
    "Krungthep",
    "KufiStandardGK",
    "Lao MN",
    "Malayalam MN",
    "Marion",
    "Mishafi",
    "Mshtakan",
    "Mukta Mahee",
    "Muna",
    "Myanmar MN",
    "Nadeem",
    "New Peninsula",
    "Oriya MN",
    "PT Mono",
    "PT Sans",
    "PT Serif",
    "PingFang HK",
    "PingFang SC",
    "PingFang TC",
    "Plantagenet Cherokee",
    "Raanana",
    "STIX Two Text",
    "STIXGeneral",
    "Sana",
    "Sathu",
    "Seravek",
    "Shree Devanagari 714",
    "Silom",
    "Sinhala MN",
    "Songti SC",
    "Songti TC",
    "Sukhumvit Set",
    "Symbol",
    "Tahoma",
    "Tamil MN",
    "Telugu MN",
    "Thonburi",
    "Times",
    "Times New Roman",
    "Trebuchet MS",
    "Verdana",
    "Waseem",
    "Webdings",
    "Wingdings",
    "Zapf Dingbats",
    "Apple Braille",
    "Apple Symbols",
    "AppleMyungjo",
    "Galvji",
    "Gotu",
    "Kaiti SC",
    "Nanum Gothic",
    "Nanum Myeongjo",
    "Party LET",
];

/// Fonts common on desktop Linux distributions, including the Noto script families.
pub static FONTS_LINUX: &[&str] = &[
    "DejaVu Sans",
    "DejaVu Sans Mono",
    "DejaVu Serif",
    "Liberation Mono",
    "Liberation Sans",
    "Liberation Serif",
    "Noto Sans",
    "Noto Serif",
    "Noto Mono",
    "Noto Color Emoji",
    "Ubuntu",
    "Ubuntu Mono",
    "Cantarell",
    "Droid Sans",
    "Droid Sans Mono",
    "Droid Serif",
    "FreeMono",
    "FreeSans",
    "FreeSerif",
    "Nimbus Sans",
    "Nimbus Roman",
    "URW Bookman",
    "URW Gothic",
    "Bitstream Vera Sans",
    "Roboto",
    "Open Sans",
    "Andale Mono",
    "Arial",
    "Arial Black",
    "Caladea",
    "Carlito",
    "Comic Sans MS",
    "Courier New",
    "C059",
    "D050000L",
    "Fira Mono",
    "Fira Sans",
    "Gentium",
    "Georgia",
    "Hack",
    "IPAGothic",
    "IPAMincho",
    "Impact",
    "Inconsolata",
    "Lato",
    "Linux Biolinum",
    "Linux Libertine",
    "Lohit Bengali",
    "Lohit Devanagari",
    "Lohit Gujarati",
    "Lohit Kannada",
    "Lohit Tamil",
    "Lohit Telugu",
    "Montserrat",
    "Nimbus Mono PS",
    "Noto Kufi Arabic",
    "Noto Music",
    "Noto Naskh Arabic",
    "Noto Sans Adlam",
    "Noto Sans Arabic",
    "Noto Sans Armenian",
    "Noto Sans Balinese",
    "Noto Sans Bengali",
    "Noto Sans CJK JP",
    "Noto Sans CJK KR",
    "Noto Sans CJK SC",
    "Noto Sans CJK TC",
    "Noto Sans Canadian Aboriginal",
    "Noto Sans Cherokee",
    "Noto Sans Devanagari",
    "Noto Sans Display",
    "Noto Sans Ethiopic",
    "Noto Sans Georgian",
    "Noto Sans Gujarati",
    "Noto Sans Gurmukhi",
    "Noto Sans Hebrew",
    "Noto Sans Javanese",
    "Noto Sans Kannada",
    "Noto Sans Khmer",
    "Noto Sans Lao",
    "Noto Sans Lisu",
    "Noto Sans Malayalam",
    "Noto Sans Math",
    "Noto Sans Mongolian",
    "Noto Sans Mono",
    "Noto Sans Myanmar",
    "Noto Sans Oriya",
    "Noto Sans Sinhala",
    "Noto Sans Symbols",
    "Noto Sans Symbols2",
    "Noto Sans Syriac",
    "Noto Sans Tamil",
    "Noto Sans Telugu",
    "Noto Sans Thaana",
    "Noto Sans Thai",
    "Noto Sans Tifinagh",
    "Noto Sans Yi",
    "Noto Serif Armenian",
    "Noto Serif CJK JP",
    "Noto Serif CJK SC",
    "Noto Serif Display",
    "Noto Serif Georgian",
    "Noto Serif Hebrew",
    "Noto Serif Thai",
    "Noto Serif Tibetan",
    "Oxygen",
    "P052",
    "Quicksand",
    "Raleway",
    "Source Code Pro",
    "Source Sans Pro",
    "Source Serif Pro",
    "Standard Symbols PS",
    "TeX Gyre Adventor",
    "TeX Gyre Bonum",
    "TeX Gyre Chorus",
    "TeX Gyre Cursor",
    "TeX Gyre Heros",
    "TeX Gyre Pagella",
    "TeX Gyre Schola",
    "TeX Gyre Termes",
    "Times New Roman",
    "Trebuchet MS",
    "URW Palladio",
    "Unifont",
    "Verdana",
    "Webdings",
    "WenQuanYi Micro Hei",
    "WenQuanYi Zen Hei",
    "Z003",
    "AR PL UMing CN",
    "Takao Gothic",
    "Liberation Sans Narrow",
    "Noto Sans Bamum",
    "Noto Sans Buginese",
    "Noto Sans Chakma",
    "Noto Sans Coptic",
    "Noto Sans Gothic",
    "Noto Sans NKo",
    "Noto Sans Ol Chiki",
    "Noto Sans Runic",
    "Noto Sans Sundanese",
    "Noto Sans Tagalog",
    "Noto Serif Bengali",
    "Noto Serif Devanagari",
    "Noto Serif Ethiopic",
    "Noto Serif Gujarati",
    "Noto Serif Kannada",
    "Noto Serif Khmer",
    "Noto Serif Lao",
    "Noto Serif Malayalam",
    "Noto Serif Tamil",
    "Noto Serif Telugu",
    "Abyssinica SIL",
    "Padauk",
    "Khmer OS",
    "Sawasdee",
    "Purisa",
];

/// The font table matching a platform.
pub fn fonts_for(platform: Platform) -> &'static [&'static str] {
    if platform.is_windows() {
        FONTS_WINDOWS
    } else if platform.is_mac() {
        FONTS_MAC
    } else {
        FONTS_LINUX
    }
}

/// Draw fonts for the platform with replacement until the set holds `count`
/// families or the table runs out.
pub fn select_fonts<R: Rng>(platform: Platform, count: usize, rng: &mut R) -> BTreeSet<String> {
    let table = fonts_for(platform);
    let target = count.min(table.len());
    let mut fonts = BTreeSet::new();

    while fonts.len() < target {
        match table.choose(rng) {
            Some(font) => {
                fonts.insert(font.to_string());
            }
            None => break,
        }
    }

    fonts
}
