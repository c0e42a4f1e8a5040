//! Reference color palette
//!
//! A palette maps exact RGB colors to human readable names. Several names
//! may share one color (`Magenta` and `Fuchsia` are both `#FF00FF`); they
//! are kept under a single entry and reported joined with `" aka "`.
//!
//! The text format is one `Name #RRGGBB` pair per line, separated by any
//! whitespace. Blank lines are ignored.

use crate::{ColorError, ColorResult};
use colorextract_core::Color;
use std::collections::HashMap;
use std::sync::OnceLock;

/// Separator placed between names that share a color.
pub const ALIAS_SEPARATOR: &str = " aka ";

/// The X11 / CSS named colors, grouped by hue.
pub const X11_TABLE: &str = "
LightPink            #FFB6C1
Pink                 #FFC0CB
Crimson              #DC143C
LavenderBlush        #FFF0F5
PaleVioletRed        #DB7093
HotPink              #FF69B4
DeepPink             #FF1493
MediumVioletRed      #C71585
Orchid               #DA70D6
Thistle              #D8BFD8
Plum                 #DDA0DD
Violet               #EE82EE
Magenta              #FF00FF
Fuchsia              #FF00FF
DarkMagenta          #8B008B
Purple               #800080
MediumOrchid         #BA55D3
DarkViolet           #9400D3
DarkOrchid           #9932CC
Indigo               #4B0082
BlueViolet           #8A2BE2
MediumPurple         #9370DB
MediumSlateBlue      #7B68EE
SlateBlue            #6A5ACD
DarkSlateBlue        #483D8B
Lavender             #E6E6FA
GhostWhite           #F8F8FF
Blue                 #0000FF
MediumBlue           #0000CD
MidnightBlue         #191970
DarkBlue             #00008B
Navy                 #000080
RoyalBlue            #4169E1
CornflowerBlue       #6495ED
LightSteelBlue       #B0C4DE
LightSlateGray       #778899
SlateGray            #708090
DodgerBlue           #1E90FF
AliceBlue            #F0F8FF
SteelBlue            #4682B4
LightSkyBlue         #87CEFA
SkyBlue              #87CEEB
DeepSkyBlue          #00BFFF
LightBlue            #ADD8E6
PowderBlue           #B0E0E6
CadetBlue            #5F9EA0
Azure                #F0FFFF
LightCyan            #E0FFFF
PaleTurquoise        #AFEEEE
Cyan                 #00FFFF
Aqua                 #00FFFF
DarkTurquoise        #00CED1
DarkSlateGray        #2F4F4F
DarkCyan             #008B8B
Teal                 #008080
MediumTurquoise      #48D1CC
LightSeaGreen        #20B2AA
Turquoise            #40E0D0
Aquamarine           #7FFFD4
MediumAquamarine     #66CDAA
MediumSpringGreen    #00FA9A
MintCream            #F5FFFA
SpringGreen          #00FF7F
MediumSeaGreen       #3CB371
SeaGreen             #2E8B57
Honeydew             #F0FFF0
LightGreen           #90EE90
PaleGreen            #98FB98
DarkSeaGreen         #8FBC8F
LimeGreen            #32CD32
Lime                 #00FF00
ForestGreen          #228B22
Green                #008000
DarkGreen            #006400
Chartreuse           #7FFF00
LawnGreen            #7CFC00
GreenYellow          #ADFF2F
DarkOliveGreen       #556B2F
YellowGreen          #9ACD32
OliveDrab            #6B8E23
Beige                #F5F5DC
LightGoldenrodYellow #FAFAD2
Ivory                #FFFFF0
LightYellow          #FFFFE0
Yellow               #FFFF00
Olive                #808000
DarkKhaki            #BDB76B
LemonChiffon         #FFFACD
PaleGoldenrod        #EEE8AA
Khaki                #F0E68C
Gold                 #FFD700
Cornsilk             #FFF8DC
Goldenrod            #DAA520
DarkGoldenrod        #B8860B
FloralWhite          #FFFAF0
OldLace              #FDF5E6
Wheat                #F5DEB3
Moccasin             #FFE4B5
Orange               #FFA500
PapayaWhip           #FFEFD5
BlanchedAlmond       #FFEBCD
NavajoWhite          #FFDEAD
AntiqueWhite         #FAEBD7
Tan                  #D2B48C
BurlyWood            #DEB887
Bisque               #FFE4C4
DarkOrange           #FF8C00
Linen                #FAF0E6
Peru                 #CD853F
PeachPuff            #FFDAB9
SandyBrown           #F4A460
Chocolate            #D2691E
SaddleBrown          #8B4513
Seashell             #FFF5EE
Sienna               #A0522D
LightSalmon          #FFA07A
Coral                #FF7F50
OrangeRed            #FF4500
DarkSalmon           #E9967A
Tomato               #FF6347
MistyRose            #FFE4E1
Salmon               #FA8072
Snow                 #FFFAFA
LightCoral           #F08080
RosyBrown            #BC8F8F
IndianRed            #CD5C5C
Red                  #FF0000
Brown                #A52A2A
FireBrick            #B22222
DarkRed              #8B0000
Maroon               #800000
White                #FFFFFF
WhiteSmoke           #F5F5F5
Gainsboro            #DCDCDC
LightGrey            #D3D3D3
Silver               #C0C0C0
DarkGray             #A9A9A9
Gray                 #808080
DimGray              #696969
Black                #000000
";

/// One palette color and every name it was given.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteEntry {
    color: Color,
    names: Vec<String>,
    label: String,
}

impl PaletteEntry {
    fn new(color: Color, name: &str) -> Self {
        Self {
            color,
            names: vec![name.to_string()],
            label: name.to_string(),
        }
    }

    fn add_alias(&mut self, name: &str) {
        self.names.push(name.to_string());
        self.label.push_str(ALIAS_SEPARATOR);
        self.label.push_str(name);
    }

    /// The palette color.
    pub fn color(&self) -> Color {
        self.color
    }

    /// All names in table order, joined with [`ALIAS_SEPARATOR`].
    pub fn name(&self) -> &str {
        &self.label
    }

    /// All names in table order.
    pub fn names(&self) -> &[String] {
        &self.names
    }
}

/// An immutable color-to-name table, iterated in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ReferencePalette {
    entries: Vec<PaletteEntry>,
    index: HashMap<Color, usize>,
}

static BUILTIN: OnceLock<ReferencePalette> = OnceLock::new();

impl ReferencePalette {
    /// The built-in X11 palette, parsed on first use and cached for the
    /// lifetime of the process.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidPalette`] if the built-in table fails
    /// to parse.
    pub fn builtin() -> ColorResult<&'static ReferencePalette> {
        if let Some(palette) = BUILTIN.get() {
            return Ok(palette);
        }
        let palette = Self::parse(X11_TABLE)?;
        log::debug!("palette: built-in table loaded, {} colors", palette.len());
        Ok(BUILTIN.get_or_init(|| palette))
    }

    /// Parse a `Name #RRGGBB` table.
    ///
    /// Duplicate colors accumulate their names on the first entry.
    ///
    /// # Errors
    ///
    /// Returns [`ColorError::InvalidPalette`] with the 1-based line number
    /// of the first malformed line.
    pub fn parse(table: &str) -> ColorResult<Self> {
        let mut palette = Self::default();
        for (i, line) in table.lines().enumerate() {
            let line_no = i + 1;
            let fields: Vec<&str> = line.split_whitespace().collect();
            match fields.as_slice() {
                [] => continue,
                [name, hex] => {
                    let color = parse_hex(hex).map_err(|reason| ColorError::InvalidPalette {
                        line: line_no,
                        reason,
                    })?;
                    palette.insert(color, name);
                }
                _ => {
                    return Err(ColorError::InvalidPalette {
                        line: line_no,
                        reason: format!(
                            "expected `Name #RRGGBB`, found {} fields",
                            fields.len()
                        ),
                    });
                }
            }
        }
        Ok(palette)
    }

    /// Build a palette from `(name, color)` pairs.
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, Color)>,
    {
        let mut palette = Self::default();
        for (name, color) in pairs {
            palette.insert(color, name);
        }
        palette
    }

    fn insert(&mut self, color: Color, name: &str) {
        match self.index.get(&color) {
            Some(&i) => self.entries[i].add_alias(name),
            None => {
                self.index.insert(color, self.entries.len());
                self.entries.push(PaletteEntry::new(color, name));
            }
        }
    }

    /// Number of distinct colors.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the palette has no colors.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entries in insertion order.
    pub fn entries(&self) -> &[PaletteEntry] {
        &self.entries
    }

    /// Look up the entry for an exact color.
    pub fn get(&self, color: Color) -> Option<&PaletteEntry> {
        self.index.get(&color).map(|&i| &self.entries[i])
    }

    /// Joined names of an exact color.
    pub fn name_of(&self, color: Color) -> Option<&str> {
        self.get(color).map(PaletteEntry::name)
    }
}

fn parse_hex(token: &str) -> Result<Color, String> {
    if !token.starts_with('#') {
        return Err(format!("color `{token}` must start with '#'"));
    }
    Color::from_hex(token).map_err(|e| e.to_string())
}
