//! Fixed colors shared by the theme presets and the item list.

use uidom::Color;

pub const WHITE: Color = Color::hex(0xffffff);
pub const BLACK: Color = Color::hex(0x000000);
pub const DODGER_BLUE: Color = Color::hex(0x5364ff);
pub const GRAY59: Color = Color::hex(0x969696);
pub const DARK: Color = Color::hex(0x09071d);
pub const LIGHT_BLUE: Color = Color::hex(0xbcdbfb);
