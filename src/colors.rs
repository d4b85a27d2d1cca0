//! Watch face palettes
//!
//! Each palette colors the Life cell states and the clock parts. Ambient mode
//! swaps in a fixed dim palette regardless of the selection.

use crossterm::event::KeyCode;
use crossterm::style::Color;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub name: &'static str,
    pub live: Color,
    pub dying: Color,
    pub spawn: Color,
    pub grid: Color,
    pub tick: Color,
    pub hands: Color,
    pub second_hand: Color,
}

pub const PALETTES: [Palette; 5] = [
    Palette {
        name: "classic", // cyan cells, red second hand
        live: Color::Cyan,
        dying: Color::DarkCyan,
        spawn: Color::DarkGrey,
        grid: Color::DarkGrey,
        tick: Color::Grey,
        hands: Color::White,
        second_hand: Color::Red,
    },
    Palette {
        name: "matrix",
        live: Color::AnsiValue(10),
        dying: Color::DarkGreen,
        spawn: Color::DarkGreen,
        grid: Color::DarkGrey,
        tick: Color::Green,
        hands: Color::White,
        second_hand: Color::Yellow,
    },
    Palette {
        name: "ember",
        live: Color::Yellow,
        dying: Color::DarkRed,
        spawn: Color::DarkYellow,
        grid: Color::DarkGrey,
        tick: Color::DarkYellow,
        hands: Color::White,
        second_hand: Color::Red,
    },
    Palette {
        name: "neon",
        live: Color::Magenta,
        dying: Color::DarkMagenta,
        spawn: Color::DarkBlue,
        grid: Color::DarkBlue,
        tick: Color::Blue,
        hands: Color::Cyan,
        second_hand: Color::AnsiValue(13),
    },
    Palette {
        name: "paper",
        live: Color::White,
        dying: Color::Grey,
        spawn: Color::DarkGrey,
        grid: Color::DarkGrey,
        tick: Color::Grey,
        hands: Color::White,
        second_hand: Color::Grey,
    },
];

/// Dimmed colors for ambient mode
pub const AMBIENT: Palette = Palette {
    name: "ambient",
    live: Color::Grey,
    dying: Color::Grey,
    spawn: Color::DarkGrey,
    grid: Color::DarkGrey,
    tick: Color::DarkGrey,
    hands: Color::Grey,
    second_hand: Color::DarkGrey,
};

/// Currently selected palette
#[derive(Clone, Copy)]
pub struct ColorState {
    pub scheme: usize,
}

impl ColorState {
    pub fn new(default_scheme: u8) -> Self {
        Self { scheme: (default_scheme as usize).min(PALETTES.len() - 1) }
    }

    /// `c` steps forward through the palettes, `C` back. Returns true if handled.
    pub fn handle_key(&mut self, code: KeyCode) -> bool {
        let n = PALETTES.len();
        match code {
            KeyCode::Char('c') => self.scheme = (self.scheme + 1) % n,
            KeyCode::Char('C') => self.scheme = (self.scheme + n - 1) % n,
            _ => return false,
        }
        true
    }

    pub fn palette(&self, ambient: bool) -> &'static Palette {
        if ambient {
            &AMBIENT
        } else {
            &PALETTES[self.scheme]
        }
    }
}
