use serde::{Deserialize, Serialize};

/// A color struct that holds the red, green, and blue values of a color.
#[derive(Clone, Copy, Serialize, Deserialize, Debug, PartialEq, Eq)]
pub struct Color {
    pub red: u8,
    pub green: u8,
    pub blue: u8,
}

static BLACK: Color = Color {
    red: 0,
    green: 0,
    blue: 0,
};

static PALETTE: [Color; 8] = [
    Color::new(230, 25, 75),
    Color::new(60, 180, 75),
    Color::new(255, 225, 25),
    Color::new(0, 130, 200),
    Color::new(245, 130, 48),
    Color::new(145, 30, 180),
    Color::new(70, 240, 240),
    Color::new(240, 50, 230),
];

impl Default for Color {
    fn default() -> Self {
        Self::black()
    }
}

impl Color {
    pub fn black() -> Self {
        BLACK
    }

    pub const fn new(red: u8, green: u8, blue: u8) -> Self {
        Self { red, green, blue }
    }

    /// color of the `index`-th cluster, cycling through a fixed palette
    pub fn cluster(index: usize) -> Self {
        PALETTE[index % PALETTE.len()]
    }

    pub fn r(&self) -> u8 {
        self.red
    }

    pub fn g(&self) -> u8 {
        self.green
    }

    pub fn b(&self) -> u8 {
        self.blue
    }
}
