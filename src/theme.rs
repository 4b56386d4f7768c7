use crossterm::style::Color;

#[derive(Copy, Clone, Debug)]
pub struct Theme {
    pub name: &'static str,
    pub bg1: Color,
    pub bg2: Color,
    pub panel: Color,
    pub text: Color,
    pub accent: Color,
    pub head: Color,
    pub body: Color,
    pub snack: Color,
}

const fn rgb(r: u8, g: u8, b: u8) -> Color {
    Color::Rgb { r, g, b }
}

pub static THEMES: [Theme; 4] = [
    Theme {
        name: "Blossom",
        bg1: rgb(247, 231, 236),
        bg2: rgb(239, 212, 222),
        panel: rgb(255, 245, 248),
        text: rgb(64, 47, 52),
        accent: rgb(216, 120, 142),
        head: rgb(159, 134, 150),
        body: rgb(178, 153, 169),
        snack: rgb(216, 120, 142),
    },
    Theme {
        name: "Apricot",
        bg1: rgb(247, 235, 224),
        bg2: rgb(239, 217, 198),
        panel: rgb(255, 246, 236),
        text: rgb(63, 48, 38),
        accent: rgb(222, 140, 106),
        head: rgb(142, 164, 143),
        body: rgb(159, 178, 143),
        snack: rgb(222, 140, 106),
    },
    Theme {
        name: "Sage",
        bg1: rgb(238, 243, 234),
        bg2: rgb(219, 230, 210),
        panel: rgb(246, 250, 241),
        text: rgb(47, 58, 49),
        accent: rgb(155, 180, 138),
        head: rgb(127, 154, 130),
        body: rgb(142, 170, 143),
        snack: rgb(202, 169, 141),
    },
    Theme {
        name: "Terracotta",
        bg1: rgb(244, 238, 229),
        bg2: rgb(227, 214, 199),
        panel: rgb(255, 247, 238),
        text: rgb(60, 47, 42),
        accent: rgb(214, 123, 95),
        head: rgb(126, 160, 138),
        body: rgb(143, 181, 138),
        snack: rgb(214, 123, 95),
    },
];

pub const DEFAULT_THEME: usize = 3;

/// Theme at `index`, falling back to the default for out-of-range indices.
pub fn theme(index: usize) -> &'static Theme {
    THEMES.get(index).unwrap_or(&THEMES[DEFAULT_THEME])
}
