use ratatui::prelude::Color;

// Tokyonight-inspired palette.
const TN_BG: Color = Color::Rgb(26, 27, 38); // #1a1b26
const TN_BG_ALT: Color = Color::Rgb(31, 35, 53); // #1f2335
const TN_BG_STRONG: Color = Color::Rgb(65, 72, 104); // #414868
const TN_FG: Color = Color::Rgb(192, 202, 245); // #c0caf5
const TN_FG_DIM: Color = Color::Rgb(86, 95, 137); // #565f89
const TN_BLUE: Color = Color::Rgb(122, 162, 247); // #7aa2f7
const TN_ORANGE: Color = Color::Rgb(255, 158, 100); // #ff9e64
const TN_RED: Color = Color::Rgb(247, 118, 142); // #f7768e
const TN_GREEN: Color = Color::Rgb(158, 206, 106); // #9ece6a
const TN_YELLOW: Color = Color::Rgb(224, 175, 104); // #e0af68

#[derive(Clone, Debug)]
pub struct Theme {
    pub header_bg: Color,
    pub header_fg: Color,
    pub footer_bg: Color,
    pub footer_fg: Color,
    pub footer_pad_bg: Color,
    pub word_bg: Color,
    pub focused_fg: Color,
    pub dimmed_fg: Color,
    pub orp_fg: Color,
    pub rule_fg: Color,
    pub progress_fg: Color,
    pub idle_fg: Color,
    pub playing_fg: Color,
    pub paused_fg: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Theme {
            header_bg: TN_BG_ALT,
            header_fg: TN_FG,
            footer_bg: TN_BG_STRONG,
            footer_fg: TN_BLUE,
            footer_pad_bg: TN_BG_ALT,
            word_bg: TN_BG,
            focused_fg: TN_FG,
            dimmed_fg: TN_FG_DIM,
            orp_fg: TN_RED,
            rule_fg: TN_ORANGE,
            progress_fg: TN_BLUE,
            idle_fg: TN_FG_DIM,
            playing_fg: TN_GREEN,
            paused_fg: TN_YELLOW,
        }
    }
}
