use pace_core::Mode;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Command {
    Exit,
    ToggleHelp,
    CloseHelp,
    TogglePlay,
    Reset,
    CycleMode,
    SelectMode(Mode),
    AdjustWpm(i16),
    Paste,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CommandOutcome {
    Continue,
    Exit,
}
