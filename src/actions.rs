//! User and system actions.

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Action {
    Quit,
    Char(char),
    Backspace,
    /// Clear affordance: empty input + query, keep the dropdown open.
    ClearInput,
    /// Click in the input box: open the dropdown, arm select-all.
    FocusInput,
    /// Esc or click outside: restore the committed label and close.
    CloseDropdown,
    HighlightUp,
    HighlightDown,
    /// Mouse hover moves the highlight without committing.
    HighlightRow(usize),
    /// Enter: commit the highlighted row.
    CommitHighlighted,
    /// Click on a row: commit it regardless of keyboard highlight.
    CommitRow(usize),
    /// Star glyph click on a row; never commits, never closes.
    ToggleFavoriteRow(usize),
    /// Keyboard favorite toggle on the highlighted row.
    ToggleFavoriteHighlighted,
    ToggleDetail,
    /// Re-pull catalog + configuration from the host.
    Reload,
}
