//! Keyboard shortcut labels shown in the UI

/// Submit the application
pub const SUBMIT_SHORTCUT: &str = "Ctrl+S";

/// Add a cattle entry
pub const ADD_ENTRY_SHORTCUT: &str = "Ctrl+N";

/// Remove the focused cattle entry
pub const REMOVE_ENTRY_SHORTCUT: &str = "Ctrl+D";

/// Clear the form
pub const RESET_SHORTCUT: &str = "Ctrl+R";
