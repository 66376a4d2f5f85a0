//! Command types for the Elm-style architecture
//!
//! Commands tell the host what to do after an update. A `None` result from
//! `update` means the message was a no-op and nothing needs to happen.

/// Follow-up work for the rendering layer
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// The layout tree changed; re-render the dock
    Redraw,
    /// Only the display mode or focus changed; the tree is untouched
    RedrawChrome,
}

impl Cmd {
    /// Check if this command requires a redraw
    pub fn needs_redraw(&self) -> bool {
        match self {
            Cmd::None => false,
            Cmd::Redraw | Cmd::RedrawChrome => true,
        }
    }

    /// Whether the layout tree itself changed
    pub fn layout_changed(&self) -> bool {
        matches!(self, Cmd::Redraw)
    }
}
