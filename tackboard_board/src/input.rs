// Copyright 2026 the Tackboard Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Keyboard and wheel input types consumed by the board.
//!
//! Like the pointer stream, these are pre-routed: the host decides which
//! element has focus and only forwards keys meant for the board. The board
//! additionally suppresses its shortcuts while a node is in edit mode.

/// Keys the board reacts to.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Key {
    /// Remove the selected node.
    Delete,
    /// Exit node edit mode.
    Escape,
    /// Hold-to-pan cursor mode.
    Space,
    /// With ctrl/cmd: reset zoom.
    Digit0,
    /// With ctrl/cmd: zoom out.
    Minus,
    /// With ctrl/cmd: zoom in (the `=`/`+` key).
    Equals,
    /// With ctrl/cmd: center the view on the selection.
    Period,
    /// Any other printable key; `n`/`i` create note/image nodes.
    Char(char),
}

/// Modifier state accompanying a key or wheel event.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct Modifiers {
    /// Ctrl on most platforms, Cmd on macOS.
    pub ctrl_or_meta: bool,
}

impl Modifiers {
    /// Modifiers with ctrl/cmd held.
    pub const CTRL_OR_META: Self = Self { ctrl_or_meta: true };
}
