//! Native console control.
//!
//! On Windows this talks to the console API directly: cursor visibility via
//! the console cursor info and the accent color via the text attributes of the
//! screen buffer, saving the previous attributes so they can be put back.
//!
//! Elsewhere there is no console API to speak of. Cursor visibility is left to
//! [`console::Term`] and color is reported as unavailable.

use console::Term;
use std::io;

#[cfg(windows)]
pub(crate) use self::windows_console::{begin_accent, restore, set_cursor_visible, SavedAttributes};

#[cfg(not(windows))]
pub(crate) type SavedAttributes = ();

#[cfg(not(windows))]
pub(crate) fn set_cursor_visible(term: &Term, visible: bool) -> io::Result<()> {
    if visible {
        term.show_cursor()
    } else {
        term.hide_cursor()
    }
}

#[cfg(not(windows))]
pub(crate) fn begin_accent(_term: &Term) -> Option<SavedAttributes> {
    None
}

#[cfg(not(windows))]
pub(crate) fn restore(_term: &Term, _saved: SavedAttributes) {}

#[cfg(windows)]
mod windows_console {
    use super::{io, Term};
    use crate::terminal::log_error;
    use windows::Win32::Foundation::HANDLE;
    use windows::Win32::System::Console::{
        GetConsoleCursorInfo, GetConsoleScreenBufferInfo, GetStdHandle, SetConsoleCursorInfo,
        SetConsoleTextAttribute, CONSOLE_CHARACTER_ATTRIBUTES, CONSOLE_CURSOR_INFO,
        CONSOLE_SCREEN_BUFFER_INFO, FOREGROUND_BLUE, FOREGROUND_GREEN, FOREGROUND_INTENSITY,
        FOREGROUND_RED, STD_OUTPUT_HANDLE,
    };

    pub(crate) type SavedAttributes = CONSOLE_CHARACTER_ATTRIBUTES;

    fn stdout_handle() -> Option<HANDLE> {
        // SAFETY: GetStdHandle has no preconditions
        let handle = unsafe { GetStdHandle(STD_OUTPUT_HANDLE) }.ok()?;
        if handle.is_invalid() {
            None
        } else {
            Some(handle)
        }
    }

    pub(crate) fn set_cursor_visible(_term: &Term, visible: bool) -> io::Result<()> {
        let Some(handle) = stdout_handle() else {
            return Ok(());
        };

        let mut info = CONSOLE_CURSOR_INFO::default();
        // SAFETY: handle is the process console output and info lives across both calls
        unsafe {
            GetConsoleCursorInfo(handle, &mut info)?;
            info.bVisible = visible.into();
            SetConsoleCursorInfo(handle, &info)?;
        }
        Ok(())
    }

    pub(crate) fn begin_accent(_term: &Term) -> Option<SavedAttributes> {
        let handle = stdout_handle()?;

        let mut csbi = CONSOLE_SCREEN_BUFFER_INFO::default();
        // SAFETY: handle is the process console output and csbi is a valid out pointer
        unsafe { GetConsoleScreenBufferInfo(handle, &mut csbi) }.ok()?;

        let previous = csbi.wAttributes;
        let foreground = FOREGROUND_RED | FOREGROUND_GREEN | FOREGROUND_BLUE | FOREGROUND_INTENSITY;
        let accent = (previous & !foreground) | FOREGROUND_BLUE | FOREGROUND_INTENSITY;

        // SAFETY: handle is the process console output
        unsafe { SetConsoleTextAttribute(handle, accent) }.ok()?;
        Some(previous)
    }

    pub(crate) fn restore(_term: &Term, saved: SavedAttributes) {
        let Some(handle) = stdout_handle() else {
            return;
        };
        // SAFETY: handle is the process console output
        let restored = unsafe { SetConsoleTextAttribute(handle, saved) };
        log_error("restore console attributes", restored.map_err(io::Error::from));
    }
}
