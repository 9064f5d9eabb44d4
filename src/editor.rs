//! # Editor
//!
//! The `Editor` aggregate: the row store, cursor/viewport state, the dirty
//! counter, the key dispatch loop, screen composition, the prompt, and
//! incremental find. Everything else in the crate exists to serve this
//! struct; there is no ambient/global editor state anywhere else.

use std::fs::OpenOptions;
use std::io::BufReader;
use std::os::unix::fs::OpenOptionsExt;
use std::path::Path;
use std::time::Instant;

use crate::ansi;
use crate::row::Row;
use crate::sys;
use crate::syntax::{Conf, HlSymbol};
use crate::terminal::{self, AppendBuffer, Key};
use crate::Config;
use crate::Error;

const fn ctrl_key(key: u8) -> u8 {
    key & 0x1f
}

const CTRL_Q: u8 = ctrl_key(b'Q');
const CTRL_S: u8 = ctrl_key(b'S');
const CTRL_F: u8 = ctrl_key(b'F');
const CTRL_H: u8 = ctrl_key(b'H');
const CTRL_L: u8 = ctrl_key(b'L');

const HELP_MESSAGE: &str = "HELP: Ctrl-S = save | Ctrl-Q = quit | Ctrl-F = find";

static NONE_SYNTAX: Conf = Conf::none();

/// `set_status!` sets a formatted status message for the editor.
macro_rules! set_status {
    ($editor:expr, $($arg:tt)*) => {
        $editor.set_status(format!($($arg)*))
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum AKey {
    Left,
    Right,
    Up,
    Down,
}

struct StatusMessage {
    msg: String,
    time: Instant,
}

impl StatusMessage {
    fn new(msg: String) -> Self {
        Self { msg, time: Instant::now() }
    }
}

/// Incremental-find session state. Persists across keystrokes fed to it via
/// `Editor::prompt`'s callback, reset on Enter/ESC.
struct FindState {
    last_match: Option<usize>,
    direction: i8,
    saved_hl_line: Option<usize>,
    saved_hl: Option<Vec<HlSymbol>>,
}

impl Default for FindState {
    fn default() -> Self {
        Self { last_match: None, direction: 1, saved_hl_line: None, saved_hl: None }
    }
}

impl FindState {
    fn feed(&mut self, editor: &mut Editor, query: &[u8], key: Key) {
        if let (Some(line), Some(hl)) = (self.saved_hl_line.take(), self.saved_hl.take()) {
            if let Some(row) = editor.rows.get_mut(line) {
                row.hl = hl;
            }
        }

        match key {
            Key::Byte(b'\r') | Key::Byte(terminal::ESC) => {
                *self = FindState { direction: 1, ..FindState::default() };
                return;
            }
            Key::ArrowRight | Key::ArrowDown => self.direction = 1,
            Key::ArrowLeft | Key::ArrowUp => self.direction = -1,
            _ => {
                self.last_match = None;
                self.direction = 1;
            }
        }

        if query.is_empty() || editor.rows.is_empty() {
            return;
        }

        let numrows = editor.rows.len() as isize;
        let mut current = self.last_match.map_or(-1, |v| v as isize);
        for _ in 0..numrows {
            current += self.direction as isize;
            if current < 0 {
                current = numrows - 1;
            } else if current >= numrows {
                current = 0;
            }
            let idx = current as usize;
            let row = &editor.rows[idx];
            if let Some(pos) = find_subslice(&row.render, query) {
                self.last_match = Some(idx);
                editor.cy = idx;
                editor.cx = row.rx_to_cx(pos);
                editor.rowoff = editor.rows.len();
                self.saved_hl_line = Some(idx);
                self.saved_hl = Some(row.hl.clone());
                let row = &mut editor.rows[idx];
                for h in row.hl.iter_mut().skip(pos).take(query.len()) {
                    *h = HlSymbol::Match;
                }
                break;
            }
        }
    }
}

fn find_subslice(haystack: &[u8], needle: &[u8]) -> Option<usize> {
    if needle.is_empty() || needle.len() > haystack.len() {
        return None;
    }
    haystack.windows(needle.len()).position(|w| w == needle)
}

fn is_control_byte(b: u8) -> bool {
    b < 32 || b == 127
}

/// Pretty-format a size in bytes the way the status bar reports a save.
/// Stays as a bare byte count under 1KB (matching the literal `"<N> bytes
/// written to disk"` scenario in spec.md §8), switches to a `KB`/`MB`/...
/// suffix above that.
fn format_saved_message(n: u64) -> String {
    if n < 1024 {
        return format!("{n} bytes written to disk");
    }
    let i = (64 - n.leading_zeros() + 9) / 10 - 1;
    let q = 100 * n / (1024 << ((i - 1) * 10));
    format!("{}.{:02}{}B written to disk", q / 100, q % 100, b" KMGTPEZ"[i as usize] as char)
}

/// The editor aggregate. Constructed once by `main`, passed by `&mut` to
/// every operation rather than reached for as ambient state.
pub struct Editor {
    config: Config,
    orig_term_mode: Option<sys::TermMode>,
    screen_rows: usize,
    screen_cols: usize,
    rows: Vec<Row>,
    cx: usize,
    cy: usize,
    rx: usize,
    rowoff: usize,
    coloff: usize,
    dirty: u64,
    filename: Option<String>,
    syntax: &'static Conf,
    status_msg: Option<StatusMessage>,
    quit_times: usize,
}

impl Editor {
    /// Switch the terminal into raw mode, query its size, and return a
    /// freshly constructed editor on an empty buffer.
    ///
    /// The `Editor` value is built immediately after raw mode is enabled,
    /// before the window-size query that can still fail: if that query
    /// errors out, the early `?` return drops the already-constructed
    /// `editor`, and `Drop for Editor` restores the terminal. Raw mode is
    /// never left stuck on a fatal construction error.
    pub fn new(config: Config) -> Result<Self, Error> {
        let orig_term_mode = sys::enable_raw_mode()?;

        let mut editor = Self {
            quit_times: config.quit_times,
            config,
            orig_term_mode: Some(orig_term_mode),
            screen_rows: 0,
            screen_cols: 0,
            rows: Vec::new(),
            cx: 0,
            cy: 0,
            rx: 0,
            rowoff: 0,
            coloff: 0,
            dirty: 0,
            filename: None,
            syntax: &NONE_SYNTAX,
            status_msg: None,
        };

        let (rows, cols) =
            sys::get_window_size().or_else(|_| terminal::get_window_size_using_cursor())?;
        editor.screen_rows = rows.saturating_sub(2);
        editor.screen_cols = cols;

        set_status!(editor, "{HELP_MESSAGE}");
        Ok(editor)
    }

    /// Restore the terminal to the settings it had before `new` was called.
    /// Idempotent: takes `orig_term_mode`, so a later `Drop` finds nothing
    /// left to restore and does not repeat the call.
    pub fn restore_terminal(&mut self) -> Result<(), Error> {
        if let Some(orig) = self.orig_term_mode.take() {
            sys::disable_raw_mode(&orig)?;
        }
        Ok(())
    }

    /// Open `path`: select its filetype, load its rows, reset `dirty`.
    pub fn open(&mut self, path: &Path) -> Result<(), Error> {
        let filename = path.to_string_lossy().into_owned();
        self.select_syntax_highlight(&filename);
        self.filename = Some(filename.clone());

        match std::fs::File::open(path) {
            Ok(file) => {
                use std::io::BufRead;
                for line in BufReader::new(file).split(b'\n') {
                    let mut line = line?;
                    if line.last() == Some(&b'\r') {
                        line.pop();
                    }
                    let at = self.rows.len();
                    self.insert_row(at, line);
                }
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::debug!("{filename} does not exist yet, starting empty");
            }
            Err(e) => return Err(e.into()),
        }

        self.rescan_all();
        self.dirty = 0;
        log::debug!("loaded {} rows from {filename}", self.rows.len());
        Ok(())
    }

    /// Save the buffer to `self.filename`, prompting for a name first if
    /// none is set. Recoverable: any failure surfaces via the status bar
    /// and leaves `dirty` untouched.
    pub fn save(&mut self) -> Result<(), Error> {
        if self.filename.is_none() {
            match self.prompt("Save as: %s", |_, _, _| {})? {
                Some(name) => {
                    let filename = String::from_utf8_lossy(&name).into_owned();
                    self.select_syntax_highlight(&filename);
                    self.filename = Some(filename);
                }
                None => {
                    set_status!(self, "Save abort!");
                    return Ok(());
                }
            }
        }

        let filename = self.filename.clone().expect("filename set above");
        let mut data = Vec::new();
        for row in &self.rows {
            data.extend_from_slice(&row.chars);
            data.push(b'\n');
        }

        match write_truncated(&filename, &data) {
            Ok(()) => {
                self.dirty = 0;
                log::debug!("saved {} bytes to {filename}", data.len());
                set_status!(self, "{}", format_saved_message(data.len() as u64));
            }
            Err(e) => {
                log::debug!("save to {filename} failed: {e}");
                set_status!(self, "Can't save! I/O error: {e}");
            }
        }
        Ok(())
    }

    /// Incremental search (spec.md §4.7), layered on `prompt`.
    pub fn find(&mut self) -> Result<(), Error> {
        let saved_cx = self.cx;
        let saved_cy = self.cy;
        let saved_coloff = self.coloff;
        let saved_rowoff = self.rowoff;

        let mut state = FindState::default();
        let result =
            self.prompt("Search %s (ESC to cancel)", |editor, query, key| {
                state.feed(editor, query, key);
            })?;

        if result.is_none() {
            self.cx = saved_cx;
            self.cy = saved_cy;
            self.coloff = saved_coloff;
            self.rowoff = saved_rowoff;
        }
        Ok(())
    }

    /// Drive a single-line mini-buffer in the message bar, streaming every
    /// keystroke (including the terminating one) to `callback`.
    pub fn prompt<C>(&mut self, template: &str, mut callback: C) -> Result<Option<Vec<u8>>, Error>
    where
        C: FnMut(&mut Self, &[u8], Key),
    {
        let mut buf: Vec<u8> = Vec::new();
        loop {
            set_status!(self, "{}", template.replacen("%s", &String::from_utf8_lossy(&buf), 1));
            self.refresh_screen()?;
            let key = terminal::read_key()?;

            match key {
                Key::Byte(b'\r') if !buf.is_empty() => {
                    callback(self, &buf, key);
                    self.clear_status();
                    return Ok(Some(buf));
                }
                Key::Byte(terminal::ESC) => {
                    callback(self, &buf, key);
                    self.clear_status();
                    return Ok(None);
                }
                Key::Backspace | Key::Delete | Key::Byte(CTRL_H) => {
                    buf.pop();
                }
                Key::Byte(b) if b < 128 && !is_control_byte(b) => {
                    buf.push(b);
                }
                _ => {}
            }
            callback(self, &buf, key);
        }
    }

    /// Run the read-dispatch loop until the user quits.
    pub fn run(&mut self) -> Result<(), Error> {
        loop {
            self.refresh_screen()?;
            if !self.process_keypress()? {
                return Ok(());
            }
        }
    }

    fn process_keypress(&mut self) -> Result<bool, Error> {
        let key = terminal::read_key()?;
        log::trace!("key: {key:?}");

        if key == Key::Byte(CTRL_Q) {
            if self.dirty != 0 {
                self.quit_times -= 1;
                if self.quit_times > 0 {
                    set_status!(
                        self,
                        "WARNING!!! File has unsaved changes. Press Ctrl-Q {} more times to quit.",
                        self.quit_times
                    );
                    return Ok(true);
                }
            }
            return Ok(false);
        }
        self.quit_times = self.config.quit_times;

        match key {
            Key::Byte(CTRL_S) => self.save()?,
            Key::Byte(CTRL_F) => self.find()?,
            Key::Byte(CTRL_L) | Key::Byte(terminal::ESC) => {}
            Key::Backspace | Key::Byte(CTRL_H) => self.delete_char(),
            Key::Delete => {
                self.move_cursor(AKey::Right);
                self.delete_char();
            }
            Key::Byte(b'\r') => self.insert_newline(),
            Key::ArrowUp => self.move_cursor(AKey::Up),
            Key::ArrowDown => self.move_cursor(AKey::Down),
            Key::ArrowLeft => self.move_cursor(AKey::Left),
            Key::ArrowRight => self.move_cursor(AKey::Right),
            Key::Home => self.cx = 0,
            Key::End => self.cx = self.rows.get(self.cy).map_or(0, Row::len),
            Key::PageUp => self.page_move(AKey::Up),
            Key::PageDown => self.page_move(AKey::Down),
            Key::Byte(b) if b < 128 && !is_control_byte(b) => self.insert_char(b),
            _ => {}
        }

        Ok(true)
    }

    fn page_move(&mut self, dir: AKey) {
        match dir {
            AKey::Up => self.cy = self.rowoff,
            AKey::Down => {
                self.cy = (self.rowoff + self.screen_rows.saturating_sub(1)).min(self.rows.len())
            }
            _ => {}
        }
        for _ in 0..self.screen_rows {
            self.move_cursor(dir);
        }
    }

    fn move_cursor(&mut self, key: AKey) {
        match key {
            AKey::Left => {
                if self.cx > 0 {
                    self.cx -= 1;
                } else if self.cy > 0 {
                    self.cy -= 1;
                    self.cx = self.rows[self.cy].len();
                }
            }
            AKey::Right => {
                if let Some(row) = self.rows.get(self.cy) {
                    if self.cx < row.len() {
                        self.cx += 1;
                    } else {
                        self.cy += 1;
                        self.cx = 0;
                    }
                }
            }
            AKey::Up => {
                if self.cy > 0 {
                    self.cy -= 1;
                }
            }
            AKey::Down => {
                if self.cy < self.rows.len() {
                    self.cy += 1;
                }
            }
        }
        let row_len = self.rows.get(self.cy).map_or(0, Row::len);
        self.cx = self.cx.min(row_len);
    }

    // --- row store & edit primitives (spec.md §4.3) ---

    fn insert_row(&mut self, at: usize, chars: Vec<u8>) {
        let at = at.min(self.rows.len());
        self.rows.insert(at, Row::new(at, chars, self.config.tab_stop));
        for (i, row) in self.rows.iter_mut().enumerate().skip(at) {
            row.index = i;
        }
        self.dirty += 1;
        self.rescan_from(at);
    }

    fn delete_row(&mut self, at: usize) {
        if at >= self.rows.len() {
            return;
        }
        self.rows.remove(at);
        for (i, row) in self.rows.iter_mut().enumerate().skip(at) {
            row.index = i;
        }
        self.dirty += 1;
        self.rescan_from(at);
    }

    fn row_insert_char(&mut self, row: usize, at: usize, c: u8) {
        self.rows[row].insert_char(at, c);
        self.dirty += 1;
        self.rescan_from(row);
    }

    fn row_delete_char(&mut self, row: usize, at: usize) {
        self.rows[row].delete_char(at);
        self.dirty += 1;
        self.rescan_from(row);
    }

    fn row_append_string(&mut self, row: usize, bytes: &[u8]) {
        self.rows[row].append_string(bytes);
        self.dirty += 1;
        self.rescan_from(row);
    }

    fn insert_char(&mut self, c: u8) {
        if self.cy == self.rows.len() {
            self.insert_row(self.rows.len(), Vec::new());
        }
        self.row_insert_char(self.cy, self.cx, c);
        self.cx += 1;
    }

    fn insert_newline(&mut self) {
        if self.cx == 0 {
            self.insert_row(self.cy, Vec::new());
        } else {
            let tail = self.rows[self.cy].split_off(self.cx);
            self.dirty += 1;
            self.rescan_from(self.cy);
            self.insert_row(self.cy + 1, tail);
        }
        self.cy += 1;
        self.cx = 0;
    }

    fn delete_char(&mut self) {
        if self.cy >= self.rows.len() {
            return;
        }
        if self.cx == 0 && self.cy == 0 {
            return;
        }
        if self.cx > 0 {
            self.row_delete_char(self.cy, self.cx - 1);
            self.cx -= 1;
        } else {
            let prev_len = self.rows[self.cy - 1].len();
            let tail = self.rows[self.cy].chars.clone();
            self.row_append_string(self.cy - 1, &tail);
            self.delete_row(self.cy);
            self.cy -= 1;
            self.cx = prev_len;
        }
    }

    /// Work-list rescan starting at row `from`: cascades forward only while
    /// `hl_open_comment` keeps changing, bounding the work to the rows
    /// actually affected by the edit (spec.md §4.4, §9).
    fn rescan_from(&mut self, from: usize) {
        let syntax = self.syntax;
        let mut i = from;
        while i < self.rows.len() {
            let in_comment = if i == 0 { false } else { self.rows[i - 1].hl_open_comment };
            let changed = self.rows[i].update_highlight(syntax, in_comment);
            if !changed {
                break;
            }
            i += 1;
        }
    }

    /// Force a full rescan of every row, used after the filetype changes.
    fn rescan_all(&mut self) {
        let syntax = self.syntax;
        let mut in_comment = false;
        for row in &mut self.rows {
            row.update_highlight(syntax, in_comment);
            in_comment = row.hl_open_comment;
        }
    }

    fn select_syntax_highlight(&mut self, filename: &str) {
        self.syntax = Conf::select(filename).unwrap_or(&NONE_SYNTAX);
        log::debug!("selected filetype {} for {filename}", self.syntax.name);
        self.rescan_all();
    }

    // --- status message ---

    fn set_status(&mut self, msg: String) {
        self.status_msg = Some(StatusMessage::new(msg));
    }

    fn clear_status(&mut self) {
        self.status_msg = None;
    }

    // --- viewport, composer, scroller (spec.md §4.5) ---

    fn compute_rx(&self) -> usize {
        self.rows.get(self.cy).map_or(0, |row| row.cx_to_rx(self.cx))
    }

    fn scroll(&mut self) {
        self.rx = self.compute_rx();
        if self.cy < self.rowoff {
            self.rowoff = self.cy;
        }
        if self.screen_rows > 0 && self.cy >= self.rowoff + self.screen_rows {
            self.rowoff = self.cy - self.screen_rows + 1;
        }
        if self.rx < self.coloff {
            self.coloff = self.rx;
        }
        if self.screen_cols > 0 && self.rx >= self.coloff + self.screen_cols {
            self.coloff = self.rx - self.screen_cols + 1;
        }
    }

    fn refresh_screen(&mut self) -> Result<(), Error> {
        self.scroll();
        let mut buf = AppendBuffer::new();
        buf.append(ansi::HIDE_CURSOR);
        buf.append(ansi::CURSOR_HOME);

        self.draw_rows(&mut buf);
        self.draw_status_bar(&mut buf);
        self.draw_message_bar(&mut buf);

        let cursor_row = self.cy - self.rowoff + 1;
        let cursor_col = self.rx - self.coloff + 1;
        buf.append_str(&ansi::cursor_position(cursor_row, cursor_col));
        buf.append(ansi::SHOW_CURSOR);
        buf.flush()
    }

    fn draw_rows(&self, buf: &mut AppendBuffer) {
        for y in 0..self.screen_rows {
            let file_row = y + self.rowoff;
            if file_row >= self.rows.len() {
                if self.rows.is_empty() && y == self.screen_rows / 3 {
                    self.draw_welcome(buf);
                } else {
                    buf.append(b"~");
                }
            } else {
                self.draw_row(&self.rows[file_row], buf);
            }
            buf.append(ansi::CLEAR_LINE);
            buf.append(b"\r\n");
        }
    }

    fn draw_welcome(&self, buf: &mut AppendBuffer) {
        let full = format!("Kilo editor -- version {}", env!("CARGO_PKG_VERSION"));
        let msg_len = full.len().min(self.screen_cols);
        let msg = &full[..msg_len];
        buf.append(b"~");
        let padding = self.screen_cols.saturating_sub(msg_len) / 2;
        if padding > 0 {
            buf.append(" ".repeat(padding.saturating_sub(1)).as_bytes());
        }
        buf.append_str(msg);
    }

    fn draw_row(&self, row: &Row, buf: &mut AppendBuffer) {
        if row.render.len() <= self.coloff {
            buf.append(ansi::DEFAULT_FG);
            return;
        }
        let start = self.coloff;
        let end = (start + self.screen_cols).min(row.render.len());
        let mut current_color: Option<u8> = None;
        for i in start..end {
            let b = row.render[i];
            let hl = row.hl[i];
            if is_control_byte(b) {
                let sym = if b <= 26 { b'@' + b } else { b'?' };
                buf.append(ansi::REVERSE_VIDEO);
                buf.append(&[sym]);
                buf.append(ansi::RESET_FMT);
                if let Some(code) = current_color {
                    buf.append_str(&ansi::sgr(code));
                }
                continue;
            }
            if hl == HlSymbol::Normal {
                if current_color.is_some() {
                    buf.append(ansi::DEFAULT_FG);
                    current_color = None;
                }
            } else {
                let code = hl.sgr_code();
                if current_color != Some(code) {
                    buf.append_str(&ansi::sgr(code));
                    current_color = Some(code);
                }
            }
            buf.append(&[b]);
        }
        buf.append(ansi::DEFAULT_FG);
    }

    fn draw_status_bar(&self, buf: &mut AppendBuffer) {
        buf.append(ansi::REVERSE_VIDEO);

        let filename = self.filename.as_deref().unwrap_or("[No Name]");
        let filename = &filename[..filename.len().min(20)];
        let modified = if self.dirty != 0 { " [modified]" } else { "" };
        let mut left = format!("{filename} - {} lines{modified}", self.rows.len());
        if left.len() > self.screen_cols {
            left.truncate(self.screen_cols);
        }
        let right = format!("{} | {}/{}", self.syntax.name, self.cy + 1, self.rows.len());

        let remaining = self.screen_cols.saturating_sub(left.len());
        if remaining >= right.len() {
            left.push_str(&" ".repeat(remaining - right.len()));
            left.push_str(&right);
        } else {
            left.push_str(&" ".repeat(remaining));
        }
        buf.append_str(&left);
        buf.append(ansi::RESET_FMT);
        buf.append(b"\r\n");
    }

    fn draw_message_bar(&self, buf: &mut AppendBuffer) {
        buf.append(ansi::CLEAR_LINE);
        if let Some(msg) = &self.status_msg {
            if msg.time.elapsed() < self.config.message_dur {
                let len = msg.msg.len().min(self.screen_cols);
                buf.append_str(&msg.msg[..len]);
            }
        }
    }
}

/// Restores the terminal on every way an `Editor` can go out of scope,
/// including a `?` return from inside `Editor::new` itself once raw mode is
/// on. `restore_terminal` takes `orig_term_mode` on success so this is a
/// no-op on the ordinary exit path.
impl Drop for Editor {
    fn drop(&mut self) {
        if let Some(orig) = &self.orig_term_mode {
            let _ = sys::disable_raw_mode(orig);
        }
    }
}

/// Create-if-absent (mode 0644), truncate to the serialized length, write,
/// close. Not crash-safe: a truncate+write sequence can leave a partial file
/// on crash (spec.md §4.8, §9 — a rename-into-place pattern would be
/// preferable but is out of scope here).
fn write_truncated(path: &str, data: &[u8]) -> Result<(), std::io::Error> {
    let mut file =
        OpenOptions::new().read(true).write(true).create(true).mode(0o644).open(path)?;
    file.set_len(data.len() as u64)?;
    std::io::Write::write_all(&mut file, data)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    // The `Editor` itself requires a real controlling terminal (raw mode,
    // ioctl window size) to construct, so these tests exercise the
    // free-standing helpers and the save round trip directly.

    #[test]
    fn format_saved_message_matches_literal_scenario() {
        assert_eq!(format_saved_message(11), "11 bytes written to disk");
        assert_eq!(format_saved_message(1023), "1023 bytes written to disk");
    }

    #[test]
    fn format_saved_message_uses_kb_suffix_above_1024() {
        let msg = format_saved_message(2048);
        assert!(msg.ends_with("KB written to disk"), "{msg}");
    }

    #[test]
    fn find_subslice_finds_first_occurrence() {
        assert_eq!(find_subslice(b"foobarfoo", b"foo"), Some(0));
        assert_eq!(find_subslice(b"xxbarfoo", b"foo"), Some(5));
        assert_eq!(find_subslice(b"abc", b"xyz"), None);
        assert_eq!(find_subslice(b"abc", b""), None);
    }

    #[test]
    fn write_truncated_round_trips_exact_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        write_truncated(path.to_str().unwrap(), b"alpha\nbeta!\n").unwrap();
        let mut contents = Vec::new();
        std::fs::File::open(&path).unwrap().read_to_end(&mut contents).unwrap();
        assert_eq!(contents, b"alpha\nbeta!\n");
    }

    #[test]
    fn write_truncated_shrinks_a_larger_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("out.txt");
        std::fs::write(&path, b"this file used to be much longer than the new content").unwrap();
        write_truncated(path.to_str().unwrap(), b"short").unwrap();
        let mut contents = Vec::new();
        std::fs::File::open(&path).unwrap().read_to_end(&mut contents).unwrap();
        assert_eq!(contents, b"short");
    }
}
