//! # Row
//!
//! One logical line of text: the authoritative `chars` bytes, the derived
//! `render` form (tabs expanded to spaces), and a highlight tag per
//! rendered byte. `render`/`hl` are always rebuilt together so they can
//! never be observed out of sync with each other or with `chars`.

use crate::syntax::{Conf, HlSymbol};

/// Fallback tab stop used by call sites that do not thread a `Config`
/// through (tests, and anywhere a row is built before a config is known).
pub const TAB_STOP: usize = 8;

#[derive(Debug, Clone)]
pub struct Row {
    /// Position of this row in the owning store. Kept consistent with the
    /// row's index in the `Vec` after every insert/delete.
    pub index: usize,
    /// The authoritative byte sequence. No trailing newline.
    pub chars: Vec<u8>,
    /// Derived from `chars`: tabs expanded to spaces up to the next
    /// multiple of `tab_stop`. Never contains a tab byte.
    pub render: Vec<u8>,
    /// One highlight tag per byte of `render`. Always the same length as
    /// `render`.
    pub hl: Vec<HlSymbol>,
    /// True iff this row ends inside an unterminated multi-line comment.
    /// Read by the next row's highlighter as its starting `in_comment`
    /// state.
    pub hl_open_comment: bool,
    tab_stop: usize,
}

impl Row {
    pub fn new(index: usize, chars: Vec<u8>, tab_stop: usize) -> Self {
        let mut row = Self {
            index,
            chars,
            render: Vec::new(),
            hl: Vec::new(),
            hl_open_comment: false,
            tab_stop: tab_stop.max(1),
        };
        row.rebuild_render();
        row
    }

    /// Rebuild `render` from `chars`, expanding tabs. Does not touch `hl`;
    /// callers that mutate `chars` must follow up with a highlight rescan
    /// (`syntax::highlight`) to keep the `render.len() == hl.len()`
    /// invariant.
    fn rebuild_render(&mut self) {
        let mut render = Vec::with_capacity(self.chars.len());
        for &b in &self.chars {
            if b == b'\t' {
                render.push(b' ');
                while render.len() % self.tab_stop != 0 {
                    render.push(b' ');
                }
            } else {
                render.push(b);
            }
        }
        self.render = render;
    }

    /// Recompute `render` and return the previous `hl_open_comment` value
    /// the caller should feed to `syntax::highlight` as the inherited
    /// comment state (it has not changed yet at this point).
    pub fn refresh_render(&mut self) {
        self.rebuild_render();
    }

    /// Number of characters (bytes) in `chars`.
    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    /// Insert byte `c` at column `at`, clamped into `[0, len]`.
    pub fn insert_char(&mut self, at: usize, c: u8) {
        let at = at.min(self.chars.len());
        self.chars.insert(at, c);
        self.rebuild_render();
    }

    /// Remove the byte at `at` if in bounds.
    pub fn delete_char(&mut self, at: usize) {
        if at < self.chars.len() {
            self.chars.remove(at);
            self.rebuild_render();
        }
    }

    /// Append `bytes` to the end of `chars`.
    pub fn append_string(&mut self, bytes: &[u8]) {
        self.chars.extend_from_slice(bytes);
        self.rebuild_render();
    }

    /// Split off and return everything from `at` onward, leaving this row
    /// truncated to `chars[..at]`. Used by newline-splitting.
    pub fn split_off(&mut self, at: usize) -> Vec<u8> {
        let at = at.min(self.chars.len());
        let tail = self.chars.split_off(at);
        self.rebuild_render();
        tail
    }

    /// Walk `chars[0..cx]`, advancing the render column by 1 per non-tab
    /// byte and to the next tab stop per tab byte.
    pub fn cx_to_rx(&self, cx: usize) -> usize {
        let mut rx = 0;
        for &b in self.chars.iter().take(cx) {
            if b == b'\t' {
                rx += self.tab_stop - (rx % self.tab_stop);
            } else {
                rx += 1;
            }
        }
        rx
    }

    /// Inverse of `cx_to_rx`: the first `cx` whose simulated render column
    /// exceeds `rx`.
    pub fn rx_to_cx(&self, rx: usize) -> usize {
        let mut cur_rx = 0;
        for (cx, &b) in self.chars.iter().enumerate() {
            if b == b'\t' {
                cur_rx += self.tab_stop - (cur_rx % self.tab_stop);
            } else {
                cur_rx += 1;
            }
            if cur_rx > rx {
                return cx;
            }
        }
        self.chars.len()
    }

    /// Rescan this row's highlighting given the filetype descriptor and the
    /// inherited multi-line-comment state from the previous row. Returns
    /// `true` if `hl_open_comment` changed as a result, which tells the
    /// caller whether the next row needs to be rescanned too.
    pub fn update_highlight(&mut self, conf: &Conf, in_comment: bool) -> bool {
        let prev = self.hl_open_comment;
        let (hl, open_comment) = crate::syntax::highlight(&self.render, conf, in_comment);
        self.hl = hl;
        self.hl_open_comment = open_comment;
        prev != self.hl_open_comment
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::syntax::Conf;

    #[test]
    fn tab_expands_to_next_stop() {
        let row = Row::new(0, b"a\tb".to_vec(), TAB_STOP);
        assert_eq!(row.render, b"a       b");
        assert_eq!(row.render.len(), 9);
        assert_eq!(row.cx_to_rx(2), 8);
    }

    #[test]
    fn render_never_contains_tab() {
        let row = Row::new(0, b"\t\t\tx".to_vec(), TAB_STOP);
        assert!(!row.render.contains(&b'\t'));
    }

    #[test]
    fn rx_cx_roundtrip_on_non_tab_boundary() {
        let row = Row::new(0, b"hello world".to_vec(), TAB_STOP);
        for cx in 0..=row.chars.len() {
            let rx = row.cx_to_rx(cx);
            assert_eq!(row.rx_to_cx(rx), cx);
        }
    }

    #[test]
    fn insert_and_delete_rebuild_render() {
        let mut row = Row::new(0, b"ac".to_vec(), TAB_STOP);
        row.insert_char(1, b'b');
        assert_eq!(row.chars, b"abc");
        row.delete_char(1);
        assert_eq!(row.chars, b"ac");
    }

    #[test]
    fn split_off_truncates_and_returns_tail() {
        let mut row = Row::new(0, b"hello world".to_vec(), TAB_STOP);
        let tail = row.split_off(5);
        assert_eq!(row.chars, b"hello");
        assert_eq!(tail, b" world");
    }

    #[test]
    fn update_highlight_keeps_render_and_hl_lengths_equal() {
        let mut row = Row::new(0, b"if (x == 42)".to_vec(), TAB_STOP);
        row.update_highlight(&Conf::none(), false);
        assert_eq!(row.render.len(), row.hl.len());
    }
}
