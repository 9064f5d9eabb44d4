//! # Syntax
//!
//! Filetype descriptors and the per-row highlight scanner. The scanner is a
//! left-to-right, single pass over a row's rendered bytes; state that needs
//! to survive across rows (multi-line comments) is threaded through the
//! `in_comment` parameter and the returned `hl_open_comment` flag.

/// One highlight tag per rendered byte.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HlSymbol {
    Normal,
    Comment,
    MLComment,
    String,
    Number,
    Match,
    Keyword1,
    Keyword2,
}

impl HlSymbol {
    /// The ANSI SGR color code this tag is painted with.
    pub fn sgr_code(self) -> u8 {
        match self {
            Self::Normal => 39,
            Self::Number => 31,
            Self::Match => 34,
            Self::String => 35,
            Self::Comment | Self::MLComment => 36,
            Self::Keyword1 => 33,
            Self::Keyword2 => 32,
        }
    }
}

/// A filetype descriptor: everything the highlighter and the status bar need
/// to know about one kind of file.
#[derive(Debug, Clone)]
pub struct Conf {
    /// Display name shown in the status bar.
    pub name: &'static str,
    /// Filename patterns. A pattern starting with `.` is matched against the
    /// filename's extension; any other pattern is matched as a substring of
    /// the filename.
    pub patterns: &'static [&'static str],
    /// Keywords. A trailing `|` marks the keyword as Keyword2 instead of
    /// Keyword1 (the `|` itself is not part of the matched text).
    pub keywords: &'static [&'static str],
    pub singleline_comment_start: &'static [u8],
    /// `(open, close)` multi-line comment delimiters.
    pub multiline_comment_delims: Option<(&'static [u8], &'static [u8])>,
    pub highlight_numbers: bool,
    pub highlight_strings: bool,
}

impl Conf {
    /// The "no filetype selected" descriptor: no comments, no keywords, no
    /// number/string highlighting. Used until a file is opened/renamed into
    /// a recognized filetype, or if none match.
    pub const fn none() -> Self {
        Self {
            name: "no ft",
            patterns: &[],
            keywords: &[],
            singleline_comment_start: b"",
            multiline_comment_delims: None,
            highlight_numbers: false,
            highlight_strings: false,
        }
    }

    /// Walk the built-in filetype table and return the first descriptor
    /// whose patterns match `filename`.
    pub fn select(filename: &str) -> Option<&'static Conf> {
        HLDB.iter().find(|conf| conf.matches(filename))
    }

    fn matches(&self, filename: &str) -> bool {
        self.patterns.iter().any(|pattern| {
            if let Some(ext) = pattern.strip_prefix('.') {
                filename.rsplit('.').next().is_some_and(|e| e == ext)
            } else {
                filename.contains(pattern)
            }
        })
    }
}

const C_KEYWORDS: &[&str] = &[
    "switch", "if", "while", "for", "break", "continue", "return", "else", "struct", "union",
    "typedef", "static", "enum", "class", "case", "int|", "long|", "double|", "float|", "char|",
    "unsigned|", "signed|", "void|",
];

const RUST_KEYWORDS: &[&str] = &[
    "fn", "let", "mut", "if", "else", "match", "while", "loop", "for", "in", "break", "continue",
    "return", "struct", "enum", "impl", "trait", "pub", "use", "mod", "const", "static", "ref",
    "move", "unsafe", "as", "where", "self", "Self", "super", "dyn", "i8|", "i16|", "i32|",
    "i64|", "isize|", "u8|", "u16|", "u32|", "u64|", "usize|", "f32|", "f64|", "bool|", "char|",
    "str|", "String|",
];

static HLDB: &[Conf] = &[
    Conf {
        name: "c",
        patterns: &[".c", ".h", ".cpp"],
        keywords: C_KEYWORDS,
        singleline_comment_start: b"//",
        multiline_comment_delims: Some((b"/*", b"*/")),
        highlight_numbers: true,
        highlight_strings: true,
    },
    Conf {
        name: "rust",
        patterns: &[".rs"],
        keywords: RUST_KEYWORDS,
        singleline_comment_start: b"//",
        multiline_comment_delims: Some((b"/*", b"*/")),
        highlight_numbers: true,
        highlight_strings: true,
    },
];

/// The punctuation set that separates tokens for keyword matching and number
/// detection, plus the NUL byte used as an end-of-string sentinel.
fn is_separator(b: u8) -> bool {
    b == 0 || b.is_ascii_whitespace() || b" ,.()+-/*=~%<>[];".contains(&b)
}

fn match_keyword(s: &[u8], conf: &Conf) -> Option<(usize, bool)> {
    for &kw in conf.keywords {
        let (word, is_kw2) = match kw.strip_suffix('|') {
            Some(w) => (w, true),
            None => (kw, false),
        };
        let wb = word.as_bytes();
        if s.len() >= wb.len() && &s[..wb.len()] == wb {
            let sep_ok = s.get(wb.len()).map_or(true, |&b| is_separator(b));
            if sep_ok {
                return Some((wb.len(), is_kw2));
            }
        }
    }
    None
}

/// Scan `render` left to right, producing one `HlSymbol` per byte and the
/// `hl_open_comment` flag for this row. `in_comment` is the inherited state
/// from the previous row's `hl_open_comment`.
pub fn highlight(render: &[u8], conf: &Conf, in_comment_start: bool) -> (Vec<HlSymbol>, bool) {
    let mut hl = vec![HlSymbol::Normal; render.len()];
    let mut prev_sep = true;
    let mut in_string: u8 = 0;
    let mut in_comment = in_comment_start;
    let mut i = 0;

    while i < render.len() {
        let b = render[i];
        let prev_hl = if i > 0 { hl[i - 1] } else { HlSymbol::Normal };

        // 1. single-line comment
        if !conf.singleline_comment_start.is_empty()
            && in_string == 0
            && !in_comment
            && render[i..].starts_with(conf.singleline_comment_start)
        {
            for h in &mut hl[i..] {
                *h = HlSymbol::Comment;
            }
            break;
        }

        // 2. multi-line comment
        if let (true, Some((open, close))) = (in_string == 0, conf.multiline_comment_delims) {
            if in_comment {
                hl[i] = HlSymbol::MLComment;
                if render[i..].starts_with(close) {
                    for h in hl.iter_mut().skip(i).take(close.len()) {
                        *h = HlSymbol::MLComment;
                    }
                    i += close.len();
                    in_comment = false;
                    prev_sep = true;
                } else {
                    i += 1;
                }
                continue;
            } else if render[i..].starts_with(open) {
                for h in hl.iter_mut().skip(i).take(open.len()) {
                    *h = HlSymbol::Comment;
                }
                in_comment = true;
                i += open.len();
                continue;
            }
        }

        // 3. string
        if conf.highlight_strings {
            if in_string != 0 {
                hl[i] = HlSymbol::String;
                if b == b'\\' && i + 1 < render.len() {
                    hl[i + 1] = HlSymbol::String;
                    i += 2;
                    continue;
                }
                if b == in_string {
                    in_string = 0;
                }
                prev_sep = true;
                i += 1;
                continue;
            } else if b == b'"' || b == b'\'' {
                in_string = b;
                hl[i] = HlSymbol::String;
                i += 1;
                continue;
            }
        }

        // 4. number
        if conf.highlight_numbers
            && ((b.is_ascii_digit() && (prev_sep || prev_hl == HlSymbol::Number))
                || (b == b'.' && prev_hl == HlSymbol::Number))
        {
            hl[i] = HlSymbol::Number;
            prev_sep = false;
            i += 1;
            continue;
        }

        // 5. keyword
        if prev_sep {
            if let Some((len, is_kw2)) = match_keyword(&render[i..], conf) {
                let tag = if is_kw2 { HlSymbol::Keyword2 } else { HlSymbol::Keyword1 };
                for h in hl.iter_mut().skip(i).take(len) {
                    *h = tag;
                }
                i += len;
                prev_sep = false;
                continue;
            }
        }

        // 6. default
        prev_sep = is_separator(b);
        i += 1;
    }

    (hl, in_comment)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keyword_and_number_highlight_for_c() {
        let conf = Conf::select("main.c").unwrap();
        let (hl, _) = highlight(b"if (x == 42)", conf, false);
        assert_eq!(hl[0], HlSymbol::Keyword1);
        assert_eq!(hl[1], HlSymbol::Keyword1);
        assert_eq!(hl[2], HlSymbol::Normal);
        assert_eq!(hl[10], HlSymbol::Number);
        assert_eq!(hl[11], HlSymbol::Number);
    }

    #[test]
    fn multiline_comment_propagates_and_clears() {
        let conf = Conf::select("main.c").unwrap();
        let (hl0, open0) = highlight(b"a /* b", conf, false);
        assert!(open0);
        assert_eq!(hl0[0], HlSymbol::Normal);

        let (hl1, open1) = highlight(b"c */ d", conf, open0);
        assert!(!open1);
        assert_eq!(hl1[0], HlSymbol::MLComment);
        // ' d' after the closing marker reverts to Normal.
        assert_eq!(hl1[5], HlSymbol::Normal);

        // Editing row 0 to no longer open a comment clears propagation.
        let (_, open0_edited) = highlight(b"a b", conf, false);
        assert!(!open0_edited);
        let (hl1_rescanned, _) = highlight(b"c */ d", conf, open0_edited);
        assert!(!hl1_rescanned.contains(&HlSymbol::MLComment));
    }

    #[test]
    fn select_matches_extension_and_substring_patterns() {
        assert_eq!(Conf::select("main.rs").unwrap().name, "rust");
        assert_eq!(Conf::select("README").map(|c| c.name), None);
    }

    #[test]
    fn string_highlight_handles_escape_and_closing_quote() {
        let conf = Conf::select("main.c").unwrap();
        let (hl, _) = highlight(br#""a\"b""#, conf, false);
        assert!(hl.iter().all(|&h| h == HlSymbol::String));
    }

    #[test]
    fn render_hl_lengths_always_match() {
        let conf = Conf::select("main.rs").unwrap();
        for sample in [&b""[..], b"// comment", b"let x = 1;", b"/* open"] {
            let (hl, _) = highlight(sample, conf, false);
            assert_eq!(hl.len(), sample.len());
        }
    }
}
