//! Syntax highlighting: the per-row classification pass and the static
//! filetype descriptor table.
//!
//! The pass is a pure function of `(render, syntax)`. Comment support is
//! single-line only, so unlike upstream kilo.c's multi-line-comment carry
//! (`hl_open_comment` propagated row to row), nothing here depends on a
//! neighboring row's state.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Highlight {
    Normal,
    Comment,
    KeywordPrimary,
    KeywordSecondary,
    String,
    Number,
    Match,
}

impl Highlight {
    /// The SGR color code used by the renderer.
    pub fn color(self) -> u8 {
        match self {
            Highlight::Normal => 39,
            Highlight::Comment => 36,
            Highlight::KeywordPrimary => 33,
            Highlight::KeywordSecondary => 31,
            Highlight::String => 35,
            Highlight::Number => 32,
            Highlight::Match => 34,
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SyntaxFlags {
    pub highlight_numbers: bool,
    pub highlight_strings: bool,
}

/// A static filetype descriptor. Keywords tagged secondary carry a trailing
/// `|` in the stored string, stripped at match time.
#[derive(Debug, Clone, Copy)]
pub struct Syntax {
    pub name: &'static str,
    pub file_match: &'static [&'static str],
    pub keywords: &'static [&'static str],
    pub singleline_comment_start: &'static str,
    pub flags: SyntaxFlags,
}

/// The C-like filetype: extensions and keyword list as used by classic kilo
/// ports, split into primary and secondary (type) keywords.
pub const C_SYNTAX: Syntax = Syntax {
    name: "c",
    file_match: &[".c", ".h", ".cpp"],
    keywords: &[
        "switch", "if", "while", "for", "break", "continue", "return", "else", "struct", "union",
        "typedef", "static", "enum", "class", "case", "int|", "long|", "double|", "float|",
        "char|", "unsigned|", "signed|", "void|",
    ],
    singleline_comment_start: "//",
    flags: SyntaxFlags { highlight_numbers: true, highlight_strings: true },
};

pub const SYNTAX_DB: &[Syntax] = &[C_SYNTAX];

/// Selects a filetype descriptor by matching `filename` against each
/// descriptor's patterns in table order; a pattern starting with `.` matches
/// the file's extension, otherwise it is matched as a substring of the whole
/// filename. First hit wins.
pub fn select_syntax(filename: &str) -> Option<&'static Syntax> {
    let extension = filename.rsplit_once('.').map(|(_, ext)| format!(".{ext}"));
    SYNTAX_DB.iter().find(|syntax| {
        syntax.file_match.iter().any(|pattern| {
            if let Some(ext) = pattern.strip_prefix('.') {
                extension.as_deref() == Some(&format!(".{ext}"))
            } else {
                filename.contains(pattern)
            }
        })
    })
}

fn is_separator(c: u8) -> bool {
    c == 0 || c.is_ascii_whitespace() || b",.()+-/*=~%<>[]".contains(&c)
}

/// Computes the highlight class for every byte of `render`, checking in
/// priority order: single-line comment, string, number, keyword, default.
/// Independent of any other row.
pub fn highlight_row(render: &[u8], syntax: Option<&Syntax>) -> Vec<Highlight> {
    let mut hl = vec![Highlight::Normal; render.len()];
    let Some(syntax) = syntax else { return hl };

    let mut prev_sep = true;
    let mut in_string: u8 = 0;
    let mut i = 0;

    while i < render.len() {
        let c = render[i];
        let prev_hl = if i > 0 { hl[i - 1] } else { Highlight::Normal };

        if in_string == 0 && !syntax.singleline_comment_start.is_empty() {
            let scs = syntax.singleline_comment_start.as_bytes();
            if render[i..].starts_with(scs) {
                for slot in &mut hl[i..] {
                    *slot = Highlight::Comment;
                }
                break;
            }
        }

        if syntax.flags.highlight_strings {
            if in_string != 0 {
                hl[i] = Highlight::String;
                if c == b'\\' && i + 1 < render.len() {
                    hl[i + 1] = Highlight::String;
                    i += 2;
                    continue;
                }
                if c == in_string {
                    in_string = 0;
                }
                i += 1;
                prev_sep = true;
                continue;
            } else if c == b'"' || c == b'\'' {
                in_string = c;
                hl[i] = Highlight::String;
                i += 1;
                prev_sep = true;
                continue;
            }
        }

        if syntax.flags.highlight_numbers
            && ((c.is_ascii_digit() && (prev_sep || prev_hl == Highlight::Number))
                || (c == b'.' && prev_hl == Highlight::Number))
        {
            hl[i] = Highlight::Number;
            i += 1;
            prev_sep = false;
            continue;
        }

        if prev_sep {
            let matched = syntax.keywords.iter().find_map(|&kw| {
                let (kw_bytes, secondary) =
                    kw.strip_suffix('|').map_or((kw.as_bytes(), false), |s| (s.as_bytes(), true));
                let end = i + kw_bytes.len();
                let followed_by_sep = end == render.len() || is_separator(render[end]);
                (render[i..].starts_with(kw_bytes) && followed_by_sep).then_some((end, secondary))
            });
            if let Some((end, secondary)) = matched {
                let class =
                    if secondary { Highlight::KeywordSecondary } else { Highlight::KeywordPrimary };
                for slot in &mut hl[i..end] {
                    *slot = class;
                }
                i = end;
                prev_sep = true;
                continue;
            }
        }

        prev_sep = is_separator(c);
        i += 1;
    }

    hl
}
