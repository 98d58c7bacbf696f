/*!
The `Path` component: a reverse-growing linked list of segments, `Empty | Slash(tail) |
Segment(text, tail)`. The *deepest* constructor corresponds to the *first* segment in the
string form: `"/a/b"` is `Segment("b", Slash(Segment("a", Slash(Empty))))`.

Every traversal here is written as an explicit loop rather than a recursive function, so that
paths with tens of thousands of segments cannot overflow the stack.
*/

use crate::error::{Component as ErrComponent, ErrorKind, Result};
use crate::pct_encoding::{decode_component, encode, is_path_safe, is_uri_path_safe};
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// A path, represented as a reverse-growing cons list. See the module documentation for the
/// string-form convention.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Path {
    /// The empty path (no segments, no leading or trailing slash at this position).
    Empty,
    /// A `/` at this position, followed (toward the start of the string) by `tail`.
    Slash(Box<Path>),
    /// A non-empty segment, followed (toward the start of the string) by `tail`. `text` is
    /// never empty: an empty segment is represented by two adjacent `Slash` nodes instead.
    Segment(String, Box<Path>),
}

#[derive(Clone, Debug, PartialEq, Eq)]
enum Token {
    Slash,
    Seg(String),
}

// ------------------------------------------------------------------------------------------------
// Token conversion (the shared non-recursive traversal primitive)
// ------------------------------------------------------------------------------------------------

/// Collect the tokens of `p` in left-to-right (string) order. Implemented by peeling `p` from
/// its outside in (a single `while` loop — the outermost constructor is always the most
/// recently-appended, i.e. the *last* token in the string), then reversing the result.
fn to_tokens(p: &Path) -> Vec<Token> {
    let mut toks = Vec::new();
    let mut cur = p;
    loop {
        match cur {
            Path::Empty => break,
            Path::Slash(tail) => {
                toks.push(Token::Slash);
                cur = tail;
            }
            Path::Segment(s, tail) => {
                toks.push(Token::Seg(s.clone()));
                cur = tail;
            }
        }
    }
    toks.reverse();
    toks
}

/// The inverse of [`to_tokens`]: build a `Path` from a left-to-right token sequence by folding
/// forward, wrapping the accumulator once per token (so the last token ends up outermost).
fn from_tokens(tokens: &[Token]) -> Path {
    let mut acc = Path::Empty;
    for t in tokens {
        acc = match t {
            Token::Slash => Path::Slash(Box::new(acc)),
            Token::Seg(s) => Path::Segment(s.clone(), Box::new(acc)),
        };
    }
    acc
}

/// Decompose `p` into `(leading_slash, segments, trailing_slash)`. A zero-length run between two
/// slashes (i.e. `//`) is represented as an empty string in `segments`; the `Path` invariant that
/// forbids an empty `Segment` node is about the *structural* representation, not this transient
/// decomposition.
fn decompose(p: &Path) -> (bool, Vec<String>, bool) {
    let tokens = to_tokens(p);
    let leading = matches!(tokens.first(), Some(Token::Slash));
    let trailing = tokens.len() > if leading { 1 } else { 0 } && matches!(tokens.last(), Some(Token::Slash));
    let start = if leading { 1 } else { 0 };
    let end = if trailing { tokens.len() - 1 } else { tokens.len() };

    let mut segments = Vec::new();
    let mut expect_separator = false;
    let mut i = start;
    while i < end {
        match &tokens[i] {
            Token::Seg(s) => {
                segments.push(s.clone());
                expect_separator = true;
            }
            Token::Slash => {
                if expect_separator {
                    expect_separator = false;
                } else {
                    segments.push(String::new());
                }
            }
        }
        i += 1;
    }
    (leading, segments, trailing)
}

/// The inverse of [`decompose`]. The leading slash is wrapped first (deepest, prints first); the
/// trailing slash is wrapped last (outermost, prints last).
fn recompose(leading: bool, segments: &[String], trailing: bool) -> Path {
    // No content between the boundaries: at most one slash, never two.
    if segments.is_empty() && leading && trailing {
        return Path::Slash(Box::new(Path::Empty));
    }
    let mut acc = Path::Empty;
    if leading {
        acc = Path::Slash(Box::new(acc));
    }
    for (i, seg) in segments.iter().enumerate() {
        if i > 0 {
            acc = Path::Slash(Box::new(acc));
        }
        if !seg.is_empty() {
            acc = Path::Segment(seg.clone(), Box::new(acc));
        }
    }
    if trailing {
        acc = Path::Slash(Box::new(acc));
    }
    acc
}

// ------------------------------------------------------------------------------------------------
// Rendering
// ------------------------------------------------------------------------------------------------

fn render<F>(p: &Path, transform: F) -> String
where
    F: Fn(&str) -> String,
{
    let tokens = to_tokens(p);
    let mut out = String::new();
    for t in &tokens {
        match t {
            Token::Slash => out.push('/'),
            Token::Seg(s) => out.push_str(&transform(s)),
        }
    }
    out
}

impl Display for Path {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", render(self, |s| s.to_string()))
    }
}

impl FromStr for Path {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Ok(Path::Empty);
        }
        let leading = s.starts_with('/');
        let trailing = s.len() > 1 && s.ends_with('/') || s == "/";
        let body = s.trim_start_matches('/');
        let body = if trailing && !body.is_empty() {
            &body[..body.len() - 1]
        } else {
            body
        };
        let mut segments = Vec::new();
        if !body.is_empty() || leading {
            for raw in body.split('/') {
                if !is_path_segment_syntax(raw) {
                    return Err(ErrorKind::ParseError("path-segment".to_string(), 0).into());
                }
                segments.push(decode_component(raw, ErrComponent::Path)?);
            }
        }
        if body.is_empty() && !leading {
            segments.clear();
        }
        Ok(recompose(leading, &segments, trailing))
    }
}

fn is_path_segment_syntax(s: &str) -> bool {
    crate::pct_encoding::is_correctly_escaped(s)
        && s.chars().all(|c| is_path_safe(c) || c == '%')
}

impl Path {
    /// The root path, `/`.
    pub fn root() -> Self {
        Path::Slash(Box::new(Path::Empty))
    }

    /// `true` if this path has no segments and no slashes.
    pub fn is_empty(&self) -> bool {
        matches!(self, Path::Empty)
    }

    /// `true` iff the *oldest* (deepest) constructor is `Slash` — the string form begins with
    /// `/`.
    pub fn start_with_slash(&self) -> bool {
        decompose(self).0
    }

    /// `true` iff the *newest* (outermost) constructor is `Slash` — the string form ends with
    /// `/`.
    pub fn ends_with_slash(&self) -> bool {
        matches!(self, Path::Slash(_))
    }

    /// Structural reversal: an iterative accumulator peels `self` from the outside in and
    /// rebuilds with every constructor's direction swapped. An involution: `reverse(reverse(p))
    /// == p`.
    pub fn reverse(&self) -> Path {
        let mut acc = Path::Empty;
        let mut cur = self.clone();
        loop {
            cur = match cur {
                Path::Empty => break,
                Path::Slash(tail) => {
                    acc = Path::Slash(Box::new(acc));
                    *tail
                }
                Path::Segment(s, tail) => {
                    acc = Path::Segment(s, Box::new(acc));
                    *tail
                }
            };
        }
        acc
    }

    /// `p / s`: append a new terminal segment. An empty `s` is a no-op.
    pub fn append_segment(&self, s: &str) -> Path {
        if s.is_empty() {
            return self.clone();
        }
        match self {
            Path::Slash(_) => Path::Segment(s.to_string(), Box::new(self.clone())),
            other => Path::Segment(s.to_string(), Box::new(Path::Slash(Box::new(other.clone())))),
        }
    }

    /// Concatenates `s` onto the terminal segment if this path ends in one; otherwise behaves as
    /// [`Path::append_segment`].
    pub fn append_string(&self, s: &str) -> Path {
        match self {
            Path::Segment(seg, tail) => Path::Segment(format!("{}{}", seg, s), tail.clone()),
            other => other.append_segment(s),
        }
    }

    /// `q.prepend(p)` places `p`'s content before `self`'s, i.e. yields `p` followed by `self`.
    /// If the two paths meet without a slash on either side, their touching segments are
    /// concatenated as text rather than separated (matching [`Path::append_string`]'s merge
    /// rule) — see `DESIGN.md` for the chosen join behavior at this boundary.
    pub fn prepend(&self, p: &Path) -> Path {
        if p.is_empty() {
            return self.clone();
        }
        if self.is_empty() {
            return p.clone();
        }
        let self_starts_with_slash = self.start_with_slash();
        let p_ends_with_slash = p.ends_with_slash();
        if self_starts_with_slash || p_ends_with_slash {
            let mut tokens = to_tokens(p);
            tokens.extend(to_tokens(self));
            from_tokens(&tokens)
        } else {
            // merge the touching segments textually
            let mut p_tokens = to_tokens(p);
            let mut self_tokens = to_tokens(self);
            match (p_tokens.pop(), self_tokens.first().cloned()) {
                (Some(Token::Seg(last)), Some(Token::Seg(first))) => {
                    self_tokens.remove(0);
                    p_tokens.push(Token::Seg(format!("{}{}", last, first)));
                    p_tokens.extend(self_tokens);
                }
                (popped, _) => {
                    if let Some(t) = popped {
                        p_tokens.push(t);
                    }
                    p_tokens.extend(self_tokens);
                }
            }
            from_tokens(&p_tokens)
        }
    }

    /// RFC 3986 §5.2.4 dot-segment removal. Operates on the decomposed segment list (so `"//"`
    /// empty segments are visible to the `".."` popping rule), in a single left-to-right pass;
    /// the result is then re-composed. No recursion, regardless of path length.
    pub fn remove_dot_segments(&self) -> Path {
        let (leading, segments, mut trailing) = decompose(self);
        let mut out: Vec<String> = Vec::with_capacity(segments.len());
        let n = segments.len();
        for (i, seg) in segments.into_iter().enumerate() {
            let is_last = i + 1 == n;
            match seg.as_str() {
                "." => {
                    if is_last {
                        trailing = true;
                    }
                }
                ".." => {
                    out.pop();
                    if is_last {
                        trailing = true;
                    }
                }
                _ => out.push(seg),
            }
        }
        recompose(leading, &out, trailing)
    }

    /// The IRI (UTF-8) rendering: segments appear as literal text.
    pub fn as_string(&self) -> String {
        self.to_string()
    }

    /// The URI (ASCII) rendering: each segment is percent-encoded against the path-safe set.
    pub fn as_uri(&self) -> String {
        render(self, |s| encode(s, is_uri_path_safe))
    }

    /// Iterate the decoded segment texts in left-to-right order (empty segments from `//` are
    /// included).
    pub fn segments(&self) -> Vec<String> {
        decompose(self).1
    }

    /// The "directory" of this path: everything up to and including the slash before the last
    /// segment (RFC 3986 §5.3's merge step). A path with no segments at all becomes the root.
    pub(crate) fn dirname(&self) -> Path {
        let (_leading, mut segments, _) = decompose(self);
        if segments.is_empty() {
            return Path::root();
        }
        segments.pop();
        recompose(true, &segments, true)
    }
}
