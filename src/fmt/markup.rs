//! Inline color markup: `r|text|` paints `text` with the palette entry for `r`.
//!
//! A single delimiter opens a span (right after its one-letter tag) and closes it, so every
//! message is handled in one left-to-right pass with a two-state machine. A literal pipe is
//! written as `||`, in or out of a span.
//!
//! Rendering and stripping never fail; malformed markup degrades (unknown letters emit no
//! color, unclosed spans emit no reset). Callers that care call [`validate`] first.

use super::Palette;
use super::palette::RESET;
use std::ops::ControlFlow;

/// Opens a span after a tag letter, closes it otherwise; doubled it is a literal.
pub const DELIMITER: char = '|';

const DELIMITER_BYTE: u8 = b'|';

/// The entire parse state carried across one message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SpanState {
    #[default]
    Outside,
    Inside,
}

impl SpanState {
    #[must_use]
    pub const fn is_inside(self) -> bool {
        matches!(self, Self::Inside)
    }
}

/// One step of the scan, handed to the visitor passed to [`scan`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Event {
    /// Ordinary character, copied as-is.
    Text(char),
    /// A `||` pair standing for one literal delimiter.
    Escaped,
    /// A span opened. Carries the tag letter: the plain character emitted right before the
    /// delimiter, or `None` when there was none (start of input, after another delimiter).
    Open(Option<char>),
    /// A span closed.
    Close,
}

/// Walks `input` once, reporting each [`Event`] to `visit` until the input ends or the
/// visitor breaks. Returns the span state at the point the scan stopped.
pub fn scan<F>(input: &str, mut visit: F) -> SpanState
where
    F: FnMut(Event) -> ControlFlow<()>,
{
    let mut state = SpanState::Outside;
    let mut letter = None;
    let mut chars = input.chars().peekable();

    while let Some(c) = chars.next() {
        let event = if c != DELIMITER {
            letter = Some(c);
            Event::Text(c)
        } else if chars.next_if_eq(&DELIMITER).is_some() {
            letter = None;
            Event::Escaped
        } else {
            match state {
                SpanState::Outside => {
                    state = SpanState::Inside;
                    Event::Open(letter.take())
                }
                SpanState::Inside => {
                    state = SpanState::Outside;
                    letter = None;
                    Event::Close
                }
            }
        };

        if visit(event).is_break() {
            break;
        }
    }

    state
}

/// Output area capped at `max_len - 1` bytes, the last slot of a `max_len` buffer being
/// reserved for its terminator.
struct Bounded {
    out: String,
    limit: usize,
}

impl Bounded {
    fn new(max_len: usize) -> Self {
        let limit = max_len.saturating_sub(1);
        Self {
            out: String::with_capacity(limit.min(1024)),
            limit,
        }
    }

    fn push(&mut self, c: char) -> ControlFlow<()> {
        if self.out.len() + c.len_utf8() > self.limit {
            return ControlFlow::Break(());
        }
        self.out.push(c);
        ControlFlow::Continue(())
    }

    fn push_str(&mut self, s: &str) -> ControlFlow<()> {
        if self.out.len() + s.len() > self.limit {
            return ControlFlow::Break(());
        }
        self.out.push_str(s);
        ControlFlow::Continue(())
    }

    /// Takes back the tag letter, which was copied as text before its delimiter showed up.
    fn rewind(&mut self) {
        self.out.pop();
    }

    fn into_string(self) -> String {
        self.out
    }
}

/// Replaces markup with escape sequences from `palette`.
///
/// The output never exceeds `max_len - 1` bytes; the scan stops at the first character or
/// escape sequence that would not fit, without splitting UTF-8 characters.
#[must_use]
pub fn render(input: &str, max_len: usize, palette: &Palette) -> String {
    let mut out = Bounded::new(max_len);

    scan(input, |event| match event {
        Event::Text(c) => out.push(c),
        Event::Escaped => out.push(DELIMITER),
        Event::Open(None) => ControlFlow::Continue(()),
        Event::Open(Some(letter)) => {
            out.rewind();
            palette
                .get(letter)
                .map_or(ControlFlow::Continue(()), |code| out.push_str(code))
        }
        Event::Close => out.push_str(RESET),
    });

    out.into_string()
}

/// Drops tag letters and delimiters, keeping only the text. Same bounds as [`render`].
#[must_use]
pub fn strip(input: &str, max_len: usize) -> String {
    let mut out = Bounded::new(max_len);

    scan(input, |event| match event {
        Event::Text(c) => out.push(c),
        Event::Escaped => out.push(DELIMITER),
        Event::Open(letter) => {
            if letter.is_some() {
                out.rewind();
            }
            ControlFlow::Continue(())
        }
        Event::Close => ControlFlow::Continue(()),
    });

    out.into_string()
}

/// Grammar check against a live palette: every span must open on a letter the palette knows
/// and every span must be closed. A bare delimiter with no tag letter in front of it (a
/// leading `|`, for instance) fails because it has no letter at all.
#[must_use]
pub fn validate(input: &str, palette: &Palette) -> bool {
    let mut known_letters = true;

    let end = scan(input, |event| {
        if let Event::Open(letter) = event
            && !letter.is_some_and(|l| palette.contains(l))
        {
            known_letters = false;
            return ControlFlow::Break(());
        }
        ControlFlow::Continue(())
    });

    known_letters && !end.is_inside()
}

/// Grammar check that needs no palette, so it can run in `const` context. Any letter in
/// `a`-`z` is accepted as a tag, whether or not a palette defines it.
#[must_use]
pub const fn validate_strict(input: &str) -> bool {
    check_grammar(input.as_bytes(), false)
}

/// [`validate_strict`] for a `format_args!` literal, used by the logging macros to reject bad
/// format strings at compile time.
///
/// `{{` and `}}` are literal braces. A `{...}` placeholder right before an opening `|` stands
/// in for a tag letter chosen at run time, as in `"value: {}|{:.2}|"`; the runtime check in
/// [`Logger`](crate::Logger) then sees the real letter.
#[must_use]
pub const fn validate_format_literal(input: &str) -> bool {
    check_grammar(input.as_bytes(), true)
}

/// What precedes a delimiter: the candidate tag.
#[derive(Clone, Copy)]
enum Tag {
    Missing,
    Byte(u8),
    Placeholder,
}

const fn check_grammar(bytes: &[u8], placeholders: bool) -> bool {
    let mut state = SpanState::Outside;
    let mut tag = Tag::Missing;
    let mut i = 0;

    while i < bytes.len() {
        let b = bytes[i];

        if placeholders && (b == b'{' || b == b'}') {
            if i + 1 < bytes.len() && bytes[i + 1] == b {
                tag = Tag::Byte(b);
                i += 2;
                continue;
            }
            if b == b'}' {
                // unmatched closing brace, format_args! rejects it too
                return false;
            }
            while i < bytes.len() && bytes[i] != b'}' {
                i += 1;
            }
            if i == bytes.len() {
                return false;
            }
            tag = Tag::Placeholder;
            i += 1;
            continue;
        }

        if b != DELIMITER_BYTE {
            tag = Tag::Byte(b);
            i += 1;
            continue;
        }

        if i + 1 < bytes.len() && bytes[i + 1] == DELIMITER_BYTE {
            tag = Tag::Missing;
            i += 2;
            continue;
        }

        state = match state {
            SpanState::Outside => {
                if !matches!(tag, Tag::Placeholder | Tag::Byte(b'a'..=b'z')) {
                    return false;
                }
                SpanState::Inside
            }
            SpanState::Inside => SpanState::Outside,
        };
        tag = Tag::Missing;
        i += 1;
    }

    !state.is_inside()
}
