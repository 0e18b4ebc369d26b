//! Line layouts are templates such as `{tag} {location} : {msg}`, parsed once and rendered for
//! every record, so console and file outputs can use different column orders.

/// Closed set of known substitution tokens; unknown `{names}` pass through as literal text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placeholder {
    Tag,
    Level,
    File,
    Line,
    Location,
    Msg,
}

impl Placeholder {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Tag => "tag",
            Self::Level => "level",
            Self::File => "file",
            Self::Line => "line",
            Self::Location => "location",
            Self::Msg => "msg",
        }
    }

    pub const ALL: &'static [Self] = &[
        Self::Tag,
        Self::Level,
        Self::File,
        Self::Line,
        Self::Location,
        Self::Msg,
    ];

    fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|ph| ph.as_str() == name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormatSegment {
    Literal(String),
    Placeholder(Placeholder),
}

/// Pre-parsed template; parse once, render many.
#[derive(Debug, Clone)]
pub struct FormatTemplate {
    segments: Vec<FormatSegment>,
}

impl FormatTemplate {
    /// Layout shared by the console and plain formatters unless configured otherwise.
    pub const DEFAULT: &'static str = "{tag} {location} : {msg}";

    #[must_use]
    pub fn parse(template: &str) -> Self {
        let mut segments = Vec::new();
        let mut current = String::new();
        let mut rest = template;

        while let Some(open) = rest.find('{') {
            let Some(close) = rest[open..].find('}').map(|c| open + c) else {
                break;
            };

            current.push_str(&rest[..open]);
            let name = &rest[open + 1..close];

            if let Some(ph) = Placeholder::from_name(name) {
                if !current.is_empty() {
                    segments.push(FormatSegment::Literal(std::mem::take(&mut current)));
                }
                segments.push(FormatSegment::Placeholder(ph));
            } else {
                current.push_str(&rest[open..=close]);
            }

            rest = &rest[close + 1..];
        }

        current.push_str(rest);
        if !current.is_empty() {
            segments.push(FormatSegment::Literal(current));
        }

        Self { segments }
    }

    #[must_use]
    pub fn segments(&self) -> &[FormatSegment] {
        &self.segments
    }

    #[must_use]
    pub fn render(&self, values: &FormatValues) -> String {
        let mut result = String::new();

        for segment in &self.segments {
            match segment {
                FormatSegment::Literal(s) => result.push_str(s),
                FormatSegment::Placeholder(ph) => result.push_str(match ph {
                    Placeholder::Tag => &values.tag,
                    Placeholder::Level => &values.level,
                    Placeholder::File => &values.file,
                    Placeholder::Line => &values.line,
                    Placeholder::Location => &values.location,
                    Placeholder::Msg => &values.msg,
                }),
            }
        }

        result
    }
}

impl Default for FormatTemplate {
    fn default() -> Self {
        Self::parse(Self::DEFAULT)
    }
}

/// One field per placeholder, so a missing value is a compile error rather than a runtime typo.
#[derive(Debug, Clone, Default)]
pub struct FormatValues {
    pub tag: String,
    pub level: String,
    pub file: String,
    pub line: String,
    pub location: String,
    pub msg: String,
}

impl FormatValues {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tag = tag.into();
        self
    }

    #[must_use]
    pub fn level(mut self, level: impl Into<String>) -> Self {
        self.level = level.into();
        self
    }

    /// Sets `{file}`, `{line}` and the combined `{location}` (`file:line`, padded to
    /// `location_width`).
    #[must_use]
    pub fn location(mut self, file: &str, line: u32, location_width: usize) -> Self {
        self.file = file.to_string();
        self.line = line.to_string();
        self.location = pad(&format!("{file}:{line}"), location_width, Alignment::Left);
        self
    }

    #[must_use]
    pub fn msg(mut self, msg: impl Into<String>) -> Self {
        self.msg = msg.into();
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Alignment {
    #[default]
    Left,
    Right,
}

/// Pads `text` with spaces up to `width` characters. Longer text is returned unchanged.
#[must_use]
pub fn pad(text: &str, width: usize, alignment: Alignment) -> String {
    match alignment {
        Alignment::Left => format!("{text:<width$}"),
        Alignment::Right => format!("{text:>width$}"),
    }
}

/// Cuts `s` to at most `max_bytes`, backing off to the previous character boundary.
pub fn truncate(s: &mut String, max_bytes: usize) {
    if s.len() <= max_bytes {
        return;
    }
    let mut end = max_bytes;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    s.truncate(end);
}
