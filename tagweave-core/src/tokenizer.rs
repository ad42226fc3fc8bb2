//! Character state machine recognizing self-closing tags
//!
//! This is a streaming tokenizer: it consumes text in chunks and emits
//! [`Segment`]s in batches. The machine inspects exactly one character at a
//! time and never re-scans, so it is resumable at arbitrary chunk boundaries.
//!
//! Invariants:
//! - Chunk-equivalence: feeding input in one chunk or many chunks yields the
//!   same segment sequence for equivalent text.
//! - Order: segments are emitted in input order; the pending text run is
//!   flushed immediately before the tag that terminates it.
//! - Fidelity: any construct that is not ultimately recognized as a
//!   permitted, self-closing tag is replayed into the text stream
//!   character-for-character, exactly as it appeared in the input.

use crate::allow_list::TagAllowList;
use crate::error::{Result, ScanError};
use crate::segment::{Attributes, Segment, TagRecord};

/// Scanner states. Exactly one is active; it plus the accumulated buffers is
/// the entire scan state, sufficient to resume across any input split.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum State {
    Begin,
    Text,
    OpenChar,
    OpenTag,
    Attrib,
    AttribName,
    AttribValue,
    QuotedAttribValue,
    QuotedAttribValueEscape,
    CloseTag,
}

/// Whitespace recognized inside tags: `\n`, `\r`, `\t`, space.
fn is_whitespace(c: char) -> bool {
    matches!(c, '\n' | '\r' | '\t' | ' ')
}

/// Characters legal in tag names, attribute names, and unquoted values.
fn is_name_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '.' || c == '_'
}

/// Map an escapable control letter to its control code; any other escaped
/// character is taken literally with the backslash dropped.
fn unescape(c: char) -> char {
    match c {
        'b' => '\u{0008}',
        'f' => '\u{000C}',
        'n' => '\n',
        'r' => '\r',
        't' => '\t',
        'v' => '\u{000B}',
        other => other,
    }
}

/// Streaming tokenizer for `{@name attr=value .../}` constructs.
///
/// Completed segments accumulate internally in input order; drain them with
/// [`take_segments`](Tokenizer::take_segments). The session protocol is
/// `feed`* → `close` (flush the pending text run) → `resume` → `feed`* …,
/// with a final [`finish`](Tokenizer::finish) at end of stream.
#[derive(Debug)]
pub struct Tokenizer {
    state: State,
    allow: Option<TagAllowList>,
    closed: bool,
    /// Byte offset of the next character, counted across all feeds.
    offset: usize,
    /// Literal text accumulated since the last segment boundary.
    text: String,
    /// Raw source of the tag candidate since its `{`, kept for lossless
    /// replay when the candidate is demoted back to text.
    raw: String,
    tag_name: String,
    attr_name: String,
    attr_value: String,
    attributes: Attributes,
    segments: Vec<Segment>,
}

impl Tokenizer {
    /// Create a tokenizer. `allow` of `None` recognizes every well-formed
    /// self-closing tag; `Some(list)` recognizes only the listed names.
    pub fn new(allow: Option<TagAllowList>) -> Self {
        Self {
            state: State::Begin,
            allow,
            closed: false,
            offset: 0,
            text: String::new(),
            raw: String::new(),
            tag_name: String::new(),
            attr_name: String::new(),
            attr_value: String::new(),
            attributes: Attributes::new(),
            segments: Vec::new(),
        }
    }

    /// Scan a complete input in one shot: feed, finish, and return the
    /// segments.
    pub fn scan_all(input: &str, allow: Option<TagAllowList>) -> Result<Vec<Segment>> {
        let mut tokenizer = Self::new(allow);
        tokenizer.feed(input)?;
        tokenizer.finish()?;
        Ok(tokenizer.take_segments())
    }

    /// The configured allow-list, if any.
    pub fn allow_list(&self) -> Option<&TagAllowList> {
        self.allow.as_ref()
    }

    /// Whether the tokenizer is currently closed.
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Drain the segments completed so far, in input order.
    pub fn take_segments(&mut self) -> Vec<Segment> {
        std::mem::take(&mut self.segments)
    }

    /// Advance the state machine over `chunk`.
    ///
    /// Completed segments accumulate internally. Fails with
    /// [`ScanError::ClosedWrite`] if the tokenizer is closed, or
    /// [`ScanError::MalformedTag`] on a grammar violation; a malformed
    /// tokenizer cannot be resumed.
    pub fn feed(&mut self, chunk: &str) -> Result<()> {
        if self.closed {
            return Err(ScanError::ClosedWrite);
        }
        for c in chunk.chars() {
            self.step(c)?;
            self.offset += c.len_utf8();
        }
        Ok(())
    }

    /// Flush the pending text run and mark the tokenizer closed.
    ///
    /// An in-flight tag candidate is left intact: it resumes scanning after
    /// [`resume`](Tokenizer::resume), which is what keeps the segment
    /// sequence independent of how the input was chunked. Fails with
    /// [`ScanError::DoubleClose`] if already closed.
    pub fn close(&mut self) -> Result<()> {
        if self.closed {
            return Err(ScanError::DoubleClose);
        }
        self.flush_text();
        self.closed = true;
        Ok(())
    }

    /// Clear the closed flag, permitting further feeds.
    pub fn resume(&mut self) {
        self.closed = false;
    }

    /// End of stream: demote any in-flight tag candidate to literal text,
    /// flush, and close. Unlike [`close`](Tokenizer::close), nothing
    /// survives for resumption; a dangling `{@…` at end of input is emitted
    /// verbatim rather than dropped.
    pub fn finish(&mut self) -> Result<()> {
        if self.closed {
            return Err(ScanError::DoubleClose);
        }
        if !matches!(self.state, State::Begin | State::Text) {
            self.demote(None);
        }
        self.flush_text();
        self.closed = true;
        Ok(())
    }

    /// Consume one character.
    fn step(&mut self, c: char) -> Result<()> {
        match self.state {
            State::Begin | State::Text => {
                if c == '{' {
                    self.raw.clear();
                    self.raw.push('{');
                    self.state = State::OpenChar;
                } else {
                    self.text.push(c);
                    self.state = State::Text;
                }
            }

            State::OpenChar => {
                if c == '@' {
                    self.raw.push('@');
                    self.state = State::OpenTag;
                } else {
                    // Revert, re-injecting the swallowed '{' and this character.
                    self.demote(Some(c));
                }
            }

            State::OpenTag => {
                if is_name_char(c) {
                    self.tag_name.push(c);
                    self.raw.push(c);
                } else if is_whitespace(c) {
                    if self.name_permitted() {
                        self.raw.push(c);
                        self.state = State::Attrib;
                    } else {
                        self.demote(Some(c));
                    }
                } else if c == '/' {
                    if self.name_permitted() {
                        self.raw.push(c);
                        self.state = State::CloseTag;
                    } else {
                        self.demote(Some(c));
                    }
                } else if c == '}' {
                    // Symmetric construct, never a tag.
                    self.demote(Some(c));
                } else if self.tag_name.is_empty() {
                    self.demote(Some(c));
                } else {
                    return Err(self.malformed());
                }
            }

            State::Attrib => {
                if is_name_char(c) {
                    self.attr_name.clear();
                    self.attr_name.push(c);
                    self.attr_value.clear();
                    self.raw.push(c);
                    self.state = State::AttribName;
                } else if is_whitespace(c) {
                    self.raw.push(c);
                } else if c == '/' {
                    self.raw.push(c);
                    self.state = State::CloseTag;
                } else {
                    return Err(self.malformed());
                }
            }

            State::AttribName => {
                if is_name_char(c) {
                    self.attr_name.push(c);
                    self.raw.push(c);
                } else if is_whitespace(c) {
                    self.commit_valueless();
                    self.raw.push(c);
                    self.state = State::Attrib;
                } else if c == '=' {
                    self.raw.push(c);
                    self.state = State::AttribValue;
                } else if c == '/' {
                    self.commit_valueless();
                    self.raw.push(c);
                    self.state = State::CloseTag;
                } else {
                    // Abort attribute parsing: everything accumulated in this
                    // tag goes back to the text stream verbatim.
                    self.demote(Some(c));
                }
            }

            State::AttribValue => {
                if c == '/' {
                    self.commit_attribute();
                    self.raw.push(c);
                    self.state = State::CloseTag;
                } else if c == '"' {
                    if self.attr_value.is_empty() {
                        self.raw.push(c);
                        self.state = State::QuotedAttribValue;
                    } else {
                        return Err(self.malformed());
                    }
                } else if is_whitespace(c) {
                    if !self.attr_value.is_empty() {
                        self.commit_attribute();
                        self.state = State::Attrib;
                    }
                    self.raw.push(c);
                } else {
                    self.attr_value.push(c);
                    self.raw.push(c);
                }
            }

            State::QuotedAttribValue => {
                if c == '"' {
                    self.commit_attribute();
                    self.raw.push(c);
                    self.state = State::Attrib;
                } else if c == '\\' {
                    self.raw.push(c);
                    self.state = State::QuotedAttribValueEscape;
                } else {
                    self.attr_value.push(c);
                    self.raw.push(c);
                }
            }

            State::QuotedAttribValueEscape => {
                self.attr_value.push(unescape(c));
                self.raw.push(c);
                self.state = State::QuotedAttribValue;
            }

            State::CloseTag => {
                if c == '}' {
                    self.emit_tag();
                } else if is_whitespace(c) {
                    self.raw.push(c);
                } else {
                    return Err(self.malformed());
                }
            }
        }
        Ok(())
    }

    /// Whether the accumulated tag name is non-empty and passes the
    /// allow-list.
    fn name_permitted(&self) -> bool {
        !self.tag_name.is_empty()
            && self
                .allow
                .as_ref()
                .map_or(true, |list| list.allows(&self.tag_name))
    }

    fn malformed(&self) -> ScanError {
        ScanError::MalformedTag {
            position: self.offset,
        }
    }

    /// Commit `name` as a valueless attribute (`foo` ⇒ `foo:"foo"`).
    fn commit_valueless(&mut self) {
        let name = std::mem::take(&mut self.attr_name);
        self.attributes.insert(name.clone(), name);
    }

    fn commit_attribute(&mut self) {
        let name = std::mem::take(&mut self.attr_name);
        let value = std::mem::take(&mut self.attr_value);
        self.attributes.insert(name, value);
    }

    /// Replay the raw tag candidate (plus the character that broke it) into
    /// the text stream and drop back to plain text scanning.
    fn demote(&mut self, trailing: Option<char>) {
        self.text.push_str(&self.raw);
        if let Some(c) = trailing {
            self.text.push(c);
        }
        self.reset_candidate();
        self.state = State::Text;
    }

    /// Emit the completed tag, flushing the pending text run first so the
    /// segment order mirrors the input order.
    fn emit_tag(&mut self) {
        self.flush_text();
        self.segments.push(Segment::Tag(TagRecord {
            name: std::mem::take(&mut self.tag_name),
            attributes: std::mem::take(&mut self.attributes),
        }));
        self.reset_candidate();
        self.state = State::Text;
    }

    fn reset_candidate(&mut self) {
        self.raw.clear();
        self.tag_name.clear();
        self.attr_name.clear();
        self.attr_value.clear();
        self.attributes = Attributes::new();
    }

    fn flush_text(&mut self) {
        if !self.text.is_empty() {
            self.segments.push(Segment::Text(std::mem::take(&mut self.text)));
        }
    }
}

impl Default for Tokenizer {
    fn default() -> Self {
        Self::new(None)
    }
}
