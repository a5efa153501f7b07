//! Line-oriented event scripts.
//!
//! A script names widget parts instead of raw node ids, so a recorded
//! interaction can be replayed against any [`Region`]:
//!
//! ```text
//! # open with the mouse, then pick with the keyboard
//! click trigger
//! focus trigger
//! key ArrowDown
//! key Enter
//! click outside
//! ```
//!
//! Targets are `trigger`, `listbox`, `outside` and `option <index>`. Keys use
//! DOM names; `Space` stands for `" "` and modifiers are written as prefixes
//! (`ctrl+Home`). `blur` without a target drops focus onto nothing.

use crate::error::{Error, Result};
use crate::event::{EventPath, InputEvent, Key, KeyEvent};
use crate::region::Region;

/// A parsed script event with its source line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScriptEvent {
    /// One-based line number.
    pub line: usize,
    /// The event to dispatch.
    pub event: InputEvent,
}

/// Parses a whole script. Blank lines and `#` comments are skipped.
pub fn parse_script(text: &str, region: &Region) -> Result<Vec<ScriptEvent>> {
    let mut events = Vec::new();
    for (i, raw) in text.lines().enumerate() {
        let line = i + 1;
        if let Some(event) = parse_line(line, raw, region)? {
            events.push(ScriptEvent { line, event });
        }
    }
    Ok(events)
}

/// Parses one line. Returns `None` for blank lines and comments.
pub fn parse_line(line: usize, raw: &str, region: &Region) -> Result<Option<InputEvent>> {
    let text = raw.trim();
    if text.is_empty() || text.starts_with('#') {
        return Ok(None);
    }

    let (verb, rest) = text
        .split_once(char::is_whitespace)
        .map_or((text, ""), |(v, r)| (v, r.trim()));

    let event = match verb {
        "click" => InputEvent::Click(target(line, rest, region)?),
        "pointerdown" => InputEvent::PointerDown(target(line, rest, region)?),
        "focus" => InputEvent::FocusIn(target(line, rest, region)?),
        "blur" if rest.is_empty() => InputEvent::FocusOut { related: None },
        "blur" => InputEvent::FocusOut {
            related: Some(target(line, rest, region)?),
        },
        "key" => InputEvent::KeyDown(key(line, rest)?),
        other => return Err(Error::script(line, format!("unknown event `{other}`"))),
    };
    Ok(Some(event))
}

fn target(line: usize, text: &str, region: &Region) -> Result<EventPath> {
    let mut words = text.split_whitespace();
    let path = match (words.next(), words.next()) {
        (Some("trigger"), None) => region.trigger_path(),
        (Some("listbox"), None) => region.listbox_path(),
        (Some("outside"), None) => Region::outside_path(),
        (Some("option"), Some(index)) => {
            let index: usize = index
                .parse()
                .map_err(|_| Error::script(line, format!("invalid option index `{index}`")))?;
            region.option_path(index).ok_or(Error::UnknownOption {
                line,
                index,
                count: region.options().len(),
            })?
        }
        (Some("option"), None) => return Err(Error::script(line, "missing option index")),
        (None, _) => return Err(Error::script(line, "missing target")),
        _ => return Err(Error::script(line, format!("unknown target `{text}`"))),
    };
    if words.next().is_some() {
        return Err(Error::script(line, format!("unexpected input after `{text}`")));
    }
    Ok(path)
}

fn key(line: usize, text: &str) -> Result<KeyEvent> {
    if text.is_empty() {
        return Err(Error::script(line, "missing key name"));
    }

    let mut name = text;
    let mut modifiers = Vec::new();
    while let Some((prefix, tail)) = name.split_once('+') {
        if tail.is_empty() {
            break;
        }
        modifiers.push(prefix);
        name = tail;
    }

    let key = if name == "Space" {
        Key::Space
    } else {
        Key::parse(name)
    };
    let mut event = KeyEvent::new(key);
    for modifier in modifiers {
        event = match modifier {
            "alt" => event.with_alt(),
            "ctrl" => event.with_ctrl(),
            "meta" => event.with_meta(),
            "shift" => event.with_shift(),
            other => return Err(Error::script(line, format!("unknown modifier `{other}`"))),
        };
    }
    Ok(event)
}
