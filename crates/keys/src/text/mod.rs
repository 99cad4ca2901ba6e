//! Text envelopes: a base64 body between `-----BEGIN <label>-----` and
//! `-----END <label>-----` marker lines

use base64::{engine::general_purpose::STANDARD as BASE64, Engine as _};
use nodekey_api::{Error, Result};
use nodekey_params::traditional::envelope::{
    PRIVATE_KEY_LABEL, PUBLIC_KEY_LABEL, TEXT_LINE_WIDTH,
};
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};
use tracing::debug;
use zeroize::Zeroizing;

const CONTEXT: &str = "text envelope";

/// Layout of a text envelope
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct TextEnvelopeConfig {
    /// Base64 characters per body line; 0 keeps the body on one line
    pub line_width: usize,
    /// Label between `BEGIN`/`END` and the closing dashes
    pub label: String,
}

impl Default for TextEnvelopeConfig {
    fn default() -> Self {
        Self::private_key()
    }
}

impl TextEnvelopeConfig {
    /// `EC PRIVATE KEY`, 64 columns
    pub fn private_key() -> Self {
        Self {
            line_width: TEXT_LINE_WIDTH,
            label: PRIVATE_KEY_LABEL.to_string(),
        }
    }

    /// `PUBLIC KEY`, 64 columns
    pub fn public_key() -> Self {
        Self {
            line_width: TEXT_LINE_WIDTH,
            label: PUBLIC_KEY_LABEL.to_string(),
        }
    }

    /// Same label, different line width
    pub fn with_line_width(mut self, line_width: usize) -> Self {
        self.line_width = line_width;
        self
    }

    /// Same line width, different label
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    fn begin_marker(&self) -> String {
        format!("-----BEGIN {}-----", self.label)
    }

    fn end_marker(&self) -> String {
        format!("-----END {}-----", self.label)
    }
}

/// Wrap binary envelope bytes in a text envelope.
///
/// The output ends with a newline after the end marker.
pub fn encode(config: &TextEnvelopeConfig, der: &[u8]) -> String {
    let body = Zeroizing::new(BASE64.encode(der));
    let begin = config.begin_marker();
    let end = config.end_marker();

    let line_width = if config.line_width == 0 {
        body.len().max(1)
    } else {
        config.line_width
    };
    let line_count = (body.len() + line_width - 1) / line_width;
    let mut out = String::with_capacity(begin.len() + end.len() + body.len() + line_count + 2);

    out.push_str(&begin);
    out.push('\n');
    // base64 output is ASCII, so byte chunks are valid UTF-8
    for line in body.as_bytes().chunks(line_width) {
        out.extend(line.iter().map(|&b| b as char));
        out.push('\n');
    }
    out.push_str(&end);
    out.push('\n');
    out
}

/// Extract and decode the body of a text envelope.
///
/// Text before the begin marker and after the end marker is ignored.
/// Whitespace inside the body, including `\r\n` line endings, is skipped.
pub fn decode(config: &TextEnvelopeConfig, text: &str) -> Result<Zeroizing<Vec<u8>>> {
    let begin = config.begin_marker();
    let end = config.end_marker();

    let start = match text.find(&begin) {
        Some(index) => index + begin.len(),
        None => return Err(envelope_error(format!("missing \"{}\" marker", begin))),
    };
    let stop = match text[start..].find(&end) {
        Some(offset) => start + offset,
        None if text[..start].contains(&end) => {
            return Err(envelope_error(format!(
                "\"{}\" appears before \"{}\"",
                end, begin
            )))
        }
        None => return Err(envelope_error(format!("missing \"{}\" marker", end))),
    };

    let body: Zeroizing<String> = Zeroizing::new(
        text[start..stop]
            .chars()
            .filter(|c| !c.is_ascii_whitespace())
            .collect(),
    );
    if body.is_empty() {
        return Err(envelope_error("empty body"));
    }

    BASE64
        .decode(body.as_bytes())
        .map(Zeroizing::new)
        .map_err(|e| {
            debug!(label = %config.label, error = %e, "text envelope body rejected");
            envelope_error(format!("body is not valid base64: {}", e))
        })
}

fn envelope_error(message: impl Into<String>) -> Error {
    Error::InvalidEnvelope {
        context: CONTEXT,
        message: message.into(),
    }
}
