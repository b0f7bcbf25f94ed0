use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::constants::{DEFAULT_EMOJI_SIZE, SEGMENT_PALETTE};
use crate::error::{Result, WheelError};
use crate::validation::{coerce_emoji_size, validate_hex_color};

/// One labeled, colored wedge of a wheel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct Segment {
    pub text: String,
    #[serde(default)]
    pub emoji: String,
    #[serde(default = "default_emoji_size")]
    #[validate(range(min = 10, max = 40))]
    pub emoji_size: u32,
    #[validate(custom = "validate_hex_color")]
    pub color: String,
}

fn default_emoji_size() -> u32 {
    DEFAULT_EMOJI_SIZE
}

/// The editable fields of a segment, as named by the segment editor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentField {
    Text,
    Emoji,
    EmojiSize,
    Color,
}

impl SegmentField {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Text => "text",
            Self::Emoji => "emoji",
            Self::EmojiSize => "emojiSize",
            Self::Color => "color",
        }
    }
}

impl Segment {
    pub fn new(text: &str, emoji: &str, emoji_size: u32, color: &str) -> Self {
        Self {
            text: text.to_string(),
            emoji: emoji.to_string(),
            emoji_size,
            color: color.to_string(),
        }
    }

    /// Filler used when a wheel grows past its existing segments.
    /// `index` is zero based; the label counts from one.
    pub fn placeholder(index: usize) -> Self {
        Self {
            text: format!("Opção {}", index + 1),
            emoji: String::new(),
            emoji_size: DEFAULT_EMOJI_SIZE,
            color: SEGMENT_PALETTE[index % SEGMENT_PALETTE.len()].to_string(),
        }
    }

    /// Applies one raw editor value. Nothing changes when the value is rejected.
    pub fn apply(&mut self, field: SegmentField, value: &str) -> Result<()> {
        match field {
            SegmentField::Text => self.text = value.to_string(),
            SegmentField::Emoji => self.emoji = value.to_string(),
            SegmentField::EmojiSize => self.emoji_size = coerce_emoji_size(value),
            SegmentField::Color => {
                validate_hex_color(value).map_err(|e| WheelError::InvalidField {
                    field: field.as_str(),
                    reason: format!("{} ({value})", e.code),
                })?;
                self.color = value.to_string();
            }
        }
        Ok(())
    }

    /// Light backgrounds get dark label text when drawn.
    pub fn is_light(&self) -> bool {
        self.color.eq_ignore_ascii_case("#FFFFFF")
    }
}

/// Template used when the configuration document can't be loaded.
pub fn fallback_template() -> Vec<Segment> {
    vec![
        Segment::new("Caneta", "✏️", 28, "#E8D1DC"),
        Segment::new("Voucher", "💗", 28, "#FFFFFF"),
        Segment::new("Voucher", "💗", 28, "#E0C7E8"),
        Segment::new("Voucher", "💗", 28, "#D6B8DF"),
        Segment::new("Mochila", "🎒", 28, "#E5D4ED"),
        Segment::new("Voucher", "💗", 28, "#FFFFFF"),
        Segment::new("Voucher", "💗", 28, "#E0C7E8"),
        Segment::new("Voucher", "💗", 28, "#D6B8DF"),
        Segment::new("Porta-chaves", "🔑", 28, "#DFC2DE"),
        Segment::new("Voucher", "💗", 28, "#FFFFFF"),
        Segment::new("Voucher", "💗", 28, "#E0C7E8"),
        Segment::new("Voucher", "💗", 28, "#D6B8DF"),
    ]
}
