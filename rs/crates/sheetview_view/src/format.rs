//! Text-to-markup transform applied to free-text fields.

use lazy_static::lazy_static;
use regex::Regex;
use sheetview_io_xlsx::SpecRecord;

use crate::conf::{
    C_MARKUP_BR, C_MARKUP_BR_PARAGRAPH, C_MARKUP_BULLET, C_MARKUP_DOLLAR_ESCAPED,
    C_MARKUP_ITALIC_CLOSE, C_MARKUP_ITALIC_OPEN,
};
use crate::spec::SpecRenderedRecord;

lazy_static! {
    static ref RE_BULLET_LINE: Regex = Regex::new(r"(?m)^o ").unwrap();
    static ref RE_ITALIC_WORD: Regex = Regex::new(r"(?i)\b(\w*italic\w*)\b").unwrap();
}

/// Convert raw cell text into display markup.
///
/// Steps run in this order:
/// 1. a line starting with `o ` gets a `* ` bullet instead;
/// 2. every `\n` becomes `<br>` (`<br><br>` with `if_add_paragraph_spacing`);
/// 3. every word containing `italic` (any case) is wrapped in `<i>..</i>`;
/// 4. every `$` is escaped as `\$`.
pub fn format_text(text: &str, if_add_paragraph_spacing: bool) -> String {
    let c_text = RE_BULLET_LINE.replace_all(text, C_MARKUP_BULLET);

    let c_br = if if_add_paragraph_spacing {
        C_MARKUP_BR_PARAGRAPH
    } else {
        C_MARKUP_BR
    };
    let c_text = c_text.replace('\n', c_br);

    let c_italic = format!("{C_MARKUP_ITALIC_OPEN}${{1}}{C_MARKUP_ITALIC_CLOSE}");
    let c_text = RE_ITALIC_WORD.replace_all(&c_text, c_italic.as_str());

    c_text.replace('$', C_MARKUP_DOLLAR_ESCAPED)
}

/// Render the three text fields of `record`; only the narrative gets paragraph spacing.
pub fn render_record(record: &SpecRecord) -> SpecRenderedRecord {
    SpecRenderedRecord {
        model: record.model.clone(),
        property_name: record.property_name.clone(),
        subject_html: format_text(&record.subject_data, false),
        comp_html: format_text(&record.comp_data, false),
        narrative_html: format_text(&record.narrative, true),
    }
}
