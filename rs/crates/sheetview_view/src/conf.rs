//! Markup tokens and user-facing messages.

/// Line break inserted for every newline.
pub const C_MARKUP_BR: &str = "<br>";
/// Line break inserted for every newline when paragraph spacing is on.
pub const C_MARKUP_BR_PARAGRAPH: &str = "<br><br>";
/// Bullet marker replacing a leading `o `.
pub const C_MARKUP_BULLET: &str = "* ";
/// Opening italic tag.
pub const C_MARKUP_ITALIC_OPEN: &str = "<i>";
/// Closing italic tag.
pub const C_MARKUP_ITALIC_CLOSE: &str = "</i>";
/// Escaped currency symbol.
pub const C_MARKUP_DOLLAR_ESCAPED: &str = "\\$";
/// Horizontal rule between page sections.
pub const C_MARKUP_RULE: &str = "---";

/// Page title.
pub const C_TITLE_PAGE: &str = "Excel Data Selector";
/// Heading above the results.
pub const C_HEADING_RESULTS: &str = "Filtered Data";
/// Panel heading: subject data.
pub const C_HEADING_SUBJECT_DATA: &str = "Subject Data";
/// Panel heading: comparable data.
pub const C_HEADING_COMP_DATA: &str = "Comp Data";
/// Panel heading: narrative.
pub const C_HEADING_NARRATIVE: &str = "Narrative";

/// Shown while either pick-list is still on its placeholder.
pub const C_MSG_SELECT_BOTH: &str =
    "Please select both Model and Property Name to see filtered data.";
/// Shown when a full selection matches nothing.
pub const C_MSG_NO_DATA: &str = "No data found with the selected criteria.";
/// Prefix for load failures.
pub const C_MSG_LOAD_ERROR_PREFIX: &str = "Error loading Excel file";
