//! Selection and view-state models.

use sheetview_io_xlsx::EnumKeyChoice;

////////////////////////////////////////////////////////////////////////////////
// #region Selection

/// The two pick-list choices of one interaction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct SpecSelection {
    /// Model choice.
    pub model: EnumKeyChoice,
    /// Property-name choice.
    pub property_name: EnumKeyChoice,
}

impl SpecSelection {
    /// Selection with both keys set to real values.
    pub fn new(model: impl Into<String>, property_name: impl Into<String>) -> Self {
        Self {
            model: EnumKeyChoice::Value(model.into()),
            property_name: EnumKeyChoice::Value(property_name.into()),
        }
    }

    /// Both values when neither choice is the placeholder.
    pub fn as_pair(&self) -> Option<(&str, &str)> {
        Some((self.model.as_value()?, self.property_name.as_value()?))
    }

    /// Whether both choices are real values.
    pub fn is_complete(&self) -> bool {
        self.as_pair().is_some()
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////
// #region ViewState

/// One matching record with its three text fields rendered to markup.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SpecRenderedRecord {
    /// Model value, unformatted.
    pub model: String,
    /// Property-name value, unformatted.
    pub property_name: String,
    /// Subject data markup (single line breaks).
    pub subject_html: String,
    /// Comp data markup (single line breaks).
    pub comp_html: String,
    /// Narrative markup (paragraph line breaks).
    pub narrative_html: String,
}

/// What the results area shows for a selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EnumViewState {
    /// Informational: a pick-list is still on its placeholder. No filtering happened.
    AwaitingSelection {
        /// Message to show.
        message: String,
    },
    /// Warning: the selection matched zero rows.
    NoMatch {
        /// Message to show.
        message: String,
    },
    /// Matching records, in dataset order.
    Records(Vec<SpecRenderedRecord>),
}

impl EnumViewState {
    /// Short state tag (`info`, `warning`, `records`).
    pub fn kind(&self) -> &'static str {
        match self {
            Self::AwaitingSelection { .. } => "info",
            Self::NoMatch { .. } => "warning",
            Self::Records(_) => "records",
        }
    }

    /// Message carried by the informational/warning states.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::AwaitingSelection { message } | Self::NoMatch { message } => Some(message),
            Self::Records(_) => None,
        }
    }

    /// Rendered records; empty for the non-record states.
    pub fn records(&self) -> &[SpecRenderedRecord] {
        match self {
            Self::Records(l_records) => l_records,
            _ => &[],
        }
    }
}

// #endregion
////////////////////////////////////////////////////////////////////////////////

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_selection_pair_requires_both_values() {
        assert_eq!(SpecSelection::default().as_pair(), None);

        let selection_half = SpecSelection {
            model: EnumKeyChoice::Value("M".to_string()),
            property_name: EnumKeyChoice::Unselected,
        };
        assert!(!selection_half.is_complete());

        assert_eq!(SpecSelection::new("M", "P").as_pair(), Some(("M", "P")));
    }

    #[test]
    fn test_view_state_accessors() {
        let state = EnumViewState::NoMatch {
            message: "none".to_string(),
        };
        assert_eq!(state.kind(), "warning");
        assert_eq!(state.message(), Some("none"));
        assert!(state.records().is_empty());

        let state = EnumViewState::Records(vec![SpecRenderedRecord::default()]);
        assert_eq!(state.kind(), "records");
        assert_eq!(state.message(), None);
        assert_eq!(state.records().len(), 1);
    }
}
