//! Operator input gathering.
//!
//! Answers supplied up front (flags, environment, config) skip the matching
//! prompt; everything else goes through the [`UserInterface`].

use crate::error::Result;
use crate::evidence::source::CONNECTION_STRING_KEY;
use crate::evidence::{ConnectionParameters, DataSource};
use crate::ui::{Prompt, UserInterface};

/// Prompt key for the data source menu.
pub const SOURCE_KEY: &str = "source";

/// Answers known before the run starts.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct PreAnswers {
    /// Menu selection.
    pub source: Option<DataSource>,
    /// Storage connection string.
    pub connection_string: Option<String>,
    /// Blob container name.
    pub container: Option<String>,
    /// Table name.
    pub table: Option<String>,
}

impl PreAnswers {
    fn target_for(&self, source: DataSource) -> Option<&String> {
        match source {
            DataSource::BlobStorage => self.container.as_ref(),
            DataSource::TableStorage => self.table.as_ref(),
            DataSource::GenericDatabase => None,
        }
    }
}

impl std::fmt::Debug for PreAnswers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PreAnswers")
            .field("source", &self.source)
            .field(
                "connection_string",
                &self.connection_string.as_ref().map(|_| "[REDACTED]"),
            )
            .field("container", &self.container)
            .field("table", &self.table)
            .finish()
    }
}

/// Show the data source menu and read the choice.
///
/// `Ok(None)` means the operator entered something other than `1`, `2`
/// or `3`.
pub fn select_source(
    ui: &mut dyn UserInterface,
    preselected: Option<DataSource>,
) -> Result<Option<DataSource>> {
    if let Some(source) = preselected {
        tracing::debug!("Data source preselected: {}", source);
        return Ok(Some(source));
    }

    ui.message("Select the data source for the proof document:");
    for source in DataSource::ALL {
        ui.message(&format!("{}. {}", source.choice(), source.menu_label()));
    }

    let choice = ui.prompt(&Prompt::input(SOURCE_KEY, "Enter your choice (1, 2, or 3)"))?;
    let selected = DataSource::from_choice(&choice);
    if selected.is_none() {
        tracing::debug!("Rejected menu choice {:?}", choice);
    }
    Ok(selected)
}

/// Gather the connection parameters for a cloud source.
pub fn gather_parameters(
    source: DataSource,
    ui: &mut dyn UserInterface,
    answers: &PreAnswers,
) -> Result<ConnectionParameters> {
    let mut params = ConnectionParameters::default();

    for prompt in source.prompts() {
        let preset = if prompt.key == CONNECTION_STRING_KEY {
            answers.connection_string.as_ref()
        } else {
            answers.target_for(source)
        };
        let value = match preset {
            Some(value) => value.clone(),
            None => ui.prompt(&prompt)?,
        };

        if prompt.key == CONNECTION_STRING_KEY {
            params.connection_string = value;
        } else {
            params.target = value;
        }
    }

    Ok(params)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;

    #[test]
    fn menu_lists_all_sources() {
        let mut ui = MockUI::new();
        ui.set_prompt_response(SOURCE_KEY, "2");

        let source = select_source(&mut ui, None).unwrap();

        assert_eq!(source, Some(DataSource::TableStorage));
        assert!(ui.has_message("1. Azure Blob Storage"));
        assert!(ui.has_message("3. Generic Database"));
    }

    #[test]
    fn invalid_choice_is_none() {
        let mut ui = MockUI::new();
        ui.set_prompt_response(SOURCE_KEY, "blob");

        assert_eq!(select_source(&mut ui, None).unwrap(), None);
    }

    #[test]
    fn preselected_source_skips_menu() {
        let mut ui = MockUI::new();

        let source = select_source(&mut ui, Some(DataSource::BlobStorage)).unwrap();

        assert_eq!(source, Some(DataSource::BlobStorage));
        assert!(ui.prompts_shown().is_empty());
        assert!(ui.messages().is_empty());
    }

    #[test]
    fn connection_string_asked_before_target() {
        let mut ui = MockUI::new();
        ui.set_prompt_response(CONNECTION_STRING_KEY, "cs");
        ui.set_prompt_response("container", "logs");

        let params = gather_parameters(DataSource::BlobStorage, &mut ui, &PreAnswers::default())
            .unwrap();

        assert_eq!(params, ConnectionParameters::new("cs", "logs"));
        assert_eq!(
            ui.prompts_shown(),
            &[CONNECTION_STRING_KEY.to_string(), "container".to_string()]
        );
    }

    #[test]
    fn pre_answers_skip_prompts() {
        let mut ui = MockUI::new();
        ui.set_prompt_response(CONNECTION_STRING_KEY, "from-prompt");
        let answers = PreAnswers {
            table: Some("audit".into()),
            container: Some("ignored".into()),
            ..Default::default()
        };

        let params = gather_parameters(DataSource::TableStorage, &mut ui, &answers).unwrap();

        assert_eq!(params, ConnectionParameters::new("from-prompt", "audit"));
        assert_eq!(ui.prompts_shown(), &[CONNECTION_STRING_KEY.to_string()]);
    }

    #[test]
    fn debug_hides_connection_string() {
        let answers = PreAnswers {
            connection_string: Some("AccountKey=zzz".into()),
            ..Default::default()
        };
        assert!(!format!("{:?}", answers).contains("zzz"));
    }
}
