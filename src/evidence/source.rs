//! Data sources and their query parameters.

use std::fmt;
use std::str::FromStr;

use serde::Deserialize;

use crate::requirements::ToolDefinition;
use crate::shell::Invocation;
use crate::ui::Prompt;

/// Prompt key for the connection string.
pub const CONNECTION_STRING_KEY: &str = "connection_string";

/// Where evidence is collected from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(try_from = "String")]
pub enum DataSource {
    /// Blobs in a storage container.
    BlobStorage,
    /// Entities in a storage table.
    TableStorage,
    /// Placeholder for a database connector that has not been written.
    GenericDatabase,
}

impl DataSource {
    /// All sources, in menu order.
    pub const ALL: [DataSource; 3] = [
        DataSource::BlobStorage,
        DataSource::TableStorage,
        DataSource::GenericDatabase,
    ];

    /// Parse an exact menu choice (`"1"`, `"2"` or `"3"`).
    pub fn from_choice(choice: &str) -> Option<Self> {
        match choice {
            "1" => Some(Self::BlobStorage),
            "2" => Some(Self::TableStorage),
            "3" => Some(Self::GenericDatabase),
            _ => None,
        }
    }

    /// The menu number for this source.
    pub fn choice(&self) -> &'static str {
        match self {
            Self::BlobStorage => "1",
            Self::TableStorage => "2",
            Self::GenericDatabase => "3",
        }
    }

    /// Name shown in the menu and section headers.
    pub fn menu_label(&self) -> &'static str {
        match self {
            Self::BlobStorage => "Azure Blob Storage",
            Self::TableStorage => "Azure Table Storage",
            Self::GenericDatabase => "Generic Database",
        }
    }

    /// Whether collecting from this source goes through the cloud CLI.
    pub fn requires_cloud_tool(&self) -> bool {
        !matches!(self, Self::GenericDatabase)
    }

    /// Lowercase description used in result messages.
    pub fn noun(&self) -> &'static str {
        match self {
            Self::BlobStorage => "blob storage data",
            Self::TableStorage => "table storage data",
            Self::GenericDatabase => "database data",
        }
    }

    /// Prompt key for the target name.
    pub fn target_key(&self) -> &'static str {
        match self {
            Self::BlobStorage => "container",
            Self::TableStorage => "table",
            Self::GenericDatabase => "database",
        }
    }

    /// Parameter prompts, in the order they are asked.
    ///
    /// Empty for sources that are not implemented.
    pub fn prompts(&self) -> Vec<Prompt> {
        let target = match self {
            Self::BlobStorage => "Enter the container name",
            Self::TableStorage => "Enter the table name",
            Self::GenericDatabase => return Vec::new(),
        };
        vec![
            Prompt::secret(
                CONNECTION_STRING_KEY,
                "Enter the Azure Storage connection string",
            ),
            Prompt::input(self.target_key(), target),
        ]
    }

    /// First line of the evidence block for `target`.
    pub fn header_label(&self, target: &str) -> Option<String> {
        match self {
            Self::BlobStorage => Some(format!("Azure Blob Storage - Container: {}", target)),
            Self::TableStorage => Some(format!("Azure Table Storage - Table: {}", target)),
            Self::GenericDatabase => None,
        }
    }

    /// The query that lists this source's contents as a table.
    ///
    /// The connection string is a secret argument and never displayed.
    pub fn query(&self, tool: &ToolDefinition, params: &ConnectionParameters) -> Option<Invocation> {
        let base = match self {
            Self::BlobStorage => tool
                .invocation()
                .args(["storage", "blob", "list", "--container-name"]),
            Self::TableStorage => tool
                .invocation()
                .args(["storage", "entity", "query", "--table-name"]),
            Self::GenericDatabase => return None,
        };
        Some(
            base.arg(&params.target)
                .arg("--connection-string")
                .secret_arg(&params.connection_string)
                .args(["--output", "table"]),
        )
    }
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.menu_label())
    }
}

impl FromStr for DataSource {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if let Some(source) = Self::from_choice(s) {
            return Ok(source);
        }
        match s.to_lowercase().as_str() {
            "blob" => Ok(Self::BlobStorage),
            "table" => Ok(Self::TableStorage),
            "database" => Ok(Self::GenericDatabase),
            _ => Err(format!(
                "unknown data source '{}' (expected 1, 2, 3, blob, table or database)",
                s
            )),
        }
    }
}

impl TryFrom<String> for DataSource {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

/// Parameters for a cloud storage query. Held in memory only.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct ConnectionParameters {
    /// Storage account connection string.
    pub connection_string: String,
    /// Container or table name.
    pub target: String,
}

impl ConnectionParameters {
    pub fn new(connection_string: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            connection_string: connection_string.into(),
            target: target.into(),
        }
    }
}

impl fmt::Debug for ConnectionParameters {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConnectionParameters")
            .field("connection_string", &"[REDACTED]")
            .field("target", &self.target)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::PromptType;

    #[test]
    fn menu_choices_are_exact() {
        assert_eq!(DataSource::from_choice("1"), Some(DataSource::BlobStorage));
        assert_eq!(DataSource::from_choice("2"), Some(DataSource::TableStorage));
        assert_eq!(DataSource::from_choice("3"), Some(DataSource::GenericDatabase));
        assert_eq!(DataSource::from_choice(" 1"), None);
        assert_eq!(DataSource::from_choice("01"), None);
        assert_eq!(DataSource::from_choice("4"), None);
        assert_eq!(DataSource::from_choice(""), None);
    }

    #[test]
    fn from_str_accepts_names() {
        assert_eq!("blob".parse::<DataSource>(), Ok(DataSource::BlobStorage));
        assert_eq!("Table".parse::<DataSource>(), Ok(DataSource::TableStorage));
        assert_eq!("3".parse::<DataSource>(), Ok(DataSource::GenericDatabase));
        assert!("queue".parse::<DataSource>().is_err());
    }

    #[test]
    fn choice_round_trips_menu() {
        for source in DataSource::ALL {
            assert_eq!(DataSource::from_choice(source.choice()), Some(source));
        }
    }

    #[test]
    fn only_database_skips_cloud_tool() {
        assert!(DataSource::BlobStorage.requires_cloud_tool());
        assert!(DataSource::TableStorage.requires_cloud_tool());
        assert!(!DataSource::GenericDatabase.requires_cloud_tool());
    }

    #[test]
    fn connection_string_is_asked_first_and_hidden() {
        let prompts = DataSource::TableStorage.prompts();
        assert_eq!(prompts.len(), 2);
        assert_eq!(prompts[0].key, CONNECTION_STRING_KEY);
        assert_eq!(prompts[0].prompt_type, PromptType::Secret);
        assert_eq!(prompts[1].key, "table");
        assert!(DataSource::GenericDatabase.prompts().is_empty());
    }

    #[test]
    fn header_labels() {
        assert_eq!(
            DataSource::BlobStorage.header_label("logs").as_deref(),
            Some("Azure Blob Storage - Container: logs")
        );
        assert_eq!(
            DataSource::TableStorage.header_label("audit").as_deref(),
            Some("Azure Table Storage - Table: audit")
        );
        assert_eq!(DataSource::GenericDatabase.header_label("x"), None);
    }

    #[test]
    fn blob_query_arguments() {
        let tool = ToolDefinition::azure_cli();
        let params = ConnectionParameters::new("AccountKey=abc", "logs");
        let query = DataSource::BlobStorage.query(&tool, &params).unwrap();

        assert_eq!(query.program(), "az");
        assert_eq!(
            query.arg_list(),
            &[
                "storage",
                "blob",
                "list",
                "--container-name",
                "logs",
                "--connection-string",
                "AccountKey=abc",
                "--output",
                "table"
            ]
        );
        assert!(!query.to_string().contains("AccountKey=abc"));
    }

    #[test]
    fn table_query_arguments() {
        let tool = ToolDefinition::azure_cli();
        let params = ConnectionParameters::new("cs", "audit");
        let query = DataSource::TableStorage.query(&tool, &params).unwrap();

        assert_eq!(
            query.arg_list()[..5],
            ["storage", "entity", "query", "--table-name", "audit"]
        );
    }

    #[test]
    fn database_has_no_query() {
        let tool = ToolDefinition::azure_cli();
        assert!(DataSource::GenericDatabase
            .query(&tool, &ConnectionParameters::default())
            .is_none());
    }

    #[test]
    fn debug_hides_connection_string() {
        let params = ConnectionParameters::new("AccountKey=topsecret", "logs");
        let shown = format!("{:?}", params);
        assert!(!shown.contains("topsecret"));
        assert!(shown.contains("logs"));
    }
}
