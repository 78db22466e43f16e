use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::models::ActionDetails;

#[derive(Parser)]
#[command(name = "hovercli")]
#[command(version, about = "Welcome to the Hover Command Line Interface.", long_about = None)]
pub struct Cli {
    /// Config file (default is $HOME/.hovercli.yaml)
    #[arg(long, global = true, value_name = "PATH")]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Store credentials and fetch an auth token
    Login,
    /// Manage actions
    Actions {
        #[command(subcommand)]
        command: ActionsCommand,
    },
}

#[derive(Subcommand)]
pub enum ActionsCommand {
    /// List all actions
    List,
    /// Show a single action
    Get { id: String },
    /// Create a new action
    Create {
        #[command(flatten)]
        fields: ActionFields,
    },
    /// Update an existing action
    Update {
        id: String,
        #[command(flatten)]
        fields: ActionFields,
    },
    /// Delete an action
    Delete { id: String },
}

#[derive(Args)]
pub struct ActionFields {
    /// Action name
    #[arg(long)]
    pub name: Option<String>,

    /// USSD root code
    #[arg(long)]
    pub root_code: Option<String>,

    /// Transport type (e.g. ussd, sms)
    #[arg(long)]
    pub transport_type: Option<String>,

    /// World operator id; repeat for multiple operators
    #[arg(long = "world-operator", value_name = "ID")]
    pub world_operators: Vec<String>,
}

impl From<ActionFields> for ActionDetails {
    fn from(fields: ActionFields) -> Self {
        ActionDetails {
            name: fields.name.unwrap_or_default(),
            root_code: fields.root_code.unwrap_or_default(),
            transport_type: fields.transport_type.unwrap_or_default(),
            world_operators: fields.world_operators,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_actions_create_flags() {
        let cli = Cli::parse_from([
            "hovercli",
            "actions",
            "create",
            "--name",
            "balance",
            "--root-code",
            "*123#",
            "--world-operator",
            "42",
            "--world-operator",
            "43",
        ]);

        match cli.command {
            Commands::Actions {
                command: ActionsCommand::Create { fields },
            } => {
                let details: ActionDetails = fields.into();
                assert_eq!(details.name, "balance");
                assert_eq!(details.root_code, "*123#");
                assert_eq!(details.world_operators, vec!["42", "43"]);
                assert!(details.transport_type.is_empty());
            }
            _ => panic!("Expected actions create"),
        }
    }

    #[test]
    fn test_global_config_flag_after_subcommand() {
        let cli = Cli::parse_from(["hovercli", "actions", "list", "--config", "/tmp/alt.yaml"]);
        assert_eq!(cli.config.as_deref().unwrap().to_str(), Some("/tmp/alt.yaml"));
    }
}
