//! CLI argument definitions.

use clap::{Args, Parser, Subcommand};

use crate::commands::login::LoginArgs;
use crate::commands::resource::{ChatRolesCommand, ResourceCommand};

/// Command-line client for the Twilio REST API.
#[derive(Parser, Debug)]
#[command(name = "twilio")]
#[command(author, version = env!("TWILIO_CLI_VERSION"), about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(flatten)]
    pub auth: AuthArgs,

    #[command(subcommand)]
    pub command: Commands,
}

/// Credential overrides. These win over the environment and the stored profile.
#[derive(Args, Debug, Clone, Default)]
pub struct AuthArgs {
    /// Account SID (overrides TWILIO_ACCOUNT_SID)
    #[arg(long, global = true)]
    pub account_sid: Option<String>,

    /// Auth token (overrides TWILIO_AUTH_TOKEN)
    #[arg(long, global = true)]
    pub auth_token: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Verify credentials and store them as the default profile
    Login(LoginArgs),

    /// Remove the stored profile
    Logout,

    /// Display the effective account and API hosts
    Whoami,

    /// Accounts and subaccounts (delete closes the account)
    Accounts(ResourceCommand),

    /// TwiML applications
    Applications(ResourceCommand),

    /// API keys
    Keys(ResourceCommand),

    /// Programmable Chat services
    ChatServices(ResourceCommand),

    /// Roles of a chat service
    ChatRoles(ChatRolesCommand),

    /// Push credentials for chat
    PushCredentials(ResourceCommand),

    /// Notify services
    NotifyServices(ResourceCommand),
}
