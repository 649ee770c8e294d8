//! Subcommand implementations.

pub mod login;
mod logout;
pub mod resource;
mod whoami;

use anyhow::{Context, Result};
use twilio_rest::{Client, Sid};

use crate::cli::{AuthArgs, Commands};
use crate::settings::Settings;

pub async fn handle(auth: AuthArgs, command: Commands) -> Result<()> {
    match command {
        Commands::Login(args) => login::run(&auth, args).await,
        Commands::Logout => logout::run(),
        Commands::Whoami => whoami::run(&auth),
        Commands::Accounts(cmd) => resource::run(client(&auth)?.accounts(), cmd.action).await,
        Commands::Applications(cmd) => {
            resource::run(client(&auth)?.applications(), cmd.action).await
        }
        Commands::Keys(cmd) => resource::run(client(&auth)?.keys(), cmd.action).await,
        Commands::ChatServices(cmd) => {
            resource::run(client(&auth)?.chat_services(), cmd.action).await
        }
        Commands::ChatRoles(cmd) => {
            let service = Sid::new(&cmd.service).context("Invalid chat service SID")?;
            resource::run(client(&auth)?.chat_roles(&service), cmd.action).await
        }
        Commands::PushCredentials(cmd) => {
            resource::run(client(&auth)?.push_credentials(), cmd.action).await
        }
        Commands::NotifyServices(cmd) => {
            resource::run(client(&auth)?.notify_services(), cmd.action).await
        }
    }
}

/// Client for the resource commands, from the effective settings.
fn client(auth: &AuthArgs) -> Result<Client> {
    Settings::load(auth)?.client()
}
