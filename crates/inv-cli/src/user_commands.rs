use clap::Subcommand;

#[derive(Subcommand)]
pub enum UserCommands {
    /// List all registered users
    List,
}
