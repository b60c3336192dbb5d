use clap::Subcommand;

#[derive(Subcommand)]
pub enum AuthCommands {
    /// Exchange credentials for a session
    Login {
        #[arg(long)]
        username: String,

        #[arg(long)]
        password: String,
    },

    /// Register a new account
    Signup {
        #[arg(long)]
        username: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,

        /// Requested role tags (repeatable)
        #[arg(long = "role")]
        roles: Vec<String>,
    },

    /// Clear the persisted session
    Logout,

    /// Show the current session
    Whoami,

    /// Look up the email behind a username
    Email { username: String },
}
