use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::{bail, Context};
use clap::{Args, Parser, Subcommand, ValueEnum};
use raline_admin::auth::{AuthService, CodePurpose};
use raline_admin::config::EnvConfig;
use raline_admin::countdown::{Countdown, SEND_CODE_COOLDOWN_SECS};
use raline_admin::forms::{avatar_update, ForgotForm, LoginForm, PasswordForm, ProfileForm, RegisterForm};
use raline_admin::users::{actions_for, role_display, UserAdmin};
use raline_api::{ApiConfig, RalineApiClient, TwoFactorConfirm, UserRole};
use session_store::{storage_file, FileStore, MemoryStore, Persistence, TokenStore, STORAGE_FILE_NAME};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "raline-admin", author, version, about = "Administer a raline comment server")]
struct Cli {
    /// Server URL; overrides RALINE_SERVER_URL.
    #[arg(long, global = true)]
    server_url: Option<String>,

    /// Language for server messages; overrides RALINE_LANG.
    #[arg(long, global = true)]
    lang: Option<String>,

    /// Directory for persistent storage; overrides RALINE_DATA_DIR.
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Request timeout in seconds; overrides RALINE_TIMEOUT_SEC.
    #[arg(long, global = true)]
    timeout: Option<u64>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Log in and remember the token.
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
        /// Two-factor code.
        #[arg(long)]
        code: Option<String>,
        /// Keep the token for this process only.
        #[arg(long)]
        session_only: bool,
    },
    /// Forget the stored token.
    Logout,
    /// Show the current user.
    Whoami,
    Register {
        #[arg(long)]
        nick: String,
        #[command(flatten)]
        reset: ResetArgs,
    },
    /// Reset a forgotten password.
    Forgot {
        #[command(flatten)]
        reset: ResetArgs,
    },
    /// Mail a verification code and wait out the cooldown.
    SendCode {
        #[arg(long)]
        email: String,
        #[arg(long, value_enum, default_value_t = PurposeArg::Register)]
        purpose: PurposeArg,
    },
    /// Update nickname and gender.
    Profile {
        #[arg(long)]
        name: String,
        #[arg(long)]
        gender: String,
    },
    Password {
        #[arg(long)]
        password: String,
        #[arg(long)]
        confirm: String,
    },
    Avatar {
        #[arg(long)]
        url: String,
    },
    /// List users.
    Users {
        #[arg(long, default_value_t = 1)]
        page: u64,
    },
    SetRole {
        #[arg(long)]
        id: i64,
        #[arg(long, value_enum)]
        role: RoleArg,
    },
    SetLabel {
        #[arg(long)]
        id: i64,
        #[arg(long)]
        label: String,
    },
    /// Show two-factor setup, or confirm it with --code.
    #[command(name = "2fa")]
    TwoFactor {
        #[arg(long)]
        email: Option<String>,
        #[arg(long)]
        code: Option<String>,
        #[arg(long)]
        secret: Option<String>,
    },
}

#[derive(Args, Debug)]
struct ResetArgs {
    #[arg(long)]
    email: String,
    /// Verification code from `send-code`.
    #[arg(long)]
    code: String,
    #[arg(long)]
    password: String,
    #[arg(long)]
    password_again: String,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum PurposeArg {
    Register,
    Reset,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum RoleArg {
    Admin,
    Guest,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "raline_admin=info".into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let env = EnvConfig::from_env();

    let Some(server_url) = cli.server_url.or(env.server_url) else {
        bail!("no server URL: pass --server-url or set RALINE_SERVER_URL");
    };
    let mut api = ApiConfig::new(server_url);
    if let Some(lang) = cli.lang.or(env.lang) {
        api = api.with_lang(lang);
    }
    if let Some(timeout) = cli.timeout.map(Duration::from_secs).or(env.timeout) {
        api = api.with_timeout(timeout);
    }

    let storage_path = match cli.data_dir.or(env.data_dir) {
        Some(dir) => dir.join(STORAGE_FILE_NAME),
        None => storage_file(&std::env::current_dir().context("resolving working directory")?),
    };
    tracing::debug!(path = %storage_path.display(), "using persistent storage");
    let persistent = FileStore::shared(storage_path);
    let session = MemoryStore::shared();
    let tokens = Arc::new(TokenStore::new(session, persistent.clone()));

    let client = Arc::new(RalineApiClient::new(api)?.with_token_store(tokens.clone()));
    let auth = AuthService::new(client.clone(), tokens, persistent);

    run(cli.command, &auth, client).await
}

async fn run(command: Command, auth: &AuthService, client: Arc<RalineApiClient>) -> anyhow::Result<()> {
    match command {
        Command::Login {
            email,
            password,
            code,
            session_only,
        } => {
            let persistence = if session_only {
                Persistence::Session
            } else {
                Persistence::Persistent
            };
            let user = auth
                .login(&LoginForm { email, password, code }, persistence)
                .await?;
            println!("logged in as {} ({})", user.display_name, user.role);
        }
        Command::Logout => {
            auth.logout()?;
            println!("logged out");
        }
        Command::Whoami => {
            let user = auth.get_user_info().await?;
            println!(
                "{} <{}> {}",
                user.display_name,
                user.email.as_deref().unwrap_or_default(),
                role_display(&user.role)
            );
        }
        Command::Register { nick, reset } => {
            let form = RegisterForm {
                nick,
                email: reset.email,
                code: reset.code,
                password: reset.password,
                password_again: reset.password_again,
            };
            let response = auth.register(&form).await?;
            if response.verify {
                println!("register success! please go to your mailbox to verify it!");
            } else {
                println!("registered");
            }
        }
        Command::Forgot { reset } => {
            let form = ForgotForm {
                email: reset.email,
                code: reset.code,
                password: reset.password,
                password_again: reset.password_again,
            };
            auth.forgot(&form).await?;
            println!("password updated");
        }
        Command::SendCode { email, purpose } => {
            let purpose = match purpose {
                PurposeArg::Register => CodePurpose::Register,
                PurposeArg::Reset => CodePurpose::Reset,
            };
            auth.send_code(purpose, &email).await?;
            Countdown::new()
                .run(SEND_CODE_COOLDOWN_SECS, |label| eprint!("\r{label:>9}"))
                .await;
            eprintln!();
        }
        Command::Profile { name, gender } => {
            let update = ProfileForm { name, gender }.validate()?;
            client.update_profile(&update, None).await?;
            println!("profile updated");
        }
        Command::Password { password, confirm } => {
            let update = PasswordForm { password, confirm }.validate()?;
            client.update_profile(&update, None).await?;
            println!("password updated");
        }
        Command::Avatar { url } => {
            client.update_profile(&avatar_update(&url)?, None).await?;
            println!("avatar updated");
        }
        Command::Users { page } => {
            let current = auth.get_user_info().await?;
            let list = UserAdmin::new(client).list(page).await?;
            println!("page {}/{}", list.page, list.total_pages);
            for user in &list.data {
                let actions: Vec<_> = actions_for(user, &current)
                    .into_iter()
                    .map(|action| action.label())
                    .collect();
                println!(
                    "{:>6}  {:<20} {:<28} {:<8} {:<12} [{}]",
                    user.object_id.map(|id| id.to_string()).unwrap_or_default(),
                    user.display_name,
                    user.email.as_deref().unwrap_or_default(),
                    role_display(&user.role),
                    user.label.as_deref().unwrap_or_default(),
                    actions.join(", ")
                );
            }
        }
        Command::SetRole { id, role } => {
            let current = auth.get_user_info().await?;
            let role = match role {
                RoleArg::Admin => UserRole::Admin,
                RoleArg::Guest => UserRole::Guest,
            };
            UserAdmin::new(client).set_role(id, role, &current).await?;
            println!("user {id} updated");
        }
        Command::SetLabel { id, label } => {
            UserAdmin::new(client).set_label(id, &label).await?;
            println!("user {id} updated");
        }
        Command::TwoFactor { email, code, secret } => match code {
            Some(code) => {
                client
                    .confirm_2fa(&TwoFactorConfirm { code, secret }, None)
                    .await?;
                println!("two-factor authentication enabled");
            }
            None => {
                let setup = client.get_2fa_token(email.as_deref(), None).await?;
                println!("{}", serde_json::to_string_pretty(&setup)?);
            }
        },
    }
    Ok(())
}
