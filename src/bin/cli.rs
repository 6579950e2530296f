use std::sync::Arc;

use clap::{Parser, Subcommand};
use dotenvy::dotenv;

use travol::cli::{PromoteOutcome, RoleArg, promote_user};
use travol::db::run_migrations;
use travol_config::DatabaseConfig;
use travol_db::{DocumentStore, PgDocumentStore, PgPool, init_db_pool};
use travol_models::UserRole;

#[derive(Parser)]
#[command(name = "travol-cli")]
#[command(about = "Travol CLI - Administrative tools for the Travol API", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply pending database migrations
    Migrate,
    /// Grant a role to a user, registering the user if needed
    Promote {
        /// Email address of the user
        #[arg(short = 'e', long)]
        email: String,

        /// Role to grant
        #[arg(short = 'r', long, value_enum)]
        role: RoleArg,
    },
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    let cli = Cli::parse();

    let pool = match connect().await {
        Ok(pool) => pool,
        Err(e) => {
            eprintln!("❌ {:#}", e);
            std::process::exit(1);
        }
    };

    match cli.command {
        Commands::Migrate => handle_migrate(&pool).await,
        Commands::Promote { email, role } => handle_promote(pool.clone(), &email, role).await,
    }

    pool.close().await;
}

async fn connect() -> anyhow::Result<PgPool> {
    let config = DatabaseConfig::from_env()?;
    Ok(init_db_pool(&config).await?)
}

async fn handle_migrate(pool: &PgPool) {
    match run_migrations(pool).await {
        Ok(()) => println!("✅ Migrations applied"),
        Err(e) => {
            eprintln!("❌ Error running migrations: {:#}", e);
            std::process::exit(1);
        }
    }
}

async fn handle_promote(pool: PgPool, email: &str, role: RoleArg) {
    let store: Arc<dyn DocumentStore> = Arc::new(PgDocumentStore::new(pool));
    let role: UserRole = role.into();

    match promote_user(store.as_ref(), email, role).await {
        Ok(PromoteOutcome::Created(id)) => {
            println!("✅ Registered {} as {}", email, role);
            println!("   Id: {}", id);
        }
        Ok(PromoteOutcome::Updated) => println!("✅ {} is now {}", email, role),
        Ok(PromoteOutcome::Unchanged) => println!("ℹ️  {} already is {}", email, role),
        Err(e) => {
            eprintln!("❌ Error promoting user: {:#}", e);
            std::process::exit(1);
        }
    }
}
