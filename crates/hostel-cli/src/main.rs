use clap::{Parser, Subcommand};
use dialoguer::{Input, Password};
use dotenvy::dotenv;

use hostel_cli::admin::{NewAdmin, create_admin, create_block};
use hostel_cli::seeder::{self, SeedConfig};
use hostel_config::{DatabaseConfig, SecurityConfig};
use hostel_db::{PgPool, init_db_pool, run_migrations};
use hostel_models::MAIN_ADMIN_ROLE;

#[derive(Parser)]
#[command(name = "hostel-cli")]
#[command(about = "Hostel CLI - Administrative tools for the Hostel API", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Create any missing tables
    Migrate,
    /// Create a hostel block
    CreateBlock {
        /// Block name
        #[arg(short = 'n', long)]
        name: Option<String>,

        /// Hostel the block belongs to
        #[arg(long)]
        hostel_number: Option<i32>,
    },
    /// Create an admin account
    CreateAdmin {
        /// Full name
        #[arg(short = 'n', long)]
        name: Option<String>,

        /// Email address (login name)
        #[arg(short = 'e', long)]
        email: Option<String>,

        /// Password (will be prompted securely if not provided)
        #[arg(short = 'p', long)]
        password: Option<String>,

        /// Role; "Main Admin" logs in as admin, anything else as sub admin
        #[arg(short = 'r', long, default_value = MAIN_ADMIN_ROLE)]
        role: String,

        /// Block the admin is responsible for
        #[arg(short = 'b', long)]
        block_id: Option<i32>,
    },
    /// Seed the database with fake blocks, parents and students
    Seed {
        /// Number of blocks to create
        #[arg(long, default_value = "2")]
        blocks: usize,

        /// Number of students per block
        #[arg(long, default_value = "25")]
        students: usize,
    },
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    let cli = Cli::parse();

    let pool = match init_db_pool(&DatabaseConfig::from_env()).await {
        Ok(pool) => pool,
        Err(e) => fail("connecting to database", e),
    };
    let security_config = SecurityConfig::from_env();

    match cli.command {
        Commands::Migrate => handle_migrate(&pool).await,
        Commands::CreateBlock {
            name,
            hostel_number,
        } => handle_create_block(&pool, name, hostel_number).await,
        Commands::CreateAdmin {
            name,
            email,
            password,
            role,
            block_id,
        } => {
            handle_create_admin(
                &pool,
                name,
                email,
                password,
                role,
                block_id,
                security_config.bcrypt_cost,
            )
            .await
        }
        Commands::Seed { blocks, students } => {
            let config = SeedConfig {
                blocks,
                students_per_block: students,
            };
            if let Err(e) = seeder::seed_all(&pool, config, security_config.bcrypt_cost).await {
                fail("seeding database", e);
            }
        }
    }
}

fn fail(action: &str, error: impl std::fmt::Display) -> ! {
    eprintln!("\n❌ Error {}: {}", action, error);
    std::process::exit(1);
}

fn prompt<T>(value: Option<T>, label: &str) -> T
where
    T: Clone + ToString + std::str::FromStr,
    <T as std::str::FromStr>::Err: std::fmt::Debug + ToString,
{
    match value {
        Some(v) => v,
        None => Input::new()
            .with_prompt(label)
            .interact_text()
            .unwrap_or_else(|e| fail("reading input", e)),
    }
}

async fn handle_migrate(pool: &PgPool) {
    match run_migrations(pool).await {
        Ok(()) => println!("✅ Schema is up to date"),
        Err(e) => fail("running migrations", e),
    }
}

async fn handle_create_block(pool: &PgPool, name: Option<String>, hostel_number: Option<i32>) {
    let name: String = prompt(name, "Block name");
    let hostel_number: i32 = prompt(hostel_number, "Hostel number");

    match create_block(pool, &name, hostel_number).await {
        Ok(block) => {
            println!("\n✅ Block created successfully!");
            println!("   ID: {}", block.block_id);
            println!("   Name: {} (hostel {})", block.block_name, block.hostel_number);
        }
        Err(e) => fail("creating block", e),
    }
}

async fn handle_create_admin(
    pool: &PgPool,
    name: Option<String>,
    email: Option<String>,
    password: Option<String>,
    role: String,
    block_id: Option<i32>,
    bcrypt_cost: u32,
) {
    let name: String = prompt(name, "Full name");
    let email: String = prompt(email, "Email address");
    let password = password.unwrap_or_else(|| {
        Password::new()
            .with_prompt("Password")
            .with_confirmation("Confirm password", "Passwords don't match")
            .interact()
            .unwrap_or_else(|e| fail("reading password", e))
    });

    let new_admin = NewAdmin {
        name: &name,
        email: &email,
        password: &password,
        role: &role,
        block_id,
    };

    match create_admin(pool, new_admin, bcrypt_cost).await {
        Ok(admin) => {
            println!("\n✅ Admin created successfully!");
            println!("   Email: {}", admin.email);
            println!("   Name: {}", admin.name);
            println!("   Role: {}", admin.role);
        }
        Err(e) => fail("creating admin", e),
    }
}
