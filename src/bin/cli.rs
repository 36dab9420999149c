use clap::{Args, Parser, Subcommand};
use profile_mapper::{
    cli::{
        db::{db_generate, db_list, db_migrate, db_revert},
        profile::{format_profile_line, profile_init, profile_list},
    },
    init_store,
    service::profile::ProfileService,
    settings::get_config,
};

#[derive(Parser)]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Debug, Subcommand)]
enum Commands {
    /// Database related command
    Db(DbArgs),
    /// Profile data related command
    Profile(ProfileArgs),
}

#[derive(Debug, Args)]
struct DbArgs {
    #[command(subcommand)]
    command: DbCommands,
}

#[derive(Debug, Subcommand)]
enum DbCommands {
    /// Generate new migration file
    Generate { migration_name: String },
    /// List all migration
    List,
    /// Run all pending migration
    Migrate,
    /// Revert latest migration
    Revert,
}

#[derive(Debug, Args)]
struct ProfileArgs {
    #[command(subcommand)]
    command: ProfileCommands,
}

#[derive(Debug, Subcommand)]
enum ProfileCommands {
    /// Seed the configured backend when it is empty
    Init,
    /// Print stored profiles
    List {
        #[arg(short, long)]
        search: Option<String>,
    },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    match &cli.command {
        Commands::Db(db_args) => match &db_args.command {
            DbCommands::Generate { migration_name } => {
                println!("generate migration: {migration_name:?}");
                db_generate(migration_name).await?;
            }
            DbCommands::List => {
                println!("list migration");
                let config = get_config()?;
                db_list(&config).await?;
            }
            DbCommands::Migrate => {
                println!("run all pending migration");
                let config = get_config()?;
                db_migrate(&config).await?;
            }
            DbCommands::Revert => {
                println!("revert latest migration");
                let config = get_config()?;
                db_revert(&config).await?;
            }
        },
        Commands::Profile(profile_args) => {
            let config = get_config()?;
            println!("using {:?} backend", config.backend);
            let service = ProfileService::new(init_store(&config).await?);
            match &profile_args.command {
                ProfileCommands::Init => {
                    let count = profile_init(&service).await?;
                    println!("store holds {count} profile(s)");
                }
                ProfileCommands::List { search } => {
                    for profile in profile_list(&service, search.as_deref()).await? {
                        println!("{}", format_profile_line(&profile));
                    }
                }
            }
        }
    }
    Ok(())
}
