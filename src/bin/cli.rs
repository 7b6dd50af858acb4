//! recordstore CLI
//!
//! Loads the data file, applies one command, and saves it back.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use recordstore::{Config, Item, Result, Store};
use tracing_subscriber::{fmt, EnvFilter};

/// recordstore CLI
#[derive(Parser, Debug)]
#[command(name = "recordstore-cli")]
#[command(about = "Manage users and items in a recordstore data file")]
#[command(version)]
struct Args {
    /// Data file
    #[arg(short, long, default_value = "data.bin")]
    file: PathBuf,

    /// Maximum number of users
    #[arg(long, default_value = "100")]
    max_users: usize,

    /// Maximum number of items
    #[arg(long, default_value = "200")]
    max_items: usize,

    /// Log every store error at warn level
    #[arg(short, long)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Write the demo data set to the data file
    Demo,

    /// Print every user and item in the data file
    Show,

    /// Add a user
    AddUser {
        id: i32,
        name: String,
        description: String,
        age: i32,
    },

    /// Remove a user
    RemoveUser { id: i32 },

    /// Add an item
    AddItem {
        id: i32,
        name: String,
        price: f32,
        quantity: i32,
        owner_id: i32,
    },

    /// Update an existing item
    UpdateItem {
        id: i32,
        name: String,
        price: f32,
        quantity: i32,

        /// Notify the item's owner
        #[arg(long)]
        notify: bool,
    },

    /// Sort items by price
    Sort,
}

fn main() {
    // Initialize tracing/logging
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,recordstore=debug"));

    fmt().with_env_filter(filter).with_target(true).init();

    let args = Args::parse();

    tracing::info!("recordstore CLI v{}", recordstore::VERSION);
    tracing::info!("Data file: {}", args.file.display());

    let config = Config::builder()
        .data_file(&args.file)
        .max_users(args.max_users)
        .max_items(args.max_items)
        .debug_mode(args.debug)
        .build();

    if let Err(e) = run(config, args.command) {
        tracing::error!("Command failed: {}", e);
        std::process::exit(1);
    }
}

fn run(config: Config, command: Commands) -> Result<()> {
    let path = config.data_file.clone();
    let mut store = Store::new(config);
    store.initialize();

    match command {
        Commands::Demo => {
            seed_demo(&mut store)?;
            store.display_user_info(1);
            store.sort_items()?;
            store.save_to_file(&path)
        }
        Commands::Show => {
            store.load_from_file(&path)?;
            for user in store.users() {
                println!("{}\n", user);
            }
            for item in store.items() {
                println!("{}", item);
            }
            Ok(())
        }
        command => {
            if path.exists() {
                store.load_from_file(&path)?;
            }
            apply(&mut store, command)?;
            store.save_to_file(&path)
        }
    }
}

fn apply(store: &mut Store, command: Commands) -> Result<()> {
    match command {
        Commands::AddUser {
            id,
            name,
            description,
            age,
        } => {
            store.add_user(id, &name, &description, age)?;
        }
        Commands::RemoveUser { id } => store.remove_user(id)?,
        Commands::AddItem {
            id,
            name,
            price,
            quantity,
            owner_id,
        } => {
            store.insert_item(Item::new(id, name, price, quantity, owner_id))?;
        }
        Commands::UpdateItem {
            id,
            name,
            price,
            quantity,
            notify,
        } => {
            if let Some(notification) =
                store.update_item_details(id, &name, price, quantity, notify)?
            {
                println!("{}", notification);
            }
        }
        Commands::Sort => store.sort_items()?,
        Commands::Demo | Commands::Show => {}
    }
    Ok(())
}

fn seed_demo(store: &mut Store) -> Result<()> {
    store.add_user(1, "John Doe", "First test user", 35)?;
    store.add_user(2, "Jane Smith", "Second test user with management access", 28)?;

    store.insert_item(Item::new(1, "Laptop", 999.99, 10, 1))?;
    store.insert_item(Item::new(2, "Smartphone", 499.99, 20, 2))?;

    Ok(())
}
