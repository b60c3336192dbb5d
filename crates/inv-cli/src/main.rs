//! inv - Inventory dashboard CLI
//!
//! Terminal client for the inventory, order, user, and notification
//! services.
//!
//! # Examples
//!
//! ```bash
//! # Sign in
//! inv auth login --username admin --password secret
//!
//! # Browse stock
//! inv inventory list --pretty
//!
//! # Place an order
//! inv order place --sku-code SKU001 --quantity 2
//! ```

use std::error::Error;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use inv_auth::{Access, LOGIN_PATH, SIGNUP_PATH, SessionStore, UNAUTHORIZED_PATH};
use inv_cli::{
    AuthCommands, Cli, Client, Commands, InventoryCommands, Navigator, NotifyCommands,
    OrderCommands, SharedSessionStore, TerminalNavigator, UserCommands, logger, routes,
};
use inv_config::Config;
use inv_core::{
    InventoryItem, LowStockAlert, OrderNotification, OrderRequest, SignupRequest,
};
use log::error;
use serde::Serialize;
use tokio::sync::RwLock;

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match load_config() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = logger::initialize(config.logging.level, config.logging.colored) {
        eprintln!("Failed to initialize logging: {e}");
        return ExitCode::FAILURE;
    }

    let session_path = match config.session_path() {
        Ok(path) => path,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            return ExitCode::FAILURE;
        }
    };

    let mut store = SessionStore::new(session_path);
    store.restore();
    let session: SharedSessionStore = Arc::new(RwLock::new(store));

    let screen = screen_for(&cli.command);
    let navigator = Arc::new(TerminalNavigator::new(&screen));
    let client = Client::new(
        config.backends.route_table(),
        session.clone(),
        navigator.clone(),
    );

    // The same decision the dashboard router makes before rendering a
    // protected screen, recomputed for every invocation.
    let policy = routes::route_policy();
    let access = policy.evaluate(session.read().await.session(), &screen);
    match access {
        Access::Allow => {}
        Access::RedirectLogin => {
            navigator.navigate(LOGIN_PATH);
            eprintln!("Not signed in. Run `inv auth login --username <user> --password <pass>`.");
            return ExitCode::FAILURE;
        }
        Access::RedirectUnauthorized => {
            navigator.navigate(UNAUTHORIZED_PATH);
            eprintln!("This screen needs a role your account does not hold.");
            return ExitCode::FAILURE;
        }
    }

    match run(cli.command, cli.pretty, client, session).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn load_config() -> inv_config::ConfigErrorResult<Config> {
    let config = Config::load()?;
    config.validate()?;
    Ok(config)
}

/// Screen path a command renders, for the route guard.
fn screen_for(command: &Commands) -> String {
    match command {
        Commands::Auth { action } => match action {
            AuthCommands::Login { .. } => LOGIN_PATH.to_string(),
            AuthCommands::Signup { .. } => SIGNUP_PATH.to_string(),
            // Local session management is never gated.
            AuthCommands::Logout | AuthCommands::Whoami => LOGIN_PATH.to_string(),
            AuthCommands::Email { .. } => routes::USERS.to_string(),
        },
        Commands::Dashboard => routes::DASHBOARD.to_string(),
        Commands::Inventory { action } => match action {
            InventoryCommands::List => routes::INVENTORY.to_string(),
            InventoryCommands::Get { id } => format!("/inventory/{id}"),
            InventoryCommands::GetSku { sku_code } => format!("/inventory/{sku_code}"),
            InventoryCommands::Create { .. } => routes::INVENTORY_NEW.to_string(),
            InventoryCommands::Update { id, .. } => format!("/inventory/{id}/edit"),
            InventoryCommands::Delete { id } => format!("/inventory/{id}"),
            InventoryCommands::Report { .. } => routes::INVENTORY_REPORTS.to_string(),
        },
        Commands::Order { action } => match action {
            OrderCommands::List { .. } => routes::ORDERS.to_string(),
            OrderCommands::Get { id } => format!("/orders/{id}"),
            OrderCommands::Place { .. } => routes::ORDER_NEW.to_string(),
            OrderCommands::Update { id, .. } | OrderCommands::Delete { id } => {
                format!("/orders/{id}")
            }
        },
        Commands::Users { .. } => routes::USERS.to_string(),
        Commands::Notify { .. } => routes::INVENTORY_REPORTS.to_string(),
    }
}

async fn run(
    command: Commands,
    pretty: bool,
    client: Client,
    session: SharedSessionStore,
) -> Result<(), Box<dyn Error>> {
    match command {
        Commands::Auth { action } => run_auth(action, pretty, &client, &session).await,
        Commands::Dashboard => run_dashboard(&client).await,
        Commands::Inventory { action } => run_inventory(action, pretty, &client).await,
        Commands::Order { action } => run_order(action, pretty, &client, &session).await,
        Commands::Users { action } => match action {
            UserCommands::List => {
                let users = client.list_users().await?;
                print_json(&users, pretty)
            }
        },
        Commands::Notify { action } => run_notify(action, &client).await,
    }
}

async fn run_auth(
    action: AuthCommands,
    pretty: bool,
    client: &Client,
    session: &SharedSessionStore,
) -> Result<(), Box<dyn Error>> {
    match action {
        AuthCommands::Login { username, password } => {
            let auth = client.login(&username, &password).await?;
            let mut store = session.write().await;
            let current = store.login(&auth.token)?;
            println!(
                "Signed in as {} [{}]",
                current.subject,
                current
                    .roles
                    .iter()
                    .cloned()
                    .collect::<Vec<_>>()
                    .join(", ")
            );
        }
        AuthCommands::Signup {
            username,
            email,
            password,
            roles,
        } => {
            let request = SignupRequest {
                username,
                email,
                password,
                roles: roles.into_iter().collect(),
            };
            let user = client.signup(&request).await?;
            print_json(&user, pretty)?;
        }
        AuthCommands::Logout => {
            session.write().await.logout();
            println!("Signed out.");
        }
        AuthCommands::Whoami => match session.read().await.session() {
            Some(current) => {
                println!(
                    "{} [{}]",
                    current.subject,
                    current
                        .roles
                        .iter()
                        .cloned()
                        .collect::<Vec<_>>()
                        .join(", ")
                );
            }
            None => println!("Not signed in."),
        },
        AuthCommands::Email { username } => {
            println!("{}", client.email_for(&username).await?);
        }
    }

    Ok(())
}

async fn run_dashboard(client: &Client) -> Result<(), Box<dyn Error>> {
    let items = client.list_inventory().await?;
    let orders = client.list_orders(0, 5).await?;
    let low_stock = items.iter().filter(|item| item.is_low_stock()).count();

    println!("Items tracked:   {}", items.len());
    println!("Low stock items: {low_stock}");
    println!("Orders placed:   {}", orders.total_elements);

    Ok(())
}

async fn run_inventory(
    action: InventoryCommands,
    pretty: bool,
    client: &Client,
) -> Result<(), Box<dyn Error>> {
    match action {
        InventoryCommands::List => {
            let items = client.list_inventory().await?;
            print_json(&items, pretty)?;
        }
        InventoryCommands::Get { id } => {
            let item = client.get_item(id).await?;
            print_json(&item, pretty)?;
        }
        InventoryCommands::GetSku { sku_code } => {
            let item = client.get_item_by_sku(&sku_code).await?;
            print_json(&item, pretty)?;
        }
        InventoryCommands::Create {
            sku_code,
            name,
            quantity,
            reorder_level,
            location,
            expiry_date,
        } => {
            let mut item = InventoryItem::new(sku_code, name, quantity);
            item.reorder_level = reorder_level;
            item.location = location;
            item.expiry_date = expiry_date;

            let created = client.create_item(&item).await?;
            print_json(&created, pretty)?;
        }
        InventoryCommands::Update {
            id,
            sku_code,
            name,
            quantity,
            reorder_level,
            location,
            expiry_date,
        } => {
            let mut item = InventoryItem::new(sku_code, name, quantity);
            item.id = Some(id);
            item.reorder_level = reorder_level;
            item.location = location;
            item.expiry_date = expiry_date;

            let updated = client.update_item(id, &item).await?;
            print_json(&updated, pretty)?;
        }
        InventoryCommands::Delete { id } => {
            client.delete_item(id).await?;
            println!("Deleted item {id}.");
        }
        InventoryCommands::Report { notify } => {
            let items = client.list_inventory().await?;
            let low: Vec<&InventoryItem> =
                items.iter().filter(|item| item.is_low_stock()).collect();

            eprintln!(
                "{} of {} items at or below reorder level",
                low.len(),
                items.len()
            );
            print_json(&low, pretty)?;

            if let Some(email) = notify {
                for item in &low {
                    let alert = LowStockAlert::for_item(item, email.clone());
                    client.send_low_stock_alert(&alert).await?;
                }
                eprintln!("Sent {} low-stock alerts to {email}", low.len());
            }
        }
    }

    Ok(())
}

async fn run_order(
    action: OrderCommands,
    pretty: bool,
    client: &Client,
    session: &SharedSessionStore,
) -> Result<(), Box<dyn Error>> {
    match action {
        OrderCommands::List { page, size } => {
            let orders = client.list_orders(page, size).await?;
            print_json(&orders.content, pretty)?;
            eprintln!(
                "Page {}/{} ({} orders total)",
                orders.number + 1,
                orders.total_pages.max(1),
                orders.total_elements
            );
        }
        OrderCommands::Get { id } => {
            let order = client.get_order(id).await?;
            print_json(&order, pretty)?;
        }
        OrderCommands::Place { sku_code, quantity } => {
            let placed_by = session
                .read()
                .await
                .session()
                .map(|current| current.subject.clone());
            let request = OrderRequest {
                sku_code,
                quantity,
                placed_by,
            };
            let order = client.place_order(&request).await?;
            print_json(&order, pretty)?;
        }
        OrderCommands::Update {
            id,
            sku_code,
            quantity,
        } => {
            let request = OrderRequest {
                sku_code,
                quantity,
                placed_by: None,
            };
            let order = client.update_order(id, &request).await?;
            print_json(&order, pretty)?;
        }
        OrderCommands::Delete { id } => {
            client.delete_order(id).await?;
            println!("Deleted order {id}.");
        }
    }

    Ok(())
}

async fn run_notify(action: NotifyCommands, client: &Client) -> Result<(), Box<dyn Error>> {
    match action {
        NotifyCommands::LowStock { sku_code, email } => {
            let item = client.get_item_by_sku(&sku_code).await?;
            let alert = LowStockAlert::for_item(&item, email);
            let message = client.send_low_stock_alert(&alert).await?;
            println!("{message}");
        }
        NotifyCommands::Order {
            email,
            sku_code,
            quantity,
            user_name,
        } => {
            let notification = OrderNotification {
                email,
                sku_code,
                quantity,
                user_name,
            };
            let message = client.send_order_notification(&notification).await?;
            println!("{message}");
        }
    }

    Ok(())
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<(), Box<dyn Error>> {
    let rendered = if pretty {
        serde_json::to_string_pretty(value)?
    } else {
        serde_json::to_string(value)?
    };
    println!("{rendered}");
    Ok(())
}
