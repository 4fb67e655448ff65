//! Command-line surface

use clap::{ArgAction, Parser, Subcommand};
use cream_client::config::DEFAULT_BASE_URL;
use cream_client::{ClientConfig, ClientError, FetchView, HttpClient, OrderSize, Panel, ProbeState};

use crate::render;

#[derive(Debug, Parser)]
#[command(name = "cream-panel", version, about = "Cookies & Cream operator panel")]
pub struct Cli {
    /// Base address of the ordering API
    #[arg(long, env = "CREAM_API_BASE", default_value = DEFAULT_BASE_URL, global = true)]
    pub api_base: String,

    /// Request timeout in seconds; without one a hung request waits forever
    #[arg(long, env = "CREAM_REQUEST_TIMEOUT_SECS", global = true)]
    pub timeout: Option<u64>,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// List the flavor catalog
    Flavors {
        /// Only flavors that can be ordered, as filtered by the server
        #[arg(long)]
        available: bool,
    },
    /// Register a new flavor
    AddFlavor {
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: String,
        /// Register the flavor as not available
        #[arg(long)]
        unavailable: bool,
    },
    /// Show the most recent orders, newest first
    Orders,
    /// Register an order for an available flavor
    AddOrder {
        #[arg(long)]
        customer: String,
        /// Flavor id, as listed by `flavors --available`
        #[arg(long)]
        flavor: String,
        /// cono, vaso or litro
        #[arg(long, default_value_t = OrderSize::Cup)]
        size: OrderSize,
    },
    /// Show one full order
    Order {
        /// Order id
        id: String,
    },
    /// Look up the current status of one order
    Status {
        /// Order id
        id: String,
    },
    /// Print the order status reference table
    Statuses,
}

impl Command {
    /// Whether the command reads the remote collections
    pub fn needs_mount(&self) -> bool {
        !matches!(self, Command::Statuses)
    }
}

impl Cli {
    /// Environment configuration with the command-line overrides applied
    pub fn client_config(&self) -> ClientConfig {
        let mut config = ClientConfig::from_env();
        config.base_url = self.api_base.clone();
        if self.timeout.is_some() {
            config.timeout = self.timeout;
        }
        config
    }
}

/// Run one command against a mounted panel; returns whether it succeeded
pub async fn run<C: HttpClient>(panel: &Panel<C>, command: Command) -> bool {
    match command {
        Command::Flavors { available: true } => match panel.flavors().fetch_available().await {
            Ok(flavors) => {
                render::flavors(&flavors);
                true
            }
            Err(e) => {
                render::error(&e.user_message("Could not load the available flavors"));
                false
            }
        },
        Command::Flavors { available: false } => {
            let state = panel.flavors().snapshot().await;
            match state.view() {
                FetchView::Ready(flavors) => {
                    render::flavors(flavors);
                    true
                }
                FetchView::Failed(message) => {
                    render::error(message);
                    false
                }
                FetchView::Loading => {
                    render::error("The flavor catalog is still loading");
                    false
                }
            }
        }
        Command::AddFlavor {
            name,
            description,
            unavailable,
        } => {
            panel
                .update_flavor_form(|form| {
                    form.name = name;
                    form.description = description;
                    form.available = !unavailable;
                })
                .await;
            match panel.submit_flavor_form().await {
                Ok(_) => {
                    render::flavors(&panel.flavors().flavors().await);
                    true
                }
                Err(e) => report_rejection(&e),
            }
        }
        Command::Orders => {
            let state = panel.orders().snapshot().await;
            if state.has_error() {
                render::error(state.error());
                return false;
            }
            render::orders(&panel.orders().recent().await);
            true
        }
        Command::AddOrder {
            customer,
            flavor,
            size,
        } => {
            panel
                .update_order_form(|form| {
                    form.customer = customer;
                    form.flavor_id = flavor;
                    form.size = size;
                })
                .await;
            match panel.submit_order_form().await {
                Ok(_) => {
                    render::orders(&panel.orders().recent().await);
                    render::probe(&panel.check_pending_status().await);
                    true
                }
                Err(e) => report_rejection(&e),
            }
        }
        Command::Order { id } => match panel.order(&id).await {
            Ok(order) => {
                render::orders(std::slice::from_ref(&order));
                true
            }
            Err(e) => {
                render::error(&e.user_message("Could not load the order"));
                false
            }
        },
        Command::Status { id } => {
            let state = panel.check_status(&id).await;
            render::probe(&state);
            matches!(state, ProbeState::Resolved(_))
        }
        Command::Statuses => {
            render::status_reference();
            true
        }
    }
}

/// Validation failures produce no notification, so print them here
fn report_rejection(err: &ClientError) -> bool {
    if let ClientError::Validation(message) = err {
        render::error(message);
    }
    false
}
