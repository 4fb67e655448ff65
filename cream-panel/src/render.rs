//! Plain-text rendering of panel state

use cream_client::{Flavor, Notification, NotificationVariant, Order, ProbeState};

pub fn flavors(flavors: &[Flavor]) {
    if flavors.is_empty() {
        println!("No flavors registered yet.");
        return;
    }
    println!("{:>4}  {:<24}  {:<14}  DESCRIPTION", "ID", "NAME", "AVAILABILITY");
    for flavor in flavors {
        println!(
            "{:>4}  {:<24}  {:<14}  {}",
            flavor.id,
            flavor.name,
            flavor.availability_label(),
            flavor.description
        );
    }
}

pub fn orders(orders: &[Order]) {
    if orders.is_empty() {
        println!("No orders yet.");
        return;
    }
    println!("{:>4}  {:<24}  {:>6}  {:<6}  STATUS", "ID", "CUSTOMER", "FLAVOR", "SIZE");
    for order in orders {
        println!(
            "{:>4}  {:<24}  {:>6}  {:<6}  {}",
            order.id, order.customer, order.flavor_id, order.size, order.status
        );
    }
}

pub fn probe(state: &ProbeState) {
    match state {
        ProbeState::Empty => println!("Enter an order id to check its status."),
        ProbeState::Resolved(report) => {
            println!("Order #{}: {}", report.order_id, report.status);
            println!("  {}", report.status.hint());
        }
        ProbeState::Errored(message) => error(message),
    }
}

pub fn status_reference() {
    println!("{:<12}  RECOMMENDED USE", "STATUS");
    for row in shared::status_reference() {
        println!("{:<12}  {}", row.label, row.hint);
    }
}

pub fn notifications(notifications: &[Notification]) {
    for note in notifications {
        match note.variant {
            NotificationVariant::Success => println!("[ok] {}", note.message),
            NotificationVariant::Error => eprintln!("[error] {}", note.message),
        }
    }
}

pub fn error(message: &str) {
    eprintln!("error: {}", message);
}
