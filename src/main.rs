//! Interactive console for the restaurants list.
//!
//! Reads one command per line from stdin and redraws the screen after each.

use restaurant_desk::app::view;
use restaurant_desk::app::{Controller, DeleteOutcome, SubmitOutcome};
use restaurant_desk::{ClientConfig, Field, RestaurantClient, RestaurantId};
use std::io::{self, BufRead, Write};
use tracing_subscriber::EnvFilter;

const HELP: &str = "\
Commands:
  list                  reload the list
  add                   open the form for a new restaurant
  edit <row>            open the form on a row
  set <field> <value>   edit a form field (name, address, contact)
  submit                save the form
  cancel                close the form without saving
  delete <row>          delete a row (asks for confirmation)
  help                  show this help
  quit                  exit";

fn prompt(text: &str) -> io::Result<Option<String>> {
    print!("{}", text);
    io::stdout().flush()?;
    let mut line = String::new();
    if io::stdin().lock().read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
}

fn row_id(controller: &Controller<RestaurantClient>, arg: &str) -> Option<RestaurantId> {
    let row: usize = arg.trim().parse().ok()?;
    let index = row.checked_sub(1)?;
    controller.records().get(index).map(|r| r.id.clone())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenv::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let config = ClientConfig::from_env()?;
    tracing::info!(base_url = %config.base_url(), route_style = ?config.route_style(), "starting");

    let mut controller = Controller::new(RestaurantClient::new(config));
    controller.mount().await;

    println!("Our Restaurants");
    println!("{}", view::render(&controller));
    println!("Type 'help' for commands.");

    while let Some(line) = prompt("> ")? {
        let line = line.trim();
        let (command, rest) = line.split_once(' ').unwrap_or((line, ""));

        match command {
            "" => continue,
            "quit" | "exit" => break,
            "help" => {
                println!("{}", HELP);
                continue;
            }
            "list" | "refresh" => {
                controller.refresh().await;
            }
            "add" => controller.open_create(),
            "edit" => match row_id(&controller, rest) {
                Some(id) => {
                    controller.open_edit(&id);
                }
                None => println!("no such row: {}", rest),
            },
            "set" => {
                let (name, value) = rest.split_once(' ').unwrap_or((rest, ""));
                match Field::parse(name) {
                    Some(field) if controller.is_form_open() => controller.set_field(field, value),
                    Some(_) => println!("no form is open (use 'add' or 'edit <row>')"),
                    None => println!("unknown field: {}", name),
                }
            }
            "submit" => {
                if controller.submit().await == SubmitOutcome::NotOpen {
                    println!("no form is open");
                }
            }
            "cancel" => controller.cancel(),
            "delete" => match row_id(&controller, rest) {
                Some(id) => {
                    let mut ask = |question: &str| {
                        matches!(
                            prompt(&format!("{} [y/N] ", question)),
                            Ok(Some(answer)) if answer.trim().eq_ignore_ascii_case("y")
                        )
                    };
                    if controller.delete(&id, &mut ask).await == DeleteOutcome::Declined {
                        println!("delete cancelled");
                    }
                }
                None => println!("no such row: {}", rest),
            },
            other => {
                println!("unknown command: {} (try 'help')", other);
                continue;
            }
        }

        println!("{}", view::render(&controller));
        controller.dismiss_notice();
    }

    Ok(())
}
