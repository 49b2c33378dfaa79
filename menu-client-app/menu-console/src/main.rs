use std::io::Write;
use std::sync::Arc;

use anyhow::Result;
use chrono::{Local, Timelike};
use clap::Parser;
use menu_core::gateway::{CatalogGateway, SuggestionGateway};
use menu_infrastructure::{create_client, HttpCatalogGateway, HttpSuggestionGateway};
use menu_shared::{config::AppConfig, telemetry, EntityId};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{error, info};

mod app;
mod boundary;
mod command;
mod render;
#[cfg(test)]
mod testing;

use app::{App, Flow, View};
use boundary::CrashBoundary;
use command::Command;

#[derive(Parser, Debug)]
#[command(
    name = "menu-console",
    version,
    about = "Restaurant menu catalog and menu assistant"
)]
struct Args {
    /// Base URL of the catalog API (overrides api.base_url)
    #[arg(long)]
    base_url: Option<String>,

    /// Restaurant the new menus belong to (overrides api.restaurant_id)
    #[arg(long)]
    restaurant_id: Option<EntityId>,

    /// View shown at startup and after a reload
    #[arg(long, value_enum, default_value_t = View::Customer)]
    view: View,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env
    dotenvy::dotenv().ok();
    let args = Args::parse();

    let mut config = AppConfig::load()?;
    if let Some(base_url) = args.base_url {
        config.api.base_url = base_url;
    }
    if let Some(restaurant_id) = args.restaurant_id {
        config.api.restaurant_id = restaurant_id;
    }

    // Logs go to a file so they never interleave with the screen
    let _log_guard =
        telemetry::init_file_telemetry(&config.log.directory, &config.log.file_prefix)?;
    std::panic::set_hook(Box::new(|panic| error!("{}", panic)));

    info!(
        "{} starting ({}), catalog at {}",
        config.app.name, config.app.env, config.api.base_url
    );

    let client = create_client()?;
    let catalog = Arc::new(HttpCatalogGateway::new(client.clone(), config.api.base_url.as_str()));
    let suggestions = Arc::new(HttpSuggestionGateway::new(client, config.api.base_url.as_str()));

    let mut app = App::new(catalog, suggestions, config.api.restaurant_id, args.view);
    let mut boundary = CrashBoundary::default();

    println!("Loading menus...");
    boundary.guard(app.start()).await;
    draw(&mut app, &mut boundary);
    prompt()?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            prompt()?;
            continue;
        }
        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(e) => {
                println!("{}", e);
                prompt()?;
                continue;
            }
        };

        if boundary.is_tripped() {
            match command {
                Command::Quit => break,
                Command::Reload => {
                    boundary.reset();
                    boundary.guard(app.reload()).await;
                }
                Command::Show(View::Home) => {
                    boundary.reset();
                    app.show(View::Home);
                }
                _ => println!("Type `reload` or `home` to continue."),
            }
        } else if let Some(Flow::Quit) = boundary.guard(app.handle(command)).await {
            break;
        }

        draw(&mut app, &mut boundary);
        prompt()?;
    }

    info!("{} exiting", config.app.name);
    Ok(())
}

fn draw<C: CatalogGateway, S: SuggestionGateway>(
    app: &mut App<C, S>,
    boundary: &mut CrashBoundary,
) {
    let hour = Local::now().hour();
    let screen = if boundary.is_tripped() {
        None
    } else {
        boundary.guard_sync(|| app.render(hour))
    };

    match screen {
        Some(screen) => {
            println!("\n{}", screen);
            for line in app.take_status() {
                println!("{}", line);
            }
        }
        None => println!("\n{}", render::fallback()),
    }
}

fn prompt() -> std::io::Result<()> {
    print!("> ");
    std::io::stdout().flush()
}
