mod catalog;
mod console;
mod core;
mod utils;

use std::io;
use crate::catalog::domain::CatalogService;
use crate::catalog::factory;
use crate::console::controller::Console;
use crate::core::domain::Configuration;
use crate::core::library::LibraryResult;
use crate::utils::log::setup_tracing;

fn main() -> LibraryResult<()> {
    setup_tracing();

    let config = Configuration::new("Library Book Log");
    let catalog_service = factory::create_catalog_service(&config)?;

    // print the catalog as JSON and exit, for scripting and inspection
    if std::env::args().any(|arg| arg == "--snapshot") {
        let books = catalog_service.list_books()?;
        println!("{}", serde_json::to_string_pretty(&books)?);
        return Ok(());
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut console = Console::new(stdin.lock(), stdout.lock(), &config, catalog_service);
    console.run()?;
    Ok(())
}
