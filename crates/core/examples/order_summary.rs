//! Order Summary Example
//!
//! Fills a cart from the store fixture and prints the order summary.
//!
//! Use `-f` to load a different store fixture
//! Use `-a` (repeatable) to add a product by id, e.g. `-a 1 -a 2 -a 2`
//! Use `-l` to set the log level (`RUST_LOG` takes precedence)

use std::{io, path::PathBuf};

use anyhow::Result;
use clap::Parser;
use pretty_shop::prelude::*;
use tracing_subscriber::EnvFilter;

/// Arguments for the order summary example
#[derive(Debug, Parser)]
struct OrderSummaryArgs {
    /// Store fixture file
    #[clap(
        short,
        long,
        default_value = concat!(env!("CARGO_MANIFEST_DIR"), "/fixtures/store/demo.yml")
    )]
    fixture: PathBuf,

    /// Product id to add to the cart (repeat to add more units)
    #[clap(short, long = "add")]
    add: Vec<i64>,

    /// Log level filter
    #[clap(short, long, default_value = "warn")]
    log_level: String,
}

/// Order Summary Example
#[expect(clippy::print_stdout, reason = "Example code")]
pub fn main() -> Result<()> {
    let args = OrderSummaryArgs::parse();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&args.log_level)),
        )
        .with_writer(io::stderr)
        .init();

    let fixture = StoreFixture::from_path(&args.fixture)?;
    let mut store = Storefront::from_fixture(&fixture)?;

    for id in &args.add {
        store.add_to_cart(ProductId::new(*id))?;
    }

    if args.add.is_empty() {
        println!("Products:");

        for product in store.catalog() {
            println!(
                "  {:>3}  {:<26} {:>10}  {}",
                product.id.get(),
                product.name,
                format_money(product.price, store.config().currency),
                product.category
            );
        }
    }

    let stdout = io::stdout();
    let mut handle = stdout.lock();

    OrderSummary::new(store.cart(), store.config()).write_to(&mut handle)?;

    Ok(())
}
