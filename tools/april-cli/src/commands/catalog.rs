//! Catalog listing.

use anyhow::{bail, Result};
use april_commerce::{Catalog, Product};

use super::CatalogArgs;
use crate::context::Context;
use crate::output::{badge, compare_at, price};

/// Run the catalog command.
pub async fn run(args: CatalogArgs, ctx: &Context) -> Result<()> {
    let catalog = &ctx.catalog;

    let products: Vec<&Product> = match &args.collection {
        Some(name) => {
            let found: Vec<&Product> = catalog.in_collection(name).collect();
            if found.is_empty() {
                bail!("No products in collection '{}'", name);
            }
            found
        }
        None => catalog.products().iter().collect(),
    };

    if ctx.output.is_json() {
        ctx.output.json(&serde_json::json!({
            "currency": catalog.currency(),
            "products": products,
            "collections": catalog.collections(),
        }));
        return Ok(());
    }

    ctx.output.header("Products");
    print_products(&products, catalog, &args, ctx);

    if args.collection.is_none() && !catalog.collections().is_empty() {
        ctx.output.header("Collections");
        let widths = [5, 16, 8, 10];
        ctx.output.table_row(&["ID", "NAME", "PIECES", "FROM"], &widths);
        for collection in catalog.collections() {
            let id = collection.id.to_string();
            let count = collection.product_count.to_string();
            let from = catalog.price(collection.price).display();
            ctx.output
                .table_row(&[id.as_str(), collection.name.as_str(), count.as_str(), from.as_str()], &widths);
        }
        ctx.output.info("Quick add a collection with `quick-add <id>` in a play script.");
    }

    Ok(())
}

fn print_products(products: &[&Product], catalog: &Catalog, args: &CatalogArgs, ctx: &Context) {
    for product in products {
        let mut line = format!(
            "{}  {}  {} {}",
            product.id,
            product.name,
            price(catalog.price(product.price)),
            compare_at(catalog.price(product.compare_at_price())),
        );
        if let Some(label) = &product.badge {
            line.push_str(&format!("  {}", badge(label)));
        }
        ctx.output.list_item(&line);

        ctx.output.kv("collection", &product.collection);
        if !product.sizes.is_empty() {
            ctx.output.kv("sizes", &product.sizes.join(" "));
        }
        if args.long {
            ctx.output.kv("fabric", &product.fabric);
            ctx.output.kv("about", &product.description);
        }
    }
}
