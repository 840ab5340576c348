//! Run a cart script against a fresh storefront session.

use std::fs;

use anyhow::{anyhow, bail, Context as _, Result};
use april_commerce::{Cart, CartSummary, LineItem, Money};
use april_storefront::{
    brand_stories, use_cart, AddToBag, AddToBagPhase, Carousel, CartContext, ScopedTask, Session,
    StorefrontError,
};
use serde::Serialize;
use tokio::time;
use tracing::info;

use super::PlayArgs;
use crate::context::Context;
use crate::output::price;
use crate::script::{self, Step};

/// Run the play command.
pub async fn run(args: PlayArgs, ctx: &Context) -> Result<()> {
    let path = ctx.resolve_path(&args.script);
    let source = fs::read_to_string(&path)
        .with_context(|| format!("Failed to read script: {}", path.display()))?;
    let lines = script::parse(&source)
        .with_context(|| format!("Invalid script: {}", path.display()))?;

    ctx.output.debug(&format!("{} steps in {}", lines.len(), path.display()));

    let session = Session::start_with(Cart::with_currency(ctx.catalog.currency()));
    let mut player = Player::new(&session, ctx);
    if args.open {
        player.cart.set_open(true);
    }

    let mut failures = 0;
    for line in &lines {
        if let Err(err) = player.step(&line.step).await {
            let err = err.context(format!("line {}", line.number));
            if !args.keep_going {
                return Err(err);
            }
            ctx.output.warn(&format!("{:#}", err));
            failures += 1;
        }
    }

    player.finish();
    print_cart(player.cart, ctx);

    if failures > 0 {
        bail!("{} step(s) failed", failures);
    }
    Ok(())
}

/// Executes script steps against one session.
struct Player<'a> {
    ctx: &'a Context,
    session: &'a Session,
    cart: CartContext,
    featured: Option<AddToBag>,
    stories: Carousel,
    _rotation: ScopedTask,
}

impl<'a> Player<'a> {
    fn new(session: &'a Session, ctx: &'a Context) -> Self {
        let cart = session.run(use_cart);
        let (stories, rotation) =
            session.run(|| Carousel::brand_stories(&ctx.config.storefront.timers));
        info!(session = %cart.session_id(), "playing cart script");
        Self {
            ctx,
            session,
            cart,
            featured: None,
            stories,
            _rotation: rotation,
        }
    }

    async fn step(&mut self, step: &Step) -> Result<()> {
        let ctx = self.ctx;
        let output = &ctx.output;
        let catalog = &ctx.catalog;

        match step {
            Step::Add { product, size } => {
                let product = catalog.require(product)?;
                match size {
                    Some(size) => {
                        if !product.offers_size(size) {
                            return Err(StorefrontError::UnknownSize {
                                product: product.name.clone(),
                                size: size.clone(),
                            }
                            .into());
                        }
                        self.cart.add_item(&product.snapshot_with_size(size.as_str()))?;
                        output.success(&format!("Added {} ({})", product.name, size));
                    }
                    None => {
                        self.cart.add_product_and_open(product)?;
                        output.success(&format!("Added {}", product.name));
                    }
                }
            }
            Step::QuickAdd { collection } => {
                let collection = catalog.require_collection(*collection)?;
                self.cart.quick_add(collection)?;
                output.success(&format!("Added {} Essential", collection.name));
            }
            Step::Remove { key } => {
                if self.cart.remove_item(key) {
                    output.success(&format!("Removed {}", key));
                } else {
                    output.warn(&format!("{} is not in the bag", key));
                }
            }
            Step::Update { key, delta } => match self.cart.update_quantity(key, *delta) {
                Some(0) => output.success(&format!("Removed {}", key)),
                Some(quantity) => output.success(&format!("{} now x{}", key, quantity)),
                None => output.warn(&format!("{} is not in the bag", key)),
            },
            Step::Clear => {
                self.cart.clear_cart();
                output.success("Bag cleared");
            }
            Step::Open => self.cart.set_open(true),
            Step::Close => self.cart.set_open(false),
            Step::Toggle => {
                let open = self.cart.toggle_open();
                output.debug(&format!("bag panel {}", if open { "open" } else { "closed" }));
            }
            Step::Featured { size } => {
                let featured = self.featured()?;
                if let Some(size) = size {
                    featured.select_size(size)?;
                }
                if featured.click() {
                    output.info(&format!(
                        "{} ({}): {}",
                        featured.product().name,
                        featured.selected_size(),
                        featured.label()
                    ));
                } else {
                    output.warn(&format!("Ignored click: {}", featured.label()));
                }
            }
            Step::Wait(duration) => {
                let spinner = output.spinner(&format!("waiting {}ms", duration.as_millis()));
                time::sleep(*duration).await;
                spinner.finish_and_clear();
            }
            Step::Show => {
                if let Some(story) = brand_stories().get(self.stories.current()) {
                    output.kv("brand story", &format!("{} {}", story.number, story.title));
                }
                print_cart(self.cart, self.ctx);
            }
        }

        Ok(())
    }

    /// The featured product's controller, created on first use.
    fn featured(&mut self) -> Result<&AddToBag> {
        if self.featured.is_none() {
            let ctx = self.ctx;
            let product = ctx
                .catalog
                .featured()
                .ok_or_else(|| anyhow!("Catalog has no featured product"))?
                .clone();
            let cart = self.cart;
            let config = &ctx.config.storefront;
            let controller = self.session.run(|| AddToBag::new(cart, product, config))?;
            self.featured = Some(controller);
        }

        self.featured
            .as_ref()
            .ok_or_else(|| anyhow!("Featured controller missing"))
    }

    /// Drop the featured controller, cancelling any pending add.
    fn finish(&mut self) {
        if let Some(featured) = self.featured.take() {
            if featured.phase() == AddToBagPhase::Adding {
                self.ctx
                    .output
                    .warn("Script ended while the featured add was pending; it was cancelled");
            }
        }
    }
}

#[derive(Serialize)]
struct BagReport<'a> {
    session: String,
    open: bool,
    items: &'a [LineItem],
    summary: CartSummary,
}

fn print_cart(handle: CartContext, ctx: &Context) {
    let cart = handle.snapshot();
    let policy = &ctx.config.storefront.shipping;
    let summary = cart.summary(policy);

    if ctx.output.is_json() {
        ctx.output.json(&BagReport {
            session: handle.session_id().to_string(),
            open: cart.is_open(),
            items: cart.items(),
            summary,
        });
        return;
    }

    ctx.output.header(&format!(
        "Bag ({} item{}, panel {})",
        cart.item_count(),
        if cart.item_count() == 1 { "" } else { "s" },
        if cart.is_open() { "open" } else { "closed" }
    ));

    if cart.is_empty() {
        ctx.output.info("Your bag is empty");
        return;
    }

    let widths = [8, 28, 4, 10];
    ctx.output.table_row(&["LINE", "NAME", "QTY", "TOTAL"], &widths);
    for item in cart.items() {
        let key = item.key().to_string();
        let quantity = item.quantity.to_string();
        let total = Money::new(item.line_total(), cart.currency()).display();
        ctx.output.table_row(
            &[key.as_str(), item.name.as_str(), quantity.as_str(), total.as_str()],
            &widths,
        );
    }

    ctx.output.kv("subtotal", &price(summary.subtotal));
    if summary.is_free_shipping() {
        ctx.output.kv("shipping", "Free");
    } else {
        ctx.output.kv("shipping", &price(summary.shipping));
        let remaining = policy.free_shipping_remaining(summary.subtotal.amount);
        ctx.output.info(&format!(
            "Add {} more for free shipping",
            Money::new(remaining, cart.currency()).display()
        ));
    }
    ctx.output.kv("total", &price(summary.total));
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::time::Duration;

    use april_commerce::{Catalog, LineKey, ProductId};

    use super::*;
    use crate::config::CliConfig;
    use crate::output::Output;

    fn context() -> Context {
        Context {
            config: CliConfig::default(),
            config_path: None,
            catalog: Catalog::april(),
            output: Output::new(false, true),
            cwd: PathBuf::from("."),
        }
    }

    async fn play(player: &mut Player<'_>, source: &str) -> Result<()> {
        for line in script::parse(source)? {
            player
                .step(&line.step)
                .await
                .with_context(|| format!("line {}", line.number))?;
        }
        Ok(())
    }

    #[tokio::test(start_paused = true)]
    async fn test_play_adds_and_updates() {
        let ctx = context();
        let session = Session::start();
        let mut player = Player::new(&session, &ctx);

        play(
            &mut player,
            "add 1 M\nadd 1 M\nadd 1 S\nquick-add 2\nupdate 1 -1 S\nremove 5 M\n",
        )
        .await
        .unwrap();

        let cart = player.cart.snapshot();
        assert_eq!(cart.unique_line_count(), 2);
        assert_eq!(cart.get(&LineKey::sized(ProductId::new("1"), "M")).unwrap().quantity, 2);
        assert!(cart.get(&LineKey::new(ProductId::new("102"))).is_some());
        assert_eq!(cart.item_count(), 3);
    }

    #[tokio::test(start_paused = true)]
    async fn test_grid_add_opens_bag() {
        let ctx = context();
        let session = Session::start();
        let mut player = Player::new(&session, &ctx);

        play(&mut player, "add 3").await.unwrap();
        assert!(player.cart.is_open());
        play(&mut player, "toggle").await.unwrap();
        assert!(!player.cart.is_open());
    }

    #[tokio::test(start_paused = true)]
    async fn test_featured_waits_for_delay() {
        let ctx = context();
        let session = Session::start();
        let mut player = Player::new(&session, &ctx);

        play(&mut player, "featured S\nwait 1000").await.unwrap();
        assert!(player.cart.items().is_empty());

        play(&mut player, "featured\nwait 500").await.unwrap();
        let items = player.cart.items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].size.as_deref(), Some("S"));

        time::sleep(Duration::from_secs(5)).await;
        play(&mut player, "featured L\nwait 1300").await.unwrap();
        assert_eq!(player.cart.items().len(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_brand_stories_rotate_during_script() {
        let mut ctx = context();
        ctx.config.storefront.timers.story_interval_ms = 2000;
        let session = Session::start();
        let mut player = Player::new(&session, &ctx);

        assert_eq!(player.stories.current(), 0);
        play(&mut player, "wait 4500").await.unwrap();
        assert_eq!(player.stories.current(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_unknown_product_reports_line() {
        let ctx = context();
        let session = Session::start();
        let mut player = Player::new(&session, &ctx);

        let err = play(&mut player, "add 1 M\nadd 999").await.unwrap_err();
        assert!(format!("{:#}", err).starts_with("line 2"));
        assert_eq!(player.cart.item_count(), 1);
    }

    #[tokio::test(start_paused = true)]
    async fn test_unknown_size_is_rejected() {
        let ctx = context();
        let session = Session::start();
        let mut player = Player::new(&session, &ctx);

        assert!(play(&mut player, "add 1 XXL").await.is_err());
        assert!(play(&mut player, "featured XXL").await.is_err());
        assert!(player.cart.items().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_finish_cancels_pending_featured_add() {
        let ctx = context();
        let session = Session::start();
        let mut player = Player::new(&session, &ctx);

        play(&mut player, "featured").await.unwrap();
        player.finish();
        time::sleep(Duration::from_secs(2)).await;

        assert!(player.cart.items().is_empty());
    }
}
