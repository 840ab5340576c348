//! The featured product's add-to-bag button.
//!
//! Clicking shows "Adding to Bag..." for a short simulated delay, adds the
//! product in the selected size, then shows a confirmation before returning
//! to idle. Clicks are ignored until the cycle completes.

use std::sync::{Mutex, PoisonError};

use april_commerce::Product;
use leptos::prelude::*;
use serde::Serialize;
use tokio::time;
use tracing::{debug, warn};

use crate::config::{StorefrontConfig, TimerConfig};
use crate::context::CartContext;
use crate::error::StorefrontError;
use crate::task::ScopedTask;

/// Where the button is in its cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AddToBagPhase {
    #[default]
    Idle,
    Adding,
    Added,
}

impl AddToBagPhase {
    /// Button label for this phase.
    pub fn label(&self) -> &'static str {
        match self {
            AddToBagPhase::Idle => "Add to Bag",
            AddToBagPhase::Adding => "Adding to Bag...",
            AddToBagPhase::Added => "Added Successfully!",
        }
    }
}

/// Controller for the featured product's button.
///
/// Owns its pending timer; dropping the controller cancels the timer, so a
/// torn-down view never adds to the bag.
pub struct AddToBag {
    cart: CartContext,
    product: Product,
    timers: TimerConfig,
    phase: RwSignal<AddToBagPhase>,
    selected_size: RwSignal<String>,
    pending: Mutex<Option<ScopedTask>>,
}

impl AddToBag {
    /// Controller for `product` with the configured delays and default size.
    pub fn new(
        cart: CartContext,
        product: Product,
        config: &StorefrontConfig,
    ) -> Result<Self, StorefrontError> {
        let size = config.featured.default_size.clone();
        if !product.sizes.is_empty() && !product.offers_size(&size) {
            return Err(StorefrontError::UnknownSize {
                product: product.name.clone(),
                size,
            });
        }

        Ok(Self {
            cart,
            product,
            timers: config.timers,
            phase: RwSignal::new(AddToBagPhase::Idle),
            selected_size: RwSignal::new(size),
            pending: Mutex::new(None),
        })
    }

    /// The featured product.
    pub fn product(&self) -> &Product {
        &self.product
    }

    /// Current phase.
    pub fn phase(&self) -> AddToBagPhase {
        self.phase.get()
    }

    /// Current button label.
    pub fn label(&self) -> &'static str {
        self.phase().label()
    }

    /// Size that will be added on the next click.
    pub fn selected_size(&self) -> String {
        self.selected_size.get()
    }

    /// Choose a size the product is offered in.
    pub fn select_size(&self, size: &str) -> Result<(), StorefrontError> {
        if !self.product.offers_size(size) {
            return Err(StorefrontError::UnknownSize {
                product: self.product.name.clone(),
                size: size.to_string(),
            });
        }
        self.selected_size.set(size.to_string());
        Ok(())
    }

    /// Start the add cycle. Returns `false` if a cycle is already running.
    ///
    /// Must be called from within a tokio runtime.
    pub fn click(&self) -> bool {
        if self.phase.get_untracked() != AddToBagPhase::Idle {
            debug!(product = %self.product.id, "add to bag already in progress");
            return false;
        }

        let snapshot = if self.product.sizes.is_empty() {
            self.product.snapshot()
        } else {
            self.product
                .snapshot_with_size(self.selected_size.get_untracked())
        };
        self.phase.set(AddToBagPhase::Adding);

        let cart = self.cart;
        let phase = self.phase;
        let add_delay = self.timers.add_delay();
        let confirm_delay = self.timers.confirm_delay();

        let task = ScopedTask::spawn("featured-add-to-bag", async move {
            time::sleep(add_delay).await;
            if let Err(err) = cart.add_item(&snapshot) {
                warn!(product = %snapshot.id, error = %err, "featured add to bag failed");
                let _ = phase.try_set(AddToBagPhase::Idle);
                return;
            }
            let _ = phase.try_set(AddToBagPhase::Added);

            time::sleep(confirm_delay).await;
            let _ = phase.try_set(AddToBagPhase::Idle);
        });

        *self.pending.lock().unwrap_or_else(PoisonError::into_inner) = Some(task);
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::context::Session;
    use april_commerce::{Catalog, LineKey};
    use std::time::Duration;

    fn featured(session: &Session) -> AddToBag {
        let product = Catalog::april().featured().cloned().unwrap();
        AddToBag::new(session.cart(), product, &StorefrontConfig::default()).unwrap()
    }

    #[tokio::test(start_paused = true)]
    async fn test_full_cycle() {
        let session = Session::start();
        let button = featured(&session);
        assert_eq!(button.label(), "Add to Bag");

        assert!(button.click());
        assert_eq!(button.phase(), AddToBagPhase::Adding);

        time::sleep(Duration::from_millis(1000)).await;
        assert!(session.cart().items().is_empty());

        time::sleep(Duration::from_millis(300)).await;
        assert_eq!(button.phase(), AddToBagPhase::Added);
        assert_eq!(button.label(), "Added Successfully!");
        let items = session.cart().items();
        assert_eq!(items.len(), 1);
        assert_eq!(items[0].key(), LineKey::sized("1", "M"));

        time::sleep(Duration::from_millis(3000)).await;
        assert_eq!(button.phase(), AddToBagPhase::Idle);
    }

    #[tokio::test(start_paused = true)]
    async fn test_clicks_ignored_while_busy() {
        let session = Session::start();
        let button = featured(&session);

        assert!(button.click());
        assert!(!button.click());

        time::sleep(Duration::from_millis(1500)).await;
        assert!(!button.click());
        assert_eq!(session.cart().item_count(), 1);

        time::sleep(Duration::from_millis(3000)).await;
        assert!(button.click());
        time::sleep(Duration::from_millis(1500)).await;
        assert_eq!(session.cart().item_count(), 2);
    }

    #[tokio::test(start_paused = true)]
    async fn test_drop_cancels_pending_add() {
        let session = Session::start();
        let button = featured(&session);

        assert!(button.click());
        drop(button);

        time::sleep(Duration::from_secs(10)).await;
        assert!(session.cart().items().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_size_selection() {
        let session = Session::start();
        let button = featured(&session);

        assert!(matches!(
            button.select_size("XXL"),
            Err(StorefrontError::UnknownSize { .. })
        ));
        button.select_size("L").unwrap();
        assert_eq!(button.selected_size(), "L");

        button.click();
        time::sleep(Duration::from_millis(1300)).await;
        assert_eq!(
            session.cart().items()[0].key(),
            LineKey::sized("1", "L")
        );
    }

    #[test]
    fn test_unknown_default_size_rejected() {
        let session = Session::start();
        let product = Catalog::april().featured().cloned().unwrap();
        let mut config = StorefrontConfig::default();
        config.featured.default_size = "XXXL".to_string();

        assert!(AddToBag::new(session.cart(), product, &config).is_err());
    }
}
