//! The shared cart: one reactive handle per session, found through context.

use april_commerce::{
    Cart, CartSummary, Collection, Currency, LineItem, LineKey, Money, Product,
    ProductSnapshot, SessionId, ShippingPolicy,
};
use leptos::prelude::*;
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::error::StorefrontError;

/// What the last cart mutation did.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum CartEvent {
    /// A unit was added; `quantity` is the line's new quantity.
    ItemAdded { key: LineKey, quantity: u32 },
    /// A line was removed outright.
    ItemRemoved { key: LineKey },
    /// A line's quantity changed; 0 means the line was dropped.
    QuantityChanged { key: LineKey, quantity: u32 },
    /// Every line was removed.
    Cleared { lines: usize },
    /// The cart panel was shown or hidden.
    Visibility { open: bool },
}

/// Handle to the session's cart.
///
/// `Copy`, so every view can hold one. All handles in a session point at the
/// same signal; mutations are synchronous and visible to the next read.
#[derive(Clone, Copy)]
pub struct CartContext {
    cart: RwSignal<Cart>,
    last_event: RwSignal<Option<CartEvent>>,
    session: StoredValue<SessionId>,
}

impl CartContext {
    fn new(cart: Cart) -> Self {
        Self {
            cart: RwSignal::new(cart),
            last_event: RwSignal::new(None),
            session: StoredValue::new(SessionId::generate()),
        }
    }

    /// Session this cart belongs to.
    pub fn session_id(&self) -> SessionId {
        self.session.get_value()
    }

    /// Add one unit of a product to the bag.
    pub fn add_item(&self, product: &ProductSnapshot) -> Result<LineKey, StorefrontError> {
        let outcome = self
            .cart
            .try_update(|cart| {
                cart.add_item(product).map(|key| {
                    let quantity = cart.get(&key).map(|line| line.quantity).unwrap_or(0);
                    (key, quantity)
                })
            })
            .ok_or(StorefrontError::SessionClosed)?;

        match outcome {
            Ok((key, quantity)) => {
                debug!(
                    product = %key.product_id,
                    size = ?key.size,
                    quantity,
                    "item added to bag"
                );
                self.record(CartEvent::ItemAdded {
                    key: key.clone(),
                    quantity,
                });
                Ok(key)
            }
            Err(err) => {
                warn!(product = %product.id, error = %err, "rejected add to bag");
                Err(err.into())
            }
        }
    }

    /// Add a catalog product and open the bag, as the product grid does.
    pub fn add_product_and_open(&self, product: &Product) -> Result<LineKey, StorefrontError> {
        let key = self.add_item(&product.snapshot())?;
        self.set_open(true);
        Ok(key)
    }

    /// Quick-add a collection's essential piece and open the bag.
    pub fn quick_add(&self, collection: &Collection) -> Result<LineKey, StorefrontError> {
        let key = self.add_item(&collection.essential())?;
        self.set_open(true);
        Ok(key)
    }

    /// Remove a line entirely. Absent keys leave the cart untouched.
    pub fn remove_item(&self, key: &LineKey) -> bool {
        let present = self
            .cart
            .try_with_untracked(|cart| cart.get(key).is_some())
            .unwrap_or(false);
        if !present {
            return false;
        }

        let removed = self
            .cart
            .try_update(|cart| cart.remove_item(key))
            .unwrap_or(false);
        if removed {
            debug!(product = %key.product_id, size = ?key.size, "line removed from bag");
            self.record(CartEvent::ItemRemoved { key: key.clone() });
        }
        removed
    }

    /// Change a line's quantity by `delta`, dropping it at zero.
    ///
    /// Returns the new quantity, or `None` if the line is not in the bag.
    pub fn update_quantity(&self, key: &LineKey, delta: i64) -> Option<u32> {
        let present = self
            .cart
            .try_with_untracked(|cart| cart.get(key).is_some())
            .unwrap_or(false);
        if !present {
            return None;
        }

        let quantity = self
            .cart
            .try_update(|cart| cart.update_quantity(key, delta))
            .flatten()?;
        debug!(product = %key.product_id, size = ?key.size, delta, quantity, "line quantity changed");
        self.record(CartEvent::QuantityChanged {
            key: key.clone(),
            quantity,
        });
        Some(quantity)
    }

    /// Empty the bag.
    pub fn clear_cart(&self) {
        if let Some(lines) = self.cart.try_update(Cart::clear) {
            debug!(lines, "bag cleared");
            self.record(CartEvent::Cleared { lines });
        }
    }

    /// Show or hide the bag panel.
    pub fn set_open(&self, open: bool) {
        if self.cart.try_update(|cart| cart.set_open(open)).is_some() {
            self.record(CartEvent::Visibility { open });
        }
    }

    /// Flip the bag panel. Returns the new state; a closed session stays
    /// closed.
    pub fn toggle_open(&self) -> bool {
        match self.cart.try_update(Cart::toggle_open) {
            Some(open) => {
                self.record(CartEvent::Visibility { open });
                open
            }
            None => false,
        }
    }

    /// Lines in insertion order.
    pub fn items(&self) -> Vec<LineItem> {
        self.cart
            .try_with(|cart| cart.items().to_vec())
            .unwrap_or_default()
    }

    /// Sum of quantities (the navbar badge).
    pub fn item_count(&self) -> u64 {
        self.cart.try_with(Cart::item_count).unwrap_or(0)
    }

    /// Sum of price × quantity.
    pub fn total(&self) -> Money {
        self.cart
            .try_with(Cart::total)
            .unwrap_or_else(|| Money::zero(Currency::default()))
    }

    /// Whether the bag panel is visible.
    pub fn is_open(&self) -> bool {
        self.cart.try_with(Cart::is_open).unwrap_or(false)
    }

    /// Bag footer figures under a shipping policy.
    pub fn summary(&self, policy: &ShippingPolicy) -> CartSummary {
        self.cart
            .try_with(|cart| cart.summary(policy))
            .unwrap_or_else(|| Cart::new().summary(policy))
    }

    /// A copy of the whole cart.
    pub fn snapshot(&self) -> Cart {
        self.cart.try_get().unwrap_or_default()
    }

    /// The most recent mutation, for toasts and announcements.
    pub fn last_event(&self) -> Option<CartEvent> {
        self.last_event.try_get().flatten()
    }

    /// Read-only view of the cart signal, for memos and effects.
    pub fn signal(&self) -> ReadSignal<Cart> {
        self.cart.read_only()
    }

    fn record(&self, event: CartEvent) {
        let _ = self.last_event.try_set(Some(event));
    }
}

/// Create the session's cart and provide it to every descendant.
pub fn provide_cart() -> CartContext {
    provide_cart_with(Cart::new())
}

/// Like [`provide_cart`], starting from an existing cart.
pub fn provide_cart_with(cart: Cart) -> CartContext {
    let context = CartContext::new(cart);
    provide_context(context);
    info!(session = %context.session_id(), "cart session started");
    context
}

/// The session's cart, or [`StorefrontError::MissingCartContext`] when no
/// ancestor called [`provide_cart`].
pub fn try_use_cart() -> Result<CartContext, StorefrontError> {
    use_context::<CartContext>().ok_or(StorefrontError::MissingCartContext)
}

/// The session's cart.
///
/// # Panics
/// Panics when no ancestor called [`provide_cart`]. That is a wiring mistake,
/// not something to recover from.
pub fn use_cart() -> CartContext {
    match try_use_cart() {
        Ok(cart) => cart,
        Err(_) => panic!("use_cart must be called under a session that called provide_cart"),
    }
}

/// A reactive owner with a cart already provided.
///
/// Dropping the session disposes the cart.
pub struct Session {
    owner: Owner,
    cart: CartContext,
}

impl Session {
    /// Start a session with an empty cart.
    pub fn start() -> Self {
        Self::start_with(Cart::new())
    }

    /// Start a session from an existing cart.
    pub fn start_with(cart: Cart) -> Self {
        let owner = Owner::new();
        let cart = owner.with(|| provide_cart_with(cart));
        Self { owner, cart }
    }

    /// Run `f` inside the session, where [`use_cart`] resolves.
    pub fn run<T>(&self, f: impl FnOnce() -> T) -> T {
        self.owner.with(f)
    }

    /// The session's cart handle.
    pub fn cart(&self) -> CartContext {
        self.cart
    }
}
