//! Reactive cart session and storefront state for APRIL.
//!
//! The cart lives in one [`CartContext`] per session, provided through the
//! Leptos context tree and read by every section of the page:
//!
//! - [`provide_cart`] / [`use_cart`] / [`try_use_cart`] - the shared-state access point
//! - [`Session`] - a reactive owner with a cart already provided
//! - [`AddToBag`] - the featured product's delayed add-to-bag button
//! - [`Carousel`] - index state for the collections and brand-story carousels
//! - [`ScopedTask`] - timers that are cancelled when their owner is dropped
//!
//! Timers run on tokio, so anything that spawns one must be called from
//! inside a tokio runtime.

mod carousel;
mod config;
mod content;
mod context;
mod error;
mod featured;
mod task;

pub use carousel::Carousel;
pub use config::{FeaturedConfig, StorefrontConfig, TimerConfig};
pub use content::{brand_stories, BrandStory};
pub use context::{provide_cart, provide_cart_with, try_use_cart, use_cart, CartContext, CartEvent, Session};
pub use error::StorefrontError;
pub use featured::{AddToBag, AddToBagPhase};
pub use task::ScopedTask;
