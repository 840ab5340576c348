//! Storefront error types.

use april_commerce::CommerceError;
use thiserror::Error;

/// Errors raised by the storefront session layer.
#[derive(Error, Debug)]
pub enum StorefrontError {
    /// The cart was read outside a session that provided one.
    #[error("no cart in context: call provide_cart before use_cart")]
    MissingCartContext,

    /// The session owning the cart has been torn down.
    #[error("cart session has ended")]
    SessionClosed,

    /// A size the product is not offered in.
    #[error("{product} is not offered in size {size}")]
    UnknownSize { product: String, size: String },

    /// Carousel index past the last slide.
    #[error("slide {index} is out of range (carousel has {len})")]
    SlideOutOfRange { index: usize, len: usize },

    /// Invalid configuration value.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// Error from the commerce layer.
    #[error(transparent)]
    Commerce(#[from] CommerceError),
}
