//! JSON parsing for the loader.

use serde_json::Value;

/// Turns config file text into a JSON value.
pub trait ParseJson {
    type Error: std::error::Error + Send + Sync + 'static;

    fn parse(&self, text: &str) -> Result<Value, Self::Error>;
}

impl<P: ParseJson + ?Sized> ParseJson for &P {
    type Error = P::Error;

    fn parse(&self, text: &str) -> Result<Value, Self::Error> {
        (**self).parse(text)
    }
}

/// Zero-sized type that delegates to `serde_json`.
#[derive(Debug, Clone, Copy, Default)]
pub struct SerdeJson;

impl ParseJson for SerdeJson {
    type Error = serde_json::Error;

    #[inline]
    fn parse(&self, text: &str) -> Result<Value, Self::Error> {
        serde_json::from_str(text)
    }
}
