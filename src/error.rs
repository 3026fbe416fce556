//! Error types for mounting the landing page

use thiserror::Error;
#[cfg(target_arch = "wasm32")]
use wasm_bindgen::JsCast;

/// Result type alias for landing page operations
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while mounting or driving the page
#[derive(Error, Debug)]
pub enum Error {
    /// A required element is absent from the host markup
    #[error("element not found: {0}")]
    MissingElement(String),

    /// The element exists but is not of the expected kind
    #[error("element {selector} is not a {expected}")]
    UnexpectedElement {
        selector: String,
        expected: &'static str,
    },

    /// The canvas could not provide a WebGL2 context
    #[error("WebGL2 not supported")]
    WebGlUnavailable,

    /// Shader failed to compile
    #[error("shader compilation failed: {0}")]
    Shader(String),

    /// Program failed to link, or a GL object could not be created
    #[error("program setup failed: {0}")]
    Program(String),

    /// Configuration parsed but holds values outside their range
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Configuration is not valid JSON for the expected shape
    #[error("configuration could not be parsed: {0}")]
    ConfigParse(#[from] serde_json::Error),

    /// Testimonial payload could not be decoded
    #[error("testimonials could not be decoded: {0}")]
    Testimonials(String),

    /// Exception raised by a browser API
    #[error("{0}")]
    Js(String),
}

#[cfg(target_arch = "wasm32")]
impl From<wasm_bindgen::JsValue> for Error {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        let message = value
            .dyn_ref::<js_sys::Error>()
            .map(|err| String::from(err.message()))
            .or_else(|| value.as_string())
            .unwrap_or_else(|| format!("{:?}", value));
        Error::Js(message)
    }
}

#[cfg(target_arch = "wasm32")]
impl From<Error> for wasm_bindgen::JsValue {
    fn from(err: Error) -> Self {
        js_sys::Error::new(&err.to_string()).into()
    }
}
