/**
 * Flash Redirects
 *
 * Form endpoints answer with `303 See Other` to `/` and attach a one-shot
 * message for the next page. The server keeps no session, so the message
 * travels in two response headers:
 *
 * - `x-flash-category` - `success` or `danger`
 * - `x-flash-message` - the text to show
 */

use axum::http::{HeaderName, HeaderValue};
use axum::response::{IntoResponse, Redirect, Response};

/// Header carrying the flash category
pub const FLASH_CATEGORY_HEADER: HeaderName = HeaderName::from_static("x-flash-category");

/// Header carrying the flash message
pub const FLASH_MESSAGE_HEADER: HeaderName = HeaderName::from_static("x-flash-message");

/// Where flash redirects point
pub const REDIRECT_TARGET: &str = "/";

/// Flash category
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlashCategory {
    Success,
    Danger,
}

impl FlashCategory {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Danger => "danger",
        }
    }
}

/// A redirect to `/` carrying a flash message
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Flash {
    pub category: FlashCategory,
    pub message: String,
}

impl Flash {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            category: FlashCategory::Success,
            message: message.into(),
        }
    }

    pub fn danger(message: impl Into<String>) -> Self {
        Self {
            category: FlashCategory::Danger,
            message: message.into(),
        }
    }
}

impl IntoResponse for Flash {
    fn into_response(self) -> Response {
        let mut response = Redirect::to(REDIRECT_TARGET).into_response();
        let headers = response.headers_mut();
        headers.insert(
            FLASH_CATEGORY_HEADER,
            HeaderValue::from_static(self.category.as_str()),
        );
        match HeaderValue::from_str(&self.message) {
            Ok(value) => {
                headers.insert(FLASH_MESSAGE_HEADER, value);
            }
            Err(e) => tracing::error!("Flash message is not a valid header value: {}", e),
        }
        response
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::{header::LOCATION, StatusCode};

    #[test]
    fn test_flash_is_see_other_to_home() {
        let response = Flash::success("Post created successfully!").into_response();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        assert_eq!(response.headers()[LOCATION], "/");
        assert_eq!(response.headers()[FLASH_CATEGORY_HEADER], "success");
        assert_eq!(
            response.headers()[FLASH_MESSAGE_HEADER],
            "Post created successfully!"
        );
    }

    #[test]
    fn test_danger_category() {
        let response = Flash::danger("Post not found.").into_response();
        assert_eq!(response.headers()[FLASH_CATEGORY_HEADER], "danger");
    }
}
