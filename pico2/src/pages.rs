//! Pages served by the web workers.
//!
//! # Routes
//!
//! - [`Route::Index`]: landing page with a link to the data dump
//! - [`Route::Csv`]: latest fine/coarse voltages as CSV text
//!
//! Any other path is answered by [`Page::not_found`]. A page that outgrows
//! its buffer is answered with [`Status::InternalError`] instead of a
//! truncated body.

use core::fmt;

use debris_common::WearChannels;
use debris_common::config::{CSV_CAPACITY, HTML_CAPACITY};
use debris_common::render::{CSV_LINK, render_csv, render_index_page};
use heapless::String;

/// Body sent for unknown paths.
pub const NOT_FOUND_BODY: &str = "Not found";

/// Body sent when rendering failed.
pub const RENDER_FAILED_BODY: &str = "Internal server error";

/// `Content-Type` of the fixed error bodies.
const TEXT_PLAIN: &str = "text/plain";

/// Pages known to the web server.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Route {
    /// `/`, HTML landing page.
    Index,
    /// `/csv`, plain-text CSV dump.
    Csv,
}

impl Route {
    /// Path this route is registered under.
    pub const fn path(self) -> &'static str {
        match self {
            Self::Index => "/",
            Self::Csv => CSV_LINK,
        }
    }

    /// `Content-Type` of the response body.
    pub const fn content_type(self) -> &'static str {
        match self {
            Self::Index => "text/html",
            Self::Csv => TEXT_PLAIN,
        }
    }
}

/// Response status of a [`Page`].
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum Status {
    Ok,
    NotFound,
    InternalError,
}

impl Status {
    pub const fn code(self) -> u16 {
        match self {
            Self::Ok => 200,
            Self::NotFound => 404,
            Self::InternalError => 500,
        }
    }
}

/// Page body, either rendered on request or fixed.
#[derive(Debug)]
pub enum Body<const N: usize> {
    Rendered(String<N>),
    Static(&'static str),
}

impl<const N: usize> Body<N> {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Rendered(s) => s.as_str(),
            Self::Static(s) => s,
        }
    }
}

/// Complete response: status, content type and body.
#[derive(Debug)]
pub struct Page<const N: usize> {
    status: Status,
    content_type: &'static str,
    body: Body<N>,
}

impl<const N: usize> Page<N> {
    /// 200 with the rendered body, or 500 when rendering overflowed.
    pub fn from_render(
        route: Route,
        rendered: Result<String<N>, fmt::Error>,
    ) -> Self {
        match rendered {
            Ok(body) => Self {
                status: Status::Ok,
                content_type: route.content_type(),
                body: Body::Rendered(body),
            },
            Err(fmt::Error) => Self {
                status: Status::InternalError,
                content_type: TEXT_PLAIN,
                body: Body::Static(RENDER_FAILED_BODY),
            },
        }
    }

    /// 404 for a path no route matched.
    pub const fn not_found() -> Self {
        Self {
            status: Status::NotFound,
            content_type: TEXT_PLAIN,
            body: Body::Static(NOT_FOUND_BODY),
        }
    }

    pub const fn status(&self) -> Status { self.status }

    pub const fn content_type(&self) -> &'static str { self.content_type }

    pub fn body(&self) -> &str { self.body.as_str() }
}

/// Landing page.
pub fn index_page() -> Page<HTML_CAPACITY> { Page::from_render(Route::Index, render_index_page()) }

/// CSV dump of the latest voltages.
pub fn csv_page(channels: &WearChannels) -> Page<CSV_CAPACITY> { Page::from_render(Route::Csv, render_csv(channels)) }

// =============================================================================
// Unit Tests
// =============================================================================
