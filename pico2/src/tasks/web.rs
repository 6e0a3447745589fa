//! HTTP workers serving the landing page and the CSV dump.
//!
//! Each worker owns one TCP socket and builds its own router; routes are
//! zero-sized so this costs nothing. Pages come from [`crate::pages`]; this
//! module only adapts them to picoserve.

use debris_common::WearChannels;
use defmt::{info, warn};
use embassy_net::Stack;
use embassy_time::Duration;
use picoserve::request::{Path, Request};
use picoserve::response::{Content, IntoResponse, ResponseWriter, StatusCode};
use picoserve::routing::{PathRouterService, get};

use crate::config::{
    HTTP_BUFFER_SIZE,
    HTTP_PORT,
    PERSISTENT_READ_TIMEOUT_MS,
    READ_TIMEOUT_MS,
    START_READ_TIMEOUT_MS,
    TCP_RX_BUFFER_SIZE,
    TCP_TX_BUFFER_SIZE,
    WEB_TASK_POOL_SIZE,
    WRITE_TIMEOUT_MS,
};
use crate::pages::{Page, Route, Status, csv_page, index_page};

// =============================================================================
// Responses
// =============================================================================

/// [`Page`] as a picoserve body.
struct PageContent<const N: usize>(Page<N>);

impl<const N: usize> Content for PageContent<N> {
    fn content_type(&self) -> &'static str { self.0.content_type() }

    fn content_length(&self) -> usize { self.0.body().len() }

    async fn write_content<W: picoserve::io::Write>(
        self,
        mut writer: W,
    ) -> Result<(), W::Error> {
        writer.write_all(self.0.body().as_bytes()).await
    }
}

fn status_code(status: Status) -> StatusCode {
    match status {
        Status::Ok => StatusCode::OK,
        Status::NotFound => StatusCode::NOT_FOUND,
        Status::InternalError => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn respond<const N: usize>(
    route: Route,
    page: Page<N>,
) -> (StatusCode, PageContent<N>) {
    if page.status() == Status::InternalError {
        warn!("{} page overflowed its buffer", route.path());
    }
    (status_code(page.status()), PageContent(page))
}

/// Answers every unrouted path with 404.
struct NotFound;

impl PathRouterService<()> for NotFound {
    async fn call_request_handler_service<R: picoserve::io::Read, W: ResponseWriter<Error = R::Error>>(
        &self,
        _state: &(),
        _current_path_parameters: (),
        _path: Path<'_>,
        request: Request<'_, R>,
        response_writer: W,
    ) -> Result<picoserve::ResponseSent, W::Error> {
        let page = Page::<0>::not_found();
        (status_code(page.status()), PageContent(page))
            .write_to(request.body_connection.finalize().await?, response_writer)
            .await
    }
}

// =============================================================================
// Server
// =============================================================================

fn server_config() -> picoserve::Config<Duration> {
    picoserve::Config::new(picoserve::Timeouts {
        start_read_request: Some(Duration::from_millis(START_READ_TIMEOUT_MS)),
        persistent_start_read_request: Some(Duration::from_millis(PERSISTENT_READ_TIMEOUT_MS)),
        read_request: Some(Duration::from_millis(READ_TIMEOUT_MS)),
        write: Some(Duration::from_millis(WRITE_TIMEOUT_MS)),
    })
    .keep_connection_alive()
}

#[embassy_executor::task(pool_size = WEB_TASK_POOL_SIZE)]
pub async fn web_task(
    id: usize,
    stack: Stack<'static>,
    channels: &'static WearChannels,
) -> ! {
    let app = picoserve::Router::from_service(NotFound)
        .route(
            Route::Index.path(),
            get(|| async { respond(Route::Index, index_page()) }),
        )
        .route(
            Route::Csv.path(),
            get(move || async move { respond(Route::Csv, csv_page(channels)) }),
        );
    let config = server_config();

    let mut tcp_rx_buffer = [0; TCP_RX_BUFFER_SIZE];
    let mut tcp_tx_buffer = [0; TCP_TX_BUFFER_SIZE];
    let mut http_buffer = [0; HTTP_BUFFER_SIZE];

    loop {
        let mut socket = embassy_net::tcp::TcpSocket::new(stack, &mut tcp_rx_buffer, &mut tcp_tx_buffer);

        info!("Web worker {}: listening on TCP:{}", id, HTTP_PORT);
        if let Err(err) = socket.accept(HTTP_PORT).await {
            warn!("Web worker {}: accept error: {}", id, err);
            continue;
        }

        let remote = socket.remote_endpoint();
        info!("Web worker {}: connection from {}", id, remote);

        match picoserve::serve(&app, &config, &mut http_buffer, socket).await {
            Ok(handled) => info!("Web worker {}: {} requests handled from {}", id, handled, remote),
            Err(err) => warn!("Web worker {}: {}", id, defmt::Debug2Format(&err)),
        }
    }
}
