use axum::{
	error_handling::HandleErrorLayer,
	http::{Method, StatusCode, Uri},
	BoxError, Router, Server,
};
use console::style;
use derive_more::Display;
use eyre::{Report, Result};
use hyper::server::{accept::Accept, conn::AddrIncoming};
use log::info;
use std::{
	net::SocketAddr,
	pin::Pin,
	sync::Arc,
	task::{Context, Poll},
	time::Duration,
};
use tokio::signal;
use tower::ServiceBuilder;

use crate::{errors::ServerError, handlers, ServerResult};
use camelback_common::{progress, progress::Step, AppError, Settings};

pub fn start(settings: Arc<Settings>) -> Result<()> {
	tokio::runtime::Builder::new_multi_thread().enable_all().build()?.block_on(serve(settings))
}

pub async fn serve(settings: Arc<Settings>) -> Result<()> {
	let app = wrap_router(handlers::get_routes(), Duration::from_secs(settings.server.timeout));

	let ipv4 = SocketAddr::new(settings.server.ip_v4.parse()?, settings.server.port);
	if settings.server.ip_v6.is_empty() {
		let server = match Server::try_bind(&ipv4) {
			Ok(server) => server,
			Err(e) => progress::quit(AppError::ServerStartup {
				url: ipv4.to_string(),
				error: e.to_string(),
			}),
		};

		progress::show(Step::Listening(style(ipv4).bold().to_string()));
		server.serve(app.into_make_service()).with_graceful_shutdown(shutdown_signal()).await?;
	} else {
		let ipv6 = SocketAddr::new(settings.server.ip_v6.parse()?, settings.server.port);

		let listeners = CombinedIncoming { a: bind(ipv4), b: bind(ipv6) };

		progress::show(Step::Listening(format!(
			"{} & {}",
			style(ipv4).bold(),
			style(ipv6).bold()
		)));

		Server::builder(listeners)
			.serve(app.into_make_service())
			.with_graceful_shutdown(shutdown_signal())
			.await?;
	}

	Ok(())
}

pub fn wrap_router(router: Router, timeout: Duration) -> Router {
	async fn handle_404() -> ServerResult<StatusCode> {
		Err(ServerError::NotFound)
	}

	async fn handle_timeout_error(
		method: Method,
		uri: Uri,
		_err: BoxError,
	) -> ServerResult<StatusCode> {
		Err(ServerError::Internal { error: Report::msg(format!("`{method} {uri}` timed out")) })
	}

	router.fallback(handle_404).layer(
		ServiceBuilder::new().layer(HandleErrorLayer::new(handle_timeout_error)).timeout(timeout),
	)
}

fn bind(addr: SocketAddr) -> AddrIncoming {
	match AddrIncoming::bind(&addr) {
		Ok(incoming) => incoming,
		Err(e) => progress::quit(AppError::ServerStartup {
			url: addr.to_string(),
			error: e.to_string(),
		}),
	}
}

struct CombinedIncoming {
	a: AddrIncoming,
	b: AddrIncoming,
}

impl Accept for CombinedIncoming {
	type Conn = <AddrIncoming as Accept>::Conn;
	type Error = <AddrIncoming as Accept>::Error;

	fn poll_accept(
		mut self: Pin<&mut Self>,
		cx: &mut Context<'_>,
	) -> Poll<Option<Result<Self::Conn, Self::Error>>> {
		if let Poll::Ready(Some(value)) = Pin::new(&mut self.a).poll_accept(cx) {
			return Poll::Ready(Some(value));
		}

		if let Poll::Ready(Some(value)) = Pin::new(&mut self.b).poll_accept(cx) {
			return Poll::Ready(Some(value));
		}

		Poll::Pending
	}
}

async fn shutdown_signal() {
	let ctrl_c = async {
		if signal::ctrl_c().await.is_err() {
			progress::quit(AppError::SignalHandler);
		}
	};

	#[cfg(unix)]
	let terminate = async {
		match signal::unix::signal(signal::unix::SignalKind::terminate()) {
			Ok(mut signal) => {
				signal.recv().await;
			}
			_ => progress::quit(AppError::SignalHandler),
		};
	};

	#[cfg(not(unix))]
	let terminate = std::future::pending::<()>();

	let received = tokio::select! {
		_ = ctrl_c => ShutdownSignal::Interrupt,
		_ = terminate => ShutdownSignal::Terminate,
	};

	info!("");
	info!("{received} received; bye 👋");
}

#[derive(Debug, Display, Clone, Copy, PartialEq, Eq)]
enum ShutdownSignal {
	#[display(fmt = "SIGINT")]
	Interrupt,
	#[display(fmt = "SIGTERM")]
	Terminate,
}
