use crate::{WikiEntry, WikiQuery, WikiResult};
use opentelemetry::trace::Status;
use std::time::Instant;
use tracing::{info_span, Span};
use tracing_futures::Instrument;
use tracing_opentelemetry::OpenTelemetrySpanExt;

pub struct FetchSpan {
    span: Span,
    start_time: Instant,
    entry_name: Option<String>,
    module_count: Option<usize>,
    ended: bool,
}

impl FetchSpan {
    pub fn new(backend: &str, route: &str, query: &WikiQuery) -> Self {
        let span = info_span!("hoyowiki.fetch");
        span.set_attribute("hoyowiki.backend", backend.to_string());
        span.set_attribute("hoyowiki.route", route.to_string());
        span.set_attribute("hoyowiki.wiki", query.wiki.as_str());
        span.set_attribute("hoyowiki.entry_id", query.id.clone());

        Self {
            span,
            start_time: Instant::now(),
            entry_name: None,
            module_count: None,
            ended: false,
        }
    }

    fn span(&self) -> Span {
        self.span.clone()
    }

    pub async fn instrument_future<F>(&self, future: F) -> F::Output
    where
        F: std::future::Future,
    {
        future.instrument(self.span()).await
    }

    pub fn on_entry(&mut self, entry: &WikiEntry) {
        self.entry_name = Some(entry.name.clone());
        self.module_count = Some(entry.content.modules.len());
    }

    pub fn on_error(&mut self, error: &(dyn std::error::Error + 'static)) {
        self.span
            .set_attribute("exception.message", error.to_string());
        self.span.set_status(Status::error(error.to_string()));
    }

    pub fn on_end(&mut self) {
        if self.ended {
            return;
        }
        self.ended = true;

        if let Some(entry_name) = self.entry_name.take() {
            self.span.set_attribute("hoyowiki.entry_name", entry_name);
        }
        if let Some(module_count) = self.module_count {
            self.span.set_attribute(
                "hoyowiki.module_count",
                i64::try_from(module_count).unwrap_or(i64::MAX),
            );
        }
        self.span.set_attribute(
            "hoyowiki.duration_seconds",
            self.start_time.elapsed().as_secs_f64(),
        );
    }
}

impl Drop for FetchSpan {
    fn drop(&mut self) {
        self.on_end();
    }
}

pub async fn trace_fetch<F, Fut>(
    backend: &str,
    route: &str,
    query: &WikiQuery,
    f: F,
) -> WikiResult<WikiEntry>
where
    F: FnOnce() -> Fut,
    Fut: std::future::Future<Output = WikiResult<WikiEntry>>,
{
    let mut span = FetchSpan::new(backend, route, query);
    let result = span.instrument_future(f()).await;

    match &result {
        Ok(entry) => span.on_entry(entry),
        Err(error) => span.on_error(error),
    }

    span.on_end();
    result
}
