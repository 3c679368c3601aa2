use opentelemetry::{KeyValue, global, trace::TracerProvider as _};
use opentelemetry_otlp::{MetricExporter, SpanExporter, WithExportConfig, WithTonicConfig};
use opentelemetry_sdk::{
    Resource,
    metrics::{PeriodicReader, SdkMeterProvider},
    propagation::TraceContextPropagator,
    trace::{RandomIdGenerator, Sampler, SdkTracerProvider},
};
use opentelemetry_semantic_conventions::{SCHEMA_URL, attribute::SERVICE_VERSION};
use time::macros::format_description;
use tracing::Level;
use tracing_opentelemetry::{MetricsLayer, OpenTelemetryLayer};
use tracing_subscriber::{
    EnvFilter, Layer, fmt::time::LocalTime, layer::SubscriberExt, util::SubscriberInitExt,
};

use crate::factories::observability::{
    Observability, ObservabilityConfig, error::ObservabilityError,
};

impl Drop for Observability {
    fn drop(&mut self) {
        if let Some(tracer_provider) = &self.tracer_provider
            && let Err(err) = tracer_provider.shutdown()
        {
            eprintln!("{err:?}");
        }
        if let Some(meter_provider) = &self.meter_provider
            && let Err(err) = meter_provider.shutdown()
        {
            eprintln!("{err:?}");
        }
    }
}

impl Observability {
    /// Install the global tracing subscriber. The returned guard must be held
    /// for the lifetime of the process.
    pub fn init(
        cargo_crate_name: &str,
        cargo_pkg_version: &str,
        cfg: &ObservabilityConfig,
    ) -> Result<Observability, ObservabilityError> {
        let (tracer_provider, meter_provider) = match cfg.otel_exporter_otlp_endpoint.as_deref() {
            Some(endpoint) => {
                global::set_text_map_propagator(TraceContextPropagator::new());

                let resource = Self::get_resource(cargo_crate_name, cargo_pkg_version);
                let tracer_provider = Self::init_tracer_provider(resource.clone(), endpoint)?;
                let meter_provider = Self::init_meter_provider(resource, endpoint)?;

                (Some(tracer_provider), Some(meter_provider))
            }
            None => (None, None),
        };

        let open_telemetry_layer = tracer_provider
            .as_ref()
            .map(|provider| OpenTelemetryLayer::new(provider.tracer("tracing-otel-subscriber")));
        let metrics_layer = meter_provider
            .as_ref()
            .map(|provider| MetricsLayer::new(provider.clone()));

        let env_filter = Self::env_filter(cfg)?;

        // Stdout
        let timer = LocalTime::new(format_description!(
            "[year]-[month]-[day] [hour]:[minute]:[second]"
        ));

        let fmt_layer = if cfg.log_format.as_deref() == Some("pretty") {
            tracing_subscriber::fmt::layer()
                .with_ansi(true)
                .with_timer(timer)
                .with_target(false)
                .with_file(cfg.with_file.unwrap_or(true))
                .with_line_number(cfg.with_line_number.unwrap_or(true))
                .compact()
                .boxed()
        } else {
            tracing_subscriber::fmt::layer()
                .with_timer(timer)
                .with_target(false)
                .with_file(cfg.with_file.unwrap_or(true))
                .with_line_number(cfg.with_line_number.unwrap_or(true))
                .json()
                .flatten_event(true)
                .with_span_list(false)
                .boxed()
        };

        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .with(metrics_layer)
            .with(open_telemetry_layer)
            .try_init()?;

        Ok(Observability {
            tracer_provider,
            meter_provider,
        })
    }

    /// `rust_log` wins, then `RUST_LOG`, then `tracing_level`.
    pub fn env_filter(cfg: &ObservabilityConfig) -> Result<EnvFilter, ObservabilityError> {
        if let Some(rust_log) = cfg.rust_log.as_deref() {
            return Ok(EnvFilter::try_new(rust_log)?);
        }

        let level = Self::tracing_level(cfg.tracing_level.as_deref());

        Ok(EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(level.as_str().to_lowercase())))
    }

    pub fn tracing_level(tracing_level: Option<&str>) -> Level {
        match tracing_level {
            Some("TRACE") => Level::TRACE,
            Some("DEBUG") => Level::DEBUG,
            Some("WARN") => Level::WARN,
            Some("ERROR") => Level::ERROR,
            _ => Level::INFO,
        }
    }

    fn get_resource(cargo_crate_name: &str, cargo_pkg_version: &str) -> Resource {
        Resource::builder()
            .with_service_name(cargo_crate_name.to_string())
            .with_schema_url(
                [KeyValue::new(
                    SERVICE_VERSION,
                    cargo_pkg_version.to_string(),
                )],
                SCHEMA_URL,
            )
            .build()
    }

    // Construct TracerProvider for OpenTelemetryLayer
    fn init_tracer_provider(
        resource: Resource,
        otel_exporter_otlp_endpoint: &str,
    ) -> Result<SdkTracerProvider, ObservabilityError> {
        let trace_exporter = SpanExporter::builder()
            .with_tonic()
            .with_endpoint(otel_exporter_otlp_endpoint)
            .with_compression(opentelemetry_otlp::Compression::Gzip)
            .build()?;

        let tracer_provider = SdkTracerProvider::builder()
            .with_id_generator(RandomIdGenerator::default())
            .with_batch_exporter(trace_exporter)
            .with_sampler(Sampler::AlwaysOn)
            .with_resource(resource)
            .build();

        global::set_tracer_provider(tracer_provider.clone());

        Ok(tracer_provider)
    }

    // Construct MeterProvider for MetricsLayer
    fn init_meter_provider(
        resource: Resource,
        otel_exporter_otlp_endpoint: &str,
    ) -> Result<SdkMeterProvider, ObservabilityError> {
        let metric_exporter = MetricExporter::builder()
            .with_tonic()
            .with_endpoint(otel_exporter_otlp_endpoint)
            .with_compression(opentelemetry_otlp::Compression::Gzip)
            .build()?;

        let reader = PeriodicReader::builder(metric_exporter)
            .with_interval(std::time::Duration::from_secs(30))
            .build();

        let meter_provider = SdkMeterProvider::builder()
            .with_resource(resource)
            .with_reader(reader)
            .build();

        global::set_meter_provider(meter_provider.clone());

        Ok(meter_provider)
    }
}
