//! Submit one registration and print what the registry answered.

use clap::Parser;

use registry_core::{ClientConfig, HttpTransport, Registration, RegistryClient, Transport};

#[derive(Parser)]
#[command(name = "register", about = "Submit a registration to the registry", version)]
struct Cli {
    /// Registry base URL. Defaults to $REGISTRY_BASE_URL, then http://127.0.0.1:3000.
    #[arg(long)]
    base_url: Option<String>,

    /// Value sent as `firstName`.
    #[arg(long)]
    first_name: String,

    /// Value sent as `registryMessage`.
    #[arg(short, long)]
    message: String,

    /// Post to the unserved `/register-error` endpoint instead.
    #[arg(long)]
    error_endpoint: bool,

    /// Log level (trace, debug, info, warn, error).
    #[arg(long, default_value = "warn")]
    log_level: String,
}

impl Cli {
    /// `--base-url` wins over the environment.
    fn config(&self, lookup: impl Fn(&str) -> Option<String>) -> ClientConfig {
        match &self.base_url {
            Some(base_url) => ClientConfig {
                base_url: base_url.clone(),
            },
            None => ClientConfig::from_lookup(lookup),
        }
    }
}

async fn run<T: Transport>(cli: &Cli, config: &ClientConfig, transport: &T) -> String {
    let client = RegistryClient::from_config(config);
    let registration = Registration::new(cli.first_name.as_str(), cli.message.as_str());

    if cli.error_endpoint {
        client.register_error(transport, &registration).await
    } else {
        client.register(transport, &registration).await
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    let config = cli.config(|key| std::env::var(key).ok());
    let value = run(&cli, &config, &HttpTransport::new()).await;
    println!("{value}");
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use registry_core::config::{BASE_URL_VAR, DEFAULT_BASE_URL};
    use registry_core::{ApiError, HttpRequest, HttpResponse};

    use super::*;

    /// Serves `/register` under any host; everything else is 404.
    #[derive(Default)]
    struct Registry {
        paths: Mutex<Vec<String>>,
    }

    impl Transport for Registry {
        async fn send(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
            let registered = request.path.ends_with("/register");
            self.paths.lock().unwrap().push(request.path);
            let (status, body) = if registered {
                (200, r#"{"message":"Ada added: hello"}"#)
            } else {
                (404, "Not Found")
            };
            Ok(HttpResponse {
                status,
                headers: Vec::new(),
                body: body.to_string(),
            })
        }
    }

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(["register"].iter().chain(args).copied()).unwrap()
    }

    fn env_base_url(key: &str) -> Option<String> {
        (key == BASE_URL_VAR).then(|| "http://from-env:9000".to_string())
    }

    #[test]
    fn base_url_flag_overrides_environment() {
        let cli = parse(&["--first-name", "Ada", "-m", "hello", "--base-url", "http://flag:1"]);
        assert_eq!(cli.config(env_base_url).base_url, "http://flag:1");
    }

    #[test]
    fn environment_used_without_flag() {
        let cli = parse(&["--first-name", "Ada", "--message", "hello"]);
        assert_eq!(cli.config(env_base_url).base_url, "http://from-env:9000");
        assert_eq!(cli.config(|_| None).base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn first_name_and_message_are_required() {
        assert!(Cli::try_parse_from(["register", "--first-name", "Ada"]).is_err());
        assert!(Cli::try_parse_from(["register", "-m", "hello"]).is_err());
    }

    #[tokio::test]
    async fn default_endpoint_prints_message() {
        let cli = parse(&["--first-name", "Ada", "-m", "hello", "--base-url", "http://flag:1"]);
        let transport = Registry::default();

        let value = run(&cli, &cli.config(|_| None), &transport).await;

        assert_eq!(value, "Ada added: hello");
        assert_eq!(*transport.paths.lock().unwrap(), vec!["http://flag:1/register".to_string()]);
    }

    #[tokio::test]
    async fn error_endpoint_flag_prints_fallback() {
        let cli = parse(&["--first-name", "Ada", "-m", "hello", "--error-endpoint"]);
        let transport = Registry::default();

        let value = run(&cli, &cli.config(env_base_url), &transport).await;

        assert_eq!(value, ":(");
        assert_eq!(
            *transport.paths.lock().unwrap(),
            vec!["http://from-env:9000/register-error".to_string()]
        );
    }
}
