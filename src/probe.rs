use colored::Color;
use log::debug;
use reqwest::header::AUTHORIZATION;
use reqwest::{Client, Method, StatusCode, Url};

use crate::cli_ui;
use crate::config::Config;
use crate::error::Error;

/// The fixed probe order, one request per method
pub const METHODS: [Method; 9] = [
    Method::GET,
    Method::HEAD,
    Method::POST,
    Method::PUT,
    Method::PATCH,
    Method::DELETE,
    Method::CONNECT,
    Method::OPTIONS,
    Method::TRACE,
];

/// Probe the target with every method in order, printing one line per probe.
///
/// The first construction or transport failure aborts the whole sequence:
/// remaining methods are not attempted.
pub async fn run(config: &Config) -> Result<(), Error> {
    let target = Url::parse(&config.host)?;
    let client = Client::new();

    for method in METHODS.iter() {
        let status = probe_one(
            &client,
            method.clone(),
            target.clone(),
            config.auth.as_deref(),
        )
        .await?;
        cli_ui::print_probe_line(method, status);
    }

    Ok(())
}

/// One request/response cycle. The response body is never read; dropping the
/// response releases the connection.
pub async fn probe_one(
    client: &Client,
    method: Method,
    target: Url,
    auth: Option<&str>,
) -> Result<StatusCode, Error> {
    debug!("probing {} {}", method, target);

    let mut request = client.request(method, target);
    if let Some(auth) = auth {
        request = request.header(AUTHORIZATION, auth);
    }

    let response = request.send().await?;
    Ok(response.status())
}

/// Map a status code to its display color: 2xx green, 3xx cyan, 4xx yellow,
/// everything else red.
pub fn status_color(status: StatusCode) -> Color {
    match status.as_u16() {
        200..=299 => Color::Green,
        300..=399 => Color::Cyan,
        400..=499 => Color::Yellow,
        _ => Color::Red,
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn color_of(code: u16) -> Color {
        status_color(StatusCode::from_u16(code).unwrap())
    }

    #[test]
    fn method_order_is_fixed() {
        let names: Vec<&str> = METHODS.iter().map(|m| m.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "GET", "HEAD", "POST", "PUT", "PATCH", "DELETE", "CONNECT", "OPTIONS", "TRACE"
            ]
        );
    }

    #[test]
    fn status_bands() {
        assert_eq!(color_of(204), Color::Green);
        assert_eq!(color_of(301), Color::Cyan);
        assert_eq!(color_of(404), Color::Yellow);
        assert_eq!(color_of(500), Color::Red);
    }

    #[test]
    fn status_band_boundaries() {
        assert_eq!(color_of(199), Color::Red);
        assert_eq!(color_of(200), Color::Green);
        assert_eq!(color_of(299), Color::Green);
        assert_eq!(color_of(300), Color::Cyan);
        assert_eq!(color_of(399), Color::Cyan);
        assert_eq!(color_of(400), Color::Yellow);
        assert_eq!(color_of(499), Color::Yellow);
        assert_eq!(color_of(599), Color::Red);
    }

    #[test]
    fn invalid_target_fails_before_any_request() {
        let config = Config {
            host: "not a url".to_string(),
            auth: None,
            verbose: false,
        };
        let rt = tokio::runtime::Builder::new_current_thread()
            .enable_all()
            .build()
            .unwrap();
        let result = rt.block_on(run(&config));
        assert!(matches!(result, Err(Error::InvalidTarget(_))));
    }
}
