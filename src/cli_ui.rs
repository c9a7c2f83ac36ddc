use colored::Colorize;
use reqwest::{Method, StatusCode};

use crate::probe;

const BANNER: &str = r#"
             _   _            _
   _ __  ___| |_| |_  ___  __| |___ __ __ _ _ _
  | '  \/ -_)  _| ' \/ _ \/ _` (_-</ _/ _` | ' \
  |_|_|_\___|\__|_||_\___/\__,_/__/\__\__,_|_||_|

           ---------------------------
            which methods answer back
           ---------------------------
"#;

pub fn print_banner() {
    println!();
    println!("{}", BANNER.green());
    println!();
}

pub fn print_host(host: &str) {
    println!("[+] Host: {}", host.yellow());
}

/// One output line: `<METHOD> <status-code> <reason>`. The reason phrase is
/// empty for non-standard codes.
pub fn probe_line(method: &Method, status: StatusCode) -> String {
    format!(
        "{} {} {}",
        method,
        status.as_u16(),
        status.canonical_reason().unwrap_or_default()
    )
}

pub fn print_probe_line(method: &Method, status: StatusCode) {
    let line = probe_line(method, status);
    println!("{}", line.as_str().color(probe::status_color(status)));
}
