//! Login command - browser login and token paste.
//!
//! Opens the hosted login page, then asks the user to paste the token they
//! received (simulating a device flow) and caches it locally.

use std::io::{self, BufRead, IsTerminal};

use dialoguer::Input;
use tracing::debug;

use crate::cli::output;
use crate::core::constants;
use crate::core::credentials::{CredentialStore, FileCredentials};
use crate::error::Result;

/// Try to open a URL in the default browser.
fn open_browser(url: &str) -> io::Result<()> {
    let (program, args): (&str, Vec<&str>) = if cfg!(target_os = "windows") {
        ("rundll32", vec!["url.dll,FileProtocolHandler", url])
    } else if cfg!(target_os = "macos") {
        ("open", vec![url])
    } else {
        ("xdg-open", vec![url])
    };

    debug!("launching {} for {}", program, url);
    std::process::Command::new(program).args(args).spawn()?;
    Ok(())
}

/// Read the pasted token, interactively or from piped stdin.
fn read_token() -> Result<String> {
    if io::stdin().is_terminal() {
        let token: String = Input::new()
            .with_prompt("Paste the token you received after logging in")
            .interact_text()?;
        Ok(token)
    } else {
        let mut token = String::new();
        io::stdin().lock().read_line(&mut token)?;
        Ok(token)
    }
}

/// Login via browser and save the pasted token.
pub fn execute() -> Result<()> {
    println!("Opening login page in browser...");

    if open_browser(constants::LOGIN_URL).is_err() {
        println!("Please open the following URL: {}", constants::LOGIN_URL);
    }

    let token = read_token()?;

    let store = FileCredentials::from_home()?;
    store.save(&token)?;

    output::success("logged in successfully");
    Ok(())
}
