//! Authentication gate
//!
//! A plaintext equality check with a bounded number of attempts. This is a
//! demo gate, not a security boundary: no hashing, no lockout persistence.

use colored::*;

use crate::console::Console;
use crate::error::Result;

/// Ask for the password until it matches or the attempts run out
pub fn authenticate(console: &mut dyn Console, password: &str, max_attempts: u32) -> Result<bool> {
    console.say(&"⚠️  Authentication required".yellow().bold().to_string());

    let mut attempts = 0;
    while attempts < max_attempts {
        let entered = console.prompt_hidden("System password:")?;

        if entered == password {
            console.say(&"✅ Authenticated, welcome".green().bold().to_string());
            log::info!("Authentication succeeded after {} failed attempts", attempts);
            return Ok(true);
        }

        attempts += 1;
        let remaining = max_attempts - attempts;
        if remaining > 0 {
            console.say(
                &format!("❌ Wrong password, {} attempts remaining", remaining)
                    .red()
                    .bold()
                    .to_string(),
            );
        } else {
            console.say(&"⛔ Too many failed attempts, access denied".red().bold().to_string());
        }
    }

    log::warn!("Authentication failed after {} attempts", max_attempts);
    Ok(false)
}
