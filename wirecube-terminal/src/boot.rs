/// Boot/intro sequence shown before the renderer takes over the screen
use std::io::{self, BufRead, Write};
use std::thread;
use std::time::Duration;

/// Staged boot messages, shown one at a time
pub const BOOT_MESSAGES: &[&str] = &[
    "INITIALIZING CORE...",
    "LOADING ASSETS...",
    "SYSTEM READY.",
];

/// Pause between boot messages
pub const MESSAGE_DELAY: Duration = Duration::from_millis(400);

/// Print the boot messages in order, pausing between them
pub fn play<W: Write>(writer: &mut W, delay: Duration) -> io::Result<()> {
    for message in BOOT_MESSAGES {
        writeln!(writer, "{}", message)?;
        writer.flush()?;
        thread::sleep(delay);
    }
    Ok(())
}

/// Block until the user presses enter
pub fn wait_for_enter<W: Write, R: BufRead>(writer: &mut W, reader: &mut R) -> io::Result<()> {
    write!(writer, "[ PRESS ENTER TO START ]")?;
    writer.flush()?;
    let mut line = String::new();
    reader.read_line(&mut line)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boot_messages_in_order() {
        let mut output = Vec::new();
        play(&mut output, Duration::ZERO).unwrap();

        let text = String::from_utf8(output).unwrap();
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(
            lines,
            vec!["INITIALIZING CORE...", "LOADING ASSETS...", "SYSTEM READY."]
        );
    }

    #[test]
    fn test_wait_for_enter_consumes_one_line() {
        let mut output = Vec::new();
        let mut input = &b"\nleftover"[..];
        wait_for_enter(&mut output, &mut input).unwrap();

        assert_eq!(input, b"leftover");
        assert!(String::from_utf8(output).unwrap().contains("PRESS ENTER"));
    }
}
