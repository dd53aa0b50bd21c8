//! Core utilities and shared types

use derive_new::new;
use minus::Pager;
use std::io::{self, Write};

/// Environment variable that disables paging when set
pub const NO_PAGER_VAR: &str = "NO_PAGER";

/// Wrapper that implements `Write` for the minus pager
///
/// The minus pager doesn't implement `std::io::Write` directly, so this wrapper
/// lets `log` write into the pager like into any other writer.
///
/// ## Usage
///
/// ```ignore
/// let pager = Pager::new();
/// let mut writer = PagerWriter::new(pager.clone());
/// writeln!(writer, "Some long output...")?;
/// minus::page_all(pager)?;
/// ```
#[derive(new)]
pub struct PagerWriter {
    pager: Pager,
}

impl Write for PagerWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let s = String::from_utf8_lossy(buf);
        self.pager.push_str(s).map_err(io::Error::other)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}
