//! JSON mode: the payload verbatim, pretty-printed with two-space indent.

use std::io::{self, Write};

use serde_json::Value;

pub fn render_json<W: Write>(out: &mut W, payload: &Value) -> io::Result<()> {
    serde_json::to_writer_pretty(&mut *out, payload)?;
    writeln!(out)
}
