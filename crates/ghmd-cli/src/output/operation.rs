// SPDX-License-Identifier: Apache-2.0

use std::io::{self, Write};

use crate::cli::OutputContext;
use crate::commands::types::OperationResult;

use super::Renderable;

impl Renderable for OperationResult {
    fn render_text(&self, w: &mut dyn Write, _ctx: &OutputContext) -> io::Result<()> {
        writeln!(w, "{}", self.output)
    }
}
