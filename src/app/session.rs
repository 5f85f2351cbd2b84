use crate::core::engine::PricingEngine;
use crate::core::{Result, SummaryRenderer};
use crate::domain::model::CallToAction;
use std::io::{BufRead, Write};

/// Line-driven front-end: every input line is a service id to toggle, and
/// the calculator is re-rendered after each one.
pub struct InteractiveSession<R: SummaryRenderer> {
    engine: PricingEngine,
    renderer: R,
    call_to_action: CallToAction,
}

impl<R: SummaryRenderer> InteractiveSession<R> {
    pub fn new(engine: PricingEngine, renderer: R, call_to_action: CallToAction) -> Self {
        Self {
            engine,
            renderer,
            call_to_action,
        }
    }

    pub fn engine(&self) -> &PricingEngine {
        &self.engine
    }

    /// Runs until `quit`, `exit` or end of input. `list` prints the catalog.
    pub fn run<I: BufRead, O: Write>(&mut self, input: I, mut output: O) -> Result<()> {
        writeln!(output, "{}", self.render()?)?;

        for line in input.lines() {
            let line = line?;
            let command = line.trim();
            match command {
                "" => continue,
                "quit" | "exit" => break,
                "list" => {
                    writeln!(output, "{}", self.renderer.render_catalog(self.engine.catalog())?)?;
                }
                id => {
                    let selected = self.engine.toggle(id);
                    tracing::info!(
                        "{} '{}'",
                        if selected { "Selected" } else { "Removed" },
                        id
                    );
                    writeln!(output, "{}", self.render()?)?;
                }
            }
            output.flush()?;
        }

        Ok(())
    }

    fn render(&self) -> Result<String> {
        self.renderer
            .render(&self.engine.view(&self.call_to_action))
    }
}
