use crate::app::renderers::{JsonRenderer, TextRenderer};
use crate::app::session::InteractiveSession;
use crate::config::{CliConfig, OutputFormat};
use crate::core::engine::PricingEngine;
use crate::core::{Result, SummaryRenderer};
use crate::utils::validation::Validate;
use std::io::{BufRead, Write};

/// One command-line invocation: validate the flags, load the catalog, apply
/// `--select` toggles in order, then print the cards, the calculator, or run
/// the interactive session over `input`.
pub fn run<I: BufRead, O: Write>(config: &CliConfig, input: I, mut output: O) -> Result<()> {
    config.validate()?;

    let source = config.catalog_source()?;
    let catalog = source.load_catalog()?;
    let discount = source.bundle_discount()?;
    let call_to_action = source.call_to_action();
    tracing::info!(
        services = catalog.len(),
        discount_percent = %discount.percent().normalize(),
        "Catalog loaded"
    );

    let renderer: Box<dyn SummaryRenderer> = match config.format {
        OutputFormat::Text => Box::new(TextRenderer::new()),
        OutputFormat::Json => Box::new(JsonRenderer),
    };

    if config.list {
        writeln!(output, "{}", renderer.render_catalog(&catalog)?)?;
        return Ok(());
    }

    let mut engine = PricingEngine::with_discount(catalog, discount);
    for id in &config.select {
        engine.toggle(id.trim());
    }

    if config.interactive {
        let mut session = InteractiveSession::new(engine, renderer, call_to_action);
        return session.run(input, output);
    }

    writeln!(output, "{}", renderer.render(&engine.view(&call_to_action))?)?;
    Ok(())
}
