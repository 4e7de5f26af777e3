mod app;
mod config;
mod log;
mod page;
mod component;

use std::rc::Rc;

use app::{App, AppProps};
use config::DemoConfig;
use tracing::info;

fn main() -> anyhow::Result<()> {
    console_error_panic_hook::set_once();

    let config = DemoConfig::load()?;
    log::init(&config)?;
    info!(instances = config.instances.len(), "starting demo");

    yew::Renderer::<App>::with_props(AppProps { config: Rc::new(config) }).render();
    Ok(())
}
