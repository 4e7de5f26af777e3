use gloo::timers::callback::Interval;
use tracing::info;

use crate::{component::paginator::Paginator, config::{Instance, DemoConfig}};

use super::prelude::*;

#[derive(Properties, PartialEq)]
pub struct InstanceProps {
    pub instance: Instance,
    pub tick_ms: u32,
}

/// Single paginator, optionally driven by a host ticker
#[function_component]
pub fn DemoInstance(props: &InstanceProps) -> Html {
    let instance = &props.instance;
    let current = use_state(|| instance.current.clone().map(AttrValue::from));

    {
        let current = current.clone();
        let ticker = instance.ticker;
        let start = instance.current
            .as_deref()
            .and_then(|c| c.parse().ok())
            .unwrap_or(1);
        use_effect_with_deps(move |&tick_ms| {
            // Ticker tracks its own page, like a host script would
            let interval = ticker.map(|ticker| {
                let mut page = start;
                Interval::new(tick_ms, move || {
                    page = ticker.next(page);
                    current.set(Some(page.to_string().into()));
                })
            });
            move || drop(interval)
        }, props.tick_ms);
    }

    let onpagechange = {
        let id = instance.id.clone();
        Callback::from(move |change: PageChange| {
            info!(id, page = change.page, "{PAGE_CHANGE_EVENT}");
        })
    };

    html! {
        <section class="demo-instance" id={instance.id.clone()}>
            <h2>{ &instance.title }</h2>
            <Paginator
                total={instance.total.clone().map(AttrValue::from)}
                page_size={instance.page_size.clone().map(AttrValue::from)}
                current={(*current).clone()}
                {onpagechange}
            />
        </section>
    }
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub config: Rc<DemoConfig>,
}

/// All configured instances
#[function_component]
pub fn DemoPage(props: &Props) -> Html {
    let tick_ms = props.config.tick_ms;
    let instances = props.config.instances
        .iter()
        .map(|instance| html! {
            <DemoInstance key={instance.id.clone()} instance={instance.clone()} {tick_ms} />
        });

    html! {
        <div class="demo-page">
            { for instances }
        </div>
    }
}
