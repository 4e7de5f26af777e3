use crate::component::prelude::*;
use crate::config::DemoConfig;
use crate::page::demo::DemoPage;

#[derive(Properties, PartialEq)]
pub struct AppProps {
    pub config: Rc<DemoConfig>,
}

#[function_component]
pub fn App(props: &AppProps) -> Html {
    html! {
        <main>
            <h1>{ "pagenav" }</h1>
            <DemoPage config={props.config.clone()} />
        </main>
    }
}
