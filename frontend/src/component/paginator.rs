use anyhow::{anyhow, Context as _};
use gloo::events::{EventListener, EventListenerOptions};
use tracing::{trace, warn};
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, KeyboardEvent};
use yew::html::Scope;

use super::prelude::*;

#[derive(Properties, PartialEq)]
pub struct Props {
    /// `total` attribute
    #[prop_or_default]
    pub total: Option<AttrValue>,
    /// `page-size` attribute
    #[prop_or_default]
    pub page_size: Option<AttrValue>,
    /// `current` attribute
    #[prop_or_default]
    pub current: Option<AttrValue>,
    /// Receives `page-change` notifications
    #[prop_or_default]
    pub onpagechange: Callback<PageChange>,
}

impl Props {
    fn attribute(&self, attr: Attribute) -> Option<&str> {
        match attr {
            Attribute::Total => self.total.as_deref(),
            Attribute::PageSize => self.page_size.as_deref(),
            Attribute::Current => self.current.as_deref(),
        }
    }
}

pub enum Msg {
    /// Input delivered by a root listener
    Input(Input),
}

/// DOM side of the control: root node, listeners, event sink and focus
pub struct DomHost {
    root: NodeRef,
    link: Scope<Paginator>,
    onpagechange: Callback<PageChange>,
    /// Control to focus after next render
    focus: Option<usize>,
    /// View changed since last yew render
    dirty: bool,
}

impl DomHost {
    fn take_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }
}

/// Closest button around event target
fn target_button(event: &Event) -> Option<Element> {
    event.target()?
        .dyn_into::<Element>()
        .ok()?
        .closest("button")
        .ok()?
}

fn click_target(event: &Event) -> ClickTarget {
    match target_button(event) {
        Some(button) => ClickTarget::from_markers(
            button.get_attribute("data-target").as_deref(),
            button.get_attribute("aria-disabled").as_deref(),
            button.has_attribute("disabled"),
        ),
        None => ClickTarget::default(),
    }
}

fn key_press(event: &Event) -> Option<KeyPress> {
    // Keys typed outside of the buttons are not ours
    target_button(event)?;
    let event = event.dyn_ref::<KeyboardEvent>()?;
    Some(KeyPress {
        key: event.key().as_str().into(),
        alt: event.alt_key(),
        ctrl: event.ctrl_key(),
        meta: event.meta_key(),
    })
}

impl Host for DomHost {
    /// `None` if root is not mounted
    type Listener = Option<EventListener>;

    fn listen(&mut self, kind: InputKind) -> Self::Listener {
        let Some(root) = self.root.cast::<Element>() else {
            warn!(?kind, "paginator root is not mounted");
            return None;
        };

        let link = self.link.clone();
        let listener = match kind {
            InputKind::Click => EventListener::new(&root, kind.event_type(), move |ev| {
                link.send_message(Msg::Input(Input::Click(click_target(ev))));
            }),
            InputKind::Key => EventListener::new_with_options(
                &root,
                kind.event_type(),
                EventListenerOptions::enable_prevent_default(),
                move |ev| {
                    let Some(press) = key_press(ev) else { return };
                    // Decided here, update runs after this handler returns
                    if press.outcome() == Outcome::Consumed {
                        ev.prevent_default();
                    }
                    link.send_message(Msg::Input(Input::Key(press)));
                },
            ),
        };
        Some(listener)
    }

    fn unlisten(&mut self, listener: Self::Listener) {
        // Removed from the node on drop
        drop(listener);
    }

    fn render(&mut self, _view: &ViewTree) {
        // Page change fires before yew patches the DOM, so only mark for `update`/`changed`
        self.dirty = true;
    }

    fn dispatch(&mut self, event: PageChange) {
        self.onpagechange.emit(event);
    }

    fn focus(&mut self, control: usize) {
        self.focus = Some(control);
    }
}

/// Focus n-th button under root
fn focus_control(root: &NodeRef, idx: usize) -> anyhow::Result<()> {
    let root = root.cast::<Element>().context("root is not mounted")?;
    let buttons = root
        .query_selector_all("ol button")
        .map_err(|e| anyhow!("query failed: {e:?}"))?;
    let button = buttons
        .item(idx as u32)
        .context("no such button")?
        .dyn_into::<HtmlElement>()
        .map_err(|_| anyhow!("not an html element"))?;
    button.focus().map_err(|e| anyhow!("focus failed: {e:?}"))
}

/// Pagination control.
/// Props act as attributes: a changed prop is an external attribute write.
pub struct Paginator {
    pager: Pagination<DomHost>,
}

impl Component for Paginator {
    type Message = Msg;

    type Properties = Props;

    fn create(ctx: &Context<Self>) -> Self {
        let props = ctx.props();
        let state = PaginationState::new(
            props.total.as_deref(),
            props.page_size.as_deref(),
            props.current.as_deref(),
        );
        let host = DomHost {
            root: NodeRef::default(),
            link: ctx.link().clone(),
            onpagechange: props.onpagechange.clone(),
            focus: None,
            dirty: false,
        };
        Self { pager: Pagination::new(host, state) }
    }

    fn view(&self, _ctx: &Context<Self>) -> Html {
        let view = self.pager.view();

        let items = view.controls
            .iter()
            .map(|control| {
                let label = AttrValue::from(control.label.clone());
                let data_target = control.target.map(|page| page.to_string());
                let aria_current = control.current.then_some("page");
                let aria_disabled = control.aria_disabled().then_some("true");
                let tabindex = control.tab_index.to_string();
                html! {
                    <li>
                        <button
                            type="button"
                            aria-label={label.clone()}
                            title={label}
                            aria-current={aria_current}
                            aria-disabled={aria_disabled}
                            data-target={data_target}
                            disabled={control.disabled}
                            {tabindex}>
                            if let Some(description) = &control.description {
                                <span aria-hidden="true">{ &control.text }</span>
                                <span class="sr-only">{ description }</span>
                            } else {
                                { &control.text }
                            }
                        </button>
                    </li>
                }
            });

        html! {
            <nav aria-label={view.label} ref={self.pager.host().root.clone()}>
                <ol>
                    { for items }
                </ol>
                <p class="sr-only" aria-live="polite">{ &view.status }</p>
            </nav>
        }
    }

    fn rendered(&mut self, _ctx: &Context<Self>, first_render: bool) {
        if first_render {
            self.pager.attach();
            // Initial view is already mounted
            self.pager.host_mut().take_dirty();
        }

        let host = self.pager.host_mut();
        if let Some(idx) = host.focus.take() {
            if let Err(e) = focus_control(&host.root, idx) {
                warn!(?e, idx, "failed to focus control");
            }
        }
    }

    fn changed(&mut self, ctx: &Context<Self>, old_props: &Self::Properties) -> bool {
        let props = ctx.props();
        self.pager.host_mut().onpagechange = props.onpagechange.clone();

        for attr in Attribute::observed() {
            let value = props.attribute(attr);
            if value == old_props.attribute(attr) {
                continue;
            }
            match value {
                Some(value) => self.pager.set_attribute(attr, value),
                None => self.pager.remove_attribute(attr),
            }
        }
        self.pager.host_mut().take_dirty()
    }

    fn update(&mut self, _ctx: &Context<Self>, msg: Self::Message) -> bool {
        match msg {
            Msg::Input(input) => {
                let outcome = self.pager.handle(input);
                trace!(?outcome, "handled input");
            }
        }
        self.pager.host_mut().take_dirty()
    }

    fn destroy(&mut self, _ctx: &Context<Self>) {
        self.pager.detach();
    }
}
