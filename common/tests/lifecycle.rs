use pagenav_common::*;

/// Host that records everything the control asks it to do
#[derive(Default)]
struct RecordingHost {
    next_listener: u32,
    active: Vec<(u32, InputKind)>,
    installed: usize,
    renders: Vec<ViewTree>,
    events: Vec<PageChange>,
    focused: Vec<usize>,
}

impl Host for RecordingHost {
    type Listener = u32;

    fn listen(&mut self, kind: InputKind) -> u32 {
        self.next_listener += 1;
        self.installed += 1;
        self.active.push((self.next_listener, kind));
        self.next_listener
    }

    fn unlisten(&mut self, listener: u32) {
        self.active.retain(|(id, _)| *id != listener);
    }

    fn render(&mut self, view: &ViewTree) {
        self.renders.push(view.clone());
    }

    fn dispatch(&mut self, event: PageChange) {
        self.events.push(event);
    }

    fn focus(&mut self, control: usize) {
        self.focused.push(control);
    }
}

fn attached(total: &str, page_size: &str, current: &str) -> Pagination<RecordingHost> {
    let state = PaginationState::new(Some(total), Some(page_size), Some(current));
    let mut pager = Pagination::new(RecordingHost::default(), state);
    pager.attach();
    pager
}

fn pages(pager: &Pagination<RecordingHost>) -> Vec<u32> {
    pager.host().events.iter().map(|e| e.page).collect()
}

/// Click a control of the current view the way a DOM host would
fn click(pager: &mut Pagination<RecordingHost>, pick: impl Fn(&Control) -> bool) {
    let control = pager.view().controls.iter().find(|c| pick(c)).cloned().unwrap();
    let target = ClickTarget {
        page: control.target,
        disabled: control.aria_disabled(),
    };
    pager.handle(Input::Click(target));
}

fn kind(kind: ControlKind) -> impl Fn(&Control) -> bool {
    move |c| c.kind == kind
}

/// Control a screen reader announces as "Go to page N"
fn labelled(page: u32) -> impl Fn(&Control) -> bool {
    move |c| c.label == format!("Go to page {page}")
}

fn key(pager: &mut Pagination<RecordingHost>, key: &str) -> Outcome {
    pager.handle(Input::Key(KeyPress::plain(key)))
}

#[test]
fn accessors_reflect_attributes() {
    let pager = attached("100", "15", "3");
    assert_eq!(pager.total(), 100);
    assert_eq!(pager.page_size(), 15);
    assert_eq!(pager.current(), 3);
    assert_eq!(pager.total_pages(), 7);
    assert_eq!(pager.state().attribute(Attribute::PageSize), Some("15"));
}

#[test]
fn attach_installs_listeners_and_renders() {
    let pager = attached("50", "10", "3");
    assert_eq!(pager.phase(), Phase::Attached);
    assert_eq!(pager.host().active.len(), 2);
    assert_eq!(pager.host().renders.len(), 1);
    assert_eq!(pager.host().renders[0], *pager.view());
    assert!(pager.host().events.is_empty());
}

#[test]
fn click_page_then_first() {
    let mut pager = attached("50", "10", "3");

    click(&mut pager, labelled(5));
    assert_eq!(pages(&pager), [5]);
    assert_eq!(pager.current(), 5);
    assert_eq!(pager.state().attribute(Attribute::Current), Some("5"));

    click(&mut pager, kind(ControlKind::First));
    assert_eq!(pages(&pager), [5, 1]);
}

#[test]
fn click_last_page() {
    let mut pager = attached("50", "10", "3");
    click(&mut pager, kind(ControlKind::Last));
    assert_eq!(pages(&pager), [5]);
}

#[test]
fn jump_shortcuts() {
    let mut pager = attached("100", "10", "5");
    assert_eq!(pager.view().control(ControlKind::BackJump).unwrap().target, Some(2));
    assert_eq!(pager.view().control(ControlKind::ForwardJump).unwrap().target, Some(8));

    click(&mut pager, kind(ControlKind::ForwardJump));
    assert_eq!(pages(&pager), [8]);

    pager.set_attribute(Attribute::Current, "5");
    click(&mut pager, kind(ControlKind::BackJump));
    assert_eq!(pages(&pager), [8, 5, 2]);
}

#[test]
fn disabled_controls_are_inert() {
    let mut pager = attached("50", "10", "1");
    let first = pager.view().control(ControlKind::First).unwrap();
    assert!(first.disabled);

    click(&mut pager, kind(ControlKind::First));
    click(&mut pager, |c| c.current);
    // Stale marker on a disabled button
    pager.handle(Input::Click(ClickTarget::from_markers(Some("4"), None, true)));

    assert!(pager.host().events.is_empty());
    assert_eq!(pager.host().renders.len(), 1);

    let mut pager = attached("50", "10", "5");
    click(&mut pager, kind(ControlKind::Last));
    assert!(pager.host().events.is_empty());
}

#[test]
fn click_outside_of_button_does_nothing() {
    let mut pager = attached("50", "10", "3");
    pager.handle(Input::Click(ClickTarget::default()));
    assert!(pager.host().events.is_empty());
}

#[test]
fn key_outcome_is_known_before_handling() {
    // Listeners prevent the default action from `KeyPress::outcome` alone
    for name in ["ArrowLeft", "ArrowRight", "Home", "End", "Tab", "a"] {
        for ctrl in [false, true] {
            let mut pager = attached("50", "10", "1");
            let mut press = KeyPress::plain(name);
            press.ctrl = ctrl;
            let expected = press.outcome();
            assert_eq!(pager.handle(Input::Key(press)), expected, "{name} ctrl={ctrl}");
        }
    }
}

#[test]
fn arrow_left_on_first_page_is_dropped() {
    let mut pager = attached("50", "10", "1");
    assert_eq!(key(&mut pager, "ArrowLeft"), Outcome::Consumed);
    assert!(pager.host().events.is_empty());
    assert_eq!(pager.current(), 1);
}

#[test]
fn arrows_move_by_one() {
    let mut pager = attached("50", "10", "3");
    key(&mut pager, "ArrowRight");
    key(&mut pager, "ArrowRight");
    key(&mut pager, "ArrowRight");
    key(&mut pager, "ArrowLeft");
    assert_eq!(pages(&pager), [4, 5, 4]);
}

#[test]
fn home_then_end() {
    let mut pager = attached("50", "10", "3");
    assert_eq!(key(&mut pager, "Home"), Outcome::Consumed);
    assert_eq!(key(&mut pager, "End"), Outcome::Consumed);
    assert_eq!(pages(&pager), [1, 5]);

    // Already there
    key(&mut pager, "End");
    assert_eq!(pages(&pager), [1, 5]);
}

#[test]
fn tab_and_modified_keys_pass_through() {
    let mut pager = attached("50", "10", "3");
    assert_eq!(key(&mut pager, "Tab"), Outcome::Ignored);

    let mut press = KeyPress::plain("Home");
    press.alt = true;
    assert_eq!(pager.handle(Input::Key(press)), Outcome::Ignored);

    assert!(pager.host().events.is_empty());
}

#[test]
fn same_value_write_emits_nothing() {
    let mut pager = attached("50", "10", "3");
    pager.set_attribute(Attribute::Current, "3");
    pager.set_current(3);
    pager.set_current(3);
    assert!(pager.host().events.is_empty());
    assert_eq!(pager.host().renders.len(), 1);
}

#[test]
fn host_writes_notify_once() {
    let mut pager = attached("50", "10", "3");
    pager.set_attribute(Attribute::Current, "4");
    pager.set_attribute(Attribute::Current, "4");
    pager.set_attribute(Attribute::Current, "4");
    assert_eq!(pages(&pager), [4]);
    // Host writes don't steal focus
    assert!(pager.host().focused.is_empty());
}

#[test]
fn string_exact_comparison() {
    let mut pager = attached("50", "10", "3");
    // Same page, different text
    pager.set_attribute(Attribute::Current, "03");
    assert_eq!(pages(&pager), [3]);
    assert_eq!(pager.host().renders.len(), 2);
}

#[test]
fn size_changes_rerender_without_event() {
    let mut pager = attached("50", "10", "3");
    pager.set_attribute(Attribute::Total, "100");
    pager.set_attribute(Attribute::PageSize, "5");
    assert!(pager.host().events.is_empty());
    assert_eq!(pager.host().renders.len(), 3);
    assert_eq!(pager.total_pages(), 20);
    assert_eq!(pager.view().status, "Page 3 of 20");
}

#[test]
fn removing_current_falls_back_to_first_page() {
    let mut pager = attached("50", "10", "3");
    pager.remove_attribute(Attribute::Current);
    assert_eq!(pages(&pager), [1]);
    assert_eq!(pager.state().attribute(Attribute::Current), None);

    pager.remove_attribute(Attribute::Current);
    assert_eq!(pages(&pager), [1]);
}

#[test]
fn notification_follows_render() {
    let mut pager = attached("50", "10", "3");
    click(&mut pager, labelled(4));
    let last = pager.host().renders.last().unwrap();
    assert_eq!(last.current_control().unwrap().text, "4");
    assert_eq!(last.status, "Page 4 of 5");
}

#[test]
fn single_tab_stop_after_every_render() {
    let mut pager = attached("100", "10", "1");
    for _ in 0..12 {
        key(&mut pager, "ArrowRight");
    }
    key(&mut pager, "Home");

    for view in &pager.host().renders {
        let stops: Vec<_> = view.controls.iter().filter(|c| c.is_tab_stop()).collect();
        assert_eq!(stops.len(), 1);
        assert!(stops[0].current);
    }
}

#[test]
fn focus_follows_user_input() {
    let mut pager = attached("50", "10", "3");
    click(&mut pager, labelled(4));
    let view = pager.view();
    let idx = view.tab_stop.unwrap();
    assert!(view.controls[idx].current);
    assert_eq!(pager.host().focused, [idx]);

    // No-op key doesn't leave focus pending for later host writes
    key(&mut pager, "ArrowRight");
    key(&mut pager, "End");
    pager.set_attribute(Attribute::Current, "2");
    assert_eq!(pager.host().focused.len(), 2);
}

#[test]
fn reattach_does_not_duplicate_listeners() {
    let mut pager = attached("50", "10", "3");
    pager.attach();
    pager.attach();
    assert_eq!(pager.host().active.len(), 2);
    assert_eq!(pager.host().installed, 2);

    pager.detach();
    assert_eq!(pager.phase(), Phase::Detached);
    assert!(pager.host().active.is_empty());

    pager.attach();
    assert_eq!(pager.host().active.len(), 2);

    click(&mut pager, labelled(5));
    assert_eq!(pages(&pager), [5]);
}

#[test]
fn detached_control_keeps_state_quietly() {
    let mut pager = attached("50", "10", "3");
    pager.detach();
    let renders = pager.host().renders.len();

    pager.set_attribute(Attribute::Current, "4");
    assert!(pager.host().events.is_empty());
    assert_eq!(pager.host().renders.len(), renders);
    assert_eq!(pager.current(), 4);

    // Input can't arrive without listeners
    assert_eq!(key(&mut pager, "Home"), Outcome::Ignored);
    assert_eq!(pager.current(), 4);

    pager.attach();
    let last = pager.host().renders.last().unwrap();
    assert_eq!(last.current_control().unwrap().text, "4");
}

#[test]
fn out_of_range_current_renders() {
    let mut pager = attached("50", "10", "3");
    pager.set_attribute(Attribute::Current, "42");
    assert_eq!(pages(&pager), [42]);

    let view = pager.view();
    assert!(view.current_control().is_none());
    assert_eq!(view.tab_stop, Some(0));

    click(&mut pager, kind(ControlKind::Last));
    assert_eq!(pages(&pager), [42, 5]);
}

#[test]
fn empty_set_is_inert() {
    let mut pager = attached("0", "10", "1");
    assert_eq!(pager.total_pages(), 0);
    assert_eq!(pager.view().status, "No pages");

    let stops: Vec<_> = pager.view().controls.iter().filter(|c| c.is_tab_stop()).collect();
    assert_eq!(stops.len(), 1);
    assert_eq!(stops[0].kind, ControlKind::Last);

    click(&mut pager, kind(ControlKind::First));
    click(&mut pager, kind(ControlKind::Last));
    // Markers as the DOM host reads them off the focusable last arrow
    pager.handle(Input::Click(ClickTarget::from_markers(None, Some("true"), false)));
    key(&mut pager, "End");
    key(&mut pager, "ArrowRight");
    assert!(pager.host().events.is_empty());
    assert_eq!(pager.host().renders.len(), 1);
}

#[test]
fn payload_wire_format() {
    let mut pager = attached("50", "10", "3");
    click(&mut pager, labelled(5));
    let json = serde_json::to_string(&pager.host().events[0]).unwrap();
    assert_eq!(json, r#"{"page":5}"#);
    assert_eq!(PAGE_CHANGE_EVENT, "page-change");
}
