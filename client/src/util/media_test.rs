use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use super::*;

#[derive(Clone, Default)]
struct FakeDocument {
    elements: Rc<RefCell<Vec<&'static str>>>,
    paused: Rc<RefCell<Vec<&'static str>>>,
    play_listeners: Rc<RefCell<HashMap<&'static str, Vec<Rc<dyn Fn()>>>>>,
}

impl FakeDocument {
    fn with(elements: &[&'static str]) -> Self {
        let doc = Self::default();
        doc.elements.borrow_mut().extend_from_slice(elements);
        doc
    }

    fn play(&self, element: &'static str) {
        let listeners = self.play_listeners.borrow().get(element).cloned().unwrap_or_default();
        for listener in listeners {
            listener();
        }
    }

    fn paused(&self) -> Vec<&'static str> {
        self.paused.borrow().clone()
    }

    fn listener_count(&self, element: &'static str) -> usize {
        self.play_listeners.borrow().get(element).map_or(0, Vec::len)
    }
}

impl MediaHost for FakeDocument {
    type Element = &'static str;

    fn media_elements(&self) -> Vec<Self::Element> {
        self.elements.borrow().clone()
    }

    fn pause(&self, element: &Self::Element) {
        self.paused.borrow_mut().push(*element);
    }

    fn on_play(&self, element: &Self::Element, callback: Box<dyn Fn()>) -> ListenerHandle {
        self.play_listeners.borrow_mut().entry(*element).or_default().push(Rc::from(callback));
        ListenerHandle::new(|| {})
    }
}

#[test]
fn playing_one_pauses_the_others() {
    let doc = FakeDocument::with(&["a", "b", "c"]);
    let _exclusive = pause_others(&doc, &"a");

    doc.play("a");

    assert_eq!(doc.paused(), vec!["b", "c"]);
}

#[test]
fn nothing_happens_before_play() {
    let doc = FakeDocument::with(&["a", "b"]);
    let _exclusive = pause_others(&doc, &"a");
    assert!(doc.paused().is_empty());
}

#[test]
fn unbound_element_playing_pauses_nothing() {
    let doc = FakeDocument::with(&["a", "b", "c"]);
    let _exclusive = pause_others(&doc, &"a");

    doc.play("b");

    assert!(doc.paused().is_empty());
}

#[test]
fn each_play_rescans_the_document() {
    let doc = FakeDocument::with(&["a", "b"]);
    let _exclusive = pause_others(&doc, &"a");
    doc.play("a");

    doc.elements.borrow_mut().push("late");
    doc.paused.borrow_mut().clear();
    doc.play("a");

    assert_eq!(doc.paused(), vec!["b", "late"]);
}

#[test]
fn mutual_listeners_pause_whichever_did_not_start() {
    let doc = FakeDocument::with(&["a", "b", "c"]);
    let _a = pause_others(&doc, &"a");
    let _c = pause_others(&doc, &"c");

    doc.play("c");

    assert_eq!(doc.paused(), vec!["a", "b"]);
}

#[test]
fn destroy_leaves_listener_bound() {
    let doc = FakeDocument::with(&["a", "b"]);
    pause_others(&doc, &"a").destroy();

    doc.play("a");

    assert_eq!(doc.paused(), vec!["b"]);
}

#[test]
fn one_bind_attaches_one_play_listener() {
    let doc = FakeDocument::with(&["a", "b", "c"]);
    let _exclusive = pause_others(&doc, &"a");

    assert_eq!(doc.listener_count("a"), 1);
    assert_eq!(doc.listener_count("b"), 0);

    doc.play("a");
    doc.play("a");
    assert_eq!(doc.paused(), vec!["b", "c", "b", "c"]);
}

#[test]
fn pause_siblings_counts_paused_elements() {
    let doc = FakeDocument::with(&["x", "y", "z"]);
    assert_eq!(pause_siblings(&doc, &"y"), 2);
    assert_eq!(pause_siblings(&FakeDocument::with(&["solo"]), &"solo"), 0);
}
