mod common;

use common::{open_session, sample_store, search_value, FlakyStore, THEME};
use std::sync::atomic::Ordering;
use rolodex::app::{Action, Event, HistoryMode, LinkState, Location, Session};
use rolodex::routes::OutletData;
use rolodex::storage::{ContactStore, MemoryStorage};
use rolodex::ui::OutletView;

fn search(session: &mut Session, value: &str) {
    session
        .dispatch(Event::SearchInput {
            value: value.to_string(),
        })
        .unwrap();
}

#[test]
fn search_input_matches_url_query_after_navigation() {
    for (href, expected) in [
        ("/", ""),
        ("/?q=ada", "ada"),
        ("/?q=", ""),
        ("/contacts/1?q=grace+hopper", "grace hopper"),
    ] {
        let mut session = open_session("/contacts/2");
        session
            .dispatch(Event::FollowLink {
                href: href.to_string(),
            })
            .unwrap();
        session.settle().unwrap();

        assert_eq!(session.state().search_input, expected, "navigating to {href}");
        assert_eq!(search_value(&session.render()).as_deref(), Some(expected));
    }
}

#[test]
fn first_search_pushes_and_later_searches_replace() {
    let mut session = open_session("/");

    search(&mut session, "a");
    session.settle().unwrap();
    search(&mut session, "ad");
    session.settle().unwrap();
    search(&mut session, "ada");
    session.settle().unwrap();

    let hrefs: Vec<String> = session
        .state()
        .history
        .entries()
        .iter()
        .map(Location::href)
        .collect();
    assert_eq!(hrefs, vec!["/", "/?q=ada"]);
}

#[test]
fn searching_indicator_tracks_pending_query_navigation() {
    let mut session = open_session("/");
    assert!(!session.state().searching());

    search(&mut session, "gr");
    assert!(session.state().searching());
    let html = session.render();
    assert!(html.contains("input input-bordered bg-gray-200"));
    assert!(html.contains(r#"<div aria-hidden="true" id="search-spinner"></div>"#));

    session.settle().unwrap();
    assert!(!session.state().searching());
    let html = session.render();
    assert!(html.contains(r#"class="input input-bordered""#));
    assert!(html.contains(r#"id="search-spinner" hidden"#));
}

#[test]
fn navigation_without_query_is_not_searching() {
    let mut session = open_session("/");
    session
        .dispatch(Event::FollowLink {
            href: "/contacts/1".to_string(),
        })
        .unwrap();

    assert!(session.state().navigation.is_some());
    assert!(!session.state().searching());
    assert_eq!(session.state().link_state("/contacts/1"), LinkState::Pending);
}

#[test]
fn stale_results_are_discarded() {
    let mut session = open_session("/");
    search(&mut session, "a");
    search(&mut session, "gr");
    assert_eq!(session.in_flight().len(), 2);

    // Completes the superseded "a" search first.
    session.step().unwrap();
    assert!(session.state().searching());
    assert_eq!(session.state().location, Location::root());

    session.step().unwrap();
    let state = session.state();
    assert_eq!(state.location.query.as_deref(), Some("gr"));
    assert_eq!(state.data.contacts.len(), 1);
    assert_eq!(state.data.contacts[0].first.as_deref(), Some("Grace"));
    assert_eq!(state.history.len(), 2);
}

#[test]
fn new_contact_lands_on_its_edit_view() {
    let mut session = Session::open(Box::new(MemoryStorage::new()), "/", THEME).unwrap();

    session.dispatch(Event::SubmitNewContact).unwrap();
    assert!(matches!(
        session.in_flight().front(),
        Some(Action::Submit { .. })
    ));
    session.settle().unwrap();

    let contacts = session.store().list_contacts(None).unwrap();
    assert_eq!(contacts.len(), 1);
    let created = &contacts[0];
    assert!(created.first.is_none());
    assert!(created.last.is_none());
    assert!(!created.favorite);

    let state = session.state();
    assert_eq!(state.location.path, format!("/contacts/{}/edit", created.id));
    assert_eq!(state.outlet, OutletData::EditContact(created.clone()));
    assert_eq!(state.history.len(), 2);
    assert_eq!(state.link_state(&created.href()), LinkState::Active);
}

#[test]
fn empty_list_shows_no_contacts_message() {
    let session = Session::open(Box::new(MemoryStorage::new()), "/", THEME).unwrap();
    let html = session.render();

    assert!(html.contains("No contacts"));
    assert!(!html.contains("<li>"));
}

#[test]
fn search_without_matches_shows_no_contacts_message() {
    let mut session = open_session("/");
    search(&mut session, "zzz");
    session.settle().unwrap();

    let vm = session.state().compute_viewmodel();
    assert!(vm.contacts.is_empty());
    assert!(vm.empty_state.is_some());
}

#[test]
fn list_renders_names_stars_and_placeholders() {
    let session = open_session("/");
    let html = session.render();

    assert!(html.contains(r#"Ada Lovelace <span class="ml-4">★</span>"#));
    assert!(html.contains(">Grace Hopper</a>"));
    assert!(html.contains("<i>No Name</i>"));

    // Ordered by last name; the nameless contact sorts first.
    let nameless = html.find("<i>No Name</i>").unwrap();
    let hopper = html.find("Grace Hopper").unwrap();
    let lovelace = html.find("Ada Lovelace").unwrap();
    assert!(nameless < hopper && hopper < lovelace);
}

#[test]
fn search_form_reports_history_mode() {
    let mut session = open_session("/");
    assert!(session.render().contains(r#"data-history="push""#));

    search(&mut session, "a");
    session.settle().unwrap();
    assert!(session.render().contains(r#"data-history="replace""#));
}

#[test]
fn back_and_forward_restore_search_input() {
    let mut session = open_session("/");
    search(&mut session, "ada");
    session.settle().unwrap();

    session.dispatch(Event::Back).unwrap();
    session.settle().unwrap();
    assert_eq!(session.state().search_input, "");
    assert_eq!(session.state().history.len(), 2);

    session.dispatch(Event::Forward).unwrap();
    session.settle().unwrap();
    assert_eq!(session.state().search_input, "ada");
    assert_eq!(
        session.state().navigation.as_ref().map(|n| n.history_mode),
        None
    );
}

#[test]
fn unknown_contact_renders_error_outlet() {
    let mut session = open_session("/");
    session
        .dispatch(Event::FollowLink {
            href: "/contacts/missing".to_string(),
        })
        .unwrap();
    session.settle().unwrap();

    let state = session.state();
    assert_eq!(state.location, Location::root());
    assert!(matches!(
        state.compute_viewmodel().outlet,
        OutletView::Error { .. }
    ));
    assert!(session.render().contains(r#"id="error-page""#));
}

#[test]
fn opening_unknown_contact_fails() {
    let err = Session::open(Box::new(sample_store()), "/contacts/missing", THEME).unwrap_err();
    assert!(err.is_not_found());
}

#[test]
fn redirect_history_mode_is_push() {
    let mut session = open_session("/?q=ada");
    session.dispatch(Event::SubmitNewContact).unwrap();
    session.step().unwrap();

    let pending = session.state().navigation.as_ref().unwrap();
    assert_eq!(pending.history_mode, HistoryMode::Push);
    assert!(pending.location.path.ends_with("/edit"));
}

#[test]
fn failed_back_keeps_pre_search_entry() {
    let (store, down) = FlakyStore::new(sample_store());
    let mut session = Session::open(Box::new(store), "/", THEME).unwrap();
    search(&mut session, "a");
    session.settle().unwrap();

    down.store(true, Ordering::SeqCst);
    session.dispatch(Event::Back).unwrap();
    session.settle().unwrap();
    assert!(session.state().error.is_some());
    assert_eq!(session.state().history.current(), &session.state().location);

    down.store(false, Ordering::SeqCst);
    search(&mut session, "ab");
    session.settle().unwrap();

    let hrefs: Vec<String> = session
        .state()
        .history
        .entries()
        .iter()
        .map(Location::href)
        .collect();
    assert_eq!(hrefs, vec!["/", "/?q=ab"]);

    session.dispatch(Event::Back).unwrap();
    session.settle().unwrap();
    assert_eq!(session.state().location, Location::root());
    assert_eq!(session.state().search_input, "");
}

#[test]
fn new_contact_from_search_shows_searching() {
    let mut session = open_session("/?q=ada");
    session.dispatch(Event::SubmitNewContact).unwrap();

    assert!(session.state().searching());
    assert!(session.render().contains(r#"id="search-spinner"></div>"#));

    session.settle().unwrap();
    assert!(!session.state().searching());
    assert!(session.state().location.path.ends_with("/edit"));
}
