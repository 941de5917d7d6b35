use app::catalog::{Accent, Icon, NavigationEntry, CATALOG};
use app::components::{CardGrid, GRID_CLASS};
use app::pages::home::Index;
use leptos::prelude::*;

fn setup() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn render_page() -> String {
    Owner::new().with(|| view! { <Index /> }.to_html())
}

fn render_grid(entries: &'static [NavigationEntry]) -> String {
    Owner::new().with(|| view! { <CardGrid entries=entries /> }.to_html())
}

/// Markup of each card, in document order.
fn cards(html: &str) -> Vec<&str> {
    html.split("data-position=\"").skip(1).collect()
}

static SINGLE: [NavigationEntry; 1] = [NavigationEntry {
    title: "Contact",
    description: "Say hello",
    url: "mailto:test@example.com",
    icon: Icon::Mail,
    accent: Accent { start: "from-orange-500", end: "to-red-500" },
}];

#[test]
fn one_card_per_entry_in_order() {
    setup();

    let html = render_page();
    let cards = cards(&html);
    assert_eq!(CATALOG.len(), cards.len());
    for (position, (card, entry)) in cards.iter().zip(CATALOG.entries()).enumerate() {
        assert!(card.starts_with(&format!("{position}\"")), "card #{position}");
        assert!(card.contains(entry.title), "{} missing from card #{position}", entry.title);
        assert!(card.contains(entry.description), "{} missing from card #{position}", entry.description);
        assert!(card.contains(entry.accent.start));
        assert!(card.contains(entry.accent.end));
        assert!(card.contains(entry.icon.markup()));
    }
}

#[test]
fn page_has_header_and_footer() {
    setup();

    let html = render_page();
    assert!(html.contains(app::site::TITLE));
    assert!(html.contains(app::site::TAGLINE));
    assert!(html.contains(app::site::OWNER));
    assert!(html.find(app::site::TITLE) < html.find("data-position"));
    assert!(html.rfind("data-position") < html.find(app::site::OWNER));
}

#[test]
fn rendering_is_idempotent() {
    setup();

    assert_eq!(render_page(), render_page());
}

#[test]
fn single_entry_renders_a_single_card() {
    setup();

    let html = render_grid(&SINGLE);
    let cards = cards(&html);
    assert_eq!(1, cards.len());
    assert!(cards[0].starts_with("0\""));
    assert!(cards[0].contains("Contact"));
    assert!(cards[0].contains("Say hello"));
}

#[test]
fn grid_columns_do_not_depend_on_entry_count() {
    setup();

    let grid = format!("class=\"{GRID_CLASS}\"");
    assert!(render_grid(&SINGLE).contains(&grid));
    assert!(render_grid(CATALOG.entries()).contains(&grid));
}

#[test]
fn cards_are_focusable_links() {
    setup();

    let html = render_grid(&SINGLE);
    assert!(html.contains("role=\"link\""));
    assert!(html.contains("tabindex=\"0\""));
    assert!(html.contains("aria-label=\"Contact\""));
}

#[derive(Clone, Default)]
struct Counter(std::sync::Arc<std::sync::atomic::AtomicUsize>);

impl app::links::Opener for Counter {
    fn open(&self, _request: &app::links::OpenRequest<'_>) {
        self.0.fetch_add(1, std::sync::atomic::Ordering::SeqCst);
    }
}

#[test]
fn rendering_never_opens_a_link() {
    setup();

    let counter = Counter::default();
    let html = Owner::new().with(|| {
        app::links::provide_opener(counter.clone());
        view! { <Index /> }.to_html()
    });
    assert_eq!(CATALOG.len(), cards(&html).len());
    assert_eq!(0, counter.0.load(std::sync::atomic::Ordering::SeqCst));
}
